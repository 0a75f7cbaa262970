//! Resource content reading.

use std::io::{self, Read};
use std::sync::Arc;

use crate::encoding;
use crate::error::{ResourceError, Result};

use super::accessor::ResourceAccessor;

/// Reads the content of a resource into a `String`.
///
/// One accessor, bound at construction; one stream per call, opened and
/// released inside the call. Nothing is cached: calling twice re-resolves
/// and re-decodes, and may observe a changed resource.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use resource_text::{ContentReader, MemoryAccessor};
///
/// let accessor = MemoryAccessor::new();
/// accessor.insert("notes.txt", "resolved on demand");
///
/// let reader = ContentReader::new(Arc::new(accessor));
/// let text = reader.file_content("notes.txt", Some("UTF-8"))?;
/// assert_eq!(text, "resolved on demand");
/// # Ok::<(), resource_text::ResourceError>(())
/// ```
#[derive(Clone)]
pub struct ContentReader {
    accessor: Arc<dyn ResourceAccessor>,
}

impl ContentReader {
    /// Create a reader resolving through the given accessor.
    pub fn new(accessor: Arc<dyn ResourceAccessor>) -> Self {
        Self { accessor }
    }

    /// The accessor this reader resolves through.
    pub fn accessor(&self) -> &Arc<dyn ResourceAccessor> {
        &self.accessor
    }

    /// Read the resource at `path` and decode it to text.
    ///
    /// `encoding` names a character encoding as a WHATWG label, for example
    /// `"UTF-8"` or `"ISO-8859-1"`; `None` means the platform default
    /// encoding in effect at call time. Decoding does not check that the
    /// encoding matches the bytes: a mismatched encoding yields garbled
    /// text with U+FFFD replacements, never an error.
    ///
    /// Exactly one stream is opened per call and released before this
    /// method returns, on every path. A close failure after a successful
    /// read is reported as [`ResourceError::CloseFailed`]; a close failure
    /// after a failed read is logged and suppressed so the read fault is
    /// not masked.
    pub fn file_content(&self, path: &str, encoding: Option<&str>) -> Result<String> {
        // Non-emptiness is the only path validation done at this layer;
        // everything else belongs to the accessor.
        if path.is_empty() {
            return Err(ResourceError::not_found(path));
        }

        let stream = self
            .accessor
            .open(path)
            .map_err(|e| ResourceError::read_failed(path, e))?;
        let Some(mut stream) = stream else {
            return Err(ResourceError::not_found(path));
        };

        let mut bytes = Vec::new();
        let read = stream.read_to_end(&mut bytes);
        let closed = stream.close();

        if let Err(e) = read {
            if let Err(close_err) = closed {
                log::warn!("close failed for {path} after a read fault: {close_err}");
            }
            return Err(ResourceError::read_failed(path, e));
        }
        closed.map_err(|e| ResourceError::close_failed(path, e))?;

        decode_bytes(path, &bytes, encoding)
    }
}

/// Decode fully-read bytes with the named or platform-default encoding.
fn decode_bytes(path: &str, bytes: &[u8], encoding: Option<&str>) -> Result<String> {
    let encoding = match encoding {
        Some(label) => encoding::resolve(label).ok_or_else(|| {
            ResourceError::read_failed(
                path,
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("unknown encoding label {label:?}"),
                ),
            )
        })?,
        None => encoding::platform_default(),
    };
    let (text, replaced) = encoding::decode(bytes, encoding);
    if replaced {
        log::debug!(
            "{path}: malformed {} sequences replaced with U+FFFD",
            encoding.name()
        );
    }
    Ok(text)
}

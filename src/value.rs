//! Deferred file values and the column values that consume them.
//!
//! A [`FileValue`] is configuration, not content: it pairs a resource path
//! with an optional encoding and re-resolves both through a
//! [`ContentReader`] every time content is requested. A [`ColumnValue`]
//! sits one level up and decides at read time whether to use a literal
//! value or a file value.
//!
//! ```text
//! ColumnValue::resolve_value()
//!        │
//!        ├─► literal assigned (even "")  ──► the literal, verbatim
//!        │
//!        ├─► file value attached         ──► FileValue::file_content()
//!        │                                       └─► ContentReader
//!        │
//!        └─► neither                     ──► None
//! ```

use std::sync::Arc;

use crate::error::Result;
use crate::resource::{ContentReader, ResourceAccessor};

// =============================================================================
// File Value
// =============================================================================

/// Content sourced from a resource, resolved on demand.
///
/// Path and encoding can be reconfigured any number of times; nothing is
/// read until [`file_content`](Self::file_content) is called, and every
/// call resolves from scratch. The accessor is fixed at construction.
#[derive(Clone)]
pub struct FileValue {
    reader: ContentReader,
    path: Option<String>,
    encoding: Option<String>,
}

impl FileValue {
    /// Create an unconfigured file value resolving through `accessor`.
    pub fn new(accessor: Arc<dyn ResourceAccessor>) -> Self {
        Self {
            reader: ContentReader::new(accessor),
            path: None,
            encoding: None,
        }
    }

    /// The configured resource path, if any.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Set or clear the resource path.
    ///
    /// `None` returns the value to its unconfigured state, in which
    /// resolving fails with
    /// [`ResourceError::NotFound`](crate::ResourceError::NotFound).
    pub fn set_path(&mut self, path: Option<String>) {
        self.path = path;
    }

    /// The configured encoding label, if any.
    pub fn encoding(&self) -> Option<&str> {
        self.encoding.as_deref()
    }

    /// Set or clear the encoding label used to decode the resource.
    ///
    /// With no label configured, the platform default encoding at the time
    /// of each [`file_content`](Self::file_content) call applies.
    pub fn set_encoding(&mut self, encoding: Option<String>) {
        self.encoding = encoding;
    }

    /// Resolve and decode the configured resource.
    ///
    /// Delegates to [`ContentReader::file_content`] with the current path
    /// and encoding; errors pass through unchanged. With no path
    /// configured this fails like an empty path, with
    /// [`ResourceError::NotFound`](crate::ResourceError::NotFound).
    pub fn file_content(&self) -> Result<String> {
        self.reader
            .file_content(self.path.as_deref().unwrap_or_default(), self.encoding.as_deref())
    }
}

// =============================================================================
// Column Value
// =============================================================================

/// A column's value: a literal, a deferred [`FileValue`], or nothing.
///
/// The literal always wins when both are set, whatever order they were
/// configured in. An explicitly assigned empty string is a literal like any
/// other and hides the file value too.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use resource_text::{ColumnValue, FileValue, MemoryAccessor};
///
/// let accessor = Arc::new(MemoryAccessor::new());
/// accessor.insert("seed.sql", "insert into t values (1);");
///
/// let mut file_value = FileValue::new(accessor);
/// file_value.set_path(Some("seed.sql".to_string()));
///
/// let mut column = ColumnValue::new();
/// column.set_file_value(file_value);
/// assert_eq!(
///     column.resolve_value()?,
///     Some("insert into t values (1);".to_string()),
/// );
///
/// column.set_value(Some("literal".to_string()));
/// assert_eq!(column.resolve_value()?, Some("literal".to_string()));
/// # Ok::<(), resource_text::ResourceError>(())
/// ```
#[derive(Clone, Default)]
pub struct ColumnValue {
    value: Option<String>,
    file_value: Option<FileValue>,
}

impl ColumnValue {
    /// Create a value with nothing configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// The literal value, if one is assigned.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Assign or clear the literal value.
    ///
    /// `Some("")` is a meaningful assignment that hides any file value;
    /// `None` clears the literal so an attached file value shows through
    /// again.
    pub fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }

    /// The attached file value, if any.
    pub fn file_value(&self) -> Option<&FileValue> {
        self.file_value.as_ref()
    }

    /// Attach a file value as the fallback content source.
    pub fn set_file_value(&mut self, file_value: FileValue) {
        self.file_value = Some(file_value);
    }

    /// Resolve the effective value.
    ///
    /// A literal value, including an empty one, is returned verbatim
    /// without touching the file value. Otherwise an attached file value is
    /// resolved, re-reading its resource on every call; its errors
    /// propagate unchanged. With neither configured the result is
    /// `Ok(None)`.
    pub fn resolve_value(&self) -> Result<Option<String>> {
        if let Some(value) = &self.value {
            return Ok(Some(value.clone()));
        }
        match &self.file_value {
            Some(file_value) => file_value.file_content().map(Some),
            None => Ok(None),
        }
    }
}

//! The accessor and stream contracts.
//!
//! A [`ResourceAccessor`] owns the meaning of paths: filesystem roots,
//! embedded maps, archives, remote stores. The core never interprets a path
//! itself; it hands the string to the accessor and works with whatever
//! stream comes back.

use std::fs::File;
use std::io::{self, Cursor, Read};

/// Owned handle to an open resource's bytes.
pub type ByteStream = Box<dyn ResourceStream>;

/// An open byte stream for a resolved resource.
///
/// Reading goes through [`io::Read`]. Release is RAII: dropping the stream
/// releases the underlying handle silently. The explicit
/// [`close`](Self::close) exists for sources where release itself can fail
/// (archive members, sockets, test doubles); the content reader consumes
/// every stream through it, exactly once per retrieval.
pub trait ResourceStream: Read {
    /// Release the underlying handle, reporting failures.
    ///
    /// The default implementation releases by dropping and cannot fail.
    fn close(self: Box<Self>) -> io::Result<()> {
        Ok(())
    }
}

// std exposes no close(2) result for files; release is the drop.
impl ResourceStream for File {}

impl<T: AsRef<[u8]>> ResourceStream for Cursor<T> {}

/// Maps a logical path to an open byte stream.
///
/// The contract has three arms:
///
/// * `Ok(Some(stream))`: the path resolved; ownership of the stream passes
///   to the caller.
/// * `Ok(None)`: the path names nothing. Absence is a result, never an
///   `Err`.
/// * `Err(io)`: a genuine fault while resolving or opening, such as a
///   permission problem or a directory where a file was expected. Faults
///   while reading surface later, through the stream itself.
///
/// Implementations must be safe to call from several threads at once.
pub trait ResourceAccessor: Send + Sync {
    /// Resolve `path` to an open byte stream.
    fn open(&self, path: &str) -> io::Result<Option<ByteStream>>;
}

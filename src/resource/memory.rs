//! In-memory resource accessor.

use std::io::{self, Cursor};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use super::accessor::{ByteStream, ResourceAccessor};

/// Map-backed accessor for embedded fixtures and in-memory resources.
///
/// Contents are mutable through `&self`, so an accessor shared behind an
/// [`Arc`](std::sync::Arc) can change between reads; every [`open`] hands
/// out a fresh stream over a copy of the bytes at that moment. Nothing is
/// retained by the accessor once a stream is handed out.
///
/// [`open`]: ResourceAccessor::open
///
/// # Example
///
/// ```
/// use resource_text::MemoryAccessor;
///
/// let accessor = MemoryAccessor::new();
/// accessor.insert("greeting.txt", "hello");
/// assert!(accessor.contains("greeting.txt"));
/// ```
#[derive(Default)]
pub struct MemoryAccessor {
    files: RwLock<FxHashMap<String, Vec<u8>>>,
}

impl MemoryAccessor {
    /// Create a new empty accessor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a resource with string content.
    pub fn insert(&self, path: impl Into<String>, content: impl AsRef<str>) {
        self.files
            .write()
            .insert(path.into(), content.as_ref().as_bytes().to_vec());
    }

    /// Insert a resource with binary content.
    pub fn insert_bytes(&self, path: impl Into<String>, content: impl Into<Vec<u8>>) {
        self.files.write().insert(path.into(), content.into());
    }

    /// Remove a resource, returning its bytes.
    pub fn remove(&self, path: &str) -> Option<Vec<u8>> {
        self.files.write().remove(path)
    }

    /// Check whether a path is present.
    pub fn contains(&self, path: &str) -> bool {
        self.files.read().contains_key(path)
    }

    /// Number of resources held.
    pub fn len(&self) -> usize {
        self.files.read().len()
    }

    /// Check whether no resources are held.
    pub fn is_empty(&self) -> bool {
        self.files.read().is_empty()
    }
}

impl ResourceAccessor for MemoryAccessor {
    fn open(&self, path: &str) -> io::Result<Option<ByteStream>> {
        let bytes = self.files.read().get(path).cloned();
        Ok(bytes.map(|bytes| Box::new(Cursor::new(bytes)) as ByteStream))
    }
}

//! Ordered composition of resource accessors.

use std::io;
use std::sync::Arc;

use super::accessor::{ByteStream, ResourceAccessor};

/// Consults a sequence of accessors in order; the first hit wins.
///
/// Absence is reported only when every delegate misses. A delegate fault
/// propagates immediately instead of being papered over by probing later
/// delegates, so a permission problem in an early accessor is not shadowed
/// by a stale copy in a later one.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use resource_text::{ChainAccessor, MemoryAccessor};
///
/// let overrides = MemoryAccessor::new();
/// overrides.insert("schema.sql", "create table t (id int)");
///
/// let mut chain = ChainAccessor::new();
/// chain.push(Arc::new(overrides));
/// assert_eq!(chain.len(), 1);
/// ```
#[derive(Default, Clone)]
pub struct ChainAccessor {
    delegates: Vec<Arc<dyn ResourceAccessor>>,
}

impl ChainAccessor {
    /// Create an empty chain. Every lookup misses until delegates are added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a delegate, consulted after the existing ones.
    pub fn push(&mut self, accessor: Arc<dyn ResourceAccessor>) {
        self.delegates.push(accessor);
    }

    /// Number of delegates in consultation order.
    pub fn len(&self) -> usize {
        self.delegates.len()
    }

    /// Check whether the chain has no delegates.
    pub fn is_empty(&self) -> bool {
        self.delegates.is_empty()
    }
}

impl FromIterator<Arc<dyn ResourceAccessor>> for ChainAccessor {
    fn from_iter<I: IntoIterator<Item = Arc<dyn ResourceAccessor>>>(iter: I) -> Self {
        Self {
            delegates: iter.into_iter().collect(),
        }
    }
}

impl ResourceAccessor for ChainAccessor {
    fn open(&self, path: &str) -> io::Result<Option<ByteStream>> {
        for delegate in &self.delegates {
            if let Some(stream) = delegate.open(path)? {
                return Ok(Some(stream));
            }
        }
        Ok(None)
    }
}

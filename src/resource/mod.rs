//! Resource resolution and content reading.
//!
//! This module provides the path-to-text pipeline of the crate:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Content Reading Flow                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                             │
//! │  path ──► ContentReader::file_content(path, encoding)       │
//! │                    │                                        │
//! │                    ├─► ResourceAccessor::open(path)         │
//! │                    │   ├─► FileAccessor   (search roots)    │
//! │                    │   ├─► MemoryAccessor (in-memory map)   │
//! │                    │   └─► ChainAccessor  (first hit wins)  │
//! │                    │                                        │
//! │                    ├─► read_to_end + ResourceStream::close  │
//! │                    │                                        │
//! │                    └─► decode (named or platform default)   │
//! │                                                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Accessors own resolution semantics; the reader owns the read, release,
//! and decode steps. Exactly one stream is opened per read and it is
//! released before the call returns, whether the read succeeds or fails.

mod accessor;
mod chain;
mod fs;
mod memory;
mod reader;

pub use accessor::{ByteStream, ResourceAccessor, ResourceStream};
pub use chain::ChainAccessor;
pub use fs::FileAccessor;
pub use memory::MemoryAccessor;
pub use reader::ContentReader;

//! # resource-text
//!
//! Resource-to-text reading for schema change tooling.
//!
//! Change sets reference external content by path: a column value loaded
//! from a file, a SQL snippet kept next to the change log. This crate turns
//! such a reference, a path plus an optional encoding label, into a decoded
//! `String`, with a sharp failure taxonomy and a guaranteed release of the
//! underlying stream:
//!
//! - **Pluggable resolution**: [`ResourceAccessor`] maps paths to byte
//!   streams; filesystem, in-memory, and composite implementations ship
//!   with the crate.
//! - **Named encodings**: any WHATWG label (`"UTF-8"`, `"ISO-8859-1"`,
//!   ...), or the platform default when no label is given.
//! - **One stream per read**: opened, fully read, and released inside a
//!   single call, on success and on failure alike.
//! - **Deferred values**: [`FileValue`] and [`ColumnValue`] keep the
//!   path/encoding pair as configuration and resolve content on demand,
//!   with literal values taking precedence over file-sourced ones.
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use resource_text::{ContentReader, FileAccessor, MemoryAccessor};
//!
//! // Resolve paths against an in-memory map (tests, generated content).
//! let accessor = MemoryAccessor::new();
//! accessor.insert("changelog/001-init.sql", "create table t (id int);");
//!
//! let reader = ContentReader::new(Arc::new(accessor));
//! let sql = reader.file_content("changelog/001-init.sql", Some("UTF-8"))?;
//! assert_eq!(sql, "create table t (id int);");
//!
//! // Or against the filesystem, searching a list of roots in order.
//! let _reader = ContentReader::new(Arc::new(FileAccessor::new("changelog")));
//! # Ok::<(), resource_text::ResourceError>(())
//! ```
//!
//! ## Failure taxonomy
//!
//! Every failure is a [`ResourceError`] carrying the path that was being
//! read: [`NotFound`](ResourceError::NotFound) when no stream exists for
//! the path, [`ReadFailed`](ResourceError::ReadFailed) for I/O faults while
//! resolving or reading, [`CloseFailed`](ResourceError::CloseFailed) when
//! releasing the stream fails after an otherwise successful read. A
//! mismatched encoding is deliberately not a failure: it yields garbled
//! text with U+FFFD replacements.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod encoding;
pub mod error;
pub mod resource;
pub mod value;

pub use error::{ResourceError, Result};
pub use resource::{
    ByteStream, ChainAccessor, ContentReader, FileAccessor, MemoryAccessor, ResourceAccessor,
    ResourceStream,
};
pub use value::{ColumnValue, FileValue};

//! Filesystem-backed resource accessor.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use super::accessor::{ByteStream, ResourceAccessor};

/// Resolves paths against an ordered list of filesystem search roots.
///
/// An absolute path is tried as-is. A relative path is joined to each root
/// in order and the first root holding the file wins. Roots are search
/// bases, not jails: `..` segments are resolved by the operating system, so
/// a path may legitimately point outside a root.
///
/// A path that resolves to something other than a regular file (a
/// directory, a fifo) is an I/O fault, not absence: the path clearly names
/// something, it just cannot be read as a resource.
#[derive(Debug, Clone)]
pub struct FileAccessor {
    roots: Vec<PathBuf>,
}

impl FileAccessor {
    /// Create an accessor with a single search root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            roots: vec![root.into()],
        }
    }

    /// Create an accessor searching several roots in order.
    pub fn with_roots<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
        }
    }

    /// Append another search root, consulted after the existing ones.
    pub fn push_root(&mut self, root: impl Into<PathBuf>) {
        self.roots.push(root.into());
    }

    /// The configured search roots, in resolution order.
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    fn open_candidate(candidate: &Path) -> io::Result<Option<ByteStream>> {
        let meta = match std::fs::metadata(candidate) {
            Ok(meta) => meta,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };
        if !meta.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::IsADirectory,
                format!("{} is not a regular file", candidate.display()),
            ));
        }
        match File::open(candidate) {
            Ok(file) => Ok(Some(Box::new(file))),
            // The file can vanish between the metadata check and the open;
            // absence stays absence.
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

impl ResourceAccessor for FileAccessor {
    fn open(&self, path: &str) -> io::Result<Option<ByteStream>> {
        let logical = Path::new(path);
        if logical.is_absolute() {
            return Self::open_candidate(logical);
        }
        for root in &self.roots {
            if let Some(stream) = Self::open_candidate(&root.join(logical))? {
                return Ok(Some(stream));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Read;
    use tempfile::TempDir;

    fn read_all(mut stream: ByteStream) -> Vec<u8> {
        let mut buf = Vec::new();
        stream.read_to_end(&mut buf).unwrap();
        buf
    }

    #[test]
    fn test_open_existing_file() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/data.txt"), "file content").unwrap();

        let accessor = FileAccessor::new(dir.path());
        let stream = accessor.open("sub/data.txt").unwrap().unwrap();
        assert_eq!(read_all(stream), b"file content");
    }

    #[test]
    fn test_missing_file_is_absent_not_an_error() {
        let dir = TempDir::new().unwrap();
        let accessor = FileAccessor::new(dir.path());
        assert!(accessor.open("missing.txt").unwrap().is_none());
    }

    #[test]
    fn test_directory_is_a_fault() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let accessor = FileAccessor::new(dir.path());
        // Streams carry no Debug impl, so drop the Ok payload before
        // asserting on the error.
        let err = accessor.open("sub").map(|_| ()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::IsADirectory);
    }

    #[test]
    fn test_roots_searched_in_order() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        fs::write(first.path().join("shared.txt"), "from first").unwrap();
        fs::write(second.path().join("shared.txt"), "from second").unwrap();
        fs::write(second.path().join("only.txt"), "second only").unwrap();

        let accessor = FileAccessor::with_roots([first.path(), second.path()]);
        let stream = accessor.open("shared.txt").unwrap().unwrap();
        assert_eq!(read_all(stream), b"from first");
        let stream = accessor.open("only.txt").unwrap().unwrap();
        assert_eq!(read_all(stream), b"second only");
    }

    #[test]
    fn test_pushed_root_comes_last() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        fs::write(first.path().join("shared.txt"), "from first").unwrap();
        fs::write(second.path().join("shared.txt"), "from second").unwrap();

        let mut accessor = FileAccessor::new(first.path());
        accessor.push_root(second.path());
        assert_eq!(accessor.roots().len(), 2);
        let stream = accessor.open("shared.txt").unwrap().unwrap();
        assert_eq!(read_all(stream), b"from first");
    }

    #[test]
    fn test_absolute_path_bypasses_roots() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("direct.txt");
        fs::write(&target, "direct content").unwrap();

        let elsewhere = TempDir::new().unwrap();
        let accessor = FileAccessor::new(elsewhere.path());
        let stream = accessor
            .open(target.to_str().unwrap())
            .unwrap()
            .unwrap();
        assert_eq!(read_all(stream), b"direct content");
    }

    #[test]
    fn test_parent_segments_resolve_outside_root() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("inner")).unwrap();
        fs::write(dir.path().join("outside.txt"), "beyond the root").unwrap();

        // Roots are search bases, not jails.
        let accessor = FileAccessor::new(dir.path().join("inner"));
        let stream = accessor.open("../outside.txt").unwrap().unwrap();
        assert_eq!(read_all(stream), b"beyond the root");
    }
}

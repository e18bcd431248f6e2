//! Filesystem access used by the generator

use std::io;
use std::path::Path;

/// The filesystem operations generation needs.
///
/// Every fallible operation returns its `io::Result` so the generator can
/// stop at the first failure.
pub trait FileSystem {
    /// Whether any entry (including a dangling symlink) exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Create a single directory; the parent must exist
    fn create_dir(&self, path: &Path) -> io::Result<()>;

    /// Create a directory and any missing parents
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Create or truncate a file with `contents`
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Recursively remove a directory
    fn remove_dir_all(&self, path: &Path) -> io::Result<()>;
}

/// The local disk
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        std::fs::symlink_metadata(path).is_ok()
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        std::fs::write(path, contents)
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_dir_all(path)
    }
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        (**self).create_dir(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        (**self).create_dir_all(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        (**self).write(path, contents)
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        (**self).remove_dir_all(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_exists_sees_files_and_directories() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("file.txt");
        std::fs::write(&file, "x").unwrap();

        assert!(LocalFs.exists(temp.path()));
        assert!(LocalFs.exists(&file));
        assert!(!LocalFs.exists(&temp.path().join("missing")));
    }

    #[cfg(unix)]
    #[test]
    fn test_exists_sees_dangling_symlink() {
        let temp = TempDir::new().unwrap();
        let link = temp.path().join("link");
        std::os::unix::fs::symlink(temp.path().join("nowhere"), &link).unwrap();

        assert!(LocalFs.exists(&link));
    }

    #[test]
    fn test_create_dir_requires_parent() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a").join("b");

        assert!(LocalFs.create_dir(&nested).is_err());
        LocalFs.create_dir_all(&nested).unwrap();
        assert!(nested.is_dir());
    }
}

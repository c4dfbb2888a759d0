//! Input directory listing.
//!
//! Only the immediate children of the input directory are considered:
//!
//! ```text
//! textures/
//! ├── .DS_Store          # hidden: ignored
//! ├── bark.jpg           # image
//! ├── leaves.PNG         # image (extension case is ignored)
//! ├── LICENSE.txt        # other: copied verbatim
//! └── variants/          # subdirectory: error, the run does not start
//! ```
//!
//! Every visible entry must be a file, so the output can mirror the input
//! one to one. Entries are sorted by file name so diagnostics are stable
//! between runs.

use crate::classify::{FileKind, classify};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Input directory not found: {0}")]
    NotFound(PathBuf),
    #[error("Input path is not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("Not a regular file: {0} (subdirectories are not supported)")]
    NotAFile(PathBuf),
}

/// A single file discovered in the input directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: PathBuf,
    pub file_name: OsString,
    pub kind: FileKind,
}

/// Everything found in the input directory, split by how it is handled.
#[derive(Debug, Default)]
pub struct Inventory {
    /// JPEG and PNG files.
    pub images: Vec<Entry>,
    /// Files copied verbatim.
    pub others: Vec<Entry>,
}

impl Inventory {
    /// Number of files that will produce an output entry.
    pub fn file_count(&self) -> usize {
        self.images.len() + self.others.len()
    }
}

/// Check that `dir` exists and is a directory.
pub fn ensure_input_dir(dir: &Path) -> Result<(), ScanError> {
    if !dir.exists() {
        return Err(ScanError::NotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(ScanError::NotADirectory(dir.to_path_buf()));
    }
    Ok(())
}

/// List and classify the immediate children of `dir`.
///
/// Fails on the first visible entry that is not a file, before anything is
/// written.
pub fn scan(dir: &Path) -> Result<Inventory, ScanError> {
    ensure_input_dir(dir)?;

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        if name.to_string_lossy().starts_with('.') {
            continue;
        }
        paths.push((entry.path(), name));
    }
    paths.sort();

    let mut inventory = Inventory::default();
    for (path, file_name) in paths {
        // Follows symlinks, so a link to a file is copied as a file
        if !path.is_file() {
            return Err(ScanError::NotAFile(path));
        }

        let kind = classify(&path);
        let entry = Entry {
            path,
            file_name,
            kind,
        };
        if kind.is_image() {
            inventory.images.push(entry);
        } else {
            inventory.others.push(entry);
        }
    }

    Ok(inventory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn names(entries: &[Entry]) -> Vec<String> {
        entries
            .iter()
            .map(|e| e.file_name.to_string_lossy().into_owned())
            .collect()
    }

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), name.as_bytes()).unwrap();
    }

    #[test]
    fn splits_images_from_other_files() {
        let tmp = TempDir::new().unwrap();
        for name in ["a.jpg", "b.png", "c.txt", "d.jpeg", "e.blend"] {
            touch(tmp.path(), name);
        }

        let inventory = scan(tmp.path()).unwrap();
        assert_eq!(names(&inventory.images), vec!["a.jpg", "b.png", "d.jpeg"]);
        assert_eq!(names(&inventory.others), vec!["c.txt", "e.blend"]);
        assert_eq!(inventory.file_count(), 5);
    }

    #[test]
    fn uppercase_extensions_are_images() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "BARK.JPG");
        touch(tmp.path(), "leaves.Png");

        let inventory = scan(tmp.path()).unwrap();
        assert_eq!(names(&inventory.images), vec!["BARK.JPG", "leaves.Png"]);
        assert_eq!(inventory.images[0].kind, FileKind::Jpeg);
        assert_eq!(inventory.images[1].kind, FileKind::Png);
    }

    #[test]
    fn entries_are_sorted_by_name() {
        let tmp = TempDir::new().unwrap();
        for name in ["zeta.jpg", "alpha.jpg", "mid.jpg"] {
            touch(tmp.path(), name);
        }

        let inventory = scan(tmp.path()).unwrap();
        assert_eq!(
            names(&inventory.images),
            vec!["alpha.jpg", "mid.jpg", "zeta.jpg"]
        );
    }

    #[test]
    fn hidden_files_are_ignored() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), ".DS_Store");
        touch(tmp.path(), ".hidden.jpg");
        touch(tmp.path(), "visible.jpg");

        let inventory = scan(tmp.path()).unwrap();
        assert_eq!(names(&inventory.images), vec!["visible.jpg"]);
        assert!(inventory.others.is_empty());
    }

    #[test]
    fn subdirectory_is_error() {
        let tmp = TempDir::new().unwrap();
        let sub = tmp.path().join("variants");
        fs::create_dir(&sub).unwrap();
        touch(&sub, "nested.jpg");
        touch(tmp.path(), "top.jpg");

        assert!(matches!(scan(tmp.path()), Err(ScanError::NotAFile(p)) if p == sub));
    }

    #[test]
    fn empty_subdirectory_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("variants")).unwrap();
        touch(tmp.path(), "c.txt");

        assert!(matches!(scan(tmp.path()), Err(ScanError::NotAFile(_))));
    }

    #[test]
    fn hidden_subdirectory_is_ignored() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join(".git")).unwrap();
        touch(tmp.path(), "top.jpg");

        let inventory = scan(tmp.path()).unwrap();
        assert_eq!(names(&inventory.images), vec!["top.jpg"]);
    }

    #[test]
    fn empty_directory() {
        let tmp = TempDir::new().unwrap();
        let inventory = scan(tmp.path()).unwrap();
        assert_eq!(inventory.file_count(), 0);
    }

    #[test]
    fn missing_directory_is_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("missing");
        assert!(matches!(scan(&missing), Err(ScanError::NotFound(p)) if p == missing));
    }

    #[test]
    fn file_instead_of_directory_is_error() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "file.txt");
        let path = tmp.path().join("file.txt");
        assert!(matches!(scan(&path), Err(ScanError::NotADirectory(_))));
    }
}

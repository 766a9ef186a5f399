//! Asset directory discovery.
//!
//! The input root holds one subdirectory per asset, each containing raw
//! quote files:
//!
//! ```text
//! OptionsDX_Raw_Data/
//! ├── nvda/
//! │   ├── nvda_eod_202301.txt
//! │   └── nvda_eod_202302.txt
//! └── spy/
//!     └── spy_eod_202301.txt
//! ```
//!
//! Only the first level below the root is considered. Entries are visited
//! in lexicographic name order so runs are reproducible across platforms.

use std::fs;
use std::path::{Path, PathBuf};
use std::vec;

use crate::error::LoaderError;

/// One asset directory and its quote files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetDirectory {
    /// Directory name, used as the asset identifier
    pub name: String,
    /// Directory path
    pub path: PathBuf,
    /// Quote files matching the suffix, sorted by file name
    pub files: Vec<PathBuf>,
}

/// Lazy iterator over the asset directories of an input root.
///
/// The root is listed when the walker is opened; each asset directory is
/// listed only when the iterator reaches it.
#[derive(Debug)]
pub struct AssetWalker {
    assets: vec::IntoIter<(String, PathBuf)>,
    suffix: String,
}

impl AssetWalker {
    /// Lists the asset directories under `root`.
    ///
    /// Non-directory entries at the root are skipped silently.
    ///
    /// # Errors
    /// `LoaderError::RootUnreadable` if the root cannot be listed.
    pub fn open(root: impl AsRef<Path>, suffix: impl Into<String>) -> Result<Self, LoaderError> {
        let root = root.as_ref();
        let root_err = |source| LoaderError::RootUnreadable {
            path: root.to_path_buf(),
            source,
        };

        let mut assets = Vec::new();
        for entry in fs::read_dir(root).map_err(root_err)? {
            let entry = entry.map_err(root_err)?;
            let path = entry.path();
            if path.is_dir() {
                let name = entry.file_name().to_string_lossy().to_string();
                assets.push((name, path));
            }
        }
        assets.sort();

        Ok(Self {
            assets: assets.into_iter(),
            suffix: suffix.into(),
        })
    }

    fn list_files(&self, path: &Path) -> Result<Vec<PathBuf>, LoaderError> {
        let asset_err = |source| LoaderError::AssetUnreadable {
            path: path.to_path_buf(),
            source,
        };

        let mut files = Vec::new();
        for entry in fs::read_dir(path).map_err(asset_err)? {
            let entry = entry.map_err(asset_err)?;
            if entry.file_name().to_string_lossy().ends_with(&self.suffix) {
                files.push(entry.path());
            }
        }
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }
}

impl Iterator for AssetWalker {
    type Item = Result<AssetDirectory, LoaderError>;

    fn next(&mut self) -> Option<Self::Item> {
        let (name, path) = self.assets.next()?;
        Some(
            self.list_files(&path)
                .map(|files| AssetDirectory { name, path, files }),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.assets.size_hint()
    }
}

impl ExactSizeIterator for AssetWalker {}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_walks_assets_in_name_order() {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join("spy")).unwrap();
        fs::create_dir(root.path().join("nvda")).unwrap();
        touch(&root.path().join("spy").join("b.txt"));
        touch(&root.path().join("spy").join("a.txt"));

        let assets: Vec<_> = AssetWalker::open(root.path(), ".txt")
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(assets.len(), 2);
        assert_eq!(assets[0].name, "nvda");
        assert!(assets[0].files.is_empty());
        assert_eq!(assets[1].name, "spy");
        let names: Vec<_> = assets[1]
            .files
            .iter()
            .map(|f| f.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_skips_root_files_and_other_suffixes() {
        let root = TempDir::new().unwrap();
        touch(&root.path().join("README.txt"));
        fs::create_dir(root.path().join("qqq")).unwrap();
        touch(&root.path().join("qqq").join("quotes.txt"));
        touch(&root.path().join("qqq").join("quotes.csv"));
        touch(&root.path().join("qqq").join("notes.txt.bak"));

        let assets: Vec<_> = AssetWalker::open(root.path(), ".txt")
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(assets.len(), 1);
        assert_eq!(assets[0].files.len(), 1);
        assert!(assets[0].files[0].ends_with("quotes.txt"));
    }

    #[test]
    fn test_does_not_recurse() {
        let root = TempDir::new().unwrap();
        let nested = root.path().join("spy").join("2023");
        fs::create_dir_all(&nested).unwrap();
        touch(&nested.join("deep.txt"));

        let assets: Vec<_> = AssetWalker::open(root.path(), ".txt")
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(assets.len(), 1);
        assert!(assets[0].files.is_empty());
    }

    #[test]
    fn test_missing_root_is_error() {
        let root = TempDir::new().unwrap();
        let err = AssetWalker::open(root.path().join("absent"), ".txt").unwrap_err();
        assert!(matches!(err, LoaderError::RootUnreadable { .. }));
    }

    #[test]
    fn test_unreadable_asset_yields_error_item() {
        let root = TempDir::new().unwrap();
        for asset in ["a", "b"] {
            fs::create_dir(root.path().join(asset)).unwrap();
        }
        touch(&root.path().join("b").join("quotes.txt"));

        let mut walker = AssetWalker::open(root.path(), ".txt").unwrap();
        fs::remove_dir(root.path().join("a")).unwrap();

        match walker.next() {
            Some(Err(LoaderError::AssetUnreadable { path, .. })) => {
                assert_eq!(path, root.path().join("a"));
            }
            other => panic!("Expected AssetUnreadable, got {:?}", other),
        }

        let sibling = walker.next().unwrap().unwrap();
        assert_eq!(sibling.name, "b");
        assert_eq!(sibling.files.len(), 1);
        assert!(walker.next().is_none());
    }

    #[test]
    fn test_size_hint_counts_assets() {
        let root = TempDir::new().unwrap();
        for asset in ["a", "b", "c"] {
            fs::create_dir(root.path().join(asset)).unwrap();
        }
        let walker = AssetWalker::open(root.path(), ".txt").unwrap();
        assert_eq!(walker.size_hint(), (3, Some(3)));
    }
}

use super::FileSystem;
use anyhow::{anyhow, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    File,
    Directory,
}

#[derive(Debug, Clone)]
struct MockEntry {
    content: Option<String>,
    read_error: Option<String>,
    kind: EntryKind,
}

/// In-memory file system for tests
///
/// Relative paths are resolved against the root (`/mock` unless set with
/// [`MockFileSystem::with_root`]).
pub struct MockFileSystem {
    files: RwLock<BTreeMap<PathBuf, MockEntry>>,
    root: PathBuf,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::with_root(PathBuf::from("/mock"))
    }

    pub fn with_root(root: PathBuf) -> Self {
        Self {
            files: RwLock::new(BTreeMap::new()),
            root,
        }
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        self.insert(
            path.as_ref(),
            MockEntry {
                content: Some(content.to_string()),
                read_error: None,
                kind: EntryKind::File,
            },
        );
    }

    /// Adds a file that exists but fails every read with `message`
    pub fn add_unreadable(&self, path: impl AsRef<Path>, message: &str) {
        self.insert(
            path.as_ref(),
            MockEntry {
                content: None,
                read_error: Some(message.to_string()),
                kind: EntryKind::File,
            },
        );
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        self.insert(
            path.as_ref(),
            MockEntry {
                content: None,
                read_error: None,
                kind: EntryKind::Directory,
            },
        );
    }

    fn insert(&self, path: &Path, entry: MockEntry) {
        let path = self.normalize_path(path);
        let mut files = self.files.write().unwrap();

        if let Some(parent) = path.parent() {
            Self::ensure_parents(&mut files, parent);
        }
        files.insert(path, entry);
    }

    fn normalize_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    fn ensure_parents(files: &mut BTreeMap<PathBuf, MockEntry>, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            files.entry(current.clone()).or_insert(MockEntry {
                content: None,
                read_error: None,
                kind: EntryKind::Directory,
            });
        }
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        let path = self.normalize_path(path);
        self.files.read().unwrap().contains_key(&path)
    }

    fn is_file(&self, path: &Path) -> bool {
        let path = self.normalize_path(path);
        self.files
            .read()
            .unwrap()
            .get(&path)
            .map(|e| e.kind == EntryKind::File)
            .unwrap_or(false)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        let path = self.normalize_path(path);
        let files = self.files.read().unwrap();
        let entry = files
            .get(&path)
            .ok_or_else(|| anyhow!("File not found: {:?}", path))?;

        if let Some(message) = &entry.read_error {
            return Err(anyhow!("{}", message));
        }

        entry
            .content
            .clone()
            .ok_or_else(|| anyhow!("Is a directory: {:?}", path))
    }

    fn glob(&self, root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
        let root = self.normalize_path(root);
        let matcher = super::glob_matcher(&root, pattern)?;

        let files = self.files.read().unwrap();
        Ok(files
            .iter()
            .filter(|(path, entry)| entry.kind == EntryKind::File && path.starts_with(&root))
            .filter(|(path, _)| matcher.matched(path, false).is_whitelist())
            .map(|(path, _)| path.clone())
            .collect())
    }
}

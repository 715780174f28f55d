//! テスト用モックファイルシステム

use super::*;
use std::collections::HashMap;
use std::sync::RwLock;

/// テスト用モックファイルシステム
pub struct MockFs {
    files: RwLock<HashMap<String, MockEntry>>,
}

enum MockEntry {
    File(Vec<u8>),
    Dir,
}

impl MockFs {
    pub fn new() -> Self {
        Self {
            files: RwLock::new(HashMap::new()),
        }
    }

    /// ファイルを追加
    pub fn add_file(&self, path: &str, content: &str) {
        self.files
            .write()
            .unwrap()
            .insert(path.to_string(), MockEntry::File(content.as_bytes().to_vec()));
    }

    /// ディレクトリを追加
    pub fn add_dir(&self, path: &str) {
        self.files
            .write()
            .unwrap()
            .insert(path.to_string(), MockEntry::Dir);
    }

    /// ファイル内容を取得（テストの検証用）
    pub fn content(&self, path: &str) -> Option<String> {
        match self.files.read().unwrap().get(path) {
            Some(MockEntry::File(content)) => Some(String::from_utf8_lossy(content).to_string()),
            _ => None,
        }
    }
}

impl Default for MockFs {
    fn default() -> Self {
        Self::new()
    }
}

fn key(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

fn not_found() -> QbError {
    std::io::Error::new(std::io::ErrorKind::NotFound, "not found").into()
}

impl FileSystem for MockFs {
    fn exists(&self, path: &Path) -> bool {
        self.files.read().unwrap().contains_key(&key(path))
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        match self.files.read().unwrap().get(&key(path)) {
            Some(MockEntry::File(content)) => Ok(String::from_utf8_lossy(content).to_string()),
            Some(MockEntry::Dir) => Err(QbError::Io(std::io::Error::new(
                std::io::ErrorKind::IsADirectory,
                "Is a directory",
            ))),
            None => Err(not_found()),
        }
    }

    fn write(&self, path: &Path, content: &[u8]) -> Result<()> {
        self.files
            .write()
            .unwrap()
            .insert(key(path), MockEntry::File(content.to_vec()));
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        let mut files = self.files.write().unwrap();
        if let Some(MockEntry::Dir) = files.get(&key(path)) {
            return Err(QbError::Io(std::io::Error::new(
                std::io::ErrorKind::IsADirectory,
                "Cannot remove directory with remove_file",
            )));
        }
        files.remove(&key(path));
        Ok(())
    }
}

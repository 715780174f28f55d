//! キー・バリューストレージ
//!
//! 1キー1ファイルでディレクトリに保存する。永続ストレージ（データディレクトリ）と
//! セッションストレージ（セッションディレクトリ）は同じ実装で置き場所だけが異なる。

use crate::error::Result;
use crate::fs::FileSystem;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// 名言一覧（永続）
pub const QUOTES_KEY: &str = "quotes";
/// 最後に選択したカテゴリ（永続）
pub const SELECTED_CATEGORY_KEY: &str = "selectedCategory";
/// 最後に表示した名言（セッション）
pub const LAST_QUOTE_KEY: &str = "lastQuote";

/// ディレクトリ単位のキー・バリューストレージ
#[derive(Clone)]
pub struct KeyValueStorage {
    fs: Arc<dyn FileSystem>,
    dir: PathBuf,
}

impl KeyValueStorage {
    pub fn new(fs: Arc<dyn FileSystem>, dir: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            dir: dir.into(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    /// 値を取得（未設定なら None）
    pub fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !self.fs.exists(&path) {
            return Ok(None);
        }
        self.fs.read_to_string(&path).map(Some)
    }

    /// 値を設定（上書き）
    pub fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.fs.write(&self.path_for(key), value.as_bytes())
    }

    /// 値を削除（未設定でも Ok）
    pub fn remove_item(&self, key: &str) -> Result<()> {
        self.fs.remove_file(&self.path_for(key))
    }

    /// JSON としてデコードして取得
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get_item(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// JSON にエンコードして設定
    pub fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        self.set_item(key, &serde_json::to_string(value)?)
    }
}

impl std::fmt::Debug for KeyValueStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyValueStorage")
            .field("dir", &self.dir)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::mock::MockFs;

    fn storage() -> (Arc<MockFs>, KeyValueStorage) {
        let fs = Arc::new(MockFs::new());
        let storage = KeyValueStorage::new(fs.clone(), "/data");
        (fs, storage)
    }

    #[test]
    fn test_missing_key_is_none() {
        let (_, storage) = storage();
        assert_eq!(storage.get_item("quotes").unwrap(), None);
    }

    #[test]
    fn test_set_then_get_plain_string() {
        let (fs, storage) = storage();
        storage.set_item(SELECTED_CATEGORY_KEY, "Motivation").unwrap();

        assert_eq!(fs.content("/data/selectedCategory").as_deref(), Some("Motivation"));
        assert_eq!(
            storage.get_item(SELECTED_CATEGORY_KEY).unwrap().as_deref(),
            Some("Motivation")
        );
    }

    #[test]
    fn test_json_helpers() {
        let (_, storage) = storage();
        storage.set_json("numbers", &vec![1, 2, 3]).unwrap();

        let numbers: Option<Vec<i32>> = storage.get_json("numbers").unwrap();
        assert_eq!(numbers, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_get_json_propagates_decode_error() {
        let (fs, storage) = storage();
        fs.add_file("/data/quotes", "not json");

        let result: Result<Option<Vec<i32>>> = storage.get_json("quotes");
        assert!(result.is_err());
    }

    #[test]
    fn test_remove_item() {
        let (_, storage) = storage();
        storage.set_item(LAST_QUOTE_KEY, "{}").unwrap();
        storage.remove_item(LAST_QUOTE_KEY).unwrap();

        assert_eq!(storage.get_item(LAST_QUOTE_KEY).unwrap(), None);
        // 二度目の削除もエラーにならない
        storage.remove_item(LAST_QUOTE_KEY).unwrap();
    }
}

//! ファイルシステム抽象化
//!
//! キー・バリューストレージ、設定、インポート/エクスポートで使用する
//! ファイル操作の抽象化レイヤー。テスト時に MockFs を注入できる。

use crate::error::{QbError, Result};
use std::path::Path;

/// ファイルシステム操作を抽象化するトレイト
///
/// 本番コードでは RealFs、テストでは MockFs を使用する。
pub trait FileSystem: Send + Sync {
    /// パスが存在するか
    fn exists(&self, path: &Path) -> bool;

    /// ファイル内容を読み込み
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// ファイルに書き込み
    ///
    /// - 親ディレクトリは自動作成
    /// - 既存ファイルは上書き
    /// - アトミック性は保証しない
    fn write(&self, path: &Path, content: &[u8]) -> Result<()>;

    /// ファイルのみを削除
    ///
    /// - 存在しない場合は Ok(())
    /// - ディレクトリの場合は Err
    fn remove_file(&self, path: &Path) -> Result<()>;
}

/// 本番用ファイルシステム実装
pub struct RealFs;

impl FileSystem for RealFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn write(&self, path: &Path, content: &[u8]) -> Result<()> {
        // 親ディレクトリを作成
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Ok(());
        }
        if path.is_dir() {
            return Err(QbError::Io(std::io::Error::new(
                std::io::ErrorKind::IsADirectory,
                "Cannot remove directory with remove_file",
            )));
        }
        std::fs::remove_file(path)?;
        Ok(())
    }
}

#[cfg(test)]
pub mod mock;

#[cfg(test)]
#[path = "fs_test.rs"]
mod tests;

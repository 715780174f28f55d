//! 環境変数

/// データディレクトリを上書きする環境変数
pub const HOME_VAR: &str = "QUOTEBOOK_HOME";
/// セッションディレクトリを上書きする環境変数
pub const SESSION_DIR_VAR: &str = "QUOTEBOOK_SESSION_DIR";
/// 同期先エンドポイントを上書きする環境変数
pub const ENDPOINT_VAR: &str = "QUOTEBOOK_ENDPOINT";

/// 環境変数ユーティリティ
pub struct EnvVar;

impl EnvVar {
    /// 空文字列は未設定として扱う
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.is_empty())
    }
}

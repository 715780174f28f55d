use thiserror::Error;

/// quotebook 統一エラー型
#[derive(Debug, Error)]
pub enum QbError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Remote API error: {message} (status: {status})")]
    RemoteApi { status: u16, message: String },

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    InvalidImport(String),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, QbError>;

impl QbError {
    /// ユーザーに直接提示すべきエラーかどうか
    ///
    /// 通信エラーはバックグラウンド同期でのみ発生し、ログにのみ記録される。
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, QbError::Network(_) | QbError::RemoteApi { .. })
    }
}

//! HTTP設定・同期設定・パス解決

use crate::env::{self, EnvVar};
use crate::error::{QbError, Result};
use crate::fs::FileSystem;
use directories::ProjectDirs;
use reqwest::Client;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 既定の同期先（モックサーバー）
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/posts";

/// 設定ファイル名（データディレクトリ直下）
pub const CONFIG_FILE: &str = "config.toml";

/// HTTP設定
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// タイムアウト
    pub timeout: Option<Duration>,
    /// User-Agent
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
            user_agent: "quotebook-cli".to_string(),
        }
    }
}

impl HttpConfig {
    /// reqwest::Client を構築
    pub fn build_client(&self) -> Client {
        let mut builder = Client::builder().user_agent(&self.user_agent);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder.build().unwrap_or_else(|_| Client::new())
    }
}

/// 同期設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// 取得・送信先のリソースURL
    pub endpoint: String,
    /// 同期間隔
    pub interval: Duration,
    /// 1回の取得でマージする件数
    pub fetch_limit: usize,
    /// サーバー由来の名言に付けるカテゴリ
    pub server_category: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            interval: Duration::from_secs(60),
            fetch_limit: 5,
            server_category: "Server".to_string(),
        }
    }
}

/// config.toml の内容（すべて省略可能）
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    endpoint: Option<String>,
    interval_secs: Option<u64>,
    fetch_limit: Option<usize>,
    timeout_secs: Option<u64>,
}

/// アプリケーション設定
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub http: HttpConfig,
    pub sync: SyncConfig,
}

impl Config {
    /// データディレクトリの config.toml を読み込み、環境変数で上書きする
    ///
    /// ファイルが無ければ既定値を使う。
    pub fn load(fs: &dyn FileSystem, data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(CONFIG_FILE);
        let file = if fs.exists(&path) {
            toml::from_str::<FileConfig>(&fs.read_to_string(&path)?)?
        } else {
            FileConfig::default()
        };

        let mut config = Self::default();
        if let Some(endpoint) = file.endpoint {
            config.sync.endpoint = endpoint;
        }
        if let Some(secs) = file.interval_secs {
            if secs == 0 {
                return Err(QbError::Config("interval_secs must be positive".to_string()));
            }
            config.sync.interval = Duration::from_secs(secs);
        }
        if let Some(limit) = file.fetch_limit {
            config.sync.fetch_limit = limit;
        }
        if let Some(secs) = file.timeout_secs {
            config.http.timeout = Some(Duration::from_secs(secs));
        }

        if let Some(endpoint) = EnvVar::get(env::ENDPOINT_VAR) {
            config.sync.endpoint = endpoint;
        }

        Ok(config)
    }
}

/// 永続ストレージとセッションストレージの配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    /// 永続データ（quotes, selectedCategory, config.toml）
    pub data_dir: PathBuf,
    /// セッションデータ（lastQuote）
    pub session_dir: PathBuf,
}

impl AppPaths {
    /// パスを解決
    ///
    /// 優先順位: 明示的な指定 > 環境変数 > 既定値
    pub fn resolve(data_dir: Option<PathBuf>, session_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = match data_dir.or_else(|| EnvVar::get(env::HOME_VAR).map(PathBuf::from)) {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        let session_dir = session_dir
            .or_else(|| EnvVar::get(env::SESSION_DIR_VAR).map(PathBuf::from))
            .unwrap_or_else(default_session_dir);

        Ok(Self {
            data_dir,
            session_dir,
        })
    }

    /// ログファイルのパス（TUI 実行時）
    pub fn log_file(&self) -> PathBuf {
        self.data_dir.join("quotebook.log")
    }
}

fn default_data_dir() -> Result<PathBuf> {
    let Some(dirs) = ProjectDirs::from("", "", "quotebook") else {
        return Err(QbError::Config(
            "Could not determine data directory; set QUOTEBOOK_HOME".to_string(),
        ));
    };
    Ok(dirs.data_dir().to_path_buf())
}

/// セッションディレクトリは一時ディレクトリ配下（OS の一時領域と同じ寿命）
fn default_session_dir() -> PathBuf {
    std::env::temp_dir().join("quotebook-session")
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

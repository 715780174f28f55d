//! ログ初期化
//!
//! 既定は `warn`、`RUST_LOG` または `--verbose` で上書きする。
//! コマンド出力と混ざらないよう stderr へ出力し、TUI 実行中はファイルへ出力する。

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn env_filter(verbose: bool) -> EnvFilter {
    let default = if verbose { "quotebook=debug" } else { "warn" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// stderr へ出力
pub fn init_stderr(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .try_init();
}

/// ファイルへ出力（開けなければ stderr にフォールバック）
pub fn init_file(verbose: bool, path: &Path) {
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter(verbose))
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        Err(e) => {
            init_stderr(verbose);
            tracing::warn!(error = %e, path = %path.display(), "cannot open log file");
        }
    }
}

use crate::cli::{Command, GlobalArgs};
use crate::config::{AppPaths, Config};
use crate::error::Result;
use crate::fs::{FileSystem, RealFs};
use crate::notify::Notifier;
use crate::remote::HttpRemote;
use crate::report::TracingReporter;
use crate::storage::KeyValueStorage;
use crate::sync::SyncService;
use crate::widget::{SharedWidget, Widget};
use std::sync::Arc;

pub mod add;
pub mod categories;
pub mod end_session;
pub mod export;
pub mod filter;
pub mod import;
pub mod next;
pub mod show;
pub mod sync;
pub mod ui;
pub mod watch;

pub async fn dispatch(command: Command, global: GlobalArgs) -> std::result::Result<(), String> {
    let ctx = Context::load(&global).map_err(|e| e.to_string())?;

    match command {
        Command::Show => show::run(&ctx).await,
        Command::Next(args) => next::run(&ctx, args).await,
        Command::Add(args) => add::run(&ctx, args).await,
        Command::Categories => categories::run(&ctx).await,
        Command::Filter(args) => filter::run(&ctx, args).await,
        Command::Export(args) => export::run(&ctx, args).await,
        Command::Import(args) => import::run(&ctx, args).await,
        Command::Sync => sync::run(&ctx).await,
        Command::Watch(args) => watch::run(&ctx, args).await,
        Command::Ui => ui::run(&ctx).await,
        Command::EndSession => end_session::run(&ctx).await,
    }
}

/// コマンド実行に共通で必要なもの
pub struct Context {
    pub paths: AppPaths,
    pub fs: Arc<dyn FileSystem>,
    pub config: Config,
}

impl Context {
    /// パス解決と設定読み込み
    pub fn load(global: &GlobalArgs) -> Result<Self> {
        let paths = AppPaths::resolve(global.data_dir.clone(), global.session_dir.clone())?;
        let fs: Arc<dyn FileSystem> = Arc::new(RealFs);
        let config = Config::load(fs.as_ref(), &paths.data_dir)?;

        Ok(Self { paths, fs, config })
    }

    pub fn durable_storage(&self) -> KeyValueStorage {
        KeyValueStorage::new(Arc::clone(&self.fs), &self.paths.data_dir)
    }

    pub fn session_storage(&self) -> KeyValueStorage {
        KeyValueStorage::new(Arc::clone(&self.fs), &self.paths.session_dir)
    }

    /// ウィジェットを起動処理込みで構築
    pub fn widget(&self) -> Result<SharedWidget> {
        Ok(Widget::init(self.durable_storage(), self.session_storage())?.into_shared())
    }

    /// HTTP リモートを使う同期サービス
    pub fn sync_service(&self, notifier: Arc<dyn Notifier>) -> SyncService {
        let remote = HttpRemote::new(&self.config.http, self.config.sync.endpoint.clone());
        SyncService::new(
            Arc::new(remote),
            notifier,
            Arc::new(TracingReporter),
            self.config.sync.clone(),
        )
    }
}

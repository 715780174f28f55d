//! 名言ウィジェット TUI の Elm Architecture ベースのアプリケーション構造
//!
//! - `Model`: 画面状態（モード + 通知 + ダイアログ）
//! - `Msg`: アプリケーションへのメッセージ
//! - `update`: 状態遷移。ネットワーク処理は `UpdateEffect` で呼び出し側に委譲する

use crate::fs::FileSystem;
use crate::notify::Notifier;
use crate::quote::Quote;
use crate::transfer::{export_to_file, import_error_message, import_file};
use crate::widget::{lock, SharedWidget};
use crossterm::event::KeyCode;
use ratatui::widgets::ListState;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// 通知の表示時間
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(5);

// ============================================================================
// Mode（入力モード）
// ============================================================================

/// 追加フォームの入力欄
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Text,
    Category,
}

/// 追加フォーム
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddForm {
    pub text: String,
    pub category: String,
    pub focus: FormField,
}

impl AddForm {
    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Text => &mut self.text,
            FormField::Category => &mut self.category,
        }
    }
}

/// 入力モード
#[derive(Debug)]
pub enum Mode {
    /// 名言表示
    Main,
    /// 2項目の追加フォーム
    AddForm(AddForm),
    /// カテゴリ選択
    CategorySelect { state: ListState },
    /// インポートするファイルパスの入力
    ImportPrompt { path: String },
}

/// 一時通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub expires_at: Instant,
}

// ============================================================================
// Msg（アプリケーションへのメッセージ）
// ============================================================================

/// アプリケーションへのメッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// 終了
    Quit,
    /// 次の名言
    NextQuote,
    /// 追加フォームを開く
    OpenAddForm,
    /// カテゴリ選択を開く
    OpenCategories,
    /// エクスポート
    Export,
    /// インポート入力を開く
    OpenImport,
    /// 今すぐ同期
    SyncNow,
    /// 文字入力
    Input(char),
    /// 文字削除
    Backspace,
    /// フォームの入力欄を切り替え
    SwitchField,
    /// 確定
    Submit,
    /// キャンセル（メイン画面へ戻る）
    Cancel,
    Up,
    Down,
    /// エラーダイアログを閉じる
    DismissDialog,
    /// 通知を追加
    Notify(String),
    /// 期限切れ通知の削除
    Tick,
}

// ============================================================================
// Model（画面状態）
// ============================================================================

/// 画面状態
pub struct Model {
    pub widget: SharedWidget,
    pub fs: Arc<dyn FileSystem>,
    pub notifier: Arc<dyn Notifier>,
    /// エクスポート先
    pub export_path: PathBuf,
    pub mode: Mode,
    pub notifications: Vec<Notification>,
    /// エラーダイアログ（閉じるまで他の入力を受け付けない）
    pub dialog: Option<String>,
    pub should_quit: bool,
}

impl Model {
    pub fn new(
        widget: SharedWidget,
        fs: Arc<dyn FileSystem>,
        notifier: Arc<dyn Notifier>,
        export_path: PathBuf,
    ) -> Self {
        Self {
            widget,
            fs,
            notifier,
            export_path,
            mode: Mode::Main,
            notifications: Vec::new(),
            dialog: None,
            should_quit: false,
        }
    }

    /// キー入力をメッセージに変換
    pub fn key_to_msg(&self, key: KeyCode) -> Option<Msg> {
        if self.dialog.is_some() {
            return Some(Msg::DismissDialog);
        }

        match &self.mode {
            Mode::Main => match key {
                KeyCode::Char('q') | KeyCode::Esc => Some(Msg::Quit),
                KeyCode::Char('n') | KeyCode::Char(' ') => Some(Msg::NextQuote),
                KeyCode::Char('a') => Some(Msg::OpenAddForm),
                KeyCode::Char('c') => Some(Msg::OpenCategories),
                KeyCode::Char('e') => Some(Msg::Export),
                KeyCode::Char('i') => Some(Msg::OpenImport),
                KeyCode::Char('s') => Some(Msg::SyncNow),
                _ => None,
            },
            Mode::AddForm(_) | Mode::ImportPrompt { .. } => match key {
                KeyCode::Esc => Some(Msg::Cancel),
                KeyCode::Enter => Some(Msg::Submit),
                KeyCode::Tab | KeyCode::BackTab => Some(Msg::SwitchField),
                KeyCode::Backspace => Some(Msg::Backspace),
                KeyCode::Char(c) => Some(Msg::Input(c)),
                _ => None,
            },
            Mode::CategorySelect { .. } => match key {
                KeyCode::Esc | KeyCode::Char('q') => Some(Msg::Cancel),
                KeyCode::Enter => Some(Msg::Submit),
                KeyCode::Up | KeyCode::Char('k') => Some(Msg::Up),
                KeyCode::Down | KeyCode::Char('j') => Some(Msg::Down),
                _ => None,
            },
        }
    }

    fn notify(&mut self, message: String, now: Instant) {
        self.notifications.push(Notification {
            message,
            expires_at: now + NOTIFICATION_TTL,
        });
    }
}

// ============================================================================
// update（状態更新）
// ============================================================================

/// update() の戻り値
#[derive(Debug, Default, PartialEq, Eq)]
pub struct UpdateEffect {
    /// 追加した名言をリモートへ送信すべき
    pub push: Option<Quote>,
    /// 同期サイクルを起動すべき
    pub sync_now: bool,
}

impl UpdateEffect {
    fn none() -> Self {
        Self::default()
    }
}

/// メッセージに応じて状態を更新
pub fn update(model: &mut Model, msg: Msg, now: Instant) -> UpdateEffect {
    match msg {
        Msg::Quit => {
            model.should_quit = true;
            UpdateEffect::none()
        }
        Msg::NextQuote => {
            let result = lock(&model.widget).show_next().map(|_| ());
            report_error(model, result);
            UpdateEffect::none()
        }
        Msg::OpenAddForm => {
            model.mode = Mode::AddForm(AddForm::default());
            UpdateEffect::none()
        }
        Msg::OpenCategories => {
            let widget = lock(&model.widget);
            let selected = widget.selected().as_value().to_string();
            let index = widget
                .options()
                .iter()
                .position(|o| *o == selected)
                .unwrap_or(0);
            drop(widget);

            let mut state = ListState::default();
            state.select(Some(index));
            model.mode = Mode::CategorySelect { state };
            UpdateEffect::none()
        }
        Msg::Export => {
            export(model, now);
            UpdateEffect::none()
        }
        Msg::OpenImport => {
            model.mode = Mode::ImportPrompt {
                path: String::new(),
            };
            UpdateEffect::none()
        }
        Msg::SyncNow => UpdateEffect {
            push: None,
            sync_now: true,
        },
        Msg::Input(c) => {
            match &mut model.mode {
                Mode::AddForm(form) => form.focused_mut().push(c),
                Mode::ImportPrompt { path } => path.push(c),
                _ => {}
            }
            UpdateEffect::none()
        }
        Msg::Backspace => {
            match &mut model.mode {
                Mode::AddForm(form) => {
                    form.focused_mut().pop();
                }
                Mode::ImportPrompt { path } => {
                    path.pop();
                }
                _ => {}
            }
            UpdateEffect::none()
        }
        Msg::SwitchField => {
            if let Mode::AddForm(form) = &mut model.mode {
                form.focus = match form.focus {
                    FormField::Text => FormField::Category,
                    FormField::Category => FormField::Text,
                };
            }
            UpdateEffect::none()
        }
        Msg::Submit => submit(model),
        Msg::Cancel => {
            model.mode = Mode::Main;
            UpdateEffect::none()
        }
        Msg::Up => {
            if let Mode::CategorySelect { state } = &mut model.mode {
                let current = state.selected().unwrap_or(0);
                state.select(Some(current.saturating_sub(1)));
            }
            UpdateEffect::none()
        }
        Msg::Down => {
            let len = lock(&model.widget).options().len();
            if let Mode::CategorySelect { state } = &mut model.mode {
                let current = state.selected().unwrap_or(0);
                state.select(Some((current + 1).min(len.saturating_sub(1))));
            }
            UpdateEffect::none()
        }
        Msg::DismissDialog => {
            model.dialog = None;
            UpdateEffect::none()
        }
        Msg::Notify(message) => {
            model.notify(message, now);
            UpdateEffect::none()
        }
        Msg::Tick => {
            model.notifications.retain(|n| n.expires_at > now);
            UpdateEffect::none()
        }
    }
}

/// 現在のモードで確定
fn submit(model: &mut Model) -> UpdateEffect {
    let mode = std::mem::replace(&mut model.mode, Mode::Main);

    match mode {
        Mode::AddForm(form) => {
            let result = lock(&model.widget).add_quote(&form.text, &form.category);
            match result {
                Ok(quote) => UpdateEffect {
                    push: Some(quote),
                    sync_now: false,
                },
                Err(e) => {
                    // 入力内容を保持したままダイアログを出す
                    model.dialog = Some(e.to_string());
                    model.mode = Mode::AddForm(form);
                    UpdateEffect::none()
                }
            }
        }
        Mode::CategorySelect { state } => {
            let mut widget = lock(&model.widget);
            let value = state
                .selected()
                .and_then(|i| widget.options().get(i).map(|o| o.to_string()));
            let result = match value {
                Some(value) => widget.select_category(&value).map(|_| ()),
                None => Ok(()),
            };
            drop(widget);
            report_error(model, result);
            UpdateEffect::none()
        }
        Mode::ImportPrompt { path } => {
            let path = PathBuf::from(path.trim());
            let mut widget = lock(&model.widget);
            let result = import_file(
                &mut widget,
                model.fs.as_ref(),
                &path,
                model.notifier.as_ref(),
            );
            drop(widget);
            if let Err(e) = result {
                model.dialog = Some(import_error_message(&e));
            }
            UpdateEffect::none()
        }
        Mode::Main => UpdateEffect::none(),
    }
}

/// エクスポートして結果を通知
fn export(model: &mut Model, now: Instant) {
    let widget = lock(&model.widget);
    let count = widget.quotes().len();
    let result = export_to_file(model.fs.as_ref(), &model.export_path, widget.quotes());
    drop(widget);

    match result {
        Ok(()) => {
            let message = format!(
                "Exported {} quote(s) to {}",
                count,
                model.export_path.display()
            );
            model.notify(message, now);
        }
        Err(e) => model.dialog = Some(format!("Error exporting JSON: {}", e)),
    }
}

fn report_error(model: &mut Model, result: crate::error::Result<()>) {
    if let Err(e) = result {
        model.dialog = Some(e.to_string());
    }
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;

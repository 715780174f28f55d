//! JSON エクスポート / インポート

use crate::error::{QbError, Result};
use crate::fs::FileSystem;
use crate::notify::{Notifier, IMPORT_MESSAGE};
use crate::quote::Quote;
use crate::widget::Widget;
use std::path::Path;

/// エクスポートの既定ファイル名
pub const EXPORT_FILE_NAME: &str = "quotes.json";

/// トップレベルが配列でないときのメッセージ
const INVALID_FORMAT_MESSAGE: &str = "Invalid JSON format";

/// 名言一覧を整形済み JSON（インデント2）に変換
pub fn export_all(quotes: &[Quote]) -> Result<String> {
    Ok(serde_json::to_string_pretty(quotes)?)
}

/// 名言一覧をファイルへ書き出す（ストアは変更しない）
pub fn export_to_file(fs: &dyn FileSystem, path: &Path, quotes: &[Quote]) -> Result<()> {
    let content = export_all(quotes)?;
    fs.write(path, content.as_bytes())
}

/// インポートファイルの内容を解釈
///
/// - JSON として不正ならデコードエラー
/// - トップレベルが配列でなければ `InvalidImport`
/// - 要素の形は検証しない（欠けたフィールドは空文字列、余分なフィールドは無視）
pub fn parse_import(contents: &str) -> Result<Vec<Quote>> {
    let value: serde_json::Value = serde_json::from_str(contents)?;
    if !value.is_array() {
        return Err(QbError::InvalidImport(INVALID_FORMAT_MESSAGE.to_string()));
    }
    Ok(serde_json::from_value(value)?)
}

/// インポートを実行
///
/// 成功時は無条件に追加・保存・再計算・表示更新を行い、通知を出す。
/// 失敗時はウィジェットを変更しない。
pub fn import_all(widget: &mut Widget, contents: &str, notifier: &dyn Notifier) -> Result<usize> {
    let quotes = parse_import(contents)?;
    let count = widget.import_quotes(quotes)?;
    tracing::info!(count, "imported quotes");
    notifier.show(IMPORT_MESSAGE);
    Ok(count)
}

/// ファイルからインポート
pub fn import_file(
    widget: &mut Widget,
    fs: &dyn FileSystem,
    path: &Path,
    notifier: &dyn Notifier,
) -> Result<usize> {
    let contents = fs.read_to_string(path)?;
    import_all(widget, &contents, notifier)
}

/// ユーザー向けのインポート失敗メッセージ
pub fn import_error_message(error: &QbError) -> String {
    format!("Error importing JSON: {}", error)
}

#[cfg(test)]
#[path = "transfer_test.rs"]
mod tests;

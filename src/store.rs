//! 名言ストア
//!
//! 挿入順を保持する名言の列。永続ストレージの `quotes` キーが唯一の正となり、
//! 起動時にそこから再構築される。

use crate::error::Result;
use crate::quote::{default_quotes, Quote};
use crate::storage::{KeyValueStorage, QUOTES_KEY};

/// 名言ストア
#[derive(Debug)]
pub struct QuoteStore {
    quotes: Vec<Quote>,
    storage: KeyValueStorage,
}

impl QuoteStore {
    /// 初期データで作成（永続ストレージはまだ読まない）
    pub fn new(storage: KeyValueStorage) -> Self {
        Self::with_quotes(storage, default_quotes())
    }

    /// 任意の初期内容で作成
    pub fn with_quotes(storage: KeyValueStorage, quotes: Vec<Quote>) -> Self {
        Self { quotes, storage }
    }

    /// 永続ストレージから読み込み
    ///
    /// - キーが無ければ現在の内容（初期データ）を維持
    /// - デコードできなければエラーをそのまま返す
    pub fn load(&mut self) -> Result<()> {
        if let Some(quotes) = self.storage.get_json::<Vec<Quote>>(QUOTES_KEY)? {
            self.quotes = quotes;
        }
        Ok(())
    }

    /// 現在の内容を永続ストレージへ書き込み
    pub fn save(&self) -> Result<()> {
        self.storage.set_json(QUOTES_KEY, &self.quotes)
    }

    /// 1件追加（入力検証は呼び出し側の責務）
    pub fn add(&mut self, quote: Quote) {
        self.quotes.push(quote);
    }

    /// 本文が未登録のものだけを追加し、追加件数を返す
    ///
    /// 同じマージ内で先に追加した名言も重複判定の対象になる。
    pub fn merge(&mut self, incoming: impl IntoIterator<Item = Quote>) -> usize {
        let mut added = 0;
        for quote in incoming {
            if !self.contains_text(&quote.text) {
                self.quotes.push(quote);
                added += 1;
            }
        }
        added
    }

    /// 無条件に追加（インポート用）
    pub fn extend(&mut self, incoming: impl IntoIterator<Item = Quote>) {
        self.quotes.extend(incoming);
    }

    /// 同じ本文の名言があるか
    pub fn contains_text(&self, text: &str) -> bool {
        self.quotes.iter().any(|q| q.text == text)
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;

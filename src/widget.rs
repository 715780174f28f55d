//! 名言ウィジェットのコンテキスト
//!
//! 名言ストア・カテゴリインデックス・表示セレクタを1つにまとめ、
//! 「変更 → 保存 → カテゴリ再計算 → 表示更新」の順序をここで保証する。
//! 同期や TUI には `SharedWidget` として参照で渡す。

use crate::category::{CategoryFilter, CategoryIndex};
use crate::display::{DisplaySelector, DisplayState};
use crate::error::Result;
use crate::quote::Quote;
use crate::storage::KeyValueStorage;
use crate::store::QuoteStore;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{Arc, Mutex, MutexGuard};

/// 複数タスクから共有するウィジェット
///
/// ロックは同期的な「変更 + 永続化」の間だけ保持し、`.await` をまたがない。
pub type SharedWidget = Arc<Mutex<Widget>>;

/// 共有ウィジェットをロック（ポイズン時も中身を使う）
pub fn lock(shared: &SharedWidget) -> MutexGuard<'_, Widget> {
    shared.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// ウィジェット本体
#[derive(Debug)]
pub struct Widget {
    store: QuoteStore,
    categories: CategoryIndex,
    display: DisplaySelector,
    rng: StdRng,
}

impl Widget {
    /// 初期データで構築（ストレージは読まない）
    pub fn new(durable: KeyValueStorage, session: KeyValueStorage, rng: StdRng) -> Self {
        Self {
            store: QuoteStore::new(durable.clone()),
            categories: CategoryIndex::new(durable),
            display: DisplaySelector::new(session),
            rng,
        }
    }

    /// 起動処理
    ///
    /// 1. 永続ストレージから名言を読み込む
    /// 2. カテゴリを再計算し、保存済みの選択を復元（あれば表示更新）
    /// 3. セッションに最後の名言があればそれを表示、無ければランダムに選ぶ
    pub fn init(durable: KeyValueStorage, session: KeyValueStorage) -> Result<Self> {
        let mut widget = Self::new(durable, session, StdRng::from_entropy());
        widget.start()?;
        Ok(widget)
    }

    pub(crate) fn start(&mut self) -> Result<()> {
        self.store.load()?;
        self.categories.recompute(self.store.quotes());
        if self.categories.restore_selection()? {
            self.show_next()?;
        }
        if !self.display.restore_last_shown()? {
            self.show_next()?;
        }
        Ok(())
    }

    /// 現在のフィルタで名言をランダムに表示
    pub fn show_next(&mut self) -> Result<&DisplayState> {
        self.display
            .pick_and_show(self.store.quotes(), self.categories.selected(), &mut self.rng)
    }

    /// カテゴリ選択を変更して表示を更新
    pub fn select_category(&mut self, value: &str) -> Result<&DisplayState> {
        self.categories.on_selection_change(value)?;
        self.show_next()
    }

    /// ユーザー入力から名言を追加
    ///
    /// 入力が空なら何も変更せずに `Validation` エラー。
    pub fn add_quote(&mut self, text: &str, category: &str) -> Result<Quote> {
        let quote = Quote::from_input(text, category)?;
        self.store.add(quote.clone());
        self.after_mutation()?;
        Ok(quote)
    }

    /// リモートから取得した名言を本文の重複を除いてマージし、追加件数を返す
    pub fn merge_remote(&mut self, incoming: Vec<Quote>) -> Result<usize> {
        let added = self.store.merge(incoming);
        if added > 0 {
            self.after_mutation()?;
        }
        Ok(added)
    }

    /// インポートした名言を無条件に追加
    pub fn import_quotes(&mut self, incoming: Vec<Quote>) -> Result<usize> {
        let count = incoming.len();
        self.store.extend(incoming);
        self.after_mutation()?;
        Ok(count)
    }

    /// セッションを終了（最後に表示した名言を破棄）
    pub fn end_session(&mut self) -> Result<()> {
        self.display.end_session()
    }

    /// 変更後の共通処理
    fn after_mutation(&mut self) -> Result<()> {
        self.store.save()?;
        self.categories.recompute(self.store.quotes());
        self.categories.restore_selection()?;
        self.show_next()?;
        Ok(())
    }

    pub fn quotes(&self) -> &[Quote] {
        self.store.quotes()
    }

    pub fn options(&self) -> Vec<&str> {
        self.categories.options()
    }

    pub fn has_option(&self, value: &str) -> bool {
        self.categories.has_option(value)
    }

    pub fn selected(&self) -> &CategoryFilter {
        self.categories.selected()
    }

    pub fn state(&self) -> &DisplayState {
        self.display.state()
    }

    /// 共有用にラップ
    pub fn into_shared(self) -> SharedWidget {
        Arc::new(Mutex::new(self))
    }
}


#[cfg(test)]
#[path = "widget_test.rs"]
mod tests;

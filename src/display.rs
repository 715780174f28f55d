//! 表示セレクタ
//!
//! フィルタに一致する名言から1件をランダムに選んで表示状態にし、
//! セッションストレージへ「最後に表示した名言」として保存する。

use crate::category::CategoryFilter;
use crate::error::Result;
use crate::quote::Quote;
use crate::storage::{KeyValueStorage, LAST_QUOTE_KEY};
use rand::Rng;

/// 一致する名言が無いときの表示
pub const NO_QUOTES_MESSAGE: &str = "No quotes found for this category.";

/// 表示状態
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DisplayState {
    /// 一致する名言なし
    #[default]
    Empty,
    /// 名言を表示中
    Showing(Quote),
}

impl DisplayState {
    pub fn quote(&self) -> Option<&Quote> {
        match self {
            DisplayState::Empty => None,
            DisplayState::Showing(quote) => Some(quote),
        }
    }
}

/// 表示セレクタ
#[derive(Debug)]
pub struct DisplaySelector {
    state: DisplayState,
    session: KeyValueStorage,
}

impl DisplaySelector {
    pub fn new(session: KeyValueStorage) -> Self {
        Self {
            state: DisplayState::Empty,
            session,
        }
    }

    /// フィルタに一致する名言から1件選んで表示
    ///
    /// 候補が無ければ `Empty` にし、セッションの値は変更しない。
    pub fn pick_and_show<R: Rng>(
        &mut self,
        quotes: &[Quote],
        filter: &CategoryFilter,
        rng: &mut R,
    ) -> Result<&DisplayState> {
        let candidates: Vec<&Quote> = quotes.iter().filter(|q| filter.matches(q)).collect();

        if candidates.is_empty() {
            self.state = DisplayState::Empty;
            return Ok(&self.state);
        }

        let quote = candidates[rng.gen_range(0..candidates.len())].clone();
        self.session.set_json(LAST_QUOTE_KEY, &quote)?;
        self.state = DisplayState::Showing(quote);
        Ok(&self.state)
    }

    /// セッションに保存された名言を表示
    ///
    /// 復元できた場合は true（起動時のランダム選択を省略する）。
    pub fn restore_last_shown(&mut self) -> Result<bool> {
        match self.session.get_json::<Quote>(LAST_QUOTE_KEY)? {
            Some(quote) => {
                self.state = DisplayState::Showing(quote);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// セッションを終了（最後に表示した名言を破棄）
    pub fn end_session(&mut self) -> Result<()> {
        self.session.remove_item(LAST_QUOTE_KEY)
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }
}

#[cfg(test)]
#[path = "display_test.rs"]
mod tests;

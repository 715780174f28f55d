//! カテゴリインデックス
//!
//! 名言ストアから重複なしのカテゴリ一覧（初出順）を導出し、
//! 選択中のフィルタを永続ストレージに保持する。

use crate::error::Result;
use crate::quote::Quote;
use crate::storage::{KeyValueStorage, SELECTED_CATEGORY_KEY};
use std::fmt;

/// 「すべて」を表す選択肢の値
pub const ALL: &str = "all";

/// カテゴリフィルタ
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// 選択肢の値から変換（`"all"` はフィルタなし）
    pub fn from_value(value: &str) -> Self {
        if value == ALL {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(value.to_string())
        }
    }

    /// 選択肢の値
    pub fn as_value(&self) -> &str {
        match self {
            CategoryFilter::All => ALL,
            CategoryFilter::Category(name) => name,
        }
    }

    /// 名言がフィルタに一致するか
    pub fn matches(&self, quote: &Quote) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(name) => quote.category == *name,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "All Categories"),
            CategoryFilter::Category(name) => write!(f, "{}", name),
        }
    }
}

/// 重複なしのカテゴリを初出順で返す
pub fn distinct_categories(quotes: &[Quote]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for quote in quotes {
        if !categories.contains(&quote.category) {
            categories.push(quote.category.clone());
        }
    }
    categories
}

/// カテゴリインデックス
#[derive(Debug)]
pub struct CategoryIndex {
    categories: Vec<String>,
    selected: CategoryFilter,
    storage: KeyValueStorage,
}

impl CategoryIndex {
    pub fn new(storage: KeyValueStorage) -> Self {
        Self {
            categories: Vec::new(),
            selected: CategoryFilter::All,
            storage,
        }
    }

    /// ストアからカテゴリ一覧を再計算
    pub fn recompute(&mut self, quotes: &[Quote]) {
        self.categories = distinct_categories(quotes);
    }

    /// 選択肢（先頭は `"all"`）
    pub fn options(&self) -> Vec<&str> {
        std::iter::once(ALL)
            .chain(self.categories.iter().map(String::as_str))
            .collect()
    }

    /// 値が選択肢に含まれるか
    pub fn has_option(&self, value: &str) -> bool {
        value == ALL || self.categories.iter().any(|c| c == value)
    }

    /// 永続化された選択を復元
    ///
    /// 保存値があれば true を返す（呼び出し側で表示を更新する）。
    /// 保存値が選択肢に無い場合は `All` に戻す。
    pub fn restore_selection(&mut self) -> Result<bool> {
        let Some(value) = self.storage.get_item(SELECTED_CATEGORY_KEY)? else {
            return Ok(false);
        };

        self.selected = if self.has_option(&value) {
            CategoryFilter::from_value(&value)
        } else {
            tracing::debug!(category = %value, "stored category no longer present");
            CategoryFilter::All
        };
        Ok(true)
    }

    /// 選択変更（表示更新より先に永続化する）
    pub fn on_selection_change(&mut self, value: &str) -> Result<()> {
        self.storage.set_item(SELECTED_CATEGORY_KEY, value)?;
        self.selected = CategoryFilter::from_value(value);
        Ok(())
    }

    pub fn selected(&self) -> &CategoryFilter {
        &self.selected
    }
}

#[cfg(test)]
#[path = "category_test.rs"]
mod tests;

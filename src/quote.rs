//! 名言レコード

use crate::error::{QbError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 手動追加時の入力不足メッセージ
pub const MISSING_FIELDS_MESSAGE: &str = "Please enter both quote and category.";

/// 名言
///
/// 識別子は持たない。重複判定は `text` の完全一致で行う。
/// インポートでは要素の形を検証しないため、欠けたフィールドは空文字列になる。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quote {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub category: String,
}

impl Quote {
    /// 検証なしで構築（サーバー取得・テスト用）
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
        }
    }

    /// ユーザー入力から構築
    ///
    /// 前後の空白を除去し、どちらかが空なら `Validation` エラー。
    pub fn from_input(text: &str, category: &str) -> Result<Self> {
        let text = text.trim();
        let category = category.trim();

        if text.is_empty() || category.is_empty() {
            return Err(QbError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
        }

        Ok(Self::new(text, category))
    }

    /// 同じ本文かどうか（マージ時の重複判定）
    pub fn same_text(&self, other: &Quote) -> bool {
        self.text == other.text
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"\nCategory: {}", self.text, self.category)
    }
}

/// 永続データが無い場合の初期データ
pub fn default_quotes() -> Vec<Quote> {
    vec![
        Quote::new("Success is not final, failure is not fatal.", "Motivation"),
        Quote::new("Learning never exhausts the mind.", "Education"),
        Quote::new(
            "Code is like humor. When you have to explain it, it’s bad.",
            "Programming",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_input_trims_fields() {
        let quote = Quote::from_input("  Stay hungry.  ", " Life ").unwrap();
        assert_eq!(quote, Quote::new("Stay hungry.", "Life"));
    }

    #[test]
    fn test_from_input_rejects_empty_text() {
        let err = Quote::from_input("   ", "Life").unwrap_err();
        assert!(matches!(err, QbError::Validation(_)));
        assert_eq!(err.to_string(), MISSING_FIELDS_MESSAGE);
    }

    #[test]
    fn test_from_input_rejects_empty_category() {
        assert!(Quote::from_input("Stay hungry.", "").is_err());
    }

    #[test]
    fn test_deserialize_missing_fields_become_empty() {
        let quote: Quote = serde_json::from_str(r#"{"text":"only text","extra":1}"#).unwrap();
        assert_eq!(quote, Quote::new("only text", ""));
    }

    #[test]
    fn test_display_format() {
        let quote = Quote::new("Hello", "Greeting");
        assert_eq!(quote.to_string(), "\"Hello\"\nCategory: Greeting");
    }

    #[test]
    fn test_default_quotes() {
        let quotes = default_quotes();
        assert_eq!(quotes.len(), 3);
        assert!(quotes.iter().all(|q| !q.text.is_empty() && !q.category.is_empty()));
    }
}

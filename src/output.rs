use crate::category::CategoryFilter;
use crate::display::{DisplayState, NO_QUOTES_MESSAGE};
use owo_colors::OwoColorize;

/// 表示状態を端末向けに整形
pub fn format_state(state: &DisplayState) -> String {
    match state {
        DisplayState::Empty => NO_QUOTES_MESSAGE.dimmed().to_string(),
        DisplayState::Showing(quote) => format!(
            "\"{}\"\n{} {}",
            quote.text.bold(),
            "Category:".dimmed(),
            quote.category.cyan()
        ),
    }
}

pub fn print_state(state: &DisplayState) {
    println!("{}", format_state(state));
}

/// フィルタ行
pub fn format_filter(filter: &CategoryFilter) -> String {
    format!("{} {}", "Filter:".dimmed(), filter.to_string().cyan())
}

/// 成功メッセージ
pub fn success(message: &str) -> String {
    format!("{} {}", "✓".green(), message)
}

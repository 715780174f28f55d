//! 画面描画

use super::app::{FormField, Mode, Model};
use crate::display::{DisplayState, NO_QUOTES_MESSAGE};
use crate::widget::lock;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};

/// コンテンツに合わせたダイアログ領域を計算（中央寄せ）
fn dialog_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// 画面を描画
pub fn view(f: &mut Frame, model: &Model) {
    let widget = lock(&model.widget);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(model.notifications.len() as u16),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    // 通知（新しいものが上）
    let notices: Vec<Line> = model
        .notifications
        .iter()
        .rev()
        .map(|n| {
            Line::from(n.message.as_str())
                .style(Style::default().fg(Color::Black).bg(Color::Yellow))
        })
        .collect();
    f.render_widget(Paragraph::new(notices), chunks[0]);

    // 名言表示
    let body = match widget.state() {
        DisplayState::Empty => {
            Text::from(NO_QUOTES_MESSAGE).style(Style::default().fg(Color::DarkGray))
        }
        DisplayState::Showing(quote) => Text::from(vec![
            Line::from(format!("\"{}\"", quote.text))
                .style(Style::default().add_modifier(Modifier::BOLD)),
            Line::from(""),
            Line::from(format!("Category: {}", quote.category))
                .style(Style::default().fg(Color::Cyan)),
        ]),
    };
    let display = Paragraph::new(body)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" Quote ").borders(Borders::ALL));
    f.render_widget(display, chunks[1]);

    // 現在のフィルタ
    let filter = Paragraph::new(format!(
        "Filter: {}   Quotes: {}",
        widget.selected(),
        widget.quotes().len()
    ));
    f.render_widget(filter, chunks[2]);

    // ヘルプ表示
    let help = match &model.mode {
        Mode::Main => "n: new quote  a: add  c: category  e: export  i: import  s: sync  q: quit",
        Mode::AddForm(_) => "tab: switch field  enter: add  esc: cancel",
        Mode::CategorySelect { .. } => "↑/↓: move  enter: select  esc: cancel",
        Mode::ImportPrompt { .. } => "enter: import  esc: cancel",
    };
    f.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        chunks[3],
    );

    match &model.mode {
        Mode::Main => {}
        Mode::AddForm(form) => {
            let area = dialog_rect(60, 6, f.area());
            let field = |label: &str, value: &str, focused: bool| {
                let style = if focused {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default()
                };
                let cursor = if focused { "_" } else { "" };
                Line::from(format!("{}: {}{}", label, value, cursor)).style(style)
            };
            let lines = vec![
                field("Quote", &form.text, form.focus == FormField::Text),
                field("Category", &form.category, form.focus == FormField::Category),
            ];
            f.render_widget(Clear, area);
            f.render_widget(
                Paragraph::new(lines)
                    .block(Block::default().title(" Add Quote ").borders(Borders::ALL)),
                area,
            );
        }
        Mode::CategorySelect { state } => {
            let options = widget.options();
            let area = dialog_rect(40, options.len() as u16 + 2, f.area());
            let items: Vec<ListItem> = options
                .iter()
                .map(|o| {
                    if *o == crate::category::ALL {
                        ListItem::new("All Categories")
                    } else {
                        ListItem::new(o.to_string())
                    }
                })
                .collect();
            let list = List::new(items)
                .block(Block::default().title(" Category ").borders(Borders::ALL))
                .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
                .highlight_symbol("> ");
            let mut state = state.clone();
            f.render_widget(Clear, area);
            f.render_stateful_widget(list, area, &mut state);
        }
        Mode::ImportPrompt { path } => {
            let area = dialog_rect(60, 3, f.area());
            f.render_widget(Clear, area);
            f.render_widget(
                Paragraph::new(format!("{}_", path))
                    .block(Block::default().title(" Import JSON file ").borders(Borders::ALL)),
                area,
            );
        }
    }

    if let Some(message) = &model.dialog {
        let area = dialog_rect(60, 5, f.area());
        f.render_widget(Clear, area);
        f.render_widget(
            Paragraph::new(message.as_str())
                .wrap(Wrap { trim: true })
                .style(Style::default().fg(Color::Red))
                .block(Block::default().title(" Error ").borders(Borders::ALL)),
            area,
        );
    }
}

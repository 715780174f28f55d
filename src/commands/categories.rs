//! quotebook categories コマンド

use super::Context;
use crate::category::ALL;
use crate::widget::lock;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};

pub async fn run(ctx: &Context) -> Result<(), String> {
    let widget = ctx.widget().map_err(|e| e.to_string())?;
    let widget = lock(&widget);
    let selected = widget.selected().as_value();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["", "Category", "Quotes"]);

    for option in widget.options() {
        let count = if option == ALL {
            widget.quotes().len()
        } else {
            widget.quotes().iter().filter(|q| q.category == option).count()
        };
        let marker = if option == selected { "*" } else { "" };
        let color = if option == selected {
            Color::Green
        } else {
            Color::Reset
        };

        table.add_row(vec![
            Cell::new(marker).fg(Color::Green),
            Cell::new(option).fg(color),
            Cell::new(count),
        ]);
    }

    println!("{table}");
    Ok(())
}

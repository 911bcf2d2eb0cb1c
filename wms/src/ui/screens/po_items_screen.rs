use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::state::{LoadingState, PoItemsState};
use crate::ui::{
    components::{empty_state, help_bar, screen_title},
    layouts, theme, utils,
};

pub fn render(f: &mut Frame, state: &PoItemsState) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());

    let title = format!(
        "PO {} - {}",
        state.order.document_number, state.order.vendor_name
    );
    screen_title::render_screen_title(f, title_area, &title, &LoadingState::NotStarted);
    render_items(f, content_area, state);
    help_bar::render_help_bar(
        f,
        help_area,
        "j/k: move | Enter: item details | h: back | ?: help",
    );
}

fn render_items(f: &mut Frame, area: Rect, state: &PoItemsState) {
    if state.order.lines.is_empty() {
        empty_state::render_empty_state(f, area, "Items", "No items on this order", None);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Item"),
        Cell::from(Text::from("Qty").right_aligned()),
        Cell::from("Description"),
        Cell::from("Line"),
        Cell::from("Locator"),
        Cell::from("Org"),
    ])
    .style(theme::header_style())
    .underlined();

    let rows: Vec<Row> = state
        .order
        .lines
        .iter()
        .map(|line| {
            let locator = match line.effective_locator() {
                Some(locator) => Cell::from(locator.to_string()),
                None => Cell::from("Not assigned").style(theme::muted_style()),
            };

            Row::new(vec![
                Cell::from(utils::or_na(line.item_code())),
                Cell::from(
                    Text::from(utils::fmt_quantity(line.transaction_quantity)).right_aligned(),
                ),
                Cell::from(utils::or_na(line.item_description())),
                Cell::from(utils::or_na(line.document_line_number.as_deref())),
                locator,
                Cell::from(utils::or_na(line.organization_code.as_deref())),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(14),
            Constraint::Percentage(8),
            Constraint::Percentage(38),
            Constraint::Percentage(8),
            Constraint::Percentage(20),
            Constraint::Percentage(12),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Items ({})", state.order.item_count)),
    )
    .column_spacing(theme::TABLE_COLUMN_SPACING)
    .row_highlight_style(theme::selection_style());

    f.render_stateful_widget(table, area, &mut state.table_state.borrow_mut());
}

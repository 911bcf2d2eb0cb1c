use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::state::{LoadingState, PurchaseOrdersState};
use crate::ui::{
    components::{empty_state, help_bar, screen_title},
    layouts, theme,
};

pub fn render(f: &mut Frame, state: &PurchaseOrdersState) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());

    screen_title::render_screen_title(f, title_area, "Receive Goods", &state.loading);
    render_content(f, content_area, state);
    help_bar::render_help_bar(
        f,
        help_area,
        "j/k: move | Enter: open order | r: refresh | h: back | ?: help",
    );
}

fn render_content(f: &mut Frame, area: Rect, state: &PurchaseOrdersState) {
    if state.lines.is_empty() {
        match &state.loading {
            LoadingState::Loading(..) | LoadingState::NotStarted => {
                empty_state::render_loading_state(
                    f,
                    area,
                    "Purchase Orders",
                    "Loading purchase orders...",
                );
            }
            LoadingState::Error(error) => {
                empty_state::render_error_state(
                    f,
                    area,
                    "Purchase Orders",
                    error,
                    "Press r to retry",
                );
            }
            LoadingState::Loaded => {
                empty_state::render_empty_state(
                    f,
                    area,
                    "Purchase Orders",
                    "No purchase orders found",
                    Some("Press r to refresh"),
                );
            }
        }
        return;
    }

    let orders = state.grouped_orders();

    let header = Row::new(vec![
        Cell::from("Document"),
        Cell::from("Vendor"),
        Cell::from(Text::from("Items").right_aligned()),
    ])
    .style(theme::header_style())
    .underlined();

    let rows: Vec<Row> = orders
        .iter()
        .map(|order| {
            Row::new(vec![
                Cell::from(order.document_number.clone()),
                Cell::from(order.vendor_name.clone()),
                Cell::from(Text::from(order.item_count.to_string()).right_aligned()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(30),
            Constraint::Percentage(55),
            Constraint::Percentage(15),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Purchase Orders ({})", orders.len())),
    )
    .row_highlight_style(theme::selection_style());

    f.render_stateful_widget(table, area, &mut state.table_state.borrow_mut());
}

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::state::{ItemDetailState, LoadingState};
use crate::ui::{
    components::{help_bar, receipt_confirmation, screen_title},
    layouts, utils,
};

pub fn render(f: &mut Frame, state: &ItemDetailState) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());
    let line = &state.line;

    let title = format!("Item {}", utils::or_na(line.item_code()));
    screen_title::render_screen_title(f, title_area, &title, &LoadingState::NotStarted);

    let quantity = utils::fmt_quantity(line.transaction_quantity);
    let actual_locator = (!line.actual_locator.is_empty()).then_some(line.actual_locator.as_str());

    let lines = vec![
        utils::detail_line("Item", line.item_code(), "N/A"),
        utils::detail_line("Description", line.item_description(), "N/A"),
        utils::detail_line("Quantity", Some(quantity.as_str()), "0"),
        utils::detail_line("UOM", line.uom.as_deref(), "N/A"),
        Line::from(""),
        utils::detail_line("PO Number", line.document_number(), "N/A"),
        utils::detail_line("Line Number", line.document_line_number.as_deref(), "N/A"),
        utils::detail_line("Vendor", line.vendor_name(), "N/A"),
        utils::detail_line("Organization", line.organization_code.as_deref(), "N/A"),
        Line::from(""),
        utils::detail_line("Locator", line.locator(), "Not assigned"),
        utils::detail_line("Actual Locator", actual_locator, "Not scanned"),
    ];

    let details =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Details"));
    f.render_widget(details, content_area);

    help_bar::render_help_bar(
        f,
        help_area,
        "s: scan pallet locator | c: confirm receipt | h: back | ?: help",
    );

    if state.confirming {
        receipt_confirmation::render_receipt_confirmation(f, line);
    }
}

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::ui::{layouts, theme, utils};
use wms_api::endpoints::InventoryLine;

/// Body of the receipt confirmation; the scanned locator wins over the planned one
pub fn confirmation_message(line: &InventoryLine) -> String {
    format!(
        "Confirm receipt of {}?\n\nQuantity: {}\nLocator: {}",
        utils::or_na(line.item_code()),
        utils::fmt_quantity(line.transaction_quantity),
        utils::or_na(line.effective_locator()),
    )
}

/// Render the confirmation popup for receiving a purchase-order line
pub fn render_receipt_confirmation(f: &mut Frame, line: &InventoryLine) {
    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::MEDIUM,
        " Confirm Receipt ",
        theme::accent_border_style(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(4),    // Message
            Constraint::Length(1), // Empty line
            Constraint::Length(1), // Instructions
        ])
        .split(inner);

    let message = Paragraph::new(confirmation_message(line))
        .style(theme::form_field_style().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    f.render_widget(message, chunks[0]);

    let instructions = Line::from(vec![
        Span::styled(
            "[Y]es ",
            Style::default()
                .fg(theme::COLOR_SUCCESS)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("/ "),
        Span::styled(
            "[N]o ",
            Style::default()
                .fg(theme::COLOR_ERROR)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("/ "),
        Span::styled("[Esc]", Style::default().fg(theme::COLOR_HELP_TEXT)),
        Span::raw(" Cancel"),
    ]);
    f.render_widget(
        Paragraph::new(instructions).alignment(Alignment::Center),
        chunks[2],
    );
}

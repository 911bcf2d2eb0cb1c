use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::state::{LoadingState, ScannerState};
use crate::ui::{
    components::{help_bar, screen_title},
    layouts, theme, utils,
};

pub fn render(f: &mut Frame, state: &ScannerState) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());

    screen_title::render_screen_title(f, title_area, "Barcode Scanner", &LoadingState::NotStarted);

    let target = match &state.target {
        Some(line) => Line::from(vec![
            Span::raw("Scanning pallet locator for "),
            Span::styled(utils::or_na(line.item_code()), theme::header_style()),
        ]),
        None => Line::from(Span::styled("Free scan", theme::help_text_style())),
    };

    let viewfinder = layouts::centered_popup(60, 60, content_area);
    let lines = vec![
        Line::from(""),
        target,
        Line::from(""),
        Line::from(Span::styled(
            "Align the barcode within the frame",
            theme::loading_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to scan",
            theme::help_text_style(),
        )),
    ];

    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::accent_border_style()),
        ),
        viewfinder,
    );

    help_bar::render_help_bar(f, help_area, "Enter/Space: scan | Esc: cancel | ?: help");
}

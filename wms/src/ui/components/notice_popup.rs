use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::state::Notice;
use crate::ui::{layouts, theme};

/// Render the modal notice above everything else
pub fn render_notice(f: &mut Frame, notice: &Notice) {
    let border_style = if notice.title == "Error" {
        theme::danger_border_style()
    } else {
        theme::info_border_style()
    };

    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::SMALL,
        &format!(" {} ", notice.title),
        border_style,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let message = Paragraph::new(notice.message.as_str())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(message, chunks[0]);

    let instructions = Line::from(Span::styled("[Enter] OK", theme::help_text_style()));
    f.render_widget(
        Paragraph::new(instructions).alignment(Alignment::Center),
        chunks[1],
    );
}

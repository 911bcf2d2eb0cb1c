use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::state::{ParameterField, ParametersForm};
use crate::ui::{layouts, theme};

/// Render the on-hand query form (organization code required, subinventory optional)
pub fn render_parameters_popup(f: &mut Frame, form: &ParametersForm) {
    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::MEDIUM,
        " On-hand Parameters ",
        theme::accent_border_style(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Organization code
            Constraint::Length(3), // Subinventory
            Constraint::Min(0),
            Constraint::Length(1), // Instructions
        ])
        .split(inner);

    render_field(
        f,
        chunks[0],
        "Organization Code *",
        &form.organization_code,
        form.focused == ParameterField::OrganizationCode,
    );
    render_field(
        f,
        chunks[1],
        "Subinventory (optional)",
        &form.subinventory,
        form.focused == ParameterField::Subinventory,
    );

    let instructions = Line::from(vec![
        Span::styled("[Enter]", theme::header_style()),
        Span::raw(" Load  "),
        Span::styled("[Tab]", theme::header_style()),
        Span::raw(" Next field  "),
        Span::styled("[Esc]", theme::help_text_style()),
        Span::raw(" Close"),
    ]);
    f.render_widget(
        Paragraph::new(instructions).alignment(Alignment::Center),
        chunks[3],
    );
}

fn render_field(f: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let (style, border_style) = if focused {
        (theme::form_field_focused_style(), theme::loading_style())
    } else {
        (theme::form_field_style(), theme::help_text_style())
    };

    let text = if focused {
        format!("{}▏", value)
    } else {
        value.to_string()
    };

    let field = Paragraph::new(text).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(label)
            .border_style(border_style),
    );
    f.render_widget(field, area);
}

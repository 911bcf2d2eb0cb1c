use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::state::{LoadingState, LoginField, LoginState};
use crate::ui::{
    components::{help_bar, screen_title},
    layouts, theme, utils,
};

pub fn render(f: &mut Frame, state: &LoginState) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());

    screen_title::render_screen_title(
        f,
        title_area,
        "Warehouse Management - Sign in",
        &LoadingState::NotStarted,
    );
    render_form(f, content_area, state);
    help_bar::render_help_bar(
        f,
        help_area,
        "Tab: switch field | Enter: sign in | Esc: quit",
    );
}

fn render_form(f: &mut Frame, area: Rect, state: &LoginState) {
    let form_area = layouts::centered_popup(50, 60, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Username
            Constraint::Length(1),
            Constraint::Length(3), // Password
            Constraint::Min(0),
        ])
        .split(form_area);

    render_field(
        f,
        chunks[0],
        "Username",
        state.username.clone(),
        state.focused == LoginField::Username,
    );
    render_field(
        f,
        chunks[2],
        "Password",
        utils::masked(&state.password),
        state.focused == LoginField::Password,
    );
}

fn render_field(f: &mut Frame, area: Rect, label: &str, value: String, focused: bool) {
    let (style, border_style) = if focused {
        (theme::form_field_focused_style(), theme::loading_style())
    } else {
        (theme::form_field_style(), theme::help_text_style())
    };

    let text = if focused { format!("{}▏", value) } else { value };

    let field = Paragraph::new(text).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(label)
            .border_style(border_style),
    );
    f.render_widget(field, area);
}

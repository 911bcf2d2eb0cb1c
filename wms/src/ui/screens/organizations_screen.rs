use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Row, Table},
};

use crate::state::{LoadingState, OrganizationsState};
use crate::ui::{
    components::{empty_state, help_bar, screen_title},
    layouts, theme,
};

pub fn render(f: &mut Frame, state: &OrganizationsState) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());

    screen_title::render_screen_title(
        f,
        title_area,
        "Select Organization",
        &LoadingState::NotStarted,
    );

    if state.organizations.is_empty() {
        empty_state::render_empty_state(
            f,
            content_area,
            "Organizations",
            "No organizations configured",
            Some("Add organizations to the configuration file"),
        );
    } else {
        let rows: Vec<Row> = state
            .organizations
            .iter()
            .map(|org| Row::new(vec![org.as_str()]))
            .collect();

        let table = Table::new(rows, [Constraint::Percentage(100)])
            .block(Block::default().borders(Borders::ALL).title("Organizations"))
            .row_highlight_style(theme::selection_style())
            .highlight_symbol("> ");

        f.render_stateful_widget(table, content_area, &mut state.table_state.borrow_mut());
    }

    help_bar::render_help_bar(f, help_area, help_bar::HELP_TEXT_DEFAULT);
}

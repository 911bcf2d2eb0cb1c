use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::state::{DashboardAction, DashboardState, LoadingState};
use crate::ui::{
    components::{help_bar, screen_title},
    layouts, theme,
};

pub fn render(
    f: &mut Frame,
    state: &DashboardState,
    username: Option<&str>,
    organization: Option<&str>,
) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());

    screen_title::render_screen_title(f, title_area, "Dashboard", &LoadingState::NotStarted);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(6)])
        .split(content_area);

    render_greeting(f, chunks[0], username, organization);
    render_actions(f, chunks[1], state);

    help_bar::render_help_bar(
        f,
        help_area,
        "1-4/Enter: open | o: change org | n: notifications | x: logout | ?: help",
    );
}

fn render_greeting(f: &mut Frame, area: Rect, username: Option<&str>, organization: Option<&str>) {
    let organization_span = match organization {
        Some(org) => Span::styled(org.to_string(), theme::header_style()),
        None => Span::styled("None selected", theme::muted_style()),
    };

    let lines = vec![
        Line::from(format!("Welcome, {}", username.unwrap_or("User"))),
        Line::from(vec![Span::raw("Organization: "), organization_span]),
    ];

    f.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL)),
        area,
    );
}

fn render_actions(f: &mut Frame, area: Rect, state: &DashboardState) {
    let rows: Vec<Row> = DashboardAction::ALL
        .iter()
        .enumerate()
        .map(|(i, action)| {
            Row::new(vec![
                Cell::from(format!("{}", i + 1)).style(theme::help_text_style()),
                Cell::from(action.title()).style(theme::title_style()),
                Cell::from(action.description()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Length(20),
            Constraint::Min(20),
        ],
    )
    .block(Block::default().borders(Borders::ALL).title("Actions"))
    .column_spacing(theme::TABLE_COLUMN_SPACING)
    .row_highlight_style(theme::selection_style());

    f.render_stateful_widget(table, area, &mut state.table_state.borrow_mut());
}

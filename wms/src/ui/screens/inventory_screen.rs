use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Row, Table, Tabs},
};

use crate::state::{InputMode, InventoryState, InventoryTab, LoadingState};
use crate::ui::{
    components::{
        empty_state, help_bar, lots_popup, parameters_popup, screen_title, search_input,
    },
    layouts, theme, utils,
};

pub fn render(f: &mut Frame, state: &InventoryState) {
    let (title_area, tabs_area, body_area, help_area) = layouts::screen_layout_with_tabs(f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(theme::FILTER_INPUT_HEIGHT),
            Constraint::Min(5),
        ])
        .split(body_area);
    let (search_area, content_area) = (chunks[0], chunks[1]);

    let title = match state.params.organization_code.trim() {
        "" => "Inventory Onhand".to_string(),
        org => match state.params.subinventory() {
            Some(sub) => format!("Inventory Onhand - {} / {}", org, sub),
            None => format!("Inventory Onhand - {}", org),
        },
    };
    screen_title::render_screen_title(f, title_area, &title, &state.loading);
    render_tabs(f, tabs_area, state.tab);

    match state.tab {
        InventoryTab::ByItem => render_by_item(f, content_area, state),
        InventoryTab::ByLot => render_by_lot(f, content_area, state),
        InventoryTab::ByLocator => empty_state::render_empty_state(
            f,
            content_area,
            InventoryTab::ByLocator.title(),
            "Locator view coming soon...",
            None,
        ),
    }

    // After the table so the suggestion dropdown overlays it
    search_input::render_search_input(
        f,
        search_area,
        &state.search,
        state.input_mode == InputMode::Search,
    );

    help_bar::render_help_bar(f, help_area, help_text(state));

    match state.input_mode {
        InputMode::Parameters => parameters_popup::render_parameters_popup(f, &state.params),
        InputMode::Lots => {
            if let Some(item_code) = &state.lots_item {
                lots_popup::render_lots_popup(f, item_code, &state.lots_for_selected_item());
            }
        }
        InputMode::Normal | InputMode::Search => {}
    }
}

fn help_text(state: &InventoryState) -> &'static str {
    match state.input_mode {
        InputMode::Search => "Type to search | ↑/↓: suggestions | Enter: apply | Esc: clear",
        _ => "/: search | Tab: switch view | Enter: lots | p: parameters | r: reload | h: back | ?: help",
    }
}

fn render_tabs(f: &mut Frame, area: Rect, selected: InventoryTab) {
    let titles: Vec<&str> = InventoryTab::ALL.iter().map(|tab| tab.title()).collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL))
        .select(selected.index())
        .style(theme::help_text_style())
        .highlight_style(theme::title_style().add_modifier(Modifier::UNDERLINED));

    f.render_widget(tabs, area);
}

/// Loading, error and "nothing loaded yet" states shared by both data tabs.
/// Returns true when a state was rendered in place of the table.
fn render_data_state(f: &mut Frame, area: Rect, state: &InventoryState, title: &str) -> bool {
    match &state.loading {
        LoadingState::NotStarted => {
            empty_state::render_empty_state(
                f,
                area,
                title,
                "No data loaded",
                Some("Press p to enter an organization code"),
            );
            true
        }
        LoadingState::Loading(..) if state.onhand.is_empty() && state.lots.is_empty() => {
            empty_state::render_loading_state(f, area, title, "Loading on-hand data...");
            true
        }
        LoadingState::Error(error) if state.onhand.is_empty() && state.lots.is_empty() => {
            empty_state::render_error_state(f, area, title, error, "Press r to retry");
            true
        }
        LoadingState::Loading(..) | LoadingState::Error(_) | LoadingState::Loaded => false,
    }
}

fn results_title(shown: usize, total: usize, noun: &str) -> String {
    format!("Results ({} of {} {})", shown, total, noun)
}

fn render_by_item(f: &mut Frame, area: Rect, state: &InventoryState) {
    if render_data_state(f, area, state, "On-hand") {
        return;
    }

    let filtered = state.filtered_onhand();
    let title = results_title(filtered.len(), state.onhand.len(), "items");

    if filtered.is_empty() {
        let message = if state.search.query.is_empty() {
            "No on-hand stock found"
        } else {
            "No matching items"
        };
        empty_state::render_empty_state(f, area, &title, message, None);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Item"),
        Cell::from("Description"),
        Cell::from(Text::from("On hand").right_aligned()),
        Cell::from("UOM"),
        Cell::from("Subinventory"),
        Cell::from("Locator"),
    ])
    .style(theme::header_style())
    .underlined();

    let rows: Vec<Row> = filtered
        .iter()
        .map(|line| {
            Row::new(vec![
                Cell::from(utils::or_na(line.item_code())),
                Cell::from(utils::or_na(line.item_description())),
                Cell::from(Text::from(utils::fmt_quantity(line.quantity_on_hand)).right_aligned()),
                Cell::from(utils::or_na(line.uom.as_deref())),
                Cell::from(utils::or_na(line.subinventory_code.as_deref())),
                Cell::from(utils::or_na(line.locator())),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(15),
            Constraint::Percentage(35),
            Constraint::Percentage(10),
            Constraint::Percentage(8),
            Constraint::Percentage(14),
            Constraint::Percentage(18),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(title))
    .column_spacing(theme::TABLE_COLUMN_SPACING)
    .row_highlight_style(theme::selection_style());

    f.render_stateful_widget(table, area, &mut state.table_state.borrow_mut());
}

fn render_by_lot(f: &mut Frame, area: Rect, state: &InventoryState) {
    if render_data_state(f, area, state, "Lots") {
        return;
    }

    let filtered = state.filtered_lots();
    let title = results_title(filtered.len(), state.lots.len(), "lots");

    if filtered.is_empty() {
        let message = if state.search.query.is_empty() {
            "No lots found"
        } else {
            "No matching lots"
        };
        empty_state::render_empty_state(f, area, &title, message, None);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Item"),
        Cell::from("Lot"),
        Cell::from(Text::from("Qty").right_aligned()),
        Cell::from("Subinventory"),
        Cell::from("Status"),
        Cell::from("Expires"),
    ])
    .style(theme::header_style())
    .underlined();

    let rows: Vec<Row> = filtered
        .iter()
        .map(|lot| {
            Row::new(vec![
                Cell::from(utils::or_na(lot.item_number())),
                Cell::from(utils::or_na(lot.lot_number())),
                Cell::from(Text::from(utils::fmt_quantity(lot.primary_quantity)).right_aligned()),
                Cell::from(utils::or_na(lot.sub_inventory_code.as_deref())),
                Cell::from(utils::or_na(lot.material_status.as_deref())),
                Cell::from(utils::or_na(lot.expiration_date.as_deref())),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(18),
            Constraint::Percentage(20),
            Constraint::Percentage(10),
            Constraint::Percentage(16),
            Constraint::Percentage(16),
            Constraint::Percentage(20),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(title))
    .column_spacing(theme::TABLE_COLUMN_SPACING)
    .row_highlight_style(theme::selection_style());

    f.render_stateful_widget(table, area, &mut state.table_state.borrow_mut());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_title() {
        assert_eq!(results_title(1, 2, "items"), "Results (1 of 2 items)");
        assert_eq!(results_title(0, 0, "lots"), "Results (0 of 0 lots)");
    }
}

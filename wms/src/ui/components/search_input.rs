//! Inventory search box with its suggestion dropdown.

use ratatui::prelude::Rect;
use ratatui::{
    widgets::{Block, Borders},
    Frame,
};

use super::autocomplete_input::AutocompleteInput;
use crate::state::SearchState;
use crate::ui::theme;

const PLACEHOLDER: &str = "Search by item code or description";

/// Render the search box; the dropdown is drawn only while suggestions are visible.
///
/// Must be rendered after the content below it so the dropdown overlays the table.
pub fn render_search_input(f: &mut Frame, area: Rect, search: &SearchState, focused: bool) {
    let title = if focused {
        "Search (↑/↓: suggestion, Enter: apply, Esc: clear)"
    } else {
        "Search (/ to edit)"
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(if focused {
            theme::loading_style()
        } else {
            theme::help_text_style()
        });
    let inner = block.inner(area);
    f.render_widget(block, area);

    let items = match &search.suggestions {
        Some(suggestions) if focused => suggestions.as_slice(),
        _ => &[][..],
    };
    let hint = (focused && search.suggestions.as_ref().is_some_and(|s| s.is_empty()))
        .then_some("No suggestions");

    AutocompleteInput::new(&search.query, PLACEHOLDER)
        .focused(focused)
        .items(items)
        .selected_index(search.suggestion_index)
        .hint(hint)
        .render(f, inner);
}

use ratatui::Frame;

use crate::state::{LoadingState, ShipState};
use crate::ui::{
    components::{empty_state, help_bar, screen_title},
    layouts,
};

pub fn render(f: &mut Frame, _state: &ShipState) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());

    screen_title::render_screen_title(f, title_area, "Ship Goods", &LoadingState::NotStarted);
    empty_state::render_empty_state(f, content_area, "Shipping", "Coming soon...", None);
    help_bar::render_help_bar(f, help_area, "h: back | ?: help");
}

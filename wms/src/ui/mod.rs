pub mod components;
pub mod layouts;
pub mod screens;
pub mod theme;
pub mod utils;

use crate::log_buffer::LogBuffer;
use crate::state::AppState;
use ratatui::Frame;
use screens::*;

/// Pure render dispatcher - routes to appropriate screen renderer
/// This function is read-only and never mutates state
pub fn render_app(f: &mut Frame, state: &AppState, log_buffer: &LogBuffer) {
    // Render the current screen (screen-owned popups are drawn by the screen)
    match state.current_screen() {
        Screen::Login(login_state) => login_screen::render(f, login_state),
        Screen::Organizations(orgs_state) => organizations_screen::render(f, orgs_state),
        Screen::Dashboard(dashboard_state) => dashboard_screen::render(
            f,
            dashboard_state,
            state.session.as_ref().map(|s| s.username.as_str()),
            state.organization.as_deref(),
        ),
        Screen::PurchaseOrders(po_state) => purchase_orders_screen::render(f, po_state),
        Screen::PoItems(items_state) => po_items_screen::render(f, items_state),
        Screen::ItemDetail(detail_state) => item_detail_screen::render(f, detail_state),
        Screen::Scanner(scanner_state) => scanner_screen::render(f, scanner_state),
        Screen::Inventory(inventory_state) => inventory_screen::render(f, inventory_state),
        Screen::Ship(ship_state) => ship_screen::render(f, ship_state),
        Screen::Logs(logs_state) => logs_screen::render(f, logs_state, log_buffer),
    }

    // Render help popup on top if visible
    if state.help_visible {
        components::help_popup::render_help_popup(f, state.current_screen());
    }

    // The notice sits above everything, help included
    if let Some(notice) = &state.notice {
        components::notice_popup::render_notice(f, notice);
    }
}

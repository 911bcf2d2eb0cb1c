use ratatui::{
    prelude::*,
    widgets::{List, ListItem},
    Frame,
};

use crate::ui::{layouts, screens::Screen, theme};

pub fn render_help_popup(f: &mut Frame, screen: &Screen) {
    let help_items = get_help_items(screen);

    // Use shared popup frame
    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::LARGE,
        " Help (press ? or Esc to close) ",
        theme::accent_border_style(),
    );

    // Create the help list
    let items: Vec<ListItem> = help_items
        .iter()
        .map(|(key, description)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:15}", key), theme::header_style()),
                Span::raw(*description),
            ]))
        })
        .collect();

    let list = List::new(items).style(Style::default().fg(Color::White));

    f.render_widget(list, inner);
}

fn get_help_items(screen: &Screen) -> Vec<(&'static str, &'static str)> {
    let mut items = vec![];

    // Screen-specific help
    match screen {
        Screen::Login(..) => {
            items.push(("Type", "Enter username / password"));
            items.push(("Tab/↑/↓", "Switch field"));
            items.push(("Enter", "Sign in"));
            items.push(("Esc", "Quit application"));
        }
        Screen::Organizations(..) => {
            items.push(("↑/k", "Move selection up"));
            items.push(("↓/j", "Move selection down"));
            items.push(("Enter/→/l", "Use selected organization"));
        }
        Screen::Dashboard(..) => {
            items.push(("↑/k", "Move selection up"));
            items.push(("↓/j", "Move selection down"));
            items.push(("Enter/→/l", "Open selected action"));
            items.push(("1-4", "Open action by number"));
            items.push(("o", "Change organization"));
            items.push(("n", "Show notifications"));
            items.push(("x", "Log out"));
        }
        Screen::PurchaseOrders(..) => {
            items.push(("↑/k", "Move selection up"));
            items.push(("↓/j", "Move selection down"));
            items.push(("Enter/→/l", "View lines of purchase order"));
            items.push(("r", "Refresh purchase orders"));
        }
        Screen::PoItems(..) => {
            items.push(("↑/k", "Move selection up"));
            items.push(("↓/j", "Move selection down"));
            items.push(("Enter/→/l", "View item details"));
        }
        Screen::ItemDetail(..) => {
            items.push(("s", "Scan pallet locator"));
            items.push(("c/Enter", "Confirm receipt"));
            items.push(("y/n", "Answer the receipt confirmation"));
        }
        Screen::Scanner(..) => {
            items.push(("Enter/Space/s", "Simulate a scan"));
            items.push(("Esc/h", "Cancel scan"));
        }
        Screen::Inventory(state) => {
            items.push(("↑/k", "Move selection up"));
            items.push(("↓/j", "Move selection down"));
            items.push(("Tab/Shift+Tab", "Switch tab (By Item / By Lot / By Locator)"));
            items.push(("Enter/→/l", "Show lots of selected item"));
            items.push(("p", "Edit query parameters"));
            items.push(("r", "Reload on-hand data"));
            items.push(("/", "Enter search mode"));
            if state.input_mode == crate::state::InputMode::Search {
                items.push(("Type", "Filter by item code or description"));
                items.push(("↑/↓", "Choose a suggestion"));
                items.push(("Enter/Tab", "Apply suggestion or exit search mode"));
                items.push(("Esc", "Clear search and exit search mode"));
                items.push(("Backspace", "Delete last character"));
            }
        }
        Screen::Ship(..) => {}
        Screen::Logs(..) => {
            items.push(("↑/k", "Scroll up (older logs)"));
            items.push(("↓/j", "Scroll down (newer logs)"));
            items.push(("Page Up", "Scroll up one page"));
            items.push(("Page Down", "Scroll down one page"));
            items.push(("g then g", "Scroll to oldest logs"));
            items.push(("G", "Scroll to newest logs"));
        }
    }

    // Global help
    items.push(("", ""));
    items.push(("--- Global ---", ""));
    items.push(("h/←/Esc", "Navigate back"));
    items.push(("g then l", "Go to logs"));
    items.push(("g then g", "Navigate to top of list"));
    items.push(("G", "Navigate to bottom of list"));
    items.push(("?", "Toggle this help"));
    items.push(("q", "Quit application"));

    items
}

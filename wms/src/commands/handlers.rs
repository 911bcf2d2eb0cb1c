use crate::events::AppCommand;
use crate::input::{Key, KeyEvent};
use crate::state::*;
use crate::ui::screens::Screen;

/// Map user input (KeyEvent) to AppCommand based on current UI state
/// Returns None if the key should be ignored
pub fn handle_key_input(event: KeyEvent, state: &AppState) -> Option<AppCommand> {
    let key = event.key;

    // Ctrl+C always quits, even from text fields
    if event.modifiers.ctrl && key == Key::Char('c') {
        return Some(AppCommand::Quit);
    }

    // Priority 0: a notice blocks everything until dismissed
    if state.notice.is_some() {
        return match key {
            Key::Enter | Key::Esc | Key::Char(' ') => Some(AppCommand::DismissNotice),
            _ => None,
        };
    }

    // Priority 1: help popup
    if state.help_visible {
        return match key {
            Key::Char('?') | Key::Esc => Some(AppCommand::ToggleHelp),
            Key::Char('q') => Some(AppCommand::Quit),
            _ => None,
        };
    }

    // Priority 2: screens and modes that capture text
    match state.current_screen() {
        Screen::Login(_) => return handle_login_keys(key),
        Screen::Inventory(inventory_state) => match inventory_state.input_mode {
            InputMode::Parameters => return handle_parameter_keys(key),
            InputMode::Search => return handle_search_keys(key, inventory_state),
            InputMode::Lots => {
                return match key {
                    Key::Esc | Key::Enter | Key::Left | Key::Char('h') => {
                        Some(AppCommand::CloseLots)
                    }
                    _ => None,
                };
            }
            InputMode::Normal => {}
        },
        Screen::ItemDetail(detail_state) if detail_state.confirming => {
            return match key {
                Key::Enter | Key::Char('y') => Some(AppCommand::ConfirmReceipt),
                Key::Esc | Key::Char('n') => Some(AppCommand::CancelReceipt),
                _ => None,
            };
        }
        _ => {}
    }

    // Priority 3: screen-specific Esc handling (clear search before leaving)
    if let Screen::Inventory(inventory_state) = state.current_screen() {
        if matches!(key, Key::Esc) && !inventory_state.search.query.is_empty() {
            return Some(AppCommand::ClearSearch);
        }
    }

    // Handle multi-key sequences
    if let Some(pending) = state.pending_key {
        return match (pending, key) {
            // 'g' followed by 'g' -> navigate to top of table
            ('g', Key::Char('g')) => Some(AppCommand::NavigateToTop),
            // 'g' followed by 'l' -> go to logs
            ('g', Key::Char('l')) => Some(AppCommand::NavigateToLogs),
            // Any other key clears the pending key
            _ => Some(AppCommand::ClearPendingKey),
        };
    }

    match (state.current_screen(), key) {
        // Global help toggle
        (_, Key::Char('?')) => Some(AppCommand::ToggleHelp),

        // Global quit command
        (_, Key::Char('q')) => Some(AppCommand::Quit),

        // Multi-key sequence initiator: 'g' sets pending key
        (_, Key::Char('g')) => Some(AppCommand::SetPendingKey('g')),

        // Navigate to bottom: 'G' (Shift+g)
        (_, Key::Char('G')) => Some(AppCommand::NavigateToBottom),

        // Global back navigation
        (_, Key::Left | Key::Char('h') | Key::Esc) => Some(AppCommand::NavigateBack),

        // Organization picker
        (Screen::Organizations(..), Key::Up | Key::Char('k')) => Some(AppCommand::SelectPrevious),
        (Screen::Organizations(..), Key::Down | Key::Char('j')) => Some(AppCommand::SelectNext),
        (Screen::Organizations(orgs), Key::Enter | Key::Right | Key::Char('l')) => {
            orgs.selected().map(|organization| AppCommand::SelectOrganization {
                organization: organization.clone(),
            })
        }

        // Dashboard
        (Screen::Dashboard(..), Key::Up | Key::Char('k')) => Some(AppCommand::SelectPrevious),
        (Screen::Dashboard(..), Key::Down | Key::Char('j')) => Some(AppCommand::SelectNext),
        (Screen::Dashboard(dashboard), Key::Enter | Key::Right | Key::Char('l')) => dashboard
            .selected_action()
            .map(AppCommand::OpenDashboardAction),
        (Screen::Dashboard(..), Key::Char(c @ '1'..='4')) => {
            let index = c.to_digit(10)? as usize - 1;
            DashboardAction::ALL
                .get(index)
                .copied()
                .map(AppCommand::OpenDashboardAction)
        }
        (Screen::Dashboard(..), Key::Char('o')) => Some(AppCommand::ChangeOrganization),
        (Screen::Dashboard(..), Key::Char('n')) => Some(AppCommand::ShowNotifications),
        (Screen::Dashboard(..), Key::Char('x')) => Some(AppCommand::Logout),

        // Receiving
        (Screen::PurchaseOrders(..), Key::Up | Key::Char('k')) => Some(AppCommand::SelectPrevious),
        (Screen::PurchaseOrders(..), Key::Down | Key::Char('j')) => Some(AppCommand::SelectNext),
        (Screen::PurchaseOrders(po_state), Key::Enter | Key::Right | Key::Char('l')) => {
            let selected_idx = po_state.table_state.borrow().selected()?;
            po_state
                .grouped_orders()
                .into_iter()
                .nth(selected_idx)
                .map(|order| AppCommand::OpenPurchaseOrder(Box::new(order)))
        }
        (Screen::PurchaseOrders(..), Key::Char('r')) => Some(AppCommand::LoadPurchaseOrders),

        (Screen::PoItems(..), Key::Up | Key::Char('k')) => Some(AppCommand::SelectPrevious),
        (Screen::PoItems(..), Key::Down | Key::Char('j')) => Some(AppCommand::SelectNext),
        (Screen::PoItems(items_state), Key::Enter | Key::Right | Key::Char('l')) => {
            let selected_idx = items_state.table_state.borrow().selected()?;
            items_state
                .order
                .lines
                .get(selected_idx)
                .map(|line| AppCommand::OpenItemDetail(Box::new(line.clone())))
        }

        (Screen::ItemDetail(detail_state), Key::Char('s')) => Some(AppCommand::StartScan {
            target: Some(Box::new(detail_state.line.clone())),
        }),
        (Screen::ItemDetail(..), Key::Char('c') | Key::Enter) => {
            Some(AppCommand::InitiateReceipt)
        }

        // Scanner
        (Screen::Scanner(..), Key::Enter | Key::Char(' ') | Key::Char('s')) => {
            Some(AppCommand::SimulateScan)
        }

        // Inventory
        (Screen::Inventory(..), Key::Char('/')) => Some(AppCommand::EnterSearchMode),
        (Screen::Inventory(..), Key::Char('p')) => Some(AppCommand::OpenParameters),
        (Screen::Inventory(..), Key::Char('r')) => Some(AppCommand::LoadOnhand),
        (Screen::Inventory(..), Key::Tab) => Some(AppCommand::SwitchInventoryTab { forward: true }),
        (Screen::Inventory(..), Key::BackTab) => {
            Some(AppCommand::SwitchInventoryTab { forward: false })
        }
        (Screen::Inventory(..), Key::Up | Key::Char('k')) => Some(AppCommand::SelectPrevious),
        (Screen::Inventory(..), Key::Down | Key::Char('j')) => Some(AppCommand::SelectNext),
        (Screen::Inventory(inventory_state), Key::Enter | Key::Right | Key::Char('l')) => {
            if inventory_state.tab != InventoryTab::ByItem {
                return None;
            }
            let selected_idx = inventory_state.table_state.borrow().selected()?;
            let filtered = inventory_state.filtered_onhand();
            let item_code = filtered.get(selected_idx)?.item_code()?;
            Some(AppCommand::ShowLots {
                item_code: item_code.to_string(),
            })
        }

        // Logs screen
        (Screen::Logs(..), Key::Up | Key::Char('k')) => Some(AppCommand::ScrollLogsUp),
        (Screen::Logs(..), Key::Down | Key::Char('j')) => Some(AppCommand::ScrollLogsDown),
        (Screen::Logs(..), Key::PageUp) => Some(AppCommand::ScrollLogsPageUp),
        (Screen::Logs(..), Key::PageDown) => Some(AppCommand::ScrollLogsPageDown),

        // Ignore other keys
        _ => None,
    }
}

fn handle_login_keys(key: Key) -> Option<AppCommand> {
    match key {
        Key::Enter => Some(AppCommand::SubmitLogin),
        Key::Tab | Key::BackTab | Key::Up | Key::Down => Some(AppCommand::SwitchLoginField),
        Key::Backspace => Some(AppCommand::DeleteLoginChar),
        Key::Esc => Some(AppCommand::Quit),
        Key::Char(c) if !c.is_control() => Some(AppCommand::AppendLoginChar(c)),
        _ => None,
    }
}

fn handle_parameter_keys(key: Key) -> Option<AppCommand> {
    match key {
        Key::Enter => Some(AppCommand::LoadOnhand),
        Key::Tab | Key::BackTab | Key::Up | Key::Down => Some(AppCommand::SwitchParameterField),
        Key::Backspace => Some(AppCommand::DeleteParameterChar),
        Key::Esc => Some(AppCommand::CloseParameters),
        Key::Char(c) if !c.is_control() => Some(AppCommand::AppendParameterChar(c)),
        _ => None,
    }
}

fn handle_search_keys(key: Key, inventory_state: &InventoryState) -> Option<AppCommand> {
    let suggestions_visible = inventory_state.search.suggestions_visible();

    match key {
        Key::Up if suggestions_visible => Some(AppCommand::SelectSuggestion { up: true }),
        Key::Down if suggestions_visible => Some(AppCommand::SelectSuggestion { up: false }),
        Key::Enter | Key::Tab if suggestions_visible => Some(AppCommand::ConfirmSuggestion),
        Key::Enter => Some(AppCommand::ExitSearchMode),
        Key::Backspace => Some(AppCommand::DeleteSearchChar),
        Key::Esc => Some(AppCommand::ClearSearch),
        Key::Char(c) if !c.is_control() => Some(AppCommand::AppendSearchChar(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::DataEvent;
    use crate::state::reducer::reduce_data_event;
    use wms_api::endpoints::InventoryLine;

    fn key(k: Key) -> KeyEvent {
        KeyEvent::new(k)
    }

    fn onhand_line(id: &str, code: &str) -> InventoryLine {
        InventoryLine {
            id: id.to_string(),
            item_code: Some(code.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_ctrl_c_quits_from_login() {
        let state = AppState::new();

        assert_eq!(
            handle_key_input(KeyEvent::with_ctrl(Key::Char('c')), &state),
            Some(AppCommand::Quit)
        );
        assert_eq!(
            handle_key_input(key(Key::Char('c')), &state),
            Some(AppCommand::AppendLoginChar('c'))
        );
    }

    #[test]
    fn test_notice_takes_priority() {
        let mut state = AppState::new();
        state.show_notice(Notice::error("Invalid credentials"));

        assert_eq!(handle_key_input(key(Key::Char('q')), &state), None);
        assert_eq!(
            handle_key_input(key(Key::Enter), &state),
            Some(AppCommand::DismissNotice)
        );
    }

    #[test]
    fn test_login_captures_text() {
        let state = AppState::new();

        assert_eq!(
            handle_key_input(key(Key::Char('q')), &state),
            Some(AppCommand::AppendLoginChar('q'))
        );
        assert_eq!(
            handle_key_input(key(Key::Tab), &state),
            Some(AppCommand::SwitchLoginField)
        );
        assert_eq!(
            handle_key_input(key(Key::Enter), &state),
            Some(AppCommand::SubmitLogin)
        );
        assert_eq!(handle_key_input(key(Key::Char('\0')), &state), None);
    }

    #[test]
    fn test_dashboard_shortcuts() {
        let mut state = AppState::new();
        state.reset_to(Screen::Dashboard(DashboardState::default()));

        assert_eq!(
            handle_key_input(key(Key::Enter), &state),
            Some(AppCommand::OpenDashboardAction(DashboardAction::ReceiveGoods))
        );
        assert_eq!(
            handle_key_input(key(Key::Char('2')), &state),
            Some(AppCommand::OpenDashboardAction(DashboardAction::InventoryOnhand))
        );
        assert_eq!(
            handle_key_input(key(Key::Char('x')), &state),
            Some(AppCommand::Logout)
        );
    }

    #[test]
    fn test_purchase_order_enter_carries_group() {
        let po_state = PurchaseOrdersState::default();
        let screen_id = po_state.id;
        let mut state = AppState::new();
        state.navigate_to(Screen::PurchaseOrders(po_state));
        reduce_data_event(
            &mut state,
            DataEvent::PurchaseOrdersLoaded {
                screen_id,
                lines: vec![InventoryLine {
                    document_number: Some("PO1".to_string()),
                    vendor_name: Some("Acme".to_string()),
                    ..onhand_line("0", "A100")
                }],
            },
        );

        let command = handle_key_input(key(Key::Enter), &state);
        let Some(AppCommand::OpenPurchaseOrder(order)) = command else {
            panic!("expected OpenPurchaseOrder, got {:?}", command);
        };
        assert_eq!(order.document_number, "PO1");
        assert_eq!(order.vendor_name, "Acme");
        assert_eq!(order.item_count, 1);
    }

    #[test]
    fn test_search_mode_routes_suggestion_keys() {
        let mut state = AppState::new();
        let mut inventory = InventoryState::new();
        inventory.input_mode = InputMode::Search;
        inventory.onhand = vec![onhand_line("0", "A100"), onhand_line("1", "A200")];
        inventory.search.query = "a1".to_string();
        inventory.refresh_suggestions();
        state.navigate_to(Screen::Inventory(Box::new(inventory)));

        assert_eq!(
            handle_key_input(key(Key::Down), &state),
            Some(AppCommand::SelectSuggestion { up: false })
        );
        assert_eq!(
            handle_key_input(key(Key::Enter), &state),
            Some(AppCommand::ConfirmSuggestion)
        );
        assert_eq!(
            handle_key_input(key(Key::Char('q')), &state),
            Some(AppCommand::AppendSearchChar('q'))
        );
        assert_eq!(
            handle_key_input(key(Key::Esc), &state),
            Some(AppCommand::ClearSearch)
        );
    }

    #[test]
    fn test_inventory_enter_shows_lots_for_selected_item() {
        let mut state = AppState::new();
        let mut inventory = InventoryState::new();
        inventory.input_mode = InputMode::Normal;
        inventory.onhand = vec![onhand_line("0", "A100"), onhand_line("1", "A200")];
        inventory.table_state.borrow_mut().select(Some(1));
        state.navigate_to(Screen::Inventory(Box::new(inventory)));

        assert_eq!(
            handle_key_input(key(Key::Enter), &state),
            Some(AppCommand::ShowLots {
                item_code: "A200".to_string()
            })
        );
    }

    #[test]
    fn test_esc_clears_search_before_leaving_inventory() {
        let mut state = AppState::new();
        let mut inventory = InventoryState::new();
        inventory.input_mode = InputMode::Normal;
        inventory.search.query = "bolt".to_string();
        state.navigate_to(Screen::Inventory(Box::new(inventory)));

        assert_eq!(
            handle_key_input(key(Key::Esc), &state),
            Some(AppCommand::ClearSearch)
        );
    }

    #[test]
    fn test_receipt_confirmation_keys() {
        let mut state = AppState::new();
        let mut detail = ItemDetailState::new(onhand_line("0", "A100"));
        detail.confirming = true;
        state.navigate_to(Screen::ItemDetail(Box::new(detail)));

        assert_eq!(
            handle_key_input(key(Key::Char('y')), &state),
            Some(AppCommand::ConfirmReceipt)
        );
        assert_eq!(
            handle_key_input(key(Key::Esc), &state),
            Some(AppCommand::CancelReceipt)
        );
    }

    #[test]
    fn test_pending_g_sequences() {
        let mut state = AppState::new();
        state.reset_to(Screen::Dashboard(DashboardState::default()));
        state.pending_key = Some('g');

        assert_eq!(
            handle_key_input(key(Key::Char('l')), &state),
            Some(AppCommand::NavigateToLogs)
        );
        assert_eq!(
            handle_key_input(key(Key::Char('z')), &state),
            Some(AppCommand::ClearPendingKey)
        );
    }
}

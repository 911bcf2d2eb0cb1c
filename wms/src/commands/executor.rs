use crate::auth::Session;
use crate::background::{
    data_loader::DataLoader, BackgroundTaskManager, ONHAND_TASK, PURCHASE_ORDERS_TASK,
};
use crate::events::AppCommand;
use crate::state::*;
use crate::ui::screens::Screen;
use throbber_widgets_tui::ThrobberState;

const LOG_PAGE_SIZE: usize = 20;

/// Backend fetch requested by a command
#[derive(Debug, Clone, PartialEq)]
pub enum Fetch {
    PurchaseOrders {
        screen_id: ScreenId,
        picker_name: String,
    },
    Onhand {
        screen_id: ScreenId,
        organization_code: String,
        subinventory: Option<String>,
    },
}

impl Fetch {
    /// Screen instance the response is delivered to
    pub fn screen_id(&self) -> ScreenId {
        match self {
            Self::PurchaseOrders { screen_id, .. } | Self::Onhand { screen_id, .. } => *screen_id,
        }
    }
}

/// Execute a command, spawning a background task for any fetch it requests
pub fn execute_command(
    command: AppCommand,
    state: &mut AppState,
    task_manager: &mut BackgroundTaskManager,
    data_loader: &DataLoader,
) {
    match apply_command(command, state) {
        Some(Fetch::PurchaseOrders {
            screen_id,
            picker_name,
        }) => {
            let data_loader = data_loader.clone();
            let future = async move {
                data_loader
                    .load_purchase_orders(screen_id, picker_name)
                    .await;
            };
            task_manager.spawn_load_task(PURCHASE_ORDERS_TASK, future);
        }
        Some(Fetch::Onhand {
            screen_id,
            organization_code,
            subinventory,
        }) => {
            let data_loader = data_loader.clone();
            let future = async move {
                data_loader
                    .load_onhand(screen_id, organization_code, subinventory)
                    .await;
            };
            task_manager.spawn_load_task(ONHAND_TASK, future);
        }
        None => {}
    }
}

/// Apply a command to the UI state and return the fetch it requests, if any
pub fn apply_command(command: AppCommand, state: &mut AppState) -> Option<Fetch> {
    let is_setting_pending_key = matches!(command, AppCommand::SetPendingKey(_));
    let mut fetch = None;

    match command {
        // Simple state updates
        AppCommand::Quit => state.should_quit = true,
        AppCommand::ToggleHelp => state.help_visible = !state.help_visible,
        AppCommand::SetPendingKey(c) => state.pending_key = Some(c),
        AppCommand::ClearPendingKey => state.pending_key = None,
        AppCommand::DismissNotice => state.notice = None,

        // Navigation
        AppCommand::NavigateBack => {
            state.navigate_back();
        }
        AppCommand::NavigateToTop => match state.current_screen_mut() {
            Screen::Organizations(s) => s.select_top(),
            Screen::Dashboard(s) => s.select_top(),
            Screen::PurchaseOrders(s) => s.select_top(),
            Screen::PoItems(s) => s.select_top(),
            Screen::Inventory(s) => s.select_top(),
            Screen::Logs(s) => s.scroll_offset = s.total_entries.saturating_sub(1),
            _ => {}
        },
        AppCommand::NavigateToBottom => match state.current_screen_mut() {
            Screen::Organizations(s) => s.select_bottom(),
            Screen::Dashboard(s) => s.select_bottom(),
            Screen::PurchaseOrders(s) => s.select_bottom(),
            Screen::PoItems(s) => s.select_bottom(),
            Screen::Inventory(s) => s.select_bottom(),
            Screen::Logs(s) => s.scroll_offset = 0,
            _ => {}
        },
        AppCommand::SelectNext => match state.current_screen_mut() {
            Screen::Organizations(s) => s.select_next(),
            Screen::Dashboard(s) => s.select_next(),
            Screen::PurchaseOrders(s) => s.select_next(),
            Screen::PoItems(s) => s.select_next(),
            Screen::Inventory(s) => s.select_next(),
            _ => {}
        },
        AppCommand::SelectPrevious => match state.current_screen_mut() {
            Screen::Organizations(s) => s.select_prev(),
            Screen::Dashboard(s) => s.select_prev(),
            Screen::PurchaseOrders(s) => s.select_prev(),
            Screen::PoItems(s) => s.select_prev(),
            Screen::Inventory(s) => s.select_prev(),
            _ => {}
        },

        // Login
        AppCommand::AppendLoginChar(c) => {
            if let Screen::Login(s) = state.current_screen_mut() {
                s.focused_value_mut().push(c);
            }
        }
        AppCommand::DeleteLoginChar => {
            if let Screen::Login(s) = state.current_screen_mut() {
                s.focused_value_mut().pop();
            }
        }
        AppCommand::SwitchLoginField => {
            if let Screen::Login(s) = state.current_screen_mut() {
                s.switch_field();
            }
        }
        AppCommand::SubmitLogin => submit_login(state),

        // Organization / dashboard
        AppCommand::SelectOrganization { organization } => {
            tracing::info!("Organization selected: {}", organization);
            state.organization = Some(organization);
            state.reset_to(Screen::Dashboard(DashboardState::default()));
        }
        AppCommand::ChangeOrganization => {
            let organizations = OrganizationsState::new(state.organizations.clone());
            if let Some(current) = &state.organization {
                let index = state.organizations.iter().position(|o| o == current);
                organizations.table_state.borrow_mut().select(index.or(Some(0)));
            }
            state.navigate_to(Screen::Organizations(organizations));
        }
        AppCommand::OpenDashboardAction(action) => match action {
            DashboardAction::ReceiveGoods => fetch = load_purchase_orders(state),
            DashboardAction::InventoryOnhand => {
                state.navigate_to(Screen::Inventory(Box::new(InventoryState::new())));
            }
            DashboardAction::ScanItem => {
                state.navigate_to(Screen::Scanner(ScannerState::default()));
            }
            DashboardAction::ShipGoods => state.navigate_to(Screen::Ship(ShipState)),
        },
        AppCommand::ShowNotifications => {
            state.show_notice(Notice::new("Notifications", "No new notifications"));
        }
        AppCommand::Logout => {
            tracing::info!("Logging out");
            state.session = None;
            state.organization = None;
            state.reset_to(Screen::Login(LoginState::default()));
        }

        // Receiving
        AppCommand::LoadPurchaseOrders => fetch = load_purchase_orders(state),
        AppCommand::OpenPurchaseOrder(order) => {
            state.navigate_to(Screen::PoItems(PoItemsState::new(*order)));
        }
        AppCommand::OpenItemDetail(line) => {
            state.navigate_to(Screen::ItemDetail(Box::new(ItemDetailState::new(*line))));
        }
        AppCommand::InitiateReceipt => {
            if let Screen::ItemDetail(s) = state.current_screen_mut() {
                s.confirming = true;
            }
        }
        AppCommand::CancelReceipt => {
            if let Screen::ItemDetail(s) = state.current_screen_mut() {
                s.confirming = false;
            }
        }
        AppCommand::ConfirmReceipt => {
            if let Screen::ItemDetail(s) = state.current_screen_mut() {
                if s.confirming {
                    tracing::info!(
                        "Receipt confirmed for line {} (item {:?}, locator {:?})",
                        s.line.id,
                        s.line.item_code(),
                        s.line.effective_locator()
                    );
                    state.show_notice(Notice::new("Success", "Receipt confirmed successfully!"));
                    state.navigate_back();
                }
            }
        }

        // Scanning
        AppCommand::StartScan { target } => {
            state.navigate_to(Screen::Scanner(ScannerState {
                target: target.map(|line| *line),
            }));
        }
        AppCommand::SimulateScan => {
            if let Screen::Scanner(s) = state.current_screen() {
                let target_id = s.target.as_ref().map(|line| line.id.clone());
                let locator = state.scanner.scan();
                tracing::info!("Scanned locator {}", locator);

                state.navigate_back();
                if let Some(line_id) = target_id {
                    state.record_scanned_locator(&line_id, &locator);
                }
                state.show_notice(Notice::new(
                    "Scanned Successfully",
                    format!("Locator: {}", locator),
                ));
            }
        }

        // Inventory parameters popup
        AppCommand::OpenParameters => {
            if let Screen::Inventory(s) = state.current_screen_mut() {
                s.input_mode = InputMode::Parameters;
            }
        }
        AppCommand::CloseParameters => {
            if let Screen::Inventory(s) = state.current_screen_mut() {
                s.input_mode = InputMode::Normal;
            }
        }
        AppCommand::AppendParameterChar(c) => {
            if let Screen::Inventory(s) = state.current_screen_mut() {
                s.params.focused_value_mut().push(c);
            }
        }
        AppCommand::DeleteParameterChar => {
            if let Screen::Inventory(s) = state.current_screen_mut() {
                s.params.focused_value_mut().pop();
            }
        }
        AppCommand::SwitchParameterField => {
            if let Screen::Inventory(s) = state.current_screen_mut() {
                s.params.switch_field();
            }
        }
        AppCommand::LoadOnhand => fetch = load_onhand(state),

        // Inventory search
        AppCommand::EnterSearchMode => {
            if let Screen::Inventory(s) = state.current_screen_mut() {
                s.input_mode = InputMode::Search;
            }
        }
        AppCommand::ExitSearchMode => {
            if let Screen::Inventory(s) = state.current_screen_mut() {
                s.input_mode = InputMode::Normal;
                s.search.suggestions = None;
            }
        }
        AppCommand::AppendSearchChar(c) => {
            if let Screen::Inventory(s) = state.current_screen_mut() {
                s.search.query.push(c);
                s.refresh_suggestions();
                reset_selection(s);
            }
        }
        AppCommand::DeleteSearchChar => {
            if let Screen::Inventory(s) = state.current_screen_mut() {
                s.search.query.pop();
                s.refresh_suggestions();
                reset_selection(s);
            }
        }
        AppCommand::ClearSearch => {
            if let Screen::Inventory(s) = state.current_screen_mut() {
                s.search = SearchState::default();
                s.input_mode = InputMode::Normal;
                reset_selection(s);
            }
        }
        AppCommand::SelectSuggestion { up } => {
            if let Screen::Inventory(s) = state.current_screen_mut() {
                let count = s.search.suggestions.as_ref().map_or(0, Vec::len);
                if count > 0 {
                    let index = s.search.suggestion_index;
                    s.search.suggestion_index = if up {
                        (index + count - 1) % count
                    } else {
                        (index + 1) % count
                    };
                }
            }
        }
        AppCommand::ConfirmSuggestion => {
            if let Screen::Inventory(s) = state.current_screen_mut() {
                let chosen = s
                    .search
                    .suggestions
                    .as_ref()
                    .and_then(|suggestions| suggestions.get(s.search.suggestion_index))
                    .map(|entry| entry.value.clone());

                if let Some(value) = chosen {
                    s.search.query = value;
                    s.search.suggestions = None;
                    s.search.suggestion_index = 0;
                    s.input_mode = InputMode::Normal;
                    reset_selection(s);
                }
            }
        }

        // Inventory views
        AppCommand::SwitchInventoryTab { forward } => {
            if let Screen::Inventory(s) = state.current_screen_mut() {
                s.tab = if forward { s.tab.next() } else { s.tab.previous() };
                reset_selection(s);
            }
        }
        AppCommand::ShowLots { item_code } => {
            if let Screen::Inventory(s) = state.current_screen_mut() {
                s.lots_item = Some(item_code);
                s.input_mode = InputMode::Lots;
            }
        }
        AppCommand::CloseLots => {
            if let Screen::Inventory(s) = state.current_screen_mut() {
                s.lots_item = None;
                s.input_mode = InputMode::Normal;
            }
        }

        // Logs screen
        AppCommand::NavigateToLogs => {
            // No logging here, the logs screen would record its own navigation
            state.navigate_to(Screen::Logs(LogsState::default()));
        }
        AppCommand::ScrollLogsUp => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                // Up means older entries
                if s.scroll_offset < s.total_entries.saturating_sub(1) {
                    s.scroll_offset += 1;
                }
            }
        }
        AppCommand::ScrollLogsDown => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset = s.scroll_offset.saturating_sub(1);
            }
        }
        AppCommand::ScrollLogsPageUp => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset =
                    (s.scroll_offset + LOG_PAGE_SIZE).min(s.total_entries.saturating_sub(1));
            }
        }
        AppCommand::ScrollLogsPageDown => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset = s.scroll_offset.saturating_sub(LOG_PAGE_SIZE);
            }
        }
        AppCommand::ScrollLogsToTop => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset = s.total_entries.saturating_sub(1);
            }
        }
        AppCommand::ScrollLogsToBottom => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset = 0;
            }
        }
    }

    // Clear pending key after any command except SetPendingKey
    if !is_setting_pending_key && state.pending_key.is_some() {
        state.pending_key = None;
    }

    fetch
}

fn submit_login(state: &mut AppState) {
    let Screen::Login(login) = state.current_screen() else {
        return;
    };

    if state.verifier.verify(&login.username, &login.password) {
        let username = login.username.clone();
        tracing::info!("User {} signed in", username);
        state.session = Some(Session { username });
        state.reset_to(Screen::Organizations(OrganizationsState::new(
            state.organizations.clone(),
        )));
    } else {
        tracing::warn!("Rejected sign-in for {:?}", login.username);
        state.show_notice(Notice::error("Invalid credentials"));
    }
}

/// Open (or refresh) the receiving screen and request its lines
fn load_purchase_orders(state: &mut AppState) -> Option<Fetch> {
    let screen_id = match state.current_screen_mut() {
        Screen::PurchaseOrders(s) => {
            tracing::debug!("Refreshing purchase orders screen");
            s.loading = LoadingState::Loading(ThrobberState::default());
            s.id
        }
        _ => {
            tracing::debug!("Navigating to purchase orders screen");
            let po_state = PurchaseOrdersState {
                loading: LoadingState::Loading(ThrobberState::default()),
                ..Default::default()
            };
            let id = po_state.id;
            state.navigate_to(Screen::PurchaseOrders(po_state));
            id
        }
    };

    Some(Fetch::PurchaseOrders {
        screen_id,
        picker_name: state.picker_name.clone(),
    })
}

/// Validate the parameters popup and request the on-hand snapshot
fn load_onhand(state: &mut AppState) -> Option<Fetch> {
    let Screen::Inventory(s) = state.current_screen_mut() else {
        return None;
    };

    let organization_code = s.params.organization_code.trim().to_string();
    if organization_code.is_empty() {
        state.show_notice(Notice::error("Please enter Organization Code"));
        return None;
    }

    s.input_mode = InputMode::Normal;
    s.loading = LoadingState::Loading(ThrobberState::default());

    Some(Fetch::Onhand {
        screen_id: s.id,
        organization_code,
        subinventory: s.params.subinventory(),
    })
}

fn reset_selection(s: &InventoryState) {
    let selected = (s.num_items() > 0).then_some(0);
    s.table_state.borrow_mut().select(selected);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GroupedPurchaseOrder;
    use crate::scan::LocatorScanner;
    use std::sync::Arc;
    use wms_api::endpoints::InventoryLine;

    #[derive(Debug)]
    struct FixedScanner(&'static str);

    impl LocatorScanner for FixedScanner {
        fn scan(&self) -> String {
            self.0.to_string()
        }
    }

    fn line(id: &str, code: &str, description: &str) -> InventoryLine {
        InventoryLine {
            id: id.to_string(),
            item_code: Some(code.to_string()),
            item_description: Some(description.to_string()),
            transaction_quantity: Some(4),
            locator: Some("R1-A".to_string()),
            ..Default::default()
        }
    }

    fn inventory_state(state: &AppState) -> &InventoryState {
        match state.current_screen() {
            Screen::Inventory(s) => s,
            other => panic!("expected inventory screen, got {:?}", other),
        }
    }

    fn on_inventory() -> AppState {
        let mut state = AppState::new();
        state.navigate_to(Screen::Inventory(Box::new(InventoryState::new())));
        state
    }

    fn type_params(state: &mut AppState, text: &str) {
        for c in text.chars() {
            apply_command(AppCommand::AppendParameterChar(c), state);
        }
    }

    #[test]
    fn test_missing_organization_code_issues_no_fetch() {
        let mut state = on_inventory();

        let fetch = apply_command(AppCommand::LoadOnhand, &mut state);

        assert_eq!(fetch, None);
        assert_eq!(
            state.notice,
            Some(Notice::error("Please enter Organization Code"))
        );
        let inventory = inventory_state(&state);
        assert_eq!(inventory.input_mode, InputMode::Parameters);
        assert_eq!(inventory.loading, LoadingState::NotStarted);
    }

    #[test]
    fn test_whitespace_organization_code_is_missing() {
        let mut state = on_inventory();
        type_params(&mut state, "   ");

        assert_eq!(apply_command(AppCommand::LoadOnhand, &mut state), None);
        assert!(state.notice.is_some());
    }

    #[test]
    fn test_load_onhand_with_parameters() {
        let mut state = on_inventory();
        type_params(&mut state, "AMS");
        apply_command(AppCommand::SwitchParameterField, &mut state);
        type_params(&mut state, "STORES");

        let fetch = apply_command(AppCommand::LoadOnhand, &mut state);

        let inventory = inventory_state(&state);
        assert_eq!(
            fetch,
            Some(Fetch::Onhand {
                screen_id: inventory.id,
                organization_code: "AMS".to_string(),
                subinventory: Some("STORES".to_string()),
            })
        );
        assert_eq!(inventory.input_mode, InputMode::Normal);
        assert!(matches!(inventory.loading, LoadingState::Loading(_)));
    }

    #[test]
    fn test_receive_goods_navigates_and_fetches() {
        let mut state = AppState::new();
        state.picker_name = "PICKER7".to_string();

        let fetch = apply_command(
            AppCommand::OpenDashboardAction(DashboardAction::ReceiveGoods),
            &mut state,
        );

        let Screen::PurchaseOrders(po_state) = state.current_screen() else {
            panic!("expected purchase orders screen");
        };
        let screen_id = po_state.id;
        assert_eq!(
            fetch,
            Some(Fetch::PurchaseOrders {
                screen_id,
                picker_name: "PICKER7".to_string()
            })
        );

        // Refreshing stays on the same screen and targets it again
        let refresh = apply_command(AppCommand::LoadPurchaseOrders, &mut state);
        assert_eq!(state.history.len(), 2);
        assert_eq!(refresh.map(|f| f.screen_id()), Some(screen_id));
    }

    #[test]
    fn test_search_keystrokes_update_suggestions_and_view() {
        let mut state = on_inventory();
        if let Screen::Inventory(s) = state.current_screen_mut() {
            s.input_mode = InputMode::Search;
            s.onhand = vec![line("0", "A100", "Red Widget"), line("1", "A200", "Blue Widget")];
        }

        apply_command(AppCommand::AppendSearchChar('w'), &mut state);
        assert!(inventory_state(&state).search.suggestions.is_none());

        apply_command(AppCommand::AppendSearchChar('i'), &mut state);
        let inventory = inventory_state(&state);
        let values: Vec<_> = inventory
            .search
            .suggestions
            .as_ref()
            .unwrap()
            .iter()
            .map(|s| s.value.as_str())
            .collect();
        assert_eq!(values, vec!["Red Widget", "Blue Widget"]);
        assert_eq!(inventory.filtered_onhand().len(), 2);

        apply_command(AppCommand::SelectSuggestion { up: false }, &mut state);
        apply_command(AppCommand::ConfirmSuggestion, &mut state);

        let inventory = inventory_state(&state);
        assert_eq!(inventory.search.query, "Blue Widget");
        assert!(inventory.search.suggestions.is_none());
        assert_eq!(inventory.input_mode, InputMode::Normal);
        assert_eq!(inventory.filtered_onhand().len(), 1);
    }

    #[test]
    fn test_suggestion_selection_wraps() {
        let mut state = on_inventory();
        if let Screen::Inventory(s) = state.current_screen_mut() {
            s.onhand = vec![line("0", "A100", "Red Widget"), line("1", "A200", "Blue Widget")];
            s.search.query = "widget".to_string();
            s.refresh_suggestions();
        }

        apply_command(AppCommand::SelectSuggestion { up: true }, &mut state);
        assert_eq!(inventory_state(&state).search.suggestion_index, 1);
        apply_command(AppCommand::SelectSuggestion { up: false }, &mut state);
        assert_eq!(inventory_state(&state).search.suggestion_index, 0);
    }

    #[test]
    fn test_clear_search_returns_to_idle() {
        let mut state = on_inventory();
        apply_command(AppCommand::EnterSearchMode, &mut state);
        apply_command(AppCommand::AppendSearchChar('x'), &mut state);
        apply_command(AppCommand::ClearSearch, &mut state);

        let inventory = inventory_state(&state);
        assert_eq!(inventory.search.query, "");
        assert_eq!(inventory.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_scan_writes_locator_into_target() {
        let mut state = AppState::new().with_scanner(Arc::new(FixedScanner("LOC-7")));
        let target = line("2", "A100", "Red Widget");
        state.navigate_to(Screen::PoItems(PoItemsState::new(GroupedPurchaseOrder {
            document_number: "PO1".to_string(),
            vendor_name: "Acme".to_string(),
            lines: vec![target.clone()],
            item_count: 1,
        })));
        state.navigate_to(Screen::ItemDetail(Box::new(ItemDetailState::new(
            target.clone(),
        ))));

        apply_command(
            AppCommand::StartScan {
                target: Some(Box::new(target)),
            },
            &mut state,
        );
        apply_command(AppCommand::SimulateScan, &mut state);

        let Screen::ItemDetail(detail) = state.current_screen() else {
            panic!("expected item detail");
        };
        assert_eq!(detail.line.actual_locator, "LOC-7");
        assert_eq!(detail.line.effective_locator(), Some("LOC-7"));
        assert_eq!(
            state.notice,
            Some(Notice::new("Scanned Successfully", "Locator: LOC-7"))
        );
    }

    #[test]
    fn test_confirm_receipt_requires_confirmation_popup() {
        let mut state = AppState::new();
        state.navigate_to(Screen::ItemDetail(Box::new(ItemDetailState::new(line(
            "0", "A100", "Red Widget",
        )))));

        apply_command(AppCommand::ConfirmReceipt, &mut state);
        assert!(matches!(state.current_screen(), Screen::ItemDetail(_)));

        apply_command(AppCommand::InitiateReceipt, &mut state);
        apply_command(AppCommand::ConfirmReceipt, &mut state);
        assert!(matches!(state.current_screen(), Screen::Login(_)));
        assert_eq!(
            state.notice,
            Some(Notice::new("Success", "Receipt confirmed successfully!"))
        );
    }

    #[test]
    fn test_change_organization_preselects_current() {
        let mut state = AppState::new();
        apply_command(
            AppCommand::SelectOrganization {
                organization: "MLCECLAIM".to_string(),
            },
            &mut state,
        );
        apply_command(AppCommand::ChangeOrganization, &mut state);

        let Screen::Organizations(orgs) = state.current_screen() else {
            panic!("expected organization picker");
        };
        assert_eq!(orgs.selected().map(String::as_str), Some("MLCECLAIM"));
    }

    #[test]
    fn test_pending_key_cleared_by_next_command() {
        let mut state = AppState::new();
        apply_command(AppCommand::SetPendingKey('g'), &mut state);
        assert_eq!(state.pending_key, Some('g'));
        apply_command(AppCommand::ToggleHelp, &mut state);
        assert_eq!(state.pending_key, None);
    }
}

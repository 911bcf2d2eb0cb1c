use super::{AppState, LoadingState, Notice};
use crate::events::DataEvent;
use ratatui::widgets::TableState;
use std::cell::RefCell;

/// Pure state transition function for data events.
///
/// A result is applied to the screen instance that requested it, even when
/// other screens have been pushed above it. Results for a screen that has
/// since been popped are dropped.
pub fn reduce_data_event(state: &mut AppState, event: DataEvent) {
    match event {
        DataEvent::PurchaseOrdersLoaded { screen_id, lines } => {
            if let Some(po_state) = state.purchase_orders_mut(screen_id) {
                po_state.lines = lines;
                po_state.loading = LoadingState::Loaded;
                let selected = (!po_state.lines.is_empty()).then_some(0);
                po_state.table_state = RefCell::new(TableState::default().with_selected(selected));
            } else {
                tracing::debug!("Dropping purchase orders for closed screen {}", screen_id);
            }
        }

        DataEvent::PurchaseOrdersLoadFailed { screen_id, error } => {
            if let Some(po_state) = state.purchase_orders_mut(screen_id) {
                po_state.loading = LoadingState::Error(error.clone());
                state.show_notice(fetch_failed(&error));
            } else {
                tracing::debug!("Dropping purchase order failure for closed screen {}", screen_id);
            }
        }

        DataEvent::OnhandLoaded {
            screen_id,
            onhand,
            lots,
        } => {
            if let Some(inventory_state) = state.inventory_mut(screen_id) {
                inventory_state.onhand = onhand;
                inventory_state.lots = lots;
                inventory_state.loading = LoadingState::Loaded;
                inventory_state.search.suggestions = None;
                inventory_state.search.suggestion_index = 0;
                inventory_state.lots_item = None;
                let selected = (!inventory_state.onhand.is_empty()).then_some(0);
                inventory_state.table_state =
                    RefCell::new(TableState::default().with_selected(selected));
            } else {
                tracing::debug!("Dropping on-hand data for closed screen {}", screen_id);
            }
        }

        DataEvent::OnhandLoadFailed { screen_id, error } => {
            if let Some(inventory_state) = state.inventory_mut(screen_id) {
                inventory_state.loading = LoadingState::Error(error.clone());
                state.show_notice(fetch_failed(&error));
            } else {
                tracing::debug!("Dropping on-hand failure for closed screen {}", screen_id);
            }
        }
    }
}

fn fetch_failed(error: &str) -> Notice {
    Notice::error(format!("Failed to fetch data: {}", error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{InventoryState, LogsState, PurchaseOrdersState, ScreenId};
    use crate::ui::screens::Screen;
    use throbber_widgets_tui::ThrobberState;
    use wms_api::endpoints::{lots::LotRecord, InventoryLine};

    fn line(id: &str, document: &str, code: &str) -> InventoryLine {
        InventoryLine {
            id: id.to_string(),
            document_number: Some(document.to_string()),
            item_code: Some(code.to_string()),
            ..Default::default()
        }
    }

    fn lot(id: &str, item_number: &str) -> LotRecord {
        LotRecord {
            id: id.to_string(),
            item_number: Some(item_number.to_string()),
            ..Default::default()
        }
    }

    fn on_purchase_orders() -> (AppState, ScreenId) {
        let po_state = PurchaseOrdersState {
            loading: LoadingState::Loading(ThrobberState::default()),
            ..Default::default()
        };
        let id = po_state.id;
        let mut state = AppState::new();
        state.navigate_to(Screen::PurchaseOrders(po_state));
        (state, id)
    }

    fn on_inventory(inventory: InventoryState) -> (AppState, ScreenId) {
        let id = inventory.id;
        let mut state = AppState::new();
        state.navigate_to(Screen::Inventory(Box::new(inventory)));
        (state, id)
    }

    fn purchase_orders(state: &AppState) -> &PurchaseOrdersState {
        match state.current_screen() {
            Screen::PurchaseOrders(s) => s,
            other => panic!("expected purchase orders screen, got {:?}", other),
        }
    }

    fn inventory(state: &AppState) -> &InventoryState {
        match state.current_screen() {
            Screen::Inventory(s) => s,
            other => panic!("expected inventory screen, got {:?}", other),
        }
    }

    #[test]
    fn test_purchase_orders_loaded() {
        let (mut state, screen_id) = on_purchase_orders();

        reduce_data_event(
            &mut state,
            DataEvent::PurchaseOrdersLoaded {
                screen_id,
                lines: vec![line("0", "PO1", "A"), line("1", "PO2", "B")],
            },
        );

        let po_state = purchase_orders(&state);
        assert_eq!(po_state.loading, LoadingState::Loaded);
        assert_eq!(po_state.grouped_orders().len(), 2);
        assert_eq!(po_state.table_state.borrow().selected(), Some(0));
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_purchase_orders_failure_keeps_lines() {
        let (mut state, screen_id) = on_purchase_orders();
        if let Screen::PurchaseOrders(po_state) = state.current_screen_mut() {
            po_state.lines = vec![line("0", "PO1", "A")];
        }

        reduce_data_event(
            &mut state,
            DataEvent::PurchaseOrdersLoadFailed {
                screen_id,
                error: "timed out".to_string(),
            },
        );

        let po_state = purchase_orders(&state);
        assert_eq!(po_state.lines.len(), 1);
        assert_eq!(
            po_state.loading,
            LoadingState::Error("timed out".to_string())
        );
        assert_eq!(
            state.notice,
            Some(Notice::error("Failed to fetch data: timed out"))
        );
    }

    #[test]
    fn test_results_reach_screen_below_the_top() {
        let (mut state, screen_id) = on_purchase_orders();
        state.navigate_to(Screen::Logs(LogsState::default()));

        reduce_data_event(
            &mut state,
            DataEvent::PurchaseOrdersLoaded {
                screen_id,
                lines: vec![line("0", "PO1", "A")],
            },
        );

        assert!(matches!(state.current_screen(), Screen::Logs(_)));
        state.navigate_back();
        let po_state = purchase_orders(&state);
        assert_eq!(po_state.loading, LoadingState::Loaded);
        assert_eq!(po_state.lines.len(), 1);
    }

    #[test]
    fn test_failure_below_the_top_still_notifies() {
        let (mut state, screen_id) = on_purchase_orders();
        state.navigate_to(Screen::Logs(LogsState::default()));

        reduce_data_event(
            &mut state,
            DataEvent::PurchaseOrdersLoadFailed {
                screen_id,
                error: "boom".to_string(),
            },
        );

        assert_eq!(
            state.notice,
            Some(Notice::error("Failed to fetch data: boom"))
        );
        state.navigate_back();
        assert_eq!(
            purchase_orders(&state).loading,
            LoadingState::Error("boom".to_string())
        );
    }

    #[test]
    fn test_onhand_loaded_replaces_both_datasets() {
        let mut previous = InventoryState::new();
        previous.onhand = vec![line("0", "", "OLD")];
        previous.search.query = "a1".to_string();
        let (mut state, screen_id) = on_inventory(previous);

        reduce_data_event(
            &mut state,
            DataEvent::OnhandLoaded {
                screen_id,
                onhand: vec![line("0", "", "A100"), line("1", "", "A200")],
                lots: vec![lot("0", "A100")],
            },
        );

        let inventory = inventory(&state);
        assert_eq!(inventory.onhand.len(), 2);
        assert_eq!(inventory.lots.len(), 1);
        assert_eq!(inventory.loading, LoadingState::Loaded);
        // The query survives a reload and filters the new data
        assert_eq!(inventory.filtered_onhand().len(), 1);
        assert!(inventory.search.suggestions.is_none());
    }

    #[test]
    fn test_onhand_failure_leaves_datasets_untouched() {
        let mut previous = InventoryState::new();
        previous.onhand = vec![line("0", "", "A100")];
        previous.lots = vec![lot("0", "A100")];
        let (mut state, screen_id) = on_inventory(previous);

        // On-hand failed while lots succeeded: the join reports a single failure
        reduce_data_event(
            &mut state,
            DataEvent::OnhandLoadFailed {
                screen_id,
                error: "Server error (500)".to_string(),
            },
        );

        let inventory = inventory(&state);
        assert_eq!(inventory.onhand, vec![line("0", "", "A100")]);
        assert_eq!(inventory.lots, vec![lot("0", "A100")]);
        assert!(matches!(inventory.loading, LoadingState::Error(_)));
        assert_eq!(
            state.notice,
            Some(Notice::error("Failed to fetch data: Server error (500)"))
        );
    }

    #[test]
    fn test_results_for_closed_screen_skip_reopened_one() {
        let (mut state, closed_id) = on_inventory(InventoryState::new());
        state.navigate_back();
        state.navigate_to(Screen::Inventory(Box::new(InventoryState::new())));

        reduce_data_event(
            &mut state,
            DataEvent::OnhandLoaded {
                screen_id: closed_id,
                onhand: vec![line("0", "", "OLD")],
                lots: Vec::new(),
            },
        );
        reduce_data_event(
            &mut state,
            DataEvent::OnhandLoadFailed {
                screen_id: closed_id,
                error: "boom".to_string(),
            },
        );

        let inventory = inventory(&state);
        assert!(inventory.onhand.is_empty());
        assert_eq!(inventory.loading, LoadingState::NotStarted);
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_last_response_to_resolve_wins() {
        let (mut state, screen_id) = on_inventory(InventoryState::new());

        // Two requests from the same screen: the slower, earlier one lands last
        reduce_data_event(
            &mut state,
            DataEvent::OnhandLoaded {
                screen_id,
                onhand: vec![line("0", "", "NEWER")],
                lots: Vec::new(),
            },
        );
        reduce_data_event(
            &mut state,
            DataEvent::OnhandLoaded {
                screen_id,
                onhand: vec![line("0", "", "OLDER")],
                lots: Vec::new(),
            },
        );

        assert_eq!(inventory(&state).onhand, vec![line("0", "", "OLDER")]);
    }
}

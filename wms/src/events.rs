use crate::engine::GroupedPurchaseOrder;
use crate::state::{DashboardAction, ScreenId};
use wms_api::endpoints::{lots::LotRecord, InventoryLine};

/// Commands to execute (user actions → background tasks)
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    SelectNext,
    SelectPrevious,
    NavigateToTop,
    NavigateToBottom,

    // Navigation
    NavigateBack,

    // Login
    AppendLoginChar(char),
    DeleteLoginChar,
    SwitchLoginField,
    SubmitLogin,

    // Organization / dashboard
    SelectOrganization {
        organization: String,
    },
    ChangeOrganization,
    OpenDashboardAction(DashboardAction),
    ShowNotifications,
    Logout,

    // Receiving
    LoadPurchaseOrders,
    OpenPurchaseOrder(Box<GroupedPurchaseOrder>),
    OpenItemDetail(Box<InventoryLine>),
    InitiateReceipt,
    ConfirmReceipt,
    CancelReceipt,

    // Scanning
    StartScan {
        target: Option<Box<InventoryLine>>,
    },
    SimulateScan,

    // Inventory parameters popup
    OpenParameters,
    CloseParameters,
    AppendParameterChar(char),
    DeleteParameterChar,
    SwitchParameterField,
    LoadOnhand,

    // Inventory search
    EnterSearchMode,
    ExitSearchMode,
    AppendSearchChar(char),
    DeleteSearchChar,
    ClearSearch,
    SelectSuggestion {
        up: bool,
    },
    ConfirmSuggestion,

    // Inventory views
    SwitchInventoryTab {
        forward: bool,
    },
    ShowLots {
        item_code: String,
    },
    CloseLots,

    // Notices
    DismissNotice,

    // View toggles
    ToggleHelp,

    // Log screen
    NavigateToLogs,
    ScrollLogsUp,
    ScrollLogsDown,
    ScrollLogsPageUp,
    ScrollLogsPageDown,
    ScrollLogsToTop,
    ScrollLogsToBottom,

    // Key sequence state
    SetPendingKey(char),
    ClearPendingKey,

    // System
    Quit,
}

/// Events from background tasks (responses to commands).
///
/// `screen_id` names the screen instance that issued the request.
#[derive(Debug, Clone)]
pub enum DataEvent {
    PurchaseOrdersLoaded {
        screen_id: ScreenId,
        lines: Vec<InventoryLine>,
    },
    PurchaseOrdersLoadFailed {
        screen_id: ScreenId,
        error: String,
    },

    /// Both halves of the on-hand fetch succeeded
    OnhandLoaded {
        screen_id: ScreenId,
        onhand: Vec<InventoryLine>,
        lots: Vec<LotRecord>,
    },
    OnhandLoadFailed {
        screen_id: ScreenId,
        error: String,
    },
}

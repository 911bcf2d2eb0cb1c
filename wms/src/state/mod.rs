pub mod reducer;

use crate::auth::{CredentialVerifier, Session, StaticCredentials};
use crate::config::Settings;
use crate::engine::{self, GroupedPurchaseOrder, SuggestionEntry};
use crate::scan::{LocatorScanner, SimulatedScanner};
use crate::ui::screens::Screen;
use ratatui::widgets::TableState;
use std::cell::RefCell;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use throbber_widgets_tui::ThrobberState;
use wms_api::endpoints::{lots::LotRecord, purchase_orders::DEFAULT_PICKER_NAME, InventoryLine};

/// Identity of one screen instance on the navigation stack.
///
/// Fetches carry the id of the screen that issued them, so a response lands
/// on that screen wherever it sits in the stack and never on a newer screen
/// of the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenId(u64);

static NEXT_SCREEN_ID: AtomicU64 = AtomicU64::new(1);

impl ScreenId {
    pub fn next() -> Self {
        Self(NEXT_SCREEN_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ScreenId {
    fn default() -> Self {
        Self::next()
    }
}

impl std::fmt::Display for ScreenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Represents loading state separate from data state
#[derive(Default, Debug, Clone, PartialEq)]
pub enum LoadingState {
    #[default]
    NotStarted,
    Loading(ThrobberState),
    Loaded,
    Error(String),
}

/// Represents input mode for the inventory screen
#[derive(Default, Debug, Clone, PartialEq)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
    Parameters,
    Lots,
}

/// Modal message shown above every screen until dismissed
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new("Error", message)
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub history: Vec<Screen>,

    // Session
    pub session: Option<Session>,
    pub organization: Option<String>,
    pub organizations: Vec<String>,
    pub picker_name: String,

    // Collaborators
    pub verifier: Arc<dyn CredentialVerifier>,
    pub scanner: Arc<dyn LocatorScanner>,

    // UI state
    pub notice: Option<Notice>,
    pub help_visible: bool,
    pub pending_key: Option<char>,

    // System
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            history: vec![Screen::Login(LoginState::default())],

            session: None,
            organization: None,
            organizations: vec!["AMS".to_string(), "MLCECLAIM".to_string()],
            picker_name: DEFAULT_PICKER_NAME.to_string(),

            verifier: Arc::new(StaticCredentials::default()),
            scanner: Arc::new(SimulatedScanner),

            notice: None,
            help_visible: false,
            pending_key: None,

            should_quit: false,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            organizations: settings.organizations.clone(),
            picker_name: settings.api.picker_name.clone(),
            verifier: settings.credential_verifier(),
            ..Self::new()
        }
    }

    pub fn with_scanner(mut self, scanner: Arc<dyn LocatorScanner>) -> Self {
        self.scanner = scanner;
        self
    }

    /// Get the current screen (last in navigation stack)
    pub fn current_screen(&self) -> &Screen {
        self.history
            .last()
            .expect("Navigation stack should never be empty")
    }

    /// Get mutable reference to current screen
    pub fn current_screen_mut(&mut self) -> &mut Screen {
        self.history
            .last_mut()
            .expect("Navigation stack should never be empty")
    }

    /// Navigate to a new screen (push to stack)
    pub fn navigate_to(&mut self, screen: Screen) {
        tracing::debug!(
            "Navigating to new screen, stack depth: {} -> {}",
            self.history.len(),
            self.history.len() + 1
        );
        self.history.push(screen);
    }

    /// Navigate back (pop from stack)
    /// Returns true if navigation succeeded, false if already at root
    pub fn navigate_back(&mut self) -> bool {
        if self.history.len() > 1 {
            tracing::debug!(
                "Navigating back, stack depth: {} -> {}",
                self.history.len(),
                self.history.len() - 1
            );
            self.history.pop();
            true
        } else {
            tracing::debug!("Cannot navigate back, already at root screen");
            false
        }
    }

    /// Replace the whole navigation stack with a single root screen
    pub fn reset_to(&mut self, screen: Screen) {
        tracing::debug!("Resetting navigation stack (depth {})", self.history.len());
        self.history.clear();
        self.history.push(screen);
    }

    pub fn show_notice(&mut self, notice: Notice) {
        tracing::debug!("Showing notice: {}", notice.title);
        self.notice = Some(notice);
    }

    /// Write a scanned locator into every copy of the line held by the stack
    pub fn record_scanned_locator(&mut self, line_id: &str, locator: &str) {
        let apply = |line: &mut InventoryLine| {
            if line.id == line_id {
                line.actual_locator = locator.to_string();
            }
        };

        for screen in self.history.iter_mut() {
            match screen {
                Screen::PurchaseOrders(s) => s.lines.iter_mut().for_each(apply),
                Screen::PoItems(s) => s.order.lines.iter_mut().for_each(apply),
                Screen::ItemDetail(s) => apply(&mut s.line),
                _ => {}
            }
        }
    }

    /// Receiving screen with the given id, anywhere in the stack
    pub fn purchase_orders_mut(&mut self, id: ScreenId) -> Option<&mut PurchaseOrdersState> {
        self.history.iter_mut().find_map(|screen| match screen {
            Screen::PurchaseOrders(s) if s.id == id => Some(s),
            _ => None,
        })
    }

    /// Inventory screen with the given id, anywhere in the stack
    pub fn inventory_mut(&mut self, id: ScreenId) -> Option<&mut InventoryState> {
        self.history.iter_mut().find_map(|screen| match screen {
            Screen::Inventory(s) if s.id == id => Some(s.as_mut()),
            _ => None,
        })
    }

    pub fn loading_state(&mut self) -> Option<&mut ThrobberState> {
        match self.current_screen_mut() {
            Screen::PurchaseOrders(state) => {
                if let LoadingState::Loading(ref mut throbber_state) = state.loading {
                    return Some(throbber_state);
                }
            }
            Screen::Inventory(state) => {
                if let LoadingState::Loading(ref mut throbber_state) = state.loading {
                    return Some(throbber_state);
                }
            }
            _ => {
                // No other screen fetches data
            }
        }
        None
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// Login

#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

#[derive(Default, Clone)]
pub struct LoginState {
    pub username: String,
    pub password: String,
    pub focused: LoginField,
}

impl std::fmt::Debug for LoginState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginState")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("focused", &self.focused)
            .finish()
    }
}

impl LoginState {
    pub fn switch_field(&mut self) {
        self.focused = match self.focused {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        };
    }

    pub fn focused_value_mut(&mut self) -> &mut String {
        match self.focused {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }
}

// Organizations

#[derive(Debug, Clone)]
pub struct OrganizationsState {
    pub organizations: Vec<String>,
    pub table_state: RefCell<TableState>,
}

impl OrganizationsState {
    pub fn new(organizations: Vec<String>) -> Self {
        let table_state = TableState::default().with_selected(Some(0));
        Self {
            organizations,
            table_state: RefCell::new(table_state),
        }
    }

    pub fn selected(&self) -> Option<&String> {
        let index = self.table_state.borrow().selected()?;
        self.organizations.get(index)
    }
}

// Dashboard

/// Feature tiles on the dashboard, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    ReceiveGoods,
    InventoryOnhand,
    ScanItem,
    ShipGoods,
}

impl DashboardAction {
    pub const ALL: [DashboardAction; 4] = [
        DashboardAction::ReceiveGoods,
        DashboardAction::InventoryOnhand,
        DashboardAction::ScanItem,
        DashboardAction::ShipGoods,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::ReceiveGoods => "Receive Goods",
            Self::InventoryOnhand => "Inventory Onhand",
            Self::ScanItem => "Scan Item",
            Self::ShipGoods => "Ship Goods",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::ReceiveGoods => "Putaway purchase order lines",
            Self::InventoryOnhand => "Look up stock by item or lot",
            Self::ScanItem => "Scan a locator barcode",
            Self::ShipGoods => "Pick and ship outbound orders",
        }
    }
}

#[derive(Debug, Clone)]
pub struct DashboardState {
    pub table_state: RefCell<TableState>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            table_state: RefCell::new(TableState::default().with_selected(Some(0))),
        }
    }
}

impl DashboardState {
    pub fn selected_action(&self) -> Option<DashboardAction> {
        let index = self.table_state.borrow().selected()?;
        DashboardAction::ALL.get(index).copied()
    }
}

// Receiving

#[derive(Default, Debug, Clone)]
pub struct PurchaseOrdersState {
    pub id: ScreenId,
    pub lines: Vec<InventoryLine>,
    pub loading: LoadingState,
    pub table_state: RefCell<TableState>,
}

impl PurchaseOrdersState {
    /// Orders grouped from the current lines, recomputed on every call
    pub fn grouped_orders(&self) -> Vec<GroupedPurchaseOrder> {
        engine::group_by_document(&self.lines)
    }
}

#[derive(Debug, Clone)]
pub struct PoItemsState {
    pub order: GroupedPurchaseOrder,
    pub table_state: RefCell<TableState>,
}

impl PoItemsState {
    pub fn new(order: GroupedPurchaseOrder) -> Self {
        let selected = if order.lines.is_empty() { None } else { Some(0) };
        Self {
            order,
            table_state: RefCell::new(TableState::default().with_selected(selected)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ItemDetailState {
    pub line: InventoryLine,
    pub confirming: bool,
}

impl ItemDetailState {
    pub fn new(line: InventoryLine) -> Self {
        Self {
            line,
            confirming: false,
        }
    }
}

#[derive(Default, Debug, Clone)]
pub struct ScannerState {
    /// Line whose locator is being captured; `None` when opened from the dashboard
    pub target: Option<InventoryLine>,
}

// Inventory

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryTab {
    #[default]
    ByItem,
    ByLot,
    ByLocator,
}

impl InventoryTab {
    pub const ALL: [InventoryTab; 3] = [
        InventoryTab::ByItem,
        InventoryTab::ByLot,
        InventoryTab::ByLocator,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::ByItem => "By Item",
            Self::ByLot => "By Lot",
            Self::ByLocator => "By Locator",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::ByItem => 0,
            Self::ByLot => 1,
            Self::ByLocator => 2,
        }
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub enum ParameterField {
    #[default]
    OrganizationCode,
    Subinventory,
}

#[derive(Default, Debug, Clone)]
pub struct ParametersForm {
    pub organization_code: String,
    pub subinventory: String,
    pub focused: ParameterField,
}

impl ParametersForm {
    pub fn switch_field(&mut self) {
        self.focused = match self.focused {
            ParameterField::OrganizationCode => ParameterField::Subinventory,
            ParameterField::Subinventory => ParameterField::OrganizationCode,
        };
    }

    pub fn focused_value_mut(&mut self) -> &mut String {
        match self.focused {
            ParameterField::OrganizationCode => &mut self.organization_code,
            ParameterField::Subinventory => &mut self.subinventory,
        }
    }

    /// Trimmed subinventory, or `None` when left blank
    pub fn subinventory(&self) -> Option<String> {
        let sub = self.subinventory.trim();
        (!sub.is_empty()).then(|| sub.to_string())
    }
}

/// Search box state. `suggestions` is `None` whenever the suggestion view is hidden.
#[derive(Default, Debug, Clone)]
pub struct SearchState {
    pub query: String,
    pub suggestions: Option<Vec<SuggestionEntry>>,
    pub suggestion_index: usize,
}

impl SearchState {
    pub fn suggestions_visible(&self) -> bool {
        self.suggestions.as_ref().is_some_and(|s| !s.is_empty())
    }
}

#[derive(Default, Debug, Clone)]
pub struct InventoryState {
    pub id: ScreenId,
    pub onhand: Vec<InventoryLine>,
    pub lots: Vec<LotRecord>,
    pub loading: LoadingState,
    pub tab: InventoryTab,
    pub input_mode: InputMode,
    pub params: ParametersForm,
    pub search: SearchState,
    /// Item code whose lots are shown in the lots popup
    pub lots_item: Option<String>,
    pub table_state: RefCell<TableState>,
}

impl InventoryState {
    /// A fresh screen opens with the parameters popup
    pub fn new() -> Self {
        Self {
            input_mode: InputMode::Parameters,
            ..Default::default()
        }
    }

    pub fn filtered_onhand(&self) -> Vec<&InventoryLine> {
        engine::filter_records(&self.onhand, &self.search.query)
    }

    pub fn filtered_lots(&self) -> Vec<&LotRecord> {
        engine::filter_records(&self.lots, &self.search.query)
    }

    pub fn lots_for_selected_item(&self) -> Vec<&LotRecord> {
        match &self.lots_item {
            Some(item_code) => engine::lots_for_item(&self.lots, item_code),
            None => Vec::new(),
        }
    }

    /// Recompute suggestions from the full dataset for the current query
    pub fn refresh_suggestions(&mut self) {
        self.search.suggestions = engine::suggestions_for(&self.onhand, &self.search.query);
        self.search.suggestion_index = 0;
    }
}

#[derive(Default, Debug, Clone)]
pub struct ShipState;

#[derive(Default, Debug, Clone)]
pub struct LogsState {
    pub scroll_offset: usize,
    pub total_entries: usize,
}

pub trait Scrollable {
    fn num_items(&self) -> usize;
    fn table_state(&self) -> &RefCell<TableState>;

    fn select_prev(&mut self) {
        let mut table_state = self.table_state().borrow_mut();
        if self.num_items() > 0 {
            if table_state.selected().unwrap_or(0) == 0 {
                table_state.select_last();
            } else {
                table_state.scroll_up_by(1)
            }
        }
    }

    fn select_next(&mut self) {
        let num_items = self.num_items();
        let mut table_state = self.table_state().borrow_mut();
        if num_items > 0 {
            if table_state.selected().unwrap_or(num_items - 1) == num_items - 1 {
                table_state.select_first();
            } else {
                table_state.scroll_down_by(1)
            }
        }
    }

    fn select_top(&mut self) {
        if self.num_items() > 0 {
            self.table_state().borrow_mut().select(Some(0));
        }
    }

    fn select_bottom(&mut self) {
        let num_items = self.num_items();
        if num_items > 0 {
            self.table_state().borrow_mut().select(Some(num_items - 1));
        }
    }
}

impl Scrollable for OrganizationsState {
    fn num_items(&self) -> usize {
        self.organizations.len()
    }

    fn table_state(&self) -> &RefCell<TableState> {
        &self.table_state
    }
}

impl Scrollable for DashboardState {
    fn num_items(&self) -> usize {
        DashboardAction::ALL.len()
    }

    fn table_state(&self) -> &RefCell<TableState> {
        &self.table_state
    }
}

impl Scrollable for PurchaseOrdersState {
    fn num_items(&self) -> usize {
        self.grouped_orders().len()
    }

    fn table_state(&self) -> &RefCell<TableState> {
        &self.table_state
    }
}

impl Scrollable for PoItemsState {
    fn num_items(&self) -> usize {
        self.order.lines.len()
    }

    fn table_state(&self) -> &RefCell<TableState> {
        &self.table_state
    }
}

impl Scrollable for InventoryState {
    fn num_items(&self) -> usize {
        match self.tab {
            InventoryTab::ByItem => self.filtered_onhand().len(),
            InventoryTab::ByLot => self.filtered_lots().len(),
            InventoryTab::ByLocator => 0,
        }
    }

    fn table_state(&self) -> &RefCell<TableState> {
        &self.table_state
    }
}

pub mod dashboard_screen;
pub mod inventory_screen;
pub mod item_detail_screen;
pub mod login_screen;
pub mod logs_screen;
pub mod organizations_screen;
pub mod po_items_screen;
pub mod purchase_orders_screen;
pub mod scanner_screen;
pub mod ship_screen;

use crate::state::{
    DashboardState, InventoryState, ItemDetailState, LoginState, LogsState, OrganizationsState,
    PoItemsState, PurchaseOrdersState, ScannerState, ShipState,
};

#[derive(Debug, Clone)]
pub enum Screen {
    Login(LoginState),
    Organizations(OrganizationsState),
    Dashboard(DashboardState),
    PurchaseOrders(PurchaseOrdersState),
    PoItems(PoItemsState),
    ItemDetail(Box<ItemDetailState>),
    Scanner(ScannerState),
    Inventory(Box<InventoryState>),
    Ship(ShipState),
    Logs(LogsState),
}

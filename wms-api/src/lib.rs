mod de;
pub mod endpoints;
mod error;
mod macros;
pub mod repositories;

pub use crate::error::WmsApiError;
use repositories::*;
use tower_api_client::{Client as ApiClient, Request as ApiRequest};

/// ORDS module that serves the putaway and on-hand endpoints
pub const DEFAULT_BASE_URL: &str =
    "https://g827cd88c3cfc03-mitsumioracledb.adb.me-dubai-1.oraclecloudapps.com/ords/test/INVENTORY";

pub struct Client {
    inner: ApiClient,
}

impl Client {
    pub fn new(base_url: &str) -> Self {
        Self {
            inner: ApiClient::new(base_url),
        }
    }

    pub async fn send<R>(&self, request: R) -> Result<R::Response, WmsApiError>
    where
        R: ApiRequest,
    {
        self.inner.send(request).await.map_err(From::from)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

pub struct Request;

impl Request {
    pub fn purchase_orders() -> PurchaseOrderRepository {
        PurchaseOrderRepository::new()
    }

    pub fn onhand() -> OnhandRepository {
        OnhandRepository::new()
    }

    pub fn lots() -> LotRepository {
        LotRepository::new()
    }
}

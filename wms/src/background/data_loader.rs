use crate::engine;
use crate::events::DataEvent;
use crate::state::ScreenId;
use std::sync::Arc;
use tokio::sync::mpsc;
use wms_api::{Client, Request, WmsApiError};

/// Fetches backend datasets and reports them as data events
#[derive(Clone)]
pub struct DataLoader {
    pub api_client: Arc<Client>,
    pub data_tx: mpsc::UnboundedSender<DataEvent>,
}

impl DataLoader {
    pub fn new(api_client: Arc<Client>, data_tx: mpsc::UnboundedSender<DataEvent>) -> Self {
        Self {
            api_client,
            data_tx,
        }
    }

    /// Load putaway lines assigned to the picker
    pub async fn load_purchase_orders(&self, screen_id: ScreenId, picker_name: String) {
        tracing::info!("Loading purchase orders for picker {}", picker_name);

        let req = Request::purchase_orders().with_picker(picker_name).list();
        match self.api_client.send(req).await {
            Ok(response) => {
                let lines = engine::normalize_lines(response.into_items());
                tracing::info!("Loaded {} purchase order lines from API", lines.len());
                let _ = self
                    .data_tx
                    .send(DataEvent::PurchaseOrdersLoaded { screen_id, lines });
            }
            Err(e) => {
                tracing::error!("Failed to load purchase orders: {}", e);
                let _ = self.data_tx.send(DataEvent::PurchaseOrdersLoadFailed {
                    screen_id,
                    error: e.to_string(),
                });
            }
        }
    }

    /// Load the on-hand snapshot and its lots together.
    ///
    /// Both requests run concurrently; if either fails, nothing is delivered
    /// except a single failure event.
    pub async fn load_onhand(
        &self,
        screen_id: ScreenId,
        organization_code: String,
        subinventory: Option<String>,
    ) {
        tracing::info!(
            "Loading on-hand for organization {} (subinventory={:?})",
            organization_code,
            subinventory
        );

        let mut onhand_req = Request::onhand()
            .with_organization(organization_code.clone())
            .get();
        if let Some(subinventory) = subinventory {
            onhand_req = onhand_req.subinventory(subinventory);
        }
        let lots_req = Request::lots().with_organization(organization_code).list();

        let result: Result<_, WmsApiError> = tokio::try_join!(
            self.api_client.send(onhand_req),
            self.api_client.send(lots_req)
        );

        match result {
            Ok((onhand_response, lots_response)) => {
                let onhand = engine::normalize_lines(onhand_response.into_items());
                let lots = engine::normalize_lots(lots_response.into_items());
                tracing::info!("Loaded {} on-hand rows and {} lots", onhand.len(), lots.len());
                let _ = self.data_tx.send(DataEvent::OnhandLoaded {
                    screen_id,
                    onhand,
                    lots,
                });
            }
            Err(e) => {
                tracing::error!("Failed to load on-hand data: {}", e);
                let _ = self.data_tx.send(DataEvent::OnhandLoadFailed {
                    screen_id,
                    error: e.to_string(),
                });
            }
        }
    }
}

use super::ItemsResponse;
use crate::macros::setter;
use serde::Serialize;
use std::borrow::Cow;
use tower_api_client::{Request, RequestData};

pub const DEFAULT_PICKER_NAME: &str = "PICKER1";

// Requests

/// Purchase-order lines waiting for putaway, assigned to one picker
#[derive(Debug, Clone, Serialize)]
pub struct ListPutawayDetails {
    #[serde(rename = "PICKER_NAME")]
    picker_name: String,
}

impl ListPutawayDetails {
    pub fn new() -> Self {
        Self::default()
    }

    setter!(picker_name: String);
}

impl Default for ListPutawayDetails {
    fn default() -> Self {
        Self {
            picker_name: DEFAULT_PICKER_NAME.to_string(),
        }
    }
}

impl Request for ListPutawayDetails {
    type Data = Self;
    type Response = ItemsResponse;

    fn endpoint(&self) -> Cow<'_, str> {
        "/PUTAWAYDETAILS".into()
    }

    fn data(&self) -> RequestData<&Self> {
        RequestData::Query(self)
    }
}

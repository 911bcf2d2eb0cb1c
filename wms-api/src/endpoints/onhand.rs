use super::ItemsResponse;
use crate::macros::setter;
use serde::Serialize;
use std::borrow::Cow;
use tower_api_client::{Request, RequestData};

// Requests

/// On-hand quantities for one organization, optionally narrowed to a
/// subinventory
#[derive(Default, Debug, Clone, Serialize)]
pub struct GetOnhand {
    /// The backend spells this parameter `orgainzation_code`. The typo is
    /// part of the published endpoint and must be sent as-is.
    #[serde(rename = "orgainzation_code")]
    organization_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    subinventory: Option<String>,
}

impl GetOnhand {
    pub fn new(organization_code: impl Into<String>) -> Self {
        Self {
            organization_code: organization_code.into(),
            subinventory: None,
        }
    }

    setter!(opt subinventory: String);
}

impl Request for GetOnhand {
    type Data = Self;
    type Response = ItemsResponse;

    fn endpoint(&self) -> Cow<'_, str> {
        "/getonhand".into()
    }

    fn data(&self) -> RequestData<&Self> {
        RequestData::Query(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_keeps_misspelled_organization_parameter() {
        let req = GetOnhand::new("AMS");
        assert_eq!(req.endpoint(), "/getonhand");
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"orgainzation_code": "AMS"})
        );
    }

    #[test]
    fn test_query_with_subinventory() {
        let req = GetOnhand::new("AMS").subinventory("STORES");
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"orgainzation_code": "AMS", "subinventory": "STORES"})
        );
    }
}

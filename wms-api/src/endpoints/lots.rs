use super::{ItemsResponse, present};
use crate::de::{lenient_quantity, lenient_string};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use tower_api_client::{Request, RequestData};

// Common

/// One lot snapshot row for an on-hand item
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LotRecord {
    #[serde(skip_deserializing)]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub item_number: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub item_description: Option<String>,
    #[serde(rename = "lotnumber", deserialize_with = "lenient_string")]
    pub lot_number: Option<String>,
    #[serde(rename = "primaryquantity", deserialize_with = "lenient_quantity")]
    pub primary_quantity: Option<i64>,
    #[serde(deserialize_with = "lenient_string")]
    pub sub_inventory_code: Option<String>,
    #[serde(rename = "materialstatus", deserialize_with = "lenient_string")]
    pub material_status: Option<String>,
    #[serde(rename = "expirationdate", deserialize_with = "lenient_string")]
    pub expiration_date: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub organization_code: Option<String>,
}

impl LotRecord {
    pub fn from_row(row: Value) -> Self {
        serde_json::from_value(row).unwrap_or_default()
    }

    pub fn item_number(&self) -> Option<&str> {
        present(&self.item_number)
    }

    pub fn item_description(&self) -> Option<&str> {
        present(&self.item_description)
    }

    pub fn lot_number(&self) -> Option<&str> {
        present(&self.lot_number)
    }
}

// Requests

#[derive(Default, Debug, Clone, Serialize)]
pub struct GetOnhandByLots {
    #[serde(rename = "ORGANIZATION_CODE")]
    organization_code: String,
}

impl GetOnhandByLots {
    pub fn new(organization_code: impl Into<String>) -> Self {
        Self {
            organization_code: organization_code.into(),
        }
    }
}

impl Request for GetOnhandByLots {
    type Data = Self;
    type Response = ItemsResponse;

    fn endpoint(&self) -> Cow<'_, str> {
        "/getonhandbylots".into()
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
    fn test_lot_record_decodes_snake_case_row() {
        let lot = LotRecord::from_row(json!({
            "item_number": "A100",
            "item_description": "Red Widget",
            "lotnumber": "L-2024-07",
            "primaryquantity": 15,
            "sub_inventory_code": "STORES",
            "materialstatus": "Active",
            "expirationdate": "2026-01-31T00:00:00Z",
            "organization_code": "AMS"
        }));

        assert_eq!(lot.item_number(), Some("A100"));
        assert_eq!(lot.lot_number(), Some("L-2024-07"));
        assert_eq!(lot.primary_quantity, Some(15));
        assert_eq!(lot.expiration_date.as_deref(), Some("2026-01-31T00:00:00Z"));
    }

    #[test]
    fn test_lots_query_uses_upper_case_parameter() {
        let req = GetOnhandByLots::new("MLCECLAIM");
        assert_eq!(req.endpoint(), "/getonhandbylots");
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"ORGANIZATION_CODE": "MLCECLAIM"})
        );
    }
}

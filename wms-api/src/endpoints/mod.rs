pub mod lots;
pub mod onhand;
pub mod purchase_orders;

use crate::de::{lenient_quantity, lenient_string};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope returned by every ORDS collection endpoint.
///
/// Rows are kept as raw JSON so that one malformed row cannot fail the
/// whole response; typed records are produced by decoding each row on its
/// own (see [`InventoryLine::from_row`] and [`lots::LotRecord::from_row`]).
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct ItemsResponse {
    #[serde(default)]
    pub items: Option<Vec<Value>>,
    #[serde(default, rename = "hasMore")]
    pub has_more: Option<bool>,
}

impl ItemsResponse {
    /// Rows of the response. An absent or null `items` array is empty.
    pub fn into_items(self) -> Vec<Value> {
        self.items.unwrap_or_default()
    }
}

/// One purchase-order line or one on-hand stock row
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryLine {
    /// Position of the row in its fetch response, assigned by the client
    #[serde(skip_deserializing)]
    pub id: String,
    #[serde(rename = "itemnumber", deserialize_with = "lenient_string")]
    pub item_code: Option<String>,
    #[serde(rename = "itemdescription", deserialize_with = "lenient_string")]
    pub item_description: Option<String>,
    #[serde(rename = "documentnumber", deserialize_with = "lenient_string")]
    pub document_number: Option<String>,
    #[serde(rename = "documentlinenumber", deserialize_with = "lenient_string")]
    pub document_line_number: Option<String>,
    #[serde(rename = "transactionquantity", deserialize_with = "lenient_quantity")]
    pub transaction_quantity: Option<i64>,
    #[serde(deserialize_with = "lenient_string")]
    pub locator: Option<String>,
    /// Locator captured by scanning; never sent by the backend
    #[serde(skip_deserializing)]
    pub actual_locator: String,
    #[serde(rename = "organizationcode", deserialize_with = "lenient_string")]
    pub organization_code: Option<String>,
    #[serde(rename = "vendorname", deserialize_with = "lenient_string")]
    pub vendor_name: Option<String>,
    #[serde(rename = "subinventorycode", deserialize_with = "lenient_string")]
    pub subinventory_code: Option<String>,
    #[serde(rename = "qoh", deserialize_with = "lenient_quantity")]
    pub quantity_on_hand: Option<i64>,
    #[serde(deserialize_with = "lenient_string")]
    pub uom: Option<String>,
}

impl InventoryLine {
    /// Decode a single raw row. Rows that are not JSON objects decode as an
    /// empty line.
    pub fn from_row(row: Value) -> Self {
        serde_json::from_value(row).unwrap_or_default()
    }

    pub fn item_code(&self) -> Option<&str> {
        present(&self.item_code)
    }

    pub fn item_description(&self) -> Option<&str> {
        present(&self.item_description)
    }

    pub fn document_number(&self) -> Option<&str> {
        present(&self.document_number)
    }

    pub fn vendor_name(&self) -> Option<&str> {
        present(&self.vendor_name)
    }

    pub fn locator(&self) -> Option<&str> {
        present(&self.locator)
    }

    /// Scanned locator if one was captured, otherwise the assigned locator
    pub fn effective_locator(&self) -> Option<&str> {
        if self.actual_locator.is_empty() {
            self.locator()
        } else {
            Some(&self.actual_locator)
        }
    }
}

/// Treats empty strings the same as missing values
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

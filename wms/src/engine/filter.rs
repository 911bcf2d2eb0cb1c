use wms_api::endpoints::{lots::LotRecord, InventoryLine};

/// Records that can be matched by the free-text inventory search
pub trait Searchable {
    /// Fields the search query is matched against. Absent fields never match.
    fn search_fields(&self) -> Vec<Option<&str>>;

    fn matches(&self, query_lower: &str) -> bool {
        self.search_fields()
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(query_lower))
    }
}

impl Searchable for InventoryLine {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![self.item_code.as_deref(), self.item_description.as_deref()]
    }
}

impl Searchable for LotRecord {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            self.item_number.as_deref(),
            self.item_description.as_deref(),
            self.lot_number.as_deref(),
        ]
    }
}

/// Case-insensitive substring filter that keeps input order.
/// An empty query matches every record.
pub fn filter_records<'a, T: Searchable>(records: &'a [T], query: &str) -> Vec<&'a T> {
    if query.is_empty() {
        return records.iter().collect();
    }

    let query_lower = query.to_lowercase();
    records
        .iter()
        .filter(|record| record.matches(&query_lower))
        .collect()
}

/// Lots whose item number equals the given item code exactly
pub fn lots_for_item<'a>(lots: &'a [LotRecord], item_code: &str) -> Vec<&'a LotRecord> {
    lots.iter()
        .filter(|lot| lot.item_number.as_deref() == Some(item_code))
        .collect()
}

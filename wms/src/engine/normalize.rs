use serde_json::Value;
use wms_api::endpoints::{lots::LotRecord, InventoryLine};

/// Convert raw purchase-order or on-hand rows into lines addressed by their
/// position in this response.
pub fn normalize_lines(rows: Vec<Value>) -> Vec<InventoryLine> {
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| InventoryLine {
            id: index.to_string(),
            ..InventoryLine::from_row(row)
        })
        .collect()
}

/// Convert raw lot rows into lot records addressed by their position in
/// this response.
pub fn normalize_lots(rows: Vec<Value>) -> Vec<LotRecord> {
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| LotRecord {
            id: index.to_string(),
            ..LotRecord::from_row(row)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ids_are_positional() {
        let lines = normalize_lines(vec![
            json!({"itemnumber": "A100"}),
            json!({"itemnumber": "A200"}),
            json!({"itemnumber": "A300"}),
        ]);

        let ids: Vec<_> = lines.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["0", "1", "2"]);
        assert_eq!(lines[2].item_code(), Some("A300"));
    }

    #[test]
    fn test_ids_restart_on_every_response() {
        let first = normalize_lots(vec![json!({"lotnumber": "L1"}), json!({"lotnumber": "L2"})]);
        let second = normalize_lots(vec![json!({"lotnumber": "L2"})]);

        assert_eq!(first[1].id, "1");
        assert_eq!(second[0].id, "0");
        assert_eq!(second[0].lot_number(), Some("L2"));
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize_lines(Vec::new()).is_empty());
        assert!(normalize_lots(Vec::new()).is_empty());
    }

    #[test]
    fn test_missing_fields_stay_absent() {
        let lines = normalize_lines(vec![json!({}), json!(42), json!({"qoh": null})]);

        assert_eq!(lines.len(), 3);
        for (index, line) in lines.iter().enumerate() {
            assert_eq!(line.id, index.to_string());
            assert_eq!(line.item_code, None);
            assert_eq!(line.transaction_quantity, None);
            assert_eq!(line.quantity_on_hand, None);
            assert_eq!(line.actual_locator, "");
        }
    }
}

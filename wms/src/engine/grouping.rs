use std::collections::HashMap;
use wms_api::endpoints::InventoryLine;

use super::{UNKNOWN_DOCUMENT, UNKNOWN_VENDOR};

/// Purchase-order lines folded under their document number
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedPurchaseOrder {
    pub document_number: String,
    pub vendor_name: String,
    pub lines: Vec<InventoryLine>,
    pub item_count: usize,
}

/// Group lines by document number in first-seen order.
///
/// The vendor of a group comes from its first line; later lines of the same
/// document never replace it.
pub fn group_by_document(lines: &[InventoryLine]) -> Vec<GroupedPurchaseOrder> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(String, String, Vec<InventoryLine>)> = Vec::new();

    for line in lines {
        let document = line.document_number().unwrap_or(UNKNOWN_DOCUMENT);
        let position = *positions.entry(document).or_insert_with(|| {
            let vendor = line.vendor_name().unwrap_or(UNKNOWN_VENDOR);
            groups.push((document.to_string(), vendor.to_string(), Vec::new()));
            groups.len() - 1
        });
        groups[position].2.push(line.clone());
    }

    groups
        .into_iter()
        .map(|(document_number, vendor_name, lines)| GroupedPurchaseOrder {
            document_number,
            vendor_name,
            item_count: lines.len(),
            lines,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::normalize_lines;
    use serde_json::json;

    fn line(id: &str, document: Option<&str>, vendor: Option<&str>, item: &str) -> InventoryLine {
        InventoryLine {
            id: id.to_string(),
            document_number: document.map(String::from),
            vendor_name: vendor.map(String::from),
            item_code: Some(item.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_first_vendor_wins() {
        let lines = vec![
            line("0", Some("PO1"), Some("Acme"), "A1"),
            line("1", Some("PO1"), Some("Other"), "A2"),
            line("2", Some("PO2"), None, "B1"),
        ];

        let groups = group_by_document(&lines);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].document_number, "PO1");
        assert_eq!(groups[0].vendor_name, "Acme");
        assert_eq!(groups[0].item_count, 2);
        assert_eq!(groups[1].document_number, "PO2");
        assert_eq!(groups[1].vendor_name, "Unknown Vendor");
        assert_eq!(groups[1].item_count, 1);
    }

    #[test]
    fn test_groups_keep_first_seen_order() {
        let lines = vec![
            line("0", Some("PO9"), None, "A"),
            line("1", Some("PO1"), None, "B"),
            line("2", Some("PO9"), None, "C"),
            line("3", Some("PO5"), None, "D"),
        ];

        let documents: Vec<_> = group_by_document(&lines)
            .into_iter()
            .map(|g| g.document_number)
            .collect();
        assert_eq!(documents, vec!["PO9", "PO1", "PO5"]);
    }

    #[test]
    fn test_missing_document_number_groups_as_unknown() {
        let lines = normalize_lines(vec![
            json!({"itemnumber": "A"}),
            json!({"itemnumber": "B", "documentnumber": ""}),
            json!({"itemnumber": "C", "documentnumber": "Unknown", "vendorname": "Late"}),
        ]);

        let groups = group_by_document(&lines);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].document_number, "Unknown");
        assert_eq!(groups[0].vendor_name, "Unknown Vendor");
        assert_eq!(groups[0].item_count, 3);
    }

    #[test]
    fn test_flattened_groups_partition_input() {
        let lines = vec![
            line("0", Some("PO1"), Some("Acme"), "A1"),
            line("1", Some("PO2"), Some("Bolt"), "B1"),
            line("2", Some("PO1"), Some("Acme"), "A2"),
            line("3", None, None, "X"),
            line("4", Some("PO2"), Some("Bolt"), "B2"),
        ];

        let groups = group_by_document(&lines);
        let total: usize = groups.iter().map(|g| g.item_count).sum();
        assert_eq!(total, lines.len());

        // Every line lands in exactly one group, in input order within it
        let mut flattened: Vec<&InventoryLine> = groups.iter().flat_map(|g| &g.lines).collect();
        flattened.sort_by_key(|l| l.id.parse::<usize>().unwrap());
        assert_eq!(flattened, lines.iter().collect::<Vec<_>>());

        let po1_ids: Vec<_> = groups[0].lines.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(po1_ids, vec!["0", "2"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(group_by_document(&[]).is_empty());
    }
}

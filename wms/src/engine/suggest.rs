use std::collections::HashSet;
use wms_api::endpoints::InventoryLine;

use super::{MAX_SUGGESTIONS, MIN_SUGGESTION_QUERY_LEN, NOT_AVAILABLE, NO_DESCRIPTION};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKind {
    Code,
    Description,
}

/// One autocomplete row for the inventory search box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionEntry {
    pub kind: SuggestionKind,
    /// Text that replaces the search query when the suggestion is picked
    pub value: String,
    pub display: String,
}

/// Suggestions for the current query, or `None` when the suggestion view
/// should stay hidden (query too short or nothing loaded).
pub fn suggestions_for(dataset: &[InventoryLine], query: &str) -> Option<Vec<SuggestionEntry>> {
    if query.chars().count() < MIN_SUGGESTION_QUERY_LEN || dataset.is_empty() {
        return None;
    }

    Some(build_suggestions(dataset, query))
}

/// Scan the dataset in order and collect at most five suggestions.
///
/// A record whose item code contains the query suggests its code; only a
/// record whose code does not match is tried against its description. The
/// matched value is the dedup key, so records sharing a description
/// collapse into one suggestion.
pub fn build_suggestions(dataset: &[InventoryLine], query: &str) -> Vec<SuggestionEntry> {
    let query_lower = query.to_lowercase();
    let contains = |field: &str| field.to_lowercase().contains(&query_lower);

    let mut seen: HashSet<&str> = HashSet::new();
    let mut suggestions = Vec::new();

    for line in dataset {
        let code = line.item_code();
        let description = line.item_description();

        match code {
            Some(code) if contains(code) => {
                if seen.insert(code) {
                    suggestions.push(SuggestionEntry {
                        kind: SuggestionKind::Code,
                        value: code.to_string(),
                        display: format!("{} - {}", code, description.unwrap_or(NO_DESCRIPTION)),
                    });
                }
            }
            // Only rows whose code misses the query; a code already suggested does not fall through
            _ => {
                if let Some(description) = description.filter(|d| contains(*d)) {
                    if seen.insert(description) {
                        suggestions.push(SuggestionEntry {
                            kind: SuggestionKind::Description,
                            value: description.to_string(),
                            display: format!("{} - {}", code.unwrap_or(NOT_AVAILABLE), description),
                        });
                    }
                }
            }
        }
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn onhand(code: Option<&str>, description: Option<&str>) -> InventoryLine {
        InventoryLine {
            item_code: code.map(String::from),
            item_description: description.map(String::from),
            ..Default::default()
        }
    }

    fn widgets() -> Vec<InventoryLine> {
        vec![
            onhand(Some("A100"), Some("Red Widget")),
            onhand(Some("A200"), Some("Blue Widget")),
        ]
    }

    #[test]
    fn test_description_matches() {
        let suggestions = suggestions_for(&widgets(), "wi").unwrap();

        assert_eq!(
            suggestions,
            vec![
                SuggestionEntry {
                    kind: SuggestionKind::Description,
                    value: "Red Widget".to_string(),
                    display: "A100 - Red Widget".to_string(),
                },
                SuggestionEntry {
                    kind: SuggestionKind::Description,
                    value: "Blue Widget".to_string(),
                    display: "A200 - Blue Widget".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_code_match_wins_over_description() {
        let data = vec![onhand(Some("WID-1"), Some("Widget"))];
        let suggestions = build_suggestions(&data, "wid");

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].kind, SuggestionKind::Code);
        assert_eq!(suggestions[0].value, "WID-1");
        assert_eq!(suggestions[0].display, "WID-1 - Widget");
    }

    #[test]
    fn test_missing_halves_use_placeholders() {
        let data = vec![onhand(Some("A100"), None), onhand(None, Some("Loose bolts"))];

        let by_code = build_suggestions(&data, "a1");
        assert_eq!(by_code[0].display, "A100 - No description");

        let by_description = build_suggestions(&data, "bolt");
        assert_eq!(by_description[0].display, "N/A - Loose bolts");
        assert_eq!(by_description[0].value, "Loose bolts");
    }

    #[test]
    fn test_shared_description_collapses() {
        let data = vec![
            onhand(Some("X1"), Some("Hex Nut")),
            onhand(Some("X2"), Some("Hex Nut")),
            onhand(Some("X3"), Some("Hex Bolt")),
        ];

        let values: Vec<_> = build_suggestions(&data, "hex")
            .into_iter()
            .map(|s| s.value)
            .collect();
        assert_eq!(values, vec!["Hex Nut", "Hex Bolt"]);
    }

    #[test]
    fn test_duplicate_code_does_not_fall_back_to_description() {
        let data = vec![
            onhand(Some("AB-1"), Some("Abrasive disc")),
            onhand(Some("AB-1"), Some("Abrasive pad")),
        ];

        let suggestions = build_suggestions(&data, "ab");
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].value, "AB-1");
    }

    #[test]
    fn test_capped_at_five_in_scan_order() {
        let data: Vec<_> = (0..9)
            .map(|i| onhand(Some(&format!("SKU-{i}")), None))
            .collect();

        let values: Vec<_> = build_suggestions(&data, "sku")
            .into_iter()
            .map(|s| s.value)
            .collect();
        assert_eq!(values, vec!["SKU-0", "SKU-1", "SKU-2", "SKU-3", "SKU-4"]);
    }

    #[test]
    fn test_values_are_unique() {
        let data = vec![
            onhand(Some("Gear"), Some("Gear")),
            onhand(Some("G2"), Some("Gear")),
            onhand(Some("Gear"), Some("Other")),
        ];

        let suggestions = build_suggestions(&data, "ge");
        let unique: HashSet<_> = suggestions.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(unique.len(), suggestions.len());
        assert_eq!(suggestions.len(), 1);
    }

    #[test]
    fn test_suppressed_for_short_query_or_empty_dataset() {
        assert_eq!(suggestions_for(&widgets(), ""), None);
        assert_eq!(suggestions_for(&widgets(), "w"), None);
        assert_eq!(suggestions_for(&[], "widget"), None);
        assert_eq!(suggestions_for(&widgets(), "zz"), Some(Vec::new()));
    }
}

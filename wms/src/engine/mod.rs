//! Inventory search and grouping engine.
//!
//! Pure functions over the datasets held by the inventory and receiving
//! screens. Nothing here caches results: every view is recomputed from the
//! full dataset on demand.

pub mod filter;
pub mod grouping;
pub mod normalize;
pub mod suggest;

pub use filter::{filter_records, lots_for_item, Searchable};
pub use grouping::{group_by_document, GroupedPurchaseOrder};
pub use normalize::{normalize_lines, normalize_lots};
pub use suggest::{build_suggestions, suggestions_for, SuggestionEntry, SuggestionKind};

/// Maximum number of autocomplete suggestions shown at once
pub const MAX_SUGGESTIONS: usize = 5;

/// Shortest query (in characters) that produces suggestions
pub const MIN_SUGGESTION_QUERY_LEN: usize = 2;

/// Display defaults for absent fields
pub const UNKNOWN_DOCUMENT: &str = "Unknown";
pub const UNKNOWN_VENDOR: &str = "Unknown Vendor";
pub const NOT_AVAILABLE: &str = "N/A";
pub const NO_DESCRIPTION: &str = "No description";

// Professional Cataloguing Module
// Handles class-code keys, shelf ordering, grouping and related lookup

pub mod classification;
pub mod grouping;
pub mod mapping;
pub mod ordering;
pub mod related;
pub mod strategies;

pub use classification::{ClassKey, class_key, main_class, numeric_code, two_segment_key};
pub use grouping::{ShelfGroups, group_by_main_class};
pub use mapping::{CodeMapping, MappedCode, StaticCodeMap};
pub use ordering::{order_by_classification, sort_reference};
pub use related::{DEFAULT_RADIUS, find_related, find_related_with_config};
pub use strategies::{SortStrategy, compare_strategies, sort_merge, sort_partition};

pub fn init() {
    tracing::info!("Initializing Professional Cataloguing Module...");
}

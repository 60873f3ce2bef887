//! Class-code key sorting and retrieval over in-memory catalog records.

pub mod config;
pub mod domain;
pub mod logging;
pub mod models;
pub mod modules;

pub use config::Config;
pub use domain::{CatalogError, Result};
pub use models::{Record, parse_records};
pub use modules::cataloguing_pro::{
    ClassKey, CodeMapping, DEFAULT_RADIUS, MappedCode, ShelfGroups, SortStrategy, StaticCodeMap,
    compare_strategies, find_related, find_related_with_config, group_by_main_class,
    order_by_classification, sort_merge, sort_partition, sort_reference,
};

/// Install logging from `config` and announce the cataloguing module
pub fn init(config: &Config) {
    logging::init(&config.log_filter);
    modules::cataloguing_pro::init();
}

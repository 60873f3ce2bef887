use std::env;

use crate::modules::cataloguing_pro::DEFAULT_RADIUS;

const DEFAULT_LOG_FILTER: &str = "shelfkey=info";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Radius used by related-record lookup when the caller gives none
    pub related_radius: f64,
    /// tracing filter used when RUST_LOG is unset
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            related_radius: DEFAULT_RADIUS,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let related_radius = env::var("SHELFKEY_RELATED_RADIUS")
            .ok()
            .and_then(|r| r.trim().parse::<f64>().ok())
            .filter(|r| *r >= 0.0)
            .unwrap_or(DEFAULT_RADIUS);

        Self {
            related_radius,
            log_filter: env::var("SHELFKEY_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}

//! Radius lookup over class codes read as decimal numbers.

use super::classification::numeric_code;
use crate::config::Config;
use crate::domain::Result;
use crate::models::Record;

/// Radius used when the caller has no preference
pub const DEFAULT_RADIUS: f64 = 0.5;

/// Records whose code lies within `radius` of `target`, in input order.
///
/// Both the target and every candidate are read as a single float, not as a
/// dot-segmented key, so a code like `"333.1.2"` fails here even though it
/// orders fine. The target is read first; the first bad candidate aborts.
/// A negative or NaN radius matches nothing.
pub fn find_related(records: &[Record], target: &str, radius: f64) -> Result<Vec<Record>> {
    let center = numeric_code(target)?;

    if radius.is_nan() || radius < 0.0 {
        tracing::warn!("Radius {} around {} can match no record", radius, target);
    }

    let mut related = Vec::new();
    for record in records {
        let value = numeric_code(record.class_code())?;
        if (value - center).abs() <= radius {
            related.push(record.clone());
        }
    }

    tracing::debug!(
        "Found {} of {} records within {} of {}",
        related.len(),
        records.len(),
        radius,
        target
    );

    Ok(related)
}

/// [`find_related`] with the configured default radius
pub fn find_related_with_config(
    records: &[Record],
    target: &str,
    config: &Config,
) -> Result<Vec<Record>> {
    find_related(records, target, config.related_radius)
}

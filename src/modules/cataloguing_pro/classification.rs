// Classification Helpers
//
// Three independent readings of a class code. They disagree on purpose:
// ordering uses the dot-segmented integer key, the partition and merge
// strategies use the two-segment float key, and related-record lookup reads
// the whole code as one decimal number. Do not merge them.

use std::cmp::Ordering;

use crate::domain::{CatalogError, Result};

/// One integer segment, held as digits with leading zeros stripped.
///
/// Ordered by digit count, then digit by digit, which is numeric order for
/// any length.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Segment(String);

impl Segment {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Ord for Segment {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Segment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dot-segmented integer key, compared segment by segment.
///
/// `Vec` ordering is lexicographic, so `(333)` sorts before `(333, 1)`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClassKey(Vec<Segment>);

impl ClassKey {
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(Segment::as_str)
    }
}

/// Split on `.` and read every segment as a non-negative integer of any
/// length.
pub fn class_key(code: &str) -> Result<ClassKey> {
    code.split('.')
        .map(|segment| parse_segment(code, segment))
        .collect::<Result<Vec<_>>>()
        .map(ClassKey)
}

fn parse_segment(code: &str, segment: &str) -> Result<Segment> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CatalogError::malformed(code, segment));
    }
    let digits = segment.trim_start_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };
    Ok(Segment(digits.to_string()))
}

/// Simplified key used by the partition and merge strategies.
///
/// Only `"<major>.<minor>"` is read, as one float. Anything past the second
/// segment is ignored, and `"200.10"` reads as `200.1`, which sorts before
/// `"200.5"`. This does not agree with [`class_key`] on such inputs.
pub fn two_segment_key(code: &str) -> Result<f64> {
    let mut parts = code.split('.');
    let text = match (parts.next(), parts.next()) {
        (Some(major), Some(minor)) => format!("{major}.{minor}"),
        _ => code.to_string(),
    };
    text.parse::<f64>()
        .map_err(|_| CatalogError::malformed(code, &text))
}

/// The whole code read as a single decimal number.
///
/// Uses Rust float syntax: surrounding whitespace and `_` digit separators
/// are rejected, so `" 333.5"` and `"1_000"` are not numeric codes here.
pub fn numeric_code(code: &str) -> Result<f64> {
    code.parse::<f64>()
        .map_err(|_| CatalogError::InvalidNumericCode {
            code: code.to_string(),
        })
}

/// The code before the first `.`, as written.
pub fn main_class(code: &str) -> &str {
    code.split_once('.').map_or(code, |(head, _)| head)
}

/// Basic validation for a dot-segmented class code, e.g. "005.133"
pub fn validate_class_code(code: &str) -> bool {
    class_key(code).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_key_orders_segment_by_segment() {
        let short = class_key("333").unwrap();
        let long = class_key("333.33092").unwrap();
        let next = class_key("500").unwrap();

        assert_eq!(long.segments().collect::<Vec<_>>(), vec!["333", "33092"]);
        assert!(short < long);
        assert!(long < next);
        assert!(class_key("200.5").unwrap() < class_key("200.10").unwrap());
    }

    #[test]
    fn test_class_key_compares_long_segments() {
        let wide = class_key("500.123456789012345678901").unwrap();
        let wider = class_key("500.1234567890123456789012").unwrap();
        let narrow = class_key("500.99999999999999999999").unwrap();

        assert!(narrow < wide);
        assert!(wide < wider);
        assert!(class_key("100").unwrap() < wide);
        assert!(class_key("99999999999999999999999").unwrap() > wider);
    }

    #[test]
    fn test_class_key_ignores_leading_zeros() {
        assert_eq!(class_key("005.0133").unwrap(), class_key("5.133").unwrap());
        assert_eq!(class_key("000").unwrap(), class_key("0").unwrap());
        assert!(class_key("005").unwrap() < class_key("10").unwrap());
        assert_eq!(
            class_key("007.00").unwrap().segments().collect::<Vec<_>>(),
            vec!["7", "0"]
        );
    }

    #[test]
    fn test_class_key_rejects_bad_segments() {
        for code in ["abc", "333.", ".5", "333.x1", "+5", " 5", "-1"] {
            let err = class_key(code).unwrap_err();
            assert!(
                matches!(err, CatalogError::MalformedClassCode { .. }),
                "{code} should be malformed"
            );
        }
    }

    #[test]
    fn test_class_key_reports_offending_segment() {
        let err = class_key("333.3a.1").unwrap_err();
        assert_eq!(err, CatalogError::malformed("333.3a.1", "3a"));
    }

    #[test]
    fn test_two_segment_key_truncates() {
        assert_eq!(two_segment_key("500").unwrap(), 500.0);
        assert_eq!(two_segment_key("333.1").unwrap(), 333.1);
        assert_eq!(two_segment_key("333.1.9").unwrap(), 333.1);
        assert_eq!(two_segment_key("200.10").unwrap(), 200.1);
        assert!(two_segment_key("200.5").unwrap() > two_segment_key("200.10").unwrap());
    }

    #[test]
    fn test_two_segment_key_ignores_tail_garbage() {
        assert_eq!(two_segment_key("333.1.x").unwrap(), 333.1);
        assert!(matches!(
            two_segment_key("abc"),
            Err(CatalogError::MalformedClassCode { .. })
        ));
    }

    #[test]
    fn test_numeric_code() {
        assert_eq!(numeric_code("333.5").unwrap(), 333.5);
        assert_eq!(
            numeric_code("333.1.2").unwrap_err(),
            CatalogError::InvalidNumericCode {
                code: "333.1.2".to_string()
            }
        );
    }

    #[test]
    fn test_numeric_code_rejects_python_only_syntax() {
        for code in [" 333.5", "333.5 ", "1_000"] {
            assert!(numeric_code(code).is_err(), "{code:?}");
        }
    }

    #[test]
    fn test_main_class() {
        assert_eq!(main_class("333.33092"), "333");
        assert_eq!(main_class("500"), "500");
        assert_eq!(main_class("005.133"), "005");
        assert_eq!(main_class(""), "");
    }

    #[test]
    fn test_validate_class_code() {
        assert!(validate_class_code("005.133"));
        assert!(!validate_class_code("QA76.73"));
    }
}

/// Parse a decimal-degree cell. Empty or malformed cells yield `None`
/// so callers can drop the row rather than fail the whole load.
pub fn parse_coordinate(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return None;
    }

    trimmed.parse::<f64>().ok().filter(|value| !value.is_nan())
}

/// Inclusive range check, false for NaN
pub fn within(value: f64, min: f64, max: f64) -> bool {
    (min..=max).contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinate() {
        assert!((parse_coordinate("51.5074").unwrap() - 51.5074).abs() < 0.000001);
        assert!((parse_coordinate(" -0.1278 ").unwrap() - -0.1278).abs() < 0.000001);
        assert_eq!(parse_coordinate("1e1"), Some(10.0));
    }

    #[test]
    fn test_parse_coordinate_rejects_junk() {
        assert_eq!(parse_coordinate(""), None);
        assert_eq!(parse_coordinate("   "), None);
        assert_eq!(parse_coordinate("51:30:15"), None);
        assert_eq!(parse_coordinate("NaN"), None);
    }

    #[test]
    fn test_within_is_inclusive() {
        assert!(within(50.681, 50.681, 57.985));
        assert!(within(57.985, 50.681, 57.985));
        assert!(!within(57.9851, 50.681, 57.985));
        assert!(!within(f64::NAN, 50.681, 57.985));
    }
}

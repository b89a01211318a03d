use crate::utils::constants::{SERIAL_PATTERN, UNKNOWN_SERIAL};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use validator::{Validate, ValidationError};

fn serial_regex() -> &'static Regex {
    static SERIAL_RE: OnceLock<Regex> = OnceLock::new();
    SERIAL_RE.get_or_init(|| Regex::new(SERIAL_PATTERN).expect("serial pattern is valid"))
}

/// First canonical `PI` token in a raw serial, or the unknown placeholder.
pub fn normalize_serial(raw: &str) -> String {
    serial_regex()
        .find(raw)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| UNKNOWN_SERIAL.to_string())
}

/// True when `serial` is exactly one canonical token.
pub fn is_canonical_serial(serial: &str) -> bool {
    serial_regex()
        .find(serial)
        .is_some_and(|m| m.start() == 0 && m.end() == serial.len())
}

fn validate_serial(serial: &str) -> Result<(), ValidationError> {
    if serial == UNKNOWN_SERIAL || is_canonical_serial(serial) {
        Ok(())
    } else {
        Err(ValidationError::new("serial"))
    }
}

/// A cleaned sensor row. `values` follows the dataset's header order and
/// already holds the normalized serial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SensorRecord {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    #[validate(length(min = 1), custom(function = "validate_serial"))]
    pub serial: String,

    pub values: Vec<String>,
}

impl SensorRecord {
    pub fn new(latitude: f64, longitude: f64, serial: String, values: Vec<String>) -> Self {
        Self {
            latitude,
            longitude,
            serial,
            values,
        }
    }

    pub fn has_known_serial(&self) -> bool {
        self.serial != UNKNOWN_SERIAL
    }
}

/// Output of the cleaning pass: the relabeled header plus retained rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CleanedDataset {
    pub headers: Vec<String>,
    pub records: Vec<SensorRecord>,
}

impl CleanedDataset {
    pub fn new(headers: Vec<String>, records: Vec<SensorRecord>) -> Self {
        Self { headers, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Column lookup by name for one record
    pub fn value<'a>(&self, record: &'a SensorRecord, column: &str) -> Option<&'a str> {
        let index = self.column_index(column)?;
        record.values.get(index).map(String::as_str)
    }

    /// `(column, value)` pairs in header order
    pub fn fields<'a>(
        &'a self,
        record: &'a SensorRecord,
    ) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.headers
            .iter()
            .zip(record.values.iter())
            .map(|(h, v)| (h.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_serial() {
        assert_eq!(normalize_serial("PI123AB-extra-junk"), "PI123AB");
        assert_eq!(normalize_serial("no-match-here"), UNKNOWN_SERIAL);
        assert_eq!(normalize_serial(""), UNKNOWN_SERIAL);
        assert_eq!(normalize_serial("  "), UNKNOWN_SERIAL);
    }

    #[test]
    fn test_normalize_serial_word_boundaries() {
        assert_eq!(normalize_serial("PI040298AD5A/GROW"), "PI040298AD5A");
        assert_eq!(normalize_serial("device PI9 then PI10"), "PI9");
        // Lowercase tail and embedded tokens are not canonical
        assert_eq!(normalize_serial("PI12ab"), UNKNOWN_SERIAL);
        assert_eq!(normalize_serial("XPI123"), UNKNOWN_SERIAL);
        assert_eq!(normalize_serial("PI"), UNKNOWN_SERIAL);
    }

    #[test]
    fn test_is_canonical_serial() {
        assert!(is_canonical_serial("PI040298AD5A"));
        assert!(!is_canonical_serial("PI040298AD5A-x"));
        assert!(!is_canonical_serial(UNKNOWN_SERIAL));
    }

    #[test]
    fn test_record_validation() {
        let record = SensorRecord::new(51.5, -0.12, "PI1A".to_string(), vec![]);
        assert!(record.validate().is_ok());
        assert!(record.has_known_serial());

        let unknown = SensorRecord::new(51.5, -0.12, UNKNOWN_SERIAL.to_string(), vec![]);
        assert!(unknown.validate().is_ok());
        assert!(!unknown.has_known_serial());

        let junk = SensorRecord::new(51.5, -0.12, "junk".to_string(), vec![]);
        assert!(junk.validate().is_err());

        let empty = SensorRecord::new(51.5, -0.12, String::new(), vec![]);
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_dataset_column_lookup() {
        let dataset = CleanedDataset::new(
            vec!["Serial".into(), "Latitude".into(), "Type".into()],
            vec![SensorRecord::new(
                52.0,
                -1.0,
                "PI7".into(),
                vec!["PI7".into(), "52.0".into(), "Soil".into()],
            )],
        );
        let record = &dataset.records[0];

        assert_eq!(dataset.value(record, "Type"), Some("Soil"));
        assert_eq!(dataset.value(record, "Code"), None);
        assert_eq!(dataset.fields(record).count(), 3);
    }
}

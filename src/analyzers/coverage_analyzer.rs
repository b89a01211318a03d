use crate::models::{BoundingBox, CleanedDataset};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// Column used to break coverage down by sensor kind, when present
const TYPE_COLUMN: &str = "Type";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageStatistics {
    pub total_records: usize,
    pub unique_serials: usize,
    pub unknown_serials: usize,
    pub extent: Option<BoundingBox>,
    pub records_by_type: BTreeMap<String, usize>,
}

pub struct CoverageAnalyzer;

impl CoverageAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, dataset: &CleanedDataset) -> CoverageStatistics {
        let mut serials = HashSet::new();
        let mut unknown_serials = 0;
        let mut records_by_type = BTreeMap::new();

        for record in &dataset.records {
            if record.has_known_serial() {
                serials.insert(record.serial.as_str());
            } else {
                unknown_serials += 1;
            }

            if let Some(kind) = dataset.value(record, TYPE_COLUMN) {
                let kind = if kind.trim().is_empty() { "(blank)" } else { kind.trim() };
                *records_by_type.entry(kind.to_string()).or_insert(0) += 1;
            }
        }

        let extent = BoundingBox::enclosing(
            dataset
                .records
                .iter()
                .map(|record| (record.latitude, record.longitude)),
        );

        CoverageStatistics {
            total_records: dataset.len(),
            unique_serials: serials.len(),
            unknown_serials,
            extent,
            records_by_type,
        }
    }
}

impl Default for CoverageAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl CoverageStatistics {
    pub fn summary(&self) -> String {
        let coverage = match &self.extent {
            Some(extent) => format!(
                "{:.3}°N-{:.3}°N, {:.3}°E-{:.3}°E",
                extent.latitude_min, extent.latitude_max, extent.longitude_min, extent.longitude_max
            ),
            None => "No records".to_string(),
        };

        format!(
            "Sensors: {} records\n\
            Distinct Serials: {}\n\
            Unknown Serials: {}\n\
            Coverage: {}",
            self.total_records, self.unique_serials, self.unknown_serials, coverage
        )
    }

    pub fn detailed_summary(&self) -> String {
        if self.records_by_type.is_empty() {
            return self.summary();
        }

        let mut breakdown = String::new();
        for (kind, count) in &self.records_by_type {
            breakdown.push_str(&format!("\n- {}: {}", kind, count));
        }

        format!("{}\n\nRecords by Type:{}", self.summary(), breakdown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SensorRecord;
    use crate::utils::constants::UNKNOWN_SERIAL;

    fn dataset() -> CleanedDataset {
        let headers = vec!["Serial".to_string(), "Type".to_string()];
        let record = |lat: f64, lon: f64, serial: &str, kind: &str| {
            SensorRecord::new(
                lat,
                lon,
                serial.to_string(),
                vec![serial.to_string(), kind.to_string()],
            )
        };
        CleanedDataset::new(
            headers,
            vec![
                record(51.0, -1.0, "PI1", "Soil"),
                record(53.0, -2.5, "PI1", "Soil"),
                record(55.0, 0.5, "PI2", "Air"),
                record(52.0, -0.5, UNKNOWN_SERIAL, ""),
            ],
        )
    }

    #[test]
    fn test_analyze() {
        let stats = CoverageAnalyzer::new().analyze(&dataset());

        assert_eq!(stats.total_records, 4);
        assert_eq!(stats.unique_serials, 2);
        assert_eq!(stats.unknown_serials, 1);
        assert_eq!(stats.extent, Some(BoundingBox::new(-2.5, 0.5, 51.0, 55.0)));
        assert_eq!(stats.records_by_type.get("Soil"), Some(&2));
        assert_eq!(stats.records_by_type.get("(blank)"), Some(&1));
    }

    #[test]
    fn test_empty_dataset() {
        let stats = CoverageAnalyzer::new().analyze(&CleanedDataset::default());
        assert_eq!(stats.extent, None);
        assert!(stats.summary().contains("Coverage: No records"));
        assert_eq!(stats.detailed_summary(), stats.summary());
    }

    #[test]
    fn test_detailed_summary_lists_types() {
        let stats = CoverageAnalyzer::new().analyze(&dataset());
        let text = stats.detailed_summary();
        assert!(text.contains("Records by Type:"));
        assert!(text.contains("- Air: 1"));
    }
}

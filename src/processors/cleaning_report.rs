use serde::Serialize;

/// Row accounting for one cleaning pass. Dropped rows are expected for noisy
/// sensor data and are reported here rather than raised as errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleaningReport {
    pub total_rows: usize,
    pub retained_rows: usize,
    pub out_of_bounds_rows: usize,
    pub unparseable_coordinate_rows: usize,
    pub unknown_serials: usize,
}

impl CleaningReport {
    pub fn dropped_rows(&self) -> usize {
        self.out_of_bounds_rows + self.unparseable_coordinate_rows
    }

    fn percentage(&self, count: usize) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            100.0 * count as f64 / self.total_rows as f64
        }
    }

    pub fn summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str("=== Cleaning Report ===\n");
        summary.push_str(&format!("Total Rows: {}\n", self.total_rows));
        summary.push_str(&format!(
            "Retained Rows: {} ({:.1}%)\n",
            self.retained_rows,
            self.percentage(self.retained_rows)
        ));
        summary.push_str(&format!(
            "Outside Bounding Box: {} ({:.1}%)\n",
            self.out_of_bounds_rows,
            self.percentage(self.out_of_bounds_rows)
        ));
        summary.push_str(&format!(
            "Unparseable Coordinates: {} ({:.1}%)\n",
            self.unparseable_coordinate_rows,
            self.percentage(self.unparseable_coordinate_rows)
        ));
        summary.push_str(&format!(
            "Unknown Serials (retained): {}\n",
            self.unknown_serials
        ));

        summary
    }
}

use crate::error::Result;
use crate::models::{normalize_serial, BoundingBox, CleanedDataset, LocationTable, SensorRecord};
use crate::processors::cleaning_report::CleaningReport;
use crate::readers::LocationReader;
use crate::utils::constants::{LATITUDE_COLUMN, LONGITUDE_COLUMN, SERIAL_COLUMN, UNKNOWN_SERIAL};
use crate::utils::coordinates::parse_coordinate;
use std::path::Path;
use tracing::{debug, info};

const REQUIRED_COLUMNS: [&str; 3] = [LATITUDE_COLUMN, LONGITUDE_COLUMN, SERIAL_COLUMN];

/// Load and clean with the compiled-in UK bounding box.
pub fn load_and_clean(source: &Path) -> Result<CleanedDataset> {
    DatasetCleaner::new().load_and_clean(source)
}

/// The upstream export labels latitude and longitude the wrong way round for
/// every row. Relabels the two headers; no cell is touched.
pub fn swap_coordinate_labels(table: &mut LocationTable) -> Result<()> {
    table.swap_labels(LATITUDE_COLUMN, LONGITUDE_COLUMN)
}

/// Retains records inside `bounds`. Applying it twice is a no-op.
pub fn filter_to_bounds(records: Vec<SensorRecord>, bounds: &BoundingBox) -> Vec<SensorRecord> {
    records
        .into_iter()
        .filter(|r| bounds.contains(r.latitude, r.longitude))
        .collect()
}

/// Turns a raw location export into plot-ready records.
///
/// The pass runs in a fixed order: schema check, coordinate relabel, serial
/// normalization, then bounds filtering. The relabel is not idempotent, so a
/// table must go through the cleaner exactly once.
pub struct DatasetCleaner {
    bounds: BoundingBox,
    reader: LocationReader,
}

impl DatasetCleaner {
    pub fn new() -> Self {
        Self {
            bounds: BoundingBox::default(),
            reader: LocationReader::new(),
        }
    }

    pub fn with_bounds(mut self, bounds: BoundingBox) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_reader(mut self, reader: LocationReader) -> Self {
        self.reader = reader;
        self
    }

    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    pub fn load_and_clean(&self, source: &Path) -> Result<CleanedDataset> {
        self.load_with_report(source).map(|(dataset, _)| dataset)
    }

    pub fn load_with_report(&self, source: &Path) -> Result<(CleanedDataset, CleaningReport)> {
        info!(source = %source.display(), "loading sensor locations");
        let table = self.reader.read_table(source)?;
        self.clean_table(table)
    }

    /// Cleans an already-loaded table.
    pub fn clean_table(&self, mut table: LocationTable) -> Result<(CleanedDataset, CleaningReport)> {
        table.require_columns(&REQUIRED_COLUMNS)?;

        swap_coordinate_labels(&mut table)?;
        table.map_column(SERIAL_COLUMN, normalize_serial)?;

        let mut report = CleaningReport {
            total_rows: table.len(),
            ..CleaningReport::default()
        };

        let coordinates: Vec<Option<(f64, f64)>> = (0..table.len())
            .map(|row| {
                let latitude = table.cell(row, LATITUDE_COLUMN).and_then(parse_coordinate)?;
                let longitude = table.cell(row, LONGITUDE_COLUMN).and_then(parse_coordinate)?;
                Some((latitude, longitude))
            })
            .collect();

        let mask: Vec<bool> = coordinates
            .iter()
            .enumerate()
            .map(|(row, coordinate)| match coordinate {
                Some((latitude, longitude)) if self.bounds.contains(*latitude, *longitude) => true,
                Some((latitude, longitude)) => {
                    debug!(row, latitude, longitude, "dropping row outside bounding box");
                    report.out_of_bounds_rows += 1;
                    false
                }
                None => {
                    debug!(row, "dropping row with unparseable coordinates");
                    report.unparseable_coordinate_rows += 1;
                    false
                }
            })
            .collect();

        table.retain_mask(&mask);

        let serial_index = table.column_index(SERIAL_COLUMN);
        let retained_coordinates = coordinates
            .into_iter()
            .zip(mask.iter())
            .filter_map(|(coordinate, keep)| if *keep { coordinate } else { None });

        let (headers, rows) = table.into_parts();
        let records: Vec<SensorRecord> = rows
            .into_iter()
            .zip(retained_coordinates)
            .map(|(values, (latitude, longitude))| {
                let serial = serial_index
                    .and_then(|i| values.get(i).cloned())
                    .unwrap_or_else(|| UNKNOWN_SERIAL.to_string());
                SensorRecord::new(latitude, longitude, serial, values)
            })
            .collect();

        report.retained_rows = records.len();
        report.unknown_serials = records.iter().filter(|r| !r.has_known_serial()).count();

        info!(
            total = report.total_rows,
            retained = report.retained_rows,
            out_of_bounds = report.out_of_bounds_rows,
            unparseable = report.unparseable_coordinate_rows,
            "cleaned sensor locations"
        );

        Ok((CleanedDataset::new(headers, records), report))
    }
}

impl Default for DatasetCleaner {
    fn default() -> Self {
        Self::new()
    }
}

/// Required column names
pub const LATITUDE_COLUMN: &str = "Latitude";
pub const LONGITUDE_COLUMN: &str = "Longitude";
pub const SERIAL_COLUMN: &str = "Serial";

/// Placeholder for serials without a recognisable identifier
pub const UNKNOWN_SERIAL: &str = "Unknown Serial";

/// Canonical serial token, e.g. PI040298AD5A
pub const SERIAL_PATTERN: &str = r"\bPI[0-9A-Z]+\b";

/// UK geographic bounds, also the extent of the map image
pub const UK_MIN_LON: f64 = -10.592;
pub const UK_MAX_LON: f64 = 1.6848;
pub const UK_MIN_LAT: f64 = 50.681;
pub const UK_MAX_LAT: f64 = 57.985;

/// Default input and output locations
pub const DEFAULT_DATASET_FILE: &str = "GrowLocations.csv";
pub const DEFAULT_MAP_IMAGE_FILE: &str = "map7.png";
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Columns left out of hover tooltips
pub const TOOLTIP_EXCLUDED_COLUMNS: [&str; 2] = ["Type", "Code"];

/// Overlay styling
pub const MAP_TITLE: &str = "Growdata Sensor Locations on UK Map";
pub const LEGEND_LABEL: &str = "Sensor Locations";
pub const MARKER_COLOR: &str = "red";
pub const MARKER_RADIUS_PX: f64 = 3.0;
pub const HIT_RADIUS_PX: f64 = 5.0;
pub const TOOLTIP_OFFSET_PX: (f64, f64) = (20.0, 20.0);

use crate::utils::constants::DEFAULT_OUTPUT_DIR;
use chrono::{Datelike, Local};
use std::path::PathBuf;

/// Generate default overlay filename with format: grow-locations-{YYMMDD}.svg
pub fn generate_default_overlay_filename() -> PathBuf {
    let now = Local::now();
    let year = now.year() % 100; // Get last 2 digits of year
    let month = now.month();
    let day = now.day();

    let filename = format!("grow-locations-{:02}{:02}{:02}.svg", year, month, day);
    PathBuf::from(DEFAULT_OUTPUT_DIR).join(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_default_overlay_filename() {
        let filename = generate_default_overlay_filename();
        let filename_str = filename.to_string_lossy();

        assert!(filename_str.starts_with("output/"));
        assert!(filename_str.ends_with(".svg"));

        let parts: Vec<&str> = filename_str.split('/').collect();
        assert_eq!(parts.len(), 2);

        // grow-locations- + YYMMDD + .svg
        let file_part = parts[1];
        assert!(file_part.starts_with("grow-locations-"));
        assert_eq!(file_part.len(), "grow-locations-".len() + 6 + ".svg".len());
    }
}

use crate::analyzers::CoverageAnalyzer;
use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::models::CleanedDataset;
use crate::processors::{CleaningReport, DatasetCleaner};
use crate::render::{HoverEvent, HoverTracker};
use crate::utils::filename::generate_default_overlay_filename;
use crate::utils::progress::ProgressReporter;
use crate::writers::OverlayWriter;
use std::path::Path;
use tracing::warn;
use validator::Validate;

pub fn run(cli: Cli) -> Result<()> {
    let quiet = cli.quiet;

    match cli.command.unwrap_or_default() {
        Commands::Render {
            input,
            map_image,
            output_file,
        } => {
            let output_file = output_file.unwrap_or_else(generate_default_overlay_filename);
            println!("Input dataset: {}", input.display());
            println!("Map image: {}", map_image.display());

            let cleaner = DatasetCleaner::new();
            let (dataset, report) = load(&cleaner, &input, quiet)?;
            println!("\n{}", report.summary());

            if dataset.is_empty() {
                warn!("no sensors inside the bounding box, overlay will only show the map");
            }

            let writer = OverlayWriter::new();
            let info = writer.write_svg(&dataset, *cleaner.bounds(), &map_image, &output_file)?;
            println!("{}", info.summary());
            println!("Open the SVG in a browser and hover over a sensor to see its details.");
        }

        Commands::Validate { input } => {
            let cleaner = DatasetCleaner::new();
            let (dataset, report) = load(&cleaner, &input, quiet)?;
            println!("\n{}", report.summary());

            let violations = dataset
                .records
                .iter()
                .filter(|record| record.validate().is_err())
                .count();

            if violations == 0 {
                println!("✅ All {} cleaned records passed validation checks", dataset.len());
            } else {
                warn!(violations, "cleaned records failed validation");
                println!("⚠️  Found {} records failing validation", violations);
            }
        }

        Commands::Info {
            input,
            sample,
            json,
        } => {
            let cleaner = DatasetCleaner::new();
            let (dataset, _) = load(&cleaner, &input, quiet || json)?;
            let stats = CoverageAnalyzer::new().analyze(&dataset);

            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
                return Ok(());
            }

            println!("\n{}", stats.detailed_summary());
            if sample > 0 {
                print_sample(&dataset, sample);
            }
        }

        Commands::Hover {
            input,
            map_image,
            x,
            y,
        } => {
            let cleaner = DatasetCleaner::new();
            let (dataset, _) = load(&cleaner, &input, quiet)?;

            let projection = OverlayWriter::new().projection_for(&map_image, *cleaner.bounds())?;
            let mut tracker = HoverTracker::new(&dataset, &projection);
            let (longitude, latitude) = projection.to_geo(x, y);

            match tracker.on_pointer_move(x, y) {
                HoverEvent::Show { anchor, text, .. } => {
                    println!(
                        "Sensor at pixel ({:.1}, {:.1}):\n{}",
                        anchor.0, anchor.1, text
                    );
                }
                _ if !projection.contains_pixel(x, y) => {
                    println!("Pointer ({}, {}) is outside the map image", x, y);
                }
                _ => {
                    println!(
                        "No sensor under pointer ({}, {}) ~ {:.4}°N, {:.4}°E",
                        x, y, latitude, longitude
                    );
                }
            }
        }
    }

    Ok(())
}

fn load(cleaner: &DatasetCleaner, input: &Path, quiet: bool) -> Result<(CleanedDataset, CleaningReport)> {
    let progress = ProgressReporter::new_spinner("Loading sensor locations...", quiet);
    let result = cleaner.load_with_report(input);

    if let Ok((dataset, _)) = &result {
        progress.finish_with_message(&format!("Cleaned {} sensor records", dataset.len()));
    }
    result
}

fn print_sample(dataset: &CleanedDataset, sample: usize) {
    println!("\nSample Records (showing up to {}):", sample);
    for (i, record) in dataset.records.iter().take(sample).enumerate() {
        println!(
            "{}. {} at {:.4}°N, {:.4}°E",
            i + 1,
            record.serial,
            record.latitude,
            record.longitude
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProcessingError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn cli(command: Commands) -> Cli {
        Cli {
            command: Some(command),
            verbose: false,
            quiet: true,
            log_file: None,
        }
    }

    #[test]
    fn test_validate_command() -> Result<()> {
        let mut csv = NamedTempFile::new()?;
        writeln!(csv, "Serial,Latitude,Longitude")?;
        writeln!(csv, "PI1A,-1.0,52.0")?;

        run(cli(Commands::Validate {
            input: csv.path().to_path_buf(),
        }))
    }

    #[test]
    fn test_missing_input_fails_before_render() {
        let result = run(cli(Commands::Render {
            input: "no/such/file.csv".into(),
            map_image: "no/such/map.png".into(),
            output_file: Some("no/such/out.svg".into()),
        }));
        assert!(matches!(result, Err(ProcessingError::SourceRead { .. })));
    }
}

use crate::utils::constants::{DEFAULT_DATASET_FILE, DEFAULT_MAP_IMAGE_FILE};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "grow-locations")]
#[command(about = "Clean GrowLocations sensor data and plot it over a UK map")]
#[command(version)]
pub struct Cli {
    /// Defaults to `render` with the standard input files
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Hide progress spinners")]
    pub quiet: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Clean the dataset and write the interactive map overlay
    Render {
        #[arg(short, long, default_value = DEFAULT_DATASET_FILE, help = "Sensor locations CSV")]
        input: PathBuf,

        #[arg(short, long, default_value = DEFAULT_MAP_IMAGE_FILE, help = "Map background image")]
        map_image: PathBuf,

        #[arg(
            short,
            long,
            help = "Output SVG path [default: output/grow-locations-{YYMMDD}.svg]"
        )]
        output_file: Option<PathBuf>,
    },

    /// Clean the dataset and report what was kept, without rendering
    Validate {
        #[arg(short, long, default_value = DEFAULT_DATASET_FILE)]
        input: PathBuf,
    },

    /// Display coverage statistics for the cleaned dataset
    Info {
        #[arg(short, long, default_value = DEFAULT_DATASET_FILE)]
        input: PathBuf,

        #[arg(short, long, default_value = "5")]
        sample: usize,

        #[arg(long, help = "Print statistics as JSON")]
        json: bool,
    },

    /// Show the tooltip a pointer at pixel (x, y) on the map image would reveal
    Hover {
        #[arg(short, long, default_value = DEFAULT_DATASET_FILE)]
        input: PathBuf,

        #[arg(short, long, default_value = DEFAULT_MAP_IMAGE_FILE)]
        map_image: PathBuf,

        #[arg(short, long)]
        x: f64,

        #[arg(short, long)]
        y: f64,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Render {
            input: PathBuf::from(DEFAULT_DATASET_FILE),
            map_image: PathBuf::from(DEFAULT_MAP_IMAGE_FILE),
            output_file: None,
        }
    }
}

pub mod coverage_analyzer;

pub use coverage_analyzer::{CoverageAnalyzer, CoverageStatistics};

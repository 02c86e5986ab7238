mod analyzer;
mod candidates;
mod config;

pub use analyzer::{find_symmetry_lines, Symmetry, SymmetryAnalyzer};
pub use config::AnalyzerConfig;

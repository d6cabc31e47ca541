// Export modules for library usage
pub mod aggregate;
pub mod analyzers;
pub mod api;
pub mod classifier;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod io;
pub mod progress;
pub mod transform;

// Re-export commonly used types
pub use crate::core::{
    Classification, CodebaseAnalysis, Complexity, ConversionResult, EffortLevel, FileAnalysis,
    FileStatus, Location, Pattern, PatternKind,
};

pub use crate::aggregate::aggregate;
pub use crate::analyzers::{analyze_file, analyze_files, analyze_source, detect_patterns};
pub use crate::classifier::classify;
pub use crate::config::DiscoveryConfig;
pub use crate::errors::{Error, Result};
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
pub use crate::transform::convert_source;

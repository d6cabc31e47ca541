use super::analyze_project;
use crate::aggregate::aggregate;
use crate::config::DiscoveryConfig;
use crate::core::CodebaseAnalysis;
use crate::io::output::{create_writer, OutputFormat};
use crate::progress::ProgressConfig;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

pub struct AnalyzeConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub discovery: DiscoveryConfig,
    pub progress: ProgressConfig,
}

/// Analyse the tree, aggregate and write the report.
pub fn handle_analyze(config: AnalyzeConfig) -> Result<CodebaseAnalysis> {
    let files = analyze_project(&config.path, &config.discovery, &config.progress)?;
    let results = aggregate(config.path.clone(), files);

    log::info!(
        "{} of {} files use formik ({} patterns)",
        results.files_using_target_api,
        results.total_files,
        results.total_patterns()
    );

    let destination: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?,
        )),
        None => Box::new(std::io::stdout()),
    };
    create_writer(config.format, destination).write_results(&results)?;

    Ok(results)
}

//! CLI command implementations.
//!
//! - **analyze**: report formik usages, their complexity and the effort estimate
//! - **convert**: rewrite convertible files and report the rest
//!
//! Both commands discover files the same way and analyse them on the rayon
//! pool before doing anything else.

pub mod analyze;
pub mod convert;

pub use analyze::{handle_analyze, AnalyzeConfig};
pub use convert::{handle_convert, ConvertConfig, ConvertSummary};

use crate::analyzers::analyze_files;
use crate::config::DiscoveryConfig;
use crate::core::FileAnalysis;
use crate::io::walker::find_source_files;
use crate::progress::ProgressConfig;
use anyhow::{Context, Result};
use std::path::Path;

/// Discover and analyse every source file under `root`.
pub(crate) fn analyze_project(
    root: &Path,
    discovery: &DiscoveryConfig,
    progress: &ProgressConfig,
) -> Result<Vec<FileAnalysis>> {
    let files = find_source_files(root, discovery.clone())
        .with_context(|| format!("Failed to list source files under {}", root.display()))?;
    log::info!("Analyzing {} files under {}", files.len(), root.display());

    let bar = progress.create_bar(files.len() as u64, "Analyzing");
    let analyses = analyze_files(&files, &bar);
    bar.finish_and_clear();

    Ok(analyses)
}

use super::analyze_project;
use crate::config::DiscoveryConfig;
use crate::core::ConversionResult;
use crate::io::{read_file, write_backup, write_file};
use crate::progress::ProgressConfig;
use crate::transform::convert_source;
use anyhow::Result;
use colored::*;
use indicatif::ParallelProgressIterator;
use rayon::prelude::*;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info_span;

pub struct ConvertConfig {
    pub path: PathBuf,
    pub dry_run: bool,
    pub backup: bool,
    pub discovery: DiscoveryConfig,
    pub progress: ProgressConfig,
}

/// Outcome of a convert run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    /// Files rewritten (or that would be, in a dry run).
    pub converted: Vec<PathBuf>,
    /// Files using formik that were left for a person, with the reason.
    pub needs_review: Vec<(PathBuf, String)>,
    pub warnings: usize,
}

/// One file's conversion attempt, before anything is written.
struct FileConversion {
    path: PathBuf,
    result: ConversionResult,
}

pub fn handle_convert(config: ConvertConfig) -> Result<ConvertSummary> {
    let analyses = analyze_project(&config.path, &config.discovery, &config.progress)?;

    let mut summary = ConvertSummary::default();
    let mut candidates = Vec::new();
    for analysis in analyses.into_iter().filter(|a| a.uses_target_api()) {
        if analysis.is_conversion_candidate() {
            candidates.push(analysis.path);
        } else {
            summary
                .needs_review
                .push((analysis.path, "no automatically convertible patterns".to_string()));
        }
    }
    log::info!("{} file(s) are conversion candidates", candidates.len());

    let conversions = convert_files(&candidates, &config.progress);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for conversion in conversions {
        let outcome = if conversion.result.success && !config.dry_run {
            commit(&conversion, config.backup)
        } else {
            Ok(())
        };
        report_file(&mut out, &conversion, config.dry_run)?;
        summary.warnings += conversion.result.warnings.len();

        match (conversion.result.success, outcome) {
            (true, Ok(())) => summary.converted.push(conversion.path),
            (true, Err(e)) => {
                writeln!(out, "  {} {}", "✗".red(), e)?;
                summary.needs_review.push((conversion.path, e.to_string()));
            }
            (false, _) => {
                let reason = conversion.result.error.unwrap_or_default();
                summary.needs_review.push((conversion.path, reason));
            }
        }
    }

    summary.converted.sort();
    summary.needs_review.sort();
    report_summary(&mut out, &summary, config.dry_run)?;
    Ok(summary)
}

fn convert_files(paths: &[PathBuf], progress: &ProgressConfig) -> Vec<FileConversion> {
    let _span = info_span!("conversion", files = paths.len()).entered();
    let bar = progress.create_bar(paths.len() as u64, "Converting");

    let conversions = paths
        .par_iter()
        .progress_with(bar.clone())
        .map(|path| FileConversion {
            path: path.clone(),
            result: convert_file(path),
        })
        .collect();
    bar.finish_and_clear();
    conversions
}

fn convert_file(path: &Path) -> ConversionResult {
    match read_file(path) {
        Ok(content) => convert_source(&content, path),
        Err(e) => ConversionResult::failed(e.to_string(), vec![], vec![]),
    }
}

/// Back up the original, then replace it with the converted text.
fn commit(conversion: &FileConversion, backup: bool) -> crate::errors::Result<()> {
    let Some(code) = conversion.result.converted_code.as_deref() else {
        return Ok(());
    };
    if backup {
        let backup_path = write_backup(&conversion.path)?;
        log::debug!("Backed up {} to {}", conversion.path.display(), backup_path.display());
    }
    write_file(&conversion.path, code)
}

fn report_file(out: &mut impl Write, conversion: &FileConversion, dry_run: bool) -> Result<()> {
    let result = &conversion.result;
    if result.success {
        writeln!(
            out,
            "{} {} ({} change(s))",
            "✓".green(),
            conversion.path.display(),
            result.changes.len()
        )?;
        if dry_run {
            for change in &result.changes {
                writeln!(out, "  - {change}")?;
            }
        }
    } else {
        writeln!(
            out,
            "{} {}: {}",
            "✗".yellow(),
            conversion.path.display(),
            result.error.as_deref().unwrap_or_default()
        )?;
    }
    for warning in &result.warnings {
        writeln!(out, "  {} {warning}", "!".yellow())?;
    }
    Ok(())
}

fn report_summary(out: &mut impl Write, summary: &ConvertSummary, dry_run: bool) -> Result<()> {
    writeln!(out)?;
    let verb = if dry_run { "Would convert" } else { "Converted" };
    writeln!(
        out,
        "{}: {} file(s)",
        verb.bold(),
        summary.converted.len().to_string().green()
    )?;
    writeln!(
        out,
        "{}: {} file(s)",
        "Needs manual review".bold(),
        summary.needs_review.len().to_string().yellow()
    )?;
    if summary.warnings > 0 {
        writeln!(out, "Warnings: {}", summary.warnings)?;
    }
    Ok(())
}

//! Analysis orchestration
//!
//! Top-level functions for turning source files into [`FileAnalysis`]
//! values. Files are independent, so batches run on the rayon pool.

use super::detector::detect_patterns;
use super::parser::parse_source;
use crate::core::FileAnalysis;
use indicatif::{ParallelProgressIterator, ProgressBar};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info_span, warn};

/// Analyze one file's source text.
///
/// Never fails: a file that cannot be parsed yields an `AnalysisFailed`
/// status instead of an error so the caller can keep going.
pub fn analyze_source(content: &str, path: &Path) -> FileAnalysis {
    let line_count = content.lines().count();

    match parse_source(content, path) {
        Ok(tree) => {
            let detection = detect_patterns(&tree);
            debug!(
                file = %path.display(),
                patterns = detection.patterns.len(),
                has_formik = detection.has_formik,
                "Analyzed file"
            );
            FileAnalysis::analyzed(
                path.to_path_buf(),
                detection.has_formik,
                detection.patterns,
                line_count,
            )
        }
        Err(e) => {
            warn!(file = %path.display(), error = %e, "Skipping unparsable file");
            FileAnalysis::failed(path.to_path_buf(), e.to_string(), line_count)
        }
    }
}

/// Read and analyze one file from disk.
pub fn analyze_file(path: &Path) -> FileAnalysis {
    match std::fs::read_to_string(path) {
        Ok(content) => analyze_source(&content, path),
        Err(e) => {
            warn!(file = %path.display(), error = %e, "Failed to read file");
            FileAnalysis::failed(path.to_path_buf(), format!("failed to read file: {e}"), 0)
        }
    }
}

/// Analyze a batch of files in parallel.
///
/// The returned order follows `paths`; nothing downstream depends on it.
pub fn analyze_files(paths: &[PathBuf], progress: &ProgressBar) -> Vec<FileAnalysis> {
    let _span = info_span!("analysis", files = paths.len()).entered();

    paths
        .par_iter()
        .progress_with(progress.clone())
        .map(|path| analyze_file(path))
        .collect()
}

//! Codebase-wide aggregation.
//!
//! A pure fold over [`FileAnalysis`] values: every count in the result is
//! the sum of the corresponding per-file counts, so the order files finish
//! in when analysed in parallel does not matter.

use crate::core::{CodebaseAnalysis, Complexity, FileAnalysis, PatternKind};
use chrono::Utc;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Planning heuristics, not measurements.
pub mod estimates {
    /// Manual migration hours per simple pattern.
    pub const HOURS_SIMPLE: f64 = 0.25;
    /// Manual migration hours per medium pattern.
    pub const HOURS_MEDIUM: f64 = 0.5;
    /// Manual migration hours per complex pattern.
    pub const HOURS_COMPLEX: f64 = 1.5;
    /// Share of the manual time the tool removes on convertible patterns.
    pub const AUTOMATED_SAVINGS: f64 = 0.8;
    /// Share of the manual time guided review removes on flagged patterns.
    pub const REVIEW_SAVINGS: f64 = 0.3;
}

#[derive(Debug, Default)]
struct Tally {
    kinds: BTreeMap<PatternKind, usize>,
    complexities: BTreeMap<Complexity, usize>,
    convertible: usize,
    needs_review: usize,
    files_using_target_api: usize,
    files_failed: usize,
}

/// Fold per-file analyses into a [`CodebaseAnalysis`].
pub fn aggregate(root: PathBuf, files: Vec<FileAnalysis>) -> CodebaseAnalysis {
    let tally = files.iter().fold(Tally::default(), |mut tally, file| {
        tally.files_using_target_api += usize::from(file.uses_target_api());
        tally.files_failed += usize::from(file.is_failed());

        for pattern in &file.patterns {
            *tally.kinds.entry(pattern.kind()).or_default() += 1;
            *tally.complexities.entry(pattern.complexity()).or_default() += 1;
            if pattern.is_convertible() {
                tally.convertible += 1;
            } else {
                tally.needs_review += 1;
            }
        }
        tally
    });

    let count = |c: Complexity| tally.complexities.get(&c).copied().unwrap_or(0);
    let manual_hours = estimate_manual_hours(
        count(Complexity::Simple),
        count(Complexity::Medium),
        count(Complexity::Complex),
    );
    let hours_saved = estimate_hours_saved(tally.convertible, tally.needs_review);

    CodebaseAnalysis {
        root,
        timestamp: Utc::now(),
        total_files: files.len(),
        files_using_target_api: tally.files_using_target_api,
        files_failed: tally.files_failed,
        pattern_counts: tally.kinds,
        complexity_counts: tally.complexities,
        convertible: tally.convertible,
        needs_review: tally.needs_review,
        estimated_manual_hours: manual_hours,
        estimated_hours_saved: hours_saved,
        files,
    }
}

/// Hours a person would spend migrating these patterns by hand.
pub fn estimate_manual_hours(simple: usize, medium: usize, complex: usize) -> f64 {
    use estimates::*;
    round_tenth(
        simple as f64 * HOURS_SIMPLE + medium as f64 * HOURS_MEDIUM + complex as f64 * HOURS_COMPLEX,
    )
}

/// Hours the tool saves: most of the simple-pattern time, some of the
/// review time.
pub fn estimate_hours_saved(convertible: usize, needs_review: usize) -> f64 {
    use estimates::*;
    round_tenth(
        convertible as f64 * HOURS_SIMPLE * AUTOMATED_SAVINGS
            + needs_review as f64 * HOURS_MEDIUM * REVIEW_SAVINGS,
    )
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

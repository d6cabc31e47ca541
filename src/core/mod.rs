//! Core data model shared by detection, classification, conversion and
//! aggregation.
//!
//! Every value in this module is produced once and never mutated afterwards.
//! Reclassifying a usage means building a new [`Pattern`]; re-analysing a file
//! means building a new [`FileAnalysis`].

pub mod ast;

use chrono::{DateTime, Utc};
use colored::Color;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Shape of a detected formik usage site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternKind {
    /// `useFormik({...})`
    HookInvocation,
    /// `<Formik>...</Formik>`
    WrapperComponent,
    /// `<Field />`
    FieldElement,
    /// `<FieldArray />`
    FieldArrayElement,
    /// `<FastField />`
    FastFieldElement,
    /// `<ErrorMessage />`
    ErrorMessageElement,
    /// `useField(...)`
    FieldAccessorHook,
}

impl PatternKind {
    pub const ALL: [PatternKind; 7] = [
        Self::HookInvocation,
        Self::WrapperComponent,
        Self::FieldElement,
        Self::FieldArrayElement,
        Self::FastFieldElement,
        Self::ErrorMessageElement,
        Self::FieldAccessorHook,
    ];

    /// Source-level label used in reports.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HookInvocation => "useFormik",
            Self::WrapperComponent => "<Formik>",
            Self::FieldElement => "<Field>",
            Self::FieldArrayElement => "<FieldArray>",
            Self::FastFieldElement => "<FastField>",
            Self::ErrorMessageElement => "<ErrorMessage>",
            Self::FieldAccessorHook => "useField",
        }
    }

    /// Field-family elements share one classification policy.
    pub const fn is_field_family(self) -> bool {
        matches!(
            self,
            Self::FieldElement | Self::FieldArrayElement | Self::FastFieldElement
        )
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Conversion risk of a pattern, ordered from safest to riskiest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    Medium,
    Complex,
}

impl Complexity {
    pub const ALL: [Complexity; 3] = [Self::Simple, Self::Medium, Self::Complex];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Medium => "medium",
            Self::Complex => "complex",
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Self::Simple => Color::Green,
            Self::Medium => Color::Yellow,
            Self::Complex => Color::Red,
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a pattern was found. Display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub file: PathBuf,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.column)
    }
}

/// Outcome of classifying one usage site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub complexity: Complexity,
    pub reason: Option<String>,
}

impl Classification {
    pub fn simple() -> Self {
        Self {
            complexity: Complexity::Simple,
            reason: None,
        }
    }

    pub fn medium(reason: impl Into<String>) -> Self {
        Self {
            complexity: Complexity::Medium,
            reason: Some(reason.into()),
        }
    }

    pub fn complex(reason: impl Into<String>) -> Self {
        Self {
            complexity: Complexity::Complex,
            reason: Some(reason.into()),
        }
    }
}

/// One detected usage site.
///
/// Fields are private so that `reason.is_some() == !convertible` holds for
/// every value in circulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    kind: PatternKind,
    location: Location,
    complexity: Complexity,
    convertible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

impl Pattern {
    /// Build a pattern from a classification. A simple pattern is convertible
    /// and carries no reason; anything else is flagged, with a fallback reason
    /// when the classifier supplied none.
    pub fn new(kind: PatternKind, location: Location, classification: Classification) -> Self {
        let convertible = classification.complexity == Complexity::Simple;
        let reason = if convertible {
            None
        } else {
            Some(
                classification
                    .reason
                    .unwrap_or_else(|| "needs manual review".to_string()),
            )
        };

        Self {
            kind,
            location,
            complexity: classification.complexity,
            convertible,
            reason,
        }
    }

    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn complexity(&self) -> Complexity {
        self.complexity
    }

    pub fn is_convertible(&self) -> bool {
        self.convertible
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }
}

/// Manual migration effort for one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffortLevel {
    Low,
    Medium,
    High,
}

impl EffortLevel {
    /// Pattern counts above these mark a file as medium / high effort even
    /// when every pattern is individually simple.
    const MEDIUM_PATTERN_COUNT: usize = 5;
    const HIGH_PATTERN_COUNT: usize = 10;

    pub fn from_patterns(patterns: &[Pattern]) -> Self {
        let has = |c: Complexity| patterns.iter().any(|p| p.complexity() == c);

        if has(Complexity::Complex) || patterns.len() > Self::HIGH_PATTERN_COUNT {
            Self::High
        } else if has(Complexity::Medium) || patterns.len() > Self::MEDIUM_PATTERN_COUNT {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Self::Low => Color::Green,
            Self::Medium => Color::Yellow,
            Self::High => Color::Red,
        }
    }
}

impl fmt::Display for EffortLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a file could be analysed and, if so, whether it touches formik.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "kebab-case")]
pub enum FileStatus {
    /// Parsed, no formik usage.
    Clean,
    /// Parsed, imports formik or contains formik-shaped usages.
    UsesTargetApi,
    /// The file could not be turned into a syntax tree.
    AnalysisFailed { reason: String },
}

/// Analysis of a single file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileAnalysis {
    pub path: PathBuf,
    pub status: FileStatus,
    pub has_formik: bool,
    pub patterns: Vec<Pattern>,
    pub line_count: usize,
    pub effort: EffortLevel,
}

impl FileAnalysis {
    pub fn analyzed(
        path: PathBuf,
        has_formik: bool,
        patterns: Vec<Pattern>,
        line_count: usize,
    ) -> Self {
        let status = if has_formik || !patterns.is_empty() {
            FileStatus::UsesTargetApi
        } else {
            FileStatus::Clean
        };
        let effort = EffortLevel::from_patterns(&patterns);

        Self {
            path,
            status,
            has_formik,
            patterns,
            line_count,
            effort,
        }
    }

    pub fn failed(path: PathBuf, reason: impl Into<String>, line_count: usize) -> Self {
        Self {
            path,
            status: FileStatus::AnalysisFailed {
                reason: reason.into(),
            },
            has_formik: false,
            patterns: Vec::new(),
            line_count,
            effort: EffortLevel::Low,
        }
    }

    pub fn uses_target_api(&self) -> bool {
        self.status == FileStatus::UsesTargetApi
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, FileStatus::AnalysisFailed { .. })
    }

    pub fn convertible_count(&self) -> usize {
        self.patterns.iter().filter(|p| p.is_convertible()).count()
    }

    pub fn needs_review_count(&self) -> usize {
        self.patterns.len() - self.convertible_count()
    }

    /// A file is worth handing to the transformer only when it imports
    /// formik and at least one of its patterns is convertible. Look-alike
    /// tags from other libraries are never candidates.
    pub fn is_conversion_candidate(&self) -> bool {
        self.has_formik && self.uses_target_api() && self.convertible_count() > 0
    }
}

/// Codebase-wide fold of [`FileAnalysis`] values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodebaseAnalysis {
    pub root: PathBuf,
    pub timestamp: DateTime<Utc>,
    pub total_files: usize,
    pub files_using_target_api: usize,
    pub files_failed: usize,
    pub pattern_counts: BTreeMap<PatternKind, usize>,
    pub complexity_counts: BTreeMap<Complexity, usize>,
    pub convertible: usize,
    pub needs_review: usize,
    pub estimated_manual_hours: f64,
    pub estimated_hours_saved: f64,
    pub files: Vec<FileAnalysis>,
}

impl CodebaseAnalysis {
    pub fn total_patterns(&self) -> usize {
        self.convertible + self.needs_review
    }

    pub fn count_for_kind(&self, kind: PatternKind) -> usize {
        self.pattern_counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn count_for_complexity(&self, complexity: Complexity) -> usize {
        self.complexity_counts.get(&complexity).copied().unwrap_or(0)
    }
}

/// Result of one whole-file conversion attempt.
///
/// Exactly one of `converted_code` / `error` is set, matching `success`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub converted_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub warnings: Vec<String>,
    pub changes: Vec<String>,
}

impl ConversionResult {
    pub fn converted(code: String, warnings: Vec<String>, changes: Vec<String>) -> Self {
        Self {
            success: true,
            converted_code: Some(code),
            error: None,
            warnings,
            changes,
        }
    }

    pub fn failed(error: impl Into<String>, warnings: Vec<String>, changes: Vec<String>) -> Self {
        Self {
            success: false,
            converted_code: None,
            error: Some(error.into()),
            warnings,
            changes,
        }
    }
}

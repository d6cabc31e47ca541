use crate::core::{CodebaseAnalysis, Complexity, FileAnalysis, FileStatus, PatternKind};
use clap::ValueEnum;
use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use std::io::Write;

/// How many files the terminal report lists before summarising the rest.
const TERMINAL_FILE_LIMIT: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_results(&mut self, results: &CodebaseAnalysis) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_results(&mut self, results: &CodebaseAnalysis) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(results)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_results(&mut self, results: &CodebaseAnalysis) -> anyhow::Result<()> {
        self.write_header(results)?;
        self.write_summary(results)?;
        self.write_breakdown(results)?;
        self.write_files(results)?;
        self.write_review_items(results)?;
        self.write_failures(results)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, results: &CodebaseAnalysis) -> anyhow::Result<()> {
        writeln!(self.writer, "# Formik Migration Report")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "Root: `{}`", results.root.display())?;
        writeln!(
            self.writer,
            "Generated: {}",
            results.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer, "Version: {}", env!("CARGO_PKG_VERSION"))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, results: &CodebaseAnalysis) -> anyhow::Result<()> {
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;

        let rows = [
            ("Files analyzed", results.total_files.to_string()),
            ("Files using formik", results.files_using_target_api.to_string()),
            ("Files that failed to parse", results.files_failed.to_string()),
            ("Total patterns", results.total_patterns().to_string()),
            ("Automatically convertible", results.convertible.to_string()),
            ("Needs manual review", results.needs_review.to_string()),
            (
                "Estimated manual effort",
                format!("{:.1} h", results.estimated_manual_hours),
            ),
            (
                "Estimated time saved",
                format!("{:.1} h", results.estimated_hours_saved),
            ),
        ];
        for (metric, value) in rows {
            writeln!(self.writer, "| {metric} | {value} |")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_breakdown(&mut self, results: &CodebaseAnalysis) -> anyhow::Result<()> {
        if results.total_patterns() == 0 {
            return Ok(());
        }

        writeln!(self.writer, "## Patterns")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Pattern | Count |")?;
        writeln!(self.writer, "|---------|-------|")?;
        for kind in PatternKind::ALL {
            let count = results.count_for_kind(kind);
            if count > 0 {
                writeln!(self.writer, "| `{kind}` | {count} |")?;
            }
        }
        writeln!(self.writer)?;

        writeln!(self.writer, "| Complexity | Count |")?;
        writeln!(self.writer, "|------------|-------|")?;
        for complexity in Complexity::ALL {
            writeln!(
                self.writer,
                "| {complexity} | {} |",
                results.count_for_complexity(complexity)
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_files(&mut self, results: &CodebaseAnalysis) -> anyhow::Result<()> {
        let files = files_by_effort(results);
        if files.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Files")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| File | Patterns | Convertible | Review | Effort |"
        )?;
        writeln!(
            self.writer,
            "|------|----------|-------------|--------|--------|"
        )?;
        for file in files {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} |",
                file.path.display(),
                file.patterns.len(),
                file.convertible_count(),
                file.needs_review_count(),
                file.effort
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_review_items(&mut self, results: &CodebaseAnalysis) -> anyhow::Result<()> {
        if results.needs_review == 0 {
            return Ok(());
        }

        writeln!(self.writer, "## Needs Manual Review")?;
        writeln!(self.writer)?;
        for pattern in results
            .files
            .iter()
            .flat_map(|f| &f.patterns)
            .filter(|p| !p.is_convertible())
        {
            writeln!(
                self.writer,
                "- `{}` {} ({}): {}",
                pattern.location(),
                pattern.kind(),
                pattern.complexity(),
                pattern.reason().unwrap_or_default()
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_failures(&mut self, results: &CodebaseAnalysis) -> anyhow::Result<()> {
        if results.files_failed == 0 {
            return Ok(());
        }

        writeln!(self.writer, "## Analysis Failures")?;
        writeln!(self.writer)?;
        for (path, reason) in failures(results) {
            writeln!(self.writer, "- `{}`: {reason}", path.display())?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_results(&mut self, results: &CodebaseAnalysis) -> anyhow::Result<()> {
        self.print_header()?;
        self.print_summary(results)?;
        self.print_breakdown(results)?;
        self.print_files(results)?;
        self.print_failures(results)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn print_header(&mut self) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Formik Migration Report".bold().blue())?;
        writeln!(self.writer, "{}", "=======================".blue())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_summary(&mut self, results: &CodebaseAnalysis) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Summary:".bold())?;
        writeln!(self.writer, "  Files analyzed: {}", results.total_files)?;
        writeln!(
            self.writer,
            "  Files using formik: {}",
            results.files_using_target_api
        )?;
        if results.files_failed > 0 {
            writeln!(
                self.writer,
                "  Files that failed to parse: {}",
                results.files_failed.to_string().red()
            )?;
        }
        writeln!(self.writer, "  Total patterns: {}", results.total_patterns())?;
        writeln!(
            self.writer,
            "  Convertible: {}  Needs review: {}",
            results.convertible.to_string().green(),
            results.needs_review.to_string().yellow()
        )?;
        writeln!(
            self.writer,
            "  Estimated manual effort: {:.1} h, time saved: {:.1} h",
            results.estimated_manual_hours, results.estimated_hours_saved
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_breakdown(&mut self, results: &CodebaseAnalysis) -> anyhow::Result<()> {
        if results.total_patterns() == 0 {
            return Ok(());
        }

        let mut table = new_table(vec!["Pattern", "Count"]);
        for kind in PatternKind::ALL {
            let count = results.count_for_kind(kind);
            if count > 0 {
                table.add_row(vec![Cell::new(kind), Cell::new(count)]);
            }
        }
        writeln!(self.writer, "{table}")?;

        let by_complexity = Complexity::ALL
            .iter()
            .map(|c| {
                format!("{}: {}", c, results.count_for_complexity(*c))
                    .color(c.color())
                    .to_string()
            })
            .collect::<Vec<_>>()
            .join("  ");
        writeln!(self.writer, "  {by_complexity}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_files(&mut self, results: &CodebaseAnalysis) -> anyhow::Result<()> {
        let files = files_by_effort(results);
        if files.is_empty() {
            return Ok(());
        }

        let mut table = new_table(vec!["File", "Patterns", "Convertible", "Review", "Effort"]);
        for file in files.iter().take(TERMINAL_FILE_LIMIT) {
            table.add_row(vec![
                Cell::new(file.path.display()),
                Cell::new(file.patterns.len()),
                Cell::new(file.convertible_count()),
                Cell::new(file.needs_review_count()),
                Cell::new(file.effort),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        if files.len() > TERMINAL_FILE_LIMIT {
            writeln!(
                self.writer,
                "  ... and {} more file(s)",
                files.len() - TERMINAL_FILE_LIMIT
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_failures(&mut self, results: &CodebaseAnalysis) -> anyhow::Result<()> {
        if results.files_failed == 0 {
            return Ok(());
        }

        writeln!(self.writer, "{}", "Could not analyze:".red().bold())?;
        for (path, reason) in failures(results) {
            writeln!(self.writer, "  - {}: {reason}", path.display())?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

/// Files with formik usage, highest effort first, then by path.
fn files_by_effort(results: &CodebaseAnalysis) -> Vec<&FileAnalysis> {
    let mut files: Vec<_> = results
        .files
        .iter()
        .filter(|f| f.uses_target_api())
        .collect();
    files.sort_by(|a, b| b.effort.cmp(&a.effort).then_with(|| a.path.cmp(&b.path)));
    files
}

fn failures(results: &CodebaseAnalysis) -> impl Iterator<Item = (&std::path::Path, &str)> {
    results.files.iter().filter_map(|f| match &f.status {
        FileStatus::AnalysisFailed { reason } => Some((f.path.as_path(), reason.as_str())),
        _ => None,
    })
}

pub fn create_writer(format: OutputFormat, writer: Box<dyn Write>) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}

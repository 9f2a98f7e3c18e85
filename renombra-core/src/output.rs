use crate::naming::DateResolution;
use crate::normalize::Normalization;
use crate::operations::organize::FileOutcome;
use crate::pattern::Pattern;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Write;
use std::path::PathBuf;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// Result of a run over a directory
#[derive(Debug, Serialize, Deserialize)]
pub struct OrganizeResult {
    pub directory: PathBuf,
    pub review_folder: PathBuf,
    pub dry_run: bool,
    pub normalized: Vec<Normalization>,
    pub outcomes: Vec<FileOutcome>,
}

impl OrganizeResult {
    fn count(&self, pred: impl Fn(&FileOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(o)).count()
    }

    pub fn renamed(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Renamed { .. }))
    }

    pub fn moved_to_review(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::MovedToReview { .. }))
    }

    pub fn unchanged(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Unchanged { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Skipped { .. }))
    }
}

/// One name examined by the `check` command
#[derive(Debug, Serialize)]
pub struct CheckEntry {
    pub input: String,
    pub normalized: String,
    pub pattern: Option<Pattern>,
    pub date: DateResolution,
    pub target: Option<String>,
}

/// Result of a check operation
#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub entries: Vec<CheckEntry>,
}

/// Result of a version command
#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResult {
    pub name: String,
    pub version: String,
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for OrganizeResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "run",
            "directory": self.directory,
            "review_folder": self.review_folder,
            "dry_run": self.dry_run,
            "summary": {
                "normalized": self.normalized.len(),
                "renamed": self.renamed(),
                "moved_to_review": self.moved_to_review(),
                "unchanged": self.unchanged(),
                "skipped": self.skipped(),
            },
            "normalized": self.normalized,
            "outcomes": self.outcomes,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();

        if self.dry_run {
            writeln!(output, "Dry run: no files were changed.").unwrap();
        }
        writeln!(output, "Files renamed: {}", self.renamed()).unwrap();
        writeln!(
            output,
            "Files moved to manual review: {}",
            self.moved_to_review()
        )
        .unwrap();

        if self.unchanged() > 0 {
            writeln!(output, "Files already named: {}", self.unchanged()).unwrap();
        }
        if self.skipped() > 0 {
            writeln!(output, "Directories skipped: {}", self.skipped()).unwrap();
        }

        output
    }
}

impl OutputFormatter for CheckResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "check",
            "entries": self.entries,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();

        for entry in &self.entries {
            writeln!(output, "{}", entry.input).unwrap();
            if entry.normalized != entry.input {
                writeln!(output, "  normalized: {}", entry.normalized).unwrap();
            }

            match entry.pattern {
                Some(pattern) => writeln!(
                    output,
                    "  pattern:    {} -> {}",
                    pattern.prefix, pattern.display_name
                )
                .unwrap(),
                None => {
                    writeln!(output, "  pattern:    none, would move to manual review").unwrap();
                },
            }

            if entry.pattern.is_some() {
                match &entry.date {
                    DateResolution::Formatted { token, formatted } => {
                        writeln!(output, "  date:       {token} -> {formatted}").unwrap();
                    },
                    DateResolution::Unformatted { token } => {
                        writeln!(output, "  date:       {token} -> not parsed").unwrap();
                    },
                    DateResolution::NotFound => {
                        writeln!(output, "  date:       none").unwrap();
                    },
                }
            }

            if let Some(target) = &entry.target {
                writeln!(output, "  new name:   {target}").unwrap();
            }
        }

        output
    }
}

impl OutputFormatter for VersionResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "name": self.name,
            "version": self.version,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        format!("{} {}\n", self.name, self.version)
    }
}

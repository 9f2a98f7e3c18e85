use crate::naming::DateResolution;
use crate::normalize::Normalization;
use crate::operations::organize::FileOutcome;
use nu_ansi_term::{Color as AnsiColor, Style};
use std::fmt::Write;
use std::path::PathBuf;

/// Events emitted while a run is in progress. The CLI prints them as they
/// arrive so that a run aborted by a filesystem error still shows how far it
/// got.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    NormalizeStarted { dir: PathBuf },
    Normalized(Normalization),
    NormalizeUnchanged { name: String },
    OrganizeStarted { dir: PathBuf },
    ReviewFolderCreated { path: PathBuf, dry_run: bool },
    Processing { name: String },
    Outcome(FileOutcome),
}

fn paint(use_color: bool, style: Style, text: &str) -> String {
    if use_color {
        style.paint(text).to_string()
    } else {
        text.to_string()
    }
}

impl Progress {
    /// Human-readable line(s) for this event, without trailing newline.
    pub fn render(&self, use_color: bool) -> String {
        let mut output = String::new();
        match self {
            Self::NormalizeStarted { dir } => {
                let header = format!("Normalizing names in {}", dir.display());
                output.push_str(&paint(use_color, AnsiColor::Cyan.bold(), &header));
            },
            Self::Normalized(n) => {
                write!(
                    output,
                    "{} {} -> {}",
                    paint(use_color, AnsiColor::Green.normal(), "Renamed:"),
                    n.from,
                    n.to
                )
                .unwrap();
            },
            Self::NormalizeUnchanged { name } => {
                write!(
                    output,
                    "{} {}",
                    paint(use_color, Style::new().dimmed(), "Not renamed:"),
                    name
                )
                .unwrap();
            },
            Self::OrganizeStarted { dir } => {
                let header = format!("Renaming files in {}", dir.display());
                write!(
                    output,
                    "\n{}\n",
                    paint(use_color, AnsiColor::Cyan.bold(), &header)
                )
                .unwrap();
            },
            Self::ReviewFolderCreated { path, dry_run } => {
                let verb = if *dry_run { "Would create" } else { "Created" };
                write!(output, "{verb} review folder: {}", path.display()).unwrap();
            },
            Self::Processing { name } => {
                write!(output, "Processing: {name}").unwrap();
            },
            Self::Outcome(outcome) => render_outcome(&mut output, outcome, use_color),
        }
        output
    }
}

fn render_outcome(output: &mut String, outcome: &FileOutcome, use_color: bool) {
    match outcome {
        FileOutcome::Renamed { from, to, date, .. } => {
            match date {
                DateResolution::Formatted { .. } => {},
                DateResolution::Unformatted { token } => {
                    writeln!(
                        output,
                        "  {} date '{}' could not be parsed, using name without date",
                        paint(use_color, AnsiColor::Yellow.normal(), "!"),
                        token
                    )
                    .unwrap();
                },
                DateResolution::NotFound => {
                    writeln!(
                        output,
                        "  {} no date found in name, using name without date",
                        paint(use_color, AnsiColor::Yellow.normal(), "!")
                    )
                    .unwrap();
                },
            }
            write!(
                output,
                "  {} {} -> {}",
                paint(use_color, AnsiColor::Green.bold(), "✓"),
                from,
                to
            )
            .unwrap();
        },
        FileOutcome::Unchanged { name } => {
            write!(
                output,
                "  {} {} already has its final name",
                paint(use_color, Style::new().dimmed(), "="),
                name
            )
            .unwrap();
        },
        FileOutcome::MovedToReview { from, to } => {
            write!(
                output,
                "  {} no matching pattern for {}, moved to manual review",
                paint(use_color, AnsiColor::Red.bold(), "✗"),
                from
            )
            .unwrap();
            if from != to {
                write!(output, " as {to}").unwrap();
            }
        },
        FileOutcome::Skipped { name, .. } => {
            write!(
                output,
                "  {} {} is a directory, skipped",
                paint(use_color, Style::new().dimmed(), "-"),
                name
            )
            .unwrap();
        },
    }
}

use crate::directory::{DirectoryView, EntryKind};
use crate::month::MonthTable;
use crate::naming::{plan_name, resolve_collision, split_name, DateResolution};
use crate::normalize::normalize_directory;
use crate::output::OrganizeResult;
use crate::progress::Progress;
use crate::timestamp::TimestampParser;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Sub-directory that receives files matching no known pattern.
pub const REVIEW_FOLDER: &str = "Revisión manual";

#[derive(Debug, Clone)]
pub struct OrganizeOptions {
    /// Plan against an in-memory listing instead of touching the disk.
    pub dry_run: bool,
    /// Run the underscore normalizer before pattern matching.
    pub normalize: bool,
    pub months: MonthTable,
}

impl Default for OrganizeOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            normalize: true,
            months: MonthTable::spanish(),
        }
    }
}

/// Terminal state of one directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FileOutcome {
    Renamed {
        from: String,
        to: String,
        date: DateResolution,
        /// Counter appended to resolve a name collision, if any.
        counter: Option<usize>,
    },
    /// The computed name equals the current one.
    Unchanged { name: String },
    MovedToReview { from: String, to: String },
    Skipped { name: String, kind: EntryKind },
}

/// Normalize, match, date-stamp and rename every entry of `dir`.
///
/// Progress is reported through `on_progress` as each entry is handled.
/// Filesystem errors stop the run immediately; entries handled before the
/// failure stay renamed.
pub fn organize_operation(
    dir: &Path,
    options: &OrganizeOptions,
    on_progress: &mut dyn FnMut(&Progress),
) -> Result<OrganizeResult> {
    let timestamps = TimestampParser::new(options.months.clone())?;
    let mut view = DirectoryView::open(dir, options.dry_run)?;

    let normalized = if options.normalize {
        normalize_directory(&mut view, on_progress)?
    } else {
        Vec::new()
    };

    on_progress(&Progress::OrganizeStarted {
        dir: dir.to_path_buf(),
    });

    let (mut review, created) = view.ensure_subdir(REVIEW_FOLDER)?;
    if created {
        on_progress(&Progress::ReviewFolderCreated {
            path: review.root().to_path_buf(),
            dry_run: options.dry_run,
        });
    }

    let mut outcomes = Vec::new();
    for (name, kind) in view.entries() {
        if name == REVIEW_FOLDER {
            continue;
        }

        on_progress(&Progress::Processing { name: name.clone() });
        let outcome = if kind == EntryKind::Dir {
            FileOutcome::Skipped { name, kind }
        } else {
            organize_file(&mut view, &mut review, &name, &timestamps)?
        };

        on_progress(&Progress::Outcome(outcome.clone()));
        outcomes.push(outcome);
    }

    Ok(OrganizeResult {
        directory: dir.to_path_buf(),
        review_folder: review.root().to_path_buf(),
        dry_run: options.dry_run,
        normalized,
        outcomes,
    })
}

fn organize_file(
    view: &mut DirectoryView,
    review: &mut DirectoryView,
    name: &str,
    timestamps: &TimestampParser,
) -> Result<FileOutcome> {
    let plan = plan_name(name, timestamps);

    let Some(base) = plan.target_base() else {
        let (stem, extension) = split_name(name);
        let (target, _) = resolve_collision(stem, extension, |candidate| {
            review.contains(candidate)
        });
        view.move_into(name, review, &target)?;
        return Ok(FileOutcome::MovedToReview {
            from: name.to_string(),
            to: target,
        });
    };

    if format!("{base}{}", plan.extension) == name {
        return Ok(FileOutcome::Unchanged {
            name: name.to_string(),
        });
    }

    let (target, counter) = resolve_collision(&base, &plan.extension, |candidate| {
        view.contains(candidate)
    });
    view.rename(name, &target)?;

    Ok(FileOutcome::Renamed {
        from: name.to_string(),
        to: target,
        date: plan.date,
        counter,
    })
}

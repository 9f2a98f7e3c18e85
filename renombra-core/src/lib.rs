#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod directory;
pub mod error;
pub mod month;
pub mod naming;
pub mod normalize;
pub mod operations;
pub mod output;
pub mod pattern;
pub mod progress;
pub mod timestamp;

pub use directory::{DirectoryView, EntryKind};
pub use error::{RenombraError, Result};
pub use month::MonthTable;
pub use naming::{plan_name, resolve_collision, split_name, DateResolution, NamePlan};
pub use normalize::{normalize_directory, normalize_name, Normalization};
pub use operations::{
    check_operation, organize_operation, FileOutcome, OrganizeOptions, REVIEW_FOLDER,
};
pub use output::{
    CheckEntry, CheckResult, OrganizeResult, OutputFormat, OutputFormatter, VersionResult,
};
pub use pattern::{match_pattern, Pattern, PATTERNS};
pub use progress::Progress;
pub use timestamp::{DateTemplate, TimestampParser, DATE_TEMPLATES, OUTPUT_FORMAT};

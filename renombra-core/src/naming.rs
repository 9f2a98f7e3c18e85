use crate::pattern::{match_pattern, Pattern};
use crate::timestamp::TimestampParser;
use serde::{Deserialize, Serialize};

/// Split a file name into stem and extension the way `os.path.splitext`
/// does: leading dots belong to the stem and the extension keeps its dot.
pub fn split_name(filename: &str) -> (&str, &str) {
    let leading = filename.len() - filename.trim_start_matches('.').len();
    match filename[leading..].rfind('.') {
        Some(index) => filename.split_at(leading + index),
        None => (filename, ""),
    }
}

/// How the date part of a new name was resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DateResolution {
    /// A token was found and a template parsed it.
    Formatted { token: String, formatted: String },
    /// A token was found but no template accepted it.
    Unformatted { token: String },
    NotFound,
}

impl DateResolution {
    pub fn formatted(&self) -> Option<&str> {
        match self {
            Self::Formatted { formatted, .. } => Some(formatted),
            _ => None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Formatted { token, .. } | Self::Unformatted { token } => Some(token),
            Self::NotFound => None,
        }
    }
}

/// Everything decided about a file name before touching the filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamePlan {
    pub original: String,
    pub extension: String,
    pub pattern: Option<Pattern>,
    pub date: DateResolution,
}

impl NamePlan {
    /// `<display name>[ <date>]` without extension, if a pattern matched.
    pub fn target_base(&self) -> Option<String> {
        let pattern = self.pattern?;
        Some(match self.date.formatted() {
            Some(date) => format!("{} {}", pattern.display_name, date),
            None => pattern.display_name.to_string(),
        })
    }

    pub fn target_name(&self) -> Option<String> {
        self.target_base()
            .map(|base| format!("{}{}", base, self.extension))
    }
}

/// Match `filename` against the pattern table and, on a match, resolve its
/// date token.
pub fn plan_name(filename: &str, timestamps: &TimestampParser) -> NamePlan {
    let (stem, extension) = split_name(filename);
    let pattern = match_pattern(stem).copied();

    let date = if pattern.is_some() {
        match timestamps.extract(stem) {
            Some(token) => match timestamps.format(token) {
                Some(formatted) => DateResolution::Formatted {
                    token: token.to_string(),
                    formatted,
                },
                None => DateResolution::Unformatted {
                    token: token.to_string(),
                },
            },
            None => DateResolution::NotFound,
        }
    } else {
        DateResolution::NotFound
    };

    NamePlan {
        original: filename.to_string(),
        extension: extension.to_string(),
        pattern,
        date,
    }
}

/// `<base> (<n>)<ext>`
pub fn numbered_name(base: &str, extension: &str, n: usize) -> String {
    format!("{base} ({n}){extension}")
}

/// First of `<base><ext>`, `<base> (1)<ext>`, `<base> (2)<ext>`, ... for
/// which `is_taken` is false. Returns the name and the counter used.
pub fn resolve_collision(
    base: &str,
    extension: &str,
    mut is_taken: impl FnMut(&str) -> bool,
) -> (String, Option<usize>) {
    let candidate = format!("{base}{extension}");
    if !is_taken(&candidate) {
        return (candidate, None);
    }

    let mut n = 1;
    loop {
        let candidate = numbered_name(base, extension, n);
        if !is_taken(&candidate) {
            tracing::debug!(base, extension, n, "resolved name collision");
            return (candidate, Some(n));
        }
        n += 1;
    }
}

//! Date/time token extraction and the template fallback chain.
//!
//! Report names carry their timestamp in whatever shape the operator typed
//! that day (`02-08-24 0200hrs`, `02 agosto 2024 05 hrs`, ...). Extraction
//! isolates the token with one combined regex; formatting tries each
//! [`DateTemplate`] in order and renders the first success as
//! `YYYY-MM-DD HHMMhrs`.

use crate::month::MonthTable;
use crate::Result;
use chrono::{Datelike, NaiveDateTime};
use regex::Regex;

/// Canonical rendering of a parsed timestamp.
pub const OUTPUT_FORMAT: &str = "%Y-%m-%d %H%Mhrs";

/// Alternatives are tried leftmost-first, so a longer shape must precede any
/// shape it extends (`... 0200hrs` before bare `... 0200`).
const TOKEN_PATTERN: &str = concat!(
    r"\d{2}[-.]\d{2}[-.](\d{2}|\d{4}) \d{4}\s?hrs|",
    r"\d{2}[-.]\d{2}[-.](\d{2}|\d{4}) \d{4} horas|",
    r"\d{2}[-.]\d{2}[-.](\d{2}|\d{4}) \d{4}|",
    r"\d{2} \w+ (\d{2}|\d{4}) \d{4}h|",
    r"\d{2} \w+ (\d{2}|\d{4}) \d{2}\s?hrs|",
    r"\d{2} \w+ \d{2}\s?hrs",
);

/// One step of the fallback chain: a chrono input format and the format the
/// parsed value is rendered with.
///
/// `%B` stands for a month name from the injected [`MonthTable`]; it is
/// rewritten to `%m` after the name has been replaced by its number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTemplate {
    pub input: &'static str,
    pub output: &'static str,
}

const fn template(input: &'static str) -> DateTemplate {
    DateTemplate {
        input,
        output: OUTPUT_FORMAT,
    }
}

/// Ordered fallback chain. The first eleven entries are the historical
/// table with its duplicates removed; the rest cover token shapes the
/// extractor accepts but the historical table never parsed.
pub const DATE_TEMPLATES: &[DateTemplate] = &[
    template("%d %B %H hrs"),
    template("%d-%m-%y %H%Mhrs"),
    template("%d-%m-%Y %H%Mhrs"),
    template("%d %B %Y %H hrs"),
    template("%d %B %Y %H%Mh"),
    template("%d-%m-%Y %H%M hrs"),
    template("%Y-%m-%d %H%Mhrs"),
    template("%d-%m-%y %H%M horas"),
    template("%d-%m-%Y %H%M horas"),
    template("%d-%m-%y %H%M hrs"),
    template("%d.%m.%Y %H%M horas"),
    template("%d.%m.%y %H%M horas"),
    template("%d.%m.%y %H%Mhrs"),
    template("%d.%m.%Y %H%Mhrs"),
    template("%d.%m.%y %H%M hrs"),
    template("%d.%m.%Y %H%M hrs"),
    template("%d-%m-%y %H%M"),
    template("%d-%m-%Y %H%M"),
    template("%d.%m.%y %H%M"),
    template("%d.%m.%Y %H%M"),
    template("%d %B %y %H%Mh"),
    template("%d %B %y %H hrs"),
    template("%d %B %Y %Hhrs"),
    template("%d %B %y %Hhrs"),
    template("%d %B %Hhrs"),
];

/// Year used when a template carries none, matching `strptime`.
const DEFAULT_YEAR: &str = "1900";

impl DateTemplate {
    pub fn uses_month_name(&self) -> bool {
        self.input.contains("%B")
    }

    fn has_four_digit_year(&self) -> bool {
        self.input.contains("%Y")
    }

    fn has_two_digit_year(&self) -> bool {
        self.input.contains("%y")
    }

    /// Parse the whole of `token` with this template.
    pub fn parse(&self, token: &str, months: &MonthTable) -> Option<NaiveDateTime> {
        let (mut text, mut format) = if self.uses_month_name() {
            (months.to_numeric(token)?, self.input.replace("%B", "%m"))
        } else {
            (token.to_string(), self.input.to_string())
        };

        if !format.contains("%Y") && !format.contains("%y") {
            text.push(' ');
            text.push_str(DEFAULT_YEAR);
            format.push_str(" %Y");
        }
        if !format.contains("%M") {
            text.push_str(" 00");
            format.push_str(" %M");
        }

        let parsed = NaiveDateTime::parse_from_str(&text, &format).ok()?;

        // chrono accepts one to four digits for %Y; a two-digit year must be
        // left to the %y templates.
        if self.has_four_digit_year() && parsed.year() < 1000 {
            return None;
        }

        // POSIX pivots two-digit years at 69, chrono at 70.
        if self.has_two_digit_year() && parsed.year() == 2069 {
            return parsed.with_year(1969);
        }

        Some(parsed)
    }

    pub fn apply(&self, token: &str, months: &MonthTable) -> Option<String> {
        self.parse(token, months)
            .map(|dt| dt.format(self.output).to_string())
    }
}

/// Finds and normalises the date/time token embedded in a file stem.
#[derive(Debug, Clone)]
pub struct TimestampParser {
    regex: Regex,
    months: MonthTable,
}

impl TimestampParser {
    pub fn new(months: MonthTable) -> Result<Self> {
        Ok(Self {
            regex: Regex::new(TOKEN_PATTERN)?,
            months,
        })
    }

    /// Leftmost substring of `stem` that looks like a date/time.
    pub fn extract<'a>(&self, stem: &'a str) -> Option<&'a str> {
        let token = self.regex.find(stem).map(|m| m.as_str());
        tracing::debug!(stem, token, "date token extraction");
        token
    }

    /// Render `token` with the first template that parses it.
    ///
    /// `None` means no template accepted the token; callers fall back to the
    /// undated name.
    pub fn format(&self, token: &str) -> Option<String> {
        DATE_TEMPLATES.iter().enumerate().find_map(|(index, template)| {
            let formatted = template.apply(token, &self.months)?;
            tracing::debug!(token, template = template.input, index, %formatted, "date template matched");
            Some(formatted)
        })
    }
}

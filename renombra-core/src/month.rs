/// Month-name lookup used by the `%B` date templates.
///
/// The table is passed explicitly to the formatter rather than read from the
/// process locale. An empty table behaves like a missing locale: every
/// month-name template fails and parsing falls through to numeric ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthTable {
    names: Vec<(&'static str, u32)>,
}

const SPANISH: &[(&str, u32)] = &[
    ("enero", 1),
    ("febrero", 2),
    ("marzo", 3),
    ("abril", 4),
    ("mayo", 5),
    ("junio", 6),
    ("julio", 7),
    ("agosto", 8),
    ("septiembre", 9),
    ("setiembre", 9),
    ("octubre", 10),
    ("noviembre", 11),
    ("diciembre", 12),
];

impl MonthTable {
    pub fn spanish() -> Self {
        Self {
            names: SPANISH.to_vec(),
        }
    }

    pub fn empty() -> Self {
        Self { names: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Month number (1-12) for `word`, ignoring case.
    pub fn lookup(&self, word: &str) -> Option<u32> {
        let word = word.to_lowercase();
        self.names
            .iter()
            .find(|(name, _)| *name == word)
            .map(|&(_, month)| month)
    }

    /// Replace every month-name word in `text` with its two-digit number.
    ///
    /// Returns `None` when no word was recognised.
    pub fn to_numeric(&self, text: &str) -> Option<String> {
        let mut replaced = false;
        let words: Vec<String> = text
            .split(' ')
            .map(|word| match self.lookup(word) {
                Some(month) => {
                    replaced = true;
                    format!("{month:02}")
                },
                None => word.to_string(),
            })
            .collect();

        replaced.then(|| words.join(" "))
    }
}

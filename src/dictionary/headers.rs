use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalField {
    Term,
    Translation,
    Transcription,
    Unit,
    Topic,
    Grade,
}

impl CanonicalField {
    pub const ALL: [CanonicalField; 6] = [
        CanonicalField::Term,
        CanonicalField::Translation,
        CanonicalField::Transcription,
        CanonicalField::Unit,
        CanonicalField::Topic,
        CanonicalField::Grade,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalField::Term => "word",
            CanonicalField::Translation => "translation",
            CanonicalField::Transcription => "transcription",
            CanonicalField::Unit => "unit",
            CanonicalField::Topic => "topic",
            CanonicalField::Grade => "grade",
        }
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized header spelling to canonical field. Keys are already in
/// `normalize_header` form.
pub const HEADER_ALIASES: &[(&str, CanonicalField)] = &[
    ("word", CanonicalField::Term),
    ("term", CanonicalField::Term),
    ("en", CanonicalField::Term),
    ("english", CanonicalField::Term),
    ("слово", CanonicalField::Term),
    ("английское слово", CanonicalField::Term),
    ("англійське слово", CanonicalField::Term),
    ("translation", CanonicalField::Translation),
    ("translate", CanonicalField::Translation),
    ("ua", CanonicalField::Translation),
    ("ukrainian", CanonicalField::Translation),
    ("перевод", CanonicalField::Translation),
    ("переклад", CanonicalField::Translation),
    ("transcription", CanonicalField::Transcription),
    ("ipa", CanonicalField::Transcription),
    ("транскрипция", CanonicalField::Transcription),
    ("транскрипція", CanonicalField::Transcription),
    ("unit", CanonicalField::Unit),
    ("юнит", CanonicalField::Unit),
    ("розділ", CanonicalField::Unit),
    ("раздел", CanonicalField::Unit),
    ("topic", CanonicalField::Topic),
    ("тема", CanonicalField::Topic),
    ("grade", CanonicalField::Grade),
    ("form", CanonicalField::Grade),
    ("форма", CanonicalField::Grade),
    ("pos", CanonicalField::Grade),
    ("part of speech", CanonicalField::Grade),
    ("клас", CanonicalField::Grade),
    ("класс", CanonicalField::Grade),
];

pub fn normalize_header(raw: &str) -> String {
    raw.to_lowercase()
        .trim_start_matches('\u{feff}')
        .trim()
        .to_string()
}

pub fn resolve_header(raw: &str) -> Option<CanonicalField> {
    let normalized = normalize_header(raw);
    HEADER_ALIASES
        .iter()
        .find(|(alias, _)| *alias == normalized)
        .map(|(_, field)| *field)
}

/// Column index to canonical field for one header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMap {
    columns: Vec<Option<CanonicalField>>,
}

impl HeaderMap {
    pub fn from_headers<S: AsRef<str>>(headers: &[S]) -> Self {
        let mut columns = Vec::with_capacity(headers.len());
        let mut seen = Vec::new();

        for header in headers {
            let raw = header.as_ref();
            let field = match resolve_header(raw) {
                Some(field) if seen.contains(&field) => {
                    debug!(header = raw.trim(), %field, "duplicate column ignored");
                    None
                }
                Some(field) => {
                    seen.push(field);
                    Some(field)
                }
                None => {
                    debug!(header = raw.trim(), "unrecognized column ignored");
                    None
                }
            };
            columns.push(field);
        }

        Self { columns }
    }

    pub fn field_at(&self, column: usize) -> Option<CanonicalField> {
        self.columns.get(column).copied().flatten()
    }

    pub fn mapped(&self) -> impl Iterator<Item = (usize, CanonicalField)> + '_ {
        self.columns
            .iter()
            .enumerate()
            .filter_map(|(i, f)| f.map(|f| (i, f)))
    }

    pub fn has(&self, field: CanonicalField) -> bool {
        self.columns.contains(&Some(field))
    }
}

use crate::dictionary::headers::CanonicalField;

/// One dictionary record. `term` and `translation` are empty when the
/// source had nothing for them; the optional fields are `None` instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    pub term: String,
    pub translation: String,
    pub transcription: Option<String>,
    pub unit: Option<String>,
    pub topic: Option<String>,
    pub grade: Option<String>,
}

impl Entry {
    pub fn new(term: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            translation: translation.into(),
            ..Self::default()
        }
    }

    pub fn with_field(mut self, field: CanonicalField, value: impl Into<String>) -> Self {
        self.set(field, value.into());
        self
    }

    /// Present, non-empty value of `field`.
    pub fn get(&self, field: CanonicalField) -> Option<&str> {
        let value = match field {
            CanonicalField::Term => Some(self.term.as_str()),
            CanonicalField::Translation => Some(self.translation.as_str()),
            CanonicalField::Transcription => self.transcription.as_deref(),
            CanonicalField::Unit => self.unit.as_deref(),
            CanonicalField::Topic => self.topic.as_deref(),
            CanonicalField::Grade => self.grade.as_deref(),
        };
        value.filter(|v| !v.is_empty())
    }

    pub(crate) fn set(&mut self, field: CanonicalField, value: String) {
        match field {
            CanonicalField::Term => self.term = value,
            CanonicalField::Translation => self.translation = value,
            CanonicalField::Transcription => self.transcription = Some(value),
            CanonicalField::Unit => self.unit = Some(value),
            CanonicalField::Topic => self.topic = Some(value),
            CanonicalField::Grade => self.grade = Some(value),
        }
    }

    pub fn is_admissible(&self) -> bool {
        !self.term.trim().is_empty() || !self.translation.trim().is_empty()
    }

    /// Lowercased, space-joined text of every present field, in display
    /// order term, translation, transcription, topic, unit, grade.
    pub fn haystack(&self) -> String {
        const ORDER: [CanonicalField; 6] = [
            CanonicalField::Term,
            CanonicalField::Translation,
            CanonicalField::Transcription,
            CanonicalField::Topic,
            CanonicalField::Unit,
            CanonicalField::Grade,
        ];
        ORDER
            .iter()
            .filter_map(|f| self.get(*f))
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}

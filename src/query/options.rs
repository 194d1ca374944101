use crate::dictionary::{CanonicalField, Entry};
use crate::query::collate::natural_cmp;
use crate::state::ALL;

/// Distinct non-empty values of `field`, naturally sorted, headed by the
/// "All" sentinel.
pub fn options_for(entries: &[Entry], field: CanonicalField) -> Vec<String> {
    let mut values: Vec<&str> = entries
        .iter()
        .filter_map(|e| e.get(field))
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .collect();
    values.sort_by(|a, b| natural_cmp(a, b));
    values.dedup();

    let mut options = Vec::with_capacity(values.len() + 1);
    options.push(ALL.to_string());
    options.extend(values.into_iter().map(String::from));
    options
}

/// Whether `value` is one of the observed values of `field`.
pub fn is_known_value(entries: &[Entry], field: CanonicalField, value: &str) -> bool {
    !value.is_empty() && entries.iter().any(|e| e.get(field) == Some(value))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub units: Vec<String>,
    pub topics: Vec<String>,
    pub grades: Vec<String>,
}

impl FilterOptions {
    pub fn from_entries(entries: &[Entry]) -> Self {
        Self {
            units: options_for(entries, CanonicalField::Unit),
            topics: options_for(entries, CanonicalField::Topic),
            grades: options_for(entries, CanonicalField::Grade),
        }
    }

    pub fn for_field(&self, field: CanonicalField) -> Option<&[String]> {
        match field {
            CanonicalField::Unit => Some(self.units.as_slice()),
            CanonicalField::Topic => Some(self.topics.as_slice()),
            CanonicalField::Grade => Some(self.grades.as_slice()),
            _ => None,
        }
    }
}

use crate::dictionary::{CanonicalField, Entry};
use crate::query::options::is_known_value;
use crate::state::{FilterState, Selection};

/// Entries satisfying every active selection and the search text, in
/// ingestion order. A selection naming a value the working set does not
/// contain is treated as "All".
pub fn filter<'a>(entries: &'a [Entry], state: &FilterState) -> Vec<&'a Entry> {
    let unit = effective(entries, CanonicalField::Unit, &state.unit);
    let topic = effective(entries, CanonicalField::Topic, &state.topic);
    let grade = effective(entries, CanonicalField::Grade, &state.grade);
    let needle = state.search.trim().to_lowercase();

    entries
        .iter()
        .filter(|e| field_matches(e, CanonicalField::Unit, unit))
        .filter(|e| field_matches(e, CanonicalField::Topic, topic))
        .filter(|e| field_matches(e, CanonicalField::Grade, grade))
        .filter(|e| needle.is_empty() || e.haystack().contains(&needle))
        .collect()
}

fn effective<'s>(
    entries: &[Entry],
    field: CanonicalField,
    selection: &'s Selection,
) -> Option<&'s str> {
    match selection {
        Selection::All => None,
        Selection::Value(v) if is_known_value(entries, field, v) => Some(v.as_str()),
        Selection::Value(_) => None,
    }
}

fn field_matches(entry: &Entry, field: CanonicalField, wanted: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(v) => entry.get(field).unwrap_or("") == v,
    }
}

use crate::dictionary::entry::Entry;
use crate::dictionary::headers::{CanonicalField, HeaderMap};
use crate::dictionary::reader::{fetch_text, parse_table, DataSource, RawTable};
use crate::state::WorkingSet;
use crate::utils::{clean_cell, DataConfig};
use std::time::Duration;
use tracing::{info, warn};

/// Shapes raw rows into entries, keeping input order and dropping rows
/// with neither a term nor a translation.
pub fn ingest(raw: &RawTable) -> Vec<Entry> {
    let header_map = HeaderMap::from_headers(&raw.headers);
    if !header_map.has(CanonicalField::Term) && !header_map.has(CanonicalField::Translation) {
        warn!(headers = ?raw.headers, "no word or translation column recognized");
    }
    raw.rows
        .iter()
        .filter_map(|row| shape_row(&header_map, row))
        .collect()
}

pub fn shape_row<S: AsRef<str>>(header_map: &HeaderMap, row: &[S]) -> Option<Entry> {
    let mut entry = Entry::default();
    for (column, field) in header_map.mapped() {
        if let Some(value) = row.get(column).and_then(|cell| clean_cell(cell.as_ref())) {
            entry.set(field, value);
        }
    }
    entry.is_admissible().then_some(entry)
}

/// Fetches, parses and ingests the configured word list. Never fails: a
/// source that cannot be read or parsed yields `WorkingSet::Failed`.
pub async fn load_working_set(config: &DataConfig) -> WorkingSet {
    let source = DataSource::parse(&config.source);
    let timeout = Duration::from_secs(config.fetch_timeout_seconds.max(1));

    let text = match fetch_text(&source, timeout).await {
        Ok(text) => text,
        Err(e) => {
            warn!(source = %source, error = %e, "failed to fetch word list");
            return WorkingSet::Failed {
                reason: e.to_string(),
            };
        }
    };

    let delimiter = config.delimiter.map(|d| d as u8);
    let table = match parse_table(&text, delimiter) {
        Ok(table) => table,
        Err(e) => {
            warn!(source = %source, error = %e, "failed to parse word list");
            return WorkingSet::Failed {
                reason: e.to_string(),
            };
        }
    };

    let entries = ingest(&table);
    info!(
        source = %source,
        rows = table.rows.len(),
        entries = entries.len(),
        "word list loaded"
    );
    WorkingSet::Loaded(entries)
}

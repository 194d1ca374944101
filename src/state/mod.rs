pub mod session;

pub use session::{Event, Session};

use crate::dictionary::Entry;
use std::fmt;

/// Sentinel selection meaning "do not filter on this field".
pub const ALL: &str = "All";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    All,
    Value(String),
}

impl Selection {
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value == ALL || value.is_empty() {
            Selection::All
        } else {
            Selection::Value(value.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str(ALL),
            Selection::Value(v) => f.write_str(v),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub search: String,
    pub unit: Selection,
    pub topic: Selection,
    pub grade: Selection,
    pub page: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search: String::new(),
            unit: Selection::All,
            topic: Selection::All,
            grade: Selection::All,
            page: 1,
        }
    }
}

/// Result of the one-shot load at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WorkingSet {
    #[default]
    Unloaded,
    Loaded(Vec<Entry>),
    Failed { reason: String },
}

impl WorkingSet {
    pub fn entries(&self) -> &[Entry] {
        match self {
            WorkingSet::Loaded(entries) => entries,
            WorkingSet::Unloaded | WorkingSet::Failed { .. } => &[],
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, WorkingSet::Loaded(_))
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            WorkingSet::Failed { reason } => Some(reason),
            _ => None,
        }
    }
}

pub mod config;
pub mod errors;

pub use config::{AppConfig, DataConfig, LoggingConfig, QueryConfig, SpeechConfig};
pub use errors::{DictionaryError, Result};

/// Trims a cell and drops it when nothing is left.
pub fn clean_cell(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_cell_trims_and_drops_blank() {
        assert_eq!(clean_cell("  cat "), Some("cat".to_string()));
        assert_eq!(clean_cell("   "), None);
        assert_eq!(clean_cell(""), None);
    }
}

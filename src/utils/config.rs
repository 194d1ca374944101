use crate::utils::errors::{DictionaryError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "word-shelf.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data: DataConfig,
    pub query: QueryConfig,
    pub speech: SpeechConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// File path or http(s) URL of the word list.
    pub source: String,
    /// Forces the column delimiter instead of sniffing it from the header line.
    pub delimiter: Option<char>,
    pub fetch_timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    pub page_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    pub enabled: bool,
    pub program: String,
    pub voice: Option<String>,
    pub lang: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            source: "english_school.csv".to_string(),
            delimiter: None,
            fetch_timeout_seconds: 30,
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            page_size: crate::query::DEFAULT_PAGE_SIZE,
        }
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            program: "espeak".to_string(),
            voice: None,
            lang: Some("en-US".to_string()),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults only when there is no file; a file that fails to parse or
    /// validate is an error.
    pub fn load_or_default(path: Option<&str>) -> Result<Self> {
        let Some(p) = path else {
            return Ok(Self::default());
        };
        match Self::load_from_file(p) {
            Err(DictionaryError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.query.page_size == 0 {
            return Err(DictionaryError::ConfigError(
                "query.page_size must be at least 1".to_string(),
            ));
        }
        if self.data.source.trim().is_empty() {
            return Err(DictionaryError::ConfigError(
                "data.source must not be empty".to_string(),
            ));
        }
        if let Some(d) = self.data.delimiter {
            if !d.is_ascii() || d == '"' || d == '\n' || d == '\r' {
                return Err(DictionaryError::ConfigError(format!(
                    "data.delimiter {d:?} must be a single ASCII character other than a quote or newline"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_viewer_behaviour() {
        let config = AppConfig::default();
        assert_eq!(config.query.page_size, 70);
        assert_eq!(config.data.source, "english_school.csv");
        assert!(config.speech.enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[query]\npage_size = 10\n\n[speech]\nvoice = \"en-us+f3\"").unwrap();

        let config = AppConfig::load_from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.query.page_size, 10);
        assert_eq!(config.speech.voice.as_deref(), Some("en-us+f3"));
        assert_eq!(config.speech.program, "espeak");
        assert_eq!(config.data.fetch_timeout_seconds, 30);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[query]\npage_size = 0").unwrap();

        let err = AppConfig::load_from_file(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, DictionaryError::ConfigError(_)));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = AppConfig::load_or_default(Some("/nonexistent/word-shelf.toml")).unwrap();
        assert_eq!(config.query.page_size, 70);
        assert_eq!(AppConfig::load_or_default(None).unwrap().query.page_size, 70);
    }

    #[test]
    fn invalid_file_is_not_replaced_by_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[query]\npage_size = 0\n\n[data]\nsource = \"words.csv\"").unwrap();
        let path = file.path().to_str().unwrap();
        assert!(matches!(
            AppConfig::load_or_default(Some(path)),
            Err(DictionaryError::ConfigError(_))
        ));

        let mut broken = tempfile::NamedTempFile::new().unwrap();
        writeln!(broken, "[query\npage_size = ").unwrap();
        assert!(matches!(
            AppConfig::load_or_default(Some(broken.path().to_str().unwrap())),
            Err(DictionaryError::TomlError(_))
        ));
    }

    #[test]
    fn delimiter_override_parses_from_string() {
        let config: AppConfig = toml::from_str("[data]\ndelimiter = \";\"").unwrap();
        assert_eq!(config.data.delimiter, Some(';'));
        assert!(config.validate().is_ok());
    }
}

use crate::utils::{DictionaryError, Result};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

const CANDIDATE_DELIMITERS: [u8; 4] = [b',', b';', b'\t', b'|'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Url(String),
}

impl DataSource {
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.starts_with("http://") || value.starts_with("https://") {
            DataSource::Url(value.to_string())
        } else {
            DataSource::File(PathBuf::from(value))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Url(url) => f.write_str(url),
        }
    }
}

/// Header row plus data rows, cells untrimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

pub async fn fetch_text(source: &DataSource, timeout: Duration) -> Result<String> {
    let bytes = match source {
        DataSource::File(path) => tokio::fs::read(path).await?,
        DataSource::Url(url) => {
            let client = reqwest::Client::builder().timeout(timeout).build()?;
            let response = client.get(url).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(DictionaryError::HttpStatus {
                    status: status.as_u16(),
                    url: url.clone(),
                });
            }
            response.bytes().await?.to_vec()
        }
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Picks the most frequent candidate delimiter in the header line,
/// ignoring quoted text. Falls back to a comma.
pub fn detect_delimiter(text: &str) -> u8 {
    let mut counts = [0usize; CANDIDATE_DELIMITERS.len()];
    let mut in_quotes = false;

    for byte in text.bytes() {
        match byte {
            b'"' => in_quotes = !in_quotes,
            b'\n' | b'\r' if !in_quotes => break,
            _ if !in_quotes => {
                if let Some(i) = CANDIDATE_DELIMITERS.iter().position(|d| *d == byte) {
                    counts[i] += 1;
                }
            }
            _ => {}
        }
    }

    let best = counts
        .iter()
        .enumerate()
        .fold(0, |best, (i, count)| if *count > counts[best] { i } else { best });
    CANDIDATE_DELIMITERS[best]
}

pub fn parse_table(text: &str, delimiter: Option<u8>) -> Result<RawTable> {
    let delimiter = delimiter.unwrap_or_else(|| detect_delimiter(text));
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.trim().to_string()).collect();
    if headers.iter().all(|h| h.trim_start_matches('\u{feff}').is_empty()) {
        return Err(DictionaryError::EmptyTable("no header row".to_string()));
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        rows.push(record.iter().map(|cell| cell.to_string()).collect());
    }

    Ok(RawTable { headers, rows })
}

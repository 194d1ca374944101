pub mod entry;
pub mod headers;
pub mod ingest;
pub mod reader;

pub use entry::Entry;
pub use headers::{normalize_header, resolve_header, CanonicalField, HeaderMap, HEADER_ALIASES};
pub use ingest::{ingest, load_working_set, shape_row};
pub use reader::{detect_delimiter, fetch_text, parse_table, DataSource, RawTable};

pub mod dictionary;
pub mod query;
pub mod speech;
pub mod state;
pub mod terminal;
pub mod utils;

pub use dictionary::{ingest, load_working_set, CanonicalField, DataSource, Entry, RawTable};
pub use query::{filter, options_for, paginate, FilterOptions, Page, DEFAULT_PAGE_SIZE};
pub use speech::{CommandSpeaker, SilentSpeaker, Speaker, SpeechRequest};
pub use state::{Event, FilterState, Selection, Session, WorkingSet};
pub use utils::{AppConfig, DictionaryError, Result};

pub mod collate;
pub mod filter;
pub mod options;
pub mod paginate;

pub use collate::natural_cmp;
pub use filter::filter;
pub use options::{is_known_value, options_for, FilterOptions};
pub use paginate::{paginate, total_pages, Page, DEFAULT_PAGE_SIZE};

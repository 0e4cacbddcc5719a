//! Loading record batches from files.

mod loader;

pub use loader::{RecordLoader, detect_delimiter};

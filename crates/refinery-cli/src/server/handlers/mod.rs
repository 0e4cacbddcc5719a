//! API request handlers.

mod clean_enrich;
mod health;

pub use clean_enrich::*;
pub use health::*;

//! Application state for the web server.

use refinery::BatchProcessor;

/// Shared application state.
///
/// The processor holds only an immutable, shared model handle, so requests
/// never contend on it.
#[derive(Clone)]
pub struct AppState {
    pub processor: BatchProcessor,
}

impl AppState {
    /// Create new application state.
    pub fn new(processor: BatchProcessor) -> Self {
        Self { processor }
    }

    /// Check if generative mode can run.
    pub fn generative_available(&self) -> bool {
        self.processor.generative_available()
    }
}

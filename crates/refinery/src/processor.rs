//! Batch processing: mode resolution, strategy dispatch, envelope assembly.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::envelope::{ResponseEnvelope, RowError};
use crate::error::{RefineryError, Result};
use crate::llm::GenerativeModel;
use crate::mode::{ModeSelection, StrategyMode};
use crate::record::Record;
use crate::strategy::{
    BasicCleaning, EnrichmentStrategy, GenerativeEnrichment, RowOutcome, StatisticalImputation,
};

/// Runs batches through the selected enrichment strategy.
///
/// Holds no per-request state; one instance can serve concurrent requests.
#[derive(Clone, Default)]
pub struct BatchProcessor {
    model: Option<Arc<dyn GenerativeModel>>,
}

impl BatchProcessor {
    /// Create a processor without a generative model. Generative batches are
    /// rejected as missing a credential.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the generative model capability.
    pub fn with_model(self, model: impl GenerativeModel + 'static) -> Self {
        self.with_shared_model(Arc::new(model))
    }

    /// Attach an already shared generative model capability.
    pub fn with_shared_model(mut self, model: Arc<dyn GenerativeModel>) -> Self {
        self.model = Some(model);
        self
    }

    /// The attached model, if any.
    pub fn model(&self) -> Option<&Arc<dyn GenerativeModel>> {
        self.model.as_ref()
    }

    /// Whether generative batches can run.
    pub fn generative_available(&self) -> bool {
        self.model.as_ref().is_some_and(|m| m.has_credential())
    }

    /// Process a batch. Never fails; failures are reported in the envelope.
    pub fn process(&self, records: &[Record], mode: Option<&str>) -> ResponseEnvelope {
        let selection = ModeSelection::resolve(mode);
        if !selection.is_recognized() {
            warn!(
                mode = selection.label(),
                fallback = %selection.strategy(),
                "unrecognized mode, using default strategy"
            );
        }

        match self.dispatch(selection.strategy(), records) {
            Ok(outcomes) => {
                let envelope = assemble(outcomes, selection.label());
                info!(
                    mode = selection.label(),
                    rows = records.len(),
                    errors = envelope.error_rows().len(),
                    "batch processed"
                );
                envelope
            }
            Err(e) => {
                warn!(mode = selection.label(), error = %e, "batch rejected");
                ResponseEnvelope::failed(e.to_string(), selection.label())
            }
        }
    }

    fn dispatch(&self, mode: StrategyMode, records: &[Record]) -> Result<Vec<RowOutcome>> {
        let strategy = self.strategy_for(mode)?;
        debug!(strategy = strategy.name(), rows = records.len(), "dispatching batch");
        strategy.enrich(records)
    }

    fn strategy_for(&self, mode: StrategyMode) -> Result<Box<dyn EnrichmentStrategy>> {
        Ok(match mode {
            StrategyMode::Basic => Box::new(BasicCleaning),
            StrategyMode::Statistical => Box::new(StatisticalImputation),
            StrategyMode::Generative => {
                let model = self.model.clone().ok_or_else(|| {
                    RefineryError::MissingCredential("Generative model credential".to_string())
                })?;
                Box::new(GenerativeEnrichment::new(model))
            }
        })
    }
}

/// Split outcomes into response data and 1-based row errors.
fn assemble(outcomes: Vec<RowOutcome>, used_ai: &str) -> ResponseEnvelope {
    let mut data = Vec::with_capacity(outcomes.len());
    let mut error_rows = Vec::new();

    for (idx, outcome) in outcomes.into_iter().enumerate() {
        match outcome {
            RowOutcome::Cleaned(record) => data.push(record),
            RowOutcome::Fallback { original, error } => {
                error_rows.push(RowError {
                    row_index: idx + 1,
                    data: original.clone(),
                    error,
                });
                data.push(original);
            }
        }
    }

    ResponseEnvelope::completed(data, error_rows, used_ai)
}

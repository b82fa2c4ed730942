use crate::context::GeoContext;
use crate::error::{GeoqError, GeoqErrorExt};
use geoq_kernel::ports::ExtractionOracle;
use geoq_pipeline::Validated;
use tracing::{debug, instrument};

/// Free text to validated query: oracle extraction followed by the pipeline.
///
/// The priming text is assembled once at construction.
#[derive(Debug)]
pub struct QueryParser<O> {
    oracle: O,
    context: GeoContext,
    priming: String,
}

impl<O: ExtractionOracle> QueryParser<O> {
    /// # Errors
    /// Returns [`GeoqError::Examples`] if the priming text cannot be assembled.
    pub fn new(oracle: O, context: GeoContext) -> Result<Self, GeoqError> {
        let priming = context.priming()?.to_string();
        Ok(Self { oracle, context, priming })
    }

    #[must_use]
    pub const fn context(&self) -> &GeoContext {
        &self.context
    }

    #[must_use]
    pub fn priming(&self) -> &str {
        &self.priming
    }

    /// Parses one query. Oracle failures are surfaced as-is, never retried.
    ///
    /// # Errors
    /// * [`GeoqError::Collaborator`] when the oracle fails or returns an invalid candidate.
    /// * [`GeoqError::Pipeline`] for any fatal pipeline outcome.
    #[instrument(skip(self), fields(len = query.len()))]
    pub fn parse(&self, query: &str) -> Result<Validated, GeoqError> {
        let candidate = self.oracle.extract(query, &self.priming).context("extraction oracle")?;
        debug!(relation = %candidate.spatial_relation().relation, "Candidate extracted");
        self.context.validate(candidate)
    }
}

use crate::error::GeoqError;
use crate::priming::PrimingContext;
use geoq_domain::config::{AppConfig, PipelineConfig};
use geoq_domain::query::CandidateQuery;
use geoq_domain::relation::RelationConfig;
use geoq_fewshot::ExampleBank;
use geoq_pipeline::{PipelineError, Validated, validate_query};
use geoq_relations::SpatialRelationRegistry;
use std::sync::Arc;
use tracing::info;

/// Application-level state created once at startup and shared by reference (or cheap
/// clone) with every request: the relation registry, the example bank and the pipeline
/// settings. Nothing in it changes after [`GeoContextBuilder::build`].
#[derive(Debug, Clone)]
pub struct GeoContext {
    registry: Arc<SpatialRelationRegistry>,
    examples: Arc<ExampleBank>,
    pipeline: PipelineConfig,
}

impl GeoContext {
    #[must_use]
    pub fn builder() -> GeoContextBuilder {
        GeoContextBuilder::default()
    }

    /// Built-in registry and examples with the pipeline settings from `config`.
    ///
    /// # Errors
    /// See [`GeoContextBuilder::build`].
    pub fn from_config(config: &AppConfig) -> Result<Self, GeoqError> {
        Self::builder().pipeline(config.pipeline.clone()).build()
    }

    #[must_use]
    pub fn registry(&self) -> &SpatialRelationRegistry {
        &self.registry
    }

    #[must_use]
    pub fn examples(&self) -> &ExampleBank {
        &self.examples
    }

    #[must_use]
    pub const fn pipeline_config(&self) -> &PipelineConfig {
        &self.pipeline
    }

    /// Runs the enrichment and validation pipeline with this context's settings.
    ///
    /// # Errors
    /// Returns [`GeoqError::Pipeline`] for any fatal pipeline outcome.
    pub fn validate(&self, candidate: CandidateQuery) -> Result<Validated, GeoqError> {
        Ok(validate_query(candidate, &self.registry, &self.pipeline)?)
    }

    /// Assembles the text used to prime the extraction oracle.
    ///
    /// # Errors
    /// Returns [`GeoqError::Examples`] if the examples cannot be rendered.
    pub fn priming(&self) -> Result<PrimingContext, GeoqError> {
        PrimingContext::new(&self.registry, &self.examples)
    }
}

/// Builder for [`GeoContext`]. Defaults: built-in registry, bundled examples, default
/// pipeline settings.
#[derive(Debug, Default)]
pub struct GeoContextBuilder {
    registry: Option<SpatialRelationRegistry>,
    relations: Vec<RelationConfig>,
    examples: Option<ExampleBank>,
    pipeline: PipelineConfig,
}

impl GeoContextBuilder {
    /// Replaces the built-in registry.
    #[must_use]
    pub fn registry(mut self, registry: SpatialRelationRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Registers an additional (or overriding) relation on top of the registry.
    #[must_use]
    pub fn relation(mut self, config: RelationConfig) -> Self {
        self.relations.push(config);
        self
    }

    #[must_use]
    pub fn examples(mut self, examples: ExampleBank) -> Self {
        self.examples = Some(examples);
        self
    }

    #[must_use]
    pub fn pipeline(mut self, pipeline: PipelineConfig) -> Self {
        self.pipeline = pipeline;
        self
    }

    /// # Errors
    /// * [`GeoqError::Pipeline`] when the confidence threshold is outside `[0, 1]`.
    /// * [`GeoqError::Examples`] when the bundled examples fail to load.
    pub fn build(self) -> Result<GeoContext, GeoqError> {
        self.pipeline.validate().map_err(|message| PipelineError::InvalidConfiguration {
            message: message.into(),
            context: None,
        })?;

        let mut registry = self.registry.unwrap_or_default();
        for config in self.relations {
            registry.register(config);
        }

        let examples = match self.examples {
            Some(examples) => examples,
            None => ExampleBank::load()?,
        };

        info!(
            relations = registry.len(),
            examples = examples.len(),
            threshold = self.pipeline.confidence_threshold,
            strict = self.pipeline.strict,
            "Geo context ready"
        );

        Ok(GeoContext {
            registry: Arc::new(registry),
            examples: Arc::new(examples),
            pipeline: self.pipeline,
        })
    }
}

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::catalog::{CatalogDefinition, CatalogError};
use super::definitions::AssessmentKind;
use super::domain::ResponseSet;
use super::engine::{AssessmentEngine, EngineConfig, EngineResult};
use super::input::ResponseIssue;

/// How strictly submitted answers are checked before scoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Reject the whole submission when any answer is malformed.
    Strict,
    /// Score what can be scored and report the rest as flagged input.
    #[default]
    Lenient,
}

/// Listing entry describing one available assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentSummary {
    pub kind: AssessmentKind,
    pub title: String,
    pub dimensions: usize,
    pub items: usize,
}

/// Registry of one engine per built-in assessment type.
pub struct AssessmentService {
    engines: HashMap<AssessmentKind, AssessmentEngine>,
}

impl AssessmentService {
    /// Builds every built-in catalog, failing on the first inconsistent one.
    pub fn new(config: EngineConfig) -> Result<Self, CatalogError> {
        let mut engines = HashMap::new();
        for kind in AssessmentKind::ordered() {
            let engine = AssessmentEngine::for_kind(kind, config)?;
            info!(
                assessment = kind.slug(),
                dimensions = engine.catalog().dimensions().len(),
                items = engine.catalog().item_count(),
                "assessment catalog loaded"
            );
            engines.insert(kind, engine);
        }
        Ok(Self { engines })
    }

    pub fn resolve(&self, slug: &str) -> Result<AssessmentKind, AssessmentServiceError> {
        AssessmentKind::parse(slug)
            .filter(|kind| self.engines.contains_key(kind))
            .ok_or_else(|| AssessmentServiceError::UnknownAssessment(slug.to_string()))
    }

    pub fn engine(&self, kind: AssessmentKind) -> Result<&AssessmentEngine, AssessmentServiceError> {
        self.engines
            .get(&kind)
            .ok_or_else(|| AssessmentServiceError::UnknownAssessment(kind.slug().to_string()))
    }

    pub fn kinds(&self) -> Vec<AssessmentKind> {
        AssessmentKind::ordered()
            .into_iter()
            .filter(|kind| self.engines.contains_key(kind))
            .collect()
    }

    pub fn summaries(&self) -> Vec<AssessmentSummary> {
        AssessmentKind::ordered()
            .into_iter()
            .filter_map(|kind| {
                self.engines.get(&kind).map(|engine| AssessmentSummary {
                    kind,
                    title: engine.catalog().title().to_string(),
                    dimensions: engine.catalog().dimensions().len(),
                    items: engine.catalog().item_count(),
                })
            })
            .collect()
    }

    pub fn catalog(
        &self,
        kind: AssessmentKind,
    ) -> Result<CatalogDefinition, AssessmentServiceError> {
        Ok(self.engine(kind)?.catalog().to_definition())
    }

    pub fn evaluate(
        &self,
        kind: AssessmentKind,
        responses: &ResponseSet,
        mode: ValidationMode,
    ) -> Result<EngineResult, AssessmentServiceError> {
        let engine = self.engine(kind)?;

        if mode == ValidationMode::Strict {
            responses
                .validate(engine.catalog())
                .map_err(AssessmentServiceError::RejectedResponses)?;
        }

        Ok(engine.evaluate(responses))
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error("unknown assessment '{0}'")]
    UnknownAssessment(String),
    #[error("{} malformed response(s) rejected", .0.len())]
    RejectedResponses(Vec<ResponseIssue>),
}

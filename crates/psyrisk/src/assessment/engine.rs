use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::alerts::generate_alerts;
use super::catalog::{CatalogError, DimensionCatalog};
use super::definitions::{AssessmentDefinition, AssessmentKind};
use super::domain::{
    Alert, AssessmentStatus, CompositeResult, DimensionResult, Recommendation, ResponseSet,
};
use super::input::{sanitize, FlaggedResponse, InputPolicy};
use super::recommendations::{recommend, DEFAULT_RECOMMENDATION_LIMIT};
use super::rules::RuleTables;
use super::scoring::{composite, score_dimension};

/// Engine settings that are not part of an assessment's rule tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub recommendation_limit: usize,
    pub input_policy: InputPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            recommendation_limit: DEFAULT_RECOMMENDATION_LIMIT,
            input_policy: InputPolicy::default(),
        }
    }
}

/// Everything produced by one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineResult {
    pub catalog_id: String,
    pub status: AssessmentStatus,
    pub composite: CompositeResult,
    pub alerts: Vec<Alert>,
    pub recommendations: Vec<Recommendation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub input_issues: Vec<FlaggedResponse>,
}

impl EngineResult {
    pub fn per_dimension(&self) -> &[DimensionResult] {
        &self.composite.per_dimension
    }

    pub fn dimension(&self, dimension_id: &str) -> Option<&DimensionResult> {
        self.composite.dimension(dimension_id)
    }
}

/// Stateless evaluator for one catalog and its rule tables.
///
/// Cloning is cheap; the catalog and tables are shared read-only.
#[derive(Debug, Clone)]
pub struct AssessmentEngine {
    catalog: Arc<DimensionCatalog>,
    rules: Arc<RuleTables>,
    config: EngineConfig,
}

impl AssessmentEngine {
    pub fn new(definition: AssessmentDefinition, config: EngineConfig) -> Self {
        let (catalog, rules) = definition.into_parts();
        Self {
            catalog: Arc::new(catalog),
            rules: Arc::new(rules),
            config,
        }
    }

    pub fn for_kind(kind: AssessmentKind, config: EngineConfig) -> Result<Self, CatalogError> {
        Ok(Self::new(kind.definition()?, config))
    }

    pub fn catalog(&self) -> &DimensionCatalog {
        &self.catalog
    }

    pub fn rules(&self) -> &RuleTables {
        &self.rules
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    pub fn evaluate(&self, responses: &ResponseSet) -> EngineResult {
        let (accepted, input_issues) = sanitize(responses, &self.catalog, self.config.input_policy);

        let per_dimension = self
            .catalog
            .dimensions()
            .iter()
            .map(|dimension| score_dimension(dimension, &accepted, &self.rules.classification))
            .collect();

        let composite = composite(
            per_dimension,
            &self.rules.weights,
            &self.rules.classification,
        );
        let alerts = generate_alerts(
            &composite,
            self.catalog.sensitive_dimension(),
            &self.rules.alerts,
        );
        let recommendations = recommend(
            &composite,
            &self.rules.recommendations,
            self.config.recommendation_limit,
        );
        let status = AssessmentStatus::from_results(&composite.per_dimension);

        debug!(
            catalog = self.catalog.id(),
            overall_index = composite.overall_index,
            overall_level = composite.overall_risk_level.slug(),
            status = status.label(),
            alerts = alerts.len(),
            recommendations = recommendations.len(),
            flagged = input_issues.len(),
            "assessment evaluated"
        );

        EngineResult {
            catalog_id: self.catalog.id().to_string(),
            status,
            composite,
            alerts,
            recommendations,
            input_issues,
        }
    }
}

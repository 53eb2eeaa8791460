//! Psychosocial assessment scoring, classification, alerting, and recommendations.
//!
//! Each assessment type is a configuration instance: a [`DimensionCatalog`] plus the
//! [`RuleTables`] it is scored with. The [`AssessmentEngine`] is a pure function of those
//! tables and a [`ResponseSet`]; it performs no I/O and keeps no state between calls.

pub mod alerts;
pub mod catalog;
pub mod definitions;
pub mod domain;
pub mod engine;
pub mod import;
pub mod input;
pub mod recommendations;
pub mod router;
pub mod rules;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use alerts::{generate_alerts, AlertRules};
pub use catalog::{CatalogDefinition, CatalogError, DimensionCatalog};
pub use definitions::{AssessmentDefinition, AssessmentKind};
pub use domain::{
    Alert, AlertKind, AlertSeverity, AssessmentStatus, CompositeResult, Dimension,
    DimensionResult, ItemDefinition, Polarity, Recommendation, RecommendationPriority,
    ResponseSet, RiskLevel,
};
pub use engine::{AssessmentEngine, EngineConfig, EngineResult};
pub use import::{ResponseImportError, ResponseImporter};
pub use input::{FlaggedResponse, InputPolicy, IssueResolution, ResponseIssue};
pub use recommendations::{
    recommend, RecommendationRule, RecommendationTables, DEFAULT_RECOMMENDATION_LIMIT,
};
pub use router::{assessment_router, EvaluateRequest};
pub use rules::RuleTables;
pub use service::{AssessmentService, AssessmentServiceError, AssessmentSummary, ValidationMode};

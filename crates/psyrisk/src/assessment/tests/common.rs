use std::collections::BTreeMap;

use axum::response::Response;
use serde_json::Value;

use crate::assessment::catalog::{CatalogDefinition, DimensionCatalog};
use crate::assessment::definitions::{AssessmentDefinition, AssessmentKind};
use crate::assessment::domain::{Dimension, ItemDefinition, Polarity, ResponseSet};
use crate::assessment::engine::{AssessmentEngine, EngineConfig};

pub(super) fn psychosocial_engine() -> AssessmentEngine {
    AssessmentEngine::for_kind(AssessmentKind::Psychosocial, EngineConfig::default())
        .expect("psychosocial catalog is valid")
}

pub(super) fn stress_engine() -> AssessmentEngine {
    AssessmentEngine::for_kind(AssessmentKind::OccupationalStress, EngineConfig::default())
        .expect("stress catalog is valid")
}

/// Answers every item of `dimension` so its adjusted mean lands exactly on `target`.
pub(super) fn answer_dimension(responses: &mut ResponseSet, dimension: &Dimension, target: i32) {
    for item in &dimension.items {
        let scored = match dimension.polarity {
            Polarity::Negative => target,
            Polarity::Positive => 6 - target,
        };
        let answer = if item.reverse_scored { 6 - scored } else { scored };
        responses.insert(item.id, answer);
    }
}

/// Builds a full submission from `(dimension_id, target)` pairs; unlisted dimensions get
/// `default_target`.
pub(super) fn responses_with_targets(
    engine: &AssessmentEngine,
    targets: &[(&str, i32)],
    default_target: i32,
) -> ResponseSet {
    let targets: BTreeMap<&str, i32> = targets.iter().copied().collect();
    let mut responses = ResponseSet::new();
    for dimension in engine.catalog().dimensions() {
        let target = targets
            .get(dimension.id.as_str())
            .copied()
            .unwrap_or(default_target);
        answer_dimension(&mut responses, dimension, target);
    }
    responses
}

/// Two dimensions: `strain` (negative, items 1-2) and `support` (positive, items 3-5).
pub(super) fn strain_support_catalog() -> DimensionCatalog {
    DimensionCatalog::new(CatalogDefinition {
        id: "strain_support".to_string(),
        title: "Strain and support".to_string(),
        sensitive_dimension: None,
        dimensions: vec![
            Dimension {
                id: "strain".to_string(),
                display_name: "Strain".to_string(),
                polarity: Polarity::Negative,
                items: vec![
                    ItemDefinition::new(1, "I feel drained."),
                    ItemDefinition::new(2, "Deadlines are unrealistic."),
                ],
            },
            Dimension {
                id: "support".to_string(),
                display_name: "Support".to_string(),
                polarity: Polarity::Positive,
                items: vec![
                    ItemDefinition::new(3, "My manager helps me."),
                    ItemDefinition::new(4, "Peers back me up."),
                    ItemDefinition::new(5, "I can ask for help."),
                ],
            },
        ],
    })
    .expect("fixture catalog is valid")
}

pub(super) fn strain_support_engine(config: EngineConfig) -> AssessmentEngine {
    let definition =
        AssessmentDefinition::custom(strain_support_catalog()).expect("custom rules validate");
    AssessmentEngine::new(definition, config)
}

pub(super) fn responses(pairs: &[(u32, i32)]) -> ResponseSet {
    pairs.iter().copied().collect()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

mod aggregate;
mod classify;
mod composite;

pub use aggregate::{
    aggregate, apply_polarity_adjustment, apply_reverse_scoring, DimensionStatistic,
};
pub use classify::{percentile_for, ClassificationTable, LabelSet, RiskThresholds};
pub use composite::{composite, RiskWeights};

use super::domain::{Dimension, DimensionResult, ResponseSet, RiskLevel};

/// Aggregates and classifies one dimension.
pub fn score_dimension(
    dimension: &Dimension,
    responses: &ResponseSet,
    classification: &ClassificationTable,
) -> DimensionResult {
    let statistic = aggregate(dimension, responses);
    let (risk_level, label) = if statistic.is_answered() {
        classification.classify(statistic.adjusted_mean)
    } else {
        (
            RiskLevel::Undefined,
            classification.labels.label(RiskLevel::Undefined),
        )
    };

    DimensionResult {
        dimension_id: dimension.id.clone(),
        display_name: dimension.display_name.clone(),
        raw_mean: statistic.raw_mean,
        scored_mean: statistic.scored_mean,
        adjusted_mean: statistic.adjusted_mean,
        answered_count: statistic.answered_count,
        item_count: statistic.item_count,
        completeness: statistic.completeness(),
        risk_level,
        classification_label: label.to_string(),
        percentile: percentile_for(statistic.adjusted_mean, risk_level),
    }
}

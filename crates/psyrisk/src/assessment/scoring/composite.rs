use serde::{Deserialize, Serialize};

use super::super::catalog::CatalogError;
use super::super::domain::{CompositeResult, DimensionResult, RiskLevel};
use super::classify::ClassificationTable;

/// Influence of a dimension on the composite index, by its own risk tier.
///
/// Higher tiers weigh more so that dimensions already at risk pull the overall index
/// toward themselves. Undefined dimensions always weigh zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskWeights {
    pub low: f64,
    pub moderate: f64,
    pub high: f64,
    pub critical: f64,
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            low: 1.0,
            moderate: 2.0,
            high: 3.0,
            critical: 3.0,
        }
    }
}

impl RiskWeights {
    /// Weights must be finite, positive, non-decreasing by tier, and Critical must
    /// outweigh Low.
    pub(crate) fn validate(&self) -> Result<(), CatalogError> {
        let tiers = [self.low, self.moderate, self.high, self.critical];
        let positive = tiers
            .iter()
            .all(|weight| weight.is_finite() && *weight > 0.0);
        let ordered = tiers.windows(2).all(|pair| pair[0] <= pair[1]);
        if positive && ordered && self.low < self.critical {
            Ok(())
        } else {
            Err(CatalogError::InvalidWeights)
        }
    }

    pub fn weight(&self, level: RiskLevel) -> f64 {
        match level {
            RiskLevel::Low => self.low,
            RiskLevel::Moderate => self.moderate,
            RiskLevel::High => self.high,
            RiskLevel::Critical => self.critical,
            RiskLevel::Undefined => 0.0,
        }
    }
}

/// Risk-weighted mean of the per-dimension adjusted means.
///
/// Returns index `0.0` with [`RiskLevel::Undefined`] when no dimension carries weight.
pub fn composite(
    per_dimension: Vec<DimensionResult>,
    weights: &RiskWeights,
    classification: &ClassificationTable,
) -> CompositeResult {
    let (weighted_sum, total_weight) =
        per_dimension
            .iter()
            .fold((0.0, 0.0), |(weighted_sum, total_weight), result| {
                let weight = weights.weight(result.risk_level);
                (
                    weighted_sum + result.adjusted_mean * weight,
                    total_weight + weight,
                )
            });

    let overall_index = if total_weight > 0.0 {
        weighted_sum / total_weight
    } else {
        0.0
    };

    let (overall_risk_level, label) = classification.classify(overall_index);

    CompositeResult {
        overall_index,
        overall_risk_level,
        overall_classification_label: label.to_string(),
        per_dimension,
    }
}

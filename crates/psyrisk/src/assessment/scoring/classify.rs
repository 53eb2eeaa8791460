use serde::{Deserialize, Serialize};

use super::super::catalog::CatalogError;
use super::super::domain::RiskLevel;

/// Lower bounds (inclusive) of the upper three tiers on the risk-oriented scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskThresholds {
    pub moderate: f64,
    pub high: f64,
    pub critical: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            moderate: 2.0,
            high: 3.0,
            critical: 4.0,
        }
    }
}

impl RiskThresholds {
    pub(crate) fn validate(&self) -> Result<(), CatalogError> {
        let finite =
            self.moderate.is_finite() && self.high.is_finite() && self.critical.is_finite();
        if finite && self.moderate < self.high && self.high < self.critical {
            Ok(())
        } else {
            Err(CatalogError::InvalidThresholds)
        }
    }

    /// Tier for a risk-oriented score.
    ///
    /// Ties go to the higher tier. Non-finite scores and the `0.0` sentinel map to
    /// [`RiskLevel::Undefined`].
    pub fn level_for(&self, score: f64) -> RiskLevel {
        if !score.is_finite() || score <= 0.0 {
            RiskLevel::Undefined
        } else if score >= self.critical {
            RiskLevel::Critical
        } else if score >= self.high {
            RiskLevel::High
        } else if score >= self.moderate {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }
}

/// Human-readable names of each tier for one assessment type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSet {
    pub low: String,
    pub moderate: String,
    pub high: String,
    pub critical: String,
    pub undefined: String,
}

impl LabelSet {
    pub fn new(low: &str, moderate: &str, high: &str, critical: &str) -> Self {
        Self {
            low: low.to_string(),
            moderate: moderate.to_string(),
            high: high.to_string(),
            critical: critical.to_string(),
            undefined: "Dados insuficientes".to_string(),
        }
    }

    pub fn risk() -> Self {
        Self::new("Baixo risco", "Risco moderado", "Alto risco", "Risco crítico")
    }

    pub fn intensity() -> Self {
        Self::new("Reduzido", "Aceitável", "Moderado", "Elevado")
    }

    pub fn label(&self, level: RiskLevel) -> &str {
        match level {
            RiskLevel::Low => &self.low,
            RiskLevel::Moderate => &self.moderate,
            RiskLevel::High => &self.high,
            RiskLevel::Critical => &self.critical,
            RiskLevel::Undefined => &self.undefined,
        }
    }
}

impl Default for LabelSet {
    fn default() -> Self {
        Self::risk()
    }
}

/// Threshold table plus the label set it reports with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassificationTable {
    pub thresholds: RiskThresholds,
    pub labels: LabelSet,
}

impl ClassificationTable {
    pub fn new(thresholds: RiskThresholds, labels: LabelSet) -> Self {
        Self { thresholds, labels }
    }

    pub fn classify(&self, adjusted_mean: f64) -> (RiskLevel, &str) {
        let level = self.thresholds.level_for(adjusted_mean);
        (level, self.labels.label(level))
    }
}

/// Maps a risk-oriented score onto 0..=100 across the 1..=5 scale.
pub fn percentile_for(adjusted_mean: f64, level: RiskLevel) -> f64 {
    if !level.is_defined() {
        return 0.0;
    }
    (((adjusted_mean - 1.0) / 4.0) * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_belong_to_the_higher_tier() {
        let table = ClassificationTable::default();

        assert_eq!(table.classify(1.99).0, RiskLevel::Low);
        assert_eq!(table.classify(2.0).0, RiskLevel::Moderate);
        assert_eq!(table.classify(2.999).0, RiskLevel::Moderate);
        assert_eq!(table.classify(3.0).0, RiskLevel::High);
        assert_eq!(table.classify(4.0).0, RiskLevel::Critical);
        assert_eq!(table.classify(5.0).0, RiskLevel::Critical);
    }

    #[test]
    fn classify_is_total() {
        let table = ClassificationTable::default();

        assert_eq!(table.classify(0.0).0, RiskLevel::Undefined);
        assert_eq!(table.classify(f64::NAN).0, RiskLevel::Undefined);
        assert_eq!(table.classify(f64::INFINITY).0, RiskLevel::Undefined);
        assert_eq!(table.classify(1.0).0, RiskLevel::Low);
    }

    #[test]
    fn labels_follow_the_configured_set() {
        let risk = ClassificationTable::default();
        let intensity = ClassificationTable::new(RiskThresholds::default(), LabelSet::intensity());

        assert_eq!(risk.classify(3.0).1, "Alto risco");
        assert_eq!(intensity.classify(3.0).1, "Moderado");
        assert_eq!(intensity.classify(1.0).1, "Reduzido");
        assert_eq!(risk.classify(0.0).1, "Dados insuficientes");
    }

    #[test]
    fn rejects_unordered_thresholds() {
        let thresholds = RiskThresholds {
            moderate: 3.0,
            high: 2.0,
            critical: 4.0,
        };
        assert!(thresholds.validate().is_err());
        assert!(RiskThresholds::default().validate().is_ok());
    }

    #[test]
    fn percentile_spans_the_scale() {
        assert_eq!(percentile_for(1.0, RiskLevel::Low), 0.0);
        assert_eq!(percentile_for(3.0, RiskLevel::High), 50.0);
        assert_eq!(percentile_for(5.0, RiskLevel::Critical), 100.0);
        assert_eq!(percentile_for(0.0, RiskLevel::Undefined), 0.0);
    }
}

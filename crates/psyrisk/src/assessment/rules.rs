use super::alerts::AlertRules;
use super::catalog::{CatalogError, DimensionCatalog};
use super::recommendations::RecommendationTables;
use super::scoring::{ClassificationTable, RiskWeights};

/// Every tunable table the engine consults, grouped per assessment type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleTables {
    pub classification: ClassificationTable,
    pub weights: RiskWeights,
    pub alerts: AlertRules,
    pub recommendations: RecommendationTables,
}

impl RuleTables {
    /// Checks the tables against the catalog they will be used with.
    pub fn validate(&self, catalog: &DimensionCatalog) -> Result<(), CatalogError> {
        self.classification.thresholds.validate()?;
        self.weights.validate()?;
        self.alerts.validate()?;

        if let Some(unknown) = self
            .recommendations
            .dimension_ids()
            .find(|id| catalog.dimension(id).is_none())
        {
            return Err(CatalogError::UnknownRuleDimension(unknown.to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::definitions::AssessmentKind;

    fn psychosocial() -> (DimensionCatalog, RuleTables) {
        AssessmentKind::Psychosocial
            .definition()
            .expect("psychosocial definition is valid")
            .into_parts()
    }

    #[test]
    fn rejects_weights_that_favour_lower_tiers() {
        let (catalog, mut rules) = psychosocial();
        rules.weights = RiskWeights {
            low: 3.0,
            moderate: 2.0,
            high: 1.0,
            critical: 1.0,
        };

        assert!(matches!(
            rules.validate(&catalog),
            Err(CatalogError::InvalidWeights)
        ));
    }

    #[test]
    fn rejects_non_finite_alert_threshold() {
        let (catalog, mut rules) = psychosocial();
        rules.alerts.overall_index_threshold = f64::NAN;

        assert!(matches!(
            rules.validate(&catalog),
            Err(CatalogError::InvalidAlertThreshold)
        ));
    }

    #[test]
    fn built_in_tables_validate() {
        let (catalog, rules) = psychosocial();
        assert!(rules.validate(&catalog).is_ok());
    }
}

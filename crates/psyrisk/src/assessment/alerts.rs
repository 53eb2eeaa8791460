use serde::{Deserialize, Serialize};

use super::catalog::CatalogError;
use super::domain::{Alert, AlertKind, AlertSeverity, CompositeResult, RiskLevel};

/// Tunables for the alert rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlertRules {
    /// Overall index at or above which a system-level warning fires.
    pub overall_index_threshold: f64,
    /// Emit informational alerts for dimensions without answers.
    pub report_missing_data: bool,
}

impl Default for AlertRules {
    fn default() -> Self {
        Self {
            overall_index_threshold: 4.0,
            report_missing_data: true,
        }
    }
}

impl AlertRules {
    pub(crate) fn validate(&self) -> Result<(), CatalogError> {
        if self.overall_index_threshold.is_finite() {
            Ok(())
        } else {
            Err(CatalogError::InvalidAlertThreshold)
        }
    }
}

/// Evaluates every alert rule against a composite result.
///
/// Rules fire independently and in a fixed order: critical dimensions, the sensitive
/// dimension, the overall index, then missing data. A dimension matched by two rules
/// produces two alerts.
pub fn generate_alerts(
    composite: &CompositeResult,
    sensitive_dimension: Option<&str>,
    rules: &AlertRules,
) -> Vec<Alert> {
    let mut alerts = Vec::new();

    for result in &composite.per_dimension {
        if result.risk_level == RiskLevel::Critical {
            alerts.push(Alert {
                kind: AlertKind::CriticalDimension,
                severity: AlertSeverity::Critical,
                message: format!(
                    "{} em nível crítico (média {:.2}); intervenção imediata necessária",
                    result.display_name, result.adjusted_mean
                ),
                dimension_id: Some(result.dimension_id.clone()),
            });
        }
    }

    if let Some(sensitive) = sensitive_dimension.and_then(|id| composite.dimension(id)) {
        if sensitive.risk_level.is_above_low() {
            alerts.push(Alert {
                kind: AlertKind::SensitiveDimension,
                severity: AlertSeverity::Critical,
                message: format!(
                    "Sinais de {} detectados ({}); acionar canal de apuração e acolhimento",
                    sensitive.display_name.to_lowercase(),
                    sensitive.classification_label
                ),
                dimension_id: Some(sensitive.dimension_id.clone()),
            });
        }
    }

    if composite.overall_risk_level.is_defined()
        && composite.overall_index >= rules.overall_index_threshold
    {
        alerts.push(Alert {
            kind: AlertKind::OverallIndex,
            severity: AlertSeverity::Warning,
            message: format!(
                "Índice geral de risco {:.2} atingiu o limite de {:.1}",
                composite.overall_index, rules.overall_index_threshold
            ),
            dimension_id: None,
        });
    }

    if rules.report_missing_data {
        push_missing_data_alerts(composite, &mut alerts);
    }

    alerts
}

fn push_missing_data_alerts(composite: &CompositeResult, alerts: &mut Vec<Alert>) {
    if !composite.overall_risk_level.is_defined() {
        alerts.push(Alert {
            kind: AlertKind::MissingData,
            severity: AlertSeverity::Info,
            message: "Nenhuma resposta válida; não foi possível calcular o risco".to_string(),
            dimension_id: None,
        });
        return;
    }

    for result in composite
        .per_dimension
        .iter()
        .filter(|result| !result.is_answered())
    {
        alerts.push(Alert {
            kind: AlertKind::MissingData,
            severity: AlertSeverity::Info,
            message: format!(
                "{} sem respostas; dimensão excluída do índice geral",
                result.display_name
            ),
            dimension_id: Some(result.dimension_id.clone()),
        });
    }
}

use super::common::*;
use crate::assessment::domain::{AlertKind, AlertSeverity, ResponseSet};

#[test]
fn critical_sensitive_dimension_raises_two_distinct_alerts() {
    let engine = psychosocial_engine();
    let result = engine.evaluate(&responses_with_targets(
        &engine,
        &[("violence_harassment", 5)],
        1,
    ));

    let kinds: Vec<AlertKind> = result.alerts.iter().map(|alert| alert.kind).collect();
    assert_eq!(
        kinds,
        vec![AlertKind::CriticalDimension, AlertKind::SensitiveDimension]
    );
    assert!(result
        .alerts
        .iter()
        .all(|alert| alert.severity == AlertSeverity::Critical
            && alert.dimension_id.as_deref() == Some("violence_harassment")));
}

#[test]
fn moderate_sensitive_dimension_still_alerts_critically() {
    let engine = psychosocial_engine();
    let result = engine.evaluate(&responses_with_targets(
        &engine,
        &[("violence_harassment", 2)],
        1,
    ));

    assert_eq!(result.alerts.len(), 1);
    let alert = &result.alerts[0];
    assert_eq!(alert.kind, AlertKind::SensitiveDimension);
    assert_eq!(alert.severity, AlertSeverity::Critical);
    assert!(alert.message.contains("Risco moderado"));
}

#[test]
fn all_critical_submission_orders_alerts_by_rule() {
    let engine = psychosocial_engine();
    let result = engine.evaluate(&responses_with_targets(&engine, &[], 5));

    assert_eq!(result.alerts.len(), 11);
    assert!(result.alerts[..9]
        .iter()
        .all(|alert| alert.kind == AlertKind::CriticalDimension));
    assert_eq!(
        result.alerts[0].dimension_id.as_deref(),
        Some("job_demands")
    );
    assert_eq!(result.alerts[9].kind, AlertKind::SensitiveDimension);

    let overall = &result.alerts[10];
    assert_eq!(overall.kind, AlertKind::OverallIndex);
    assert_eq!(overall.severity, AlertSeverity::Warning);
    assert_eq!(overall.dimension_id, None);
}

#[test]
fn low_risk_submission_raises_nothing() {
    let engine = psychosocial_engine();
    let result = engine.evaluate(&responses_with_targets(&engine, &[], 1));

    assert!(result.alerts.is_empty());
}

#[test]
fn unanswered_dimensions_are_reported_as_info() {
    let engine = psychosocial_engine();
    let demands = engine
        .catalog()
        .dimension("job_demands")
        .expect("job demands exists");
    let mut responses = ResponseSet::new();
    answer_dimension(&mut responses, demands, 3);

    let result = engine.evaluate(&responses);

    assert_eq!(result.alerts.len(), 8);
    assert!(result.alerts.iter().all(|alert| {
        alert.kind == AlertKind::MissingData && alert.severity == AlertSeverity::Info
    }));
    assert!(result
        .alerts
        .iter()
        .all(|alert| alert.dimension_id.as_deref() != Some("job_demands")));
}

#[test]
fn empty_submission_yields_a_single_missing_data_alert() {
    let engine = psychosocial_engine();
    let result = engine.evaluate(&ResponseSet::new());

    assert_eq!(result.alerts.len(), 1);
    assert_eq!(result.alerts[0].kind, AlertKind::MissingData);
    assert_eq!(result.alerts[0].dimension_id, None);
}

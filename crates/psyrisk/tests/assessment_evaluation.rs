use psyrisk::assessment::{
    AlertKind, AssessmentKind, AssessmentService, AssessmentStatus, EngineConfig, ResponseSet,
    RiskLevel, ValidationMode,
};

fn full_submission(service: &AssessmentService, kind: AssessmentKind, answer: i32) -> ResponseSet {
    let engine = service.engine(kind).expect("engine registered");
    engine
        .catalog()
        .dimensions()
        .iter()
        .flat_map(|dimension| dimension.items.iter().map(|item| (item.id, answer)))
        .collect()
}

#[test]
fn neutral_answers_land_in_the_middle_tiers() {
    let service = AssessmentService::new(EngineConfig::default()).expect("catalogs load");
    let responses = full_submission(&service, AssessmentKind::Psychosocial, 3);

    let result = service
        .evaluate(
            AssessmentKind::Psychosocial,
            &responses,
            ValidationMode::Strict,
        )
        .expect("valid submission");

    assert_eq!(result.status, AssessmentStatus::Complete);
    assert!(result
        .per_dimension()
        .iter()
        .all(|dimension| dimension.adjusted_mean == 3.0 && dimension.risk_level == RiskLevel::High));
    assert_eq!(result.composite.overall_index, 3.0);
    assert_eq!(result.composite.overall_classification_label, "Alto risco");
    assert_eq!(
        result
            .alerts
            .iter()
            .map(|alert| alert.kind)
            .collect::<Vec<_>>(),
        vec![AlertKind::SensitiveDimension]
    );
    assert!(!result.recommendations.is_empty());
    assert!(result.recommendations.len() <= 8);
}

#[test]
fn both_assessments_share_the_same_pipeline() {
    let service = AssessmentService::new(EngineConfig::default()).expect("catalogs load");

    for kind in AssessmentKind::ordered() {
        let result = service
            .evaluate(kind, &ResponseSet::new(), ValidationMode::Lenient)
            .expect("empty submission evaluates");
        assert_eq!(result.catalog_id, kind.slug());
        assert_eq!(result.status, AssessmentStatus::Insufficient);
        assert_eq!(result.composite.overall_risk_level, RiskLevel::Undefined);
        assert_eq!(result.recommendations.len(), 1);
    }
}

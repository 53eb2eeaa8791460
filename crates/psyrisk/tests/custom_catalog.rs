use psyrisk::assessment::{
    AlertKind, AssessmentDefinition, AssessmentEngine, CatalogError, DimensionCatalog,
    EngineConfig, Polarity, ResponseSet, RiskLevel,
};

const CATALOG: &str = r#"{
  "id": "team_climate",
  "title": "Team climate pulse",
  "sensitive_dimension": "conflict",
  "dimensions": [
    {
      "id": "workload",
      "display_name": "Workload",
      "polarity": "negative",
      "items": [
        { "id": 1, "text": "I cannot finish my work in normal hours." },
        { "id": 2, "text": "My workload is manageable.", "reverse_scored": true }
      ]
    },
    {
      "id": "cohesion",
      "display_name": "Cohesion",
      "polarity": "positive",
      "items": [
        { "id": 3, "text": "My team trusts each other." },
        { "id": 4, "text": "I feel part of the team." }
      ]
    },
    {
      "id": "conflict",
      "display_name": "Conflict",
      "polarity": "negative",
      "items": [
        { "id": 5, "text": "Arguments escalate in my team." }
      ]
    }
  ]
}"#;

fn engine() -> AssessmentEngine {
    let catalog = DimensionCatalog::from_json_reader(CATALOG.as_bytes()).expect("catalog parses");
    let definition = AssessmentDefinition::custom(catalog).expect("custom rules validate");
    AssessmentEngine::new(definition, EngineConfig::default())
}

#[test]
fn custom_catalog_loads_from_json() {
    let engine = engine();
    let catalog = engine.catalog();

    assert_eq!(catalog.id(), "team_climate");
    assert_eq!(catalog.dimensions().len(), 3);
    assert_eq!(catalog.item_count(), 5);
    assert_eq!(catalog.sensitive_dimension(), Some("conflict"));
    assert_eq!(
        catalog.dimension("cohesion").map(|dimension| dimension.polarity),
        Some(Polarity::Positive)
    );
    assert!(catalog.item(2).expect("item 2 exists").reverse_scored);
}

#[test]
fn custom_catalog_is_scored_with_the_default_rules() {
    let engine = engine();
    let responses: ResponseSet = [(1, 5), (2, 1), (3, 5), (4, 5), (5, 3)].into_iter().collect();

    let result = engine.evaluate(&responses);

    let workload = result.dimension("workload").expect("workload scored");
    assert_eq!(workload.adjusted_mean, 5.0);
    assert_eq!(workload.risk_level, RiskLevel::Critical);

    let cohesion = result.dimension("cohesion").expect("cohesion scored");
    assert_eq!(cohesion.adjusted_mean, 1.0);
    assert_eq!(cohesion.risk_level, RiskLevel::Low);

    let kinds: Vec<AlertKind> = result.alerts.iter().map(|alert| alert.kind).collect();
    assert_eq!(
        kinds,
        vec![AlertKind::CriticalDimension, AlertKind::SensitiveDimension]
    );
    assert!(result
        .recommendations
        .iter()
        .all(|entry| entry.source_dimension.is_none()));
}

#[test]
fn overlapping_items_are_rejected() {
    let overlapping = CATALOG.replace(r#"{ "id": 5,"#, r#"{ "id": 4,"#);

    match DimensionCatalog::from_json_reader(overlapping.as_bytes()) {
        Err(CatalogError::DuplicateItem {
            item_id,
            first,
            second,
        }) => {
            assert_eq!(item_id, 4);
            assert_eq!(first, "cohesion");
            assert_eq!(second, "conflict");
        }
        other => panic!("expected duplicate item, got {other:?}"),
    }
}

#[test]
fn malformed_json_is_reported() {
    assert!(matches!(
        DimensionCatalog::from_json_reader("{ \"id\": ".as_bytes()),
        Err(CatalogError::Json(_))
    ));
}

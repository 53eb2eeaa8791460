use super::common::*;
use crate::assessment::definitions::AssessmentKind;
use crate::assessment::engine::EngineConfig;
use crate::assessment::input::ResponseIssue;
use crate::assessment::service::{AssessmentService, AssessmentServiceError, ValidationMode};

fn service() -> AssessmentService {
    AssessmentService::new(EngineConfig::default()).expect("built-in catalogs load")
}

#[test]
fn strict_mode_rejects_malformed_submissions() {
    let service = service();
    let submission = responses(&[(1, 9), (2, 3), (500, 2)]);

    match service.evaluate(AssessmentKind::Psychosocial, &submission, ValidationMode::Strict) {
        Err(AssessmentServiceError::RejectedResponses(issues)) => {
            assert_eq!(
                issues,
                vec![
                    ResponseIssue::OutOfRange {
                        item_id: 1,
                        value: 9
                    },
                    ResponseIssue::UnknownItem {
                        item_id: 500,
                        value: 2
                    },
                ]
            );
        }
        other => panic!("expected rejected responses, got {other:?}"),
    }
}

#[test]
fn lenient_mode_scores_and_flags_malformed_answers() {
    let service = service();
    let submission = responses(&[(1, 9), (2, 3), (500, 2)]);

    let result = service
        .evaluate(
            AssessmentKind::Psychosocial,
            &submission,
            ValidationMode::Lenient,
        )
        .expect("lenient evaluation succeeds");

    assert_eq!(result.input_issues.len(), 2);
    let demands = result.dimension("job_demands").expect("job demands scored");
    assert_eq!(demands.answered_count, 1);
}

#[test]
fn resolves_kinds_by_slug_and_alias() {
    let service = service();

    assert_eq!(
        service.resolve("occupational-stress").expect("slug resolves"),
        AssessmentKind::OccupationalStress
    );
    assert_eq!(
        service.resolve("Psicossocial").expect("alias resolves"),
        AssessmentKind::Psychosocial
    );
    match service.resolve("burnout") {
        Err(AssessmentServiceError::UnknownAssessment(slug)) => assert_eq!(slug, "burnout"),
        other => panic!("expected unknown assessment, got {other:?}"),
    }
}

#[test]
fn registers_every_built_in_kind() {
    assert_eq!(service().kinds(), AssessmentKind::ordered().to_vec());
}

#[test]
fn summaries_describe_each_catalog() {
    let summaries = service().summaries();

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].kind, AssessmentKind::Psychosocial);
    assert_eq!(summaries[0].dimensions, 9);
    assert_eq!(summaries[0].items, 36);
    assert_eq!(summaries[1].kind, AssessmentKind::OccupationalStress);
    assert_eq!(summaries[1].dimensions, 3);
    assert_eq!(summaries[1].items, 14);
}

#[test]
fn catalog_round_trips_through_its_definition() {
    let service = service();
    let definition = service
        .catalog(AssessmentKind::Psychosocial)
        .expect("catalog exists");

    assert_eq!(
        definition.sensitive_dimension.as_deref(),
        Some("violence_harassment")
    );
    assert!(definition
        .dimensions
        .iter()
        .any(|dimension| dimension.items.iter().any(|item| item.reverse_scored)));
}

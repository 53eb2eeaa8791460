use crate::infra::{load_responses, AssessmentReport};
use clap::{Args, ValueEnum};
use psyrisk::assessment::{
    AssessmentDefinition, AssessmentEngine, AssessmentKind, AssessmentService,
    AssessmentServiceError, DimensionCatalog, IssueResolution, ResponseSet, ValidationMode,
};
use psyrisk::config::AppConfig;
use psyrisk::error::AppError;
use psyrisk::telemetry::{self, LogTarget};
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Built-in assessment to score (psychosocial, occupational_stress)
    #[arg(long, default_value = "psychosocial")]
    pub(crate) kind: String,
    /// Responses file: a JSON object of item id to answer, or an item_id,value CSV
    #[arg(long)]
    pub(crate) responses: PathBuf,
    /// Custom catalog definition (JSON); takes precedence over --kind
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
    /// Reject the file when any answer is unknown or off the 1-5 scale
    #[arg(long)]
    pub(crate) strict: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Limit the demo to one assessment
    #[arg(long)]
    pub(crate) kind: Option<String>,
    /// Print JSON reports instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init_with_target(&config.telemetry, LogTarget::Stderr)?;

    let engine = match &args.catalog {
        Some(path) => {
            let catalog = DimensionCatalog::from_json_path(path)?;
            AssessmentEngine::new(AssessmentDefinition::custom(catalog)?, config.engine)
        }
        None => {
            let kind = AssessmentKind::parse(&args.kind)
                .ok_or_else(|| AssessmentServiceError::UnknownAssessment(args.kind.clone()))?;
            AssessmentEngine::for_kind(kind, config.engine)?
        }
    };

    let responses = load_responses(&args.responses)?;
    if args.strict {
        if let Err(issues) = responses.validate(engine.catalog()) {
            for issue in &issues {
                eprintln!("  - {issue}");
            }
            return Err(AssessmentServiceError::RejectedResponses(issues).into());
        }
    }

    let report = AssessmentReport::new(engine.catalog().title(), engine.evaluate(&responses));
    print_report(&report, args.format)
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init_with_target(&config.telemetry, LogTarget::Stderr)?;

    let service = AssessmentService::new(config.engine)?;
    let kinds = match &args.kind {
        Some(slug) => vec![service.resolve(slug)?],
        None => service.kinds(),
    };
    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    for (position, kind) in kinds.into_iter().enumerate() {
        let engine = service.engine(kind)?;
        let responses = sample_responses(engine.catalog());
        let result = service.evaluate(kind, &responses, ValidationMode::Lenient)?;

        if position > 0 {
            println!();
        }
        print_report(
            &AssessmentReport::new(engine.catalog().title(), result),
            format,
        )?;
    }

    Ok(())
}

fn print_report(report: &AssessmentReport, format: OutputFormat) -> Result<(), AppError> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Text => println!("{}", render_text(report)),
    }
    Ok(())
}

pub(crate) fn render_text(report: &AssessmentReport) -> String {
    let result = &report.result;
    let composite = &result.composite;
    let mut lines = vec![
        format!("{} ({})", report.title, result.catalog_id),
        format!("Evaluated at: {}", report.evaluated_at.to_rfc3339()),
        format!("Status: {}", result.status.label()),
        format!(
            "Overall index: {:.2} -> {}",
            composite.overall_index, composite.overall_classification_label
        ),
        "Dimensions:".to_string(),
    ];

    for dimension in result.per_dimension() {
        if dimension.is_answered() {
            lines.push(format!(
                "  - {}: {:.2} {} ({}/{} answered, p{:.0})",
                dimension.display_name,
                dimension.adjusted_mean,
                dimension.classification_label,
                dimension.answered_count,
                dimension.item_count,
                dimension.percentile
            ));
        } else {
            lines.push(format!(
                "  - {}: {}",
                dimension.display_name, dimension.classification_label
            ));
        }
    }

    if result.alerts.is_empty() {
        lines.push("Alerts: none".to_string());
    } else {
        lines.push("Alerts:".to_string());
        for alert in &result.alerts {
            lines.push(format!("  - [{}] {}", alert.severity.label(), alert.message));
        }
    }

    lines.push("Recommendations:".to_string());
    for (index, recommendation) in result.recommendations.iter().enumerate() {
        lines.push(format!(
            "  {}. [{}] {}",
            index + 1,
            recommendation.priority.label(),
            recommendation.text
        ));
    }

    if !result.input_issues.is_empty() {
        lines.push("Flagged responses:".to_string());
        for flagged in &result.input_issues {
            let action = match flagged.resolution {
                IssueResolution::Discarded => "discarded".to_string(),
                IssueResolution::Clamped { value } => format!("clamped to {value}"),
            };
            lines.push(format!("  - {} ({action})", flagged.issue));
        }
    }

    lines.join("\n")
}

/// A consistent respondent: one baseline per dimension, mirrored on reverse-scored items.
/// The last item is left blank and one answer is off the scale so the demo shows partial
/// coverage and flagged input.
fn sample_responses(catalog: &DimensionCatalog) -> ResponseSet {
    const BASELINES: [i32; 5] = [4, 2, 3, 2, 5];

    let mut responses = ResponseSet::new();
    for (position, dimension) in catalog.dimensions().iter().enumerate() {
        let baseline = BASELINES[position % BASELINES.len()];
        for item in &dimension.items {
            let answer = if item.reverse_scored {
                6 - baseline
            } else {
                baseline
            };
            responses.insert(item.id, answer);
        }
    }

    let item_ids: Vec<u32> = catalog
        .dimensions()
        .iter()
        .flat_map(|dimension| dimension.item_ids())
        .collect();
    if let [first, .., last] = item_ids.as_slice() {
        responses.insert(*first, 7);
        responses.remove(*last);
    }

    responses
}

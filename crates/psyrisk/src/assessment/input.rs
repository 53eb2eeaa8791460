use serde::{Deserialize, Serialize};
use tracing::warn;

use super::catalog::DimensionCatalog;
use super::domain::{ResponseSet, LIKERT_MAX, LIKERT_MIN};

/// A submitted answer the engine could not use as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum ResponseIssue {
    #[error("item {item_id} is not part of the catalog")]
    UnknownItem { item_id: u32, value: i32 },
    #[error("item {item_id} has value {value}, expected 1..=5")]
    OutOfRange { item_id: u32, value: i32 },
}

impl ResponseIssue {
    pub fn item_id(&self) -> u32 {
        match self {
            Self::UnknownItem { item_id, .. } | Self::OutOfRange { item_id, .. } => *item_id,
        }
    }
}

/// What the engine does with an out-of-range answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputPolicy {
    /// Leave the answer out, as if the item were unanswered.
    #[default]
    Discard,
    /// Pull the answer onto the nearest scale bound.
    Clamp,
}

impl InputPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "discard" | "drop" => Some(Self::Discard),
            "clamp" => Some(Self::Clamp),
            _ => None,
        }
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::Discard => "discard",
            Self::Clamp => "clamp",
        }
    }
}

/// How a flagged answer was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum IssueResolution {
    Discarded,
    Clamped { value: i32 },
}

/// Issue recorded in an evaluation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlaggedResponse {
    #[serde(flatten)]
    pub issue: ResponseIssue,
    pub resolution: IssueResolution,
}

impl ResponseSet {
    /// Strict boundary check: every answer must belong to the catalog and lie on the scale.
    pub fn validate(&self, catalog: &DimensionCatalog) -> Result<(), Vec<ResponseIssue>> {
        let issues: Vec<ResponseIssue> = self
            .iter()
            .filter_map(|(item_id, value)| inspect(catalog, item_id, value))
            .collect();

        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }
}

fn inspect(catalog: &DimensionCatalog, item_id: u32, value: i32) -> Option<ResponseIssue> {
    if !catalog.contains_item(item_id) {
        Some(ResponseIssue::UnknownItem { item_id, value })
    } else if !(LIKERT_MIN..=LIKERT_MAX).contains(&value) {
        Some(ResponseIssue::OutOfRange { item_id, value })
    } else {
        None
    }
}

/// Produces the answers the engine scores plus a record of everything it had to change.
pub(crate) fn sanitize(
    responses: &ResponseSet,
    catalog: &DimensionCatalog,
    policy: InputPolicy,
) -> (ResponseSet, Vec<FlaggedResponse>) {
    let mut accepted = ResponseSet::new();
    let mut flagged = Vec::new();

    for (item_id, value) in responses.iter() {
        let Some(issue) = inspect(catalog, item_id, value) else {
            accepted.insert(item_id, value);
            continue;
        };

        let resolution = match (&issue, policy) {
            (ResponseIssue::OutOfRange { .. }, InputPolicy::Clamp) => {
                let clamped = value.clamp(LIKERT_MIN, LIKERT_MAX);
                accepted.insert(item_id, clamped);
                IssueResolution::Clamped { value: clamped }
            }
            _ => IssueResolution::Discarded,
        };

        warn!(
            item_id,
            value,
            policy = policy.slug(),
            catalog = catalog.id(),
            "malformed response: {issue}"
        );
        flagged.push(FlaggedResponse { issue, resolution });
    }

    (accepted, flagged)
}

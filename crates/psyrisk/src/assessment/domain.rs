use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Lowest answer on the Likert scale used by every catalog.
pub const LIKERT_MIN: i32 = 1;
/// Highest answer on the Likert scale used by every catalog.
pub const LIKERT_MAX: i32 = 5;

/// A single survey statement belonging to exactly one dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub id: u32,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub reverse_scored: bool,
}

impl ItemDefinition {
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            reverse_scored: false,
        }
    }

    pub fn reversed(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            reverse_scored: true,
        }
    }
}

/// Direction in which a high raw mean points for a dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    /// High agreement is protective (e.g. autonomy, support).
    Positive,
    /// High agreement is harmful (e.g. demands, conflict).
    Negative,
}

/// A named construct grouping related survey items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    pub id: String,
    pub display_name: String,
    pub polarity: Polarity,
    pub items: Vec<ItemDefinition>,
}

impl Dimension {
    pub fn item_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.items.iter().map(|item| item.id)
    }
}

/// Raw answers for one submission, keyed by item id.
///
/// Values are kept exactly as submitted so malformed answers can be flagged instead of
/// disappearing during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseSet(BTreeMap<u32, i32>);

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, item_id: u32, value: i32) -> Option<i32> {
        self.0.insert(item_id, value)
    }

    pub fn remove(&mut self, item_id: u32) -> Option<i32> {
        self.0.remove(&item_id)
    }

    pub fn get(&self, item_id: u32) -> Option<i32> {
        self.0.get(&item_id).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, i32)> + '_ {
        self.0.iter().map(|(id, value)| (*id, *value))
    }
}

impl FromIterator<(u32, i32)> for ResponseSet {
    fn from_iter<I: IntoIterator<Item = (u32, i32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<BTreeMap<u32, i32>> for ResponseSet {
    fn from(value: BTreeMap<u32, i32>) -> Self {
        Self(value)
    }
}

/// Ordinal risk tiers plus the sentinel used when a score has no data behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
    /// No answered items; never treated as a real tier.
    Undefined,
}

impl RiskLevel {
    pub const fn ordered() -> [Self; 4] {
        [Self::Low, Self::Moderate, Self::High, Self::Critical]
    }

    /// Ordinal rank of a defined tier, `None` for [`RiskLevel::Undefined`].
    pub const fn rank(self) -> Option<u8> {
        match self {
            Self::Low => Some(0),
            Self::Moderate => Some(1),
            Self::High => Some(2),
            Self::Critical => Some(3),
            Self::Undefined => None,
        }
    }

    pub const fn is_defined(self) -> bool {
        !matches!(self, Self::Undefined)
    }

    pub const fn is_above_low(self) -> bool {
        matches!(self, Self::Moderate | Self::High | Self::Critical)
    }

    pub const fn is_high_or_critical(self) -> bool {
        matches!(self, Self::High | Self::Critical)
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Critical => "critical",
            Self::Undefined => "undefined",
        }
    }
}

/// Per-dimension outcome of one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionResult {
    pub dimension_id: String,
    pub display_name: String,
    /// Mean of the answers exactly as given.
    pub raw_mean: f64,
    /// Mean after reverse-scored items are inverted, in the dimension's own orientation.
    pub scored_mean: f64,
    /// Risk-oriented mean: higher always means more risk.
    pub adjusted_mean: f64,
    pub answered_count: usize,
    pub item_count: usize,
    pub completeness: f64,
    pub risk_level: RiskLevel,
    pub classification_label: String,
    /// Position of `adjusted_mean` on the 1..=5 scale, as 0..=100.
    pub percentile: f64,
}

impl DimensionResult {
    pub fn is_answered(&self) -> bool {
        self.answered_count > 0
    }
}

/// Weighted overall index together with the per-dimension results that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeResult {
    pub overall_index: f64,
    pub overall_risk_level: RiskLevel,
    pub overall_classification_label: String,
    pub per_dimension: Vec<DimensionResult>,
}

impl CompositeResult {
    pub fn dimension(&self, dimension_id: &str) -> Option<&DimensionResult> {
        self.per_dimension
            .iter()
            .find(|result| result.dimension_id == dimension_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    Info,
    Warning,
    Critical,
}

impl AlertSeverity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Warning => "Warning",
            Self::Critical => "Critical",
        }
    }
}

/// Rule that produced an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    CriticalDimension,
    SensitiveDimension,
    OverallIndex,
    MissingData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub kind: AlertKind,
    pub severity: AlertSeverity,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationPriority {
    High,
    Medium,
    Low,
}

impl RecommendationPriority {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub text: String,
    pub priority: RecommendationPriority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_dimension: Option<String>,
}

/// How much of the catalog the submission covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStatus {
    /// Every item of every dimension was answered.
    Complete,
    /// At least one dimension was scored but some items are missing.
    Partial,
    /// Nothing could be scored.
    Insufficient,
}

impl AssessmentStatus {
    pub fn from_results(results: &[DimensionResult]) -> Self {
        if results.iter().all(|result| !result.is_answered()) {
            Self::Insufficient
        } else if results
            .iter()
            .all(|result| result.answered_count == result.item_count)
        {
            Self::Complete
        } else {
            Self::Partial
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::Partial => "partial",
            Self::Insufficient => "insufficient",
        }
    }
}

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::domain::{CompositeResult, Recommendation, RecommendationPriority, RiskLevel};

/// Default maximum number of recommendations returned per evaluation.
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 8;

/// One entry of a recommendation table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRule {
    pub text: String,
    pub priority: RecommendationPriority,
}

impl RecommendationRule {
    pub fn new(text: &str, priority: RecommendationPriority) -> Self {
        Self {
            text: text.to_string(),
            priority,
        }
    }
}

/// Lookup tables keyed by overall tier and by `(dimension, tier)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationTables {
    overall: HashMap<RiskLevel, Vec<RecommendationRule>>,
    per_dimension: HashMap<String, HashMap<RiskLevel, Vec<RecommendationRule>>>,
    fallback: RecommendationRule,
}

impl Default for RecommendationTables {
    fn default() -> Self {
        Self {
            overall: HashMap::new(),
            per_dimension: HashMap::new(),
            fallback: RecommendationRule::new(
                "Dados insuficientes para gerar recomendações; conclua a avaliação para obter um plano de ação",
                RecommendationPriority::Low,
            ),
        }
    }
}

impl RecommendationTables {
    pub fn with_overall(
        mut self,
        level: RiskLevel,
        priority: RecommendationPriority,
        texts: &[&str],
    ) -> Self {
        self.overall
            .entry(level)
            .or_default()
            .extend(texts.iter().map(|text| RecommendationRule::new(text, priority)));
        self
    }

    pub fn with_dimension(
        mut self,
        dimension_id: &str,
        level: RiskLevel,
        priority: RecommendationPriority,
        texts: &[&str],
    ) -> Self {
        self.per_dimension
            .entry(dimension_id.to_string())
            .or_default()
            .entry(level)
            .or_default()
            .extend(texts.iter().map(|text| RecommendationRule::new(text, priority)));
        self
    }

    pub fn overall(&self, level: RiskLevel) -> &[RecommendationRule] {
        self.overall.get(&level).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn for_dimension(&self, dimension_id: &str, level: RiskLevel) -> &[RecommendationRule] {
        self.per_dimension
            .get(dimension_id)
            .and_then(|levels| levels.get(&level))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn dimension_ids(&self) -> impl Iterator<Item = &str> {
        self.per_dimension.keys().map(String::as_str)
    }

    pub fn fallback(&self) -> &RecommendationRule {
        &self.fallback
    }
}

/// Builds the recommendation list for a composite result.
///
/// Overall-tier rules come first, then rules for each High/Critical dimension in catalog
/// order. Repeated texts keep their first occurrence and the list is cut at `limit` from
/// the tail. The fallback entry is returned when nothing matches.
pub fn recommend(
    composite: &CompositeResult,
    tables: &RecommendationTables,
    limit: usize,
) -> Vec<Recommendation> {
    let limit = limit.max(1);
    let mut seen: HashSet<&str> = HashSet::new();
    let mut recommendations = Vec::new();

    let overall = tables
        .overall(composite.overall_risk_level)
        .iter()
        .map(|rule| (rule, None));
    let per_dimension = composite
        .per_dimension
        .iter()
        .filter(|result| result.risk_level.is_high_or_critical())
        .flat_map(|result| {
            tables
                .for_dimension(&result.dimension_id, result.risk_level)
                .iter()
                .map(move |rule| (rule, Some(result.dimension_id.as_str())))
        });

    for (rule, source) in overall.chain(per_dimension) {
        if recommendations.len() == limit {
            break;
        }
        if !seen.insert(rule.text.as_str()) {
            continue;
        }
        recommendations.push(Recommendation {
            text: rule.text.clone(),
            priority: rule.priority,
            source_dimension: source.map(str::to_string),
        });
    }

    if recommendations.is_empty() {
        recommendations.push(Recommendation {
            text: tables.fallback.text.clone(),
            priority: tables.fallback.priority,
            source_dimension: None,
        });
    }

    recommendations
}

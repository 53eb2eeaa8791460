mod occupational_stress;
mod psychosocial;

use serde::{Deserialize, Serialize};

use super::catalog::{CatalogDefinition, CatalogError, DimensionCatalog};
use super::domain::{Dimension, ItemDefinition, Polarity};
use super::rules::RuleTables;

/// Built-in assessment types shipped with the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentKind {
    Psychosocial,
    OccupationalStress,
}

impl AssessmentKind {
    pub const fn ordered() -> [Self; 2] {
        [Self::Psychosocial, Self::OccupationalStress]
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::Psychosocial => "psychosocial",
            Self::OccupationalStress => "occupational_stress",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Psychosocial => "Avaliação de Riscos Psicossociais",
            Self::OccupationalStress => "Escala de Estresse Ocupacional",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "psychosocial" | "psicossocial" => Some(Self::Psychosocial),
            "occupational_stress" | "stress" | "estresse" => Some(Self::OccupationalStress),
            _ => None,
        }
    }

    /// Validated catalog and rule tables for this assessment type.
    pub fn definition(self) -> Result<AssessmentDefinition, CatalogError> {
        let (catalog, rules) = match self {
            Self::Psychosocial => (psychosocial::catalog(), psychosocial::rules()),
            Self::OccupationalStress => {
                (occupational_stress::catalog(), occupational_stress::rules())
            }
        };
        AssessmentDefinition::new(DimensionCatalog::new(catalog)?, rules)
    }
}

/// A catalog together with the rule tables it is evaluated with.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentDefinition {
    catalog: DimensionCatalog,
    rules: RuleTables,
}

impl AssessmentDefinition {
    pub fn new(catalog: DimensionCatalog, rules: RuleTables) -> Result<Self, CatalogError> {
        rules.validate(&catalog)?;
        Ok(Self { catalog, rules })
    }

    /// Custom catalogs reuse the psychosocial overall tables without per-dimension rules.
    pub fn custom(catalog: DimensionCatalog) -> Result<Self, CatalogError> {
        Self::new(catalog, psychosocial::overall_rules())
    }

    pub fn catalog(&self) -> &DimensionCatalog {
        &self.catalog
    }

    pub fn rules(&self) -> &RuleTables {
        &self.rules
    }

    pub fn into_parts(self) -> (DimensionCatalog, RuleTables) {
        (self.catalog, self.rules)
    }
}

fn dimension(
    id: &str,
    display_name: &str,
    polarity: Polarity,
    items: &[(u32, bool, &str)],
) -> Dimension {
    Dimension {
        id: id.to_string(),
        display_name: display_name.to_string(),
        polarity,
        items: items
            .iter()
            .map(|(item_id, reverse_scored, text)| ItemDefinition {
                id: *item_id,
                text: text.to_string(),
                reverse_scored: *reverse_scored,
            })
            .collect(),
    }
}

fn definition(
    kind: AssessmentKind,
    sensitive_dimension: Option<&str>,
    dimensions: Vec<Dimension>,
) -> CatalogDefinition {
    CatalogDefinition {
        id: kind.slug().to_string(),
        title: kind.title().to_string(),
        sensitive_dimension: sensitive_dimension.map(str::to_string),
        dimensions,
    }
}

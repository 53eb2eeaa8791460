use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::domain::{Dimension, ItemDefinition};

/// Inconsistencies detected while building a catalog or its rule tables.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog id must not be empty")]
    MissingId,
    #[error("catalog '{catalog}' defines no dimensions")]
    NoDimensions { catalog: String },
    #[error("dimension id '{0}' is defined more than once")]
    DuplicateDimension(String),
    #[error("dimension '{0}' has no items")]
    EmptyDimension(String),
    #[error("item {item_id} is assigned to both '{first}' and '{second}'")]
    DuplicateItem {
        item_id: u32,
        first: String,
        second: String,
    },
    #[error("sensitive dimension '{0}' is not part of the catalog")]
    UnknownSensitiveDimension(String),
    #[error("rule tables reference unknown dimension '{0}'")]
    UnknownRuleDimension(String),
    #[error("classification thresholds must be finite and strictly increasing")]
    InvalidThresholds,
    #[error("risk weights must be finite and greater than zero")]
    InvalidWeights,
    #[error("overall index alert threshold must be finite")]
    InvalidAlertThreshold,
    #[error("failed to read catalog definition: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog definition: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialized shape of a catalog, as accepted from JSON files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDefinition {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitive_dimension: Option<String>,
    pub dimensions: Vec<Dimension>,
}

/// Validated, read-only set of dimensions for one assessment type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimensionCatalog {
    id: String,
    title: String,
    sensitive_dimension: Option<String>,
    dimensions: Vec<Dimension>,
    #[serde(skip)]
    item_index: HashMap<u32, usize>,
}

impl DimensionCatalog {
    pub fn new(definition: CatalogDefinition) -> Result<Self, CatalogError> {
        let CatalogDefinition {
            id,
            title,
            sensitive_dimension,
            dimensions,
        } = definition;

        if id.trim().is_empty() {
            return Err(CatalogError::MissingId);
        }
        if dimensions.is_empty() {
            return Err(CatalogError::NoDimensions { catalog: id });
        }

        let mut dimension_ids = HashSet::new();
        let mut item_index: HashMap<u32, usize> = HashMap::new();
        for (position, dimension) in dimensions.iter().enumerate() {
            if !dimension_ids.insert(dimension.id.as_str()) {
                return Err(CatalogError::DuplicateDimension(dimension.id.clone()));
            }
            if dimension.items.is_empty() {
                return Err(CatalogError::EmptyDimension(dimension.id.clone()));
            }
            for item in &dimension.items {
                if let Some(previous) = item_index.insert(item.id, position) {
                    return Err(CatalogError::DuplicateItem {
                        item_id: item.id,
                        first: dimensions[previous].id.clone(),
                        second: dimension.id.clone(),
                    });
                }
            }
        }

        if let Some(sensitive) = &sensitive_dimension {
            if !dimension_ids.contains(sensitive.as_str()) {
                return Err(CatalogError::UnknownSensitiveDimension(sensitive.clone()));
            }
        }

        let title = if title.trim().is_empty() {
            id.clone()
        } else {
            title
        };

        Ok(Self {
            id,
            title,
            sensitive_dimension,
            dimensions,
            item_index,
        })
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let definition: CatalogDefinition = serde_json::from_reader(reader)?;
        Self::new(definition)
    }

    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    pub fn dimension(&self, dimension_id: &str) -> Option<&Dimension> {
        self.dimensions
            .iter()
            .find(|dimension| dimension.id == dimension_id)
    }

    pub fn sensitive_dimension(&self) -> Option<&str> {
        self.sensitive_dimension.as_deref()
    }

    pub fn contains_item(&self, item_id: u32) -> bool {
        self.item_index.contains_key(&item_id)
    }

    /// Dimension that owns an item, if any.
    pub fn dimension_of(&self, item_id: u32) -> Option<&Dimension> {
        self.item_index
            .get(&item_id)
            .map(|position| &self.dimensions[*position])
    }

    pub fn item(&self, item_id: u32) -> Option<&ItemDefinition> {
        self.dimension_of(item_id)
            .and_then(|dimension| dimension.items.iter().find(|item| item.id == item_id))
    }

    pub fn item_count(&self) -> usize {
        self.item_index.len()
    }

    pub fn to_definition(&self) -> CatalogDefinition {
        CatalogDefinition {
            id: self.id.clone(),
            title: self.title.clone(),
            sensitive_dimension: self.sensitive_dimension.clone(),
            dimensions: self.dimensions.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::domain::Polarity;

    fn dimension(id: &str, item_ids: &[u32]) -> Dimension {
        Dimension {
            id: id.to_string(),
            display_name: id.to_uppercase(),
            polarity: Polarity::Negative,
            items: item_ids
                .iter()
                .map(|item_id| ItemDefinition::new(*item_id, format!("item {item_id}")))
                .collect(),
        }
    }

    fn definition(dimensions: Vec<Dimension>) -> CatalogDefinition {
        CatalogDefinition {
            id: "test".to_string(),
            title: String::new(),
            sensitive_dimension: None,
            dimensions,
        }
    }

    #[test]
    fn rejects_item_shared_between_dimensions() {
        let result = DimensionCatalog::new(definition(vec![
            dimension("demands", &[1, 2]),
            dimension("support", &[2, 3]),
        ]));

        match result {
            Err(CatalogError::DuplicateItem {
                item_id,
                first,
                second,
            }) => {
                assert_eq!(item_id, 2);
                assert_eq!(first, "demands");
                assert_eq!(second, "support");
            }
            other => panic!("expected duplicate item error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_duplicate_and_empty_dimensions() {
        assert!(matches!(
            DimensionCatalog::new(definition(vec![
                dimension("demands", &[1]),
                dimension("demands", &[2]),
            ])),
            Err(CatalogError::DuplicateDimension(id)) if id == "demands"
        ));
        assert!(matches!(
            DimensionCatalog::new(definition(vec![dimension("demands", &[])])),
            Err(CatalogError::EmptyDimension(id)) if id == "demands"
        ));
        assert!(matches!(
            DimensionCatalog::new(definition(Vec::new())),
            Err(CatalogError::NoDimensions { .. })
        ));
    }

    #[test]
    fn rejects_unknown_sensitive_dimension() {
        let mut definition = definition(vec![dimension("demands", &[1])]);
        definition.sensitive_dimension = Some("violence".to_string());

        assert!(matches!(
            DimensionCatalog::new(definition),
            Err(CatalogError::UnknownSensitiveDimension(id)) if id == "violence"
        ));
    }

    #[test]
    fn indexes_items_by_owning_dimension() {
        let catalog = DimensionCatalog::new(definition(vec![
            dimension("demands", &[1, 2]),
            dimension("support", &[3]),
        ]))
        .expect("catalog builds");

        assert_eq!(catalog.title(), "test");
        assert_eq!(catalog.item_count(), 3);
        assert_eq!(
            catalog.dimension_of(3).map(|dimension| dimension.id.as_str()),
            Some("support")
        );
        assert!(catalog.item(2).is_some());
        assert!(!catalog.contains_item(99));
    }

    #[test]
    fn loads_definition_from_json() {
        let json = r#"{
            "id": "custom",
            "title": "Custom survey",
            "sensitive_dimension": "harassment",
            "dimensions": [
                {
                    "id": "harassment",
                    "display_name": "Harassment",
                    "polarity": "negative",
                    "items": [{ "id": 10 }, { "id": 11, "reverse_scored": true }]
                }
            ]
        }"#;

        let catalog = DimensionCatalog::from_json_reader(json.as_bytes()).expect("json loads");

        assert_eq!(catalog.id(), "custom");
        assert_eq!(catalog.sensitive_dimension(), Some("harassment"));
        assert!(catalog.item(11).expect("item present").reverse_scored);
        assert!(!catalog.item(10).expect("item present").reverse_scored);
    }
}

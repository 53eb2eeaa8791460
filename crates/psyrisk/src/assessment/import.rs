use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::domain::ResponseSet;

#[derive(Debug, thiserror::Error)]
pub enum ResponseImportError {
    #[error("failed to read response export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid response CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: item id '{value}' is not a non-negative integer")]
    InvalidItemId { row: usize, value: String },
    #[error("row {row}: answer '{value}' for item {item_id} is not an integer")]
    InvalidValue {
        row: usize,
        item_id: u32,
        value: String,
    },
    #[error("row {row}: item {item_id} was answered more than once")]
    DuplicateItem { row: usize, item_id: u32 },
}

/// Reads `item_id,value` exports into a [`ResponseSet`].
///
/// Blank answers are treated as unanswered. Integers outside the Likert scale are kept so
/// the engine can flag them.
pub struct ResponseImporter;

impl ResponseImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<ResponseSet, ResponseImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<ResponseSet, ResponseImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut responses = ResponseSet::new();
        let mut seen = HashSet::new();

        for (index, record) in csv_reader.deserialize::<ResponseRow>().enumerate() {
            let row = index + 1;
            let ResponseRow { item_id, value } = record?;

            let item_id = item_id
                .parse::<u32>()
                .map_err(|_| ResponseImportError::InvalidItemId {
                    row,
                    value: item_id.clone(),
                })?;

            if !seen.insert(item_id) {
                return Err(ResponseImportError::DuplicateItem { row, item_id });
            }

            let Some(value) = value.filter(|value| !value.is_empty()) else {
                continue;
            };
            let value = value
                .parse::<i32>()
                .map_err(|_| ResponseImportError::InvalidValue {
                    row,
                    item_id,
                    value: value.clone(),
                })?;

            responses.insert(item_id, value);
        }

        Ok(responses)
    }
}

#[derive(Debug, Deserialize)]
struct ResponseRow {
    #[serde(alias = "item", alias = "Item ID")]
    item_id: String,
    #[serde(default, alias = "answer", alias = "Value")]
    value: Option<String>,
}

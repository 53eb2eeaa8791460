use chrono::{DateTime, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use psyrisk::assessment::{EngineResult, ResponseImporter, ResponseSet};
use psyrisk::error::AppError;
use serde::Serialize;
use std::io::BufReader;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Evaluation result stamped with the catalog title and the time it was produced.
#[derive(Debug, Serialize)]
pub(crate) struct AssessmentReport {
    pub(crate) title: String,
    pub(crate) evaluated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub(crate) result: EngineResult,
}

impl AssessmentReport {
    pub(crate) fn new(title: &str, result: EngineResult) -> Self {
        Self {
            title: title.to_string(),
            evaluated_at: Utc::now(),
            result,
        }
    }
}

/// `.csv` files go through the CSV importer; anything else is read as a JSON object of
/// item id to answer.
pub(crate) fn load_responses(path: &Path) -> Result<ResponseSet, AppError> {
    let is_csv = path
        .extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| extension.eq_ignore_ascii_case("csv"));

    if is_csv {
        return Ok(ResponseImporter::from_path(path)?);
    }

    let file = std::fs::File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("psyrisk-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).expect("write scratch file");
        path
    }

    #[test]
    fn loads_json_and_csv_responses() {
        let json = scratch_file("answers.json", r#"{ "1": 4, "2": 2 }"#);
        let csv = scratch_file("answers.csv", "item_id,value\n1,4\n2,2\n");

        let from_json = load_responses(&json).expect("json loads");
        let from_csv = load_responses(&csv).expect("csv loads");

        assert_eq!(from_json, from_csv);
        assert_eq!(from_json.get(1), Some(4));

        std::fs::remove_file(json).ok();
        std::fs::remove_file(csv).ok();
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let path = scratch_file("broken.json", "{ \"1\": \"often\" }");

        match load_responses(&path) {
            Err(AppError::Serialization(_)) => {}
            other => panic!("expected serialization error, got {other:?}"),
        }

        std::fs::remove_file(path).ok();
    }
}

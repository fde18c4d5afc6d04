use crate::domain::models::FrameworkReport;
use std::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("failed to read results file {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("results file is neither a report list nor a single report: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Decode a results artifact. Older artifacts hold a single report object,
/// newer ones a list; the list shape is tried first, and when neither matches
/// the object-shape error is the one surfaced. All-or-nothing: no partial
/// report list is ever returned.
pub fn parse_reports(bytes: &[u8]) -> Result<Vec<FrameworkReport>, ResultsError> {
    match serde_json::from_slice::<Vec<FrameworkReport>>(bytes) {
        Ok(reports) => Ok(reports),
        Err(_) => match serde_json::from_slice::<FrameworkReport>(bytes) {
            Ok(report) => Ok(vec![report]),
            Err(err) => Err(ResultsError::Decode(err)),
        },
    }
}

pub fn load_reports(path: &Path) -> Result<Vec<FrameworkReport>, ResultsError> {
    let bytes = std::fs::read(path).map_err(|source| ResultsError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_reports(&bytes)
}

use crate::domain::models::ScanConfig;
use std::path::Path;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("input source not found: {0}")]
    NotFound(String),
}

fn is_url(pattern: &str) -> bool {
    pattern.starts_with("http://") || pattern.starts_with("https://")
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(|c| matches!(c, '*' | '?' | '['))
}

/// Record extra positional arguments as input sources. `-` (stdin), URLs and
/// glob patterns are carried verbatim for the expansion layer; a plain path
/// must exist. A failed check leaves the configuration untouched.
pub fn set_input_patterns(cfg: &mut ScanConfig, patterns: &[String]) -> Result<(), InputError> {
    for pattern in patterns {
        if pattern == "-" || is_url(pattern) || is_glob(pattern) {
            continue;
        }
        if !Path::new(pattern).exists() {
            return Err(InputError::NotFound(pattern.clone()));
        }
    }
    cfg.input_patterns = patterns.to_vec();
    Ok(())
}

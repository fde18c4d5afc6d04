use crate::cli::OutputFormat;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    Framework,
    Control,
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PolicyKind::Framework => "framework",
            PolicyKind::Control => "control",
        })
    }
}

/// One scan target. The first identifier in a configuration is the primary
/// target; insertion order is preserved all the way to the evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyIdentifier {
    pub kind: PolicyKind,
    pub name: String,
}

impl PolicyIdentifier {
    pub fn new(kind: PolicyKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}

/// Namespace restriction for a scan. Include and Exclude are mutually
/// exclusive by construction; the namespace lists keep the raw CSV segments,
/// empty ones included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "namespaces", rename_all = "lowercase")]
pub enum NamespaceFilter {
    None,
    Include(Vec<String>),
    Exclude(Vec<String>),
}

impl NamespaceFilter {
    /// Build the filter from the two CLI flags. Both being set is a user
    /// input error, not a precedence question.
    pub fn from_flags(include_csv: &str, exclude_csv: &str) -> Result<Self, ConfigError> {
        match (include_csv.is_empty(), exclude_csv.is_empty()) {
            (true, true) => Ok(NamespaceFilter::None),
            (false, true) => Ok(NamespaceFilter::Include(split_namespaces(include_csv))),
            (true, false) => Ok(NamespaceFilter::Exclude(split_namespaces(exclude_csv))),
            (false, false) => Err(ConfigError::NamespaceFilterConflict),
        }
    }
}

// No trimming: segment sanitizing is the caller's job.
fn split_namespaces(csv: &str) -> Vec<String> {
    csv.split(',').map(str::to_string).collect()
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputOptions {
    pub format: OutputFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BehaviorFlags {
    pub submit: bool,
    pub keep_local: bool,
    pub silent: bool,
    pub fail_threshold: u16,
    pub use_from: Vec<PathBuf>,
    pub use_default: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exceptions: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controls_config: Option<PathBuf>,
}

/// The canonical scan configuration handed to the evaluation pipeline.
/// Built once per invocation during resolution, read-only afterwards.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanConfig {
    pub policies: Vec<PolicyIdentifier>,
    pub scan_all: bool,
    pub namespace_filter: NamespaceFilter,
    pub input_patterns: Vec<String>,
    pub output: OutputOptions,
    pub behavior: BehaviorFlags,
}

impl ScanConfig {
    /// Flag-consistency checks that must pass before any cluster interaction
    /// or policy evaluation starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.behavior.submit && self.behavior.keep_local {
            return Err(ConfigError::SubmitConflict);
        }
        if self.behavior.fail_threshold > 100 {
            return Err(ConfigError::ThresholdOutOfRange(
                self.behavior.fail_threshold,
            ));
        }
        Ok(())
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("you can use `--keep-local` or `--submit`, but not both")]
    SubmitConflict,
    #[error("bad argument: fail threshold {0} is out of range (0-100)")]
    ThresholdOutOfRange(u16),
    #[error("you can use `--include-namespaces` or `--exclude-namespaces`, but not both")]
    NamespaceFilterConflict,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlReport {
    pub name: String,
    #[serde(default)]
    pub score: f32,
}

/// One framework's evaluation result as found in a results artifact. Unknown
/// fields are ignored so older and newer artifacts both load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameworkReport {
    #[serde(rename = "frameworkName")]
    pub name: String,
    #[serde(default, rename = "controlReports")]
    pub control_reports: Vec<ControlReport>,
    #[serde(default)]
    pub score: f32,
}

/// Submission payload: framework reports stamped with a fresh report identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostureReport {
    pub framework_reports: Vec<FrameworkReport>,
    #[serde(rename = "reportID")]
    pub report_id: String,
    pub generation_time: DateTime<Utc>,
    #[serde(rename = "customerGUID")]
    pub customer_guid: String,
    pub cluster_name: String,
}

//! Human-readable error descriptions and structured JSON error formatting.

use std::path::PathBuf;

use thiserror::Error;

/// Driver failures that map to dedicated exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot load configuration: {0}")]
    ConfigLoad(String),
    #[error("invalid configuration: {0}")]
    ConfigInvalid(String),
    #[error(
        "scenario {scenario} wrote {found:?} at line {line} of {}, expected {expected:?}",
        .path.display()
    )]
    ScenarioMismatch {
        scenario: &'static str,
        path: PathBuf,
        line: usize,
        expected: String,
        found: String,
    },
}

/// Map an eyre::Report to a human-readable explanation with likely causes and fix hints.
pub fn humanize(err: &eyre::Report) -> String {
    if let Some(ce) = err.downcast_ref::<CliError>() {
        return match ce {
            CliError::ConfigLoad(msg) => format!(
                "What happened: The config file could not be loaded ({msg}).\nLikely causes: Wrong --config path or malformed TOML.\nHow to fix: Check the path and the TOML syntax; unknown keys are rejected."
            ),
            CliError::ConfigInvalid(msg) => format!(
                "What happened: Invalid configuration ({msg}).\nLikely causes: Empty file paths or an unknown diagnostics level.\nHow to fix: Edit the config file, then rerun."
            ),
            CliError::ScenarioMismatch { scenario, path, .. } => format!(
                "What happened: {ce}.\nLikely causes: The output directory is not writable or {} was modified concurrently.\nHow to fix: Rerun `smoke` with a writable --out-dir (scenario: {scenario}).",
                path.display()
            ),
        };
    }

    // Generic fallback
    let msg = err.to_string();
    let mut cause = String::new();
    if let Some(src) = err.source() {
        cause = format!(" Cause: {src}");
    }
    format!(
        "Something went wrong.{cause}\nHow to fix: Re-run with --log-level=debug for details. Original: {msg}"
    )
}

/// Stable exit codes; clap usage errors exit with 2 before reaching here.
pub fn exit_code_for_error(err: &eyre::Report) -> i32 {
    match err.downcast_ref::<CliError>() {
        Some(CliError::ConfigLoad(_) | CliError::ConfigInvalid(_)) => 3,
        Some(CliError::ScenarioMismatch { .. }) => 4,
        None => 1,
    }
}

fn reason_name(err: &eyre::Report) -> &'static str {
    match err.downcast_ref::<CliError>() {
        Some(CliError::ConfigLoad(_)) => "ConfigLoad",
        Some(CliError::ConfigInvalid(_)) => "ConfigInvalid",
        Some(CliError::ScenarioMismatch { .. }) => "ScenarioMismatch",
        None => "Error",
    }
}

/// Structured JSON for errors when --json is enabled.
pub fn format_error_json(err: &eyre::Report) -> String {
    use serde_json::json;

    json!({ "reason": reason_name(err), "message": humanize(err) }).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_exit_with_three() {
        let err = eyre::Report::new(CliError::ConfigInvalid("logger.file must not be empty".into()));
        assert_eq!(exit_code_for_error(&err), 3);
        assert!(humanize(&err).contains("logger.file must not be empty"));
    }

    #[test]
    fn json_error_names_reason() {
        let err = eyre::Report::new(CliError::ConfigLoad("read config".into()));
        let v: serde_json::Value = serde_json::from_str(&format_error_json(&err)).unwrap();
        assert_eq!(v["reason"], "ConfigLoad");
        assert!(v["message"].as_str().unwrap().contains("read config"));
    }

    #[test]
    fn unknown_errors_fall_back() {
        let err = eyre::eyre!("boom");
        assert_eq!(exit_code_for_error(&err), 1);
        assert_eq!(reason_name(&err), "Error");
        assert!(humanize(&err).contains("Original: boom"));
    }
}

//! Smoke scenarios exercising each file-output path of the logger.

use std::path::{Path, PathBuf};

use eyre::WrapErr;
use memlog_core::Logger;

use crate::error_fmt::CliError;

#[derive(Debug)]
pub struct ScenarioReport {
    pub name: &'static str,
    pub path: PathBuf,
    pub lines: usize,
}

fn log_ints(logger: &mut Logger) {
    for i in (100..200).step_by(10) {
        logger.log_tagged("int:", i);
    }
}

/// Collect in memory, then dump with an explicit truncating write.
pub fn explicit_dump(dir: &Path) -> PathBuf {
    let path = dir.join("simple.txt");
    let mut logger = Logger::new();
    // No log file is set, so immediate mode has nothing to write to.
    logger.set_immediate_mode(true);
    log_ints(&mut logger);
    logger.write_to_file(&path, false);
    path
}

/// Append every entry to the file as it is logged.
pub fn immediate(dir: &Path) -> eyre::Result<PathBuf> {
    let path = dir.join("immediate.txt");
    match std::fs::remove_file(&path) {
        Ok(()) => tracing::debug!(path = %path.display(), "removed stale immediate log"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => {
            return Err(e).wrap_err_with(|| format!("remove stale {}", path.display()));
        }
    }

    let mut logger = Logger::builder()
        .with_immediate_mode(true)
        .with_log_file(&path, true)
        .build();
    log_ints(&mut logger);
    Ok(path)
}

/// Write everything once, when the logger goes out of scope.
pub fn teardown(dir: &Path) -> PathBuf {
    let path = dir.join("destroy.txt");
    let mut logger = Logger::new();
    logger.set_write_on_drop(true);
    logger.set_log_file(&path, false);
    log_ints(&mut logger);
    drop(logger);
    path
}

/// The exact file content every scenario must leave behind.
pub fn expected_lines() -> Vec<String> {
    (100..200).step_by(10).map(|i| format!("int: {i}")).collect()
}

fn check(name: &'static str, path: PathBuf) -> eyre::Result<ScenarioReport> {
    let text = std::fs::read_to_string(&path)
        .wrap_err_with(|| format!("scenario {name} left no readable file at {}", path.display()))?;

    let expected = expected_lines();
    let found: Vec<&str> = text.lines().collect();
    let count = expected.len().max(found.len());
    for idx in 0..count {
        let want = expected.get(idx).map(String::as_str);
        let got = found.get(idx).copied();
        if want != got {
            return Err(CliError::ScenarioMismatch {
                scenario: name,
                path,
                line: idx + 1,
                expected: want.unwrap_or("<end of file>").to_string(),
                found: got.unwrap_or("<end of file>").to_string(),
            }
            .into());
        }
    }

    let lines = found.len();
    tracing::info!(scenario = name, lines, path = %path.display(), "scenario ok");
    Ok(ScenarioReport { name, path, lines })
}

/// Run all scenarios under `out_dir` and print one summary line each.
pub fn run(out_dir: &Path, json: bool) -> eyre::Result<Vec<ScenarioReport>> {
    std::fs::create_dir_all(out_dir)
        .wrap_err_with(|| format!("create output directory {}", out_dir.display()))?;

    let reports = vec![
        check("simple", explicit_dump(out_dir))?,
        check("immediate", immediate(out_dir)?)?,
        check("destroy", teardown(out_dir))?,
    ];

    for r in &reports {
        if json {
            println!(
                "{}",
                serde_json::json!({
                    "scenario": r.name,
                    "path": r.path.display().to_string(),
                    "lines": r.lines,
                })
            );
        } else {
            println!("{}: {} lines -> {}", r.name, r.lines, r.path.display());
        }
    }
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenarios_write_expected_files() {
        let dir = tempfile::tempdir().unwrap();
        let reports = run(dir.path(), false).unwrap();

        let names: Vec<_> = reports.iter().map(|r| r.name).collect();
        assert_eq!(names, ["simple", "immediate", "destroy"]);
        for r in &reports {
            let text = std::fs::read_to_string(&r.path).unwrap();
            assert!(text.starts_with("int: 100\n"));
            assert!(text.ends_with("int: 190\n"));
        }
    }

    #[test]
    fn immediate_scenario_is_repeatable() {
        let dir = tempfile::tempdir().unwrap();
        immediate(dir.path()).unwrap();
        let path = immediate(dir.path()).unwrap();
        let text = std::fs::read_to_string(path).unwrap();
        assert_eq!(text.lines().collect::<Vec<_>>(), expected_lines());
    }

    #[test]
    fn check_rejects_wrong_content_with_right_line_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("simple.txt");
        std::fs::write(&path, "garbage\n".repeat(10)).unwrap();

        let err = check("simple", path).expect_err("wrong content must fail");
        match err.downcast_ref::<CliError>() {
            Some(CliError::ScenarioMismatch { line, expected, found, .. }) => {
                assert_eq!(*line, 1);
                assert_eq!(expected, "int: 100");
                assert_eq!(found, "garbage");
            }
            other => panic!("expected ScenarioMismatch, got {other:?}"),
        }
        assert_eq!(crate::error_fmt::exit_code_for_error(&err), 4);
    }

    #[test]
    fn check_rejects_reordered_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("destroy.txt");
        let mut lines = expected_lines();
        lines.reverse();
        std::fs::write(&path, lines.join("\n") + "\n").unwrap();

        let err = check("destroy", path).expect_err("reversed order must fail");
        assert_eq!(crate::error_fmt::exit_code_for_error(&err), 4);
    }

    #[test]
    fn check_rejects_truncated_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("immediate.txt");
        let lines = expected_lines();
        std::fs::write(&path, lines[..9].join("\n") + "\n").unwrap();

        let err = check("immediate", path).expect_err("missing last line must fail");
        match err.downcast_ref::<CliError>() {
            Some(CliError::ScenarioMismatch { line, found, .. }) => {
                assert_eq!(*line, 10);
                assert_eq!(found, "<end of file>");
            }
            other => panic!("expected ScenarioMismatch, got {other:?}"),
        }
    }
}

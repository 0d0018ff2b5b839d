use memlog_config::{Rotation, load_file, load_toml};
use rstest::rstest;
use std::path::Path;

#[test]
fn parses_full_document() {
    let toml = r#"
[logger]
enabled = true
immediate = true
write_on_drop = true
file = "logs/app.txt"
append = true

[diagnostics]
level = "debug"
file = "logs/trace.log"
rotation = "daily"
"#;

    let cfg = load_toml(toml).expect("parse TOML");
    cfg.validate().expect("valid config should pass");

    assert!(cfg.logger.immediate);
    assert!(cfg.logger.write_on_drop);
    assert!(cfg.logger.append);
    assert_eq!(cfg.logger.file.as_deref(), Some(Path::new("logs/app.txt")));
    assert_eq!(cfg.diagnostics.level.as_deref(), Some("debug"));
    assert_eq!(cfg.diagnostics.rotation, Rotation::Daily);
}

#[rstest]
#[case("[logger]\nfile = \"\"\n", "logger.file must not be empty")]
#[case("[diagnostics]\nlevel = \"loud\"\n", "diagnostics.level must be one of")]
#[case("[diagnostics]\nfile = \"\"\n", "diagnostics.file must not be empty")]
fn rejects_invalid_values(#[case] toml: &str, #[case] needle: &str) {
    let cfg = load_toml(toml).expect("parse TOML");
    let err = cfg.validate().expect_err("should reject");
    assert!(
        format!("{err}").contains(needle),
        "error {err:?} does not mention {needle:?}"
    );
}

#[rstest]
#[case("[logger]\nflush = true\n")]
#[case("[diagnostics]\nrotation = \"weekly\"\n")]
#[case("[logger]\nimmediate = \"yes\"\n")]
fn rejects_malformed_documents(#[case] toml: &str) {
    assert!(load_toml(toml).is_err());
}

#[test]
fn level_check_ignores_case() {
    let cfg = load_toml("[diagnostics]\nlevel = \"WARN\"\n").expect("parse TOML");
    cfg.validate().expect("uppercase level should pass");
}

#[test]
fn load_file_reads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("memlog.toml");
    std::fs::write(&path, "[logger]\nwrite_on_drop = true\n").unwrap();

    let cfg = load_file(&path).expect("load config file");
    assert!(cfg.logger.write_on_drop);
    assert!(cfg.logger.enabled);
}

#[test]
fn load_file_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_file(&dir.path().join("nope.toml")).expect_err("missing file");
    assert!(format!("{err}").contains("read config"));
}

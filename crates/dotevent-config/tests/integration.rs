use dotevent_config::{ConfigError, load, load_from_path};
use std::fs;
use tempfile::TempDir;

#[test]
fn settings_load_from_disk() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("settings.json");
    fs::write(
        &path,
        r#"{"telemetry": {"level": "Error"}, "registry": {"trace_dispatch": true}}"#,
    )?;

    let settings = load_from_path(&path)?;
    assert_eq!(settings.telemetry.level, "error");
    assert!(settings.telemetry.format.is_none());
    assert!(settings.registry.trace_dispatch);
    Ok(())
}

#[test]
fn missing_file_reports_io_error() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("absent.json");

    let err = load_from_path(&path).expect_err("missing file");
    match err {
        ConfigError::Io {
            operation,
            path: reported,
            ..
        } => {
            assert_eq!(operation, "settings.read");
            assert_eq!(reported, path);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    Ok(())
}

#[test]
fn malformed_file_reports_its_path() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json")?;

    let err = load_from_path(&path).expect_err("malformed");
    assert!(matches!(err, ConfigError::Malformed { path: Some(ref p), .. } if p == &path));
    Ok(())
}

#[test]
fn load_without_path_starts_from_defaults() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("settings.json");
    fs::write(&path, "{}")?;

    let from_file = load(Some(&path))?;
    let from_defaults = load(None)?;
    assert_eq!(from_file, from_defaults);
    Ok(())
}

use compass_app::config::{load_config, save_config, CompassConfig};

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config(&dir.path().join("config.json")).unwrap();
    assert_eq!(config, CompassConfig::default());
    assert_eq!(config.share_limit, 5);
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");
    let config = CompassConfig {
        data_file: Some(dir.path().join("history.json")),
        result_limit: Some(5),
        ..CompassConfig::default()
    };

    save_config(&path, &config).unwrap();
    assert_eq!(load_config(&path).unwrap(), config);
}

#[test]
fn unversioned_config_is_stamped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"data_file": "/tmp/history.json"}"#).unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(
        config.data_file.as_deref(),
        Some(std::path::Path::new("/tmp/history.json"))
    );
    assert_eq!(config.share_limit, 5);
}

#[test]
fn newer_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"config_version": 99}"#).unwrap();
    assert!(load_config(&path).is_err());
}

#[test]
fn oversized_or_malformed_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    for version in ["4294967297", "-1", "\"1\"", "1.5"] {
        std::fs::write(&path, format!(r#"{{"config_version": {version}}}"#)).unwrap();
        assert!(load_config(&path).is_err(), "version {version} was accepted");
    }
}

#[cfg(unix)]
#[test]
fn saved_config_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    save_config(&path, &CompassConfig::default()).unwrap();
    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

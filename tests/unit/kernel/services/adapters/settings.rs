use super::*;
use tempfile::tempdir;

#[test]
fn ensure_writes_defaults_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join(SETTINGS_FILE);

    ensure_settings_file_at(&path).unwrap();
    assert_eq!(load_settings_from(&path).unwrap(), Settings::default());

    std::fs::write(&path, r#"{"default_repository": "org/repo"}"#).unwrap();
    ensure_settings_file_at(&path).unwrap();
    let settings = load_settings_from(&path).unwrap();
    assert_eq!(settings.default_repository, "org/repo");
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let err = load_settings_from(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, SettingsError::Io { .. }));
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(SETTINGS_FILE);
    std::fs::write(&path, "{ not json").unwrap();

    let err = load_settings_from(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Parse { .. }));
    assert!(err.to_string().contains("invalid settings file"));
}

#[test]
fn paths_live_under_the_app_dir() {
    if let Some(path) = get_settings_path() {
        assert!(path.ends_with(Path::new(APP_DIR).join(SETTINGS_FILE)));
    }
    if let Some(dir) = get_log_dir() {
        assert!(dir.ends_with(Path::new(APP_DIR).join(LOG_DIR)));
    }
}

//! Unit tests for configuration loading and validation

use super::*;
use tempfile::TempDir;

#[test]
fn test_default_config_is_valid() {
    let config = PaneshiftConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.surface.width, 1024);
    assert_eq!(config.surface.height, 768);
    assert!(config.progression.installed.is_empty());
}

#[test]
fn test_save_and_load_round_trip() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("paneshift.toml");

    let mut config = PaneshiftConfig::default();
    config.surface.width = 800;
    config.surface.height = 600;
    config.progression.installed = vec!["window_manager".into(), "desktop_panel".into()];
    config.apps.push(AppEntry {
        class: "artpad".into(),
        required_upgrade: Some("artpad".into()),
        multiplayer_only: false,
    });

    config.save(&path)?;
    let loaded = PaneshiftConfig::load(&path)?;

    assert_eq!(loaded, config);
    Ok(())
}

#[test]
fn test_partial_toml_uses_defaults() -> Result<()> {
    let parsed: PaneshiftConfig = toml::from_str(
        r#"
        [progression]
        installed = ["wm_4_windows"]
        "#,
    )?;

    assert_eq!(parsed.surface, SurfaceConfig::default());
    assert_eq!(parsed.progression.installed, vec!["wm_4_windows"]);
    assert!(!parsed.progression.connected);
    assert!(parsed.apps.is_empty());
    Ok(())
}

#[test]
fn test_zero_surface_is_rejected() {
    let mut config = PaneshiftConfig::default();
    config.surface.width = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_panel_taller_than_surface_is_rejected() {
    let mut config = PaneshiftConfig::default();
    config.surface.height = 20;
    config.surface.panel_height = 24;
    assert!(config.validate().is_err());
}

#[test]
fn test_unnamed_app_entry_is_rejected() {
    let mut config = PaneshiftConfig::default();
    config.apps.push(AppEntry {
        class: String::new(),
        required_upgrade: None,
        multiplayer_only: false,
    });
    assert!(config.validate().is_err());
}

#[test]
fn test_missing_file_reports_path() {
    let err = PaneshiftConfig::load("/nonexistent/paneshift.toml").unwrap_err();
    assert!(err.to_string().contains("/nonexistent/paneshift.toml"));
}

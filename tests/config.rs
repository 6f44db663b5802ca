use favicon_mcp::config::{Config, ManifestConfig};

#[test]
fn missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load(&dir.path().join("favicon.toml")).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.manifest.name, "Favicon App");
    assert_eq!(config.manifest.short_name, "Favicon");
    assert_eq!(config.manifest.description, "Generated favicon application");
    assert_eq!(config.manifest.start_url, "/");
    assert_eq!(config.manifest.display, "standalone");
    assert_eq!(config.manifest.background_color, "#ffffff");
    assert_eq!(config.manifest.theme_color, "#000000");
    assert!(!config.icons.bleed);
}

#[test]
fn partial_manifest_keeps_other_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("favicon.toml");
    std::fs::write(
        &path,
        r##"
[manifest]
name = "Acme Tools"
theme_color = "#ff6600"
"##,
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.manifest.name, "Acme Tools");
    assert_eq!(config.manifest.theme_color, "#ff6600");
    assert_eq!(config.manifest.short_name, "Favicon");
    assert_eq!(config.manifest.display, "standalone");
    assert!(!config.icons.bleed);
}

#[test]
fn icons_section_enables_bleed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("favicon.toml");
    std::fs::write(&path, "[icons]\nbleed = true\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert!(config.icons.bleed);
    assert_eq!(config.manifest, ManifestConfig::default());
}

#[test]
fn save_then_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("favicon.toml");
    let mut config = Config::default();
    config.manifest.description = "Icons for the docs site".into();
    config.icons.bleed = true;

    config.save(&path).unwrap();
    assert_eq!(Config::load(&path).unwrap(), config);
}

#[test]
fn invalid_toml_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("favicon.toml");
    std::fs::write(&path, "[manifest\nname = ").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse"), "{err}");
}

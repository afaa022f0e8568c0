// SPDX-License-Identifier: MPL-2.0
use iced_image_search::application::session::{ResponseOrdering, SearchSession, StaleResults};
use iced_image_search::config::{self, Config};
use iced_image_search::i18n::fluent::I18n;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("search-button"), "Search");

    // 2. Change config to fr
    let mut french_config = Config::default();
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("loading"), "Chargement...");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn cli_language_overrides_config() {
    let mut config = Config::default();
    config.general.language = Some("fr".to_string());

    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn search_section_drives_session_behaviour() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("settings.toml"),
        r#"
[search]
categories = ["forest", "  ", "forest", "city"]
response_ordering = "last-writer-wins"
stale_results = "clear"
"#,
    )
    .expect("Failed to write settings");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(config.search.category_labels(), vec!["forest", "city"]);

    let session_config = config.session_config();
    assert_eq!(
        session_config.response_ordering,
        ResponseOrdering::LastWriterWins
    );
    assert_eq!(session_config.stale_results, StaleResults::Clear);

    let mut session = SearchSession::new(session_config);
    let ticket = session
        .select_category(&config.search.category_labels()[0])
        .expect("category search issues a request");
    assert_eq!(ticket.request().query.as_str(), "forest");
}

#[test]
fn broken_settings_fall_back_with_localized_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[search\ncategories = 3")
        .expect("Failed to write settings");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());

    let key = warning.expect("invalid settings produce a warning");
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert!(!i18n.tr(&key).starts_with("MISSING:"));
}

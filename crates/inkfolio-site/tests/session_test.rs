//! Sessions backed by a preference file.

use inkfolio_common::test_utils::{create_temp_dir, init_test_logging};
use inkfolio_config::{ConfigLoader, FilePreferenceStore, PreferenceStore};
use inkfolio_i18n::{LanguageCode, LocaleCatalog};
use inkfolio_site::{Site, Splash};
use std::fs;
use std::sync::Arc;
use std::time::Duration;

fn config_for(path: &std::path::Path) -> inkfolio_config::SiteConfig {
    let toml = format!(
        "[preferences]\npath = {:?}\n\n[splash]\ndelay_ms = 250\n",
        path.display().to_string()
    );
    ConfigLoader::load_from_str(&toml).unwrap()
}

#[test]
fn test_fresh_session_starts_in_english() {
    init_test_logging();
    let dir = create_temp_dir();
    let config = config_for(&dir.path().join("preferences.toml"));

    let site = Site::from_config(&config).unwrap();
    assert_eq!(site.language(), LanguageCode::En);
    assert!(!config.preferences.path.exists());
}

#[test]
fn test_choice_persists_across_sessions() {
    let dir = create_temp_dir();
    let path = dir.path().join("preferences.toml");
    let config = config_for(&path);

    let first = Site::from_config(&config).unwrap();
    first.set_language(LanguageCode::Jp);

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("\"jp\""));

    let second = Site::from_config(&config).unwrap();
    assert_eq!(second.language(), LanguageCode::Jp);
    assert_eq!(second.page().hero.title, "インクの世界へようこそ！");
}

#[test]
fn test_corrupt_preference_falls_back_to_english() {
    let dir = create_temp_dir();
    let path = dir.path().join("preferences.toml");
    fs::write(&path, "preferredLanguage = \"fr\"\n").unwrap();

    let site = Site::from_config(&config_for(&path)).unwrap();
    assert_eq!(site.language(), LanguageCode::En);
}

#[test]
fn test_sessions_share_store_not_state() {
    let dir = create_temp_dir();
    let path = dir.path().join("preferences.toml");
    let catalog = Arc::new(LocaleCatalog::load().unwrap());

    let mut first = Site::new(Arc::clone(&catalog), Arc::new(FilePreferenceStore::new(&path)));
    first.header.toggle_menu();
    first.toggle_language();

    let second = Site::new(catalog, Arc::new(FilePreferenceStore::new(&path)));
    assert_eq!(second.language(), LanguageCode::Jp);
    assert!(!second.header.is_menu_open());
    assert_eq!(FilePreferenceStore::new(&path).load(), Some(LanguageCode::Jp));
}

#[tokio::test(start_paused = true)]
async fn test_splash_uses_configured_delay() {
    let dir = create_temp_dir();
    let config = config_for(&dir.path().join("preferences.toml"));

    let splash = Splash::from_config(&config);
    assert_eq!(splash.delay(), Duration::from_millis(250));
    assert!(!splash.is_ready());

    splash.wait().await;
    assert!(splash.is_ready());
}

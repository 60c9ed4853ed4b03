//! Integration tests for the inkfolio command line front end.
//!
//! These drive full sessions against a preference file in a temporary
//! directory, the way separate invocations of the binary would.

use clap::Parser;
use inkfolio::{config_source, load_config, App, Cli, Command, OutputFormat};
use inkfolio_common::test_utils::{create_temp_dir, init_test_logging};
use inkfolio_i18n::LanguageCode;
use std::fs;
use std::path::Path;

fn write_config(dir: &Path) -> std::path::PathBuf {
    let config_path = dir.join("inkfolio.toml");
    let prefs = dir.join("state").join("preferences.toml");
    fs::write(
        &config_path,
        format!(
            "[preferences]\npath = {:?}\n\n[splash]\ndelay_ms = 0\n",
            prefs.display().to_string()
        ),
    )
    .unwrap();
    config_path
}

async fn invoke(args: &[&str]) -> String {
    let cli = Cli::try_parse_from(args).unwrap();
    let config = load_config(&cli).unwrap();
    let mut app = App::new(&config, cli.no_splash).unwrap();
    app.apply_cli(&cli);

    let mut out = Vec::new();
    app.run(cli.subcommand(), &mut out).await.unwrap();
    String::from_utf8(out).unwrap()
}

#[tokio::test]
async fn test_language_is_remembered_between_invocations() {
    init_test_logging();
    let dir = create_temp_dir();
    let config = write_config(dir.path());
    let config = config.to_str().unwrap();

    assert_eq!(invoke(&["inkfolio", "-c", config, "language"]).await, "en (English)\n");
    assert_eq!(invoke(&["inkfolio", "-c", config, "set-language", "jp"]).await, "jp (日本語)\n");
    assert_eq!(invoke(&["inkfolio", "-c", config, "language"]).await, "jp (日本語)\n");

    let stored = fs::read_to_string(dir.path().join("state").join("preferences.toml")).unwrap();
    assert!(stored.contains("preferredLanguage"));
    assert!(stored.contains("jp"));
}

#[tokio::test]
async fn test_toggle_round_trip() {
    let dir = create_temp_dir();
    let config = write_config(dir.path());
    let config = config.to_str().unwrap();

    assert_eq!(invoke(&["inkfolio", "-c", config, "toggle"]).await, "jp (日本語)\n");
    assert_eq!(invoke(&["inkfolio", "-c", config, "toggle"]).await, "en (English)\n");
}

#[tokio::test]
async fn test_lang_flag_renders_in_that_language() {
    let dir = create_temp_dir();
    let config = write_config(dir.path());
    let config = config.to_str().unwrap();

    let text = invoke(&["inkfolio", "-c", config, "--lang", "jp", "--no-splash"]).await;
    assert!(text.contains("インクの世界へようこそ！"));

    let json = invoke(&["inkfolio", "-c", config, "render", "--format", "json"]).await;
    let page: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(page["language"], "jp");
}

#[tokio::test]
async fn test_check_passes_for_embedded_catalog() {
    let dir = create_temp_dir();
    let config = write_config(dir.path());
    let text = invoke(&["inkfolio", "-c", config.to_str().unwrap(), "check"]).await;
    assert!(text.contains("45"));
}

#[test]
fn test_missing_config_file_is_an_error() {
    let dir = create_temp_dir();
    let missing = dir.path().join("absent.toml");
    let cli = Cli::try_parse_from(["inkfolio", "-c", missing.to_str().unwrap()]).unwrap();

    assert!(load_config(&cli).is_err());
}

#[test]
fn test_config_source_reports_flag_path() {
    let dir = create_temp_dir();
    let config = write_config(dir.path());
    let cli = Cli::try_parse_from(["inkfolio", "-c", config.to_str().unwrap()]).unwrap();

    assert_eq!(config_source(&cli), Some(config));
}

#[test]
fn test_default_command() {
    let cli = Cli::try_parse_from(["inkfolio"]).unwrap();
    assert_eq!(
        cli.subcommand(),
        Command::Render {
            format: OutputFormat::Text
        }
    );
    assert_eq!(cli.lang, None::<LanguageCode>);
}

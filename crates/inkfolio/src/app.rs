//! Command execution against a site session.

use crate::cli::{Cli, Command, OutputFormat};
use crate::error::AppResult;
use crate::render::{render_json, render_text};
use inkfolio_config::{ConfigLoader, SiteConfig};
use inkfolio_i18n::{LocaleBundle, LocaleCatalog};
use inkfolio_site::{Site, Splash};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

/// Load configuration from `--config` or the usual locations
pub fn load_config(cli: &Cli) -> AppResult<SiteConfig> {
    let config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };
    Ok(config)
}

/// File [`load_config`] reads, or `None` when it falls back to defaults
#[must_use]
pub fn config_source(cli: &Cli) -> Option<PathBuf> {
    cli.config.clone().or_else(ConfigLoader::source)
}

/// A site session plus its splash timer
pub struct App {
    site: Site,
    splash: Option<Splash>,
}

impl App {
    /// Start a session from configuration
    ///
    /// The splash timer starts immediately unless `skip_splash` is set.
    pub fn new(config: &SiteConfig, skip_splash: bool) -> AppResult<Self> {
        let site = Site::from_config(config)?;
        let splash = (!skip_splash).then(|| Splash::from_config(config));
        Ok(Self::with_site(site, splash))
    }

    /// Wrap an existing session
    #[must_use]
    pub const fn with_site(site: Site, splash: Option<Splash>) -> Self {
        Self { site, splash }
    }

    /// The session
    #[must_use]
    pub const fn site(&self) -> &Site {
        &self.site
    }

    /// Apply global command line options to the session
    pub fn apply_cli(&self, cli: &Cli) {
        if let Some(language) = cli.lang {
            self.site.set_language(language);
        }
    }

    /// Run one command, writing its output to `out`
    pub async fn run<W: Write>(&mut self, command: Command, out: &mut W) -> AppResult<()> {
        debug!(?command, "Running command");

        match command {
            Command::Render { format } => {
                self.wait_for_splash(out).await?;
                let page = self.site.page();
                let rendered = match format {
                    OutputFormat::Text => render_text(&page),
                    OutputFormat::Json => render_json(&page)?,
                };
                writeln!(out, "{rendered}")?;
            }
            Command::Language => {
                let language = self.site.language();
                writeln!(out, "{} ({})", language, language.display_name())?;
            }
            Command::SetLanguage { code } => {
                if self.site.set_language(code) {
                    info!(language = %code, "Language changed");
                }
                writeln!(out, "{} ({})", code, code.display_name())?;
            }
            Command::Toggle => {
                let language = self.site.toggle_language();
                writeln!(out, "{} ({})", language, language.display_name())?;
            }
            Command::Check => {
                let catalog = LocaleCatalog::shared()?;
                catalog.ensure_complete()?;
                writeln!(
                    out,
                    "All {} messages present in every language",
                    LocaleBundle::message_keys().len()
                )?;
            }
        }

        Ok(())
    }

    async fn wait_for_splash<W: Write>(&mut self, out: &mut W) -> AppResult<()> {
        if let Some(splash) = self.splash.take() {
            if !splash.is_ready() {
                writeln!(out, "{}", Splash::loading_text(self.site.language()))?;
                splash.wait().await;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkfolio_config::MemoryPreferenceStore;
    use inkfolio_i18n::LanguageCode;
    use std::sync::Arc;
    use std::time::Duration;

    fn app(splash: Option<Splash>) -> App {
        let site = Site::new(
            LocaleCatalog::shared().unwrap(),
            Arc::new(MemoryPreferenceStore::new()),
        );
        App::with_site(site, splash)
    }

    async fn output(app: &mut App, command: Command) -> String {
        let mut out = Vec::new();
        app.run(command, &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_language_commands() {
        let mut app = app(None);
        assert_eq!(output(&mut app, Command::Language).await, "en (English)\n");
        assert_eq!(output(&mut app, Command::Toggle).await, "jp (日本語)\n");
        assert_eq!(
            output(
                &mut app,
                Command::SetLanguage {
                    code: LanguageCode::En
                }
            )
            .await,
            "en (English)\n"
        );
        assert_eq!(app.site().language(), LanguageCode::En);
    }

    #[tokio::test]
    async fn test_lang_option_switches_before_command() {
        use clap::Parser;

        let mut app = app(None);
        let cli = Cli::try_parse_from(["inkfolio", "--lang", "jp", "language"]).unwrap();
        app.apply_cli(&cli);
        assert_eq!(app.site().language(), LanguageCode::Jp);
        assert_eq!(output(&mut app, cli.subcommand()).await, "jp (日本語)\n");

        let cli = Cli::try_parse_from(["inkfolio", "language"]).unwrap();
        app.apply_cli(&cli);
        assert_eq!(app.site().language(), LanguageCode::Jp);
    }

    #[test]
    fn test_config_source_prefers_flag() {
        use clap::Parser;

        let cli = Cli::try_parse_from(["inkfolio", "-c", "site/inkfolio.toml"]).unwrap();
        assert_eq!(config_source(&cli), Some(PathBuf::from("site/inkfolio.toml")));
    }

    #[tokio::test]
    async fn test_check_reports_complete_catalog() {
        let mut app = app(None);
        let text = output(&mut app, Command::Check).await;
        assert!(text.starts_with("All 45 messages"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_splash_shown_before_first_render_only() {
        let mut app = app(Some(Splash::start(Duration::from_millis(2000))));

        let first = output(&mut app, Command::default()).await;
        assert!(first.starts_with("Preparing Canvas...\n"));

        let second = output(&mut app, Command::default()).await;
        assert!(!second.contains("Preparing Canvas..."));
    }

    #[tokio::test]
    async fn test_json_render_has_no_splash_text() {
        let mut app = app(None);
        let text = output(
            &mut app,
            Command::Render {
                format: OutputFormat::Json,
            },
        )
        .await;
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["language"], "en");
    }
}

//! Command line interface.

use clap::{Parser, Subcommand, ValueEnum};
use inkfolio_i18n::LanguageCode;
use std::path::PathBuf;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "inkfolio")]
#[command(author, version, about = "Render the bilingual Inkfolio portfolio page", long_about = None)]
pub struct Cli {
    /// Configuration file path (defaults to INKFOLIO_CONFIG_PATH or ./inkfolio.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Switch to this language before running the command (en, jp)
    #[arg(short, long, value_name = "CODE", value_parser = parse_language)]
    pub lang: Option<LanguageCode>,

    /// Render without waiting for the splash screen
    #[arg(long)]
    pub no_splash: bool,

    /// Command to run; renders text when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Subcommand to run, rendering text when none is given
    #[must_use]
    pub fn subcommand(&self) -> Command {
        self.command.clone().unwrap_or_default()
    }
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Render the whole page in the active language
    Render {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the active language
    Language,

    /// Switch to a language and remember the choice
    SetLanguage {
        /// Language code (en, jp)
        #[arg(value_name = "CODE", value_parser = parse_language)]
        code: LanguageCode,
    },

    /// Switch to the next language and remember the choice
    Toggle,

    /// Verify that every language has every message
    Check,
}

impl Default for Command {
    fn default() -> Self {
        Self::Render {
            format: OutputFormat::Text,
        }
    }
}

/// Page output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text for the terminal
    #[default]
    Text,
    /// Page model as pretty-printed JSON
    Json,
}

fn parse_language(code: &str) -> Result<LanguageCode, String> {
    code.parse::<LanguageCode>().map_err(|e| e.to_string())
}

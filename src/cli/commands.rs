//! CLI argument definitions and handlers

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{error, info, warn};

use crate::core::client::BibleClient;
use crate::core::config::ApiConfig;
use crate::core::errors::BibleError;
use crate::core::models::{PassageOptions, Translation};
use crate::extract::extract_text;

/// Printed whenever no passage was requested
pub const MISSING_LANG_PROMPT: &str = "Please provide a language using the --lang option.";

/// Bible CLI API
#[derive(Parser, Debug, Default)]
#[command(name = "bible-cli", version, about = "Bible CLI API", long_about = None)]
pub struct Args {
    /// ISO 639-3 three digit language code used to filter results
    #[arg(long)]
    pub lang: Option<String>,

    /// Provide a specific passage. For example: MAT.1.12-MAT.1.20
    #[arg(long)]
    pub passage: Option<String>,

    /// Provide a Bible ID from the scripture API. For example: 06125adad2d5898a-01
    #[arg(long)]
    pub bible: Option<String>,

    /// API key (optional, defaults to BIBLE_API_KEY env var)
    #[arg(long)]
    pub api_key: Option<String>,

    /// API base URL (optional, defaults to BIBLE_API_BASE_URL env var)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Load API settings from a JSON file instead of the environment
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Resolve API settings: file or environment, then CLI overrides
    pub fn api_config(&self) -> anyhow::Result<ApiConfig> {
        let mut config = match &self.config {
            Some(path) => {
                info!("Loading API config from {}", path.display());
                ApiConfig::from_file(path)?
            }
            None => ApiConfig::from_env()?,
        };

        if let Some(api_key) = &self.api_key {
            config = config.with_api_key(api_key.clone());
        }
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url.clone());
        }

        Ok(config)
    }
}

/// Report a failed request without propagating it
fn report<W: Write>(out: &mut W, transport_prefix: &str, err: &BibleError) -> io::Result<()> {
    if err.is_transport() {
        error!("{}: {}", transport_prefix, err);
        writeln!(out, "{}: {}", transport_prefix, err)
    } else {
        warn!("Unexpected response format: {}", err);
        writeln!(out, "Unexpected response format: {}", err)
    }
}

/// Print every translation available for `lang`
pub async fn handle_lang<W: Write>(client: &BibleClient, lang: &str, out: &mut W) -> io::Result<()> {
    match client.translations(lang).await {
        Ok(entries) => {
            info!("Found {} translations for {}", entries.len(), lang);
            // Blocks already written stay when a later entry is malformed
            for entry in &entries {
                let translation = match Translation::from_entry(entry) {
                    Ok(translation) => translation,
                    Err(e) => return report(out, "Error fetching data", &e),
                };
                writeln!(out)?;
                writeln!(out, "Bible: {}", translation.name())?;
                writeln!(out, "ID: {}", translation.id)?;
                writeln!(out, "Description: {}", translation.description())?;
            }
            Ok(())
        }
        Err(e) => report(out, "Error fetching data", &e),
    }
}

/// Print every text fragment of a passage
pub async fn handle_passage<W: Write>(
    client: &BibleClient,
    bible_id: &str,
    passage: &str,
    options: &PassageOptions,
    out: &mut W,
) -> io::Result<()> {
    match client.passage(bible_id, passage, options).await {
        Ok(document) => extract_text(&document, out),
        Err(e) => report(out, "Error fetching passage", &e),
    }
}

/// Run the requested operations
///
/// `--lang` and `--passage` are checked independently; the prompt is
/// printed whenever no passage was requested, even after a lookup.
pub async fn dispatch<W: Write>(args: &Args, client: &BibleClient, out: &mut W) -> io::Result<()> {
    if let Some(lang) = args.lang.as_deref().filter(|s| !s.is_empty()) {
        handle_lang(client, lang, out).await?;
    }

    match args.passage.as_deref().filter(|s| !s.is_empty()) {
        Some(passage) => {
            let bible_id = args.bible.as_deref().unwrap_or_default();
            handle_passage(client, bible_id, passage, &PassageOptions::default(), out).await?;
        }
        None => writeln!(out, "{}", MISSING_LANG_PROMPT)?,
    }

    Ok(())
}

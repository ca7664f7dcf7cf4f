//! CLI command handlers.

pub mod chapters;
pub mod search;
pub mod serve;
pub mod verse;
pub mod verses;

use std::path::PathBuf;

use anyhow::Result;
use console::{Style, style};
use mushaf_client::{ContentClient, Pagination, Verse};
use mushaf_config::LoadedConfig;
use serde::Serialize;

use crate::client::build_client;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Output as JSON for scripting.
    pub json_output: bool,
    /// Verbose output enabled.
    pub verbose: bool,
    /// Explicit user config directory.
    pub config_dir: Option<PathBuf>,
}

impl Context {
    /// Discover and merge config layers, reporting warnings on stderr.
    pub fn load_config(&self) -> Result<LoadedConfig> {
        let loaded = mushaf_config::load_config_with_options(None, self.config_dir.as_deref())?;

        for warning in &loaded.warnings {
            eprintln!("warning: {}", warning);
        }

        if self.verbose {
            let sources = loaded.loaded_from();
            if sources.is_empty() {
                eprintln!("No config files found, using defaults + environment");
            } else {
                for source in sources {
                    eprintln!("Loaded config: {}", source.display());
                }
            }
        }

        Ok(loaded)
    }

    /// Load config and build a content client from it.
    pub fn client(&self) -> Result<ContentClient> {
        let loaded = self.load_config()?;
        let client = build_client(&loaded.config)?;
        tracing::debug!(base_url = %client.base_url(), "Content client ready");
        Ok(client)
    }
}

/// Print a value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a section heading with a rule underneath.
pub fn print_heading(title: &str) {
    println!("{}", style(title).bold());
    println!("{}", Style::new().dim().apply_to("─".repeat(50)));
}

/// Print a verse: key, preferred script text, then each translation.
pub fn print_verse(verse: &Verse) {
    let dim = Style::new().dim();

    println!("{}", style(&verse.verse_key).cyan().bold());
    match verse.text() {
        Some(text) => println!("  {}", text),
        None => println!("  {}", dim.apply_to("(no text)")),
    }
    for translation in &verse.translations {
        println!(
            "  {} {}",
            dim.apply_to(format!("[{}]", translation.resource_name)),
            translation.text
        );
    }
}

/// Print the paging footer of a verse list.
pub fn print_pagination(pagination: &Pagination) {
    let dim = Style::new().dim();

    println!(
        "{}",
        dim.apply_to(format!(
            "Page {} of {} ({} results)",
            pagination.current_page, pagination.total_pages, pagination.total_records
        ))
    );
    if let Some(next) = pagination.next_page {
        println!("{}", dim.apply_to(format!("Next page: --page {}", next)));
    }
}

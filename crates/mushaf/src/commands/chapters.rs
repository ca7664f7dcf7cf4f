//! Chapters command - list all chapters.

use anyhow::Result;
use clap::Args;
use console::Style;
use mushaf_client::ChaptersResponse;

use super::{Context, print_heading, print_json};

/// Arguments for the chapters command.
#[derive(Args, Debug)]
pub struct ChaptersArgs {}

/// Run the chapters command.
pub async fn run(_args: ChaptersArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    let chapters = client.chapters().list().await?;

    if ctx.json_output {
        return print_json(&ChaptersResponse { chapters });
    }

    let dim = Style::new().dim();
    print_heading("Chapters");

    for chapter in &chapters {
        println!(
            "{:>3}. {} {} {}",
            chapter.id,
            chapter.name_simple,
            chapter.name_arabic,
            dim.apply_to(format!(
                "({}, {} verses, {})",
                chapter.translated_name.name, chapter.verses_count, chapter.revelation_place
            ))
        );
    }

    Ok(())
}

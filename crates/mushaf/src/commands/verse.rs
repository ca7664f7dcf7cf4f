//! Verse command - show a single verse.

use anyhow::Result;
use clap::Args;
use mushaf_client::VerseResponse;

use super::{Context, print_json, print_verse};

/// Arguments for the verse command.
#[derive(Args, Debug)]
pub struct VerseArgs {
    /// Verse key as chapter:verse (e.g. 2:255)
    pub key: String,

    /// Comma-separated translation resource ids (e.g. 131,20)
    #[arg(short, long)]
    pub translations: Option<String>,
}

/// Run the verse command.
pub async fn run(args: VerseArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    let verse = client
        .verses()
        .by_key(&args.key, args.translations.as_deref())
        .await?;

    if ctx.json_output {
        return print_json(&VerseResponse { verse });
    }

    print_verse(&verse);
    Ok(())
}

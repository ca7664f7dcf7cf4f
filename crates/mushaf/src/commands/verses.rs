//! Verses command - page through a chapter.

use anyhow::Result;
use clap::Args;
use console::Style;
use mushaf_client::ChapterVersesQuery;

use super::{Context, print_heading, print_json, print_pagination, print_verse};

/// Arguments for the verses command.
#[derive(Args, Debug)]
pub struct VersesArgs {
    /// Chapter number
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub chapter: u32,

    /// Page to fetch
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Verses per page
    #[arg(long, default_value = "10", value_parser = clap::value_parser!(u32).range(1..))]
    pub per_page: u32,

    /// Comma-separated translation resource ids (e.g. 131,20)
    #[arg(short, long)]
    pub translations: Option<String>,
}

impl VersesArgs {
    fn to_query(&self) -> ChapterVersesQuery {
        let query = ChapterVersesQuery::default()
            .page(self.page)
            .per_page(self.per_page);
        match &self.translations {
            Some(ids) => query.translations(ids.clone()),
            None => query,
        }
    }
}

/// Run the verses command.
pub async fn run(args: VersesArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    let page = client
        .verses()
        .by_chapter(args.chapter, &args.to_query())
        .await?;

    if ctx.json_output {
        return print_json(&page);
    }

    print_heading(&format!("Chapter {}", args.chapter));

    if page.verses.is_empty() {
        println!("{}", Style::new().dim().apply_to("No verses on this page"));
    }
    for verse in &page.verses {
        print_verse(verse);
        println!();
    }
    print_pagination(&page.pagination);

    Ok(())
}

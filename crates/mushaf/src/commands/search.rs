//! Search command - full-text verse search.

use anyhow::{Result, bail};
use clap::Args;
use console::Style;
use mushaf_client::SearchQuery;

use super::{Context, print_heading, print_json, print_pagination, print_verse};

/// Arguments for the search command.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query
    pub query: String,

    /// Result language
    #[arg(short, long, default_value = "en")]
    pub language: String,

    /// Page to fetch
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Results per page
    #[arg(long, default_value = "20", value_parser = clap::value_parser!(u32).range(1..))]
    pub per_page: u32,
}

impl SearchArgs {
    fn to_query(&self) -> Result<SearchQuery> {
        if self.query.trim().is_empty() {
            bail!("search query must not be empty");
        }
        Ok(SearchQuery::new(self.query.as_str())
            .language(self.language.clone())
            .page(self.page)
            .per_page(self.per_page))
    }
}

/// Run the search command.
pub async fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let query = args.to_query()?;
    let client = ctx.client()?;
    let page = client.search().verses_with_options(&query).await?;

    if ctx.json_output {
        return print_json(&page);
    }

    print_heading(&format!("Search: \"{}\"", query.q));

    if page.verses.is_empty() {
        println!("{}", Style::new().dim().apply_to("No results"));
    }
    for verse in &page.verses {
        print_verse(verse);
        println!();
    }
    print_pagination(&page.pagination);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(query: &str) -> SearchArgs {
        SearchArgs {
            query: query.to_string(),
            language: "en".to_string(),
            page: 1,
            per_page: 20,
        }
    }

    #[test]
    fn test_blank_query_rejected() {
        assert!(args("").to_query().is_err());
        assert!(args("   ").to_query().is_err());
    }

    #[test]
    fn test_query_is_sent_unchanged() {
        let query = args("  mercy ").to_query().unwrap();
        assert_eq!(query.q, "  mercy ");
        assert_eq!(query, SearchQuery::new("  mercy "));
    }
}

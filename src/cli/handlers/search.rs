//! Search command handler.

use anyhow::{Context, Result};
use std::path::Path;

use super::open_store;
use crate::cli::SearchArgs;
use crate::cli::output::{Output, OutputFormat, PageListing};
use crate::store::WikiRepository;

pub fn handle_search(args: &SearchArgs, db_path: &Path) -> Result<()> {
    let store = open_store(db_path)?;
    let pages = store
        .search_pages(&args.query)
        .with_context(|| format!("search failed for query: {}", args.query))?;

    match args.format {
        OutputFormat::Human => {
            if pages.is_empty() {
                println!("No matching pages found.");
            } else {
                for page in &pages {
                    println!("{} ({})", page.title.display(), page.title);
                }
                println!();
                println!("{} result(s)", pages.len());
            }
        }
        OutputFormat::Json => {
            let listings: Vec<PageListing> = pages
                .iter()
                .map(|p| PageListing {
                    id: p.id,
                    title: p.title.to_string(),
                    updated_at: p.updated_at,
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&Output::new(listings))?);
        }
        OutputFormat::Titles => {
            for page in &pages {
                println!("{}", page.title);
            }
        }
    }
    Ok(())
}

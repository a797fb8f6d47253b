//! Page command handlers.

use anyhow::{Context, Result};
use std::path::Path;

use super::{open_store, parse_title, read_body};
use crate::cli::config::Config;
use crate::cli::output::{Output, OutputFormat, PageListing, PageView};
use crate::cli::{DeleteArgs, ListArgs, PageCommand, SaveArgs, ShowArgs};
use crate::domain::Page;
use crate::render::{RenderPipeline, RenderedPage, render_page_document};
use crate::store::{StoreError, WikiRepository};

pub fn handle_page(command: &PageCommand, db_path: &Path, config: &Config) -> Result<()> {
    match command {
        PageCommand::Save(args) => save_page(args, db_path),
        PageCommand::Show(args) => show_page(args, db_path, config),
        PageCommand::Delete(args) => delete_page(args, db_path),
        PageCommand::List(args) => list_pages(args, db_path),
    }
}

/// Builds the JSON view of a rendered page.
pub fn page_view(page: &Page, rendered: RenderedPage) -> PageView {
    PageView {
        title: page.title.to_string(),
        display_title: page.title.display(),
        html: rendered.html,
        categories: rendered.categories,
        updated_at: page.updated_at,
    }
}

fn save_page(args: &SaveArgs, db_path: &Path) -> Result<()> {
    let title = parse_title(&args.title)?;
    let body = read_body(args.file.as_deref())?;

    let mut store = open_store(db_path)?;
    let page = store
        .save_page(&title, &body)
        .with_context(|| format!("failed to save page: {}", title))?;

    println!("Saved page {}", page.title);
    Ok(())
}

fn show_page(args: &ShowArgs, db_path: &Path, config: &Config) -> Result<()> {
    let title = parse_title(&args.title)?;
    let store = open_store(db_path)?;
    let page = store
        .get_page(&title)?
        .ok_or_else(|| StoreError::NotFound {
            kind: "page",
            title: title.to_string(),
        })?;

    let pipeline = RenderPipeline::with_link_base(config.link_base());
    let rendered = pipeline.render(&page.body, &store);

    match args.format {
        OutputFormat::Human if args.standalone => {
            println!("{}", render_page_document(&page, &rendered, config.site_title())?);
        }
        OutputFormat::Human => {
            println!("{}", rendered.html.trim_end());
            if !rendered.categories.is_empty() {
                let names: Vec<&str> = rendered.categories.iter().map(|c| c.name.as_str()).collect();
                println!();
                println!("Categories: {}", names.join(", "));
            }
        }
        OutputFormat::Json => {
            let output = Output::new(page_view(&page, rendered));
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Titles => println!("{}", page.title),
    }
    Ok(())
}

fn delete_page(args: &DeleteArgs, db_path: &Path) -> Result<()> {
    let title = parse_title(&args.title)?;
    let mut store = open_store(db_path)?;
    store.delete_page(&title)?;

    println!("Deleted page {}", title);
    Ok(())
}

fn list_pages(args: &ListArgs, db_path: &Path) -> Result<()> {
    let store = open_store(db_path)?;
    let pages = store.list_pages().context("failed to list pages")?;

    match args.format {
        OutputFormat::Human => {
            if pages.is_empty() {
                println!("No pages.");
            }
            for page in &pages {
                println!("{}  {}", page.updated_at.format("%Y-%m-%d"), page.title);
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

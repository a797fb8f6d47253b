//! Category command handlers.

use anyhow::{Context, Result};
use std::path::Path;

use super::{open_store, parse_title, read_body};
use crate::cli::config::Config;
use crate::cli::output::{CategoryListing, CategoryView, Output, OutputFormat};
use crate::cli::{AddArgs, CategoryCommand, DeleteArgs, ListArgs, SaveArgs, ShowArgs};
use crate::domain::Category;
use crate::render::{CategoryMembers, RenderPipeline, RenderedPage, render_category_document};
use crate::store::{StoreError, WikiRepository};

pub fn handle_category(command: &CategoryCommand, db_path: &Path, config: &Config) -> Result<()> {
    match command {
        CategoryCommand::Add(args) => add_category(args, db_path),
        CategoryCommand::Save(args) => save_category(args, db_path),
        CategoryCommand::Show(args) => show_category(args, db_path, config),
        CategoryCommand::Delete(args) => delete_category(args, db_path),
        CategoryCommand::List(args) => list_categories(args, db_path),
    }
}

/// Builds the JSON view of a rendered category.
pub fn category_view(
    category: &Category,
    rendered: RenderedPage,
    members: CategoryMembers,
    parents: Vec<String>,
) -> CategoryView {
    CategoryView {
        title: category.title.to_string(),
        html: rendered.html,
        categories: rendered.categories,
        parents,
        subcategories: members.subcategories,
        pages: members.pages,
    }
}

fn add_category(args: &AddArgs, db_path: &Path) -> Result<()> {
    let title = parse_title(&args.title)?;
    let mut store = open_store(db_path)?;
    let category = store.add_category(&title)?;

    println!("Added category {}", category.title);
    Ok(())
}

fn save_category(args: &SaveArgs, db_path: &Path) -> Result<()> {
    let title = parse_title(&args.title)?;
    let body = read_body(args.file.as_deref())?;

    let mut store = open_store(db_path)?;
    let category = store
        .save_category(&title, &body)
        .with_context(|| format!("failed to save category: {}", title))?;

    println!("Saved category {}", category.title);
    Ok(())
}

fn show_category(args: &ShowArgs, db_path: &Path, config: &Config) -> Result<()> {
    let title = parse_title(&args.title)?;
    let store = open_store(db_path)?;
    let category = store
        .get_category(&title)?
        .ok_or_else(|| StoreError::NotFound {
            kind: "category",
            title: title.to_string(),
        })?;

    let pipeline = RenderPipeline::with_link_base(config.link_base());
    let rendered = pipeline.render(&category.body, &store);
    let members = CategoryMembers {
        pages: store.pages_in_category(category.id)?,
        subcategories: store.subcategories(category.id)?,
    };

    match args.format {
        OutputFormat::Human if args.standalone => {
            let html = render_category_document(
                &category,
                &rendered,
                &members,
                config.link_base(),
                config.site_title(),
            )?;
            println!("{}", html);
        }
        OutputFormat::Human => {
            if !rendered.html.trim().is_empty() {
                println!("{}", rendered.html.trim_end());
                println!();
            }
            if !members.subcategories.is_empty() {
                println!("Subcategories: {}", members.subcategories.join(", "));
            }
            if members.pages.is_empty() {
                println!("This category currently contains no pages or media.");
            } else {
                println!("Pages: {}", members.pages.join(", "));
            }
        }
        OutputFormat::Json => {
            let parents = store.parent_categories(category.id)?;
            let output = Output::new(category_view(&category, rendered, members, parents));
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Titles => {
            for page in &members.pages {
                println!("{}", page);
            }
        }
    }
    Ok(())
}

fn delete_category(args: &DeleteArgs, db_path: &Path) -> Result<()> {
    let title = parse_title(&args.title)?;
    let mut store = open_store(db_path)?;
    store.delete_category(&title)?;

    println!("Deleted category {}", title);
    Ok(())
}

fn list_categories(args: &ListArgs, db_path: &Path) -> Result<()> {
    let store = open_store(db_path)?;
    let categories = store
        .list_categories()
        .context("failed to list categories")?;

    match args.format {
        OutputFormat::Human => {
            if categories.is_empty() {
                println!("No categories.");
            }
            for category in &categories {
                println!("Category:{}", category.title);
            }
        }
        OutputFormat::Json => {
            let listings: Vec<CategoryListing> = categories
                .iter()
                .map(|c| CategoryListing {
                    id: c.id,
                    title: c.title.to_string(),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&Output::new(listings))?);
        }
        OutputFormat::Titles => {
            for category in &categories {
                println!("{}", category.title);
            }
        }
    }
    Ok(())
}

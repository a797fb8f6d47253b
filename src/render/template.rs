//! Full-document HTML for page and category views.

use std::collections::BTreeMap;

use anyhow::Result;
use chrono::{DateTime, Utc};
use minijinja::{Environment, context};
use serde::Serialize;

use crate::domain::{Category, Page};
use crate::infra::display_title;
use crate::render::pipeline::RenderedPage;

/// Default template for a page view.
pub const DEFAULT_PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{{ title }} - {{ site_title }}</title>
</head>
<body>
    <article>
        <header><h1 class="page-title">{{ title }}</h1></header>
        <main>{{ content }}</main>
        {% if categories %}
        <nav class="categories">Categories:
            {% for category in categories %}<a class="badge" href="{{ category.href }}">{{ category.name }}</a>{% endfor %}
        </nav>
        {% endif %}
        <footer>{{ footer }}</footer>
    </article>
</body>
</html>"##;

/// Default template for a category view.
pub const DEFAULT_CATEGORY_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Category:{{ title }} - {{ site_title }}</title>
</head>
<body>
    <article>
        <header><h1 class="page-title">Category:{{ title }}</h1></header>
        <main>{{ content }}</main>
        {% if subcategories %}
        <h2 class="wikih2">Subcategories</h2>
        {% for group in subcategories %}<h3>{{ group.letter }}</h3><ul>
{% for link in group.links %}<li><a href="{{ link.href }}">{{ link.title }}</a></li>
{% endfor %}</ul>{% endfor %}
        {% endif %}
        {% if pages %}
        <h2 class="wikih2">Pages in category</h2>
        {% for group in pages %}<h3>{{ group.letter }}</h3><ul>
{% for link in group.links %}<li><a href="{{ link.href }}">{{ link.title }}</a></li>
{% endfor %}</ul>{% endfor %}
        {% else %}
        <p>This category currently contains no pages or media.</p>
        {% endif %}
    </article>
</body>
</html>"##;

/// A link in a letter-grouped listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingLink {
    pub title: String,
    pub href: String,
}

/// Links sharing an upper-cased first letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LetterGroup {
    pub letter: String,
    pub links: Vec<ListingLink>,
}

/// Groups titles under their upper-cased first letter, letters in order.
///
/// `href_prefix` is prepended to each title, e.g. `/title/` or
/// `/title/Category:`.
pub fn group_by_letter(titles: &[String], href_prefix: &str) -> Vec<LetterGroup> {
    let mut groups: BTreeMap<String, Vec<ListingLink>> = BTreeMap::new();
    for title in titles {
        let letter = title
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect::<String>())
            .unwrap_or_default();
        groups.entry(letter).or_default().push(ListingLink {
            title: title.clone(),
            href: format!("{}{}", href_prefix, title),
        });
    }
    groups
        .into_iter()
        .map(|(letter, links)| LetterGroup { letter, links })
        .collect()
}

/// Footer line for a page's last modification time.
pub fn modified_footer(updated_at: DateTime<Utc>) -> String {
    format!(
        "This page was last modified on {}",
        updated_at.format("%-d %B %Y, at %H:%M")
    )
}

/// Renders a page view around an already rendered body.
pub fn render_page_document(page: &Page, rendered: &RenderedPage, site_title: &str) -> Result<String> {
    let mut env = Environment::new();
    env.add_template("page", DEFAULT_PAGE_TEMPLATE)?;
    let tmpl = env.get_template("page")?;

    let html = tmpl.render(context! {
        title => page.title.display(),
        site_title => site_title,
        content => &rendered.html,
        categories => &rendered.categories,
        footer => modified_footer(page.updated_at),
    })?;

    Ok(html)
}

/// Members of a category, read from the edge tables.
#[derive(Debug, Clone, Default)]
pub struct CategoryMembers {
    pub pages: Vec<String>,
    pub subcategories: Vec<String>,
}

/// Renders a category view: its own body plus subcategory and page listings.
pub fn render_category_document(
    category: &Category,
    rendered: &RenderedPage,
    members: &CategoryMembers,
    link_base: &str,
    site_title: &str,
) -> Result<String> {
    let mut env = Environment::new();
    env.add_template("category", DEFAULT_CATEGORY_TEMPLATE)?;
    let tmpl = env.get_template("category")?;

    let html = tmpl.render(context! {
        title => display_title(category.title.as_str()),
        site_title => site_title,
        content => &rendered.html,
        subcategories => group_by_letter(&members.subcategories, &format!("{}Category:", link_base)),
        pages => group_by_letter(&members.pages, link_base),
    })?;

    Ok(html)
}

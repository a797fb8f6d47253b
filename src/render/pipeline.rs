//! The fixed-order rendering pipeline for one page or category body.

use serde::Serialize;
use tracing::{debug, warn};

use crate::render::categories::{extract_category_refs, remove_category_tags};
use crate::render::headings::{decorate_headings, identify_headings};
use crate::render::links::LinkRewriter;
use crate::render::markdown::{MarkdownConverter, PulldownMarkdown};
use crate::render::toc::build_toc;
use crate::store::StoreResult;

/// Looks up a category's id by name.
///
/// `Ok(None)` means the category does not exist.
pub trait CategoryResolver {
    fn resolve_category_id(&self, name: &str) -> StoreResult<Option<i64>>;
}

impl<F> CategoryResolver for F
where
    F: Fn(&str) -> StoreResult<Option<i64>>,
{
    fn resolve_category_id(&self, name: &str) -> StoreResult<Option<i64>> {
        self(name)
    }
}

/// One transformation step over the HTML produced by the Markdown converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    IdentifyHeadings,
    BuildToc,
    ExtractCategories,
    RemoveCategoryTags,
    DecorateHeadings,
    RewriteLinks,
}

/// The stage order. Each stage only ever sees the output of the ones before it.
pub const STAGES: [Stage; 6] = [
    Stage::IdentifyHeadings,
    Stage::BuildToc,
    Stage::ExtractCategories,
    Stage::RemoveCategoryTags,
    Stage::DecorateHeadings,
    Stage::RewriteLinks,
];

/// Working state threaded through the stages.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RenderState {
    pub html: String,
    pub category_refs: Vec<String>,
}

impl Stage {
    /// Applies this stage to the working state.
    pub fn apply(self, state: &mut RenderState, links: &LinkRewriter) {
        match self {
            Stage::IdentifyHeadings => state.html = identify_headings(&state.html),
            Stage::BuildToc => state.html = build_toc(&state.html),
            Stage::ExtractCategories => state.category_refs = extract_category_refs(&state.html),
            Stage::RemoveCategoryTags => state.html = remove_category_tags(&state.html),
            Stage::DecorateHeadings => state.html = decorate_headings(&state.html),
            Stage::RewriteLinks => state.html = links.rewrite(&state.html).content,
        }
    }
}

/// A category reference that resolved to a stored category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryLink {
    pub name: String,
    pub id: i64,
    pub href: String,
}

/// Output of rendering one body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedPage {
    /// Final HTML fragment.
    pub html: String,
    /// Every `[Category:Name]` in the body, in order, duplicates kept.
    pub category_refs: Vec<String>,
    /// References that resolved, first occurrence only, for "belongs to" badges.
    pub categories: Vec<CategoryLink>,
}

/// Renders raw wiki markup to HTML.
///
/// Stateless once built; share one instance across threads.
pub struct RenderPipeline {
    markdown: Box<dyn MarkdownConverter>,
    links: LinkRewriter,
}

impl Default for RenderPipeline {
    fn default() -> Self {
        Self::new(Box::new(PulldownMarkdown), LinkRewriter::default())
    }
}

impl RenderPipeline {
    pub fn new(markdown: Box<dyn MarkdownConverter>, links: LinkRewriter) -> Self {
        Self { markdown, links }
    }

    /// Uses the default Markdown converter with a custom link prefix.
    pub fn with_link_base(base: impl Into<String>) -> Self {
        Self::new(Box::new(PulldownMarkdown), LinkRewriter::new(base))
    }

    /// Returns the link rewriter used by the final stage.
    pub fn links(&self) -> &LinkRewriter {
        &self.links
    }

    /// Converts Markdown and runs every stage, without resolving categories.
    ///
    /// # Example
    ///
    /// ```
    /// use arcwiki::render::RenderPipeline;
    ///
    /// let state = RenderPipeline::default().transform("## B\n## A\n[Category:Cats]");
    /// assert_eq!(state.category_refs, vec!["Cats"]);
    /// assert!(state.html.contains("<div class=\"toc\">"));
    /// assert!(!state.html.contains("[Category:"));
    /// ```
    pub fn transform(&self, body: &str) -> RenderState {
        let mut state = RenderState {
            html: self.markdown.to_html(body),
            category_refs: Vec::new(),
        };
        for stage in STAGES {
            stage.apply(&mut state, &self.links);
        }
        state
    }

    /// Renders a body and resolves its category references.
    ///
    /// Unknown categories and lookup failures are logged and left out of
    /// [`RenderedPage::categories`]; they never fail the render.
    pub fn render(&self, body: &str, resolver: &dyn CategoryResolver) -> RenderedPage {
        let state = self.transform(body);
        let mut categories: Vec<CategoryLink> = Vec::new();

        for name in &state.category_refs {
            if categories.iter().any(|c| &c.name == name) {
                continue;
            }
            match resolver.resolve_category_id(name) {
                Ok(Some(id)) => categories.push(CategoryLink {
                    name: name.clone(),
                    id,
                    href: self.links.href(&format!("Category:{}", name)),
                }),
                Ok(None) => warn!(category = %name, "unknown category reference"),
                Err(err) => warn!(category = %name, error = %err, "category lookup failed"),
            }
        }

        debug!(
            refs = state.category_refs.len(),
            resolved = categories.len(),
            "rendered body"
        );

        RenderedPage {
            html: state.html,
            category_refs: state.category_refs,
            categories,
        }
    }
}

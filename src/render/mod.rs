//! Wiki markup rendering.
//!
//! A body goes through Markdown conversion and then a fixed sequence of
//! text stages: heading ids, table of contents, category tag extraction and
//! removal, heading decoration, and internal link rewriting.

mod categories;
mod headings;
mod links;
mod markdown;
mod pipeline;
pub mod template;
mod toc;

pub use categories::{extract_category_refs, remove_category_tags};
pub use headings::{decorate_headings, heading_id, identify_headings, parse_headings};
pub use links::{DEFAULT_LINK_BASE, LinkRewrite, LinkRewriter};
pub use markdown::{MarkdownConverter, PulldownMarkdown, markdown_to_html};
pub use pipeline::{
    CategoryLink, CategoryResolver, RenderPipeline, RenderState, RenderedPage, STAGES, Stage,
};
pub use template::{CategoryMembers, render_category_document, render_page_document};
pub use toc::{MIN_TOC_HEADINGS, TocBuilder, TocEntry, build_toc};

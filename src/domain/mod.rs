//! Core types: CanonicalTitle, Page, Category, EdgeKind, Heading

mod edge;
mod heading;
mod page;
mod title;

pub use edge::EdgeKind;
pub use heading::Heading;
pub use page::{Category, OwnerBody, Page};
pub use title::{CanonicalTitle, ParseTitleError};

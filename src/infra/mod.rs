//! Title canonicalization and logging setup

mod logging;
mod slug;

pub use logging::{LogSettings, init_logging};
pub use slug::{canonicalize, display_title};

//! Link records and the card renderer.
//!
//! - [`LinkEntry`]: A link as written in configuration
//! - [`LinkRecord`] / [`LinkIcon`]: A validated link with a tagged icon
//! - [`LinksRenderer`]: Materializes links as cards inside a container
//! - [`sample_links`]: The stock three-link list

mod record;
mod renderer;
mod sample;

pub use record::{validate_entries, LinkEntry, LinkError, LinkIcon, LinkRecord};
pub use renderer::{LinksRenderer, CARD_CLASS, CONTENT_CLASS, ICON_CLASS, TITLE_CLASS};
pub use sample::sample_links;

//! # linkbio - Link-in-bio pages with device-aware theming
//!
//! `linkbio` builds a personal landing page: a list of outbound links shown
//! as cards, plus a light/dark toggle that follows the viewer's device
//! preference.
//!
//! The page lives in an in-memory [`dom::Document`]. Two independent
//! components mount onto it:
//!
//! - [`ThemeManager`] owns the active [`ColorMode`], writes it to the
//!   `data-theme` attribute of the root element and keeps the toggle glyph in
//!   sync. Clicks on the toggle flip the theme; device preference changes
//!   (reported through [`ColorSchemeQuery`]) overwrite it.
//! - [`LinksRenderer`] validates a list of [`LinkEntry`]s and renders one card
//!   per valid link into the links container.
//!
//! [`PageExporter`] turns the mounted document into a standalone HTML file.
//!
//! ## Quick Start
//!
//! ```rust
//! use linkbio::{
//!     build_host_document, ColorMode, ColorSchemeQuery, LinkPage, PageConfig, PageExporter, Window,
//! };
//!
//! let config = PageConfig::default();
//! let window = Window::new(
//!     build_host_document(&config).unwrap(),
//!     ColorSchemeQuery::new(ColorMode::Light),
//! );
//! let page = LinkPage::mount(&window, &config).unwrap();
//!
//! page.theme().toggle_theme();
//! assert_eq!(page.theme().theme(), ColorMode::Dark);
//!
//! // The device signal always wins when it changes.
//! window.color_scheme().set_preference(ColorMode::Dark);
//! window.color_scheme().set_preference(ColorMode::Light);
//! assert_eq!(page.theme().theme(), ColorMode::Light);
//!
//! let html = PageExporter::new().unwrap().export(window.document()).unwrap();
//! assert!(html.contains(r#"rel="noopener noreferrer""#));
//! ```
//!
//! ## Malformed links
//!
//! A link whose `iconType` is unknown, or that lacks the field its
//! `iconType` requires, is skipped with a warning; the remaining links still
//! render. A missing toggle or container is a construction error
//! ([`PageError`]).

mod app;
pub mod cli;
mod config;
pub mod dom;
mod error;
pub mod events;
mod export;
mod host;
mod links;
mod theme;
mod util;
mod window;

pub use app::LinkPage;
pub use config::{ConfigError, PageConfig, Profile};
pub use error::PageError;
pub use export::{ExportError, PageExporter, PAGE_TEMPLATE};
pub use host::build_host_document;
pub use links::{
    sample_links, validate_entries, LinkEntry, LinkError, LinkIcon, LinkRecord, LinksRenderer,
    CARD_CLASS, CONTENT_CLASS, ICON_CLASS, TITLE_CLASS,
};
pub use theme::{
    detect_os_color_mode, ColorMode, ColorSchemeQuery, ParseColorModeError, PreferenceDetector,
    ThemeConfig, ThemeManager,
};
pub use util::{animation_delay, pad_to_width, truncate_to_width};
pub use window::Window;

//! The browsing environment a page is mounted into.

use crate::dom::Document;
use crate::theme::{ColorMode, ColorSchemeQuery};

/// A document together with the device color-scheme signal.
#[derive(Debug, Clone)]
pub struct Window {
    document: Document,
    color_scheme: ColorSchemeQuery,
}

impl Window {
    pub fn new(document: Document, color_scheme: ColorSchemeQuery) -> Self {
        Self {
            document,
            color_scheme,
        }
    }

    /// A window over an empty document with a fixed device preference.
    pub fn with_preference(preference: ColorMode) -> Self {
        Self::new(Document::new(), ColorSchemeQuery::new(preference))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn color_scheme(&self) -> &ColorSchemeQuery {
        &self.color_scheme
    }
}

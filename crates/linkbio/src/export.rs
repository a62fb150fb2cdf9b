//! Static HTML snapshots of a mounted page.

use std::path::Path;

use minijinja::Environment;
use serde::Serialize;

use crate::dom::{Document, DomError};

/// Name of the page template, built in or looked up in a template directory.
pub const PAGE_TEMPLATE: &str = "page.html";

const BUILTIN_PAGE: &str = include_str!("../templates/page.html");

/// Error returned when a snapshot cannot be produced.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
    #[error(transparent)]
    Dom(#[from] DomError),
    #[error("document has no <{0}> element")]
    MissingElement(&'static str),
}

#[derive(Debug, Serialize)]
struct PageContext {
    root_attributes: Vec<(String, String)>,
    head: String,
    body: String,
}

/// Writes the current state of a document into a standalone HTML page.
///
/// The root element's attributes (including the theme attribute) and the
/// serialized `<head>`/`<body>` contents are handed to the `page.html`
/// template.
///
/// # Example
///
/// ```rust
/// use linkbio::{build_host_document, ColorMode, ColorSchemeQuery, LinkPage, PageConfig, PageExporter, Window};
///
/// let config = PageConfig::default();
/// let window = Window::new(
///     build_host_document(&config).unwrap(),
///     ColorSchemeQuery::new(ColorMode::Dark),
/// );
/// let _page = LinkPage::mount(&window, &config).unwrap();
///
/// let html = PageExporter::new().unwrap().export(window.document()).unwrap();
/// assert!(html.contains(r#"data-theme="dark""#));
/// assert!(html.contains("Encomendas Personalizadas"));
/// ```
pub struct PageExporter {
    env: Environment<'static>,
}

impl PageExporter {
    /// Creates an exporter using the built-in page template.
    pub fn new() -> Result<Self, ExportError> {
        let mut env = Environment::new();
        env.add_template(PAGE_TEMPLATE, BUILTIN_PAGE)?;
        Ok(Self { env })
    }

    /// Creates an exporter that loads templates from `dir`.
    ///
    /// Falls back to the built-in page when `dir` has no `page.html`. Other
    /// templates in `dir` are available to `{% include %}` and
    /// `{% extends %}`.
    pub fn with_template_dir(dir: &Path) -> Result<Self, ExportError> {
        let mut env = Environment::new();
        if !dir.join(PAGE_TEMPLATE).is_file() {
            tracing::warn!(dir = %dir.display(), "no {} in template dir; using built-in page", PAGE_TEMPLATE);
            env.add_template(PAGE_TEMPLATE, BUILTIN_PAGE)?;
        }
        env.set_loader(minijinja::path_loader(dir.to_path_buf()));
        // Surface syntax errors at construction.
        env.get_template(PAGE_TEMPLATE)?;
        Ok(Self { env })
    }

    /// Renders the document's current state.
    pub fn export(&self, document: &Document) -> Result<String, ExportError> {
        let root = document.document_element();
        let head = document
            .query_selector_tag(root, "head")
            .ok_or(ExportError::MissingElement("head"))?;
        let body = document
            .query_selector_tag(root, "body")
            .ok_or(ExportError::MissingElement("body"))?;

        let context = PageContext {
            root_attributes: document.attributes(root),
            head: document.inner_html(head)?,
            body: document.inner_html(body)?,
        };
        let tmpl = self.env.get_template(PAGE_TEMPLATE)?;
        Ok(tmpl.render(&context)?)
    }
}

impl std::fmt::Debug for PageExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageExporter").finish_non_exhaustive()
    }
}

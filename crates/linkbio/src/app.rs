//! Page-load bootstrap.

use crate::config::PageConfig;
use crate::error::PageError;
use crate::links::LinksRenderer;
use crate::theme::ThemeManager;
use crate::window::Window;

/// Both page components, mounted on one window.
///
/// The two components share nothing; they are only constructed together.
///
/// # Example
///
/// ```rust
/// use linkbio::{build_host_document, ColorMode, ColorSchemeQuery, LinkPage, PageConfig, Window};
///
/// let config = PageConfig::default();
/// let document = build_host_document(&config).unwrap();
/// let window = Window::new(document, ColorSchemeQuery::new(ColorMode::Dark));
///
/// let page = LinkPage::mount(&window, &config).unwrap();
/// assert_eq!(page.theme().theme(), ColorMode::Dark);
/// assert_eq!(page.links().cards().len(), 3);
/// ```
#[derive(Debug)]
pub struct LinkPage {
    theme: ThemeManager,
    links: LinksRenderer,
}

impl LinkPage {
    /// Constructs the theme manager and the links renderer.
    ///
    /// # Errors
    ///
    /// Fails if the document lacks the toggle control, its glyph, or the
    /// links container.
    pub fn mount(window: &Window, config: &PageConfig) -> Result<Self, PageError> {
        let theme = ThemeManager::new(window, config.theme.clone())?;
        let links = LinksRenderer::new(window.document(), &config.container_id, &config.links)?;

        tracing::info!(
            theme = %theme.theme(),
            links = links.links().len(),
            skipped = links.skipped().len(),
            "page mounted"
        );
        Ok(Self { theme, links })
    }

    pub fn theme(&self) -> &ThemeManager {
        &self.theme
    }

    pub fn links(&self) -> &LinksRenderer {
        &self.links
    }

    /// Tears down event handlers. The document keeps its current content.
    pub fn dispose(self) {
        self.theme.dispose();
    }
}

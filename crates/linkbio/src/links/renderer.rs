//! Projection of link records into card elements.

use super::record::{validate_entries, LinkEntry, LinkError, LinkIcon, LinkRecord};
use crate::dom::{Document, DomError, NodeId};
use crate::error::PageError;
use crate::util::animation_delay;

pub const CARD_CLASS: &str = "link-card";
pub const ICON_CLASS: &str = "link-icon";
pub const CONTENT_CLASS: &str = "link-content";
pub const TITLE_CLASS: &str = "link-title";

/// Renders a fixed list of links as cards inside a container element.
///
/// Each card is an anchor opening its link in a new browsing context with
/// `rel="noopener noreferrer"`:
///
/// ```html
/// <a href="…" class="link-card" target="_blank" rel="noopener noreferrer"
///    style="animation-delay: 0.1s">
///   <div class="link-icon"><img src="…" alt="…"> or <i class="…"></i></div>
///   <div class="link-content"><h3 class="link-title">…</h3></div>
/// </a>
/// ```
///
/// Entries are validated once, at construction. Invalid entries are skipped
/// and reported through [`skipped`](Self::skipped).
///
/// # Example
///
/// ```rust
/// use linkbio::dom::Document;
/// use linkbio::{sample_links, LinksRenderer};
///
/// let doc = Document::new();
/// let container = doc.create_element("main");
/// doc.set_attribute(container, "id", "linksContainer").unwrap();
/// doc.append_child(doc.document_element(), container).unwrap();
///
/// let renderer = LinksRenderer::new(&doc, "linksContainer", &sample_links()).unwrap();
/// assert_eq!(renderer.cards().len(), 3);
/// ```
#[derive(Debug)]
pub struct LinksRenderer {
    document: Document,
    container: NodeId,
    links: Vec<LinkRecord>,
    skipped: Vec<LinkError>,
}

impl LinksRenderer {
    /// Attaches to the container, validates the entries and renders them.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::ContainerNotFound`] if no element has
    /// `container_id`.
    pub fn new(
        document: &Document,
        container_id: &str,
        entries: &[LinkEntry],
    ) -> Result<Self, PageError> {
        let container =
            document
                .get_element_by_id(container_id)
                .ok_or_else(|| PageError::ContainerNotFound {
                    id: container_id.to_string(),
                })?;
        let (links, skipped) = validate_entries(entries);

        let renderer = Self {
            document: document.clone(),
            container,
            links,
            skipped,
        };
        renderer.render()?;
        Ok(renderer)
    }

    /// Replaces the container's content with one card per link, in order.
    ///
    /// Rendering is idempotent: repeated calls leave exactly one card per
    /// link. Returns the number of cards rendered.
    pub fn render(&self) -> Result<usize, PageError> {
        self.document.clear_children(self.container)?;

        for (index, link) in self.links.iter().enumerate() {
            let card = self.create_card(link)?;
            self.document
                .set_style_property(card, "animation-delay", &animation_delay(index))?;
            self.document.append_child(self.container, card)?;
        }

        tracing::debug!(
            cards = self.links.len(),
            skipped = self.skipped.len(),
            "rendered link cards"
        );
        Ok(self.links.len())
    }

    fn create_card(&self, link: &LinkRecord) -> Result<NodeId, DomError> {
        let doc = &self.document;

        let card = doc.create_element("a");
        doc.set_attribute(card, "href", &link.url)?;
        doc.set_attribute(card, "class", CARD_CLASS)?;
        doc.set_attribute(card, "target", "_blank")?;
        doc.set_attribute(card, "rel", "noopener noreferrer")?;

        let icon = doc.create_element("div");
        doc.set_attribute(icon, "class", ICON_CLASS)?;
        match &link.icon {
            LinkIcon::Image { source } => {
                let img = doc.create_element("img");
                doc.set_attribute(img, "src", source)?;
                doc.set_attribute(img, "alt", &link.title)?;
                doc.append_child(icon, img)?;
            }
            LinkIcon::Glyph { class } => {
                let glyph = doc.create_element("i");
                doc.set_attribute(glyph, "class", class)?;
                doc.append_child(icon, glyph)?;
            }
        }

        let content = doc.create_element("div");
        doc.set_attribute(content, "class", CONTENT_CLASS)?;
        let title = doc.create_element("h3");
        doc.set_attribute(title, "class", TITLE_CLASS)?;
        doc.set_text_content(title, &link.title)?;
        doc.append_child(content, title)?;

        doc.append_child(card, icon)?;
        doc.append_child(card, content)?;
        Ok(card)
    }

    /// The valid links, in render order.
    pub fn links(&self) -> &[LinkRecord] {
        &self.links
    }

    /// Entries rejected at construction.
    pub fn skipped(&self) -> &[LinkError] {
        &self.skipped
    }

    pub fn container(&self) -> NodeId {
        self.container
    }

    /// The card elements currently in the container.
    pub fn cards(&self) -> Vec<NodeId> {
        self.document.children(self.container)
    }
}

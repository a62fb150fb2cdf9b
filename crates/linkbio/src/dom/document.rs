//! The shared document handle.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use super::html;
use super::tree::{Element, NodeData, NodeId, Tree};
use super::DomError;
use crate::events::{EventSource, Subscription};

/// A click delivered to an element or one of its ancestors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent {
    /// The element that was clicked.
    pub target: NodeId,
    /// The element whose handlers are being run.
    pub current_target: NodeId,
}

/// An in-memory HTML document.
///
/// `Document` is a cheap handle: clones share the same tree, so a component
/// can keep its own handle and mutate the page in place. The tree is rooted
/// at an `<html>` element (see [`document_element`](Self::document_element)).
///
/// # Example
///
/// ```rust
/// use linkbio::dom::Document;
///
/// let doc = Document::new();
/// let body = doc.create_element("body");
/// doc.append_child(doc.document_element(), body).unwrap();
///
/// let container = doc.create_element("main");
/// doc.set_attribute(container, "id", "linksContainer").unwrap();
/// doc.append_child(body, container).unwrap();
///
/// assert_eq!(doc.get_element_by_id("linksContainer"), Some(container));
/// ```
#[derive(Clone)]
pub struct Document {
    tree: Rc<RefCell<Tree>>,
    clicks: Rc<RefCell<HashMap<NodeId, EventSource<ClickEvent>>>>,
}

impl Document {
    /// Creates a document holding only the `<html>` root element.
    pub fn new() -> Self {
        Self {
            tree: Rc::new(RefCell::new(Tree::new("html"))),
            clicks: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    /// The root `<html>` element.
    pub fn document_element(&self) -> NodeId {
        self.tree.borrow().root()
    }

    /// Creates a detached element.
    pub fn create_element(&self, tag: &str) -> NodeId {
        self.tree.borrow_mut().insert(NodeData::Element(Element {
            tag: tag.to_ascii_lowercase(),
            attributes: Vec::new(),
        }))
    }

    /// Creates a detached text node.
    pub fn create_text_node(&self, text: &str) -> NodeId {
        self.tree
            .borrow_mut()
            .insert(NodeData::Text(text.to_string()))
    }

    /// Appends `child` as the last child of `parent`, moving it if it is
    /// already attached elsewhere.
    pub fn append_child(&self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.tree.borrow_mut().append(parent, child)
    }

    /// Removes a node and its subtree from the document.
    pub fn remove(&self, node: NodeId) -> Result<(), DomError> {
        if node == self.document_element() {
            return Err(DomError::HierarchyRequest {
                parent: node,
                child: node,
                reason: "the document root cannot be removed",
            });
        }
        let freed = self.tree.borrow_mut().free(node)?;
        self.forget_handlers(&freed);
        Ok(())
    }

    /// Removes every child of a node (the equivalent of `innerHTML = ""`).
    pub fn clear_children(&self, node: NodeId) -> Result<(), DomError> {
        let freed = self.tree.borrow_mut().clear_children(node)?;
        self.forget_handlers(&freed);
        Ok(())
    }

    fn forget_handlers(&self, freed: &[NodeId]) {
        let mut clicks = self.clicks.borrow_mut();
        for id in freed {
            clicks.remove(id);
        }
    }

    /// Returns the first attached element whose `id` attribute matches.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        let tree = self.tree.borrow();
        tree.descendants(tree.root())
            .ok()?
            .into_iter()
            .find(|node| tree.element(*node).and_then(|e| e.attribute("id")) == Some(id))
    }

    /// Returns the first descendant of `scope` (excluding `scope` itself)
    /// with the given tag name.
    pub fn query_selector_tag(&self, scope: NodeId, tag: &str) -> Option<NodeId> {
        let tree = self.tree.borrow();
        tree.descendants(scope)
            .ok()?
            .into_iter()
            .skip(1)
            .find(|node| {
                tree.element(*node)
                    .is_some_and(|e| e.tag.eq_ignore_ascii_case(tag))
            })
    }

    /// Returns every descendant of `scope` (excluding `scope` itself) with the
    /// given tag name, in document order.
    pub fn query_selector_all_tag(&self, scope: NodeId, tag: &str) -> Vec<NodeId> {
        let tree = self.tree.borrow();
        let Ok(nodes) = tree.descendants(scope) else {
            return Vec::new();
        };
        nodes
            .into_iter()
            .skip(1)
            .filter(|node| {
                tree.element(*node)
                    .is_some_and(|e| e.tag.eq_ignore_ascii_case(tag))
            })
            .collect()
    }

    /// Whether the node is live and connected to the document root.
    pub fn is_attached(&self, node: NodeId) -> bool {
        let tree = self.tree.borrow();
        tree.get(node).is_ok() && tree.is_ancestor_or_self(tree.root(), node)
    }

    /// The node's tag name, or `None` for text nodes and dead ids.
    pub fn tag_name(&self, node: NodeId) -> Option<String> {
        self.tree.borrow().element(node).map(|e| e.tag.clone())
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.tree.borrow().get(node).ok()?.parent
    }

    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.tree
            .borrow()
            .get(node)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.tree
            .borrow()
            .element(node)?
            .attribute(name)
            .map(str::to_string)
    }

    /// All attributes of an element, in insertion order.
    pub fn attributes(&self, node: NodeId) -> Vec<(String, String)> {
        self.tree
            .borrow()
            .element(node)
            .map(|e| e.attributes.clone())
            .unwrap_or_default()
    }

    pub fn set_attribute(&self, node: NodeId, name: &str, value: &str) -> Result<(), DomError> {
        self.tree
            .borrow_mut()
            .element_mut(node)?
            .set_attribute(name, value.to_string());
        Ok(())
    }

    pub fn remove_attribute(&self, node: NodeId, name: &str) -> Result<Option<String>, DomError> {
        Ok(self.tree.borrow_mut().element_mut(node)?.remove_attribute(name))
    }

    /// Replaces all children of a node with a single text node.
    pub fn set_text_content(&self, node: NodeId, text: &str) -> Result<(), DomError> {
        self.clear_children(node)?;
        let text_node = self.create_text_node(text);
        self.append_child(node, text_node)
    }

    /// Concatenated text of the node and its descendants.
    pub fn text_content(&self, node: NodeId) -> Option<String> {
        self.tree.borrow().text_content(node).ok()
    }

    /// Sets one declaration in the element's inline `style` attribute.
    pub fn set_style_property(
        &self,
        node: NodeId,
        property: &str,
        value: &str,
    ) -> Result<(), DomError> {
        let mut tree = self.tree.borrow_mut();
        let element = tree.element_mut(node)?;
        let mut declarations = parse_style(element.attribute("style").unwrap_or_default());
        match declarations.iter_mut().find(|(name, _)| name == property) {
            Some((_, existing)) => *existing = value.to_string(),
            None => declarations.push((property.to_string(), value.to_string())),
        }
        element.set_attribute("style", format_style(&declarations));
        Ok(())
    }

    /// Reads one declaration from the element's inline `style` attribute.
    pub fn style_property(&self, node: NodeId, property: &str) -> Option<String> {
        let style = self.attribute(node, "style")?;
        parse_style(&style)
            .into_iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value)
    }

    /// Registers a click handler on an element.
    ///
    /// Clicks bubble: a click on a descendant also runs the handlers of every
    /// ancestor, innermost first.
    pub fn on_click<F>(&self, node: NodeId, handler: F) -> Result<Subscription, DomError>
    where
        F: FnMut(&ClickEvent) + 'static,
    {
        self.tree.borrow().element(node).ok_or(DomError::NodeNotFound(node))?;
        let source = self
            .clicks
            .borrow_mut()
            .entry(node)
            .or_default()
            .clone();
        Ok(source.subscribe(handler))
    }

    /// Dispatches a click on `node`, bubbling up to the root.
    pub fn click(&self, node: NodeId) -> Result<(), DomError> {
        let path = {
            let tree = self.tree.borrow();
            let mut path = Vec::new();
            let mut current = Some(node);
            while let Some(id) = current {
                current = tree.get(id)?.parent;
                path.push(id);
            }
            path
        };

        for current_target in path {
            let source = self.clicks.borrow().get(&current_target).cloned();
            if let Some(source) = source {
                source.emit(&ClickEvent {
                    target: node,
                    current_target,
                });
            }
        }
        Ok(())
    }

    /// Serializes the node's children.
    pub fn inner_html(&self, node: NodeId) -> Result<String, DomError> {
        let mut out = String::new();
        html::write_inner(&self.tree.borrow(), node, &mut out)?;
        Ok(out)
    }

    /// Serializes the node including its own tag.
    pub fn outer_html(&self, node: NodeId) -> Result<String, DomError> {
        let mut out = String::new();
        html::write_outer(&self.tree.borrow(), node, &mut out)?;
        Ok(out)
    }

    /// Serializes the whole document, doctype included.
    pub fn to_html(&self) -> String {
        let tree = self.tree.borrow();
        let mut out = String::from("<!DOCTYPE html>");
        // The root is always live.
        let _ = html::write_outer(&tree, tree.root(), &mut out);
        out
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("root", &self.document_element())
            .finish_non_exhaustive()
    }
}

fn parse_style(style: &str) -> Vec<(String, String)> {
    style
        .split(';')
        .filter_map(|decl| {
            let (name, value) = decl.split_once(':')?;
            let name = name.trim();
            (!name.is_empty()).then(|| (name.to_string(), value.trim().to_string()))
        })
        .collect()
}

fn format_style(declarations: &[(String, String)]) -> String {
    declarations
        .iter()
        .map(|(name, value)| format!("{}: {}", name, value))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn page() -> (Document, NodeId) {
        let doc = Document::new();
        let body = doc.create_element("body");
        doc.append_child(doc.document_element(), body).unwrap();
        (doc, body)
    }

    #[test]
    fn test_get_element_by_id_ignores_detached() {
        let (doc, body) = page();
        let detached = doc.create_element("div");
        doc.set_attribute(detached, "id", "ghost").unwrap();
        assert_eq!(doc.get_element_by_id("ghost"), None);

        doc.append_child(body, detached).unwrap();
        assert_eq!(doc.get_element_by_id("ghost"), Some(detached));
    }

    #[test]
    fn test_query_selector_tag_finds_nested_icon() {
        let (doc, body) = page();
        let button = doc.create_element("button");
        let icon = doc.create_element("i");
        doc.append_child(body, button).unwrap();
        doc.append_child(button, icon).unwrap();

        assert_eq!(doc.query_selector_tag(button, "i"), Some(icon));
        assert_eq!(doc.query_selector_tag(icon, "i"), None);
    }

    #[test]
    fn test_set_text_content_replaces_children() {
        let (doc, body) = page();
        let heading = doc.create_element("h3");
        doc.append_child(body, heading).unwrap();
        doc.set_text_content(heading, "first").unwrap();
        doc.set_text_content(heading, "second").unwrap();

        assert_eq!(doc.children(heading).len(), 1);
        assert_eq!(doc.text_content(heading).as_deref(), Some("second"));
    }

    #[test]
    fn test_style_property_roundtrip() {
        let (doc, body) = page();
        doc.set_style_property(body, "animation-delay", "0.1s").unwrap();
        doc.set_style_property(body, "color", "red").unwrap();
        doc.set_style_property(body, "animation-delay", "0.2s").unwrap();

        assert_eq!(
            doc.attribute(body, "style").as_deref(),
            Some("animation-delay: 0.2s; color: red")
        );
        assert_eq!(doc.style_property(body, "color").as_deref(), Some("red"));
    }

    #[test]
    fn test_click_bubbles_to_ancestor() {
        let (doc, body) = page();
        let button = doc.create_element("button");
        let icon = doc.create_element("i");
        doc.append_child(body, button).unwrap();
        doc.append_child(button, icon).unwrap();

        let clicks = Rc::new(Cell::new(0));
        let sub = {
            let clicks = Rc::clone(&clicks);
            doc.on_click(button, move |event| {
                assert_eq!(event.current_target, button);
                clicks.set(clicks.get() + 1);
            })
            .unwrap()
        };

        doc.click(icon).unwrap();
        doc.click(button).unwrap();
        doc.click(body).unwrap();
        assert_eq!(clicks.get(), 2);
        sub.dispose();

        doc.click(button).unwrap();
        assert_eq!(clicks.get(), 2);
    }

    #[test]
    fn test_clear_children_drops_click_handlers() {
        let (doc, body) = page();
        let link = doc.create_element("a");
        doc.append_child(body, link).unwrap();
        let _sub = doc.on_click(link, |_| {}).unwrap();

        doc.clear_children(body).unwrap();
        assert!(doc.click(link).is_err());
        assert!(doc.clicks.borrow().is_empty());
    }

    #[test]
    fn test_remove_root_is_rejected() {
        let doc = Document::new();
        assert!(doc.remove(doc.document_element()).is_err());
    }

    #[test]
    fn test_to_html_serializes_tree() {
        let (doc, body) = page();
        doc.set_attribute(doc.document_element(), "data-theme", "dark")
            .unwrap();
        let img = doc.create_element("img");
        doc.set_attribute(img, "src", "assets/logo.png").unwrap();
        doc.set_attribute(img, "alt", "A & B").unwrap();
        doc.append_child(body, img).unwrap();

        assert_eq!(
            doc.to_html(),
            r#"<!DOCTYPE html><html data-theme="dark"><body><img src="assets/logo.png" alt="A &amp; B"></body></html>"#
        );
    }
}

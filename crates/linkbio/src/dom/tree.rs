//! Arena storage for document nodes.

use std::fmt;

use super::DomError;

/// Identifier of a node within a [`Document`](super::Document).
///
/// Slots freed by removal are reused, but each reuse bumps the slot's
/// generation, so an id held from before the removal keeps failing with
/// `NodeNotFound` instead of naming the new node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

impl NodeId {
    pub(crate) fn new(index: usize, generation: u32) -> Self {
        Self { index, generation }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index)?;
        if self.generation > 0 {
            write!(f, "v{}", self.generation)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub(crate) enum NodeData {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone)]
pub(crate) struct Element {
    pub(crate) tag: String,
    /// Attributes in insertion order.
    pub(crate) attributes: Vec<(String, String)>,
}

impl Element {
    pub(crate) fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub(crate) fn set_attribute(&mut self, name: &str, value: String) {
        match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name.to_string(), value)),
        }
    }

    pub(crate) fn remove_attribute(&mut self, name: &str) -> Option<String> {
        let index = self.attributes.iter().position(|(key, _)| key == name)?;
        Some(self.attributes.remove(index).1)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) data: NodeData,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

#[derive(Debug)]
pub(crate) struct Tree {
    slots: Vec<Slot>,
    /// Indexes of empty slots, reused last-freed first.
    vacant: Vec<usize>,
    root: NodeId,
}

impl Tree {
    pub(crate) fn new(root_tag: &str) -> Self {
        let mut tree = Self {
            slots: Vec::new(),
            vacant: Vec::new(),
            root: NodeId::new(0, 0),
        };
        tree.root = tree.insert(NodeData::Element(Element {
            tag: root_tag.to_string(),
            attributes: Vec::new(),
        }));
        tree
    }

    pub(crate) fn root(&self) -> NodeId {
        self.root
    }

    pub(crate) fn insert(&mut self, data: NodeData) -> NodeId {
        let node = Some(Node {
            data,
            parent: None,
            children: Vec::new(),
        });
        match self.vacant.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.generation = slot.generation.wrapping_add(1);
                slot.node = node;
                NodeId::new(index, slot.generation)
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    node,
                });
                NodeId::new(self.slots.len() - 1, 0)
            }
        }
    }

    pub(crate) fn get(&self, id: NodeId) -> Result<&Node, DomError> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
            .ok_or(DomError::NodeNotFound(id))
    }

    fn get_mut(&mut self, id: NodeId) -> Result<&mut Node, DomError> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
            .ok_or(DomError::NodeNotFound(id))
    }

    /// Number of slots ever allocated, live or vacant.
    #[cfg(test)]
    fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn element(&self, id: NodeId) -> Option<&Element> {
        match &self.get(id).ok()?.data {
            NodeData::Element(element) => Some(element),
            NodeData::Text(_) => None,
        }
    }

    /// Mutable element access. Text nodes yield `NodeNotFound` since they
    /// carry no attributes.
    pub(crate) fn element_mut(&mut self, id: NodeId) -> Result<&mut Element, DomError> {
        match &mut self.get_mut(id)?.data {
            NodeData::Element(element) => Ok(element),
            NodeData::Text(_) => Err(DomError::NodeNotFound(id)),
        }
    }

    pub(crate) fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.get(id).ok().and_then(|n| n.parent);
        }
        false
    }

    pub(crate) fn append(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        if let NodeData::Text(_) = self.get(parent)?.data {
            return Err(DomError::HierarchyRequest {
                parent,
                child,
                reason: "text nodes cannot have children",
            });
        }
        self.get(child)?;
        if child == self.root {
            return Err(DomError::HierarchyRequest {
                parent,
                child,
                reason: "the document root cannot be moved",
            });
        }
        if self.is_ancestor_or_self(child, parent) {
            return Err(DomError::HierarchyRequest {
                parent,
                child,
                reason: "node is an ancestor of the parent",
            });
        }

        self.detach(child)?;
        self.get_mut(child)?.parent = Some(parent);
        self.get_mut(parent)?.children.push(child);
        Ok(())
    }

    /// Unlinks a node from its parent, keeping the subtree alive.
    pub(crate) fn detach(&mut self, node: NodeId) -> Result<(), DomError> {
        let Some(parent) = self.get(node)?.parent else {
            return Ok(());
        };
        self.get_mut(parent)?.children.retain(|c| *c != node);
        self.get_mut(node)?.parent = None;
        Ok(())
    }

    /// Frees a node and its whole subtree, returning the freed ids.
    pub(crate) fn free(&mut self, node: NodeId) -> Result<Vec<NodeId>, DomError> {
        self.detach(node)?;
        let freed = self.descendants(node)?;
        for id in &freed {
            self.slots[id.index].node = None;
            self.vacant.push(id.index);
        }
        Ok(freed)
    }

    /// Frees every child of a node, returning the freed ids.
    pub(crate) fn clear_children(&mut self, node: NodeId) -> Result<Vec<NodeId>, DomError> {
        let children = std::mem::take(&mut self.get_mut(node)?.children);
        let mut freed = Vec::new();
        for child in children {
            self.get_mut(child)?.parent = None;
            freed.extend(self.free(child)?);
        }
        Ok(freed)
    }

    /// The node itself followed by its descendants, in document order.
    pub(crate) fn descendants(&self, node: NodeId) -> Result<Vec<NodeId>, DomError> {
        let mut out = Vec::new();
        let mut stack = vec![node];
        while let Some(id) = stack.pop() {
            let current = self.get(id)?;
            out.push(id);
            stack.extend(current.children.iter().rev().copied());
        }
        Ok(out)
    }

    pub(crate) fn text_content(&self, node: NodeId) -> Result<String, DomError> {
        let mut text = String::new();
        for id in self.descendants(node)? {
            if let NodeData::Text(t) = &self.get(id)?.data {
                text.push_str(t);
            }
        }
        Ok(text)
    }
}

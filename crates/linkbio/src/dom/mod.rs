//! In-memory document model.
//!
//! This module provides the page the components operate on:
//!
//! - [`Document`]: Shared handle to an HTML element tree
//! - [`NodeId`]: Identifier of an element or text node
//! - [`ClickEvent`]: Bubbling click dispatched to element handlers
//! - [`DomError`]: Errors from tree mutation
//!
//! The model covers what a link page needs: lookup by id or tag, attribute,
//! text and inline style mutation, click events, and HTML serialization.

mod document;
mod error;
mod html;
mod tree;

pub use document::{ClickEvent, Document};
pub use error::DomError;
pub use html::{escape_attribute, escape_text};
pub use tree::NodeId;

//! The stock link list used when no configuration provides one.

use super::record::LinkEntry;

/// The three sample links: one image-icon store link and two glyph links.
pub fn sample_links() -> Vec<LinkEntry> {
    vec![
        LinkEntry {
            id: 1,
            title: "Loja Própria".to_string(),
            url: "#".to_string(),
            icon_type: "image".to_string(),
            icon_source: Some("assets/logo.png".to_string()),
            icon_class: None,
        },
        LinkEntry {
            id: 2,
            title: "Shopee".to_string(),
            url: "#".to_string(),
            icon_type: "fontawesome".to_string(),
            icon_source: None,
            icon_class: Some("fa-brands fa-shopify".to_string()),
        },
        LinkEntry {
            id: 3,
            title: "Encomendas Personalizadas".to_string(),
            url: "#".to_string(),
            icon_type: "fontawesome".to_string(),
            icon_source: None,
            icon_class: Some("fa-brands fa-whatsapp".to_string()),
        },
    ]
}

//! The hosting page skeleton the components mount into.

use crate::config::PageConfig;
use crate::dom::{Document, DomError, NodeId};

/// Builds the host page for a configuration.
///
/// The page provides the two elements the components look up: the theme
/// toggle (with its glyph element) and the links container. The container is
/// left empty and the glyph unset; mounting fills both in.
pub fn build_host_document(config: &PageConfig) -> Result<Document, DomError> {
    let doc = Document::new();
    let html = doc.document_element();
    doc.set_attribute(html, "lang", &config.lang)?;

    let head = append(&doc, html, "head")?;
    let charset = append(&doc, head, "meta")?;
    doc.set_attribute(charset, "charset", "UTF-8")?;
    let viewport = append(&doc, head, "meta")?;
    doc.set_attribute(viewport, "name", "viewport")?;
    doc.set_attribute(viewport, "content", "width=device-width, initial-scale=1.0")?;
    let title = append(&doc, head, "title")?;
    doc.set_text_content(title, &config.title)?;
    for href in &config.stylesheets {
        let link = append(&doc, head, "link")?;
        doc.set_attribute(link, "rel", "stylesheet")?;
        doc.set_attribute(link, "href", href)?;
    }

    let body = append(&doc, html, "body")?;

    let toggle = append(&doc, body, "button")?;
    doc.set_attribute(toggle, "id", &config.theme.toggle_id)?;
    doc.set_attribute(toggle, "class", "theme-toggle")?;
    doc.set_attribute(toggle, "type", "button")?;
    doc.set_attribute(toggle, "aria-label", "Toggle theme")?;
    append(&doc, toggle, &config.theme.icon_tag)?;

    let container = append(&doc, body, "div")?;
    doc.set_attribute(container, "class", "container")?;

    let header = append(&doc, container, "header")?;
    doc.set_attribute(header, "class", "profile")?;
    if let Some(avatar) = &config.profile.avatar {
        let img = append(&doc, header, "img")?;
        doc.set_attribute(img, "class", "profile-avatar")?;
        doc.set_attribute(img, "src", avatar)?;
        doc.set_attribute(img, "alt", &config.profile.name)?;
    }
    let name = append(&doc, header, "h1")?;
    doc.set_attribute(name, "class", "profile-name")?;
    doc.set_text_content(name, &config.profile.name)?;
    if let Some(bio) = &config.profile.bio {
        let p = append(&doc, header, "p")?;
        doc.set_attribute(p, "class", "profile-bio")?;
        doc.set_text_content(p, bio)?;
    }

    let links = append(&doc, container, "main")?;
    doc.set_attribute(links, "id", &config.container_id)?;
    doc.set_attribute(links, "class", "links-container")?;

    Ok(doc)
}

fn append(doc: &Document, parent: NodeId, tag: &str) -> Result<NodeId, DomError> {
    let node = doc.create_element(tag);
    doc.append_child(parent, node)?;
    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Profile;

    #[test]
    fn test_host_exposes_component_targets() {
        let config = PageConfig::default();
        let doc = build_host_document(&config).unwrap();

        let toggle = doc.get_element_by_id("themeToggle").unwrap();
        assert!(doc.query_selector_tag(toggle, "i").is_some());
        let container = doc.get_element_by_id("linksContainer").unwrap();
        assert!(doc.children(container).is_empty());
    }

    #[test]
    fn test_head_contents() {
        let config = PageConfig {
            title: "Shop & Co".into(),
            stylesheets: vec!["a.css".into(), "b.css".into()],
            ..PageConfig::default()
        };
        let doc = build_host_document(&config).unwrap();
        let head = doc.query_selector_tag(doc.document_element(), "head").unwrap();

        let hrefs: Vec<String> = doc
            .query_selector_all_tag(head, "link")
            .into_iter()
            .filter_map(|link| doc.attribute(link, "href"))
            .collect();
        assert_eq!(hrefs, vec!["a.css", "b.css"]);

        let title = doc.query_selector_tag(head, "title").unwrap();
        assert_eq!(doc.text_content(title).as_deref(), Some("Shop & Co"));
    }

    #[test]
    fn test_profile_optional_parts() {
        let config = PageConfig {
            profile: Profile {
                name: "Ana".into(),
                bio: None,
                avatar: None,
            },
            ..PageConfig::default()
        };
        let doc = build_host_document(&config).unwrap();
        let body = doc.query_selector_tag(doc.document_element(), "body").unwrap();
        let html = doc.inner_html(body).unwrap();

        assert!(html.contains(r#"<h1 class="profile-name">Ana</h1>"#));
        assert!(!html.contains("profile-avatar"));
        assert!(!html.contains("profile-bio"));
    }

    #[test]
    fn test_custom_ids() {
        let mut config = PageConfig::default();
        config.container_id = "cards".into();
        config.theme.toggle_id = "modeSwitch".into();
        config.theme.icon_tag = "span".into();

        let doc = build_host_document(&config).unwrap();
        assert!(doc.get_element_by_id("cards").is_some());
        let toggle = doc.get_element_by_id("modeSwitch").unwrap();
        assert!(doc.query_selector_tag(toggle, "span").is_some());
    }
}

//! Page configuration loaded from YAML or JSON.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::links::{sample_links, LinkEntry};
use crate::theme::ThemeConfig;

const FONT_AWESOME_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

/// Error returned when a configuration file cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid YAML in {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unsupported config format for {path} (expected .yaml, .yml or .json)")]
    UnsupportedFormat { path: PathBuf },
}

/// The person or brand the page is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub bio: Option<String>,
    pub avatar: Option<String>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Links".to_string(),
            bio: None,
            avatar: Some("assets/logo.png".to_string()),
        }
    }
}

/// Everything needed to build and mount a link page.
///
/// Every field has a default, so a config file only needs the parts it
/// changes. The default page carries the sample links.
///
/// # Example
///
/// ```rust
/// use linkbio::PageConfig;
///
/// let config = PageConfig::from_yaml_str(r#"
/// title: My Shop
/// links:
///   - id: 1
///     title: Catalog
///     url: https://example.com
///     iconType: fontawesome
///     iconClass: fa-solid fa-book
/// "#).unwrap();
///
/// assert_eq!(config.title, "My Shop");
/// assert_eq!(config.links.len(), 1);
/// assert_eq!(config.container_id, "linksContainer");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    /// Document title.
    pub title: String,
    /// `lang` attribute of the root element.
    pub lang: String,
    pub profile: Profile,
    /// Stylesheet URLs linked from the page head, in order.
    pub stylesheets: Vec<String>,
    /// Id of the element the link cards are rendered into.
    pub container_id: String,
    pub theme: ThemeConfig,
    pub links: Vec<LinkEntry>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Links".to_string(),
            lang: "pt-BR".to_string(),
            profile: Profile::default(),
            stylesheets: vec![FONT_AWESOME_CSS.to_string(), "style.css".to_string()],
            container_id: "linksContainer".to_string(),
            theme: ThemeConfig::default(),
            links: sample_links(),
        }
    }
}

impl PageConfig {
    /// Loads a configuration file, choosing the parser by extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let is_yaml = match format.as_deref() {
            Some("yaml") | Some("yml") => true,
            Some("json") => false,
            _ => {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading page config");

        if is_yaml {
            Self::from_yaml_str(&content).map_err(|source| ConfigError::Yaml {
                path: path.to_path_buf(),
                source,
            })
        } else {
            Self::from_json_str(&content).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            })
        }
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_has_sample_links() {
        let config = PageConfig::default();
        assert_eq!(config.links.len(), 3);
        assert_eq!(config.theme.toggle_id, "themeToggle");
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = PageConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, PageConfig::default());
    }

    #[test]
    fn test_json_overrides() {
        let config = PageConfig::from_json_str(
            r#"{"containerId": "cards", "theme": {"attribute": "data-mode"}, "links": []}"#,
        )
        .unwrap();
        assert_eq!(config.container_id, "cards");
        assert_eq!(config.theme.attribute, "data-mode");
        assert_eq!(config.theme.toggle_id, "themeToggle");
        assert!(config.links.is_empty());
    }

    #[test]
    fn test_link_without_icon_type_still_loads() {
        let config = PageConfig::from_yaml_str(
            "links:\n  - id: 1\n    title: Blog\n    url: https://example.com\n",
        )
        .unwrap();
        assert_eq!(config.links.len(), 1);
        assert_eq!(config.links[0].icon_type, "");
    }

    #[test]
    fn test_from_path_yaml() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "title: Shop\nprofile:\n  name: Ana\n  bio: Handmade").unwrap();

        let config = PageConfig::from_path(file.path()).unwrap();
        assert_eq!(config.title, "Shop");
        assert_eq!(config.profile.name, "Ana");
        assert_eq!(config.profile.bio.as_deref(), Some("Handmade"));
    }

    #[test]
    fn test_from_path_invalid_json() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = PageConfig::from_path(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Json { .. }));
    }

    #[test]
    fn test_from_path_unsupported_extension() {
        let file = tempfile::Builder::new().suffix(".ini").tempfile().unwrap();
        let err = PageConfig::from_path(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = PageConfig::from_path(&dir.path().join("links.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}

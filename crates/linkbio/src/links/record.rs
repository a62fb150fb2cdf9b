//! Link records and their validation.

use std::collections::HashSet;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// A link as written in configuration.
///
/// `iconType` selects which of `iconSource` / `iconClass` is meaningful.
/// Entries are validated into [`LinkRecord`]s before rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkEntry {
    pub id: u32,
    pub title: String,
    pub url: String,
    /// Missing or non-string values read as empty, which validation rejects.
    #[serde(default, deserialize_with = "icon_type_or_empty")]
    pub icon_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_class: Option<String>,
}

fn icon_type_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IconType {
        Name(String),
        Other(IgnoredAny),
    }

    Ok(match IconType::deserialize(deserializer)? {
        IconType::Name(name) => name,
        IconType::Other(_) => String::new(),
    })
}

/// The icon shown on a link card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkIcon {
    /// An image loaded from `source`.
    Image { source: String },
    /// An icon-font glyph selected by CSS class.
    Glyph { class: String },
}

/// A validated link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    pub id: u32,
    pub title: String,
    pub url: String,
    pub icon: LinkIcon,
}

impl LinkRecord {
    pub fn image(id: u32, title: &str, url: &str, source: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            url: url.to_string(),
            icon: LinkIcon::Image {
                source: source.to_string(),
            },
        }
    }

    pub fn glyph(id: u32, title: &str, url: &str, class: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            url: url.to_string(),
            icon: LinkIcon::Glyph {
                class: class.to_string(),
            },
        }
    }
}

/// Why a link entry was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinkError {
    #[error("link {id}: unknown icon type '{icon_type}' (expected 'image' or 'fontawesome')")]
    UnknownIconType { id: u32, icon_type: String },
    #[error("link {id}: icon type 'image' requires a non-empty iconSource")]
    MissingIconSource { id: u32 },
    #[error("link {id}: icon type 'fontawesome' requires a non-empty iconClass")]
    MissingIconClass { id: u32 },
    #[error("link {id}: id is already used by an earlier link")]
    DuplicateId { id: u32 },
}

impl LinkError {
    /// The id of the offending entry.
    pub fn id(&self) -> u32 {
        match self {
            LinkError::UnknownIconType { id, .. }
            | LinkError::MissingIconSource { id }
            | LinkError::MissingIconClass { id }
            | LinkError::DuplicateId { id } => *id,
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl TryFrom<&LinkEntry> for LinkRecord {
    type Error = LinkError;

    fn try_from(entry: &LinkEntry) -> Result<Self, Self::Error> {
        let icon = match entry.icon_type.as_str() {
            "image" => LinkIcon::Image {
                source: non_empty(&entry.icon_source)
                    .ok_or(LinkError::MissingIconSource { id: entry.id })?
                    .to_string(),
            },
            "fontawesome" => LinkIcon::Glyph {
                class: non_empty(&entry.icon_class)
                    .ok_or(LinkError::MissingIconClass { id: entry.id })?
                    .to_string(),
            },
            other => {
                return Err(LinkError::UnknownIconType {
                    id: entry.id,
                    icon_type: other.to_string(),
                })
            }
        };

        Ok(Self {
            id: entry.id,
            title: entry.title.clone(),
            url: entry.url.clone(),
            icon,
        })
    }
}

impl From<&LinkRecord> for LinkEntry {
    fn from(record: &LinkRecord) -> Self {
        let (icon_type, icon_source, icon_class) = match &record.icon {
            LinkIcon::Image { source } => ("image", Some(source.clone()), None),
            LinkIcon::Glyph { class } => ("fontawesome", None, Some(class.clone())),
        };
        Self {
            id: record.id,
            title: record.title.clone(),
            url: record.url.clone(),
            icon_type: icon_type.to_string(),
            icon_source,
            icon_class,
        }
    }
}

/// Validates entries in order, keeping the valid ones.
///
/// Each rejected entry is logged at WARN and returned alongside the valid
/// records; one bad entry never hides the others. The first entry with a
/// given id wins; later duplicates are rejected.
pub fn validate_entries(entries: &[LinkEntry]) -> (Vec<LinkRecord>, Vec<LinkError>) {
    let mut records = Vec::with_capacity(entries.len());
    let mut rejected = Vec::new();
    let mut seen = HashSet::new();

    for entry in entries {
        let result = LinkRecord::try_from(entry).and_then(|record| {
            if seen.insert(record.id) {
                Ok(record)
            } else {
                Err(LinkError::DuplicateId { id: record.id })
            }
        });
        match result {
            Ok(record) => records.push(record),
            Err(err) => {
                tracing::warn!(id = entry.id, title = %entry.title, "skipping link: {}", err);
                rejected.push(err);
            }
        }
    }

    (records, rejected)
}

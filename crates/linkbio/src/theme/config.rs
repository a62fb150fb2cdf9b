//! Element ids, attribute name and glyph classes used by the theme manager.

use serde::{Deserialize, Serialize};

use super::mode::ColorMode;

/// How the theme manager finds its toggle and what it writes.
///
/// The defaults match the stock host page: a `#themeToggle` button holding
/// an `<i>` glyph, a `data-theme` attribute on the root element, and Font
/// Awesome sun/moon glyphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Id of the toggle control.
    pub toggle_id: String,
    /// Tag of the glyph element nested in the toggle.
    pub icon_tag: String,
    /// Attribute set on the document root.
    pub attribute: String,
    /// Glyph class shown while the light theme is active.
    pub light_icon: String,
    /// Glyph class shown while the dark theme is active.
    pub dark_icon: String,
}

impl ThemeConfig {
    /// The glyph class for the toggle while `mode` is active.
    ///
    /// The glyph always depicts the mode a click switches to.
    pub fn icon_for(&self, mode: ColorMode) -> &str {
        match mode {
            ColorMode::Dark => &self.dark_icon,
            ColorMode::Light => &self.light_icon,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            toggle_id: "themeToggle".to_string(),
            icon_tag: "i".to_string(),
            attribute: "data-theme".to_string(),
            light_icon: "fas fa-moon".to_string(),
            dark_icon: "fas fa-sun".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_depicts_other_mode() {
        let config = ThemeConfig::default();
        assert_eq!(config.icon_for(ColorMode::Dark), "fas fa-sun");
        assert_eq!(config.icon_for(ColorMode::Light), "fas fa-moon");
    }

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let config: ThemeConfig = serde_json::from_str(r#"{"toggleId": "modeSwitch"}"#).unwrap();
        assert_eq!(config.toggle_id, "modeSwitch");
        assert_eq!(config.attribute, "data-theme");
    }
}

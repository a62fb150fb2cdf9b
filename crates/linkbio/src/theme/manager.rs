//! Theme state and its projection onto the document.

use std::cell::RefCell;
use std::rc::Rc;

use super::config::ThemeConfig;
use super::mode::ColorMode;
use crate::dom::{Document, NodeId};
use crate::error::PageError;
use crate::events::Subscription;
use crate::window::Window;

/// Owns the active theme and keeps the page in sync with it.
///
/// On construction the theme follows the device preference. After that it
/// changes on two events:
///
/// - a click on the toggle control flips it;
/// - a device preference change overwrites it with the new preference,
///   discarding any earlier manual toggle.
///
/// Every change rewrites the theme attribute on the document root and the
/// toggle glyph, which always depicts the mode a click would switch to.
///
/// Dropping the manager (or calling [`dispose`](Self::dispose)) removes its
/// event handlers.
///
/// # Example
///
/// ```rust
/// use linkbio::{ColorMode, ThemeConfig, ThemeManager, Window};
///
/// let window = Window::with_preference(ColorMode::Dark);
/// let doc = window.document();
/// let button = doc.create_element("button");
/// doc.set_attribute(button, "id", "themeToggle").unwrap();
/// let icon = doc.create_element("i");
/// doc.append_child(button, icon).unwrap();
/// doc.append_child(doc.document_element(), button).unwrap();
///
/// let manager = ThemeManager::new(&window, ThemeConfig::default()).unwrap();
/// assert_eq!(manager.theme(), ColorMode::Dark);
/// assert_eq!(doc.attribute(icon, "class").as_deref(), Some("fas fa-sun"));
///
/// doc.click(button).unwrap();
/// assert_eq!(manager.theme(), ColorMode::Light);
/// ```
pub struct ThemeManager {
    state: Rc<RefCell<ThemeState>>,
    subscriptions: Vec<Subscription>,
}

struct ThemeState {
    mode: ColorMode,
    document: Document,
    icon: NodeId,
    config: ThemeConfig,
}

impl ThemeState {
    fn set(&mut self, mode: ColorMode, cause: &'static str) {
        self.mode = mode;
        tracing::debug!(theme = %mode, cause, "applying theme");

        let root = self.document.document_element();
        if let Err(err) = self
            .document
            .set_attribute(root, &self.config.attribute, mode.as_str())
        {
            tracing::error!(error = %err, "failed to set theme attribute");
        }
        if let Err(err) = self
            .document
            .set_attribute(self.icon, "class", self.config.icon_for(mode))
        {
            tracing::warn!(error = %err, "theme toggle icon is gone; glyph not updated");
        }
    }
}

impl ThemeManager {
    /// Attaches to the toggle control and applies the device preference.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::ToggleNotFound`] if no element has the configured
    /// toggle id, and [`PageError::ToggleIconNotFound`] if the toggle holds no
    /// glyph element.
    pub fn new(window: &Window, config: ThemeConfig) -> Result<Self, PageError> {
        let document = window.document().clone();
        let toggle = document
            .get_element_by_id(&config.toggle_id)
            .ok_or_else(|| PageError::ToggleNotFound {
                id: config.toggle_id.clone(),
            })?;
        let icon = document
            .query_selector_tag(toggle, &config.icon_tag)
            .ok_or_else(|| PageError::ToggleIconNotFound {
                id: config.toggle_id.clone(),
                tag: config.icon_tag.clone(),
            })?;

        let initial = if window.color_scheme().matches_dark() {
            ColorMode::Dark
        } else {
            ColorMode::Light
        };

        let state = Rc::new(RefCell::new(ThemeState {
            mode: initial,
            document: document.clone(),
            icon,
            config,
        }));
        state.borrow_mut().set(initial, "device preference");

        let on_click = {
            let state = Rc::clone(&state);
            document.on_click(toggle, move |_| {
                let mut state = state.borrow_mut();
                let next = state.mode.toggled();
                state.set(next, "toggle");
            })?
        };
        let on_preference = {
            let state = Rc::clone(&state);
            window.color_scheme().on_change(move |preference| {
                state.borrow_mut().set(*preference, "device preference");
            })
        };

        Ok(Self {
            state,
            subscriptions: vec![on_click, on_preference],
        })
    }

    /// The active theme.
    pub fn theme(&self) -> ColorMode {
        self.state.borrow().mode
    }

    /// Flips between light and dark.
    pub fn toggle_theme(&self) -> ColorMode {
        let mut state = self.state.borrow_mut();
        let next = state.mode.toggled();
        state.set(next, "toggle");
        next
    }

    /// Makes `mode` the active theme and writes it to the page.
    pub fn apply_theme(&self, mode: ColorMode) {
        self.state.borrow_mut().set(mode, "apply");
    }

    /// Removes the click and preference handlers.
    ///
    /// The page keeps showing the last applied theme.
    pub fn dispose(mut self) {
        for subscription in self.subscriptions.drain(..) {
            subscription.dispose();
        }
    }
}

impl std::fmt::Debug for ThemeManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeManager")
            .field("theme", &self.theme())
            .field("subscriptions", &self.subscriptions.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Page {
        window: Window,
        toggle: NodeId,
        icon: NodeId,
    }

    fn page(preference: ColorMode) -> Page {
        let window = Window::with_preference(preference);
        let doc = window.document();
        let body = doc.create_element("body");
        let toggle = doc.create_element("button");
        let icon = doc.create_element("i");
        doc.set_attribute(toggle, "id", "themeToggle").unwrap();
        doc.append_child(doc.document_element(), body).unwrap();
        doc.append_child(body, toggle).unwrap();
        doc.append_child(toggle, icon).unwrap();
        Page {
            window,
            toggle,
            icon,
        }
    }

    fn theme_attr(page: &Page) -> Option<String> {
        let doc = page.window.document();
        doc.attribute(doc.document_element(), "data-theme")
    }

    #[test]
    fn test_initial_theme_follows_preference() {
        let light = page(ColorMode::Light);
        let manager = ThemeManager::new(&light.window, ThemeConfig::default()).unwrap();
        assert_eq!(manager.theme(), ColorMode::Light);
        assert_eq!(theme_attr(&light).as_deref(), Some("light"));

        let dark = page(ColorMode::Dark);
        let manager = ThemeManager::new(&dark.window, ThemeConfig::default()).unwrap();
        assert_eq!(manager.theme(), ColorMode::Dark);
        assert_eq!(theme_attr(&dark).as_deref(), Some("dark"));
    }

    #[test]
    fn test_toggle_twice_restores_attribute() {
        let page = page(ColorMode::Light);
        let manager = ThemeManager::new(&page.window, ThemeConfig::default()).unwrap();
        let before = theme_attr(&page);

        manager.toggle_theme();
        assert_eq!(theme_attr(&page).as_deref(), Some("dark"));
        manager.toggle_theme();
        assert_eq!(theme_attr(&page), before);
    }

    #[test]
    fn test_icon_depicts_other_mode() {
        let page = page(ColorMode::Light);
        let manager = ThemeManager::new(&page.window, ThemeConfig::default()).unwrap();
        let doc = page.window.document();

        assert_eq!(doc.attribute(page.icon, "class").as_deref(), Some("fas fa-moon"));
        manager.toggle_theme();
        assert_eq!(doc.attribute(page.icon, "class").as_deref(), Some("fas fa-sun"));
    }

    #[test]
    fn test_click_on_toggle_or_icon_toggles() {
        let page = page(ColorMode::Light);
        let manager = ThemeManager::new(&page.window, ThemeConfig::default()).unwrap();
        let doc = page.window.document();

        doc.click(page.toggle).unwrap();
        assert_eq!(manager.theme(), ColorMode::Dark);
        doc.click(page.icon).unwrap();
        assert_eq!(manager.theme(), ColorMode::Light);
    }

    #[test]
    fn test_preference_change_overrides_manual_toggle() {
        let page = page(ColorMode::Light);
        let manager = ThemeManager::new(&page.window, ThemeConfig::default()).unwrap();

        manager.toggle_theme();
        assert_eq!(manager.theme(), ColorMode::Dark);

        page.window.color_scheme().set_preference(ColorMode::Dark);
        page.window.color_scheme().set_preference(ColorMode::Light);
        assert_eq!(manager.theme(), ColorMode::Light);
        assert_eq!(theme_attr(&page).as_deref(), Some("light"));
    }

    #[test]
    fn test_dispose_stops_reacting() {
        let page = page(ColorMode::Light);
        let manager = ThemeManager::new(&page.window, ThemeConfig::default()).unwrap();
        manager.dispose();

        page.window.document().click(page.toggle).unwrap();
        page.window.color_scheme().set_preference(ColorMode::Dark);
        assert_eq!(theme_attr(&page).as_deref(), Some("light"));
    }

    #[test]
    fn test_missing_toggle_is_an_error() {
        let window = Window::with_preference(ColorMode::Light);
        let err = ThemeManager::new(&window, ThemeConfig::default()).unwrap_err();
        assert_eq!(
            err,
            PageError::ToggleNotFound {
                id: "themeToggle".into()
            }
        );
    }

    #[test]
    fn test_toggle_without_icon_is_an_error() {
        let window = Window::with_preference(ColorMode::Light);
        let doc = window.document();
        let toggle = doc.create_element("button");
        doc.set_attribute(toggle, "id", "themeToggle").unwrap();
        doc.append_child(doc.document_element(), toggle).unwrap();

        let err = ThemeManager::new(&window, ThemeConfig::default()).unwrap_err();
        assert!(matches!(err, PageError::ToggleIconNotFound { .. }));
    }

    #[test]
    fn test_custom_attribute_name() {
        let page = page(ColorMode::Dark);
        let config = ThemeConfig {
            attribute: "data-color-scheme".into(),
            ..ThemeConfig::default()
        };
        let _manager = ThemeManager::new(&page.window, config).unwrap();
        let doc = page.window.document();
        assert_eq!(
            doc.attribute(doc.document_element(), "data-color-scheme")
                .as_deref(),
            Some("dark")
        );
    }
}

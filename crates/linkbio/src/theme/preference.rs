//! Device color-scheme preference.

use std::cell::Cell;
use std::rc::Rc;

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};

use super::mode::ColorMode;
use crate::events::{EventSource, Subscription};

/// Function used to read the device's preferred color mode.
pub type PreferenceDetector = fn() -> ColorMode;

/// Reads the operating system's light/dark setting.
pub fn detect_os_color_mode() -> ColorMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ColorMode::Dark,
        OsThemeMode::Light => ColorMode::Light,
    }
}

/// The page's view of the device preference, with change notifications.
///
/// This plays the role of a `(prefers-color-scheme: dark)` media query: it
/// reports the current preference and emits an event each time the
/// preference flips. Setting the same preference again emits nothing.
///
/// # Example
///
/// ```rust
/// use linkbio::{ColorMode, ColorSchemeQuery};
///
/// let query = ColorSchemeQuery::new(ColorMode::Light);
/// assert!(!query.matches_dark());
///
/// assert!(query.set_preference(ColorMode::Dark));
/// assert!(!query.set_preference(ColorMode::Dark));
/// assert_eq!(query.preference(), ColorMode::Dark);
/// ```
#[derive(Debug, Clone)]
pub struct ColorSchemeQuery {
    current: Rc<Cell<ColorMode>>,
    changes: EventSource<ColorMode>,
}

impl ColorSchemeQuery {
    /// Creates a query reporting a fixed initial preference.
    pub fn new(initial: ColorMode) -> Self {
        Self {
            current: Rc::new(Cell::new(initial)),
            changes: EventSource::new(),
        }
    }

    /// Creates a query seeded from a detector.
    pub fn from_detector(detector: PreferenceDetector) -> Self {
        Self::new(detector())
    }

    /// Creates a query seeded from the operating system setting.
    pub fn detect() -> Self {
        Self::from_detector(detect_os_color_mode)
    }

    pub fn preference(&self) -> ColorMode {
        self.current.get()
    }

    /// Whether the device currently prefers the dark scheme.
    pub fn matches_dark(&self) -> bool {
        self.preference().is_dark()
    }

    /// Records a new device preference.
    ///
    /// Returns `true` and notifies subscribers when the preference changed.
    pub fn set_preference(&self, mode: ColorMode) -> bool {
        if self.current.replace(mode) == mode {
            return false;
        }
        tracing::debug!(preference = %mode, "device color preference changed");
        self.changes.emit(&mode);
        true
    }

    /// Re-reads the preference from a detector, notifying on change.
    pub fn refresh(&self, detector: PreferenceDetector) -> bool {
        self.set_preference(detector())
    }

    /// Registers a handler called with the new preference on every change.
    pub fn on_change<F>(&self, handler: F) -> Subscription
    where
        F: FnMut(&ColorMode) + 'static,
    {
        self.changes.subscribe(handler)
    }
}

//! Light/dark theming driven by device preference and a toggle control.
//!
//! This module provides:
//!
//! - [`ColorMode`]: Light or dark
//! - [`ColorSchemeQuery`]: The device preference with change notifications
//! - [`ThemeManager`]: Owner of the active theme, bound to a toggle control
//! - [`ThemeConfig`]: Element ids, attribute name and glyph classes
//!
//! The only contract with stylesheets is the theme attribute written on the
//! document root; palettes live entirely in CSS.

mod config;
mod manager;
mod mode;
mod preference;

pub use config::ThemeConfig;
pub use manager::ThemeManager;
pub use mode::{ColorMode, ParseColorModeError};
pub use preference::{detect_os_color_mode, ColorSchemeQuery, PreferenceDetector};

//! Small text helpers.

use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// The entrance-animation delay for the card at `index`: 0.1s per position.
///
/// # Example
///
/// ```rust
/// use linkbio::animation_delay;
///
/// assert_eq!(animation_delay(0), "0s");
/// assert_eq!(animation_delay(3), "0.3s");
/// assert_eq!(animation_delay(12), "1.2s");
/// ```
pub fn animation_delay(index: usize) -> String {
    // Dividing keeps tenths exact (3 * 0.1 would print 0.30000000000000004).
    format!("{}s", index as f64 / 10.0)
}

/// Shortens a link title to `max_width` terminal columns.
///
/// Titles that already fit are borrowed unchanged. Longer ones are cut on a
/// character boundary, lose any trailing whitespace, and end in `…`.
///
/// # Example
///
/// ```rust
/// use linkbio::truncate_to_width;
///
/// assert_eq!(truncate_to_width("Shopee", 10), "Shopee");
/// assert_eq!(truncate_to_width("Encomendas Personalizadas", 11), "Encomendas…");
/// assert_eq!(truncate_to_width("Loja Própria", 6), "Loja…");
/// ```
pub fn truncate_to_width(title: &str, max_width: usize) -> Cow<'_, str> {
    if title.width() <= max_width {
        return Cow::Borrowed(title);
    }

    let budget = max_width.saturating_sub(ELLIPSIS.width().unwrap_or(1));
    let mut used = 0;
    let cut = title
        .char_indices()
        .find(|&(_, c)| {
            used += c.width().unwrap_or(0);
            used > budget
        })
        .map_or(title.len(), |(at, _)| at);

    let mut short = title[..cut].trim_end().to_string();
    short.push(ELLIPSIS);
    Cow::Owned(short)
}

/// Pads a string with spaces to `width` display columns.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let current = s.width();
    if current >= width {
        return s.to_string();
    }
    format!("{}{}", s, " ".repeat(width - current))
}

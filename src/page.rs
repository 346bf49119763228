//! Page behavior that does not depend on the DOM: navbar styling, anchor
//! scrolling, fade-in triggers and share text.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavbarStyle {
    Transparent,
    Scrolled,
}

impl NavbarStyle {
    /// The navbar switches to its solid style once scrolled past `threshold`.
    pub fn for_scroll(offset: f64, threshold: f64) -> Self {
        if offset > threshold {
            NavbarStyle::Scrolled
        } else {
            NavbarStyle::Transparent
        }
    }
}

/// Where to smooth-scroll for an in-page anchor, leaving room for the fixed
/// navbar. Never negative.
pub fn anchor_scroll_target(element_top: f64, navbar_offset: f64) -> f64 {
    (element_top - navbar_offset).max(0.0)
}

/// Whether an observed element is visible enough to fade in.
pub fn should_fade_in(intersection_ratio: f64, threshold: f64) -> bool {
    intersection_ratio > 0.0 && intersection_ratio >= threshold
}

/// Text handed to the clipboard when native sharing is unavailable.
pub fn share_text(title: &str, url: &str) -> String {
    let title = title.trim();
    if title.is_empty() {
        url.to_string()
    } else {
        format!("{} - {}", title, url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navbar_style() {
        assert_eq!(NavbarStyle::for_scroll(0.0, 50.0), NavbarStyle::Transparent);
        assert_eq!(NavbarStyle::for_scroll(50.0, 50.0), NavbarStyle::Transparent);
        assert_eq!(NavbarStyle::for_scroll(50.5, 50.0), NavbarStyle::Scrolled);
    }

    #[test]
    fn test_anchor_scroll_target() {
        assert_eq!(anchor_scroll_target(900.0, 80.0), 820.0);
        assert_eq!(anchor_scroll_target(40.0, 80.0), 0.0);
    }

    #[test]
    fn test_should_fade_in() {
        assert!(!should_fade_in(0.0, 0.0));
        assert!(!should_fade_in(0.05, 0.1));
        assert!(should_fade_in(0.1, 0.1));
        assert!(should_fade_in(1.0, 0.1));
    }

    #[test]
    fn test_share_text() {
        assert_eq!(
            share_text("Sparkle Cleaning", "https://example.com"),
            "Sparkle Cleaning - https://example.com"
        );
        assert_eq!(share_text("  ", "https://example.com"), "https://example.com");
    }
}

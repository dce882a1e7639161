//! Presentational scroll and hover effects.
//!
//! Pure functions so the numbers can be checked without a browser; the
//! components bind them to window and element events.

use crate::config::{HEADER_OFFSET, NAVBAR_SCROLL_THRESHOLD, PARALLAX_FACTOR};

/// Navbar background and blur for a scroll position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavbarStyle {
    pub background: &'static str,
    pub backdrop_filter: &'static str,
}

impl NavbarStyle {
    pub fn css(&self) -> String {
        format!(
            "background-color: {}; backdrop-filter: {};",
            self.background, self.backdrop_filter
        )
    }
}

pub fn navbar_style(scroll_y: f64) -> NavbarStyle {
    if scroll_y > NAVBAR_SCROLL_THRESHOLD {
        NavbarStyle {
            background: "rgba(10, 10, 10, 0.95)",
            backdrop_filter: "blur(10px)",
        }
    } else {
        NavbarStyle {
            background: "rgba(10, 10, 10, 0.8)",
            backdrop_filter: "blur(5px)",
        }
    }
}

/// Element id named by an in-page link, if it names one.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Where to scroll so a section clears the fixed navbar.
pub fn anchor_scroll_top(section_offset_top: f64) -> f64 {
    section_offset_top - HEADER_OFFSET
}

pub fn parallax_transform(scroll_y: f64) -> String {
    format!("transform: translateY({}px);", scroll_y * PARALLAX_FACTOR)
}

pub fn card_transform(hovered: bool) -> &'static str {
    if hovered {
        "transform: translateY(-10px) scale(1.02);"
    } else {
        "transform: translateY(0) scale(1);"
    }
}

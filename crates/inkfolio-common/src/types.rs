//! Common type definitions shared across the site crates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A page section that navigation links can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    /// Landing block at the top of the page ("Home" in navigation).
    Hero,
    /// Artwork gallery.
    Gallery,
    /// Artist biography and timeline.
    About,
    /// Commission packages and request form.
    Commissions,
    /// Fan comments.
    FanWall,
    /// Contact form and details.
    Contact,
}

impl SectionId {
    /// Every section in page order.
    pub const ALL: [Self; 6] = [
        Self::Hero,
        Self::Gallery,
        Self::About,
        Self::Commissions,
        Self::FanWall,
        Self::Contact,
    ];

    /// The document anchor of the section.
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Gallery => "gallery",
            Self::About => "about",
            Self::Commissions => "commissions",
            Self::FanWall => "fanwall",
            Self::Contact => "contact",
        }
    }

    /// Resolve a link target; `home` is an alias for the hero section.
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        match anchor.trim().to_ascii_lowercase().as_str() {
            "home" | "hero" => Some(Self::Hero),
            "gallery" => Some(Self::Gallery),
            "about" => Some(Self::About),
            "commissions" => Some(Self::Commissions),
            "fanwall" => Some(Self::FanWall),
            "contact" => Some(Self::Contact),
            _ => None,
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

//! Category to bar style mapping
//!
//! The table is plain configuration handed to every frame, so the same
//! inputs always produce the same styled output.

use serde::{Deserialize, Serialize};
use timeline_shared::Category;

/// Visual treatment of one event bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarStyle {
    /// Palette name, e.g. "red"
    pub colour: String,
    pub text_shade: u16,
    pub background_shade: u16,
    /// Background opacity in percent
    pub background_opacity: u8,
    /// Background opacity in percent while hovered
    pub hover_opacity: u8,
}

impl BarStyle {
    pub fn new(colour: impl Into<String>) -> Self {
        Self {
            colour: colour.into(),
            text_shade: 700,
            background_shade: 500,
            background_opacity: 15,
            hover_opacity: 25,
        }
    }

    /// Utility class list for the host page
    pub fn class_name(&self) -> String {
        format!(
            "text-{c}-{text} bg-{c}-{bg}/{opacity} hover:bg-{c}-{bg}/{hover}",
            c = self.colour,
            text = self.text_shade,
            bg = self.background_shade,
            opacity = self.background_opacity,
            hover = self.hover_opacity,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryStyles {
    pub art: BarStyle,
    pub music: BarStyle,
    pub theatre: BarStyle,
    /// Unknown categories and malformed events
    pub neutral: BarStyle,
}

impl Default for CategoryStyles {
    fn default() -> Self {
        Self {
            art: BarStyle::new("red"),
            music: BarStyle::new("green"),
            theatre: BarStyle::new("blue"),
            neutral: BarStyle::new("zinc"),
        }
    }
}

impl CategoryStyles {
    pub fn for_category(&self, category: Category) -> &BarStyle {
        match category {
            Category::Art => &self.art,
            Category::Music => &self.music,
            Category::Theatre => &self.theatre,
            Category::Unknown => &self.neutral,
        }
    }

    /// Style for an event; degenerate events always fall back to neutral
    pub fn resolve(&self, category: Category, degenerate: bool) -> &BarStyle {
        if degenerate {
            &self.neutral
        } else {
            self.for_category(category)
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &BarStyle> {
        [&self.art, &self.music, &self.theatre, &self.neutral].into_iter()
    }
}

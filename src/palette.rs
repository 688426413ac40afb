use egui::Color32;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BoardError;

/// The fixed set of stroke colors offered by the toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteColor {
    #[default]
    Black,
    Blue,
    Red,
    Green,
    Yellow,
    White,
}

impl PaletteColor {
    /// Every palette entry, in toolbar order
    pub const ALL: [PaletteColor; 6] = [
        PaletteColor::Black,
        PaletteColor::Blue,
        PaletteColor::Red,
        PaletteColor::Green,
        PaletteColor::Yellow,
        PaletteColor::White,
    ];

    /// CSS color keyword for this entry
    pub fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Blue => "blue",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::White => "white",
        }
    }

    /// Screen color matching the CSS keyword
    pub fn to_color32(self) -> Color32 {
        match self {
            Self::Black => Color32::BLACK,
            Self::Blue => Color32::from_rgb(0, 0, 255),
            Self::Red => Color32::from_rgb(255, 0, 0),
            // CSS "green" is half intensity
            Self::Green => Color32::from_rgb(0, 128, 0),
            Self::Yellow => Color32::from_rgb(255, 255, 0),
            Self::White => Color32::WHITE,
        }
    }
}

impl fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaletteColor {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BoardError::UnknownColor(s.to_string()))
    }
}

/// The two canvas backgrounds the board toggles between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Background {
    #[default]
    Light,
    Dark,
}

impl Background {
    /// The other background
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            Self::Light => "#f2f2f2",
            Self::Dark => "#000",
        }
    }

    pub fn to_color32(self) -> Color32 {
        match self {
            Self::Light => Color32::from_gray(0xf2),
            Self::Dark => Color32::BLACK,
        }
    }
}

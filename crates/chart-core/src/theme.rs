// File: crates/chart-core/src/theme.rs
// Summary: Colors, light/dark chart themes, and the fixed rank-band palette.

use std::fmt;

use serde::{Deserialize, Deserializer};

/// Backend-neutral RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a: 255 } }

    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a } }

    /// Parse `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim().strip_prefix('#')?;
        let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::argb(byte(6)?, byte(0)?, byte(2)?, byte(4)?)),
            _ => None,
        }
    }

    /// CSS hex form without alpha (`#1f77b4`).
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn opacity(&self) -> f64 { self.a as f64 / 255.0 }

    #[cfg(feature = "png")]
    pub fn to_skia(self) -> skia_safe::Color {
        skia_safe::Color::from_argb(self.a, self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid color '{s}'")))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub grid: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    pub tick: Color,
    pub title: Color,
    pub event_marker: Color,
    pub placeholder: Color,
    pub marker_outline: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::rgb(255, 255, 255),
            grid: Color::argb(178, 224, 224, 224),
            axis_line: Color::rgb(60, 60, 70),
            axis_label: Color::rgb(20, 20, 30),
            tick: Color::rgb(100, 100, 110),
            title: Color::rgb(20, 20, 30),
            event_marker: Color::rgb(153, 153, 153),
            placeholder: Color::rgb(102, 102, 102),
            marker_outline: Color::rgb(255, 255, 255),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::rgb(18, 18, 20),
            grid: Color::rgb(40, 40, 45),
            axis_line: Color::rgb(180, 180, 190),
            axis_label: Color::rgb(235, 235, 245),
            tick: Color::rgb(150, 150, 160),
            title: Color::rgb(235, 235, 245),
            event_marker: Color::rgb(120, 120, 130),
            placeholder: Color::rgb(150, 150, 160),
            marker_outline: Color::rgb(18, 18, 20),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::light)
}

/// One rank group of the canonical vocabulary and the color it always renders with.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RankBand {
    pub label: String,
    pub color: Color,
}

impl RankBand {
    pub fn new(label: impl Into<String>, color: Color) -> Self {
        Self { label: label.into(), color }
    }
}

/// Ordered rank-band vocabulary. Colors are fixed per band position, so a band
/// keeps its hue no matter which other bands an event carries.
#[derive(Clone, Debug, PartialEq)]
pub struct RankPalette {
    bands: Vec<RankBand>,
    fallback: Color,
}

impl RankPalette {
    pub fn new(bands: Vec<RankBand>) -> Self {
        Self { bands, fallback: Color::rgb(127, 127, 127) }
    }

    /// Canonical position of `label`, if it belongs to the vocabulary.
    pub fn position(&self, label: &str) -> Option<usize> {
        self.bands.iter().position(|b| b.label == label)
    }

    /// Color for a rank-group label. Labels outside the vocabulary get a neutral gray.
    pub fn color_for(&self, label: &str) -> Color {
        self.position(label).map(|i| self.bands[i].color).unwrap_or(self.fallback)
    }
}

/// Six canonical rank bands, best-ranked first.
pub fn default_bands() -> Vec<RankBand> {
    vec![
        RankBand::new("Top 1-10", Color::rgb(0x1f, 0x77, 0xb4)),
        RankBand::new("Top 11-20", Color::rgb(0xff, 0x7f, 0x0e)),
        RankBand::new("Top 21-50", Color::rgb(0x2c, 0xa0, 0x2c)),
        RankBand::new("Top 51-100", Color::rgb(0xd6, 0x27, 0x28)),
        RankBand::new("Top 101-200", Color::rgb(0x94, 0x67, 0xbd)),
        RankBand::new("Top 201+", Color::rgb(0x8c, 0x56, 0x4b)),
    ]
}

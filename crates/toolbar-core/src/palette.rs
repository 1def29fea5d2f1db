use serde::{Deserialize, Serialize};

use crate::command::{CommandName, TokenError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorKind {
    Text,
    Highlight,
}

impl ColorKind {
    pub fn palette(self) -> &'static [ColorSwatch] {
        match self {
            Self::Text => TEXT_PALETTE,
            Self::Highlight => HIGHLIGHT_PALETTE,
        }
    }

    pub fn command(self) -> CommandName {
        match self {
            Self::Text => CommandName::TextColor,
            Self::Highlight => CommandName::HighlightColor,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Text => "Text Color",
            Self::Highlight => "Highlight Color",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSwatch {
    pub label: &'static str,
    pub hex: &'static str,
    pub class: &'static str,
}

impl ColorSwatch {
    const fn new(label: &'static str, hex: &'static str, class: &'static str) -> Self {
        Self { label, hex, class }
    }

    pub fn rgb(&self) -> u32 {
        parse_hex(self.hex).unwrap_or_default()
    }
}

pub const TEXT_PALETTE: &[ColorSwatch] = &[
    ColorSwatch::new("White", "#ffffff", "text-white"),
    ColorSwatch::new("Gray", "#9ca3af", "text-gray-400"),
    ColorSwatch::new("Orange", "#f97316", "text-orange-400"),
    ColorSwatch::new("Yellow", "#facc15", "text-yellow-400"),
    ColorSwatch::new("Green", "#22c55e", "text-green-400"),
    ColorSwatch::new("Blue", "#3b82f6", "text-blue-400"),
    ColorSwatch::new("Purple", "#a855f7", "text-purple-400"),
    ColorSwatch::new("Pink", "#ec4899", "text-pink-400"),
];

pub const HIGHLIGHT_PALETTE: &[ColorSwatch] = &[
    ColorSwatch::new("Black", "#000000", "bg-black"),
    ColorSwatch::new("Gray", "#4b5563", "bg-gray-600"),
    ColorSwatch::new("Orange", "#b45309", "bg-orange-700"),
    ColorSwatch::new("Yellow", "#ca8a04", "bg-yellow-700"),
    ColorSwatch::new("Lime", "#65a30d", "bg-lime-600"),
    ColorSwatch::new("Green", "#22c55e", "bg-green-500"),
    ColorSwatch::new("Blue", "#3b82f6", "bg-blue-500"),
    ColorSwatch::new("Purple", "#8b5cf6", "bg-purple-500"),
    ColorSwatch::new("Pink", "#ec4899", "bg-pink-500"),
    ColorSwatch::new("White", "#ffffff", "bg-white"),
];

/// Ring drawn around a swatch: the last chosen one gets the thick ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwatchIndicator {
    Idle,
    Active,
}

impl SwatchIndicator {
    pub fn class(self) -> &'static str {
        match self {
            Self::Idle => "ring-1",
            Self::Active => "ring-2",
        }
    }

    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

/// Parses `#rgb` or `#rrggbb` into a packed `0xRRGGBB` value.
pub fn parse_hex(hex: &str) -> Option<u32> {
    let digits = hex.strip_prefix('#')?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match digits.len() {
        6 => u32::from_str_radix(digits, 16).ok(),
        3 => {
            let short = u32::from_str_radix(digits, 16).ok()?;
            let (r, g, b) = ((short >> 8) & 0xf, (short >> 4) & 0xf, short & 0xf);
            Some((r * 0x11) << 16 | (g * 0x11) << 8 | (b * 0x11))
        }
        _ => None,
    }
}

/// Validates a user-entered hex color and returns it as lowercase `#rrggbb`.
pub fn normalize_hex(hex: &str) -> Result<String, TokenError> {
    let trimmed = hex.trim();
    parse_hex(trimmed)
        .map(|rgb| format!("#{rgb:06x}"))
        .ok_or_else(|| TokenError::InvalidColor(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_have_expected_sizes_and_valid_hex() {
        assert_eq!(TEXT_PALETTE.len(), 8);
        assert_eq!(HIGHLIGHT_PALETTE.len(), 10);
        for swatch in TEXT_PALETTE.iter().chain(HIGHLIGHT_PALETTE) {
            assert!(parse_hex(swatch.hex).is_some(), "{}", swatch.hex);
        }
    }

    #[test]
    fn short_hex_expands() {
        assert_eq!(parse_hex("#fff"), Some(0xffffff));
        assert_eq!(parse_hex("#1a2"), Some(0x11aa22));
        assert_eq!(normalize_hex(" #ABC "), Ok("#aabbcc".to_string()));
    }

    #[test]
    fn invalid_hex_is_rejected() {
        assert_eq!(parse_hex("ffffff"), None);
        assert_eq!(parse_hex("#ffff"), None);
        assert_eq!(parse_hex("#gggggg"), None);
        assert_eq!(parse_hex("#+12345"), None);
        assert_eq!(
            normalize_hex("red"),
            Err(TokenError::InvalidColor("red".to_string()))
        );
    }
}

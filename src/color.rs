use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, Result};

/// Colour tag carried by every primitive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde_derive::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "lowercase"))]
pub enum Color {
    Blue,
    Green,
    Red,
    Yellow,
    #[default]
    White,
}

impl Color {
    pub const ALL: [Color; 5] = [
        Color::Blue,
        Color::Green,
        Color::Red,
        Color::Yellow,
        Color::White,
    ];

    /// Parse a colour token.
    ///
    /// Matching is case-sensitive and by prefix, so `"redish"` is `Red`
    /// but `"Red"` is an error.
    pub fn parse(token: &str) -> Result<Self> {
        const TOKENS: [(&str, Color); 5] = [
            ("yellow", Color::Yellow),
            ("green", Color::Green),
            ("red", Color::Red),
            ("white", Color::White),
            ("blue", Color::Blue),
        ];
        TOKENS
            .iter()
            .find(|(kw, _)| token.starts_with(kw))
            .map(|(_, c)| *c)
            .ok_or_else(|| Error::UnrecognizedColor {
                token: token.to_owned(),
                line: None,
            })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::White => "white",
        }
    }

    pub fn rgb(&self) -> Rgb {
        match self {
            Color::Blue => Rgb(0, 0, 255),
            Color::Green => Rgb(0, 204, 0),
            Color::Red => Rgb(255, 0, 0),
            Color::Yellow => Rgb(204, 204, 0),
            Color::White => Rgb(255, 255, 255),
        }
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display-ready colour triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<Color> for Rgb {
    fn from(c: Color) -> Self {
        c.rgb()
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(c: Rgb) -> Self {
        (c.0, c.1, c.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Accepts `#rrggbb`, `black`, or any [`Color`] token.
impl FromStr for Rgb {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return Err(format!("invalid hex colour: {s}"));
            }
            let channel = |i: usize| {
                u8::from_str_radix(&hex[i..i + 2], 16)
                    .map_err(|_| format!("invalid hex colour: {s}"))
            };
            Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
        } else if s == "black" {
            Ok(Rgb::BLACK)
        } else {
            Color::parse(s).map(Rgb::from).map_err(|e| e.to_string())
        }
    }
}

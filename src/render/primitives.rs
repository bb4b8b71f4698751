use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Serialized as a CSS-style hex string so configs stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds a color from 8-bit channels.
    #[must_use]
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        )
    }

    /// Parses `#RGB`, `#RRGGBB`, `#RRGGBBAA`, `white`, `black` or
    /// `transparent`.
    pub fn parse(value: &str) -> ChartResult<Self> {
        let trimmed = value.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "white" => return Ok(Self::WHITE),
            "black" => return Ok(Self::BLACK),
            "transparent" => return Ok(Self::TRANSPARENT),
            _ => {}
        }

        let invalid = || ChartError::InvalidConfig(format!("unrecognized color `{value}`"));
        let hex = trimmed.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.is_ascii() {
            return Err(invalid());
        }

        let channels: SmallVec<[u8; 4]> = match hex.len() {
            3 => hex
                .chars()
                .map(|digit| {
                    digit
                        .to_digit(16)
                        .map(|nibble| (nibble * 17) as u8)
                        .ok_or_else(invalid)
                })
                .collect::<ChartResult<_>>()?,
            6 | 8 => (0..hex.len())
                .step_by(2)
                .map(|offset| {
                    u8::from_str_radix(&hex[offset..offset + 2], 16).map_err(|_| invalid())
                })
                .collect::<ChartResult<_>>()?,
            _ => return Err(invalid()),
        };

        let alpha = channels.get(3).map_or(1.0, |a| f64::from(*a) / 255.0);
        let base = Self::from_rgb8(channels[0], channels[1], channels[2]);
        Ok(Self { alpha, ..base })
    }

    /// Formats as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    #[must_use]
    pub fn to_hex(self) -> String {
        let byte = |channel: f64| (channel.clamp(0.0, 1.0) * 255.0).round() as u8;
        let (r, g, b, a) = (
            byte(self.red),
            byte(self.green),
            byte(self.blue),
            byte(self.alpha),
        );
        if a == u8::MAX {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

impl TryFrom<String> for Color {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Horizontal text alignment relative to the anchor x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub size_px: f64,
    pub bold: bool,
}

impl FontSpec {
    #[must_use]
    pub const fn regular(size_px: f64) -> Self {
        Self {
            size_px,
            bold: false,
        }
    }

    #[must_use]
    pub const fn bold(size_px: f64) -> Self {
        Self {
            size_px,
            bold: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
}

impl StrokeStyle {
    #[must_use]
    pub const fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
}

/// Open polyline path made of move/line commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    /// Single segment path.
    #[must_use]
    pub fn segment(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let mut path = Self::with_capacity(2);
        path.move_to(x1, y1).line_to(x2, y2);
        path
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.commands.push(PathCommand::MoveTo { x, y });
        self
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.commands.push(PathCommand::LineTo { x, y });
        self
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, Path, PathCommand};

    #[test]
    fn parses_short_long_and_alpha_hex() {
        assert_eq!(Color::parse("#fff").expect("short"), Color::WHITE);
        assert_eq!(Color::parse("#000000").expect("long"), Color::BLACK);
        let translucent = Color::parse("#FF000080").expect("alpha");
        assert_eq!(translucent.red, 1.0);
        assert!((translucent.alpha - 128.0 / 255.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_malformed_colors() {
        for raw in ["3366CC", "#33", "#GGGGGG", "#3366CC0", "rebeccapurple"] {
            assert!(Color::parse(raw).is_err(), "{raw} should be rejected");
        }
    }

    #[test]
    fn hex_output_round_trips_palette_entries() {
        for raw in ["#3366CC", "#DC3912", "#FF9900", "#109618", "#990099"] {
            assert_eq!(Color::parse(raw).expect("palette color").to_hex(), raw);
        }
        assert_eq!(Color::TRANSPARENT.to_hex(), "#00000000");
    }

    #[test]
    fn path_builder_chains_commands() {
        let mut path = Path::new();
        path.move_to(0.0, 1.0).line_to(2.0, 3.0);
        assert_eq!(
            path.commands(),
            &[
                PathCommand::MoveTo { x: 0.0, y: 1.0 },
                PathCommand::LineTo { x: 2.0, y: 3.0 },
            ]
        );
    }
}

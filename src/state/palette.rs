// Node and connector colors picked in the UI.

use std::fmt;
use std::str::FromStr;

use color::{AlphaColor, DynamicColor, Srgb};

use crate::error::CommandError;

/// A parsed CSS color ("#ff0000", "rgb(255, 0, 0)", "red", ...).
#[derive(Clone, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    pub fn new(input: &str) -> Result<Self, CommandError> {
        DynamicColor::from_str(input.trim())
            .map(|color| Color { color })
            .map_err(|_| CommandError::InvalidColor {
                input: input.to_string(),
            })
    }

    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Color {
            color: DynamicColor::from_alpha_color(AlphaColor::<Srgb>::from_rgb8(r, g, b)),
        }
    }

    /// Packed `0xRRGGBB` value as consumed by the renderer.
    pub fn to_rgb(&self) -> u32 {
        let rgba = self.color.to_alpha_color::<Srgb>().to_rgba8();
        (u32::from(rgba.r) << 16) | (u32::from(rgba.g) << 8) | u32::from(rgba.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.to_rgb())
    }
}

/// Which material a recolor applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTarget {
    Node,
    Connector,
}

impl fmt::Display for ColorTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorTarget::Node => write!(f, "Node"),
            ColorTarget::Connector => write!(f, "Connector"),
        }
    }
}

/// Colors shared by every primitive of one structure.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub node: Color,
    pub connector: Color,
}

impl Palette {
    pub fn set(&mut self, target: ColorTarget, color: Color) {
        match target {
            ColorTarget::Node => self.node = color,
            ColorTarget::Connector => self.connector = color,
        }
    }

    pub fn get(&self, target: ColorTarget) -> &Color {
        match target {
            ColorTarget::Node => &self.node,
            ColorTarget::Connector => &self.connector,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            node: Color::from_rgb8(0x00, 0x00, 0xff),
            connector: Color::from_rgb8(0xff, 0x00, 0x00),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let palette = Palette::default();
        assert_eq!(palette.node.to_rgb(), 0x0000ff);
        assert_eq!(palette.connector.to_rgb(), 0xff0000);
    }

    #[test]
    fn test_parse_picker_value() {
        let color = Color::new("#12ab9f").unwrap();
        assert_eq!(color.to_rgb(), 0x12ab9f);
        assert_eq!(color.to_string(), "#12ab9f");
    }

    #[test]
    fn test_named_color() {
        assert_eq!(Color::new("lime").unwrap().to_rgb(), 0x00ff00);
    }

    #[test]
    fn test_invalid_color() {
        let err = Color::new("not-a-color").unwrap_err();
        assert_eq!(
            err,
            CommandError::InvalidColor {
                input: "not-a-color".to_string()
            }
        );
    }

    #[test]
    fn test_set_target() {
        let mut palette = Palette::default();
        palette.set(ColorTarget::Connector, Color::new("#000000").unwrap());
        assert_eq!(palette.get(ColorTarget::Connector).to_rgb(), 0);
        assert_eq!(palette.get(ColorTarget::Node).to_rgb(), 0x0000ff);
    }
}

//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Grid line colors and styles

use crate::core::error::{GridError, Result};
use std::fmt;
use std::str::FromStr;

/// RGBA color
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Color {
        Color {
            red,
            green,
            blue,
            alpha: 255,
        }
    }
    pub const fn black() -> Color {
        Color::rgb(0, 0, 0)
    }
    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA`
    pub fn from_hex(hex: &str) -> Result<Color> {
        let invalid = || GridError::InvalidColor(hex.to_string());
        let digits = hex.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match digits.len() {
            3 => {
                let short = |i: usize| channel(&digits[i..i + 1]).map(|v| v * 17);
                Ok(Color::rgb(short(0)?, short(1)?, short(2)?))
            }
            6 | 8 => {
                let mut color = Color::rgb(
                    channel(&digits[0..2])?,
                    channel(&digits[2..4])?,
                    channel(&digits[4..6])?,
                );
                if digits.len() == 8 {
                    color.alpha = channel(&digits[6..8])?;
                }
                Ok(color)
            }
            _ => Err(invalid()),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::black()
    }
}

impl FromStr for Color {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        match &s.trim().to_lowercase() as &str {
            "black" => Ok(Color::black()),
            "white" => Ok(Color::rgb(255, 255, 255)),
            "red" => Ok(Color::rgb(255, 0, 0)),
            "green" => Ok(Color::rgb(0, 255, 0)),
            "blue" => Ok(Color::rgb(0, 0, 255)),
            "yellow" => Ok(Color::rgb(255, 255, 0)),
            "orange" => Ok(Color::rgb(255, 165, 0)),
            "purple" => Ok(Color::rgb(128, 0, 128)),
            "gray" | "grey" => Ok(Color::rgb(128, 128, 128)),
            _ => Color::from_hex(s),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)?;
        if self.alpha != 255 {
            write!(f, "{:02x}", self.alpha)?;
        }
        Ok(())
    }
}

/// Grid line style
#[derive(PartialEq, Clone, Debug, Default)]
pub struct GridStyle {
    color: Color,
    width: f64,
}

impl GridStyle {
    pub fn new(color: Color, width: f64) -> Result<GridStyle> {
        let mut style = GridStyle {
            color,
            width: 0.0,
        };
        style.set_width(width)?;
        Ok(style)
    }
    pub fn color(&self) -> Color {
        self.color
    }
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }
    pub fn width(&self) -> f64 {
        self.width
    }
    pub fn set_width(&mut self, width: f64) -> Result<()> {
        if !(width >= 0.0) {
            return Err(GridError::InvalidWidth(width));
        }
        self.width = width;
        Ok(())
    }
}

#[test]
fn test_parse_color() {
    assert_eq!("#000000".parse::<Color>(), Ok(Color::black()));
    assert_eq!("Black".parse::<Color>(), Ok(Color::black()));
    assert_eq!("#f00".parse::<Color>(), Ok(Color::rgb(255, 0, 0)));
    assert_eq!(
        Color::from_hex("#0000ff80"),
        Ok(Color {
            red: 0,
            green: 0,
            blue: 255,
            alpha: 128
        })
    );
    assert_eq!(
        "#12345".parse::<Color>(),
        Err(GridError::InvalidColor("#12345".to_string()))
    );
    assert!("#gg0000".parse::<Color>().is_err());
    assert_eq!(Color::rgb(85, 85, 85).to_string(), "#555555");
    assert_eq!(Color::from_hex("#0000ff80").unwrap().to_string(), "#0000ff80");
}

#[test]
fn test_style_width() {
    let mut style = GridStyle::default();
    assert_eq!(style.color(), Color::black());
    assert_eq!(style.width(), 0.0);
    assert_eq!(style.set_width(-1.0), Err(GridError::InvalidWidth(-1.0)));
    assert_eq!(style.width(), 0.0);
    assert!(GridStyle::new(Color::black(), 2.5).is_ok());
    assert!(GridStyle::new(Color::black(), f64::NAN).is_err());
}

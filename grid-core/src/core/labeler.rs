//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::LabelerCfg;
use crate::core::error::{GridError, Result};
use crate::core::style::Color;
use crate::core::Config;

pub const DEFAULT_TEXT_SIZE: f64 = 12.0;

/// Grid label settings
#[derive(PartialEq, Clone, Debug)]
pub struct Labeler {
    enabled: bool,
    min_zoom: u8,
    max_zoom: Option<u8>,
    color: Color,
    text_size: f64,
    /// Fraction of the tile kept free of labels along each edge
    buffer: f64,
}

impl Default for Labeler {
    fn default() -> Self {
        Labeler {
            enabled: false,
            min_zoom: 0,
            max_zoom: None,
            color: Color::black(),
            text_size: DEFAULT_TEXT_SIZE,
            buffer: 0.0,
        }
    }
}

/// Max zoom must not be below min zoom
pub(crate) fn check_range(min_zoom: u8, max_zoom: Option<u8>) -> Result<()> {
    match max_zoom {
        Some(max) if max < min_zoom => Err(GridError::InvalidRange { min: min_zoom, max }),
        _ => Ok(()),
    }
}

impl Labeler {
    pub fn new(
        enabled: bool,
        min_zoom: u8,
        max_zoom: Option<u8>,
        color: Color,
        text_size: f64,
        buffer: f64,
    ) -> Result<Labeler> {
        check_range(min_zoom, max_zoom)?;
        let mut labeler = Labeler {
            enabled,
            min_zoom,
            max_zoom,
            color,
            text_size,
            buffer: 0.0,
        };
        labeler.set_buffer(buffer)?;
        Ok(labeler)
    }
    pub fn enabled(&self) -> bool {
        self.enabled
    }
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
    pub fn min_zoom(&self) -> u8 {
        self.min_zoom
    }
    pub fn set_min_zoom(&mut self, min_zoom: u8) -> Result<()> {
        check_range(min_zoom, self.max_zoom)?;
        self.min_zoom = min_zoom;
        Ok(())
    }
    pub fn max_zoom(&self) -> Option<u8> {
        self.max_zoom
    }
    pub fn has_max_zoom(&self) -> bool {
        self.max_zoom.is_some()
    }
    pub fn set_max_zoom(&mut self, max_zoom: Option<u8>) -> Result<()> {
        check_range(self.min_zoom, max_zoom)?;
        self.max_zoom = max_zoom;
        Ok(())
    }
    pub fn set_zoom_range(&mut self, min_zoom: u8, max_zoom: Option<u8>) -> Result<()> {
        check_range(min_zoom, max_zoom)?;
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        Ok(())
    }
    pub fn is_within(&self, zoom: u8) -> bool {
        zoom >= self.min_zoom && self.max_zoom.map_or(true, |max| zoom <= max)
    }
    pub fn color(&self) -> Color {
        self.color
    }
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }
    pub fn text_size(&self) -> f64 {
        self.text_size
    }
    pub fn set_text_size(&mut self, text_size: f64) {
        self.text_size = text_size;
    }
    pub fn buffer(&self) -> f64 {
        self.buffer
    }
    /// Set the label buffer. Values outside [0.0, 0.5) are rejected.
    pub fn set_buffer(&mut self, buffer: f64) -> Result<()> {
        check_buffer(buffer)?;
        self.buffer = buffer;
        Ok(())
    }
}

pub fn check_buffer(buffer: f64) -> Result<()> {
    if buffer >= 0.0 && buffer < 0.5 {
        Ok(())
    } else {
        Err(GridError::InvalidBuffer(buffer))
    }
}

impl Config<LabelerCfg> for Labeler {
    fn from_config(cfg: &LabelerCfg) -> Result<Self> {
        let color = match cfg.color.as_ref().map(|c| c.trim()) {
            Some(color) if !color.is_empty() => color.parse()?,
            _ => Color::black(),
        };
        Labeler::new(
            cfg.enabled.unwrap_or(false),
            cfg.minzoom.unwrap_or(0),
            cfg.maxzoom,
            color,
            cfg.text_size.unwrap_or(DEFAULT_TEXT_SIZE),
            cfg.buffer.unwrap_or(0.0),
        )
    }
    fn gen_config() -> String {
        let toml = r##"
[grids.KEY.labeler]
enabled = true
#minzoom = 0
#maxzoom = 22
color = "#000000"
text_size = 12.0
# Fraction of the tile kept free of labels (0.0 <= buffer < 0.5)
buffer = 0.05
"##;
        toml.to_string()
    }
    fn gen_runtime_config(&self) -> String {
        let mut lines = vec![format!("enabled = {}", self.enabled)];
        if self.min_zoom > 0 {
            lines.push(format!("minzoom = {}", self.min_zoom));
        }
        if let Some(max_zoom) = self.max_zoom {
            lines.push(format!("maxzoom = {}", max_zoom));
        }
        lines.push(format!("color = \"{}\"", self.color));
        lines.push(format!("text_size = {:?}", self.text_size));
        lines.push(format!("buffer = {:?}", self.buffer));
        lines.join("\n")
    }
}

#[test]
fn test_label_buffer() {
    let mut labeler = Labeler::default();
    assert_eq!(labeler.set_buffer(0.25), Ok(()));
    assert_eq!(labeler.set_buffer(-0.1), Err(GridError::InvalidBuffer(-0.1)));
    assert_eq!(labeler.buffer(), 0.25);
    assert!(labeler.set_buffer(0.5).is_err());
    assert!(labeler.set_buffer(f64::NAN).is_err());
    assert_eq!(labeler.buffer(), 0.25);
    assert_eq!(labeler.set_buffer(0.0), Ok(()));
}

#[test]
fn test_labeler_zooms() {
    let mut labeler = Labeler::new(true, 3, Some(8), Color::black(), 10.0, 0.1).unwrap();
    assert!(!labeler.is_within(2));
    assert!(labeler.is_within(3));
    assert!(labeler.is_within(8));
    assert!(!labeler.is_within(9));
    assert_eq!(
        labeler.set_min_zoom(9),
        Err(GridError::InvalidRange { min: 9, max: 8 })
    );
    assert_eq!(labeler.min_zoom(), 3);
    assert_eq!(labeler.set_max_zoom(None), Ok(()));
    assert!(labeler.is_within(20));
    assert!(Labeler::new(true, 5, Some(4), Color::black(), 10.0, 0.1).is_err());
}

#[test]
fn test_labeler_from_config() {
    let cfg = LabelerCfg {
        enabled: Some(true),
        minzoom: Some(7),
        color: Some("#0000ff".to_string()),
        buffer: Some(0.1),
        ..Default::default()
    };
    let labeler = Labeler::from_config(&cfg).unwrap();
    assert!(labeler.enabled());
    assert_eq!(labeler.min_zoom(), 7);
    assert_eq!(labeler.max_zoom(), None);
    assert_eq!(labeler.color(), Color::rgb(0, 0, 255));
    assert_eq!(labeler.text_size(), DEFAULT_TEXT_SIZE);
    assert_eq!(labeler.buffer(), 0.1);
    assert_eq!(
        labeler.gen_runtime_config(),
        "enabled = true\nminzoom = 7\ncolor = \"#0000ff\"\ntext_size = 12.0\nbuffer = 0.1"
    );

    let defaults = Labeler::from_config(&LabelerCfg::default()).unwrap();
    assert_eq!(defaults, Labeler::default());

    let cfg = LabelerCfg {
        buffer: Some(0.7),
        ..Default::default()
    };
    assert_eq!(
        Labeler::from_config(&cfg),
        Err(GridError::InvalidBuffer(0.7))
    );
}

#[test]
fn test_labeler_template() {
    use crate::core::config::{parse_config, ApplicationCfg};

    let config: ApplicationCfg = parse_config(Labeler::gen_config(), "").unwrap();
    let cfg = config.grids["KEY"].labeler.clone().unwrap();
    assert_eq!(cfg.color, Some("#000000".to_string()));
    let labeler = Labeler::from_config(&cfg).unwrap();
    assert!(labeler.enabled());
    assert_eq!(labeler.color(), Color::black());
    assert_eq!(labeler.buffer(), 0.05);
}

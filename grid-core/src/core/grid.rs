//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Grid overlay definition

use crate::core::config::GridCfg;
use crate::core::error::{GridError, Result};
use crate::core::labeler::{check_range, Labeler};
use crate::core::style::{Color, GridStyle};
use crate::core::Config;

#[derive(PartialEq, Clone, Debug)]
pub struct Grid {
    key: String,
    enabled: bool,
    min_zoom: u8,
    max_zoom: Option<u8>,
    lines_min_zoom: Option<u8>,
    lines_max_zoom: Option<u8>,
    style: GridStyle,
    labeler: Option<Labeler>,
    /// Graticule spacing in degrees
    precision: Option<f64>,
}

impl Grid {
    /// Disabled grid over all zoom levels with default style
    pub fn new(key: &str) -> Grid {
        Grid {
            key: key.to_string(),
            enabled: false,
            min_zoom: 0,
            max_zoom: None,
            lines_min_zoom: None,
            lines_max_zoom: None,
            style: GridStyle::default(),
            labeler: None,
            precision: None,
        }
    }

    /// Grid from its configuration section.
    /// `default_width` is used when the section has no line width.
    pub fn load(key: &str, cfg: &GridCfg, default_width: Option<f64>) -> Result<Grid> {
        let mut grid = Grid::new(key);
        grid.enabled = cfg.enabled.unwrap_or(true);
        grid.set_zoom_range(cfg.minzoom.unwrap_or(0), cfg.maxzoom)?;
        if let Some(ref lines) = cfg.lines {
            check_range(lines.minzoom.unwrap_or(0), lines.maxzoom)?;
            grid.lines_min_zoom = lines.minzoom;
            grid.lines_max_zoom = lines.maxzoom;
        }
        let color = match cfg.color.as_ref().map(|c| c.trim()) {
            Some(color) if !color.is_empty() => color.parse()?,
            _ => Color::black(),
        };
        let width = cfg.width.or(default_width).unwrap_or(0.0);
        grid.style = GridStyle::new(color, width)?;
        if let Some(precision) = cfg.precision {
            grid.set_precision(Some(precision))?;
        }
        if let Some(ref labeler) = cfg.labeler {
            grid.labeler = Some(Labeler::from_config(labeler)?);
        }
        debug!(
            "Loaded grid '{}' with zoom range {}-{:?}",
            key, grid.min_zoom, grid.max_zoom
        );
        Ok(grid)
    }

    pub fn key(&self) -> &str {
        &self.key
    }
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
    /// Direct state change. The registry index must be rebuilt afterwards.
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

    /// Minimum zoom for drawing lines, the grid minimum if not overridden
    pub fn lines_min_zoom(&self) -> u8 {
        self.lines_min_zoom.unwrap_or(self.min_zoom)
    }
    pub fn has_lines_min_zoom(&self) -> bool {
        self.lines_min_zoom.is_some()
    }
    pub fn set_lines_min_zoom(&mut self, lines_min_zoom: Option<u8>) -> Result<()> {
        check_range(lines_min_zoom.unwrap_or(0), self.lines_max_zoom)?;
        self.lines_min_zoom = lines_min_zoom;
        Ok(())
    }
    /// Maximum zoom for drawing lines, the grid maximum if not overridden
    pub fn lines_max_zoom(&self) -> Option<u8> {
        self.lines_max_zoom.or(self.max_zoom)
    }
    pub fn has_lines_max_zoom(&self) -> bool {
        self.lines_max_zoom.is_some()
    }
    pub fn set_lines_max_zoom(&mut self, lines_max_zoom: Option<u8>) -> Result<()> {
        check_range(self.lines_min_zoom.unwrap_or(0), lines_max_zoom)?;
        self.lines_max_zoom = lines_max_zoom;
        Ok(())
    }
    /// Lines zoom check. Only the overridden bounds restrict the range.
    pub fn is_lines_within(&self, zoom: u8) -> bool {
        self.lines_min_zoom.map_or(true, |min| zoom >= min)
            && self.lines_max_zoom.map_or(true, |max| zoom <= max)
    }

    pub fn style(&self) -> &GridStyle {
        &self.style
    }
    /// Set the line style, `None` resets to the default style
    pub fn set_style(&mut self, style: Option<GridStyle>) {
        self.style = style.unwrap_or_default();
    }
    pub fn color(&self) -> Color {
        self.style.color()
    }
    pub fn set_color(&mut self, color: Color) {
        self.style.set_color(color);
    }
    pub fn width(&self) -> f64 {
        self.style.width()
    }
    pub fn set_width(&mut self, width: f64) -> Result<()> {
        self.style.set_width(width)
    }

    pub fn precision(&self) -> Option<f64> {
        self.precision
    }
    pub fn set_precision(&mut self, precision: Option<f64>) -> Result<()> {
        match precision {
            Some(p) if !(p > 0.0) || !p.is_finite() => Err(GridError::InvalidPrecision(p)),
            _ => {
                self.precision = precision;
                Ok(())
            }
        }
    }

    pub fn labeler(&self) -> Option<&Labeler> {
        self.labeler.as_ref()
    }
    pub fn labeler_mut(&mut self) -> Option<&mut Labeler> {
        self.labeler.as_mut()
    }
    pub fn has_labeler(&self) -> bool {
        self.labeler.is_some()
    }
    pub fn set_labeler(&mut self, labeler: Option<Labeler>) {
        self.labeler = labeler;
    }
    /// Labels are drawn at this zoom
    pub fn is_labeler_within(&self, zoom: u8) -> Result<bool> {
        let labeler = self.labeler.as_ref().ok_or(GridError::MissingLabeler)?;
        Ok(labeler.enabled() && labeler.is_within(zoom))
    }
    pub fn label_buffer(&self) -> Result<f64> {
        self.labeler
            .as_ref()
            .map(|labeler| labeler.buffer())
            .ok_or(GridError::MissingLabeler)
    }

    /// Configuration section reproducing this grid
    pub fn gen_runtime_config(&self) -> String {
        let mut lines = vec![
            format!("[grids.{}]", self.key),
            format!("enabled = {}", self.enabled),
        ];
        if self.min_zoom > 0 {
            lines.push(format!("minzoom = {}", self.min_zoom));
        }
        if let Some(max_zoom) = self.max_zoom {
            lines.push(format!("maxzoom = {}", max_zoom));
        }
        lines.push(format!("color = \"{}\"", self.color()));
        lines.push(format!("width = {:?}", self.width()));
        if let Some(precision) = self.precision {
            lines.push(format!("precision = {:?}", precision));
        }
        if self.has_lines_min_zoom() || self.has_lines_max_zoom() {
            lines.push(format!("\n[grids.{}.lines]", self.key));
            if let Some(min_zoom) = self.lines_min_zoom {
                lines.push(format!("minzoom = {}", min_zoom));
            }
            if let Some(max_zoom) = self.lines_max_zoom {
                lines.push(format!("maxzoom = {}", max_zoom));
            }
        }
        if let Some(ref labeler) = self.labeler {
            lines.push(format!("\n[grids.{}.labeler]", self.key));
            lines.push(labeler.gen_runtime_config());
        }
        lines.join("\n")
    }
}

//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Raster tiles

use crate::bounds::Bounds;
use crate::pixel::Pixel;
use crate::point::Point;
use crate::unit::Unit;
use crate::utils;

/// Tile raster covering bounds at one zoom level
#[derive(PartialEq, Clone, Debug)]
pub struct GridTile {
    /// Tile width in pixels
    width: u32,
    /// Tile height in pixels
    height: u32,
    zoom: u8,
    bounds: Bounds,
}

impl GridTile {
    /// Tile given its x, y, and z in XYZ adressing scheme
    pub fn new(width: u32, height: u32, xtile: u32, ytile: u32, zoom: u8) -> GridTile {
        GridTile {
            width,
            height,
            zoom,
            bounds: utils::tile_bounds(xtile, ytile, zoom),
        }
    }
    /// Tile covering the bounds, zoom level rounded from the shorter side
    pub fn with_bounds(width: u32, height: u32, bounds: Bounds) -> GridTile {
        let zoom = utils::zoom_level(&bounds).round().max(0.0) as u8;
        GridTile {
            width,
            height,
            zoom,
            bounds,
        }
    }
    pub fn width(&self) -> u32 {
        self.width
    }
    pub fn height(&self) -> u32 {
        self.height
    }
    pub fn zoom(&self) -> u8 {
        self.zoom
    }
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }
    pub fn bounds_in(&self, unit: Unit) -> Bounds {
        self.bounds.to_unit(unit)
    }
    pub fn bounds_degrees(&self) -> Bounds {
        self.bounds_in(Unit::Degree)
    }
    pub fn bounds_meters(&self) -> Bounds {
        self.bounds_in(Unit::Meter)
    }
    /// Pixel location of the point within the tile
    pub fn pixel(&self, point: &Point) -> Pixel {
        utils::pixel(self.width, self.height, &self.bounds, point)
    }
    /// X pixel of a longitude in meters
    pub fn x_pixel(&self, longitude: f64) -> f64 {
        utils::x_pixel(self.width, &self.bounds, longitude)
    }
    /// Y pixel of a latitude in meters
    pub fn y_pixel(&self, latitude: f64) -> f64 {
        utils::y_pixel(self.height, &self.bounds, latitude)
    }
}

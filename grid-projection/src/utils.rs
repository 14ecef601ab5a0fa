//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Projection utilities

use crate::bounds::Bounds;
use crate::geometry::{self, WEB_MERCATOR_HALF_WORLD_WIDTH};
use crate::pixel::Pixel;
use crate::point::{Line, Point};
use crate::unit::Unit;

/// Pixel where the point fits into a raster covering the bounds
pub fn pixel(width: u32, height: u32, bounds: &Bounds, point: &Point) -> Pixel {
    let point = point.to_meters();
    let bounds = bounds.to_meters();
    let x = x_pixel(width, &bounds, point.longitude);
    let y = y_pixel(height, &bounds, point.latitude);
    Pixel::new(x, y)
}

/// X pixel for a longitude in meters
pub fn x_pixel(width: u32, bounds: &Bounds, longitude: f64) -> f64 {
    let bounds = bounds.to_meters();
    let offset = longitude - bounds.min_lon;
    offset / bounds.width() * width as f64
}

/// Y pixel for a latitude in meters. North is pixel row 0.
pub fn y_pixel(height: u32, bounds: &Bounds, latitude: f64) -> f64 {
    let bounds = bounds.to_meters();
    let offset = bounds.max_lat - latitude;
    offset / bounds.height() * height as f64
}

/// Number of tiles per side at the zoom level
pub fn tiles_per_side(zoom: u8) -> f64 {
    2f64.powi(zoom as i32)
}

/// Tile width and height in meters
pub fn tile_size(tiles_per_side: f64) -> f64 {
    2.0 * WEB_MERCATOR_HALF_WORLD_WIDTH / tiles_per_side
}

/// Meter bounds of a tile in XYZ adressing scheme (row 0 is the northernmost)
pub fn tile_bounds(xtile: u32, ytile: u32, zoom: u8) -> Bounds {
    let tile_size = tile_size(tiles_per_side(zoom));
    let min_lon = -WEB_MERCATOR_HALF_WORLD_WIDTH + xtile as f64 * tile_size;
    let max_lat = WEB_MERCATOR_HALF_WORLD_WIDTH - ytile as f64 * tile_size;
    Bounds::meters(min_lon, max_lat - tile_size, min_lon + tile_size, max_lat)
}

/// Zoom level where a tile has the size of the shorter side of the bounds.
/// Not rounded.
pub fn zoom_level(bounds: &Bounds) -> f64 {
    let bounds = bounds.to_meters();
    let tile_size = bounds.width().min(bounds.height());
    let tiles_per_side = 2.0 * WEB_MERCATOR_HALF_WORLD_WIDTH / tile_size;
    tiles_per_side.log2()
}

/// Convert a coordinate from one unit to another
pub fn to_unit(from_unit: Unit, longitude: f64, latitude: f64, to_unit: Unit) -> Point {
    if from_unit == to_unit {
        return Point::new(longitude, latitude, to_unit);
    }
    let (lon, lat) = match to_unit {
        Unit::Degree => geometry::meters_to_degrees(longitude, latitude),
        Unit::Meter => geometry::degrees_to_meters(longitude, latitude),
    };
    Point::new(lon, lat, to_unit)
}

/// Multiple of the precision at or before the value
pub fn precision_before(value: f64, precision: f64) -> f64 {
    if value.abs() >= precision {
        value - ((value % precision) + precision) % precision
    } else if value < 0.0 {
        -precision
    } else {
        0.0
    }
}

/// Multiple of the precision after the value
pub fn precision_after(value: f64, precision: f64) -> f64 {
    precision_before(value + precision, precision)
}

/// Intersection point of two lines, in the unit of the first line
pub fn line_intersection(line1: &Line, line2: &Line) -> Option<Point> {
    intersection(&line1.point1, &line1.point2, &line2.point1, &line2.point2)
}

/// Intersection point of two segments given by their end points.
/// Computed in meters and returned in the unit of `line1_point1`.
pub fn intersection(
    line1_point1: &Point,
    line1_point2: &Point,
    line2_point1: &Point,
    line2_point2: &Point,
) -> Option<Point> {
    let merc = |p: &Point| {
        let p = p.to_meters();
        (p.longitude, p.latitude)
    };
    geometry::segment_intersection(
        merc(line1_point1),
        merc(line1_point2),
        merc(line2_point1),
        merc(line2_point2),
    )
    .map(|(x, y)| Point::meters(x, y).to_unit(line1_point1.unit))
}

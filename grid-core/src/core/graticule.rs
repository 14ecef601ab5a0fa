//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Regular latitude/longitude lines of a grid within a tile

use crate::core::grid::Grid;
use grid_projection::geometry::WEB_MERCATOR_MAX_LAT;
use grid_projection::{GridTile, Line, Pixel, Point};
use std::cmp::Ordering;

/// Grid line clipped to a tile
#[derive(PartialEq, Clone, Debug)]
pub struct GridLine {
    /// Clipped line in degrees
    pub line: Line,
    pub start: Pixel,
    pub end: Pixel,
}

impl GridLine {
    pub fn is_meridian(&self) -> bool {
        self.line.point1.longitude == self.line.point2.longitude
    }
}

/// Meridians (south to north) followed by parallels (west to east)
pub fn grid_lines(grid: &Grid, tile: &GridTile) -> Vec<GridLine> {
    let precision = match grid.precision() {
        Some(precision) if grid.is_lines_within(tile.zoom()) => precision,
        _ => return Vec::new(),
    };
    let bounds = tile.bounds_degrees().to_precision(precision);
    // A degree of latitude never spans fewer pixels than a degree of longitude
    if bounds.width() / precision > f64::from(tile.width()) {
        debug!(
            "Grid '{}' is finer than a pixel at zoom {}",
            grid.key(),
            tile.zoom()
        );
        return Vec::new();
    }
    let min_lat = bounds.min_lat.max(-WEB_MERCATOR_MAX_LAT);
    let max_lat = bounds.max_lat.min(WEB_MERCATOR_MAX_LAT);

    let mut lines = Vec::new();
    for lon in multiples(bounds.min_lon, bounds.max_lon, precision) {
        let meridian = Line::new(Point::degrees(lon, min_lat), Point::degrees(lon, max_lat));
        lines.extend(clip(&meridian, tile));
    }
    for lat in multiples(bounds.min_lat, bounds.max_lat, precision) {
        if lat.abs() > WEB_MERCATOR_MAX_LAT {
            continue;
        }
        let parallel = Line::new(
            Point::degrees(bounds.min_lon, lat),
            Point::degrees(bounds.max_lon, lat),
        );
        lines.extend(clip(&parallel, tile));
    }
    debug!(
        "{} grid lines for grid '{}' at zoom {}",
        lines.len(),
        grid.key(),
        tile.zoom()
    );
    lines
}

fn multiples(min: f64, max: f64, precision: f64) -> impl Iterator<Item = f64> {
    let count = ((max - min) / precision).round() as usize;
    (0..=count).map(move |i| min + i as f64 * precision)
}

/// Part of the line within the tile, if it crosses the tile
fn clip(line: &Line, tile: &GridTile) -> Option<GridLine> {
    let points = tile.bounds().line_intersections(line);
    if points.len() < 2 {
        return None;
    }
    let along = |p: &Point| {
        (p.longitude - line.point1.longitude) + (p.latitude - line.point1.latitude)
    };
    let order = |a: &&Point, b: &&Point| {
        along(*a)
            .partial_cmp(&along(*b))
            .unwrap_or(Ordering::Equal)
    };
    let first = *points.iter().min_by(order)?;
    let last = *points.iter().max_by(order)?;
    Some(GridLine {
        line: Line::new(first, last),
        start: tile.pixel(&first),
        end: tile.pixel(&last),
    })
}

#[cfg(test)]
fn assert_pixel(pixel: Pixel, x: f64, y: f64) {
    assert!((pixel.x - x).abs() < 1e-6, "{:?} != ({}, {})", pixel, x, y);
    assert!((pixel.y - y).abs() < 1e-6, "{:?} != ({}, {})", pixel, x, y);
}

#[test]
fn test_world_tile_lines() {
    let mut grid = Grid::new("ninety_degree");
    grid.set_precision(Some(90.0)).unwrap();
    let tile = GridTile::new(256, 256, 0, 0, 0);
    let lines = grid_lines(&grid, &tile);

    let meridians: Vec<&GridLine> = lines.iter().filter(|l| l.is_meridian()).collect();
    assert_eq!(meridians.len(), 5);
    assert_eq!(lines.len(), 6);

    let greenwich = meridians[2];
    assert!(greenwich.line.point1.longitude.abs() < 1e-9);
    assert_pixel(greenwich.start, 128.0, 256.0);
    assert_pixel(greenwich.end, 128.0, 0.0);
    assert_pixel(meridians[0].start, 0.0, 256.0);
    assert_pixel(meridians[4].end, 256.0, 0.0);

    let equator = &lines[5];
    assert!(!equator.is_meridian());
    assert_pixel(equator.start, 0.0, 128.0);
    assert_pixel(equator.end, 256.0, 128.0);
}

#[test]
fn test_lines_zoom_range() {
    let mut grid = Grid::new("ten_degree");
    grid.set_precision(Some(10.0)).unwrap();
    grid.set_lines_min_zoom(Some(2)).unwrap();
    assert!(grid_lines(&grid, &GridTile::new(256, 256, 0, 0, 1)).is_empty());
    assert!(!grid_lines(&grid, &GridTile::new(256, 256, 0, 0, 2)).is_empty());

    let grid = Grid::new("no_precision");
    assert!(grid_lines(&grid, &GridTile::new(256, 256, 0, 0, 0)).is_empty());
}

#[test]
fn test_sub_pixel_precision() {
    let mut grid = Grid::new("tiny");
    grid.set_precision(Some(1e-9)).unwrap();
    assert!(grid_lines(&grid, &GridTile::new(256, 256, 0, 0, 0)).is_empty());

    // 1.5 degrees on a 256 pixel world tile is still drawable
    grid.set_precision(Some(1.5)).unwrap();
    let lines = grid_lines(&grid, &GridTile::new(256, 256, 0, 0, 0));
    assert_eq!(lines.iter().filter(|l| l.is_meridian()).count(), 241);
}

#[test]
fn test_tile_lines() {
    // Tile 1/1/0 spans 0..180 east and 0..85 north
    let mut grid = Grid::new("thirty_degree");
    grid.set_precision(Some(30.0)).unwrap();
    let tile = GridTile::new(512, 512, 1, 0, 1);
    let lines = grid_lines(&grid, &tile);
    let meridians: Vec<&GridLine> = lines.iter().filter(|l| l.is_meridian()).collect();
    // 0, 30, .., 180
    assert_eq!(meridians.len(), 7);
    assert_pixel(meridians[3].start, 256.0, 512.0);
    // 0, 30 and 60 north
    assert_eq!(lines.len() - meridians.len(), 3);
    for line in &lines {
        for pixel in &[line.start, line.end] {
            assert!(pixel.x > -1e-6 && pixel.x < 512.0 + 1e-6);
            assert!(pixel.y > -1e-6 && pixel.y < 512.0 + 1e-6);
        }
    }
}

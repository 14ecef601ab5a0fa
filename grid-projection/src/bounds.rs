//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Rectangular bounds in degrees or meters

use crate::error::{ProjectionError, Result};
use crate::geometry::Extent;
use crate::pixel::PixelRange;
use crate::point::{Line, Point};
use crate::tile::GridTile;
use crate::unit::Unit;
use crate::utils;

/// Geographic bounds.
/// Coordinates are ordered on construction, so that min <= max holds.
#[derive(PartialEq, Clone, Debug)]
pub struct Bounds {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
    pub unit: Unit,
}

impl Bounds {
    pub fn new(lon1: f64, lat1: f64, lon2: f64, lat2: f64, unit: Unit) -> Bounds {
        Bounds {
            min_lon: lon1.min(lon2),
            min_lat: lat1.min(lat2),
            max_lon: lon1.max(lon2),
            max_lat: lat1.max(lat2),
            unit,
        }
    }
    pub fn degrees(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Bounds {
        Bounds::new(min_lon, min_lat, max_lon, max_lat, Unit::Degree)
    }
    pub fn meters(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Bounds {
        Bounds::new(min_lon, min_lat, max_lon, max_lat, Unit::Meter)
    }
    /// Bounds spanned by two corners in the same unit
    pub fn from_corners(southwest: &Point, northeast: &Point) -> Result<Bounds> {
        if southwest.unit != northeast.unit {
            return Err(ProjectionError::UnitMismatch {
                southwest: southwest.unit,
                northeast: northeast.unit,
            });
        }
        Ok(Bounds::new(
            southwest.longitude,
            southwest.latitude,
            northeast.longitude,
            northeast.latitude,
            southwest.unit,
        ))
    }
    pub fn from_extent(extent: &Extent, unit: Unit) -> Bounds {
        Bounds::new(extent.minx, extent.miny, extent.maxx, extent.maxy, unit)
    }
    pub fn extent(&self) -> Extent {
        Extent {
            minx: self.min_lon,
            miny: self.min_lat,
            maxx: self.max_lon,
            maxy: self.max_lat,
        }
    }
    pub fn is_unit(&self, unit: Unit) -> bool {
        self.unit == unit
    }
    pub fn is_degrees(&self) -> bool {
        self.is_unit(Unit::Degree)
    }
    pub fn is_meters(&self) -> bool {
        self.is_unit(Unit::Meter)
    }
    /// Bounds in the unit, unchanged copy if already in the unit
    pub fn to_unit(&self, unit: Unit) -> Bounds {
        if self.is_unit(unit) {
            return self.clone();
        }
        let southwest = self.southwest().to_unit(unit);
        let northeast = self.northeast().to_unit(unit);
        Bounds::new(
            southwest.longitude,
            southwest.latitude,
            northeast.longitude,
            northeast.latitude,
            unit,
        )
    }
    pub fn to_degrees(&self) -> Bounds {
        self.to_unit(Unit::Degree)
    }
    pub fn to_meters(&self) -> Bounds {
        self.to_unit(Unit::Meter)
    }
    pub fn width(&self) -> f64 {
        self.max_lon - self.min_lon
    }
    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }
    pub fn southwest(&self) -> Point {
        Point::new(self.min_lon, self.min_lat, self.unit)
    }
    pub fn northwest(&self) -> Point {
        Point::new(self.min_lon, self.max_lat, self.unit)
    }
    pub fn southeast(&self) -> Point {
        Point::new(self.max_lon, self.min_lat, self.unit)
    }
    pub fn northeast(&self) -> Point {
        Point::new(self.max_lon, self.max_lat, self.unit)
    }
    /// Center point. Degree bounds are centered in meters, since parallels
    /// are not evenly spaced in the projection.
    pub fn centroid(&self) -> Point {
        match self.unit {
            Unit::Degree => self.to_meters().centroid().to_degrees(),
            Unit::Meter => Point::meters(
                self.min_lon + self.width() / 2.0,
                self.min_lat + self.height() / 2.0,
            ),
        }
    }
    pub fn west_line(&self) -> Line {
        Line::new(self.northwest(), self.southwest())
    }
    pub fn south_line(&self) -> Line {
        Line::new(self.southwest(), self.southeast())
    }
    pub fn east_line(&self) -> Line {
        Line::new(self.southeast(), self.northeast())
    }
    pub fn north_line(&self) -> Line {
        Line::new(self.northeast(), self.northwest())
    }
    /// The four edges, clockwise starting with the west edge
    pub fn lines(&self) -> Vec<Line> {
        let southwest = self.southwest();
        let northwest = self.northwest();
        let northeast = self.northeast();
        let southeast = self.southeast();
        vec![
            Line::new(southwest, northwest),
            Line::new(northwest, northeast),
            Line::new(northeast, southeast),
            Line::new(southeast, southwest),
        ]
    }
    /// Overlapping bounds in the unit of this bounds
    pub fn overlap(&self, other: &Bounds) -> Option<Bounds> {
        self.extent()
            .overlap(&other.to_unit(self.unit).extent())
            .map(|extent| Bounds::from_extent(&extent, self.unit))
    }
    /// Union bounds in the unit of this bounds
    pub fn union(&self, other: &Bounds) -> Bounds {
        let extent = self.extent().union(&other.to_unit(self.unit).extent());
        Bounds::from_extent(&extent, self.unit)
    }
    pub fn contains(&self, point: &Point) -> bool {
        let point = point.to_unit(self.unit);
        point.longitude >= self.min_lon
            && point.longitude <= self.max_lon
            && point.latitude >= self.min_lat
            && point.latitude <= self.max_lat
    }
    /// Degree bounds minimally containing this bounds, with every side on a
    /// multiple of the precision (degrees).
    pub fn to_precision(&self, precision: f64) -> Bounds {
        let bounds = self.to_degrees();
        Bounds::degrees(
            utils::precision_before(bounds.min_lon, precision),
            utils::precision_before(bounds.min_lat, precision),
            utils::precision_after(bounds.max_lon, precision),
            utils::precision_after(bounds.max_lat, precision),
        )
    }
    /// Pixel range of this bounds within a raster covering `bounds`
    pub fn pixel_range(&self, width: u32, height: u32, bounds: &Bounds) -> PixelRange {
        let bounds = bounds.to_meters();
        let top_left = utils::pixel(width, height, &bounds, &self.northwest());
        let bottom_right = utils::pixel(width, height, &bounds, &self.southeast());
        PixelRange::new(top_left, bottom_right)
    }
    pub fn pixel_range_from_tile(&self, tile: &GridTile) -> PixelRange {
        self.pixel_range(tile.width(), tile.height(), tile.bounds())
    }
    /// Points where the line crosses the edges, in the unit of the line.
    /// A crossing through a corner is reported once.
    pub fn line_intersections(&self, line: &Line) -> Vec<Point> {
        let mut points: Vec<Point> = Vec::new();
        for edge in self.lines() {
            if let Some(point) = line.intersection(&edge) {
                if !points.iter().any(|p| same_location(p, &point)) {
                    points.push(point);
                }
            }
        }
        points
    }
}

fn same_location(p1: &Point, p2: &Point) -> bool {
    const TOLERANCE: f64 = 1e-9;
    let p1 = p1.to_meters();
    let p2 = p2.to_meters();
    let scale = p1.longitude.abs().max(p1.latitude.abs()).max(1.0);
    (p1.longitude - p2.longitude).abs() <= TOLERANCE * scale
        && (p1.latitude - p2.latitude).abs() <= TOLERANCE * scale
}

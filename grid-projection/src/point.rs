//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Points and lines tagged with a unit

use crate::hemisphere::Hemisphere;
use crate::pixel::Pixel;
use crate::tile::GridTile;
use crate::unit::Unit;
use crate::utils;

/// Coordinate in degrees or meters
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Point {
    /// Longitude or Mercator x
    pub longitude: f64,
    /// Latitude or Mercator y
    pub latitude: f64,
    pub unit: Unit,
}

impl Point {
    pub fn new(longitude: f64, latitude: f64, unit: Unit) -> Point {
        Point {
            longitude,
            latitude,
            unit,
        }
    }
    pub fn degrees(longitude: f64, latitude: f64) -> Point {
        Point::new(longitude, latitude, Unit::Degree)
    }
    pub fn meters(longitude: f64, latitude: f64) -> Point {
        Point::new(longitude, latitude, Unit::Meter)
    }
    pub fn is_unit(&self, unit: Unit) -> bool {
        self.unit == unit
    }
    /// Point in the unit, unchanged copy if already in the unit
    pub fn to_unit(&self, unit: Unit) -> Point {
        utils::to_unit(self.unit, self.longitude, self.latitude, unit)
    }
    pub fn to_degrees(&self) -> Point {
        self.to_unit(Unit::Degree)
    }
    pub fn to_meters(&self) -> Point {
        self.to_unit(Unit::Meter)
    }
    /// Pixel location of the point within the tile
    pub fn pixel(&self, tile: &GridTile) -> Pixel {
        tile.pixel(self)
    }
    pub fn hemisphere(&self) -> Hemisphere {
        Hemisphere::from_latitude(self.latitude)
    }
}

/// Line segment between two points
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Line {
    pub point1: Point,
    pub point2: Point,
}

impl Line {
    /// Create a line, the second point is converted to the unit of the first
    pub fn new(point1: Point, point2: Point) -> Line {
        Line {
            point1,
            point2: point2.to_unit(point1.unit),
        }
    }
    pub fn unit(&self) -> Unit {
        self.point1.unit
    }
    pub fn to_unit(&self, unit: Unit) -> Line {
        Line {
            point1: self.point1.to_unit(unit),
            point2: self.point2.to_unit(unit),
        }
    }
    pub fn to_degrees(&self) -> Line {
        self.to_unit(Unit::Degree)
    }
    pub fn to_meters(&self) -> Line {
        self.to_unit(Unit::Meter)
    }
    /// Intersection with another line, in the unit of this line
    pub fn intersection(&self, other: &Line) -> Option<Point> {
        utils::line_intersection(self, other)
    }
}

//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Spherical Web Mercator geometry primitives

use std::f64::consts;

/// Radius of the Web Mercator sphere in meters
pub const EARTH_RADIUS: f64 = 6378137.0;

/// Half of the Web Mercator world width in meters
pub const WEB_MERCATOR_HALF_WORLD_WIDTH: f64 = consts::PI * EARTH_RADIUS;

/// Latitude at which the Web Mercator world becomes square
pub const WEB_MERCATOR_MAX_LAT: f64 = 85.0511287798066;

/// Parametric slack when testing segment end points
const SEGMENT_EPSILON: f64 = 1e-9;

/// Axis aligned rectangle without unit information
#[derive(PartialEq, Clone, Debug)]
pub struct Extent {
    pub minx: f64,
    pub miny: f64,
    pub maxx: f64,
    pub maxy: f64,
}

impl Extent {
    pub fn width(&self) -> f64 {
        self.maxx - self.minx
    }
    pub fn height(&self) -> f64 {
        self.maxy - self.miny
    }
    /// Overlapping part of both extents. Extents only touching at an edge
    /// still overlap with an empty width or height.
    pub fn overlap(&self, other: &Extent) -> Option<Extent> {
        let minx = self.minx.max(other.minx);
        let miny = self.miny.max(other.miny);
        let maxx = self.maxx.min(other.maxx);
        let maxy = self.maxy.min(other.maxy);
        if minx <= maxx && miny <= maxy {
            Some(Extent {
                minx,
                miny,
                maxx,
                maxy,
            })
        } else {
            None
        }
    }
    /// Smallest extent containing both extents
    pub fn union(&self, other: &Extent) -> Extent {
        Extent {
            minx: self.minx.min(other.minx),
            miny: self.miny.min(other.miny),
            maxx: self.maxx.max(other.maxx),
            maxy: self.maxy.max(other.maxy),
        }
    }
}

/// Returns the Spherical Mercator (x, y) in meters
pub fn degrees_to_meters(lon: f64, lat: f64) -> (f64, f64) {
    let x = lon * WEB_MERCATOR_HALF_WORLD_WIDTH / 180.0;
    let y = ((90.0 + lat) * consts::PI / 360.0).tan().ln() / (consts::PI / 180.0);
    (x, y * WEB_MERCATOR_HALF_WORLD_WIDTH / 180.0)
}

/// Returns the WGS84 (lon, lat) of a Spherical Mercator coordinate
pub fn meters_to_degrees(x: f64, y: f64) -> (f64, f64) {
    let lon = x * 180.0 / WEB_MERCATOR_HALF_WORLD_WIDTH;
    let lat = (y * consts::PI / WEB_MERCATOR_HALF_WORLD_WIDTH).exp().atan() * 360.0 / consts::PI
        - 90.0;
    (lon, lat)
}

/// Intersection point of the segments a1-a2 and b1-b2.
/// Parallel and collinear segments have no intersection.
pub fn segment_intersection(
    a1: (f64, f64),
    a2: (f64, f64),
    b1: (f64, f64),
    b2: (f64, f64),
) -> Option<(f64, f64)> {
    let r = (a2.0 - a1.0, a2.1 - a1.1);
    let s = (b2.0 - b1.0, b2.1 - b1.1);
    let denom = r.0 * s.1 - r.1 * s.0;
    if denom == 0.0 || !denom.is_finite() {
        return None;
    }
    let q = (b1.0 - a1.0, b1.1 - a1.1);
    let t = (q.0 * s.1 - q.1 * s.0) / denom;
    let u = (q.0 * r.1 - q.1 * r.0) / denom;
    let within = |v: f64| v >= -SEGMENT_EPSILON && v <= 1.0 + SEGMENT_EPSILON;
    if within(t) && within(u) {
        Some((a1.0 + t * r.0, a1.1 + t * r.1))
    } else {
        None
    }
}

#[test]
fn test_web_mercator() {
    let (x, y) = degrees_to_meters(180.0, WEB_MERCATOR_MAX_LAT);
    assert!((x - WEB_MERCATOR_HALF_WORLD_WIDTH).abs() < 1e-6);
    assert!((y - WEB_MERCATOR_HALF_WORLD_WIDTH).abs() < 1e-3);

    let (lon, lat) = meters_to_degrees(0.0, 0.0);
    assert_eq!(lon, 0.0);
    assert!(lat.abs() < 1e-12);
}

#[test]
fn test_segment_intersection() {
    let p = segment_intersection((0.0, 0.0), (2.0, 2.0), (0.0, 2.0), (2.0, 0.0));
    assert_eq!(p, Some((1.0, 1.0)));

    // touching end points
    let p = segment_intersection((0.0, 0.0), (1.0, 0.0), (1.0, 0.0), (1.0, 1.0));
    assert_eq!(p, Some((1.0, 0.0)));

    // lines would cross outside of the segments
    let p = segment_intersection((0.0, 0.0), (1.0, 1.0), (3.0, 0.0), (2.0, 1.0));
    assert_eq!(p, None);

    // parallel
    let p = segment_intersection((0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0));
    assert_eq!(p, None);
}

#[test]
fn test_extent_overlap() {
    let a = Extent {
        minx: 0.0,
        miny: 0.0,
        maxx: 10.0,
        maxy: 10.0,
    };
    let b = Extent {
        minx: 5.0,
        miny: -5.0,
        maxx: 15.0,
        maxy: 5.0,
    };
    assert_eq!(
        a.overlap(&b),
        Some(Extent {
            minx: 5.0,
            miny: 0.0,
            maxx: 10.0,
            maxy: 5.0,
        })
    );
    assert_eq!(
        a.union(&b),
        Extent {
            minx: 0.0,
            miny: -5.0,
            maxx: 15.0,
            maxy: 10.0,
        }
    );
    let c = Extent {
        minx: 10.0,
        miny: 10.0,
        maxx: 20.0,
        maxy: 20.0,
    };
    assert_eq!(a.overlap(&c).map(|e| e.width()), Some(0.0));
    let d = Extent {
        minx: 11.0,
        miny: 0.0,
        maxx: 20.0,
        maxy: 20.0,
    };
    assert_eq!(a.overlap(&d), None);
}

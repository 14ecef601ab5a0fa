//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::bounds::Bounds;
use crate::error::ProjectionError;
use crate::point::{Line, Point};
use crate::tile::GridTile;
use crate::unit::Unit;

fn assert_close(a: f64, b: f64, tolerance: f64) {
    assert!(
        (a - b).abs() <= tolerance,
        "{} differs from {} by more than {}",
        a,
        b,
        tolerance
    );
}

#[test]
fn test_construction() {
    // ordered on construction
    let bounds = Bounds::degrees(10.0, 20.0, -10.0, -20.0);
    assert_eq!(bounds, Bounds::degrees(-10.0, -20.0, 10.0, 20.0));
    assert_eq!(bounds.width(), 20.0);
    assert_eq!(bounds.height(), 40.0);
    assert!(bounds.is_degrees());

    let bounds = Bounds::from_corners(&Point::meters(1.0, 2.0), &Point::meters(3.0, 4.0));
    assert_eq!(bounds, Ok(Bounds::meters(1.0, 2.0, 3.0, 4.0)));

    let bounds = Bounds::from_corners(&Point::degrees(1.0, 2.0), &Point::meters(3.0, 4.0));
    assert_eq!(
        bounds,
        Err(ProjectionError::UnitMismatch {
            southwest: Unit::Degree,
            northeast: Unit::Meter
        })
    );
}

#[test]
fn test_round_trip() {
    let bounds = Bounds::degrees(-112.500003, 21.943049, -101.25, 31.952162);
    let meters = bounds.to_meters();
    assert!(meters.is_meters());
    let degrees = meters.to_degrees();
    assert_close(degrees.min_lon, bounds.min_lon, 1e-9);
    assert_close(degrees.min_lat, bounds.min_lat, 1e-9);
    assert_close(degrees.max_lon, bounds.max_lon, 1e-9);
    assert_close(degrees.max_lat, bounds.max_lat, 1e-9);

    // same unit is an unchanged copy
    assert_eq!(bounds.to_degrees(), bounds);
}

#[test]
fn test_centroid() {
    let bounds = Bounds::meters(0.0, 0.0, 10.0, 20.0);
    assert_eq!(bounds.centroid(), Point::meters(5.0, 10.0));

    let bounds = Bounds::degrees(0.0, 0.0, 10.0, 60.0);
    let centroid = bounds.centroid();
    assert_eq!(centroid.unit, Unit::Degree);
    assert_close(centroid.longitude, 5.0, 1e-9);
    // centered in meters, north of the degree center
    assert!(centroid.latitude > 30.0);
}

#[test]
fn test_lines() {
    let bounds = Bounds::degrees(-10.0, -5.0, 10.0, 5.0);
    assert_eq!(
        bounds.west_line(),
        Line::new(Point::degrees(-10.0, 5.0), Point::degrees(-10.0, -5.0))
    );
    assert_eq!(bounds.north_line().point1, bounds.northeast());
    let lines = bounds.lines();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0].point1, bounds.southwest());
    assert_eq!(lines[3].point2, bounds.southwest());
}

#[test]
fn test_overlap_union() {
    let bounds1 = Bounds::degrees(0.0, 0.0, 20.0, 20.0);
    let bounds2 = Bounds::degrees(10.0, 10.0, 30.0, 30.0);
    assert_eq!(
        bounds1.overlap(&bounds2),
        Some(Bounds::degrees(10.0, 10.0, 20.0, 20.0))
    );
    assert_eq!(bounds1.union(&bounds2), Bounds::degrees(0.0, 0.0, 30.0, 30.0));

    let far = Bounds::degrees(40.0, 40.0, 50.0, 50.0);
    assert_eq!(bounds1.overlap(&far), None);

    // other unit is converted into the unit of self
    let overlap = bounds1.overlap(&bounds2.to_meters()).unwrap();
    assert!(overlap.is_degrees());
    assert_close(overlap.min_lon, 10.0, 1e-9);
    assert_close(overlap.max_lat, 20.0, 1e-9);
}

#[test]
fn test_to_precision() {
    let bounds = Bounds::degrees(-112.500003, 21.943049, -101.25, 31.952162);
    assert_eq!(
        bounds.to_precision(10.0),
        Bounds::degrees(-120.0, 20.0, -100.0, 40.0)
    );
    assert_eq!(
        Bounds::degrees(-5.0, -0.5, 0.5, 5.0).to_precision(1.0),
        Bounds::degrees(-5.0, -1.0, 1.0, 6.0)
    );

    // meter bounds are converted to degrees
    let precise = Bounds::meters(1000.0, 1000.0, 2000.0, 2000.0).to_precision(1.0);
    assert_eq!(precise, Bounds::degrees(0.0, 0.0, 1.0, 1.0));
}

#[test]
fn test_pixel_range() {
    let tile = GridTile::new(256, 256, 0, 0, 0);
    let range = tile.bounds().pixel_range_from_tile(&tile);
    assert_eq!(range.min_x(), 0.0);
    assert_eq!(range.min_y(), 0.0);
    assert_eq!(range.max_x(), 256.0);
    assert_eq!(range.max_y(), 256.0);

    // south east quarter of the world
    let quarter = GridTile::new(256, 256, 1, 1, 1);
    let range = quarter.bounds().pixel_range(512, 512, tile.bounds());
    assert_eq!(range.width(), 256.0);
    assert_eq!(range.top_left.x, 256.0);
    assert_eq!(range.top_left.y, 256.0);
}

#[test]
fn test_line_intersections() {
    let bounds = Bounds::degrees(-10.0, -10.0, 10.0, 10.0);
    let meridian = Line::new(Point::degrees(0.0, -20.0), Point::degrees(0.0, 20.0));
    let points = bounds.line_intersections(&meridian);
    assert_eq!(points.len(), 2);
    assert_close(points[0].longitude, 0.0, 1e-9);
    assert_close(points[0].latitude, 10.0, 1e-9);
    assert_close(points[1].latitude, -10.0, 1e-9);

    // a diagonal through two corners
    let bounds = Bounds::meters(0.0, 0.0, 10.0, 10.0);
    let diagonal = Line::new(Point::meters(-5.0, -5.0), Point::meters(15.0, 15.0));
    let points = bounds.line_intersections(&diagonal);
    assert_eq!(points, vec![Point::meters(0.0, 0.0), Point::meters(10.0, 10.0)]);

    let outside = Line::new(Point::meters(20.0, 0.0), Point::meters(20.0, 10.0));
    assert!(bounds.line_intersections(&outside).is_empty());

    assert!(bounds.contains(&Point::meters(5.0, 10.0)));
    assert!(!bounds.contains(&Point::meters(5.0, 10.5)));
}

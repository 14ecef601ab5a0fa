//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

/// Northern or southern hemisphere
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Hemisphere {
    North,
    South,
}

impl Hemisphere {
    /// The equator belongs to the northern hemisphere
    pub fn from_latitude(latitude: f64) -> Hemisphere {
        if latitude >= 0.0 {
            Hemisphere::North
        } else {
            Hemisphere::South
        }
    }
}

#[test]
fn test_from_latitude() {
    use crate::point::Point;

    assert_eq!(Hemisphere::from_latitude(80.0), Hemisphere::North);
    assert_eq!(Hemisphere::from_latitude(0.0), Hemisphere::North);
    assert_eq!(Hemisphere::from_latitude(-80.0), Hemisphere::South);
    assert_eq!(Point::degrees(0.0, -80.0).hemisphere(), Hemisphere::South);
    assert_eq!(Point::meters(0.0, 1000.0).hemisphere(), Hemisphere::North);
}

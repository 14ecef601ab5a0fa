//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::error::ProjectionError;
use std::fmt;
use std::str::FromStr;

/// Coordinate units
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Unit {
    /// WGS84 decimal degrees
    Degree,
    /// Spherical Web Mercator meters
    Meter,
}

impl Unit {
    /// The other supported unit
    pub fn opposite(self) -> Unit {
        match self {
            Unit::Degree => Unit::Meter,
            Unit::Meter => Unit::Degree,
        }
    }
}

impl FromStr for Unit {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match &s.trim().to_lowercase() as &str {
            "degree" | "degrees" | "dd" => Ok(Unit::Degree),
            "meter" | "meters" | "m" => Ok(Unit::Meter),
            _ => Err(ProjectionError::UnsupportedUnit(s.to_string())),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Unit::Degree => write!(f, "degree"),
            Unit::Meter => write!(f, "meter"),
        }
    }
}

#[test]
fn test_parse_unit() {
    assert_eq!("dd".parse::<Unit>(), Ok(Unit::Degree));
    assert_eq!("Meters".parse::<Unit>(), Ok(Unit::Meter));
    assert_eq!(
        "ft".parse::<Unit>(),
        Err(ProjectionError::UnsupportedUnit("ft".to_string()))
    );
    assert_eq!(Unit::Degree.opposite(), Unit::Meter);
}

//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Raster pixel locations

/// Pixel location, origin at the top left of the raster
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Pixel {
    pub x: f64,
    pub y: f64,
}

impl Pixel {
    pub fn new(x: f64, y: f64) -> Pixel {
        Pixel { x, y }
    }
}

/// Pixel rectangle between a top left and a bottom right pixel
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct PixelRange {
    pub top_left: Pixel,
    pub bottom_right: Pixel,
}

impl PixelRange {
    pub fn new(top_left: Pixel, bottom_right: Pixel) -> PixelRange {
        PixelRange {
            top_left,
            bottom_right,
        }
    }
    pub fn min_x(&self) -> f64 {
        self.top_left.x
    }
    pub fn min_y(&self) -> f64 {
        self.top_left.y
    }
    pub fn max_x(&self) -> f64 {
        self.bottom_right.x
    }
    pub fn max_y(&self) -> f64 {
        self.bottom_right.y
    }
    pub fn width(&self) -> f64 {
        self.max_x() - self.min_x()
    }
    pub fn height(&self) -> f64 {
        self.max_y() - self.min_y()
    }
    pub fn top_right(&self) -> Pixel {
        Pixel::new(self.max_x(), self.min_y())
    }
    pub fn bottom_left(&self) -> Pixel {
        Pixel::new(self.min_x(), self.max_y())
    }
}

//! A library for projecting map grid overlays onto tiles
//!
//! ## Tiles
//!
//! ```rust
//! use grid_projection::{GridTile, Pixel};
//!
//! let tile = GridTile::new(256, 256, 0, 0, 0);
//! let bounds = tile.bounds_meters();
//! assert_eq!(tile.pixel(&bounds.northwest()), Pixel::new(0.0, 0.0));
//! assert_eq!(tile.pixel(&bounds.southeast()), Pixel::new(256.0, 256.0));
//! ```
//!
//! ## Units
//!
//! ```rust
//! use grid_projection::{Bounds, Unit};
//!
//! let bounds = Bounds::degrees(-10.0, -10.0, 10.0, 10.0);
//! let meters = bounds.to_meters();
//! assert_eq!(meters.unit, Unit::Meter);
//! assert!((meters.to_degrees().max_lat - 10.0).abs() < 1e-9);
//! ```
//!
//! ## Grid line boundaries
//!
//! ```rust
//! use grid_projection::{precision_after, precision_before, Bounds};
//!
//! assert_eq!(precision_before(-23.0, 10.0), -30.0);
//! assert_eq!(precision_after(23.0, 10.0), 30.0);
//! assert_eq!(
//!     Bounds::degrees(-5.0, -0.5, 0.5, 5.0).to_precision(1.0),
//!     Bounds::degrees(-5.0, -1.0, 1.0, 6.0)
//! );
//! ```

mod bounds;
mod error;
pub mod geometry;
mod hemisphere;
mod pixel;
mod point;
mod tile;
mod unit;
mod utils;

#[cfg(test)]
mod bounds_test;

pub use bounds::Bounds;
pub use error::{ProjectionError, Result};
pub use geometry::Extent;
pub use hemisphere::Hemisphere;
pub use pixel::{Pixel, PixelRange};
pub use point::{Line, Point};
pub use tile::GridTile;
pub use unit::Unit;
pub use utils::{
    intersection, line_intersection, pixel, precision_after, precision_before, tile_bounds,
    tile_size, tiles_per_side, to_unit, x_pixel, y_pixel, zoom_level,
};

//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

pub mod grids;
pub mod zoom_grids;

pub use self::grids::{Grids, MAX_MAP_ZOOM_LEVEL};
pub use self::zoom_grids::{GridId, ZoomGrids, ZoomLevelGrids};

#[cfg(test)]
mod grids_test;

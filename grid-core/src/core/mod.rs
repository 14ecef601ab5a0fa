//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

pub mod config;
pub mod error;
pub mod graticule;
pub mod grid;
pub mod labeler;
pub mod properties;
pub mod style;

pub use self::config::{parse_config, read_config, ApplicationCfg, Config};
pub use self::error::{GridError, Result};
pub use self::graticule::{grid_lines, GridLine};
pub use self::grid::Grid;
pub use self::labeler::Labeler;
pub use self::properties::GridProperties;
pub use self::style::{Color, GridStyle};

#[cfg(test)]
mod properties_test;

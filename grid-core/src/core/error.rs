//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use grid_projection::ProjectionError;

#[derive(PartialEq, Clone, Debug, thiserror::Error)]
pub enum GridError {
    #[error("Min zoom '{min}' can not be larger than max zoom '{max}'")]
    InvalidRange { min: u8, max: u8 },
    #[error("Labeler is not set")]
    MissingLabeler,
    #[error("Label buffer must be >= 0.0 and < 0.5, got {0}")]
    InvalidBuffer(f64),
    #[error("Grid line width must be >= 0.0, got {0}")]
    InvalidWidth(f64),
    #[error("Grid precision must be > 0.0, got {0}")]
    InvalidPrecision(f64),
    #[error("Invalid color '{0}'")]
    InvalidColor(String),
    #[error("Unknown grid '{0}'")]
    UnknownGrid(String),
    #[error("Unknown grid id {0}")]
    UnknownGridId(usize),
    #[error("{0}")]
    Config(String),
    #[error(transparent)]
    Projection(#[from] ProjectionError),
}

pub type Result<T> = std::result::Result<T, GridError>;

//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::unit::Unit;

/// Projection errors
#[derive(PartialEq, Clone, Debug, thiserror::Error)]
pub enum ProjectionError {
    #[error("unsupported unit: {0}")]
    UnsupportedUnit(String),
    #[error("points are in different units. southwest: {southwest}, northeast: {northeast}")]
    UnitMismatch { southwest: Unit, northeast: Unit },
}

pub type Result<T> = std::result::Result<T, ProjectionError>;

//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Layered grid configuration lookup

use crate::core::config::{
    parse_config, read_config, ApplicationCfg, GridCfg, LabelerCfg, LinesCfg, DEFAULT_CONFIG,
};
use crate::core::error::Result;

/// Instance configuration on top of the packaged default configuration
#[derive(Clone, Debug)]
pub struct GridProperties {
    config: ApplicationCfg,
    defaults: ApplicationCfg,
}

/// Instance value if set, default value otherwise
pub fn layered<T: Clone>(value: Option<&T>, default: Option<&T>) -> Option<T> {
    value.or(default).cloned()
}

impl GridProperties {
    /// Properties with the packaged defaults below `config`
    pub fn new(config: ApplicationCfg) -> Result<GridProperties> {
        let defaults = parse_config(DEFAULT_CONFIG.to_string(), "")?;
        Ok(GridProperties::with_defaults(config, defaults))
    }
    pub fn with_defaults(config: ApplicationCfg, defaults: ApplicationCfg) -> GridProperties {
        GridProperties { config, defaults }
    }
    /// Packaged defaults only
    pub fn defaults() -> Result<GridProperties> {
        GridProperties::new(ApplicationCfg::default())
    }
    pub fn from_file(path: &str) -> Result<GridProperties> {
        info!("Reading configuration from '{}'", path);
        GridProperties::new(read_config(path)?)
    }
    pub fn from_toml(toml: &str) -> Result<GridProperties> {
        GridProperties::new(parse_config(toml.to_string(), "")?)
    }
    pub fn default_width(&self) -> Option<f64> {
        layered(
            self.config.registry.width.as_ref(),
            self.defaults.registry.width.as_ref(),
        )
    }
    /// Configured grid keys in stacking order.
    /// Without an explicit list, all configured grids in key order.
    pub fn grid_keys(&self) -> Vec<String> {
        match layered(
            self.config.registry.grids.as_ref(),
            self.defaults.registry.grids.as_ref(),
        ) {
            Some(keys) => keys,
            None => {
                let mut keys: Vec<String> = self
                    .config
                    .grids
                    .keys()
                    .chain(self.defaults.grids.keys())
                    .cloned()
                    .collect();
                keys.sort();
                keys.dedup();
                keys
            }
        }
    }
    /// Grid configuration with every unset value taken from the defaults
    pub fn grid(&self, key: &str) -> Option<GridCfg> {
        match (self.config.grids.get(key), self.defaults.grids.get(key)) {
            (Some(cfg), Some(default)) => Some(cfg.or(default)),
            (cfg, default) => layered(cfg, default),
        }
    }
}

impl GridCfg {
    pub fn or(&self, default: &GridCfg) -> GridCfg {
        GridCfg {
            enabled: self.enabled.or(default.enabled),
            minzoom: self.minzoom.or(default.minzoom),
            maxzoom: self.maxzoom.or(default.maxzoom),
            lines: match (&self.lines, &default.lines) {
                (Some(lines), Some(default)) => Some(lines.or(default)),
                (lines, default) => layered(lines.as_ref(), default.as_ref()),
            },
            color: layered(self.color.as_ref(), default.color.as_ref()),
            width: self.width.or(default.width),
            precision: self.precision.or(default.precision),
            labeler: match (&self.labeler, &default.labeler) {
                (Some(labeler), Some(default)) => Some(labeler.or(default)),
                (labeler, default) => layered(labeler.as_ref(), default.as_ref()),
            },
        }
    }
}

impl LinesCfg {
    pub fn or(&self, default: &LinesCfg) -> LinesCfg {
        LinesCfg {
            minzoom: self.minzoom.or(default.minzoom),
            maxzoom: self.maxzoom.or(default.maxzoom),
        }
    }
}

impl LabelerCfg {
    pub fn or(&self, default: &LabelerCfg) -> LabelerCfg {
        LabelerCfg {
            enabled: self.enabled.or(default.enabled),
            minzoom: self.minzoom.or(default.minzoom),
            maxzoom: self.maxzoom.or(default.maxzoom),
            color: layered(self.color.as_ref(), default.color.as_ref()),
            text_size: self.text_size.or(default.text_size),
            buffer: self.buffer.or(default.buffer),
        }
    }
}

//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::error::{GridError, Result};
use regex::Regex;
use serde::de::DeserializeOwned;
use std::collections::{BTreeMap, HashMap};
use std::env;
use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use tera::{Context, Tera};
use toml::Value;

pub trait Config<C>
where
    Self: std::marker::Sized,
{
    /// Read configuration
    fn from_config(config: &C) -> Result<Self>;
    /// Generate configuration template
    fn gen_config() -> String;
    /// Generate configuration template with runtime information
    fn gen_runtime_config(&self) -> String {
        Self::gen_config()
    }
}

#[derive(Deserialize, Default, Clone, Debug)]
pub struct ApplicationCfg {
    #[serde(default)]
    pub registry: RegistryCfg,
    #[serde(default)]
    pub grids: BTreeMap<String, GridCfg>,
}

#[derive(Deserialize, Default, Clone, Debug)]
pub struct RegistryCfg {
    /// Default grid line width
    pub width: Option<f64>,
    /// Grid keys in stacking order
    pub grids: Option<Vec<String>>,
}

#[derive(Deserialize, Default, Clone, Debug, PartialEq)]
pub struct GridCfg {
    pub enabled: Option<bool>,
    pub minzoom: Option<u8>,
    pub maxzoom: Option<u8>,
    pub lines: Option<LinesCfg>,
    /// Hex color (#RRGGBB) or color name
    pub color: Option<String>,
    pub width: Option<f64>,
    /// Graticule spacing in degrees
    pub precision: Option<f64>,
    pub labeler: Option<LabelerCfg>,
}

#[derive(Deserialize, Default, Clone, Debug, PartialEq)]
pub struct LinesCfg {
    pub minzoom: Option<u8>,
    pub maxzoom: Option<u8>,
}

#[derive(Deserialize, Default, Clone, Debug, PartialEq)]
pub struct LabelerCfg {
    pub enabled: Option<bool>,
    pub minzoom: Option<u8>,
    pub maxzoom: Option<u8>,
    pub color: Option<String>,
    pub text_size: Option<f64>,
    /// Grid edge buffer (0.0 <= buffer < 0.5)
    pub buffer: Option<f64>,
}

pub const DEFAULT_CONFIG: &'static str = r##"
[registry]
width = 1.0
grids = ["twenty_degree", "ten_degree", "one_degree", "fifteen_minute"]

[grids.twenty_degree]
precision = 20.0
maxzoom = 4
color = "#000000"
width = 2.0

[grids.twenty_degree.labeler]
enabled = true
color = "#000000"
text_size = 14.0
buffer = 0.05

[grids.ten_degree]
precision = 10.0
minzoom = 2
maxzoom = 7

[grids.ten_degree.labeler]
enabled = true
minzoom = 3
text_size = 12.0
buffer = 0.05

[grids.one_degree]
precision = 1.0
minzoom = 5
maxzoom = 11
color = "#555555"

[grids.one_degree.lines]
minzoom = 6

[grids.one_degree.labeler]
minzoom = 7
text_size = 10.0
buffer = 0.1

[grids.fifteen_minute]
enabled = false
precision = 0.25
minzoom = 9
color = "#0000ff"
width = 0.5

[grids.fifteen_minute.labeler]
minzoom = 11
color = "#0000ff"
text_size = 10.0
buffer = 0.1
"##;

/// Load and parse the config file into an config struct.
pub fn read_config<T: DeserializeOwned>(path: &str) -> Result<T> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(_) => {
            return Err(GridError::Config("Could not find config file!".to_string()));
        }
    };
    let mut config_toml = String::new();
    if let Err(err) = file.read_to_string(&mut config_toml) {
        return Err(GridError::Config(format!(
            "Error while reading config: [{}]",
            err
        )));
    };

    parse_config(config_toml, path)
}

/// Parse the configuration into an config struct.
pub fn parse_config<T: DeserializeOwned>(config_toml: String, path: &str) -> Result<T> {
    // Check for old ${var} expressions
    let re = Regex::new(r"\$\{([[:alnum:]]+)\}").map_err(|e| GridError::Config(e.to_string()))?;
    if re.is_match(&config_toml) {
        return Err(GridError::Config(
            "Replace old environment variable syntax ${VARNAME} with `{{env.VARNAME}}`".to_string(),
        ));
    }

    // Parse template
    let mut tera = Tera::default();
    tera.add_raw_template(path, &config_toml)
        .map_err(|e| GridError::Config(format!("Template error: {}", e)))?;
    let mut context = Context::new();
    let mut env = HashMap::new();
    for (key, value) in env::vars() {
        env.insert(key, value);
    }
    context.insert("env", &env);
    let toml = tera.render(path, &context).map_err(|e| {
        let cause = e.source().map(|s| s.to_string()).unwrap_or_else(|| e.to_string());
        GridError::Config(format!("Template error: {}", cause))
    })?;

    toml.parse::<Value>()
        .and_then(|cfg| cfg.try_into::<T>())
        .map_err(|err| GridError::Config(format!("{} - {}", path, err)))
}

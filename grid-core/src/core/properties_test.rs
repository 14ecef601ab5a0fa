//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::{ApplicationCfg, GridCfg, LabelerCfg};
use crate::core::properties::{layered, GridProperties};

#[test]
fn test_layered() {
    assert_eq!(layered(Some(&1), Some(&2)), Some(1));
    assert_eq!(layered(None, Some(&2)), Some(2));
    assert_eq!(layered::<i32>(None, None), None);
}

#[test]
fn test_defaults() {
    let props = GridProperties::defaults().unwrap();
    assert_eq!(props.default_width(), Some(1.0));
    assert_eq!(
        props.grid_keys(),
        vec!["twenty_degree", "ten_degree", "one_degree", "fifteen_minute"]
    );
    let one_degree = props.grid("one_degree").unwrap();
    assert_eq!(one_degree.minzoom, Some(5));
    assert_eq!(one_degree.color, Some("#555555".to_string()));
    assert!(props.grid("unknown").is_none());
}

#[test]
fn test_instance_over_defaults() {
    let props = GridProperties::from_file("src/test/grids.toml").unwrap();
    assert_eq!(props.default_width(), Some(1.5));
    assert_eq!(props.grid_keys(), vec!["ten_degree", "one_degree", "gars"]);

    let ten_degree = props.grid("ten_degree").unwrap();
    // instance value
    assert_eq!(ten_degree.maxzoom, Some(6));
    assert_eq!(ten_degree.color, Some("red".to_string()));
    // default values
    assert_eq!(ten_degree.minzoom, Some(2));
    assert_eq!(ten_degree.precision, Some(10.0));
    let labeler = ten_degree.labeler.unwrap();
    assert_eq!(labeler.enabled, Some(true));
    assert_eq!(labeler.minzoom, Some(3));

    let one_degree = props.grid("one_degree").unwrap();
    assert_eq!(one_degree.enabled, Some(false));
    assert_eq!(one_degree.lines.and_then(|l| l.minzoom), Some(6));

    // only configured in the instance
    let gars = props.grid("gars").unwrap();
    assert_eq!(gars.minzoom, Some(8));
    assert_eq!(gars.precision, None);
}

#[test]
fn test_grid_keys_without_list() {
    let mut config = ApplicationCfg::default();
    config.grids.insert("b_grid".to_string(), GridCfg::default());
    config.grids.insert("a_grid".to_string(), GridCfg::default());
    let props = GridProperties::with_defaults(config, ApplicationCfg::default());
    assert_eq!(props.grid_keys(), vec!["a_grid", "b_grid"]);
    assert_eq!(props.default_width(), None);
}

#[test]
fn test_cfg_or() {
    let cfg = GridCfg {
        maxzoom: Some(3),
        labeler: Some(LabelerCfg {
            buffer: Some(0.2),
            ..Default::default()
        }),
        ..Default::default()
    };
    let default = GridCfg {
        minzoom: Some(1),
        maxzoom: Some(9),
        labeler: Some(LabelerCfg {
            enabled: Some(true),
            buffer: Some(0.1),
            ..Default::default()
        }),
        ..Default::default()
    };
    let merged = cfg.or(&default);
    assert_eq!(merged.minzoom, Some(1));
    assert_eq!(merged.maxzoom, Some(3));
    assert_eq!(
        merged.labeler,
        Some(LabelerCfg {
            enabled: Some(true),
            buffer: Some(0.2),
            ..Default::default()
        })
    );
}

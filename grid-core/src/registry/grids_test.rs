//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::{parse_config, ApplicationCfg};
use crate::core::error::GridError;
use crate::core::grid::Grid;
use crate::core::labeler::Labeler;
use crate::core::properties::GridProperties;
use crate::core::style::Color;
use crate::core::Config;
use crate::registry::grids::{Grids, MAX_MAP_ZOOM_LEVEL};
use crate::registry::zoom_grids::GridId;

fn grid(key: &str, min_zoom: u8, max_zoom: Option<u8>, enabled: bool) -> Grid {
    let mut grid = Grid::new(key);
    grid.set_zoom_range(min_zoom, max_zoom).unwrap();
    grid.set_enabled(enabled);
    grid
}

fn keys(grids: &mut Grids, zoom: u8) -> Vec<String> {
    grids
        .get_grids(zoom)
        .keys()
        .into_iter()
        .map(|k| k.to_string())
        .collect()
}

/// Membership equals enabled state and zoom range for every indexed zoom level
fn assert_consistent(grids: &Grids) {
    for zoom in grids.min_zoom()..=grids.max_zoom() {
        if let Some(view) = grids.zoom_grids(zoom) {
            for id in grids.ids() {
                let grid = grids.grid(id).unwrap();
                assert_eq!(
                    view.contains(id),
                    grid.is_enabled() && grid.is_within(zoom),
                    "grid '{}' at zoom {}",
                    grid.key(),
                    zoom
                );
            }
            let members = grids.ids().filter(|id| view.contains(*id)).count();
            assert_eq!(view.count(), members, "duplicate ids at zoom {}", zoom);
            assert_eq!(view.iter().count(), view.count());
        }
    }
}

#[test]
fn test_initial_membership() {
    let grids = Grids::new(
        vec![
            grid("a", 5, Some(10), true),
            grid("b", 0, None, true),
            grid("c", 3, Some(4), false),
        ],
        Some(1.0),
    );
    assert_eq!(grids.len(), 3);
    assert_eq!(grids.min_zoom(), 0);
    assert_eq!(grids.max_zoom(), MAX_MAP_ZOOM_LEVEL);
    assert_consistent(&grids);
    let a = grids.grid_id("a").unwrap();
    for zoom in 0..=MAX_MAP_ZOOM_LEVEL {
        let view = grids.zoom_grids(zoom).unwrap();
        assert_eq!(view.zoom(), zoom);
        assert_eq!(view.contains(a), zoom >= 5 && zoom <= 10);
    }
    assert_eq!(grids.zoom_grids(7).unwrap().keys(), vec!["a", "b"]);
    assert!(grids.zoom_grids(21).is_none());
    assert_eq!(grids.grid_id("unknown"), None);
}

#[test]
fn test_zoom_range_scenario() {
    let mut grids = Grids::new(
        vec![grid("a", 5, Some(10), true), grid("b", 0, None, true)],
        None,
    );
    let a = grids.grid_id("a").unwrap();
    grids.set_zoom_range(a, 8, Some(15)).unwrap();

    assert_eq!(grids.grid(a).unwrap().min_zoom(), 8);
    assert_eq!(grids.grid(a).unwrap().max_zoom(), Some(15));
    for zoom in 5..=7 {
        assert_eq!(keys(&mut grids, zoom), vec!["b"]);
    }
    // Overlapping zoom levels keep their order
    for zoom in 8..=10 {
        assert_eq!(keys(&mut grids, zoom), vec!["a", "b"]);
    }
    for zoom in 11..=15 {
        assert_eq!(keys(&mut grids, zoom), vec!["b", "a"]);
    }
    assert_eq!(keys(&mut grids, 16), vec!["b"]);
    assert_consistent(&grids);
}

#[test]
fn test_disjoint_zoom_range() {
    let mut grids = Grids::new(vec![grid("a", 2, Some(4), true)], None);
    let a = GridId(0);
    grids.set_zoom_range(a, 10, Some(12)).unwrap();
    for zoom in 2..=4 {
        assert!(grids.get_grids(zoom).is_empty());
    }
    for zoom in 10..=12 {
        assert_eq!(grids.get_grids(zoom).count(), 1);
    }
    assert_consistent(&grids);

    grids.set_zoom_range(a, 0, None).unwrap();
    for zoom in 0..=MAX_MAP_ZOOM_LEVEL {
        assert!(grids.get_grids(zoom).contains(a));
    }
}

#[test]
fn test_invalid_zoom_range() {
    let mut grids = Grids::new(vec![grid("a", 5, Some(10), true)], None);
    let a = GridId(0);
    assert_eq!(
        grids.set_zoom_range(a, 8, Some(3)),
        Err(GridError::InvalidRange { min: 8, max: 3 })
    );
    assert_eq!(grids.grid(a).unwrap().min_zoom(), 5);
    assert_eq!(grids.grid(a).unwrap().max_zoom(), Some(10));
    assert_consistent(&grids);
    assert_eq!(
        grids.set_zoom_range(GridId(7), 1, None),
        Err(GridError::UnknownGridId(7))
    );
}

#[test]
fn test_set_min_max_zoom() {
    let mut grids = Grids::new(vec![grid("a", 5, Some(10), true)], None);
    let a = GridId(0);

    grids.set_min_zoom(a, 12).unwrap();
    assert_eq!(grids.grid(a).unwrap().min_zoom(), 12);
    assert_eq!(grids.grid(a).unwrap().max_zoom(), Some(12));
    assert_consistent(&grids);

    grids.set_max_zoom(a, Some(3)).unwrap();
    assert_eq!(grids.grid(a).unwrap().min_zoom(), 3);
    assert_eq!(grids.grid(a).unwrap().max_zoom(), Some(3));
    assert_consistent(&grids);

    grids.set_max_zoom(a, None).unwrap();
    assert_eq!(grids.grid(a).unwrap().max_zoom(), None);
    assert!(grids.get_grids(MAX_MAP_ZOOM_LEVEL).contains(a));
    assert_consistent(&grids);

    grids.set_min_zoom(a, 0).unwrap();
    assert!(grids.get_grids(0).contains(a));
    assert_consistent(&grids);
}

#[test]
fn test_zoom_range_of_disabled_grid() {
    let mut grids = Grids::new(vec![grid("a", 5, Some(10), false)], None);
    let a = GridId(0);
    grids.set_zoom_range(a, 0, Some(15)).unwrap();
    assert_eq!(grids.grid(a).unwrap().max_zoom(), Some(15));
    assert!(grids.get_grids(12).is_empty());
    grids.enable(a).unwrap();
    assert!(grids.get_grids(0).contains(a));
    assert!(grids.get_grids(15).contains(a));
    assert_consistent(&grids);
}

#[test]
fn test_enable_disable() {
    let mut grids = Grids::new(
        vec![grid("a", 5, Some(10), false), grid("b", 0, None, true)],
        None,
    );
    let a = GridId(0);
    let b = GridId(1);

    grids.enable(a).unwrap();
    assert_consistent(&grids);
    assert_eq!(keys(&mut grids, 7), vec!["b", "a"]);
    // idempotent
    grids.enable(a).unwrap();
    assert_eq!(keys(&mut grids, 7), vec!["b", "a"]);
    assert_eq!(grids.get_grids(7).count(), 2);

    grids.disable(a).unwrap();
    grids.disable(a).unwrap();
    assert_eq!(keys(&mut grids, 7), vec!["b"]);
    assert!(!grids.grid(a).unwrap().is_enabled());
    assert_consistent(&grids);

    grids.disable_grids(&[a, b]).unwrap();
    for zoom in 0..=MAX_MAP_ZOOM_LEVEL {
        assert!(grids.get_grids(zoom).is_empty());
    }
    grids.enable_grids(&[b, a]).unwrap();
    assert_eq!(keys(&mut grids, 7), vec!["b", "a"]);
    assert_consistent(&grids);

    assert_eq!(grids.enable(GridId(2)), Err(GridError::UnknownGridId(2)));
}

#[test]
fn test_enable_up_to_highest_indexed_zoom() {
    // Unbounded grids are enabled and disabled up to the highest zoom
    // level indexed at the time of the call, which depends on which zoom
    // levels were requested before.
    let mut grids = Grids::new(vec![grid("a", 0, None, false)], None);
    let a = GridId(0);

    assert!(grids.get_grids(25).is_empty());
    assert_eq!(grids.max_zoom(), 25);
    assert!(grids.zoom_grids(23).is_none());

    grids.enable(a).unwrap();
    assert!(grids.zoom_grids(20).unwrap().contains(a));
    assert!(grids.zoom_grids(25).unwrap().contains(a));
    // Zoom levels between are not indexed, they are created from the grid on request
    assert!(grids.zoom_grids(23).is_none());
    assert!(grids.get_grids(23).contains(a));

    grids.disable(a).unwrap();
    assert!(!grids.zoom_grids(25).unwrap().contains(a));
    assert!(!grids.zoom_grids(23).unwrap().contains(a));
    assert_consistent(&grids);

    // Without the request for zoom 25 the grid is only added up to zoom 20
    let mut grids = Grids::new(vec![grid("a", 0, None, false)], None);
    grids.enable(a).unwrap();
    assert_eq!(grids.max_zoom(), MAX_MAP_ZOOM_LEVEL);
    assert!(grids.zoom_grids(25).is_none());
    assert!(grids.get_grids(25).contains(a));
}

#[test]
fn test_labelers() {
    let mut with_labeler = grid("a", 0, None, true);
    with_labeler.set_labeler(Some(
        Labeler::new(false, 0, None, Color::black(), 12.0, 0.1).unwrap(),
    ));
    let mut grids = Grids::new(vec![with_labeler, grid("b", 0, None, true)], None);
    let a = GridId(0);
    let b = GridId(1);

    grids.enable_all_labelers();
    assert_eq!(grids.grid(a).unwrap().is_labeler_within(3), Ok(true));
    assert_eq!(
        grids.grid(b).unwrap().is_labeler_within(3),
        Err(GridError::MissingLabeler)
    );

    assert_eq!(
        grids.set_all_label_buffers(0.6),
        Err(GridError::InvalidBuffer(0.6))
    );
    assert_eq!(grids.grid(a).unwrap().label_buffer(), Ok(0.1));
    grids.set_all_label_buffers(0.2).unwrap();
    assert_eq!(grids.grid(a).unwrap().label_buffer(), Ok(0.2));
    assert_eq!(
        grids.grid(b).unwrap().label_buffer(),
        Err(GridError::MissingLabeler)
    );
    // membership is unchanged
    assert_eq!(grids.get_grids(3).count(), 2);
}

#[test]
fn test_rebuild() {
    let mut grids = Grids::new(vec![grid("a", 5, Some(10), true)], None);
    let a = GridId(0);
    {
        let grid = grids.grid_mut(a).unwrap();
        grid.set_enabled(false);
        grid.set_zoom_range(0, Some(2)).unwrap();
    }
    assert!(grids.get_grids(7).contains(a));
    grids.rebuild();
    assert!(!grids.get_grids(7).contains(a));
    assert_consistent(&grids);
    grids.grid_mut(a).unwrap().set_enabled(true);
    grids.rebuild();
    assert_eq!(grids.get_grids(1).keys(), vec!["a"]);
    assert_consistent(&grids);
}

#[test]
fn test_default_grids() {
    let mut grids = Grids::defaults().unwrap();
    assert_eq!(grids.len(), 4);
    assert_eq!(grids.default_width(), Some(1.0));
    assert_eq!(keys(&mut grids, 0), vec!["twenty_degree"]);
    assert_eq!(keys(&mut grids, 3), vec!["twenty_degree", "ten_degree"]);
    assert_eq!(keys(&mut grids, 5), vec!["ten_degree", "one_degree"]);
    assert!(grids.get_grids(12).is_empty());
    assert_consistent(&grids);

    let one_degree = grids.grid(grids.grid_id("one_degree").unwrap()).unwrap();
    assert_eq!(one_degree.width(), 1.0);
    assert_eq!(one_degree.lines_min_zoom(), 6);
    assert_eq!(one_degree.label_buffer(), Ok(0.1));

    let fifteen_minute = grids.grid_id("fifteen_minute").unwrap();
    grids.enable(fifteen_minute).unwrap();
    assert_eq!(keys(&mut grids, 12), vec!["fifteen_minute"]);
    assert_eq!(keys(&mut grids, 10), vec!["one_degree", "fifteen_minute"]);
    assert_eq!(grids.grid(fifteen_minute).unwrap().width(), 0.5);
}

#[test]
fn test_unknown_grid_key() {
    let toml = r#"
        [registry]
        grids = ["ten_degree", "missing"]
        "#;
    let props = GridProperties::from_toml(toml).unwrap();
    assert_eq!(
        Grids::from_config(&props).err(),
        Some(GridError::UnknownGrid("missing".to_string()))
    );
}

#[test]
fn test_metadata() {
    let grids = Grids::defaults().unwrap();
    let metadata = grids.metadata();
    assert_eq!(metadata["grids"].as_array().map(|g| g.len()), Some(4));
    assert_eq!(metadata["grids"][0]["key"], "twenty_degree");
    assert_eq!(metadata["grids"][0]["minzoom"], 0);
    assert_eq!(metadata["grids"][0]["maxzoom"], 4);
    assert_eq!(metadata["grids"][0]["color"], "#000000");
    assert_eq!(metadata["grids"][0]["labeler"], true);
    assert_eq!(metadata["grids"][3]["enabled"], false);
    assert!(metadata["grids"][3]["maxzoom"].is_null());
    assert_eq!(metadata["zooms"]["4"], json!(["twenty_degree", "ten_degree"]));
    assert_eq!(metadata["zooms"]["20"], json!([]));
}

#[test]
fn test_gen_config() {
    let config: ApplicationCfg = parse_config(Grids::gen_config(), "").unwrap();
    assert_eq!(config.grids.len(), 4);

    let grids = Grids::defaults().unwrap();
    let runtime = grids.gen_runtime_config();
    println!("{}", runtime);
    let config: ApplicationCfg = parse_config(runtime, "").unwrap();
    let props = GridProperties::with_defaults(config, ApplicationCfg::default());
    let reloaded = Grids::from_config(&props).unwrap();
    assert_eq!(reloaded.metadata(), grids.metadata());
    let key = reloaded.grid_id("one_degree").unwrap();
    assert_eq!(reloaded.grid(key), grids.grid(key));
}

#[test]
fn test_mixed_operations() {
    let mut grids = Grids::defaults().unwrap();
    let ids: Vec<GridId> = grids.ids().collect();
    // Linear congruential sequence for a reproducible operation mix
    let mut seed: u64 = 42;
    let mut next = |n: u64| {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (seed >> 33) % n
    };
    for _ in 0..500 {
        let id = ids[next(ids.len() as u64) as usize];
        let zoom = next(25) as u8;
        let max_zoom = match next(3) {
            0 => None,
            _ => Some(zoom + next(5) as u8),
        };
        match next(6) {
            0 => grids.enable(id).unwrap(),
            1 => grids.disable(id).unwrap(),
            2 => grids.set_zoom_range(id, zoom, max_zoom).unwrap(),
            3 => grids.set_min_zoom(id, zoom).unwrap(),
            4 => grids.set_max_zoom(id, max_zoom).unwrap(),
            _ => {
                grids.get_grids(zoom);
            }
        }
        assert_consistent(&grids);
    }
}

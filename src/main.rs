//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

use clap::{App, ArgMatches, SubCommand};
use dotenv::dotenv;
use env_logger::Builder;
use grid_core::core::{grid_lines, Config, GridProperties};
use grid_core::registry::{GridId, Grids};
use grid_projection::{GridTile, Unit};
use log::Record;
use std::env;
use std::error::Error;
use std::io::Write;
use std::process;
use time;

type CliResult<T> = Result<T, Box<dyn Error>>;

fn init_logger(args: &ArgMatches<'_>) {
    let mut builder = Builder::new();
    builder.format(|buf, record: &Record<'_>| {
        let t = time::now();
        writeln!(
            buf,
            "{}.{:03} {} {}",
            time::strftime("%Y-%m-%d %H:%M:%S", &t).unwrap_or_default(),
            t.tm_nsec / 1000_000,
            record.level(),
            record.args()
        )
    });

    let rust_log = match (args.value_of("loglevel"), env::var("RUST_LOG")) {
        (None, Ok(rust_log_env)) => rust_log_env,
        (loglevel, _) => loglevel.unwrap_or("info").to_string(),
    };
    builder.parse_filters(&rust_log);

    builder.init();
}

fn load_grids(args: &ArgMatches<'_>) -> CliResult<Grids> {
    let properties = match args.value_of("config") {
        Some(path) => GridProperties::from_file(path)?,
        None => GridProperties::defaults()?,
    };
    let mut grids = Grids::from_config(&properties)?;
    for (arg, enable) in &[("enable", true), ("disable", false)] {
        for id in grid_ids(&grids, args.value_of(arg))? {
            if *enable {
                grids.enable(id)?;
            } else {
                grids.disable(id)?;
            }
        }
    }
    Ok(grids)
}

fn grid_ids(grids: &Grids, keys: Option<&str>) -> CliResult<Vec<GridId>> {
    let mut ids = Vec::new();
    for key in keys.unwrap_or("").split(',').filter(|k| !k.is_empty()) {
        match grids.grid_id(key.trim()) {
            Some(id) => ids.push(id),
            None => return Err(format!("Unknown grid '{}'", key).into()),
        }
    }
    Ok(ids)
}

fn zoom_arg(args: &ArgMatches<'_>, name: &str) -> CliResult<Option<u8>> {
    match args.value_of(name) {
        Some(s) => s
            .parse::<u8>()
            .map(Some)
            .map_err(|_| format!("Error parsing '{}' as zoom level", name).into()),
        None => Ok(None),
    }
}

fn genconfig(args: &ArgMatches<'_>) -> CliResult<()> {
    if args.value_of("config").is_some() {
        let grids = load_grids(args)?;
        println!("{}", grids.gen_runtime_config());
    } else {
        println!("{}", Grids::gen_config());
    }
    Ok(())
}

fn zoomgrids(args: &ArgMatches<'_>) -> CliResult<()> {
    let mut grids = load_grids(args)?;
    let minzoom = zoom_arg(args, "minzoom")?.unwrap_or(grids.min_zoom());
    let maxzoom = zoom_arg(args, "maxzoom")?.unwrap_or(grids.max_zoom());
    if maxzoom < minzoom {
        return Err(format!("Min zoom '{}' is larger than max zoom '{}'", minzoom, maxzoom).into());
    }
    for zoom in minzoom..=maxzoom {
        let zoom_grids = grids.get_grids(zoom);
        if !args.is_present("json") {
            println!("{:2}: {}", zoom, zoom_grids.keys().join(", "));
        }
    }
    if args.is_present("json") {
        println!("{:#}", grids.metadata());
    }
    Ok(())
}

fn parse_tile(zxy: &str) -> CliResult<(u8, u32, u32)> {
    let parts: Vec<&str> = zxy.split('/').collect();
    if parts.len() != 3 {
        return Err(format!("Invalid tile '{}', expected z/x/y", zxy).into());
    }
    let zoom = parts[0].parse::<u8>()?;
    let x = parts[1].parse::<u32>()?;
    let y = parts[2].parse::<u32>()?;
    let tiles = 1u64 << zoom.min(32);
    if u64::from(x) >= tiles || u64::from(y) >= tiles {
        return Err(format!("Tile '{}' is outside of the zoom level", zxy).into());
    }
    Ok((zoom, x, y))
}

fn tile(args: &ArgMatches<'_>) -> CliResult<()> {
    let mut grids = load_grids(args)?;
    let (zoom, x, y) = parse_tile(args.value_of("tile").unwrap_or("0/0/0"))?;
    let size = match args.value_of("size") {
        Some(size) => size.parse::<u32>()?,
        None => 256,
    };
    let unit = args.value_of("unit").unwrap_or("degree").parse::<Unit>()?;
    let tile = GridTile::new(size, size, x, y, zoom);
    let bounds = tile.bounds_in(unit);
    println!("tile {}/{}/{} ({}x{} pixels)", zoom, x, y, size, size);
    println!(
        "bounds ({}): {}, {}, {}, {}",
        unit, bounds.min_lon, bounds.min_lat, bounds.max_lon, bounds.max_lat
    );
    for grid in grids.get_grids(zoom).iter() {
        let lines = grid_lines(grid, &tile);
        let labels = grid.is_labeler_within(zoom).unwrap_or(false);
        println!(
            "grid {} (color {}, width {}, labels {}): {} lines",
            grid.key(),
            grid.color(),
            grid.width(),
            labels,
            lines.len()
        );
        for line in &lines {
            println!(
                "  {:.1},{:.1} - {:.1},{:.1}",
                line.start.x, line.start.y, line.end.x, line.end.y
            );
        }
    }
    Ok(())
}

fn main() {
    dotenv().ok();
    let mut app = App::new("grid_overlay")
        .version(crate_version!())
        .author("Pirmin Kalberer <pka@sourcepole.ch>")
        .about("Zoom level registry and tile projection of map grid overlays")
        .subcommand(SubCommand::with_name("genconfig")
                        .args_from_usage("-c, --config=[FILE] 'Generate from custom config file'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Generate configuration template"))
        .subcommand(SubCommand::with_name("zoomgrids")
                        .args_from_usage("-c, --config=[FILE] 'Load from custom config file'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'
                                              --minzoom=[LEVEL] 'Minimum zoom level'
                                              --maxzoom=[LEVEL] 'Maximum zoom level'
                                              --enable=[GRIDS] 'Enable grids (comma separated keys)'
                                              --disable=[GRIDS] 'Disable grids (comma separated keys)'
                                              --json 'Output grids and zoom levels as JSON'")
                        .about("List active grids per zoom level"))
        .subcommand(SubCommand::with_name("tile")
                        .args_from_usage("-c, --config=[FILE] 'Load from custom config file'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'
                                              --tile=<Z/X/Y> 'Tile in XYZ adressing scheme'
                                              --size=[PIXELS] 'Tile width and height (Default: 256)'
                                              --unit=[degree|meter] 'Unit of printed bounds (Default: degree)'
                                              --enable=[GRIDS] 'Enable grids (comma separated keys)'
                                              --disable=[GRIDS] 'Disable grids (comma separated keys)'")
                        .about("Project grid lines onto a tile"));

    let result = match app.get_matches_from_safe_borrow(env::args()) {
        Result::Err(e) => {
            println!("{}", e);
            Ok(())
        }
        Result::Ok(matches) => match matches.subcommand() {
            ("genconfig", Some(sub_m)) => {
                init_logger(sub_m);
                genconfig(sub_m)
            }
            ("zoomgrids", Some(sub_m)) => {
                init_logger(sub_m);
                zoomgrids(sub_m)
            }
            ("tile", Some(sub_m)) => {
                init_logger(sub_m);
                tile(sub_m)
            }
            _ => {
                let _ = app.print_help();
                println!("");
                Ok(())
            }
        },
    };
    if let Err(e) = result {
        error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

#[test]
fn test_parse_tile() {
    assert_eq!(parse_tile("0/0/0").unwrap(), (0, 0, 0));
    assert_eq!(parse_tile("10/486/332").unwrap(), (10, 486, 332));
    assert!(parse_tile("1/2/0").is_err());
    assert!(parse_tile("1/0").is_err());
    assert!(parse_tile("a/0/0").is_err());
}

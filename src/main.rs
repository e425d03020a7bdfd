//! Outline extraction runner (default binary).
//!
//! Loads an ASCII tile map, streams it through a layer window and prints the
//! outlines of every material inside the window. Set `RUST_LOG=debug` to see
//! window and extraction logging.

use anyhow::{Context, Result};

use tilemap_shapes::ascii_map::AsciiMap;
use tilemap_shapes::cli::{parse_args, CliArgs};
use tilemap_shapes::engine::{LayerConfig, TilemapLayer};
use tilemap_shapes::report::LayerReport;

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the report
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = parse_args(&args)?;
    run(&cli)
}

fn run(cli: &CliArgs) -> Result<()> {
    let config = load_config(cli)?;
    let map = AsciiMap::from_path(&cli.map)?;
    let center = cli.center.unwrap_or_else(|| map.center());
    log::info!(
        "map {} is {}x{} with {} tiles",
        cli.map.display(),
        map.width(),
        map.height(),
        map.tiles().len()
    );

    let mut layer = TilemapLayer::new(config, map.into_tiles())?;
    let update = layer.prepare(center);
    log::info!("window at {} loaded {} tiles", center, update.loaded);

    let report = LayerReport::from_layer(&layer);
    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}

/// File settings first, then `TILEMAP_*` overrides
fn load_config(cli: &CliArgs) -> Result<LayerConfig> {
    let Some(path) = &cli.config else {
        return Ok(LayerConfig::from_env()?);
    };
    let mut config = LayerConfig::from_path(path)
        .with_context(|| format!("loading layer config {}", path.display()))?;
    config.apply_env();
    config.validate()?;
    Ok(config)
}

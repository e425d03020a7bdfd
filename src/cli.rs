//! Command-line arguments for the `tilemap-shapes` binary.
//!
//! ```text
//! tilemap-shapes <map.txt> [--config <layer.json>] [--center x,y] [--json]
//! ```

use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::types::GridCoord;

pub const USAGE: &str =
    "usage: tilemap-shapes <map.txt> [--config <layer.json>] [--center x,y] [--json]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub map: PathBuf,
    pub config: Option<PathBuf>,
    /// Window center; the map center when absent
    pub center: Option<GridCoord>,
    pub json: bool,
}

/// Parse arguments (without the program name)
pub fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut map = None;
    let mut config = None;
    let mut center = None;
    let mut json = false;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --config"))?;
                config = Some(PathBuf::from(v));
            }
            "--center" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --center"))?;
                center = Some(parse_center(v)?);
            }
            "--json" => json = true,
            other if other.starts_with("--") => {
                return Err(anyhow!("unknown argument: {}", other));
            }
            path => {
                if map.is_some() {
                    return Err(anyhow!("unexpected extra argument: {}", path));
                }
                map = Some(PathBuf::from(path));
            }
        }
        i += 1;
    }

    let map = map.ok_or_else(|| anyhow!("missing map path\n{}", USAGE))?;
    Ok(CliArgs {
        map,
        config,
        center,
        json,
    })
}

fn parse_center(value: &str) -> Result<GridCoord> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| anyhow!("invalid --center value: {} (expected x,y)", value))?;
    let x = x
        .trim()
        .parse::<i32>()
        .map_err(|_| anyhow!("invalid --center x: {}", x))?;
    let y = y
        .trim()
        .parse::<i32>()
        .map_err(|_| anyhow!("invalid --center y: {}", y))?;
    Ok(GridCoord::planar(x, y))
}

//! Tile layer engine.
//!
//! Glue between a tile source and the core algorithms: a [`TilemapLayer`]
//! keeps the tiles of its active window loaded and turns them into outlines,
//! one batch per material. Configuration comes from JSON and `TILEMAP_*`
//! environment variables (see [`config`]).
//!
//! # Example
//!
//! ```
//! use tilemap_shapes_engine::{LayerConfig, TilemapLayer};
//! use tilemap_shapes_engine::types::{GridCoord, TileId};
//!
//! // A flat floor of tile 1 below y = 0
//! let floor = |c: GridCoord| (c.y < 0).then_some(TileId(1));
//!
//! let config = LayerConfig::from_json_str(r#"{"window":{"half_width":4,"half_height":2}}"#).unwrap();
//! let mut layer = TilemapLayer::new(config, floor).unwrap();
//! layer.prepare(GridCoord::planar(0, 0));
//!
//! let shapes = layer.shapes();
//! assert_eq!(shapes.len(), 1);
//! assert_eq!(shapes[0].shapes[0].len(), 4);
//! ```

pub mod config;
pub mod layer;
pub mod source;

pub use tilemap_shapes_core as core;
pub use tilemap_shapes_types as types;

pub use config::{ConfigError, LayerConfig, WindowConfig};
pub use layer::{LayerUpdate, MaterialShapes, TilemapLayer};
pub use source::TileSource;

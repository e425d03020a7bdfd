//! Tilemap shapes (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and adds the pieces the
//! command-line tool needs: an ASCII map loader, serializable reports and
//! argument parsing.

pub use tilemap_shapes_core as core;
pub use tilemap_shapes_engine as engine;
pub use tilemap_shapes_types as types;

pub mod ascii_map;
pub mod cli;
pub mod report;

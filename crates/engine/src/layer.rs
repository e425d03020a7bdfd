//! Tile layer - streams tiles through a window and outlines them per material
//!
//! [`TilemapLayer`] ties the pieces together:
//!
//! 1. The window tracker reports which cells entered and left the window
//! 2. Entering cells are fetched from the [`TileSource`]; leaving cells are dropped
//! 3. Outlines are extracted per canonical material over the loaded tiles
//!
//! Only tiles inside the current window are ever held in memory.

use crate::config::{ConfigError, LayerConfig};
use crate::core::{
    compute_bounds_of, extract_shapes, materials, CellBounds, MaterialView, Shape, SynonymTable,
    TileMap, TileSink, WindowTracker,
};
use crate::source::TileSource;
use crate::types::{GridCoord, TileId};

/// Outcome of one window update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayerUpdate {
    /// Window events emitted (discards + loads, including empty cells)
    pub changed: usize,
    /// Tiles fetched from the source and stored
    pub loaded: usize,
    /// Stored tiles dropped
    pub discarded: usize,
}

/// Outlines of one material
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialShapes {
    /// Canonical tile id of the material
    pub material: TileId,
    pub shapes: Vec<Shape>,
    /// True when the shape cap was reached; further regions may be missing
    pub capped: bool,
}

/// Applies window events to the tile map
struct LayerSink<'a, S: TileSource> {
    source: &'a S,
    tiles: &'a mut TileMap,
    update: LayerUpdate,
}

impl<S: TileSource> TileSink for LayerSink<'_, S> {
    fn load(&mut self, coord: GridCoord) {
        if let Some(id) = self.source.tile_at(coord) {
            self.tiles.insert(coord, id);
            self.update.loaded += 1;
        }
    }

    fn discard(&mut self, coord: GridCoord) {
        if self.tiles.remove(&coord).is_some() {
            self.update.discarded += 1;
        }
    }
}

pub struct TilemapLayer<S: TileSource> {
    config: LayerConfig,
    source: S,
    tracker: WindowTracker,
    synonyms: SynonymTable,
    tiles: TileMap,
}

impl<S: TileSource> TilemapLayer<S> {
    pub fn new(config: LayerConfig, source: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let tracker = config.window_tracker();
        let synonyms = config.synonym_table();
        Ok(Self {
            config,
            source,
            tracker,
            synonyms,
            tiles: TileMap::new(),
        })
    }

    pub fn config(&self) -> &LayerConfig {
        &self.config
    }

    pub fn synonyms(&self) -> &SynonymTable {
        &self.synonyms
    }

    pub fn tracker(&self) -> &WindowTracker {
        &self.tracker
    }

    pub fn tiles(&self) -> &TileMap {
        &self.tiles
    }

    pub fn tile_at(&self, coord: GridCoord) -> Option<TileId> {
        self.tiles.get(&coord).copied()
    }

    /// Drop everything and load the full window around `center`
    pub fn prepare(&mut self, center: GridCoord) -> LayerUpdate {
        self.tiles.clear();
        let mut sink = LayerSink {
            source: &self.source,
            tiles: &mut self.tiles,
            update: LayerUpdate::default(),
        };
        let changed = self.tracker.prepare_at(center, &mut sink);
        let update = LayerUpdate {
            changed,
            ..sink.update
        };
        log::debug!(
            "layer '{}' prepared at {}: {} tiles",
            self.config.name,
            center,
            update.loaded
        );
        update
    }

    /// Move the window to `center`, loading and dropping tiles as needed
    pub fn update(&mut self, center: GridCoord) -> LayerUpdate {
        let mut sink = LayerSink {
            source: &self.source,
            tiles: &mut self.tiles,
            update: LayerUpdate::default(),
        };
        let changed = self.tracker.move_to(center, &mut sink);
        LayerUpdate {
            changed,
            ..sink.update
        }
    }

    /// Enable or disable the window. Takes effect on the next update.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.tracker.set_enabled(enabled);
    }

    /// Canonical materials among the loaded tiles, sorted
    pub fn materials(&self) -> Vec<TileId> {
        materials(&self.tiles, &self.synonyms)
    }

    pub fn material_view(&self, material: TileId) -> MaterialView<'_> {
        MaterialView::new(&self.tiles, &self.synonyms, material)
    }

    /// Outlines of one material (any member of its synonym class)
    pub fn shapes_for(&self, material: TileId) -> MaterialShapes {
        let view = self.material_view(material);
        let shapes = extract_shapes(&view, self.config.max_shapes);
        let capped = shapes.len() == self.config.max_shapes;
        if capped {
            log::warn!(
                "layer '{}': material {} reached the cap of {} shapes",
                self.config.name,
                view.material(),
                self.config.max_shapes
            );
        }
        MaterialShapes {
            material: view.material(),
            shapes,
            capped,
        }
    }

    /// Outlines of every loaded material, in material order
    pub fn shapes(&self) -> Vec<MaterialShapes> {
        self.materials()
            .into_iter()
            .map(|material| self.shapes_for(material))
            .collect()
    }

    /// Bounding box of all loaded tiles
    pub fn bounds(&self) -> Option<CellBounds> {
        compute_bounds_of(self.tiles.keys().copied())
    }
}

//! Layer tests - streaming a tile source through the window and outlining it

use tilemap_shapes::core::TileMap;
use tilemap_shapes::engine::{LayerConfig, TilemapLayer};
use tilemap_shapes::types::{GridCoord, TileId};

const GRASS: TileId = TileId(1);
const FLOWERS: TileId = TileId(2);
const STONE: TileId = TileId(7);

fn fill(tiles: &mut TileMap, x0: i32, y0: i32, w: i32, h: i32, id: TileId) {
    for x in x0..x0 + w {
        for y in y0..y0 + h {
            tiles.insert(GridCoord::planar(x, y), id);
        }
    }
}

/// Grass patch with a flowered cell on its right, a second grass patch and a stone slab
fn world() -> TileMap {
    let mut tiles = TileMap::new();
    fill(&mut tiles, 0, 0, 3, 2, GRASS);
    fill(&mut tiles, 3, 0, 1, 1, FLOWERS);
    fill(&mut tiles, 10, 0, 2, 2, GRASS);
    fill(&mut tiles, 0, 5, 2, 1, STONE);
    tiles
}

fn layer(json: &str) -> TilemapLayer<TileMap> {
    let config = LayerConfig::from_json_str(json).unwrap();
    TilemapLayer::new(config, world()).unwrap()
}

#[test]
fn test_synonyms_merge_regions() {
    let mut layer = layer(r#"{"window":{"half_width":20,"half_height":20},"synonym_groups":[[1,2]]}"#);
    let update = layer.prepare(GridCoord::planar(0, 0));
    assert_eq!(update.changed, 1600);
    assert_eq!(update.loaded, 13);

    assert_eq!(layer.materials(), vec![GRASS, STONE]);

    let grass = layer.shapes_for(FLOWERS);
    assert_eq!(grass.material, GRASS);
    assert!(!grass.capped);
    assert_eq!(grass.shapes.len(), 2);
    assert_eq!(grass.shapes[0].len(), 6);
    assert_eq!(grass.shapes[1].len(), 4);

    let all = layer.shapes();
    assert_eq!(all.len(), 2);
    assert_eq!(all[1].material, STONE);
    assert_eq!(all[1].shapes.len(), 1);
}

#[test]
fn test_without_synonyms_variants_stay_apart() {
    let mut layer = layer(r#"{"window":{"half_width":20,"half_height":20}}"#);
    layer.prepare(GridCoord::planar(0, 0));

    assert_eq!(layer.materials(), vec![GRASS, FLOWERS, STONE]);
    let grass = layer.shapes_for(GRASS);
    assert_eq!(grass.shapes.len(), 2);
    assert!(grass.shapes.iter().all(|s| s.len() == 4));
    assert_eq!(layer.shapes_for(FLOWERS).shapes.len(), 1);
}

#[test]
fn test_window_only_holds_nearby_tiles() {
    let mut layer = layer(r#"{"window":{"half_width":4,"half_height":4},"synonym_groups":[[1,2]]}"#);
    let first = layer.prepare(GridCoord::planar(0, 0));
    assert_eq!(first.loaded, 7);
    assert_eq!(layer.tile_at(GridCoord::planar(3, 0)), Some(FLOWERS));
    assert_eq!(layer.tile_at(GridCoord::planar(10, 0)), None);

    let moved = layer.update(GridCoord::planar(10, 0));
    assert_eq!(moved.changed, 128);
    assert_eq!(moved.discarded, 7);
    assert_eq!(moved.loaded, 4);
    assert_eq!(layer.tiles().len(), 4);
    assert_eq!(layer.tracker().center(), GridCoord::planar(10, 0));

    let bounds = layer.bounds().unwrap();
    assert_eq!(bounds.min, GridCoord::planar(10, 0));
    assert_eq!(bounds.cell_extent(), (2, 2));

    // Same center again changes nothing
    assert_eq!(layer.update(GridCoord::planar(10, 0)).changed, 0);
}

#[test]
fn test_shape_cap_is_reported() {
    let mut layer = layer(r#"{"window":{"half_width":20,"half_height":20},"max_shapes":1}"#);
    layer.prepare(GridCoord::planar(0, 0));

    let grass = layer.shapes_for(GRASS);
    assert_eq!(grass.shapes.len(), 1);
    assert!(grass.capped);
    assert!(grass.shapes[0].contains_position(GridCoord::planar(0, 0)));
}

#[test]
fn test_disabled_layer_drops_everything() {
    let mut layer = layer(r#"{"window":{"half_width":20,"half_height":20}}"#);
    layer.prepare(GridCoord::planar(0, 0));
    assert!(!layer.tiles().is_empty());

    layer.set_enabled(false);
    let update = layer.update(GridCoord::planar(0, 0));
    assert_eq!(update.discarded, 13);
    assert!(layer.tiles().is_empty());
    assert!(layer.shapes().is_empty());
    assert!(layer.bounds().is_none());

    layer.set_enabled(true);
    assert_eq!(layer.update(GridCoord::planar(0, 0)).loaded, 13);
}

#[test]
fn test_disabled_in_config_loads_nothing() {
    let mut layer = layer(r#"{"window":{"enabled":false}}"#);
    let update = layer.prepare(GridCoord::planar(0, 0));
    assert_eq!(update.changed, 0);
    assert!(layer.tiles().is_empty());
}

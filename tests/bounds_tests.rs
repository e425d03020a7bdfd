//! Bounds tests - extents, center and size of occupancy sets

use std::collections::{BTreeSet, HashSet};

use tilemap_shapes::core::{compute_bounds, compute_bounds_of, ChunkedOccupancy, SparseOccupancy};
use tilemap_shapes::types::{GridCoord, Vec2};

fn set(coords: &[(i32, i32)]) -> HashSet<GridCoord> {
    coords.iter().map(|&(x, y)| GridCoord::planar(x, y)).collect()
}

#[test]
fn test_triangle_bounds() {
    let bounds = compute_bounds(&set(&[(0, 0), (2, 0), (1, 1)])).unwrap();
    assert_eq!(bounds.min, GridCoord::planar(0, 0));
    assert_eq!(bounds.max, GridCoord::planar(2, 1));
    assert_eq!(bounds.size, Vec2::new(3.0, 2.0));
    assert_eq!(bounds.center, Vec2::new(1.5, 1.0));
    assert_eq!(bounds.cell_extent(), (3, 2));
}

#[test]
fn test_single_cell_is_one_unit() {
    let bounds = compute_bounds(&set(&[(7, -3)])).unwrap();
    assert_eq!(bounds.size, Vec2::new(1.0, 1.0));
    assert_eq!(bounds.center, Vec2::new(7.5, -2.5));
}

#[test]
fn test_negative_coordinates() {
    let bounds = compute_bounds(&set(&[(-3, -1), (0, 4)])).unwrap();
    assert_eq!(bounds.size, Vec2::new(4.0, 6.0));
    assert_eq!(bounds.center, Vec2::new(-1.0, 2.0));
}

#[test]
fn test_empty_set_has_no_bounds() {
    assert!(compute_bounds(&HashSet::<GridCoord>::new()).is_none());
    assert!(compute_bounds(&SparseOccupancy::new()).is_none());
    assert!(compute_bounds_of(std::iter::empty::<GridCoord>()).is_none());
}

#[test]
fn test_storage_does_not_matter() {
    let coords = [(-17, 5), (3, 40), (16, -16), (0, 0)];
    let hashed = set(&coords);
    let ordered: BTreeSet<GridCoord> = hashed.iter().copied().collect();
    let chunked: ChunkedOccupancy = hashed.iter().copied().collect();

    let expected = compute_bounds(&hashed);
    assert!(expected.is_some());
    assert_eq!(compute_bounds(&ordered), expected);
    assert_eq!(compute_bounds(&chunked), expected);
}

#[test]
fn test_cells_on_the_grid_edge() {
    let bounds = compute_bounds(&set(&[(i32::MAX, i32::MAX)])).unwrap();
    assert_eq!(bounds.min, bounds.max);
    assert_eq!(bounds.cell_extent(), (1, 1));
    assert_eq!(bounds.size, Vec2::new(1.0, 1.0));

    let bounds = compute_bounds(&set(&[(i32::MIN, -1), (i32::MAX, 1)])).unwrap();
    assert_eq!(bounds.cell_extent(), (u64::from(u32::MAX) + 1, 3));
    assert_eq!(bounds.size, Vec2::new(4_294_967_296.0, 3.0));
    assert_eq!(bounds.center, Vec2::new(0.0, 0.5));
}

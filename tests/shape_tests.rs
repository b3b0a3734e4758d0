//! Shape tests - movement, rotation, projections

use gridfall::core::{Grid, Shape};
use gridfall::types::{PieceKind, GRID_HEIGHT, GRID_WIDTH};

#[test]
fn test_new_shape_spawns_at_the_top() {
    for kind in PieceKind::ALL {
        let shape = Shape::new(kind);
        assert_eq!(shape.col, 3);
        assert_eq!(shape.row, GRID_HEIGHT - 1);
        assert_eq!(shape.rotation, 0);
    }
}

#[test]
fn test_move_left_blocked_at_the_wall() {
    let grid = Grid::new();
    let mut shape = Shape {
        kind: PieceKind::J,
        rotation: 0,
        col: 2,
        row: 10,
    };

    assert!(shape.move_left(&grid));
    assert!(shape.move_left(&grid));
    assert_eq!(shape.col, 0);

    // Repeated attempts against the wall always fail and never move
    // or deform the shape.
    let before = shape;
    for _ in 0..5 {
        assert!(!shape.move_left(&grid));
        assert_eq!(shape, before);
    }
}

#[test]
fn test_move_right_blocked_at_the_wall() {
    let grid = Grid::new();
    let mut shape = Shape {
        kind: PieceKind::O,
        rotation: 0,
        col: GRID_WIDTH - 3,
        row: 10,
    };

    assert!(shape.move_right(&grid));
    assert!(!shape.move_right(&grid));
    assert_eq!(shape.col, GRID_WIDTH - 2);
}

#[test]
fn test_moves_blocked_by_settled_cells() {
    let mut grid = Grid::new();
    grid.set(3, 10, Some(PieceKind::T));

    let mut shape = Shape {
        kind: PieceKind::O,
        rotation: 0,
        col: 4,
        row: 10,
    };

    assert!(!shape.move_left(&grid));
    assert_eq!(shape.col, 4);
    assert!(shape.move_down(&grid));
}

#[test]
fn test_rotation_rejected_without_kicks() {
    let grid = Grid::new();
    // Vertical I against the right wall; horizontal would poke through.
    let mut shape = Shape {
        kind: PieceKind::I,
        rotation: 1,
        col: GRID_WIDTH - 1,
        row: 10,
    };

    let before = shape;
    assert!(!shape.rotate(&grid));
    assert_eq!(shape, before);

    // The same turn succeeds with room to spare.
    shape.col = 3;
    assert!(shape.rotate(&grid));
    assert_eq!(shape.rotation, 2);
    assert_eq!(shape.col, 3);
}

#[test]
fn test_drop_teleports_to_resting_position() {
    let mut grid = Grid::new();
    grid.set(4, 2, Some(PieceKind::Z));

    let mut shape = Shape::new(PieceKind::O);
    shape.col = 4;

    assert!(shape.drop(&grid));
    // O lands on top of the settled cell at row 2.
    assert_eq!(shape.row, 4);
    assert!(!shape.can_descend(&grid));

    // A second drop from rest is a no-op but still succeeds.
    assert!(shape.drop(&grid));
    assert_eq!(shape.row, 4);
}

#[test]
fn test_projection_predicts_the_drop() {
    let mut grid = Grid::new();
    grid.set(5, 7, Some(PieceKind::L));

    let shape = Shape::new(PieceKind::T);
    let ghost = shape.projection(&grid);

    let mut dropped = shape;
    dropped.drop(&grid);
    assert_eq!(ghost, dropped);

    // The source shape is untouched.
    assert_eq!(shape.row, GRID_HEIGHT - 1);
}

#[test]
fn test_positioned_projection_places_the_preview() {
    let shape = Shape::new(PieceKind::S);
    let preview = shape.positioned_projection(GRID_WIDTH + 2, GRID_HEIGHT - 1);

    assert_eq!(preview.col, GRID_WIDTH + 2);
    assert_eq!(preview.row, GRID_HEIGHT - 1);
    assert_eq!(preview.kind, PieceKind::S);
    assert_eq!(preview.rotation, shape.rotation);
}

#[test]
fn test_boxes_carry_the_kind_color() {
    let shape = Shape::new(PieceKind::T);
    for b in shape.boxes() {
        assert_eq!(b.color_index, PieceKind::T.color_index());
    }
    assert_eq!(shape.boxes().count(), 4);
}

//! Grid tests - occupancy, settling, spawning

use rainbow_bricks::core::{GridState, ScriptedRng, SimpleRng};
use rainbow_bricks::types::{Brick, BrickColor, GRID_HEIGHT, GRID_WIDTH};

fn brick(col: u8, row: u8, color: BrickColor) -> Brick {
    Brick { col, row, color }
}

#[test]
fn test_grid_new_empty() {
    let grid = GridState::new();
    assert_eq!(grid.width(), GRID_WIDTH);
    assert_eq!(grid.height(), GRID_HEIGHT);

    for row in 0..GRID_HEIGHT {
        for col in 0..GRID_WIDTH {
            assert!(!grid.cell_occupied(col, row), "cell ({}, {}) should be empty", col, row);
        }
    }
    assert!(grid.settled_bricks().is_empty());
}

#[test]
fn test_cell_occupied_after_settle() {
    let mut grid = GridState::new();
    assert!(grid.settle(brick(5, 8, BrickColor::Green)));

    assert!(grid.cell_occupied(5, 8));
    assert_eq!(grid.color_at(5, 8), Some(BrickColor::Green));
    assert!(!grid.cell_occupied(5, 7));
    assert!(!grid.cell_occupied(4, 8));
}

#[test]
fn test_cell_occupied_out_of_bounds_is_false() {
    let mut grid = GridState::new();
    grid.settle(brick(8, 8, BrickColor::Red));

    assert!(!grid.cell_occupied(GRID_WIDTH, 8));
    assert!(!grid.cell_occupied(8, GRID_HEIGHT));
    assert!(!grid.cell_occupied(u8::MAX, u8::MAX));
}

#[test]
fn test_settle_keeps_order() {
    let mut grid = GridState::new();
    let bricks = [
        brick(0, 8, BrickColor::Red),
        brick(0, 7, BrickColor::Blue),
        brick(6, 8, BrickColor::Green),
    ];
    for b in bricks {
        assert!(grid.settle(b));
    }
    assert_eq!(grid.settled_bricks(), &bricks);
    assert_eq!(grid.len(), 3);
    assert_eq!(grid.column_top(0), Some(7));
    assert_eq!(grid.column_top(6), Some(8));
    assert_eq!(grid.column_top(3), None);
}

#[test]
fn test_settle_rejects_out_of_grid() {
    let mut grid = GridState::new();
    assert!(!grid.settle(brick(9, 0, BrickColor::Red)));
    assert!(!grid.settle(brick(0, 9, BrickColor::Red)));
    assert!(grid.is_empty());
}

#[test]
fn test_clear_empties_grid() {
    let mut grid = GridState::new();
    grid.settle(brick(1, 8, BrickColor::Red));
    grid.settle(brick(2, 8, BrickColor::Blue));
    grid.clear();

    assert!(grid.is_empty());
    assert!(!grid.cell_occupied(1, 8));
    assert!(!grid.cell_occupied(2, 8));
}

#[test]
fn test_spawn_new_uses_rng_on_top_row() {
    let grid = GridState::new();
    let mut rng = ScriptedRng::new([(6, BrickColor::Blue)]);
    let active = grid.spawn_new(&mut rng);

    assert_eq!(active.col, 6);
    assert_eq!(active.row, 0);
    assert_eq!(active.color, BrickColor::Blue);
    assert!(active.falling);
}

#[test]
fn test_spawn_new_does_not_touch_grid() {
    let mut grid = GridState::new();
    grid.settle(brick(4, 8, BrickColor::Green));
    let before = grid.clone();

    let mut rng = SimpleRng::new(99);
    for _ in 0..20 {
        let active = grid.spawn_new(&mut rng);
        assert!(active.col < GRID_WIDTH);
        assert_eq!(active.row, 0);
    }
    assert_eq!(grid.settled_bricks(), before.settled_bricks());
}

#[test]
fn test_spawn_new_distribution_is_roughly_uniform() {
    let grid = GridState::new();
    let mut rng = SimpleRng::new(31337);
    let mut cols = [0u32; GRID_WIDTH as usize];
    let mut colors = [0u32; 3];

    for _ in 0..1000 {
        let active = grid.spawn_new(&mut rng);
        cols[active.col as usize] += 1;
        colors[active.color.index()] += 1;
    }

    for (col, n) in cols.iter().enumerate() {
        assert!(*n > 50, "column {} only spawned {} times", col, n);
    }
    for (i, n) in colors.iter().enumerate() {
        assert!(*n > 200, "color {} only spawned {} times", i, n);
    }
}

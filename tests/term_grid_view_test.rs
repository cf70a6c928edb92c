use rainbow_bricks::core::{GridState, ScriptedRng};
use rainbow_bricks::engine::SimulationEngine;
use rainbow_bricks::term::{brick_rgb, FrameBuffer, GridView, Viewport};
use rainbow_bricks::types::{ActiveBrick, Brick, BrickColor, GRID_HEIGHT};

fn all_text(fb: &FrameBuffer) -> String {
    (0..fb.height()).map(|y| fb.row_string(y)).collect::<Vec<_>>().join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let engine = SimulationEngine::with_seed(1);
    let view = GridView::default();

    // 9 cells * 2 columns + border = 20 wide, 9 rows + border = 11 tall.
    let fb = view.render(&engine.snapshot(), Viewport::new(20, 11));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(19, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 10).unwrap().ch, '└');
    assert_eq!(fb.get(19, 10).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_settled_brick_two_chars_wide() {
    let mut grid = GridState::new();
    grid.settle(Brick {
        col: 0,
        row: 8,
        color: BrickColor::Blue,
    });
    let engine = SimulationEngine::from_parts(grid, None, ScriptedRng::new([(5, BrickColor::Red)]));
    let fb = GridView::default().render(&engine.snapshot(), Viewport::new(20, 11));

    let y0 = 1 + 8;
    let left = fb.get(1, y0).unwrap();
    let right = fb.get(2, y0).unwrap();
    assert_eq!(left.ch, '█');
    assert_eq!(right.ch, '█');
    assert_eq!(left.style.fg, brick_rgb(BrickColor::Blue));

    // Neighbouring empty cell.
    assert_eq!(fb.get(3, y0).unwrap().ch, '·');
}

#[test]
fn term_view_draws_active_brick_on_top_row() {
    let engine = SimulationEngine::new(ScriptedRng::new([(3, BrickColor::Green)]));
    let fb = GridView::default().render(&engine.snapshot(), Viewport::new(20, 11));

    // Column 3 starts at x = 1 + 3 * 2.
    let cell = fb.get(7, 1).unwrap();
    assert_eq!(cell.ch, '█');
    assert_eq!(cell.style.fg, brick_rgb(BrickColor::Green));
    assert!(cell.style.bold);
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut engine = SimulationEngine::with_seed(3);
    for _ in 0..12 {
        engine.tick();
    }
    let fb = GridView::default().render(&engine.snapshot(), Viewport::new(60, 11));
    let text = all_text(&fb);

    assert!(text.contains("COLUMN"));
    assert!(text.contains("SETTLED"));
    assert!(text.contains("TICK"));
    assert!(text.contains("12"));
}

#[test]
fn term_view_shows_topped_out_overlay() {
    let mut grid = GridState::new();
    for row in 0..GRID_HEIGHT {
        grid.settle(Brick {
            col: 4,
            row,
            color: BrickColor::Red,
        });
    }
    let active = ActiveBrick::spawn(4, BrickColor::Blue);
    let engine = SimulationEngine::from_parts(grid, Some(active), ScriptedRng::default());
    let fb = GridView::default().render(&engine.snapshot(), Viewport::new(20, 11));

    assert!(all_text(&fb).contains("TOPPED OUT"));
}

#[test]
fn term_view_click_maps_back_to_rendered_column() {
    let view = GridView::default();
    let vp = Viewport::new(80, 24);
    let (start_x, _) = view.frame_origin(vp);

    for col in 0..9u16 {
        let x = start_x + 1 + col * 2;
        assert_eq!(view.column_at(vp, x), col as i32);
        assert_eq!(view.column_at(vp, x + 1), col as i32);
    }
}

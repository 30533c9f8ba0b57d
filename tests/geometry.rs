use glam::Vec2;
use levelgrid::geometry::*;
use levelgrid::ScreenConfig;

fn grid(level_count: usize, columns: usize) -> GridLayout {
    // viewport = 2·pad + columns·(tile + pad) gives exactly `columns`.
    let tile = 100.0;
    let pad = 20.0;
    let width = 2.0 * pad + columns as f32 * (tile + pad);
    GridLayout::new(width, Vec2::new(10.0, 30.0), tile, pad, level_count)
}

#[test]
fn rect_contains_half_open() {
    assert!(rect_contains(0.0, 0.0, 10.0, 10.0, 0.0, 0.0));
    assert!(rect_contains(0.0, 0.0, 10.0, 10.0, 9.99, 9.99));
    assert!(!rect_contains(0.0, 0.0, 10.0, 10.0, 10.0, 5.0));
    assert!(!rect_contains(0.0, 0.0, 10.0, 10.0, 5.0, 10.0));
    assert!(!rect_contains(0.0, 0.0, 10.0, 10.0, -0.01, 5.0));
}

#[test]
fn default_config_has_four_columns() {
    // floor((1280 - 100) / 250) = 4
    let layout = GridLayout::from_config(&ScreenConfig::default(), 10);
    assert_eq!(layout.column_count(), 4);
    assert_eq!(layout.row_count(), 3);
}

#[test]
fn column_count_floors() {
    assert_eq!(column_count(1280.0, 200.0, 50.0), 4);
    assert_eq!(column_count(1349.0, 200.0, 50.0), 4);
    assert_eq!(column_count(1350.0, 200.0, 50.0), 5);
}

#[test]
fn column_count_zero_when_nothing_fits() {
    assert_eq!(column_count(200.0, 200.0, 50.0), 0);
    assert_eq!(column_count(50.0, 200.0, 50.0), 0);
}

#[test]
fn degenerate_viewport_still_has_one_column() {
    let layout = GridLayout::new(10.0, Vec2::ZERO, 200.0, 50.0, 3);
    assert_eq!(layout.column_count(), 1);
    assert_eq!(layout.rect_for(2), Rect::new(0.0, 500.0, 200.0, 200.0));
}

#[test]
fn rect_for_default_layout() {
    let layout = GridLayout::from_config(&ScreenConfig::default(), 10);
    assert_eq!(layout.rect_for(0), Rect::new(120.0, 150.0, 200.0, 200.0));
    assert_eq!(layout.rect_for(3), Rect::new(870.0, 150.0, 200.0, 200.0));
    // Index 5 wraps to row 1, column 1.
    assert_eq!(layout.rect_for(5), Rect::new(370.0, 400.0, 200.0, 200.0));
}

#[test]
fn rect_for_row_major_order() {
    let layout = grid(9, 3);
    for i in 0..9 {
        let r = layout.rect_for(i);
        let col = (i % 3) as f32;
        let row = (i / 3) as f32;
        assert_eq!(r.x, 10.0 + col * 120.0, "x of tile {i}");
        assert_eq!(r.y, 30.0 + row * 120.0, "y of tile {i}");
        assert_eq!((r.w, r.h), (100.0, 100.0));
    }
}

#[test]
fn hit_test_every_interior_point_resolves_to_its_tile() {
    let layout = grid(6, 3);
    for i in 0..6 {
        let r = layout.rect_for(i);
        for fx in [0.01, 0.25, 0.5, 0.75, 0.99] {
            for fy in [0.01, 0.25, 0.5, 0.75, 0.99] {
                let x = r.x + r.w * fx;
                let y = r.y + r.h * fy;
                assert_eq!(layout.hit_test(x, y), Some(i), "point ({x}, {y})");
            }
        }
    }
}

#[test]
fn hit_test_gaps_and_outside_resolve_to_none() {
    let layout = grid(6, 3);
    // Padding gap between tile 0 and tile 1.
    assert_eq!(layout.hit_test(115.0, 50.0), None);
    // Gap between rows.
    assert_eq!(layout.hit_test(50.0, 135.0), None);
    // Before the origin.
    assert_eq!(layout.hit_test(0.0, 0.0), None);
    // Far away.
    assert_eq!(layout.hit_test(5000.0, 5000.0), None);
}

#[test]
fn hit_test_ignores_cells_past_the_last_level() {
    // 5 levels in 3 columns: the sixth cell (row 1, col 2) is empty.
    let layout = grid(5, 3);
    let empty = layout.rect_for(5).center();
    assert_eq!(layout.hit_test(empty.x, empty.y), None);
}

#[test]
fn hit_test_empty_catalog() {
    let layout = grid(0, 3);
    assert_eq!(layout.row_count(), 0);
    assert_eq!(layout.hit_test(60.0, 80.0), None);
}

#[test]
fn scaled_about_center_keeps_center() {
    let r = Rect::new(120.0, 150.0, 200.0, 200.0);
    let s = r.scaled_about_center(1.1);
    assert!((s.w - 220.0).abs() < 1e-4);
    assert!((s.x - 110.0).abs() < 1e-4);
    assert!((s.y - 140.0).abs() < 1e-4);
    assert!((s.center() - r.center()).length() < 1e-4);
}

#[test]
fn translated_keeps_size() {
    let r = Rect::new(120.0, 150.0, 200.0, 200.0).translated(Vec2::new(-100.0, 20.0));
    assert_eq!(r, Rect::new(20.0, 170.0, 200.0, 200.0));
}

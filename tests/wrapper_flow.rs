//! Integration tests for the flow placement engine

use pretty_assertions::assert_eq;

use align_layout::layout::{
    xy, FlowConfig, FlowDirection, GroupAlign, LayoutConfig, Rect, Wrapper,
};

fn rows_with_gap(bounds: Rect<i32>, gap: i32) -> Wrapper<'static, i32> {
    Wrapper::new(
        bounds,
        0.0,
        0.0,
        move |r, prev| r.stack_x(prev, 1.0, 0.0).add(xy(gap, 0)),
        move |r, first| r.stack_y(first, 0.0, 1.0).add(xy(0, gap)),
    )
}

#[test]
fn test_third_box_wraps_to_new_line() {
    let mut w = rows_with_gap(Rect::wh(100, 100), 8);
    assert!(w.add(Rect::wh(40, 20)));
    assert!(w.add(Rect::wh(40, 20)));
    // stacking would put the third box at x = 96
    assert!(w.add(Rect::wh(40, 20)));

    assert_eq!(w.rects()[2], Rect::xywh(0, 28, 40, 20));
    assert_eq!(w.line_first(), Some(w.rects()[2]));
}

#[test]
fn test_overflow_when_no_line_fits() {
    let mut w = rows_with_gap(Rect::wh(100, 40), 8);
    assert!(w.add(Rect::wh(40, 20)));
    assert!(w.add(Rect::wh(40, 20)));
    assert!(!w.add(Rect::wh(40, 20)));
    assert_eq!(w.len(), 2);
    assert_eq!(w.line_first(), Some(Rect::xywh(0, 0, 40, 20)));

    // greedy: a narrower box still fits after the rejected one
    assert!(w.add(Rect::wh(4, 20)));
    assert_eq!(w.rects()[2], Rect::xywh(96, 0, 4, 20));
}

#[test]
fn test_anchor_positions_first_box() {
    let mut w = rows_with_gap(Rect::xywh(10, 10, 80, 80), 0);
    assert!(w.add(Rect::wh(80, 80)));
    assert!(!w.add(Rect::wh(1, 1)));

    let mut centered = Wrapper::new(
        Rect::wh(100, 50),
        0.5,
        0.5,
        |r, prev: &Rect<i32>| r.stack_x(prev, 1.0, 0.0),
        |r, first: &Rect<i32>| r.stack_y(first, 0.0, 1.0),
    );
    assert!(centered.add(Rect::wh(20, 10)));
    assert_eq!(centered.rects(), &[Rect::xywh(40, 20, 20, 10)]);
}

#[test]
fn test_mixed_sizes_wrap_under_line_start() {
    let mut w = rows_with_gap(Rect::wh(60, 100), 2);
    let placed = w.extend([
        Rect::wh(30, 10),
        Rect::wh(20, 25),
        Rect::wh(20, 5),
        Rect::wh(50, 5),
    ]);
    assert_eq!(placed, 4);
    assert_eq!(
        w.rects(),
        &[
            Rect::xywh(0, 0, 30, 10),
            Rect::xywh(32, 0, 20, 25),
            Rect::xywh(0, 12, 20, 5),
            Rect::xywh(0, 19, 50, 5),
        ]
    );
}

#[test]
fn test_rows_from_toml_config() {
    let config = LayoutConfig::from_toml(
        r#"
[flow]
gap = 5.0
line_gap = 5.0
"#,
    )
    .unwrap();
    let mut w = Wrapper::from_config(Rect::xywh(10, 10, 80, 80), &config.flow);
    let placed = w.extend(std::iter::repeat(Rect::wh(20, 20)).take(10));
    assert_eq!(placed, 9);
    assert_eq!(w.rects()[3], Rect::xywh(10, 35, 20, 20));
    assert_eq!(w.rects()[8], Rect::xywh(60, 60, 20, 20));
}

#[test]
fn test_columns_anchor_bottom_right() {
    let config = FlowConfig {
        direction: FlowDirection::Columns,
        anchor_x: 1.0,
        anchor_y: 1.0,
        gap: 0.0,
        line_gap: 0.0,
    };
    let mut w = Wrapper::from_config(Rect::wh(30, 30), &config);
    assert!(w.add(Rect::wh(10, 10)));
    assert_eq!(w.rects()[0], Rect::xywh(20, 20, 10, 10));
    // below and right of the first box are both outside the bounds
    assert!(!w.add(Rect::wh(10, 10)));
}

#[test]
fn test_placed_boxes_realign_as_group() {
    let mut w = rows_with_gap(Rect::wh(100, 100), 5);
    w.extend(std::iter::repeat(Rect::wh(20, 10)).take(3));
    let mut row = w.into_slice();
    row.center_of(&Rect::wh(100, 100));
    assert_eq!(row[0], Rect::xywh(15, 45, 20, 10));
    assert_eq!(row[2], Rect::xywh(65, 45, 20, 10));
}

#[test]
fn test_borrowed_placement_state() {
    let spacing = xy(3, 3);
    let mut w = Wrapper::new(
        Rect::wh(20, 20),
        0.0,
        0.0,
        |r, prev: &Rect<i32>| r.stack_x(prev, 1.0, 0.0).add(xy(spacing.x, 0)),
        |r, first: &Rect<i32>| r.stack_y(first, 0.0, 1.0).add(xy(0, spacing.y)),
    );
    assert_eq!(w.extend([Rect::wh(8, 8), Rect::wh(8, 8), Rect::wh(8, 8)]), 3);
    assert_eq!(w.rects()[1], Rect::xywh(11, 0, 8, 8));
    assert_eq!(w.rects()[2], Rect::xywh(0, 11, 8, 8));
}

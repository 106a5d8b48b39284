//! Integration tests for rectangle values and their alignment operators

use pretty_assertions::assert_eq;

use align_layout::layout::{intersect, union, xy, Point, Rect};

#[test]
fn test_inset_on_every_side() {
    let screen = Rect::wh(100, 100);
    assert_eq!(screen.inset(20), Rect::xyxy(20, 20, 80, 80));
    assert_eq!(screen.inset(20).outset(20), screen);
}

#[test]
fn test_inset_collapses_proportionally() {
    let r = Rect::<f64>::wh(10.0, 10.0).inset_ltrb(9.0, 0.0, 3.0, 0.0);
    assert_eq!(r.min.x, 7.5);
    assert_eq!(r.max.x, 7.5);
    assert_eq!((r.min.y, r.max.y), (0.0, 10.0));
    assert!(r.is_empty());
}

#[test]
fn test_inset_collapse_without_insets_uses_midpoint() {
    // only a negative extent can trip the collapse with zero insets
    let r = Rect::new(xy(10.0, 0.0), xy(0.0, 4.0)).inset_xy(0.0, 0.0);
    assert_eq!(r.min.x, 5.0);
    assert_eq!(r.max.x, 5.0);
}

#[test]
fn test_status_bar_layout() {
    let screen = Rect::wh(100, 100);
    let (bar, content) = screen.cut_top(10);
    let title = Rect::wh(30, 10).center_of(&bar);
    let portrait = Rect::wh(20, 30).nest(&content.inset(10), 0.0, 0.0);
    let button = Rect::wh(20, 10).nest(&content.inset(10), 1.0, 1.0);

    assert_eq!(title, Rect::xywh(35, 0, 30, 10));
    assert_eq!(portrait, Rect::xywh(10, 20, 20, 30));
    assert_eq!(button, Rect::xywh(70, 80, 20, 10));
}

#[test]
fn test_stack_with_offset() {
    let first = Rect::xywh(35, 55, 30, 8);
    let second = Rect::wh(30, 8).stack_y(&first, 0.5, 1.0).add(xy(0, 4));
    assert_eq!(second, Rect::xywh(35, 67, 30, 8));

    let right = Rect::wh(10, 10).stack_x(&first, 1.0, 0.0);
    assert_eq!(right, Rect::xywh(65, 55, 10, 10));
}

#[test]
fn test_fractional_alignment() {
    let r = Rect::<f64>::wh(10.0, 10.0).center_of(&Rect::wh(25.0, 25.0));
    assert_eq!(r.min, xy(7.5, 7.5));
    assert_eq!(r.size(), xy(10.0, 10.0));
}

#[test]
fn test_union_of_menu_buttons() {
    let buttons = [
        Rect::xywh(35, 55, 30, 8),
        Rect::xywh(35, 67, 30, 8),
        Rect::xywh(35, 79, 30, 8),
    ];
    assert_eq!(union(buttons), Rect::xyxy(35, 55, 65, 87));
    assert_eq!(union(buttons).outset(5), Rect::xyxy(30, 50, 70, 92));
}

#[test]
fn test_disjoint_intersection_is_empty() {
    let a = Rect::xywh(0, 0, 10, 10);
    let b = Rect::xywh(20, 20, 10, 10);
    assert!(intersect([a, b]).is_empty());
    assert!(!a.overlaps(&b));
}

#[test]
fn test_touching_rects_do_not_overlap() {
    let a = Rect::xywh(0, 0, 10, 10);
    let b = Rect::xywh(10, 0, 10, 10);
    assert!(!a.overlaps(&b));
    assert!(a.overlaps(&Rect::xywh(9, 9, 10, 10)));
}

#[test]
fn test_is_inside_bounds() {
    let bounds = Rect::wh(100, 100);
    assert!(Rect::xywh(80, 80, 20, 20).is_inside(&bounds));
    assert!(!Rect::xywh(85, 80, 20, 20).is_inside(&bounds));
    assert!(Rect::xywh(500, 500, 0, 0).is_inside(&bounds));
}

#[test]
fn test_clamp_keeps_size() {
    let bounds = Rect::wh(100, 100);
    assert_eq!(
        Rect::xywh(90, -5, 20, 10).clamp(&bounds),
        Rect::xywh(80, 0, 20, 10)
    );
    assert_eq!(
        Rect::xywh(-10, -10, 200, 10).clamp(&bounds),
        Rect::xywh(0, 0, 200, 10)
    );
}

#[test]
fn test_points_row_major() {
    let points: Vec<Point<i64>> = Rect::xywh(1, 1, 3, 2).points().collect();
    assert_eq!(
        points,
        vec![xy(1, 1), xy(2, 1), xy(3, 1), xy(1, 2), xy(2, 2), xy(3, 2)]
    );
    assert_eq!(Rect::wh(0, 5).points().count(), 0);
}

#[test]
fn test_points_of_fractional_rect() {
    let points: Vec<Point<i64>> = Rect::xyxy(0.5, 0.5, 2.0, 2.0).points().collect();
    assert_eq!(points, vec![xy(1, 1)]);
}

#[test]
fn test_display() {
    assert_eq!(Rect::xywh(1, 2, 3, 4).to_string(), "(1,2)-(4,6)");
}

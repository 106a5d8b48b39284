//! Integration tests for composite groups and the alignment properties they
//! share with single rectangles

use pretty_assertions::assert_eq;

use align_layout::layout::{xy, Element, GroupAlign, Item, Map, Nodes, Rect, Slice};

const ANCHORS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

#[test]
fn test_align_to_self_is_identity() {
    let r = Rect::<f64>::xywh(3.0, 7.0, 40.0, 25.0);
    for ax in ANCHORS {
        for ay in ANCHORS {
            let aligned = r.align(ax, ay, &r, ax, ay);
            assert_eq!(aligned.nest(&r, ax, ay), r);
        }
    }
}

#[test]
fn test_stacked_boxes_are_adjacent() {
    let b = Rect::xywh(50, 50, 30, 20);
    let a = Rect::wh(17, 9);
    for tay in ANCHORS {
        for tax in [0.0, 1.0] {
            let s = a.stack_x(&b, tax, tay);
            assert!(s.max.x <= b.min.x || s.min.x >= b.max.x, "{s} vs {b}");
            assert_eq!(s.size(), a.size());
        }
        for tax in [0.0, 1.0] {
            let s = a.stack_y(&b, tay, tax);
            assert!(s.max.y <= b.min.y || s.min.y >= b.max.y, "{s} vs {b}");
        }
    }
}

#[test]
fn test_split_reconstructs_extent() {
    let r = Rect::<f64>::xywh(0.0, 0.0, 100.0, 50.0);
    let (xs, ys, gx, gy) = (7, 3, 2.0, 1.5);
    let cells = r.split(xs, ys, gx, gy);
    assert_eq!(cells.len(), xs * ys);

    let width: f64 = cells[..xs].iter().map(|c| c.dx()).sum::<f64>() + gx * (xs - 1) as f64;
    let height: f64 =
        cells.iter().step_by(xs).map(|c| c.dy()).sum::<f64>() + gy * (ys - 1) as f64;
    assert!((width - r.dx()).abs() < 1e-9);
    assert!((height - r.dy()).abs() < 1e-9);
    assert!((cells[xs * ys - 1].max.x - r.max.x).abs() < 1e-9);
}

#[test]
fn test_slice_centers_as_one_unit() {
    let mut row: Slice<Rect<i32>> = Rect::wh(20, 10).repeat_x(3, 5).into_iter().collect();
    row.center_of(&Rect::wh(100, 100));
    assert_eq!(
        row.into_inner(),
        vec![
            Rect::xywh(15, 45, 20, 10),
            Rect::xywh(40, 45, 20, 10),
            Rect::xywh(65, 45, 20, 10),
        ]
    );
}

#[test]
fn test_slice_clamp_and_insets() {
    let mut s = Slice::from(vec![Rect::xywh(90, 0, 10, 10), Rect::xywh(110, 20, 10, 10)]);
    s.clamp(&Rect::wh(100, 100));
    assert_eq!(s.bounds(), Rect::xyxy(70, 0, 100, 30));
    assert_eq!(s.inset(5), Rect::xyxy(75, 5, 95, 25));
    assert_eq!(s.outset_xy(1, 2), Rect::xyxy(69, -2, 101, 32));
    assert_eq!(s.last(), Some(&Rect::xywh(90, 20, 10, 10)));
}

#[test]
fn test_slice_add_chains() {
    let mut s = Slice::from(vec![Rect::wh(1, 1)]);
    s.add(xy(2, 0)).add(xy(0, 3));
    assert_eq!(s[0], Rect::xywh(2, 3, 1, 1));
}

#[test]
fn test_empty_groups() {
    let mut s: Slice<Rect<i32>> = Slice::new();
    assert_eq!(s.bounds(), Rect::default());
    s.center_of(&Rect::wh(10, 10));
    assert!(s.is_empty());

    let m: Map<Rect<i32>> = Map::new();
    assert_eq!(m.bounds(), Rect::default());
}

#[test]
fn test_map_moves_named_members() {
    let mut hud: Map<Rect<i32>> = [
        ("score", Rect::xywh(0, 0, 30, 10)),
        ("lives", Rect::xywh(40, 0, 20, 10)),
    ]
    .into_iter()
    .collect();
    hud.nest(&Rect::wh(100, 100), 1.0, 1.0);

    assert_eq!(hud.get("score"), Some(&Rect::xywh(40, 90, 30, 10)));
    assert_eq!(hud.get("lives"), Some(&Rect::xywh(80, 90, 20, 10)));
}

#[test]
fn test_nested_items_share_one_delta() {
    let nodes = Nodes::new();
    let card = nodes.xywh(0, 0, 10, 10);
    let tag = nodes.xywh(10, 0, 5, 5);
    card.link(tag);

    let inner: Slice<Item<'_, i32>> = vec![Item::from(Rect::xywh(0, 20, 10, 10))].into();
    let mut group: Slice<Item<'_, i32>> = vec![Item::from(card), Item::Slice(inner)].into();
    group.stack_x(&Rect::xywh(100, 0, 10, 10), 1.0, 0.0);

    assert_eq!(card.pos(), xy(110, 0));
    // group members move; linked nodes outside the container do not
    assert_eq!(tag.pos(), xy(10, 0));
    let Item::Slice(inner) = &group[1] else {
        panic!("expected nested slice");
    };
    assert_eq!(inner[0].as_rect(), Some(Rect::xywh(110, 20, 10, 10)));
}

#[test]
fn test_boxed_elements() {
    let mut items: Slice<Box<dyn Element<i32>>> = Slice::new();
    items.push(Box::new(Rect::wh(10, 10)));
    items.push(Box::new(Rect::xywh(20, 20, 10, 10)));
    items.align(0.0, 0.0, &Rect::xywh(5, 5, 1, 1), 0.0, 0.0);
    assert_eq!(items.bounds(), Rect::xyxy(5, 5, 35, 35));
}

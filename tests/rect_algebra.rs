// MIT/Apache2 License

use cg_geometry::{point, rect, Point, Rect, RectEdge, Size, POINT_ZERO, RECT_ZERO, SIZE_ZERO};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn samples() -> [Rect; 6] {
    [
        rect(0, 0, 10, 10),
        rect(-3.5, 2.0, 7.25, -4.0),
        rect(1, 1, 0, 5),
        rect(0, 0, -10, -10),
        Rect::NULL,
        Rect::INFINITE,
    ]
}

#[test]
fn zero_constants() {
    assert_eq!(POINT_ZERO, Point::new(0, 0));
    assert_eq!(SIZE_ZERO, Size::zero());
    assert_eq!(RECT_ZERO, Rect::new(Point::ZERO, Size::ZERO));
    assert!(!RECT_ZERO.is_null());
}

#[test]
fn null_is_union_identity() {
    init();
    for r in samples().iter() {
        assert_eq!(r.union(&Rect::NULL), *r);
        assert_eq!(Rect::NULL.union(r), *r);
    }
}

#[test]
fn non_empty_rects_intersect_themselves() {
    init();
    for r in samples().iter().filter(|r| !r.is_empty()) {
        assert!(r.intersects(r), "{:?}", r);
    }
    assert!(!Rect::NULL.intersects(&Rect::NULL));
    assert!(!rect(1, 1, 0, 5).intersects(&rect(1, 1, 0, 5)));
}

#[test]
fn standardize_and_integral_are_idempotent() {
    for r in samples().iter() {
        let s = r.standardized();
        assert_eq!(s.standardized(), s);
        let i = r.integral();
        assert_eq!(i.integral(), i);
    }
}

#[test]
fn standardized_components_round_trip() {
    let r = rect(4.0, 8.0, -2.0, 3.0);
    let s = r.standardized();
    let again = Rect::from_components(s.min_x(), s.min_y(), s.width(), s.height());
    assert_eq!(again.origin, s.origin);
    assert_eq!(again.size, s.size);
}

#[test]
fn divide_covers_the_original() {
    init();
    let r = rect(2, 3, -8, 5);
    let width = r.standardized().width();
    for d in [0.0, 0.5, 3.0, 8.0].iter() {
        let (slice, remainder) = r.divide(*d, RectEdge::MinX);
        assert_eq!(slice.width() + remainder.width(), width);
        assert_eq!(slice.union(&remainder), r.standardized());
    }

    let (slice, remainder) = r.divide(2.0, RectEdge::MaxY);
    assert_eq!(slice, rect(-6, 6, 8, 2));
    assert_eq!(remainder, rect(-6, 3, 8, 3));
}

#[test]
fn documented_examples() {
    assert_eq!(
        rect(0, 0, 10, 10).intersection(&rect(5, 5, 10, 10)),
        rect(5, 5, 5, 5)
    );
    assert_eq!(rect(0, 0, -10, -10).standardized(), rect(-10, -10, 10, 10));

    let r = rect(0, 0, -10, -10).standardized();
    assert_eq!((r.origin.x, r.origin.y), (-10.0, -10.0));
    assert_eq!((r.size.width, r.size.height), (10.0, 10.0));
}

#[test]
fn disjoint_intersection_is_null() {
    let mut r = rect(0, 0, 1, 1);
    r.form_intersection(&rect(5, 5, 1, 1));
    assert!(r.is_null());

    r.form_union(&rect(5, 5, 1, 1));
    assert_eq!(r, rect(5, 5, 1, 1));
}

#[test]
fn infinite_contains_everything() {
    for r in samples().iter() {
        assert!(Rect::INFINITE.contains_rect(r));
    }
    assert!(Rect::INFINITE.contains_point(point(-1.0e200, 1.0e200)));
}

#[test]
fn pixel_rect_from_integral() {
    init();
    let r = rect(0.25, 0.75, 9.5, 2.0);
    assert!(r.to_pixel_rect().is_err());

    let px = r.integral().to_pixel_rect().expect("integral rect converts");
    assert_eq!((px.origin.x, px.origin.y), (0, 0));
    assert_eq!((px.size.width, px.size.height), (10, 3));
}

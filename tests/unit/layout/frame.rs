use super::*;

fn frame(x: f64, width: f64) -> ItemFrame {
    ItemFrame {
        index: 0,
        x,
        y: 0.0,
        width,
        height: 75.0,
    }
}

#[test]
fn geometry_helpers() {
    let f = frame(76.0, 75.0);
    assert_eq!(f.max_x(), 151.0);
    assert_eq!(f.center(), Point::new(113.5, 37.5));
    assert_eq!(f.rect(), Rect::new(76.0, 0.0, 151.0, 75.0));
}

#[test]
fn containment_is_half_open() {
    let f = frame(76.0, 75.0);
    assert!(f.contains(Point::new(76.0, 0.0)));
    assert!(f.contains(Point::new(150.9, 74.9)));
    assert!(!f.contains(Point::new(151.0, 0.0)));
    assert!(!f.contains(Point::new(75.5, 10.0)));
}

#[test]
fn intersects_requires_shared_area() {
    let f = frame(76.0, 75.0);
    assert!(f.intersects(Rect::new(0.0, 0.0, 100.0, 10.0)));
    assert!(f.intersects(Rect::new(150.0, 70.0, 300.0, 300.0)));
    // Touching edges only.
    assert!(!f.intersects(Rect::new(0.0, 0.0, 76.0, 75.0)));
    assert!(!f.intersects(Rect::new(151.0, 0.0, 200.0, 75.0)));
    assert!(!f.intersects(Rect::new(80.0, 75.0, 90.0, 100.0)));
}

#[test]
fn intersects_accepts_unnormalized_and_degenerate_queries() {
    let f = frame(76.0, 75.0);
    assert!(f.intersects(Rect::new(200.0, 50.0, 100.0, 0.0)));
    // Horizontal line along the top edge.
    assert!(f.intersects(Rect::new(0.0, 0.0, 500.0, 0.0)));
    // Point probe.
    assert!(f.intersects(Rect::new(76.0, 0.0, 76.0, 0.0)));
    assert!(!f.intersects(Rect::new(151.0, 0.0, 151.0, 0.0)));
}

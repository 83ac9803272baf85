//! Bend handle derivation and dragging

use elbow_router::routing::path::segments_from_points;
use elbow_router::{
    apply_adjustment, compute_routing, derive_adjustment_points, ConnectionSite, ConnectorPath,
    Element, Orientation, Point, Rectangle, RouteRequest, RoutingConfig, RoutingError, ShapeKind,
    Strategy,
};
use pretty_assertions::assert_eq;

fn path_through(coords: &[(f64, f64)]) -> ConnectorPath {
    let points: Vec<Point> = coords.iter().map(|&(x, y)| Point::new(x, y)).collect();
    ConnectorPath::new(
        segments_from_points(&points),
        ConnectionSite::new("start", points[0], 0.0),
        ConnectionSite::new("end", points[points.len() - 1], 180.0),
        Strategy::SameAxisMidline,
        false,
    )
}

fn documented_route() -> ConnectorPath {
    let a = Element::shape("a", ShapeKind::Rectangle, Rectangle::new(100.0, 100.0, 100.0, 80.0));
    let b = Element::shape("b", ShapeKind::Ellipse, Rectangle::new(400.0, 100.0, 100.0, 100.0));
    let request = RouteRequest::new(&a, &b).with_sites(Some("right"), Some("left"));
    compute_routing(&request, &[a.clone(), b.clone()], &RoutingConfig::default()).unwrap()
}

#[test]
fn test_routed_z_exposes_midline_handle() {
    let path = documented_route();
    let handles = derive_adjustment_points("c1", &path);

    assert_eq!(handles.len(), 1);
    assert_eq!(handles[0].id, "c1:bend:1");
    assert_eq!(handles[0].point, Point::new(300.0, 145.0));
    assert_eq!(handles[0].axis, Orientation::Horizontal);
    assert_eq!(handles[0].segment_start, Point::new(300.0, 140.0));
    assert_eq!(handles[0].segment_end, Point::new(300.0, 150.0));
}

#[test]
fn test_drag_then_derive_shows_moved_handle() {
    let path = documented_route();
    let moved = apply_adjustment(&path, "c1:bend:1", Point::new(320.0, 999.0)).unwrap();
    let handles = derive_adjustment_points("c1", &moved);

    assert_eq!(handles.len(), 1);
    assert_eq!(handles[0].point, Point::new(320.0, 145.0));
    assert_eq!(handles[0].segment_start, Point::new(320.0, 140.0));
    assert_eq!(handles[0].segment_end, Point::new(320.0, 150.0));
    assert_eq!(moved.path_data(), "M 200 140 L 320 140 L 320 150 L 400 150");
}

#[test]
fn test_drag_leaves_distant_bends_alone() {
    let path = path_through(&[
        (0.0, 0.0),
        (10.0, 0.0),
        (10.0, 10.0),
        (20.0, 10.0),
        (20.0, 20.0),
        (30.0, 20.0),
        (30.0, 30.0),
        (40.0, 30.0),
    ]);
    let before = derive_adjustment_points("c", &path);
    assert_eq!(before.len(), 5);

    let moved = apply_adjustment(&path, "c:bend:3", Point::new(25.0, -100.0)).unwrap();
    let after = derive_adjustment_points("c", &moved);
    assert_eq!(after.len(), 5);

    // Bend 3 moves, its neighbours stretch, bends 1 and 5 stay put
    assert_eq!(after[2].point, Point::new(25.0, 15.0));
    assert_eq!(after[0], before[0]);
    assert_eq!(after[4], before[4]);
    // Adjacent handles slide along their own segment only
    assert_eq!(after[1].point.y, before[1].point.y);
    assert_eq!(after[3].point.y, before[3].point.y);

    let points = moved.points();
    assert_eq!(points[0], Point::new(0.0, 0.0));
    assert_eq!(points[7], Point::new(40.0, 30.0));
}

#[test]
fn test_horizontal_bend_keeps_its_x_coordinates() {
    let path = path_through(&[(0.0, 0.0), (0.0, 10.0), (20.0, 10.0), (20.0, 30.0)]);
    let handles = derive_adjustment_points("c", &path);
    let handle = &handles[0];
    assert_eq!(handle.axis, Orientation::Vertical);

    let moved = apply_adjustment(&path, &handle.id, Point::new(999.0, 50.0)).unwrap();
    let bend = moved.segments[1];
    assert_eq!(bend.start, Point::new(0.0, 50.0));
    assert_eq!(bend.end, Point::new(20.0, 50.0));
    assert!(moved.segments.iter().all(|s| s.is_axis_aligned()));
}

#[test]
fn test_vertical_bend_keeps_its_y_coordinates() {
    let path = documented_route();
    let moved = apply_adjustment(&path, "c1:bend:1", Point::new(250.0, -40.0)).unwrap();
    let bend = moved.segments[1];
    assert_eq!(bend.start.y, 140.0);
    assert_eq!(bend.end.y, 150.0);
    assert_eq!(bend.start.x, 250.0);
}

#[test]
fn test_large_drag_is_not_clamped() {
    let path = documented_route();
    let moved = apply_adjustment(&path, "c1:bend:1", Point::new(150.0, 0.0)).unwrap();
    // First leg now runs backwards into the start shape; the next re-route fixes it
    assert_eq!(moved.segments[0].end, Point::new(150.0, 140.0));
    assert!(moved.segments.iter().all(|s| s.is_axis_aligned()));
}

#[test]
fn test_bad_handle_ids() {
    let path = documented_route();
    assert_eq!(
        apply_adjustment(&path, "c1-bend-1", Point::new(0.0, 0.0)),
        Err(RoutingError::invalid_adjustment("c1-bend-1"))
    );
    assert_eq!(
        apply_adjustment(&path, "c1:bend:2", Point::new(0.0, 0.0)),
        Err(RoutingError::adjustment_not_found("c1:bend:2"))
    );
}

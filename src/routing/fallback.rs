//! Best-effort route used when every candidate collides

use tracing::warn;

use super::candidates::{Endpoint, RoutingCandidate};
use super::config::RoutingConfig;
use super::path::Strategy;
use super::types::Point;

/// Large-offset route: exit the start along its own direction, cross over,
/// then run straight into the end. Never collision tested.
pub fn fallback_route(start: &Endpoint, end: &Endpoint, config: &RoutingConfig) -> RoutingCandidate {
    let axis = start.axis();
    let inside = start.bounds.clearance_from(start.point, start.direction);
    let offset = config
        .fallback_offset
        .max(inside + config.perimeter_clearance);
    let leg = start.point.along(axis) + start.direction.sign() * offset;

    warn!(
        from_x = start.point.x,
        from_y = start.point.y,
        to_x = end.point.x,
        to_y = end.point.y,
        "no collision-free route, using best-effort fallback"
    );

    RoutingCandidate::from_points(
        Strategy::Fallback,
        &[
            start.point,
            Point::on_axis(axis, leg, start.point.along(axis.perpendicular())),
            Point::on_axis(axis, leg, end.point.along(axis.perpendicular())),
            end.point,
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::types::{Direction, Rectangle};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fallback_uses_large_offset() {
        let config = RoutingConfig::default();
        let start = Endpoint {
            point: Point::new(100.0, 50.0),
            bounds: Rectangle::new(0.0, 0.0, 100.0, 100.0),
            direction: Direction::Right,
        };
        let end = Endpoint {
            point: Point::new(300.0, 250.0),
            bounds: Rectangle::new(300.0, 200.0, 100.0, 100.0),
            direction: Direction::Left,
        };
        let route = fallback_route(&start, &end, &config);

        assert_eq!(route.strategy, Strategy::Fallback);
        assert_eq!(route.segments.len(), 3);
        assert_eq!(route.segments[0].end, Point::new(180.0, 50.0));
        assert_eq!(route.segments[1].end, Point::new(180.0, 250.0));
        assert_eq!(route.segments[2].end, end.point);
    }

    #[test]
    fn test_fallback_offset_clears_inset_site() {
        let config = RoutingConfig::default().with_fallback_offset(10.0);
        let start = Endpoint {
            point: Point::new(50.0, 0.0),
            bounds: Rectangle::new(0.0, 0.0, 100.0, 100.0),
            direction: Direction::Down,
        };
        let end = Endpoint {
            point: Point::new(400.0, 50.0),
            bounds: Rectangle::new(400.0, 0.0, 50.0, 100.0),
            direction: Direction::Left,
        };
        let route = fallback_route(&start, &end, &config);
        assert_eq!(route.segments[0].end, Point::new(50.0, 120.0));
    }
}

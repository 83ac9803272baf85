//! Path synthesis: candidate orthogonal routes between two sites
//!
//! Candidates are emitted most-preferred first. The primary candidate depends
//! on how the two outward directions relate:
//!
//! - same axis, facing each other with room: exit both, meet at the midline
//! - same axis, facing the same way: meet on a shared leg beyond the farther exit
//! - same axis, exits crossing: wrap through the channel between the shapes
//! - perpendicular axes: exit the start, turn once, run into the end
//!
//! Two perimeter-hugging bridges follow as alternates.

use super::config::RoutingConfig;
use super::path::{segments_from_points, simplify_points, Strategy};
use super::sites::ConnectionSite;
use super::types::{Direction, Orientation, Point, Rectangle, Segment};

/// One side of a connector: where it attaches and which way it leaves
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Endpoint {
    pub point: Point,
    pub bounds: Rectangle,
    pub direction: Direction,
}

impl Endpoint {
    /// Resolve a site on a shape.
    ///
    /// Center sites have no outward normal; they leave toward `other`.
    pub fn new(site: &ConnectionSite, bounds: Rectangle, other: Point) -> Self {
        let direction = site
            .direction()
            .unwrap_or_else(|| Direction::toward(site.point, other));
        Self {
            point: site.point,
            bounds,
            direction,
        }
    }

    pub fn axis(&self) -> Orientation {
        self.direction.orientation()
    }

    /// Distance travelled outward before the first turn.
    ///
    /// At least the minimum exit clearance, and always far enough to leave the
    /// shape's own bounding box by the perimeter clearance.
    pub fn exit_offset(&self, config: &RoutingConfig) -> f64 {
        let inside = self.bounds.clearance_from(self.point, self.direction);
        config
            .min_exit_clearance
            .max(inside + config.perimeter_clearance)
    }

    /// Coordinate on the endpoint's own axis where the exit leg ends
    pub fn exit(&self, config: &RoutingConfig) -> f64 {
        self.point.along(self.axis()) + self.direction.sign() * self.exit_offset(config)
    }

    /// Coordinate on the axis perpendicular to `axis`
    fn cross(&self, axis: Orientation) -> f64 {
        self.point.along(axis.perpendicular())
    }
}

/// A candidate route, not yet collision tested
#[derive(Debug, Clone, PartialEq)]
pub struct RoutingCandidate {
    pub strategy: Strategy,
    pub segments: Vec<Segment>,
}

impl RoutingCandidate {
    /// Build from raw vertices; repeated and collinear vertices are dropped
    pub fn from_points(strategy: Strategy, points: &[Point]) -> Self {
        Self {
            strategy,
            segments: segments_from_points(&simplify_points(points)),
        }
    }
}

/// All candidates for a site pair, most preferred first, without duplicates
pub fn synthesize(
    start: &Endpoint,
    end: &Endpoint,
    config: &RoutingConfig,
) -> Vec<RoutingCandidate> {
    let primary = if start.axis() == end.axis() {
        same_axis(start, end, config)
    } else {
        mixed_axis(start, end, config)
    };

    let mut candidates = vec![primary];
    for alternate in [
        perimeter(start, end, Strategy::StartPerimeter, config),
        perimeter(start, end, Strategy::EndPerimeter, config),
    ] {
        if !candidates.iter().any(|c| c.segments == alternate.segments) {
            candidates.push(alternate);
        }
    }
    candidates
}

fn same_axis(start: &Endpoint, end: &Endpoint, config: &RoutingConfig) -> RoutingCandidate {
    let axis = start.axis();
    let (s, e) = (start.point, end.point);
    let (cs, ce) = (start.cross(axis), end.cross(axis));
    let xs = start.exit(config);
    let xe = end.exit(config);
    let sign = start.direction.sign();

    if start.direction == end.direction {
        let shared = if sign > 0.0 { xs.max(xe) } else { xs.min(xe) };
        return RoutingCandidate::from_points(
            Strategy::SameAxisOuter,
            &[
                s,
                Point::on_axis(axis, shared, cs),
                Point::on_axis(axis, shared, ce),
                e,
            ],
        );
    }

    if (xe - xs) * sign >= 0.0 {
        let mid = (xs + xe) / 2.0;
        return RoutingCandidate::from_points(
            Strategy::SameAxisMidline,
            &[
                s,
                Point::on_axis(axis, xs, cs),
                Point::on_axis(axis, mid, cs),
                Point::on_axis(axis, mid, ce),
                Point::on_axis(axis, xe, ce),
                e,
            ],
        );
    }

    let channel = cross_channel(start, end, axis, config);
    RoutingCandidate::from_points(
        Strategy::SameAxisWrap,
        &[
            s,
            Point::on_axis(axis, xs, cs),
            Point::on_axis(axis, xs, channel),
            Point::on_axis(axis, xe, channel),
            Point::on_axis(axis, xe, ce),
            e,
        ],
    )
}

/// Cross-axis coordinate of the gap between the two shapes, or just past both
/// when they overlap on that axis
fn cross_channel(start: &Endpoint, end: &Endpoint, axis: Orientation, config: &RoutingConfig) -> f64 {
    let cross = axis.perpendicular();
    let (s_lo, s_hi) = start.bounds.span(cross);
    let (e_lo, e_hi) = end.bounds.span(cross);
    if s_hi <= e_lo {
        (s_hi + e_lo) / 2.0
    } else if e_hi <= s_lo {
        (e_hi + s_lo) / 2.0
    } else {
        s_hi.max(e_hi) + config.perimeter_clearance
    }
}

fn mixed_axis(start: &Endpoint, end: &Endpoint, config: &RoutingConfig) -> RoutingCandidate {
    let axis = start.axis();
    let xs = start.exit(config);
    let target = end.point.along(axis);
    let turn = if start.direction.sign() > 0.0 {
        xs.max(target)
    } else {
        xs.min(target)
    };

    RoutingCandidate::from_points(
        Strategy::MixedAxis,
        &[
            start.point,
            Point::on_axis(axis, turn, start.cross(axis)),
            Point::on_axis(axis, turn, end.cross(axis)),
            end.point,
        ],
    )
}

/// Bridge parallel to one endpoint's outward axis along that shape's clearance band.
///
/// The band side nearer to the opposite endpoint is used; ties take the low side.
fn perimeter(
    start: &Endpoint,
    end: &Endpoint,
    strategy: Strategy,
    config: &RoutingConfig,
) -> RoutingCandidate {
    let (hug, other) = match strategy {
        Strategy::EndPerimeter => (end, start),
        _ => (start, end),
    };
    let axis = hug.axis();
    let (lo, hi) = hug
        .bounds
        .inflate(config.perimeter_clearance)
        .span(axis.perpendicular());
    let target = other.cross(axis);
    let band = if (target - lo).abs() <= (target - hi).abs() {
        lo
    } else {
        hi
    };

    RoutingCandidate::from_points(
        strategy,
        &[
            start.point,
            Point::on_axis(axis, start.point.along(axis), band),
            Point::on_axis(axis, end.point.along(axis), band),
            end.point,
        ],
    )
}

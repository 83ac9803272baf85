//! Routed connector paths

use std::fmt::Write as _;

use super::sites::ConnectionSite;
use super::types::{Point, Segment};

/// Which routing strategy produced a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Opposed sites with room between them: exit, cross at the midline, enter
    SameAxisMidline,
    /// Sites facing the same way: shared leg beyond the farther exit
    SameAxisOuter,
    /// Opposed sites whose exits cross: detour through the channel between shapes
    SameAxisWrap,
    /// Sites on perpendicular axes: exit, turn once, enter
    MixedAxis,
    /// Bridge along the clearance band of the start shape
    StartPerimeter,
    /// Bridge along the clearance band of the end shape
    EndPerimeter,
    /// Unchecked large-offset route used when every candidate collides
    Fallback,
}

impl Strategy {
    pub fn name(self) -> &'static str {
        match self {
            Strategy::SameAxisMidline => "same-axis-midline",
            Strategy::SameAxisOuter => "same-axis-outer",
            Strategy::SameAxisWrap => "same-axis-wrap",
            Strategy::MixedAxis => "mixed-axis",
            Strategy::StartPerimeter => "start-perimeter",
            Strategy::EndPerimeter => "end-perimeter",
            Strategy::Fallback => "fallback",
        }
    }
}

/// The externally visible result of a routing call
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorPath {
    pub segments: Vec<Segment>,
    pub start_site: ConnectionSite,
    pub end_site: ConnectionSite,
    pub strategy: Strategy,
    /// Set when no candidate cleared every obstacle
    pub best_effort: bool,
}

impl ConnectorPath {
    pub fn new(
        segments: Vec<Segment>,
        start_site: ConnectionSite,
        end_site: ConnectionSite,
        strategy: Strategy,
        best_effort: bool,
    ) -> Self {
        Self {
            segments,
            start_site,
            end_site,
            strategy,
            best_effort,
        }
    }

    /// Whether the path may overlap obstacles
    pub fn is_best_effort(&self) -> bool {
        self.best_effort
    }

    /// Vertices in order, from the start site to the end site
    pub fn points(&self) -> Vec<Point> {
        let mut points = Vec::with_capacity(self.segments.len() + 1);
        if let Some(first) = self.segments.first() {
            points.push(first.start);
        }
        points.extend(self.segments.iter().map(|s| s.end));
        points
    }

    /// Move/line-to encoding: `M x y L x y ...`
    pub fn path_data(&self) -> String {
        points_to_path_data(&self.points())
    }
}

/// Encode vertices as `M x y L x y ...`
pub fn points_to_path_data(points: &[Point]) -> String {
    let mut d = String::new();
    for (i, p) in points.iter().enumerate() {
        let command = if i == 0 { "M" } else { " L" };
        let _ = write!(d, "{} {} {}", command, p.x, p.y);
    }
    d
}

/// Consecutive vertex pairs as segments
pub fn segments_from_points(points: &[Point]) -> Vec<Segment> {
    points
        .windows(2)
        .map(|pair| Segment::new(pair[0], pair[1]))
        .collect()
}

/// Drop repeated vertices and vertices in the middle of a straight run.
///
/// The first and last points are always kept.
pub fn simplify_points(points: &[Point]) -> Vec<Point> {
    let mut result: Vec<Point> = Vec::with_capacity(points.len());
    for &p in points {
        // A backtracking run can expose another straight triple, so keep popping
        while let [.., a, b] = result.as_slice() {
            let straight = (a.x == b.x && b.x == p.x) || (a.y == b.y && b.y == p.y);
            if !straight {
                break;
            }
            result.pop();
        }
        if result.last() != Some(&p) {
            result.push(p);
        }
    }

    if result.len() < 2 {
        // Start and end coincide
        if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
            return vec![first, last];
        }
    }
    result
}

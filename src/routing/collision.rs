//! Sampled collision testing of candidate routes
//!
//! A segment enters a rectangle when an endpoint or one of its evenly spaced
//! interior samples lies strictly inside. Touching a boundary is allowed, so
//! connectors may end exactly on an edge. Very thin obstacles falling between
//! two samples are missed; raise `sample_count` to tighten the test.

use tracing::trace;

use super::candidates::{Endpoint, RoutingCandidate};
use super::obstacles::Obstacle;
use super::types::{Rectangle, Segment};

/// Why a candidate was rejected
#[derive(Debug, Clone, PartialEq)]
pub enum Collision {
    /// Segment passes through another shape
    Obstacle { segment: usize, bounds: Rectangle },
    /// Segment re-enters the start shape
    StartShape { segment: usize },
    /// Segment re-enters the end shape
    EndShape { segment: usize },
}

/// Strict-containment test over endpoints and interior samples
pub fn segment_enters(segment: &Segment, area: &Rectangle, sample_count: usize) -> bool {
    area.contains_strictly(segment.start)
        || area.contains_strictly(segment.end)
        || samples_enter(segment, area, sample_count)
}

fn samples_enter(segment: &Segment, area: &Rectangle, sample_count: usize) -> bool {
    segment
        .interior_samples(sample_count)
        .any(|p| area.contains_strictly(p))
}

/// First collision of a route, in segment order.
///
/// The leg touching a site is exempt from its own shape when it travels along
/// the site's outward normal. Otherwise that leg is tested with the site
/// point excluded, and every other leg is tested against both endpoint shapes
/// in full.
pub fn find_collision(
    segments: &[Segment],
    obstacles: &[Obstacle],
    start: &Endpoint,
    end: &Endpoint,
    sample_count: usize,
) -> Option<Collision> {
    let last = segments.len().saturating_sub(1);

    for (index, segment) in segments.iter().enumerate() {
        if let Some(obstacle) = obstacles
            .iter()
            .find(|o| segment_enters(segment, &o.bounds, sample_count))
        {
            return Some(Collision::Obstacle {
                segment: index,
                bounds: obstacle.bounds,
            });
        }

        let enters_start = if index == 0 {
            segment.direction() != Some(start.direction)
                && (start.bounds.contains_strictly(segment.end)
                    || samples_enter(segment, &start.bounds, sample_count))
        } else {
            segment_enters(segment, &start.bounds, sample_count)
        };
        if enters_start {
            return Some(Collision::StartShape { segment: index });
        }

        let enters_end = if index == last {
            segment.direction() != Some(end.direction.opposite())
                && (end.bounds.contains_strictly(segment.start)
                    || samples_enter(segment, &end.bounds, sample_count))
        } else {
            segment_enters(segment, &end.bounds, sample_count)
        };
        if enters_end {
            return Some(Collision::EndShape { segment: index });
        }
    }
    None
}

/// The first candidate, in emission order, that clears everything
pub fn first_clear(
    candidates: Vec<RoutingCandidate>,
    obstacles: &[Obstacle],
    start: &Endpoint,
    end: &Endpoint,
    sample_count: usize,
) -> Option<RoutingCandidate> {
    candidates.into_iter().find(|candidate| {
        match find_collision(&candidate.segments, obstacles, start, end, sample_count) {
            Some(collision) => {
                trace!(strategy = candidate.strategy.name(), ?collision, "candidate rejected");
                false
            }
            None => true,
        }
    })
}

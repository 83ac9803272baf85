//! Bend handles for manual path adjustment
//!
//! A bend is an interior segment perpendicular to both of its neighbours. Each
//! bend exposes one handle at its midpoint that slides along the neighbours'
//! axis. Dragging shifts the whole bend and stretches the two neighbours; their
//! far vertices stay put. Adjusted paths are not collision tested.

use super::error::RoutingError;
use super::path::ConnectorPath;
use super::types::{Orientation, Point, Segment};

const BEND_MARKER: &str = ":bend:";

/// A draggable handle on a bend segment
#[derive(Debug, Clone, PartialEq)]
pub struct AdjustmentPoint {
    /// `<connector-id>:bend:<segment-index>`
    pub id: String,
    pub point: Point,
    /// The only axis the handle may move along
    pub axis: Orientation,
    pub segment_index: usize,
    pub segment_start: Point,
    pub segment_end: Point,
}

/// Movement axis of the handle on segment `index`, `None` if it is not a bend
fn bend_axis(segments: &[Segment], index: usize) -> Option<Orientation> {
    if index == 0 || index + 1 >= segments.len() {
        return None;
    }
    let own = segments[index].orientation()?;
    let before = segments[index - 1].orientation();
    let after = segments[index + 1].orientation();
    (before != Some(own) && after != Some(own)).then(|| own.perpendicular())
}

/// Handle id for a bend segment
pub fn handle_id(connector_id: &str, segment_index: usize) -> String {
    format!("{}{}{}", connector_id, BEND_MARKER, segment_index)
}

/// One handle per bend, in segment order
pub fn derive_adjustment_points(connector_id: &str, path: &ConnectorPath) -> Vec<AdjustmentPoint> {
    (0..path.segments.len())
        .filter_map(|index| {
            bend_axis(&path.segments, index).map(|axis| {
                let segment = path.segments[index];
                AdjustmentPoint {
                    id: handle_id(connector_id, index),
                    point: segment.midpoint(),
                    axis,
                    segment_index: index,
                    segment_start: segment.start,
                    segment_end: segment.end,
                }
            })
        })
        .collect()
}

/// Split a handle id into connector id and segment index
pub fn parse_handle_id(adjustment_id: &str) -> Result<(&str, usize), RoutingError> {
    let invalid = || RoutingError::invalid_adjustment(adjustment_id);
    let (connector, index) = adjustment_id.rsplit_once(BEND_MARKER).ok_or_else(invalid)?;
    if connector.is_empty() {
        return Err(invalid());
    }
    let index = index.parse::<usize>().map_err(|_| invalid())?;
    Ok((connector, index))
}

/// Drag a bend handle to `new_position`.
///
/// The position is projected onto the handle's axis, so the bend moves only
/// perpendicular to itself. Neighbour lengths are not clamped and may reach
/// zero or reverse until the next full re-route.
///
/// Bends that share a vertex with the dragged one slide along their own
/// segment by half the offset; all other bends keep their positions.
///
/// Only the segment index of `adjustment_id` is used. The connector prefix is
/// not checked against `path`; callers holding several connectors resolve it
/// with [`parse_handle_id`] first.
pub fn apply_adjustment(
    path: &ConnectorPath,
    adjustment_id: &str,
    new_position: Point,
) -> Result<ConnectorPath, RoutingError> {
    let (_, index) = parse_handle_id(adjustment_id)?;
    let axis = bend_axis(&path.segments, index)
        .ok_or_else(|| RoutingError::adjustment_not_found(adjustment_id))?;

    let original = path.segments[index].midpoint();
    let (dx, dy) = match axis {
        Orientation::Horizontal => (new_position.x - original.x, 0.0),
        Orientation::Vertical => (0.0, new_position.y - original.y),
    };

    let mut segments = path.segments.clone();
    let bend = &mut segments[index];
    bend.start = bend.start.translate(dx, dy);
    bend.end = bend.end.translate(dx, dy);
    let (bend_start, bend_end) = (bend.start, bend.end);
    segments[index - 1].end = bend_start;
    segments[index + 1].start = bend_end;

    Ok(ConnectorPath {
        segments,
        ..path.clone()
    })
}

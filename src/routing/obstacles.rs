//! Obstacle set construction

use super::element::{Element, ElementId, ShapeKind};
use super::error::RoutingError;
use super::types::Rectangle;

/// A shape a routed path must not pass through
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub bounds: Rectangle,
    pub kind: ShapeKind,
}

/// Collect obstacles from the full element list.
///
/// The two endpoints, the connector itself and non-obstructing kinds are
/// skipped. Groups count as one obstacle covering all their children.
pub fn build_obstacles(
    elements: &[Element],
    start: &ElementId,
    end: &ElementId,
    connector: Option<&ElementId>,
) -> Result<Vec<Obstacle>, RoutingError> {
    let mut obstacles = Vec::new();
    for element in elements {
        if &element.id == start || &element.id == end || Some(&element.id) == connector {
            continue;
        }
        if !element.kind.is_obstructing() {
            continue;
        }
        obstacles.push(Obstacle {
            bounds: element.resolved_bounds()?,
            kind: element.kind.clone(),
        });
    }
    Ok(obstacles)
}

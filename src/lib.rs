//! Elbow Router - orthogonal connector routing for diagram editors
//!
//! This library routes connectors between shapes as horizontal and vertical
//! segments that avoid every other shape, exposes bend handles for manual
//! adjustment, and reads and writes the `M x y L x y` path encoding.
//!
//! # Example
//!
//! ```rust
//! use elbow_router::{compute_routing, Element, Rectangle, RouteRequest, RoutingConfig, ShapeKind};
//!
//! let a = Element::shape("a", ShapeKind::Rectangle, Rectangle::new(100.0, 100.0, 100.0, 80.0));
//! let b = Element::shape("b", ShapeKind::Ellipse, Rectangle::new(400.0, 100.0, 100.0, 100.0));
//! let elements = vec![a.clone(), b.clone()];
//!
//! let request = RouteRequest::new(&a, &b).with_sites(Some("right"), Some("left"));
//! let path = compute_routing(&request, &elements, &RoutingConfig::default()).unwrap();
//! assert_eq!(path.path_data(), "M 200 140 L 300 140 L 300 150 L 400 150");
//! ```

pub mod error;
pub mod parser;
pub mod routing;
pub mod scene;

pub use error::PathDataError;
pub use parser::parse_path_data;
pub use routing::{
    apply_adjustment, compute_best_site_pair, compute_routing, compute_routing_with,
    derive_adjustment_points, AdjustmentPoint, ConnectionSite, ConnectorPath, Direction, Element,
    ElementId, Orientation, ParametricCatalog, Point, Rectangle, RouteRequest, RoutingConfig,
    RoutingError, Segment, ShapeKind, SiteCatalog, SitePair, Strategy,
};
pub use scene::{RoutedConnector, Scene, SceneConnector, SceneError};

/// Load a TOML scene and route every connector in it
pub fn route_scene(source: &str) -> Result<Vec<RoutedConnector>, SceneError> {
    let scene = Scene::from_str(source)?;
    Ok(scene.route_all()?)
}

/// Rebuild a connector path from its `M x y L x y` encoding.
///
/// Sites and strategy are not part of the encoding; the caller supplies them.
pub fn path_from_data(
    data: &str,
    start_site: ConnectionSite,
    end_site: ConnectionSite,
    strategy: Strategy,
) -> Result<ConnectorPath, Vec<PathDataError>> {
    let points = parse_path_data(data)?;
    Ok(ConnectorPath::new(
        routing::path::segments_from_points(&points),
        start_site,
        end_site,
        strategy,
        false,
    ))
}

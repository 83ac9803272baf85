//! Orthogonal connector routing
//!
//! Routes a connector between two shapes as a sequence of horizontal and
//! vertical segments that avoids every other shape on the canvas. The pipeline
//! runs site lookup, site pair selection, obstacle collection, candidate
//! synthesis and collision testing, with a best-effort fallback when nothing is
//! clear. Every call is a pure function of its inputs.

pub mod candidates;
pub mod collision;
pub mod config;
pub mod element;
pub mod error;
pub mod fallback;
pub mod handles;
pub mod obstacles;
pub mod path;
pub mod selector;
pub mod sites;
pub mod types;

pub use candidates::{Endpoint, RoutingCandidate};
pub use config::RoutingConfig;
pub use element::{Element, ElementId, ShapeKind};
pub use error::RoutingError;
pub use handles::{apply_adjustment, derive_adjustment_points, AdjustmentPoint};
pub use path::{ConnectorPath, Strategy};
pub use selector::SitePair;
pub use sites::{ConnectionSite, ParametricCatalog, SiteCatalog};
pub use types::*;

use tracing::debug;

/// What to connect: two shapes, optional site names and the connector's own id
#[derive(Debug, Clone, Copy)]
pub struct RouteRequest<'a> {
    pub start: &'a Element,
    pub end: &'a Element,
    pub start_site: Option<&'a str>,
    pub end_site: Option<&'a str>,
    /// Set when re-routing an existing connector so it is not its own obstacle
    pub connector: Option<&'a ElementId>,
}

impl<'a> RouteRequest<'a> {
    pub fn new(start: &'a Element, end: &'a Element) -> Self {
        Self {
            start,
            end,
            start_site: None,
            end_site: None,
            connector: None,
        }
    }

    /// Request named sites; both must resolve or selection is automatic
    pub fn with_sites(mut self, start_site: Option<&'a str>, end_site: Option<&'a str>) -> Self {
        self.start_site = start_site;
        self.end_site = end_site;
        self
    }

    pub fn with_connector(mut self, connector: &'a ElementId) -> Self {
        self.connector = Some(connector);
        self
    }
}

/// Route a connector using the built-in site catalog
pub fn compute_routing(
    request: &RouteRequest<'_>,
    elements: &[Element],
    config: &RoutingConfig,
) -> Result<ConnectorPath, RoutingError> {
    compute_routing_with(&ParametricCatalog, request, elements, config)
}

/// Route a connector with a caller-provided site catalog.
///
/// Always yields a path for valid input. When every candidate collides the
/// result is marked best-effort instead of failing.
pub fn compute_routing_with<C: SiteCatalog + ?Sized>(
    catalog: &C,
    request: &RouteRequest<'_>,
    elements: &[Element],
    config: &RoutingConfig,
) -> Result<ConnectorPath, RoutingError> {
    let start_bounds = request.start.resolved_bounds()?;
    let end_bounds = request.end.resolved_bounds()?;

    let start_sites = sites::resolve_sites(catalog, &request.start.kind, &start_bounds);
    let end_sites = sites::resolve_sites(catalog, &request.end.kind, &end_bounds);

    let pair = selector::select_site_pair(
        &start_sites,
        &end_sites,
        request.start_site,
        request.end_site,
    )
    .ok_or_else(|| RoutingError::no_sites(request.start.id.as_str()))?;
    debug!(
        start = %request.start.id,
        end = %request.end.id,
        start_site = %pair.start.id,
        end_site = %pair.end.id,
        "selected connection sites"
    );

    let obstacles = obstacles::build_obstacles(
        elements,
        &request.start.id,
        &request.end.id,
        request.connector,
    )?;

    let start = Endpoint::new(&pair.start, start_bounds, pair.end.point);
    let end = Endpoint::new(&pair.end, end_bounds, pair.start.point);

    let candidates = candidates::synthesize(&start, &end, config);
    let (route, best_effort) =
        match collision::first_clear(candidates, &obstacles, &start, &end, config.sample_count) {
            Some(route) => (route, false),
            None => (fallback::fallback_route(&start, &end, config), true),
        };
    debug!(
        strategy = route.strategy.name(),
        segments = route.segments.len(),
        obstacles = obstacles.len(),
        best_effort,
        "routed connector"
    );

    Ok(ConnectorPath::new(
        route.segments,
        pair.start,
        pair.end,
        route.strategy,
        best_effort,
    ))
}

/// Automatic site selection without computing a path
pub fn compute_best_site_pair(start: &Element, end: &Element) -> Result<SitePair, RoutingError> {
    let start_bounds = start.resolved_bounds()?;
    let end_bounds = end.resolved_bounds()?;
    let start_sites = sites::resolve_sites(&ParametricCatalog, &start.kind, &start_bounds);
    let end_sites = sites::resolve_sites(&ParametricCatalog, &end.kind, &end_bounds);
    selector::select_site_pair(&start_sites, &end_sites, None, None)
        .ok_or_else(|| RoutingError::no_sites(start.id.as_str()))
}

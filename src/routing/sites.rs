//! Connection sites and the catalog that computes them
//!
//! A connection site is a named point on a shape's outline where a connector
//! may attach, together with the outward normal at that point. The catalog is
//! a pure function of shape kind and bounds.

use tracing::debug;

use super::element::ShapeKind;
use super::types::{Direction, Point, Rectangle};

/// A named, angled attachment point
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionSite {
    pub id: String,
    pub point: Point,
    /// Outward normal in degrees (0 = right, 90 = down); `None` for center sites
    pub angle: Option<f64>,
}

impl ConnectionSite {
    pub fn new(id: impl Into<String>, point: Point, angle: f64) -> Self {
        Self {
            id: id.into(),
            point,
            angle: Some(angle),
        }
    }

    /// A site without a meaningful outward direction
    pub fn center(id: impl Into<String>, point: Point) -> Self {
        Self {
            id: id.into(),
            point,
            angle: None,
        }
    }

    pub fn direction(&self) -> Option<Direction> {
        self.angle.map(Direction::from_angle)
    }
}

/// Source of connection sites for a shape.
///
/// Implementations must be deterministic and side-effect free.
pub trait SiteCatalog {
    fn compute(&self, kind: &ShapeKind, bounds: &Rectangle) -> Vec<ConnectionSite>;
}

/// Built-in catalog with parametric site formulas per shape kind
#[derive(Debug, Clone, Copy, Default)]
pub struct ParametricCatalog;

/// Edge midpoints in top, right, bottom, left order
pub fn rectangle_sites(bounds: &Rectangle) -> Vec<ConnectionSite> {
    let c = bounds.center();
    vec![
        ConnectionSite::new("top", Point::new(c.x, bounds.y), 270.0),
        ConnectionSite::new("right", Point::new(bounds.right(), c.y), 0.0),
        ConnectionSite::new("bottom", Point::new(c.x, bounds.bottom()), 90.0),
        ConnectionSite::new("left", Point::new(bounds.x, c.y), 180.0),
    ]
}

impl SiteCatalog for ParametricCatalog {
    fn compute(&self, kind: &ShapeKind, bounds: &Rectangle) -> Vec<ConnectionSite> {
        let Rectangle {
            x,
            y,
            width: w,
            height: h,
        } = *bounds;
        let c = bounds.center();
        let r = bounds.right();
        let b = bounds.bottom();

        match kind {
            ShapeKind::Rectangle
            | ShapeKind::RoundRectangle
            | ShapeKind::Diamond
            | ShapeKind::Octagon
            | ShapeKind::Image
            | ShapeKind::Text
            | ShapeKind::Line
            | ShapeKind::Group => rectangle_sites(bounds),
            ShapeKind::Ellipse => {
                let mut sites = rectangle_sites(bounds);
                sites.push(ConnectionSite::center("center", c));
                sites
            }
            // Apex at top center; slanted sides meet the bottom corners
            ShapeKind::Triangle => vec![
                ConnectionSite::new("top", Point::new(c.x, y), 270.0),
                ConnectionSite::new("left", Point::new(x + w * 0.25, c.y), 180.0),
                ConnectionSite::new("bottom_left", Point::new(x, b), 90.0),
                ConnectionSite::new("bottom", Point::new(c.x, b), 90.0),
                ConnectionSite::new("bottom_right", Point::new(r, b), 90.0),
                ConnectionSite::new("right", Point::new(x + w * 0.75, c.y), 0.0),
            ],
            // Right angle at bottom-left
            ShapeKind::RightTriangle => vec![
                ConnectionSite::new("top", Point::new(x, y), 270.0),
                ConnectionSite::new("left", Point::new(x, c.y), 180.0),
                ConnectionSite::new("bottom_left", Point::new(x, b), 90.0),
                ConnectionSite::new("bottom", Point::new(c.x, b), 90.0),
                ConnectionSite::new("bottom_right", Point::new(r, b), 90.0),
                ConnectionSite::new("right", c, 0.0),
            ],
            // Top edge shifted right by a quarter of the width
            ShapeKind::Parallelogram => {
                let skew = w * 0.25;
                vec![
                    ConnectionSite::new("top", Point::new(c.x + skew / 2.0, y), 270.0),
                    ConnectionSite::new("right", Point::new(r - skew / 2.0, c.y), 0.0),
                    ConnectionSite::new("bottom", Point::new(c.x - skew / 2.0, b), 90.0),
                    ConnectionSite::new("left", Point::new(x + skew / 2.0, c.y), 180.0),
                ]
            }
            // Top edge inset by a quarter of the width on both sides
            ShapeKind::Trapezoid => {
                let inset = w * 0.25;
                vec![
                    ConnectionSite::new("top", Point::new(c.x, y), 270.0),
                    ConnectionSite::new("right", Point::new(r - inset / 2.0, c.y), 0.0),
                    ConnectionSite::new("bottom", Point::new(c.x, b), 90.0),
                    ConnectionSite::new("left", Point::new(x + inset / 2.0, c.y), 180.0),
                ]
            }
            ShapeKind::Pentagon => {
                let shoulder = y + h * 0.38;
                vec![
                    ConnectionSite::new("top", Point::new(c.x, y), 270.0),
                    ConnectionSite::new("left", Point::new(x, shoulder), 180.0),
                    ConnectionSite::new("bottom_left", Point::new(x + w * 0.19, b), 90.0),
                    ConnectionSite::new("bottom_right", Point::new(x + w * 0.81, b), 90.0),
                    ConnectionSite::new("right", Point::new(r, shoulder), 0.0),
                ]
            }
            // Flat top and bottom, pointed left and right
            ShapeKind::Hexagon => vec![
                ConnectionSite::new("top_left", Point::new(x + w * 0.25, y), 270.0),
                ConnectionSite::new("top_right", Point::new(x + w * 0.75, y), 270.0),
                ConnectionSite::new("right", Point::new(r, c.y), 0.0),
                ConnectionSite::new("bottom_right", Point::new(x + w * 0.75, b), 90.0),
                ConnectionSite::new("bottom_left", Point::new(x + w * 0.25, b), 90.0),
                ConnectionSite::new("left", Point::new(x, c.y), 180.0),
            ],
            ShapeKind::Other(name) => {
                debug!(kind = %name, "unknown shape kind, using rectangle sites");
                rectangle_sites(bounds)
            }
        }
    }
}

/// Sites for a shape, falling back to the rectangle set when the catalog yields none
pub fn resolve_sites<C: SiteCatalog + ?Sized>(
    catalog: &C,
    kind: &ShapeKind,
    bounds: &Rectangle,
) -> Vec<ConnectionSite> {
    let sites = catalog.compute(kind, bounds);
    if sites.is_empty() {
        debug!(kind = %kind, "catalog returned no sites, using rectangle sites");
        rectangle_sites(bounds)
    } else {
        sites
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(sites: &[ConnectionSite]) -> Vec<&str> {
        sites.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_rectangle_sites_are_edge_midpoints() {
        let sites = rectangle_sites(&Rectangle::new(100.0, 100.0, 100.0, 80.0));
        assert_eq!(ids(&sites), vec!["top", "right", "bottom", "left"]);
        assert_eq!(sites[0].point, Point::new(150.0, 100.0));
        assert_eq!(sites[1].point, Point::new(200.0, 140.0));
        assert_eq!(sites[2].point, Point::new(150.0, 180.0));
        assert_eq!(sites[3].point, Point::new(100.0, 140.0));
        assert_eq!(sites[1].direction(), Some(Direction::Right));
        assert_eq!(sites[0].direction(), Some(Direction::Up));
    }

    #[test]
    fn test_ellipse_has_center_site() {
        let bounds = Rectangle::new(400.0, 100.0, 100.0, 100.0);
        let sites = ParametricCatalog.compute(&ShapeKind::Ellipse, &bounds);
        assert_eq!(sites.len(), 5);
        assert_eq!(sites[3].point, Point::new(400.0, 150.0));
        assert_eq!(sites[4].angle, None);
        assert_eq!(sites[4].direction(), None);
    }

    #[test]
    fn test_unknown_kind_uses_rectangle_sites() {
        let bounds = Rectangle::new(0.0, 0.0, 40.0, 20.0);
        let sites = ParametricCatalog.compute(&ShapeKind::Other("cloud".to_string()), &bounds);
        assert_eq!(sites, rectangle_sites(&bounds));
    }

    #[test]
    fn test_triangle_side_sites() {
        let bounds = Rectangle::new(0.0, 0.0, 100.0, 60.0);
        let sites = ParametricCatalog.compute(&ShapeKind::Triangle, &bounds);
        let left = sites.iter().find(|s| s.id == "left").unwrap();
        assert_eq!(left.point, Point::new(25.0, 30.0));
        assert_eq!(left.direction(), Some(Direction::Left));
    }

    #[test]
    fn test_catalog_is_deterministic() {
        let bounds = Rectangle::new(3.0, 7.0, 90.0, 45.0);
        for kind in [ShapeKind::Hexagon, ShapeKind::Pentagon, ShapeKind::Parallelogram] {
            assert_eq!(
                ParametricCatalog.compute(&kind, &bounds),
                ParametricCatalog.compute(&kind, &bounds)
            );
        }
    }

    struct EmptyCatalog;

    impl SiteCatalog for EmptyCatalog {
        fn compute(&self, _kind: &ShapeKind, _bounds: &Rectangle) -> Vec<ConnectionSite> {
            vec![]
        }
    }

    #[test]
    fn test_empty_catalog_falls_back_to_rectangle() {
        let bounds = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        let sites = resolve_sites(&EmptyCatalog, &ShapeKind::Hexagon, &bounds);
        assert_eq!(ids(&sites), vec!["top", "right", "bottom", "left"]);
    }
}

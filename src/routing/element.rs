//! Canvas elements as seen by the router

use std::fmt;

use super::error::RoutingError;
use super::types::Rectangle;

/// Unique element identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementId(pub String);

impl ElementId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ElementId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Shape kinds the site catalog knows about.
///
/// `Other` carries any kind name the catalog cannot resolve; it routes like a
/// rectangle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rectangle,
    RoundRectangle,
    Ellipse,
    Triangle,
    RightTriangle,
    Diamond,
    Parallelogram,
    Trapezoid,
    Pentagon,
    Hexagon,
    Octagon,
    Image,
    Text,
    Line,
    Group,
    Other(String),
}

impl ShapeKind {
    /// Resolve a kind name; unrecognized names become `Other`
    pub fn from_name(name: &str) -> ShapeKind {
        match name.to_ascii_lowercase().as_str() {
            "rect" | "rectangle" => ShapeKind::Rectangle,
            "roundrect" | "round_rect" | "rounded_rectangle" => ShapeKind::RoundRectangle,
            "ellipse" | "circle" | "oval" => ShapeKind::Ellipse,
            "triangle" => ShapeKind::Triangle,
            "righttriangle" | "right_triangle" => ShapeKind::RightTriangle,
            "diamond" => ShapeKind::Diamond,
            "parallelogram" => ShapeKind::Parallelogram,
            "trapezoid" => ShapeKind::Trapezoid,
            "pentagon" => ShapeKind::Pentagon,
            "hexagon" => ShapeKind::Hexagon,
            "octagon" => ShapeKind::Octagon,
            "image" => ShapeKind::Image,
            "text" => ShapeKind::Text,
            "line" | "connector" => ShapeKind::Line,
            "group" => ShapeKind::Group,
            _ => ShapeKind::Other(name.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ShapeKind::Rectangle => "rect",
            ShapeKind::RoundRectangle => "roundRect",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Triangle => "triangle",
            ShapeKind::RightTriangle => "rightTriangle",
            ShapeKind::Diamond => "diamond",
            ShapeKind::Parallelogram => "parallelogram",
            ShapeKind::Trapezoid => "trapezoid",
            ShapeKind::Pentagon => "pentagon",
            ShapeKind::Hexagon => "hexagon",
            ShapeKind::Octagon => "octagon",
            ShapeKind::Image => "image",
            ShapeKind::Text => "text",
            ShapeKind::Line => "line",
            ShapeKind::Group => "group",
            ShapeKind::Other(name) => name,
        }
    }

    /// Text and free lines never block routing
    pub fn is_obstructing(&self) -> bool {
        !matches!(self, ShapeKind::Line | ShapeKind::Text)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A shape on the canvas, or a group of shapes
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub id: ElementId,
    pub kind: ShapeKind,
    /// Own geometry; ignored for elements with children
    pub bounds: Option<Rectangle>,
    pub children: Vec<Element>,
}

impl Element {
    /// A leaf shape with known bounds
    pub fn shape(id: impl Into<String>, kind: ShapeKind, bounds: Rectangle) -> Self {
        Self {
            id: ElementId::new(id),
            kind,
            bounds: Some(bounds),
            children: vec![],
        }
    }

    /// A group whose bounds derive from its children
    pub fn group(id: impl Into<String>, children: Vec<Element>) -> Self {
        Self {
            id: ElementId::new(id),
            kind: ShapeKind::Group,
            bounds: None,
            children,
        }
    }

    /// Bounding rectangle used for routing.
    ///
    /// Groups (and any element with children) use the union of their
    /// children's bounds. Missing or malformed geometry is a caller error.
    pub fn resolved_bounds(&self) -> Result<Rectangle, RoutingError> {
        let bounds = if self.children.is_empty() {
            if self.kind == ShapeKind::Group && self.bounds.is_none() {
                return Err(RoutingError::empty_group(self.id.as_str()));
            }
            self.bounds
                .ok_or_else(|| RoutingError::missing_bounds(self.id.as_str()))?
        } else {
            let mut children = self.children.iter();
            let mut union = match children.next() {
                Some(first) => first.resolved_bounds()?,
                None => return Err(RoutingError::empty_group(self.id.as_str())),
            };
            for child in children {
                union = union.union(&child.resolved_bounds()?);
            }
            union
        };

        if !bounds.is_valid() {
            return Err(RoutingError::invalid_bounds(
                self.id.as_str(),
                format!(
                    "x={} y={} width={} height={}",
                    bounds.x, bounds.y, bounds.width, bounds.height
                ),
            ));
        }
        Ok(bounds)
    }
}

//! Scene documents: shapes and connectors described in TOML
//!
//! ```toml
//! [routing]
//! min_exit_clearance = 40.0
//!
//! [[elements]]
//! id = "a"
//! kind = "rect"
//! x = 100.0
//! y = 100.0
//! width = 100.0
//! height = 80.0
//!
//! [[connectors]]
//! id = "c1"
//! from = "a"
//! to = "b"
//! from_site = "right"
//! ```

use std::collections::HashSet;
use std::path::Path;

use ariadne::{Color, Label, Report, ReportKind, Source};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::routing::{
    compute_routing, ConnectorPath, Element, ElementId, Rectangle, RouteRequest, RoutingConfig,
    RoutingError, ShapeKind,
};

/// Errors that can occur when loading or routing a scene
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Failed to read scene file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse scene TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("element '{element}' must give all of x, y, width and height or none of them")]
    IncompleteBounds { element: String },
    #[error("duplicate element id '{element}'")]
    DuplicateId { element: String },
    #[error(transparent)]
    Routing(#[from] RoutingError),
}

impl SceneError {
    /// Format the error against the scene source using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let span = match self {
            SceneError::Parse(err) => err.span(),
            _ => None,
        };
        let Some(span) = span else {
            return format!("Error: {}\n", self);
        };
        let message = match self {
            SceneError::Parse(err) => err.message().to_string(),
            other => other.to_string(),
        };

        let mut buf = Vec::new();
        let _ = Report::build(ReportKind::Error, filename, span.start)
            .with_message("Invalid scene document")
            .with_label(
                Label::new((filename, span))
                    .with_message(message)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

/// A connector to be routed between two top-level elements
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConnector {
    pub id: ElementId,
    pub from: ElementId,
    pub to: ElementId,
    pub from_site: Option<String>,
    pub to_site: Option<String>,
}

/// A connector together with its computed path
#[derive(Debug, Clone, PartialEq)]
pub struct RoutedConnector {
    pub id: ElementId,
    pub path: ConnectorPath,
}

/// Elements, connectors and routing settings loaded from one document
#[derive(Debug, Clone)]
pub struct Scene {
    pub config: RoutingConfig,
    pub elements: Vec<Element>,
    pub connectors: Vec<SceneConnector>,
}

/// TOML structure for deserializing scenes
#[derive(Deserialize)]
struct TomlScene {
    #[serde(default)]
    routing: RoutingConfig,
    #[serde(default)]
    elements: Vec<TomlElement>,
    #[serde(default)]
    connectors: Vec<TomlConnector>,
}

#[derive(Deserialize)]
struct TomlElement {
    id: String,
    kind: Option<String>,
    x: Option<f64>,
    y: Option<f64>,
    width: Option<f64>,
    height: Option<f64>,
    #[serde(default)]
    children: Vec<TomlElement>,
}

#[derive(Deserialize)]
struct TomlConnector {
    id: String,
    from: String,
    to: String,
    from_site: Option<String>,
    to_site: Option<String>,
}

impl TomlElement {
    fn into_element(self, seen: &mut HashSet<String>) -> Result<Element, SceneError> {
        if !seen.insert(self.id.clone()) {
            return Err(SceneError::DuplicateId { element: self.id });
        }

        let bounds = match (self.x, self.y, self.width, self.height) {
            (Some(x), Some(y), Some(w), Some(h)) => Some(Rectangle::new(x, y, w, h)),
            (None, None, None, None) => None,
            _ => return Err(SceneError::IncompleteBounds { element: self.id }),
        };

        let kind = match &self.kind {
            Some(name) => ShapeKind::from_name(name),
            None if !self.children.is_empty() => ShapeKind::Group,
            None => ShapeKind::Rectangle,
        };

        let children = self
            .children
            .into_iter()
            .map(|child| child.into_element(seen))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Element {
            id: ElementId::new(self.id),
            kind,
            bounds,
            children,
        })
    }
}

impl Scene {
    /// Load a scene from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a scene from a TOML string
    pub fn from_str(content: &str) -> Result<Self, SceneError> {
        let parsed: TomlScene = toml::from_str(content)?;

        let mut seen = HashSet::new();
        let elements = parsed
            .elements
            .into_iter()
            .map(|e| e.into_element(&mut seen))
            .collect::<Result<Vec<_>, _>>()?;

        let connectors = parsed
            .connectors
            .into_iter()
            .map(|c| SceneConnector {
                id: ElementId::new(c.id),
                from: ElementId::new(c.from),
                to: ElementId::new(c.to),
                from_site: c.from_site,
                to_site: c.to_site,
            })
            .collect();

        Ok(Scene {
            config: parsed.routing,
            elements,
            connectors,
        })
    }

    /// Look up a top-level element by id
    pub fn element(&self, id: &ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| &e.id == id)
    }

    /// Route one connector against every element in the scene
    pub fn route(&self, connector: &SceneConnector) -> Result<ConnectorPath, RoutingError> {
        let start = self
            .element(&connector.from)
            .ok_or_else(|| RoutingError::unknown_element(connector.from.as_str()))?;
        let end = self
            .element(&connector.to)
            .ok_or_else(|| RoutingError::unknown_element(connector.to.as_str()))?;

        let request = RouteRequest::new(start, end)
            .with_sites(connector.from_site.as_deref(), connector.to_site.as_deref())
            .with_connector(&connector.id);
        compute_routing(&request, &self.elements, &self.config)
    }

    /// Route every connector in document order
    pub fn route_all(&self) -> Result<Vec<RoutedConnector>, RoutingError> {
        self.connectors
            .iter()
            .map(|connector| {
                let path = self.route(connector)?;
                debug!(connector = %connector.id, path = %path.path_data(), "routed");
                Ok(RoutedConnector {
                    id: connector.id.clone(),
                    path,
                })
            })
            .collect()
    }
}

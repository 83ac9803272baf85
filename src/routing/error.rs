//! Error types for the routing engine

use thiserror::Error;

/// Contract violations reported by the routing engine.
///
/// Recoverable situations (unknown shape kinds, unknown site names, no
/// collision-free candidate) are never errors; they fall back silently.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RoutingError {
    /// Element has neither bounds nor children to derive them from
    #[error("element '{element}' has no bounds")]
    MissingBounds { element: String },

    /// Bounds with negative or non-finite values
    #[error("element '{element}' has invalid bounds: {reason}")]
    InvalidBounds { element: String, reason: String },

    /// Group element without any children
    #[error("group '{element}' has no children")]
    EmptyGroup { element: String },

    /// Endpoint identifier not present in the element collection
    #[error("unknown element '{element}'")]
    UnknownElement { element: String },

    /// Site catalog produced nothing and no fallback applied
    #[error("element '{element}' has no connection sites")]
    NoConnectionSites { element: String },

    /// Handle identifier not of the form `<connector>:bend:<index>`
    #[error("invalid adjustment handle id '{id}'")]
    InvalidAdjustmentId { id: String },

    /// Handle identifier names a segment that is not a bend
    #[error("no adjustment handle '{id}' on this path")]
    AdjustmentNotFound { id: String },
}

impl RoutingError {
    pub fn missing_bounds(element: impl Into<String>) -> Self {
        Self::MissingBounds {
            element: element.into(),
        }
    }

    pub fn invalid_bounds(element: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidBounds {
            element: element.into(),
            reason: reason.into(),
        }
    }

    pub fn empty_group(element: impl Into<String>) -> Self {
        Self::EmptyGroup {
            element: element.into(),
        }
    }

    pub fn unknown_element(element: impl Into<String>) -> Self {
        Self::UnknownElement {
            element: element.into(),
        }
    }

    pub fn no_sites(element: impl Into<String>) -> Self {
        Self::NoConnectionSites {
            element: element.into(),
        }
    }

    pub fn invalid_adjustment(id: impl Into<String>) -> Self {
        Self::InvalidAdjustmentId { id: id.into() }
    }

    pub fn adjustment_not_found(id: impl Into<String>) -> Self {
        Self::AdjustmentNotFound { id: id.into() }
    }

    /// The element this error refers to, if any
    pub fn element(&self) -> Option<&str> {
        match self {
            Self::MissingBounds { element }
            | Self::InvalidBounds { element, .. }
            | Self::EmptyGroup { element }
            | Self::UnknownElement { element }
            | Self::NoConnectionSites { element } => Some(element),
            Self::InvalidAdjustmentId { .. } | Self::AdjustmentNotFound { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_bounds_display() {
        let err = RoutingError::missing_bounds("box1");
        assert_eq!(err.to_string(), "element 'box1' has no bounds");
        assert_eq!(err.element(), Some("box1"));
    }

    #[test]
    fn test_invalid_bounds_display() {
        let err = RoutingError::invalid_bounds("box1", "negative width");
        assert!(err.to_string().contains("negative width"));
    }

    #[test]
    fn test_adjustment_errors_have_no_element() {
        let err = RoutingError::adjustment_not_found("c1:bend:7");
        assert!(err.to_string().contains("c1:bend:7"));
        assert_eq!(err.element(), None);
    }
}

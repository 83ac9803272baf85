//! Site pair selection

use tracing::debug;

use super::sites::ConnectionSite;

/// Penalty used when either site has no outward direction
const CENTER_SITE_PENALTY: f64 = 90.0;

/// The chosen start and end sites
#[derive(Debug, Clone, PartialEq)]
pub struct SitePair {
    pub start: ConnectionSite,
    pub end: ConnectionSite,
}

/// Angular mismatch between two sites, in degrees.
///
/// 0 when the sites face each other, 180 when they face the same way.
pub fn alignment_penalty(start_angle: Option<f64>, end_angle: Option<f64>) -> f64 {
    match (start_angle, end_angle) {
        (Some(a), Some(b)) => {
            let diff = (a + 180.0 - b).rem_euclid(360.0);
            if diff > 180.0 {
                360.0 - diff
            } else {
                diff
            }
        }
        _ => CENTER_SITE_PENALTY,
    }
}

fn score(start: &ConnectionSite, end: &ConnectionSite) -> f64 {
    start.point.manhattan_distance(end.point) + alignment_penalty(start.angle, end.angle)
}

/// Pick the site pair for a connector.
///
/// Explicit names win when both resolve; otherwise every cross pair is scored
/// and the first minimum in list order is kept. Returns `None` only when a list
/// is empty.
pub fn select_site_pair(
    start_sites: &[ConnectionSite],
    end_sites: &[ConnectionSite],
    requested_start: Option<&str>,
    requested_end: Option<&str>,
) -> Option<SitePair> {
    if let (Some(start_name), Some(end_name)) = (requested_start, requested_end) {
        let start = start_sites.iter().find(|s| s.id == start_name);
        let end = end_sites.iter().find(|s| s.id == end_name);
        match (start, end) {
            (Some(start), Some(end)) => {
                return Some(SitePair {
                    start: start.clone(),
                    end: end.clone(),
                })
            }
            _ => debug!(
                start = start_name,
                end = end_name,
                "requested sites not found, selecting automatically"
            ),
        }
    }

    let mut best: Option<(f64, &ConnectionSite, &ConnectionSite)> = None;
    for start in start_sites {
        for end in end_sites {
            let candidate = score(start, end);
            if best.map_or(true, |(current, _, _)| candidate < current) {
                best = Some((candidate, start, end));
            }
        }
    }

    best.map(|(_, start, end)| SitePair {
        start: start.clone(),
        end: end.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::sites::rectangle_sites;
    use crate::routing::types::{Point, Rectangle};

    #[test]
    fn test_alignment_penalty() {
        assert_eq!(alignment_penalty(Some(0.0), Some(180.0)), 0.0);
        assert_eq!(alignment_penalty(Some(90.0), Some(270.0)), 0.0);
        assert_eq!(alignment_penalty(Some(0.0), Some(0.0)), 180.0);
        assert_eq!(alignment_penalty(Some(0.0), Some(270.0)), 90.0);
        assert_eq!(alignment_penalty(Some(0.0), Some(90.0)), 90.0);
        assert_eq!(alignment_penalty(None, Some(90.0)), CENTER_SITE_PENALTY);
    }

    #[test]
    fn test_side_by_side_picks_facing_sites() {
        let a = rectangle_sites(&Rectangle::new(0.0, 0.0, 100.0, 100.0));
        let b = rectangle_sites(&Rectangle::new(300.0, 0.0, 100.0, 100.0));
        let pair = select_site_pair(&a, &b, None, None).unwrap();
        assert_eq!(pair.start.id, "right");
        assert_eq!(pair.end.id, "left");
    }

    #[test]
    fn test_stacked_picks_bottom_to_top() {
        let a = rectangle_sites(&Rectangle::new(0.0, 0.0, 100.0, 100.0));
        let b = rectangle_sites(&Rectangle::new(0.0, 300.0, 100.0, 100.0));
        let pair = select_site_pair(&a, &b, None, None).unwrap();
        assert_eq!(pair.start.id, "bottom");
        assert_eq!(pair.end.id, "top");
    }

    #[test]
    fn test_explicit_names_bypass_scoring() {
        let a = rectangle_sites(&Rectangle::new(0.0, 0.0, 100.0, 100.0));
        let b = rectangle_sites(&Rectangle::new(300.0, 0.0, 100.0, 100.0));
        let pair = select_site_pair(&a, &b, Some("top"), Some("bottom")).unwrap();
        assert_eq!(pair.start.id, "top");
        assert_eq!(pair.end.id, "bottom");
    }

    #[test]
    fn test_unknown_name_falls_back_to_scoring() {
        let a = rectangle_sites(&Rectangle::new(0.0, 0.0, 100.0, 100.0));
        let b = rectangle_sites(&Rectangle::new(300.0, 0.0, 100.0, 100.0));
        let pair = select_site_pair(&a, &b, Some("north"), Some("left")).unwrap();
        assert_eq!(pair.start.id, "right");
        assert_eq!(pair.end.id, "left");
    }

    #[test]
    fn test_ties_keep_first_pair() {
        let a = vec![
            ConnectionSite::new("one", Point::new(0.0, 0.0), 0.0),
            ConnectionSite::new("two", Point::new(0.0, 0.0), 0.0),
        ];
        let b = vec![ConnectionSite::new("far", Point::new(10.0, 0.0), 180.0)];
        let pair = select_site_pair(&a, &b, None, None).unwrap();
        assert_eq!(pair.start.id, "one");
    }

    #[test]
    fn test_empty_list_yields_none() {
        let a = rectangle_sites(&Rectangle::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(select_site_pair(&a, &[], None, None), None);
    }
}

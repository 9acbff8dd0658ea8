use super::haversine::{distance_km, round_km};
use super::resolver::{resolve_waypoints, ResolveOptions};
use super::service::Geocoder;
use super::types::{RawInputRow, Waypoint};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub from: Waypoint,
    pub to: Waypoint,
    /// Great-circle distance, already rounded to two decimals.
    pub distance_km: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSummary {
    pub segments: Vec<Segment>,
    pub total_km: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RouteReport {
    /// Fewer than two waypoints resolved, so there is no distance to show.
    Insufficient { waypoints: usize },
    Route(RouteSummary),
}

impl RouteReport {
    pub fn segments(&self) -> &[Segment] {
        match self {
            RouteReport::Insufficient { .. } => &[],
            RouteReport::Route(summary) => &summary.segments,
        }
    }

    pub fn total_km(&self) -> Option<f64> {
        match self {
            RouteReport::Insufficient { .. } => None,
            RouteReport::Route(summary) => Some(summary.total_km),
        }
    }
}

impl fmt::Display for RouteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteReport::Insufficient { .. } => write!(f, "Add at least 2 points."),
            RouteReport::Route(summary) => {
                writeln!(f, "Distances:")?;
                for segment in &summary.segments {
                    writeln!(
                        f,
                        "{} → {} = {:.2} km",
                        segment.from, segment.to, segment.distance_km
                    )?;
                }
                write!(f, "Total Distance: {:.2} km", summary.total_km)
            }
        }
    }
}

/// Distances between consecutive waypoints, in the order given.
///
/// The total adds up the *rounded* segment distances and rounds once more,
/// so it always equals the sum of the figures shown per segment.
pub fn aggregate(waypoints: &[Waypoint]) -> RouteReport {
    if waypoints.len() < 2 {
        return RouteReport::Insufficient {
            waypoints: waypoints.len(),
        };
    }

    let segments: Vec<Segment> = waypoints
        .windows(2)
        .map(|pair| Segment {
            from: pair[0].clone(),
            to: pair[1].clone(),
            distance_km: round_km(distance_km(&pair[0].position, &pair[1].position)),
        })
        .collect();
    let total_km = round_km(segments.iter().map(|s| s.distance_km).sum());

    RouteReport::Route(RouteSummary { segments, total_km })
}

/// Everything one trigger produces: the waypoints to plot and their report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub waypoints: Vec<Waypoint>,
    pub report: RouteReport,
}

/// Resolves the rows and aggregates the result. Stateless: the same rows and
/// geocoder answers always give the same plan.
pub async fn compute_route<G: Geocoder>(
    rows: &[RawInputRow],
    geocoder: &G,
    options: ResolveOptions,
) -> RoutePlan {
    let waypoints = resolve_waypoints(rows, geocoder, options).await;
    log::debug!(
        "Resolved {} of {} rows into waypoints",
        waypoints.len(),
        rows.len()
    );
    let report = aggregate(&waypoints);
    RoutePlan { waypoints, report }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdk::routing::resolver::tests::FakeGeocoder;
    use crate::sdk::routing::types::Position;

    fn point(lat: f64, lng: f64) -> Waypoint {
        let position = Position::new(lat, lng);
        Waypoint::new(Waypoint::coordinate_label(position), position)
    }

    #[test]
    fn fewer_than_two_waypoints_is_insufficient() {
        for waypoints in [vec![], vec![point(0.0, 0.0)]] {
            let report = aggregate(&waypoints);
            assert_eq!(
                report,
                RouteReport::Insufficient {
                    waypoints: waypoints.len()
                }
            );
            assert!(report.segments().is_empty());
            assert_eq!(report.total_km(), None);
        }
    }

    #[test]
    fn segments_follow_input_order_and_total_sums_rounded_values() {
        let waypoints = vec![point(0.0, 0.0), point(0.0, 1.0), point(1.0, 1.0)];
        let report = aggregate(&waypoints);

        let segments = report.segments();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].from, waypoints[0]);
        assert_eq!(segments[0].to, waypoints[1]);
        assert_eq!(segments[1].from, waypoints[1]);
        assert_eq!(segments[1].to, waypoints[2]);
        assert_eq!(segments[0].distance_km, 111.19);
        assert_eq!(segments[1].distance_km, 111.19);
        assert_eq!(
            report.total_km(),
            Some(round_km(segments[0].distance_km + segments[1].distance_km))
        );
    }

    #[test]
    fn total_is_built_from_rounded_segments() {
        // Each hop is ~0.0056 km: rounds to 0.01, so three hops report 0.03
        // while the unrounded sum would round to 0.02.
        let step = 0.00005;
        let waypoints: Vec<Waypoint> = (0..4).map(|i| point(0.0, step * i as f64)).collect();
        let report = aggregate(&waypoints);

        assert!(report.segments().iter().all(|s| s.distance_km == 0.01));
        assert_eq!(report.total_km(), Some(0.03));
    }

    #[test]
    fn report_renders_like_the_distance_panel() {
        let report = aggregate(&[point(0.0, 0.0), point(0.0, 1.0)]);
        assert_eq!(
            report.to_string(),
            "Distances:\n(0,0) → (0,1) = 111.19 km\nTotal Distance: 111.19 km"
        );
        assert_eq!(aggregate(&[]).to_string(), "Add at least 2 points.");
    }

    #[tokio::test(flavor = "current_thread")]
    async fn identical_input_yields_identical_report() {
        let rows = vec![
            RawInputRow::coordinate("16.5062", "80.6480"),
            RawInputRow::coordinate("17.385", "78.4867"),
            RawInputRow::coordinate("13.0827", "80.2707"),
        ];
        let geocoder = FakeGeocoder::default();

        let first = compute_route(&rows, &geocoder, ResolveOptions::default()).await;
        let second = compute_route(&rows, &geocoder, ResolveOptions::default()).await;

        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[tokio::test(flavor = "current_thread")]
    async fn place_route_end_to_end() {
        let geocoder = FakeGeocoder::default()
            .answer("A", vec![Position::new(0.0, 0.0)], 20)
            .answer("B", vec![Position::new(0.0, 1.0)], 0);
        let rows = vec![RawInputRow::place("A"), RawInputRow::place(" "), RawInputRow::place("B")];

        let plan = compute_route(&rows, &geocoder, ResolveOptions::default()).await;

        assert_eq!(plan.waypoints.len(), 2);
        assert_eq!(plan.report.total_km(), Some(111.19));
    }
}

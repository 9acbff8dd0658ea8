pub mod error;
pub mod haversine;
pub mod provider;
pub mod render;
pub mod resolver;
pub mod route;
pub mod service;
pub mod session;
pub mod types;

pub use error::{GeocodeError, SkipReason};
pub use provider::NominatimGeocoder;
pub use render::{Bounds, GeoJsonRenderer, MapRenderer};
pub use resolver::{resolve_waypoints, ResolveOptions};
pub use route::{aggregate, compute_route, RoutePlan, RouteReport, RouteSummary, Segment};
pub use service::Geocoder;
pub use session::{RoutePlanner, RouteSession};
pub use types::{InputMode, Position, RawInputRow, Waypoint};

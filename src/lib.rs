pub mod sdk;

pub use sdk::config::{AppConfig, GeocoderConfig};
pub use sdk::routing::haversine::distance_km;
pub use sdk::routing::{
    aggregate, compute_route, resolve_waypoints, Geocoder, InputMode, NominatimGeocoder, Position,
    RawInputRow, ResolveOptions, RoutePlanner, RouteReport, Waypoint,
};

use super::error::GeocodeError;
use super::types::Position;
use std::future::Future;

pub trait Geocoder: Send + Sync {
    /// Resolves free text to candidate positions, best match first.
    ///
    /// An empty list means the service knew nothing about the query.
    fn lookup(&self, query: &str) -> impl Future<Output = Result<Vec<Position>, GeocodeError>> + Send;
}

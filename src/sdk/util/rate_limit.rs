use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use std::num::NonZeroU32;
use std::sync::Arc;

pub type Limiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

/// Public Nominatim asks for at most one request per second.
pub const DEFAULT_GEOCODE_RATE_PER_SEC: NonZeroU32 = NonZeroU32::MIN;

pub fn geocode_limiter(per_second: NonZeroU32) -> Limiter {
    Arc::new(RateLimiter::direct(Quota::per_second(per_second)))
}

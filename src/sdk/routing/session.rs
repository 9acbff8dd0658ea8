use super::resolver::ResolveOptions;
use super::route::{compute_route, RouteReport};
use super::service::Geocoder;
use super::types::{RawInputRow, Waypoint};
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio_util::sync::CancellationToken;

/// The outcome of one trigger: what is currently plotted and reported.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSession {
    pub generation: u64,
    pub waypoints: Vec<Waypoint>,
    pub report: RouteReport,
}

#[derive(Default)]
struct PlannerState {
    // Bumped together with the `in_flight` swap, under the same lock.
    generation: u64,
    current: Option<RouteSession>,
    in_flight: Option<CancellationToken>,
}

/// Owns the current [`RouteSession`] and replaces it wholesale on every
/// trigger. A newer trigger cancels the one still resolving, and a stale
/// trigger can never overwrite a newer session.
pub struct RoutePlanner<G> {
    geocoder: Arc<G>,
    options: ResolveOptions,
    state: Mutex<PlannerState>,
}

impl<G: Geocoder> RoutePlanner<G> {
    pub fn new(geocoder: Arc<G>, options: ResolveOptions) -> Self {
        Self {
            geocoder,
            options,
            state: Mutex::new(PlannerState::default()),
        }
    }

    /// Resolves `rows` from scratch and installs the result as the current
    /// session. Returns `None` if a newer trigger or [`clear`](Self::clear)
    /// superseded this one before it finished.
    pub async fn trigger(&self, rows: Vec<RawInputRow>) -> Option<RouteSession> {
        let token = CancellationToken::new();
        let generation = {
            let mut state = self.lock();
            state.generation += 1;
            if let Some(previous) = state.in_flight.replace(token.clone()) {
                log::info!("Trigger {} supersedes a route still resolving", state.generation);
                previous.cancel();
            }
            state.generation
        };

        let plan = tokio::select! {
            _ = token.cancelled() => {
                log::info!("Trigger {} cancelled before its lookups finished", generation);
                return None;
            }
            plan = compute_route(&rows, self.geocoder.as_ref(), self.options) => plan,
        };

        let mut state = self.lock();
        if state.generation != generation {
            log::info!("Discarding stale result of trigger {}", generation);
            return None;
        }
        state.in_flight = None;
        let session = RouteSession {
            generation,
            waypoints: plan.waypoints,
            report: plan.report,
        };
        state.current = Some(session.clone());
        Some(session)
    }

    /// Drops the current session and abandons any trigger in flight.
    pub fn clear(&self) {
        let mut state = self.lock();
        state.generation += 1;
        if let Some(token) = state.in_flight.take() {
            token.cancel();
        }
        state.current = None;
    }

    pub fn current(&self) -> Option<RouteSession> {
        self.lock().current.clone()
    }

    fn lock(&self) -> MutexGuard<'_, PlannerState> {
        // The state is replaced whole under the lock, so a poisoned guard still holds a
        // consistent value.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

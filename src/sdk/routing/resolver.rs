use super::error::SkipReason;
use super::service::Geocoder;
use super::types::{Position, RawInputRow, Waypoint};
use futures::stream::{FuturesUnordered, StreamExt};

#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveOptions {
    /// Drop rows whose position falls outside the valid lat/lng ranges.
    pub strict_bounds: bool,
}

/// Turns raw rows into waypoints, keeping input order and dropping every row
/// that does not resolve.
///
/// Coordinate rows resolve in place. Place rows are looked up concurrently;
/// each outcome is tagged with its row index and the final list is rebuilt
/// by index once every lookup has finished, so completion order never leaks
/// into the result.
pub async fn resolve_waypoints<G: Geocoder>(
    rows: &[RawInputRow],
    geocoder: &G,
    options: ResolveOptions,
) -> Vec<Waypoint> {
    let mut resolved: Vec<(usize, Waypoint)> = Vec::with_capacity(rows.len());
    let mut lookups = FuturesUnordered::new();

    for (index, row) in rows.iter().enumerate() {
        match row {
            RawInputRow::Coordinate { lat_text, lng_text } => {
                match resolve_coordinate(lat_text, lng_text, options) {
                    Ok(waypoint) => resolved.push((index, waypoint)),
                    Err(reason) => log_skip(index, &reason),
                }
            }
            RawInputRow::Place { place_text } => {
                let query = place_text.trim();
                if query.is_empty() {
                    log_skip(index, &SkipReason::EmptyPlace);
                    continue;
                }
                lookups.push(async move {
                    let outcome = resolve_place(place_text, query, geocoder, options).await;
                    (index, outcome)
                });
            }
        }
    }

    if !lookups.is_empty() {
        log::debug!("Awaiting {} geocoding lookups", lookups.len());
    }
    while let Some((index, outcome)) = lookups.next().await {
        match outcome {
            Ok(waypoint) => resolved.push((index, waypoint)),
            Err(reason) => log_skip(index, &reason),
        }
    }

    resolved.sort_by_key(|(index, _)| *index);
    resolved.into_iter().map(|(_, waypoint)| waypoint).collect()
}

fn resolve_coordinate(
    lat_text: &str,
    lng_text: &str,
    options: ResolveOptions,
) -> Result<Waypoint, SkipReason> {
    let (Some(latitude), Some(longitude)) = (parse_degrees(lat_text), parse_degrees(lng_text)) else {
        return Err(SkipReason::UnparseableCoordinate);
    };
    let position = Position::new(latitude, longitude);
    check_bounds(position, options)?;
    Ok(Waypoint::new(Waypoint::coordinate_label(position), position))
}

async fn resolve_place<G: Geocoder>(
    label: &str,
    query: &str,
    geocoder: &G,
    options: ResolveOptions,
) -> Result<Waypoint, SkipReason> {
    log::debug!("[RESOLVER] Geocoding \"{}\"", query);
    let matches = geocoder
        .lookup(query)
        .await
        .map_err(|e| SkipReason::LookupFailed(e.to_string()))?;
    let position = *matches.first().ok_or(SkipReason::NoMatch)?;
    check_bounds(position, options)?;
    Ok(Waypoint::new(label, position))
}

fn parse_degrees(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn check_bounds(position: Position, options: ResolveOptions) -> Result<(), SkipReason> {
    if options.strict_bounds && !position.is_in_bounds() {
        return Err(SkipReason::OutOfBounds);
    }
    Ok(())
}

fn log_skip(index: usize, reason: &SkipReason) {
    log::debug!("[RESOLVER] Skipping row {}: {}", index + 1, reason);
}

use super::types::SearchHit;
use crate::sdk::config::GeocoderConfig;
use crate::sdk::routing::error::GeocodeError;
use crate::sdk::routing::service::Geocoder;
use crate::sdk::routing::types::Position;
use crate::sdk::util::rate_limit::{geocode_limiter, Limiter};
use reqwest::Client;

// --- Nominatim (OpenStreetMap) Provider Implementation ---
pub struct NominatimGeocoder {
    client: Client,
    base_url: String,
    limiter: Limiter,
}

impl NominatimGeocoder {
    pub fn new(config: &GeocoderConfig) -> Result<Self, GeocodeError> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            limiter: geocode_limiter(config.rate_per_sec),
        })
    }
}

impl Geocoder for NominatimGeocoder {
    async fn lookup(&self, query: &str) -> Result<Vec<Position>, GeocodeError> {
        self.limiter.until_ready().await;
        log::debug!("[PROVIDER] Calling Nominatim search for: \"{}\"", query);

        let url = format!("{}/search", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("format", "json"), ("q", query)])
            .send()
            .await
            .map_err(|e| {
                log::warn!("Failed to send geocoding request for \"{}\": {}", query, e);
                e
            })?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            log::warn!(
                "Nominatim returned non-success status: {}. Body: {}",
                status,
                text
            );
            return Err(GeocodeError::HttpStatus {
                status: status.as_u16(),
                body: text,
            });
        }

        parse_search_response(&text).map_err(|e| {
            log::warn!(
                "Failed to parse Nominatim response for \"{}\"\nError: {}. Body: {}",
                query,
                e,
                text
            );
            e
        })
    }
}

/// Decodes a search response into positions, in the service's ranking
/// order. Hits whose coordinates are not numbers are skipped.
pub fn parse_search_response(body: &str) -> Result<Vec<Position>, GeocodeError> {
    let hits: Vec<SearchHit> = serde_json::from_str(body)?;
    Ok(hits
        .into_iter()
        .filter_map(|hit| {
            let latitude = hit.lat.trim().parse::<f64>().ok()?;
            let longitude = hit.lon.trim().parse::<f64>().ok()?;
            Some(Position::new(latitude, longitude))
        })
        .collect())
}

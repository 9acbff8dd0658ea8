use serde::Deserialize;

// --- Data Structures for parsing Nominatim `/search?format=json` responses ---

/// One search hit. Nominatim sends coordinates as JSON strings.
#[derive(Debug, Deserialize)]
pub struct SearchHit {
    pub lat: String,
    pub lon: String,
}

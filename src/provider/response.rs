//! Raw wire schema for LocationIQ (Nominatim) responses
//!
//! Every upstream key is modeled as an optional field; all presence checks
//! and fallback rules live in the mapper so "is this key there" reasoning
//! stays in one layer.

use serde::Deserialize;
use serde_json::Value;

/// One place object as returned by the search and reverse endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct Place {
    pub lat: Option<String>,
    pub lon: Option<String>,
    /// Ordered south, north, west, east
    pub boundingbox: Option<Vec<String>>,
    pub licence: Option<String>,
    pub display_name: Option<String>,
    pub osm_id: Option<OsmId>,
    pub osm_type: Option<String>,
    #[serde(rename = "type")]
    pub place_type: Option<String>,
    pub extratags: Option<Value>,
    pub namedetails: Option<Value>,
    #[serde(default)]
    pub address: PlaceAddress,
}

/// The nested `address` block of a place
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceAddress {
    pub state: Option<String>,
    pub county: Option<String>,
    pub postcode: Option<String>,
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub hamlet: Option<String>,
    pub road: Option<String>,
    pub pedestrian: Option<String>,
    pub house_number: Option<String>,
    pub suburb: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
}

/// OSM object id; the API has returned both JSON numbers and numeric
/// strings over time
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OsmId {
    Number(i64),
    Text(String),
}

impl OsmId {
    /// Numeric value, or None for a non-numeric string
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(number) => Some(*number),
            Self::Text(text) => text.parse().ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_place_deserializes_with_everything_absent() {
        let place: Place = serde_json::from_value(json!({})).unwrap();
        assert!(place.lat.is_none());
        assert!(place.boundingbox.is_none());
        assert!(place.address.country.is_none());
    }

    #[test]
    fn test_place_ignores_unknown_keys() {
        let place: Place = serde_json::from_value(json!({
            "place_id": "12345",
            "importance": 0.75,
            "lat": "52.5163",
            "lon": "13.3777",
        }))
        .unwrap();
        assert_eq!(place.lat.as_deref(), Some("52.5163"));
    }

    #[test]
    fn test_osm_id_number_and_string() {
        let number: OsmId = serde_json::from_value(json!(240109189)).unwrap();
        assert_eq!(number.as_i64(), Some(240109189));

        let text: OsmId = serde_json::from_value(json!("240109189")).unwrap();
        assert_eq!(text.as_i64(), Some(240109189));

        let garbage: OsmId = serde_json::from_value(json!("not-a-number")).unwrap();
        assert_eq!(garbage.as_i64(), None);
    }

    #[test]
    fn test_place_type_rename() {
        let place: Place = serde_json::from_value(json!({ "type": "city" })).unwrap();
        assert_eq!(place.place_type.as_deref(), Some("city"));
    }
}

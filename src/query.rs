//! Query types for forward and reverse lookups
//!
//! Both query types are immutable value objects built by the caller and
//! handed to the provider.

use crate::address::Coordinates;
use crate::constants::defaults;

/// A forward geocoding query: free-text address to coordinates
#[derive(Debug, Clone)]
pub struct GeocodeQuery {
    text: String,
    limit: usize,
    locale: Option<String>,
}

impl GeocodeQuery {
    /// Create a query for the given address text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            limit: defaults::LIMIT,
            locale: None,
        }
    }

    /// Set the maximum number of results to request
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Set the locale forwarded to the API as `accept-language`
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// The address text to search for
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Maximum number of results
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Locale for the result language, if any
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }
}

/// A reverse geocoding query: coordinates to address
#[derive(Debug, Clone)]
pub struct ReverseQuery {
    coordinates: Coordinates,
    locale: Option<String>,
    zoom: Option<u8>,
}

impl ReverseQuery {
    /// Create a query for the given coordinate pair
    pub fn new(coordinates: Coordinates) -> Self {
        Self {
            coordinates,
            locale: None,
            zoom: None,
        }
    }

    /// Create a query directly from latitude and longitude
    pub fn from_coordinates(lat: f64, lon: f64) -> Self {
        Self::new(Coordinates::new(lat, lon))
    }

    /// Set the locale forwarded to the API as `accept-language`
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Set the zoom hint controlling how detailed the result is
    ///
    /// The provider falls back to building level (18) when unset.
    pub fn with_zoom(mut self, zoom: u8) -> Self {
        self.zoom = Some(zoom);
        self
    }

    /// The coordinate pair to look up
    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    /// Locale for the result language, if any
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    /// Zoom hint, if set
    pub fn zoom(&self) -> Option<u8> {
        self.zoom
    }
}

//! LocationIQ provider adapter
//!
//! Builds the search and reverse request URLs, runs them through the
//! injected transport and maps the JSON responses into address records.
//!
//! The two lookups fail differently on purpose: a forward lookup treats a
//! malformed body as a broken server contract and errors, a reverse lookup
//! treats it as "nothing at these coordinates" and returns an empty list.

pub mod mapper;
pub mod response;

use crate::address::LocationIqAddress;
use crate::constants::{api, defaults};
use crate::error::{Error, Result};
use crate::query::{GeocodeQuery, ReverseQuery};
use crate::transport::Transport;
use serde_json::Value;
use tracing::debug;

/// Provider identifier, used for selection in multi-provider setups
pub const PROVIDER_NAME: &str = "locationiq";

/// The LocationIQ geocoding provider
///
/// Stateless after construction; concurrent lookups from multiple threads
/// are safe.
#[derive(Debug, Clone)]
pub struct LocationIq<T: Transport> {
    transport: T,
    api_key: String,
    extra_tags: bool,
    name_details: bool,
}

impl<T: Transport> LocationIq<T> {
    /// Create a provider with both detail flags off
    pub fn new(transport: T, api_key: impl Into<String>) -> Result<Self> {
        Self::with_options(transport, api_key, false, false)
    }

    /// Create a provider, choosing whether the API should include the
    /// extra-tags and name-details blocks in its responses
    ///
    /// Both flags default to off to keep responses small.
    pub fn with_options(
        transport: T,
        api_key: impl Into<String>,
        extra_tags: bool,
        name_details: bool,
    ) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(Error::InvalidCredentials("No API key provided".to_string()));
        }

        Ok(Self {
            transport,
            api_key,
            extra_tags,
            name_details,
        })
    }

    /// Provider identifier
    pub fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    /// Forward lookup: address text to candidate places
    ///
    /// Results keep the order the API returned them in. IP literals in the
    /// query text are passed to the API unchanged; LocationIQ does not
    /// resolve them and will answer with no matches.
    pub fn forward(&self, query: &GeocodeQuery) -> Result<Vec<LocationIqAddress>> {
        debug!("forward geocoding {:?} (limit {})", query.text(), query.limit());

        let url = format!(
            "{}/search.php?key={}&q={}&format=json&addressdetails=1&limit={}&extratags={}&namedetails={}",
            api::BASE_URL,
            urlencoding::encode(&self.api_key),
            urlencoding::encode(query.text()),
            query.limit(),
            self.extra_tags as u8,
            self.name_details as u8,
        );

        let body = self.execute(&url, query.locale())?;

        let places: Vec<response::Place> =
            serde_json::from_str(&body).map_err(|_| Error::InvalidServerResponse { url })?;

        if places.is_empty() {
            return Ok(Vec::new());
        }

        places
            .iter()
            .map(|place| mapper::place_to_address(place, false))
            .collect()
    }

    /// Reverse lookup: coordinates to at most one place
    ///
    /// Coordinates that resolve to nothing are an expected outcome here, so
    /// an unparseable body, an `error` payload and an empty object all
    /// yield an empty list instead of an error.
    pub fn reverse(&self, query: &ReverseQuery) -> Result<Vec<LocationIqAddress>> {
        let coordinates = query.coordinates();
        debug!("reverse geocoding {:.6},{:.6}", coordinates.lat, coordinates.lon);

        let url = format!(
            "{}/reverse?format=json&lat={}&lon={}&addressdetails=1&zoom={}",
            api::BASE_URL,
            coordinates.lat,
            coordinates.lon,
            query.zoom().unwrap_or(defaults::ZOOM),
        );

        let body = self.execute(&url, query.locale())?;

        let json: Value = match serde_json::from_str(&body) {
            Ok(json) => json,
            Err(_) => return Ok(Vec::new()),
        };

        let is_place = json
            .as_object()
            .is_some_and(|object| !object.is_empty() && !object.contains_key("error"));
        if !is_place {
            return Ok(Vec::new());
        }

        let place: response::Place = match serde_json::from_value(json) {
            Ok(place) => place,
            Err(_) => return Ok(Vec::new()),
        };

        Ok(vec![mapper::place_to_address(&place, true)?])
    }

    /// Append the locale segment when one is set, then run the request
    fn execute(&self, url: &str, locale: Option<&str>) -> Result<String> {
        let url = match locale {
            Some(locale) => format!("{}&accept-language={}", url, urlencoding::encode(locale)),
            None => url.to_string(),
        };

        self.transport.send(&url)
    }
}

//! Address model
//!
//! This module holds:
//! - Small value types shared across the crate (coordinates, bounds,
//!   admin levels)
//! - The immutable address record returned by the provider
//! - A builder for assembling records field by field

pub mod builder;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// A geographic coordinate pair (latitude, longitude)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    /// Create new coordinates
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// A bounding box around a place (south, west, north, east)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    /// Create a new bounding box
    pub fn new(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self {
            south,
            west,
            north,
            east,
        }
    }
}

/// One rung of a region's administrative hierarchy (state, county, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminLevel {
    level: u32,
    name: String,
    code: String,
}

impl AdminLevel {
    /// Create an admin level
    pub fn new(level: u32, name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            level,
            name: name.into(),
            code: code.into(),
        }
    }

    /// Position in the hierarchy, 1 being the widest
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Human-readable name of the region
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Short code of the region, empty when the source carries none
    pub fn code(&self) -> &str {
        &self.code
    }
}

/// An address returned by the LocationIQ provider
///
/// Immutable value object: every `with_*` method returns a new record and
/// leaves the original untouched. Alongside the generic address fields it
/// carries the provider extras (attribution, display name, OSM provenance,
/// place type, opaque tag blocks).
#[derive(Debug, Clone, PartialEq)]
pub struct LocationIqAddress {
    provided_by: String,
    coordinates: Option<Coordinates>,
    bounds: Option<Bounds>,
    street_number: Option<String>,
    street_name: Option<String>,
    postal_code: Option<String>,
    locality: Option<String>,
    sub_locality: Option<String>,
    admin_levels: Vec<AdminLevel>,
    country: Option<String>,
    country_code: Option<String>,
    attribution: Option<String>,
    category: Option<String>,
    display_name: Option<String>,
    osm_id: Option<i64>,
    osm_type: Option<String>,
    place_type: Option<String>,
    extra_tags: Option<Value>,
    name_details: Option<Value>,
}

impl LocationIqAddress {
    /// Name of the provider that produced this record
    pub fn provided_by(&self) -> &str {
        &self.provided_by
    }

    /// Coordinates of the place
    pub fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }

    /// Bounding box of the place
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    /// House number
    pub fn street_number(&self) -> Option<&str> {
        self.street_number.as_deref()
    }

    /// Street (or pedestrian way) name
    pub fn street_name(&self) -> Option<&str> {
        self.street_name.as_deref()
    }

    /// Postal code; when the source joins several with `;` only the first
    /// is kept
    pub fn postal_code(&self) -> Option<&str> {
        self.postal_code.as_deref()
    }

    /// City, town, village or hamlet, whichever the source filled first
    pub fn locality(&self) -> Option<&str> {
        self.locality.as_deref()
    }

    /// Suburb
    pub fn sub_locality(&self) -> Option<&str> {
        self.sub_locality.as_deref()
    }

    /// Administrative hierarchy, widest region first
    pub fn admin_levels(&self) -> &[AdminLevel] {
        &self.admin_levels
    }

    /// Country name
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// Upper-cased ISO country code
    pub fn country_code(&self) -> Option<&str> {
        self.country_code.as_deref()
    }

    /// Licence string of the upstream data
    pub fn attribution(&self) -> Option<&str> {
        self.attribution.as_deref()
    }

    /// Place category (OSM class)
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Full display name as formatted by the upstream API
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// OpenStreetMap object id
    pub fn osm_id(&self) -> Option<i64> {
        self.osm_id
    }

    /// OpenStreetMap object kind (node, way, relation)
    pub fn osm_type(&self) -> Option<&str> {
        self.osm_type.as_deref()
    }

    /// Place type; only populated by forward lookups
    pub fn place_type(&self) -> Option<&str> {
        self.place_type.as_deref()
    }

    /// Opaque extra-tags block; only populated by forward lookups
    pub fn extra_tags(&self) -> Option<&Value> {
        self.extra_tags.as_ref()
    }

    /// Opaque name-details block; only populated by forward lookups
    pub fn name_details(&self) -> Option<&Value> {
        self.name_details.as_ref()
    }

    /// Return a copy with the attribution set
    pub fn with_attribution(&self, attribution: impl Into<String>) -> Self {
        let mut new = self.clone();
        new.attribution = Some(attribution.into());
        new
    }

    /// Return a copy with the category set
    pub fn with_category(&self, category: impl Into<String>) -> Self {
        let mut new = self.clone();
        new.category = Some(category.into());
        new
    }

    /// Return a copy with the display name set
    pub fn with_display_name(&self, display_name: impl Into<String>) -> Self {
        let mut new = self.clone();
        new.display_name = Some(display_name.into());
        new
    }

    /// Return a copy with the OSM id set
    pub fn with_osm_id(&self, osm_id: i64) -> Self {
        let mut new = self.clone();
        new.osm_id = Some(osm_id);
        new
    }

    /// Return a copy with the OSM type set
    pub fn with_osm_type(&self, osm_type: impl Into<String>) -> Self {
        let mut new = self.clone();
        new.osm_type = Some(osm_type.into());
        new
    }

    /// Return a copy with the place type set
    pub fn with_place_type(&self, place_type: impl Into<String>) -> Self {
        let mut new = self.clone();
        new.place_type = Some(place_type.into());
        new
    }

    /// Return a copy with the extra-tags block set
    pub fn with_extra_tags(&self, extra_tags: Value) -> Self {
        let mut new = self.clone();
        new.extra_tags = Some(extra_tags);
        new
    }

    /// Return a copy with the name-details block set
    pub fn with_name_details(&self, name_details: Value) -> Self {
        let mut new = self.clone();
        new.name_details = Some(name_details);
        new
    }

    /// Flatten the record into a single-level key/value mapping
    ///
    /// Every documented key is always present; absent optionals become JSON
    /// null, an absent bounding box becomes four explicit nulls and absent
    /// admin levels an empty array.
    pub fn to_flat_map(&self) -> Map<String, Value> {
        fn text(value: &Option<String>) -> Value {
            value.as_ref().map_or(Value::Null, |v| json!(v))
        }

        let mut map = Map::new();
        map.insert("provided_by".to_string(), json!(self.provided_by));
        map.insert(
            "latitude".to_string(),
            self.coordinates.map_or(Value::Null, |c| json!(c.lat)),
        );
        map.insert(
            "longitude".to_string(),
            self.coordinates.map_or(Value::Null, |c| json!(c.lon)),
        );
        map.insert(
            "bounds_south".to_string(),
            self.bounds.map_or(Value::Null, |b| json!(b.south)),
        );
        map.insert(
            "bounds_west".to_string(),
            self.bounds.map_or(Value::Null, |b| json!(b.west)),
        );
        map.insert(
            "bounds_north".to_string(),
            self.bounds.map_or(Value::Null, |b| json!(b.north)),
        );
        map.insert(
            "bounds_east".to_string(),
            self.bounds.map_or(Value::Null, |b| json!(b.east)),
        );
        map.insert("street_number".to_string(), text(&self.street_number));
        map.insert("street_name".to_string(), text(&self.street_name));
        map.insert("postal_code".to_string(), text(&self.postal_code));
        map.insert("locality".to_string(), text(&self.locality));
        map.insert("sub_locality".to_string(), text(&self.sub_locality));
        map.insert("admin_levels".to_string(), json!(self.admin_levels));
        map.insert("country".to_string(), text(&self.country));
        map.insert("country_code".to_string(), text(&self.country_code));
        map.insert("attribution".to_string(), text(&self.attribution));
        map.insert("category".to_string(), text(&self.category));
        map.insert("display_name".to_string(), text(&self.display_name));
        map.insert(
            "osm_id".to_string(),
            self.osm_id.map_or(Value::Null, |id| json!(id)),
        );
        map.insert("osm_type".to_string(), text(&self.osm_type));
        map.insert("type".to_string(), text(&self.place_type));
        map.insert(
            "extra_tags".to_string(),
            self.extra_tags.clone().unwrap_or(Value::Null),
        );
        map.insert(
            "name_details".to_string(),
            self.name_details.clone().unwrap_or(Value::Null),
        );
        map
    }
}

#[cfg(test)]
mod tests {
    use super::builder::AddressBuilder;
    use super::*;

    fn empty_record() -> LocationIqAddress {
        AddressBuilder::new("locationiq").build()
    }

    #[test]
    fn test_with_mutators_leave_original_unchanged() {
        let record = empty_record();
        let changed = record
            .with_attribution("Data (c) OpenStreetMap contributors")
            .with_display_name("Berlin, Deutschland")
            .with_osm_id(240_109_189)
            .with_osm_type("node")
            .with_place_type("city");

        assert!(record.attribution().is_none());
        assert!(record.display_name().is_none());
        assert!(record.osm_id().is_none());

        assert_eq!(
            changed.attribution(),
            Some("Data (c) OpenStreetMap contributors")
        );
        assert_eq!(changed.display_name(), Some("Berlin, Deutschland"));
        assert_eq!(changed.osm_id(), Some(240_109_189));
        assert_eq!(changed.osm_type(), Some("node"));
        assert_eq!(changed.place_type(), Some("city"));
    }

    #[test]
    fn test_flat_map_has_every_key_when_empty() {
        let map = empty_record().to_flat_map();

        let expected_keys = [
            "provided_by",
            "latitude",
            "longitude",
            "bounds_south",
            "bounds_west",
            "bounds_north",
            "bounds_east",
            "street_number",
            "street_name",
            "postal_code",
            "locality",
            "sub_locality",
            "admin_levels",
            "country",
            "country_code",
            "attribution",
            "category",
            "display_name",
            "osm_id",
            "osm_type",
            "type",
            "extra_tags",
            "name_details",
        ];
        for key in expected_keys {
            assert!(map.contains_key(key), "missing key: {}", key);
        }
        assert_eq!(map.len(), expected_keys.len());

        // Absent bounds show up as four explicit nulls, not a missing key
        assert_eq!(map["bounds_south"], Value::Null);
        assert_eq!(map["bounds_west"], Value::Null);
        assert_eq!(map["bounds_north"], Value::Null);
        assert_eq!(map["bounds_east"], Value::Null);
        assert_eq!(map["admin_levels"], json!([]));
        assert_eq!(map["provided_by"], json!("locationiq"));
    }

    #[test]
    fn test_flat_map_with_fields_set() {
        let mut builder = AddressBuilder::new("locationiq");
        builder.set_coordinates(48.1371, 11.5754);
        builder.set_bounds(48.0616, 11.3608, 48.2482, 11.7229);
        builder.set_locality("München");
        builder.set_country("Deutschland");
        builder.set_country_code("DE");
        builder.add_admin_level(1, "Bayern", "");
        let record = builder.build().with_display_name("München, Bayern");

        let map = record.to_flat_map();
        assert_eq!(map["latitude"], json!(48.1371));
        assert_eq!(map["longitude"], json!(11.5754));
        assert_eq!(map["bounds_south"], json!(48.0616));
        assert_eq!(map["bounds_east"], json!(11.7229));
        assert_eq!(map["locality"], json!("München"));
        assert_eq!(map["country_code"], json!("DE"));
        assert_eq!(
            map["admin_levels"],
            json!([{ "level": 1, "name": "Bayern", "code": "" }])
        );
        assert_eq!(map["display_name"], json!("München, Bayern"));
    }

    #[test]
    fn test_admin_level_accessors() {
        let level = AdminLevel::new(2, "Kreis Euskirchen", "");
        assert_eq!(level.level(), 2);
        assert_eq!(level.name(), "Kreis Euskirchen");
        assert_eq!(level.code(), "");
    }
}

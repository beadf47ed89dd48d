//! Builder for assembling an address record field by field

use super::{AdminLevel, Bounds, Coordinates, LocationIqAddress};

/// Incrementally assembles a [`LocationIqAddress`]
///
/// The builder stays generic: it accepts whatever the mapping hands it and
/// leaves required-field enforcement to the mapping layer.
#[derive(Debug, Clone)]
pub struct AddressBuilder {
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
}

impl AddressBuilder {
    /// Create an empty builder tagged with the producing provider's name
    pub fn new(provided_by: impl Into<String>) -> Self {
        Self {
            provided_by: provided_by.into(),
            coordinates: None,
            bounds: None,
            street_number: None,
            street_name: None,
            postal_code: None,
            locality: None,
            sub_locality: None,
            admin_levels: Vec::new(),
            country: None,
            country_code: None,
        }
    }

    /// Append one admin level; callers are expected to add them widest
    /// region first
    pub fn add_admin_level(&mut self, level: u32, name: impl Into<String>, code: impl Into<String>) {
        self.admin_levels.push(AdminLevel::new(level, name, code));
    }

    /// Set the coordinates
    pub fn set_coordinates(&mut self, lat: f64, lon: f64) {
        self.coordinates = Some(Coordinates::new(lat, lon));
    }

    /// Set the bounding box
    pub fn set_bounds(&mut self, south: f64, west: f64, north: f64, east: f64) {
        self.bounds = Some(Bounds::new(south, west, north, east));
    }

    /// Set the house number
    pub fn set_street_number(&mut self, street_number: impl Into<String>) {
        self.street_number = Some(street_number.into());
    }

    /// Set the street name
    pub fn set_street_name(&mut self, street_name: impl Into<String>) {
        self.street_name = Some(street_name.into());
    }

    /// Set the postal code
    pub fn set_postal_code(&mut self, postal_code: impl Into<String>) {
        self.postal_code = Some(postal_code.into());
    }

    /// Set the locality
    pub fn set_locality(&mut self, locality: impl Into<String>) {
        self.locality = Some(locality.into());
    }

    /// Set the sub-locality
    pub fn set_sub_locality(&mut self, sub_locality: impl Into<String>) {
        self.sub_locality = Some(sub_locality.into());
    }

    /// Set the country name
    pub fn set_country(&mut self, country: impl Into<String>) {
        self.country = Some(country.into());
    }

    /// Set the country code
    pub fn set_country_code(&mut self, country_code: impl Into<String>) {
        self.country_code = Some(country_code.into());
    }

    /// Produce the record; provider extras start out unset
    pub fn build(self) -> LocationIqAddress {
        LocationIqAddress {
            provided_by: self.provided_by,
            coordinates: self.coordinates,
            bounds: self.bounds,
            street_number: self.street_number,
            street_name: self.street_name,
            postal_code: self.postal_code,
            locality: self.locality,
            sub_locality: self.sub_locality,
            admin_levels: self.admin_levels,
            country: self.country,
            country_code: self.country_code,
            attribution: None,
            category: None,
            display_name: None,
            osm_id: None,
            osm_type: None,
            place_type: None,
            extra_tags: None,
            name_details: None,
        }
    }
}

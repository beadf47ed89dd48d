//! Mapping from raw place objects to address records
//!
//! Pure transformation, no I/O. Country and country code are the only
//! required inputs; everything else degrades to an unset field.

use crate::address::builder::AddressBuilder;
use crate::address::LocationIqAddress;
use crate::error::{Error, Result};
use crate::provider::response::Place;
use crate::provider::PROVIDER_NAME;

/// Map one place object into an address record
///
/// `reverse` selects the reverse-lookup contract: place type, extra tags
/// and name details stay unset even when the source carries them.
pub fn place_to_address(place: &Place, reverse: bool) -> Result<LocationIqAddress> {
    let address = &place.address;
    let mut builder = AddressBuilder::new(PROVIDER_NAME);

    // state maps to level 1, county to level 2
    for (position, region) in [&address.state, &address.county].into_iter().enumerate() {
        if let Some(region) = region {
            builder.add_admin_level(position as u32 + 1, region.clone(), "");
        }
    }

    // several postal codes may arrive semicolon-joined; keep the first
    if let Some(postcode) = &address.postcode {
        let first = postcode.split(';').next().unwrap_or(postcode.as_str());
        builder.set_postal_code(first);
    }

    let locality = [&address.city, &address.town, &address.village, &address.hamlet]
        .into_iter()
        .flatten()
        .find(|candidate| !candidate.is_empty());
    if let Some(locality) = locality {
        builder.set_locality(locality.clone());
    }

    if let Some(street) = address.road.as_ref().or(address.pedestrian.as_ref()) {
        builder.set_street_name(street.clone());
    }
    if let Some(house_number) = &address.house_number {
        builder.set_street_number(house_number.clone());
    }
    if let Some(suburb) = &address.suburb {
        builder.set_sub_locality(suburb.clone());
    }

    let country = address
        .country
        .as_ref()
        .ok_or(Error::MissingField("address.country"))?;
    let country_code = address
        .country_code
        .as_ref()
        .ok_or(Error::MissingField("address.country_code"))?;
    builder.set_country(country.clone());
    builder.set_country_code(country_code.to_uppercase());

    let lat = place.lat.as_ref().ok_or(Error::MissingField("lat"))?;
    let lon = place.lon.as_ref().ok_or(Error::MissingField("lon"))?;
    builder.set_coordinates(parse_float(lat, "latitude")?, parse_float(lon, "longitude")?);

    if let Some(boundingbox) = &place.boundingbox {
        if let [south, north, west, east] = boundingbox.as_slice() {
            builder.set_bounds(
                parse_float(south, "bounds south")?,
                parse_float(west, "bounds west")?,
                parse_float(north, "bounds north")?,
                parse_float(east, "bounds east")?,
            );
        }
    }

    let mut location = builder.build();

    if let Some(licence) = &place.licence {
        location = location.with_attribution(licence.clone());
    }
    if let Some(display_name) = &place.display_name {
        location = location.with_display_name(display_name.clone());
    }
    if let Some(osm_id) = place.osm_id.as_ref().and_then(|id| id.as_i64()) {
        location = location.with_osm_id(osm_id);
    }
    if let Some(osm_type) = &place.osm_type {
        location = location.with_osm_type(osm_type.clone());
    }

    if !reverse {
        if let Some(place_type) = &place.place_type {
            location = location.with_place_type(place_type.clone());
        }
        if let Some(extratags) = &place.extratags {
            location = location.with_extra_tags(extratags.clone());
        }
        if let Some(namedetails) = &place.namedetails {
            location = location.with_name_details(namedetails.clone());
        }
    }

    Ok(location)
}

fn parse_float(value: &str, what: &str) -> Result<f64> {
    value
        .parse()
        .map_err(|_| Error::InvalidCoordinates(format!("{}: {}", what, value)))
}

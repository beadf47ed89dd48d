//! Centralized constants for the locationiq crate

/// External API endpoints
pub mod api {
    /// LocationIQ API root (Nominatim-compatible)
    pub const BASE_URL: &str = "https://us1.locationiq.com/v1";
}

/// Default request parameters
pub mod defaults {
    /// Default number of results requested by a forward lookup
    pub const LIMIT: usize = 5;

    /// Default zoom level for reverse lookups (building level)
    pub const ZOOM: u8 = 18;
}

//! locationiq: forward and reverse geocoding via the LocationIQ API
//!
//! A provider adapter for the LocationIQ (Nominatim-backed) geocoding
//! service. It turns address text into coordinates and coordinates into
//! structured addresses, mapping the API's JSON into immutable
//! [`LocationIqAddress`] records.
//!
//! ## Features
//!
//! - Forward lookup (text to places) and reverse lookup (coordinates to
//!   address) with the provider's native fallback rules
//! - Injectable HTTP transport, so tests run against canned responses
//! - Immutable address records with copy-on-write `with_*` mutators and a
//!   flat key/value export
//!
//! ## Quick Start
//!
//! ```no_run
//! use locationiq::{GeocodeQuery, HttpTransport, LocationIq, ReverseQuery};
//!
//! # fn main() -> locationiq::Result<()> {
//! let provider = LocationIq::new(HttpTransport::new()?, "your-api-key")?;
//!
//! let results = provider.forward(&GeocodeQuery::new("Brandenburg Gate, Berlin"))?;
//! for address in &results {
//!     println!("{:?}: {:?}", address.coordinates(), address.display_name());
//! }
//!
//! let addresses = provider.reverse(&ReverseQuery::from_coordinates(52.5163, 13.3777))?;
//! # Ok(())
//! # }
//! ```

pub mod address;
pub mod constants;
pub mod error;
pub mod provider;
pub mod query;
pub mod transport;

// Re-export commonly used types
pub use address::{AdminLevel, Bounds, Coordinates, LocationIqAddress};
pub use error::{Error, Result};
pub use provider::LocationIq;
pub use query::{GeocodeQuery, ReverseQuery};
pub use transport::http::HttpTransport;
pub use transport::Transport;

//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod locality_lookup;
mod locality_source;

#[cfg(test)]
pub use locality_lookup::MockLocalityLookup;
pub use locality_lookup::{CheckAddressRequest, LocalityLookup};
#[cfg(test)]
pub use locality_source::MockLocalitySource;
pub use locality_source::{
    FixtureLocalitySource, LocalitySearch, LocalitySource, LocalitySourceError,
};

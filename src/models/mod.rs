//! Domain models for the registrant report
//!
//! Typed rows produced by the normalizers and the enriched table built from
//! them. All tables are rebuilt from the extracts on every run.

pub mod enriched;
pub mod profile;
pub mod region;
pub mod registration;
pub mod traits;

pub use enriched::{EnrichedRecord, EnrichedTable};
pub use profile::RegistrantProfile;
pub use region::{RegionRange, RegionTable};
pub use registration::RegistrationEvent;
pub use traits::EntityModel;

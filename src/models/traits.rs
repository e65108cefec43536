//! Trait definitions for domain models

use std::hash::Hash;

/// A trait for models keyed by an identifier.
///
/// The join between profiles and registrations is expressed in terms of this
/// trait, so any two models sharing an `Id` type can be matched up.
pub trait EntityModel: Clone + Send + Sync + std::fmt::Debug {
    /// The type of identifier used for this model
    type Id: Clone + Eq + Hash + Send + Sync + std::fmt::Debug;

    /// Get the identifier for this model
    fn id(&self) -> &Self::Id;
}

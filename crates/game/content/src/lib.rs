//! Game content: the ability catalog and data file loaders.
//!
//! This crate houses everything the rules crate reaches for through
//! its oracle traits:
//! - The ability and consumable catalog (built in code, since effects
//!   carry callables)
//! - Starter stat tables and species name pools (data-driven via RON)
//! - Map layouts (data-driven via RON)
//!
//! Content is read-only at play time; loaders run once at startup.

pub mod abilities;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use abilities::{AbilityBook, catalog};

#[cfg(feature = "loaders")]
pub use loaders::{MapLoader, StarterTables};

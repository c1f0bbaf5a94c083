//! # Terrisone Core
//!
//! Domain model and interaction logic for the Terrisone region explorer.
//!
//! This crate has no UI dependency. The same selection and map-lifecycle
//! logic runs against the Leaflet widget in the desktop explorer and against
//! [`HeadlessMap`] in tests.
//!
//! ## Key Types
//!
//! - [`RegionCatalog`]: Fixed table of regions with indicator values
//! - [`CategoryRegistry`]: Pure category templates producing [`CategoryReport`]s
//! - [`SelectionState`]: The only mutable entity, changed through four transitions
//! - [`MapAdapter`]: Owns primary/secondary map handles over a [`MapWidget`]
//! - [`RegionExplorer`]: Composes the state machine with the map adapter

pub mod attributes;
pub mod category;
pub mod config;
pub mod error;
pub mod explorer;
pub mod map;
pub mod region;
pub mod selection;

pub use attributes::*;
pub use category::*;
pub use config::*;
pub use error::*;
pub use explorer::*;
pub use map::*;
pub use region::*;
pub use selection::*;

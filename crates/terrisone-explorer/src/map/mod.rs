//! Leaflet integration for the explorer view.

mod leaflet;

pub use leaflet::*;

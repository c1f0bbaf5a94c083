//! Terrisone environmental dashboard
//!
//! This crate provides a Dioxus desktop application presenting environmental
//! indicators for the regions of Peru over an interactive Leaflet map.

pub mod app;
pub mod components;
pub mod map;
pub mod route;
pub mod theme;

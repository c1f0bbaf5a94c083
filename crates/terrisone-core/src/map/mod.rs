//! Map widget abstraction and lifecycle management.
//!
//! [`MapWidget`] is the seam to the third-party mapping widget. The
//! [`MapAdapter`] owns the overview and detail map handles on top of it and
//! translates selection effects into widget calls.

pub mod adapter;
pub mod headless;

pub use adapter::*;
pub use headless::*;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::Viewport;
use crate::error::MapResult;
use crate::region::{Coordinates, Region, RiskLevel};

/// Raster base layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileLayer {
    pub url_template: String,
    pub attribution: String,
    pub max_zoom: u8,
}

/// Text attached to a marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "lines", rename_all = "lowercase")]
pub enum MarkerLabel {
    /// Shown on hover
    Tooltip(Vec<String>),
    /// Shown on click
    Popup(Vec<String>),
}

/// A region marker to place on a map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerSpec {
    pub region: String,
    pub position: Coordinates,
    pub color: String,
    pub icon_size: (u32, u32),
    pub icon_anchor: (u32, u32),
    pub label: MarkerLabel,
    /// Whether clicking reports [`MapEvent::MarkerClicked`]
    pub clickable: bool,
}

impl MarkerSpec {
    /// Overview marker: selects the region when clicked.
    pub fn overview(region: &Region) -> Self {
        Self {
            region: region.name.clone(),
            position: region.coordinates,
            color: region.risk_level.marker_color().to_string(),
            icon_size: (30, 42),
            icon_anchor: (15, 42),
            label: MarkerLabel::Tooltip(vec![
                region.name.clone(),
                "Click for details".to_string(),
            ]),
            clickable: true,
        }
    }

    /// Detail marker: popup with the region's risk level.
    pub fn detail(region: &Region) -> Self {
        Self {
            region: region.name.clone(),
            position: region.coordinates,
            color: region.risk_level.marker_color().to_string(),
            icon_size: (25, 35),
            icon_anchor: (12, 35),
            label: MarkerLabel::Popup(vec![
                region.name.clone(),
                risk_caption(region.risk_level),
            ]),
            clickable: false,
        }
    }
}

fn risk_caption(risk: RiskLevel) -> String {
    format!("{risk} Risk Level")
}

/// User interaction reported by a widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MapEvent {
    MarkerClicked { region: String },
    BackgroundClicked,
}

/// Which of the two maps an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapTarget {
    Primary,
    Secondary,
}

impl MapTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            MapTarget::Primary => "primary",
            MapTarget::Secondary => "secondary",
        }
    }
}

/// A mapping widget capable of hosting map instances in named containers.
///
/// Handles are opaque to the adapter. Click events are delivered out of
/// band as [`MapEvent`]s by the host.
pub trait MapWidget {
    type Handle: Clone + fmt::Debug + PartialEq;

    /// Whether the container element is currently rendered.
    fn container_exists(&self, container_id: &str) -> bool;

    /// Creates a map bound to a container.
    fn create_map(&mut self, container_id: &str, viewport: Viewport) -> MapResult<Self::Handle>;

    fn add_tile_layer(&mut self, map: &Self::Handle, layer: &TileLayer) -> MapResult<()>;

    fn add_marker(&mut self, map: &Self::Handle, marker: &MarkerSpec) -> MapResult<()>;

    /// Reports clicks on empty map area as [`MapEvent::BackgroundClicked`].
    fn bind_background_click(&mut self, map: &Self::Handle) -> MapResult<()>;

    fn set_view(&mut self, map: &Self::Handle, viewport: Viewport);

    /// Recomputes the map size after its container changed.
    fn invalidate_size(&mut self, map: &Self::Handle);

    /// Destroys a map instance and releases its container.
    fn remove(&mut self, map: Self::Handle);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RegionCatalog;

    #[test]
    fn test_detail_marker_popup() {
        let region = RegionCatalog::peru().get("Madre de Dios").unwrap();
        let marker = MarkerSpec::detail(region);
        assert_eq!(
            marker.label,
            MarkerLabel::Popup(vec![
                "Madre de Dios".to_string(),
                "CRITICAL Risk Level".to_string()
            ])
        );
        assert_eq!(marker.color, "#c0392b");
        assert!(!marker.clickable);
    }

    #[test]
    fn test_overview_marker_geometry() {
        let region = RegionCatalog::peru().get("Arequipa").unwrap();
        let marker = MarkerSpec::overview(region);
        assert_eq!(marker.icon_size, (30, 42));
        assert_eq!(marker.icon_anchor, (15, 42));
        assert_eq!(marker.color, "#27ae60");
    }

    #[test]
    fn test_map_event_wire_format() {
        let event: MapEvent =
            serde_json::from_str(r#"{"type":"marker_clicked","region":"Lima"}"#).unwrap();
        assert_eq!(
            event,
            MapEvent::MarkerClicked {
                region: "Lima".to_string()
            }
        );
        let event: MapEvent = serde_json::from_str(r#"{"type":"background_clicked"}"#).unwrap();
        assert_eq!(event, MapEvent::BackgroundClicked);
    }
}

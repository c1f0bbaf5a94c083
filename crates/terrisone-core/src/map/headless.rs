//! In-memory map widget for tests and headless runs
//!
//! Tracks which containers are "rendered", which maps are bound to them,
//! and every call made through [`MapWidget`]. Binding a second map to a
//! container that already hosts one fails, as it does in a real widget.

use std::collections::{HashMap, HashSet};

use crate::config::Viewport;
use crate::error::{MapError, MapResult};

use super::{MapWidget, MarkerSpec, TileLayer};

/// Handle to a headless map instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeadlessHandle(u64);

/// A recorded widget call.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetOp {
    Create { container: String, viewport: Viewport },
    AddTileLayer { container: String, max_zoom: u8 },
    AddMarker { container: String, region: String },
    BindBackgroundClick { container: String },
    SetView { container: String, viewport: Viewport },
    InvalidateSize { container: String },
    Remove { container: String },
}

#[derive(Debug, Clone)]
struct HeadlessInstance {
    container: String,
    viewport: Viewport,
    markers: Vec<MarkerSpec>,
    tile_layers: Vec<TileLayer>,
    background_click: bool,
}

/// Map widget that renders nothing.
#[derive(Debug, Default)]
pub struct HeadlessMap {
    containers: HashSet<String>,
    instances: HashMap<HeadlessHandle, HeadlessInstance>,
    next_id: u64,
    ops: Vec<WidgetOp>,
}

impl HeadlessMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a container element as rendered.
    pub fn add_container(&mut self, container_id: &str) {
        self.containers.insert(container_id.to_string());
    }

    /// Marks a container element as gone.
    pub fn remove_container(&mut self, container_id: &str) {
        self.containers.remove(container_id);
    }

    /// All widget calls so far, oldest first.
    pub fn ops(&self) -> &[WidgetOp] {
        &self.ops
    }

    /// Number of map instances not yet removed.
    pub fn live_maps(&self) -> usize {
        self.instances.len()
    }

    fn instance_in(&self, container_id: &str) -> Option<&HeadlessInstance> {
        self.instances.values().find(|i| i.container == container_id)
    }

    pub fn marker_count(&self, container_id: &str) -> usize {
        self.instance_in(container_id).map_or(0, |i| i.markers.len())
    }

    pub fn markers(&self, container_id: &str) -> Vec<MarkerSpec> {
        self.instance_in(container_id)
            .map(|i| i.markers.clone())
            .unwrap_or_default()
    }

    pub fn view_of(&self, container_id: &str) -> Option<Viewport> {
        self.instance_in(container_id).map(|i| i.viewport)
    }

    pub fn has_background_click(&self, container_id: &str) -> bool {
        self.instance_in(container_id)
            .is_some_and(|i| i.background_click)
    }

    pub fn tile_max_zoom(&self, container_id: &str) -> Option<u8> {
        self.instance_in(container_id)
            .and_then(|i| i.tile_layers.first())
            .map(|l| l.max_zoom)
    }

    fn instance_mut(&mut self, map: &HeadlessHandle) -> MapResult<&mut HeadlessInstance> {
        self.instances
            .get_mut(map)
            .ok_or_else(|| MapError::Widget(format!("stale map handle {}", map.0)))
    }
}

impl MapWidget for HeadlessMap {
    type Handle = HeadlessHandle;

    fn container_exists(&self, container_id: &str) -> bool {
        self.containers.contains(container_id)
    }

    fn create_map(&mut self, container_id: &str, viewport: Viewport) -> MapResult<HeadlessHandle> {
        if !self.container_exists(container_id) {
            return Err(MapError::ContainerMissing(container_id.to_string()));
        }
        if self.instance_in(container_id).is_some() {
            return Err(MapError::Widget(format!(
                "map container {container_id} is already initialized"
            )));
        }

        let handle = HeadlessHandle(self.next_id);
        self.next_id += 1;
        self.instances.insert(
            handle,
            HeadlessInstance {
                container: container_id.to_string(),
                viewport,
                markers: Vec::new(),
                tile_layers: Vec::new(),
                background_click: false,
            },
        );
        self.ops.push(WidgetOp::Create {
            container: container_id.to_string(),
            viewport,
        });
        Ok(handle)
    }

    fn add_tile_layer(&mut self, map: &HeadlessHandle, layer: &TileLayer) -> MapResult<()> {
        let instance = self.instance_mut(map)?;
        instance.tile_layers.push(layer.clone());
        let container = instance.container.clone();
        self.ops.push(WidgetOp::AddTileLayer {
            container,
            max_zoom: layer.max_zoom,
        });
        Ok(())
    }

    fn add_marker(&mut self, map: &HeadlessHandle, marker: &MarkerSpec) -> MapResult<()> {
        let instance = self.instance_mut(map)?;
        instance.markers.push(marker.clone());
        let container = instance.container.clone();
        self.ops.push(WidgetOp::AddMarker {
            container,
            region: marker.region.clone(),
        });
        Ok(())
    }

    fn bind_background_click(&mut self, map: &HeadlessHandle) -> MapResult<()> {
        let instance = self.instance_mut(map)?;
        instance.background_click = true;
        let container = instance.container.clone();
        self.ops.push(WidgetOp::BindBackgroundClick { container });
        Ok(())
    }

    fn set_view(&mut self, map: &HeadlessHandle, viewport: Viewport) {
        if let Some(instance) = self.instances.get_mut(map) {
            instance.viewport = viewport;
            let container = instance.container.clone();
            self.ops.push(WidgetOp::SetView {
                container,
                viewport,
            });
        }
    }

    fn invalidate_size(&mut self, map: &HeadlessHandle) {
        if let Some(instance) = self.instances.get(map) {
            let container = instance.container.clone();
            self.ops.push(WidgetOp::InvalidateSize { container });
        }
    }

    fn remove(&mut self, map: HeadlessHandle) {
        if let Some(instance) = self.instances.remove(&map) {
            self.ops.push(WidgetOp::Remove {
                container: instance.container,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::Coordinates;

    fn viewport() -> Viewport {
        Viewport::new(Coordinates::new(-9.19, -75.0152), 5)
    }

    #[test]
    fn test_double_bind_rejected() {
        let mut widget = HeadlessMap::new();
        widget.add_container("map");

        let first = widget.create_map("map", viewport()).unwrap();
        assert!(matches!(
            widget.create_map("map", viewport()),
            Err(MapError::Widget(_))
        ));

        widget.remove(first);
        assert!(widget.create_map("map", viewport()).is_ok());
    }

    #[test]
    fn test_stale_handle() {
        let mut widget = HeadlessMap::new();
        widget.add_container("map");
        let map = widget.create_map("map", viewport()).unwrap();
        widget.remove(map);

        let layer = TileLayer {
            url_template: String::new(),
            attribution: String::new(),
            max_zoom: 18,
        };
        assert!(widget.add_tile_layer(&map, &layer).is_err());
    }
}

//! [`MapWidget`] implementation driving Leaflet in the webview.
//!
//! Every widget call becomes a small script run through `document::eval`.
//! Map instances live in `window.__terrisoneMaps`, keyed by handle id.
//! Clicks come back through the eval channel opened by [`event_bridge`].
//!
//! Container presence is tracked from the render layer: components report
//! `onmounted` and drop of their map containers via
//! [`LeafletMap::container_rendered`] and [`LeafletMap::container_removed`].

use std::collections::HashSet;

use dioxus::document::{self, Eval};
use serde_json::json;

use terrisone_core::{MapResult, MapWidget, MarkerLabel, MarkerSpec, TileLayer, Viewport};

/// Handle to a Leaflet map in the webview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LeafletHandle(u32);

/// Leaflet-backed map widget.
#[derive(Debug, Default)]
pub struct LeafletMap {
    rendered: HashSet<String>,
    next_id: u32,
    /// When set, scripts are captured here instead of evaluated.
    captured: Option<Vec<String>>,
}

impl LeafletMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// A widget that records scripts instead of running them.
    pub fn capturing() -> Self {
        Self {
            captured: Some(Vec::new()),
            ..Self::default()
        }
    }

    pub fn captured_scripts(&self) -> &[String] {
        self.captured.as_deref().unwrap_or_default()
    }

    pub fn container_rendered(&mut self, container_id: &str) {
        self.rendered.insert(container_id.to_string());
    }

    pub fn container_removed(&mut self, container_id: &str) {
        self.rendered.remove(container_id);
    }

    fn run(&mut self, script: String) {
        match &mut self.captured {
            Some(scripts) => scripts.push(script),
            None => {
                let _ = document::eval(&script);
            }
        }
    }
}

const REGISTRY: &str = "const maps = (window.__terrisoneMaps = window.__terrisoneMaps || {});";

fn create_script(id: u32, container_id: &str, viewport: Viewport) -> String {
    let container = json!(container_id);
    format!(
        r#"(function() {{
            {REGISTRY}
            const el = document.getElementById({container});
            if (!el || typeof L === "undefined") {{ return; }}
            if (el._leaflet_id) {{
                for (const key in maps) {{
                    if (maps[key].getContainer() === el) {{ maps[key].remove(); delete maps[key]; }}
                }}
            }}
            maps[{id}] = L.map({container}).setView([{lat}, {lon}], {zoom});
        }})();"#,
        lat = viewport.center.lat,
        lon = viewport.center.lon,
        zoom = viewport.zoom,
    )
}

fn tile_layer_script(id: u32, layer: &TileLayer) -> String {
    format!(
        r#"(function() {{
            {REGISTRY}
            if (!maps[{id}]) {{ return; }}
            L.tileLayer({url}, {{ attribution: {attribution}, maxZoom: {max_zoom} }}).addTo(maps[{id}]);
        }})();"#,
        url = json!(layer.url_template),
        attribution = json!(layer.attribution),
        max_zoom = layer.max_zoom,
    )
}

fn marker_script(id: u32, marker: &MarkerSpec) -> String {
    let (bind, lines) = match &marker.label {
        MarkerLabel::Tooltip(lines) => ("bindTooltip(label, { permanent: false, direction: 'top' })", lines),
        MarkerLabel::Popup(lines) => ("bindPopup(label)", lines),
    };
    let click = if marker.clickable {
        format!(
            r#"marker.on("click", (e) => {{
                L.DomEvent.stopPropagation(e);
                if (window.__terrisoneEmit) {{ window.__terrisoneEmit({{ type: "marker_clicked", region: {region} }}); }}
            }});"#,
            region = json!(marker.region),
        )
    } else {
        String::new()
    };

    format!(
        r#"(function() {{
            {REGISTRY}
            if (!maps[{id}]) {{ return; }}
            const icon = L.divIcon({{
                className: "custom-marker",
                html: '<div class="location-pin" style="--risk-color: ' + {color} + '"><div class="pin-head"></div><div class="pin-shadow"></div><div class="pulse-animation"></div></div>',
                iconSize: [{w}, {h}],
                iconAnchor: [{ax}, {ay}],
            }});
            const label = document.createElement("div");
            label.className = "marker-label";
            {lines}.forEach((text, i) => {{
                const line = document.createElement(i === 0 ? "strong" : "small");
                line.textContent = text;
                label.appendChild(line);
                label.appendChild(document.createElement("br"));
            }});
            const marker = L.marker([{lat}, {lon}], {{ icon }}).addTo(maps[{id}]).{bind};
            {click}
        }})();"#,
        color = json!(marker.color),
        w = marker.icon_size.0,
        h = marker.icon_size.1,
        ax = marker.icon_anchor.0,
        ay = marker.icon_anchor.1,
        lines = json!(lines),
        lat = marker.position.lat,
        lon = marker.position.lon,
    )
}

fn background_click_script(id: u32) -> String {
    format!(
        r#"(function() {{
            {REGISTRY}
            if (!maps[{id}]) {{ return; }}
            maps[{id}].on("click", () => {{
                if (window.__terrisoneEmit) {{ window.__terrisoneEmit({{ type: "background_clicked" }}); }}
            }});
        }})();"#
    )
}

fn set_view_script(id: u32, viewport: Viewport) -> String {
    format!(
        r#"(function() {{
            {REGISTRY}
            if (maps[{id}]) {{ maps[{id}].setView([{lat}, {lon}], {zoom}); }}
        }})();"#,
        lat = viewport.center.lat,
        lon = viewport.center.lon,
        zoom = viewport.zoom,
    )
}

fn invalidate_script(id: u32) -> String {
    format!(
        r#"(function() {{
            {REGISTRY}
            setTimeout(() => {{ if (maps[{id}]) {{ maps[{id}].invalidateSize(); }} }}, 100);
        }})();"#
    )
}

fn remove_script(id: u32) -> String {
    format!(
        r#"(function() {{
            {REGISTRY}
            if (maps[{id}]) {{ maps[{id}].remove(); delete maps[{id}]; }}
        }})();"#
    )
}

/// Opens the channel Leaflet click handlers report through.
///
/// Receive [`terrisone_core::MapEvent`]s from the returned [`Eval`]. Only
/// one bridge is active; opening another replaces the emitter.
pub fn event_bridge() -> Eval {
    document::eval(
        r#"
        window.__terrisoneEmit = (event) => dioxus.send(event);
        await new Promise(() => {});
        "#,
    )
}

impl MapWidget for LeafletMap {
    type Handle = LeafletHandle;

    fn container_exists(&self, container_id: &str) -> bool {
        self.rendered.contains(container_id)
    }

    fn create_map(&mut self, container_id: &str, viewport: Viewport) -> MapResult<LeafletHandle> {
        let handle = LeafletHandle(self.next_id);
        self.next_id += 1;
        self.run(create_script(handle.0, container_id, viewport));
        Ok(handle)
    }

    fn add_tile_layer(&mut self, map: &LeafletHandle, layer: &TileLayer) -> MapResult<()> {
        self.run(tile_layer_script(map.0, layer));
        Ok(())
    }

    fn add_marker(&mut self, map: &LeafletHandle, marker: &MarkerSpec) -> MapResult<()> {
        self.run(marker_script(map.0, marker));
        Ok(())
    }

    fn bind_background_click(&mut self, map: &LeafletHandle) -> MapResult<()> {
        self.run(background_click_script(map.0));
        Ok(())
    }

    fn set_view(&mut self, map: &LeafletHandle, viewport: Viewport) {
        self.run(set_view_script(map.0, viewport));
    }

    fn invalidate_size(&mut self, map: &LeafletHandle) {
        self.run(invalidate_script(map.0));
    }

    fn remove(&mut self, map: LeafletHandle) {
        self.run(remove_script(map.0));
    }
}

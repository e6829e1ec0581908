//! Self-contained Leaflet map export.
//!
//! Mirrors the original tool's rendering: OSM tiles, the snapped path as a
//! thick orange polyline, one marker per stop with a popup.  The page needs
//! nothing but a browser and the Leaflet CDN.

use std::io::Write;

use wd_core::{Coordinate, TargetPoint};
use wd_plan::PlannedRoute;
use wd_snap::SnappedPath;

use crate::exporter::RouteExporter;
use crate::ExportResult;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

pub struct HtmlMapExporter;

impl RouteExporter for HtmlMapExporter {
    fn extension(&self) -> &'static str {
        "html"
    }

    fn export(
        &self,
        route: &PlannedRoute,
        path: &SnappedPath,
        out: &mut dyn Write,
    ) -> ExportResult<()> {
        let start = route.start();

        writeln!(out, "<!DOCTYPE html>")?;
        writeln!(out, "<html lang=\"en\">")?;
        writeln!(out, "<head>")?;
        writeln!(out, "  <meta charset=\"utf-8\"/>")?;
        writeln!(out, "  <title>Wardriving route</title>")?;
        writeln!(out, "  <link rel=\"stylesheet\" href=\"{LEAFLET_CSS}\"/>")?;
        writeln!(out, "  <script src=\"{LEAFLET_JS}\"></script>")?;
        writeln!(
            out,
            "  <style>html, body, #map {{ height: 100%; margin: 0; }}</style>"
        )?;
        writeln!(out, "</head>")?;
        writeln!(out, "<body>")?;
        writeln!(out, "  <div id=\"map\"></div>")?;
        writeln!(out, "  <script>")?;
        writeln!(
            out,
            "    var map = L.map('map').setView([{:.6}, {:.6}], 13);",
            start.lat(),
            start.lon()
        )?;
        writeln!(
            out,
            "    L.tileLayer('https://tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png', {{ attribution: '&copy; OpenStreetMap contributors' }}).addTo(map);"
        )?;
        writeln!(out, "    var path = {};", js_coord_array(&path.points))?;
        writeln!(
            out,
            "    var line = L.polyline(path, {{ color: 'orange', weight: 10 }}).addTo(map);"
        )?;
        writeln!(
            out,
            "    L.marker([{:.6}, {:.6}]).addTo(map).bindPopup('Start');",
            start.lat(),
            start.lon()
        )?;
        for stop in route.stops() {
            writeln!(
                out,
                "    L.marker([{:.6}, {:.6}]).addTo(map).bindPopup('{}');",
                stop.pos.lat(),
                stop.pos.lon(),
                js_escape(&popup_label(stop))
            )?;
        }
        writeln!(out, "    if (path.length > 1) {{ map.fitBounds(line.getBounds()); }}")?;
        writeln!(out, "  </script>")?;
        writeln!(out, "</body>")?;
        writeln!(out, "</html>")?;
        Ok(())
    }
}

fn popup_label(stop: &TargetPoint) -> String {
    match &stop.ssid {
        Some(ssid) => format!("{ssid}<br>{} ({} dBm)", stop.bssid, stop.signal_dbm),
        None => format!("{} ({} dBm)", stop.bssid, stop.signal_dbm),
    }
}

/// `[[lat, lon], …]` literal for embedding in the page script.
fn js_coord_array(points: &[Coordinate]) -> String {
    let mut s = String::with_capacity(points.len() * 24 + 2);
    s.push('[');
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            s.push(',');
        }
        s.push_str(&format!("[{:.6},{:.6}]", p.lat(), p.lon()));
    }
    s.push(']');
    s
}

/// Escape for a single-quoted JS string inside the generated script.
fn js_escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', " ")
        .replace("</", "<\\/")
}

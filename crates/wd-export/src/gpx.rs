//! GPX 1.1 export: one `<wpt>` per stop, the snapped path as a `<trk>`.
//!
//! Output loads in any GPS tool or navigation app; waypoint names carry the
//! BSSID so stops stay identifiable after import.

use std::io::Write;

use wd_plan::PlannedRoute;
use wd_snap::SnappedPath;

use crate::exporter::RouteExporter;
use crate::ExportResult;

pub struct GpxExporter;

impl RouteExporter for GpxExporter {
    fn extension(&self) -> &'static str {
        "gpx"
    }

    fn export(
        &self,
        route: &PlannedRoute,
        path: &SnappedPath,
        out: &mut dyn Write,
    ) -> ExportResult<()> {
        writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            out,
            r#"<gpx version="1.1" creator="wardrive" xmlns="http://www.topografix.com/GPX/1/1">"#
        )?;

        for stop in route.stops() {
            writeln!(
                out,
                r#"  <wpt lat="{:.6}" lon="{:.6}">"#,
                stop.pos.lat(),
                stop.pos.lon()
            )?;
            writeln!(out, "    <name>{}</name>", xml_escape(&stop.bssid.to_string()))?;
            let desc = match &stop.ssid {
                Some(ssid) => format!("{ssid} | {} dBm | {}", stop.signal_dbm, stop.encryption),
                None => format!("{} dBm | {}", stop.signal_dbm, stop.encryption),
            };
            writeln!(out, "    <desc>{}</desc>", xml_escape(&desc))?;
            writeln!(out, "  </wpt>")?;
        }

        writeln!(out, "  <trk>")?;
        writeln!(out, "    <name>wardriving route</name>")?;
        writeln!(out, "    <trkseg>")?;
        for p in &path.points {
            writeln!(
                out,
                r#"      <trkpt lat="{:.6}" lon="{:.6}"/>"#,
                p.lat(),
                p.lon()
            )?;
        }
        writeln!(out, "    </trkseg>")?;
        writeln!(out, "  </trk>")?;
        writeln!(out, "</gpx>")?;
        Ok(())
    }
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

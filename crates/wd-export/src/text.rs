//! Turn-by-turn text export.
//!
//! Leg distances are recomputed with the same haversine the planner used,
//! so the printed cumulative column ends exactly at
//! `PlannedRoute::total_km`.

use std::io::Write;

use wd_core::km_to_miles;
use wd_plan::PlannedRoute;
use wd_snap::SnappedPath;

use crate::exporter::RouteExporter;
use crate::ExportResult;

pub struct TextExporter;

impl RouteExporter for TextExporter {
    fn extension(&self) -> &'static str {
        "txt"
    }

    fn export(
        &self,
        route: &PlannedRoute,
        path: &SnappedPath,
        out: &mut dyn Write,
    ) -> ExportResult<()> {
        writeln!(out, "Wardriving route: {} stops", route.stops().len())?;
        writeln!(out, "Start: {}", route.start())?;
        writeln!(out)?;

        let mut current = route.start();
        let mut cumulative_km = 0.0;
        for (i, stop) in route.stops().iter().enumerate() {
            let leg_km = current.distance_km(stop.pos);
            cumulative_km += leg_km;

            writeln!(
                out,
                "{:>3}. {}  {}  [{} dBm, {}]",
                i + 1,
                stop.bssid,
                stop.pos,
                stop.signal_dbm,
                stop.encryption
            )?;
            writeln!(
                out,
                "     {}  leg {:.2} km, total {:.2} km",
                stop.ssid.as_deref().unwrap_or("<hidden>"),
                leg_km,
                cumulative_km
            )?;
            current = stop.pos;
        }

        writeln!(out)?;
        writeln!(
            out,
            "Straight-line total: {:.2} km ({:.2} mi)",
            route.total_km(),
            route.total_miles()
        )?;
        writeln!(
            out,
            "Snapped path length: {:.2} km ({:.2} mi)",
            path.length_km(),
            km_to_miles(path.length_km())
        )?;
        Ok(())
    }
}

//! wardrive — plan a driving route covering nearby Wi-Fi access points.
//!
//! Reads a survey-export CSV of observed networks, filters it around a start
//! coordinate, orders the survivors with the greedy nearest-neighbor
//! planner, snaps the waypoints to a path, and writes GPX, turn-by-turn
//! text, and an HTML map — all from one invocation:
//!
//! ```sh
//! wardrive --input scan.csv --start "36.1699,-115.1398" --radius-km 5
//! ```
//!
//! The libraries below this binary never log or print; everything
//! user-facing happens here.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use wd_core::Coordinate;
use wd_export::{GpxExporter, HtmlMapExporter, RouteExporter, TextExporter, export_to_file};
use wd_plan::{GreedyPlanner, PointStore, RoutePlanner};
use wd_snap::{StraightLineSnapper, snap_chunked};
use wd_survey::{CandidateSource, CsvSource, EncryptionFilter, SurveyQuery};

#[derive(Parser, Debug)]
#[command(name = "wardrive", about = "Plan a driving route covering nearby Wi-Fi access points.")]
struct Args {
    /// Survey-export CSV with candidate networks
    /// (header: bssid,ssid,lat,lon,signal_dbm,encryption).
    #[arg(long)]
    input: PathBuf,

    /// Start location as "lat,lon" (e.g. "36.1699,-115.1398").
    #[arg(long)]
    start: Coordinate,

    /// Search radius around the start, kilometres.
    #[arg(long, default_value_t = 5.0)]
    radius_km: f64,

    /// Which networks to target: open, secure, or both.
    #[arg(long, default_value_t = EncryptionFilter::Both)]
    network_type: EncryptionFilter,

    /// Ignore networks weaker than this (dBm).
    #[arg(long, default_value_t = -85)]
    min_signal_dbm: i16,

    /// Cap on candidate points (planning is O(n²) in this count).
    #[arg(long)]
    max_points: Option<usize>,

    /// Directory for the exported files.
    #[arg(long, default_value = "output")]
    out_dir: PathBuf,

    /// Densification step for the offline snapper, kilometres.
    #[arg(long, default_value_t = 0.25)]
    segment_km: f64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 1. Fetch candidates.
    let query = SurveyQuery {
        center: args.start,
        radius_km: args.radius_km,
        min_signal_dbm: args.min_signal_dbm,
        encryption: args.network_type,
    };
    let source = CsvSource::new(&args.input);
    let candidates = source
        .fetch(&query)
        .with_context(|| format!("reading {}", args.input.display()))?;
    info!(
        count = candidates.len(),
        radius_km = args.radius_km,
        network_type = %args.network_type,
        "candidates in range"
    );

    if candidates.is_empty() {
        println!("No networks found.");
        return Ok(());
    }

    // 2. Plan the visiting order.
    let mut store = PointStore::load(args.start, candidates, args.max_points);
    info!(candidates = store.len(), "planning greedy route");
    let route = GreedyPlanner::default().plan(&mut store)?;

    // 3. Snap the waypoints to a path.
    let snapper = StraightLineSnapper {
        segment_km: args.segment_km,
    };
    let path = snap_chunked(&snapper, &route.waypoints())?;
    debug!(points = path.points.len(), "snapped path");

    // 4. Export.
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;
    let epoch = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
    let exporters: [&dyn RouteExporter; 3] = [&GpxExporter, &TextExporter, &HtmlMapExporter];
    for exporter in exporters {
        let file = args
            .out_dir
            .join(format!("wardriving_route_{epoch}.{}", exporter.extension()));
        export_to_file(exporter, &route, &path, &file)
            .with_context(|| format!("writing {}", file.display()))?;
        println!("Wardriving route saved to '{}'", file.display());
    }

    // 5. Summary.
    if let (Some(first), Some(last)) = (route.stops().first(), route.stops().last()) {
        println!("First stop: {} {}", first.bssid, first.pos);
        println!("Last stop:  {} {}", last.bssid, last.pos);
    }
    println!(
        "{} stops | {:.2} km straight-line ({:.2} mi) | {:.2} km snapped",
        route.stops().len(),
        route.total_km(),
        route.total_miles(),
        path.length_km()
    );

    Ok(())
}

//! The `RouteExporter` trait shared by every output format.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use wd_plan::PlannedRoute;
use wd_snap::SnappedPath;

use crate::ExportResult;

/// Writes one planned route, with its snapped path, in some format.
///
/// Exporters never mutate or reorder their inputs; all backends render the
/// same route/path pair.
pub trait RouteExporter {
    /// File extension for this format, without the dot.
    fn extension(&self) -> &'static str;

    /// Render `route` and `path` into `out`.
    fn export(
        &self,
        route: &PlannedRoute,
        path: &SnappedPath,
        out: &mut dyn Write,
    ) -> ExportResult<()>;
}

/// Export to a file, buffered and flushed.
pub fn export_to_file(
    exporter: &dyn RouteExporter,
    route: &PlannedRoute,
    path: &SnappedPath,
    file: &Path,
) -> ExportResult<()> {
    let mut out = BufWriter::new(File::create(file)?);
    exporter.export(route, path, &mut out)?;
    out.flush()?;
    Ok(())
}

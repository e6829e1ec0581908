//! `wd-export` — output adapters for a finished route.
//!
//! Every backend consumes the same immutable `PlannedRoute` + `SnappedPath`
//! pair through the [`RouteExporter`] trait:
//!
//! | Module       | Backend                       | Output                    |
//! |--------------|-------------------------------|---------------------------|
//! | [`gpx`]      | `GpxExporter`                 | GPX 1.1 (`.gpx`)          |
//! | [`text`]     | `TextExporter`                | turn-by-turn text (`.txt`)|
//! | [`html`]     | `HtmlMapExporter`             | Leaflet map (`.html`)     |
//!
//! Exporters write to any `io::Write`, so tests assert on byte buffers and
//! the CLI hands them buffered files via [`export_to_file`].

pub mod error;
pub mod exporter;
pub mod gpx;
pub mod html;
pub mod text;


pub use error::{ExportError, ExportResult};
pub use exporter::{RouteExporter, export_to_file};
pub use gpx::GpxExporter;
pub use html::HtmlMapExporter;
pub use text::TextExporter;

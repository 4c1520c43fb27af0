//! PDF export adapters.

mod lopdf_exporter;

pub use lopdf_exporter::LopdfExporter;

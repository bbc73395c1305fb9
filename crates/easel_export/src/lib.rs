//! Easel Exporters
//!
//! Render a built scene as either a line-oriented textual description or SVG
//! markup with `<animate>` tags. Both exporters are pure functions over the
//! scene's query surface: exporting twice yields byte-identical output.

pub mod error;
pub mod svg;
pub mod text;

pub use error::ExportError;
pub use svg::SvgExporter;
pub use text::TextExporter;

//! Text input and output around the core: the edge-list loader and
//! plain-text rendering of graphs and results.

pub mod loader;
pub mod render;

pub use loader::{load_graph, parse_graph, parse_header, read_graph};
pub use render::LabelStyle;

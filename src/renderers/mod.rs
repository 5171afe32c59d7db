//! Rendering: drawing surface, palette, diagram composition, PNG export.

pub mod canvas;
pub mod graph;
pub mod palette;
pub mod raster;

pub use canvas::{Color, Figure};
pub use graph::{RenderStyle, compose_svg, draw_myers_graph, draw_myers_graph_with};

//! myers-graph — renders the edit graph used to explain the Myers diff
//! algorithm.
//!
//! Given two symbol sequences, draws the full alignment lattice with match
//! edges, Myers' k-diagonal bands, and one shortest edit path, under a
//! pluggable coordinate transform (orthogonal or rhombic projection), and
//! writes the result as a 300-DPI PNG.
//!
//! Modules:
//!   solver      — DP cost table + deterministic path reconstruction
//!   graph       — petgraph lattice model + k-band geometry
//!   transform   — pure grid→plane coordinate mappings
//!   renderers   — Figure surface, palette, composition, PNG export

pub mod graph;
pub mod renderers;
pub mod solver;
pub mod transform;

pub use graph::{EdgeKind, EditGraph, band_endpoints};
pub use renderers::{RenderStyle, compose_svg, draw_myers_graph, draw_myers_graph_with};
pub use solver::{CostTable, Path, compute_edit_path, non_diagonal_steps};
pub use transform::{Transform, transform_classic, transform_rhombic};

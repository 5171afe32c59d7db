//! Edit-graph renderer — composes the full diagram and persists it.
//!
//! Layering matches the source diagram: grid skeleton, then match edges,
//! axis labels, k-diagonal bands, and the highlighted edit path on top,
//! with step indices above everything. Z-layers reproduce that dominance;
//! within a layer the stable sort keeps insertion order.

use std::path::Path as FsPath;

use anyhow::Result;

use super::canvas::{Color, Figure};
use super::palette;
use super::raster;
use crate::graph::{EdgeKind, EditGraph, band_endpoints};
use crate::solver::compute_edit_path;
use crate::transform::Transform;

// ─── RenderStyle ──────────────────────────────────────────────────────────────

/// Styling parameters for one rendered diagram. The defaults are the
/// contractual look: black node dots, translucent blue skeleton, heavier
/// red match edges, dashed band lines, green path with white step indices.
pub struct RenderStyle {
    pub node_size: f64,
    pub node_color: Color,
    pub grid_color: Color,
    pub grid_width: f64,
    pub grid_alpha: f64,
    pub match_color: Color,
    pub match_width: f64,
    pub match_alpha: f64,
    pub label_size: f64,
    pub a_label_color: Color,
    pub b_label_color: Color,
    pub band_width: f64,
    pub band_alpha: f64,
    pub band_label_size: f64,
    pub path_color: Color,
    pub path_width: f64,
    pub path_marker_size: f64,
    pub path_marker_edge: Color,
    pub step_size: f64,
    pub step_color: Color,
    pub step_background: Color,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            node_size: 5.0,
            node_color: Color::BLACK,
            grid_color: Color::BLUE,
            grid_width: 1.0,
            grid_alpha: 0.5,
            match_color: Color::RED,
            match_width: 2.0,
            match_alpha: 0.8,
            label_size: 12.0,
            a_label_color: Color::DARK_BLUE,
            b_label_color: Color::DARK_RED,
            band_width: 1.0,
            band_alpha: 0.4,
            band_label_size: 8.0,
            path_color: Color::GREEN,
            path_width: 3.0,
            path_marker_size: 8.0,
            path_marker_edge: Color::BLACK,
            step_size: 8.0,
            step_color: Color::WHITE,
            step_background: Color::GREEN,
        }
    }
}

// ─── Composition ──────────────────────────────────────────────────────────────

/// Compose the complete diagram as an SVG document. Pure with respect to
/// the filesystem; [`draw_myers_graph`] adds the PNG persistence tail.
pub fn compose_svg(
    title: &str,
    title_pad: f64,
    a: &str,
    b: &str,
    transform: Transform,
    style: &RenderStyle,
) -> String {
    let graph = EditGraph::build(a, b);
    let (n, m) = graph.dims();
    let path = compute_edit_path(a, b);

    let mut fig = Figure::new();
    fig.set_title(title, title_pad);

    let t = |x: usize, y: usize| transform(x as f64, y as f64);

    // 1. Grid skeleton: axis-aligned edges under the transform, node dots
    //    on top of them.
    for (from, to, kind) in graph.edges() {
        if kind == EdgeKind::Match {
            continue;
        }
        fig.line(
            &[t(from.0, from.1), t(to.0, to.1)],
            style.grid_color,
            style.grid_width,
            style.grid_alpha,
            false,
            2,
        );
    }
    for (x, y) in graph.nodes() {
        let (tx, ty) = t(x, y);
        fig.marker(tx, ty, style.node_size, style.node_color, None, 3);
    }

    // 2. Match edges, visually distinct from the skeleton.
    for (from, to, kind) in graph.edges() {
        if kind != EdgeKind::Match {
            continue;
        }
        fig.line(
            &[t(from.0, from.1), t(to.0, to.1)],
            style.match_color,
            style.match_width,
            style.match_alpha,
            false,
            2,
        );
    }

    // 3. Axis labels at half-integer offsets, through the same transform.
    for (i, ch) in a.chars().enumerate() {
        let (tx, ty) = transform(i as f64 + 0.5, -0.25);
        fig.text(
            tx,
            ty,
            &ch.to_string(),
            style.label_size,
            style.a_label_color,
            1.0,
            None,
            3,
        );
    }
    for (j, ch) in b.chars().enumerate() {
        let (tx, ty) = transform(-0.25, j as f64 + 0.5);
        fig.text(
            tx,
            ty,
            &ch.to_string(),
            style.label_size,
            style.b_label_color,
            1.0,
            None,
            3,
        );
    }

    // 4. K-diagonal bands: two dashed segments per band with a midpoint
    //    label; degenerate bands (fewer than two distinct boundary points)
    //    are skipped.
    let max_k = n + m;
    let colors = palette::categorical(max_k + 1);
    for k in 0..=max_k {
        let points = band_endpoints(k, n, m);
        if points.len() < 2 {
            continue;
        }
        let start = points[0];
        let end = points[points.len() - 1];
        let mid = (
            (start.0 + end.0) as f64 / 2.0,
            (start.1 + end.1) as f64 / 2.0,
        );
        let ts = t(start.0, start.1);
        let tm = transform(mid.0, mid.1);
        let te = t(end.0, end.1);
        let color = colors[k];
        fig.line(&[ts, tm], color, style.band_width, style.band_alpha, true, 2);
        fig.line(&[tm, te], color, style.band_width, style.band_alpha, true, 2);
        fig.text(
            tm.0,
            tm.1,
            &format!("k={k}"),
            style.band_label_size,
            color,
            0.8,
            None,
            3,
        );
    }

    // 5. Path overlay: emphasized polyline, markers, then step indices.
    let path_points: Vec<(f64, f64)> = path.iter().map(|&(x, y)| t(x, y)).collect();
    fig.line(
        &path_points,
        style.path_color,
        style.path_width,
        1.0,
        false,
        4,
    );
    for &(tx, ty) in &path_points {
        fig.marker(
            tx,
            ty,
            style.path_marker_size,
            style.path_color,
            Some(style.path_marker_edge),
            4,
        );
    }
    for (step, &(tx, ty)) in path_points.iter().enumerate() {
        fig.text(
            tx,
            ty,
            &step.to_string(),
            style.step_size,
            style.step_color,
            1.0,
            Some(style.step_background),
            5,
        );
    }

    fig.to_svg()
}

// ─── Rendering entry points ───────────────────────────────────────────────────

/// Render the edit graph of `a` and `b` under `transform` and write a PNG
/// to `output_file`. Uses the default [`RenderStyle`].
pub fn draw_myers_graph(
    title: &str,
    title_pad: f64,
    a: &str,
    b: &str,
    transform: Transform,
    output_file: &FsPath,
) -> Result<()> {
    draw_myers_graph_with(&RenderStyle::default(), title, title_pad, a, b, transform, output_file)
}

/// As [`draw_myers_graph`], with explicit styling.
pub fn draw_myers_graph_with(
    style: &RenderStyle,
    title: &str,
    title_pad: f64,
    a: &str,
    b: &str,
    transform: Transform,
    output_file: &FsPath,
) -> Result<()> {
    let svg = compose_svg(title, title_pad, a, b, transform, style);
    raster::save_png(&svg, output_file)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{transform_classic, transform_rhombic};

    fn fixture_svg(transform: Transform) -> String {
        compose_svg(
            "Myers Diff Graph",
            20.0,
            "ABCABBA",
            "CBABAC",
            transform,
            &RenderStyle::default(),
        )
    }

    #[test]
    fn test_node_and_path_markers() {
        let svg = fixture_svg(transform_classic);
        // 8×7 lattice dots plus 10 path markers.
        let circles = svg.matches("<circle").count();
        assert_eq!(circles, 8 * 7 + 10);
    }

    #[test]
    fn test_band_labels_nondegenerate_only() {
        let svg = fixture_svg(transform_classic);
        // k=0 and k=13 collapse to a corner point and are skipped.
        assert!(!svg.contains(">k=0<"));
        assert!(!svg.contains(">k=13<"));
        for k in 1..=12 {
            assert!(svg.contains(&format!(">k={k}<")), "missing band k={k}");
        }
    }

    #[test]
    fn test_step_indices_present() {
        let svg = fixture_svg(transform_classic);
        for step in 0..=9 {
            assert!(svg.contains(&format!(">{step}<")), "missing step {step}");
        }
        assert!(!svg.contains(">10<"));
    }

    #[test]
    fn test_title_rendered() {
        let svg = fixture_svg(transform_classic);
        assert!(svg.contains("Myers Diff Graph"));
    }

    #[test]
    fn test_projections_share_topology() {
        let classic = fixture_svg(transform_classic);
        let rhombic = fixture_svg(transform_rhombic);
        assert_eq!(
            classic.matches("<circle").count(),
            rhombic.matches("<circle").count()
        );
        assert_eq!(
            classic.matches("<polyline").count(),
            rhombic.matches("<polyline").count()
        );
        // Coordinates differ between projections.
        assert_ne!(classic, rhombic);
    }

    #[test]
    fn test_empty_sequences_render() {
        let svg = compose_svg(
            "",
            0.0,
            "",
            "",
            transform_classic,
            &RenderStyle::default(),
        );
        // One lattice node, one path marker, no bands.
        assert_eq!(svg.matches("<circle").count(), 2);
        assert!(!svg.contains("k="));
    }
}

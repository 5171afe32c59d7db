//! PNG export — rasterizes a composed SVG document with resvg.
//!
//! The SVG's own dimensions are the tight bounding box; rasterization only
//! scales them up to the target DPI. The pixmap and font database are
//! scoped to this call and released on return, error paths included.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tiny_skia::Pixmap;

/// Output resolution. SVG units are points (72 per inch).
pub const DPI: f32 = 300.0;

/// Rasterize `svg` and write it to `output_file` as a PNG.
pub fn save_png(svg: &str, output_file: &Path) -> Result<()> {
    let mut options = resvg::usvg::Options::default();
    options.font_family = "monospace".to_string();
    options.fontdb_mut().load_system_fonts();

    let tree = resvg::usvg::Tree::from_str(svg, &options)
        .map_err(|err| anyhow!("failed to parse composed SVG: {err}"))?;

    let scale = DPI / 72.0;
    let size = tree.size();
    let width = (size.width() * scale).ceil() as u32;
    let height = (size.height() * scale).ceil() as u32;

    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| anyhow!("failed to allocate {width}x{height} surface"))?;
    let transform = tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    let png = pixmap
        .encode_png()
        .map_err(|err| anyhow!("failed to encode PNG: {err}"))?;
    fs::write(output_file, png)
        .with_context(|| format!("failed to write '{}'", output_file.display()))?;
    Ok(())
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_png_writes_magic() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 20 20"><rect width="20" height="20" fill="white"/></svg>"#;
        let out = std::env::temp_dir().join("myers_graph_raster_test.png");
        save_png(svg, &out).unwrap();
        let bytes = fs::read(&out).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        let _ = fs::remove_file(&out);
    }

    #[test]
    fn test_save_png_rejects_bad_svg() {
        let out = std::env::temp_dir().join("myers_graph_raster_bad.png");
        assert!(save_png("not an svg", &out).is_err());
    }

    #[test]
    fn test_save_png_unwritable_path() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="4"><rect width="4" height="4" fill="white"/></svg>"#;
        let out = Path::new("/nonexistent-dir/out.png");
        assert!(save_png(svg, out).is_err());
    }
}

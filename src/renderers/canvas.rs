//! Figure — retained drawing surface serialized to SVG.
//!
//! Elements (markers, polylines, text) are collected with a z-order and
//! emitted back-to-front, so later layers visually dominate at overlaps.
//! The figure tracks its content bounding box and crops tightly to it,
//! with a uniform scale per grid unit (fixed aspect ratio, no axes).

// ─── Color ────────────────────────────────────────────────────────────────────

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const BLACK: Color = Color(0, 0, 0);
    pub const WHITE: Color = Color(255, 255, 255);
    pub const BLUE: Color = Color(0, 0, 255);
    pub const RED: Color = Color(255, 0, 0);
    pub const GREEN: Color = Color(0, 128, 0);
    pub const DARK_BLUE: Color = Color(0, 0, 139);
    pub const DARK_RED: Color = Color(139, 0, 0);

    pub fn css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

// ─── Elements ─────────────────────────────────────────────────────────────────

enum Element {
    Marker {
        x: f64,
        y: f64,
        /// Radius in output points.
        size: f64,
        fill: Color,
        edge: Option<Color>,
    },
    Line {
        points: Vec<(f64, f64)>,
        color: Color,
        width: f64,
        alpha: f64,
        dashed: bool,
    },
    Text {
        x: f64,
        y: f64,
        text: String,
        size: f64,
        color: Color,
        alpha: f64,
        background: Option<Color>,
    },
}

// ─── Figure ───────────────────────────────────────────────────────────────────

/// Output points per grid unit.
const CELL: f64 = 72.0;
/// Margin around the content bounding box, in points.
const PAD: f64 = 36.0;
const TITLE_FONT: f64 = 16.0;
const FONT_FAMILY: &str = "monospace";

/// A scoped drawing surface. Dropping it releases everything; persistence
/// goes through [`Figure::to_svg`] and the rasterizer.
pub struct Figure {
    elements: Vec<(i32, Element)>,
    /// (min_x, min_y, max_x, max_y) over all element anchor points.
    bounds: Option<(f64, f64, f64, f64)>,
    title: Option<(String, f64)>,
}

impl Figure {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            bounds: None,
            title: None,
        }
    }

    /// Set the figure title and its vertical padding in points.
    pub fn set_title(&mut self, title: &str, pad: f64) {
        if !title.is_empty() {
            self.title = Some((title.to_string(), pad));
        }
    }

    fn include(&mut self, x: f64, y: f64) {
        self.bounds = Some(match self.bounds {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        });
    }

    /// Add a circular point marker. `size` is the radius in points.
    pub fn marker(&mut self, x: f64, y: f64, size: f64, fill: Color, edge: Option<Color>, z: i32) {
        self.include(x, y);
        self.elements.push((
            z,
            Element::Marker {
                x,
                y,
                size,
                fill,
                edge,
            },
        ));
    }

    /// Add a polyline through `points` (plane coordinates, y up).
    pub fn line(
        &mut self,
        points: &[(f64, f64)],
        color: Color,
        width: f64,
        alpha: f64,
        dashed: bool,
        z: i32,
    ) {
        for &(x, y) in points {
            self.include(x, y);
        }
        self.elements.push((
            z,
            Element::Line {
                points: points.to_vec(),
                color,
                width,
                alpha,
                dashed,
            },
        ));
    }

    /// Add centered text, optionally over a backing rectangle.
    #[allow(clippy::too_many_arguments)]
    pub fn text(
        &mut self,
        x: f64,
        y: f64,
        text: &str,
        size: f64,
        color: Color,
        alpha: f64,
        background: Option<Color>,
        z: i32,
    ) {
        self.include(x, y);
        self.elements.push((
            z,
            Element::Text {
                x,
                y,
                text: text.to_string(),
                size,
                color,
                alpha,
                background,
            },
        ));
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Serialize to an SVG document: white background, tight crop to the
    /// tracked bounds plus margin, y-axis flipped to screen orientation,
    /// elements sorted by z (stable, so insertion order breaks ties).
    pub fn to_svg(&self) -> String {
        let (min_x, min_y, max_x, max_y) = self.bounds.unwrap_or((0.0, 0.0, 0.0, 0.0));
        let title_block = match &self.title {
            Some((_, pad)) => TITLE_FONT + pad + 8.0,
            None => 0.0,
        };
        let width = (max_x - min_x) * CELL + 2.0 * PAD;
        let height = (max_y - min_y) * CELL + 2.0 * PAD + title_block;
        let px = |x: f64| PAD + (x - min_x) * CELL;
        let py = |y: f64| PAD + title_block + (max_y - y) * CELL;

        let mut parts = vec![
            format!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width:.1}" height="{height:.1}" viewBox="0 0 {width:.1} {height:.1}">"#
            ),
            format!(r#"<rect width="{width:.1}" height="{height:.1}" fill="white"/>"#),
        ];

        if let Some((title, _)) = &self.title {
            parts.push(format!(
                r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" dominant-baseline="central" font-family="{FONT_FAMILY}" font-size="{TITLE_FONT}" fill="black">{}</text>"#,
                width / 2.0,
                PAD / 2.0 + TITLE_FONT / 2.0,
                escape(title)
            ));
        }

        let mut order: Vec<&(i32, Element)> = self.elements.iter().collect();
        order.sort_by_key(|(z, _)| *z);

        for (_, el) in order {
            match el {
                Element::Marker {
                    x,
                    y,
                    size,
                    fill,
                    edge,
                } => {
                    let stroke = match edge {
                        Some(c) => format!(r#" stroke="{}" stroke-width="1""#, c.css()),
                        None => String::new(),
                    };
                    parts.push(format!(
                        r#"<circle cx="{:.2}" cy="{:.2}" r="{:.1}" fill="{}"{stroke}/>"#,
                        px(*x),
                        py(*y),
                        size,
                        fill.css()
                    ));
                }
                Element::Line {
                    points,
                    color,
                    width,
                    alpha,
                    dashed,
                } => {
                    let pts: String = points
                        .iter()
                        .map(|&(x, y)| format!("{:.2},{:.2}", px(x), py(y)))
                        .collect::<Vec<_>>()
                        .join(" ");
                    let dash = if *dashed {
                        r#" stroke-dasharray="6 4""#
                    } else {
                        ""
                    };
                    let opacity = if *alpha < 1.0 {
                        format!(r#" stroke-opacity="{alpha:.2}""#)
                    } else {
                        String::new()
                    };
                    parts.push(format!(
                        r#"<polyline points="{pts}" fill="none" stroke="{}" stroke-width="{width:.1}"{opacity}{dash}/>"#,
                        color.css()
                    ));
                }
                Element::Text {
                    x,
                    y,
                    text,
                    size,
                    color,
                    alpha,
                    background,
                } => {
                    let cx = px(*x);
                    let cy = py(*y);
                    if let Some(bg) = background {
                        // Approximate glyph extent for the backing rect.
                        let w = text.chars().count() as f64 * size * 0.62 + 4.0;
                        let h = size + 4.0;
                        parts.push(format!(
                            r#"<rect x="{:.2}" y="{:.2}" width="{w:.1}" height="{h:.1}" fill="{}"/>"#,
                            cx - w / 2.0,
                            cy - h / 2.0,
                            bg.css()
                        ));
                    }
                    let opacity = if *alpha < 1.0 {
                        format!(r#" fill-opacity="{alpha:.2}""#)
                    } else {
                        String::new()
                    };
                    parts.push(format!(
                        r#"<text x="{cx:.2}" y="{cy:.2}" text-anchor="middle" dominant-baseline="central" font-family="{FONT_FAMILY}" font-size="{size}" fill="{}"{opacity}>{}</text>"#,
                        color.css(),
                        escape(text)
                    ));
                }
            }
        }

        parts.push("</svg>".to_string());
        parts.join("\n")
    }
}

impl Default for Figure {
    fn default() -> Self {
        Self::new()
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

// ─── Tests ───────────────────────────────────────────────────────────────────

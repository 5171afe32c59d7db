//! Coordinate transforms — grid coordinates to rendering-plane coordinates.
//!
//! A transform is a plain function value: stateless, pure, and applied to
//! every drawn point, including the half-integer offsets used for axis
//! labels. The solver never sees a transform; only rendering coordinates
//! change between projections.

/// Pure mapping from a grid coordinate to a rendering-plane coordinate.
pub type Transform = fn(f64, f64) -> (f64, f64);

/// Skew constant for the rhombic projection, −2 + √3.
pub fn rhombic_skew() -> f64 {
    -2.0 + 3.0_f64.sqrt()
}

/// Orthogonal projection: (x, y) ↦ (x, −y). A along the horizontal axis,
/// B down the vertical axis.
pub fn transform_classic(x: f64, y: f64) -> (f64, f64) {
    (x, -y)
}

/// Rhombic projection: (x, y) ↦ (x + b·y, −y − b·x) with b = −2 + √3.
/// The same lattice rendered as a rhombic tiling.
pub fn transform_rhombic(x: f64, y: f64) -> (f64, f64) {
    let b = rhombic_skew();
    (x + b * y, -y - b * x)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_flips_y() {
        assert_eq!(transform_classic(0.0, 0.0), (0.0, 0.0));
        assert_eq!(transform_classic(3.0, 2.0), (3.0, -2.0));
        assert_eq!(transform_classic(1.5, -0.25), (1.5, 0.25));
    }

    #[test]
    fn test_rhombic_origin_fixed() {
        assert_eq!(transform_rhombic(0.0, 0.0), (0.0, 0.0));
    }

    #[test]
    fn test_rhombic_known_values() {
        let b = rhombic_skew();
        let (tx, ty) = transform_rhombic(1.0, 0.0);
        assert!((tx - 1.0).abs() < 1e-12);
        assert!((ty + b).abs() < 1e-12);
        let (tx, ty) = transform_rhombic(0.0, 1.0);
        assert!((tx - b).abs() < 1e-12);
        assert!((ty + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_skew_constant() {
        let b = rhombic_skew();
        assert!(b < 0.0);
        assert!((b - (3.0_f64.sqrt() - 2.0)).abs() < 1e-15);
    }
}

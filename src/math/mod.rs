pub mod halfplane;
pub mod interval;
pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Tolerance for algebraic zero tests (discriminants, line normals, leading
/// coefficients).
pub const EPS_ALGEBRAIC: f64 = 1e-12;

/// Minimum magnitude for geometric extents (radii, semi-axes, parabola
/// coefficients). Degenerate extents are clamped here instead of rejected.
pub const EPS_GEOMETRIC: f64 = 1e-6;

/// Clamps a radius/semi-axis to the minimum positive extent.
///
/// Non-finite and non-positive values both land on [`EPS_GEOMETRIC`].
#[must_use]
pub fn clamped_extent(value: f64) -> f64 {
    if value.is_finite() && value >= EPS_GEOMETRIC {
        value
    } else {
        EPS_GEOMETRIC
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn clamped_extent_passes_ordinary_values() {
        assert!((clamped_extent(2.5) - 2.5).abs() < EPS_ALGEBRAIC);
    }

    #[test]
    fn clamped_extent_rescues_degenerate_values() {
        assert!((clamped_extent(0.0) - EPS_GEOMETRIC).abs() < EPS_ALGEBRAIC);
        assert!((clamped_extent(-3.0) - EPS_GEOMETRIC).abs() < EPS_ALGEBRAIC);
        assert!((clamped_extent(f64::NAN) - EPS_GEOMETRIC).abs() < EPS_ALGEBRAIC);
        assert!((clamped_extent(f64::INFINITY) - EPS_GEOMETRIC).abs() < EPS_ALGEBRAIC);
    }
}

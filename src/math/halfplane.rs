use crate::geometry::{BoundaryStyle, Relation, Viewport};

use super::{Point2, EPS_ALGEBRAIC};

/// Inset applied to the inside test for strict relations: points within this
/// distance of the boundary line count as outside. The fill must stop just
/// short of a dashed (excluded) boundary, so this is a rendering constant,
/// not a floating-point guard.
pub const BOUNDARY_INSET: f64 = 1e-9;

/// A viewport clipped against a single half-plane.
#[derive(Debug, Clone)]
pub struct HalfPlaneClip {
    /// Polygon covering `{a*x + b*y + c rel 0}` within the viewport.
    /// Empty when the half-plane misses the viewport entirely.
    pub region: Vec<Point2>,
    /// The boundary line spanning the viewport, if the normal is
    /// non-degenerate.
    pub boundary: Option<[Point2; 2]>,
    pub style: BoundaryStyle,
}

/// Clips the viewport rectangle against `a*x + b*y + c rel 0`
/// (Sutherland-Hodgman against a single plane).
///
/// A degenerate normal (`a` and `b` both below tolerance) skips all line
/// math: the constant `c` decides between the full rectangle and nothing.
#[must_use]
pub fn clip_half_plane(
    viewport: &Viewport,
    a: f64,
    b: f64,
    c: f64,
    rel: Relation,
) -> HalfPlaneClip {
    let style = rel.boundary_style();

    if a.abs() < EPS_ALGEBRAIC && b.abs() < EPS_ALGEBRAIC {
        let region = if rel.holds(c) {
            viewport.corners().to_vec()
        } else {
            Vec::new()
        };
        return HalfPlaneClip {
            region,
            boundary: None,
            style,
        };
    }

    let boundary = boundary_segment(viewport, a, b, c);

    // Canonicalize to a "less" relation; negating the implicit function
    // flips the relation but leaves the boundary line unchanged.
    let (a, b, c, rel) = if rel.is_less() {
        (a, b, c, rel)
    } else {
        (-a, -b, -c, rel.flipped())
    };
    let is_inside = |value: f64| {
        if rel.is_strict() {
            value < -BOUNDARY_INSET
        } else {
            value <= 0.0
        }
    };

    let corners = viewport.corners();
    let values = corners.map(|p| a * p.x + b * p.y + c);

    let mut region = Vec::with_capacity(6);
    for i in 0..4 {
        let j = (i + 1) % 4;
        if is_inside(values[i]) {
            region.push(corners[i]);
        }
        if is_inside(values[i]) != is_inside(values[j]) {
            // Exact crossing by linear interpolation of the implicit value.
            // Clamped so a line grazing a corner inside the strict inset
            // cannot extrapolate past the edge.
            let t = (values[i] / (values[i] - values[j])).clamp(0.0, 1.0);
            region.push(corners[i] + (corners[j] - corners[i]) * t);
        }
    }

    HalfPlaneClip {
        region,
        boundary,
        style,
    }
}

/// The boundary line `a*x + b*y + c = 0` rendered across the viewport:
/// `y = -(a/b)x - c/b` over `[left, right]` when `b` is non-zero, else the
/// vertical `x = -c/a` over `[bottom, top]`.
#[must_use]
pub fn boundary_segment(viewport: &Viewport, a: f64, b: f64, c: f64) -> Option<[Point2; 2]> {
    if b.abs() >= EPS_ALGEBRAIC {
        let y_at = |x: f64| -(a / b) * x - c / b;
        Some([
            Point2::new(viewport.left, y_at(viewport.left)),
            Point2::new(viewport.right, y_at(viewport.right)),
        ])
    } else if a.abs() >= EPS_ALGEBRAIC {
        let x = -c / a;
        Some([
            Point2::new(x, viewport.bottom),
            Point2::new(x, viewport.top),
        ])
    } else {
        None
    }
}

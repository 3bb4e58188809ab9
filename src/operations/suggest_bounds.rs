use crate::geometry::{Shape2D, Viewport};
use crate::math::interval::Interval;
use crate::math::polygon_2d::bounds_of_points;
use crate::math::{clamped_extent, Point2};

/// Fraction of each span added as margin on both sides.
const MARGIN_RATIO: f64 = 0.1;

/// Minimum margin in world units, so degenerate spans still get breathing
/// room.
const MIN_MARGIN: f64 = 0.5;

fn margin(span: f64) -> f64 {
    (span * MARGIN_RATIO).max(MIN_MARGIN)
}

/// Bounding box covering every finite emitted point, with margin.
///
/// Returns `None` when the geometry produced no finite points; callers fall
/// back to [`natural_bounds`].
pub fn geometry_bounds<'a>(points: impl Iterator<Item = &'a Point2>) -> Option<Viewport> {
    let (lo, hi) = bounds_of_points(points)?;
    let mx = margin(hi.x - lo.x);
    let my = margin(hi.y - lo.y);
    Some(Viewport {
        left: lo.x - mx,
        right: hi.x + mx,
        bottom: lo.y - my,
        top: hi.y + my,
    })
}

/// The shape's natural viewing scale, used when an empty solution produced
/// no geometry to measure.
#[must_use]
pub fn natural_bounds(shape: &Shape2D) -> Viewport {
    match *shape {
        Shape2D::Line { .. } => Viewport::default(),
        Shape2D::Circle { h, k, r } => {
            let r = clamped_extent(r);
            around(h, k, r, r)
        }
        Shape2D::Ellipse { h, k, a, b } => around(h, k, clamped_extent(a), clamped_extent(b)),
        Shape2D::Parabola { h, k, p, .. } => {
            // Span where the curve rises about one unit from the vertex.
            let span = (1.0 / clamped_extent(p.abs())).clamp(1.0, 6.0);
            around(h, k, span, span)
        }
        Shape2D::Hyperbola { h, k, a, b, .. } => {
            let extent = clamped_extent(a) + clamped_extent(b);
            around(h, k, extent, extent)
        }
    }
}

fn around(h: f64, k: f64, rx: f64, ry: f64) -> Viewport {
    let mx = margin(2.0 * rx);
    let my = margin(2.0 * ry);
    Viewport {
        left: h - rx - mx,
        right: h + rx + mx,
        bottom: k - ry - my,
        top: k + ry + my,
    }
}

/// Number-line range covering every finite interval endpoint, with margin.
///
/// Empty input or intervals with no finite endpoint (the whole line) fall
/// back to the default `[-6, 6]` window.
#[must_use]
pub fn axis_range(intervals: &[Interval]) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for iv in intervals {
        for end in [iv.low, iv.high] {
            if end.is_finite() {
                lo = lo.min(end);
                hi = hi.max(end);
            }
        }
    }
    if lo > hi {
        return (-6.0, 6.0);
    }
    let m = margin(hi - lo);
    (lo - m, hi + m)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn geometry_bounds_cover_points_with_margin() {
        let pts = vec![Point2::new(-2.0, 0.0), Point2::new(2.0, 1.0)];
        let b = geometry_bounds(pts.iter()).unwrap();
        assert!(b.left < -2.0 && b.right > 2.0);
        assert!(b.bottom < 0.0 && b.top > 1.0);
        // 10% of the 4-unit x span, but no less than the floor.
        assert!((b.left - (-2.5)).abs() < 1e-12);
        assert!((b.right - 2.5).abs() < 1e-12);
    }

    #[test]
    fn geometry_bounds_empty_input() {
        assert!(geometry_bounds([].iter()).is_none());
    }

    #[test]
    fn natural_bounds_circle_scale() {
        let b = natural_bounds(&Shape2D::Circle {
            h: 1.0,
            k: -1.0,
            r: 2.0,
        });
        assert!(b.left < -1.0 && b.right > 3.0);
        assert!(b.bottom < -3.0 && b.top > 1.0);
    }

    #[test]
    fn natural_bounds_degenerate_radius_still_valid() {
        let b = natural_bounds(&Shape2D::Circle {
            h: 0.0,
            k: 0.0,
            r: 0.0,
        });
        assert!(b.left < b.right && b.bottom < b.top);
    }

    #[test]
    fn axis_range_covers_endpoints() {
        let intervals = vec![Interval::new(1.0, 2.0, true, true)];
        let (lo, hi) = axis_range(&intervals);
        assert!(lo < 1.0 && hi > 2.0);
    }

    #[test]
    fn axis_range_ray_uses_finite_end() {
        let intervals = vec![Interval::above(3.0, true)];
        let (lo, hi) = axis_range(&intervals);
        assert!(lo < 3.0 && hi > 3.0);
        assert!(lo.is_finite() && hi.is_finite());
    }

    #[test]
    fn axis_range_fallback() {
        assert_eq!(axis_range(&[]), (-6.0, 6.0));
        assert_eq!(axis_range(&[Interval::full()]), (-6.0, 6.0));
    }
}

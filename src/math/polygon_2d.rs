use super::Point2;

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Absolute enclosed area of a polygon.
#[must_use]
pub fn area_2d(points: &[Point2]) -> f64 {
    signed_area_2d(points).abs()
}

/// Axis-aligned bounds `(min, max)` of all finite points.
///
/// Non-finite coordinates are skipped; returns `None` when no finite point
/// exists.
#[must_use]
pub fn bounds_of_points<'a>(points: impl Iterator<Item = &'a Point2>) -> Option<(Point2, Point2)> {
    let mut bounds: Option<(Point2, Point2)> = None;
    for p in points {
        if !p.x.is_finite() || !p.y.is_finite() {
            continue;
        }
        match bounds {
            None => bounds = Some((*p, *p)),
            Some((ref mut lo, ref mut hi)) => {
                lo.x = lo.x.min(p.x);
                lo.y = lo.y.min(p.y);
                hi.x = hi.x.max(p.x);
                hi.y = hi.y.max(p.y);
            }
        }
    }
    bounds
}

/// Winding-number point-in-polygon test.
///
/// Non-zero winding means inside; works for the concave fill polygons the
/// samplers produce.
#[must_use]
pub fn point_in_polygon_2d(point: &Point2, polygon: &[Point2]) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    let n = polygon.len();
    let mut winding = 0i32;
    for i in 0..n {
        let a = polygon[i];
        let b = polygon[(i + 1) % n];
        if a.y <= point.y {
            if b.y > point.y && cross_2d(b.x - a.x, b.y - a.y, point.x - a.x, point.y - a.y) > 0.0 {
                winding += 1;
            }
        } else if b.y <= point.y
            && cross_2d(b.x - a.x, b.y - a.y, point.x - a.x, point.y - a.y) < 0.0
        {
            winding -= 1;
        }
    }
    winding != 0
}

/// 2D cross product: `(ax * by - ay * bx)`.
#[inline]
fn cross_2d(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    ax * by - ay * bx
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn signed_area_ccw_square() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        assert!((signed_area_2d(&pts) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn signed_area_cw_square() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 0.0),
        ];
        assert!((signed_area_2d(&pts) + 1.0).abs() < 1e-12);
        assert!((area_2d(&pts) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!(signed_area_2d(&[Point2::new(0.0, 0.0)]).abs() < 1e-12);
        assert!(signed_area_2d(&[]).abs() < 1e-12);
    }

    #[test]
    fn bounds_cover_all_points() {
        let pts = vec![
            Point2::new(-2.0, 1.0),
            Point2::new(3.0, -4.0),
            Point2::new(0.5, 0.5),
        ];
        let (lo, hi) = bounds_of_points(pts.iter()).unwrap();
        assert!((lo.x + 2.0).abs() < 1e-12);
        assert!((lo.y + 4.0).abs() < 1e-12);
        assert!((hi.x - 3.0).abs() < 1e-12);
        assert!((hi.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn point_in_unit_square() {
        let square = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        assert!(point_in_polygon_2d(&Point2::new(0.5, 0.5), &square));
        assert!(!point_in_polygon_2d(&Point2::new(2.0, 0.5), &square));
        // Winding is orientation-independent.
        let reversed: Vec<Point2> = square.iter().rev().copied().collect();
        assert!(point_in_polygon_2d(&Point2::new(0.5, 0.5), &reversed));
    }

    #[test]
    fn point_in_triangle() {
        let tri = vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(2.0, 3.0),
        ];
        assert!(point_in_polygon_2d(&Point2::new(2.0, 1.0), &tri));
        assert!(!point_in_polygon_2d(&Point2::new(0.0, 2.9), &tri));
    }

    #[test]
    fn bounds_skip_non_finite() {
        let pts = vec![
            Point2::new(f64::NAN, 0.0),
            Point2::new(1.0, f64::INFINITY),
            Point2::new(2.0, 3.0),
        ];
        let (lo, hi) = bounds_of_points(pts.iter()).unwrap();
        assert!((lo.x - 2.0).abs() < 1e-12 && (hi.y - 3.0).abs() < 1e-12);
        assert!(bounds_of_points([].iter()).is_none());
    }
}

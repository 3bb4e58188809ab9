use std::f64::consts::TAU;

use crate::geometry::{HyperbolaAxis, ParabolaDirection, Viewport};
use crate::math::Point2;

use super::SamplingParams;

/// Closed parametric ring around an axis-aligned ellipse:
/// `(h + a*cos t, k + b*sin t)` at uniformly spaced parameters.
///
/// A circle is the `a == b` case. The ring is closed implicitly; the last
/// point does not repeat the first.
#[must_use]
pub fn sample_ellipse(h: f64, k: f64, a: f64, b: f64, params: &SamplingParams) -> Vec<Point2> {
    let n = params.closed_samples.max(3);
    let mut points = Vec::with_capacity(n as usize);
    for i in 0..n {
        let t = TAU * f64::from(i) / f64::from(n);
        points.push(Point2::new(h + a * t.cos(), k + b * t.sin()));
    }
    points
}

/// Scanned polyline for a parabola with the given effective opening and
/// positive leading magnitude `m`.
///
/// Vertical openings scan x across the viewport (`y = k ± m*(x-h)^2`);
/// horizontal openings scan y (`x = h ± m*(y-k)^2`). The whole scan span
/// yields geometry; no domain restriction applies.
#[must_use]
pub fn sample_parabola(
    h: f64,
    k: f64,
    m: f64,
    opening: ParabolaDirection,
    viewport: &Viewport,
    params: &SamplingParams,
) -> Vec<Point2> {
    let vertical = opening.is_vertical();
    let (lo, span) = if vertical {
        (viewport.left, viewport.width())
    } else {
        (viewport.bottom, viewport.height())
    };
    let sign = match opening {
        ParabolaDirection::Up | ParabolaDirection::Right => 1.0,
        ParabolaDirection::Down | ParabolaDirection::Left => -1.0,
    };

    let n = params.scan_samples(span);
    let mut points = Vec::with_capacity(n as usize + 1);
    for i in 0..=n {
        let u = lo + span * f64::from(i) / f64::from(n);
        if vertical {
            points.push(Point2::new(u, k + sign * m * (u - h) * (u - h)));
        } else {
            points.push(Point2::new(h + sign * m * (u - k) * (u - k), u));
        }
    }
    points
}

/// Scanned branch polylines for a hyperbola with transverse semi-axis `a`
/// and conjugate semi-axis `b`.
///
/// The transverse variable is scanned across the viewport; a sample emits a
/// point only where the radicand `((v - center)/a)^2 - 1` is non-negative,
/// so roughly half the scanned domain per branch yields no geometry. Each
/// branch runs viewport edge -> vertex -> viewport edge (lower half first),
/// which also makes it usable directly as a lobe fill polygon closed along
/// the edge chord. Branches that miss the viewport are omitted.
#[must_use]
pub fn sample_hyperbola(
    h: f64,
    k: f64,
    a: f64,
    b: f64,
    axis: HyperbolaAxis,
    viewport: &Viewport,
    params: &SamplingParams,
) -> Vec<Vec<Point2>> {
    match axis {
        HyperbolaAxis::X => scan_branches(
            h,
            k,
            a,
            b,
            viewport.left,
            viewport.right,
            params.scan_samples(viewport.width()),
            Point2::new,
        ),
        HyperbolaAxis::Y => scan_branches(
            k,
            h,
            a,
            b,
            viewport.bottom,
            viewport.top,
            params.scan_samples(viewport.height()),
            |u, w| Point2::new(w, u),
        ),
    }
}

/// Shared branch scan: `u` is the transverse coordinate, `w` the conjugate.
#[allow(clippy::too_many_arguments)]
fn scan_branches(
    center_u: f64,
    center_w: f64,
    a: f64,
    b: f64,
    lo: f64,
    hi: f64,
    n: u32,
    to_point: impl Fn(f64, f64) -> Point2,
) -> Vec<Vec<Point2>> {
    let span = hi - lo;
    let samples: Vec<f64> = (0..=n)
        .map(|i| lo + span * f64::from(i) / f64::from(n))
        .collect();

    let radicand = |u: f64| {
        let s = (u - center_u) / a;
        s * s - 1.0
    };

    let mut branches = Vec::with_capacity(2);

    // Negative branch: u <= center - a, traced edge -> vertex -> edge.
    let negative: Vec<f64> = samples
        .iter()
        .copied()
        .filter(|&u| u <= center_u && radicand(u) >= 0.0)
        .collect();
    if !negative.is_empty() {
        let mut branch = Vec::with_capacity(negative.len() * 2);
        for &u in &negative {
            branch.push(to_point(u, center_w - b * radicand(u).sqrt()));
        }
        for &u in negative.iter().rev() {
            branch.push(to_point(u, center_w + b * radicand(u).sqrt()));
        }
        branches.push(branch);
    }

    // Positive branch: u >= center + a.
    let positive: Vec<f64> = samples
        .iter()
        .copied()
        .filter(|&u| u > center_u && radicand(u) >= 0.0)
        .collect();
    if !positive.is_empty() {
        let mut branch = Vec::with_capacity(positive.len() * 2);
        for &u in positive.iter().rev() {
            branch.push(to_point(u, center_w - b * radicand(u).sqrt()));
        }
        for &u in &positive {
            branch.push(to_point(u, center_w + b * radicand(u).sqrt()));
        }
        branches.push(branch);
    }

    branches
}

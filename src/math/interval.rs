use crate::error::{AlgebraError, Result};
use crate::geometry::Relation;

use super::EPS_ALGEBRAIC;

/// A connected subset of the real line with optionally infinite bounds.
///
/// Invariant: `low <= high`. A degenerate point carries both bounds closed;
/// infinite bounds are always open.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub low: f64,
    pub high: f64,
    pub low_closed: bool,
    pub high_closed: bool,
}

impl Interval {
    /// Creates an interval from its bounds.
    #[must_use]
    pub fn new(low: f64, high: f64, low_closed: bool, high_closed: bool) -> Self {
        debug_assert!(low <= high, "interval bounds out of order: [{low}, {high}]");
        Self {
            low,
            high,
            low_closed,
            high_closed,
        }
    }

    /// The whole real line.
    #[must_use]
    pub fn full() -> Self {
        Self::new(f64::NEG_INFINITY, f64::INFINITY, false, false)
    }

    /// The single point `{x}`.
    #[must_use]
    pub fn point(x: f64) -> Self {
        Self::new(x, x, true, true)
    }

    /// The unbounded ray `(-inf, x)` or `(-inf, x]`.
    #[must_use]
    pub fn below(x: f64, closed: bool) -> Self {
        Self::new(f64::NEG_INFINITY, x, false, closed)
    }

    /// The unbounded ray `(x, inf)` or `[x, inf)`.
    #[must_use]
    pub fn above(x: f64, closed: bool) -> Self {
        Self::new(x, f64::INFINITY, closed, false)
    }

    /// Membership test honoring per-end closedness.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        let above_low = if self.low_closed {
            x >= self.low
        } else {
            x > self.low
        };
        let below_high = if self.high_closed {
            x <= self.high
        } else {
            x < self.high
        };
        above_low && below_high
    }

    /// Returns whether the interval is a single point.
    #[must_use]
    pub fn is_point(&self) -> bool {
        self.low == self.high
    }
}

fn ensure_finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AlgebraError::NonFiniteCoefficient { name, value }.into())
    }
}

/// Solves `b*x + c rel 0` into ordered, non-overlapping intervals.
///
/// Zero slope turns the inequality into the constant `c rel 0`: the result
/// is the whole line or nothing.
///
/// # Errors
///
/// Returns an error if a coefficient is non-finite.
pub fn solve_linear(b: f64, c: f64, rel: Relation) -> Result<Vec<Interval>> {
    ensure_finite("b", b)?;
    ensure_finite("c", c)?;

    if b.abs() < EPS_ALGEBRAIC {
        return Ok(if rel.holds(c) {
            vec![Interval::full()]
        } else {
            Vec::new()
        });
    }

    let root = -c / b;
    let closed = !rel.is_strict();
    // bx + c rel 0 puts x on the relation's side of the root for b > 0;
    // a negative slope swaps the side.
    let below = rel.is_less() != (b < 0.0);
    Ok(vec![if below {
        Interval::below(root, closed)
    } else {
        Interval::above(root, closed)
    }])
}

/// Solves `a*x^2 + b*x + c rel 0` into ordered, non-overlapping intervals.
///
/// Degenerate cases all have specific outputs: a vanishing leading
/// coefficient delegates to [`solve_linear`]; a negative discriminant yields
/// the whole line or nothing; a near-zero discriminant collapses to the
/// double root (singleton, punctured line, whole line, or nothing).
///
/// # Errors
///
/// Returns an error if a coefficient is non-finite.
pub fn solve_quadratic(a: f64, b: f64, c: f64, rel: Relation) -> Result<Vec<Interval>> {
    ensure_finite("a", a)?;
    ensure_finite("b", b)?;
    ensure_finite("c", c)?;

    if a.abs() < EPS_ALGEBRAIC {
        return solve_linear(b, c, rel);
    }

    let disc = b * b - 4.0 * a * c;
    let closed = !rel.is_strict();
    // An upward parabola satisfies "less" between its roots and "greater"
    // outside them; a downward parabola swaps the two.
    let between = rel.is_less() == (a > 0.0);

    if disc < -EPS_ALGEBRAIC {
        // No real roots: the polynomial keeps the sign of `a` everywhere.
        return Ok(if rel.holds(a) {
            vec![Interval::full()]
        } else {
            Vec::new()
        });
    }

    if disc <= EPS_ALGEBRAIC {
        let r = -b / (2.0 * a);
        return Ok(match (between, closed) {
            // x^2 <= 0 style: only the double root itself.
            (true, true) => vec![Interval::point(r)],
            // x^2 < 0 style: nothing.
            (true, false) => Vec::new(),
            // x^2 >= 0 style: everything.
            (false, true) => vec![Interval::full()],
            // x^2 > 0 style: everything but the root.
            (false, false) => vec![Interval::below(r, false), Interval::above(r, false)],
        });
    }

    let sq = disc.sqrt();
    let r1 = (-b - sq) / (2.0 * a);
    let r2 = (-b + sq) / (2.0 * a);
    let (r1, r2) = if r1 <= r2 { (r1, r2) } else { (r2, r1) };

    Ok(if between {
        vec![Interval::new(r1, r2, closed, closed)]
    } else {
        vec![Interval::below(r1, closed), Interval::above(r2, closed)]
    })
}

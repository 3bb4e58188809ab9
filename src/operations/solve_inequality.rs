use crate::error::Result;
use crate::geometry::{Relation, Shape1D};
use crate::math::interval::{solve_linear, solve_quadratic, Interval};

/// Solves a one-variable inequality into its exact solution set.
pub struct SolveInequality {
    shape: Shape1D,
    relation: Relation,
}

impl SolveInequality {
    /// Creates a new `SolveInequality` operation.
    #[must_use]
    pub fn new(shape: Shape1D, relation: Relation) -> Self {
        Self { shape, relation }
    }

    /// Executes the solve, returning ordered, non-overlapping intervals.
    ///
    /// # Errors
    ///
    /// Returns an error if a coefficient is non-finite.
    pub fn execute(&self) -> Result<Vec<Interval>> {
        match self.shape {
            Shape1D::Linear { b, c } => solve_linear(b, c, self.relation),
            Shape1D::Quadratic { a, b, c } => solve_quadratic(a, b, c, self.relation),
        }
    }
}

use super::region::BoundaryStyle;

/// Comparison relating an expression to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// `expr < 0`
    Less,
    /// `expr <= 0`
    LessEq,
    /// `expr > 0`
    Greater,
    /// `expr >= 0`
    GreaterEq,
}

impl Relation {
    /// Returns whether the boundary itself is excluded from the solution set.
    #[must_use]
    pub fn is_strict(self) -> bool {
        matches!(self, Self::Less | Self::Greater)
    }

    /// Returns whether the relation points in the "less" direction.
    #[must_use]
    pub fn is_less(self) -> bool {
        matches!(self, Self::Less | Self::LessEq)
    }

    /// Evaluates `value rel 0`.
    #[must_use]
    pub fn holds(self, value: f64) -> bool {
        match self {
            Self::Less => value < 0.0,
            Self::LessEq => value <= 0.0,
            Self::Greater => value > 0.0,
            Self::GreaterEq => value >= 0.0,
        }
    }

    /// The relation after multiplying both sides by a negative factor.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Less => Self::Greater,
            Self::LessEq => Self::GreaterEq,
            Self::Greater => Self::Less,
            Self::GreaterEq => Self::LessEq,
        }
    }

    /// Stroke style for the relation's boundary curve: excluded boundaries
    /// are drawn dashed.
    #[must_use]
    pub fn boundary_style(self) -> BoundaryStyle {
        if self.is_strict() {
            BoundaryStyle::Dashed
        } else {
            BoundaryStyle::Solid
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holds_matches_direct_comparison() {
        assert!(Relation::Less.holds(-1.0));
        assert!(!Relation::Less.holds(0.0));
        assert!(Relation::LessEq.holds(0.0));
        assert!(Relation::Greater.holds(1.0));
        assert!(!Relation::Greater.holds(0.0));
        assert!(Relation::GreaterEq.holds(0.0));
    }

    #[test]
    fn flipped_reverses_direction_and_keeps_strictness() {
        assert_eq!(Relation::Less.flipped(), Relation::Greater);
        assert_eq!(Relation::GreaterEq.flipped(), Relation::LessEq);
        assert!(Relation::Less.flipped().is_strict());
        assert!(!Relation::LessEq.flipped().is_strict());
    }

    #[test]
    fn strict_relations_render_dashed() {
        assert_eq!(Relation::Less.boundary_style(), BoundaryStyle::Dashed);
        assert_eq!(Relation::GreaterEq.boundary_style(), BoundaryStyle::Solid);
    }
}

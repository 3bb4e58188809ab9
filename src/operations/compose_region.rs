use crate::error::{GeometryError, Result};
use crate::geometry::{
    ParabolaDirection, Polyline, RegionGeometry, Relation, Shape2D, Viewport,
};
use crate::math::halfplane::clip_half_plane;
use crate::math::{clamped_extent, Point2};
use crate::sampling::{sample_ellipse, sample_hyperbola, sample_parabola, SamplingParams};

use super::suggest_bounds;

/// Turns a two-variable inequality into renderable region geometry.
///
/// Exterior relations on closed conics and "between the branches" relations
/// on hyperbolas use the rectangle-plus-hole technique: the viewport
/// rectangle is filled and the conic ring painted over it in the background
/// color. This stands in for polygon boolean subtraction and is only valid
/// while a single shape is rendered at a time.
pub struct ComposeRegion {
    shape: Shape2D,
    relation: Relation,
    viewport: Viewport,
    params: SamplingParams,
}

impl ComposeRegion {
    /// Creates a new `ComposeRegion` operation over the default viewport.
    #[must_use]
    pub fn new(shape: Shape2D, relation: Relation) -> Self {
        Self {
            shape,
            relation,
            viewport: Viewport::default(),
            params: SamplingParams::default(),
        }
    }

    /// Sets the viewport to clip and scan against.
    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Sets custom sampling parameters.
    #[must_use]
    pub fn with_params(mut self, params: SamplingParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the composition, returning fresh region geometry.
    ///
    /// Degenerate radii and semi-axes are clamped, never rejected; an
    /// inequality that holds nowhere yields empty fill lists and the
    /// shape's natural bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if a center coordinate or line coefficient is
    /// non-finite.
    pub fn execute(&self) -> Result<RegionGeometry> {
        self.validate()?;

        let style = self.relation.boundary_style();
        let less = self.relation.is_less();
        let vp = &self.viewport;

        let mut boundary_polylines = Vec::new();
        let mut fill_polygons: Vec<Vec<Point2>> = Vec::new();
        let mut hole_polygons: Vec<Vec<Point2>> = Vec::new();

        match self.shape {
            Shape2D::Line { a, b, c } => {
                let clip = clip_half_plane(vp, a, b, c, self.relation);
                if let Some(segment) = clip.boundary {
                    boundary_polylines.push(Polyline::new(segment.to_vec(), style));
                }
                if clip.region.len() >= 3 {
                    fill_polygons.push(clip.region);
                }
            }

            Shape2D::Circle { h, k, r } => {
                let r = clamped_extent(r);
                self.closed_conic(
                    h,
                    k,
                    r,
                    r,
                    style,
                    less,
                    &mut boundary_polylines,
                    &mut fill_polygons,
                    &mut hole_polygons,
                );
            }

            Shape2D::Ellipse { h, k, a, b } => {
                self.closed_conic(
                    h,
                    k,
                    clamped_extent(a),
                    clamped_extent(b),
                    style,
                    less,
                    &mut boundary_polylines,
                    &mut fill_polygons,
                    &mut hole_polygons,
                );
            }

            Shape2D::Parabola {
                h,
                k,
                p,
                direction,
            } => {
                let m = clamped_extent(p.abs());
                let opening = direction.combined_with(p);
                let curve = sample_parabola(h, k, m, opening, vp, &self.params);
                boundary_polylines.push(Polyline::new(curve.clone(), style));

                // Close the curve against the viewport edge on the filled
                // side: relation direction picks the side of the curve, the
                // opening orientation picks the scan axis.
                let mut fill = curve;
                let closing = match (opening, less) {
                    (ParabolaDirection::Up | ParabolaDirection::Down, true) => {
                        [Point2::new(vp.right, vp.bottom), Point2::new(vp.left, vp.bottom)]
                    }
                    (ParabolaDirection::Up | ParabolaDirection::Down, false) => {
                        [Point2::new(vp.right, vp.top), Point2::new(vp.left, vp.top)]
                    }
                    (ParabolaDirection::Left | ParabolaDirection::Right, true) => {
                        [Point2::new(vp.left, vp.top), Point2::new(vp.left, vp.bottom)]
                    }
                    (ParabolaDirection::Left | ParabolaDirection::Right, false) => {
                        [Point2::new(vp.right, vp.top), Point2::new(vp.right, vp.bottom)]
                    }
                };
                fill.extend_from_slice(&closing);
                fill_polygons.push(fill);
            }

            Shape2D::Hyperbola { h, k, a, b, axis } => {
                let branches = sample_hyperbola(
                    h,
                    k,
                    clamped_extent(a),
                    clamped_extent(b),
                    axis,
                    vp,
                    &self.params,
                );
                for branch in &branches {
                    boundary_polylines.push(Polyline::new(branch.clone(), style));
                }
                if less {
                    // Between the branches: rectangle minus each lobe.
                    fill_polygons.push(vp.corners().to_vec());
                    hole_polygons.extend(branches);
                } else {
                    // Farther from center: the lobes themselves.
                    fill_polygons.extend(branches);
                }
            }
        }

        let emitted = boundary_polylines
            .iter()
            .flat_map(|pl| pl.points.iter())
            .chain(fill_polygons.iter().flatten())
            .chain(hole_polygons.iter().flatten());
        let suggested_bounds = suggest_bounds::geometry_bounds(emitted)
            .unwrap_or_else(|| suggest_bounds::natural_bounds(&self.shape));

        Ok(RegionGeometry {
            boundary_polylines,
            fill_polygons,
            hole_polygons,
            suggested_bounds,
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn closed_conic(
        &self,
        h: f64,
        k: f64,
        rx: f64,
        ry: f64,
        style: crate::geometry::BoundaryStyle,
        less: bool,
        boundary_polylines: &mut Vec<Polyline>,
        fill_polygons: &mut Vec<Vec<Point2>>,
        hole_polygons: &mut Vec<Vec<Point2>>,
    ) {
        let ring = sample_ellipse(h, k, rx, ry, &self.params);
        boundary_polylines.push(Polyline::new(ring.clone(), style));
        if less {
            fill_polygons.push(ring);
        } else {
            fill_polygons.push(self.viewport.corners().to_vec());
            hole_polygons.push(ring);
        }
    }

    fn validate(&self) -> Result<()> {
        let check = |name: &'static str, value: f64| -> Result<()> {
            if value.is_finite() {
                Ok(())
            } else {
                Err(GeometryError::NonFiniteParameter { name, value }.into())
            }
        };
        // Extents (r, a, b, p) are clamped during sampling instead.
        match self.shape {
            Shape2D::Line { a, b, c } => {
                check("a", a)?;
                check("b", b)?;
                check("c", c)
            }
            Shape2D::Circle { h, k, .. }
            | Shape2D::Ellipse { h, k, .. }
            | Shape2D::Parabola { h, k, .. }
            | Shape2D::Hyperbola { h, k, .. } => {
                check("h", h)?;
                check("k", k)
            }
        }
    }
}

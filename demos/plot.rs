//! Graphis demo — solves a few inequalities and logs the produced geometry.
//!
//! ```text
//! cargo run --example plot
//! RUST_LOG=plot=debug cargo run --example plot
//! ```

use graphis::geometry::{ParabolaDirection, Relation, Shape1D, Shape2D, Viewport};
use graphis::math::polygon_2d::area_2d;
use graphis::operations::suggest_bounds::axis_range;
use graphis::operations::{ComposeRegion, SolveInequality};

fn main() -> graphis::Result<()> {
    // Default: INFO. Override with RUST_LOG (e.g. RUST_LOG=plot=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // x^2 - 3x + 2 <= 0
    let intervals = SolveInequality::new(
        Shape1D::Quadratic {
            a: 1.0,
            b: -3.0,
            c: 2.0,
        },
        Relation::LessEq,
    )
    .execute()?;
    let window = axis_range(&intervals);
    tracing::info!(?intervals, ?window, "x^2 - 3x + 2 <= 0");

    // Outside of a circle of radius 2, over a 10x10 window.
    let region = ComposeRegion::new(
        Shape2D::Circle {
            h: 0.0,
            k: 0.0,
            r: 2.0,
        },
        Relation::Greater,
    )
    .with_viewport(Viewport::new(-5.0, 5.0, -5.0, 5.0)?)
    .execute()?;
    let filled: f64 = region.fill_polygons.iter().map(|p| area_2d(p)).sum::<f64>()
        - region.hole_polygons.iter().map(|p| area_2d(p)).sum::<f64>();
    tracing::info!(
        fills = region.fill_polygons.len(),
        holes = region.hole_polygons.len(),
        filled,
        "x^2 + y^2 > 4"
    );

    // Region above an upward parabola.
    let region = ComposeRegion::new(
        Shape2D::Parabola {
            h: 0.0,
            k: -1.0,
            p: 0.5,
            direction: ParabolaDirection::Up,
        },
        Relation::GreaterEq,
    )
    .execute()?;
    tracing::info!(
        boundaries = region.boundary_polylines.len(),
        bounds = ?region.suggested_bounds,
        "y >= x^2/2 - 1"
    );

    Ok(())
}

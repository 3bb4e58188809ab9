pub mod region;
pub mod relation;
pub mod shape;
pub mod viewport;

pub use region::{BoundaryStyle, Polyline, RegionGeometry};
pub use relation::Relation;
pub use shape::{HyperbolaAxis, ParabolaDirection, Shape1D, Shape2D};
pub use viewport::Viewport;

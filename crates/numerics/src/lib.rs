//! Numerical building blocks: adaptive quadrature and 1-D interpolation.

pub mod interpolation;
pub mod quadrature;


pub use interpolation::{InterpolationError, InterpolationKind, Interpolator};
pub use quadrature::{AdaptiveQuadrature, QuadratureError, Tolerance};

//! One-dimensional interpolation through tabulated knots.
//!
//! Two kinds are supported: piecewise linear, and natural cubic splines
//! (zero second derivative at both end knots), both fitted with
//! `ndarray_interp`. Queries outside the tabulated range, and NaN queries,
//! are clamped to the nearest end knot. A query exactly on a knot returns
//! that knot's ordinate exactly.

use std::fmt;
use std::io::{Read, Write};
use std::sync::Arc;

use ndarray::Array1;
use ndarray_interp::interp1d::{CubicSpline, Interp1DBuilder, Linear};
use ndarray_interp::BuilderError;
use restart::{RestartError, RestartReader, RestartWriter};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Interpolation scheme between knots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterpolationKind {
    Linear,
    Cubic,
}

impl InterpolationKind {
    /// Smallest number of knots the scheme accepts
    pub fn min_points(&self) -> usize {
        match self {
            InterpolationKind::Linear => 2,
            InterpolationKind::Cubic => 3,
        }
    }
}

impl fmt::Display for InterpolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterpolationKind::Linear => write!(f, "linear"),
            InterpolationKind::Cubic => write!(f, "cubic"),
        }
    }
}

/// Errors raised while building or restoring an [`Interpolator`].
#[derive(Debug, Error)]
pub enum InterpolationError {
    #[error("abscissa and ordinate counts differ: {xs} vs {ys}")]
    LengthMismatch { xs: usize, ys: usize },

    #[error("{kind} interpolation needs at least {required} knots, got {got}")]
    TooFewPoints {
        kind: InterpolationKind,
        required: usize,
        got: usize,
    },

    #[error("abscissas are not strictly increasing at index {index}")]
    NotStrictlyIncreasing { index: usize },

    #[error("knot {index} is not finite")]
    NonFinite { index: usize },

    #[error("failed to fit spline")]
    Fit(#[from] BuilderError),

    #[error("failed to read or write spline")]
    Restart(#[from] RestartError),
}

/// Fitted interpolant, evaluated strictly inside the knot range
type Fitted = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// Interpolating function through a fixed set of knots.
///
/// Only the knots are state: two interpolators with the same kind and knots
/// compare equal, and fitting is deterministic, so they evaluate identically.
#[derive(Clone)]
pub struct Interpolator {
    kind: InterpolationKind,
    xs: Vec<f64>,
    ys: Vec<f64>,
    fitted: Fitted,
}

impl Interpolator {
    /// Fit an interpolator through the knots `(xs[i], ys[i])`.
    ///
    /// # Arguments
    /// * `kind` - Linear or natural cubic
    /// * `xs` - Strictly increasing abscissas
    /// * `ys` - Ordinates, one per abscissa
    pub fn new(
        kind: InterpolationKind,
        xs: Vec<f64>,
        ys: Vec<f64>,
    ) -> Result<Self, InterpolationError> {
        validate_knots(kind, &xs, &ys)?;
        let fitted = fit(kind, &xs, &ys)?;

        Ok(Self {
            kind,
            xs,
            ys,
            fitted,
        })
    }

    pub fn linear(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self, InterpolationError> {
        Self::new(InterpolationKind::Linear, xs, ys)
    }

    pub fn cubic(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self, InterpolationError> {
        Self::new(InterpolationKind::Cubic, xs, ys)
    }

    pub fn kind(&self) -> InterpolationKind {
        self.kind
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Number of knots
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// First and last abscissa
    pub fn domain(&self) -> (f64, f64) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    /// Evaluate the interpolant at `x`, clamping to the end knots outside the
    /// tabulated range. NaN evaluates to the first ordinate.
    pub fn eval(&self, x: f64) -> f64 {
        let last = self.xs.len() - 1;
        if x.is_nan() || x <= self.xs[0] {
            return self.ys[0];
        }
        if x >= self.xs[last] {
            return self.ys[last];
        }
        if let Ok(i) = self.xs.binary_search_by(|knot| knot.total_cmp(&x)) {
            return self.ys[i];
        }
        (self.fitted)(x)
    }

    /// Write the spline to a restart stream.
    ///
    /// Layout: kind, knot count, abscissas, ordinates. [`Interpolator::restore`]
    /// refits from the knots.
    pub fn dump<W: Write>(&self, writer: &mut RestartWriter<W>) -> Result<(), RestartError> {
        writer.write(&self.kind)?;
        writer.write(&(self.xs.len() as u64))?;
        writer.write(&self.xs)?;
        writer.write(&self.ys)
    }

    /// Read a spline written by [`Interpolator::dump`].
    pub fn restore<R: Read>(reader: &mut RestartReader<R>) -> Result<Self, InterpolationError> {
        let kind: InterpolationKind = reader.read()?;
        let count: u64 = reader.read()?;
        let xs: Vec<f64> = reader.read()?;
        let ys: Vec<f64> = reader.read()?;

        if xs.len() as u64 != count {
            return Err(RestartError::Corrupt(format!(
                "spline declares {count} knots but stores {} abscissas",
                xs.len()
            ))
            .into());
        }
        Self::new(kind, xs, ys)
    }
}

impl fmt::Debug for Interpolator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interpolator")
            .field("kind", &self.kind)
            .field("xs", &self.xs)
            .field("ys", &self.ys)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Interpolator {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.xs == other.xs && self.ys == other.ys
    }
}

fn fit(kind: InterpolationKind, xs: &[f64], ys: &[f64]) -> Result<Fitted, InterpolationError> {
    let builder =
        Interp1DBuilder::new(Array1::from_vec(ys.to_vec())).x(Array1::from_vec(xs.to_vec()));

    // In-range queries cannot fail once the knots are validated
    let fitted: Fitted = match kind {
        InterpolationKind::Linear => {
            let interp = builder.strategy(Linear::new()).build()?;
            Arc::new(move |x: f64| interp.interp_scalar(x).unwrap_or(f64::NAN))
        }
        InterpolationKind::Cubic => {
            let interp = builder.strategy(CubicSpline::new()).build()?;
            Arc::new(move |x: f64| interp.interp_scalar(x).unwrap_or(f64::NAN))
        }
    };
    Ok(fitted)
}

fn validate_knots(
    kind: InterpolationKind,
    xs: &[f64],
    ys: &[f64],
) -> Result<(), InterpolationError> {
    if xs.len() != ys.len() {
        return Err(InterpolationError::LengthMismatch {
            xs: xs.len(),
            ys: ys.len(),
        });
    }
    if xs.len() < kind.min_points() {
        return Err(InterpolationError::TooFewPoints {
            kind,
            required: kind.min_points(),
            got: xs.len(),
        });
    }
    if let Some(index) = xs
        .iter()
        .zip(ys)
        .position(|(x, y)| !x.is_finite() || !y.is_finite())
    {
        return Err(InterpolationError::NonFinite { index });
    }
    if let Some(index) = xs.windows(2).position(|pair| pair[1] <= pair[0]) {
        return Err(InterpolationError::NotStrictlyIncreasing { index: index + 1 });
    }
    Ok(())
}

//! Globally adaptive quadrature
//!
//! Integrates a scalar function over a finite interval with a 21-point
//! Gauss-Kronrod rule, repeatedly bisecting the subinterval with the largest
//! error estimate until the summed error estimate meets the requested
//! tolerance. This is the QAG strategy from QUADPACK.
//!
//! Integrands are plain closures, so a method of a model instance is
//! integrated by capturing `&self`:
//!
//! ```
//! use numerics::quadrature::{AdaptiveQuadrature, Tolerance};
//!
//! let quad = AdaptiveQuadrature::new(Tolerance::both(1e-8));
//! let slope = -2.3;
//! let n = quad.integrate(|m: f64| m.powf(slope), 8.0, 100.0).unwrap();
//! let exact = (100.0_f64.powf(-1.3) - 8.0_f64.powf(-1.3)) / -1.3;
//! assert!((n - exact).abs() < 1e-10);
//! ```

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of subintervals before giving up
pub const DEFAULT_SUBINTERVAL_LIMIT: usize = 1000;

// Kronrod abscissae on [0, 1]; odd indices are the 10-point Gauss abscissae.
const XGK: [f64; 11] = [
    0.995657163025808080735527280689003,
    0.973906528517171720077964012084452,
    0.930157491355708226001207180059508,
    0.865063366688984510732096688423493,
    0.780817726586416897063717578345042,
    0.679409568299024406234327365114874,
    0.562757134668604683339000099272694,
    0.433395394129247190799265943165784,
    0.294392862701460198131126603103866,
    0.148874338981631210884826001129720,
    0.000000000000000000000000000000000,
];

const WGK: [f64; 11] = [
    0.011694638867371874278064396062192,
    0.032558162307964727478818972459390,
    0.054755896574351996031381300244580,
    0.075039674810919952767043140916190,
    0.093125454583697605535065465083366,
    0.109387158802297641899210590325805,
    0.123491976262065851077208980893288,
    0.134709217311473325928054001771707,
    0.142775938577060080797094273138717,
    0.147739104901338491374841515972068,
    0.149445554002916905664936468389821,
];

const WG: [f64; 5] = [
    0.066671344308688137593568809893332,
    0.149451349150580593145776339657697,
    0.219086362515982043995534934228163,
    0.269266719309996355091226921569469,
    0.295524224714752870173892994651338,
];

/// Requested accuracy of an integral.
///
/// The integral has converged once the error estimate is at most
/// `max(absolute, relative * |integral|)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    pub absolute: f64,
    pub relative: f64,
}

impl Tolerance {
    pub fn new(absolute: f64, relative: f64) -> Self {
        Self { absolute, relative }
    }

    /// Same bound used as both the absolute and the relative tolerance.
    pub fn both(eps: f64) -> Self {
        Self::new(eps, eps)
    }

    fn bound(&self, integral: f64) -> f64 {
        self.absolute.max(self.relative * integral.abs())
    }

    /// At least one bound is strictly positive and neither is negative.
    pub fn is_valid(&self) -> bool {
        self.absolute >= 0.0
            && self.relative >= 0.0
            && (self.absolute > 0.0 || self.relative > 0.0)
    }
}

/// Failure modes of [`AdaptiveQuadrature::integrate`]. None of them is recoverable by retrying.
#[derive(Debug, Error, PartialEq)]
pub enum QuadratureError {
    #[error("integration bounds [{lower}, {upper}] are not finite")]
    InvalidBounds { lower: f64, upper: f64 },

    #[error("tolerance {0:?} is not usable")]
    InvalidTolerance(Tolerance),

    #[error("integrand is not finite at x = {x}")]
    NonFinite { x: f64 },

    #[error(
        "no convergence after {limit} subintervals: \
         error estimate {error:e} exceeds {tolerance:e}"
    )]
    SubintervalLimit {
        limit: usize,
        error: f64,
        tolerance: f64,
    },

    #[error("interval around x = {at} cannot be subdivided further (error estimate {error:e})")]
    Unresolvable { at: f64, error: f64 },
}

/// Result of the 21-point rule on one subinterval.
#[derive(Debug, Clone, Copy)]
struct Segment {
    lower: f64,
    upper: f64,
    integral: f64,
    error: f64,
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Segment {}

impl PartialOrd for Segment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Max-heap on error estimate
impl Ord for Segment {
    fn cmp(&self, other: &Self) -> Ordering {
        self.error.total_cmp(&other.error)
    }
}

/// Adaptive Gauss-Kronrod integrator with a fixed tolerance and budget.
#[derive(Debug, Clone, Copy)]
pub struct AdaptiveQuadrature {
    pub tolerance: Tolerance,
    /// Maximum number of subintervals
    pub limit: usize,
}

impl AdaptiveQuadrature {
    pub fn new(tolerance: Tolerance) -> Self {
        Self {
            tolerance,
            limit: DEFAULT_SUBINTERVAL_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.max(1);
        self
    }

    /// Integrate `f` from `lower` to `upper`.
    ///
    /// Equal bounds give exactly zero; reversed bounds give the negated
    /// integral over the ordered interval.
    pub fn integrate<F>(&self, f: F, lower: f64, upper: f64) -> Result<f64, QuadratureError>
    where
        F: Fn(f64) -> f64,
    {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(QuadratureError::InvalidBounds { lower, upper });
        }
        if !self.tolerance.is_valid() {
            return Err(QuadratureError::InvalidTolerance(self.tolerance));
        }
        match lower.partial_cmp(&upper) {
            Some(Ordering::Equal) => Ok(0.0),
            Some(Ordering::Greater) => Ok(-self.integrate_ordered(&f, upper, lower)?),
            _ => self.integrate_ordered(&f, lower, upper),
        }
    }

    fn integrate_ordered<F>(&self, f: &F, lower: f64, upper: f64) -> Result<f64, QuadratureError>
    where
        F: Fn(f64) -> f64,
    {
        let first = gauss_kronrod_21(f, lower, upper)?;
        let mut integral = first.integral;
        let mut error = first.error;

        let mut segments = BinaryHeap::with_capacity(self.limit);
        segments.push(first);

        while error > self.tolerance.bound(integral) {
            if segments.len() >= self.limit {
                return Err(QuadratureError::SubintervalLimit {
                    limit: self.limit,
                    error,
                    tolerance: self.tolerance.bound(integral),
                });
            }

            let Some(worst) = segments.pop() else {
                break;
            };
            let mid = 0.5 * (worst.lower + worst.upper);
            if mid <= worst.lower || mid >= worst.upper {
                return Err(QuadratureError::Unresolvable {
                    at: mid,
                    error: worst.error,
                });
            }

            let left = gauss_kronrod_21(f, worst.lower, mid)?;
            let right = gauss_kronrod_21(f, mid, worst.upper)?;

            integral += left.integral + right.integral - worst.integral;
            error += left.error + right.error - worst.error;

            segments.push(left);
            segments.push(right);

            // Running sums drift once many segments have been replaced
            if segments.len() % 64 == 0 {
                integral = segments.iter().map(|s| s.integral).sum();
                error = segments.iter().map(|s| s.error).sum();
            }
        }

        Ok(segments.iter().map(|s| s.integral).sum())
    }
}

fn evaluate<F>(f: &F, x: f64) -> Result<f64, QuadratureError>
where
    F: Fn(f64) -> f64,
{
    let y = f(x);
    if y.is_finite() {
        Ok(y)
    } else {
        Err(QuadratureError::NonFinite { x })
    }
}

/// 21-point Kronrod rule with the embedded 10-point Gauss rule as the error
/// estimate, scaled the way QUADPACK's QK21 does.
fn gauss_kronrod_21<F>(f: &F, lower: f64, upper: f64) -> Result<Segment, QuadratureError>
where
    F: Fn(f64) -> f64,
{
    let center = 0.5 * (lower + upper);
    let half_length = 0.5 * (upper - lower);
    let abs_half_length = half_length.abs();

    let f_center = evaluate(f, center)?;
    let mut result_gauss = 0.0;
    let mut result_kronrod = f_center * WGK[10];
    let mut result_abs = result_kronrod.abs();

    let mut f_left = [0.0; 10];
    let mut f_right = [0.0; 10];

    for j in 0..10 {
        let offset = half_length * XGK[j];
        let f1 = evaluate(f, center - offset)?;
        let f2 = evaluate(f, center + offset)?;
        f_left[j] = f1;
        f_right[j] = f2;

        if j % 2 == 1 {
            result_gauss += WG[j / 2] * (f1 + f2);
        }
        result_kronrod += WGK[j] * (f1 + f2);
        result_abs += WGK[j] * (f1.abs() + f2.abs());
    }

    let mean = 0.5 * result_kronrod;
    let mut result_asc = WGK[10] * (f_center - mean).abs();
    for j in 0..10 {
        result_asc += WGK[j] * ((f_left[j] - mean).abs() + (f_right[j] - mean).abs());
    }

    let integral = result_kronrod * half_length;
    result_abs *= abs_half_length;
    result_asc *= abs_half_length;

    let mut error = ((result_kronrod - result_gauss) * half_length).abs();
    if result_asc != 0.0 && error != 0.0 {
        error = result_asc * (200.0 * error / result_asc).powf(1.5).min(1.0);
    }
    if result_abs > f64::MIN_POSITIVE / (50.0 * f64::EPSILON) {
        error = error.max(50.0 * f64::EPSILON * result_abs);
    }

    Ok(Segment {
        lower,
        upper,
        integral,
        error,
    })
}

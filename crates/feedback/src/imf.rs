//! Initial mass functions of the two stellar populations.
//!
//! Both IMFs are number densities dN/dm in solar masses, unnormalized: the
//! overall scale cancels when event counts are expressed per unit of formed
//! stellar mass. Both evaluate to exactly zero outside their open mass
//! interval.

use serde::{Deserialize, Serialize};

/// Peak position of the log-normal part, in log10(M☉)
const LOGNORMAL_CENTER: f64 = -1.1024;

/// Variance of the log-normal part (0.69²)
const LOGNORMAL_VARIANCE: f64 = 0.4761;

/// High-mass power-law slope
const SALPETER_SLOPE: f64 = -2.3;

/// Mass where the log-normal and power-law branches join
const BRANCH_MASS: f64 = 1.0;

/// Chabrier (2003) IMF used for Population II stars.
///
/// A log-normal below 1 M☉ joined to an m^-2.3 power law above it. The
/// log-normal branch is rescaled by `fac` so that it equals 1 at the join,
/// which makes the IMF continuous there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChabrierImf {
    /// Lower mass bound (M☉)
    pub m_low: f64,
    /// Upper mass bound (M☉)
    pub m_upp: f64,
    /// Normalization of the log-normal branch
    pub fac: f64,
}

impl ChabrierImf {
    pub fn new(m_low: f64, m_upp: f64) -> Self {
        Self {
            m_low,
            m_upp,
            fac: 1.0 / lognormal_shape(BRANCH_MASS),
        }
    }

    /// dN/dm at mass `m`
    pub fn density(&self, m: f64) -> f64 {
        if m > self.m_low && m < self.m_upp {
            if m < BRANCH_MASS {
                self.fac * lognormal_shape(m)
            } else {
                m.powf(SALPETER_SLOPE)
            }
        } else {
            0.0
        }
    }

    /// m · dN/dm, the integrand of the total population mass
    pub fn mass_density(&self, m: f64) -> f64 {
        m * self.density(m)
    }
}

/// Unscaled low-mass branch: exp(-(log10 m + 1.1024)² / (2 · 0.69²)) / m
pub fn lognormal_shape(m: f64) -> f64 {
    let a = m.log10() - LOGNORMAL_CENTER;
    (-0.5 * (a * a / LOGNORMAL_VARIANCE)).exp() / m
}

/// Susa et al. (2014) IMF used for metal-free Population III stars.
///
/// In x = log10 m the shape is a tent rising linearly from 0 at `m1` to 0.5
/// at `m2` and falling back to 1 at `m3`; the IMF is `fac · (y(1-y))^pw / m`
/// with y the tent value, which vanishes at both ends of the mass interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SusaImf {
    /// Lower mass bound (M☉)
    pub m_low: f64,
    /// Upper mass bound (M☉)
    pub m_upp: f64,
    /// log10 of the lower bound
    pub m1: f64,
    /// Peak of the tent in log10(M☉)
    pub m2: f64,
    /// log10 of the upper bound
    pub m3: f64,
    /// Fitted scale factor
    pub fac: f64,
    /// Fitted shape exponent
    pub pw: f64,
}

impl SusaImf {
    /// Build the IMF on `[m_low, m_upp]` with its fitted peak and shape.
    pub fn new(m_low: f64, m_upp: f64, m2: f64, fac: f64, pw: f64) -> Self {
        Self {
            m_low,
            m_upp,
            m1: m_low.log10(),
            m2,
            m3: m_upp.log10(),
            fac,
            pw,
        }
    }

    /// Tent function in log mass, 0 at `m1`, 0.5 at `m2`, 1 at `m3`
    fn tent(&self, log_m: f64) -> f64 {
        if log_m < self.m2 {
            0.5 * (log_m - self.m1) / (self.m2 - self.m1)
        } else {
            0.5 * (log_m + self.m3 - 2.0 * self.m2) / (self.m3 - self.m2)
        }
    }

    /// dN/dm at mass `m`
    pub fn density(&self, m: f64) -> f64 {
        if m <= self.m_low || m >= self.m_upp {
            return 0.0;
        }

        let y = self.tent(m.log10());
        let imf = self.fac * (y * (1.0 - y)).powf(self.pw);
        // Round-off near the bounds can leave a non-positive base (NaN after powf)
        if imf > 0.0 {
            imf / m
        } else {
            0.0
        }
    }

    /// m · dN/dm, the integrand of the total population mass
    pub fn mass_density(&self, m: f64) -> f64 {
        m * self.density(m)
    }
}

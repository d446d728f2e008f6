//! Type Ia supernova delay-time distribution.
//!
//! Two-component model after Mannucci et al. (2006, MNRAS 370, 773): a
//! narrow "prompt" Gaussian bump shortly after star formation carrying 40%
//! of the events, and a broad "tardy" double exponential carrying the other
//! 60%. Times are in Gyr since the population formed.

use numerics::{AdaptiveQuadrature, QuadratureError};
use serde::{Deserialize, Serialize};

/// Earliest possible Type Ia delay (Gyr)
pub const DELAY_MIN_GYR: f64 = 0.03;

/// Latest delay considered, roughly the age of the Universe (Gyr)
pub const DELAY_MAX_GYR: f64 = 13.6;

/// Fraction of events in the prompt component
pub const PROMPT_FRACTION: f64 = 0.4;

/// Fraction of events in the tardy component
pub const TARDY_FRACTION: f64 = 0.6;

const TARDY_PEAK_GYR: f64 = 0.25;
const TARDY_RISE_GYR: f64 = 0.1;
const TARDY_DECAY_GYR: f64 = 7.0;

/// Shape and normalization of the delay-time density.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnIaDelayTime {
    /// Center of the prompt Gaussian (Gyr)
    pub mu: f64,
    /// Width of the prompt Gaussian (Gyr)
    pub sigma: f64,
    /// Normalization of the prompt component
    pub norm1: f64,
    /// Normalization of the tardy component
    pub norm2: f64,
}

impl SnIaDelayTime {
    /// Delay-time shape with both normalizations set to 1.
    pub fn unnormalized(mu: f64, sigma: f64) -> Self {
        Self {
            mu,
            sigma,
            norm1: 1.0,
            norm2: 1.0,
        }
    }

    /// Rescale both components so that they integrate to 0.4 and 0.6 over
    /// the delay window, making the combined density integrate to one.
    pub fn normalized(self, quad: &AdaptiveQuadrature) -> Result<Self, QuadratureError> {
        let shape = Self::unnormalized(self.mu, self.sigma);
        let prompt = quad.integrate(|t| shape.prompt(t), DELAY_MIN_GYR, DELAY_MAX_GYR)?;
        let tardy = quad.integrate(|t| shape.tardy(t), DELAY_MIN_GYR, DELAY_MAX_GYR)?;

        Ok(Self {
            norm1: PROMPT_FRACTION / prompt,
            norm2: TARDY_FRACTION / tardy,
            ..shape
        })
    }

    /// Gaussian-modulated prompt component
    pub fn prompt(&self, t: f64) -> f64 {
        if !in_window(t) {
            return 0.0;
        }
        let a = (t - self.mu) / self.sigma;
        self.norm1 * (t - DELAY_MIN_GYR) * (DELAY_MAX_GYR - t) * (-0.5 * a * a).exp()
    }

    /// Double-exponential tardy component, continuous at its 0.25 Gyr peak
    /// and offset so that it starts from zero at the window start.
    pub fn tardy(&self, t: f64) -> f64 {
        if !in_window(t) {
            return 0.0;
        }
        let floor = ((DELAY_MIN_GYR - TARDY_PEAK_GYR) / TARDY_RISE_GYR).exp();
        let delay = if t < TARDY_PEAK_GYR {
            self.norm2 * (((t - TARDY_PEAK_GYR) / TARDY_RISE_GYR).exp() - floor)
        } else {
            self.norm2 * (((TARDY_PEAK_GYR - t) / TARDY_DECAY_GYR).exp() - floor)
        };
        delay.max(0.0)
    }

    /// Combined delay-time density
    pub fn density(&self, t: f64) -> f64 {
        self.prompt(t) + self.tardy(t)
    }
}

fn in_window(t: f64) -> bool {
    t > DELAY_MIN_GYR && t < DELAY_MAX_GYR
}

use serde::{Deserialize, Serialize};

/// Years per Myr
const MYR_TO_YEARS: f64 = 1_000_000.0;

/// Years per Gyr
const GYR_TO_YEARS: f64 = 1_000_000_000.0;

/// Elapsed time, stored in years.
///
/// Stellar lifetimes span from a few Myr for the most
/// massive progenitors to tens of Gyr for sub-solar stars, and the Type Ia
/// delay-time distribution is defined in Gyr.
///
/// # Examples
///
/// ```rust
/// use units::Time;
///
/// let wind_phase = Time::from_myr(31.0);
/// let hubble_time = Time::from_gyr(13.8);
///
/// assert_eq!(wind_phase.to_myr(), 31.0);
/// assert!(hubble_time > wind_phase);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Time(f64);

impl Time {
    pub fn from_years(value: f64) -> Self {
        Self(value)
    }

    pub fn from_myr(value: f64) -> Self {
        Self(value * MYR_TO_YEARS)
    }

    pub fn from_gyr(value: f64) -> Self {
        Self(value * GYR_TO_YEARS)
    }

    pub fn to_years(&self) -> f64 {
        self.0
    }

    pub fn to_myr(&self) -> f64 {
        self.0 / MYR_TO_YEARS
    }

    pub fn to_gyr(&self) -> f64 {
        self.0 / GYR_TO_YEARS
    }
}

use serde::{Deserialize, Serialize};

/// Mass of the Sun in grams (1.98847 × 10³³ g)
pub const SOLAR_MASS_G: f64 = 1.98847e33;

/// A physical mass quantity using f64 precision.
///
/// Solar masses are the base unit: stellar birth masses, population masses and
/// ejecta masses are all naturally expressed in M☉.
///
/// # Examples
///
/// ```rust
/// use units::Mass;
///
/// let population = Mass::from_solar_masses(1.0e4);
/// let progenitor = Mass::from_grams(1.6e34);
///
/// assert!((progenitor.to_solar_masses() - 8.046).abs() < 1e-3);
/// assert!(population > progenitor);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mass(f64); // Base unit: Solar Masses

impl Mass {
    /// Creates a new `Mass` from a value in solar masses.
    ///
    /// This is the most direct constructor since solar masses are the base unit.
    pub fn from_solar_masses(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Mass` from a value in grams.
    pub fn from_grams(value: f64) -> Self {
        Self(value / SOLAR_MASS_G)
    }

    /// Returns the mass value in solar masses.
    pub fn to_solar_masses(&self) -> f64 {
        self.0
    }

    /// Converts the mass to grams.
    pub fn to_grams(&self) -> f64 {
        self.0 * SOLAR_MASS_G
    }

    /// Decimal logarithm of the mass in solar masses.
    ///
    /// The Population III survival table is keyed on `log10(M/M☉)`.
    pub fn log10(&self) -> f64 {
        self.0.log10()
    }
}

use serde::{Deserialize, Serialize};

/// One "foe" (10⁵¹ erg), the canonical supernova explosion energy
pub const FOE_ERG: f64 = 1.0e51;

/// A physical energy quantity using f64 precision.
///
/// The base unit is the erg. Supernova energies are conveniently written in
/// foe (10⁵¹ erg); the two constructors are related by an exact scaling.
///
/// # Examples
///
/// ```rust
/// use units::Energy;
///
/// let type_ii = Energy::from_foe(1.0);
/// let wind = Energy::from_erg(1.0e50);
///
/// assert_eq!(type_ii.to_erg(), 1.0e51);
/// assert!((wind.to_foe() - 0.1).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Energy(f64); // Base unit: erg

impl Energy {
    /// Creates a new `Energy` from a value in erg.
    pub fn from_erg(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Energy` from a value in foe (10⁵¹ erg).
    pub fn from_foe(value: f64) -> Self {
        Self(value * FOE_ERG)
    }

    /// Returns the energy in erg.
    pub fn to_erg(&self) -> f64 {
        self.0
    }

    /// Returns the energy in foe (10⁵¹ erg).
    pub fn to_foe(&self) -> f64 {
        self.0 / FOE_ERG
    }
}

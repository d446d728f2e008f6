use serde::{Deserialize, Serialize};

use crate::{Energy, Time};

/// Internal unit system of the host simulation.
///
/// Holds the physical size of one internal energy unit and one internal time
/// unit. Raw values in erg and Myr are converted into internal units by
/// dividing by these scales, so a unit system whose scales are exactly 1 erg
/// and 1 Myr leaves them bit-for-bit unchanged.
///
/// # Examples
///
/// ```rust
/// use units::{Energy, Time, UnitSystem};
///
/// let units = UnitSystem::unconverted();
/// assert_eq!(units.energy_from_erg(7.0e50), 7.0e50);
/// assert_eq!(units.time_from_myr(31.0), 31.0);
///
/// let code = UnitSystem::new(Energy::from_foe(1.0), Time::from_gyr(1.0));
/// assert_eq!(code.time_from_myr(500.0), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitSystem {
    /// Size of one internal energy unit
    pub energy_unit: Energy,
    /// Size of one internal time unit
    pub time_unit: Time,
}

impl UnitSystem {
    pub fn new(energy_unit: Energy, time_unit: Time) -> Self {
        Self {
            energy_unit,
            time_unit,
        }
    }

    /// Energies in erg and times in Myr, i.e. no conversion at all.
    pub fn unconverted() -> Self {
        Self::new(Energy::from_erg(1.0), Time::from_myr(1.0))
    }

    /// Express an energy given in erg in internal units.
    ///
    /// Divides the raw value directly, so the unconverted system returns its
    /// input unchanged.
    pub fn energy_from_erg(&self, erg: f64) -> f64 {
        erg / self.energy_unit.to_erg()
    }

    /// Express a duration given in Myr in internal units.
    pub fn time_from_myr(&self, myr: f64) -> f64 {
        myr / self.time_unit.to_myr()
    }

    /// Both unit scales are finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        let energy = self.energy_unit.to_erg();
        let time = self.time_unit.to_years();
        energy.is_finite() && energy > 0.0 && time.is_finite() && time > 0.0
    }
}

impl Default for UnitSystem {
    fn default() -> Self {
        Self::unconverted()
    }
}

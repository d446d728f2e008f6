//! Per-event feedback yields.
//!
//! Energies are in internal energy units, wind rates in internal energy per
//! internal time unit. Ejected masses are fractions of the stellar
//! population mass.

use std::io::{Read, Write};

use restart::{RestartError, RestartReader, RestartWriter};
use serde::{Deserialize, Serialize};

use crate::config::FeedbackConfig;

/// Nominal energy of a Population II supernova (erg)
pub const POPII_SN_ENERGY_ERG: f64 = 1.0e51;

/// Total energy of the Population II wind phase (erg)
pub const POPII_WIND_ENERGY_ERG: f64 = 1.0e50;

/// Duration of the Population II wind phase (Myr)
pub const POPII_WIND_DURATION_MYR: f64 = 31.0;

/// Total energy of the Population III wind phase (erg)
pub const POPIII_WIND_ENERGY_ERG: f64 = 1.0e51;

/// Duration of the Population III wind phase (Myr)
pub const POPIII_WIND_DURATION_MYR: f64 = 16.7;

/// What a single discrete event returns to the gas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EventYield {
    pub energy: f64,
    pub mass: f64,
    pub metals: f64,
    pub iron: f64,
    pub magnesium: f64,
}

impl EventYield {
    fn dump<W: Write>(&self, writer: &mut RestartWriter<W>) -> Result<(), RestartError> {
        writer.write(&self.energy)?;
        writer.write(&self.mass)?;
        writer.write(&self.metals)?;
        writer.write(&self.iron)?;
        writer.write(&self.magnesium)
    }

    fn restore<R: Read>(reader: &mut RestartReader<R>) -> Result<Self, RestartError> {
        Ok(Self {
            energy: reader.read()?,
            mass: reader.read()?,
            metals: reader.read()?,
            iron: reader.read()?,
            magnesium: reader.read()?,
        })
    }
}

/// Continuous wind phase: constant power until `end_time`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindYield {
    /// Energy injected per unit time
    pub energy_rate: f64,
    /// Length of the wind phase after formation
    pub end_time: f64,
}

impl WindYield {
    fn new(config: &FeedbackConfig, energy_erg: f64, duration_myr: f64) -> Self {
        let end_time = config.units.time_from_myr(duration_myr);
        let energy = config
            .units
            .energy_from_erg(energy_erg * config.feedback_efficiency);
        Self {
            energy_rate: energy / end_time,
            end_time,
        }
    }

    fn dump<W: Write>(&self, writer: &mut RestartWriter<W>) -> Result<(), RestartError> {
        writer.write(&self.energy_rate)?;
        writer.write(&self.end_time)
    }

    fn restore<R: Read>(reader: &mut RestartReader<R>) -> Result<Self, RestartError> {
        Ok(Self {
            energy_rate: reader.read()?,
            end_time: reader.read()?,
        })
    }
}

/// Yield table of both populations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Yields {
    pub popii_snii: EventYield,
    pub popii_snia: EventYield,
    pub popii_wind: WindYield,
    pub popiii_sn: EventYield,
    pub popiii_wind: WindYield,
}

impl Yields {
    /// Build the table for `config`.
    ///
    /// `popiii_energy_erg` is the IMF-averaged Population III explosion
    /// energy, which depends on the energy table and is computed by the
    /// model.
    pub fn new(config: &FeedbackConfig, popiii_energy_erg: f64) -> Self {
        let efficiency = config.feedback_efficiency;
        let energy = |erg: f64| config.units.energy_from_erg(erg * efficiency);

        Self {
            popii_snii: EventYield {
                energy: energy(POPII_SN_ENERGY_ERG),
                mass: 0.191445322565,
                metals: 0.0241439721018,
                iron: 0.000932719658516,
                magnesium: 0.00151412640705,
            },
            popii_snia: EventYield {
                energy: energy(POPII_SN_ENERGY_ERG),
                mass: 0.00655147325196,
                metals: 0.00655147325196,
                iron: 0.00165100587997,
                magnesium: 0.000257789470044,
            },
            popii_wind: WindYield::new(config, POPII_WIND_ENERGY_ERG, POPII_WIND_DURATION_MYR),
            popiii_sn: EventYield {
                energy: energy(popiii_energy_erg),
                mass: 0.45,
                metals: 0.026,
                iron: 0.0000932719658516,
                magnesium: 0.000151412640705,
            },
            popiii_wind: WindYield::new(config, POPIII_WIND_ENERGY_ERG, POPIII_WIND_DURATION_MYR),
        }
    }

    /// Write the table in checkpoint order: Population II SNII, SNIa and
    /// wind, then Population III SN and wind.
    pub fn dump<W: Write>(&self, writer: &mut RestartWriter<W>) -> Result<(), RestartError> {
        self.popii_snii.dump(writer)?;
        self.popii_snia.dump(writer)?;
        self.popii_wind.dump(writer)?;
        self.popiii_sn.dump(writer)?;
        self.popiii_wind.dump(writer)
    }

    pub fn restore<R: Read>(reader: &mut RestartReader<R>) -> Result<Self, RestartError> {
        Ok(Self {
            popii_snii: EventYield::restore(reader)?,
            popii_snia: EventYield::restore(reader)?,
            popii_wind: WindYield::restore(reader)?,
            popiii_sn: EventYield::restore(reader)?,
            popiii_wind: WindYield::restore(reader)?,
        })
    }
}

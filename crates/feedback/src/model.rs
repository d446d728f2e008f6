//! The discrete stellar feedback model.
//!
//! [`DiscreteFeedback`] bundles everything a feedback step needs to turn a
//! star particle of known mass and age into discrete supernova events: the
//! IMFs and delay-time distribution of both stellar populations, their
//! normalization integrals, the cumulative sampling tables, lookup tables for
//! lifetimes and explosion energies, and the per-event yields.
//!
//! The model is derived once with [`DiscreteFeedback::new`] or read back from
//! a checkpoint with [`DiscreteFeedback::restore`], and is read-only after
//! that.

use numerics::{AdaptiveQuadrature, Interpolator, QuadratureError, Tolerance};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use units::{Mass, Time, FOE_ERG};

use crate::config::FeedbackConfig;
use crate::delay::SnIaDelayTime;
use crate::error::Result;
use crate::imf::{ChabrierImf, SusaImf};
use crate::samplers::{cumulative_delay, imf_survival};
use crate::tables::{
    POPIII_LIFETIME_LOG_GYR, POPIII_LIFETIME_MASSES, POPIII_SN_ENERGIES_FOE, POPIII_SN_MASSES,
    POPII_LIFETIME_LOG_YEARS, POPII_LIFETIME_MASSES,
};
use crate::yields::Yields;

/// Population II parameters: Chabrier IMF, supernova mass windows and the
/// Type Ia delay-time distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PopulationII {
    pub imf: ChabrierImf,
    /// Lowest progenitor mass of a Type II supernova (M☉)
    pub snii_m_low: f64,
    /// Lower end of the Type Ia progenitor window (M☉)
    pub snia_m_low: f64,
    /// Upper end of the Type Ia progenitor window (M☉)
    pub snia_m_upp: f64,
    pub snia_delay: SnIaDelayTime,
}

impl PopulationII {
    /// Fiducial parameters, with an unnormalized delay-time distribution.
    pub fn fiducial() -> Self {
        Self {
            imf: ChabrierImf::new(0.07, 100.0),
            snii_m_low: 8.0,
            snia_m_low: 3.0,
            snia_m_upp: 8.0,
            snia_delay: SnIaDelayTime::unnormalized(0.05, 0.01),
        }
    }

    /// Integrals of the total mass, the SNII count and the SNIa progenitor
    /// count, all per unit IMF normalization.
    fn integrals(
        &self,
        quad: &AdaptiveQuadrature,
    ) -> std::result::Result<[f64; 3], QuadratureError> {
        let imf = &self.imf;
        Ok([
            quad.integrate(|m| imf.mass_density(m), imf.m_low, imf.m_upp)?,
            quad.integrate(|m| imf.density(m), self.snii_m_low, imf.m_upp)?,
            quad.integrate(|m| imf.density(m), self.snia_m_low, self.snia_m_upp)?,
        ])
    }
}

/// Population III parameters: Susa IMF, supernova mass threshold and the
/// metallicity below which a star particle belongs to this population.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PopulationIII {
    /// log10 metallicity cutoff
    pub metallicity_cutoff: f64,
    pub imf: SusaImf,
    /// Lowest progenitor mass that explodes (M☉)
    pub sn_m_low: f64,
}

impl PopulationIII {
    pub fn fiducial() -> Self {
        Self {
            metallicity_cutoff: -5.0,
            imf: SusaImf::new(0.7, 500.0, 1.51130759, 708.92544818, 2.8008394),
            sn_m_low: 10.0,
        }
    }

    fn integrals(
        &self,
        quad: &AdaptiveQuadrature,
    ) -> std::result::Result<[f64; 2], QuadratureError> {
        let imf = &self.imf;
        Ok([
            quad.integrate(|m| imf.mass_density(m), imf.m_low, imf.m_upp)?,
            quad.integrate(|m| imf.density(m), self.sn_m_low, imf.m_upp)?,
        ])
    }
}

/// IMF integrals that turn a formed stellar mass into event counts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Normalizations {
    /// ∫ m Φ_II(m) dm over the full Population II mass range
    pub popii_mass: f64,
    /// ∫ Φ_II(m) dm above the SNII threshold
    pub popii_snii_count: f64,
    /// ∫ Φ_II(m) dm over the SNIa progenitor window
    pub popii_snia_count: f64,
    /// ∫ m Φ_III(m) dm over the full Population III mass range
    pub popiii_mass: f64,
    /// ∫ Φ_III(m) dm above the Population III SN threshold
    pub popiii_sn_count: f64,
    /// ∫ E(m) Φ_III(m) dm above the SN threshold (erg)
    pub popiii_sn_energy: f64,
}

/// Every spline held by the model.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackTables {
    /// log10(delay / Gyr) → cumulative SNIa probability (cubic)
    pub snia_cumulative_delay: Interpolator,
    /// log10(m / M☉) → number of Population III stars above m (linear)
    pub popiii_imf_survival: Interpolator,
    /// m / M☉ → log10(lifetime / yr) (cubic)
    pub popii_lifetime: Interpolator,
    /// m / M☉ → log10(lifetime / Gyr) (cubic)
    pub popiii_lifetime: Interpolator,
    /// m / M☉ → explosion energy in 10⁵¹ erg (linear)
    pub popiii_sn_energy: Interpolator,
}

/// Expected event counts for a population of given total mass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExpectedEvents {
    pub popii_snii: f64,
    pub popii_snia: f64,
    pub popiii_sn: f64,
}

/// Statistical and energetic model behind discrete stellar feedback.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteFeedback {
    pub(crate) popii: PopulationII,
    pub(crate) popiii: PopulationIII,
    pub(crate) integrals: Normalizations,
    pub(crate) tables: FeedbackTables,
    pub(crate) yields: Yields,
}

impl DiscreteFeedback {
    /// Derive the model from scratch.
    ///
    /// Runs every normalization integral, builds the two cumulative sampling
    /// tables and fits the lookup tables. Independent integrals and the two
    /// sampling tables are computed in parallel; the result does not depend
    /// on the number of threads.
    #[instrument(skip_all, fields(efficiency = config.feedback_efficiency))]
    pub fn new(config: &FeedbackConfig) -> Result<Self> {
        config.validate()?;
        let quad = AdaptiveQuadrature::new(Tolerance::both(config.tolerance));

        let mut popii = PopulationII::fiducial();
        let popiii = PopulationIII::fiducial();

        let ((popii_integrals, popiii_integrals), snia_delay) = rayon::join(
            || rayon::join(|| popii.integrals(&quad), || popiii.integrals(&quad)),
            || popii.snia_delay.normalized(&quad),
        );
        let [popii_mass, popii_snii_count, popii_snia_count] = popii_integrals?;
        let [popiii_mass, popiii_sn_count] = popiii_integrals?;
        popii.snia_delay = snia_delay?;
        info!(
            norm1 = popii.snia_delay.norm1,
            norm2 = popii.snia_delay.norm2,
            "normalized SNIa delay-time distribution"
        );

        let (snia_cumulative_delay, popiii_imf_survival) = rayon::join(
            || cumulative_delay(&popii.snia_delay, &quad),
            || imf_survival(&popiii.imf, &quad),
        );

        let tables = FeedbackTables {
            snia_cumulative_delay: snia_cumulative_delay?,
            popiii_imf_survival: popiii_imf_survival?,
            popii_lifetime: Interpolator::cubic(
                POPII_LIFETIME_MASSES.to_vec(),
                POPII_LIFETIME_LOG_YEARS.to_vec(),
            )?,
            popiii_lifetime: Interpolator::cubic(
                POPIII_LIFETIME_MASSES.to_vec(),
                POPIII_LIFETIME_LOG_GYR.to_vec(),
            )?,
            popiii_sn_energy: Interpolator::linear(
                POPIII_SN_MASSES.to_vec(),
                POPIII_SN_ENERGIES_FOE.to_vec(),
            )?,
        };

        let energy_table = &tables.popiii_sn_energy;
        let imf = &popiii.imf;
        let popiii_sn_energy = quad.integrate(
            |m| FOE_ERG * energy_table.eval(m) * imf.density(m),
            popiii.sn_m_low,
            imf.m_upp,
        )?;

        let integrals = Normalizations {
            popii_mass,
            popii_snii_count,
            popii_snia_count,
            popiii_mass,
            popiii_sn_count,
            popiii_sn_energy,
        };
        info!(
            popii_mass,
            popii_snii_count,
            popii_snia_count,
            popiii_mass,
            popiii_sn_count,
            popiii_sn_energy,
            "computed IMF normalizations"
        );

        Ok(Self {
            popii,
            popiii,
            integrals,
            tables,
            yields: Yields::new(config, popiii_sn_energy),
        })
    }

    pub fn popii(&self) -> &PopulationII {
        &self.popii
    }

    pub fn popiii(&self) -> &PopulationIII {
        &self.popiii
    }

    pub fn integrals(&self) -> &Normalizations {
        &self.integrals
    }

    pub fn tables(&self) -> &FeedbackTables {
        &self.tables
    }

    pub fn yields(&self) -> &Yields {
        &self.yields
    }

    /// Expected number of each kind of supernova in a population that formed
    /// `total_mass` of stars. Linear in the mass.
    pub fn expected_events(&self, total_mass: Mass) -> ExpectedEvents {
        let m = total_mass.to_solar_masses();
        let n = &self.integrals;
        ExpectedEvents {
            popii_snii: m / n.popii_mass * n.popii_snii_count,
            popii_snia: m / n.popii_mass * n.popii_snia_count,
            popiii_sn: m / n.popiii_mass * n.popiii_sn_count,
        }
    }

    /// Main-sequence lifetime of a Population II star
    pub fn popii_lifetime(&self, mass: Mass) -> Time {
        let log_years = self.tables.popii_lifetime.eval(mass.to_solar_masses());
        Time::from_years(10f64.powf(log_years))
    }

    /// Main-sequence lifetime of a Population III star
    pub fn popiii_lifetime(&self, mass: Mass) -> Time {
        let log_gyr = self.tables.popiii_lifetime.eval(mass.to_solar_masses());
        Time::from_gyr(10f64.powf(log_gyr))
    }

    /// Fraction of all Type Ia events that happen within `delay` of formation
    pub fn snia_cumulative_delay(&self, delay: Time) -> f64 {
        self.tables
            .snia_cumulative_delay
            .eval(delay.to_gyr().log10())
    }

    /// Unnormalized number of Population III stars more massive than `mass`
    pub fn popiii_imf_survival(&self, mass: Mass) -> f64 {
        self.tables.popiii_imf_survival.eval(mass.log10())
    }

    /// Whether a star particle with log10 metallicity `metallicity` formed
    /// as Population III.
    pub fn is_popiii(&self, metallicity: f64) -> bool {
        metallicity < self.popiii.metallicity_cutoff
    }

    /// Explosion energy (erg) of a Population III star of mass `m` (M☉)
    pub fn popiii_sn_energy(&self, m: f64) -> f64 {
        FOE_ERG * self.tables.popiii_sn_energy.eval(m)
    }

    /// E(m) Φ_III(m), the integrand of the Population III energy budget
    pub fn popiii_energy_weighted_imf(&self, m: f64) -> f64 {
        self.popiii_sn_energy(m) * self.popiii.imf.density(m)
    }
}

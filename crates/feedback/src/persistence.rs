//! Checkpoint dump and restore of the feedback model.
//!
//! The stream has no field names, so [`DiscreteFeedback::dump`] and
//! [`DiscreteFeedback::restore`] must walk the model in the same order:
//!
//! 1. Population II: mass bounds, IMF factor, SNII threshold, SNIa window,
//!    delay shape and normalizations
//! 2. Population III: metallicity cutoff, mass bounds, SN threshold, IMF
//!    breakpoints, factor and exponent
//! 3. The six normalization integrals
//! 4. The five splines
//! 5. The yield table

use std::io::{Read, Write};

use numerics::{InterpolationKind, Interpolator};
use restart::{RestartError, RestartReader, RestartWriter};
use tracing::{debug, instrument};

use crate::delay::SnIaDelayTime;
use crate::error::Result;
use crate::imf::{ChabrierImf, SusaImf};
use crate::model::{DiscreteFeedback, FeedbackTables, Normalizations, PopulationII, PopulationIII};
use crate::yields::Yields;

impl DiscreteFeedback {
    /// Write the complete model to a restart stream.
    pub fn dump<W: Write>(&self, writer: &mut RestartWriter<W>) -> Result<()> {
        let popii = &self.popii;
        writer.write(&popii.imf.m_low)?;
        writer.write(&popii.imf.m_upp)?;
        writer.write(&popii.imf.fac)?;
        writer.write(&popii.snii_m_low)?;
        writer.write(&popii.snia_m_low)?;
        writer.write(&popii.snia_m_upp)?;
        writer.write(&popii.snia_delay.mu)?;
        writer.write(&popii.snia_delay.sigma)?;
        writer.write(&popii.snia_delay.norm1)?;
        writer.write(&popii.snia_delay.norm2)?;

        let popiii = &self.popiii;
        writer.write(&popiii.metallicity_cutoff)?;
        writer.write(&popiii.imf.m_low)?;
        writer.write(&popiii.imf.m_upp)?;
        writer.write(&popiii.sn_m_low)?;
        writer.write(&popiii.imf.m1)?;
        writer.write(&popiii.imf.m2)?;
        writer.write(&popiii.imf.m3)?;
        writer.write(&popiii.imf.fac)?;
        writer.write(&popiii.imf.pw)?;

        let n = &self.integrals;
        writer.write(&n.popii_mass)?;
        writer.write(&n.popii_snii_count)?;
        writer.write(&n.popii_snia_count)?;
        writer.write(&n.popiii_mass)?;
        writer.write(&n.popiii_sn_count)?;
        writer.write(&n.popiii_sn_energy)?;

        let tables = &self.tables;
        tables.snia_cumulative_delay.dump(writer)?;
        tables.popiii_imf_survival.dump(writer)?;
        tables.popii_lifetime.dump(writer)?;
        tables.popiii_lifetime.dump(writer)?;
        tables.popiii_sn_energy.dump(writer)?;

        self.yields.dump(writer)?;

        debug!(values = writer.count(), "dumped discrete feedback model");
        Ok(())
    }

    /// Rebuild a model from a stream written by [`DiscreteFeedback::dump`].
    ///
    /// No integral is recomputed. Splines are refitted from their stored
    /// knots, which reproduces them exactly.
    #[instrument(skip_all)]
    pub fn restore<R: Read>(reader: &mut RestartReader<R>) -> Result<Self> {
        let imf = ChabrierImf {
            m_low: reader.read()?,
            m_upp: reader.read()?,
            fac: reader.read()?,
        };
        let snii_m_low: f64 = reader.read()?;
        let snia_m_low: f64 = reader.read()?;
        let snia_m_upp: f64 = reader.read()?;
        let snia_delay = SnIaDelayTime {
            mu: reader.read()?,
            sigma: reader.read()?,
            norm1: reader.read()?,
            norm2: reader.read()?,
        };
        let popii = PopulationII {
            imf,
            snii_m_low,
            snia_m_low,
            snia_m_upp,
            snia_delay,
        };

        let metallicity_cutoff: f64 = reader.read()?;
        let m_low: f64 = reader.read()?;
        let m_upp: f64 = reader.read()?;
        let sn_m_low: f64 = reader.read()?;
        let imf = SusaImf {
            m_low,
            m_upp,
            m1: reader.read()?,
            m2: reader.read()?,
            m3: reader.read()?,
            fac: reader.read()?,
            pw: reader.read()?,
        };
        let popiii = PopulationIII {
            metallicity_cutoff,
            imf,
            sn_m_low,
        };

        let integrals = Normalizations {
            popii_mass: reader.read()?,
            popii_snii_count: reader.read()?,
            popii_snia_count: reader.read()?,
            popiii_mass: reader.read()?,
            popiii_sn_count: reader.read()?,
            popiii_sn_energy: reader.read()?,
        };

        use InterpolationKind::{Cubic, Linear};
        let tables = FeedbackTables {
            snia_cumulative_delay: restore_spline(reader, "SNIa delay", Cubic)?,
            popiii_imf_survival: restore_spline(reader, "PopIII survival", Linear)?,
            popii_lifetime: restore_spline(reader, "PopII lifetime", Cubic)?,
            popiii_lifetime: restore_spline(reader, "PopIII lifetime", Cubic)?,
            popiii_sn_energy: restore_spline(reader, "PopIII energy", Linear)?,
        };

        let yields = Yields::restore(reader)?;

        debug!(values = reader.count(), "restored discrete feedback model");
        Ok(Self {
            popii,
            popiii,
            integrals,
            tables,
            yields,
        })
    }
}

/// Read one spline and check that it has the kind this slot must hold.
fn restore_spline<R: Read>(
    reader: &mut RestartReader<R>,
    name: &str,
    expected: InterpolationKind,
) -> Result<Interpolator> {
    let spline = Interpolator::restore(reader)?;
    if spline.kind() != expected {
        return Err(RestartError::Corrupt(format!(
            "{name} spline is {} but must be {expected}",
            spline.kind()
        ))
        .into());
    }
    Ok(spline)
}

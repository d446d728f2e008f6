//! Statistical and energetic model for discrete stellar feedback.
//!
//! Given a star particle that formed a known mass of stars at one instant,
//! the model tells how many Type II, Type Ia and Population III supernovae it
//! produces, when they go off, which progenitor masses they correspond to and
//! what each event returns to the surrounding gas.

pub mod config;
pub mod delay;
pub mod error;
pub mod imf;
pub mod model;
pub mod persistence;
pub mod samplers;
pub mod tables;
pub mod yields;

#[cfg(test)]
mod imf_test;
#[cfg(test)]
mod persistence_test;
#[cfg(test)]
mod samplers_test;
#[cfg(test)]
mod yields_test;

pub use config::FeedbackConfig;
pub use delay::SnIaDelayTime;
pub use error::{FeedbackError, Result};
pub use imf::{ChabrierImf, SusaImf};
pub use model::{
    DiscreteFeedback, ExpectedEvents, FeedbackTables, Normalizations, PopulationII, PopulationIII,
};
pub use yields::{EventYield, WindYield, Yields};

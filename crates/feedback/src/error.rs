//! Errors raised while deriving or restoring the feedback model.
//!
//! Every variant is fatal for simulation startup or restart: nothing in this
//! crate retries, and no partially built model is ever returned.

use numerics::{InterpolationError, QuadratureError};
use restart::RestartError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FeedbackError>;

#[derive(Debug, Error)]
pub enum FeedbackError {
    /// An IMF, delay-time or energy integral did not converge.
    #[error("quadrature failed")]
    Quadrature(#[from] QuadratureError),

    /// A lookup or cumulative table could not be turned into a spline.
    #[error("spline construction failed")]
    Interpolation(#[from] InterpolationError),

    /// The checkpoint stream was unreadable, truncated or inconsistent.
    #[error("restart file is unusable")]
    Restart(#[from] RestartError),

    /// Rejected configuration value
    #[error("invalid feedback configuration: {0}")]
    InvalidConfig(String),
}

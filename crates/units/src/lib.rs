pub mod energy;
pub mod mass;
pub mod time;
pub mod unit_system;

#[cfg(test)]
mod mass_test;
#[cfg(test)]
mod time_test;

pub use energy::{Energy, FOE_ERG};
pub use mass::{Mass, SOLAR_MASS_G};
pub use time::Time;
pub use unit_system::UnitSystem;

use approx::assert_relative_eq;

use crate::mass::{Mass, SOLAR_MASS_G};

#[test]
fn test_mass_conversions() {
    let mass_sm = Mass::from_solar_masses(1.0);
    assert_relative_eq!(mass_sm.to_grams(), SOLAR_MASS_G);

    let mass_g = Mass::from_grams(SOLAR_MASS_G);
    assert_relative_eq!(mass_g.to_solar_masses(), 1.0);

    // A Population III pair-instability progenitor
    let original = 150.0;
    let round_trip = Mass::from_grams(Mass::from_solar_masses(original).to_grams());
    assert_relative_eq!(round_trip.to_solar_masses(), original);
}

#[test]
fn test_mass_log10() {
    assert_eq!(Mass::from_solar_masses(1.0).log10(), 0.0);
    assert_relative_eq!(Mass::from_solar_masses(500.0).log10(), 2.69897, epsilon = 1e-5);
}

#[test]
fn test_mass_serializes_as_bare_number() {
    let json = serde_json::to_string(&Mass::from_solar_masses(8.0)).unwrap();
    assert_eq!(json, "8.0");
}

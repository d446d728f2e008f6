use approx::assert_relative_eq;
use restart::{RestartReader, RestartWriter};
use units::{Energy, Time, UnitSystem};

use crate::config::FeedbackConfig;
use crate::yields::Yields;

const POPIII_ENERGY_ERG: f64 = 3.2e51;

#[test]
fn test_default_yields_are_exact() {
    let yields = Yields::new(&FeedbackConfig::default(), POPIII_ENERGY_ERG);

    assert_eq!(yields.popii_snii.energy, 1.0e51 * 0.7);
    assert_eq!(yields.popii_snia.energy, 1.0e51 * 0.7);
    assert_eq!(yields.popii_wind.energy_rate, (1.0e50 * 0.7) / 31.0);
    assert_eq!(yields.popii_wind.end_time, 31.0);
    assert_eq!(yields.popiii_sn.energy, POPIII_ENERGY_ERG * 0.7);
    assert_eq!(yields.popiii_wind.energy_rate, (1.0e51 * 0.7) / 16.7);
    assert_eq!(yields.popiii_wind.end_time, 16.7);
}

#[test]
fn test_mass_fractions() {
    let yields = Yields::new(&FeedbackConfig::default(), POPIII_ENERGY_ERG);

    assert_eq!(yields.popii_snii.mass, 0.191445322565);
    assert_eq!(yields.popii_snii.iron, 0.000932719658516);
    assert_eq!(yields.popii_snia.mass, yields.popii_snia.metals);
    assert_eq!(yields.popiii_sn.mass, 0.45);
    assert_eq!(yields.popiii_sn.metals, 0.026);
    assert_eq!(yields.popiii_sn.magnesium, 0.000151412640705);

    for event in [yields.popii_snii, yields.popii_snia, yields.popiii_sn] {
        assert!(event.metals <= event.mass);
        assert!(event.iron + event.magnesium <= event.metals);
    }
}

#[test]
fn test_efficiency_scales_every_energy() {
    let config = FeedbackConfig {
        feedback_efficiency: 0.35,
        ..FeedbackConfig::default()
    };
    let full = Yields::new(&FeedbackConfig::default(), POPIII_ENERGY_ERG);
    let half = Yields::new(&config, POPIII_ENERGY_ERG);

    assert_relative_eq!(half.popii_snii.energy, 0.5 * full.popii_snii.energy);
    assert_relative_eq!(half.popii_wind.energy_rate, 0.5 * full.popii_wind.energy_rate);
    assert_relative_eq!(half.popiii_sn.energy, 0.5 * full.popiii_sn.energy);
    assert_eq!(half.popii_wind.end_time, full.popii_wind.end_time);
    assert_eq!(half.popii_snii.mass, full.popii_snii.mass);
}

#[test]
fn test_internal_units() {
    let config = FeedbackConfig {
        units: UnitSystem::new(Energy::from_foe(1.0), Time::from_gyr(1.0)),
        ..FeedbackConfig::default()
    };
    let yields = Yields::new(&config, POPIII_ENERGY_ERG);

    assert_relative_eq!(yields.popii_snii.energy, 0.7, max_relative = 1e-14);
    assert_relative_eq!(yields.popii_wind.end_time, 0.031, max_relative = 1e-14);
    // 0.07 foe spread over 0.031 Gyr
    assert_relative_eq!(yields.popii_wind.energy_rate, 0.07 / 0.031, max_relative = 1e-14);
    assert_relative_eq!(yields.popiii_sn.energy, 3.2 * 0.7, max_relative = 1e-14);
}

#[test]
fn test_restart_round_trip() {
    let yields = Yields::new(&FeedbackConfig::default(), POPIII_ENERGY_ERG);

    let mut writer = RestartWriter::new(Vec::new());
    yields.dump(&mut writer).unwrap();
    // 3 events with 5 values, 2 winds with 2 values
    assert_eq!(writer.count(), 19);
    let bytes = writer.finish().unwrap();

    let mut reader = RestartReader::new(bytes.as_slice());
    let restored = Yields::restore(&mut reader).unwrap();
    assert_eq!(restored, yields);
    assert!(reader.into_inner().is_empty());
}

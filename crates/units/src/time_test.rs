use approx::assert_relative_eq;

use crate::time::Time;

#[test]
fn test_time_conversions() {
    let year = Time::from_years(1.0);
    assert_eq!(year.to_years(), 1.0);
    assert_relative_eq!(year.to_myr(), 1e-6);

    // Stellar wind phase of a Population II population
    let wind = Time::from_myr(31.0);
    assert_relative_eq!(wind.to_years(), 3.1e7);
    assert_eq!(wind.to_myr(), 31.0);

    // Upper end of the Type Ia delay-time window
    let window = Time::from_gyr(13.6);
    assert_relative_eq!(window.to_myr(), 13_600.0);
    assert_relative_eq!(window.to_gyr(), 13.6);
}

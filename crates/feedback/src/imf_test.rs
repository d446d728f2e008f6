use approx::assert_relative_eq;

use crate::imf::{lognormal_shape, ChabrierImf, SusaImf};

fn chabrier() -> ChabrierImf {
    ChabrierImf::new(0.07, 100.0)
}

fn susa() -> SusaImf {
    SusaImf::new(0.7, 500.0, 1.51130759, 708.92544818, 2.8008394)
}

#[test]
fn test_chabrier_vanishes_outside_bounds() {
    let imf = chabrier();
    for m in [0.0, 0.01, 0.07, 100.0, 150.0, -1.0, f64::NAN] {
        assert_eq!(imf.density(m), 0.0, "m = {m}");
        assert_eq!(imf.mass_density(m).max(0.0), 0.0, "m = {m}");
    }
}

#[test]
fn test_chabrier_is_continuous_at_one_solar_mass() {
    let imf = chabrier();

    // Power-law branch is exactly 1 at the join
    assert_eq!(imf.density(1.0), 1.0);
    assert_relative_eq!(imf.fac * lognormal_shape(1.0), 1.0, max_relative = 1e-14);

    let below = imf.density(1.0 - 1e-9);
    let above = imf.density(1.0 + 1e-9);
    assert_relative_eq!(below, above, max_relative = 1e-6);
}

#[test]
fn test_chabrier_branches() {
    let imf = chabrier();
    assert_relative_eq!(imf.density(10.0), 10.0_f64.powf(-2.3), max_relative = 1e-15);
    assert_relative_eq!(
        imf.density(0.1),
        imf.fac * lognormal_shape(0.1),
        max_relative = 1e-15
    );
    assert_relative_eq!(imf.mass_density(10.0), 10.0 * imf.density(10.0));
}

#[test]
fn test_lognormal_shape_peaks_near_center() {
    // m · shape(m) is a Gaussian in log10 m centered on -1.1024
    let peak = 10.0_f64.powf(-1.1024);
    let at_peak = peak * lognormal_shape(peak);
    assert_relative_eq!(at_peak, 1.0, max_relative = 1e-12);
    assert!(0.5 * lognormal_shape(0.5) < at_peak);
    assert!(0.01 * lognormal_shape(0.01) < at_peak);
}

#[test]
fn test_susa_vanishes_outside_bounds() {
    let imf = susa();
    for m in [0.0, 0.5, 0.7, 500.0, 1000.0, f64::NAN] {
        assert_eq!(imf.density(m), 0.0, "m = {m}");
    }
}

#[test]
fn test_susa_breakpoints() {
    let imf = susa();
    assert_relative_eq!(imf.m1, 0.7_f64.log10());
    assert_relative_eq!(imf.m3, 500.0_f64.log10());
    assert!(imf.m1 < imf.m2 && imf.m2 < imf.m3);
}

#[test]
fn test_susa_peak_value() {
    let imf = susa();
    // Tent reaches 0.5 at m2, where y(1 - y) = 1/4
    let m = 10.0_f64.powf(imf.m2);
    let expected = imf.fac * 0.25_f64.powf(imf.pw) / m;
    assert_relative_eq!(imf.density(m), expected, max_relative = 1e-12);
}

#[test]
fn test_susa_is_positive_inside_bounds() {
    let imf = susa();
    for m in [0.71, 1.0, 10.0, 32.0, 140.0, 499.0] {
        assert!(imf.density(m) > 0.0, "m = {m}");
        assert_relative_eq!(imf.mass_density(m), m * imf.density(m));
    }
}

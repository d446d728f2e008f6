use approx::assert_relative_eq;
use numerics::{AdaptiveQuadrature, InterpolationKind, Tolerance};

use crate::delay::{SnIaDelayTime, DELAY_MAX_GYR, DELAY_MIN_GYR};
use crate::imf::SusaImf;
use crate::samplers::{
    cumulative_delay, imf_survival, log_grid, DELAY_GRID_STEP, IMF_GRID_STEP, PADDING_DEX,
};

fn quad() -> AdaptiveQuadrature {
    AdaptiveQuadrature::new(Tolerance::both(1e-8))
}

fn delay() -> SnIaDelayTime {
    SnIaDelayTime::unnormalized(0.05, 0.01)
        .normalized(&quad())
        .unwrap()
}

fn susa() -> SusaImf {
    SusaImf::new(0.7, 500.0, 1.51130759, 708.92544818, 2.8008394)
}

#[test]
fn test_log_grid_sizes() {
    let delay_grid = log_grid(DELAY_MIN_GYR.log10(), DELAY_MAX_GYR.log10(), DELAY_GRID_STEP);
    assert_eq!(delay_grid.len(), 27);
    assert_eq!(delay_grid[0], DELAY_MIN_GYR.log10());

    let mass_grid = log_grid(0.7_f64.log10(), 500.0_f64.log10(), IMF_GRID_STEP);
    assert_eq!(mass_grid.len(), 286);
    assert!(mass_grid[285] < 500.0_f64.log10());
}

#[test]
fn test_log_grid_empty_when_upper_not_above_lower() {
    assert!(log_grid(1.0, 1.0, 0.1).is_empty());
    assert!(log_grid(2.0, 1.0, 0.1).is_empty());
}

#[test]
fn test_cumulative_delay_layout() {
    let spline = cumulative_delay(&delay(), &quad()).unwrap();
    assert_eq!(spline.kind(), InterpolationKind::Cubic);
    assert_eq!(spline.len(), 30);

    let xs = spline.xs();
    let ys = spline.ys();
    assert_relative_eq!(xs[0], DELAY_MIN_GYR.log10() - PADDING_DEX);
    assert_eq!(ys[0], ys[1]);
    assert_eq!(xs[28], DELAY_MAX_GYR.log10());
    assert_eq!(xs[29], 13.8_f64.log10());
}

#[test]
fn test_cumulative_delay_is_monotone_and_pinned() {
    let spline = cumulative_delay(&delay(), &quad()).unwrap();
    let ys = spline.ys();

    assert!(ys.windows(2).all(|pair| pair[1] >= pair[0]), "{ys:?}");
    assert!(ys[0] >= 0.0 && ys[0] < 1e-12);
    assert!(ys[27] > 0.9 && ys[27] < 1.0, "last sample {}", ys[27]);

    assert_eq!(spline.eval(DELAY_MAX_GYR.log10()), 1.0);
    assert_eq!(spline.eval(13.8_f64.log10()), 1.0);
    assert_eq!(spline.eval(2.0), 1.0);
}

#[test]
fn test_cumulative_delay_matches_direct_integral() {
    let delay = delay();
    let spline = cumulative_delay(&delay, &quad()).unwrap();

    let k = 15;
    let t = 10.0_f64.powf(spline.xs()[k]);
    let direct = quad()
        .integrate(|t| delay.density(t), DELAY_MIN_GYR, t)
        .unwrap();
    assert_relative_eq!(spline.ys()[k], direct, max_relative = 1e-7);
}

#[test]
fn test_imf_survival_layout() {
    let imf = susa();
    let spline = imf_survival(&imf, &quad()).unwrap();
    assert_eq!(spline.kind(), InterpolationKind::Linear);
    assert_eq!(spline.len(), 289);

    let xs = spline.xs();
    assert_relative_eq!(xs[0], 0.7_f64.log10() - PADDING_DEX);
    assert_eq!(xs[287], 500.0_f64.log10());
    assert_eq!(xs[288], 3.0);
}

#[test]
fn test_imf_survival_is_non_increasing_and_vanishes_at_top() {
    let spline = imf_survival(&susa(), &quad()).unwrap();
    let ys = spline.ys();

    assert!(ys.windows(2).all(|pair| pair[1] <= pair[0]));
    assert!(ys[286] > 0.0);
    assert_eq!(spline.eval(500.0_f64.log10()), 0.0);
    assert_eq!(spline.eval(2.9), 0.0);
    assert_eq!(spline.eval(3.0), 0.0);
    assert_eq!(spline.eval(4.0), 0.0);
}

#[test]
fn test_imf_survival_totals() {
    let imf = susa();
    let spline = imf_survival(&imf, &quad()).unwrap();
    let q = quad();

    let total = q.integrate(|m| imf.density(m), 0.0, imf.m_upp).unwrap();
    assert_relative_eq!(spline.ys()[0], total, max_relative = 1e-7);

    let k = 101;
    let m = 10.0_f64.powf(spline.xs()[k]);
    let above = q.integrate(|m| imf.density(m), m, imf.m_upp).unwrap();
    assert_relative_eq!(spline.ys()[k], above, max_relative = 1e-7);
}

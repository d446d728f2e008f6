//! Tabulated cumulative distributions used for inverse-transform sampling.
//!
//! Each table is accumulated from integrals over consecutive grid segments
//! rather than from independent integrals from a fixed origin. Every segment
//! integral of a non-negative density is non-negative, so the knot ordinates
//! are monotone regardless of the quadrature error on each piece.

use numerics::{AdaptiveQuadrature, Interpolator};
use rayon::prelude::*;
use tracing::debug;

use crate::delay::{SnIaDelayTime, DELAY_MAX_GYR, DELAY_MIN_GYR};
use crate::error::Result;
use crate::imf::SusaImf;

/// Spacing of the delay grid in log10(Gyr)
pub const DELAY_GRID_STEP: f64 = 0.1;

/// Last abscissa of the cumulative delay table, in Gyr
pub const DELAY_TABLE_END_GYR: f64 = 13.8;

/// Spacing of the Population III mass grid in log10(M☉)
pub const IMF_GRID_STEP: f64 = 0.01;

/// Last abscissa of the survival table, in log10(M☉)
pub const SURVIVAL_TABLE_END_LOG_MASS: f64 = 3.0;

/// Distance of the leading padding knot below the first grid sample, in dex
pub const PADDING_DEX: f64 = 2.0;

/// Points `lower + k · step` strictly below `upper`.
pub fn log_grid(lower: f64, upper: f64, step: f64) -> Vec<f64> {
    (0..)
        .map(|k| lower + k as f64 * step)
        .take_while(|&x| x < upper)
        .collect()
}

/// Integrals of `density` over each pair of neighbouring `edges`, in order.
fn segment_integrals<F>(
    quad: &AdaptiveQuadrature,
    density: F,
    edges: &[f64],
) -> Result<Vec<f64>>
where
    F: Fn(f64) -> f64 + Sync,
{
    let segments = edges
        .par_windows(2)
        .map(|pair| quad.integrate(&density, pair[0], pair[1]))
        .collect::<std::result::Result<Vec<f64>, _>>()?;
    Ok(segments)
}

/// Cumulative Type Ia delay distribution against log10(t / Gyr).
///
/// Knots: one padding point 2 dex below the window start carrying the first
/// sample's value, the grid samples from log10(0.03) in steps of 0.1, then
/// the value 1 pinned at log10(13.6) and log10(13.8). Fitted as a natural
/// cubic spline.
pub fn cumulative_delay(delay: &SnIaDelayTime, quad: &AdaptiveQuadrature) -> Result<Interpolator> {
    let start = DELAY_MIN_GYR.log10();
    let end = DELAY_MAX_GYR.log10();
    let grid = log_grid(start, end, DELAY_GRID_STEP);
    let edges: Vec<f64> = grid.iter().map(|&x| 10f64.powf(x)).collect();

    let density = |t: f64| delay.density(t);
    let head = quad.integrate(density, DELAY_MIN_GYR, edges[0])?;
    let segments = segment_integrals(quad, density, &edges)?;

    let mut cumulative = Vec::with_capacity(grid.len());
    cumulative.push(head);
    for segment in segments {
        let previous = cumulative[cumulative.len() - 1];
        cumulative.push(previous + segment);
    }

    let mut xs = Vec::with_capacity(grid.len() + 3);
    let mut ys = Vec::with_capacity(grid.len() + 3);
    xs.push(start - PADDING_DEX);
    ys.push(cumulative[0]);
    xs.extend_from_slice(&grid);
    ys.extend_from_slice(&cumulative);
    xs.extend([end, DELAY_TABLE_END_GYR.log10()]);
    ys.extend([1.0, 1.0]);

    debug!(
        knots = xs.len(),
        last_sample = cumulative[cumulative.len() - 1],
        "built cumulative SNIa delay table"
    );
    Ok(Interpolator::cubic(xs, ys)?)
}

/// Population III survival function N(>m) against log10(m / M☉).
///
/// Knots: one padding point 2 dex below the lower mass bound carrying the
/// integral of the whole IMF, the grid samples from log10(m_low) in steps of
/// 0.01, then zero pinned at log10(m_upp) and at 3. Linearly interpolated.
pub fn imf_survival(imf: &SusaImf, quad: &AdaptiveQuadrature) -> Result<Interpolator> {
    let start = imf.m_low.log10();
    let end = imf.m_upp.log10();
    let grid = log_grid(start, end, IMF_GRID_STEP);
    let edges: Vec<f64> = grid.iter().map(|&x| 10f64.powf(x)).collect();

    let density = |m: f64| imf.density(m);
    let (ends, segments) = rayon::join(
        || -> Result<(f64, f64)> {
            let below = quad.integrate(density, 0.0, edges[0])?;
            let tail = quad.integrate(density, edges[edges.len() - 1], imf.m_upp)?;
            Ok((below, tail))
        },
        || segment_integrals(quad, density, &edges),
    );
    let (below, tail) = ends?;
    let segments = segments?;

    // Accumulate from the top of the mass range downwards
    let mut survival = vec![0.0; grid.len()];
    let mut running = tail;
    survival[grid.len() - 1] = running;
    for (k, segment) in segments.iter().enumerate().rev() {
        running += segment;
        survival[k] = running;
    }

    let mut xs = Vec::with_capacity(grid.len() + 3);
    let mut ys = Vec::with_capacity(grid.len() + 3);
    xs.push(start - PADDING_DEX);
    ys.push(survival[0] + below);
    xs.extend_from_slice(&grid);
    ys.extend_from_slice(&survival);
    xs.extend([end, SURVIVAL_TABLE_END_LOG_MASS]);
    ys.extend([0.0, 0.0]);

    debug!(
        knots = xs.len(),
        total = ys[0],
        "built Population III survival table"
    );
    Ok(Interpolator::linear(xs, ys)?)
}

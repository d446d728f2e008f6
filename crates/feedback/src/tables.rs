//! Tabulated stellar lifetimes and Population III supernova energies.
//!
//! Abscissas are initial masses in M☉. Population II lifetimes are given as
//! log10(years), Population III lifetimes as log10(Gyr).

/// Population II lifetime table: initial masses (M☉)
pub const POPII_LIFETIME_MASSES: [f64; 87] = [
    0.65, 0.7, 0.75, 0.8, 0.85, 0.9, 0.95, 1.0, 1.05, 1.1, 1.15, 1.2, 1.25, 1.3, 1.35, 1.4, 1.45,
    1.5, 1.55, 1.6, 1.65, 1.7, 1.75, 1.8, 1.85, 1.9, 1.95, 2.0, 2.05, 2.1, 2.15, 2.2, 2.25, 2.3,
    2.35, 2.4, 2.6, 2.8, 3.0, 3.2, 3.4, 3.6, 3.8, 4.0, 4.2, 4.4, 4.6, 4.8, 5.0, 5.2, 5.4, 5.6,
    5.8, 6.0, 6.2, 6.4, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 14.0, 16.0, 18.0, 20.0, 24.0, 28.0,
    30.0, 40.0, 45.0, 50.0, 55.0, 60.0, 65.0, 70.0, 75.0, 80.0, 90.0, 95.0, 100.0, 120.0, 150.0,
    200.0, 250.0, 300.0, 350.0,
];

/// Population II lifetime table: log10(lifetime / yr)
pub const POPII_LIFETIME_LOG_YEARS: [f64; 87] = [
    10.452, 10.3415, 10.2362, 10.139, 10.0468, 9.95885, 9.87605, 9.79803, 9.72399, 9.65217,
    9.58335, 9.52138, 9.46703, 9.42591, 9.38266, 9.33495, 9.28953, 9.24572, 9.20422, 9.16552,
    9.12806, 9.0921, 9.05728, 9.02345, 8.99101, 8.95935, 8.92926, 8.90003, 8.87177, 8.84446,
    8.81782, 8.79194, 8.7669, 8.74255, 8.7187, 8.69608, 8.60937, 8.53033, 8.45752, 8.39064,
    8.32889, 8.27122, 8.21763, 8.16709, 8.12, 8.07545, 8.03334, 7.99336, 7.95561, 7.91966,
    7.88551, 7.85298, 7.82191, 7.79234, 7.76385, 7.73664, 7.66115, 7.55343, 7.46282, 7.38582,
    7.31927, 7.26113, 7.16375, 7.08681, 7.02325, 6.97053, 6.88722, 6.82377, 6.79741, 6.72284,
    6.68824, 6.65918, 6.63473, 6.61362, 6.59507, 6.57899, 6.56445, 6.55241, 6.52965, 6.52028,
    6.5111, 6.48241, 6.45054, 6.41528, 6.3914, 6.37373, 6.36056,
];

/// Population III lifetime table: initial masses (M☉)
pub const POPIII_LIFETIME_MASSES: [f64; 24] = [
    0.7, 0.8, 0.9, 1.0, 1.1, 1.2, 1.3, 1.4, 1.5, 1.6, 1.8, 2.0, 2.5, 3.0, 4.0, 5.0, 10.0, 15.0,
    20.0, 30.0, 50.0, 70.0, 100.0, 500.0,
];

/// Population III lifetime table: log10(lifetime / Gyr)
pub const POPIII_LIFETIME_LOG_GYR: [f64; 24] = [
    1.32077, 1.13354, 0.947924, 0.78533, 0.637463, 0.516384, 0.399708, 0.289454, 0.193159,
    0.100413, -0.062413, -0.208425, -0.493919, -0.702468, -0.979499, -1.18585, -1.75003,
    -1.96392, -2.08837, -2.24245, -2.39566, -2.47468, -2.54276, -2.89056,
];

/// Population III supernova energies (Woosley): progenitor masses (M☉).
///
/// The pair 140 / 140 + 1e-10 encodes the jump from core-collapse to
/// pair-instability explosions.
pub const POPIII_SN_MASSES: [f64; 18] = [
    0.7,
    10.0,
    35.0,
    40.0,
    50.0,
    60.0,
    70.0,
    80.0,
    90.0,
    100.0,
    140.0,
    140.0 + 1.0e-10,
    150.0,
    170.0,
    200.0,
    270.0,
    300.0,
    500.0,
];

/// Population III supernova energies in units of 10⁵¹ erg
pub const POPIII_SN_ENERGIES_FOE: [f64; 18] = [
    0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 9.0, 16.0, 28.0, 44.0, 49.0, 50.0, 50.0,
];

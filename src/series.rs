//! IEC 60063 preferred-value series.
//!
//! The E-series are the mantissa grids the passive-component industry
//! manufactures to: E12 spaces values ~10% apart, E24 ~5%, E96 ~1%. Both
//! the resistor codec and the capacitor filter tool snap computed values to
//! these grids, so the tables live here rather than in either module.

/// E12 mantissas (10% spacing). Also the capacitor availability grid.
pub const E12: [f64; 12] = [1.0, 1.2, 1.5, 1.8, 2.2, 2.7, 3.3, 3.9, 4.7, 5.6, 6.8, 8.2];

/// E24 mantissas (5% spacing). E12 is the even-indexed half of this table.
pub const E24: [f64; 24] = [
    1.0, 1.1, 1.2, 1.3, 1.5, 1.6, 1.8, 2.0, 2.2, 2.4, 2.7, 3.0, 3.3, 3.6, 3.9, 4.3, 4.7, 5.1,
    5.6, 6.2, 6.8, 7.5, 8.2, 9.1,
];

/// E96 mantissas (1% spacing). Note that E96 is computed from a finer
/// geometric progression and is NOT a superset of E24 (2.7 has no E96
/// counterpart; the nearest is 2.74).
pub const E96: [f64; 96] = [
    1.00, 1.02, 1.05, 1.07, 1.10, 1.13, 1.15, 1.18, 1.21, 1.24, 1.27, 1.30, 1.33, 1.37, 1.40,
    1.43, 1.47, 1.50, 1.54, 1.58, 1.62, 1.65, 1.69, 1.74, 1.78, 1.82, 1.87, 1.91, 1.96, 2.00,
    2.05, 2.10, 2.15, 2.21, 2.26, 2.32, 2.37, 2.43, 2.49, 2.55, 2.61, 2.67, 2.74, 2.80, 2.87,
    2.94, 3.01, 3.09, 3.16, 3.24, 3.32, 3.40, 3.48, 3.57, 3.65, 3.74, 3.83, 3.92, 4.02, 4.12,
    4.22, 4.32, 4.42, 4.53, 4.64, 4.75, 4.87, 4.99, 5.11, 5.23, 5.36, 5.49, 5.62, 5.76, 5.90,
    6.04, 6.19, 6.34, 6.49, 6.65, 6.81, 6.98, 7.15, 7.32, 7.50, 7.68, 7.87, 8.06, 8.25, 8.45,
    8.66, 8.87, 9.09, 9.31, 9.53, 9.76,
];

/// One of the supported preferred-value series.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Series {
    E12,
    E24,
    E96,
}

impl Series {
    /// Parse a series label, case-insensitively.
    pub fn parse(label: &str) -> Option<Series> {
        match label.trim().to_ascii_uppercase().as_str() {
            "E12" => Some(Series::E12),
            "E24" => Some(Series::E24),
            "E96" => Some(Series::E96),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Series::E12 => "E12",
            Series::E24 => "E24",
            Series::E96 => "E96",
        }
    }

    pub fn mantissas(self) -> &'static [f64] {
        match self {
            Series::E12 => &E12,
            Series::E24 => &E24,
            Series::E96 => &E96,
        }
    }

    /// The tolerance a part from this series is normally sold with.
    pub fn tolerance_pct(self) -> f64 {
        match self {
            Series::E12 => 10.0,
            Series::E24 => 5.0,
            Series::E96 => 1.0,
        }
    }
}

/// A value snapped onto a preferred-value grid.
#[derive(Clone, Copy, Debug)]
pub struct Snapped {
    /// The chosen grid value, `mantissa * 10^exponent`.
    pub value: f64,
    /// Grid mantissa in [1.0, 10.0).
    pub mantissa: f64,
    /// Decade exponent.
    pub exponent: i32,
    /// Signed error of the grid value relative to the target, in percent.
    pub error_pct: f64,
}

/// Snap a strictly positive value to the nearest point of `series`.
///
/// Candidates from the decade below and above are considered as well, so
/// e.g. 9.9 snaps to 10 rather than 9.1. Equidistant ties resolve to the
/// smaller candidate; the comparison carries a relative epsilon so that
/// mathematically exact ties are not decided by float representation noise.
pub fn snap(value: f64, series: Series) -> Snapped {
    debug_assert!(value > 0.0);
    let decade = value.log10().floor() as i32;
    let tie_eps = value * 1e-9;

    let mut best = Snapped {
        value: f64::MAX,
        mantissa: 0.0,
        exponent: 0,
        error_pct: 0.0,
    };
    let mut best_dist = f64::MAX;

    for exponent in [decade - 1, decade, decade + 1] {
        let scale = 10f64.powi(exponent);
        for &mantissa in series.mantissas() {
            let candidate = mantissa * scale;
            let dist = (candidate - value).abs();
            if dist + tie_eps < best_dist {
                best_dist = dist;
                best = Snapped {
                    value: candidate,
                    mantissa,
                    exponent,
                    error_pct: (candidate - value) / value * 100.0,
                };
            }
        }
    }
    best
}

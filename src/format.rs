//! Engineering-notation rendering for physical quantities.
//!
//! Every tool output quotes values like `4.70 kΩ`, `150 µs` or `22.0 nF`:
//! an SI prefix is chosen so the mantissa lands in [1, 1000), printed with
//! three significant figures. Values outside the prefix range fall back to
//! `m × 10^e` scientific notation. Rust's float formatting rounds ties to
//! even, which is the rounding mode the output contract asks for.

/// SI prefixes in ascending decade order, with their scale exponents.
const PREFIXES: [(i32, &str); 8] = [
    (-12, "p"),
    (-9, "n"),
    (-6, "\u{b5}"),
    (-3, "m"),
    (0, ""),
    (3, "k"),
    (6, "M"),
    (9, "G"),
];

/// Format `value` with an SI prefix and `unit` symbol, e.g. `4.70 kΩ`.
///
/// The prefix is chosen so the printed mantissa lies in [1, 1000). Values
/// below 1 p or at/above 1000 G are printed in scientific notation instead.
pub fn si(value: f64, unit: &str) -> String {
    if value == 0.0 {
        return format!("0.00 {unit}");
    }
    let magnitude = value.abs();
    for &(exp, prefix) in &PREFIXES {
        let scale = 10f64.powi(exp);
        let scaled = value / scale;
        // 999.5 would print as 1000, so it belongs to the next prefix up;
        // symmetrically, 0.9995 prints as 1.00 and belongs to this one.
        if magnitude / scale >= 0.9995 && magnitude / scale < 999.5 {
            return format!("{} {}{}", sig3(scaled), prefix, unit);
        }
    }
    format!("{} {}", scientific(value), unit)
}

/// Format `value` with three significant figures, no prefix logic.
pub fn sig3(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 999.5 || (magnitude < 0.9995 && magnitude != 0.0) {
        return scientific(value);
    }
    if magnitude < 9.995 {
        format!("{value:.2}")
    } else if magnitude < 99.95 {
        format!("{value:.1}")
    } else {
        format!("{value:.0}")
    }
}

/// `m × 10^e` with a three-significant-figure mantissa.
pub fn scientific(value: f64) -> String {
    let exp = value.abs().log10().floor() as i32;
    let mantissa = value / 10f64.powi(exp);
    format!("{mantissa:.2} \u{d7} 10^{exp}")
}

/// Format a percentage such as an encoding error, e.g. `0.64%`.
pub fn percent(value: f64) -> String {
    format!("{value:.2}%")
}

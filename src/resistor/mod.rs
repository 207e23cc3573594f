//! Resistor color-band codec.
//!
//! Bidirectional translation between painted band sequences and resistance
//! values. Three layouts exist:
//!
//! ```text
//! 3 bands:  digit digit multiplier              tolerance implied ±20%
//! 4 bands:  digit digit multiplier tolerance    two significant figures
//! 5 bands:  digit digit digit multiplier tol.   three significant figures
//! ```
//!
//! Encoding normalizes the value onto the two- or three-digit grid and
//! reports the rounding error explicitly; equidistant values round toward
//! the smaller mantissa. Scaling multiplies for positive decades and
//! divides for the fractional gold/silver decades, so that a decoded value
//! reproduces the decimal literal (47 / 10 is exactly 4.7; 47 × 0.1 is not).

pub mod colors;

use crate::error::ToolError;
use crate::series::{self, Series, Snapped};
use colors::BandColor;

/// Result of decoding a band sequence.
#[derive(Clone, Debug)]
pub struct DecodedResistor {
    /// Resistance in ohms.
    pub ohms: f64,
    /// Tolerance in percent (±20 when no tolerance band is present).
    pub tolerance_pct: f64,
    /// Assembled significant figures, e.g. 47 or 473.
    pub significand: u32,
    /// Multiplier decade exponent.
    pub multiplier_exp: i32,
    /// The parsed bands, for echoing back to the caller.
    pub bands: Vec<BandColor>,
}

/// Result of encoding a resistance as bands.
#[derive(Clone, Debug)]
pub struct EncodedResistor {
    /// Band sequence: 2 or 3 digit bands, multiplier, tolerance.
    pub bands: Vec<BandColor>,
    /// The value the bands actually encode (the chosen grid point).
    pub ohms: f64,
    /// Signed error of the grid point vs the requested value, in percent.
    pub error_pct: f64,
    /// Tolerance in percent.
    pub tolerance_pct: f64,
}

/// A target value snapped to a preferred-value series.
#[derive(Clone, Debug)]
pub struct StandardResistor {
    pub snapped: Snapped,
    pub series: Series,
    pub encoding: EncodedResistor,
}

/// Apply a decade multiplier to a significand.
///
/// Division is used for the fractional decades so results match decimal
/// literals exactly.
fn apply_multiplier(significand: f64, exp: i32) -> f64 {
    if exp >= 0 {
        significand * 10f64.powi(exp)
    } else {
        significand / 10f64.powi(-exp)
    }
}

/// Inverse of [`apply_multiplier`].
fn remove_multiplier(ohms: f64, exp: i32) -> f64 {
    if exp >= 0 {
        ohms / 10f64.powi(exp)
    } else {
        ohms * 10f64.powi(-exp)
    }
}

/// Round to the nearest integer, ties toward the smaller value.
fn round_half_down(x: f64) -> i64 {
    (x - 0.5).ceil() as i64
}

fn parse_color(name: &str, position: &'static str) -> Result<BandColor, ToolError> {
    BandColor::parse(name).ok_or_else(|| ToolError::InvalidColor {
        color: name.to_string(),
        position,
        hint: "Recognized colors: black, brown, red, orange, yellow, green, blue, violet, grey, white, gold, silver",
    })
}

fn parse_digit(name: &str, position: &'static str) -> Result<u32, ToolError> {
    let color = parse_color(name, position)?;
    color.digit().ok_or(ToolError::InvalidColor {
        color: color.name().to_string(),
        position,
        hint: "Gold and silver are only valid as multiplier or tolerance bands, not as digit bands",
    })
}

fn parse_tolerance(name: &str) -> Result<(BandColor, f64), ToolError> {
    let color = parse_color(name, "tolerance")?;
    match color.tolerance_pct() {
        Some(pct) => Ok((color, pct)),
        None => Err(ToolError::InvalidColor {
            color: color.name().to_string(),
            position: "tolerance",
            hint: "Tolerance colors: brown, red, green, blue, violet, grey, gold, silver",
        }),
    }
}

/// Decode a 3-, 4- or 5-band color sequence.
pub fn decode(bands: &[&str]) -> Result<DecodedResistor, ToolError> {
    // Band roles by sequence length: (digit count, has tolerance band).
    let (digit_count, has_tolerance) = match bands.len() {
        3 => (2, false),
        4 => (2, true),
        5 => (3, true),
        n => return Err(ToolError::InvalidBandCount(n)),
    };

    const DIGIT_POSITIONS: [&str; 3] = ["first digit", "second digit", "third digit"];

    let mut parsed = Vec::with_capacity(bands.len());
    let mut significand: u32 = 0;
    for i in 0..digit_count {
        let digit = parse_digit(bands[i], DIGIT_POSITIONS[i])?;
        significand = significand * 10 + digit;
        parsed.push(BandColor::from_digit(digit));
    }

    let multiplier = parse_color(bands[digit_count], "multiplier")?;
    parsed.push(multiplier);
    let exp = multiplier.multiplier_exp();

    let tolerance_pct = if has_tolerance {
        let (color, pct) = parse_tolerance(bands[digit_count + 1])?;
        parsed.push(color);
        pct
    } else {
        20.0
    };

    Ok(DecodedResistor {
        ohms: apply_multiplier(significand as f64, exp),
        tolerance_pct,
        significand,
        multiplier_exp: exp,
        bands: parsed,
    })
}

/// Encode a resistance as a band sequence.
///
/// The value is normalized to a two-digit (4-band) or three-digit (5-band)
/// significand times a decade in [-2, 9]. Values that do not land exactly
/// on that grid are rounded to the nearest grid point and the error is
/// reported; exact midpoints round to the smaller significand.
pub fn encode(ohms: f64, tolerance_pct: f64, five_band: bool) -> Result<EncodedResistor, ToolError> {
    if ohms <= 0.0 || !ohms.is_finite() {
        return Err(ToolError::NonPositiveInput {
            name: "resistance",
            value: ohms,
        });
    }
    let tolerance_color = BandColor::from_tolerance(tolerance_pct)?;

    let digit_count = if five_band { 3 } else { 2 };
    let lo = 10i64.pow(digit_count - 1);
    let hi = 10i64.pow(digit_count) - 1;

    let mut exp = ohms.log10().floor() as i32 - (digit_count as i32 - 1);
    exp = exp.clamp(-2, 9);
    let mut significand = round_half_down(remove_multiplier(ohms, exp));

    // Renormalize when rounding crossed a decade (99.6 -> 100) or the first
    // guess at the exponent was off by one.
    if significand > hi && exp < 9 {
        exp += 1;
        significand = round_half_down(remove_multiplier(ohms, exp));
    }
    if significand < lo && exp > -2 {
        exp -= 1;
        significand = round_half_down(remove_multiplier(ohms, exp));
    }
    // At the edges of the multiplier range the grid simply runs out:
    // saturate and let the reported error say how far off we are.
    significand = significand.clamp(0, hi);

    let encoded = apply_multiplier(significand as f64, exp);

    let mut bands = Vec::with_capacity(digit_count as usize + 2);
    let mut divisor = lo;
    for _ in 0..digit_count {
        bands.push(BandColor::from_digit((significand / divisor % 10) as u32));
        divisor /= 10;
    }
    // exp is clamped to [-2, 9] above, so a color always exists.
    bands.push(BandColor::from_multiplier_exp(exp).expect("multiplier exponent out of band range"));
    bands.push(tolerance_color);

    Ok(EncodedResistor {
        bands,
        ohms: encoded,
        error_pct: (encoded - ohms) / ohms * 100.0,
        tolerance_pct,
    })
}

/// Snap a target value to the nearest point of a preferred-value series
/// and encode it with the tolerance that series is sold at.
///
/// E96 parts need three significant figures, so they encode as 5-band;
/// E12 and E24 encode as 4-band.
pub fn find_standard(target_ohms: f64, series: Series) -> Result<StandardResistor, ToolError> {
    if target_ohms <= 0.0 || !target_ohms.is_finite() {
        return Err(ToolError::NonPositiveInput {
            name: "target_value",
            value: target_ohms,
        });
    }
    let snapped = series::snap(target_ohms, series);
    let encoding = encode(snapped.value, series.tolerance_pct(), series == Series::E96)?;
    Ok(StandardResistor {
        snapped,
        series,
        encoding,
    })
}

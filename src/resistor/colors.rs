//! Band color tables.
//!
//! Twelve paint colors appear on through-hole resistors. Ten of them encode
//! digits, all twelve encode multipliers (gold and silver are the fractional
//! ones), and eight encode tolerances. The same color can mean different
//! things in different positions: brown is digit 1, ×10, and ±1%.

use crate::error::ToolError;

/// One of the twelve band paint colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BandColor {
    Black,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Violet,
    Grey,
    White,
    Gold,
    Silver,
}

/// All colors, in digit order followed by the fractional multipliers.
pub const ALL_COLORS: [BandColor; 12] = [
    BandColor::Black,
    BandColor::Brown,
    BandColor::Red,
    BandColor::Orange,
    BandColor::Yellow,
    BandColor::Green,
    BandColor::Blue,
    BandColor::Violet,
    BandColor::Grey,
    BandColor::White,
    BandColor::Gold,
    BandColor::Silver,
];

impl BandColor {
    /// Parse a color name, case-insensitively. Accepts the common spelling
    /// variants "gray" and "purple".
    pub fn parse(name: &str) -> Option<BandColor> {
        match name.trim().to_ascii_lowercase().as_str() {
            "black" => Some(BandColor::Black),
            "brown" => Some(BandColor::Brown),
            "red" => Some(BandColor::Red),
            "orange" => Some(BandColor::Orange),
            "yellow" => Some(BandColor::Yellow),
            "green" => Some(BandColor::Green),
            "blue" => Some(BandColor::Blue),
            "violet" | "purple" => Some(BandColor::Violet),
            "grey" | "gray" => Some(BandColor::Grey),
            "white" => Some(BandColor::White),
            "gold" => Some(BandColor::Gold),
            "silver" => Some(BandColor::Silver),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BandColor::Black => "Black",
            BandColor::Brown => "Brown",
            BandColor::Red => "Red",
            BandColor::Orange => "Orange",
            BandColor::Yellow => "Yellow",
            BandColor::Green => "Green",
            BandColor::Blue => "Blue",
            BandColor::Violet => "Violet",
            BandColor::Grey => "Grey",
            BandColor::White => "White",
            BandColor::Gold => "Gold",
            BandColor::Silver => "Silver",
        }
    }

    /// Digit value, for the ten digit colors.
    pub fn digit(self) -> Option<u32> {
        match self {
            BandColor::Black => Some(0),
            BandColor::Brown => Some(1),
            BandColor::Red => Some(2),
            BandColor::Orange => Some(3),
            BandColor::Yellow => Some(4),
            BandColor::Green => Some(5),
            BandColor::Blue => Some(6),
            BandColor::Violet => Some(7),
            BandColor::Grey => Some(8),
            BandColor::White => Some(9),
            BandColor::Gold | BandColor::Silver => None,
        }
    }

    /// Multiplier decade exponent: black ⇒ ×10⁰ … white ⇒ ×10⁹,
    /// gold ⇒ ×10⁻¹, silver ⇒ ×10⁻².
    pub fn multiplier_exp(self) -> i32 {
        match self.digit() {
            // Digit colors multiply by 10^digit.
            Some(d) => d as i32,
            None if self == BandColor::Gold => -1,
            None => -2,
        }
    }

    /// Tolerance in percent, for the eight tolerance colors.
    pub fn tolerance_pct(self) -> Option<f64> {
        match self {
            BandColor::Brown => Some(1.0),
            BandColor::Red => Some(2.0),
            BandColor::Green => Some(0.5),
            BandColor::Blue => Some(0.25),
            BandColor::Violet => Some(0.1),
            BandColor::Grey => Some(0.05),
            BandColor::Gold => Some(5.0),
            BandColor::Silver => Some(10.0),
            _ => None,
        }
    }

    /// The color encoding digit `d` (0–9).
    pub fn from_digit(d: u32) -> BandColor {
        ALL_COLORS[d as usize]
    }

    /// The color for multiplier ×10^`exp`, if one exists (-2 ..= 9).
    pub fn from_multiplier_exp(exp: i32) -> Option<BandColor> {
        match exp {
            -1 => Some(BandColor::Gold),
            -2 => Some(BandColor::Silver),
            0..=9 => Some(BandColor::from_digit(exp as u32)),
            _ => None,
        }
    }

    /// Reverse tolerance lookup. `InvalidTolerance` when no band encodes
    /// the requested percentage.
    pub fn from_tolerance(pct: f64) -> Result<BandColor, ToolError> {
        for color in ALL_COLORS {
            if let Some(t) = color.tolerance_pct() {
                if (t - pct).abs() < 1e-9 {
                    return Ok(color);
                }
            }
        }
        Err(ToolError::InvalidTolerance(pct))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_colors_are_unique_and_complete() {
        let mut seen = [false; 10];
        for color in ALL_COLORS {
            if let Some(d) = color.digit() {
                assert!(!seen[d as usize], "digit {d} mapped twice");
                seen[d as usize] = true;
            }
        }
        assert!(seen.iter().all(|&s| s), "not all digits covered");
    }

    #[test]
    fn test_every_color_is_a_multiplier() {
        for color in ALL_COLORS {
            let exp = color.multiplier_exp();
            assert!((-2..=9).contains(&exp));
            assert_eq!(BandColor::from_multiplier_exp(exp), Some(color));
        }
    }

    #[test]
    fn test_tolerance_round_trip() {
        for pct in [0.05, 0.1, 0.25, 0.5, 1.0, 2.0, 5.0, 10.0] {
            let color = BandColor::from_tolerance(pct).unwrap();
            assert_eq!(color.tolerance_pct(), Some(pct));
        }
        assert!(matches!(
            BandColor::from_tolerance(3.0),
            Err(ToolError::InvalidTolerance(_))
        ));
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!(BandColor::parse("GRAY"), Some(BandColor::Grey));
        assert_eq!(BandColor::parse("purple"), Some(BandColor::Violet));
        assert_eq!(BandColor::parse(" Red "), Some(BandColor::Red));
        assert_eq!(BandColor::parse("pink"), None);
    }
}

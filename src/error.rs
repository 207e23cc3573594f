//! Tool failure values.
//!
//! Every tool returns a structured error rather than panicking; the MCP
//! layer renders these as protocol-level tool errors. The set of kinds is
//! closed: each variant corresponds to exactly one input-validation failure,
//! and none of them is retryable.

use thiserror::Error;

/// Errors a tool handler can return.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ToolError {
    /// A color name does not belong at its band position.
    #[error("'{color}' is not a valid {position} band color. {hint}")]
    InvalidColor {
        color: String,
        position: &'static str,
        hint: &'static str,
    },

    /// A band sequence had a length other than 3, 4 or 5.
    #[error("Expected 3, 4 or 5 color bands, got {0}")]
    InvalidBandCount(usize),

    /// A tolerance percentage has no color band assigned to it.
    #[error("No band color encodes a tolerance of \u{b1}{0}%. Standard tolerances: 0.05, 0.1, 0.25, 0.5, 1, 2, 5, 10")]
    InvalidTolerance(f64),

    /// A physical quantity that must be strictly positive was not.
    #[error("{name} must be greater than zero, got {value}")]
    NonPositiveInput { name: &'static str, value: f64 },

    /// A computed component value is too far outside the preferred-value
    /// grid for a standard part to exist.
    #[error("Computed value {0:.3e} F is more than a decade outside the E12 capacitor range; no standard part is close")]
    SnapOutOfRange(f64),

    /// Board identifier not recognized.
    #[error("Unknown board '{0}'. Supported: ESP32, Arduino UNO, STM32 Blue Pill")]
    UnknownBoard(String),

    /// Pin number not present on the given board.
    #[error("Pin {pin} does not exist on {board}")]
    UnknownPin { board: &'static str, pin: i64 },

    /// Pin is wired to the on-module SPI flash and cannot be used.
    #[error("GPIO{pin} is wired to the on-module SPI flash; using it corrupts flash access and prevents boot")]
    FlashReserved { pin: u8 },
}

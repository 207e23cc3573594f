//! Pin-set conflict analysis.
//!
//! Given the pins a caller intends to use at the same time, produce a
//! three-level report:
//!
//! - ERROR: the plan cannot work (flash-reserved pin, unknown pin, two
//!   pins claiming the same exclusive signal).
//! - WARNING: the plan risks boot failures or peripheral fights
//!   (strapping, SWD, USB, console UART, the ESP32 ADC2⇄WiFi exclusion).
//! - INFO: surprises that are sometimes fine (input-only pins).
//!
//! Flag checks are pin-local; the ADC2⇄WiFi rule and the exclusive-signal
//! rule look at the whole set, so they land in the report's global list.

use std::collections::BTreeMap;

use super::{Board, BoardId, ConflictFlags, Pin};
use crate::error::ToolError;

/// How bad an advisory is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn marker(self) -> &'static str {
        match self {
            Severity::Error => "\u{2717} ERROR",
            Severity::Warning => "\u{26a0} WARNING",
            Severity::Info => "\u{2139} INFO",
        }
    }
}

/// One finding about a pin or about the set as a whole.
#[derive(Debug, Clone)]
pub struct Advisory {
    pub severity: Severity,
    pub message: String,
}

/// Findings for one requested pin number.
#[derive(Debug)]
pub struct PinReview {
    pub number: i64,
    /// `None` when the number does not exist on the board.
    pub pin: Option<&'static Pin>,
    pub advisories: Vec<Advisory>,
}

/// The full conflict report for a pin set.
#[derive(Debug)]
pub struct ConflictReport {
    pub board: &'static Board,
    pub reviews: Vec<PinReview>,
    /// Cross-pin findings (exclusive-signal overlaps, ADC2⇄WiFi).
    pub global: Vec<Advisory>,
    /// Unused, unflagged pins the caller could move to. At most ten,
    /// ascending.
    pub safe_alternatives: Vec<&'static Pin>,
}

impl ConflictReport {
    pub fn count(&self, severity: Severity) -> usize {
        self.reviews
            .iter()
            .flat_map(|r| r.advisories.iter())
            .chain(self.global.iter())
            .filter(|a| a.severity == severity)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.count(Severity::Error) > 0
    }
}

/// Advisories a pin triggers on its own, independent of the rest of the set.
fn pin_advisories(pin: &'static Pin) -> Vec<Advisory> {
    let mut out = Vec::new();
    if pin.flags.contains(ConflictFlags::FLASH_RESERVED) {
        out.push(Advisory {
            severity: Severity::Error,
            message: ToolError::FlashReserved { pin: pin.number }.to_string(),
        });
    }
    if pin.flags.contains(ConflictFlags::STRAPPING) {
        out.push(Advisory {
            severity: Severity::Warning,
            message: format!("Strapping pin. {}", pin.notes),
        });
    }
    if pin.flags.contains(ConflictFlags::SWD) {
        out.push(Advisory {
            severity: Severity::Warning,
            message: format!("Debug port pin. {}", pin.notes),
        });
    }
    if pin.flags.contains(ConflictFlags::USB) {
        out.push(Advisory {
            severity: Severity::Warning,
            message: format!("USB data pin. {}", pin.notes),
        });
    }
    if pin.flags.contains(ConflictFlags::UART0) {
        out.push(Advisory {
            severity: Severity::Warning,
            message: "Shared with the USB-serial console; conflicts whenever serial logging or flashing is in use.".to_string(),
        });
    }
    if pin.flags.contains(ConflictFlags::INPUT_ONLY) {
        out.push(Advisory {
            severity: Severity::Info,
            message: "Input only: this pin has no output driver.".to_string(),
        });
    }
    out
}

/// Analyze a pin set. Unknown pin numbers become ERROR entries rather than
/// failing the whole report, so one typo does not hide the other findings.
pub fn check(board: &'static Board, numbers: &[i64]) -> ConflictReport {
    // De-duplicate while keeping the caller's order.
    let mut requested: Vec<i64> = Vec::new();
    for &n in numbers {
        if !requested.contains(&n) {
            requested.push(n);
        }
    }

    let mut reviews = Vec::with_capacity(requested.len());
    for &number in &requested {
        match board.pin(number) {
            Ok(pin) => reviews.push(PinReview {
                number,
                pin: Some(pin),
                advisories: pin_advisories(pin),
            }),
            Err(err) => reviews.push(PinReview {
                number,
                pin: None,
                advisories: vec![Advisory {
                    severity: Severity::Error,
                    message: err.to_string(),
                }],
            }),
        }
    }

    let mut global = Vec::new();

    // Two selected pins claiming one exclusive signal (e.g. I2C1_SDA on
    // both PB7 and its remap PB9).
    let mut claims: BTreeMap<&'static str, Vec<&'static str>> = BTreeMap::new();
    for review in &reviews {
        if let Some(pin) = review.pin {
            for alt in pin.alts {
                claims.entry(alt.name).or_default().push(pin.label);
            }
        }
    }
    for (signal, labels) in claims {
        if labels.len() > 1 {
            global.push(Advisory {
                severity: Severity::Error,
                message: format!(
                    "{} is claimed by {}; only one pin can carry an exclusive signal",
                    signal,
                    labels.join(" and ")
                ),
            });
        }
    }

    // Board-global rule: any ADC2 channel in the set on an ESP32 means WiFi
    // will silently break those reads.
    if board.id == BoardId::Esp32 {
        let adc2: Vec<&str> = reviews
            .iter()
            .filter_map(|r| r.pin)
            .filter(|p| p.flags.contains(ConflictFlags::ADC2_WIFI))
            .map(|p| p.label)
            .collect();
        if !adc2.is_empty() {
            global.push(Advisory {
                severity: Severity::Warning,
                message: format!(
                    "ADC2 shares hardware with the WiFi radio: analog reads on {} fail silently while WiFi is active. Use ADC1 (GPIO32-39) for analog inputs on a WiFi project.",
                    adc2.join(", ")
                ),
            });
        }
    }

    // Unused pins with a clean bill of health, as suggestions.
    let safe_alternatives: Vec<&'static Pin> = board
        .pins
        .iter()
        .filter(|p| p.flags.is_empty() && !requested.contains(&i64::from(p.number)))
        .take(10)
        .collect();

    ConflictReport {
        board,
        reviews,
        global,
        safe_alternatives,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gpio::Board;

    fn esp32() -> &'static Board {
        Board::lookup("esp32").unwrap()
    }

    #[test]
    fn test_every_flash_pin_is_an_error() {
        for pin in 6..=11 {
            let report = check(esp32(), &[pin]);
            assert!(report.has_errors(), "GPIO{pin} should be an error");
            assert_eq!(report.reviews[0].advisories[0].severity, Severity::Error);
        }
    }

    #[test]
    fn test_unknown_pin_is_an_error_entry() {
        let report = check(esp32(), &[20]);
        assert!(report.has_errors());
        assert!(report.reviews[0].pin.is_none());
    }

    #[test]
    fn test_mixed_set_scenario() {
        // GPIO6 is flash (error); 0, 2, 12 are strapping (warnings); all
        // three strapping pins are also ADC2, so the global WiFi warning
        // must appear.
        let report = check(esp32(), &[0, 2, 6, 12]);
        assert!(report.has_errors());
        assert!(report.count(Severity::Warning) >= 4);
        let strapping_warned = report
            .reviews
            .iter()
            .filter(|r| r.advisories.iter().any(|a| a.message.contains("Strapping")))
            .count();
        assert_eq!(strapping_warned, 3);
        assert!(report
            .global
            .iter()
            .any(|a| a.severity == Severity::Warning && a.message.contains("ADC2")));
    }

    #[test]
    fn test_adc2_wifi_rule_fires_per_channel() {
        for pin in [0, 2, 4, 12, 13, 14, 15, 25, 26, 27] {
            let report = check(esp32(), &[pin]);
            assert!(
                report.global.iter().any(|a| a.message.contains("ADC2")),
                "GPIO{pin} should trigger the WiFi warning"
            );
        }
    }

    #[test]
    fn test_adc1_pins_do_not_trigger_wifi_rule() {
        for pin in [32, 33, 34, 35, 36, 39] {
            let report = check(esp32(), &[pin]);
            assert!(
                !report.global.iter().any(|a| a.message.contains("ADC2")),
                "GPIO{pin} must not trigger the WiFi warning"
            );
        }
    }

    #[test]
    fn test_input_only_is_info() {
        let report = check(esp32(), &[34]);
        assert!(!report.has_errors());
        assert_eq!(report.reviews[0].advisories[0].severity, Severity::Info);
    }

    #[test]
    fn test_uno_serial_pins_warn() {
        let uno = Board::lookup("uno").unwrap();
        let report = check(uno, &[0, 1]);
        assert_eq!(report.count(Severity::Warning), 2);
        assert!(!report.has_errors());
    }

    #[test]
    fn test_bluepill_swd_and_usb_warn() {
        let bp = Board::lookup("bluepill").unwrap();
        let report = check(bp, &[13, 14, 11, 12]);
        assert_eq!(report.count(Severity::Warning), 4);
    }

    #[test]
    fn test_exclusive_signal_overlap() {
        // PB7 (pin 23) and PB9 (pin 25) both carry I2C1_SDA.
        let bp = Board::lookup("bluepill").unwrap();
        let report = check(bp, &[23, 25]);
        assert!(report.has_errors());
        assert!(report
            .global
            .iter()
            .any(|a| a.severity == Severity::Error && a.message.contains("I2C1_SDA")));
    }

    #[test]
    fn test_clean_set_is_clean() {
        let report = check(esp32(), &[21, 22, 23]);
        assert!(!report.has_errors());
        assert_eq!(report.count(Severity::Warning), 0);
        assert_eq!(report.count(Severity::Info), 0);
    }

    #[test]
    fn test_safe_alternatives_are_capped_and_clean() {
        let report = check(esp32(), &[21]);
        assert!(report.safe_alternatives.len() <= 10);
        for pin in &report.safe_alternatives {
            assert!(pin.flags.is_empty());
            assert_ne!(pin.number, 21);
        }
        for pair in report.safe_alternatives.windows(2) {
            assert!(pair[0].number < pair[1].number);
        }
    }

    #[test]
    fn test_duplicate_requests_collapse() {
        let report = check(esp32(), &[12, 12, 12]);
        assert_eq!(report.reviews.len(), 1);
        // A pin listed twice is not an exclusive-signal overlap.
        assert!(report.global.iter().all(|a| a.severity != Severity::Error));
    }
}

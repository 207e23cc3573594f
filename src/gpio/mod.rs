//! GPIO pin capability database and query engine.
//!
//! Three boards are described: ESP32 DevKitC, Arduino UNO R3 and the
//! STM32F103C8 "Blue Pill". Each board is a static table of pin records
//! compiled into the binary; the engine is a read-only view over those
//! tables, so queries never allocate anything but their result vectors and
//! need no synchronization.
//!
//! Pin numbers use each board's own addressing scheme: raw GPIO numbers on
//! ESP32, Arduino digital/analog numbering on the UNO (A0 = 14), and a flat
//! 0–34 index on the Blue Pill (PAx = x, PBx = 16 + x, PC13–15 = 32–34).

pub mod bluepill;
pub mod conflict;
pub mod diagram;
pub mod esp32;
pub mod uno;

use bitflags::bitflags;
use std::collections::BTreeMap;

use crate::error::ToolError;

bitflags! {
    /// What a pin can electrically do.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Capability: u16 {
        const DIGITAL_IN  = 1 << 0;
        const DIGITAL_OUT = 1 << 1;
        const PWM         = 1 << 2;
        const ADC         = 1 << 3;
        const DAC         = 1 << 4;
        const TOUCH       = 1 << 5;
        const INPUT_ONLY  = 1 << 6;
    }
}

bitflags! {
    /// Board-level hazards attached to a pin.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ConflictFlags: u8 {
        /// Sampled at reset to choose boot behavior (ESP32 0/2/12/15,
        /// Blue Pill BOOT1).
        const STRAPPING      = 1 << 0;
        /// Wired to the on-module SPI flash; unusable.
        const FLASH_RESERVED = 1 << 1;
        /// No output driver.
        const INPUT_ONLY     = 1 << 2;
        /// Serial Wire Debug interface.
        const SWD            = 1 << 3;
        /// USB D+/D- pair.
        const USB            = 1 << 4;
        /// Shared with the USB-serial console UART.
        const UART0          = 1 << 5;
        /// ADC2 unit, unavailable while WiFi is active (ESP32).
        const ADC2_WIFI      = 1 << 6;
    }
}

/// Peripheral family of an alternate function, used for discovery queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfGroup {
    I2c,
    Spi,
    Uart,
    Adc,
    Dac,
    Touch,
    Timer,
    Swd,
    Usb,
}

/// One alternate function a pin can be muxed to.
#[derive(Debug, Clone, Copy)]
pub struct AltFunction {
    /// Signal name as the datasheet spells it, e.g. "I2C0_SDA", "VSPI_MOSI",
    /// "ADC1_CH4". Two pins carrying the same name (remaps) cannot both
    /// host the signal at once.
    pub name: &'static str,
    pub group: AfGroup,
    /// Bus or unit index within the group: SPI bus, I²C bus, ADC unit,
    /// UART number, timer number.
    pub bus: u8,
}

/// Shorthand for the board tables.
pub const fn af(name: &'static str, group: AfGroup, bus: u8) -> AltFunction {
    AltFunction { name, group, bus }
}

/// One electrical pin.
#[derive(Debug)]
pub struct Pin {
    /// Number in the board's addressing scheme.
    pub number: u8,
    /// Silkscreen-ish label, e.g. "GPIO5", "D13 (SCK)", "PA4".
    pub label: &'static str,
    pub caps: Capability,
    pub alts: &'static [AltFunction],
    pub flags: ConflictFlags,
    pub notes: &'static str,
}

impl Pin {
    /// Terse flag markers for diagram rows and pin listings, e.g.
    /// "\u{26a0}strap \u{26a0}adc2/wifi".
    pub fn flag_markers(&self) -> String {
        let mut parts = Vec::new();
        if self.flags.contains(ConflictFlags::FLASH_RESERVED) {
            parts.push("\u{26d4}flash");
        }
        if self.flags.contains(ConflictFlags::STRAPPING) {
            parts.push("\u{26a0}strap");
        }
        if self.flags.contains(ConflictFlags::INPUT_ONLY) {
            parts.push("in-only");
        }
        if self.flags.contains(ConflictFlags::SWD) {
            parts.push("\u{26a0}swd");
        }
        if self.flags.contains(ConflictFlags::USB) {
            parts.push("\u{26a0}usb");
        }
        if self.flags.contains(ConflictFlags::UART0) {
            parts.push("\u{26a0}uart0");
        }
        if self.flags.contains(ConflictFlags::ADC2_WIFI) {
            parts.push("adc2/wifi");
        }
        parts.join(" ")
    }
}

/// Board identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardId {
    Esp32,
    ArduinoUno,
    Stm32BluePill,
}

/// A supported board: identity plus its pin table.
#[derive(Debug)]
pub struct Board {
    pub id: BoardId,
    /// Human name, e.g. "ESP32 DevKitC".
    pub name: &'static str,
    /// Chip marking for diagram headers.
    pub chip: &'static str,
    /// Pin records, sorted by pin number ascending.
    pub pins: &'static [Pin],
}

/// The three boards, in a fixed order.
pub static BOARDS: [&Board; 3] = [&esp32::BOARD, &uno::BOARD, &bluepill::BOARD];

impl Board {
    /// Resolve a board from a user-supplied identifier. Matching is
    /// case-insensitive and ignores spaces, hyphens and underscores, so
    /// "Arduino UNO", "arduinouno" and "uno" all resolve the same way.
    pub fn lookup(ident: &str) -> Result<&'static Board, ToolError> {
        let key: String = ident
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "esp32" | "esp32devkitc" | "esp32devkit" => Ok(&esp32::BOARD),
            "uno" | "arduino" | "arduinouno" | "arduinounor3" => Ok(&uno::BOARD),
            "stm32" | "bluepill" | "stm32bluepill" | "stm32f103" | "stm32f103c8"
            | "stm32f103c8t6" => Ok(&bluepill::BOARD),
            _ => Err(ToolError::UnknownBoard(ident.to_string())),
        }
    }

    /// Look up one pin by number.
    pub fn pin(&'static self, number: i64) -> Result<&'static Pin, ToolError> {
        self.pins
            .iter()
            .find(|p| i64::from(p.number) == number)
            .ok_or(ToolError::UnknownPin {
                board: self.name,
                pin: number,
            })
    }

    /// Pins carrying a capability, in ascending pin order (the tables are
    /// stored sorted, which the tests enforce).
    pub fn pins_with_capability(&'static self, cap: Capability) -> Vec<&'static Pin> {
        self.pins.iter().filter(|p| p.caps.contains(cap)).collect()
    }

    /// Alternate functions of a peripheral family, grouped by bus index.
    /// Within each bus, entries stay in ascending pin order.
    pub fn bus_functions(
        &'static self,
        group: AfGroup,
    ) -> BTreeMap<u8, Vec<(&'static Pin, &'static AltFunction)>> {
        let mut buses: BTreeMap<u8, Vec<(&Pin, &AltFunction)>> = BTreeMap::new();
        for pin in self.pins {
            for alt in pin.alts {
                if alt.group == group {
                    buses.entry(alt.bus).or_default().push((pin, alt));
                }
            }
        }
        buses
    }

    /// Display name for a bus index, e.g. ESP32 SPI bus 3 is "VSPI".
    pub fn bus_label(&self, group: AfGroup, bus: u8) -> String {
        match (self.id, group) {
            (BoardId::Esp32, AfGroup::Spi) if bus == 2 => "HSPI (SPI2)".to_string(),
            (BoardId::Esp32, AfGroup::Spi) if bus == 3 => "VSPI (SPI3)".to_string(),
            (BoardId::Stm32BluePill, AfGroup::Uart) => format!("USART{bus}"),
            (_, AfGroup::Spi) => format!("SPI{bus}"),
            (_, AfGroup::I2c) => format!("I2C{bus}"),
            (_, AfGroup::Adc) => format!("ADC{bus}"),
            (_, AfGroup::Uart) => format!("UART{bus}"),
            (_, AfGroup::Timer) => format!("TIM{bus}"),
            _ => format!("{group:?}{bus}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_aliases() {
        assert_eq!(Board::lookup("ESP32").unwrap().id, BoardId::Esp32);
        assert_eq!(Board::lookup("Arduino UNO").unwrap().id, BoardId::ArduinoUno);
        assert_eq!(Board::lookup("uno").unwrap().id, BoardId::ArduinoUno);
        assert_eq!(
            Board::lookup("Blue Pill").unwrap().id,
            BoardId::Stm32BluePill
        );
        assert_eq!(Board::lookup("stm32").unwrap().id, BoardId::Stm32BluePill);
        assert!(matches!(
            Board::lookup("PDP-11"),
            Err(ToolError::UnknownBoard(_))
        ));
    }

    #[test]
    fn test_pin_numbers_unique_and_sorted() {
        for board in BOARDS {
            for pair in board.pins.windows(2) {
                assert!(
                    pair[0].number < pair[1].number,
                    "{}: pins out of order at {}",
                    board.name,
                    pair[1].number
                );
            }
        }
    }

    #[test]
    fn test_every_pin_has_a_capability() {
        for board in BOARDS {
            for pin in board.pins {
                assert!(
                    !pin.caps.is_empty(),
                    "{} {} has no capabilities",
                    board.name,
                    pin.label
                );
            }
        }
    }

    #[test]
    fn test_input_only_pins_cannot_output() {
        for board in BOARDS {
            for pin in board.pins {
                if pin.caps.contains(Capability::INPUT_ONLY) {
                    assert!(!pin.caps.contains(Capability::DIGITAL_OUT));
                    assert!(pin.flags.contains(ConflictFlags::INPUT_ONLY));
                }
            }
        }
    }

    #[test]
    fn test_every_conflict_flag_is_used_somewhere() {
        let mut seen = ConflictFlags::empty();
        for board in BOARDS {
            for pin in board.pins {
                seen |= pin.flags;
            }
        }
        assert_eq!(seen, ConflictFlags::all(), "unused conflict flag defined");
    }

    #[test]
    fn test_unknown_pin_error() {
        let board = Board::lookup("esp32").unwrap();
        assert!(matches!(
            board.pin(99),
            Err(ToolError::UnknownPin { pin: 99, .. })
        ));
    }

    #[test]
    fn test_capability_discovery_is_ascending() {
        for board in BOARDS {
            for cap in [Capability::PWM, Capability::ADC] {
                let pins = board.pins_with_capability(cap);
                for pair in pins.windows(2) {
                    assert!(pair[0].number < pair[1].number);
                }
            }
        }
    }

    #[test]
    fn test_esp32_bus_grouping() {
        let board = Board::lookup("esp32").unwrap();
        let spi = board.bus_functions(AfGroup::Spi);
        // HSPI (bus 2) and VSPI (bus 3).
        assert_eq!(spi.keys().copied().collect::<Vec<_>>(), vec![2, 3]);
        let i2c = board.bus_functions(AfGroup::I2c);
        assert_eq!(i2c[&0].len(), 2);
    }
}

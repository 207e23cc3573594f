//! Arduino UNO R3 (ATmega328P) pin table.
//!
//! Numbering follows the Arduino scheme: digital 0–13, then A0–A5 as
//! 14–19. D0/D1 are shared with the ATmega16U2 USB-serial bridge, so any
//! sketch that opens `Serial` fights with whatever else is wired there.

use super::AfGroup::{Adc, I2c, Spi, Uart};
use super::{af, Board, BoardId, Capability as C, ConflictFlags as F, Pin};

const IO: C = C::DIGITAL_IN.union(C::DIGITAL_OUT);
const IO_PWM: C = IO.union(C::PWM);
const IO_ADC: C = IO.union(C::ADC);

pub static BOARD: Board = Board {
    id: BoardId::ArduinoUno,
    name: "Arduino UNO R3",
    chip: "ATmega328P",
    pins: &PINS,
};

static PINS: [Pin; 20] = [
    Pin {
        number: 0,
        label: "D0 (RX)",
        caps: IO,
        alts: &[af("UART0_RX", Uart, 0)],
        flags: F::UART0,
        notes: "Hard-wired to the USB-serial bridge; avoid while Serial is in use.",
    },
    Pin {
        number: 1,
        label: "D1 (TX)",
        caps: IO,
        alts: &[af("UART0_TX", Uart, 0)],
        flags: F::UART0,
        notes: "Hard-wired to the USB-serial bridge; avoid while Serial is in use.",
    },
    Pin {
        number: 2,
        label: "D2",
        caps: IO,
        alts: &[],
        flags: F::empty(),
        notes: "External interrupt INT0.",
    },
    Pin {
        number: 3,
        label: "D3",
        caps: IO_PWM,
        alts: &[],
        flags: F::empty(),
        notes: "Timer2 PWM (OC2B); external interrupt INT1.",
    },
    Pin {
        number: 4,
        label: "D4",
        caps: IO,
        alts: &[],
        flags: F::empty(),
        notes: "",
    },
    Pin {
        number: 5,
        label: "D5",
        caps: IO_PWM,
        alts: &[],
        flags: F::empty(),
        notes: "Timer0 PWM (OC0B); sharing Timer0 also shifts millis().",
    },
    Pin {
        number: 6,
        label: "D6",
        caps: IO_PWM,
        alts: &[],
        flags: F::empty(),
        notes: "Timer0 PWM (OC0A).",
    },
    Pin {
        number: 7,
        label: "D7",
        caps: IO,
        alts: &[],
        flags: F::empty(),
        notes: "",
    },
    Pin {
        number: 8,
        label: "D8",
        caps: IO,
        alts: &[],
        flags: F::empty(),
        notes: "Input capture ICP1.",
    },
    Pin {
        number: 9,
        label: "D9",
        caps: IO_PWM,
        alts: &[],
        flags: F::empty(),
        notes: "Timer1 PWM (OC1A), 16-bit.",
    },
    Pin {
        number: 10,
        label: "D10 (SS)",
        caps: IO_PWM,
        alts: &[af("SPI0_CS", Spi, 0)],
        flags: F::empty(),
        notes: "SPI slave select; must stay an output for SPI master mode to work.",
    },
    Pin {
        number: 11,
        label: "D11 (MOSI)",
        caps: IO_PWM,
        alts: &[af("SPI0_MOSI", Spi, 0)],
        flags: F::empty(),
        notes: "",
    },
    Pin {
        number: 12,
        label: "D12 (MISO)",
        caps: IO,
        alts: &[af("SPI0_MISO", Spi, 0)],
        flags: F::empty(),
        notes: "",
    },
    Pin {
        number: 13,
        label: "D13 (SCK)",
        caps: IO,
        alts: &[af("SPI0_SCK", Spi, 0)],
        flags: F::empty(),
        notes: "On-board LED. The LED's series resistor loads the pin as an input.",
    },
    Pin {
        number: 14,
        label: "A0",
        caps: IO_ADC,
        alts: &[af("ADC0_CH0", Adc, 0)],
        flags: F::empty(),
        notes: "",
    },
    Pin {
        number: 15,
        label: "A1",
        caps: IO_ADC,
        alts: &[af("ADC0_CH1", Adc, 0)],
        flags: F::empty(),
        notes: "",
    },
    Pin {
        number: 16,
        label: "A2",
        caps: IO_ADC,
        alts: &[af("ADC0_CH2", Adc, 0)],
        flags: F::empty(),
        notes: "",
    },
    Pin {
        number: 17,
        label: "A3",
        caps: IO_ADC,
        alts: &[af("ADC0_CH3", Adc, 0)],
        flags: F::empty(),
        notes: "",
    },
    Pin {
        number: 18,
        label: "A4 (SDA)",
        caps: IO_ADC,
        alts: &[af("ADC0_CH4", Adc, 0), af("I2C0_SDA", I2c, 0)],
        flags: F::empty(),
        notes: "Wire SDA; I2C and analogRead cannot share this pin.",
    },
    Pin {
        number: 19,
        label: "A5 (SCL)",
        caps: IO_ADC,
        alts: &[af("ADC0_CH5", Adc, 0), af("I2C0_SCL", I2c, 0)],
        flags: F::empty(),
        notes: "Wire SCL; I2C and analogRead cannot share this pin.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pwm_pins_match_silkscreen() {
        // The UNO marks PWM pins with a tilde: 3, 5, 6, 9, 10, 11.
        let pwm: Vec<u8> = PINS
            .iter()
            .filter(|p| p.caps.contains(C::PWM))
            .map(|p| p.number)
            .collect();
        assert_eq!(pwm, vec![3, 5, 6, 9, 10, 11]);
    }

    #[test]
    fn test_analog_pins_are_14_through_19() {
        let adc: Vec<u8> = PINS
            .iter()
            .filter(|p| p.caps.contains(C::ADC))
            .map(|p| p.number)
            .collect();
        assert_eq!(adc, vec![14, 15, 16, 17, 18, 19]);
    }

    #[test]
    fn test_uart0_pins() {
        let uart: Vec<u8> = PINS
            .iter()
            .filter(|p| p.flags.contains(F::UART0))
            .map(|p| p.number)
            .collect();
        assert_eq!(uart, vec![0, 1]);
    }

    #[test]
    fn test_spi_bus_is_complete() {
        let roles: Vec<&str> = PINS
            .iter()
            .flat_map(|p| p.alts.iter())
            .filter(|a| a.group == Spi)
            .map(|a| a.name)
            .collect();
        assert_eq!(roles, vec!["SPI0_CS", "SPI0_MOSI", "SPI0_MISO", "SPI0_SCK"]);
    }
}

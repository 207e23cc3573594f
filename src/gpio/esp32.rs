//! ESP32 DevKitC (WROOM-32) pin table.
//!
//! Derived from the ESP32 series datasheet and the DevKitC schematic.
//! GPIO6–11 are bonded to the on-module SPI flash and are listed only so
//! the conflict checker can refuse them. GPIO34–39 have no output drivers.
//! ADC2 channels share hardware with the WiFi radio; the radio driver owns
//! them whenever WiFi is up, so only ADC1 (GPIO32–39) is WiFi-safe.

use super::AfGroup::{Adc, Dac, I2c, Spi, Touch, Uart};
use super::{af, Board, BoardId, Capability as C, ConflictFlags as F, Pin};

const IO: C = C::DIGITAL_IN.union(C::DIGITAL_OUT);
const IO_PWM: C = IO.union(C::PWM);
const IO_PWM_ADC_TOUCH: C = IO_PWM.union(C::ADC).union(C::TOUCH);
const IO_PWM_ADC_DAC: C = IO_PWM.union(C::ADC).union(C::DAC);
const IN_ADC: C = C::DIGITAL_IN.union(C::ADC).union(C::INPUT_ONLY);

const STRAP_ADC2: F = F::STRAPPING.union(F::ADC2_WIFI);

pub static BOARD: Board = Board {
    id: BoardId::Esp32,
    name: "ESP32 DevKitC",
    chip: "ESP32-WROOM-32",
    pins: &PINS,
};

static PINS: [Pin; 32] = [
    Pin {
        number: 0,
        label: "GPIO0",
        caps: IO_PWM_ADC_TOUCH,
        alts: &[af("ADC2_CH1", Adc, 2), af("TOUCH1", Touch, 0)],
        flags: STRAP_ADC2,
        notes: "Boot-mode strapping pin: must read high at reset for a normal boot, low enters the serial bootloader. Usually has an on-board pull-up and the BOOT button.",
    },
    Pin {
        number: 1,
        label: "GPIO1 (TX0)",
        caps: IO_PWM,
        alts: &[af("UART0_TX", Uart, 0)],
        flags: F::UART0,
        notes: "Console UART transmit. Repurposing it breaks flashing and boot logs.",
    },
    Pin {
        number: 2,
        label: "GPIO2",
        caps: IO_PWM_ADC_TOUCH,
        alts: &[af("ADC2_CH2", Adc, 2), af("TOUCH2", Touch, 0)],
        flags: STRAP_ADC2,
        notes: "Boot-mode strapping pin: must be low or floating to enter the serial bootloader. Drives the on-board LED on many DevKit clones.",
    },
    Pin {
        number: 3,
        label: "GPIO3 (RX0)",
        caps: IO_PWM,
        alts: &[af("UART0_RX", Uart, 0)],
        flags: F::UART0,
        notes: "Console UART receive.",
    },
    Pin {
        number: 4,
        label: "GPIO4",
        caps: IO_PWM_ADC_TOUCH,
        alts: &[af("ADC2_CH0", Adc, 2), af("TOUCH0", Touch, 0)],
        flags: F::ADC2_WIFI,
        notes: "",
    },
    Pin {
        number: 5,
        label: "GPIO5",
        caps: IO_PWM,
        alts: &[af("VSPI_CS", Spi, 3)],
        flags: F::empty(),
        notes: "Emits a short PWM burst at boot; also times SDIO slave mode at reset.",
    },
    Pin {
        number: 6,
        label: "GPIO6 (FLASH CLK)",
        caps: IO,
        alts: &[],
        flags: F::FLASH_RESERVED,
        notes: "Bonded to the on-module SPI flash clock.",
    },
    Pin {
        number: 7,
        label: "GPIO7 (FLASH D0)",
        caps: IO,
        alts: &[],
        flags: F::FLASH_RESERVED,
        notes: "Bonded to the on-module SPI flash data 0.",
    },
    Pin {
        number: 8,
        label: "GPIO8 (FLASH D1)",
        caps: IO,
        alts: &[],
        flags: F::FLASH_RESERVED,
        notes: "Bonded to the on-module SPI flash data 1.",
    },
    Pin {
        number: 9,
        label: "GPIO9 (FLASH D2)",
        caps: IO,
        alts: &[],
        flags: F::FLASH_RESERVED,
        notes: "Bonded to the on-module SPI flash data 2.",
    },
    Pin {
        number: 10,
        label: "GPIO10 (FLASH D3)",
        caps: IO,
        alts: &[],
        flags: F::FLASH_RESERVED,
        notes: "Bonded to the on-module SPI flash data 3.",
    },
    Pin {
        number: 11,
        label: "GPIO11 (FLASH CMD)",
        caps: IO,
        alts: &[],
        flags: F::FLASH_RESERVED,
        notes: "Bonded to the on-module SPI flash command line.",
    },
    Pin {
        number: 12,
        label: "GPIO12",
        caps: IO_PWM_ADC_TOUCH,
        alts: &[
            af("ADC2_CH5", Adc, 2),
            af("TOUCH5", Touch, 0),
            af("HSPI_MISO", Spi, 2),
        ],
        flags: STRAP_ADC2,
        notes: "MTDI strapping pin: selects the flash voltage at reset. A pull-up here stops 3.3 V modules from booting.",
    },
    Pin {
        number: 13,
        label: "GPIO13",
        caps: IO_PWM_ADC_TOUCH,
        alts: &[
            af("ADC2_CH4", Adc, 2),
            af("TOUCH4", Touch, 0),
            af("HSPI_MOSI", Spi, 2),
        ],
        flags: F::ADC2_WIFI,
        notes: "",
    },
    Pin {
        number: 14,
        label: "GPIO14",
        caps: IO_PWM_ADC_TOUCH,
        alts: &[
            af("ADC2_CH6", Adc, 2),
            af("TOUCH6", Touch, 0),
            af("HSPI_SCK", Spi, 2),
        ],
        flags: F::ADC2_WIFI,
        notes: "Emits a short PWM burst at boot.",
    },
    Pin {
        number: 15,
        label: "GPIO15",
        caps: IO_PWM_ADC_TOUCH,
        alts: &[
            af("ADC2_CH3", Adc, 2),
            af("TOUCH3", Touch, 0),
            af("HSPI_CS", Spi, 2),
        ],
        flags: STRAP_ADC2,
        notes: "MTDO strapping pin: pulling it low at reset silences the boot ROM log.",
    },
    Pin {
        number: 16,
        label: "GPIO16",
        caps: IO_PWM,
        alts: &[af("UART2_RX", Uart, 2)],
        flags: F::empty(),
        notes: "Unavailable on WROVER modules (taken by PSRAM).",
    },
    Pin {
        number: 17,
        label: "GPIO17",
        caps: IO_PWM,
        alts: &[af("UART2_TX", Uart, 2)],
        flags: F::empty(),
        notes: "Unavailable on WROVER modules (taken by PSRAM).",
    },
    Pin {
        number: 18,
        label: "GPIO18",
        caps: IO_PWM,
        alts: &[af("VSPI_SCK", Spi, 3)],
        flags: F::empty(),
        notes: "",
    },
    Pin {
        number: 19,
        label: "GPIO19",
        caps: IO_PWM,
        alts: &[af("VSPI_MISO", Spi, 3)],
        flags: F::empty(),
        notes: "",
    },
    Pin {
        number: 21,
        label: "GPIO21",
        caps: IO_PWM,
        alts: &[af("I2C0_SDA", I2c, 0)],
        flags: F::empty(),
        notes: "Default Wire SDA.",
    },
    Pin {
        number: 22,
        label: "GPIO22",
        caps: IO_PWM,
        alts: &[af("I2C0_SCL", I2c, 0)],
        flags: F::empty(),
        notes: "Default Wire SCL.",
    },
    Pin {
        number: 23,
        label: "GPIO23",
        caps: IO_PWM,
        alts: &[af("VSPI_MOSI", Spi, 3)],
        flags: F::empty(),
        notes: "",
    },
    Pin {
        number: 25,
        label: "GPIO25",
        caps: IO_PWM_ADC_DAC,
        alts: &[af("ADC2_CH8", Adc, 2), af("DAC1", Dac, 0)],
        flags: F::ADC2_WIFI,
        notes: "8-bit DAC channel 1.",
    },
    Pin {
        number: 26,
        label: "GPIO26",
        caps: IO_PWM_ADC_DAC,
        alts: &[af("ADC2_CH9", Adc, 2), af("DAC2", Dac, 0)],
        flags: F::ADC2_WIFI,
        notes: "8-bit DAC channel 2.",
    },
    Pin {
        number: 27,
        label: "GPIO27",
        caps: IO_PWM_ADC_TOUCH,
        alts: &[af("ADC2_CH7", Adc, 2), af("TOUCH7", Touch, 0)],
        flags: F::ADC2_WIFI,
        notes: "",
    },
    Pin {
        number: 32,
        label: "GPIO32",
        caps: IO_PWM_ADC_TOUCH,
        alts: &[af("ADC1_CH4", Adc, 1), af("TOUCH9", Touch, 0)],
        flags: F::empty(),
        notes: "Shares the XTAL32 pad; fine as GPIO when no 32 kHz crystal is fitted.",
    },
    Pin {
        number: 33,
        label: "GPIO33",
        caps: IO_PWM_ADC_TOUCH,
        alts: &[af("ADC1_CH5", Adc, 1), af("TOUCH8", Touch, 0)],
        flags: F::empty(),
        notes: "Shares the XTAL32 pad; fine as GPIO when no 32 kHz crystal is fitted.",
    },
    Pin {
        number: 34,
        label: "GPIO34",
        caps: IN_ADC,
        alts: &[af("ADC1_CH6", Adc, 1)],
        flags: F::INPUT_ONLY,
        notes: "Input only: no output driver and no internal pull resistors.",
    },
    Pin {
        number: 35,
        label: "GPIO35",
        caps: IN_ADC,
        alts: &[af("ADC1_CH7", Adc, 1)],
        flags: F::INPUT_ONLY,
        notes: "Input only: no output driver and no internal pull resistors.",
    },
    Pin {
        number: 36,
        label: "GPIO36 (VP)",
        caps: IN_ADC,
        alts: &[af("ADC1_CH0", Adc, 1)],
        flags: F::INPUT_ONLY,
        notes: "Sensor VP. Input only.",
    },
    Pin {
        number: 39,
        label: "GPIO39 (VN)",
        caps: IN_ADC,
        alts: &[af("ADC1_CH3", Adc, 1)],
        flags: F::INPUT_ONLY,
        notes: "Sensor VN. Input only.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_pins_are_6_through_11() {
        let flash: Vec<u8> = PINS
            .iter()
            .filter(|p| p.flags.contains(F::FLASH_RESERVED))
            .map(|p| p.number)
            .collect();
        assert_eq!(flash, vec![6, 7, 8, 9, 10, 11]);
    }

    #[test]
    fn test_strapping_pins_match_datasheet() {
        let strap: Vec<u8> = PINS
            .iter()
            .filter(|p| p.flags.contains(F::STRAPPING))
            .map(|p| p.number)
            .collect();
        assert_eq!(strap, vec![0, 2, 12, 15]);
    }

    #[test]
    fn test_adc1_channels_are_wifi_safe() {
        for pin in &PINS {
            let on_adc1 = pin.alts.iter().any(|a| a.group == Adc && a.bus == 1);
            let on_adc2 = pin.alts.iter().any(|a| a.group == Adc && a.bus == 2);
            assert!(!(on_adc1 && on_adc2), "GPIO{} on both ADC units", pin.number);
            assert_eq!(
                pin.flags.contains(F::ADC2_WIFI),
                on_adc2,
                "GPIO{} ADC2 flag out of sync with its channels",
                pin.number
            );
        }
    }

    #[test]
    fn test_input_only_set() {
        let ro: Vec<u8> = PINS
            .iter()
            .filter(|p| p.caps.contains(C::INPUT_ONLY))
            .map(|p| p.number)
            .collect();
        assert_eq!(ro, vec![34, 35, 36, 39]);
    }

    #[test]
    fn test_adc_channel_names_are_unique() {
        let mut names: Vec<&str> = PINS
            .iter()
            .flat_map(|p| p.alts.iter())
            .filter(|a| a.group == Adc)
            .map(|a| a.name)
            .collect();
        let before = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), before);
    }
}

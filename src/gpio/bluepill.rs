//! STM32F103C8T6 "Blue Pill" pin table.
//!
//! Covers the GPIO actually broken out on the board: PA0–PA15, PB0–PB15
//! and PC13–PC15, numbered flat as PAx = x, PBx = 16 + x, PC13–15 = 32–34.
//! Power, reset and BOOT0 are not GPIO and are not listed.
//!
//! PA13/PA14 carry SWD; losing them means losing the debugger, so they are
//! flagged rather than offered as free pins. I2C1 can be remapped from
//! PB6/PB7 to PB8/PB9 — the signal names repeat on purpose, the conflict
//! checker treats a doubled signal name as an exclusive-function overlap.

use super::AfGroup::{Adc, I2c, Spi, Swd, Timer, Uart, Usb};
use super::{af, Board, BoardId, Capability as C, ConflictFlags as F, Pin};

const IO: C = C::DIGITAL_IN.union(C::DIGITAL_OUT);
const IO_PWM: C = IO.union(C::PWM);
const IO_ADC: C = IO.union(C::ADC);
const IO_PWM_ADC: C = IO_PWM.union(C::ADC);

pub static BOARD: Board = Board {
    id: BoardId::Stm32BluePill,
    name: "STM32F103C8 Blue Pill",
    chip: "STM32F103C8T6",
    pins: &PINS,
};

static PINS: [Pin; 35] = [
    Pin {
        number: 0,
        label: "PA0",
        caps: IO_PWM_ADC,
        alts: &[af("ADC1_CH0", Adc, 1), af("TIM2_CH1", Timer, 2)],
        flags: F::empty(),
        notes: "Wake-up pin (WKUP).",
    },
    Pin {
        number: 1,
        label: "PA1",
        caps: IO_PWM_ADC,
        alts: &[af("ADC1_CH1", Adc, 1), af("TIM2_CH2", Timer, 2)],
        flags: F::empty(),
        notes: "",
    },
    Pin {
        number: 2,
        label: "PA2",
        caps: IO_PWM_ADC,
        alts: &[
            af("ADC1_CH2", Adc, 1),
            af("TIM2_CH3", Timer, 2),
            af("USART2_TX", Uart, 2),
        ],
        flags: F::empty(),
        notes: "",
    },
    Pin {
        number: 3,
        label: "PA3",
        caps: IO_PWM_ADC,
        alts: &[
            af("ADC1_CH3", Adc, 1),
            af("TIM2_CH4", Timer, 2),
            af("USART2_RX", Uart, 2),
        ],
        flags: F::empty(),
        notes: "",
    },
    Pin {
        number: 4,
        label: "PA4",
        caps: IO_ADC,
        alts: &[af("ADC1_CH4", Adc, 1), af("SPI1_CS", Spi, 1)],
        flags: F::empty(),
        notes: "",
    },
    Pin {
        number: 5,
        label: "PA5",
        caps: IO_ADC,
        alts: &[af("ADC1_CH5", Adc, 1), af("SPI1_SCK", Spi, 1)],
        flags: F::empty(),
        notes: "",
    },
    Pin {
        number: 6,
        label: "PA6",
        caps: IO_PWM_ADC,
        alts: &[
            af("ADC1_CH6", Adc, 1),
            af("SPI1_MISO", Spi, 1),
            af("TIM3_CH1", Timer, 3),
        ],
        flags: F::empty(),
        notes: "",
    },
    Pin {
        number: 7,
        label: "PA7",
        caps: IO_PWM_ADC,
        alts: &[
            af("ADC1_CH7", Adc, 1),
            af("SPI1_MOSI", Spi, 1),
            af("TIM3_CH2", Timer, 3),
        ],
        flags: F::empty(),
        notes: "",
    },
    Pin {
        number: 8,
        label: "PA8",
        caps: IO_PWM,
        alts: &[af("TIM1_CH1", Timer, 1)],
        flags: F::empty(),
        notes: "Can output the system clock on MCO.",
    },
    Pin {
        number: 9,
        label: "PA9",
        caps: IO_PWM,
        alts: &[af("TIM1_CH2", Timer, 1), af("USART1_TX", Uart, 1)],
        flags: F::empty(),
        notes: "Common serial-adapter TX.",
    },
    Pin {
        number: 10,
        label: "PA10",
        caps: IO_PWM,
        alts: &[af("TIM1_CH3", Timer, 1), af("USART1_RX", Uart, 1)],
        flags: F::empty(),
        notes: "Common serial-adapter RX.",
    },
    Pin {
        number: 11,
        label: "PA11",
        caps: IO_PWM,
        alts: &[af("TIM1_CH4", Timer, 1), af("USB_DM", Usb, 0)],
        flags: F::USB,
        notes: "USB D-; unusable as GPIO when the USB peripheral is active.",
    },
    Pin {
        number: 12,
        label: "PA12",
        caps: IO,
        alts: &[af("USB_DP", Usb, 0)],
        flags: F::USB,
        notes: "USB D+; many Blue Pills hang a (wrong-value) pull-up resistor here.",
    },
    Pin {
        number: 13,
        label: "PA13",
        caps: IO,
        alts: &[af("SWDIO", Swd, 0)],
        flags: F::SWD,
        notes: "SWD data line used for flashing and debugging. Reassigning it locks you out of the chip until a reset-under-connect.",
    },
    Pin {
        number: 14,
        label: "PA14",
        caps: IO,
        alts: &[af("SWCLK", Swd, 0)],
        flags: F::SWD,
        notes: "SWD clock line used for flashing and debugging. Reassigning it locks you out of the chip until a reset-under-connect.",
    },
    Pin {
        number: 15,
        label: "PA15",
        caps: IO_PWM,
        alts: &[af("TIM2_CH1", Timer, 2)],
        flags: F::empty(),
        notes: "JTDI by default; remap (disable JTAG) before using as GPIO.",
    },
    Pin {
        number: 16,
        label: "PB0",
        caps: IO_PWM_ADC,
        alts: &[af("ADC1_CH8", Adc, 1), af("TIM3_CH3", Timer, 3)],
        flags: F::empty(),
        notes: "",
    },
    Pin {
        number: 17,
        label: "PB1",
        caps: IO_PWM_ADC,
        alts: &[af("ADC1_CH9", Adc, 1), af("TIM3_CH4", Timer, 3)],
        flags: F::empty(),
        notes: "",
    },
    Pin {
        number: 18,
        label: "PB2",
        caps: IO,
        alts: &[],
        flags: F::STRAPPING,
        notes: "BOOT1: sampled together with BOOT0 at reset to pick the boot source.",
    },
    Pin {
        number: 19,
        label: "PB3",
        caps: IO_PWM,
        alts: &[af("TIM2_CH2", Timer, 2)],
        flags: F::empty(),
        notes: "JTDO by default; remap (disable JTAG) before using as GPIO.",
    },
    Pin {
        number: 20,
        label: "PB4",
        caps: IO_PWM,
        alts: &[af("TIM3_CH1", Timer, 3)],
        flags: F::empty(),
        notes: "NJTRST by default; remap (disable JTAG) before using as GPIO.",
    },
    Pin {
        number: 21,
        label: "PB5",
        caps: IO_PWM,
        alts: &[af("TIM3_CH2", Timer, 3)],
        flags: F::empty(),
        notes: "",
    },
    Pin {
        number: 22,
        label: "PB6",
        caps: IO_PWM,
        alts: &[af("I2C1_SCL", I2c, 1), af("TIM4_CH1", Timer, 4)],
        flags: F::empty(),
        notes: "Default I2C1 SCL.",
    },
    Pin {
        number: 23,
        label: "PB7",
        caps: IO_PWM,
        alts: &[af("I2C1_SDA", I2c, 1), af("TIM4_CH2", Timer, 4)],
        flags: F::empty(),
        notes: "Default I2C1 SDA.",
    },
    Pin {
        number: 24,
        label: "PB8",
        caps: IO_PWM,
        alts: &[af("I2C1_SCL", I2c, 1), af("TIM4_CH3", Timer, 4)],
        flags: F::empty(),
        notes: "I2C1 SCL remap; only one of PB6/PB8 can carry SCL at a time.",
    },
    Pin {
        number: 25,
        label: "PB9",
        caps: IO_PWM,
        alts: &[af("I2C1_SDA", I2c, 1), af("TIM4_CH4", Timer, 4)],
        flags: F::empty(),
        notes: "I2C1 SDA remap; only one of PB7/PB9 can carry SDA at a time.",
    },
    Pin {
        number: 26,
        label: "PB10",
        caps: IO,
        alts: &[af("I2C2_SCL", I2c, 2), af("USART3_TX", Uart, 3)],
        flags: F::empty(),
        notes: "",
    },
    Pin {
        number: 27,
        label: "PB11",
        caps: IO,
        alts: &[af("I2C2_SDA", I2c, 2), af("USART3_RX", Uart, 3)],
        flags: F::empty(),
        notes: "",
    },
    Pin {
        number: 28,
        label: "PB12",
        caps: IO,
        alts: &[af("SPI2_CS", Spi, 2)],
        flags: F::empty(),
        notes: "",
    },
    Pin {
        number: 29,
        label: "PB13",
        caps: IO,
        alts: &[af("SPI2_SCK", Spi, 2)],
        flags: F::empty(),
        notes: "",
    },
    Pin {
        number: 30,
        label: "PB14",
        caps: IO,
        alts: &[af("SPI2_MISO", Spi, 2)],
        flags: F::empty(),
        notes: "",
    },
    Pin {
        number: 31,
        label: "PB15",
        caps: IO,
        alts: &[af("SPI2_MOSI", Spi, 2)],
        flags: F::empty(),
        notes: "",
    },
    Pin {
        number: 32,
        label: "PC13",
        caps: IO,
        alts: &[],
        flags: F::empty(),
        notes: "On-board LED (active low). Weak driver: sink a few mA, do not source.",
    },
    Pin {
        number: 33,
        label: "PC14",
        caps: IO,
        alts: &[],
        flags: F::empty(),
        notes: "OSC32_IN for the 32.768 kHz crystal; keep loading minimal if used as GPIO.",
    },
    Pin {
        number: 34,
        label: "PC15",
        caps: IO,
        alts: &[],
        flags: F::empty(),
        notes: "OSC32_OUT for the 32.768 kHz crystal; keep loading minimal if used as GPIO.",
    },
];

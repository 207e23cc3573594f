//! Fixed-width pinout diagrams.
//!
//! Pure functions from the pin tables to text; no state, no randomness, so
//! the output is stable across calls. The ESP32 and Blue Pill render as two
//! pin columns flanking the module/chip outline in the physical top-down
//! order of the real boards; the UNO renders as its classic two header
//! rows. Rows carry pin number, label and the terse flag markers.

use super::{Board, BoardId, Capability, ConflictFlags, Pin};

/// DevKitC left edge, top to bottom (GPIO only; power pins omitted).
const ESP32_LEFT: [u8; 15] = [36, 39, 34, 35, 32, 33, 25, 26, 27, 14, 12, 13, 9, 10, 11];
/// DevKitC right edge, top to bottom.
const ESP32_RIGHT: [u8; 17] = [23, 22, 1, 3, 21, 19, 18, 5, 17, 16, 4, 0, 2, 15, 8, 7, 6];

/// Blue Pill left edge, top to bottom.
const BLUEPILL_LEFT: [u8; 17] = [28, 29, 30, 31, 8, 9, 10, 11, 12, 15, 19, 20, 21, 22, 23, 24, 25];
/// Blue Pill right edge, top to bottom.
const BLUEPILL_RIGHT: [u8; 15] = [27, 26, 17, 16, 7, 6, 5, 4, 3, 2, 1, 0, 34, 33, 32];

/// Render the pinout for a board.
pub fn render(board: &'static Board) -> String {
    match board.id {
        BoardId::Esp32 => two_column(board, &ESP32_LEFT, &ESP32_RIGHT),
        BoardId::Stm32BluePill => two_column(board, &BLUEPILL_LEFT, &BLUEPILL_RIGHT),
        BoardId::ArduinoUno => uno_header(board),
    }
}

fn pin_by_number(board: &'static Board, number: u8) -> &'static Pin {
    // The edge tables are compile-time constants listing known pins.
    board
        .pins
        .iter()
        .find(|p| p.number == number)
        .expect("edge table references a pin missing from the board table")
}

/// Left cell: `flags label nn`, right-aligned later. Right cell mirrors it.
fn left_cell(pin: &Pin) -> String {
    let markers = pin.flag_markers();
    if markers.is_empty() {
        format!("{} {:>2}", pin.label, pin.number)
    } else {
        format!("{} {} {:>2}", markers, pin.label, pin.number)
    }
}

fn right_cell(pin: &Pin) -> String {
    let markers = pin.flag_markers();
    if markers.is_empty() {
        format!("{:<2} {}", pin.number, pin.label)
    } else {
        format!("{:<2} {} {}", pin.number, pin.label, markers)
    }
}

/// Two pin columns flanking the chip outline.
fn two_column(board: &'static Board, left: &[u8], right: &[u8]) -> String {
    let rows = left.len().max(right.len());
    let inner = board.chip.chars().count() + 4;

    let left_cells: Vec<String> = left
        .iter()
        .map(|&n| left_cell(pin_by_number(board, n)))
        .collect();
    let lwidth = left_cells.iter().map(|c| c.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!("{} pinout (top view)\n\n", board.name));
    out.push_str(&format!(
        "{:lw$}  \u{250c}{}\u{2510}\n",
        "",
        "\u{2500}".repeat(inner),
        lw = lwidth
    ));

    for row in 0..rows {
        // Left half: pin cell plus its connector stub, or blank space.
        match left_cells.get(row) {
            Some(cell) => out.push_str(&format!("{:>lw$} \u{2500}\u{2524}", cell, lw = lwidth)),
            None => out.push_str(&format!("{:lw$}  \u{2502}", "", lw = lwidth)),
        }

        // Chip body, with the part number on the middle row.
        if row == rows / 2 {
            out.push_str(&format!("{:^inner$}", board.chip, inner = inner));
        } else {
            out.push_str(&" ".repeat(inner));
        }

        // Right half.
        match right.get(row) {
            Some(&n) => out.push_str(&format!(
                "\u{251c}\u{2500} {}\n",
                right_cell(pin_by_number(board, n))
            )),
            None => out.push_str("\u{2502}\n"),
        }
    }

    out.push_str(&format!(
        "{:lw$}  \u{2514}{}\u{2518}\n",
        "",
        "\u{2500}".repeat(inner),
        lw = lwidth
    ));

    // Pins that live on end headers or jumpers rather than the two side
    // rails (on the Blue Pill: the SWD header and the BOOT1 jumper).
    let off_header: Vec<&Pin> = board
        .pins
        .iter()
        .filter(|p| !left.contains(&p.number) && !right.contains(&p.number))
        .collect();
    if !off_header.is_empty() {
        out.push_str("\nEnd headers / jumpers:\n");
        for pin in off_header {
            let markers = pin.flag_markers();
            if markers.is_empty() {
                out.push_str(&format!("  {:<2} {}\n", pin.number, pin.label));
            } else {
                out.push_str(&format!("  {:<2} {} {}\n", pin.number, pin.label, markers));
            }
        }
    }
    out
}

/// UNO digital/analog header marker: `~` for PWM, `!` for the console UART.
fn uno_marker(pin: &Pin) -> char {
    if pin.flags.contains(ConflictFlags::UART0) {
        '!'
    } else if pin.caps.contains(Capability::PWM) {
        '~'
    } else {
        ' '
    }
}

/// The classic two header rows: digital D13..D0 on top, A0..A5 below.
fn uno_header(board: &'static Board) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} pinout (top view)\n\n", board.name));

    // Digital header, numbered right to left as on the physical board.
    let digital: Vec<&Pin> = (0..=13).rev().map(|n| pin_by_number(board, n)).collect();
    let cells: Vec<String> = digital
        .iter()
        .map(|p| format!("{:>2}{}", p.number, uno_marker(p)))
        .collect();
    let row = cells.join(" ");
    let width = row.chars().count();
    out.push_str(&format!(" \u{250c}\u{2500} DIGITAL {}\u{2510}\n", "\u{2500}".repeat(width - 10)));
    out.push_str(&format!(" \u{2502}{row}\u{2502}\n"));
    out.push_str(&format!(" \u{2514}{}\u{2518}\n", "\u{2500}".repeat(width)));

    out.push_str(&format!("{:^w$}\n", format!("[{}]", board.chip), w = width + 4));

    // Analog header, A0..A5 left to right.
    let analog: Vec<&Pin> = (14..=19).map(|n| pin_by_number(board, n)).collect();
    let cells: Vec<String> = analog
        .iter()
        .map(|p| format!("{:>3}", p.label.split_whitespace().next().unwrap_or(p.label)))
        .collect();
    let row = cells.join(" ");
    let awidth = row.chars().count();
    out.push_str(&format!(" \u{250c}\u{2500} ANALOG {}\u{2510}\n", "\u{2500}".repeat(awidth - 9)));
    out.push_str(&format!(" \u{2502}{row}\u{2502}\n"));
    out.push_str(&format!(" \u{2514}{}\u{2518}\n", "\u{2500}".repeat(awidth)));

    out.push_str("\n ~ PWM   ! shared with USB-serial\n");

    // Special roles, one row per pin that has something to say.
    let mut specials = Vec::new();
    for pin in board.pins {
        let roles: Vec<&str> = pin.alts.iter().map(|a| a.name).collect();
        if !roles.is_empty() {
            specials.push(format!(" {:<9} {}", pin.label, roles.join(", ")));
        }
    }
    if !specials.is_empty() {
        out.push('\n');
        out.push_str(&specials.join("\n"));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gpio::Board;

    #[test]
    fn test_renders_are_deterministic() {
        for name in ["esp32", "uno", "bluepill"] {
            let board = Board::lookup(name).unwrap();
            assert_eq!(render(board), render(board));
        }
    }

    #[test]
    fn test_esp32_diagram_content() {
        let out = render(Board::lookup("esp32").unwrap());
        assert!(out.contains("ESP32-WROOM-32"));
        assert!(out.contains("GPIO12"));
        assert!(out.contains("\u{26a0}strap"));
        assert!(out.contains("\u{26d4}flash"));
        // Every exposed pin appears exactly once.
        let board = Board::lookup("esp32").unwrap();
        assert_eq!(
            ESP32_LEFT.len() + ESP32_RIGHT.len(),
            board.pins.len(),
            "edge tables out of sync with the pin table"
        );
    }

    #[test]
    fn test_bluepill_diagram_content() {
        let out = render(Board::lookup("bluepill").unwrap());
        assert!(out.contains("STM32F103C8T6"));
        // PA13/PA14 and PB2 sit on the SWD header and BOOT jumper, not the
        // side rails, but every pin must still show up.
        assert!(out.contains("PA13"));
        assert!(out.contains("PB2"));
        assert!(out.contains("\u{26a0}swd"));
        let board = Board::lookup("bluepill").unwrap();
        assert_eq!(
            BLUEPILL_LEFT.len() + BLUEPILL_RIGHT.len() + 3,
            board.pins.len()
        );
    }

    #[test]
    fn test_uno_diagram_content() {
        let out = render(Board::lookup("uno").unwrap());
        assert!(out.contains("DIGITAL"));
        assert!(out.contains("ANALOG"));
        assert!(out.contains("ATmega328P"));
        assert!(out.contains("13"));
        assert!(out.contains("A5"));
        assert!(out.contains("I2C0_SDA"));
    }
}

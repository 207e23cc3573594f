//! GPIO database tools.

use serde_json::json;

use super::{require_i64, require_i64_array, require_str};
use crate::gpio::conflict::{self, ConflictReport, Severity};
use crate::gpio::{diagram, AfGroup, Board, BoardId, Capability, Pin};
use crate::mcp::{CallError, ToolRegistry};

/// Schema fragment shared by every board-taking tool.
fn board_property() -> serde_json::Value {
    json!({
        "type": "string",
        "description": "Board name: ESP32, Arduino UNO, or STM32 Blue Pill (aliases accepted)",
    })
}

pub fn register(registry: &mut ToolRegistry) {
    registry.register(
        "get_pin_info",
        "Full capability record for one pin: label, capabilities, alternate functions, hazards",
        json!({
            "type": "object",
            "properties": {
                "board": board_property(),
                "pin_number": { "type": "integer", "description": "Pin number in the board's numbering" },
            },
            "required": ["board", "pin_number"],
        }),
        |args| {
            let board = Board::lookup(require_str(args, "board")?).map_err(CallError::Tool)?;
            let number = require_i64(args, "pin_number")?;
            let pin = board.pin(number).map_err(CallError::Tool)?;
            Ok(render_pin_info(board, pin))
        },
    );

    registry.register(
        "find_pwm_pins",
        "List the PWM-capable pins of a board",
        json!({
            "type": "object",
            "properties": { "board": board_property() },
            "required": ["board"],
        }),
        |args| {
            let board = Board::lookup(require_str(args, "board")?).map_err(CallError::Tool)?;
            Ok(render_pwm(board))
        },
    );

    registry.register(
        "find_adc_pins",
        "List a board's analog inputs, grouped by ADC unit (on ESP32: WiFi-safe ADC1 vs ADC2)",
        json!({
            "type": "object",
            "properties": { "board": board_property() },
            "required": ["board"],
        }),
        |args| {
            let board = Board::lookup(require_str(args, "board")?).map_err(CallError::Tool)?;
            Ok(render_adc(board))
        },
    );

    registry.register(
        "find_i2c_pins",
        "List a board's I2C buses and their SDA/SCL pins",
        json!({
            "type": "object",
            "properties": { "board": board_property() },
            "required": ["board"],
        }),
        |args| {
            let board = Board::lookup(require_str(args, "board")?).map_err(CallError::Tool)?;
            Ok(render_bus(board, AfGroup::I2c, "\u{1f50c} I2C pins"))
        },
    );

    registry.register(
        "find_spi_pins",
        "List a board's SPI buses and their MOSI/MISO/SCK/CS pins",
        json!({
            "type": "object",
            "properties": { "board": board_property() },
            "required": ["board"],
        }),
        |args| {
            let board = Board::lookup(require_str(args, "board")?).map_err(CallError::Tool)?;
            Ok(render_bus(board, AfGroup::Spi, "\u{1f50c} SPI pins"))
        },
    );

    registry.register(
        "check_pin_conflict",
        "Check a set of pins for boot, debug and peripheral conflicts; suggests safe alternatives",
        json!({
            "type": "object",
            "properties": {
                "board": board_property(),
                "pin_numbers": {
                    "type": "array",
                    "items": { "type": "integer" },
                    "description": "Pins the project intends to use simultaneously",
                },
            },
            "required": ["board", "pin_numbers"],
        }),
        |args| {
            let board = Board::lookup(require_str(args, "board")?).map_err(CallError::Tool)?;
            let numbers = require_i64_array(args, "pin_numbers")?;
            if numbers.is_empty() {
                return Err(CallError::InvalidParams(
                    "pin_numbers must list at least one pin".to_string(),
                ));
            }
            let report = conflict::check(board, &numbers);
            Ok(render_conflict(&report))
        },
    );

    registry.register(
        "generate_pin_diagram_ascii",
        "Fixed-width ASCII pinout diagram of a board",
        json!({
            "type": "object",
            "properties": { "board": board_property() },
            "required": ["board"],
        }),
        |args| {
            let board = Board::lookup(require_str(args, "board")?).map_err(CallError::Tool)?;
            Ok(diagram::render(board))
        },
    );
}

fn capability_list(caps: Capability) -> String {
    let mut parts = Vec::new();
    if caps.contains(Capability::DIGITAL_IN) {
        parts.push("digital in");
    }
    if caps.contains(Capability::DIGITAL_OUT) {
        parts.push("digital out");
    }
    if caps.contains(Capability::PWM) {
        parts.push("PWM");
    }
    if caps.contains(Capability::ADC) {
        parts.push("ADC");
    }
    if caps.contains(Capability::DAC) {
        parts.push("DAC");
    }
    if caps.contains(Capability::TOUCH) {
        parts.push("touch");
    }
    if caps.contains(Capability::INPUT_ONLY) {
        parts.push("input only");
    }
    parts.join(", ")
}

fn render_pin_info(board: &'static Board, pin: &'static Pin) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "\u{1f4cc} {} \u{2014} {} (pin {})\n",
        board.name, pin.label, pin.number
    ));
    out.push_str(&format!("Capabilities: {}\n", capability_list(pin.caps)));
    if !pin.alts.is_empty() {
        let names: Vec<&str> = pin.alts.iter().map(|a| a.name).collect();
        out.push_str(&format!("Alternate functions: {}\n", names.join(", ")));
    }
    let markers = pin.flag_markers();
    if !markers.is_empty() {
        out.push_str(&format!("Hazards: {markers}\n"));
    }
    if !pin.notes.is_empty() {
        out.push_str(&format!("Notes: {}\n", pin.notes));
    }
    // Per-pin advisories double as a usability verdict.
    let report = conflict::check(board, &[i64::from(pin.number)]);
    for advisory in report.reviews.iter().flat_map(|r| r.advisories.iter()) {
        out.push_str(&format!("{} {}\n", advisory.severity.marker(), advisory.message));
    }
    out
}

fn pin_line(pin: &Pin, detail: Option<&str>) -> String {
    let mut line = format!("  {} (pin {})", pin.label, pin.number);
    if let Some(detail) = detail {
        line.push_str(&format!(" \u{2014} {detail}"));
    }
    let markers = pin.flag_markers();
    if !markers.is_empty() {
        line.push_str(&format!("  [{markers}]"));
    }
    line.push('\n');
    line
}

fn render_pwm(board: &'static Board) -> String {
    let pins = board.pins_with_capability(Capability::PWM);
    let mut out = format!(
        "\u{26a1} PWM-capable pins on {} ({} pins)\n",
        board.name,
        pins.len()
    );
    for pin in pins {
        // On timer-driven parts, say which timer channel provides the PWM.
        let timer = pin.alts.iter().find(|a| a.group == AfGroup::Timer);
        out.push_str(&pin_line(pin, timer.map(|a| a.name)));
    }
    if board.id == BoardId::Esp32 {
        out.push_str("Any listed pin can host one of the 16 LEDC PWM channels.\n");
    }
    out
}

fn render_adc(board: &'static Board) -> String {
    let mut out = format!("\u{1f4ca} Analog inputs on {}\n", board.name);
    for (bus, entries) in board.bus_functions(AfGroup::Adc) {
        let annotation = match (board.id, bus) {
            (BoardId::Esp32, 1) => " \u{2014} WiFi-safe",
            (BoardId::Esp32, 2) => " \u{2014} unavailable while WiFi is active",
            _ => "",
        };
        out.push_str(&format!("{}{}:\n", board.bus_label(AfGroup::Adc, bus), annotation));
        for (pin, alt) in entries {
            out.push_str(&pin_line(pin, Some(alt.name)));
        }
    }
    out
}

fn render_bus(board: &'static Board, group: AfGroup, headline: &str) -> String {
    let buses = board.bus_functions(group);
    let mut out = format!("{} on {}\n", headline, board.name);
    if buses.is_empty() {
        out.push_str("None.\n");
        return out;
    }
    for (bus, entries) in buses {
        out.push_str(&format!("{}:\n", board.bus_label(group, bus)));
        for (pin, alt) in entries {
            out.push_str(&pin_line(pin, Some(alt.name)));
        }
    }
    out
}

fn render_conflict(report: &ConflictReport) -> String {
    let numbers: Vec<String> = report.reviews.iter().map(|r| r.number.to_string()).collect();
    let mut out = format!(
        "\u{1f50d} Pin conflict check \u{2014} {}, pins {}\n\n",
        report.board.name,
        numbers.join(", ")
    );

    for review in &report.reviews {
        match review.pin {
            Some(pin) => out.push_str(&format!("{} (pin {}):\n", pin.label, pin.number)),
            None => out.push_str(&format!("pin {}:\n", review.number)),
        }
        if review.advisories.is_empty() {
            out.push_str("  \u{2713} no conflicts\n");
        }
        for advisory in &review.advisories {
            out.push_str(&format!(
                "  {} {}\n",
                advisory.severity.marker(),
                advisory.message
            ));
        }
    }

    if !report.global.is_empty() {
        out.push_str("\nBoard-wide:\n");
        for advisory in &report.global {
            out.push_str(&format!(
                "  {} {}\n",
                advisory.severity.marker(),
                advisory.message
            ));
        }
    }

    out.push_str(&format!(
        "\nSummary: {} error(s), {} warning(s), {} note(s)\n",
        report.count(Severity::Error),
        report.count(Severity::Warning),
        report.count(Severity::Info)
    ));

    if !report.safe_alternatives.is_empty() {
        let names: Vec<&str> = report.safe_alternatives.iter().map(|p| p.label).collect();
        out.push_str(&format!("Safe alternatives: {}\n", names.join(", ")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::registry;
    use serde_json::json;

    #[test]
    fn test_pin_info_swdio() {
        let registry = registry();
        let out = registry
            .call("get_pin_info", &json!({"board": "STM32", "pin_number": 13}))
            .unwrap()
            .unwrap();
        assert!(out.contains("PA13"));
        assert!(out.contains("SWDIO"));
        assert!(out.contains("WARNING"));
    }

    #[test]
    fn test_pin_info_unknown_pin() {
        let registry = registry();
        let err = registry
            .call("get_pin_info", &json!({"board": "uno", "pin_number": 42}))
            .unwrap()
            .unwrap_err();
        assert!(matches!(err, CallError::Tool(_)));
    }

    #[test]
    fn test_unknown_board_error() {
        let registry = registry();
        let err = registry
            .call("find_pwm_pins", &json!({"board": "Raspberry Pi"}))
            .unwrap()
            .unwrap_err();
        assert!(matches!(err, CallError::Tool(_)));
    }

    #[test]
    fn test_adc_tool_splits_esp32_units() {
        let registry = registry();
        let out = registry
            .call("find_adc_pins", &json!({"board": "ESP32"}))
            .unwrap()
            .unwrap();
        assert!(out.contains("ADC1 \u{2014} WiFi-safe"));
        assert!(out.contains("ADC2 \u{2014} unavailable while WiFi is active"));
        // ADC1 channels live on GPIO32-39, ADC2 on 0/2/4/12-15/25-27.
        assert!(out.contains("GPIO32"));
        assert!(out.contains("GPIO39"));
        assert!(out.contains("GPIO27"));
    }

    #[test]
    fn test_spi_tool_groups_esp32_buses() {
        let registry = registry();
        let out = registry
            .call("find_spi_pins", &json!({"board": "esp32"}))
            .unwrap()
            .unwrap();
        assert!(out.contains("HSPI (SPI2):"));
        assert!(out.contains("VSPI (SPI3):"));
        assert!(out.contains("VSPI_MOSI"));
    }

    #[test]
    fn test_i2c_tool_on_uno() {
        let registry = registry();
        let out = registry
            .call("find_i2c_pins", &json!({"board": "Arduino UNO"}))
            .unwrap()
            .unwrap();
        assert!(out.contains("I2C0:"));
        assert!(out.contains("A4"));
        assert!(out.contains("A5"));
    }

    #[test]
    fn test_conflict_tool_scenario() {
        let registry = registry();
        let out = registry
            .call(
                "check_pin_conflict",
                &json!({"board": "ESP32", "pin_numbers": [0, 2, 6, 12]}),
            )
            .unwrap()
            .unwrap();
        assert!(out.contains("ERROR"));
        assert!(out.contains("flash"));
        assert!(out.contains("Strapping"));
        assert!(out.contains("ADC2"));
        assert!(out.contains("Safe alternatives"));
    }

    #[test]
    fn test_conflict_tool_rejects_empty_set() {
        let registry = registry();
        let err = registry
            .call(
                "check_pin_conflict",
                &json!({"board": "ESP32", "pin_numbers": []}),
            )
            .unwrap()
            .unwrap_err();
        assert!(matches!(err, CallError::InvalidParams(_)));
    }

    #[test]
    fn test_diagram_tool() {
        let registry = registry();
        for board in ["ESP32", "UNO", "BluePill"] {
            let out = registry
                .call("generate_pin_diagram_ascii", &json!({"board": board}))
                .unwrap()
                .unwrap();
            assert!(out.contains("pinout"), "{board} diagram missing title");
        }
    }
}

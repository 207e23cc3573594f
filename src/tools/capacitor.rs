//! Capacitor calculation tools.

use serde_json::json;

use super::{optional_f64, require_f64};
use crate::capacitor::{self, FilterSuggestion, RcTimeConstant, Reactance, Resonance};
use crate::format;
use crate::mcp::{CallError, ToolRegistry};

pub fn register(registry: &mut ToolRegistry) {
    registry.register(
        "calculate_capacitive_reactance",
        "Capacitive reactance Xc = 1/(2\u{3c0}fC), optionally with the current at a given voltage",
        json!({
            "type": "object",
            "properties": {
                "capacitance": { "type": "number", "description": "Capacitance in farads" },
                "frequency": { "type": "number", "description": "Frequency in hertz" },
                "voltage": { "type": "number", "description": "Optional RMS voltage in volts" },
            },
            "required": ["capacitance", "frequency"],
        }),
        |args| {
            let capacitance = require_f64(args, "capacitance")?;
            let frequency = require_f64(args, "frequency")?;
            let voltage = optional_f64(args, "voltage")?;
            let reactance = capacitor::capacitive_reactance(capacitance, frequency, voltage)
                .map_err(CallError::Tool)?;
            Ok(render_reactance(&reactance, voltage))
        },
    );

    registry.register(
        "calculate_rc_time_constant",
        "RC time constant \u{3c4} = R\u{b7}C with the 1\u{3c4}..5\u{3c4} charging table",
        json!({
            "type": "object",
            "properties": {
                "resistance": { "type": "number", "description": "Resistance in ohms" },
                "capacitance": { "type": "number", "description": "Capacitance in farads" },
            },
            "required": ["resistance", "capacitance"],
        }),
        |args| {
            let resistance = require_f64(args, "resistance")?;
            let capacitance = require_f64(args, "capacitance")?;
            let rc = capacitor::rc_time_constant(resistance, capacitance).map_err(CallError::Tool)?;
            Ok(render_rc(&rc))
        },
    );

    registry.register(
        "calculate_resonant_frequency",
        "LC resonant frequency f\u{2080} = 1/(2\u{3c0}\u{221a}(LC))",
        json!({
            "type": "object",
            "properties": {
                "inductance": { "type": "number", "description": "Inductance in henries" },
                "capacitance": { "type": "number", "description": "Capacitance in farads" },
            },
            "required": ["inductance", "capacitance"],
        }),
        |args| {
            let inductance = require_f64(args, "inductance")?;
            let capacitance = require_f64(args, "capacitance")?;
            let resonance =
                capacitor::resonant_frequency(inductance, capacitance).map_err(CallError::Tool)?;
            Ok(render_resonance(&resonance))
        },
    );

    registry.register(
        "suggest_capacitor_for_filter",
        "Pick an E12 capacitor for an RC low-pass filter: C = 1/(2\u{3c0}R\u{b7}fc)",
        json!({
            "type": "object",
            "properties": {
                "resistance": { "type": "number", "description": "Filter resistance in ohms" },
                "cutoff_frequency": { "type": "number", "description": "Desired -3 dB cutoff in hertz" },
            },
            "required": ["resistance", "cutoff_frequency"],
        }),
        |args| {
            let resistance = require_f64(args, "resistance")?;
            let cutoff = require_f64(args, "cutoff_frequency")?;
            let suggestion =
                capacitor::suggest_filter_capacitor(resistance, cutoff).map_err(CallError::Tool)?;
            Ok(render_filter(&suggestion))
        },
    );
}

fn signed_percent(pct: f64) -> String {
    if pct >= 0.0 {
        format!("+{}", format::percent(pct))
    } else {
        format!("-{}", format::percent(-pct))
    }
}

fn render_reactance(reactance: &Reactance, voltage: Option<f64>) -> String {
    let mut out = String::new();
    out.push_str("\u{26a1} Capacitive reactance\n");
    out.push_str(&format!(
        "Xc = 1/(2\u{3c0}fC) = 1/(2\u{3c0} \u{d7} {} \u{d7} {})\n",
        format::si(reactance.frequency_hz, "Hz"),
        format::si(reactance.capacitance_farads, "F")
    ));
    out.push_str(&format!("Xc = {}\n", format::si(reactance.xc_ohms, "\u{3a9}")));
    if let (Some(v), Some(i)) = (voltage, reactance.current_amps) {
        out.push_str(&format!(
            "Current at {}: I = V/Xc = {}\n",
            format::si(v, "V"),
            format::si(i, "A")
        ));
    }
    out
}

fn render_rc(rc: &RcTimeConstant) -> String {
    let mut out = String::new();
    out.push_str("\u{23f1} RC time constant\n");
    out.push_str(&format!(
        "\u{3c4} = R \u{d7} C = {} \u{d7} {} = {}\n",
        format::si(rc.resistance_ohms, "\u{3a9}"),
        format::si(rc.capacitance_farads, "F"),
        format::si(rc.tau_seconds, "s")
    ));
    out.push_str("Charging from 0 V:\n");
    for point in &rc.charge_table {
        let t = rc.tau_seconds * f64::from(point.tau_multiple);
        out.push_str(&format!(
            "  {}\u{3c4} = {} \u{2192} {:.1}% charged{}\n",
            point.tau_multiple,
            format::si(t, "s"),
            point.pct_charged,
            if point.tau_multiple == 5 {
                " (effectively full)"
            } else {
                ""
            }
        ));
    }
    out
}

fn render_resonance(resonance: &Resonance) -> String {
    let mut out = String::new();
    out.push_str("\u{1f4fb} LC resonant frequency\n");
    out.push_str(&format!(
        "f\u{2080} = 1/(2\u{3c0}\u{221a}(LC)) = 1/(2\u{3c0}\u{221a}({} \u{d7} {}))\n",
        format::si(resonance.inductance_henries, "H"),
        format::si(resonance.capacitance_farads, "F")
    ));
    out.push_str(&format!(
        "f\u{2080} = {} \u{2014} {}\n",
        format::si(resonance.f0_hz, "Hz"),
        resonance.band.describe()
    ));
    out
}

fn render_filter(suggestion: &FilterSuggestion) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "\u{1f527} RC low-pass design: R = {}, fc = {}\n",
        format::si(suggestion.resistance_ohms, "\u{3a9}"),
        format::si(suggestion.cutoff_hz, "Hz")
    ));
    out.push_str(&format!(
        "Ideal: C = 1/(2\u{3c0}R\u{b7}fc) = {}\n",
        format::si(suggestion.ideal_farads, "F")
    ));
    match &suggestion.snapped {
        Ok(picked) => {
            out.push_str(&format!(
                "Pick (E12): {} \u{2192} actual cutoff {} ({} vs target)\n",
                format::si(picked.snap.value, "F"),
                format::si(picked.actual_cutoff_hz, "Hz"),
                signed_percent(picked.cutoff_error_pct)
            ));
        }
        Err(err) => {
            out.push_str(&format!("No standard part: {err}\n"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::registry;
    use serde_json::json;

    #[test]
    fn test_rc_tool_scenario() {
        let registry = registry();
        let out = registry
            .call(
                "calculate_rc_time_constant",
                &json!({"resistance": 10000.0, "capacitance": 1e-4}),
            )
            .unwrap()
            .unwrap();
        assert!(out.contains("1.00 s"));
        assert!(out.contains("63.2% charged"));
        assert!(out.contains("5\u{3c4}"));
    }

    #[test]
    fn test_reactance_tool_with_current() {
        let registry = registry();
        let out = registry
            .call(
                "calculate_capacitive_reactance",
                &json!({"capacitance": 100e-9, "frequency": 1000.0, "voltage": 5.0}),
            )
            .unwrap()
            .unwrap();
        assert!(out.contains("1.59 k\u{3a9}"));
        assert!(out.contains("I = V/Xc"));
    }

    #[test]
    fn test_resonance_tool() {
        let registry = registry();
        let out = registry
            .call(
                "calculate_resonant_frequency",
                &json!({"inductance": 100e-6, "capacitance": 100e-12}),
            )
            .unwrap()
            .unwrap();
        assert!(out.contains("1.59 MHz"));
        assert!(out.contains("RF"));
    }

    #[test]
    fn test_filter_tool_scenario() {
        let registry = registry();
        let out = registry
            .call(
                "suggest_capacitor_for_filter",
                &json!({"resistance": 10000.0, "cutoff_frequency": 1000.0}),
            )
            .unwrap()
            .unwrap();
        assert!(out.contains("15.9 nF"));
        assert!(out.contains("15.0 nF"));
        assert!(out.contains("1.06 kHz"));
    }

    #[test]
    fn test_nonpositive_input_is_tool_error() {
        let registry = registry();
        let err = registry
            .call(
                "calculate_rc_time_constant",
                &json!({"resistance": -1.0, "capacitance": 1e-6}),
            )
            .unwrap()
            .unwrap_err();
        assert!(matches!(err, CallError::Tool(_)));
    }

    #[test]
    fn test_missing_argument_is_invalid_params() {
        let registry = registry();
        let err = registry
            .call("calculate_rc_time_constant", &json!({"resistance": 100.0}))
            .unwrap()
            .unwrap_err();
        assert!(matches!(err, CallError::InvalidParams(_)));
    }
}

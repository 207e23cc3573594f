//! Resistor codec tools.

use serde_json::json;

use super::{bool_or, f64_or, require_f64, require_str_array, str_or};
use crate::format;
use crate::mcp::{CallError, ToolRegistry};
use crate::resistor::{self, colors::BandColor, DecodedResistor, EncodedResistor, StandardResistor};
use crate::series::Series;

pub fn register(registry: &mut ToolRegistry) {
    registry.register(
        "decode_resistor_color_bands",
        "Decode a resistor's color bands (3, 4 or 5) into its resistance and tolerance",
        json!({
            "type": "object",
            "properties": {
                "bands": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Band colors in reading order, e.g. [\"brown\", \"black\", \"red\", \"gold\"]",
                },
            },
            "required": ["bands"],
        }),
        |args| {
            let bands = require_str_array(args, "bands")?;
            let refs: Vec<&str> = bands.iter().map(String::as_str).collect();
            let decoded = resistor::decode(&refs).map_err(CallError::Tool)?;
            Ok(render_decoded(&decoded))
        },
    );

    registry.register(
        "encode_resistor_value",
        "Encode a resistance in ohms as color bands",
        json!({
            "type": "object",
            "properties": {
                "resistance": { "type": "number", "description": "Resistance in ohms" },
                "tolerance": { "type": "number", "description": "Tolerance in percent", "default": 5.0 },
                "five_band": { "type": "boolean", "description": "Use the three-digit 5-band encoding", "default": false },
            },
            "required": ["resistance"],
        }),
        |args| {
            let resistance = require_f64(args, "resistance")?;
            let tolerance = f64_or(args, "tolerance", 5.0)?;
            let five_band = bool_or(args, "five_band", false)?;
            let encoded = resistor::encode(resistance, tolerance, five_band).map_err(CallError::Tool)?;
            Ok(render_encoded(resistance, &encoded))
        },
    );

    registry.register(
        "find_standard_resistor",
        "Find the nearest standard E-series (E12/E24/E96) resistor to a target value",
        json!({
            "type": "object",
            "properties": {
                "target_value": { "type": "number", "description": "Target resistance in ohms" },
                "series": { "type": "string", "enum": ["E12", "E24", "E96"], "default": "E12" },
            },
            "required": ["target_value"],
        }),
        |args| {
            let target = require_f64(args, "target_value")?;
            let label = str_or(args, "series", "E12")?;
            let series = Series::parse(label).ok_or_else(|| {
                CallError::InvalidParams(format!("series must be E12, E24 or E96, got '{label}'"))
            })?;
            let standard = resistor::find_standard(target, series).map_err(CallError::Tool)?;
            Ok(render_standard(target, &standard))
        },
    );
}

fn band_names(bands: &[BandColor]) -> String {
    bands
        .iter()
        .map(|b| b.name())
        .collect::<Vec<_>>()
        .join("-")
}

fn multiplier_str(exp: i32) -> String {
    match exp {
        -2 => "\u{d7}0.01".to_string(),
        -1 => "\u{d7}0.1".to_string(),
        _ => format!("\u{d7}10^{exp}"),
    }
}

fn signed_percent(pct: f64) -> String {
    if pct >= 0.0 {
        format!("+{}", format::percent(pct))
    } else {
        format!("-{}", format::percent(-pct))
    }
}

fn render_decoded(decoded: &DecodedResistor) -> String {
    let digit_count = decoded.bands.len() - if decoded.tolerance_pct == 20.0 { 1 } else { 2 };
    let digit_parts: Vec<String> = decoded.bands[..digit_count]
        .iter()
        .map(|b| format!("{}={}", b.name(), b.digit().unwrap_or(0)))
        .collect();
    let multiplier_band = decoded.bands[digit_count];

    let low = decoded.ohms * (1.0 - decoded.tolerance_pct / 100.0);
    let high = decoded.ohms * (1.0 + decoded.tolerance_pct / 100.0);

    let mut out = String::new();
    out.push_str(&format!("\u{1f3a8} {}\n", band_names(&decoded.bands)));
    out.push_str(&format!(
        "Resistance: {} \u{b1}{}%\n",
        format::si(decoded.ohms, "\u{3a9}"),
        decoded.tolerance_pct
    ));
    out.push_str(&format!(
        "Digits: {} \u{2192} {}\n",
        digit_parts.join(", "),
        decoded.significand
    ));
    out.push_str(&format!(
        "Multiplier: {} ({})\n",
        multiplier_band.name(),
        multiplier_str(decoded.multiplier_exp)
    ));
    out.push_str(&format!(
        "Formula: {} {} = {}\n",
        decoded.significand,
        multiplier_str(decoded.multiplier_exp),
        format::si(decoded.ohms, "\u{3a9}")
    ));
    out.push_str(&format!(
        "Range: {} to {}\n",
        format::si(low, "\u{3a9}"),
        format::si(high, "\u{3a9}")
    ));
    out
}

fn render_encoded(requested: f64, encoded: &EncodedResistor) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "\u{1f3a8} {} \u{b1}{}% \u{2192} {}\n",
        format::si(encoded.ohms, "\u{3a9}"),
        encoded.tolerance_pct,
        band_names(&encoded.bands)
    ));

    let digit_count = encoded.bands.len() - 2;
    let mut parts: Vec<String> = encoded.bands[..digit_count]
        .iter()
        .map(|b| format!("{}={}", b.name(), b.digit().unwrap_or(0)))
        .collect();
    let multiplier = encoded.bands[digit_count];
    parts.push(format!(
        "{} {}",
        multiplier.name(),
        multiplier_str(multiplier.multiplier_exp())
    ));
    parts.push(format!(
        "{} \u{b1}{}%",
        encoded.bands[digit_count + 1].name(),
        encoded.tolerance_pct
    ));
    out.push_str(&format!("Bands: {}\n", parts.join(", ")));

    if encoded.error_pct.abs() < 1e-9 {
        out.push_str("Encodes the value exactly.\n");
    } else {
        out.push_str(&format!(
            "Nearest encodable value: {} ({} vs requested {})\n",
            format::si(encoded.ohms, "\u{3a9}"),
            signed_percent(encoded.error_pct),
            format::si(requested, "\u{3a9}")
        ));
    }
    out
}

fn render_standard(target: f64, standard: &StandardResistor) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "\u{1f4d0} Nearest {} value to {}: {}\n",
        standard.series.label(),
        format::si(target, "\u{3a9}"),
        format::si(standard.snapped.value, "\u{3a9}")
    ));
    out.push_str(&format!(
        "Error: {}\n",
        if standard.snapped.error_pct.abs() < 1e-9 {
            format::percent(0.0)
        } else {
            signed_percent(standard.snapped.error_pct)
        }
    ));
    out.push_str(&format!(
        "Bands: {} (\u{b1}{}%)\n",
        band_names(&standard.encoding.bands),
        standard.encoding.tolerance_pct
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ToolError;
    use crate::tools::registry;
    use serde_json::json;

    #[test]
    fn test_decode_tool_classic_1k() {
        let registry = registry();
        let out = registry
            .call(
                "decode_resistor_color_bands",
                &json!({"bands": ["brown", "black", "red", "gold"]}),
            )
            .unwrap()
            .unwrap();
        assert!(out.contains("1.00 k\u{3a9}"));
        assert!(out.contains("\u{b1}5%"));
        assert!(out.contains("Formula"));
    }

    #[test]
    fn test_decode_tool_reports_color_errors() {
        let registry = registry();
        let err = registry
            .call("decode_resistor_color_bands", &json!({"bands": ["gold", "black", "red"]}))
            .unwrap()
            .unwrap_err();
        match err {
            CallError::Tool(ToolError::InvalidColor { .. }) => {}
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_encode_tool_4k7() {
        let registry = registry();
        let out = registry
            .call("encode_resistor_value", &json!({"resistance": 4700.0}))
            .unwrap()
            .unwrap();
        assert!(out.contains("Yellow-Violet-Red-Gold"));
        assert!(out.contains("exactly"));
    }

    #[test]
    fn test_find_standard_tool_exact() {
        let registry = registry();
        let out = registry
            .call(
                "find_standard_resistor",
                &json!({"target_value": 3300.0, "series": "E12"}),
            )
            .unwrap()
            .unwrap();
        assert!(out.contains("3.30 k\u{3a9}"));
        assert!(out.contains("0.00%"));
    }

    #[test]
    fn test_find_standard_rejects_bad_series() {
        let registry = registry();
        let err = registry
            .call(
                "find_standard_resistor",
                &json!({"target_value": 100.0, "series": "E48"}),
            )
            .unwrap()
            .unwrap_err();
        assert!(matches!(err, CallError::InvalidParams(_)));
    }
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Dispatch a query to the color parsers and format the result.
//!
//! The parsers are tried in a fixed order: [`ColorFormat::Hex`], then
//! [`ColorFormat::RgbFunction`], then [`ColorFormat::BareTriplet`]. The first one that
//! matches decides the output, and no other parser runs after it. This is why
//! `rgb(1,2,3)` is never seen by the bare triplet parser, and why `112233` is read as hex
//! rather than anything else.
//!
//! A query that no parser matches produces no result. It is not an error.

use serde::Serialize;
use strum_macros::{Display, EnumIter};

use crate::{ColorConvertError, CommonResult, DEBUG_COLOR_CONVERT, RgbTriplet,
            try_parse_bare_triplet, try_parse_hex_color, try_parse_rgb_fn};

/// The text formats that a query can be recognized as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, Serialize)]
pub enum ColorFormat {
    #[strum(serialize = "hex")]
    Hex,
    #[strum(serialize = "rgb()")]
    RgbFunction,
    #[strum(serialize = "bare triplet")]
    BareTriplet,
}

/// Which way the conversion went. The [`Display`] impl is the label prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, Serialize)]
pub enum ConversionKind {
    #[strum(serialize = "HEX → RGB")]
    HexToRgb,
    #[strum(serialize = "RGB → HEX")]
    RgbToHex,
}

impl From<ColorFormat> for ConversionKind {
    fn from(format: ColorFormat) -> Self {
        match format {
            ColorFormat::Hex => ConversionKind::HexToRgb,
            ColorFormat::RgbFunction | ColorFormat::BareTriplet => ConversionKind::RgbToHex,
        }
    }
}

/// The outcome of one successful query.
///
/// Fields:
/// - `source_format`: [`ColorFormat`] the input was recognized as.
/// - `kind`: [`ConversionKind`] direction of the conversion.
/// - `input`: the trimmed query text.
/// - `output`: canonical text in the other format, eg: `rgb(17, 170, 255)` or `#151F29`.
/// - `label`: short human readable description, eg: `HEX → RGB: #1AF`.
/// - `triplet`: the decoded [`RgbTriplet`].
/// - `copy_text`: what a host should put on the clipboard, see
///   [`crate::copy_result_to_clipboard`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConversionResult {
    pub source_format: ColorFormat,
    pub kind: ConversionKind,
    pub input: String,
    pub output: String,
    pub label: String,
    pub triplet: RgbTriplet,
    pub copy_text: String,
}

impl ConversionResult {
    #[must_use]
    pub fn new(source_format: ColorFormat, input: &str, triplet: RgbTriplet) -> Self {
        let kind = ConversionKind::from(source_format);
        let output = match kind {
            ConversionKind::HexToRgb => triplet.as_rgb_fn_string(),
            ConversionKind::RgbToHex => triplet.as_hex_string(),
        };
        Self {
            source_format,
            kind,
            input: input.to_string(),
            label: format!("{kind}: {input}"),
            copy_text: output.clone(),
            output,
            triplet,
        }
    }
}

/// A parser that either recognizes the whole query or doesn't apply.
pub type ParseColorFn = fn(&str) -> Option<RgbTriplet>;

/// The parsers in priority order. The first match wins.
pub const PARSERS: [(ColorFormat, ParseColorFn); 3] = [
    (ColorFormat::Hex, try_parse_hex_color),
    (ColorFormat::RgbFunction, try_parse_rgb_fn),
    (ColorFormat::BareTriplet, try_parse_bare_triplet),
];

/// Convert one query. Returns [`None`] if the input is empty, whitespace only, or does
/// not match any of the [`ColorFormat`]s.
///
/// ```
/// use r3bl_color_convert::convert;
///
/// assert_eq!(convert("#1a2b3c").unwrap().output, "rgb(26, 43, 60)");
/// assert_eq!(convert("rgb(26, 43, 60)").unwrap().output, "#1A2B3C");
/// assert!(convert("rgb(300, 0, 0)").is_none());
/// ```
#[must_use]
pub fn convert(input: &str) -> Option<ConversionResult> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let maybe_result = PARSERS.iter().find_map(|(format, parse_fn)| {
        parse_fn(input).map(|triplet| ConversionResult::new(*format, input, triplet))
    });

    DEBUG_COLOR_CONVERT.then(|| {
        // % is Display, ? is Debug.
        match &maybe_result {
            Some(result) => tracing::debug!(
                message = "🎨 color recognized",
                input = %input,
                format = %result.source_format,
                output = %result.output,
            ),
            None => tracing::debug!(message = "🎨 no color format matched", input = %input),
        }
    });

    maybe_result
}

/// Same as [`convert`] but for hosts that want an error value instead of [`None`].
///
/// # Errors
///
/// Returns [`ColorConvertError::NoMatch`] if the input matches no [`ColorFormat`].
pub fn try_convert(input: &str) -> CommonResult<ConversionResult> {
    match convert(input) {
        Some(result) => Ok(result),
        None => ColorConvertError::new_no_match_result(input.trim()),
    }
}

/// Convert every line independently. The returned vec has one entry per input line, in
/// the same order.
pub fn convert_all<'a>(
    lines: impl IntoIterator<Item = &'a str>,
) -> Vec<Option<ConversionResult>> {
    lines.into_iter().map(convert).collect()
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;
    use test_case::test_case;

    use super::*;
    use crate::{assert_eq2, convert_to_hex};

    #[test_case("#1AF", "rgb(17, 170, 255)" ; "short hex")]
    #[test_case("#1a2b3c", "rgb(26, 43, 60)" ; "long hex")]
    #[test_case("1a2b3c", "rgb(26, 43, 60)" ; "long hex no hash")]
    #[test_case("rgb(26, 43, 60)", "#1A2B3C" ; "functional rgb")]
    #[test_case("RGB(1, 2, 3)", "#010203" ; "functional rgb uppercase")]
    #[test_case("rgb(1, 2, 3)", "#010203" ; "functional rgb lowercase")]
    #[test_case("21, 31, 41", "#151F29" ; "triplet commas")]
    #[test_case("21,31,41", "#151F29" ; "triplet commas no spaces")]
    #[test_case("21 31 41", "#151F29" ; "triplet spaces")]
    #[test_case("21，31，41", "#151F29" ; "triplet full width commas")]
    #[test_case("  #1AF  ", "rgb(17, 170, 255)" ; "surrounding whitespace")]
    fn test_convert_output(input: &str, expected: &str) {
        let result = convert(input).unwrap();
        assert_eq2!(result.output, expected);
        assert_eq2!(result.copy_text, expected);
    }

    #[test_case("" ; "empty")]
    #[test_case("   \t\n" ; "whitespace only")]
    #[test_case("#12" ; "invalid hex length")]
    #[test_case("rgb(300,0,0)" ; "out of range rgb")]
    #[test_case("300, 0, 0" ; "out of range triplet")]
    #[test_case("red" ; "named color")]
    #[test_case("hsl(0, 100%, 50%)" ; "hsl")]
    #[test_case("#1a2b3c80" ; "alpha")]
    fn test_convert_no_match(input: &str) {
        assert_eq2!(convert(input), None);
    }

    #[test]
    fn test_hex_result_fields() {
        let result = convert(" #1AF ").unwrap();
        assert_eq2!(
            result,
            ConversionResult {
                source_format: ColorFormat::Hex,
                kind: ConversionKind::HexToRgb,
                input: "#1AF".to_string(),
                output: "rgb(17, 170, 255)".to_string(),
                label: "HEX → RGB: #1AF".to_string(),
                triplet: RgbTriplet::from_u8(17, 170, 255),
                copy_text: "rgb(17, 170, 255)".to_string(),
            }
        );
    }

    #[test]
    fn test_rgb_result_fields() {
        let result = convert("21 31 41").unwrap();
        assert_eq2!(result.source_format, ColorFormat::BareTriplet);
        assert_eq2!(result.kind, ConversionKind::RgbToHex);
        assert_eq2!(result.label, "RGB → HEX: 21 31 41");
        assert_eq2!(result.triplet, RgbTriplet::from_u8(21, 31, 41));
    }

    #[test]
    fn test_functional_rgb_is_not_read_as_triplet() {
        let result = convert("rgb(1,2,3)").unwrap();
        assert_eq2!(result.source_format, ColorFormat::RgbFunction);
    }

    #[test]
    fn test_hex_takes_precedence() {
        // Six decimal digits are also valid hex digits.
        let result = convert("112233").unwrap();
        assert_eq2!(result.source_format, ColorFormat::Hex);
        assert_eq2!(result.output, "rgb(17, 34, 51)");

        // Three decimal digits are the hex shorthand.
        let result = convert("123").unwrap();
        assert_eq2!(result.source_format, ColorFormat::Hex);
        assert_eq2!(result.output, "rgb(17, 34, 51)");
    }

    #[test]
    fn test_parsers_are_in_priority_order() {
        let order: Vec<ColorFormat> = PARSERS.iter().map(|(format, _)| *format).collect();
        assert_eq2!(order, ColorFormat::iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_round_trip_through_hex() {
        for red in (0..=255_u8).step_by(15) {
            for green in (0..=255_u8).step_by(17) {
                for blue in [0, 1, 127, 128, 254, 255] {
                    let hex = convert_to_hex(red, green, blue);
                    let result = convert(&hex).unwrap();
                    assert_eq2!(result.triplet, RgbTriplet::from_u8(red, green, blue));
                    assert_eq2!(
                        result.output,
                        format!("rgb({red}, {green}, {blue})")
                    );

                    let back = convert(&result.output).unwrap();
                    assert_eq2!(back.output, hex);
                }
            }
        }
    }

    #[test]
    fn test_try_convert() {
        assert_eq2!(try_convert("#fff").unwrap().output, "rgb(255, 255, 255)");

        let report = try_convert("  nope ").unwrap_err();
        assert_eq2!(
            report.downcast_ref::<ColorConvertError>(),
            Some(&ColorConvertError::NoMatch {
                input: "nope".to_string()
            })
        );
    }

    #[test]
    fn test_convert_all() {
        let results = convert_all(["#000", "", "0 0 0"]);
        assert_eq2!(results.len(), 3);
        assert_eq2!(results[0].as_ref().unwrap().output, "rgb(0, 0, 0)");
        assert_eq2!(results[1], None);
        assert_eq2!(results[2].as_ref().unwrap().output, "#000000");
    }
}

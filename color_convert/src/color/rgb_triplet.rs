// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! One decoded color, regardless of the text format it came from.

use std::fmt::{Display, Formatter, Result};

use serde::Serialize;

/// Three channels, each in `[0, 255]`. The `u8` fields make an out of range channel
/// impossible to represent, so the only way to build one from text is through a
/// validating constructor like [`RgbTriplet::try_from_channel_strs`].
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug, Serialize)]
pub struct RgbTriplet {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl From<(u8, u8, u8)> for RgbTriplet {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

/// Decompose a 24-bit value: red = bits 16..=23, green = bits 8..=15, blue = bits 0..=7.
/// Anything above bit 23 is ignored.
impl From<u32> for RgbTriplet {
    fn from(value: u32) -> Self {
        let [_, red, green, blue] = value.to_be_bytes();
        Self { red, green, blue }
    }
}

impl RgbTriplet {
    #[must_use]
    pub fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

    /// Each of the three strings must be a run of ASCII decimal digits whose value is in
    /// `[0, 255]`. Leading zeros are fine (`"007"`), signs are not. If any channel fails,
    /// no triplet is built (no clamping).
    #[must_use]
    pub fn try_from_channel_strs(red: &str, green: &str, blue: &str) -> Option<Self> {
        Some(Self {
            red: parse_channel(red)?,
            green: parse_channel(green)?,
            blue: parse_channel(blue)?,
        })
    }

    /// `#RRGGBB`, uppercase, always 6 digits. Never compressed to `#RGB`.
    #[must_use]
    pub fn as_hex_string(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// `rgb(R, G, B)` w/ decimal channel values.
    #[must_use]
    pub fn as_rgb_fn_string(&self) -> String {
        format!("rgb({}, {}, {})", self.red, self.green, self.blue)
    }

    #[must_use]
    pub fn as_u32(&self) -> u32 {
        u32::from_be_bytes([0, self.red, self.green, self.blue])
    }
}

impl Display for RgbTriplet {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", self.as_rgb_fn_string()) }
}

/// Format three channel values as `#RRGGBB`.
#[must_use]
pub fn convert_to_hex(red: u8, green: u8, blue: u8) -> String {
    RgbTriplet::from_u8(red, green, blue).as_hex_string()
}

/// `u8::from_str` alone would also accept a leading `+`, so digits are checked first.
/// Overflow (`"256"`, `"99999999999"`) is rejected by the parse itself.
fn parse_channel(input: &str) -> Option<u8> {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    input.parse::<u8>().ok()
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_new() {
        let value = RgbTriplet::from_u8(1, 2, 3);
        assert_eq2!((value.red, value.green, value.blue), (1, 2, 3));
        assert_eq2!(RgbTriplet::from((1, 2, 3)), value);
    }

    #[test_case(0x1A2B3C, (26, 43, 60))]
    #[test_case(0xFFFFFF, (255, 255, 255))]
    #[test_case(0x000000, (0, 0, 0))]
    #[test_case(0xFF00_0080, (0, 0, 128))]
    fn test_from_u32(value: u32, expected: (u8, u8, u8)) {
        assert_eq2!(RgbTriplet::from(value), RgbTriplet::from(expected));
    }

    #[test]
    fn test_as_u32() {
        assert_eq2!(RgbTriplet::from_u8(26, 43, 60).as_u32(), 0x1A2B3C);
    }

    #[test_case("0", "128", "255", Some((0, 128, 255)) ; "in range")]
    #[test_case("007", "08", "9", Some((7, 8, 9)) ; "leading zeros")]
    #[test_case("256", "0", "0", None ; "overflow by one")]
    #[test_case("0", "-1", "0", None ; "negative")]
    #[test_case("+1", "2", "3", None ; "plus sign")]
    #[test_case("1", "", "3", None ; "empty channel")]
    #[test_case("1", "2", "3a", None ; "non digit")]
    #[test_case("99999999999999999999", "0", "0", None ; "huge number")]
    fn test_try_from_channel_strs(
        red: &str,
        green: &str,
        blue: &str,
        expected: Option<(u8, u8, u8)>,
    ) {
        assert_eq2!(
            RgbTriplet::try_from_channel_strs(red, green, blue),
            expected.map(RgbTriplet::from)
        );
    }

    #[test]
    fn test_as_hex_string_is_uppercase_and_padded() {
        assert_eq2!(RgbTriplet::from_u8(21, 31, 41).as_hex_string(), "#151F29");
        assert_eq2!(RgbTriplet::from_u8(0, 10, 255).as_hex_string(), "#000AFF");
        // No shorthand, even when it would be possible.
        assert_eq2!(RgbTriplet::from_u8(17, 34, 51).as_hex_string(), "#112233");
    }

    #[test]
    fn test_as_rgb_fn_string() {
        let value = RgbTriplet::from_u8(17, 170, 255);
        assert_eq2!(value.as_rgb_fn_string(), "rgb(17, 170, 255)");
        assert_eq2!(value.to_string(), "rgb(17, 170, 255)");
    }

    #[test]
    fn test_convert_to_hex() {
        assert_eq2!(convert_to_hex(26, 43, 60), "#1A2B3C");
    }
}

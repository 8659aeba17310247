// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Parser for a bare triplet: three decimal numbers w/ no surrounding syntax.
//!
//! | input          | output          |
//! | -------------- | --------------- |
//! | `21, 31, 41`   | `(21, 31, 41)`  |
//! | `21 31 41`     | `(21, 31, 41)`  |
//! | `21，31，41`   | `(21, 31, 41)`  |
//! | `21 ,\t31  41` | `(21, 31, 41)`  |
//!
//! A separator is one or more chars, in any mix, of: ASCII comma, full width comma
//! (`U+FF0C`), and any Unicode whitespace (this includes the ideographic space
//! `U+3000`). Other CJK punctuation, like the ideographic comma `、` (`U+3001`), is not a
//! separator.

use nom::{IResult, Parser,
          bytes::complete::take_while1,
          character::complete::digit1,
          combinator::{all_consuming, map_opt}};

use crate::RgbTriplet;

const COMMA: char = ',';
const FULL_WIDTH_COMMA: char = '，';

/// # Errors
///
/// Returns a nom parsing error if the input does not start w/ three separated decimal
/// numbers, or if any of them is out of range.
pub fn parse_bare_triplet(input: &str) -> IResult<&str, RgbTriplet> {
    map_opt(
        (digit1, separator1, digit1, separator1, digit1),
        |(red, _, green, _, blue)| RgbTriplet::try_from_channel_strs(red, green, blue),
    )
    .parse(input)
}

/// Returns [`Some`] only if the trimmed input is exactly three in range numbers w/
/// separators between them. A leading or trailing separator (eg: `,1,2,3`) yields an
/// empty segment, so it does not match.
#[must_use]
pub fn try_parse_bare_triplet(input: &str) -> Option<RgbTriplet> {
    all_consuming(parse_bare_triplet)
        .parse(input.trim())
        .ok()
        .map(|(_, color)| color)
}

#[must_use]
pub fn is_separator(c: char) -> bool {
    c == COMMA || c == FULL_WIDTH_COMMA || c.is_whitespace()
}

fn separator1(input: &str) -> IResult<&str, &str> {
    take_while1(is_separator).parse(input)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case("21,31,41" ; "ascii commas")]
    #[test_case("21, 31, 41" ; "ascii commas w spaces")]
    #[test_case("21 31 41" ; "spaces")]
    #[test_case("21，31，41" ; "full width commas")]
    #[test_case("21 ，31\t,, 41" ; "mixed run")]
    #[test_case("21\u{3000}31\u{3000}41" ; "ideographic space")]
    #[test_case("  21, 31, 41\n" ; "surrounding whitespace")]
    #[test_case("021, 031, 041" ; "leading zeros")]
    fn test_try_parse_bare_triplet_valid(input: &str) {
        assert_eq2!(
            try_parse_bare_triplet(input),
            Some(RgbTriplet::from_u8(21, 31, 41))
        );
    }

    #[test_case("21, 31" ; "two segments")]
    #[test_case("21, 31, 41, 51" ; "four segments")]
    #[test_case(",21, 31, 41" ; "leading separator")]
    #[test_case("21, 31, 41," ; "trailing separator")]
    #[test_case("21, 31, 256" ; "out of range")]
    #[test_case("21, -31, 41" ; "negative")]
    #[test_case("21, 3a, 41" ; "non numeric")]
    #[test_case("21、31、41" ; "ideographic comma")]
    #[test_case("21;31;41" ; "semicolons")]
    #[test_case("rgb(1, 2, 3)" ; "functional rgb")]
    #[test_case("" ; "empty")]
    #[test_case("   " ; "whitespace only")]
    fn test_try_parse_bare_triplet_invalid(input: &str) {
        assert_eq2!(try_parse_bare_triplet(input), None);
    }

    #[test]
    fn test_is_separator() {
        assert!(is_separator(','));
        assert!(is_separator('，'));
        assert!(is_separator(' '));
        assert!(is_separator('\t'));
        assert!(!is_separator('、'));
        assert!(!is_separator(';'));
    }
}

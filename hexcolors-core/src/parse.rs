use std::borrow::Cow;
use std::str::FromStr;

use nom::character::complete::hex_digit1;
use nom::combinator::all_consuming;
use nom::{IResult, Parser};

use crate::color::Rgba;
use crate::error::Error;

/// Literal as it appears in source code, before normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorLiteral<'a> {
    /// String literal, expected to start with `#`.
    String(&'a str),
    /// Integer literal text, expected to start with `0x`.
    Integer(&'a str),
}

impl<'a> ColorLiteral<'a> {
    /// Coerce the literal into its `#`-prefixed form.
    pub fn normalize(&self) -> Result<Cow<'a, str>, Error> {
        match *self {
            ColorLiteral::String(text) => Ok(Cow::Borrowed(text)),
            ColorLiteral::Integer(text) => match text.strip_prefix("0x") {
                Some(digits) => Ok(Cow::Owned(format!("#{digits}"))),
                None => {
                    tracing::trace!(literal = text, "integer literal is not hexadecimal");
                    Err(Error::integer_literal_must_be_hexadecimal(text))
                }
            },
        }
    }

    pub fn parse(&self) -> Result<Rgba, Error> {
        let text = self.normalize()?;
        parse_hex_color(&text)
    }
}

/// Fixed-width hex encodings, selected by the number of digits after `#`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexFormat {
    Rgb,
    Rgba,
    RrGgBb,
    RrGgBbAa,
}

impl HexFormat {
    pub fn from_digit_count(count: usize) -> Option<HexFormat> {
        match count {
            3 => Some(HexFormat::Rgb),
            4 => Some(HexFormat::Rgba),
            6 => Some(HexFormat::RrGgBb),
            8 => Some(HexFormat::RrGgBbAa),
            _ => None,
        }
    }

    pub fn digit_count(self) -> usize {
        match self {
            HexFormat::Rgb => 3,
            HexFormat::Rgba => 4,
            HexFormat::RrGgBb => 6,
            HexFormat::RrGgBbAa => 8,
        }
    }

    /// Extract the normalized channels from the decoded digits.
    pub fn channels(self, value: u32) -> Rgba {
        match self {
            HexFormat::Rgb => Rgba::new(
                doubled_nibble(value >> 8),
                doubled_nibble(value >> 4),
                doubled_nibble(value),
                1.0,
            ),
            HexFormat::Rgba => Rgba::new(
                doubled_nibble(value >> 12),
                doubled_nibble(value >> 8),
                doubled_nibble(value >> 4),
                doubled_nibble(value),
            ),
            HexFormat::RrGgBb => Rgba::new(
                byte(value >> 16),
                byte(value >> 8),
                byte(value),
                1.0,
            ),
            HexFormat::RrGgBbAa => Rgba::new(
                byte(value >> 24),
                byte(value >> 16),
                byte(value >> 8),
                byte(value),
            ),
        }
    }
}

// X -> XX, so that "f" is exactly 1.0
fn doubled_nibble(value: u32) -> f64 {
    let n = f64::from(value & 0xf);
    (n * 16.0 + n) / 255.0
}

fn byte(value: u32) -> f64 {
    f64::from(value & 0xff) / 255.0
}

fn hex_digits(text: &str) -> IResult<&str, &str> {
    all_consuming(hex_digit1).parse(text)
}

fn scan_hex(digits: &str) -> Option<u32> {
    let (_, digits) = hex_digits(digits).ok()?;
    u32::from_str_radix(digits, 16).ok()
}

/// Parse a `#`-prefixed hex color.
///
/// Accepted forms are `#RGB`, `#RGBA`, `#RRGGBB` and `#RRGGBBAA`, case-insensitive.
/// The checks run in a fixed order and the first failing one determines the error:
/// prefix, characters, length, decoding.
pub fn parse_hex_color(input: &str) -> Result<Rgba, Error> {
    let Some(body) = input.strip_prefix('#') else {
        tracing::trace!(literal = input, "missing # prefix");
        return Err(Error::string_literal_must_start_with_hashtag(input));
    };

    if !body.chars().all(|c| c.is_ascii_hexdigit()) {
        tracing::trace!(literal = input, "invalid hex characters");
        return Err(Error::invalid_characters(input));
    }

    // Only ASCII is left, so the byte length is the digit count.
    let Some(format) = HexFormat::from_digit_count(body.len()) else {
        tracing::trace!(literal = input, digits = body.len(), "unsupported length");
        return Err(Error::invalid_length(input));
    };

    let value = scan_hex(body).ok_or_else(|| Error::failed_to_scan_hex(input))?;
    Ok(format.channels(value))
}

/// Parse the text of an integer literal such as `0xFFF`.
pub fn parse_integer_literal(text: &str) -> Result<Rgba, Error> {
    ColorLiteral::Integer(text).parse()
}

impl FromStr for Rgba {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex_color(s)
    }
}

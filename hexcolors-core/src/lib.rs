//!
//! # Hexcolors Core
//!
//! Hexcolors core turns hexadecimal color literals into normalized colors.
//! It is used at compile time by the macros in `hexcolors_macro` and can be used at runtime directly.
//!
//! ```
//! use hexcolors_core::parse::parse_hex_color;
//!
//! let color = parse_hex_color("#DE3163FA").unwrap();
//! assert_eq!(color.red, 222.0 / 255.0);
//! assert_eq!(color.alpha, 250.0 / 255.0);
//! ```
//!
//! ## Glossary
//!
//! **[Literal](crate::parse::ColorLiteral)** - a constant written directly in source code.
//! Two kinds are accepted: a string starting with `#` (e.g. `"#FFF"`) and an integer literal
//! starting with `0x` (e.g. `0xFFF`). Integer literals are rewritten to the `#` form before
//! they are validated, so both kinds share the same [parser](crate::parse::parse_hex_color).
//!
//! **[Format](crate::parse::HexFormat)** - one of the four fixed-width encodings:
//! `#RGB`, `#RGBA`, `#RRGGBB` and `#RRGGBBAA`. The format is chosen by the number of digits.
//!
//! **Channel** - red, green, blue or alpha. Channels of a [color](crate::color::Rgba)
//! are `f64` values in `[0, 1]`.
//!
//! **Nibble** - a single hex digit (4 bits).
//!
//! **Digit-doubling** - the short formats expand every digit `X` to the byte `XX` (`X*16+X`),
//! so `#F80` is the same color as `#FF8800`.
//!
//! **[Error](crate::error::Error)** - every rejected literal results in one of five errors,
//! each carrying the offending literal. Parsing never panics.
extern crate serde;
#[macro_use]
extern crate serde_derive;

pub mod color;
pub mod error;
pub mod parse;

pub use color::Rgba;
pub use error::{Error, ErrorType};
pub use parse::{parse_hex_color, parse_integer_literal, ColorLiteral, HexFormat};

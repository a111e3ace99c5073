use std::fmt::Display;

use hexcolors_core::color::Rgba;
use hexcolors_core::parse::ColorLiteral;
use proc_macro::TokenStream;
use proc_macro2::Literal;
use quote::{quote, ToTokens};
use syn::parse::{Parse, ParseStream};
use syn::{parse_macro_input, Lit};

/// Literal argument of a color macro.
struct HexLiteral {
    lit: Lit,
    text: String,
    is_integer: bool,
}

impl HexLiteral {
    fn color_literal(&self) -> ColorLiteral<'_> {
        if self.is_integer {
            ColorLiteral::Integer(&self.text)
        } else {
            ColorLiteral::String(&self.text)
        }
    }

    fn parse_color(&self) -> syn::Result<Rgba> {
        self.color_literal()
            .parse()
            .map_err(|e| syn::Error::new_spanned(&self.lit, e))
    }
}

impl Display for HexLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_integer {
            write!(f, "{}", self.text)
        } else {
            write!(f, "{:?}", self.text)
        }
    }
}

impl Parse for HexLiteral {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lit: Lit = input
            .parse()
            .map_err(|e| syn::Error::new(e.span(), "expected a string or integer literal"))?;
        let hex = match &lit {
            Lit::Str(s) => HexLiteral {
                text: s.value(),
                lit: lit.clone(),
                is_integer: false,
            },
            Lit::Int(i) => {
                let repr = i.to_string();
                let text = repr
                    .strip_suffix(i.suffix())
                    .unwrap_or(&repr)
                    .to_owned();
                HexLiteral {
                    text,
                    lit: lit.clone(),
                    is_integer: true,
                }
            }
            other => {
                return Err(syn::Error::new_spanned(
                    other,
                    "expected a string or integer literal",
                ))
            }
        };
        if !input.is_empty() {
            return Err(input.error("expected a single literal"));
        }
        Ok(hex)
    }
}

/// What a color macro expands to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorTarget {
    Rgba,
    Tuple,
    Array,
    F32Array,
}

struct ColorExpansion {
    color: Rgba,
    target: ColorTarget,
}

impl ToTokens for ColorExpansion {
    fn to_tokens(&self, tokens: &mut proc_macro2::TokenStream) {
        let [r, g, b, a] = self.color.into_array();
        let (r, g, b, a) = (f64_lit(r), f64_lit(g), f64_lit(b), f64_lit(a));
        match self.target {
            ColorTarget::Rgba => tokens.extend(quote! {
                ::hexcolors_core::color::Rgba::new(#r, #g, #b, #a)
            }),
            ColorTarget::Tuple => tokens.extend(quote! {
                (#r, #g, #b, #a)
            }),
            ColorTarget::Array => tokens.extend(quote! {
                [#r, #g, #b, #a]
            }),
            ColorTarget::F32Array => {
                let [r, g, b, a] = self.color.into_f32_array().map(Literal::f32_suffixed);
                tokens.extend(quote! {
                    [#r, #g, #b, #a]
                })
            }
        }
    }
}

fn f64_lit(value: f64) -> Literal {
    Literal::f64_suffixed(value)
}

fn expand(hex: &HexLiteral, target: ColorTarget) -> proc_macro2::TokenStream {
    match hex.parse_color() {
        Ok(color) => ColorExpansion { color, target }.into_token_stream(),
        Err(e) => e.to_compile_error(),
    }
}

fn expand_hex_int(hex: &HexLiteral) -> proc_macro2::TokenStream {
    if !hex.is_integer {
        return syn::Error::new_spanned(&hex.lit, "expected a hexadecimal integer literal")
            .to_compile_error();
    }
    expand(hex, ColorTarget::Rgba)
}

/// Expands to a `hexcolors_core::color::Rgba` built from a hex color literal.
///
/// ```ignore
/// const WHITE: Rgba = color!("#FFF");
/// const GREEN: Rgba = color!(0x00FF00);
/// ```
#[proc_macro]
pub fn color(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as HexLiteral);
    expand(&input, ColorTarget::Rgba).into()
}

/// Expands to an `(f64, f64, f64, f64)` tuple.
#[proc_macro]
pub fn color_tuple(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as HexLiteral);
    expand(&input, ColorTarget::Tuple).into()
}

/// Expands to an `[f64; 4]` array.
#[proc_macro]
pub fn color_array(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as HexLiteral);
    expand(&input, ColorTarget::Array).into()
}

/// Expands to an `[f32; 4]` array.
#[proc_macro]
pub fn color_f32(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as HexLiteral);
    expand(&input, ColorTarget::F32Array).into()
}

/// Like `color!`, but only accepts `0x` integer literals.
#[proc_macro]
pub fn hex_int_color(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as HexLiteral);
    expand_hex_int(&input).into()
}

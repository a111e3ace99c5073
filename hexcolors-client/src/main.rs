use std::process::ExitCode;

use hexcolors_core::color::Rgba;
use hexcolors_core::parse::ColorLiteral;
use hexcolors_macro::{color, color_f32, hex_int_color};
use tracing_subscriber::EnvFilter;

const BLACK: Rgba = color!(0x000);
const WHITE: Rgba = color!("#ffffff");
const RED: Rgba = color!("#F00");
const GREEN: Rgba = hex_int_color!(0x00FF00);
const BLUE: [f32; 4] = color_f32!("#00F");

fn literal(arg: &str) -> ColorLiteral<'_> {
    if arg.starts_with("0x") {
        ColorLiteral::Integer(arg)
    } else {
        ColorLiteral::String(arg)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        for (name, c) in [("black", BLACK), ("white", WHITE), ("red", RED), ("green", GREEN)] {
            println!("{name:>6}: {} {}", c.to_hex(), c);
        }
        println!("{:>6}: {:?}", "blue", BLUE);
        return ExitCode::SUCCESS;
    }

    let mut failed = 0;
    for arg in &args {
        match literal(arg).parse() {
            Ok(c) => match serde_json::to_string(&c) {
                Ok(json) => println!("{arg}: {json}"),
                Err(e) => {
                    tracing::error!(literal = %arg, "Failed to serialize color: {}", e);
                    failed += 1;
                }
            },
            Err(e) => {
                tracing::error!(literal = %arg, kind = ?e.error_type(), "{}", e);
                failed += 1;
            }
        }
    }
    tracing::info!(total = args.len(), failed, "parsed color literals");

    if failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

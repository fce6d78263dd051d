//! Library half of the numera CLI: argument handling, style-name
//! resolution, locale snapshot loading, and the report printers. The
//! binary in `main.rs` is a thin wrapper around [`run`] so the command
//! logic stays testable.

use std::sync::Once;

use numera::{
    try_parse_f32, try_parse_f64, try_parse_i32, try_parse_i64, try_parse_u32, try_parse_u64,
    NumberStyles, ParsingStatus,
};
use numera_format::NumberFormat;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing exactly once, and only when `RUST_LOG` asks for it.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Run the CLI against raw argv. Returns the process exit code: `0` for a
/// successful parse, `1` for a usage error, `2` when the parse itself
/// reports `failed` or `overflow`.
pub fn run(args: &[String]) -> i32 {
    init_tracing();

    if args.len() < 2 {
        print_usage();
        return 1;
    }

    match args[1].as_str() {
        "parse" => cmd_parse(&args[2..]),
        "styles" => {
            print_styles();
            0
        }
        "help" | "--help" | "-h" => {
            print_usage();
            0
        }
        other => {
            eprintln!("error: unknown command `{other}`");
            print_usage();
            1
        }
    }
}

fn print_usage() {
    eprintln!("Usage: numera <command> [arguments]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  parse <type> <text> [options]   Parse text as i32, i64, u32, u64, f32, or f64");
    eprintln!("  styles                          List recognized style names");
    eprintln!("  help                            Show this message");
    eprintln!();
    eprintln!("Parse options:");
    eprintln!("  --styles=<name,...>   Style set (default: Integer for integers, Float for floats)");
    eprintln!("  --format=<file.json>  Locale snapshot overriding the invariant format");
}

fn cmd_parse(args: &[String]) -> i32 {
    if args.is_empty() {
        eprintln!("Usage: numera parse <type> <text> [--styles=<name,...>] [--format=<file.json>]");
        return 1;
    }

    let target = args[0].as_str();
    let mut text: Option<&str> = None;
    let mut styles: Option<NumberStyles> = None;
    let mut fmt = NumberFormat::INVARIANT;

    for arg in &args[1..] {
        if let Some(names) = arg.strip_prefix("--styles=") {
            match parse_style_names(names) {
                Ok(parsed) => styles = Some(parsed),
                Err(name) => {
                    eprintln!("error: unknown style `{name}` (run `numera styles` for the list)");
                    return 1;
                }
            }
        } else if let Some(path) = arg.strip_prefix("--format=") {
            fmt = match load_format(path) {
                Ok(loaded) => loaded,
                Err(message) => {
                    eprintln!("error: {message}");
                    return 1;
                }
            };
        } else if text.is_none() {
            text = Some(arg);
        } else {
            eprintln!("error: unexpected argument `{arg}`");
            return 1;
        }
    }

    let Some(text) = text else {
        eprintln!("error: missing text to parse");
        return 1;
    };

    let is_float = matches!(target, "f32" | "f64");
    let styles = styles.unwrap_or(if is_float {
        NumberStyles::FLOAT
    } else {
        NumberStyles::INTEGER
    });
    tracing::debug!(ty = target, ?styles, text, "parsing");

    match target {
        "i32" => report(try_parse_i32(text, styles, &fmt)),
        "i64" => report(try_parse_i64(text, styles, &fmt)),
        "u32" => report(try_parse_u32(text, styles, &fmt)),
        "u64" => report(try_parse_u64(text, styles, &fmt)),
        "f32" => {
            let (status, value) = try_parse_f32(text, styles, &fmt);
            report_status(status, || {
                println!("value: {value}");
                println!("bits: 0x{:08X}", value.to_bits());
            })
        }
        "f64" => {
            let (status, value) = try_parse_f64(text, styles, &fmt);
            report_status(status, || {
                println!("value: {value}");
                println!("bits: 0x{:016X}", value.to_bits());
            })
        }
        other => {
            eprintln!("error: unknown target type `{other}` (expected i32, i64, u32, u64, f32, f64)");
            1
        }
    }
}

fn report<T: std::fmt::Display>((status, value): (ParsingStatus, T)) -> i32 {
    report_status(status, || println!("value: {value}"))
}

fn report_status(status: ParsingStatus, print_value: impl FnOnce()) -> i32 {
    println!("status: {status}");
    if status.is_ok() {
        print_value();
        0
    } else {
        2
    }
}

/// Load a [`NumberFormat`] snapshot from a JSON file. Missing fields fall
/// back to their invariant values.
fn load_format(path: &str) -> Result<NumberFormat, String> {
    let text =
        std::fs::read_to_string(path).map_err(|err| format!("cannot read {path}: {err}"))?;
    serde_json::from_str(&text).map_err(|err| format!("invalid format file {path}: {err}"))
}

/// Resolve a comma-separated style-name list. Returns the first unknown
/// name on failure.
fn parse_style_names(names: &str) -> Result<NumberStyles, String> {
    let mut styles = NumberStyles::NONE;
    for name in names.split(',').map(str::trim).filter(|name| !name.is_empty()) {
        styles |= style_by_name(name).ok_or_else(|| name.to_string())?;
    }
    Ok(styles)
}

const STYLE_NAMES: &[(&str, NumberStyles)] = &[
    ("None", NumberStyles::NONE),
    ("AllowLeadingWhite", NumberStyles::ALLOW_LEADING_WHITE),
    ("AllowTrailingWhite", NumberStyles::ALLOW_TRAILING_WHITE),
    ("AllowLeadingSign", NumberStyles::ALLOW_LEADING_SIGN),
    ("AllowTrailingSign", NumberStyles::ALLOW_TRAILING_SIGN),
    ("AllowParentheses", NumberStyles::ALLOW_PARENTHESES),
    ("AllowDecimalPoint", NumberStyles::ALLOW_DECIMAL_POINT),
    ("AllowThousands", NumberStyles::ALLOW_THOUSANDS),
    ("AllowExponent", NumberStyles::ALLOW_EXPONENT),
    ("AllowCurrencySymbol", NumberStyles::ALLOW_CURRENCY_SYMBOL),
    ("AllowHexSpecifier", NumberStyles::ALLOW_HEX_SPECIFIER),
    ("AllowTypeSpecifier", NumberStyles::ALLOW_TYPE_SPECIFIER),
    ("Integer", NumberStyles::INTEGER),
    ("Float", NumberStyles::FLOAT),
    ("Number", NumberStyles::NUMBER),
    ("HexNumber", NumberStyles::HEX_NUMBER),
    ("HexFloat", NumberStyles::HEX_FLOAT),
    ("Currency", NumberStyles::CURRENCY),
    ("Any", NumberStyles::ANY),
];

fn style_by_name(name: &str) -> Option<NumberStyles> {
    STYLE_NAMES
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
        .map(|&(_, styles)| styles)
}

fn print_styles() {
    println!("Style names (case-insensitive, combine with commas):");
    for (name, _) in STYLE_NAMES {
        println!("  {name}");
    }
}

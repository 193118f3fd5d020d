//! Lumen CLI - WCAG contrast checker.
//!
//! This CLI provides a `lumen` command that computes the WCAG contrast
//! ratio between two colors and grades it against the AA/AAA conformance
//! thresholds.

mod report;

use clap::Parser;
use lumen_core::{Grade, Rgb, contrast};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Lumen CLI - WCAG contrast checker
///
/// Computes the WCAG contrast ratio between two colors, each given as a
/// 6-digit hex code (optionally prefixed with `#` or `0x`) or as a
/// comma-separated decimal triplet such as `255,0,128`.
#[derive(Parser, Debug)]
#[command(
    name = "lumen",
    author,
    version,
    about = "Lumen - WCAG contrast checker",
    long_about = "Computes the WCAG contrast ratio between two colors.\nAccepts RRGGBB hex (optionally #- or 0x-prefixed) and R,G,B decimal color tokens."
)]
struct Args {
    /// First color (RRGGBB hex or R,G,B decimal)
    color1: String,

    /// Second color (RRGGBB hex or R,G,B decimal)
    color2: String,

    /// Output the report as JSON
    #[arg(long)]
    json: bool,

    /// Grade the verdict against the large-text thresholds
    #[arg(long)]
    large_text: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber =
        FmtSubscriber::builder().with_max_level(level).without_time().with_target(false).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Parse both tokens before computing anything, so the first bad token is
    // the one reported. Messages go to stdout; malformed input exits non-zero.
    let color1 = match Rgb::parse(&args.color1) {
        Ok(color) => color,
        Err(e) => {
            println!("{e}");
            std::process::exit(1);
        }
    };
    let color2 = match Rgb::parse(&args.color2) {
        Ok(color) => color,
        Err(e) => {
            println!("{e}");
            std::process::exit(1);
        }
    };

    let ratio = contrast(color1, color2);
    let grade = Grade::evaluate(ratio);

    if args.json {
        report::print_json(color1, color2, ratio, grade)?;
    } else {
        report::print_human(color1, color2, ratio, grade, args.large_text);
    }

    Ok(())
}

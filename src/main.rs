//! scan-report CLI
//!
//! Linear pipeline: resolve path → open read-only → list tables → check
//! saved_scans → count rows → top duplicates → close.
//!
//! Query failures are printed to stderr and never change the exit status;
//! only argument errors exit non-zero.

use scan_report::cli::{self, parse_args};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let parsed = match parse_args(args) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(cli::EXIT_USAGE);
        }
    };

    if parsed.show_version {
        println!("scan-report v0.1.0");
        return;
    }

    if parsed.show_help {
        print_help();
        return;
    }

    init_tracing();

    let code = cli::run(parsed);
    std::process::exit(code);
}

/// Diagnostic events go to stderr so the report on stdout stays clean.
/// Silent unless RUST_LOG is set.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

/// Print help message
fn print_help() {
    println!("scan-report v0.1.0 - Scan Database Diagnostics");
    println!();
    println!("USAGE:");
    println!("    scan-report [options]");
    println!();
    println!("OPTIONS:");
    println!("    --db-path <path>    Database file to inspect");
    println!("                        (default: '../Barcode generator&Scanner/barcodes.db'");
    println!("                         relative to the executable)");
    println!("    --json              Output one JSON object instead of text");
    println!("    --version           Show version information");
    println!("    --help              Show this help message");
    println!();
    println!("ENVIRONMENT:");
    println!("    SCAN_REPORT_DB      Database file to inspect (--db-path wins)");
    println!("    RUST_LOG            Diagnostic log filter (e.g. debug)");
}

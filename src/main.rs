use std::process;

use recho::cli;
use recho::usage::USAGE_LINE;

fn main() {
    // Initialize tracing (use RUST_LOG env var to control output)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let tokens = std::env::args_os().skip(1);

    if let Err(e) = cli::run(tokens) {
        eprintln!("{USAGE_LINE}");
        eprintln!("recho: error: {e}");
        process::exit(e.exit_code());
    }
}

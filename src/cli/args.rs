//! CLI argument parsing and configuration.

use std::io;
use std::path::PathBuf;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration from CLI arguments
pub struct CliConfig {
    /// Content document to load instead of the embedded default
    pub content_path: Option<PathBuf>,
    /// Watch the content file and live-reload on change
    pub watch: bool,
}

/// Print usage information
pub fn print_usage() {
    eprintln!("folio-tui - Interactive terminal portfolio");
    eprintln!();
    eprintln!("Usage: folio-tui [content-file] [OPTIONS]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [content-file]  Path to a portfolio content JSON document");
    eprintln!("                  If omitted, the embedded default content is used");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --no-watch      Do not live-reload the content file on change");
    eprintln!("  -h, --help      Show this help message");
    eprintln!("  -V, --version   Show version");
    eprintln!();
    eprintln!("Contact relay configuration (optional):");
    eprintln!("  FOLIO_RELAY_ACCESS_KEY   Form-relay access key");
    eprintln!("  FOLIO_RELAY_TO_EMAIL     Destination email address");
    eprintln!("  FOLIO_RELAY_ENDPOINT     Relay endpoint override");
    eprintln!("  or <config-dir>/folio/relay.json");
}

/// Parse CLI arguments and return configuration
pub fn parse_args() -> io::Result<CliConfig> {
    let args: Vec<String> = std::env::args().collect();
    let mut content_path: Option<PathBuf> = None;
    let mut watch = true;

    let mut i = 1;
    while i < args.len() {
        let arg = &args[i];
        if arg == "-h" || arg == "--help" {
            print_usage();
            std::process::exit(0);
        } else if arg == "-V" || arg == "--version" {
            println!("folio-tui {}", VERSION);
            std::process::exit(0);
        } else if arg == "--no-watch" {
            watch = false;
            i += 1;
        } else if !arg.starts_with('-') {
            content_path = Some(PathBuf::from(arg));
            i += 1;
        } else {
            print_usage();
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Unknown argument: {}", arg),
            ));
        }
    }

    Ok(CliConfig {
        content_path,
        watch,
    })
}

//! Prodcode CLI - classify and validate product codes from the command line.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{classify, validate, CodeFormat};

#[derive(Parser)]
#[command(name = "prodcode")]
#[command(about = "Classify and validate UPC, EAN, ISBN, SKU and ASIN codes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect the format of each code
    Classify {
        /// Codes to classify (read from --input or stdin if none are given)
        codes: Vec<String>,
        /// File with one code per line
        #[arg(long)]
        input: Option<String>,
        /// Output as JSON lines
        #[arg(long)]
        json: bool,
        /// Exit with status 2 if any code is unrecognised
        #[arg(long)]
        strict: bool,
    },
    /// Check a code's check digit against one format
    Validate {
        /// Format to check against
        #[arg(value_enum)]
        format: CodeFormat,
        /// Code to check
        code: String,
        /// Parse the code as an integer and use the deprecated numeric check
        #[arg(long)]
        legacy: bool,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Classify {
            codes,
            input,
            json,
            strict,
        } => classify::run(codes, input, json, strict),
        Commands::Validate {
            format,
            code,
            legacy,
        } => validate::run(format, code, legacy),
    };

    match result {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

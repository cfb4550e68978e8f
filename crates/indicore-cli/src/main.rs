//! Indicore CLI - validate indicator values and export the type taxonomy.

use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{describe, fingerprint, list, validate};

#[derive(Parser)]
#[command(name = "indicore")]
#[command(about = "Indicator validation, canonicalization, and taxonomy export CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a value against a named indicator type
    Validate {
        /// Indicator type name (e.g. md5, domain, ip)
        #[arg(long = "type")]
        type_name: String,
        /// The raw value; parsed as a JSON scalar, falling back to text
        value: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one indicator type definition as JSON
    Describe {
        /// Indicator type name
        name: String,
    },
    /// List the indicator type catalogue
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Only show types with this data type identifier (e.g. "MD5")
        #[arg(long)]
        data_type: Option<String>,
    },
    /// Print the SHA3-256 fingerprint of a literal canonical string
    Fingerprint {
        /// The canonical string to fingerprint
        text: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate {
            type_name,
            value,
            json,
        } => validate::run(&type_name, &value, json),
        Commands::Describe { name } => describe::run(&name),
        Commands::List { json, data_type } => list::run(json, data_type.as_deref()),
        Commands::Fingerprint { text } => fingerprint::run(&text),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

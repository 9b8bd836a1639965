//! # Profiles Tool
//!
//! Manages saved calculator profiles from the command line.
//!
//! ## Usage
//! ```bash
//! # List saved profiles
//! cargo run -p rentobuy-store --bin profiles -- list
//!
//! # Save a profile (overwrites an existing one)
//! cargo run -p rentobuy-store --bin profiles -- save starter home_price=450k loan_term=30y
//!
//! # Show a profile with parsed previews
//! cargo run -p rentobuy-store --bin profiles -- show starter
//!
//! # Delete a profile
//! cargo run -p rentobuy-store --bin profiles -- delete starter
//!
//! # Use another directory
//! cargo run -p rentobuy-store --bin profiles -- --dir ./data/profiles list
//! ```
//!
//! ## Log Levels
//! - `RUST_LOG=debug` - Show debug messages
//! - Default: `info,rentobuy=debug`

use rentobuy_core::{
    format_currency, format_percent, parse_amount, parse_appreciation_rates, parse_duration,
};
use rentobuy_store::{ProfileStore, SavedProfile, StoreConfig};
use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Input field name fragments that hold year/month durations.
const DURATION_FIELDS: &[&str] = &["term", "duration", "horizon", "period"];

/// Input field name fragments that hold comma-separated yearly rates.
const RATE_LIST_FIELDS: &[&str] = &["appreciation", "rates"];

/// Input field name fragments that hold a single percentage.
const PERCENT_FIELDS: &[&str] = &["rate", "percent", "pct", "inflation", "return"];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    let mut dir: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut rest: Vec<String> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--dir" | "-d" => {
                if i + 1 < args.len() {
                    dir = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            other => rest.push(other.to_string()),
        }
        i += 1;
    }

    let mut config = StoreConfig::load_or_default(config_path);
    if let Some(dir) = dir {
        config.profiles_dir = dir;
    }
    debug!(profiles_dir = ?config.profiles_dir, "Using profiles directory");
    let store = ProfileStore::from_config(&config);

    let Some((command, params)) = rest.split_first() else {
        print_help();
        return Ok(());
    };

    match (command.as_str(), params) {
        ("list", []) => {
            let names = store.list()?;
            if names.is_empty() {
                println!("No saved profiles found.");
            }
            for (index, name) in names.iter().enumerate() {
                println!("  {}. {}", index + 1, name);
            }
        }
        ("show", [name]) => {
            let profile = store.load(name)?;
            print_profile(&profile);
        }
        ("save", [name, pairs @ ..]) => {
            let inputs = parse_pairs(pairs)?;
            let existed = store.exists(name);
            let profile = store.save(name, inputs)?;
            if existed {
                println!("Profile '{}' overwritten.", profile.name);
            } else {
                println!("Configuration saved as '{}'", profile.name);
            }
        }
        ("delete", [name]) => {
            store.delete(name)?;
            println!("Profile '{}' deleted.", name.trim());
        }
        _ => {
            eprintln!("Unknown command: {}", rest.join(" "));
            print_help();
            std::process::exit(2);
        }
    }

    Ok(())
}

fn print_help() {
    println!("Rentobuy Profiles");
    println!();
    println!("Usage: profiles [OPTIONS] <COMMAND>");
    println!();
    println!("Commands:");
    println!("  list                         List saved profiles");
    println!("  show <NAME>                  Show a profile's inputs");
    println!("  save <NAME> [KEY=VALUE]...   Save (or overwrite) a profile");
    println!("  delete <NAME>                Delete a profile");
    println!();
    println!("Options:");
    println!("  -d, --dir <PATH>      Profiles directory (default: .rentobuy_profiles)");
    println!("  -c, --config <PATH>   Config file (default: platform config dir/store.toml)");
    println!("  -h, --help            Show this help message");
}

/// Initializes the tracing subscriber for structured logging.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,rentobuy=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Splits `KEY=VALUE` arguments into an input map.
fn parse_pairs(pairs: &[String]) -> Result<BTreeMap<String, String>, String> {
    let mut inputs = BTreeMap::new();
    for pair in pairs {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| format!("Expected KEY=VALUE, got '{}'", pair))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(format!("Empty key in '{}'", pair));
        }
        inputs.insert(key.to_string(), value.to_string());
    }
    Ok(inputs)
}

fn print_profile(profile: &SavedProfile) {
    println!("{}", profile.name);
    println!("  saved {}", profile.saved_at.format("%Y-%m-%d %H:%M:%S UTC"));
    println!();

    let width = profile.inputs.keys().map(String::len).max().unwrap_or(0);
    for (field, raw) in &profile.inputs {
        println!("  {:width$}  {:<12}  {}", field, raw, preview(field, raw), width = width);
    }
}

/// Renders what the calculator will read out of a raw input.
///
/// The field name decides the notation: durations, rate lists and single
/// percentages are recognised by name, everything else is an amount.
fn preview(field: &str, raw: &str) -> String {
    let field = field.to_lowercase();
    let is_a = |fragments: &[&str]| fragments.iter().any(|f| field.contains(f));

    if is_a(DURATION_FIELDS) {
        match parse_duration(raw) {
            Ok(months) => format!("{} months", months),
            Err(e) => format!("error: {}", e),
        }
    } else if is_a(RATE_LIST_FIELDS) {
        parse_appreciation_rates(raw)
            .into_iter()
            .map(format_percent)
            .collect::<Vec<_>>()
            .join(", ")
    } else if is_a(PERCENT_FIELDS) {
        format_percent(parse_amount(raw))
    } else {
        format_currency(parse_amount(raw), true)
    }
}

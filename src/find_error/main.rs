use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use find_error::{error_selectors, find_matching_error, load_abi, Selector, SelectorPrefix};

/// Match an EVM custom error selector against the errors declared in a contract ABI.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Contract ABI JSON file (a top-level array of entries)
    #[arg(required_unless_present = "signature")]
    abi_filename: Option<PathBuf>,

    /// Selector to look for, e.g. 1234abcd or 0x1234abcd. Every error is listed when omitted
    error_selector: Option<String>,

    /// Print the selector of a signature such as "Foo(uint256,address)" and exit
    #[arg(short, long, conflicts_with_all = ["abi_filename", "error_selector"])]
    signature: Option<String>,

    /// Diagnostic verbosity; RUST_LOG takes precedence when set
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

fn init_tracing(level: LevelFilter) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(std::io::stdout().is_terminal())
        .with_level(false)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log_level);

    if let Some(signature) = &args.signature {
        println!("{} -> {}", signature, Selector::from_signature(signature));
        return Ok(());
    }

    let prefix = args
        .error_selector
        .as_deref()
        .map(SelectorPrefix::parse)
        .transpose()?;

    let abi_filename = args
        .abi_filename
        .as_ref()
        .context("no ABI file provided")?;
    let abi = load_abi(abi_filename)?;

    let (Some(prefix), Some(input)) = (prefix, &args.error_selector) else {
        for item in error_selectors(&abi) {
            let descriptor = item?;
            println!("{}  {}", descriptor.selector, descriptor.signature);
        }
        return Ok(());
    };

    match find_matching_error(&abi, &prefix)? {
        Some(found) => println!("Matched Error: {} -> {}", found.signature, found.selector),
        None => println!("No matching error found for selector {}", input),
    }

    Ok(())
}

//! Cache Simulator CLI.
//!
//! Replays an access trace against the configured cache hierarchy and prints
//! the resulting statistics.
//!
//! # Usage
//!
//! ```text
//! avdc-sim --trace accesses.txt [--config cache.toml] [--json] [--dump]
//! ```

use clap::Parser;
use std::fs::{self, File};
use std::io::BufReader;
use std::process;

extern crate avdark_cache;

use avdark_cache::common::SimError;
use avdark_cache::config::{CacheConfig, Config};
use avdark_cache::sim::{log_filter, read_trace, Hierarchy};
use tracing_subscriber::prelude::*;

/// Command-line arguments for the cache simulator.
#[derive(Parser, Debug)]
#[command(author, version, about = "Functional Set-Associative Cache Simulator")]
struct Args {
    /// TOML cache configuration. Defaults to a 4 KiB direct-mapped L1.
    #[arg(short, long)]
    config: Option<String>,

    /// Access trace, one `<R|W> <hex address>` per line.
    #[arg(short, long)]
    trace: String,

    /// Print statistics as JSON.
    #[arg(long)]
    json: bool,

    /// Print the internal state of every level after the run.
    #[arg(long)]
    dump: bool,

    /// Log level. Access tracing enabled in the configuration is always
    /// shown at debug level.
    #[arg(long, default_value = "warn")]
    log_level: tracing::Level,
}

fn print_level(label: &str, level: &CacheConfig) {
    println!("  {:<4}                {}", label, level);
}

fn load_config(path: Option<&str>) -> Result<Config, SimError> {
    match path {
        Some(path) => Ok(toml::from_str(&fs::read_to_string(path)?)?),
        None => Ok(Config::default()),
    }
}

fn run(args: Args, config: Config) -> Result<(), SimError> {
    let mut hierarchy = Hierarchy::new(&config)?;
    let records = read_trace(BufReader::new(File::open(&args.trace)?))?;

    if !args.json {
        println!("Cache Configuration");
        println!("--------------------");
        println!("  Trace Accesses:     {}", config.general.trace_accesses);
        print_level("L1", &config.cache.l1);
        if let Some(l2) = &config.cache.l2 {
            print_level("L2", l2);
        }
        println!("--------------------");
        println!("[*] Replaying {} accesses from {}", records.len(), args.trace);
    }

    hierarchy.run(records);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&hierarchy.report())?);
    } else {
        println!("\n==========================================================");
        println!("CACHE SIMULATION STATISTICS");
        hierarchy.l1.stats().print("L1");
        if let Some(l2) = &hierarchy.l2 {
            l2.stats().print("L2");
        }
        println!("==========================================================");
    }

    if args.dump {
        eprint!("{}", hierarchy.l1.inspect());
        if let Some(l2) = &hierarchy.l2 {
            eprint!("{}", l2.inspect());
        }
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    let config = load_config(args.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: {}", e);
        process::exit(1);
    });

    let installed = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(log_filter(args.log_level, &config))
        .try_init();
    if let Err(e) = installed {
        eprintln!("[!] Could not install logger: {}", e);
    }

    if let Err(e) = run(args, config) {
        eprintln!("\n[!] FATAL: {}", e);
        process::exit(1);
    }
}

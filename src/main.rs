mod console;
mod error;
mod filter;
mod ledger;
mod models;
mod registry;
mod store;
mod validate;

use std::io;

use anyhow::Result;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if let Some(arg) = args.get(1) {
        match arg.as_str() {
            "--version" | "-V" | "version" => {
                println!("spendlog {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            "--help" | "-h" | "help" => {
                print_usage();
                return Ok(());
            }
            other => {
                print_usage();
                anyhow::bail!("Unknown argument: {other}");
            }
        }
    }

    let mut registry = registry::Registry::new();
    let stdin = io::stdin();
    let mut console = console::Console::new(stdin.lock(), io::stdout());
    console::session::run(&mut console, &mut registry)
}

fn print_usage() {
    println!("Spendlog — console-driven personal expense tracker");
    println!();
    println!("Usage: spendlog");
    println!();
    println!("Runs an interactive session: register or log in, then add, view,");
    println!("modify, remove, and report on expenses against a budget. All data");
    println!("lives in memory for the duration of one run; nothing is persisted.");
    println!();
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
}

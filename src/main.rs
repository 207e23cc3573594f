//! Benchtop - an electronics bench-reference MCP server.
//!
//! Exposes fourteen deterministic electronics tools to language-model
//! clients over the Model Context Protocol: a resistor color-band codec,
//! capacitor/RC/LC calculators, and a GPIO pin database with conflict
//! checking for ESP32 DevKitC, Arduino UNO R3 and the STM32 Blue Pill.
//!
//! Everything is computed from tables compiled into the binary; the server
//! keeps no state between requests and does no I/O besides the protocol
//! itself.

mod capacitor;
mod error;
mod format;
mod gpio;
mod mcp;
mod resistor;
mod series;
mod tools;

use clap::Parser;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "benchtop")]
#[command(about = "An electronics bench-reference MCP server")]
struct Args {
    /// Print the tool inventory and exit instead of serving.
    #[arg(long)]
    list_tools: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let registry = tools::registry();

    if args.list_tools {
        for descriptor in registry.descriptors() {
            println!("{:<32} {}", descriptor.name, descriptor.description);
        }
        return Ok(());
    }

    let server = mcp::Server::new(registry);
    server.run()?;
    Ok(())
}

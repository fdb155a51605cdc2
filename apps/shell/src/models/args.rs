//! # CLI Argument Definitions

use clap::{Args, Parser, Subcommand};
use forno::prelude::{CrustType, Size};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "forno")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Build and validate order configurations")]
pub struct Cli {
    /// Config file (defaults to an optional `forno.*` in the working directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level regardless of the configured level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: AppCommands,
}

/// Enumeration of available subcommands.
#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Build a configuration from flags or from an order file
    Order(OrderArgs),
    /// Build the reference orders, including one that must be rejected
    Demo {},
}

#[derive(Debug, Args)]
pub struct OrderArgs {
    /// Read a TOML order document instead of flags
    #[arg(short, long, conflicts_with_all = ["size", "flavors", "crust", "extras", "pickup"])]
    pub file: Option<PathBuf>,

    /// small, medium or large
    #[arg(short, long)]
    pub size: Option<Size>,

    /// Flavor name (repeatable)
    #[arg(short = 'F', long = "flavor")]
    pub flavors: Vec<String>,

    /// traditional or stuffed
    #[arg(long)]
    pub crust: Option<CrustType>,

    /// Extra topping (repeatable)
    #[arg(short, long = "extra")]
    pub extras: Vec<String>,

    /// Order for pickup instead of dine-in
    #[arg(short, long)]
    pub pickup: bool,

    /// Print the configuration as JSON
    #[arg(long)]
    pub json: bool,
}

use crate::models::args::OrderArgs;
use anyhow::{Context, Result};
use forno::prelude::{Configuration, OrderRequest};
use std::fs;
use std::path::Path;
use tracing::info;

/// Builds one configuration from the command line (or an order file) and prints it.
///
/// # Errors
/// Fails when the order file cannot be read or parsed, or when validation rejects the order.
pub fn run_order(args: OrderArgs) -> Result<()> {
    let json = args.json;
    let request = match args.file.as_deref().map(read_request).transpose()? {
        Some(request) => request,
        None => from_flags(args),
    };

    let config = request.into_builder().build().context("Order rejected")?;
    info!(size = %config.size(), flavors = config.flavors().len(), "Order accepted");

    print_configuration(&config, json)
}

fn from_flags(args: OrderArgs) -> OrderRequest {
    OrderRequest {
        size: args.size,
        crust: args.crust,
        flavors: args.flavors,
        extras: args.extras,
        for_pickup: args.pickup,
    }
}

fn read_request(path: &Path) -> Result<OrderRequest> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read order file {}", path.display()))?;

    toml::from_str(&raw).with_context(|| format!("Failed to parse order file {}", path.display()))
}

pub(crate) fn print_configuration(config: &Configuration, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(config)?);
    } else {
        println!("{config}");
    }
    Ok(())
}

use crate::handlers::order::print_configuration;
use anyhow::{Result, bail};
use forno::prelude::Configuration;

/// Runs the reference orders through the staged builder.
///
/// # Errors
/// Fails if a reference order behaves differently than expected.
pub fn run_demo() -> Result<()> {
    let basic = Configuration::staged()
        .small()
        .add_flavor("Mussarela")
        .add_flavor("Calabresa")
        .traditional_crust()
        .no_extras()
        .for_pickup()
        .build()?;
    print!("Order 1: ");
    print_configuration(&basic, false)?;

    let elaborate = Configuration::staged()
        .large()
        .add_flavors(["Mussarela", "Calabresa", "Portuguesa", "Frango"])
        .stuffed_crust()
        .add_extras(["Queijo Extra", "Molho Extra"])
        .for_dine_in()
        .build()?;
    print!("Order 2: ");
    print_configuration(&elaborate, false)?;

    match Configuration::staged().small().add_flavor("Mussarela").stuffed_crust().for_dine_in().build()
    {
        Ok(config) => bail!("Small order with a stuffed crust was accepted: {config}"),
        Err(err) => println!("Expected error: {err}"),
    }

    Ok(())
}

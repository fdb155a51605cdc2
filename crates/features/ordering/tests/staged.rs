use forno_ordering::prelude::*;

#[test]
fn staged_basic_order_matches_free_form() {
    let staged = Configuration::staged()
        .small()
        .add_flavor("Mussarela")
        .add_flavor("Calabresa")
        .traditional_crust()
        .no_extras()
        .for_pickup()
        .build()
        .expect("valid configuration");

    let free_form = Configuration::builder()
        .small()
        .add_flavors(["Mussarela", "Calabresa"])
        .for_pickup()
        .build()
        .expect("valid configuration");

    assert_eq!(staged, free_form);
}

#[test]
fn staged_elaborate_order() {
    let config = Configuration::staged()
        .large()
        .add_flavors(["Mussarela", "Calabresa", "Portuguesa", "Frango"])
        .stuffed_crust()
        .add_extras(["Queijo Extra", "Molho Extra"])
        .for_dine_in()
        .build()
        .expect("valid configuration");

    assert_eq!(
        config.to_string(),
        "Configuration{size=large, crust=stuffed, flavors=[Mussarela, Calabresa, Portuguesa, Frango], \
         extras=[Queijo Extra, Molho Extra], pickup=false}"
    );
}

#[test]
fn staged_still_validates_at_build() {
    let err = Configuration::staged()
        .small()
        .add_flavor("Mussarela")
        .stuffed_crust()
        .for_dine_in()
        .build()
        .expect_err("small + stuffed must fail");

    assert_eq!(err.rule(), ValidationRule::IncompatibleCrust);
}

#[test]
fn staged_sequence_steps() {
    let config = Configuration::staged()
        .size(Size::Medium)
        .set_flavors(Some(["Atum", "  Cebola "]))
        .crust(CrustType::Stuffed)
        .add_extra("Catupiry")
        .set_extras(Some(["Bacon"]))
        .for_pickup()
        .build()
        .expect("valid configuration");

    assert_eq!(config.flavors(), ["Atum", "Cebola"]);
    assert_eq!(config.extras(), ["Catupiry", "Bacon"]);
}

#[test]
fn staged_requires_real_flavors() {
    let err = Configuration::staged()
        .large()
        .set_flavors(None::<Vec<&str>>)
        .traditional_crust()
        .for_dine_in()
        .build()
        .expect_err("no flavors");

    assert_eq!(err.rule(), ValidationRule::NoFlavors);
}

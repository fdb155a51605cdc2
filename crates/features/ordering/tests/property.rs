use forno_ordering::prelude::*;
use proptest::prelude::*;
use proptest::sample::select;

fn size() -> impl Strategy<Value = Size> {
    select(vec![Size::Small, Size::Medium, Size::Large])
}

fn crust() -> impl Strategy<Value = CrustType> {
    select(vec![CrustType::Traditional, CrustType::Stuffed])
}

fn name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ]{0,12}"
}

fn padded(name: String) -> impl Strategy<Value = String> {
    ("[ \t]{0,3}", "[ \t]{0,3}").prop_map(move |(l, r)| format!("{l}{name}{r}"))
}

proptest! {
    #[test]
    fn valid_inputs_are_reproduced_exactly(
        size in size(),
        crust in crust(),
        flavors in proptest::collection::vec(name(), 1..=4),
        extras in proptest::collection::vec(name(), 0..6),
        pickup in any::<bool>(),
    ) {
        prop_assume!(flavors.len() <= size.max_flavors());
        prop_assume!(!(size == Size::Small && crust == CrustType::Stuffed));

        let builder = Configuration::builder()
            .size(size)
            .crust(crust)
            .add_flavors(&flavors)
            .add_extras(&extras);
        let builder = if pickup { builder.for_pickup() } else { builder.for_dine_in() };
        let config = builder.build().unwrap();

        let trimmed = |v: &[String]| v.iter().map(|s| s.trim().to_owned()).collect::<Vec<_>>();
        let (expected_flavors, expected_extras) = (trimmed(&flavors), trimmed(&extras));
        prop_assert_eq!(config.size(), size);
        prop_assert_eq!(config.crust(), crust);
        prop_assert_eq!(config.flavors(), expected_flavors.as_slice());
        prop_assert_eq!(config.extras(), expected_extras.as_slice());
        prop_assert_eq!(config.is_for_pickup(), pickup);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed(flavor in name().prop_flat_map(padded)) {
        let config = Configuration::builder().large().add_flavor(&flavor).build().unwrap();
        prop_assert_eq!(config.flavors(), [flavor.trim().to_owned()]);
    }

    #[test]
    fn small_stuffed_always_fails(
        flavors in proptest::collection::vec(name(), 0..6),
        extras in proptest::collection::vec(name(), 0..6),
    ) {
        let err = Configuration::builder()
            .small()
            .stuffed_crust()
            .add_flavors(&flavors)
            .add_extras(&extras)
            .build()
            .unwrap_err();

        let expected = if flavors.is_empty() { ValidationRule::NoFlavors } else { ValidationRule::IncompatibleCrust };
        prop_assert_eq!(err.rule(), expected);
    }

    #[test]
    fn exceeding_the_limit_always_fails(size in size(), extra in 1usize..4) {
        let count = size.max_flavors() + extra;
        let err = Configuration::builder()
            .size(size)
            .add_flavors((0..count).map(|i| format!("flavor {i}")))
            .build()
            .unwrap_err();

        prop_assert_eq!(err.rule(), ValidationRule::TooManyFlavors);
    }

    #[test]
    fn blank_names_never_change_the_count(blanks in proptest::collection::vec("[ \t\n]{0,4}", 0..8)) {
        let err = Configuration::builder().medium().add_flavors(&blanks).build().unwrap_err();
        prop_assert_eq!(err.rule(), ValidationRule::NoFlavors);
    }
}

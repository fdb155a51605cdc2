use crate::builder::ConfigurationBuilder;
use crate::request::OrderRequest;
use crate::staged::{SizeStep, StagedBuilder};
use forno_domain::menu::{CrustType, Size};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A finished, validated order configuration.
///
/// Instances only come out of [`ConfigurationBuilder::build`] (directly, through the
/// staged builder, or through deserialization), so every value satisfies the rules in
/// [`crate::validation`]. Collections are owned privately and exposed as slices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "OrderRequest")]
pub struct Configuration {
    size: Size,
    crust: CrustType,
    flavors: Vec<String>,
    extras: Vec<String>,
    for_pickup: bool,
}

impl Configuration {
    /// Starts a fresh free-form builder.
    ///
    /// ```rust
    /// use forno_ordering::{Configuration, CrustType, Size};
    ///
    /// let config = Configuration::builder()
    ///     .medium()
    ///     .add_flavors(["Margherita", " Funghi "])
    ///     .for_pickup()
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(config.size(), Size::Medium);
    /// assert_eq!(config.crust(), CrustType::Traditional);
    /// assert_eq!(config.flavors(), ["Margherita", "Funghi"]);
    /// ```
    #[must_use = "The builder must be finalized with `build`"]
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::new()
    }

    /// Starts a staged builder that enforces the step order at compile time.
    ///
    /// See [`StagedBuilder`] for the available transitions.
    #[must_use = "The builder must be finalized with `build`"]
    pub fn staged() -> StagedBuilder<SizeStep> {
        StagedBuilder::new()
    }

    pub(crate) const fn new(
        size: Size,
        crust: CrustType,
        flavors: Vec<String>,
        extras: Vec<String>,
        for_pickup: bool,
    ) -> Self {
        Self { size, crust, flavors, extras, for_pickup }
    }

    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    #[must_use]
    pub const fn crust(&self) -> CrustType {
        self.crust
    }

    /// Flavors in the order they were added, trimmed, duplicates kept.
    #[must_use]
    pub fn flavors(&self) -> &[String] {
        &self.flavors
    }

    #[must_use]
    pub fn extras(&self) -> &[String] {
        &self.extras
    }

    #[must_use]
    pub const fn is_for_pickup(&self) -> bool {
        self.for_pickup
    }
}

/// Diagnostic summary, not meant to be parsed back.
impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Configuration{{size={}, crust={}, flavors=[{}], extras=[{}], pickup={}}}",
            self.size,
            self.crust,
            self.flavors.join(", "),
            self.extras.join(", "),
            self.for_pickup
        )
    }
}

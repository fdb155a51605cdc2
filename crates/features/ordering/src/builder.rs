use crate::configuration::Configuration;
use crate::error::OrderError;
use crate::validation;
use forno_domain::menu::{CrustType, Size};
use tracing::debug;

/// Free-form builder for a [`Configuration`].
///
/// Setters can be called in any order and never fail; blank names are dropped and
/// the rest are trimmed. All checks happen once, in [`ConfigurationBuilder::build`],
/// which consumes the builder whatever the outcome.
#[derive(Debug, Default)]
pub struct ConfigurationBuilder {
    size: Option<Size>,
    crust: CrustType,
    flavors: Vec<String>,
    extras: Vec<String>,
    for_pickup: bool,
}

impl ConfigurationBuilder {
    /// Creates an empty builder: no size, traditional crust, dine-in.
    #[must_use = "The builder must be finalized with `build`"]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    #[must_use]
    pub const fn small(self) -> Self {
        self.size(Size::Small)
    }

    #[must_use]
    pub const fn medium(self) -> Self {
        self.size(Size::Medium)
    }

    #[must_use]
    pub const fn large(self) -> Self {
        self.size(Size::Large)
    }

    /// Appends a flavor. Empty or whitespace-only names are ignored.
    #[must_use]
    pub fn add_flavor(mut self, name: impl AsRef<str>) -> Self {
        push_trimmed(&mut self.flavors, name.as_ref());
        self
    }

    #[must_use]
    pub fn add_flavors<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for name in names {
            push_trimmed(&mut self.flavors, name.as_ref());
        }
        self
    }

    /// Appends every flavor of an optional sequence; `None` leaves the builder untouched.
    #[must_use]
    pub fn set_flavors<I>(self, names: Option<I>) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        match names {
            Some(names) => self.add_flavors(names),
            None => self,
        }
    }

    #[must_use]
    pub const fn crust(mut self, crust: CrustType) -> Self {
        self.crust = crust;
        self
    }

    #[must_use]
    pub const fn traditional_crust(self) -> Self {
        self.crust(CrustType::Traditional)
    }

    #[must_use]
    pub const fn stuffed_crust(self) -> Self {
        self.crust(CrustType::Stuffed)
    }

    /// Appends an extra. Empty or whitespace-only names are ignored.
    #[must_use]
    pub fn add_extra(mut self, name: impl AsRef<str>) -> Self {
        push_trimmed(&mut self.extras, name.as_ref());
        self
    }

    #[must_use]
    pub fn add_extras<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for name in names {
            push_trimmed(&mut self.extras, name.as_ref());
        }
        self
    }

    #[must_use]
    pub fn set_extras<I>(self, names: Option<I>) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        match names {
            Some(names) => self.add_extras(names),
            None => self,
        }
    }

    #[must_use]
    pub fn clear_extras(mut self) -> Self {
        self.extras.clear();
        self
    }

    #[must_use]
    pub const fn for_pickup(mut self) -> Self {
        self.for_pickup = true;
        self
    }

    #[must_use]
    pub const fn for_dine_in(mut self) -> Self {
        self.for_pickup = false;
        self
    }

    /// Validates the accumulated state and produces the [`Configuration`].
    ///
    /// # Errors
    /// Returns [`OrderError::InvalidConfiguration`] naming the first broken
    /// [`ValidationRule`](crate::ValidationRule): missing size, no flavors, small size
    /// with a stuffed crust, or more flavors than the size allows.
    pub fn build(self) -> Result<Configuration, OrderError> {
        let size = validation::validate(self.size, self.crust, &self.flavors).inspect_err(|e| {
            debug!(rule = %e.rule(), "Configuration rejected: {e}");
        })?;

        let configuration =
            Configuration::new(size, self.crust, self.flavors, self.extras, self.for_pickup);
        debug!(%configuration, "Configuration built");

        Ok(configuration)
    }
}

fn push_trimmed(target: &mut Vec<String>, name: &str) {
    let name = name.trim();
    if !name.is_empty() {
        target.push(name.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_builder_has_documented_defaults() {
        let builder = ConfigurationBuilder::new();
        assert!(builder.size.is_none());
        assert_eq!(builder.crust, CrustType::Traditional);
        assert!(builder.flavors.is_empty());
        assert!(builder.extras.is_empty());
        assert!(!builder.for_pickup);
    }

    #[test]
    fn blank_flavors_are_no_ops() {
        let builder = ConfigurationBuilder::new().add_flavor("").add_flavor("   ").add_flavor("\t\n");
        assert!(builder.flavors.is_empty());

        let builder = builder.add_flavor("  Calabresa ").add_flavor(" ");
        assert_eq!(builder.flavors, ["Calabresa"]);
    }

    #[test]
    fn absent_sequences_are_no_ops() {
        let builder = ConfigurationBuilder::new()
            .add_flavor("Mussarela")
            .set_flavors(None::<Vec<String>>)
            .add_extra("Oregano")
            .set_extras(None::<&[&str]>);

        assert_eq!(builder.flavors, ["Mussarela"]);
        assert_eq!(builder.extras, ["Oregano"]);
    }

    #[test]
    fn later_setters_overwrite_earlier_ones() {
        let builder = ConfigurationBuilder::new()
            .small()
            .large()
            .stuffed_crust()
            .traditional_crust()
            .for_pickup()
            .for_dine_in();

        assert_eq!(builder.size, Some(Size::Large));
        assert_eq!(builder.crust, CrustType::Traditional);
        assert!(!builder.for_pickup);
    }

    #[test]
    fn clear_extras_empties_only_extras() {
        let builder = ConfigurationBuilder::new()
            .add_flavor("Portuguesa")
            .add_extras(["Queijo Extra", "Molho Extra"])
            .clear_extras();

        assert!(builder.extras.is_empty());
        assert_eq!(builder.flavors, ["Portuguesa"]);
    }
}

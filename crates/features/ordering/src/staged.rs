//! # Staged Builder
//!
//! A typestate wrapper around [`ConfigurationBuilder`] that only exposes the operations
//! valid for the current step:
//!
//! ```text
//! SizeStep ─► FlavorStep ─┬─► CrustStep ─► ExtrasStep ─┬─► DeliveryStep ─► Ready ─► build()
//!                         └───────────────►             └──────────────────►
//! ```
//!
//! * [`SizeStep`]: `size`, `small`, `medium`, `large`.
//! * [`FlavorStep`]: `add_flavor`/`add_flavors` (stay), `set_flavors` (to [`CrustStep`]),
//!   or a crust operation directly.
//! * [`CrustStep`]: `crust`, `traditional_crust`, `stuffed_crust`.
//! * [`ExtrasStep`]: `add_extra`/`add_extras` (stay), `set_extras`/`no_extras`
//!   (to [`DeliveryStep`]), or a delivery operation directly.
//! * [`DeliveryStep`]: `for_pickup`, `for_dine_in`.
//! * [`Ready`]: `build`.
//!
//! `build` still runs the full validation, so combinations such as a small size with a
//! stuffed crust are rejected at runtime.
//!
//! Skipping a step does not compile:
//!
//! ```rust,compile_fail
//! use forno_ordering::Configuration;
//!
//! // A crust cannot be chosen before the size.
//! let _ = Configuration::staged().stuffed_crust();
//! ```
//!
//! ```rust,compile_fail
//! use forno_ordering::Configuration;
//!
//! // Finalization needs the delivery choice first.
//! let _ = Configuration::staged().large().add_flavor("Frango").traditional_crust().build();
//! ```

use crate::builder::ConfigurationBuilder;
use crate::configuration::Configuration;
use crate::error::OrderError;
use forno_domain::menu::{CrustType, Size};
use private::{AcceptsCrust, AcceptsDelivery, Sealed};
use std::marker::PhantomData;

#[derive(Debug)]
pub struct SizeStep;
#[derive(Debug)]
pub struct FlavorStep;
#[derive(Debug)]
pub struct CrustStep;
#[derive(Debug)]
pub struct ExtrasStep;
#[derive(Debug)]
pub struct DeliveryStep;
#[derive(Debug)]
pub struct Ready;

mod private {
    pub trait Sealed {}
    pub trait AcceptsCrust: Sealed {}
    pub trait AcceptsDelivery: Sealed {}
}
impl Sealed for SizeStep {}
impl Sealed for FlavorStep {}
impl Sealed for CrustStep {}
impl Sealed for ExtrasStep {}
impl Sealed for DeliveryStep {}
impl Sealed for Ready {}

impl AcceptsCrust for FlavorStep {}
impl AcceptsCrust for CrustStep {}
impl AcceptsDelivery for ExtrasStep {}
impl AcceptsDelivery for DeliveryStep {}

/// Builder whose type parameter tracks the current construction step.
#[must_use = "The builder must be finalized with `build`"]
#[derive(Debug)]
pub struct StagedBuilder<S: Sealed = SizeStep> {
    inner: ConfigurationBuilder,
    _stage: PhantomData<S>,
}

impl<S: Sealed> StagedBuilder<S> {
    fn transition<N: Sealed>(
        self,
        apply: impl FnOnce(ConfigurationBuilder) -> ConfigurationBuilder,
    ) -> StagedBuilder<N> {
        StagedBuilder { inner: apply(self.inner), _stage: PhantomData }
    }
}

impl StagedBuilder<SizeStep> {
    pub(crate) fn new() -> Self {
        Self { inner: ConfigurationBuilder::new(), _stage: PhantomData }
    }

    pub fn size(self, size: Size) -> StagedBuilder<FlavorStep> {
        self.transition(|b| b.size(size))
    }

    pub fn small(self) -> StagedBuilder<FlavorStep> {
        self.size(Size::Small)
    }

    pub fn medium(self) -> StagedBuilder<FlavorStep> {
        self.size(Size::Medium)
    }

    pub fn large(self) -> StagedBuilder<FlavorStep> {
        self.size(Size::Large)
    }
}

impl StagedBuilder<FlavorStep> {
    pub fn add_flavor(self, name: impl AsRef<str>) -> Self {
        self.transition(|b| b.add_flavor(name))
    }

    pub fn add_flavors<I>(self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.transition(|b| b.add_flavors(names))
    }

    /// Appends a whole sequence and closes the flavor step.
    pub fn set_flavors<I>(self, names: Option<I>) -> StagedBuilder<CrustStep>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.transition(|b| b.set_flavors(names))
    }
}

impl<S: AcceptsCrust> StagedBuilder<S> {
    pub fn crust(self, crust: CrustType) -> StagedBuilder<ExtrasStep> {
        self.transition(|b| b.crust(crust))
    }

    pub fn traditional_crust(self) -> StagedBuilder<ExtrasStep> {
        self.crust(CrustType::Traditional)
    }

    pub fn stuffed_crust(self) -> StagedBuilder<ExtrasStep> {
        self.crust(CrustType::Stuffed)
    }
}

impl StagedBuilder<ExtrasStep> {
    pub fn add_extra(self, name: impl AsRef<str>) -> Self {
        self.transition(|b| b.add_extra(name))
    }

    pub fn add_extras<I>(self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.transition(|b| b.add_extras(names))
    }

    /// Appends a whole sequence and closes the extras step.
    pub fn set_extras<I>(self, names: Option<I>) -> StagedBuilder<DeliveryStep>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.transition(|b| b.set_extras(names))
    }

    /// Drops any extras added so far and closes the extras step.
    pub fn no_extras(self) -> StagedBuilder<DeliveryStep> {
        self.transition(ConfigurationBuilder::clear_extras)
    }
}

impl<S: AcceptsDelivery> StagedBuilder<S> {
    pub fn for_pickup(self) -> StagedBuilder<Ready> {
        self.transition(ConfigurationBuilder::for_pickup)
    }

    pub fn for_dine_in(self) -> StagedBuilder<Ready> {
        self.transition(ConfigurationBuilder::for_dine_in)
    }
}

impl StagedBuilder<Ready> {
    /// Validates and produces the [`Configuration`].
    ///
    /// # Errors
    /// Returns [`OrderError::InvalidConfiguration`] under the same rules as
    /// [`ConfigurationBuilder::build`]. A size is always present at this step.
    pub fn build(self) -> Result<Configuration, OrderError> {
        self.inner.build()
    }
}

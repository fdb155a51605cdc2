use crate::builder::ConfigurationBuilder;
use crate::configuration::Configuration;
use crate::error::OrderError;
use forno_domain::menu::{CrustType, Size};
use serde::{Deserialize, Serialize};

/// An unvalidated order document, e.g. read from a TOML or JSON file.
///
/// Missing keys take the builder defaults; unknown keys are rejected. Turning a request
/// into a [`Configuration`] always goes through [`ConfigurationBuilder::build`].
///
/// ```rust
/// use forno_ordering::{Configuration, OrderRequest};
///
/// let request: OrderRequest = serde_json::from_str(
///     r#"{ "size": "large", "flavors": ["Frango"], "crust": "stuffed" }"#,
/// ).unwrap();
///
/// let config = Configuration::try_from(request).unwrap();
/// assert!(!config.is_for_pickup());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct OrderRequest {
    pub size: Option<Size>,
    pub crust: Option<CrustType>,
    pub flavors: Vec<String>,
    pub extras: Vec<String>,
    pub for_pickup: bool,
}

impl OrderRequest {
    /// Replays the request onto a fresh builder without validating it.
    #[must_use = "The builder must be finalized with `build`"]
    pub fn into_builder(self) -> ConfigurationBuilder {
        let builder = ConfigurationBuilder::new()
            .add_flavors(self.flavors)
            .add_extras(self.extras)
            .crust(self.crust.unwrap_or_default());

        let builder = match self.size {
            Some(size) => builder.size(size),
            None => builder,
        };

        if self.for_pickup { builder.for_pickup() } else { builder.for_dine_in() }
    }
}

impl TryFrom<OrderRequest> for Configuration {
    type Error = OrderError;

    fn try_from(request: OrderRequest) -> Result<Self, Self::Error> {
        request.into_builder().build()
    }
}

impl From<&Configuration> for OrderRequest {
    fn from(config: &Configuration) -> Self {
        Self {
            size: Some(config.size()),
            crust: Some(config.crust()),
            flavors: config.flavors().to_vec(),
            extras: config.extras().to_vec(),
            for_pickup: config.is_for_pickup(),
        }
    }
}

//! # Ordering
//!
//! Immutable order configurations and the builders that produce them.
//!
//! * [`ConfigurationBuilder`]: free-form chaining, everything checked once in `build`.
//! * [`StagedBuilder`]: the same operations behind a compile-time step order
//!   (size, flavors, crust, extras, delivery, build).
//! * [`OrderRequest`]: a serde document replayed onto the builder, used for files and
//!   for deserializing [`Configuration`] itself.
//!
//! Finalization fails with [`OrderError::InvalidConfiguration`] carrying the broken
//! [`ValidationRule`]. No other operation fails.
//!
//! ## Example
//!
//! ```rust
//! use forno_ordering::prelude::*;
//!
//! let config = Configuration::staged()
//!     .large()
//!     .add_flavors(["Mussarela", "Calabresa", "Portuguesa", "Frango"])
//!     .stuffed_crust()
//!     .add_extras(["Queijo Extra", "Molho Extra"])
//!     .for_dine_in()
//!     .build()?;
//!
//! assert_eq!(config.flavors().len(), 4);
//!
//! let err = Configuration::builder().small().add_flavor("Mussarela").stuffed_crust().build();
//! assert_eq!(err.unwrap_err().rule(), ValidationRule::IncompatibleCrust);
//! # Ok::<(), OrderError>(())
//! ```

mod builder;
mod configuration;
mod error;
mod request;
pub mod staged;
pub mod validation;

pub use crate::builder::ConfigurationBuilder;
pub use crate::configuration::Configuration;
pub use crate::error::{OrderError, OrderErrorExt};
pub use crate::request::OrderRequest;
pub use crate::staged::StagedBuilder;
pub use crate::validation::ValidationRule;
pub use forno_domain::menu::{CrustType, Size};

pub mod prelude {
    pub use crate::builder::ConfigurationBuilder;
    pub use crate::configuration::Configuration;
    pub use crate::error::{OrderError, OrderErrorExt};
    pub use crate::request::OrderRequest;
    pub use crate::staged::StagedBuilder;
    pub use crate::validation::ValidationRule;
    pub use forno_domain::menu::{CrustType, Size};
}

//! Facade crate for Forno features and shared modules.
//! Keep this crate thin: it composes other crates and implements no business logic.
//!
//! ```rust
//! use forno::prelude::*;
//!
//! let config = Configuration::builder().medium().add_flavor("Napolitana").build().unwrap();
//! assert_eq!(config.size(), Size::Medium);
//! ```

pub use forno_domain as domain;
pub use forno_ordering as ordering;

pub mod prelude {
    pub use forno_ordering::prelude::*;
}

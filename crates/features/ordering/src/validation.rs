//! Finalization checks shared by every way of building a [`Configuration`].
//!
//! Rules run in a fixed order and the first violation wins:
//!
//! 1. a size is set,
//! 2. at least one flavor is present,
//! 3. small items never get a stuffed crust,
//! 4. the flavor count stays within [`Size::max_flavors`].
//!
//! [`Configuration`]: crate::Configuration

use crate::error::OrderError;
use forno_domain::menu::{CrustType, Size};
use std::borrow::Cow;
use strum_macros::Display;

/// Identifies which validation rule rejected a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ValidationRule {
    MissingSize,
    NoFlavors,
    IncompatibleCrust,
    TooManyFlavors,
}

/// Runs every rule against the accumulated state and returns the confirmed size.
pub(crate) fn validate(
    size: Option<Size>,
    crust: CrustType,
    flavors: &[String],
) -> Result<Size, OrderError> {
    let Some(size) = size else {
        return Err(reject(ValidationRule::MissingSize, "configuration must have a size"));
    };

    if flavors.is_empty() {
        return Err(reject(
            ValidationRule::NoFlavors,
            "configuration must contain at least one flavor",
        ));
    }

    if size == Size::Small && crust == CrustType::Stuffed {
        return Err(reject(
            ValidationRule::IncompatibleCrust,
            "small configurations cannot have a stuffed crust",
        ));
    }

    let max = size.max_flavors();
    if flavors.len() > max {
        return Err(reject(
            ValidationRule::TooManyFlavors,
            format!("{size} configurations can contain at most {max} flavors"),
        ));
    }

    Ok(size)
}

fn reject(rule: ValidationRule, message: impl Into<Cow<'static, str>>) -> OrderError {
    OrderError::InvalidConfiguration { rule, message: message.into(), context: None }
}

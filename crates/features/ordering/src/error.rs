use crate::validation::ValidationRule;
use std::borrow::Cow;

/// Errors raised while finalizing an order configuration.
#[forno_derive::forno_error]
pub enum OrderError {
    /// The accumulated state broke one of the validation rules.
    #[error("Invalid configuration{}: {message}", format_context(.context))]
    InvalidConfiguration {
        rule: ValidationRule,
        message: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },
}

impl OrderError {
    /// The validation rule that rejected the configuration.
    #[must_use]
    pub const fn rule(&self) -> ValidationRule {
        match self {
            Self::InvalidConfiguration { rule, .. } => *rule,
        }
    }
}

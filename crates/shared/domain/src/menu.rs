use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// The size of an ordered item.
///
/// Every size caps how many flavors a single item may combine, see [`Size::max_flavors`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    /// Maximum number of flavors an item of this size may contain.
    #[must_use]
    pub const fn max_flavors(self) -> usize {
        match self {
            Self::Small => 2,
            Self::Medium => 3,
            Self::Large => 4,
        }
    }
}

/// The crust of an ordered item.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CrustType {
    #[default]
    Traditional,
    Stuffed,
}

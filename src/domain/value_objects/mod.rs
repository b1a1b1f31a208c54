//! Domain Value Objects
//!
//! Immutable label types produced by classification.

mod classification;
mod contributor;
mod origin;
mod period;
mod tradition;

pub use classification::ClassificationResult;
pub use contributor::{
    is_missing_description, ContributorGroup, NO_PROJECT_DESCRIPTION, NO_PROJECT_DESC_TAG,
};
pub use origin::Origin;
pub use period::Period;
pub use tradition::Tradition;

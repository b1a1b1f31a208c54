//! Classification result - labels assigned to one document

use serde::Serialize;

use super::{Origin, Period, Tradition};

/// Labels assigned to one document
///
/// Always carries at least one tradition, exactly one period and exactly one
/// origin; unmatched dimensions hold their sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    traditions: Vec<Tradition>,
    period: Period,
    origin: Origin,
}

impl ClassificationResult {
    /// Build a result; an empty tradition list becomes `[Unspecified]`
    pub fn new(traditions: Vec<Tradition>, period: Period, origin: Origin) -> Self {
        let traditions = if traditions.is_empty() {
            vec![Tradition::Unspecified]
        } else {
            traditions
        };
        Self {
            traditions,
            period,
            origin,
        }
    }

    /// Matched traditions in table order
    pub fn traditions(&self) -> &[Tradition] {
        &self.traditions
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// First tradition in table order, used for folder placement
    pub fn primary_tradition(&self) -> Tradition {
        self.traditions[0]
    }
}

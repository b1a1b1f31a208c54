//! Layout planner
//!
//! Recommends a `Canon_<code>/Tradition_<name>/[Period_<name>/]` folder for
//! every classified document. Nothing is moved; the plan is only reported.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use crate::domain::entities::CanonRegistry;
use crate::domain::services::{Destination, UNKNOWN_CANON};
use crate::error::CanonsortResult;

use super::analyze::AggregateIndex;
use super::report::write_json;

/// Canon size from which the period level is added
pub const DEFAULT_PERIOD_THRESHOLD: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOptions {
    pub period_threshold: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            period_threshold: DEFAULT_PERIOD_THRESHOLD,
        }
    }
}

impl LayoutOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_period_threshold(mut self, threshold: usize) -> Self {
        self.period_threshold = threshold;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonFolder {
    pub canon_name: String,
    pub file_count: usize,
    /// Whether documents of this canon are split by period
    pub by_period: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pub file: String,
    pub destination: String,
}

/// Recommended folder layout
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LayoutPlan {
    pub canons: BTreeMap<String, CanonFolder>,
    /// Folder path to number of documents assigned to it
    pub folders: BTreeMap<String, usize>,
    pub assignments: Vec<Assignment>,
}

/// Plan a destination for every classified document
pub fn plan_layout(
    index: &AggregateIndex,
    registry: &CanonRegistry,
    options: &LayoutOptions,
) -> LayoutPlan {
    let mut canon_sizes: BTreeMap<&str, usize> = BTreeMap::new();
    for record in &index.details {
        let canon = record.canon.as_deref().unwrap_or(UNKNOWN_CANON);
        *canon_sizes.entry(canon).or_default() += 1;
    }

    let mut plan = LayoutPlan::default();
    for (canon, count) in &canon_sizes {
        plan.canons.insert(
            canon.to_string(),
            CanonFolder {
                canon_name: registry.display_name(canon).to_string(),
                file_count: *count,
                by_period: *count >= options.period_threshold,
            },
        );
    }

    for record in &index.details {
        let canon = record.canon.as_deref().unwrap_or(UNKNOWN_CANON);
        let by_period = plan.canons.get(canon).is_some_and(|c| c.by_period);
        let destination = Destination {
            canon: canon.to_string(),
            tradition: record.classification.primary_tradition(),
            period: by_period.then(|| record.classification.period()),
        }
        .path();

        *plan.folders.entry(destination.clone()).or_default() += 1;
        plan.assignments.push(Assignment {
            file: record.file.clone(),
            destination,
        });
    }

    plan
}

pub fn write_layout_plan(plan: &LayoutPlan, output: &Path) -> CanonsortResult<()> {
    write_json(plan, output)
}

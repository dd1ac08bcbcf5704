//! Output renderers: terminal and JSON.

pub mod json;
pub mod terminal;

use crate::config::Config;
use crate::models::{ChainsReport, CheckReport, FinalityReport};
use crate::plan::DeployPlan;

/// Trait for rendering command results to an output format.
pub trait OutputRenderer {
    fn chains(&self, report: &ChainsReport) -> String;

    fn confirmations(&self, required: u64) -> String;

    fn check(&self, report: &CheckReport) -> String;

    fn plan(&self, plan: &DeployPlan) -> String;

    fn finality(&self, report: &FinalityReport) -> String;

    /// Render an already-resolved config (see [`Config::resolved`]).
    fn config(&self, config: &Config) -> String;
}

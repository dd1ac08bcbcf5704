//! JSON output renderer.
//!
//! Every command prints a single pretty-printed object followed by a newline.

use serde::Serialize;

use crate::config::Config;
use crate::models::{ChainsReport, CheckReport, FinalityReport};
use crate::output::OutputRenderer;
use crate::plan::DeployPlan;

/// JSON output renderer.
pub struct JsonRenderer;

fn to_json<T: Serialize>(value: &T) -> String {
    let mut out = serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string());
    out.push('\n');
    out
}

impl OutputRenderer for JsonRenderer {
    fn chains(&self, report: &ChainsReport) -> String {
        to_json(report)
    }

    fn confirmations(&self, required: u64) -> String {
        to_json(&serde_json::json!({ "required_confirmations": required }))
    }

    fn check(&self, report: &CheckReport) -> String {
        to_json(report)
    }

    fn plan(&self, plan: &DeployPlan) -> String {
        to_json(plan)
    }

    fn finality(&self, report: &FinalityReport) -> String {
        to_json(report)
    }

    fn config(&self, config: &Config) -> String {
        to_json(config)
    }
}

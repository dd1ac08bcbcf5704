//! Terminal renderer.
//!
//! `chains` and `confirmations` print bare values so shell scripts can
//! consume them directly; the other commands print short styled summaries.

use colored::Colorize;

use crate::config::Config;
use crate::models::{ChainsReport, CheckReport, FinalityReport, NetworkKind};
use crate::output::OutputRenderer;
use crate::plan::DeployPlan;

/// Terminal output renderer.
pub struct TerminalRenderer;

fn kind_label(kind: NetworkKind) -> String {
    match kind {
        NetworkKind::Development => kind.to_string().green().bold().to_string(),
        NetworkKind::Live => kind.to_string().yellow().bold().to_string(),
    }
}

fn yes_no(value: bool) -> String {
    if value {
        "yes".green().to_string()
    } else {
        "no".dimmed().to_string()
    }
}

impl OutputRenderer for TerminalRenderer {
    fn chains(&self, report: &ChainsReport) -> String {
        let mut output = String::new();
        for chain in &report.development_chains {
            output.push_str(chain);
            output.push('\n');
        }
        output
    }

    fn confirmations(&self, required: u64) -> String {
        format!("{required}\n")
    }

    fn check(&self, report: &CheckReport) -> String {
        let icon = match report.kind {
            NetworkKind::Development => "✔".green().bold(),
            NetworkKind::Live => "●".yellow().bold(),
        };
        format!(
            " {} {} is a {} network\n",
            icon,
            report.network.bold(),
            kind_label(report.kind)
        )
    }

    fn plan(&self, plan: &DeployPlan) -> String {
        let mut output = String::new();
        output.push_str(&format!(" {}    {}\n", "network:".cyan(), plan.network.bold()));
        output.push_str(&format!(" {}       {}\n", "kind:".cyan(), kind_label(plan.kind)));
        output.push_str(&format!(
            " {}       {} block(s)\n",
            "wait:".cyan(),
            plan.wait_confirmations
        ));
        output.push_str(&format!(" {}     {}\n", "verify:".cyan(), yes_no(plan.verify)));
        output
    }

    fn finality(&self, report: &FinalityReport) -> String {
        let status = if report.is_final {
            "✔ final".green().bold().to_string()
        } else {
            format!("… {} more block(s)", report.remaining)
                .yellow()
                .bold()
                .to_string()
        };
        format!(
            " {} {} — {}/{} confirmations (included at {}, head {})\n",
            status,
            report.network.bold(),
            report.confirmations,
            report.required,
            report.included_at,
            report.head
        )
    }

    fn config(&self, config: &Config) -> String {
        toml::to_string_pretty(config).unwrap_or_else(|e| format!("# failed to render config: {e}\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chains::ChainSettings;
    use crate::config::VerificationConfig;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn chains_one_per_line() {
        let out = TerminalRenderer.chains(&ChainsReport::from(&ChainSettings::default()));
        assert_eq!(out, "hardhat\nlocalhost\n");
    }

    #[test]
    fn confirmations_bare_number() {
        assert_eq!(TerminalRenderer.confirmations(6), "6\n");
    }

    #[test]
    fn check_mentions_kind() {
        plain();
        let settings = ChainSettings::default();
        let out = TerminalRenderer.check(&CheckReport::new(&settings, "mainnet"));
        assert!(out.contains("mainnet is a live network"), "got: {out}");
    }

    #[test]
    fn plan_lists_fields() {
        plain();
        let plan = DeployPlan::resolve(
            &ChainSettings::default(),
            "sepolia",
            &VerificationConfig::default(),
        );
        let out = TerminalRenderer.plan(&plan);
        assert!(out.contains("sepolia"));
        assert!(out.contains("6 block(s)"));
        assert!(out.contains("no"));
    }

    #[test]
    fn finality_pending() {
        plain();
        let report = FinalityReport::new(&ChainSettings::default(), "mainnet", 10, 13);
        let out = TerminalRenderer.finality(&report);
        assert!(out.contains("3 more block(s)"), "got: {out}");
        assert!(out.contains("3/6"));
    }

    #[test]
    fn config_renders_toml() {
        let out = TerminalRenderer.config(&Config::default().resolved());
        assert!(out.contains("[chains]"));
        assert!(out.contains("confirmations = 6"));
        let reparsed: Config = toml::from_str(&out).unwrap();
        assert_eq!(reparsed.chains.confirmations, Some(6));
    }
}

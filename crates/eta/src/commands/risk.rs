use anyhow::{Context, Result};
use eta_config::RiskArgs;
use eta_settings::EtaSettings;

use crate::progress::scanning;

pub(crate) fn handle(args: RiskArgs, settings: &EtaSettings, progress: bool) -> Result<()> {
    let label = format!("Scanning {} for risk areas", args.path.display());
    let report = scanning(progress, label, || {
        eta_risk::build_report(&args.task, &args.path, &settings.scope, &settings.risk)
    })
    .context("Invalid risk pattern in settings")?;

    tracing::info!(
        task_risks = report.task_risks.len(),
        findings = report.findings.len(),
        "risk report ready"
    );

    if args.json {
        println!("{}", eta_format::render_risk_json(&report)?);
    } else {
        print!(
            "{}",
            eta_format::render_risk_text(&report, settings.risk.max_samples)
        );
    }
    Ok(())
}

use anyhow::Result;
use eta_config::EstimateArgs;
use eta_settings::EtaSettings;

use crate::progress::scanning;

pub(crate) fn handle(args: EstimateArgs, settings: &EtaSettings, progress: bool) -> Result<()> {
    let metrics = scanning(progress, format!("Scanning {}", args.path.display()), || {
        eta_scope::analyze_scope(&args.path, &settings.scope)
    });

    let estimate = eta_estimate::estimate_task(&args.task, &metrics, args.files, settings);
    tracing::info!(
        category = %estimate.category,
        low = estimate.low_estimate,
        high = estimate.high_estimate,
        warnings = estimate.warnings.len(),
        "estimate ready"
    );

    if args.json {
        println!(
            "{}",
            eta_format::render_estimate_json(&args.task, &metrics, &estimate)?
        );
    } else {
        print!(
            "{}",
            eta_format::render_estimate_text(&args.task, &metrics, &estimate)
        );
    }
    Ok(())
}

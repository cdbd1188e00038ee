use crate::orchestrator::{Orchestrator, RunReport};
use curator_core::{Error, Result};

pub async fn execute(orchestrator: &Orchestrator, dry_run: bool) -> Result<()> {
    tracing::info!(
        host = %orchestrator.settings().endpoint(),
        prefixes = ?orchestrator.settings().index_prefixes,
        percentage = orchestrator.settings().percentage_threshold,
        dry_run,
        "Removing oldest indices above disk threshold"
    );

    let report = orchestrator.run(dry_run).await?;
    println!("{}", render(&report)?);

    if report.is_complete() {
        Ok(())
    } else {
        Err(Error::incomplete_run(report.failed.len(), report.planned.len()))
    }
}

/// The report printed on stdout once a run finishes
fn render(report: &RunReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

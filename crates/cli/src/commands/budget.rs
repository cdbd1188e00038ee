use crate::orchestrator::Orchestrator;
use curator_core::Result;
use curator_utils::format_bytes;

pub async fn execute(orchestrator: &Orchestrator, json: bool) -> Result<()> {
    let report = orchestrator.budget().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Nodes:    {}", report.node_disk_totals.len());
    println!("Capacity: {} ({} bytes)", format_bytes(report.capacity_bytes), report.capacity_bytes);
    println!(
        "Budget:   {} ({} bytes, {}%)",
        format_bytes(report.budget.whole_bytes()),
        report.budget,
        report.percentage_threshold
    );
    Ok(())
}

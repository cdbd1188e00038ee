use crate::orchestrator::Orchestrator;
use chrono::Utc;
use curator_core::Result;
use curator_utils::format_bytes;
use serde::Serialize;

#[derive(Serialize)]
struct PlanOutput<'a> {
    /// Deletions in the order `run` would issue them
    delete: Vec<&'a str>,
    retain: Vec<&'a str>,
    retained_bytes: u128,
    deleted_bytes: u128,
}

pub async fn execute(orchestrator: &Orchestrator, json: bool) -> Result<()> {
    let plan = orchestrator.plan(Utc::now()).await?;

    if json {
        let output = PlanOutput {
            delete: plan.oldest_first().map(|n| n.as_str()).collect(),
            retain: plan.to_retain().iter().map(|n| n.as_str()).collect(),
            retained_bytes: plan.retained_bytes(),
            deleted_bytes: plan.deleted_bytes(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if plan.is_empty() {
        println!("Nothing to delete ({} retained)", format_bytes(plan.retained_bytes()));
        return Ok(());
    }

    println!(
        "{} indices to delete, {} to free:",
        plan.to_delete().len(),
        format_bytes(plan.deleted_bytes())
    );
    for name in plan.oldest_first() {
        println!("  {name}");
    }
    Ok(())
}

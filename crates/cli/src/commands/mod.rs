use clap::Subcommand;
use curator_client::ElasticsearchClient;
use curator_config::Settings;
use curator_core::Result;
use std::sync::Arc;

use crate::orchestrator::Orchestrator;

pub mod budget;
pub mod plan;
pub mod run;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Delete the oldest indices that do not fit in the disk budget
    Run {
        /// Compute and log the plan without deleting anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the deletion plan without deleting anything
    Plan {
        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print cluster capacity and the derived disk budget
    Budget {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Run { dry_run: false }
    }
}

impl Commands {
    pub async fn execute(self, settings: Arc<Settings>) -> Result<()> {
        let client = Arc::new(ElasticsearchClient::new(&settings.elasticsearch)?);
        let orchestrator = Orchestrator::new(Arc::clone(&settings), client.clone(), client);

        match self {
            Commands::Run { dry_run } => {
                run::execute(&orchestrator, dry_run || settings.dry_run()).await
            }
            Commands::Plan { json } => plan::execute(&orchestrator, json).await,
            Commands::Budget { json } => budget::execute(&orchestrator, json).await,
        }
    }
}

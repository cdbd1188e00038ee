use clap::{Args, Parser};
use curator::Commands;
use curator_config::SettingsLoader;
use curator_core::PolicyKind;
use curator_utils::LogFormat;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "curator")]
#[command(about = "Keeps Elasticsearch indices within a share of cluster disk", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Overrides for the environment configuration
#[derive(Args, Debug, Default)]
struct GlobalArgs {
    /// Elasticsearch host, e.g. `es.internal:9200` or `http://localhost:9200`
    #[arg(long, global = true)]
    host: Option<String>,

    /// Share of total cluster disk the managed indices may use (0-100)
    #[arg(long, global = true)]
    percentage: Option<u32>,

    /// Index name prefix to manage (can be specified multiple times)
    #[arg(long = "prefix", global = true)]
    prefixes: Vec<String>,

    /// Retention policy (size, age, size+age)
    #[arg(long, global = true)]
    policy: Option<PolicyKind>,

    /// Maximum index age in days for the age policy
    #[arg(long, global = true)]
    retention_days: Option<u32>,

    /// Log output format (json, pretty)
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,
}

impl GlobalArgs {
    fn apply(self, mut loader: SettingsLoader) -> SettingsLoader {
        if let Some(host) = self.host {
            loader = loader.host(host);
        }
        if let Some(percentage) = self.percentage {
            loader = loader.percentage_threshold(percentage);
        }
        if !self.prefixes.is_empty() {
            loader = loader.index_prefixes(self.prefixes);
        }
        if let Some(policy) = self.policy {
            loader = loader.policy(policy);
        }
        if let Some(days) = self.retention_days {
            loader = loader.retention_days(days);
        }
        if let Some(format) = self.log_format {
            loader = loader.log_format(format);
        }
        loader
    }
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    // A missing .env file is normal in production
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let settings = cli.global.apply(SettingsLoader::from_env()?).build()?;

    curator_utils::tracing::init(settings.runtime.log_format)
        .map_err(|e| eyre::eyre!("failed to initialize logging: {e}"))?;

    let command = cli.command.unwrap_or_default();
    command.execute(Arc::new(settings)).await?;

    Ok(())
}

// Re-export command modules
pub mod commands;
pub mod orchestrator;

// Re-export commonly used types
pub use commands::Commands;
pub use orchestrator::{BudgetReport, FailedDeletion, Orchestrator, RunReport};

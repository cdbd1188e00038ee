//! Core domain types, errors, and constants for `curator`.
//!
//! ## Key Components
//!
//! - **`errors`**: the primary `Error` enum and `Result` alias shared by every
//!   crate in the workspace.
//! - **`types`**: validated newtypes and snapshots such as `IndexName`,
//!   `IndexDescriptor` and `Budget`.
//! - **`constants`**: environment variable names and defaults.

pub mod constants;
pub mod errors;
pub mod types;

pub use self::{
    constants::*,
    errors::{Error, Result, ResultExt},
    types::*,
};

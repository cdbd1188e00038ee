//! Shared utilities for curator: log setup, structured decision events and
//! byte formatting.

pub mod bytes;
pub mod tracing;

pub use bytes::format_bytes;
pub use self::tracing::LogFormat;

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// Which retention rules decide what gets deleted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyKind {
    /// Keep the newest indices that fit under the disk budget
    #[default]
    Size,
    /// Delete indices older than the retention window
    Age,
    /// Delete an index when either rule would
    #[serde(rename = "size+age", alias = "size-and-age")]
    SizeAndAge,
}

impl PolicyKind {
    /// Whether the policy needs a retention window to be configured
    pub fn needs_retention_window(&self) -> bool {
        matches!(self, PolicyKind::Age | PolicyKind::SizeAndAge)
    }
}

impl Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyKind::Size => write!(f, "size"),
            PolicyKind::Age => write!(f, "age"),
            PolicyKind::SizeAndAge => write!(f, "size+age"),
        }
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "size" => Ok(PolicyKind::Size),
            "age" => Ok(PolicyKind::Age),
            "size+age" | "size-and-age" => Ok(PolicyKind::SizeAndAge),
            other => Err(Error::configuration(format!(
                "Unknown retention policy: {other} (expected size, age or size+age)"
            ))),
        }
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Outcome of checking a single email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    /// The input exactly as given
    pub input: String,
    /// Normalized domain, present only when the input has exactly one `@`
    /// and a non-empty domain part
    pub domain: Option<String>,
    /// Whether the domain is in the blocklist
    pub disposable: bool,
}

impl CheckReport {
    /// Human readable verdict
    pub fn status(&self) -> &'static str {
        if self.disposable {
            "disposable"
        } else {
            "legitimate"
        }
    }

    /// Serialize to a JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.input, self.status())
    }
}

/// Summary of a loaded blocklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlocklistStats {
    pub total_domains: usize,
}

impl BlocklistStats {
    /// Serialize to a JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for BlocklistStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Total disposable domains tracked: {}", self.total_domains)
    }
}

/// Serialize a batch of reports as a JSON array
pub fn reports_to_json(reports: &[CheckReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}

//! Normalized set of disposable email domains.
//!
//! A [`Blocklist`] is built once from newline-delimited text and never
//! mutated afterwards, so it can be shared freely between threads by
//! reference or behind an `Arc`.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::email::{domain_part, normalize_domain};
use crate::report::BlocklistStats;

/// Blocklist compiled into the crate, one domain per line.
pub const EMBEDDED_BLOCKLIST: &str = include_str!("../data/disposable_email_blocklist.conf");

/// Process-wide blocklist parsed from [`EMBEDDED_BLOCKLIST`] on first use.
static DEFAULT_BLOCKLIST: Lazy<Blocklist> = Lazy::new(|| {
    let blocklist = Blocklist::parse(EMBEDDED_BLOCKLIST);
    debug!(domains = blocklist.len(), "parsed embedded blocklist");
    blocklist
});

/// Get the process-wide blocklist built from the embedded data.
///
/// Parsing runs exactly once, even when several threads call this
/// concurrently; every caller sees the fully populated set.
pub fn default_blocklist() -> &'static Blocklist {
    &DEFAULT_BLOCKLIST
}

/// Immutable set of lowercase, trimmed domains.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blocklist {
    domains: HashSet<String>,
}

impl Blocklist {
    /// Parse a blocklist from raw text.
    ///
    /// Each line is trimmed and lowercased; blank lines are skipped. There is
    /// no comment syntax. Any input is accepted, empty input yields an empty
    /// blocklist.
    pub fn parse(raw: &str) -> Self {
        raw.split('\n').collect()
    }

    /// Create an empty blocklist
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check whether a bare domain is in the blocklist.
    ///
    /// The input is trimmed and lowercased before lookup. Only exact matches
    /// count: subdomains and substrings of listed domains do not match.
    pub fn is_disposable_domain(&self, domain: &str) -> bool {
        if domain.is_empty() {
            return false;
        }

        let trimmed = domain.trim();
        if trimmed.bytes().all(|b| b.is_ascii() && !b.is_ascii_uppercase()) {
            // Already normalized, skip the allocation
            self.domains.contains(trimmed)
        } else {
            self.domains.contains(&normalize_domain(trimmed))
        }
    }

    /// Check whether an email address uses a blocklisted domain.
    ///
    /// Inputs without exactly one `@` are never disposable.
    pub fn is_disposable(&self, email: &str) -> bool {
        if email.is_empty() {
            return false;
        }

        match domain_part(email) {
            Some(domain) => self.is_disposable_domain(domain),
            None => false,
        }
    }

    /// Copy of every domain in the blocklist, in no particular order.
    ///
    /// Allocates one `String` per entry; prefer [`Blocklist::iter`] or the
    /// lookup methods on hot paths.
    pub fn all_domains(&self) -> Vec<String> {
        self.domains.iter().cloned().collect()
    }

    /// Iterate over the domains without copying them.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.domains.iter().map(String::as_str)
    }

    /// Number of domains in the blocklist.
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Summary statistics for this blocklist.
    pub fn stats(&self) -> BlocklistStats {
        BlocklistStats {
            total_domains: self.len(),
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Blocklist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let domains = iter
            .into_iter()
            .map(|line| normalize_domain(line.as_ref()))
            .filter(|domain| !domain.is_empty())
            .collect();
        Self { domains }
    }
}

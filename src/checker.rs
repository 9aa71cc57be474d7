//! Checker service.
//!
//! Wraps a shared, immutable blocklist so it can be built once during
//! startup and handed to request handlers by cloning the handle.

use std::sync::Arc;

use crate::blocklist::{Blocklist, EMBEDDED_BLOCKLIST};
use crate::config::CheckerOptions;
use crate::email::{domain_part, normalize_domain};
use crate::error::Result;
use crate::loader::BlocklistLoader;
use crate::report::{BlocklistStats, CheckReport};

/// Cheap-to-clone handle to a loaded blocklist.
#[derive(Debug, Clone)]
pub struct DisposableChecker {
    blocklist: Arc<Blocklist>,
}

impl DisposableChecker {
    /// Create a checker from options, loading the configured blocklist.
    pub fn new(options: CheckerOptions) -> Result<Self> {
        Self::from_loader(options.loader().as_ref())
    }

    /// Create a checker from any loader.
    pub fn from_loader(loader: &dyn BlocklistLoader) -> Result<Self> {
        Ok(Self::from_blocklist(loader.load()?))
    }

    /// Create a checker around an already built blocklist.
    pub fn from_blocklist(blocklist: Blocklist) -> Self {
        Self {
            blocklist: Arc::new(blocklist),
        }
    }

    /// Create a checker backed by the embedded blocklist.
    pub fn embedded() -> Self {
        Self::from_blocklist(Blocklist::parse(EMBEDDED_BLOCKLIST))
    }

    pub fn is_disposable(&self, email: &str) -> bool {
        self.blocklist.is_disposable(email)
    }

    pub fn is_disposable_domain(&self, domain: &str) -> bool {
        self.blocklist.is_disposable_domain(domain)
    }

    /// Check an email address and describe the outcome.
    pub fn check(&self, email: &str) -> CheckReport {
        let domain = domain_part(email)
            .filter(|d| !d.is_empty())
            .map(normalize_domain);

        CheckReport {
            input: email.to_string(),
            domain,
            disposable: self.blocklist.is_disposable(email),
        }
    }

    /// Check a batch of email addresses.
    pub fn check_all<I, S>(&self, emails: I) -> Vec<CheckReport>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        emails
            .into_iter()
            .map(|email| self.check(email.as_ref()))
            .collect()
    }

    pub fn all_domains(&self) -> Vec<String> {
        self.blocklist.all_domains()
    }

    pub fn count(&self) -> usize {
        self.blocklist.len()
    }

    pub fn stats(&self) -> BlocklistStats {
        self.blocklist.stats()
    }

    /// The underlying blocklist
    pub fn blocklist(&self) -> &Blocklist {
        &self.blocklist
    }

    /// Shared handle to the underlying blocklist
    pub fn shared(&self) -> Arc<Blocklist> {
        Arc::clone(&self.blocklist)
    }
}

impl Default for DisposableChecker {
    fn default() -> Self {
        Self::embedded()
    }
}

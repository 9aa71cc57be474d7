//! Explicit blocklist loading.
//!
//! Applications that prefer not to rely on the process-wide default can load
//! a [`Blocklist`] once at startup through a [`BlocklistLoader`] and pass it
//! to whatever needs it.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::blocklist::{Blocklist, EMBEDDED_BLOCKLIST};
use crate::error::{BlocklistError, Result};

/// Trait for producing a blocklist
pub trait BlocklistLoader: Send + Sync {
    /// Build the blocklist
    fn load(&self) -> Result<Blocklist>;
}

/// Loads the blocklist compiled into the crate. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedLoader;

impl BlocklistLoader for EmbeddedLoader {
    fn load(&self) -> Result<Blocklist> {
        let blocklist = Blocklist::parse(EMBEDDED_BLOCKLIST);
        debug!(domains = blocklist.len(), "loaded embedded blocklist");
        Ok(blocklist)
    }
}

/// Loads a newline-delimited blocklist file, read once per `load` call.
#[derive(Debug, Clone, Default)]
pub struct FileLoader {
    path: Option<PathBuf>,
    embedded_fallback: bool,
}

impl FileLoader {
    /// Create a new FileLoader
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the blocklist file path
    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Use the embedded blocklist when the file cannot be loaded
    pub fn with_embedded_fallback(mut self, enabled: bool) -> Self {
        self.embedded_fallback = enabled;
        self
    }

    /// Configured file path, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn read_file(&self) -> Result<Blocklist> {
        let path = self.path.as_ref().ok_or_else(|| {
            BlocklistError::NotConfigured("blocklist file path not set".to_string())
        })?;

        let bytes = fs::read(path).map_err(|source| BlocklistError::Io {
            path: path.clone(),
            source,
        })?;
        let text = String::from_utf8(bytes)
            .map_err(|_| BlocklistError::InvalidEncoding { path: path.clone() })?;

        let blocklist = Blocklist::parse(&text);
        debug!(
            path = %path.display(),
            domains = blocklist.len(),
            "loaded blocklist file"
        );
        Ok(blocklist)
    }
}

impl BlocklistLoader for FileLoader {
    fn load(&self) -> Result<Blocklist> {
        match self.read_file() {
            Err(e) if self.embedded_fallback => {
                warn!(error = %e, "falling back to embedded blocklist");
                EmbeddedLoader.load()
            }
            result => result,
        }
    }
}

/// In-memory loader, mostly for tests and callers that assemble lists themselves
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    domains: Vec<String>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_domain(&mut self, domain: &str) {
        self.domains.push(domain.to_string());
    }

    pub fn with_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.domains.extend(domains.into_iter().map(Into::into));
        self
    }
}

impl BlocklistLoader for MemoryLoader {
    fn load(&self) -> Result<Blocklist> {
        Ok(self.domains.iter().collect())
    }
}

/// Loader that always yields an empty blocklist
#[derive(Debug, Clone, Copy, Default)]
pub struct NilLoader;

impl BlocklistLoader for NilLoader {
    fn load(&self) -> Result<Blocklist> {
        Ok(Blocklist::empty())
    }
}

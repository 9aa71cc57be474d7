use std::path::{Path, PathBuf};

use crate::loader::{BlocklistLoader, EmbeddedLoader, FileLoader};

/// Environment variable naming a blocklist file to load instead of the
/// embedded one
pub const BLOCKLIST_PATH_ENV: &str = "EMAIL_DISPOSABLE_BLOCKLIST";

/// Environment variable enabling the embedded fallback ("1", "true" or "yes")
pub const EMBEDDED_FALLBACK_ENV: &str = "EMAIL_DISPOSABLE_FALLBACK";

/// Checker builder options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckerOptions {
    /// Blocklist file to load; the embedded list is used when unset
    pub blocklist_path: Option<PathBuf>,
    /// Fall back to the embedded list if the file cannot be loaded
    pub embedded_fallback: bool,
}

impl CheckerOptions {
    /// Create new checker options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read options from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read options through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let blocklist_path = lookup(BLOCKLIST_PATH_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let embedded_fallback = lookup(EMBEDDED_FALLBACK_ENV)
            .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            blocklist_path,
            embedded_fallback,
        }
    }

    /// Set blocklist file path.
    pub fn with_blocklist_path(mut self, path: impl AsRef<Path>) -> Self {
        self.blocklist_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set embedded fallback.
    pub fn with_embedded_fallback(mut self, enabled: bool) -> Self {
        self.embedded_fallback = enabled;
        self
    }

    /// Loader matching these options.
    pub fn loader(&self) -> Box<dyn BlocklistLoader> {
        match &self.blocklist_path {
            Some(path) => Box::new(
                FileLoader::new()
                    .with_path(path)
                    .with_embedded_fallback(self.embedded_fallback),
            ),
            None => Box::new(EmbeddedLoader),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_options() {
        let options = CheckerOptions::new();
        assert!(options.blocklist_path.is_none());
        assert!(!options.embedded_fallback);
    }

    #[test]
    fn test_builder() {
        let options = CheckerOptions::new()
            .with_blocklist_path("/srv/blocklist.conf")
            .with_embedded_fallback(true);
        assert_eq!(
            options.blocklist_path,
            Some(PathBuf::from("/srv/blocklist.conf"))
        );
        assert!(options.embedded_fallback);
    }

    #[test]
    fn test_from_lookup() {
        let options = CheckerOptions::from_lookup(lookup_from(&[
            (BLOCKLIST_PATH_ENV, " /data/list.conf "),
            (EMBEDDED_FALLBACK_ENV, "TRUE"),
        ]));
        assert_eq!(options.blocklist_path, Some(PathBuf::from("/data/list.conf")));
        assert!(options.embedded_fallback);
    }

    #[test]
    fn test_from_lookup_empty() {
        let options = CheckerOptions::from_lookup(lookup_from(&[
            (BLOCKLIST_PATH_ENV, "  "),
            (EMBEDDED_FALLBACK_ENV, "0"),
        ]));
        assert_eq!(options, CheckerOptions::default());

        let options = CheckerOptions::from_lookup(|_| None);
        assert_eq!(options, CheckerOptions::default());
    }

    #[test]
    fn test_loader_embedded_when_no_path() {
        let blocklist = CheckerOptions::new().loader().load().unwrap();
        assert!(blocklist.is_disposable_domain("10mail.org"));
    }

    #[test]
    fn test_loader_uses_file_path() {
        let path = std::env::temp_dir().join("email_disposable_config_missing.conf");
        let result = CheckerOptions::new()
            .with_blocklist_path(&path)
            .loader()
            .load();
        assert!(result.is_err());

        let blocklist = CheckerOptions::new()
            .with_blocklist_path(&path)
            .with_embedded_fallback(true)
            .loader()
            .load()
            .unwrap();
        assert!(blocklist.is_disposable_domain("10mail.org"));
    }
}

//! Email Disposable - detect addresses from disposable/temporary email providers
//!
//! This library answers one question: does an email address (or a bare domain)
//! belong to a known disposable email provider? It provides:
//! - An embedded blocklist of disposable domains, parsed once on first use
//! - Case-insensitive, exact-match O(1) lookups
//! - Explicit loaders for applications that load their list at startup
//! - Serializable check reports
//!
//! # Example
//!
//! ```rust
//! use email_disposable::{is_disposable, is_disposable_domain};
//!
//! assert!(is_disposable("user@0-mail.com"));
//! assert!(is_disposable("USER@0-MAIL.COM"));
//! assert!(!is_disposable("user@gmail.com"));
//!
//! assert!(is_disposable_domain("10mail.org"));
//! ```
//!
//! # Explicit loading
//!
//! ```rust
//! use email_disposable::{DisposableChecker, MemoryLoader};
//!
//! let loader = MemoryLoader::new().with_domains(["tempbox.example"]);
//! let checker = DisposableChecker::from_loader(&loader).unwrap();
//!
//! assert!(checker.is_disposable("someone@TempBox.example"));
//! assert_eq!(checker.count(), 1);
//! ```
//!
//! # Matching Rules
//!
//! | Input | Result | Why |
//! |-------|--------|-----|
//! | `user@0-mail.com` | disposable | exact domain match |
//! | `USER@0-Mail.COM` | disposable | lookups are case-insensitive |
//! | `user@0-mail.com ` | disposable | whitespace around the domain is trimmed |
//! | `user@www.0-mail.com` | not disposable | no subdomain or suffix matching |
//! | `a@@0-mail.com` | not disposable | anything but exactly one `@` is rejected |
//! | `""` | not disposable | empty input |

pub mod blocklist;
pub mod checker;
pub mod config;
pub mod email;
pub mod error;
pub mod loader;
pub mod report;

// Re-export commonly used items
pub use blocklist::{default_blocklist, Blocklist, EMBEDDED_BLOCKLIST};
pub use checker::DisposableChecker;
pub use config::{CheckerOptions, BLOCKLIST_PATH_ENV, EMBEDDED_FALLBACK_ENV};
pub use error::{BlocklistError, Result};
pub use loader::{BlocklistLoader, EmbeddedLoader, FileLoader, MemoryLoader, NilLoader};
pub use report::{BlocklistStats, CheckReport};

/// Check whether an email address uses a disposable domain.
///
/// Uses the embedded blocklist. Returns `false` for empty input and for
/// anything without exactly one `@`.
pub fn is_disposable(email: &str) -> bool {
    default_blocklist().is_disposable(email)
}

/// Check whether a bare domain is in the embedded blocklist.
pub fn is_disposable_domain(domain: &str) -> bool {
    default_blocklist().is_disposable_domain(domain)
}

/// Copy of every domain in the embedded blocklist, in no particular order.
///
/// Note: this can be thousands of entries; use [`is_disposable`] or
/// [`is_disposable_domain`] for lookups.
pub fn all_domains() -> Vec<String> {
    default_blocklist().all_domains()
}

/// Number of domains in the embedded blocklist.
pub fn count() -> usize {
    default_blocklist().len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_disposable() {
        let cases = [
            ("test@0-mail.com", true),
            ("user@10mail.org", true),
            ("TEST@0-MAIL.COM", true),
            ("Test@10Mail.Org", true),
            ("user@0-mail.com ", true),
            ("user@gmail.com", false),
            ("test@yahoo.com", false),
            ("employee@mycompany.com", false),
            ("", false),
            ("notanemail", false),
            ("test@@example.com", false),
            ("test@@0-mail.com", false),
        ];

        for (email, expected) in cases {
            assert_eq!(
                is_disposable(email),
                expected,
                "is_disposable({:?}) should be {}",
                email,
                expected
            );
        }
    }

    #[test]
    fn test_is_disposable_domain() {
        let cases = [
            ("0-mail.com", true),
            ("0-MAIL.COM", true),
            ("0-Mail.Com", true),
            (" 0-mail.com ", true),
            ("gmail.com", false),
            ("yahoo.com", false),
            ("", false),
        ];

        for (domain, expected) in cases {
            assert_eq!(
                is_disposable_domain(domain),
                expected,
                "is_disposable_domain({:?}) should be {}",
                domain,
                expected
            );
        }
    }

    #[test]
    fn test_all_domains_contains_known() {
        let domains = all_domains();
        assert!(!domains.is_empty());

        for known in ["0-mail.com", "10mail.org", "027168.com"] {
            assert!(
                domains.iter().any(|d| d == known),
                "all_domains() missing expected domain {}",
                known
            );
        }
    }

    #[test]
    fn test_count_matches_all_domains() {
        assert!(count() > 0);
        assert_eq!(count(), all_domains().len());
    }

    #[test]
    fn test_every_listed_domain_matches_in_any_case() {
        for domain in default_blocklist().iter() {
            assert!(is_disposable_domain(domain));
            assert!(is_disposable_domain(&domain.to_uppercase()));
            assert!(is_disposable(&format!("someone@{}", domain.to_uppercase())));
        }
    }

    #[test]
    fn test_listed_domains_are_normalized() {
        for domain in all_domains() {
            assert_eq!(domain, email::normalize_domain(&domain));
            assert!(!domain.is_empty());
        }
    }
}

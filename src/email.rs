//! Address splitting and domain normalization.
//!
//! No RFC 5321/5322 parsing is attempted. An address is split on every `@`
//! and only inputs with exactly one `@` yield a domain, so quoted local parts
//! that contain `@` are never classified.

/// Normalize a domain for lookup: trim surrounding whitespace and lowercase.
pub fn normalize_domain(domain: &str) -> String {
    domain.trim().to_lowercase()
}

/// Extract the trimmed domain part of an email address.
///
/// Returns `None` unless the input contains exactly one `@`.
pub fn domain_part(email: &str) -> Option<&str> {
    let mut parts = email.split('@');
    let _local = parts.next()?;
    let domain = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some(domain.trim())
}

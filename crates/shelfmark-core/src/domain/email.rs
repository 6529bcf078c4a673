/// Trims surrounding whitespace and lowercases; returns `None` for blank input.
pub fn normalize_email(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_ascii_lowercase())
}

/// Checks the `<local>@<domain>.<tld>` shape: a single `@` with a non-empty
/// local part, and a `.` inside the domain with non-empty segments around it.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::{is_valid_email, normalize_email};

    #[test]
    fn normalize_email_trims_and_lowercases() {
        let value = normalize_email("  Ada@Example.com ");
        assert_eq!(value.as_deref(), Some("ada@example.com"));
    }

    #[test]
    fn normalize_email_rejects_blank() {
        assert_eq!(normalize_email("   "), None);
    }

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("a.b@mail.example.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@example."));
        assert!(!is_valid_email("user@@example.com"));
    }
}

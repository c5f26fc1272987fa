use anyhow::{Result, bail};

/// Slugs are lowercase kebab-case: `[a-z0-9]` words joined by single hyphens.
fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

pub fn validate_slug(slug: &str) -> Result<()> {
    if is_valid_slug(slug) {
        Ok(())
    } else {
        bail!("slug '{}' must be lowercase kebab-case", slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_slugs() {
        assert!(validate_slug("creating-effective-worksheets").is_ok());
        assert!(validate_slug("post2026").is_ok());
        assert!(validate_slug("a").is_ok());
    }

    #[test]
    fn test_invalid_slugs() {
        assert!(validate_slug("").is_err());
        assert!(validate_slug("Blooms").is_err());
        assert!(validate_slug("blooms_taxonomy").is_err());
        assert!(validate_slug("-leading").is_err());
        assert!(validate_slug("trailing-").is_err());
        assert!(validate_slug("double--hyphen").is_err());
        assert!(validate_slug("../etc/passwd").is_err());
    }
}

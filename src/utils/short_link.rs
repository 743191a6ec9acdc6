//! Short link composition.

/// Builds the public short link for a slug.
///
/// Output shape is `<scheme>://<host>/<slug>`. The host keeps its port when
/// one is present; no normalization is applied beyond composition.
pub fn compose_short_link(scheme: &str, host: &str, slug: &str) -> String {
    format!("{}://{}/{}", scheme, host, slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_basic() {
        assert_eq!(
            compose_short_link("https", "s.example.com", "abc123"),
            "https://s.example.com/abc123"
        );
    }

    #[test]
    fn test_compose_keeps_port() {
        assert_eq!(
            compose_short_link("http", "localhost:3000", "abc123"),
            "http://localhost:3000/abc123"
        );
    }

    #[test]
    fn test_compose_is_deterministic() {
        let first = compose_short_link("https", "s.example.com", "abc123");
        let second = compose_short_link("https", "s.example.com", "abc123");

        assert_eq!(first, second);
    }

    #[test]
    fn test_compose_slug_changes_only_last_segment() {
        let first = compose_short_link("https", "s.example.com", "one");
        let second = compose_short_link("https", "s.example.com", "two");

        assert_eq!(
            first.strip_suffix("one").unwrap(),
            second.strip_suffix("two").unwrap()
        );
    }
}

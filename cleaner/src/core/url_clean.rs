//! Website and careers link sanitizing

use url::Url;

/// Keep a link only if it is an absolute http(s) URL with a host.
///
/// The accepted value is returned unchanged; anything else becomes empty.
pub fn clean_url(value: Option<&str>) -> String {
    let Some(raw) = value else {
        return String::new();
    };

    match Url::parse(raw) {
        Ok(parsed)
            if matches!(parsed.scheme(), "http" | "https")
                && parsed.host_str().is_some_and(|host| !host.is_empty()) =>
        {
            raw.to_string()
        }
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_urls_and_other_schemes() {
        assert_eq!(clean_url(Some("not a url")), "");
        assert_eq!(clean_url(Some("ftp://x.com")), "");
        assert_eq!(clean_url(Some("mailto:jobs@x.com")), "");
        assert_eq!(clean_url(Some("/jobs?companyId=1")), "");
        assert_eq!(clean_url(Some("")), "");
        assert_eq!(clean_url(None), "");
    }

    #[test]
    fn test_keeps_http_urls_unchanged() {
        assert_eq!(clean_url(Some("https://x.com")), "https://x.com");
        assert_eq!(
            clean_url(Some("http://Acme.example/careers?x=1")),
            "http://Acme.example/careers?x=1"
        );
    }
}

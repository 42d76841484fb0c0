//! Stream URL validation

use url::Url;

use tailview_core::prelude::*;

/// Parse `raw` and accept only `ws://` and `wss://` URLs with a host.
pub fn validate_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::NoStreamUrl);
    }

    let url = Url::parse(trimmed)
        .map_err(|e| Error::config_invalid(format!("invalid stream URL '{}': {}", trimmed, e)))?;

    match url.scheme() {
        "ws" | "wss" => {}
        other => {
            return Err(Error::config_invalid(format!(
                "unsupported URL scheme '{}' (expected ws or wss)",
                other
            )))
        }
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(Error::config_invalid(format!(
            "stream URL '{}' has no host",
            trimmed
        )));
    }

    Ok(url)
}

/// Whether `url` needs TLS support compiled in
pub fn requires_tls(url: &Url) -> bool {
    url.scheme() == "wss"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_ws_and_wss() {
        assert!(validate_url("ws://localhost:8080/logs").is_ok());
        let url = validate_url("wss://example.com/stream").unwrap();
        assert!(requires_tls(&url));
    }

    #[test]
    fn test_trims_whitespace() {
        let url = validate_url("  ws://127.0.0.1:9000  ").unwrap();
        assert_eq!(url.port(), Some(9000));
        assert!(!requires_tls(&url));
    }

    #[test]
    fn test_rejects_other_schemes() {
        assert!(matches!(
            validate_url("http://example.com"),
            Err(Error::ConfigInvalid { .. })
        ));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(validate_url("not a url").is_err());
    }

    #[test]
    fn test_empty_is_missing_url() {
        assert!(matches!(validate_url("   "), Err(Error::NoStreamUrl)));
    }
}

/// Feed loading
///
/// This module handles:
/// - HTTP GET of a hosted feed (http:// or https:// sources)
/// - Reading a local feed file (anything else)
/// - Parsing the body into a `Feed`
///
/// The feed is loaded exactly once per session; a failure here is terminal
/// for the caller (no retry, no partial data).

use std::fs;

use log::debug;

use crate::types::Feed;

const USER_AGENT: &str = "homescout/0.1.0 (https://github.com/imazen/homescout)";

/// Load and parse the listings feed from a URL or a local path
pub fn load_feed(source: &str) -> Result<Feed, String> {
    let body = if is_url(source) {
        http_get_string(source).map_err(|e| format!("Failed to fetch {}: {}", source, e))?
    } else {
        fs::read_to_string(source).map_err(|e| format!("Failed to read {}: {}", source, e))?
    };

    let feed: Feed = serde_json::from_str(&body)
        .map_err(|e| format!("Failed to parse {} as a listings feed: {}", source, e))?;

    debug!("loaded {} listings from {}", feed.properties.len(), source);
    Ok(feed)
}

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Download a feed body over HTTP. Non-2xx responses are errors.
fn http_get_string(url: &str) -> Result<String, String> {
    debug!("fetching {}", url);
    let resp = ureq::get(url)
        .set("User-Agent", USER_AGENT)
        .call()
        .map_err(|e| e.to_string())?;
    resp.into_string().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_feed(dir: &tempfile::TempDir, name: &str, body: &str) -> String {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(body.as_bytes()).unwrap();
        path.display().to_string()
    }

    #[test]
    fn test_load_feed_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_feed(
            &dir,
            "properties.json",
            r#"{"lastUpdated": "2024-06-15", "properties": [{"price": 350000, "bedrooms": 3}]}"#,
        );

        let feed = load_feed(&path).unwrap();
        assert_eq!(feed.last_updated.as_deref(), Some("2024-06-15"));
        assert_eq!(feed.properties.len(), 1);
        assert_eq!(feed.properties[0].bedrooms, Some(3));
    }

    #[test]
    fn test_load_feed_missing_file_names_the_source() {
        let err = load_feed("/nonexistent/properties.json").unwrap_err();
        assert!(err.contains("/nonexistent/properties.json"), "got: {}", err);
    }

    #[test]
    fn test_load_feed_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_feed(&dir, "broken.json", "{ not json");

        let err = load_feed(&path).unwrap_err();
        assert!(err.contains("parse"), "got: {}", err);
        assert!(err.contains("broken.json"), "got: {}", err);
    }

    #[test]
    fn test_is_url() {
        assert!(is_url("https://example.com/feed.json"));
        assert!(is_url("http://localhost:8080/feed.json"));
        assert!(!is_url("data/properties.json"));
        assert!(!is_url("./https-notes.json"));
    }
}

//! The app's current URL: a path and its ordered query pairs.
//!
//! Views never keep navigation or pagination state of their own; they read
//! it from [`Location`] and write changes back to it.

use quire_states::State;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl State for Location {}

impl Location {
    /// Parses `path?query`; a full URL keeps only the part after the host.
    pub fn parse(url: &str) -> Self {
        let url = strip_origin(url);
        let url = url.split('#').next().unwrap_or_default();
        let (path, query) = url.split_once('?').unwrap_or((url, ""));

        let query = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode(key), decode(value))
            })
            .collect();

        Self {
            path: path.to_string(),
            query,
        }
    }

    pub fn href(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{query}", self.path)
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Replaces the first `key` pair in place or appends one; drops duplicates.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        let mut seen = false;
        self.query.retain_mut(|(k, v)| {
            if k != key {
                return true;
            }
            if seen {
                return false;
            }
            seen = true;
            *v = value.clone();
            true
        });
        if !seen {
            self.query.push((key.to_string(), value));
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.query.retain(|(k, _)| k != key);
    }

    /// Moves to `path` and clears the query.
    pub fn navigate(&mut self, path: impl Into<String>) {
        self.path = path.into();
        self.query.clear();
    }
}

fn strip_origin(url: &str) -> &str {
    match url.split_once("://") {
        Some((_, rest)) => rest.find('/').map_or("/", |i| &rest[i..]),
        None => url,
    }
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|s| s.into_owned())
        .unwrap_or(spaced)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_path_and_decoded_pairs() {
        let location = Location::parse("/t/acme/settings/members?query=jane+doe&page=2&tag=a%26b");

        assert_eq!(location.path, "/t/acme/settings/members");
        assert_eq!(location.get("query"), Some("jane doe"));
        assert_eq!(location.get("page"), Some("2"));
        assert_eq!(location.get("tag"), Some("a&b"));
    }

    #[test]
    fn full_urls_keep_path_only() {
        let location = Location::parse("https://sign.example.com/settings/profile#top");
        assert_eq!(location.path, "/settings/profile");
        assert!(location.query.is_empty());
    }

    #[test]
    fn set_keeps_position_and_order() {
        let mut location = Location::parse("/members?query=x&page=1&sort=asc");
        location.set("page", "3");
        location.set("perPage", "20");

        assert_eq!(location.href(), "/members?query=x&page=3&sort=asc&perPage=20");
    }

    #[test]
    fn navigate_clears_query() {
        let mut location = Location::parse("/t/acme/settings/members?page=4");
        location.navigate("/settings/password");

        assert_eq!(location.href(), "/settings/password");
    }
}

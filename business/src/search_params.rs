use crate::location::Location;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Listing parameters carried in the URL query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub query: Option<String>,
    pub page: u32,
    pub per_page: u32,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            query: None,
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl SearchParams {
    /// Lenient parse: anything that is not a positive integer falls back to
    /// its default instead of failing.
    pub fn parse<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key {
                "query" if !value.is_empty() => params.query = Some(value.to_string()),
                "page" => params.page = positive(value).unwrap_or(DEFAULT_PAGE),
                "perPage" => params.per_page = positive(value).unwrap_or(DEFAULT_PER_PAGE),
                _ => {}
            }
        }
        params
    }

    pub fn from_location(location: &Location) -> Self {
        Self::parse(location.query.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }
}

fn positive(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|n| *n > 0)
}

/// Writes `updates` into the location's query. Empty values remove their key;
/// the path and every other key stay as they were.
pub fn update_search_params(location: &mut Location, updates: &[(&str, String)]) {
    for (key, value) in updates {
        if value.is_empty() {
            location.remove(key);
        } else {
            location.set(key, value.clone());
        }
    }
}

/// Pagination writes exactly `page` and `perPage`.
pub fn set_pagination(location: &mut Location, page: u32, per_page: u32) {
    update_search_params(
        location,
        &[("page", page.to_string()), ("perPage", per_page.to_string())],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_params_use_defaults() {
        assert_eq!(SearchParams::parse(Vec::<(&str, &str)>::new()), SearchParams::default());
    }

    #[test]
    fn invalid_numbers_are_coerced() {
        let params = SearchParams::parse([("page", "0"), ("perPage", "-5"), ("query", "")]);
        assert_eq!(params, SearchParams::default());

        let params = SearchParams::parse([("page", "abc"), ("perPage", "20")]);
        assert_eq!(params.page, DEFAULT_PAGE);
        assert_eq!(params.per_page, 20);
    }

    #[test]
    fn valid_params_are_kept() {
        let location = Location::parse("/members?query=ann&page=3&perPage=50");
        let params = SearchParams::from_location(&location);

        assert_eq!(params.query.as_deref(), Some("ann"));
        assert_eq!(params.page, 3);
        assert_eq!(params.per_page, 50);
    }

    #[test]
    fn pagination_touches_only_page_keys() {
        let mut location = Location::parse("/t/acme/settings/members?query=ann&tab=all&page=1");
        set_pagination(&mut location, 4, 10);

        assert_eq!(location.path, "/t/acme/settings/members");
        assert_eq!(location.get("query"), Some("ann"));
        assert_eq!(location.get("tab"), Some("all"));
        assert_eq!(location.get("page"), Some("4"));
        assert_eq!(location.get("perPage"), Some("10"));
    }

    #[test]
    fn empty_update_removes_key() {
        let mut location = Location::parse("/members?query=ann&page=2");
        update_search_params(&mut location, &[("query", String::new())]);

        assert_eq!(location.href(), "/members?page=2");
    }
}

//! Query string construction.
//!
//! [`QueryParams`] collects only the parameters an options value actually
//! sets. Unset optional values never produce a pair.

use std::fmt::Display;

use chrono::{DateTime, SecondsFormat, Utc};

/// An ordered list of query parameters. Names may repeat.
///
/// # Example
///
/// ```rust
/// use global_catalog::rest::QueryParams;
///
/// let mut query = QueryParams::new();
/// query.push_opt("account", Some("global"));
/// query.push_opt("complete", None::<bool>);
/// query.push_opt("depth", Some(2_i64));
///
/// assert_eq!(query.len(), 2);
/// assert_eq!(query.get("depth"), Some("2"));
/// assert_eq!(query.get("complete"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Creates an empty parameter list.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Appends a parameter.
    pub fn push(&mut self, name: &str, value: impl Display) {
        self.pairs.push((name.to_string(), value.to_string()));
    }

    /// Appends a parameter when `value` is set.
    pub fn push_opt<T: Display>(&mut self, name: &str, value: Option<T>) {
        if let Some(value) = value {
            self.push(name, value);
        }
    }

    /// Appends one same-named parameter per value.
    pub fn push_all<T: Display>(&mut self, name: &str, values: &[T]) {
        for value in values {
            self.push(name, value);
        }
    }

    /// Appends an RFC 3339 date-time parameter when `value` is set.
    pub fn push_datetime(&mut self, name: &str, value: Option<&DateTime<Utc>>) {
        if let Some(value) = value {
            self.push(name, value.to_rfc3339_opts(SecondsFormat::AutoSi, true));
        }
    }

    /// Returns the first value of `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns the number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if no parameter is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Consumes the list and returns its pairs in order.
    #[must_use]
    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_unset_values_are_omitted() {
        let mut query = QueryParams::new();
        query.push_opt("q", None::<&str>);
        query.push_opt("descending", None::<bool>);
        query.push_datetime("startat", None);

        assert!(query.is_empty());
    }

    #[test]
    fn test_canonical_primitive_forms() {
        let mut query = QueryParams::new();
        query.push_opt("descending", Some(true));
        query.push_opt("_offset", Some(0_i64));
        query.push_opt("_limit", Some(-1_i64));

        assert_eq!(
            query.into_pairs(),
            vec![
                ("descending".to_string(), "true".to_string()),
                ("_offset".to_string(), "0".to_string()),
                ("_limit".to_string(), "-1".to_string()),
            ]
        );
    }

    #[test]
    fn test_list_values_repeat_name() {
        let mut query = QueryParams::new();
        query.push_all("tag", &["a", "b"]);

        assert_eq!(query.len(), 2);
        assert_eq!(query.get("tag"), Some("a"));
    }

    #[test]
    fn test_datetime_uses_rfc3339() {
        let mut query = QueryParams::new();
        let at = Utc.with_ymd_and_hms(2019, 1, 1, 12, 0, 0).unwrap();
        query.push_datetime("startat", Some(&at));

        assert_eq!(query.get("startat"), Some("2019-01-01T12:00:00Z"));
    }
}

//! # Request Context
//!
//! Carries the pieces of an inbound request that application services need,
//! so that nothing has to be looked up from ambient state.

/// Query string of a single inbound request.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    query: Vec<(String, String)>,
}

impl RequestContext {
    pub fn new(query: Vec<(String, String)>) -> Self {
        Self { query }
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            query: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Returns the value of a query parameter, matching the key case-insensitively.
    ///
    /// Repeated keys are joined with `,`.
    pub fn query_value(&self, key: &str) -> Option<String> {
        let values: Vec<&str> = self
            .query
            .iter()
            .filter(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
            .collect();

        if values.is_empty() {
            None
        } else {
            Some(values.join(","))
        }
    }

    /// Reads an integer query parameter, see [`int_or_default`].
    pub fn query_int(&self, key: &str) -> i32 {
        int_or_default(self.query_value(key).as_deref())
    }
}

/// Parses an integer, falling back to `0` when the value is missing, blank or malformed.
///
/// Surrounding whitespace and a leading sign are accepted.
pub fn int_or_default(value: Option<&str>) -> i32 {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse().ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_or_defaults() {
        assert_eq!(int_or_default(Some("7")), 7);
        assert_eq!(int_or_default(Some(" 12 ")), 12);
        assert_eq!(int_or_default(Some("+3")), 3);
        assert_eq!(int_or_default(Some("-4")), -4);
        assert_eq!(int_or_default(Some("")), 0);
        assert_eq!(int_or_default(Some("abc")), 0);
        assert_eq!(int_or_default(Some("1.5")), 0);
        assert_eq!(int_or_default(Some("99999999999")), 0);
        assert_eq!(int_or_default(None), 0);
    }

    #[test]
    fn keys_are_case_insensitive() {
        let ctx = RequestContext::from_pairs([("pagenumber", "5")]);
        assert_eq!(ctx.query_int("PageNumber"), 5);
    }

    #[test]
    fn repeated_keys_do_not_parse() {
        let ctx = RequestContext::from_pairs([("PageNumber", "1"), ("PageNumber", "2")]);
        assert_eq!(ctx.query_value("PageNumber").as_deref(), Some("1,2"));
        assert_eq!(ctx.query_int("PageNumber"), 0);
    }
}

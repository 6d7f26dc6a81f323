//! Query-string parameters for collection routes.
//!
//! Parameters are captured as raw strings so that malformed values never
//! reject a request; they fall back to the defaults instead. A key given more
//! than once keeps its first value.

use wayfarer_core::Window;
use wayfarer_core::query::{DEFAULT_LIMIT, DEFAULT_OFFSET, DEFAULT_SORT};

/// Raw `offset`, `limit` and `sort` query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowParams {
    /// Number of sorted entities to skip.
    pub offset: Option<String>,
    /// Maximum number of entities to return.
    pub limit: Option<String>,
    /// Field to sort by.
    pub sort: Option<String>,
}

impl WindowParams {
    /// Interpret the parameters, substituting defaults for absent, empty,
    /// negative or non-numeric values.
    ///
    /// # Examples
    /// ```
    /// use wayfarer_api::WindowParams;
    ///
    /// let params = WindowParams {
    ///     offset: Some("-3".into()),
    ///     limit: Some("5".into()),
    ///     sort: Some(String::new()),
    /// };
    /// let window = params.window();
    /// assert_eq!((window.offset, window.limit, window.sort.as_str()), (0, 5, "name"));
    /// ```
    #[must_use]
    pub fn window(&self) -> Window {
        Window {
            offset: count_or(self.offset.as_deref(), DEFAULT_OFFSET),
            limit: count_or(self.limit.as_deref(), DEFAULT_LIMIT),
            sort: self
                .sort
                .as_deref()
                .map(str::trim)
                .filter(|sort| !sort.is_empty())
                .unwrap_or(DEFAULT_SORT)
                .to_owned(),
        }
    }
}

impl FromIterator<(String, String)> for WindowParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "offset" => &mut params.offset,
                "limit" => &mut params.limit,
                "sort" => &mut params.sort,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

fn count_or(raw: Option<&str>, default: usize) -> usize {
    raw.map(str::trim)
        .filter(|value| value.bytes().all(|byte| byte.is_ascii_digit()))
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

//! Compiled query
//!
//! A Query is the immutable output of a build: exactly what the catalog's
//! search endpoint receives, and nothing else.

use serde::Serialize;
use url::form_urlencoded;

/// Compiled search parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    sort: String,
    filter: String,
    page: u64,
    page_size: u32,
}

impl Query {
    pub(crate) fn new(sort: String, filter: String, page: u64, page_size: u32) -> Self {
        Self {
            sort,
            filter,
            page,
            page_size,
        }
    }

    /// Sort token, empty when no sort was requested
    pub fn sort(&self) -> &str {
        &self.sort
    }

    /// Full filter expression
    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn has_sort(&self) -> bool {
        !self.sort.is_empty()
    }

    /// Form fields in the order the search endpoint expects them
    pub fn form_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page.to_string()),
            ("pageSize", self.page_size.to_string()),
            ("group", String::new()),
            ("sort", self.sort.clone()),
            ("filter", self.filter.clone()),
        ]
    }

    /// `application/x-www-form-urlencoded` request body
    pub fn form_body(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.form_params() {
            serializer.append_pair(key, &value);
        }
        serializer.finish()
    }
}

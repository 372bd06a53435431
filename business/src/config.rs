use ustr::Ustr;

use crate::record::RecordId;

/// Base URL used when nothing else is configured (the API's local dev server).
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    /// Root of the REST API, without a trailing slash.
    pub api_base_url: Ustr,
}

impl BusinessConfig {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            api_base_url: Ustr::from(base_url.as_ref().trim().trim_end_matches('/')),
        }
    }

    pub fn api_url(&self) -> &str {
        self.api_base_url.as_str()
    }

    /// `{base}/{path}/` — the collection endpoint of a resource.
    pub fn resource_url(&self, path: &str) -> String {
        format!("{}/{}/", self.api_base_url, path.trim_matches('/'))
    }

    /// `{base}/{path}/{id}` — a single record.
    pub fn record_url(&self, path: &str, id: RecordId) -> String {
        format!("{}/{}/{id}", self.api_base_url, path.trim_matches('/'))
    }

    /// `{base}/{path}` for non-resource endpoints such as reports.
    pub fn endpoint(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            format!("{}/", self.api_base_url)
        } else {
            format!("{}/{path}", self.api_base_url)
        }
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

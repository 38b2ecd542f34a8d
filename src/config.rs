/// Fallback when SKILL_RADAR_API_BASE is not set at build time.
const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Base URL of the employee API. Resolved once in `main` and handed to the
/// tree through a `ContextProvider`, so views never reach for ambient
/// globals and tests can substitute any endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiBase(String);

impl ApiBase {
    pub fn new(base: &str) -> Self {
        Self(base.trim_end_matches('/').to_string())
    }

    /// Resolved at build time; falls back to the local dev server.
    pub fn from_env() -> Self {
        Self::new(option_env!("SKILL_RADAR_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }

    pub fn employee_url(&self, id: &str) -> String {
        format!("{}/employees/{}", self.0, id)
    }
}

impl Default for ApiBase {
    fn default() -> Self {
        Self::from_env()
    }
}

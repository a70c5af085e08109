use std::time::Duration;

/// Wall-clock budget for every HTTP call
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(15_000);

pub const DEFAULT_PRIMARY: &str = "http://localhost:3000";
pub const DEFAULT_SECONDARY: &str = "http://localhost:4000";

/// Hosts of the primary and secondary catalog sources
///
/// The primary serves `/api/beans` and `/api/beans/{id}`; the secondary only
/// serves the collection at `/api/flavors`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub primary: String,
    pub secondary: String,
    pub timeout: Duration,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_PRIMARY, DEFAULT_SECONDARY)
    }
}

impl Endpoints {
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn collection_url(&self) -> String {
        format!("{}/api/beans", host(&self.primary))
    }

    pub fn single_url(&self, id: &str) -> String {
        format!(
            "{}/api/beans/{}",
            host(&self.primary),
            urlencoding::encode(id)
        )
    }

    pub fn secondary_url(&self) -> String {
        format!("{}/api/flavors", host(&self.secondary))
    }
}

fn host(base: &str) -> &str {
    base.trim().trim_end_matches('/')
}

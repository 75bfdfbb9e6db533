/// Backend origin baked in at build time, e.g. `BACKEND_URL=http://localhost:8001 trunk build`.
const BACKEND_URL: Option<&str> = option_env!("BACKEND_URL");

pub const CURRENCY_SYMBOL: &str = "₹";

/// Number of trailing trend entries plotted on the analytics screen.
pub const TREND_WINDOW: usize = 7;

#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    backend_url: Option<String>,
}

impl ApiConfig {
    pub fn from_build_env() -> Self {
        Self::new(BACKEND_URL)
    }

    pub fn new(backend_url: Option<&str>) -> Self {
        let backend_url = backend_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());
        Self { backend_url }
    }

    pub fn backend_url(&self) -> Option<&str> {
        self.backend_url.as_deref()
    }

    /// Base path of every gateway route. A missing origin is not rejected;
    /// requests then target the relative `/api` path.
    pub fn api_base(&self) -> String {
        match &self.backend_url {
            Some(url) => format!("{}/api", url),
            None => {
                tracing::warn!("BACKEND_URL was not set at build time, using relative /api");
                "/api".to_string()
            }
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base(), path.trim_start_matches('/'))
    }
}

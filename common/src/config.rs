pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

pub struct Config {
    /// Skips the start-up banner.
    pub no_banner: bool,
    /// 0 prints every panel, 1 drops decorations, 2 prints only the verdict.
    pub quiet: u8,
    pub service: ServiceConfig,
}

/// Connection settings for the reasoning service.
///
/// A missing `api_key` is not an error here; it surfaces as a failed call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl ServiceConfig {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::new(None)
    }
}

use eyre::Report;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app_url: String,

    /// Page size used when a request does not name one.
    pub default_page_size: i64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, Report> {
        Ok(Self {
            app_url: env::var("APP_URL").unwrap_or_else(|_| "http://localhost:8080".into()),

            default_page_size: env::var("DEFAULT_PAGE_SIZE")
                .unwrap_or_else(|_| "20".into())
                .parse()?,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_url: "http://localhost:8080".into(),
            default_page_size: 20,
        }
    }
}

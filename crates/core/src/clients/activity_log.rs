use mealtrail_primitives::error::ApiError;
use mealtrail_primitives::models::{FacetsResponse, LogFilter, LogPageResponse, PageRequest};
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Typed client for the activity-log read endpoints, for admin surfaces
/// and sibling services that consume the log over HTTP.
#[derive(Clone)]
pub struct ActivityLogClient {
    http: Client,
    base_url: Url,
}

impl ActivityLogClient {
    pub fn new(http: Client, base_url: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)
            .map_err(|_| ApiError::Internal("Invalid activity log base URL".into()))?;
        Ok(Self { http, base_url })
    }

    pub async fn fetch_page(
        &self,
        filter: &LogFilter,
        page: PageRequest,
    ) -> Result<LogPageResponse, ApiError> {
        let mut url = self.endpoint(&["api", "activity", "logs"])?;
        {
            let mut pairs = url.query_pairs_mut();
            if let Some(ref module) = filter.module {
                pairs.append_pair("module", module);
            }
            if let Some(ref sub_module) = filter.sub_module {
                pairs.append_pair("sub_module", sub_module);
            }
            pairs.append_pair("page", &page.index.to_string());
            pairs.append_pair("limit", &page.size.to_string());
        }

        let resp = self
            .http
            .get(url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| ApiError::Upstream(format!("activity log service unreachable: {}", e)))?;

        let status = resp.status();
        if status == StatusCode::BAD_REQUEST {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::InvalidArgument(body));
        }
        if !status.is_success() {
            return Err(ApiError::Upstream(format!(
                "activity log service returned {}",
                status
            )));
        }

        resp.json::<LogPageResponse>()
            .await
            .map_err(|_| ApiError::Upstream("invalid activity log page response".into()))
    }

    pub async fn fetch_facets(&self) -> Result<FacetsResponse, ApiError> {
        let url = self.endpoint(&["api", "activity", "facets"])?;

        let resp = self
            .http
            .get(url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| ApiError::Upstream(format!("activity log service unreachable: {}", e)))?;

        if !resp.status().is_success() {
            return Err(ApiError::Upstream(format!(
                "activity log service returned {}",
                resp.status()
            )));
        }

        resp.json::<FacetsResponse>()
            .await
            .map_err(|_| ApiError::Upstream("invalid facets response".into()))
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Internal("Invalid activity log URL path".into()))?
            .extend(segments);
        Ok(url)
    }
}

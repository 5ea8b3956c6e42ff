use crate::model::{FetchError, ResolvedComponent};
use crate::scraper::Scraper;

use reqwest::{Client, StatusCode};
use tracing::{debug, info};

pub struct ScraperImpl {
    client: Client,
    base_url: String,
}

impl ScraperImpl {
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .build()
            .map_err(|e| FetchError::HttpError(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn build_url(&self, component: &ResolvedComponent) -> String {
        format!(
            "{}/{}_comparison.html?{}",
            self.base_url,
            component.kind.as_str(),
            component.query()
        )
    }
}

fn check_status(status: StatusCode, url: &str) -> Result<(), FetchError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(FetchError::InvalidResponse { status: status.as_u16(), url: url.to_string() })
    }
}

#[async_trait::async_trait]
impl Scraper for ScraperImpl {
    async fn fetch(&self, component: &ResolvedComponent) -> Result<String, FetchError> {
        let url = self.build_url(component);
        info!("Fetching {}", url);

        let response = self.client.get(&url)
            .send()
            .await
            .map_err(|e| FetchError::HttpError(e.to_string()))?;

        check_status(response.status(), &url)?;

        let body = response.text().await.map_err(|e| FetchError::HttpError(e.to_string()))?;
        debug!("Received {} bytes from {}", body.len(), url);
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ComponentKind;

    #[test]
    fn builds_comparison_url() {
        let scraper = ScraperImpl::new("https://www.chaynikam.info/").unwrap();
        let cpu = ResolvedComponent {
            kind: ComponentKind::Cpu,
            series: "Core_i5-".into(),
            model: "9400f".into(),
        };
        assert_eq!(
            scraper.build_url(&cpu),
            "https://www.chaynikam.info/cpu_comparison.html?Core_i5-9400f"
        );

        let gpu = ResolvedComponent {
            kind: ComponentKind::Gpu,
            series: "GeForce_gtx_".into(),
            model: "1060_6gb".into(),
        };
        assert_eq!(
            scraper.build_url(&gpu),
            "https://www.chaynikam.info/gpu_comparison.html?GeForce_gtx_1060_6gb"
        );
    }

    #[test]
    fn non_success_status_is_invalid_response() {
        let url = "https://www.chaynikam.info/cpu_comparison.html?Core_i5-9400f";
        assert!(check_status(StatusCode::OK, url).is_ok());

        match check_status(StatusCode::NOT_FOUND, url) {
            Err(FetchError::InvalidResponse { status, url: failed }) => {
                assert_eq!(status, 404);
                assert_eq!(failed, url);
            }
            other => panic!("unexpected result {other:?}"),
        }
        assert!(matches!(
            check_status(StatusCode::BAD_GATEWAY, url),
            Err(FetchError::InvalidResponse { status: 502, .. })
        ));
    }
}

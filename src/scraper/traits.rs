use crate::model::{FetchError, ResolvedComponent};

#[async_trait::async_trait]
pub trait Scraper: Send + Sync {
    async fn fetch(&self, component: &ResolvedComponent) -> Result<String, FetchError>;
}

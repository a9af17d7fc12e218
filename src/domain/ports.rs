use crate::domain::model::FetchResponse;
use crate::utils::error::Result;
use async_trait::async_trait;

/// The single network operation the resolver needs.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// GET `url` with the given `Accept` media type and return status + body text.
    async fn get(&self, url: &str, accept: &str) -> Result<FetchResponse>;
}

use crate::config::ResolverConfig;
use crate::domain::model::FetchResponse;
use crate::domain::ports::Fetcher;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::{header, Client};
use std::time::Duration;

/// `Fetcher` backed by a `reqwest::Client`. Redirects follow reqwest's default policy.
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    pub fn new(config: &ResolverConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl Fetcher for ReqwestFetcher {
    async fn get(&self, url: &str, accept: &str) -> Result<FetchResponse> {
        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, accept)
            .send()
            .await?;

        let status = response.status().as_u16();
        let final_url = response.url().to_string();
        let body = response.text().await?;
        Ok(FetchResponse {
            status,
            final_url,
            body,
        })
    }
}

#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use serde::Deserialize;

pub const DOI_BASE_URL: &str = "https://doi.org/";
pub const CSL_JSON: &str = "application/vnd.citationstyles.csl+json";

/// Library callers may deserialize this from their own configuration; missing
/// fields take the production defaults. The binary always uses `default()`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Prefix the encoded DOI is appended to.
    pub base_url: String,
    pub accept: String,
    pub user_agent: String,
    /// `None` waits for as long as the transport does.
    pub timeout_secs: Option<u64>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            base_url: DOI_BASE_URL.to_string(),
            accept: CSL_JSON.to_string(),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: None,
        }
    }
}

impl ResolverConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

impl Validate for ResolverConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_non_empty_string("accept", &self.accept)?;
        validate_non_empty_string("user_agent", &self.user_agent)?;
        if let Some(secs) = self.timeout_secs {
            validate_positive_number("timeout_secs", secs, 1)?;
        }
        Ok(())
    }
}

use crate::utils::error::{FetchError, Result};
use std::fmt;

/// A DOI exactly as the caller typed it. No syntax checks are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Doi(String);

impl Doi {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Doi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Doi {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Doi {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// What the fetcher hands back: status, URL after redirects, and raw body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub final_url: String,
    pub body: String,
}

/// Outcome of one resolution, whatever the status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub url: String,
    pub status: u16,
    pub body: String,
}

impl Resolution {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turns a non-2xx resolution into `FetchError::Status`.
    ///
    /// The binary never calls this: it prints the body for every status.
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(FetchError::Status {
                url: self.url,
                status: self.status,
            })
        }
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Cannot decode '{input}': {reason}")]
    Decode { input: String, reason: String },
}

impl FetchError {
    /// Process exit code for this error. Usage errors exit 2 through clap.
    pub fn exit_code(&self) -> i32 {
        match self {
            FetchError::Transport(_) | FetchError::Io(_) | FetchError::Status { .. } => 1,
            FetchError::InvalidConfigValue { .. } | FetchError::Decode { .. } => 2,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FetchError::Transport(e) if e.is_timeout() => {
                "The DOI resolver did not answer in time".to_string()
            }
            FetchError::Transport(e) if e.is_connect() => {
                "Could not connect to the DOI resolver".to_string()
            }
            FetchError::Transport(e) => format!("Request to the DOI resolver failed: {}", e),
            FetchError::Io(e) => format!("Could not write output: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let io = FetchError::Io(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"));
        assert_eq!(io.exit_code(), 1);

        let status = FetchError::Status {
            url: "https://doi.org/x".to_string(),
            status: 404,
        };
        assert_eq!(status.exit_code(), 1);

        let config = FetchError::InvalidConfigValue {
            field: "base_url".to_string(),
            value: String::new(),
            reason: "URL cannot be empty".to_string(),
        };
        assert_eq!(config.exit_code(), 2);
    }

    #[test]
    fn test_messages() {
        let status = FetchError::Status {
            url: "https://doi.org/x".to_string(),
            status: 404,
        };
        assert_eq!(
            status.user_friendly_message(),
            "https://doi.org/x answered with HTTP 404"
        );

        let io = FetchError::Io(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"));
        assert_eq!(io.user_friendly_message(), "Could not write output: closed");
    }
}

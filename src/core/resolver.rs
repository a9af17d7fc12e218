use crate::config::ResolverConfig;
use crate::core::encode::build_url;
use crate::core::{Doi, Fetcher, Resolution, Result};
use std::io::Write;
use tracing::{debug, error, instrument, warn};

pub struct DoiResolver<F: Fetcher> {
    fetcher: F,
    config: ResolverConfig,
}

impl<F: Fetcher> DoiResolver<F> {
    pub fn new(fetcher: F, config: ResolverConfig) -> Self {
        Self { fetcher, config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn request_url(&self, doi: &Doi) -> String {
        build_url(&self.config.base_url, doi.as_str())
    }

    /// Resolves `doi` and prints the outcome.
    ///
    /// `err` receives `GET: <url>` before the request and ` [<status>]` once the
    /// response is in. `out` receives the body followed by a newline, for every
    /// status code. Only a transport or write failure returns `Err`.
    #[instrument(level = "info", name = "resolve", skip_all, fields(doi = %doi, url))]
    pub async fn run<O: Write, E: Write>(
        &self,
        doi: &Doi,
        out: &mut O,
        err: &mut E,
    ) -> Result<Resolution> {
        let url = self.request_url(doi);
        tracing::Span::current().record("url", tracing::field::display(&url));

        // log events must not land between the two halves of the trace line
        debug!(accept = %self.config.accept, "sending request");
        write!(err, "GET: {}", url)?;
        err.flush()?;

        let response = match self.fetcher.get(&url, &self.config.accept).await {
            Ok(response) => response,
            Err(e) => {
                // close the trace line so the diagnostic starts on its own
                let _ = writeln!(err);
                error!(%e, "request failed");
                return Err(e);
            }
        };

        writeln!(err, " [{}]", response.status)?;
        debug!(status = response.status, final_url = %response.final_url, "response received");

        let resolution = Resolution {
            url,
            status: response.status,
            body: response.body,
        };
        if !resolution.is_success() {
            warn!(
                status = resolution.status,
                "resolver answered with an error status, printing body anyway"
            );
        }

        writeln!(out, "{}", resolution.body)?;
        out.flush()?;

        debug!(bytes = resolution.body.len(), "body written");
        Ok(resolution)
    }
}

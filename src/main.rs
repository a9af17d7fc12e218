use clap::Parser;
use doi_fetch::utils::{logger, validation::Validate};
use doi_fetch::{CliConfig, DoiResolver, FetchError, ReqwestFetcher, ResolverConfig};
use std::io;

fn fail(e: FetchError) -> ! {
    tracing::error!(exit_code = e.exit_code(), "{}", e);
    eprintln!("error: {}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let config = ResolverConfig::default();
    if let Err(e) = config.validate() {
        fail(e);
    }

    let fetcher = match ReqwestFetcher::new(&config) {
        Ok(fetcher) => fetcher,
        Err(e) => fail(e),
    };
    let resolver = DoiResolver::new(fetcher, config);

    // HTTP error statuses are printed like any other response and still exit 0.
    match resolver
        .run(&cli.doi(), &mut io::stdout(), &mut io::stderr())
        .await
    {
        Ok(resolution) => {
            tracing::info!(status = resolution.status, "resolution finished");
        }
        Err(e) => fail(e),
    }
}

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::http::ReqwestFetcher;
pub use config::ResolverConfig;
pub use core::{
    encode::{build_url, decode_doi, encode_doi},
    resolver::DoiResolver,
};
pub use domain::model::{Doi, Resolution};
pub use utils::error::{FetchError, Result};

pub mod encode;
pub mod resolver;

pub use crate::domain::model::{Doi, FetchResponse, Resolution};
pub use crate::domain::ports::Fetcher;
pub use crate::utils::error::Result;

use crate::domain::model::Doi;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "doi-fetch", version)]
#[command(about = "Resolve a DOI to CSL-JSON metadata via doi.org")]
pub struct CliConfig {
    /// DOI to resolve, passed through as-is
    #[arg(value_name = "DOI")]
    pub doi: String,

    #[arg(short, long, help = "Enable verbose logging on stderr")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn doi(&self) -> Doi {
        Doi::new(self.doi.clone())
    }
}

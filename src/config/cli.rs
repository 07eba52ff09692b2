use crate::core::window::DEFAULT_MONTHS;
use crate::domain::model::Paging;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_range, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "https://silpo.ua/graphql";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "receipt-export")]
#[command(about = "Export purchase history from the checks GraphQL API as CSV")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Number of calendar months to export, counting back from the current one
    #[arg(long, default_value_t = DEFAULT_MONTHS)]
    pub months: u32,

    #[arg(long, default_value_t = 1)]
    pub offset: i32,

    #[arg(long, default_value_t = 40)]
    pub limit: i32,

    /// Write CSV to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Read settings from a TOML file instead of the flags above
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.endpoint
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_deref()
    }

    fn months(&self) -> u32 {
        self.months
    }

    fn paging(&self) -> Paging {
        Paging {
            offset: self.offset,
            limit: self.limit,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        validate_range("months", self.months, 1, 1200)?;
        validate_range("offset", self.offset, 0, i32::MAX)?;
        validate_range("limit", self.limit, 1, i32::MAX)?;
        if let Some(path) = &self.output {
            validate_path("output", path)?;
        }
        Ok(())
    }
}

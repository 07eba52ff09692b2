pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
#[cfg(feature = "cli")]
pub use app::export::run_cli;

pub use app::export::run_export;
pub use config::{credential::AccessToken, toml_config::TomlConfig};
pub use core::{etl::ExportEngine, ExportSummary};
pub use utils::error::{ExportError, Result};

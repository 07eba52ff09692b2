use crate::adapters::checks::ChecksApi;
use crate::adapters::graphql::GraphQlClient;
use crate::adapters::output::open_output;
use crate::config::credential::AccessToken;
use crate::core::etl::ExportEngine;
use crate::core::window::month_windows;
use crate::core::{ConfigProvider, ExportSummary, Result};
use chrono::{DateTime, Utc};

#[cfg(feature = "cli")]
use crate::config::{toml_config::TomlConfig, CliConfig};
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;

/// Runs a full export against the configured endpoint, anchored at `now`.
pub async fn run_export<C: ConfigProvider>(
    config: &C,
    token: AccessToken,
    now: DateTime<Utc>,
) -> Result<ExportSummary> {
    let windows = month_windows(now, config.months())?;
    let output = open_output(config.output_path()).map_err(|e| e.at("opening output"))?;

    let api = ChecksApi::new(GraphQlClient::new(config.api_endpoint(), token));
    let mut engine = ExportEngine::new(api, output, config.paging())?;

    let summary = engine.run(&windows).await?;
    engine
        .into_output()
        .map_err(|e| e.at("flushing output"))?;

    tracing::info!(
        "✅ Exported {} rows from {} checks over {} months",
        summary.items,
        summary.orders,
        summary.windows
    );
    if summary.full_pages > 0 {
        tracing::warn!(
            "{} months returned a full page; raise --limit to fetch more checks per month",
            summary.full_pages
        );
    }

    Ok(summary)
}

/// Command-line driver: resolves the token through `lookup` before reading any
/// settings, then exports with either the TOML file or the flags.
#[cfg(feature = "cli")]
pub async fn run_cli<F>(cli: &CliConfig, lookup: F, now: DateTime<Utc>) -> Result<ExportSummary>
where
    F: FnOnce(&str) -> Option<String>,
{
    let token = AccessToken::from_lookup(lookup)?;

    match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let config =
                TomlConfig::from_file(path).map_err(|e| e.at(format!("loading {}", path)))?;
            config.validate()?;
            run_export(&config, token, now).await
        }
        None => {
            cli.validate()?;
            run_export(cli, token, now).await
        }
    }
}

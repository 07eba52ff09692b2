use clap::Parser;
use receipt_export::utils::logger;
use receipt_export::{run_cli, CliConfig};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting receipt-export");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let env_lookup = |name: &str| std::env::var(name).ok();
    if let Err(e) = run_cli(&cli, env_lookup, chrono::Utc::now()).await {
        tracing::error!("❌ Export failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }
}

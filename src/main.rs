// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::Args;
use emoji_names::config::Config;
use emoji_names::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    commands::validate_args(&args)?;

    if args.list_config {
        return commands::handle_list_config_command(&args).await;
    }

    let config = Config::load(args.config.as_deref()).await?;

    let (log_file_path, _guard) =
        logging::setup_logging(&args, config.log_file_path.as_ref()).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    let result = commands::handle_generate_command(&args, &config).await;
    if let Err(e) = &result {
        tracing::error!("Name generation failed: {e}");
    }
    result
}

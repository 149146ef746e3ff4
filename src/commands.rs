use crate::cli::Args;
use emoji_names::config::Config;
use emoji_names::error::AppError;
use emoji_names::picker::{NameMap, emoji_names_for_picker, reduce_with_report, validate_whitelist};
use std::collections::BTreeMap;

/// Validates command line argument combinations.
///
/// Returns an error if incompatible arguments are used together.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.check && args.explain {
        return Err(AppError::config_error(
            "Cannot use both --check and --explain simultaneously",
        ));
    }
    Ok(())
}

/// Parses the emoji map. Blank content is an empty map.
pub fn parse_name_map(content: &str) -> Result<NameMap, AppError> {
    if content.trim().is_empty() {
        return Ok(NameMap::new());
    }
    Ok(serde_json::from_str(content)?)
}

async fn read_name_map(path: &str) -> Result<NameMap, AppError> {
    let content = tokio::fs::read_to_string(path).await?;
    let name_map = parse_name_map(&content)?;
    tracing::info!("Loaded {} emoji names from {path}", name_map.len());
    Ok(name_map)
}

/// Handles the --list-config command.
pub async fn handle_list_config_command(args: &Args) -> Result<(), AppError> {
    Config::display(args.config.as_deref()).await
}

/// Handles the default run: reduces the emoji map and prints the result.
///
/// - `--check` only validates the whitelist against the map
/// - `--explain` prints the per-codepoint reduction trace for ambiguous codepoints
/// - otherwise prints the sorted picker names as a JSON array
pub async fn handle_generate_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let input = args
        .input
        .as_deref()
        .ok_or_else(|| AppError::config_error("No emoji map given (use --input)"))?;
    let name_map = read_name_map(input).await?;
    let tables = config.tables();

    if args.check {
        validate_whitelist(&name_map, &tables.whitelist)?;
        println!(
            "Whitelist OK: {} entries agree with {input}",
            tables.whitelist.len()
        );
        return Ok(());
    }

    if args.explain {
        let reduction = reduce_with_report(&name_map, &tables)?;
        let ambiguous: BTreeMap<_, _> = reduction.report.ambiguous().collect();
        println!("{}", serde_json::to_string_pretty(&ambiguous)?);
        return Ok(());
    }

    let names = emoji_names_for_picker(&name_map, &tables)?;
    println!("{}", serde_json::to_string_pretty(&names)?);
    Ok(())
}

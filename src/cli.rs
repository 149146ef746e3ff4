use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Emoji picker name generator
///
/// Reads a JSON object mapping emoji short names to codepoints and prints, as a JSON
/// array, the sorted names to offer in an emoji picker. Names that alias the same
/// codepoint are reduced by a fixed sequence of rules, then hand-curated whitelist
/// entries override the result for specific codepoints.
#[derive(Parser, Debug)]
#[command(about, version, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Path to the emoji map: a JSON object of `"name": "codepoint"` pairs.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "EMOJI_MAP",
        required_unless_present = "list_config"
    )]
    pub input: Option<String>,

    /// Print, for every codepoint with several candidate names, which rule removed
    /// which name instead of the plain name list.
    #[arg(short = 'e', long = "explain", help_heading = "Output")]
    pub explain: bool,

    /// Only check that every whitelist entry agrees with the emoji map, then exit.
    #[arg(long = "check", help_heading = "Output")]
    pub check: bool,

    /// Use this config file instead of the default location.
    #[arg(long = "config", short = 'c', help_heading = "Configuration")]
    pub config: Option<String>,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write logs to stderr.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_is_required() {
        assert!(Args::try_parse_from(["emoji_names"]).is_err());
    }

    #[test]
    fn test_list_config_does_not_need_input() {
        let args = Args::try_parse_from(["emoji_names", "--list-config"]).unwrap();
        assert!(args.list_config);
        assert!(args.input.is_none());
    }

    #[test]
    fn test_full_argument_set() {
        let args = Args::try_parse_from([
            "emoji_names",
            "-i",
            "emoji_map.json",
            "--explain",
            "--config",
            "tables.toml",
            "--debug",
            "--log-file",
            "/tmp/emoji.log",
        ])
        .unwrap();

        assert_eq!(args.input.as_deref(), Some("emoji_map.json"));
        assert!(args.explain);
        assert!(!args.check);
        assert_eq!(args.config.as_deref(), Some("tables.toml"));
        assert!(args.debug);
        assert_eq!(args.log_file.as_deref(), Some("/tmp/emoji.log"));
    }
}

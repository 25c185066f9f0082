//! Cardex - Entry Point

use clap::Parser;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing::info;

/// Cardex - browse and search a trading card catalog in the terminal
#[derive(Parser, Debug)]
#[command(name = "cardex")]
#[command(version)]
#[command(about = "Terminal viewer for searching and browsing a trading card catalog")]
pub struct Args {
    /// Catalog endpoint returning `{ "data": [card, ...] }`
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Results per page (must be positive)
    #[arg(long)]
    pub page_size: Option<NonZeroUsize>,

    /// Start with this search query once the catalog has loaded
    #[arg(short, long)]
    pub search: Option<String>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = cardex::config::load_config_with_precedence(args.config.clone())
            .map_err(cardex::model::AppError::from)?;
        let merged = cardex::config::merge_config(config_file).map_err(cardex::model::AppError::from)?;
        let with_env = cardex::config::apply_env_overrides(merged);
        cardex::config::apply_cli_overrides(with_env, args.endpoint.clone(), args.page_size)
    };

    cardex::logging::init(&config.log_file_path).map_err(cardex::model::AppError::from)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let options = cardex::view::LaunchOptions {
        initial_query: args.search,
        colors: Some(cardex::view::ColorConfig::from_env_and_args(args.no_color)),
    };

    cardex::view::run(&config, options)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["cardex", "--help"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["cardex", "--version"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["cardex"]);
        assert_eq!(args.endpoint, None);
        assert_eq!(args.page_size, None);
        assert_eq!(args.search, None);
        assert_eq!(args.config, None);
        assert!(!args.no_color);
    }

    #[test]
    fn test_endpoint_flag() {
        let args = Args::parse_from(["cardex", "--endpoint", "http://localhost:8080/cards"]);
        assert_eq!(args.endpoint.as_deref(), Some("http://localhost:8080/cards"));
    }

    #[test]
    fn test_page_size_flag() {
        let args = Args::parse_from(["cardex", "--page-size", "25"]);
        assert_eq!(args.page_size, NonZeroUsize::new(25));
    }

    #[test]
    fn test_page_size_rejects_zero() {
        let err = Args::try_parse_from(["cardex", "--page-size", "0"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_page_size_rejects_negative() {
        assert!(Args::try_parse_from(["cardex", "--page-size", "-3"]).is_err());
    }

    #[test]
    fn test_search_short_flag() {
        let args = Args::parse_from(["cardex", "-s", "pikachu"]);
        assert_eq!(args.search, Some("pikachu".to_string()));
    }

    #[test]
    fn test_search_long_flag() {
        let args = Args::parse_from(["cardex", "--search", "char"]);
        assert_eq!(args.search, Some("char".to_string()));
    }

    #[test]
    fn test_config_flag() {
        let args = Args::parse_from(["cardex", "--config", "/tmp/cardex.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/cardex.toml")));
    }

    #[test]
    fn test_no_color_flag() {
        let args = Args::parse_from(["cardex", "--no-color"]);
        assert!(args.no_color);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let err = Args::try_parse_from(["cardex", "--follow"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }
}

//! Command-line arguments for the `ppf` binary

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use ppf_app::config::{self, Settings};
use ppf_core::{FinishingOption, SearchPair};

/// Probepaket Finder - find sample packages by product and color
#[derive(Parser, Debug)]
#[command(name = "ppf")]
#[command(about = "Find sample packages by product and color", long_about = None)]
#[command(version)]
pub struct Args {
    /// Backend base URL (overrides `backend.base_url` from the config file)
    #[arg(long, global = true, value_name = "URL")]
    pub url: Option<String>,

    /// Directory holding config.toml
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Print headless results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run a single command instead of the interactive finder
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List all products
    Products,

    /// List the colors available for a product
    Colors {
        /// Product name as listed by `ppf products`
        product: String,
    },

    /// Search sample packages
    Search {
        /// Search pair, repeat for up to four pairs
        #[arg(
            short = 'c',
            long = "criterion",
            value_name = "PRODUCT=COLOR",
            value_parser = parse_criterion,
            required = true
        )]
        criteria: Vec<SearchPair>,

        /// Required finishing (Siebdruck, Digitaldruck, Stick)
        #[arg(short = 'f', long = "finishing", value_parser = parse_finishing)]
        finishing: Vec<FinishingOption>,
    },

    /// Make the backend reload its data
    Refresh,

    /// Write a default config.toml
    InitConfig,
}

impl Args {
    /// Config directory from `--config-dir`, else the platform default
    pub fn config_dir(&self) -> Option<PathBuf> {
        self.config_dir.clone().or_else(config::default_config_dir)
    }

    /// Settings from the config file with CLI overrides applied
    pub fn settings(&self) -> Settings {
        let mut settings = self
            .config_dir()
            .map(|dir| config::load_settings(&dir))
            .unwrap_or_default();
        if let Some(url) = &self.url {
            settings.backend.base_url = url.clone();
        }
        settings
    }
}

/// Parse `PRODUCT=COLOR`
pub fn parse_criterion(value: &str) -> Result<SearchPair, String> {
    let Some((product, color)) = value.split_once('=') else {
        return Err(format!("expected PRODUCT=COLOR, got '{}'", value));
    };
    let (product, color) = (product.trim(), color.trim());
    if product.is_empty() || color.is_empty() {
        return Err(format!("product and color must not be empty in '{}'", value));
    }
    Ok(SearchPair::new(product, color))
}

fn parse_finishing(value: &str) -> Result<FinishingOption, String> {
    FinishingOption::parse(value).ok_or_else(|| {
        let known: Vec<&str> = FinishingOption::ALL.iter().map(|o| o.as_str()).collect();
        format!("unknown finishing '{}', expected one of {}", value, known.join(", "))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_criterion() {
        assert_eq!(
            parse_criterion("T-Shirt Premium = Navy").unwrap(),
            SearchPair::new("T-Shirt Premium", "Navy")
        );
        assert!(parse_criterion("Shirt").is_err());
        assert!(parse_criterion("Shirt=").is_err());
        assert!(parse_criterion("=Blau").is_err());
    }

    #[test]
    fn test_search_args() {
        let args = Args::try_parse_from([
            "ppf", "search", "-c", "Shirt=Blau", "-c", "Cap=Rot", "-f", "Stick", "--json",
        ])
        .unwrap();

        assert!(args.json);
        assert_eq!(
            args.command,
            Some(Command::Search {
                criteria: vec![SearchPair::new("Shirt", "Blau"), SearchPair::new("Cap", "Rot")],
                finishing: vec![FinishingOption::Embroidery],
            })
        );
    }

    #[test]
    fn test_search_requires_criterion() {
        assert!(Args::try_parse_from(["ppf", "search"]).is_err());
        assert!(
            Args::try_parse_from(["ppf", "search", "-c", "Shirt=Blau", "-f", "Laser"]).is_err()
        );
    }

    #[test]
    fn test_no_subcommand_runs_tui() {
        let args = Args::try_parse_from(["ppf", "--url", "http://backend:8080"]).unwrap();
        assert!(args.command.is_none());
        assert_eq!(args.url.as_deref(), Some("http://backend:8080"));
    }

    #[test]
    fn test_url_overrides_config_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(config::CONFIG_FILENAME),
            "[backend]\nbase_url = \"http://from-file:1\"\nrequest_timeout_secs = 5\n",
        )
        .unwrap();
        let dir_arg = dir.path().to_string_lossy().to_string();

        let args = Args::try_parse_from(["ppf", "--config-dir", &dir_arg]).unwrap();
        assert_eq!(args.settings().backend.base_url, "http://from-file:1");

        let args =
            Args::try_parse_from(["ppf", "--config-dir", &dir_arg, "--url", "http://cli:2"])
                .unwrap();
        let settings = args.settings();
        assert_eq!(settings.backend.base_url, "http://cli:2");
        assert_eq!(settings.backend.request_timeout_secs, 5);
    }
}

//! Command-line and environment configuration.
//!
//! Every flag can also be set through a `TRACKQUEUE_*` environment
//! variable, and `.env.local` / `.env` are loaded before parsing.

use std::path::PathBuf;

use clap::Parser;
use trackqueue_api::ApiConfig;

/// Environment variable for the data directory.
pub const DATA_DIR_ENV: &str = "TRACKQUEUE_DATA_DIR";

/// Default data directory name under home.
const DEFAULT_DATA_DIR: &str = ".trackqueue";

/// TrackQueue - SoundCloud track submission queue
#[derive(Parser, Debug)]
#[command(name = "trackqueue")]
#[command(about = "Serve the track submission queue over HTTP")]
#[command(version)]
pub struct Args {
    /// Host to bind to
    #[arg(long, env = "TRACKQUEUE_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind to
    #[arg(short, long, env = "TRACKQUEUE_PORT", default_value = "8765")]
    pub port: u16,

    /// Directory holding queue.json (default: ~/.trackqueue)
    #[arg(long, env = DATA_DIR_ENV)]
    pub data_dir: Option<PathBuf>,

    /// Keep the queue in memory only
    #[arg(long)]
    pub memory: bool,

    /// Bearer tokens granting admin access
    #[arg(
        long = "admin-token",
        env = "TRACKQUEUE_ADMIN_TOKENS",
        value_delimiter = ','
    )]
    pub admin_tokens: Vec<String>,

    /// Bearer tokens identifying the channel owner
    #[arg(
        long = "owner-token",
        env = "TRACKQUEUE_OWNER_TOKENS",
        value_delimiter = ','
    )]
    pub owner_tokens: Vec<String>,

    /// Allowed CORS origins (empty allows any)
    #[arg(
        long = "cors-origin",
        env = "TRACKQUEUE_CORS_ORIGINS",
        value_delimiter = ','
    )]
    pub cors_origins: Vec<String>,

    /// Verbose logging (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Resolves the data directory.
    ///
    /// Uses `--data-dir` if given, else `~/.trackqueue`, else
    /// `.trackqueue` in the current directory.
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::home_dir()
                .map(|h| h.join(DEFAULT_DATA_DIR))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
        })
    }

    /// Builds the API config from the parsed flags.
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig::new(self.host.clone(), self.port)
            .with_cors_origins(clean(&self.cors_origins))
            .with_admin_tokens(clean(&self.admin_tokens))
            .with_owner_tokens(clean(&self.owner_tokens))
    }

    /// Log filter for the chosen verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "trackqueue=info,tower_http=warn",
            1 => "trackqueue=debug,tower_http=debug",
            2 => "trackqueue=trace,tower_http=trace",
            _ => "trace",
        }
    }
}

/// Trims entries and drops blanks.
fn clean(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("trackqueue").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_explicit_flags() {
        let args = parse(&[
            "--host",
            "0.0.0.0",
            "--port",
            "9000",
            "--admin-token",
            "a1, a2",
            "--owner-token",
            "o1",
            "--cors-origin",
            "https://example.com",
        ]);
        let config = args.api_config();

        assert_eq!(config.bind_address(), "0.0.0.0:9000");
        assert_eq!(config.admin_tokens, vec!["a1", "a2"]);
        assert_eq!(config.owner_tokens, vec!["o1"]);
        assert!(!config.allows_any_origin());
    }

    #[test]
    fn test_blank_tokens_dropped() {
        let args = parse(&["--admin-token", ",, ,"]);
        assert!(args.api_config().admin_tokens.is_empty());
    }

    #[test]
    fn test_data_dir_override() {
        let args = parse(&["--data-dir", "/tmp/queue-data", "--memory"]);
        assert_eq!(args.data_dir(), PathBuf::from("/tmp/queue-data"));
        assert!(args.memory);
    }

    #[test]
    fn test_log_filter_by_verbosity() {
        assert_eq!(parse(&[]).log_filter(), "trackqueue=info,tower_http=warn");
        assert_eq!(parse(&["-vv"]).log_filter(), "trackqueue=trace,tower_http=trace");
        assert_eq!(parse(&["-vvvv"]).log_filter(), "trace");
    }
}

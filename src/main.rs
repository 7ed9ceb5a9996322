mod cli;
mod dispatch;
mod logging;

use std::path::PathBuf;

use clap::Parser;
use yoauth_core::config::Config;

use crate::cli::Cli;

const DEFAULT_CONFIG_PATH: &str = "yahoo-oauth.toml";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let explicit_path = cli
        .config
        .clone()
        .or_else(|| std::env::var_os("YAHOO_OAUTH_CONFIG").map(PathBuf::from));

    // Only a config file the operator named is fatal when broken.
    let (config, config_path, skipped) = match explicit_path {
        Some(path) => {
            let config = Config::load(&path).unwrap_or_else(|e| {
                eprintln!("error: {e}");
                std::process::exit(e.exit_code());
            });
            (config, path, None)
        }
        None => {
            let path = PathBuf::from(DEFAULT_CONFIG_PATH);
            let (config, skipped) = Config::load_lenient(&path);
            (config, path, skipped)
        }
    };

    logging::init(&config.log.filter);
    match skipped {
        Some(e) => tracing::warn!(
            config = %config_path.display(),
            error = %e,
            "ignoring default config file"
        ),
        None => tracing::debug!(config = %config_path.display(), "config loaded"),
    }

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = dispatch::run(cli.command, &config, &mut stdout).await {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("error: {e}");
        std::process::exit(e.exit_code());
    }
}

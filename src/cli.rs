use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Helper for the Yahoo OAuth2 authorization-code flow.
///
/// Values not given as flags fall back to YAHOO_APP_CLIENT_ID,
/// YAHOO_APP_CLIENT_SECRET, YAHOO_APP_CLIENT_CODE and YAHOO_APP_TOKEN_FILE,
/// then to the config file.
#[derive(Debug, Parser)]
#[command(name = "yoauth", version, arg_required_else_help = true)]
pub struct Cli {
    /// Path to the TOML config file [env: YAHOO_OAUTH_CONFIG] [default: yahoo-oauth.toml]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the page where a new Yahoo app can be registered
    CreateApp,
    /// Print the browser link that issues an authorization code
    GetCode {
        /// Client ID
        #[arg(long)]
        id: Option<String>,
    },
    /// Exchange an authorization code for a token pair and write it to the token file
    GetToken {
        #[command(flatten)]
        credentials: Credentials,
        /// Authorization code from get-code
        #[arg(long)]
        code: Option<String>,
        /// File to write the token to
        #[arg(long)]
        file: Option<String>,
    },
    /// Use the stored refresh token to obtain a new token pair
    RefreshToken {
        #[command(flatten)]
        credentials: Credentials,
        /// Token file to read and rewrite
        #[arg(long)]
        file: Option<String>,
    },
    /// Print the stored access token
    ShowToken {
        /// Token file to read
        #[arg(long)]
        file: Option<String>,
    },
}

#[derive(Debug, Default, Args)]
pub struct Credentials {
    /// Client ID
    #[arg(long)]
    pub id: Option<String>,
    /// Client secret used to obtain the oauth token
    #[arg(long)]
    pub secret: Option<String>,
}

use std::io::Write;

use yoauth_core::config::Config;
use yoauth_core::error::{Result, YoauthError};
use yoauth_core::types::TokenRecord;
use yoauth_integrations::store::FileTokenStore;
use yoauth_integrations::yahoo::YahooAuth;
use yoauth_integrations::TokenStore;

use crate::cli::{Command, Credentials};

/// Run one subcommand against `config`, writing user-facing output to `out`.
///
/// Required inputs are checked before any network or disk I/O. Process exit
/// is left to the caller.
pub async fn run<W: Write>(command: Command, config: &Config, out: &mut W) -> Result<()> {
    match command {
        Command::CreateApp => {
            write!(
                out,
                "To create a new Yahoo API app, visit: {}\n\n",
                config.endpoints.create_app_url
            )
            .map_err(output_error)?;
        }
        Command::GetCode { id } => {
            let client_id = resolve(id, &config.app.client_id);
            if client_id.is_empty() {
                return Err(YoauthError::Validation(
                    "please provide a client id, if you do not have one try create-app".to_string(),
                ));
            }

            let auth = YahooAuth::new(client_id, String::new(), config.endpoints.clone());
            write!(out, "Click this link to retrieve a code:\n{}\n\n", auth.auth_url()?)
                .map_err(output_error)?;
        }
        Command::GetToken {
            credentials,
            code,
            file,
        } => {
            let (client_id, client_secret) = require_credentials(credentials, config)?;
            let code = resolve(code, &config.app.code);
            if code.is_empty() {
                return Err(YoauthError::Validation(
                    "please provide a code to obtain the secret with (did you run get-code?)"
                        .to_string(),
                ));
            }
            let store = FileTokenStore::new(require_token_file(file, config)?);

            let auth = YahooAuth::new(client_id, client_secret, config.endpoints.clone());
            let token = auth.exchange_code(&code).await?;
            save(&store, &token, out).await?;
        }
        Command::RefreshToken { credentials, file } => {
            let (client_id, client_secret) = require_credentials(credentials, config)?;
            let store = FileTokenStore::new(require_token_file(file, config)?);

            let old = store.load().await?;
            if !old.is_complete() {
                tracing::warn!(
                    path = %store.path().display(),
                    ?old,
                    "stored token is incomplete, refreshing anyway"
                );
            }
            let auth = YahooAuth::new(client_id, client_secret, config.endpoints.clone());
            let token = auth.refresh(&old.refresh_token).await?;
            save(&store, &token, out).await?;
        }
        Command::ShowToken { file } => {
            let store = FileTokenStore::new(require_token_file(file, config)?);
            let token = store.load().await?;
            write!(out, "{}", token.access_token).map_err(output_error)?;
        }
    }

    out.flush().map_err(output_error)
}

/// Explicit flag wins over the env/config value; both may be empty.
fn resolve(flag: Option<String>, fallback: &str) -> String {
    flag.unwrap_or_else(|| fallback.to_string())
}

fn require_credentials(credentials: Credentials, config: &Config) -> Result<(String, String)> {
    let client_id = resolve(credentials.id, &config.app.client_id);
    let client_secret = resolve(credentials.secret, &config.app.client_secret);
    if client_id.is_empty() || client_secret.is_empty() {
        return Err(YoauthError::Validation(
            "please provide a client id and a client secret".to_string(),
        ));
    }
    Ok((client_id, client_secret))
}

fn require_token_file(file: Option<String>, config: &Config) -> Result<String> {
    let file = resolve(file, &config.app.token_file);
    if file.is_empty() {
        return Err(YoauthError::Validation(
            "please provide a token file (--file or YAHOO_APP_TOKEN_FILE)".to_string(),
        ));
    }
    Ok(file)
}

async fn save<W: Write>(store: &FileTokenStore, token: &TokenRecord, out: &mut W) -> Result<()> {
    store.persist(token).await?;
    writeln!(out, "writing token to {}", store.path().display()).map_err(output_error)
}

fn output_error(e: std::io::Error) -> YoauthError {
    YoauthError::Io(format!("failed to write output: {e}"))
}

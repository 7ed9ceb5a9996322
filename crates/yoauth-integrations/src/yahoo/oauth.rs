use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE};
use url::form_urlencoded;
use url::Url;
use yoauth_core::config::EndpointsConfig;
use yoauth_core::error::{Result, YoauthError};
use yoauth_core::types::TokenRecord;

/// Client for the Yahoo OAuth2 authorization-code flow.
///
/// Flow: create an app to get a client id and secret, visit [`YahooAuth::auth_url`]
/// in a browser to obtain a code, exchange the code for a token pair, then use
/// the refresh token to mint new access tokens as they expire (roughly hourly).
pub struct YahooAuth {
    client_id: String,
    client_secret: String,
    endpoints: EndpointsConfig,
    http: reqwest::Client,
}

impl YahooAuth {
    pub fn new(client_id: String, client_secret: String, endpoints: EndpointsConfig) -> Self {
        Self {
            client_id,
            client_secret,
            endpoints,
            // No timeout: a hung token endpoint blocks until the operator interrupts.
            http: reqwest::Client::new(),
        }
    }

    /// Browser URL the user must visit to obtain an authorization code.
    /// This step cannot be done programmatically.
    pub fn auth_url(&self) -> Result<String> {
        let url = Url::parse_with_params(
            &self.endpoints.auth_url,
            &[
                ("client_id", self.client_id.as_str()),
                ("redirect_uri", self.endpoints.redirect_uri.as_str()),
                ("response_type", "code"),
            ],
        )
        .map_err(|e| {
            YoauthError::Config(format!("invalid auth url {}: {e}", self.endpoints.auth_url))
        })?;

        Ok(url.into())
    }

    /// Exchange an authorization code for access + refresh tokens.
    pub async fn exchange_code(&self, code: &str) -> Result<TokenRecord> {
        let form = [
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("code", code),
            ("grant_type", "authorization_code"),
            ("redirect_uri", self.endpoints.redirect_uri.as_str()),
        ];
        self.exchange(&form).await
    }

    /// Obtain a fresh token pair using a previously issued refresh token.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenRecord> {
        let form = [
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("grant_type", "refresh_token"),
            ("redirect_uri", self.endpoints.redirect_uri.as_str()),
            ("refresh_token", refresh_token),
        ];
        self.exchange(&form).await
    }

    /// POST `form` to the token endpoint and decode the token response.
    ///
    /// Client credentials go in a Basic authorization header. A non-2xx
    /// answer is returned as [`YoauthError::Http`] without decoding the body.
    pub async fn exchange(&self, form: &[(&str, &str)]) -> Result<TokenRecord> {
        let body = encode_form(form);
        let grant_type = form
            .iter()
            .find(|(k, _)| *k == "grant_type")
            .map(|(_, v)| *v)
            .unwrap_or("");

        tracing::debug!(url = %self.endpoints.token_url, grant_type, "requesting token");

        let resp = self
            .http
            .post(&self.endpoints.token_url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header(AUTHORIZATION, self.basic_auth())
            .header(CONTENT_LENGTH, body.len())
            .body(body)
            .send()
            .await
            .map_err(|e| YoauthError::Transport(format!("token request failed: {e}")))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| YoauthError::Transport(format!("token response read failed: {e}")))?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), grant_type, "token endpoint rejected request");
            return Err(YoauthError::Http {
                status: status.as_u16(),
                body: text,
            });
        }

        let record: TokenRecord = serde_json::from_str(&text)
            .map_err(|e| YoauthError::Serialization(format!("token response parse failed: {e}")))?;

        tracing::debug!(
            expires_in = record.expires_in,
            token_type = %record.token_type,
            "token received"
        );

        Ok(record)
    }

    fn basic_auth(&self) -> String {
        let credentials = format!("{}:{}", self.client_id, self.client_secret);
        format!("Basic {}", STANDARD.encode(credentials))
    }
}

fn encode_form(form: &[(&str, &str)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(form)
        .finish()
}

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, YoauthError};

/// Access/refresh token pair as returned by the token endpoint and stored on disk.
///
/// Fields missing from a response or file decode to empty/zero; use
/// [`TokenRecord::validate`] before persisting.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(default)]
    pub expires_in: i64,
    #[serde(default)]
    pub token_type: String,
}

impl TokenRecord {
    /// Reject a record with any required field empty or zero.
    pub fn validate(&self) -> Result<()> {
        let missing = if self.access_token.is_empty() {
            "access_token"
        } else if self.refresh_token.is_empty() {
            "refresh_token"
        } else if self.expires_in == 0 {
            "expires_in"
        } else if self.token_type.is_empty() {
            "token_type"
        } else {
            return Ok(());
        };

        Err(YoauthError::EmptyToken(format!("{missing} is empty")))
    }

    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }
}

impl fmt::Debug for TokenRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenRecord")
            .field("access_token", &redact(&self.access_token))
            .field("refresh_token", &redact(&self.refresh_token))
            .field("expires_in", &self.expires_in)
            .field("token_type", &self.token_type)
            .finish()
    }
}

fn redact(value: &str) -> &'static str {
    if value.is_empty() {
        "<empty>"
    } else {
        "<redacted>"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> TokenRecord {
        TokenRecord {
            access_token: "a".to_string(),
            refresh_token: "r".to_string(),
            expires_in: 3600,
            token_type: "bearer".to_string(),
        }
    }

    #[test]
    fn test_complete_record_validates() {
        assert!(full().validate().is_ok());
        assert!(full().is_complete());
    }

    #[test]
    fn test_each_empty_field_rejected() {
        let cases = [
            TokenRecord { access_token: String::new(), ..full() },
            TokenRecord { refresh_token: String::new(), ..full() },
            TokenRecord { expires_in: 0, ..full() },
            TokenRecord { token_type: String::new(), ..full() },
        ];
        for record in cases {
            assert!(matches!(record.validate(), Err(YoauthError::EmptyToken(_))));
        }
    }

    #[test]
    fn test_negative_expiry_is_not_empty() {
        let record = TokenRecord { expires_in: -1, ..full() };
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_decode_to_zero_values() {
        let record: TokenRecord = serde_json::from_str(r#"{"error":"invalid_grant"}"#).unwrap();
        assert_eq!(record, TokenRecord::default());
        assert!(!record.is_complete());
    }

    #[test]
    fn test_debug_hides_tokens() {
        let out = format!("{:?}", full());
        assert!(!out.contains("\"a\""));
        assert!(out.contains("<redacted>"));
        assert!(out.contains("bearer"));
    }
}

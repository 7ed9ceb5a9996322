pub mod store;
pub mod yahoo;

use async_trait::async_trait;
use yoauth_core::error::Result;
use yoauth_core::types::TokenRecord;

/// Abstraction for persisting the token record between runs.
/// One store holds exactly one record; last write wins.
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn load(&self) -> Result<TokenRecord>;
    async fn persist(&self, record: &TokenRecord) -> Result<()>;
}

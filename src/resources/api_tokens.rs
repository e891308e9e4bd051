//! Platform API token operations.
//!
//! These authenticate callers to the platform itself (as opposed to database
//! auth tokens) and live outside any organization scope.

use serde::Deserialize;

use crate::client::paths::global_path;
use crate::client::response::unwrap_field;
use crate::client::Client;
use crate::Result;

pub struct ApiTokens<'a> {
    pub(crate) client: &'a Client,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiToken {
    pub id: String,
    pub name: String,
}

/// A freshly minted token. The `token` value is shown exactly once.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedApiToken {
    pub id: String,
    pub name: String,
    pub token: String,
}

impl ApiTokens<'_> {
    pub async fn list(&self) -> Result<Vec<ApiToken>> {
        let path = global_path(&["auth", "api-tokens"]);
        let body = unwrap_field(self.client.get(&path, None).await, Some("tokens"))?;
        Ok(serde_json::from_value(body)?)
    }

    pub async fn create(&self, name: &str) -> Result<CreatedApiToken> {
        let path = global_path(&["auth", "api-tokens", name]);
        let body = self.client.post(&path, None).await?;
        Ok(serde_json::from_value(body)?)
    }

    pub async fn revoke(&self, name: &str) -> Result<()> {
        let path = global_path(&["auth", "api-tokens", name]);
        self.client.delete(&path).await?;
        Ok(())
    }
}

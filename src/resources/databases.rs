//! Database management operations.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::client::paths::organization_path;
use crate::client::response::unwrap_field;
use crate::client::Client;
use crate::Result;

/// Handle for database operations, borrowed from a [`Client`].
pub struct Databases<'a> {
    pub(crate) client: &'a Client,
}

/// A managed database.
#[derive(Debug, Clone, Deserialize)]
pub struct Database {
    pub name: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub regions: Option<Vec<String>>,
    #[serde(default)]
    pub archived: Option<bool>,
}

/// Parameters for creating a database.
#[derive(Debug, Clone, Serialize)]
pub struct CreateDatabase {
    pub name: String,
    pub group: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_limit: Option<String>,
}

impl CreateDatabase {
    pub fn new(name: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group: group.into(),
            size_limit: None,
        }
    }
}

/// Rolling usage totals for one database.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseUsage {
    #[serde(default)]
    pub rows_read: u64,
    #[serde(default)]
    pub rows_written: u64,
    #[serde(default)]
    pub storage_bytes: u64,
}

/// Options for minting a database auth token.
#[derive(Debug, Clone, Default)]
pub struct DatabaseTokenOptions {
    /// Expiration such as `"2w"` or `"never"`. Server default when absent.
    pub expiration: Option<String>,
    /// Access level, e.g. `"read-only"` or `"full-access"`.
    pub authorization: Option<String>,
}

impl Databases<'_> {
    /// List all databases in the organization.
    pub async fn list(&self, organization: Option<&str>) -> Result<Vec<Database>> {
        let path = organization_path(
            self.client.default_organization(),
            organization,
            &["databases"],
        )?;
        let body = unwrap_field(self.client.get(&path, None).await, Some("databases"))?;
        Ok(serde_json::from_value(body)?)
    }

    /// Fetch one database by name.
    pub async fn retrieve(&self, name: &str, organization: Option<&str>) -> Result<Database> {
        let path = organization_path(
            self.client.default_organization(),
            organization,
            &["databases", name],
        )?;
        let body = unwrap_field(self.client.get(&path, None).await, Some("database"))?;
        Ok(serde_json::from_value(body)?)
    }

    /// Create a database in a group.
    pub async fn create(
        &self,
        request: &CreateDatabase,
        organization: Option<&str>,
    ) -> Result<Database> {
        let path = organization_path(
            self.client.default_organization(),
            organization,
            &["databases"],
        )?;
        let payload = serde_json::to_value(request)?;
        let body = unwrap_field(self.client.post(&path, Some(&payload)).await, Some("database"))?;
        Ok(serde_json::from_value(body)?)
    }

    /// Delete a database. Irreversible on the platform side.
    pub async fn delete(&self, name: &str, organization: Option<&str>) -> Result<()> {
        let path = organization_path(
            self.client.default_organization(),
            organization,
            &["databases", name],
        )?;
        self.client.delete(&path).await?;
        Ok(())
    }

    /// Mint an auth token for connecting to one database.
    ///
    /// Options travel as query parameters; absent ones are omitted from the
    /// request entirely.
    pub async fn create_token(
        &self,
        name: &str,
        options: &DatabaseTokenOptions,
        organization: Option<&str>,
    ) -> Result<String> {
        let path = organization_path(
            self.client.default_organization(),
            organization,
            &["databases", name, "auth", "tokens"],
        )?;
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(expiration) = &options.expiration {
            query.push(("expiration", expiration.clone()));
        }
        if let Some(authorization) = &options.authorization {
            query.push(("authorization", authorization.clone()));
        }
        let result = self
            .client
            .dispatch(reqwest::Method::POST, &path, None, Some(&query))
            .await;
        let body = unwrap_field(result, Some("jwt"))?;
        Ok(serde_json::from_value(body)?)
    }

    /// Fetch rolling usage totals for one database.
    pub async fn usage(&self, name: &str, organization: Option<&str>) -> Result<DatabaseUsage> {
        let path = organization_path(
            self.client.default_organization(),
            organization,
            &["databases", name, "usage"],
        )?;
        let body = unwrap_field(self.client.get(&path, None).await, Some("usage"))?;
        Ok(serde_json::from_value(body)?)
    }

    /// Invalidate every outstanding auth token for a database.
    pub async fn invalidate_tokens(&self, name: &str, organization: Option<&str>) -> Result<()> {
        let path = organization_path(
            self.client.default_organization(),
            organization,
            &["databases", name, "auth", "rotate"],
        )?;
        self.client.post(&path, Some(&json!({}))).await?;
        Ok(())
    }
}

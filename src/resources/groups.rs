//! Placement-group operations.

use serde::Deserialize;
use serde_json::json;

use crate::client::paths::organization_path;
use crate::client::response::unwrap_field;
use crate::client::Client;
use crate::Result;

pub struct Groups<'a> {
    pub(crate) client: &'a Client,
}

/// A placement group: a named set of locations databases are replicated to.
#[derive(Debug, Clone, Deserialize)]
pub struct Group {
    pub name: String,
    #[serde(default)]
    pub primary: Option<String>,
    #[serde(default)]
    pub locations: Option<Vec<String>>,
    #[serde(default)]
    pub archived: Option<bool>,
}

impl Groups<'_> {
    pub async fn list(&self, organization: Option<&str>) -> Result<Vec<Group>> {
        let path = organization_path(
            self.client.default_organization(),
            organization,
            &["groups"],
        )?;
        let body = unwrap_field(self.client.get(&path, None).await, Some("groups"))?;
        Ok(serde_json::from_value(body)?)
    }

    pub async fn retrieve(&self, name: &str, organization: Option<&str>) -> Result<Group> {
        let path = organization_path(
            self.client.default_organization(),
            organization,
            &["groups", name],
        )?;
        let body = unwrap_field(self.client.get(&path, None).await, Some("group"))?;
        Ok(serde_json::from_value(body)?)
    }

    /// Create a group with its primary location.
    pub async fn create(
        &self,
        name: &str,
        location: &str,
        organization: Option<&str>,
    ) -> Result<Group> {
        let path = organization_path(
            self.client.default_organization(),
            organization,
            &["groups"],
        )?;
        let payload = json!({ "name": name, "location": location });
        let body = unwrap_field(self.client.post(&path, Some(&payload)).await, Some("group"))?;
        Ok(serde_json::from_value(body)?)
    }

    pub async fn delete(&self, name: &str, organization: Option<&str>) -> Result<()> {
        let path = organization_path(
            self.client.default_organization(),
            organization,
            &["groups", name],
        )?;
        self.client.delete(&path).await?;
        Ok(())
    }
}

//! Organization operations.
//!
//! Listing organizations is a global discovery endpoint: the caller does not
//! yet know which organizations exist, so the path carries no organization
//! prefix.

use serde::Deserialize;

use crate::client::paths::{global_path, organization_path};
use crate::client::response::unwrap_field;
use crate::client::Client;
use crate::Result;

pub struct Organizations<'a> {
    pub(crate) client: &'a Client,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Organization {
    pub name: String,
    pub slug: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub plan: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrganizationMember {
    pub username: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl Organizations<'_> {
    /// List every organization the token can see.
    pub async fn list(&self) -> Result<Vec<Organization>> {
        let path = global_path(&["organizations"]);
        let body = unwrap_field(self.client.get(&path, None).await, Some("organizations"))?;
        Ok(serde_json::from_value(body)?)
    }

    /// List the members of an organization.
    pub async fn members(&self, organization: Option<&str>) -> Result<Vec<OrganizationMember>> {
        let path = organization_path(
            self.client.default_organization(),
            organization,
            &["members"],
        )?;
        let body = unwrap_field(self.client.get(&path, None).await, Some("members"))?;
        Ok(serde_json::from_value(body)?)
    }

    /// Update organization settings from a partial document.
    pub async fn update(
        &self,
        changes: &serde_json::Value,
        organization: Option<&str>,
    ) -> Result<Organization> {
        let path = organization_path(self.client.default_organization(), organization, &[])?;
        let body = unwrap_field(
            self.client.patch(&path, changes).await,
            Some("organization"),
        )?;
        Ok(serde_json::from_value(body)?)
    }
}

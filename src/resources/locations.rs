//! Placement-region discovery.

use std::collections::BTreeMap;

use crate::client::paths::global_path;
use crate::client::response::unwrap_field;
use crate::client::Client;
use crate::Result;

pub struct Locations<'a> {
    pub(crate) client: &'a Client,
}

impl Locations<'_> {
    /// Map of location code to human-readable name, e.g. `"ams" -> "Amsterdam"`.
    ///
    /// Global discovery endpoint; no organization prefix.
    pub async fn list(&self) -> Result<BTreeMap<String, String>> {
        let path = global_path(&["locations"]);
        let body = unwrap_field(self.client.get(&path, None).await, Some("locations"))?;
        Ok(serde_json::from_value(body)?)
    }
}

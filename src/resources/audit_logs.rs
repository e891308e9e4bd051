//! Audit-log listing.
//!
//! The audit log is the one listing large enough to need cursor pagination;
//! [`AuditLogs::list`] exposes it as a flat lazy stream, and
//! [`AuditLogs::list_page`] gives manual page-at-a-time access for callers
//! that want to drive the cursor themselves.

use futures::Stream;
use serde::Deserialize;

use crate::client::paths::organization_path;
use crate::client::Client;
use crate::pagination::{paginate, Page};
use crate::Result;

pub struct AuditLogs<'a> {
    pub(crate) client: &'a Client,
}

/// One recorded administrative action.
#[derive(Debug, Clone, Deserialize)]
pub struct AuditLogEntry {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Wire envelope for one page of audit logs.
#[derive(Debug, Deserialize)]
struct AuditLogPage {
    #[serde(default)]
    audit_logs: Vec<AuditLogEntry>,
    #[serde(default)]
    cursor: Option<String>,
    #[serde(default)]
    has_more: Option<bool>,
}

impl<'a> AuditLogs<'a> {
    /// Stream every audit-log entry, oldest page first, fetching lazily.
    ///
    /// Path resolution happens up front so a missing organization surfaces
    /// here as a local error instead of silently ending the stream. A remote
    /// failure mid-stream ends the stream without yielding further items
    /// (see [`paginate`]).
    pub fn list(
        &self,
        organization: Option<&str>,
        page_size: Option<u32>,
    ) -> Result<impl Stream<Item = AuditLogEntry> + 'a> {
        let path = organization_path(
            self.client.default_organization(),
            organization,
            &["audit-logs"],
        )?;
        let client = self.client;
        Ok(paginate(move |cursor| {
            fetch_page(client, path.clone(), cursor, page_size)
        }))
    }

    /// Fetch a single page, driving the cursor manually.
    pub async fn list_page(
        &self,
        organization: Option<&str>,
        cursor: Option<String>,
        page_size: Option<u32>,
    ) -> Result<Page<AuditLogEntry>> {
        let path = organization_path(
            self.client.default_organization(),
            organization,
            &["audit-logs"],
        )?;
        fetch_page(self.client, path, cursor, page_size).await
    }
}

async fn fetch_page(
    client: &Client,
    path: String,
    cursor: Option<String>,
    page_size: Option<u32>,
) -> Result<Page<AuditLogEntry>> {
    let mut query: Vec<(&str, String)> = Vec::new();
    if let Some(size) = page_size {
        query.push(("page_size", size.to_string()));
    }
    if let Some(cursor) = cursor {
        query.push(("cursor", cursor));
    }
    let body = client.get(&path, Some(&query)).await?;
    let envelope: AuditLogPage = serde_json::from_value(body)?;
    Ok(Page {
        items: envelope.audit_logs,
        next_cursor: envelope.cursor,
        has_more: envelope.has_more,
    })
}

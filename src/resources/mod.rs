//! Per-resource operation wrappers.
//!
//! Each wrapper shapes parameters, resolves a path, dispatches through the
//! client core, and unwraps the response envelope. No retry, no caching, no
//! other logic lives here.

mod api_tokens;
mod audit_logs;
mod databases;
mod groups;
mod locations;
mod organizations;

pub use api_tokens::{ApiToken, ApiTokens, CreatedApiToken};
pub use audit_logs::{AuditLogEntry, AuditLogs};
pub use databases::{CreateDatabase, Database, DatabaseTokenOptions, DatabaseUsage, Databases};
pub use groups::{Group, Groups};
pub use locations::Locations;
pub use organizations::{Organization, OrganizationMember, Organizations};

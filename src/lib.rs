//! # stratus-client
//!
//! Rust client for the Stratus cloud-database platform API.
//!
//! ## Overview
//!
//! This library is the access layer between your code and the platform's
//! management API: it authenticates requests, resolves organization-scoped
//! resource paths, dispatches HTTP calls, normalizes every failure shape
//! into one closed error taxonomy, unwraps response envelopes, and exposes
//! large listings as lazy cursor-paginated streams.
//!
//! ## Core Philosophy
//!
//! - **Uniform results**: every operation returns `Result`; nothing panics
//!   on remote trouble, and remote failures always arrive as [`ApiError`].
//! - **Local vs remote, never conflated**: a missing organization or token
//!   is a [`ConfigError`] raised before any network call; only completed or
//!   attempted exchanges produce an [`ApiError`].
//! - **No hidden retries**: the client classifies retryability
//!   ([`ApiError::is_retryable`], [`ApiError::retry_after_seconds`]) and
//!   leaves the backoff policy to the caller.
//! - **Lazy pagination**: listing streams fetch one page at a time, only
//!   when polled, with no prefetching.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use stratus_client::Client;
//!
//! #[tokio::main]
//! async fn main() -> stratus_client::Result<()> {
//!     let client = Client::builder()
//!         .token("your-api-token")
//!         .organization("acme")
//!         .build()?;
//!
//!     for db in client.databases().list(None).await? {
//!         println!("{}", db.name);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Request dispatch, path resolution, failure classification |
//! | [`config`] | Client configuration and builder |
//! | [`error`] | Error taxonomy and retry semantics |
//! | [`pagination`] | Cursor state machine and lazy page streaming |
//! | [`resources`] | Per-resource operation wrappers |

pub mod client;
pub mod config;
pub mod error;
pub mod pagination;
pub mod resources;

// Re-export main types for convenience
pub use client::Client;
pub use config::{ClientBuilder, ClientConfig};
pub use error::{ApiError, ConfigError, Error, ErrorKind, RequestContext};
pub use pagination::{paginate, Cursor, Page};
pub use resources::{
    ApiToken, AuditLogEntry, CreateDatabase, CreatedApiToken, Database, DatabaseTokenOptions,
    DatabaseUsage, Group, Organization, OrganizationMember,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

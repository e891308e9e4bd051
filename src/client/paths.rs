//! Resource path construction.

use crate::error::ConfigError;

/// Fixed API root all platform endpoints hang off.
const API_ROOT: &str = "/v1";

/// Build an organization-scoped path.
///
/// An explicit `override_org` wins over the client-level default. Both
/// absent is a programmer error surfaced locally, before any network call.
pub(crate) fn organization_path(
    default_org: Option<&str>,
    override_org: Option<&str>,
    segments: &[&str],
) -> Result<String, ConfigError> {
    let org = override_org
        .or(default_org)
        .ok_or(ConfigError::MissingOrganization)?;
    let mut path = format!("{API_ROOT}/organizations/{org}");
    push_segments(&mut path, segments);
    Ok(path)
}

/// Build a path outside the organization scope (global discovery endpoints).
pub(crate) fn global_path(segments: &[&str]) -> String {
    let mut path = String::from(API_ROOT);
    push_segments(&mut path, segments);
    path
}

fn push_segments(path: &mut String, segments: &[&str]) {
    for segment in segments {
        // Single separator between components even if a caller passed one.
        let trimmed = segment.trim_matches('/');
        if trimmed.is_empty() {
            continue;
        }
        path.push('/');
        path.push_str(trimmed);
    }
}

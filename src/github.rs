//! GitHub repository identity resolution
//!
//! Turns a pin's repository location into the `owner/name` pair used to look
//! up its license. Accepted location shapes:
//! - `https://github.com/owner/name[.git]` (any scheme the `url` crate parses)
//! - `git@github.com:owner/name[.git]` (scp-like SSH)
//! - `github.com/owner/name` (bare host path)
//!
//! Locations on any other host never resolve.

use crate::pin::Pin;
use serde::Serialize;
use tracing::debug;
use url::Url;

/// The only hosting domain identities are resolved for
pub const GITHUB_HOST: &str = "github.com";

/// A repository hosted on GitHub
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryIdentity {
    pub owner: String,
    /// Last path segment of the location, without `.git`
    pub name: String,
    /// Name shown to users; see [`resolve`] and [`crate::rename::apply_renames`]
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl RepositoryIdentity {
    /// Canonical web URL of the repository
    pub fn source_url(&self) -> String {
        format!("https://{}/{}/{}", GITHUB_HOST, self.owner, self.name)
    }
}

/// Resolve a pin to its GitHub repository
///
/// Returns `None` when the location is malformed or not on GitHub. The display
/// name is the manifest's package name whenever it differs from the repository
/// name, so `IterableSDK` pinned at `Iterable/swift-sdk` keeps showing as
/// `IterableSDK`.
pub fn resolve(pin: &Pin) -> Option<RepositoryIdentity> {
    let Some((owner, name)) = parse_location(&pin.source_location) else {
        debug!(
            package = %pin.package_name,
            location = %pin.source_location,
            "location does not resolve to a GitHub repository"
        );
        return None;
    };

    // Exact comparison: a case-only difference still counts as an alias
    let display_name = if pin.package_name != name {
        pin.package_name.clone()
    } else {
        name.clone()
    };

    Some(RepositoryIdentity {
        owner,
        name,
        display_name,
        version: pin.version.clone(),
    })
}

/// Split a repository location into `(owner, name)` if it points at GitHub
pub fn parse_location(location: &str) -> Option<(String, String)> {
    let (host, path) = split_host_path(location.trim())?;
    if !host.eq_ignore_ascii_case(GITHUB_HOST) {
        return None;
    }
    owner_and_name(&path)
}

fn split_host_path(location: &str) -> Option<(String, String)> {
    // Only the authority goes through `Url`; the path stays verbatim so names
    // with `#`, `?` or spaces match their scp-like spelling.
    if let Some((scheme, rest)) = location.split_once("://") {
        let (authority, path) = rest.split_once('/').unwrap_or((rest, ""));
        let url = Url::parse(&format!("{scheme}://{authority}")).ok()?;
        let host = url.host_str()?;
        return Some((host.to_string(), path.to_string()));
    }

    // scp-like: [user@]host:path
    if let Some((authority, path)) = location.split_once(':')
        && !authority.contains('/')
    {
        let host = authority
            .rsplit_once('@')
            .map_or(authority, |(_, host)| host);
        return Some((host.to_string(), path.to_string()));
    }

    // host/path with no scheme at all
    let (host, path) = location.split_once('/')?;
    Some((host.to_string(), path.to_string()))
}

/// Take the last two path segments as owner and name
fn owner_and_name(path: &str) -> Option<(String, String)> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let [.., owner, name] = segments.as_slice() else {
        return None;
    };

    let name = name.strip_suffix(".git").unwrap_or(*name);
    if name.is_empty() {
        return None;
    }
    Some((owner.to_string(), name.to_string()))
}

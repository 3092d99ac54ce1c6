//! Display-name overrides applied after resolution

use crate::github::RepositoryIdentity;
use std::collections::HashMap;

/// Replace the display name when `renames` has an entry for the repository name
///
/// Keys match [`RepositoryIdentity::name`] exactly, never the manifest's
/// package name. An explicit rename wins over the package-name alias.
pub fn apply_renames(
    mut identity: RepositoryIdentity,
    renames: &HashMap<String, String>,
) -> RepositoryIdentity {
    if let Some(renamed) = renames.get(&identity.name) {
        identity.display_name = renamed.clone();
    }
    identity
}

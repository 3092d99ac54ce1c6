//! Unified pin record shared by every lockfile schema

/// One resolved dependency from a lockfile, independent of schema version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pin {
    /// Name declared by the manifest (`package` in v1, `identity` in v2)
    pub package_name: String,
    /// Repository location as written in the manifest; may be malformed
    pub source_location: String,
    /// Commit the dependency is pinned to; may be empty
    pub revision: String,
    pub branch: Option<String>,
    pub version: Option<String>,
}

impl Pin {
    pub fn new(
        package_name: impl Into<String>,
        source_location: impl Into<String>,
        revision: impl Into<String>,
    ) -> Self {
        Self {
            package_name: package_name.into(),
            source_location: source_location.into(),
            revision: revision.into(),
            branch: None,
            version: None,
        }
    }

    pub fn with_branch(mut self, branch: &str) -> Self {
        self.branch = Some(branch.to_string());
        self
    }

    pub fn with_version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }
}

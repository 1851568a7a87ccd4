use crate::error::ClientError;

/// Address of one repository: the storage shard that hosts it plus its
/// path relative to that shard's root (conventionally ending in `.git`).
///
/// Immutable after construction and cheap to clone, so a single value can
/// be shared freely across concurrent calls.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryIdentity {
    storage_name: String,
    relative_path: String,
}

impl RepositoryIdentity {
    /// Builds an identity, rejecting empty fields before anything touches
    /// the network.
    pub fn new(
        storage_name: impl Into<String>,
        relative_path: impl Into<String>,
    ) -> Result<Self, ClientError> {
        let storage_name = storage_name.into();
        let relative_path = relative_path.into();
        if storage_name.is_empty() {
            return Err(ClientError::invalid_argument(
                "repository_identity",
                "storage name must not be empty",
            ));
        }
        if relative_path.is_empty() {
            return Err(ClientError::invalid_argument(
                "repository_identity",
                "relative path must not be empty",
            ));
        }
        Ok(RepositoryIdentity {
            storage_name,
            relative_path,
        })
    }

    pub fn storage_name(&self) -> &str {
        &self.storage_name
    }

    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }
}

impl std::fmt::Display for RepositoryIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.storage_name, self.relative_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_valid_identity() {
        let identity = RepositoryIdentity::new("default", "group/project.git").unwrap();
        assert_eq!(identity.storage_name(), "default");
        assert_eq!(identity.relative_path(), "group/project.git");
    }

    #[test]
    fn test_empty_fields_rejected() {
        let err = RepositoryIdentity::new("", "group/project.git").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidArgument);
        let err = RepositoryIdentity::new("default", "").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_structural_equality_and_hash() {
        use std::collections::HashSet;
        let a = RepositoryIdentity::new("default", "a/b.git").unwrap();
        let b = RepositoryIdentity::new("default", "a/b.git").unwrap();
        let c = RepositoryIdentity::new("other", "a/b.git").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        let mut set = HashSet::new();
        set.insert(a.clone());
        assert!(set.contains(&b));
        assert!(!set.contains(&c));
    }
}

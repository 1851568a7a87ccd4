use crate::identity::RepositoryIdentity;

pub mod gitshard;

impl From<&RepositoryIdentity> for gitshard::Repository {
    fn from(identity: &RepositoryIdentity) -> Self {
        gitshard::Repository {
            storage_name: identity.storage_name().to_string(),
            relative_path: identity.relative_path().to_string(),
        }
    }
}

use std::time::Duration;

use crate::error::ClientError;
use crate::identity::RepositoryIdentity;

/// Timeout applied to `fetch_remote` when the caller does not supply one.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(60);

/// Credential selection for `fetch_remote`. A closed set so the transport
/// can handle every mode exhaustively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchAuth {
    None,
    SshKey(String),
    SshKnownHosts(String),
}

/// Caller-facing options for `fetch_remote`. `timeout_secs` is expressed as
/// a signed count so a nonsensical caller value can be rejected instead of
/// silently coerced; `None` selects [`DEFAULT_FETCH_TIMEOUT`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRemoteOptions {
    pub auth: FetchAuth,
    pub forced: bool,
    pub no_tags: bool,
    pub timeout_secs: Option<i64>,
}

impl Default for FetchRemoteOptions {
    fn default() -> Self {
        FetchRemoteOptions {
            auth: FetchAuth::None,
            forced: false,
            no_tags: false,
            timeout_secs: None,
        }
    }
}

/// One fully-validated request to the repository service. Construction is
/// the only place caller input is checked; once built, an envelope is
/// immutable and carries everything the transport needs to dispatch it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallEnvelope {
    Exists {
        repository: RepositoryIdentity,
    },
    Cleanup {
        repository: RepositoryIdentity,
    },
    GarbageCollect {
        repository: RepositoryIdentity,
        create_bitmap: bool,
    },
    RepackFull {
        repository: RepositoryIdentity,
        create_bitmap: bool,
    },
    RepackIncremental {
        repository: RepositoryIdentity,
    },
    Size {
        repository: RepositoryIdentity,
    },
    ApplyAttributes {
        repository: RepositoryIdentity,
        revision: String,
    },
    InfoAttributes {
        repository: RepositoryIdentity,
    },
    HasLocalBranches {
        repository: RepositoryIdentity,
    },
    FetchRemote {
        repository: RepositoryIdentity,
        remote_url: String,
        auth: FetchAuth,
        forced: bool,
        no_tags: bool,
        timeout: Duration,
    },
    RebaseInProgress {
        repository: RepositoryIdentity,
        rebase_id: String,
    },
    SquashInProgress {
        repository: RepositoryIdentity,
        squash_id: String,
    },
    Checksum {
        repository: RepositoryIdentity,
    },
    CreateFromSnapshot {
        repository: RepositoryIdentity,
        http_url: String,
        http_auth: String,
    },
    RawChanges {
        repository: RepositoryIdentity,
        from_revision: String,
        to_revision: String,
    },
}

fn require_non_empty(
    operation: &'static str,
    field: &'static str,
    value: &str,
    repository: &RepositoryIdentity,
) -> Result<(), ClientError> {
    if value.is_empty() {
        return Err(
            ClientError::invalid_argument(operation, format!("{} must not be empty", field))
                .with_repository(repository),
        );
    }
    Ok(())
}

impl CallEnvelope {
    pub fn exists(repository: RepositoryIdentity) -> Self {
        CallEnvelope::Exists { repository }
    }

    pub fn cleanup(repository: RepositoryIdentity) -> Self {
        CallEnvelope::Cleanup { repository }
    }

    pub fn garbage_collect(repository: RepositoryIdentity, create_bitmap: bool) -> Self {
        CallEnvelope::GarbageCollect {
            repository,
            create_bitmap,
        }
    }

    pub fn repack_full(repository: RepositoryIdentity, create_bitmap: bool) -> Self {
        CallEnvelope::RepackFull {
            repository,
            create_bitmap,
        }
    }

    pub fn repack_incremental(repository: RepositoryIdentity) -> Self {
        CallEnvelope::RepackIncremental { repository }
    }

    pub fn size(repository: RepositoryIdentity) -> Self {
        CallEnvelope::Size { repository }
    }

    pub fn apply_attributes(
        repository: RepositoryIdentity,
        revision: &str,
    ) -> Result<Self, ClientError> {
        require_non_empty("apply_gitattributes", "revision", revision, &repository)?;
        Ok(CallEnvelope::ApplyAttributes {
            repository,
            revision: revision.to_string(),
        })
    }

    pub fn info_attributes(repository: RepositoryIdentity) -> Self {
        CallEnvelope::InfoAttributes { repository }
    }

    pub fn has_local_branches(repository: RepositoryIdentity) -> Self {
        CallEnvelope::HasLocalBranches { repository }
    }

    /// Validates the remote URL and timeout. A missing timeout selects
    /// [`DEFAULT_FETCH_TIMEOUT`]; zero or negative values are rejected
    /// rather than defaulted, so a caller bug cannot turn into an
    /// unbounded fetch.
    pub fn fetch_remote(
        repository: RepositoryIdentity,
        remote_url: &str,
        options: FetchRemoteOptions,
    ) -> Result<Self, ClientError> {
        require_non_empty("fetch_remote", "remote url", remote_url, &repository)?;
        let timeout = match options.timeout_secs {
            None => DEFAULT_FETCH_TIMEOUT,
            Some(secs) if secs > 0 => Duration::from_secs(secs as u64),
            Some(secs) => {
                return Err(ClientError::invalid_argument(
                    "fetch_remote",
                    format!("timeout must be positive, got {}", secs),
                )
                .with_repository(&repository));
            }
        };
        Ok(CallEnvelope::FetchRemote {
            repository,
            remote_url: remote_url.to_string(),
            auth: options.auth,
            forced: options.forced,
            no_tags: options.no_tags,
            timeout,
        })
    }

    pub fn rebase_in_progress(
        repository: RepositoryIdentity,
        rebase_id: &str,
    ) -> Result<Self, ClientError> {
        require_non_empty("is_rebase_in_progress", "rebase id", rebase_id, &repository)?;
        Ok(CallEnvelope::RebaseInProgress {
            repository,
            rebase_id: rebase_id.to_string(),
        })
    }

    pub fn squash_in_progress(
        repository: RepositoryIdentity,
        squash_id: &str,
    ) -> Result<Self, ClientError> {
        require_non_empty("is_squash_in_progress", "squash id", squash_id, &repository)?;
        Ok(CallEnvelope::SquashInProgress {
            repository,
            squash_id: squash_id.to_string(),
        })
    }

    pub fn checksum(repository: RepositoryIdentity) -> Self {
        CallEnvelope::Checksum { repository }
    }

    /// `http_auth` may be empty; the snapshot source is then fetched
    /// without an Authorization header.
    pub fn create_from_snapshot(
        repository: RepositoryIdentity,
        http_url: &str,
        http_auth: &str,
    ) -> Result<Self, ClientError> {
        require_non_empty(
            "create_repository_from_snapshot",
            "snapshot url",
            http_url,
            &repository,
        )?;
        Ok(CallEnvelope::CreateFromSnapshot {
            repository,
            http_url: http_url.to_string(),
            http_auth: http_auth.to_string(),
        })
    }

    pub fn raw_changes(
        repository: RepositoryIdentity,
        from_revision: &str,
        to_revision: &str,
    ) -> Result<Self, ClientError> {
        require_non_empty("get_raw_changes", "from revision", from_revision, &repository)?;
        require_non_empty("get_raw_changes", "to revision", to_revision, &repository)?;
        Ok(CallEnvelope::RawChanges {
            repository,
            from_revision: from_revision.to_string(),
            to_revision: to_revision.to_string(),
        })
    }

    /// Wire-level name of the remote procedure this envelope maps to.
    pub fn operation(&self) -> &'static str {
        match self {
            CallEnvelope::Exists { .. } => "repository_exists",
            CallEnvelope::Cleanup { .. } => "cleanup",
            CallEnvelope::GarbageCollect { .. } => "garbage_collect",
            CallEnvelope::RepackFull { .. } => "repack_full",
            CallEnvelope::RepackIncremental { .. } => "repack_incremental",
            CallEnvelope::Size { .. } => "repository_size",
            CallEnvelope::ApplyAttributes { .. } => "apply_gitattributes",
            CallEnvelope::InfoAttributes { .. } => "get_info_attributes",
            CallEnvelope::HasLocalBranches { .. } => "has_local_branches",
            CallEnvelope::FetchRemote { .. } => "fetch_remote",
            CallEnvelope::RebaseInProgress { .. } => "is_rebase_in_progress",
            CallEnvelope::SquashInProgress { .. } => "is_squash_in_progress",
            CallEnvelope::Checksum { .. } => "calculate_checksum",
            CallEnvelope::CreateFromSnapshot { .. } => "create_repository_from_snapshot",
            CallEnvelope::RawChanges { .. } => "get_raw_changes",
        }
    }

    pub fn repository(&self) -> &RepositoryIdentity {
        match self {
            CallEnvelope::Exists { repository }
            | CallEnvelope::Cleanup { repository }
            | CallEnvelope::GarbageCollect { repository, .. }
            | CallEnvelope::RepackFull { repository, .. }
            | CallEnvelope::RepackIncremental { repository }
            | CallEnvelope::Size { repository }
            | CallEnvelope::ApplyAttributes { repository, .. }
            | CallEnvelope::InfoAttributes { repository }
            | CallEnvelope::HasLocalBranches { repository }
            | CallEnvelope::FetchRemote { repository, .. }
            | CallEnvelope::RebaseInProgress { repository, .. }
            | CallEnvelope::SquashInProgress { repository, .. }
            | CallEnvelope::Checksum { repository }
            | CallEnvelope::CreateFromSnapshot { repository, .. }
            | CallEnvelope::RawChanges { repository, .. } => repository,
        }
    }

    /// Whether the service answers this envelope with a chunk stream
    /// rather than a single response.
    pub fn is_streaming(&self) -> bool {
        matches!(
            self,
            CallEnvelope::InfoAttributes { .. } | CallEnvelope::RawChanges { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn identity() -> RepositoryIdentity {
        RepositoryIdentity::new("default", "group/project.git").unwrap()
    }

    #[test]
    fn test_fetch_remote_defaults() {
        let envelope =
            CallEnvelope::fetch_remote(identity(), "ssh://example.com", FetchRemoteOptions::default())
                .unwrap();
        match envelope {
            CallEnvelope::FetchRemote {
                remote_url,
                auth,
                forced,
                no_tags,
                timeout,
                ..
            } => {
                assert_eq!(remote_url, "ssh://example.com");
                assert_eq!(auth, FetchAuth::None);
                assert!(!forced);
                assert!(!no_tags);
                assert_eq!(timeout, DEFAULT_FETCH_TIMEOUT);
            }
            other => panic!("unexpected envelope {:?}", other),
        }
    }

    #[test]
    fn test_fetch_remote_rejects_non_positive_timeout() {
        for secs in [0, -1, -60] {
            let err = CallEnvelope::fetch_remote(
                identity(),
                "ssh://example.com",
                FetchRemoteOptions {
                    timeout_secs: Some(secs),
                    ..Default::default()
                },
            )
            .unwrap_err();
            assert_eq!(err.kind, ErrorKind::InvalidArgument);
        }
    }

    #[test]
    fn test_fetch_remote_keeps_supplied_values() {
        let envelope = CallEnvelope::fetch_remote(
            identity(),
            "https://example.com/repo.git",
            FetchRemoteOptions {
                auth: FetchAuth::SshKey("key material".to_string()),
                forced: true,
                no_tags: true,
                timeout_secs: Some(120),
            },
        )
        .unwrap();
        match envelope {
            CallEnvelope::FetchRemote {
                auth,
                forced,
                no_tags,
                timeout,
                ..
            } => {
                assert_eq!(auth, FetchAuth::SshKey("key material".to_string()));
                assert!(forced);
                assert!(no_tags);
                assert_eq!(timeout, Duration::from_secs(120));
            }
            other => panic!("unexpected envelope {:?}", other),
        }
    }

    #[test]
    fn test_fetch_remote_rejects_empty_url() {
        let err = CallEnvelope::fetch_remote(identity(), "", FetchRemoteOptions::default())
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_raw_changes_requires_both_revisions() {
        assert!(CallEnvelope::raw_changes(identity(), "deadbeef", "deadpork").is_ok());
        assert!(CallEnvelope::raw_changes(identity(), "", "deadpork").is_err());
        assert!(CallEnvelope::raw_changes(identity(), "deadbeef", "").is_err());
    }

    #[test]
    fn test_progress_checks_require_an_id() {
        assert!(CallEnvelope::rebase_in_progress(identity(), "rebase-1").is_ok());
        assert!(CallEnvelope::rebase_in_progress(identity(), "").is_err());
        assert!(CallEnvelope::squash_in_progress(identity(), "").is_err());
    }

    #[test]
    fn test_round_trip_is_lossless() {
        let envelope = CallEnvelope::garbage_collect(identity(), true);
        assert_eq!(envelope.operation(), "garbage_collect");
        assert_eq!(envelope.repository(), &identity());
        match envelope {
            CallEnvelope::GarbageCollect { create_bitmap, .. } => assert!(create_bitmap),
            other => panic!("unexpected envelope {:?}", other),
        }
    }

    #[test]
    fn test_streaming_classification() {
        assert!(CallEnvelope::info_attributes(identity()).is_streaming());
        assert!(
            CallEnvelope::raw_changes(identity(), "a", "b")
                .unwrap()
                .is_streaming()
        );
        assert!(!CallEnvelope::exists(identity()).is_streaming());
        assert!(!CallEnvelope::checksum(identity()).is_streaming());
    }
}

use std::sync::Arc;

use crate::aggregate::{self, RawChangeStream};
use crate::envelope::{CallEnvelope, FetchRemoteOptions};
use crate::error::ClientError;
use crate::identity::RepositoryIdentity;
use crate::transport::{Transport, UnaryReply};

/// Typed façade over the repository service, bound to one repository.
///
/// Every method builds a validated envelope, dispatches it through the
/// shared transport, and normalizes the reply. The client performs no
/// caching and no retries; errors come back exactly as the transport
/// classified them, tagged with the failing operation.
#[derive(Clone)]
pub struct RepositoryClient {
    transport: Arc<Transport>,
    repository: RepositoryIdentity,
}

impl RepositoryClient {
    pub fn new(transport: Arc<Transport>, repository: RepositoryIdentity) -> Self {
        RepositoryClient {
            transport,
            repository,
        }
    }

    pub fn repository(&self) -> &RepositoryIdentity {
        &self.repository
    }

    fn unexpected(&self, operation: &'static str, reply: UnaryReply) -> ClientError {
        ClientError::internal(
            operation,
            format!("service returned a mismatched response: {:?}", reply),
        )
        .with_repository(&self.repository)
    }

    /// Whether the repository exists on its shard. Answers, never errors
    /// with `NotFound`: a missing repository is `Ok(false)`.
    pub async fn exists(&self) -> Result<bool, ClientError> {
        let envelope = CallEnvelope::exists(self.repository.clone());
        match self.transport.unary(&envelope).await? {
            UnaryReply::Exists(value) => Ok(value),
            reply => Err(self.unexpected("repository_exists", reply)),
        }
    }

    pub async fn cleanup(&self) -> Result<(), ClientError> {
        let envelope = CallEnvelope::cleanup(self.repository.clone());
        match self.transport.unary(&envelope).await? {
            UnaryReply::Done => Ok(()),
            reply => Err(self.unexpected("cleanup", reply)),
        }
    }

    pub async fn garbage_collect(&self, create_bitmap: bool) -> Result<(), ClientError> {
        let envelope = CallEnvelope::garbage_collect(self.repository.clone(), create_bitmap);
        match self.transport.unary(&envelope).await? {
            UnaryReply::Done => Ok(()),
            reply => Err(self.unexpected("garbage_collect", reply)),
        }
    }

    pub async fn repack_full(&self, create_bitmap: bool) -> Result<(), ClientError> {
        let envelope = CallEnvelope::repack_full(self.repository.clone(), create_bitmap);
        match self.transport.unary(&envelope).await? {
            UnaryReply::Done => Ok(()),
            reply => Err(self.unexpected("repack_full", reply)),
        }
    }

    pub async fn repack_incremental(&self) -> Result<(), ClientError> {
        let envelope = CallEnvelope::repack_incremental(self.repository.clone());
        match self.transport.unary(&envelope).await? {
            UnaryReply::Done => Ok(()),
            reply => Err(self.unexpected("repack_incremental", reply)),
        }
    }

    /// Repository size in the unit the service reports. Zero is a valid
    /// size, not an error.
    pub async fn repository_size(&self) -> Result<u64, ClientError> {
        let envelope = CallEnvelope::size(self.repository.clone());
        match self.transport.unary(&envelope).await? {
            UnaryReply::Size(size) => Ok(size),
            reply => Err(self.unexpected("repository_size", reply)),
        }
    }

    /// Regenerates the service-side attribute state from the given
    /// revision. An unresolvable revision surfaces as `NotFound`.
    pub async fn apply_gitattributes(&self, revision: &str) -> Result<(), ClientError> {
        let envelope = CallEnvelope::apply_attributes(self.repository.clone(), revision)?;
        match self.transport.unary(&envelope).await? {
            UnaryReply::Done => Ok(()),
            reply => Err(self.unexpected("apply_gitattributes", reply)),
        }
    }

    /// The repository's info attributes, one line per entry. An empty
    /// repository yields an empty list.
    pub async fn info_attributes(&self) -> Result<Vec<String>, ClientError> {
        let envelope = CallEnvelope::info_attributes(self.repository.clone());
        let chunks = self.transport.stream(&envelope).await?;
        let assembled = aggregate::concat_bytes(envelope.operation(), chunks).await?;
        Ok(attribute_lines(&assembled))
    }

    pub async fn has_local_branches(&self) -> Result<bool, ClientError> {
        let envelope = CallEnvelope::has_local_branches(self.repository.clone());
        match self.transport.unary(&envelope).await? {
            UnaryReply::Branches(value) => Ok(value),
            reply => Err(self.unexpected("has_local_branches", reply)),
        }
    }

    /// Fetches from a remote into this repository. The service performs
    /// the whole transfer inside the call, so the deadline is the
    /// caller-supplied timeout (default 60s), not the pool-wide one.
    pub async fn fetch_remote(
        &self,
        remote_url: &str,
        options: FetchRemoteOptions,
    ) -> Result<bool, ClientError> {
        let envelope = CallEnvelope::fetch_remote(self.repository.clone(), remote_url, options)?;
        match self.transport.unary(&envelope).await? {
            UnaryReply::Fetched(value) => Ok(value),
            reply => Err(self.unexpected("fetch_remote", reply)),
        }
    }

    pub async fn rebase_in_progress(&self, rebase_id: &str) -> Result<bool, ClientError> {
        let envelope = CallEnvelope::rebase_in_progress(self.repository.clone(), rebase_id)?;
        match self.transport.unary(&envelope).await? {
            UnaryReply::InProgress(value) => Ok(value),
            reply => Err(self.unexpected("is_rebase_in_progress", reply)),
        }
    }

    pub async fn squash_in_progress(&self, squash_id: &str) -> Result<bool, ClientError> {
        let envelope = CallEnvelope::squash_in_progress(self.repository.clone(), squash_id)?;
        match self.transport.unary(&envelope).await? {
            UnaryReply::InProgress(value) => Ok(value),
            reply => Err(self.unexpected("is_squash_in_progress", reply)),
        }
    }

    /// Opaque content checksum. An empty repository has a well-defined
    /// checksum on the service side and is not an error here.
    pub async fn calculate_checksum(&self) -> Result<String, ClientError> {
        let envelope = CallEnvelope::checksum(self.repository.clone());
        match self.transport.unary(&envelope).await? {
            UnaryReply::Checksum(value) => Ok(value),
            reply => Err(self.unexpected("calculate_checksum", reply)),
        }
    }

    /// Creates the repository from a snapshot the service pulls from
    /// `http_url` (with `http_auth` as its Authorization header, when
    /// non-empty). The payload transfer happens server-side; the control
    /// call itself stays unary.
    pub async fn create_from_snapshot(
        &self,
        http_url: &str,
        http_auth: &str,
    ) -> Result<(), ClientError> {
        let envelope =
            CallEnvelope::create_from_snapshot(self.repository.clone(), http_url, http_auth)?;
        match self.transport.unary(&envelope).await? {
            UnaryReply::Done => Ok(()),
            reply => Err(self.unexpected("create_repository_from_snapshot", reply)),
        }
    }

    /// Change records between two revisions as a lazy, finite sequence.
    /// Either revision may be symbolic; the service resolves names and an
    /// unresolvable one surfaces as `NotFound` on the first read. Records
    /// already read stay valid if a later read fails. Dropping the stream
    /// early releases the call.
    pub async fn raw_changes_between(
        &self,
        from_revision: &str,
        to_revision: &str,
    ) -> Result<RawChangeStream, ClientError> {
        let envelope =
            CallEnvelope::raw_changes(self.repository.clone(), from_revision, to_revision)?;
        let chunks = self.transport.stream(&envelope).await?;
        Ok(RawChangeStream::new(chunks))
    }
}

fn attribute_lines(assembled: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(assembled)
        .lines()
        .map(|line| line.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::error::ErrorKind;

    fn client() -> RepositoryClient {
        // no storages configured: any dispatch that reaches the transport
        // fails with "not configured", so tests below prove validation
        // happens before any network work
        let transport = Arc::new(Transport::new(ClientConfig::default()));
        let repository = RepositoryIdentity::new("default", "group/project.git").unwrap();
        RepositoryClient::new(transport, repository)
    }

    #[test]
    fn test_attribute_lines() {
        assert_eq!(
            attribute_lines(b"*.rb diff=ruby\n*.png -text\n"),
            vec!["*.rb diff=ruby".to_string(), "*.png -text".to_string()]
        );
        assert!(attribute_lines(b"").is_empty());
    }

    #[tokio::test]
    async fn test_fetch_remote_rejects_bad_timeout_before_dispatch() {
        let err = client()
            .fetch_remote(
                "ssh://example.com",
                FetchRemoteOptions {
                    timeout_secs: Some(0),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidArgument);
        assert!(err.detail.contains("timeout"));
    }

    #[tokio::test]
    async fn test_raw_changes_rejects_empty_revision_before_dispatch() {
        let err = client()
            .raw_changes_between("", "deadbeef")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidArgument);
        assert!(err.detail.contains("revision"));
    }

    #[tokio::test]
    async fn test_apply_gitattributes_rejects_empty_revision_before_dispatch() {
        let err = client().apply_gitattributes("").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidArgument);
    }

    #[tokio::test]
    async fn test_errors_carry_repository_context() {
        let err = client().exists().await.unwrap_err();
        assert_eq!(err.operation, "repository_exists");
        assert_eq!(
            err.repository,
            Some(RepositoryIdentity::new("default", "group/project.git").unwrap())
        );
    }
}

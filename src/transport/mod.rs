use std::pin::Pin;
use std::time::Duration;

use async_stream::stream;
use bytes::Bytes;
use dashmap::DashMap;
use tokio::time::Instant;
use tokio_stream::{Stream, StreamExt};
use tonic::transport::{Channel, Endpoint};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::envelope::{CallEnvelope, FetchAuth};
use crate::error::{ClientError, ErrorKind};
use crate::identity::RepositoryIdentity;
use crate::rpc::gitshard;
use crate::rpc::gitshard::repository_service_client::RepositoryServiceClient;

/// Result of a successful unary call, one variant per response shape.
#[derive(Debug, Clone, PartialEq)]
pub enum UnaryReply {
    Exists(bool),
    Done,
    Size(u64),
    Branches(bool),
    Fetched(bool),
    InProgress(bool),
    Checksum(String),
}

/// One fragment of a streamed response.
#[derive(Debug, Clone, PartialEq)]
pub enum Chunk {
    Attributes(Bytes),
    RawChanges(Vec<gitshard::RawChange>),
}

pub type ChunkStream = Pin<Box<dyn Stream<Item = Result<Chunk, ClientError>> + Send + 'static>>;

/// One pooled connection per storage shard, dialed on first use.
///
/// A `Channel` multiplexes concurrent calls over one HTTP/2 connection,
/// each call on its own stream, so handing out clones of the same channel
/// satisfies the per-call isolation contract. `close` drops every pooled
/// connection; the pool reconnects lazily if it is used again afterwards.
pub struct ConnectionPool {
    config: ClientConfig,
    channels: DashMap<String, Channel>,
}

impl ConnectionPool {
    pub fn new(config: ClientConfig) -> Self {
        ConnectionPool {
            config,
            channels: DashMap::new(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn channel(
        &self,
        operation: &'static str,
        storage: &str,
    ) -> Result<Channel, ClientError> {
        if let Some(channel) = self.channels.get(storage) {
            return Ok(channel.value().clone());
        }
        let storage_config = self.config.storage(storage).ok_or_else(|| {
            ClientError::invalid_argument(
                operation,
                format!("storage {:?} is not configured", storage),
            )
        })?;
        let endpoint = Endpoint::from_shared(storage_config.address.clone())
            .map_err(|e| {
                ClientError::invalid_argument(
                    operation,
                    format!("invalid address for storage {:?}: {}", storage, e),
                )
            })?
            .connect_timeout(self.config.connect_timeout());
        let channel = endpoint.connect().await.map_err(|e| {
            ClientError::unavailable(
                operation,
                format!("could not connect to storage {:?}: {}", storage, e),
            )
        })?;
        // two first calls may race to dial the same shard; the loser's
        // channel is simply dropped on insert
        self.channels.insert(storage.to_string(), channel.clone());
        Ok(channel)
    }

    pub fn close(&self) {
        self.channels.clear();
    }
}

/// Routes validated envelopes to the shard that owns their repository and
/// executes them with a bounded deadline. Holds no state besides the
/// connection pool and introduces no tasks of its own.
pub struct Transport {
    pool: ConnectionPool,
}

impl Transport {
    pub fn new(config: ClientConfig) -> Self {
        Transport {
            pool: ConnectionPool::new(config),
        }
    }

    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    /// Drops all pooled connections. Intended for process shutdown.
    pub fn close(&self) {
        self.pool.close();
    }

    fn call_timeout(&self, envelope: &CallEnvelope) -> Duration {
        match envelope {
            CallEnvelope::FetchRemote { timeout, .. } => *timeout,
            _ => self.pool.config().call_timeout(),
        }
    }

    /// Executes a unary envelope and returns its reply, or the first error
    /// mapped into the client taxonomy. The deadline covers connection
    /// acquisition noise as well as the call itself.
    pub async fn unary(&self, envelope: &CallEnvelope) -> Result<UnaryReply, ClientError> {
        let operation = envelope.operation();
        let repository = envelope.repository().clone();
        if envelope.is_streaming() {
            return Err(ClientError::internal(
                operation,
                "streaming operation dispatched as unary",
            )
            .with_repository(&repository));
        }
        let timeout = self.call_timeout(envelope);
        let channel = self
            .pool
            .channel(operation, repository.storage_name())
            .await
            .map_err(|e| {
                let err = e.with_repository(&repository);
                log_failure(&err);
                err
            })?;
        let mut client = RepositoryServiceClient::new(channel);
        debug!(operation, repository = %repository, "dispatching unary call");
        let call = async {
            match envelope {
                CallEnvelope::Exists { repository } => {
                    let response = client
                        .repository_exists(request(
                            gitshard::RepositoryExistsRequest {
                                repository: Some(repository.into()),
                            },
                            timeout,
                        ))
                        .await?;
                    Ok(UnaryReply::Exists(response.into_inner().exists))
                }
                CallEnvelope::Cleanup { repository } => {
                    client
                        .cleanup(request(
                            gitshard::CleanupRequest {
                                repository: Some(repository.into()),
                            },
                            timeout,
                        ))
                        .await?;
                    Ok(UnaryReply::Done)
                }
                CallEnvelope::GarbageCollect {
                    repository,
                    create_bitmap,
                } => {
                    client
                        .garbage_collect(request(
                            gitshard::GarbageCollectRequest {
                                repository: Some(repository.into()),
                                create_bitmap: *create_bitmap,
                            },
                            timeout,
                        ))
                        .await?;
                    Ok(UnaryReply::Done)
                }
                CallEnvelope::RepackFull {
                    repository,
                    create_bitmap,
                } => {
                    client
                        .repack_full(request(
                            gitshard::RepackFullRequest {
                                repository: Some(repository.into()),
                                create_bitmap: *create_bitmap,
                            },
                            timeout,
                        ))
                        .await?;
                    Ok(UnaryReply::Done)
                }
                CallEnvelope::RepackIncremental { repository } => {
                    client
                        .repack_incremental(request(
                            gitshard::RepackIncrementalRequest {
                                repository: Some(repository.into()),
                            },
                            timeout,
                        ))
                        .await?;
                    Ok(UnaryReply::Done)
                }
                CallEnvelope::Size { repository } => {
                    let response = client
                        .repository_size(request(
                            gitshard::RepositorySizeRequest {
                                repository: Some(repository.into()),
                            },
                            timeout,
                        ))
                        .await?;
                    // the service reports a signed count; zero is a valid
                    // size and negatives are clamped
                    Ok(UnaryReply::Size(response.into_inner().size.max(0) as u64))
                }
                CallEnvelope::ApplyAttributes {
                    repository,
                    revision,
                } => {
                    client
                        .apply_gitattributes(request(
                            gitshard::ApplyGitattributesRequest {
                                repository: Some(repository.into()),
                                revision: revision.clone().into_bytes(),
                            },
                            timeout,
                        ))
                        .await?;
                    Ok(UnaryReply::Done)
                }
                CallEnvelope::HasLocalBranches { repository } => {
                    let response = client
                        .has_local_branches(request(
                            gitshard::HasLocalBranchesRequest {
                                repository: Some(repository.into()),
                            },
                            timeout,
                        ))
                        .await?;
                    Ok(UnaryReply::Branches(response.into_inner().value))
                }
                CallEnvelope::FetchRemote {
                    repository,
                    remote_url,
                    auth,
                    forced,
                    no_tags,
                    timeout: _,
                } => {
                    let (ssh_key, known_hosts) = match auth {
                        FetchAuth::None => (String::new(), String::new()),
                        FetchAuth::SshKey(key) => (key.clone(), String::new()),
                        FetchAuth::SshKnownHosts(hosts) => (String::new(), hosts.clone()),
                    };
                    let response = client
                        .fetch_remote(request(
                            gitshard::FetchRemoteRequest {
                                repository: Some(repository.into()),
                                remote_url: remote_url.clone(),
                                force: *forced,
                                no_tags: *no_tags,
                                timeout: timeout.as_secs() as i32,
                                ssh_key,
                                known_hosts,
                                // stale remote refs are always pruned
                                no_prune: false,
                            },
                            timeout,
                        ))
                        .await?;
                    Ok(UnaryReply::Fetched(response.into_inner().result))
                }
                CallEnvelope::RebaseInProgress {
                    repository,
                    rebase_id,
                } => {
                    let response = client
                        .is_rebase_in_progress(request(
                            gitshard::IsRebaseInProgressRequest {
                                repository: Some(repository.into()),
                                rebase_id: rebase_id.clone(),
                            },
                            timeout,
                        ))
                        .await?;
                    Ok(UnaryReply::InProgress(response.into_inner().in_progress))
                }
                CallEnvelope::SquashInProgress {
                    repository,
                    squash_id,
                } => {
                    let response = client
                        .is_squash_in_progress(request(
                            gitshard::IsSquashInProgressRequest {
                                repository: Some(repository.into()),
                                squash_id: squash_id.clone(),
                            },
                            timeout,
                        ))
                        .await?;
                    Ok(UnaryReply::InProgress(response.into_inner().in_progress))
                }
                CallEnvelope::Checksum { repository } => {
                    let response = client
                        .calculate_checksum(request(
                            gitshard::CalculateChecksumRequest {
                                repository: Some(repository.into()),
                            },
                            timeout,
                        ))
                        .await?;
                    Ok(UnaryReply::Checksum(response.into_inner().checksum))
                }
                CallEnvelope::CreateFromSnapshot {
                    repository,
                    http_url,
                    http_auth,
                } => {
                    client
                        .create_repository_from_snapshot(request(
                            gitshard::CreateRepositoryFromSnapshotRequest {
                                repository: Some(repository.into()),
                                http_url: http_url.clone(),
                                http_auth: http_auth.clone(),
                            },
                            timeout,
                        ))
                        .await?;
                    Ok(UnaryReply::Done)
                }
                CallEnvelope::InfoAttributes { .. } | CallEnvelope::RawChanges { .. } => {
                    Err(tonic::Status::internal("not a unary operation"))
                }
            }
        };
        let result = with_deadline(operation, &repository, timeout, call).await;
        if let Err(err) = &result {
            log_failure(err);
        }
        result
    }

    /// Opens a streaming envelope and returns its chunk sequence. The
    /// deadline bounds the whole stream, from dispatch to last chunk;
    /// dropping the returned stream early releases the underlying call.
    pub async fn stream(&self, envelope: &CallEnvelope) -> Result<ChunkStream, ClientError> {
        let operation = envelope.operation();
        let repository = envelope.repository().clone();
        if !envelope.is_streaming() {
            return Err(ClientError::internal(
                operation,
                "unary operation dispatched as a stream",
            )
            .with_repository(&repository));
        }
        let timeout = self.call_timeout(envelope);
        let deadline = Instant::now() + timeout;
        let channel = self
            .pool
            .channel(operation, repository.storage_name())
            .await
            .map_err(|e| {
                let err = e.with_repository(&repository);
                log_failure(&err);
                err
            })?;
        let mut client = RepositoryServiceClient::new(channel);
        debug!(operation, repository = %repository, "dispatching streaming call");
        match envelope {
            CallEnvelope::InfoAttributes { repository: target } => {
                let response = tokio::time::timeout_at(
                    deadline,
                    client.get_info_attributes(request(
                        gitshard::GetInfoAttributesRequest {
                            repository: Some(target.into()),
                        },
                        timeout,
                    )),
                )
                .await
                .map_err(|_| {
                    let err =
                        ClientError::deadline_exceeded(operation).with_repository(&repository);
                    log_failure(&err);
                    err
                })?
                .map_err(|status| {
                    let err =
                        ClientError::from_status(operation, status).with_repository(&repository);
                    log_failure(&err);
                    err
                })?;
                Ok(chunk_stream(
                    operation,
                    repository,
                    deadline,
                    response.into_inner(),
                    |message: gitshard::GetInfoAttributesResponse| {
                        Chunk::Attributes(Bytes::from(message.attributes))
                    },
                ))
            }
            CallEnvelope::RawChanges {
                repository: target,
                from_revision,
                to_revision,
            } => {
                let response = tokio::time::timeout_at(
                    deadline,
                    client.get_raw_changes(request(
                        gitshard::GetRawChangesRequest {
                            repository: Some(target.into()),
                            from_revision: from_revision.clone(),
                            to_revision: to_revision.clone(),
                        },
                        timeout,
                    )),
                )
                .await
                .map_err(|_| {
                    let err =
                        ClientError::deadline_exceeded(operation).with_repository(&repository);
                    log_failure(&err);
                    err
                })?
                .map_err(|status| {
                    let err =
                        ClientError::from_status(operation, status).with_repository(&repository);
                    log_failure(&err);
                    err
                })?;
                Ok(chunk_stream(
                    operation,
                    repository,
                    deadline,
                    response.into_inner(),
                    |message: gitshard::GetRawChangesResponse| {
                        Chunk::RawChanges(message.raw_changes)
                    },
                ))
            }
            _ => Err(ClientError::internal(
                operation,
                "unary operation dispatched as a stream",
            )
            .with_repository(&repository)),
        }
    }
}

fn request<M>(message: M, timeout: Duration) -> tonic::Request<M> {
    let mut request = tonic::Request::new(message);
    // propagate the deadline so the service can abort server-side work too
    request.set_timeout(timeout);
    request
}

async fn with_deadline<F>(
    operation: &'static str,
    repository: &RepositoryIdentity,
    timeout: Duration,
    call: F,
) -> Result<UnaryReply, ClientError>
where
    F: Future<Output = Result<UnaryReply, tonic::Status>>,
{
    match tokio::time::timeout(timeout, call).await {
        Err(_) => Err(ClientError::deadline_exceeded(operation).with_repository(repository)),
        Ok(Err(status)) => {
            Err(ClientError::from_status(operation, status).with_repository(repository))
        }
        Ok(Ok(reply)) => Ok(reply),
    }
}

/// Adapts a raw message stream into the chunk sequence handed to the
/// aggregator. Every read is bounded by the call deadline; the first
/// error terminates the sequence, and chunks already yielded stand.
fn chunk_stream<M, S, F>(
    operation: &'static str,
    repository: RepositoryIdentity,
    deadline: Instant,
    mut messages: S,
    mut decode: F,
) -> ChunkStream
where
    M: Send + 'static,
    S: Stream<Item = Result<M, tonic::Status>> + Send + Unpin + 'static,
    F: FnMut(M) -> Chunk + Send + 'static,
{
    Box::pin(stream! {
        loop {
            match tokio::time::timeout_at(deadline, messages.next()).await {
                Err(_) => {
                    let err = ClientError::deadline_exceeded(operation)
                        .with_repository(&repository);
                    log_failure(&err);
                    yield Err(err);
                    break;
                }
                Ok(None) => break,
                Ok(Some(Ok(message))) => yield Ok(decode(message)),
                Ok(Some(Err(status))) => {
                    let err = ClientError::from_status(operation, status)
                        .with_repository(&repository);
                    log_failure(&err);
                    yield Err(err);
                    break;
                }
            }
        }
    })
}

fn log_failure(err: &ClientError) {
    // abandonment is a signal, not a fault
    match err.kind {
        ErrorKind::Canceled => debug!(operation = err.operation, error = %err, "call canceled"),
        _ => warn!(operation = err.operation, error = %err, "call failed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn identity() -> RepositoryIdentity {
        RepositoryIdentity::new("default", "group/project.git").unwrap()
    }

    fn unreachable_config() -> ClientConfig {
        // port 1 refuses immediately on loopback
        ClientConfig::default().with_storage("default", "http://127.0.0.1:1")
    }

    #[tokio::test]
    async fn test_unconfigured_storage_is_invalid_argument() {
        let transport = Transport::new(ClientConfig::default());
        let err = transport
            .unary(&CallEnvelope::exists(identity()))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidArgument);
        assert_eq!(err.operation, "repository_exists");
        assert_eq!(err.repository, Some(identity()));
    }

    #[tokio::test]
    async fn test_unreachable_storage_is_unavailable() {
        init_tracing();
        let transport = Transport::new(unreachable_config());
        let err = transport
            .unary(&CallEnvelope::exists(identity()))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unavailable);
    }

    #[tokio::test]
    async fn test_streaming_dispatch_to_unreachable_storage_is_unavailable() {
        let transport = Transport::new(unreachable_config());
        let err = match transport
            .stream(&CallEnvelope::info_attributes(identity()))
            .await
        {
            Ok(_) => panic!("expected error"),
            Err(err) => err,
        };
        assert_eq!(err.kind, ErrorKind::Unavailable);
    }

    #[tokio::test]
    async fn test_calls_to_distinct_shards_do_not_block_each_other() {
        let config = ClientConfig::default()
            .with_storage("shard-a", "http://127.0.0.1:1")
            .with_storage("shard-b", "http://127.0.0.1:1");
        let transport = Transport::new(config);
        let left = RepositoryIdentity::new("shard-a", "a/a.git").unwrap();
        let right = RepositoryIdentity::new("shard-b", "b/b.git").unwrap();
        let left_call = CallEnvelope::garbage_collect(left, false);
        let right_call = CallEnvelope::garbage_collect(right, false);
        let (left_result, right_result) = tokio::join!(
            transport.unary(&left_call),
            transport.unary(&right_call),
        );
        assert_eq!(left_result.unwrap_err().kind, ErrorKind::Unavailable);
        assert_eq!(right_result.unwrap_err().kind, ErrorKind::Unavailable);
    }

    #[tokio::test]
    async fn test_mismatched_dispatch_is_internal() {
        let transport = Transport::new(ClientConfig::default());
        let err = transport
            .unary(&CallEnvelope::info_attributes(identity()))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Internal);
        let err = match transport.stream(&CallEnvelope::exists(identity())).await {
            Ok(_) => panic!("expected error"),
            Err(err) => err,
        };
        assert_eq!(err.kind, ErrorKind::Internal);
    }

    #[tokio::test(start_paused = true)]
    async fn test_with_deadline_times_out() {
        let err = with_deadline(
            "cleanup",
            &identity(),
            Duration::from_millis(50),
            std::future::pending(),
        )
        .await
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::DeadlineExceeded);
        assert_eq!(err.operation, "cleanup");
    }

    #[tokio::test]
    async fn test_with_deadline_maps_status() {
        let err = with_deadline(
            "apply_gitattributes",
            &identity(),
            Duration::from_secs(1),
            std::future::ready(Err(tonic::Status::not_found("revision not found"))),
        )
        .await
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(err.detail, "revision not found");
    }

    #[tokio::test]
    async fn test_with_deadline_passes_reply_through() {
        let reply = with_deadline(
            "repository_exists",
            &identity(),
            Duration::from_secs(1),
            std::future::ready(Ok(UnaryReply::Exists(true))),
        )
        .await
        .unwrap();
        assert_eq!(reply, UnaryReply::Exists(true));
    }

    #[tokio::test]
    async fn test_chunk_stream_yields_chunks_then_error() {
        let messages = tokio_stream::iter(vec![
            Ok(gitshard::GetInfoAttributesResponse {
                attributes: b"*.rb diff".to_vec(),
            }),
            Ok(gitshard::GetInfoAttributesResponse {
                attributes: b"merge".to_vec(),
            }),
            Err(tonic::Status::internal("stream broke")),
        ]);
        let mut chunks = chunk_stream(
            "get_info_attributes",
            identity(),
            Instant::now() + Duration::from_secs(5),
            messages,
            |message: gitshard::GetInfoAttributesResponse| {
                Chunk::Attributes(Bytes::from(message.attributes))
            },
        );
        assert_eq!(
            chunks.next().await.unwrap().unwrap(),
            Chunk::Attributes(Bytes::from_static(b"*.rb diff"))
        );
        assert_eq!(
            chunks.next().await.unwrap().unwrap(),
            Chunk::Attributes(Bytes::from_static(b"merge"))
        );
        let err = chunks.next().await.unwrap().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Internal);
        assert!(chunks.next().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_chunk_stream_enforces_deadline() {
        let messages = tokio_stream::pending::<
            Result<gitshard::GetInfoAttributesResponse, tonic::Status>,
        >();
        let mut chunks = chunk_stream(
            "get_info_attributes",
            identity(),
            Instant::now() + Duration::from_millis(50),
            messages,
            |message: gitshard::GetInfoAttributesResponse| {
                Chunk::Attributes(Bytes::from(message.attributes))
            },
        );
        let err = chunks.next().await.unwrap().unwrap_err();
        assert_eq!(err.kind, ErrorKind::DeadlineExceeded);
        assert!(chunks.next().await.is_none());
    }
}

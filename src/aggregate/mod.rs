use std::collections::VecDeque;
use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::{Bytes, BytesMut};
use tokio_stream::{Stream, StreamExt};

use crate::error::ClientError;
use crate::model::RawChange;
use crate::transport::{Chunk, ChunkStream};

/// Eager aggregation: reads the chunk sequence to completion and returns
/// the fragments glued together in arrival order. If the stream
/// terminates with an error, everything read so far is discarded and only
/// the error is returned.
pub async fn concat_bytes(
    operation: &'static str,
    mut chunks: ChunkStream,
) -> Result<Bytes, ClientError> {
    let mut assembled = BytesMut::new();
    while let Some(chunk) = chunks.next().await {
        match chunk? {
            Chunk::Attributes(fragment) => assembled.extend_from_slice(&fragment),
            Chunk::RawChanges(_) => {
                return Err(ClientError::internal(
                    operation,
                    "unexpected change records in a byte stream",
                ));
            }
        }
    }
    Ok(assembled.freeze())
}

/// Lazy aggregation for `get_raw_changes`: decodes records as their
/// chunks arrive, without buffering the sequence. Records already yielded
/// stay valid when a later read fails; the failing read returns the
/// error and the sequence then ends.
pub struct RawChangeStream {
    chunks: ChunkStream,
    pending: VecDeque<RawChange>,
    done: bool,
}

impl std::fmt::Debug for RawChangeStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawChangeStream")
            .field("pending", &self.pending.len())
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

impl RawChangeStream {
    pub(crate) fn new(chunks: ChunkStream) -> Self {
        RawChangeStream {
            chunks,
            pending: VecDeque::new(),
            done: false,
        }
    }
}

impl Stream for RawChangeStream {
    type Item = Result<RawChange, ClientError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        loop {
            if let Some(change) = this.pending.pop_front() {
                return Poll::Ready(Some(Ok(change)));
            }
            if this.done {
                return Poll::Ready(None);
            }
            match Pin::new(&mut this.chunks).poll_next(cx) {
                Poll::Pending => return Poll::Pending,
                Poll::Ready(None) => {
                    this.done = true;
                    return Poll::Ready(None);
                }
                Poll::Ready(Some(Err(err))) => {
                    this.done = true;
                    return Poll::Ready(Some(Err(err)));
                }
                Poll::Ready(Some(Ok(Chunk::RawChanges(records)))) => {
                    this.pending
                        .extend(records.into_iter().map(RawChange::from_wire));
                }
                Poll::Ready(Some(Ok(Chunk::Attributes(_)))) => {
                    this.done = true;
                    return Poll::Ready(Some(Err(ClientError::internal(
                        "get_raw_changes",
                        "unexpected byte fragment in a change record stream",
                    ))));
                }
            }
        }
    }
}

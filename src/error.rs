use tonic_types::StatusExt;

use crate::identity::RepositoryIdentity;

/// Stable error classes a caller can act on. Transport and service failures
/// are always folded into one of these; the client never invents new ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    DeadlineExceeded,
    Unavailable,
    Internal,
    Canceled,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::NotFound => "not found",
            ErrorKind::DeadlineExceeded => "deadline exceeded",
            ErrorKind::Unavailable => "unavailable",
            ErrorKind::Internal => "internal",
            ErrorKind::Canceled => "canceled",
        }
    }
}

/// Error returned by every client operation. Carries the wire-level
/// operation name and, when the call targeted a repository, its identity.
#[derive(Debug, Clone)]
pub struct ClientError {
    pub kind: ErrorKind,
    pub operation: &'static str,
    pub repository: Option<RepositoryIdentity>,
    pub detail: String,
}

impl ClientError {
    pub fn new(kind: ErrorKind, operation: &'static str, detail: impl Into<String>) -> Self {
        ClientError {
            kind,
            operation,
            repository: None,
            detail: detail.into(),
        }
    }

    pub fn invalid_argument(operation: &'static str, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, operation, detail)
    }

    pub fn internal(operation: &'static str, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, operation, detail)
    }

    pub fn unavailable(operation: &'static str, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unavailable, operation, detail)
    }

    pub fn deadline_exceeded(operation: &'static str) -> Self {
        Self::new(ErrorKind::DeadlineExceeded, operation, "call deadline elapsed")
    }

    pub fn with_repository(mut self, repository: &RepositoryIdentity) -> Self {
        self.repository = Some(repository.clone());
        self
    }

    /// Folds a gRPC status into the client taxonomy. The five codes with a
    /// direct counterpart map one to one; anything else the service signals
    /// is a service-side fault and becomes `Internal`, keeping whatever
    /// detail the service attached.
    pub fn from_status(operation: &'static str, status: tonic::Status) -> Self {
        let kind = match status.code() {
            tonic::Code::NotFound => ErrorKind::NotFound,
            tonic::Code::InvalidArgument => ErrorKind::InvalidArgument,
            tonic::Code::DeadlineExceeded => ErrorKind::DeadlineExceeded,
            tonic::Code::Unavailable => ErrorKind::Unavailable,
            tonic::Code::Cancelled => ErrorKind::Canceled,
            _ => ErrorKind::Internal,
        };
        let mut detail = status.message().to_string();
        if let Some(debug) = status.get_error_details().debug_info() {
            if !debug.detail.is_empty() {
                if !detail.is_empty() {
                    detail.push_str("; ");
                }
                detail.push_str(&debug.detail);
            }
        }
        if detail.is_empty() {
            detail = status.code().description().to_string();
        }
        Self::new(kind, operation, detail)
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}: {}", self.operation, self.kind.as_str(), self.detail)?;
        if let Some(repository) = &self.repository {
            write!(f, " (repository {})", repository)?;
        }
        Ok(())
    }
}

impl std::error::Error for ClientError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> RepositoryIdentity {
        RepositoryIdentity::new("default", "group/project.git").unwrap()
    }

    #[test]
    fn test_status_codes_map_one_to_one() {
        let cases = [
            (tonic::Code::NotFound, ErrorKind::NotFound),
            (tonic::Code::InvalidArgument, ErrorKind::InvalidArgument),
            (tonic::Code::DeadlineExceeded, ErrorKind::DeadlineExceeded),
            (tonic::Code::Unavailable, ErrorKind::Unavailable),
            (tonic::Code::Cancelled, ErrorKind::Canceled),
        ];
        for (code, kind) in cases {
            let status = tonic::Status::new(code, "boom");
            let err = ClientError::from_status("cleanup", status);
            assert_eq!(err.kind, kind);
            assert_eq!(err.operation, "cleanup");
            assert_eq!(err.detail, "boom");
        }
    }

    #[test]
    fn test_unclassified_codes_become_internal() {
        for code in [
            tonic::Code::Internal,
            tonic::Code::Unknown,
            tonic::Code::FailedPrecondition,
            tonic::Code::ResourceExhausted,
        ] {
            let err = ClientError::from_status("cleanup", tonic::Status::new(code, "x"));
            assert_eq!(err.kind, ErrorKind::Internal);
        }
    }

    #[test]
    fn test_empty_status_message_falls_back_to_code_description() {
        let err = ClientError::from_status("cleanup", tonic::Status::new(tonic::Code::NotFound, ""));
        assert!(!err.detail.is_empty());
    }

    #[test]
    fn test_display_includes_operation_and_repository() {
        let err = ClientError::invalid_argument("fetch_remote", "timeout must be positive")
            .with_repository(&identity());
        let rendered = err.to_string();
        assert!(rendered.contains("fetch_remote"));
        assert!(rendered.contains("invalid argument"));
        assert!(rendered.contains("default/group/project.git"));
    }
}

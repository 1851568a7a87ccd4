use crate::rpc::gitshard;

/// What happened to a path between two revisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeOperation {
    Unknown,
    Added,
    Copied,
    Deleted,
    Modified,
    Renamed,
    TypeChanged,
}

impl ChangeOperation {
    pub(crate) fn from_wire(raw: i32) -> Self {
        match gitshard::raw_change::Operation::try_from(raw) {
            Ok(gitshard::raw_change::Operation::Added) => ChangeOperation::Added,
            Ok(gitshard::raw_change::Operation::Copied) => ChangeOperation::Copied,
            Ok(gitshard::raw_change::Operation::Deleted) => ChangeOperation::Deleted,
            Ok(gitshard::raw_change::Operation::Modified) => ChangeOperation::Modified,
            Ok(gitshard::raw_change::Operation::Renamed) => ChangeOperation::Renamed,
            Ok(gitshard::raw_change::Operation::TypeChanged) => ChangeOperation::TypeChanged,
            Ok(gitshard::raw_change::Operation::Unknown) | Err(_) => ChangeOperation::Unknown,
        }
    }
}

/// One decoded change record from `get_raw_changes`. Paths are optional
/// because additions have no old path and deletions no new one; the wire
/// format carries those as empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawChange {
    pub blob_id: String,
    pub size: i64,
    pub old_path: Option<String>,
    pub new_path: Option<String>,
    pub operation: ChangeOperation,
    pub old_mode: i32,
    pub new_mode: i32,
}

impl RawChange {
    pub(crate) fn from_wire(raw: gitshard::RawChange) -> Self {
        let none_if_empty = |path: String| if path.is_empty() { None } else { Some(path) };
        RawChange {
            blob_id: raw.blob_id,
            size: raw.size,
            old_path: none_if_empty(raw.old_path),
            new_path: none_if_empty(raw.new_path),
            operation: ChangeOperation::from_wire(raw.operation),
            old_mode: raw.old_mode,
            new_mode: raw.new_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_addition() {
        let change = RawChange::from_wire(gitshard::RawChange {
            blob_id: "b83d6e391c22777fca1ed3012fce84f633d7fed0".to_string(),
            size: 100,
            new_path: "README.md".to_string(),
            old_path: String::new(),
            operation: gitshard::raw_change::Operation::Added as i32,
            old_mode: 0,
            new_mode: 0o100644,
        });
        assert_eq!(change.operation, ChangeOperation::Added);
        assert_eq!(change.new_path.as_deref(), Some("README.md"));
        assert_eq!(change.old_path, None);
        assert_eq!(change.size, 100);
    }

    #[test]
    fn test_unrecognized_operation_decodes_as_unknown() {
        let change = RawChange::from_wire(gitshard::RawChange {
            blob_id: "b83d6e391c22777fca1ed3012fce84f633d7fed0".to_string(),
            size: 0,
            new_path: "a".to_string(),
            old_path: "a".to_string(),
            operation: 42,
            old_mode: 0o100644,
            new_mode: 0o100644,
        });
        assert_eq!(change.operation, ChangeOperation::Unknown);
    }
}

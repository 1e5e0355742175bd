use std::path::PathBuf;

use crate::format::TraceFormat;
use crate::record::RecordKind;

#[derive(Debug)]
pub enum TraceError {
    UnsupportedFormat(String),
    UnsupportedRecordKind(String),
    Open {
        path: PathBuf,
        reason: String,
    },
    MalformedRecord {
        kind: RecordKind,
        reason: String,
    },
    BackendWrite {
        format: TraceFormat,
        reason: String,
    },
    Finalization {
        path: PathBuf,
        reason: String,
    },
}

impl TraceError {
    /// True for errors that only affect the current step; the run may go on.
    pub fn is_step_local(&self) -> bool {
        matches!(
            self,
            TraceError::MalformedRecord { .. } | TraceError::BackendWrite { .. }
        )
    }
}

impl std::fmt::Display for TraceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TraceError::UnsupportedFormat(tag) => {
                write!(f, "unsupported trace file format {tag:?} (expected osi, mcap or txth)")
            }
            TraceError::UnsupportedRecordKind(tag) => {
                write!(f, "unsupported message type {tag:?} (expected sv, sd or gt)")
            }
            TraceError::Open { path, reason } => {
                write!(f, "cannot open trace file {}: {reason}", path.display())
            }
            TraceError::MalformedRecord { kind, reason } => {
                write!(f, "buffer is not a valid {}: {reason}", kind.message_name())
            }
            TraceError::BackendWrite { format, reason } => {
                write!(f, "{} backend write failed: {reason}", format.as_str())
            }
            TraceError::Finalization { path, reason } => {
                write!(f, "cannot finalize trace file {}: {reason}", path.display())
            }
        }
    }
}

impl std::error::Error for TraceError {}

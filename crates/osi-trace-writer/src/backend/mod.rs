//! On-disk encoders behind one write contract.

mod binary;
mod container;
mod text;

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::TraceError;
use crate::format::TraceFormat;
use crate::record::{InterfaceVersion, Record, RecordKind};

use binary::BinaryBackend;
use container::ContainerBackend;
use text::TextBackend;

pub(crate) type BackendFailure = Box<dyn std::error::Error + Send + Sync>;

/// What the writer knows about the run once the last record is in.
pub(crate) struct Provenance<'a> {
    pub observed: Option<&'a InterfaceVersion>,
    pub protobuf_version: &'a str,
}

pub(crate) enum Backend {
    Binary(BinaryBackend<BufWriter<File>>),
    Container(ContainerBackend),
    Text(TextBackend),
}

impl Backend {
    pub(crate) fn open(format: TraceFormat, path: &Path, kind: RecordKind) -> Result<Self, TraceError> {
        let open_err = |reason: String| TraceError::Open {
            path: path.to_path_buf(),
            reason,
        };
        let file = File::create(path).map_err(|e| open_err(e.to_string()))?;
        let backend = match format {
            TraceFormat::Binary => Backend::Binary(BinaryBackend::new(BufWriter::new(file))),
            TraceFormat::Container => Backend::Container(
                ContainerBackend::new(file, kind).map_err(|e| open_err(e.to_string()))?,
            ),
            TraceFormat::Text => Backend::Text(TextBackend::new(file)),
        };
        Ok(backend)
    }

    pub(crate) fn format(&self) -> TraceFormat {
        match self {
            Backend::Binary(_) => TraceFormat::Binary,
            Backend::Container(_) => TraceFormat::Container,
            Backend::Text(_) => TraceFormat::Text,
        }
    }

    /// Declares the record channel. A no-op for single-stream formats.
    pub(crate) fn declare_channel(&mut self, version: &InterfaceVersion) -> Result<(), TraceError> {
        let format = self.format();
        let res = match self {
            Backend::Container(c) => c.declare_channel(version),
            Backend::Binary(_) | Backend::Text(_) => Ok(()),
        };
        res.map_err(|e| write_err(format, e))
    }

    pub(crate) fn write_message(&mut self, record: &Record<'_>, sequence: u64) -> Result<(), TraceError> {
        let format = self.format();
        let res = match self {
            Backend::Binary(b) => b.write_message(record.bytes),
            Backend::Container(c) => c.write_message(record, sequence),
            Backend::Text(t) => t.write_message(record),
        };
        res.map_err(|e| write_err(format, e))
    }

    pub(crate) fn close(self, provenance: &Provenance<'_>) -> Result<(), BackendFailure> {
        match self {
            Backend::Binary(b) => b.close(),
            Backend::Container(c) => c.close(provenance),
            Backend::Text(t) => t.close(),
        }
    }
}

fn write_err(format: TraceFormat, e: BackendFailure) -> TraceError {
    TraceError::BackendWrite {
        format,
        reason: e.to_string(),
    }
}

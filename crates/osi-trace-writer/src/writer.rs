use std::path::{Path, PathBuf};

use crate::backend::{Backend, Provenance};
use crate::error::TraceError;
use crate::format::TraceFormat;
use crate::naming::{self, final_file_name, working_file_name};
use crate::record::{InterfaceVersion, Record, RecordKind};

/// Everything needed to open a trace file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceWriterConfig {
    pub output_dir: PathBuf,
    /// Declared, not detected: it ends up verbatim in the file name.
    pub protobuf_version: String,
    pub custom_name: String,
    pub record_kind: RecordKind,
    pub format: TraceFormat,
    pub omit_timestamp: bool,
}

impl TraceWriterConfig {
    /// Validates the textual record kind and format tags. Nothing is touched
    /// on disk.
    pub fn from_tags(
        output_dir: impl Into<PathBuf>,
        protobuf_version: &str,
        custom_name: &str,
        record_kind: &str,
        format: &str,
        omit_timestamp: bool,
    ) -> Result<Self, TraceError> {
        Ok(TraceWriterConfig {
            output_dir: output_dir.into(),
            protobuf_version: protobuf_version.to_string(),
            custom_name: custom_name.to_string(),
            record_kind: record_kind.parse()?,
            format: format.parse()?,
            omit_timestamp,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WritePhase {
    /// Nothing written yet; the OSI version and channel are still unknown.
    AwaitingFirstRecord,
    Streaming,
}

/// An open trace file.
///
/// Records are appended with [`TraceWriter::step`]. [`TraceWriter::finish`]
/// consumes the writer, closes the backend and renames the file to its
/// final name.
pub struct TraceWriter {
    config: TraceWriterConfig,
    start_time: String,
    working_path: PathBuf,
    backend: Backend,
    phase: WritePhase,
    observed_version: Option<InterfaceVersion>,
    frames: u64,
}

impl TraceWriter {
    pub fn open(config: TraceWriterConfig) -> Result<Self, TraceError> {
        let start_time = naming::start_time(config.omit_timestamp);
        let working_path = config
            .output_dir
            .join(working_file_name(&config, &start_time));
        let backend = Backend::open(config.format, &working_path, config.record_kind)?;
        tracing::debug!(
            path = %working_path.display(),
            format = config.format.as_str(),
            kind = config.record_kind.as_str(),
            "opened trace file"
        );
        Ok(TraceWriter {
            config,
            start_time,
            working_path,
            backend,
            phase: WritePhase::AwaitingFirstRecord,
            observed_version: None,
            frames: 0,
        })
    }

    /// Appends one serialized record.
    ///
    /// The record is decoded as the configured OSI message first. One that
    /// fails to decode leaves the writer untouched, so the next step may
    /// still be the first record of the file.
    pub fn step(&mut self, bytes: &[u8]) -> Result<(), TraceError> {
        let record = self.config.record_kind.decode(bytes)?;
        match self.phase {
            WritePhase::AwaitingFirstRecord => {
                let version = record.header.interface_version();
                self.backend.declare_channel(&version)?;
                self.append(&record)?;
                tracing::debug!(
                    osi_version = %version.dotted(),
                    channels = self.config.format.supports_channels(),
                    "first record written"
                );
                self.observed_version = Some(version);
                self.phase = WritePhase::Streaming;
            }
            WritePhase::Streaming => self.append(&record)?,
        }
        Ok(())
    }

    fn append(&mut self, record: &Record<'_>) -> Result<(), TraceError> {
        self.backend.write_message(record, self.frames + 1)?;
        self.frames += 1;
        Ok(())
    }

    pub fn finish(self) -> Result<PathBuf, TraceError> {
        let TraceWriter {
            config,
            start_time,
            working_path,
            backend,
            observed_version,
            frames,
            ..
        } = self;
        let provenance = Provenance {
            observed: observed_version.as_ref(),
            protobuf_version: &config.protobuf_version,
        };
        backend
            .close(&provenance)
            .map_err(|e| TraceError::Finalization {
                path: working_path.clone(),
                reason: e.to_string(),
            })?;

        let final_path = config.output_dir.join(final_file_name(
            &config,
            &start_time,
            observed_version.as_ref(),
            frames,
        ));
        std::fs::rename(&working_path, &final_path).map_err(|e| TraceError::Finalization {
            path: working_path.clone(),
            reason: format!("rename to {}: {e}", final_path.display()),
        })?;
        tracing::info!(path = %final_path.display(), frames, "trace file finalized");
        Ok(final_path)
    }

    pub fn phase(&self) -> WritePhase {
        self.phase
    }

    /// Records written so far. Rejected records do not count.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn observed_version(&self) -> Option<&InterfaceVersion> {
        self.observed_version.as_ref()
    }

    pub fn working_path(&self) -> &Path {
        &self.working_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{RecordHeader, Timestamp};
    use prost::Message as _;

    fn record(major: u32, minor: u32, patch: u32, seconds: i64) -> Vec<u8> {
        RecordHeader {
            version: Some(InterfaceVersion::new(major, minor, patch)),
            timestamp: Some(Timestamp {
                seconds: Some(seconds),
                nanos: Some(0),
            }),
        }
        .encode_to_vec()
    }

    fn config(dir: &Path, format: TraceFormat) -> TraceWriterConfig {
        TraceWriterConfig {
            output_dir: dir.to_path_buf(),
            protobuf_version: "3.5.0".to_string(),
            custom_name: String::new(),
            record_kind: RecordKind::SensorView,
            format,
            omit_timestamp: true,
        }
    }

    #[test]
    fn from_tags_rejects_unknown_tags() {
        let err = TraceWriterConfig::from_tags(".", "3.5.0", "", "xx", "osi", false).unwrap_err();
        assert!(matches!(err, TraceError::UnsupportedRecordKind(_)));
        let err = TraceWriterConfig::from_tags(".", "3.5.0", "", "sv", "json", false).unwrap_err();
        assert!(matches!(err, TraceError::UnsupportedFormat(_)));
        let c = TraceWriterConfig::from_tags(".", "3.5.0", "", "gt", ".MCAP", false).unwrap();
        assert_eq!(c.record_kind, RecordKind::GroundTruth);
        assert_eq!(c.format, TraceFormat::Container);
    }

    #[test]
    fn open_creates_working_file() {
        let dir = tempfile::tempdir().unwrap();
        let w = TraceWriter::open(config(dir.path(), TraceFormat::Binary)).unwrap();
        assert!(w.working_path().exists());
        assert_eq!(
            w.working_path().file_name().unwrap(),
            "00000000T000000Z_sv.osi"
        );
        assert_eq!(w.phase(), WritePhase::AwaitingFirstRecord);
        assert_eq!(w.frames(), 0);
    }

    #[test]
    fn open_fails_for_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = TraceWriter::open(config(&missing, TraceFormat::Binary))
            .err()
            .unwrap();
        assert!(matches!(err, TraceError::Open { .. }));
    }

    #[test]
    fn first_record_fixes_version() {
        let dir = tempfile::tempdir().unwrap();
        let mut w = TraceWriter::open(config(dir.path(), TraceFormat::Container)).unwrap();
        w.step(&record(3, 7, 0, 1)).unwrap();
        w.step(&record(3, 6, 0, 2)).unwrap();
        assert_eq!(w.phase(), WritePhase::Streaming);
        assert_eq!(w.observed_version(), Some(&InterfaceVersion::new(3, 7, 0)));
        assert_eq!(w.frames(), 2);
    }

    #[test]
    fn malformed_record_is_not_counted() {
        let dir = tempfile::tempdir().unwrap();
        let mut w = TraceWriter::open(config(dir.path(), TraceFormat::Binary)).unwrap();
        let err = w.step(&[0xff, 0xff, 0xff]).unwrap_err();
        assert!(err.is_step_local());
        assert_eq!(w.phase(), WritePhase::AwaitingFirstRecord);
        assert_eq!(w.frames(), 0);

        w.step(&record(3, 7, 0, 0)).unwrap();
        assert_eq!(w.frames(), 1);
    }

    #[test]
    fn corrupt_nested_field_is_rejected_in_every_format() {
        for format in [TraceFormat::Binary, TraceFormat::Container, TraceFormat::Text] {
            let dir = tempfile::tempdir().unwrap();
            let mut w = TraceWriter::open(config(dir.path(), format)).unwrap();
            let mut bytes = record(3, 7, 0, 0);
            // sensor_id { value: <truncated varint> }
            bytes.extend_from_slice(&[0x1a, 0x01, 0x08]);

            let err = w.step(&bytes).unwrap_err();
            assert!(
                matches!(err, TraceError::MalformedRecord { kind: RecordKind::SensorView, .. }),
                "{format:?}: {err}"
            );
            assert_eq!(w.frames(), 0);
            assert_eq!(w.phase(), WritePhase::AwaitingFirstRecord);
        }
    }

    #[test]
    fn group_fields_are_accepted_the_same_in_every_format() {
        // field 950 as a group holding { 1: 3 }
        let group = [0xb3, 0x3b, 0x08, 0x03, 0xb4, 0x3b];
        for format in [TraceFormat::Binary, TraceFormat::Container, TraceFormat::Text] {
            let dir = tempfile::tempdir().unwrap();
            let mut w = TraceWriter::open(config(dir.path(), format)).unwrap();
            let mut bytes = record(3, 7, 0, 0);
            bytes.extend_from_slice(&group);
            w.step(&bytes).unwrap();
            assert_eq!(w.frames(), 1, "{format:?}");

            let unterminated = [record(3, 7, 0, 1), group[..4].to_vec()].concat();
            let err = w.step(&unterminated).unwrap_err();
            assert!(matches!(err, TraceError::MalformedRecord { .. }), "{format:?}: {err}");
            assert_eq!(w.frames(), 1);
            w.finish().unwrap();
        }
    }

    #[test]
    fn finish_renames_to_final_name() {
        let dir = tempfile::tempdir().unwrap();
        let mut w = TraceWriter::open(config(dir.path(), TraceFormat::Text)).unwrap();
        let working = w.working_path().to_path_buf();
        w.step(&record(3, 7, 0, 0)).unwrap();
        let path = w.finish().unwrap();
        assert!(!working.exists());
        assert!(path.exists());
        assert_eq!(
            path.file_name().unwrap(),
            "00000000T000000Z_sv_370_3.5.0_1.txth"
        );
    }

    #[test]
    fn finish_without_records() {
        let dir = tempfile::tempdir().unwrap();
        let w = TraceWriter::open(config(dir.path(), TraceFormat::Container)).unwrap();
        let path = w.finish().unwrap();
        assert_eq!(
            path.file_name().unwrap(),
            "00000000T000000Z_sv__3.5.0_0.mcap"
        );
    }
}

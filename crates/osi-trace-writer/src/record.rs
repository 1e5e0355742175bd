use std::str::FromStr;

use crate::dynamic::{DynamicMessage, Value};
use crate::error::TraceError;
use crate::schema::schema_for;

/// The OSI top-level message types a trace can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordKind {
    SensorView,
    SensorData,
    GroundTruth,
}

impl RecordKind {
    pub const ALL: [RecordKind; 3] = [
        RecordKind::SensorView,
        RecordKind::SensorData,
        RecordKind::GroundTruth,
    ];

    /// Short tag used in trace file names.
    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::SensorView => "sv",
            RecordKind::SensorData => "sd",
            RecordKind::GroundTruth => "gt",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "sv" => Some(RecordKind::SensorView),
            "sd" => Some(RecordKind::SensorData),
            "gt" => Some(RecordKind::GroundTruth),
            _ => None,
        }
    }

    pub fn message_name(self) -> &'static str {
        match self {
            RecordKind::SensorView => "osi3.SensorView",
            RecordKind::SensorData => "osi3.SensorData",
            RecordKind::GroundTruth => "osi3.GroundTruth",
        }
    }

    pub(crate) fn proto_file(self) -> &'static str {
        match self {
            RecordKind::SensorView => "osi_sensorview.proto",
            RecordKind::SensorData => "osi_sensordata.proto",
            RecordKind::GroundTruth => "osi_groundtruth.proto",
        }
    }

    /// Decodes a serialized record as this kind's OSI message.
    ///
    /// Every field the OSI schema declares, at any depth, must be
    /// well-formed; undeclared fields are carried along unparsed.
    pub fn decode(self, bytes: &[u8]) -> Result<Record<'_>, TraceError> {
        let message = DynamicMessage::decode(bytes, schema_for(self).root()).map_err(|reason| {
            TraceError::MalformedRecord { kind: self, reason }
        })?;
        let header = RecordHeader::from_message(&message);
        Ok(Record {
            kind: self,
            bytes,
            header,
            message,
        })
    }
}

/// One decoded record. `bytes` is what the backends persist.
#[derive(Clone, Debug)]
pub struct Record<'a> {
    pub kind: RecordKind,
    pub bytes: &'a [u8],
    pub header: RecordHeader,
    pub message: DynamicMessage<'a>,
}

impl FromStr for RecordKind {
    type Err = TraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordKind::parse(s).ok_or_else(|| TraceError::UnsupportedRecordKind(s.to_string()))
    }
}

/// `osi3.InterfaceVersion`.
#[derive(Clone, Copy, PartialEq, Eq, prost::Message)]
pub struct InterfaceVersion {
    #[prost(uint32, optional, tag = "1")]
    pub version_major: Option<u32>,
    #[prost(uint32, optional, tag = "2")]
    pub version_minor: Option<u32>,
    #[prost(uint32, optional, tag = "3")]
    pub version_patch: Option<u32>,
}

impl InterfaceVersion {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        InterfaceVersion {
            version_major: Some(major),
            version_minor: Some(minor),
            version_patch: Some(patch),
        }
    }

    /// `3.7.0` becomes `370`, the form used in trace file names.
    pub fn file_name_fragment(&self) -> String {
        format!(
            "{}{}{}",
            self.version_major(),
            self.version_minor(),
            self.version_patch()
        )
    }

    pub fn dotted(&self) -> String {
        format!(
            "{}.{}.{}",
            self.version_major(),
            self.version_minor(),
            self.version_patch()
        )
    }
}

/// `osi3.Timestamp`.
#[derive(Clone, Copy, PartialEq, Eq, prost::Message)]
pub struct Timestamp {
    #[prost(int64, optional, tag = "1")]
    pub seconds: Option<i64>,
    #[prost(uint32, optional, tag = "2")]
    pub nanos: Option<u32>,
}

impl Timestamp {
    /// Nanoseconds since the simulation epoch; negative times clamp to zero.
    pub fn as_nanos(&self) -> u64 {
        let secs = u64::try_from(self.seconds()).unwrap_or(0);
        secs.saturating_mul(1_000_000_000)
            .saturating_add(u64::from(self.nanos()))
    }
}

/// Fields 1 and 2 shared by all OSI top-level messages.
#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct RecordHeader {
    #[prost(message, optional, tag = "1")]
    pub version: Option<InterfaceVersion>,
    #[prost(message, optional, tag = "2")]
    pub timestamp: Option<Timestamp>,
}

impl RecordHeader {
    /// Reads fields 1 and 2 of a decoded top-level message. Repeated
    /// occurrences merge field by field, later values winning.
    pub fn from_message(message: &DynamicMessage<'_>) -> Self {
        let mut header = RecordHeader::default();
        for value in message.values(1) {
            let Value::Message(m) = value else { continue };
            let version = header.version.get_or_insert_with(Default::default);
            for field in &m.fields {
                match (field.number, &field.value) {
                    (1, Value::U32(v)) => version.version_major = Some(*v),
                    (2, Value::U32(v)) => version.version_minor = Some(*v),
                    (3, Value::U32(v)) => version.version_patch = Some(*v),
                    _ => {}
                }
            }
        }
        for value in message.values(2) {
            let Value::Message(m) = value else { continue };
            let timestamp = header.timestamp.get_or_insert_with(Default::default);
            for field in &m.fields {
                match (field.number, &field.value) {
                    (1, Value::I64(v)) => timestamp.seconds = Some(*v),
                    (2, Value::U32(v)) => timestamp.nanos = Some(*v),
                    _ => {}
                }
            }
        }
        header
    }

    /// A missing version field reads as `0.0.0`, like any unset proto2 message.
    pub fn interface_version(&self) -> InterfaceVersion {
        self.version.unwrap_or_default()
    }

    pub fn log_time(&self) -> u64 {
        self.timestamp.map(|t| t.as_nanos()).unwrap_or(0)
    }
}

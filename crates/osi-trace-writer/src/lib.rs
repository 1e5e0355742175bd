//! OSI trace file writer.
//!
//! Turns a sequence of serialized OSI top-level messages (`SensorView`,
//! `SensorData`, `GroundTruth`) into a single trace file in one of the
//! ASAM OSI trace formats:
//! - `.osi`: single-channel binary, length-prefixed records
//! - `.mcap`: multi-channel MCAP container with protobuf schema
//! - `.txth`: human-readable protobuf text format
//!
//! Each record is decoded against the bundled `osi3` descriptors before it
//! is written, so every format accepts and rejects the same records.
//!
//! The file is written under a working name and renamed on
//! [`TraceWriter::finish`] to a name that carries the observed OSI version,
//! the declared protobuf version and the number of frames.

mod backend;
mod dynamic;
mod error;
mod format;
mod naming;
mod record;
mod schema;
mod text_format;
mod writer;

pub use error::TraceError;
pub use format::TraceFormat;
pub use naming::{final_file_name, working_file_name, ZERO_TIMESTAMP};
pub use dynamic::{DynamicMessage, Field, Unknown, Value};
pub use record::{InterfaceVersion, Record, RecordHeader, RecordKind, Timestamp};
pub use schema::{osi_schema, schema_for, EnumInfo, FieldInfo, MessageInfo, OsiSchema, RecordSchema};
pub use text_format::render_text;
pub use writer::{TraceWriter, TraceWriterConfig, WritePhase};

/// Topic of the single MCAP channel the writer declares.
pub const CHANNEL_TOPIC: &str = "osi-trace-writer";

pub const CHANNEL_DESCRIPTION_KEY: &str = "net.asam.osi.trace.channel.description";
pub const CHANNEL_OSI_VERSION_KEY: &str = "net.asam.osi.trace.channel.osi_version";
pub const CHANNEL_DESCRIPTION: &str = "Channel added via osi-trace-writer";

pub const FILE_METADATA_NAME: &str = "net.asam.osi.trace";

pub const SCHEMA_ENCODING: &str = "protobuf";
pub const MESSAGE_ENCODING: &str = "protobuf";

use std::collections::BTreeMap;
use std::fs::File;

use mcap::records::{MessageHeader, Metadata};
use mcap::Writer;

use super::{BackendFailure, Provenance};
use crate::record::{InterfaceVersion, Record, RecordKind};
use crate::schema::schema_for;
use crate::{
    CHANNEL_DESCRIPTION, CHANNEL_DESCRIPTION_KEY, CHANNEL_OSI_VERSION_KEY, CHANNEL_TOPIC,
    FILE_METADATA_NAME, MESSAGE_ENCODING, SCHEMA_ENCODING,
};

/// `.mcap` with a single protobuf channel for the configured record kind.
pub(crate) struct ContainerBackend {
    writer: Writer<File>,
    kind: RecordKind,
    channel_id: Option<u16>,
}

impl ContainerBackend {
    pub(crate) fn new(file: File, kind: RecordKind) -> Result<Self, BackendFailure> {
        Ok(ContainerBackend {
            writer: Writer::new(file)?,
            kind,
            channel_id: None,
        })
    }

    /// The channel needs the schema and the OSI version, so it can only be
    /// declared once the first record has been parsed.
    pub(crate) fn declare_channel(&mut self, version: &InterfaceVersion) -> Result<(), BackendFailure> {
        if self.channel_id.is_some() {
            return Ok(());
        }
        let schema = schema_for(self.kind);
        let schema_id =
            self.writer
                .add_schema(self.kind.message_name(), SCHEMA_ENCODING, &schema.encoded)?;
        let metadata = BTreeMap::from([
            (
                CHANNEL_DESCRIPTION_KEY.to_string(),
                CHANNEL_DESCRIPTION.to_string(),
            ),
            (CHANNEL_OSI_VERSION_KEY.to_string(), version.dotted()),
        ]);
        let channel_id =
            self.writer
                .add_channel(schema_id, CHANNEL_TOPIC, MESSAGE_ENCODING, &metadata)?;
        self.channel_id = Some(channel_id);
        tracing::debug!(
            topic = CHANNEL_TOPIC,
            schema = self.kind.message_name(),
            "declared mcap channel"
        );
        Ok(())
    }

    pub(crate) fn write_message(&mut self, record: &Record<'_>, sequence: u64) -> Result<(), BackendFailure> {
        let Some(channel_id) = self.channel_id else {
            return Err("mcap channel has not been declared".into());
        };
        let log_time = record.header.log_time();
        self.writer.write_to_known_channel(
            &MessageHeader {
                channel_id,
                sequence: u32::try_from(sequence).unwrap_or(u32::MAX),
                log_time,
                publish_time: log_time,
            },
            record.bytes,
        )?;
        Ok(())
    }

    pub(crate) fn close(mut self, provenance: &Provenance<'_>) -> Result<(), BackendFailure> {
        let osi_version = provenance
            .observed
            .map(InterfaceVersion::dotted)
            .unwrap_or_default();
        let protobuf_version = provenance.protobuf_version.to_string();
        let metadata = Metadata {
            name: FILE_METADATA_NAME.to_string(),
            metadata: BTreeMap::from([
                ("version".to_string(), osi_version.clone()),
                ("min_osi_version".to_string(), osi_version.clone()),
                ("max_osi_version".to_string(), osi_version),
                ("min_protobuf_version".to_string(), protobuf_version.clone()),
                ("max_protobuf_version".to_string(), protobuf_version),
            ]),
        };
        self.writer.write_metadata(&metadata)?;
        self.writer.finish()?;
        Ok(())
    }
}

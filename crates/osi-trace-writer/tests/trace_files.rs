use std::path::Path;

use mcap::records::Record;
use osi_trace_writer::{
    schema_for, InterfaceVersion, RecordHeader, RecordKind, Timestamp, TraceError, TraceFormat,
    TraceWriter, TraceWriterConfig, CHANNEL_DESCRIPTION, CHANNEL_DESCRIPTION_KEY,
    CHANNEL_OSI_VERSION_KEY, CHANNEL_TOPIC, FILE_METADATA_NAME,
};
use prost::Message as _;
use prost_types::FileDescriptorSet;

fn record(version: (u32, u32, u32), seconds: i64, nanos: u32, extra: &[u8]) -> Vec<u8> {
    let mut bytes = RecordHeader {
        version: Some(InterfaceVersion::new(version.0, version.1, version.2)),
        timestamp: Some(Timestamp {
            seconds: Some(seconds),
            nanos: Some(nanos),
        }),
    }
    .encode_to_vec();
    bytes.extend_from_slice(extra);
    bytes
}

fn config(dir: &Path, kind: RecordKind, format: TraceFormat, custom: &str) -> TraceWriterConfig {
    TraceWriterConfig {
        output_dir: dir.to_path_buf(),
        protobuf_version: "3.5.0".to_string(),
        custom_name: custom.to_string(),
        record_kind: kind,
        format,
        omit_timestamp: true,
    }
}

fn split_length_prefixed(mut bytes: &[u8]) -> Vec<Vec<u8>> {
    let mut out = Vec::new();
    while !bytes.is_empty() {
        let len = u32::from_le_bytes(bytes[..4].try_into().unwrap()) as usize;
        out.push(bytes[4..4 + len].to_vec());
        bytes = &bytes[4 + len..];
    }
    out
}

#[test]
fn binary_trace_splits_back_into_records() {
    let dir = tempfile::tempdir().unwrap();
    let records = [
        record((3, 7, 0), 0, 0, &[]),
        // sensor_id { value: 5 }
        record((3, 7, 0), 0, 10_000_000, &[0x1a, 0x02, 0x08, 0x05]),
        record((3, 7, 0), 0, 20_000_000, &[]),
    ];

    let mut w = TraceWriter::open(config(dir.path(), RecordKind::SensorData, TraceFormat::Binary, ""))
        .unwrap();
    for r in &records {
        w.step(r).unwrap();
    }
    let path = w.finish().unwrap();
    assert_eq!(
        path.file_name().unwrap(),
        "00000000T000000Z_sd_370_3.5.0_3.osi"
    );

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(split_length_prefixed(&bytes), records.to_vec());
}

#[test]
fn container_trace_has_one_described_channel() {
    let dir = tempfile::tempdir().unwrap();
    let mut w = TraceWriter::open(config(
        dir.path(),
        RecordKind::GroundTruth,
        TraceFormat::Container,
        "highway",
    ))
    .unwrap();
    for step in 0..3u32 {
        w.step(&record((3, 7, 0), 1, step * 1000, &[])).unwrap();
    }
    let path = w.finish().unwrap();
    assert_eq!(
        path.file_name().unwrap(),
        "00000000T000000Z_gt_370_3.5.0_3_highway.mcap"
    );

    let bytes = std::fs::read(&path).unwrap();
    let messages: Vec<_> = mcap::MessageStream::new(&bytes)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(messages.len(), 3);
    for (i, m) in messages.iter().enumerate() {
        assert_eq!(m.channel.topic, CHANNEL_TOPIC);
        assert_eq!(m.channel.message_encoding, "protobuf");
        assert_eq!(
            m.channel.metadata.get(CHANNEL_DESCRIPTION_KEY).map(String::as_str),
            Some(CHANNEL_DESCRIPTION)
        );
        assert_eq!(
            m.channel.metadata.get(CHANNEL_OSI_VERSION_KEY).map(String::as_str),
            Some("3.7.0")
        );
        let schema = m.channel.schema.as_ref().unwrap();
        assert_eq!(schema.name, "osi3.GroundTruth");
        assert_eq!(schema.encoding, "protobuf");
        assert_eq!(schema.data.as_ref(), schema_for(RecordKind::GroundTruth).encoded.as_slice());
        assert_eq!(m.log_time, 1_000_000_000 + i as u64 * 1000);
        assert_eq!(m.sequence, i as u32 + 1);
    }

    let schema = messages[0].channel.schema.as_ref().unwrap();
    let set = FileDescriptorSet::decode(schema.data.as_ref()).unwrap();
    let root = set
        .file
        .iter()
        .filter(|f| f.package() == "osi3")
        .flat_map(|f| f.message_type.iter())
        .find(|m| m.name() == "GroundTruth")
        .unwrap();
    let fields: Vec<&str> = root.field.iter().map(|f| f.name()).collect();
    for expected in ["version", "timestamp", "host_vehicle_id", "moving_object", "lane"] {
        assert!(fields.contains(&expected), "{fields:?}");
    }
    assert!(set.file.iter().any(|f| f.name() == "osi_object.proto"));

    let metadata: Vec<_> = mcap::read::LinearReader::new(&bytes)
        .unwrap()
        .filter_map(|r| match r.unwrap() {
            Record::Metadata(m) => Some(m),
            _ => None,
        })
        .collect();
    assert_eq!(metadata.len(), 1);
    assert_eq!(metadata[0].name, FILE_METADATA_NAME);
    assert_eq!(metadata[0].metadata["version"], "3.7.0");
    assert_eq!(metadata[0].metadata["min_osi_version"], "3.7.0");
    assert_eq!(metadata[0].metadata["max_protobuf_version"], "3.5.0");
}

#[test]
fn text_trace_is_readable() {
    let dir = tempfile::tempdir().unwrap();
    let mut w = TraceWriter::open(config(dir.path(), RecordKind::SensorView, TraceFormat::Text, ""))
        .unwrap();
    // sensor_id { value: 9 }
    w.step(&record((3, 7, 0), 2, 5, &[0x1a, 0x02, 0x08, 0x09])).unwrap();
    let path = w.finish().unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("sensor_id {\n  value: 9\n}\n"), "{text}");
    assert!(text.contains("version {"), "{text}");
    assert!(text.contains("version_major: 3"), "{text}");
    assert!(text.contains("seconds: 2"), "{text}");
    assert!(text.contains("nanos: 5"), "{text}");
}

#[test]
fn malformed_step_then_recovery() {
    let dir = tempfile::tempdir().unwrap();
    let mut w = TraceWriter::open(config(dir.path(), RecordKind::SensorView, TraceFormat::Container, ""))
        .unwrap();
    let err = w.step(&[0x0a, 0x05, 0x01]).unwrap_err();
    assert!(matches!(err, TraceError::MalformedRecord { .. }));
    w.step(&record((3, 6, 0), 0, 0, &[])).unwrap();
    let path = w.finish().unwrap();
    assert_eq!(
        path.file_name().unwrap(),
        "00000000T000000Z_sv_360_3.5.0_1.mcap"
    );
}

#[test]
fn corrupt_nested_record_is_not_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let mut w = TraceWriter::open(config(dir.path(), RecordKind::SensorData, TraceFormat::Binary, ""))
        .unwrap();
    let good = record((3, 5, 0), 0, 0, &[]);
    // sensor_id whose varint is cut off
    let corrupt = record((3, 5, 0), 0, 1, &[0x1a, 0x01, 0x08]);

    w.step(&good).unwrap();
    let err = w.step(&corrupt).unwrap_err();
    assert!(matches!(
        err,
        TraceError::MalformedRecord {
            kind: RecordKind::SensorData,
            ..
        }
    ));
    assert_eq!(w.frames(), 1);
    w.step(&good).unwrap();
    let path = w.finish().unwrap();

    assert_eq!(path.file_name().unwrap(), "00000000T000000Z_sd_350_3.5.0_2.osi");
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(split_length_prefixed(&bytes), vec![good.clone(), good]);
}

#[test]
fn working_file_is_named_before_first_record() {
    let dir = tempfile::tempdir().unwrap();
    let w = TraceWriter::open(config(dir.path(), RecordKind::SensorData, TraceFormat::Text, "run1"))
        .unwrap();
    assert_eq!(
        w.working_path().file_name().unwrap(),
        "00000000T000000Z_sd_run1.txth"
    );
    let names: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(names, vec![std::ffi::OsString::from("00000000T000000Z_sd_run1.txth")]);
}

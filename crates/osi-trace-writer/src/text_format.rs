use std::fmt::Write as _;

use crate::dynamic::{DynamicMessage, Field, Unknown, Value};
use crate::schema::{osi_schema, FieldInfo, MessageInfo};

/// Unknown length-delimited payloads are tried as nested messages only while
/// nesting is shallower than this.
const MAX_DEPTH: usize = 32;

/// Renders a decoded record in protobuf text format.
///
/// Declared fields are printed by name, enum values by their symbolic name.
/// Unknown fields are printed by number: varints as integers, fixed-width
/// values in hex, length-delimited payloads as a nested block when they
/// parse as a message and as a quoted string otherwise.
pub fn render_text(message: &DynamicMessage<'_>) -> String {
    let mut out = String::new();
    render_fields(&mut out, &message.fields, message.descriptor, 0);
    out
}

fn render_fields(
    out: &mut String,
    fields: &[Field<'_>],
    descriptor: Option<&MessageInfo>,
    depth: usize,
) {
    for field in fields {
        let info = descriptor.and_then(|d| d.field(field.number));
        let number = field.number.to_string();
        let name = info.map_or(number.as_str(), |f| f.name.as_str());
        match &field.value {
            Value::Message(m) => {
                open(out, depth, name);
                render_fields(out, &m.fields, m.descriptor, depth + 1);
                close(out, depth);
            }
            Value::Unknown(u) => unknown(out, &number, u, depth),
            scalar => line(out, depth, name, &scalar_value(scalar, info)),
        }
    }
}

fn scalar_value(value: &Value<'_>, info: Option<&FieldInfo>) -> String {
    match value {
        Value::Bool(v) => v.to_string(),
        Value::I32(v) => v.to_string(),
        Value::I64(v) => v.to_string(),
        Value::U32(v) => v.to_string(),
        Value::U64(v) => v.to_string(),
        Value::F32(v) => float_value(f64::from(*v)),
        Value::F64(v) => float_value(*v),
        Value::Enum(v) => info
            .and_then(|f| f.type_name.as_deref())
            .and_then(|n| osi_schema().enumeration(n))
            .and_then(|e| e.value_name(*v))
            .map_or_else(|| v.to_string(), str::to_string),
        Value::String(b) => quote_str(b),
        Value::Bytes(b) => quote_bytes(b),
        Value::Message(_) | Value::Unknown(_) => String::new(),
    }
}

fn unknown(out: &mut String, name: &str, value: &Unknown<'_>, depth: usize) {
    match value {
        Unknown::Varint(v) => line(out, depth, name, &v.to_string()),
        Unknown::Fixed64(v) => line(out, depth, name, &format!("0x{v:016x}")),
        Unknown::Fixed32(v) => line(out, depth, name, &format!("0x{v:08x}")),
        Unknown::LengthDelimited(payload) => {
            let nested = (!payload.is_empty() && depth < MAX_DEPTH)
                .then(|| DynamicMessage::decode(payload, None).ok())
                .flatten();
            match nested {
                Some(m) => {
                    open(out, depth, name);
                    render_fields(out, &m.fields, None, depth + 1);
                    close(out, depth);
                }
                None => line(out, depth, name, &quote_bytes(payload)),
            }
        }
        Unknown::Group(inner) => {
            open(out, depth, name);
            render_fields(out, inner, None, depth + 1);
            close(out, depth);
        }
    }
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

fn line(out: &mut String, depth: usize, name: &str, value: &str) {
    indent(out, depth);
    let _ = writeln!(out, "{name}: {value}");
}

fn open(out: &mut String, depth: usize, name: &str) {
    indent(out, depth);
    let _ = writeln!(out, "{name} {{");
}

fn close(out: &mut String, depth: usize) {
    indent(out, depth);
    out.push_str("}\n");
}

fn float_value(v: f64) -> String {
    if v.is_nan() {
        "nan".to_string()
    } else if v.is_infinite() {
        let s = if v > 0.0 { "inf" } else { "-inf" };
        s.to_string()
    } else {
        v.to_string()
    }
}

fn quote_str(payload: &[u8]) -> String {
    let Ok(s) = std::str::from_utf8(payload) else {
        return quote_bytes(payload);
    };
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let mut buf = [0u8; 4];
                for b in c.encode_utf8(&mut buf).bytes() {
                    let _ = write!(out, "\\{b:03o}");
                }
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn quote_bytes(payload: &[u8]) -> String {
    let mut out = String::with_capacity(payload.len() + 2);
    out.push('"');
    for &b in payload {
        match b {
            b'"' => out.push_str("\\\""),
            b'\\' => out.push_str("\\\\"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            0x20..=0x7e => out.push(b as char),
            _ => {
                let _ = write!(out, "\\{b:03o}");
            }
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamic::wire::*;
    use crate::record::{InterfaceVersion, RecordHeader, RecordKind, Timestamp};
    use prost::Message as _;

    fn header_bytes() -> Vec<u8> {
        RecordHeader {
            version: Some(InterfaceVersion::new(3, 7, 0)),
            timestamp: Some(Timestamp {
                seconds: Some(12),
                nanos: Some(0),
            }),
        }
        .encode_to_vec()
    }

    fn render(kind: RecordKind, bytes: &[u8]) -> String {
        render_text(&kind.decode(bytes).unwrap().message)
    }

    #[test]
    fn header_fields_render_by_name() {
        let text = render(RecordKind::SensorView, &header_bytes());
        assert_eq!(
            text,
            "version {\n  version_major: 3\n  version_minor: 7\n  version_patch: 0\n}\n\
             timestamp {\n  seconds: 12\n  nanos: 0\n}\n"
        );
    }

    #[test]
    fn nested_messages_render_with_declared_names() {
        let bytes = [
            delimited(3, &varint(1, 5)),
            delimited(4, &delimited(1, &double(1, 1.5))),
        ]
        .concat();
        let text = render(RecordKind::SensorData, &bytes);
        assert_eq!(
            text,
            "sensor_id {\n  value: 5\n}\n\
             mounting_position {\n  position {\n    x: 1.5\n  }\n}\n"
        );
    }

    #[test]
    fn enums_render_by_value_name() {
        let bytes = [
            delimited(5, &varint(3, 2)),
            delimited(5, &varint(3, 77)),
            delimited(14, b"+proj=utm"),
        ]
        .concat();
        let text = render(RecordKind::GroundTruth, &bytes);
        assert_eq!(
            text,
            "moving_object {\n  type: TYPE_VEHICLE\n}\n\
             moving_object {\n  type: 77\n}\n\
             proj_string: \"+proj=utm\"\n"
        );
    }

    #[test]
    fn unknown_fields_render_by_number() {
        let mut bytes = header_bytes();
        bytes.extend(delimited(900, &varint(1, 5)));
        bytes.extend(double(901, 1.5));
        bytes.extend(delimited(902, b"a\x01"));
        bytes.extend(group(903, &varint(2, 4)));

        let text = render(RecordKind::SensorData, &bytes);
        assert!(text.contains("900 {\n  1: 5\n}\n"), "{text}");
        assert!(text.contains("901: 0x3ff8000000000000\n"), "{text}");
        assert!(text.contains("902: \"a\\001\"\n"), "{text}");
        assert!(text.contains("903 {\n  2: 4\n}\n"), "{text}");
    }

    #[test]
    fn non_utf8_strings_are_escaped() {
        let bytes = delimited(14, &[b'x', 0xff]);
        let text = render(RecordKind::GroundTruth, &bytes);
        assert_eq!(text, "proj_string: \"x\\377\"\n");
    }

    #[test]
    fn floats_use_text_format_spellings() {
        assert_eq!(float_value(f64::INFINITY), "inf");
        assert_eq!(float_value(f64::NEG_INFINITY), "-inf");
        assert_eq!(float_value(f64::NAN), "nan");
        assert_eq!(float_value(0.1), "0.1");
    }
}

//! Schema-driven protobuf decoding of OSI records.
//!
//! Every field the schema knows is decoded as its declared type, nested
//! messages included, so a record is accepted only when all of its known
//! content is well-formed. Fields the schema does not know, or that arrive
//! with a different wire type, are kept as unknown fields.

use prost::encoding::{decode_key, decode_varint, WireType};
use prost_types::field_descriptor_proto::Type;

use crate::schema::{osi_schema, FieldInfo, MessageInfo};

/// Matches the default recursion limit of the protobuf runtimes.
const MAX_DEPTH: usize = 100;

#[derive(Clone, Debug)]
pub struct DynamicMessage<'a> {
    pub descriptor: Option<&'static MessageInfo>,
    /// In wire order; repeated and packed values appear once per element.
    pub fields: Vec<Field<'a>>,
}

#[derive(Clone, Debug)]
pub struct Field<'a> {
    pub number: u32,
    pub value: Value<'a>,
}

#[derive(Clone, Debug)]
pub enum Value<'a> {
    Bool(bool),
    I32(i32),
    I64(i64),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Enum(i32),
    /// proto2 strings are not UTF-8 checked on parse.
    String(&'a [u8]),
    Bytes(&'a [u8]),
    Message(DynamicMessage<'a>),
    Unknown(Unknown<'a>),
}

#[derive(Clone, Debug)]
pub enum Unknown<'a> {
    Varint(u64),
    Fixed64(u64),
    Fixed32(u32),
    LengthDelimited(&'a [u8]),
    Group(Vec<Field<'a>>),
}

impl<'a> DynamicMessage<'a> {
    /// Decodes `bytes` as `descriptor`, or as a message of unknown fields
    /// when there is no descriptor.
    pub fn decode(
        bytes: &'a [u8],
        descriptor: Option<&'static MessageInfo>,
    ) -> Result<Self, String> {
        let mut buf = bytes;
        let fields = decode_fields(&mut buf, descriptor, None, 0)?;
        Ok(DynamicMessage { descriptor, fields })
    }

    /// All values of field `number`, in wire order.
    pub fn values(&self, number: u32) -> impl Iterator<Item = &Value<'a>> {
        self.fields
            .iter()
            .filter(move |f| f.number == number)
            .map(|f| &f.value)
    }
}

fn decode_fields<'a>(
    buf: &mut &'a [u8],
    descriptor: Option<&'static MessageInfo>,
    group: Option<u32>,
    depth: usize,
) -> Result<Vec<Field<'a>>, String> {
    if depth > MAX_DEPTH {
        return Err("message nesting exceeds the recursion limit".to_string());
    }
    let mut out = Vec::new();
    loop {
        if buf.is_empty() {
            return match group {
                Some(tag) => Err(format!("field {tag}: group is not terminated")),
                None => Ok(out),
            };
        }
        let (tag, wire_type) = decode_key(buf).map_err(|e| e.to_string())?;
        if wire_type == WireType::EndGroup {
            return match group {
                Some(open) if open == tag => Ok(out),
                _ => Err(format!("field {tag}: unmatched end of group")),
            };
        }
        match descriptor.and_then(|d| d.field(tag)) {
            Some(info) if wire_type == expected_wire_type(info.ty) => {
                let value =
                    decode_known(buf, info, depth).map_err(|e| format!("{}: {e}", info.name))?;
                out.push(Field { number: tag, value });
            }
            Some(info)
                if info.repeated
                    && is_packable(info.ty)
                    && wire_type == WireType::LengthDelimited =>
            {
                let mut payload = length_delimited(buf, tag)?;
                while !payload.is_empty() {
                    let value = decode_scalar(&mut payload, info.ty)
                        .map_err(|e| format!("{}: {e}", info.name))?;
                    out.push(Field { number: tag, value });
                }
            }
            _ => {
                let value = decode_unknown(buf, tag, wire_type, depth)?;
                out.push(Field {
                    number: tag,
                    value: Value::Unknown(value),
                });
            }
        }
    }
}

fn decode_known<'a>(buf: &mut &'a [u8], info: &FieldInfo, depth: usize) -> Result<Value<'a>, String> {
    let nested = || info.type_name.as_deref().and_then(|n| osi_schema().message(n));
    match info.ty {
        Type::String => Ok(Value::String(length_delimited(buf, info.number)?)),
        Type::Bytes => Ok(Value::Bytes(length_delimited(buf, info.number)?)),
        Type::Message => {
            let mut payload = length_delimited(buf, info.number)?;
            let descriptor = nested();
            let fields = decode_fields(&mut payload, descriptor, None, depth + 1)?;
            Ok(Value::Message(DynamicMessage { descriptor, fields }))
        }
        Type::Group => {
            let descriptor = nested();
            let fields = decode_fields(buf, descriptor, Some(info.number), depth + 1)?;
            Ok(Value::Message(DynamicMessage { descriptor, fields }))
        }
        ty => decode_scalar(buf, ty),
    }
}

fn decode_scalar<'a>(buf: &mut &'a [u8], ty: Type) -> Result<Value<'a>, String> {
    let value = match ty {
        Type::Double => Value::F64(f64::from_le_bytes(fixed(buf)?)),
        Type::Float => Value::F32(f32::from_le_bytes(fixed(buf)?)),
        Type::Fixed64 => Value::U64(u64::from_le_bytes(fixed(buf)?)),
        Type::Sfixed64 => Value::I64(i64::from_le_bytes(fixed(buf)?)),
        Type::Fixed32 => Value::U32(u32::from_le_bytes(fixed(buf)?)),
        Type::Sfixed32 => Value::I32(i32::from_le_bytes(fixed(buf)?)),
        Type::Int32 => Value::I32(varint(buf)? as i32),
        Type::Int64 => Value::I64(varint(buf)? as i64),
        Type::Uint32 => Value::U32(varint(buf)? as u32),
        Type::Uint64 => Value::U64(varint(buf)?),
        Type::Sint32 => {
            let v = varint(buf)? as u32;
            Value::I32(((v >> 1) as i32) ^ -((v & 1) as i32))
        }
        Type::Sint64 => {
            let v = varint(buf)?;
            Value::I64(((v >> 1) as i64) ^ -((v & 1) as i64))
        }
        Type::Bool => Value::Bool(varint(buf)? != 0),
        Type::Enum => Value::Enum(varint(buf)? as i32),
        Type::String | Type::Bytes | Type::Message | Type::Group => {
            return Err(format!("{ty:?} is not a scalar type"));
        }
    };
    Ok(value)
}

fn decode_unknown<'a>(
    buf: &mut &'a [u8],
    tag: u32,
    wire_type: WireType,
    depth: usize,
) -> Result<Unknown<'a>, String> {
    let value = match wire_type {
        WireType::Varint => Unknown::Varint(varint(buf)?),
        WireType::SixtyFourBit => Unknown::Fixed64(u64::from_le_bytes(fixed(buf)?)),
        WireType::ThirtyTwoBit => Unknown::Fixed32(u32::from_le_bytes(fixed(buf)?)),
        WireType::LengthDelimited => Unknown::LengthDelimited(length_delimited(buf, tag)?),
        WireType::StartGroup => Unknown::Group(decode_fields(buf, None, Some(tag), depth + 1)?),
        WireType::EndGroup => return Err(format!("field {tag}: unmatched end of group")),
    };
    Ok(value)
}

fn expected_wire_type(ty: Type) -> WireType {
    match ty {
        Type::Double | Type::Fixed64 | Type::Sfixed64 => WireType::SixtyFourBit,
        Type::Float | Type::Fixed32 | Type::Sfixed32 => WireType::ThirtyTwoBit,
        Type::String | Type::Bytes | Type::Message => WireType::LengthDelimited,
        Type::Group => WireType::StartGroup,
        Type::Int32
        | Type::Int64
        | Type::Uint32
        | Type::Uint64
        | Type::Sint32
        | Type::Sint64
        | Type::Bool
        | Type::Enum => WireType::Varint,
    }
}

fn is_packable(ty: Type) -> bool {
    !matches!(ty, Type::String | Type::Bytes | Type::Message | Type::Group)
}

fn varint(buf: &mut &[u8]) -> Result<u64, String> {
    decode_varint(buf).map_err(|e| e.to_string())
}

fn fixed<const N: usize>(buf: &mut &[u8]) -> Result<[u8; N], String> {
    if buf.len() < N {
        return Err("truncated fixed-width value".to_string());
    }
    let (head, rest) = buf.split_at(N);
    *buf = rest;
    let mut out = [0u8; N];
    out.copy_from_slice(head);
    Ok(out)
}

fn length_delimited<'a>(buf: &mut &'a [u8], tag: u32) -> Result<&'a [u8], String> {
    let len = varint(buf)?;
    let len = usize::try_from(len)
        .ok()
        .filter(|&l| l <= buf.len())
        .ok_or_else(|| format!("field {tag}: length exceeds buffer"))?;
    let (payload, rest) = buf.split_at(len);
    *buf = rest;
    Ok(payload)
}

/// Hand-assembled wire data for tests.
#[cfg(test)]
pub(crate) mod wire {
    use prost::encoding::{encode_key, encode_varint, WireType};

    pub fn varint(tag: u32, v: u64) -> Vec<u8> {
        let mut out = Vec::new();
        encode_key(tag, WireType::Varint, &mut out);
        encode_varint(v, &mut out);
        out
    }

    pub fn double(tag: u32, v: f64) -> Vec<u8> {
        let mut out = Vec::new();
        encode_key(tag, WireType::SixtyFourBit, &mut out);
        out.extend_from_slice(&v.to_le_bytes());
        out
    }

    pub fn delimited(tag: u32, payload: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        encode_key(tag, WireType::LengthDelimited, &mut out);
        encode_varint(payload.len() as u64, &mut out);
        out.extend_from_slice(payload);
        out
    }

    pub fn group(tag: u32, body: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        encode_key(tag, WireType::StartGroup, &mut out);
        out.extend_from_slice(body);
        encode_key(tag, WireType::EndGroup, &mut out);
        out
    }
}

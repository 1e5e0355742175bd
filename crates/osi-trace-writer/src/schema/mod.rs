use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;
use prost::Message as _;
use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::{
    DescriptorProto, EnumDescriptorProto, EnumValueDescriptorProto, FieldDescriptorProto,
    FileDescriptorProto, FileDescriptorSet,
};

use crate::record::RecordKind;

mod def;
mod osi;

use def::{EnumDef, FieldDef, FileDef, MessageDef, Ty};

const PACKAGE: &str = "osi3";

/// A field as the decoder sees it: number, wire-relevant type and the
/// referenced message or enum, if any.
#[derive(Debug)]
pub struct FieldInfo {
    pub name: String,
    pub number: u32,
    pub repeated: bool,
    pub ty: Type,
    /// Fully qualified, without the leading dot.
    pub type_name: Option<String>,
}

#[derive(Debug)]
pub struct MessageInfo {
    pub full_name: String,
    fields: BTreeMap<u32, FieldInfo>,
}

impl MessageInfo {
    pub fn field(&self, number: u32) -> Option<&FieldInfo> {
        self.fields.get(&number)
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldInfo> {
        self.fields.values()
    }
}

#[derive(Debug)]
pub struct EnumInfo {
    pub full_name: String,
    values: BTreeMap<i32, String>,
}

impl EnumInfo {
    pub fn value_name(&self, number: i32) -> Option<&str> {
        self.values.get(&number).map(String::as_str)
    }
}

/// Every `osi3` file descriptor plus a by-name index of messages and enums.
#[derive(Debug)]
pub struct OsiSchema {
    files: Vec<FileDescriptorProto>,
    messages: HashMap<String, MessageInfo>,
    enums: HashMap<String, EnumInfo>,
}

static OSI: Lazy<OsiSchema> = Lazy::new(|| OsiSchema::from_files(osi::FILES));

pub fn osi_schema() -> &'static OsiSchema {
    Lazy::force(&OSI)
}

impl OsiSchema {
    fn from_files(defs: &[FileDef]) -> Self {
        let files: Vec<FileDescriptorProto> = defs.iter().map(file_descriptor).collect();
        let mut messages = HashMap::new();
        let mut enums = HashMap::new();
        for file in &files {
            let scope = file.package().to_string();
            index_enums(&scope, &file.enum_type, &mut enums);
            index_messages(&scope, &file.message_type, &mut messages, &mut enums);
        }
        OsiSchema {
            files,
            messages,
            enums,
        }
    }

    /// Looks up a message by fully qualified name, with or without the
    /// leading dot used in `type_name`.
    pub fn message(&self, full_name: &str) -> Option<&MessageInfo> {
        self.messages
            .get(full_name.strip_prefix('.').unwrap_or(full_name))
    }

    pub fn enumeration(&self, full_name: &str) -> Option<&EnumInfo> {
        self.enums.get(full_name.strip_prefix('.').unwrap_or(full_name))
    }

    pub fn file(&self, name: &str) -> Option<&FileDescriptorProto> {
        self.files.iter().find(|f| f.name() == name)
    }

    pub fn files(&self) -> &[FileDescriptorProto] {
        &self.files
    }

    /// `name` and everything it imports, each file after its dependencies.
    pub fn file_closure(&self, name: &str) -> Vec<FileDescriptorProto> {
        let mut out = Vec::new();
        self.push_closure(name, &mut out);
        out
    }

    fn push_closure(&self, name: &str, out: &mut Vec<FileDescriptorProto>) {
        if out.iter().any(|f| f.name() == name) {
            return;
        }
        let Some(file) = self.file(name) else {
            return;
        };
        for dep in &file.dependency {
            self.push_closure(dep, out);
        }
        out.push(file.clone());
    }
}

/// Descriptor set of one OSI top-level message and all files it depends on.
///
/// The MCAP backend stores `encoded` as the channel schema.
#[derive(Debug)]
pub struct RecordSchema {
    pub kind: RecordKind,
    pub set: FileDescriptorSet,
    pub encoded: Vec<u8>,
}

static SENSOR_VIEW: Lazy<RecordSchema> = Lazy::new(|| RecordSchema::build(RecordKind::SensorView));
static SENSOR_DATA: Lazy<RecordSchema> = Lazy::new(|| RecordSchema::build(RecordKind::SensorData));
static GROUND_TRUTH: Lazy<RecordSchema> =
    Lazy::new(|| RecordSchema::build(RecordKind::GroundTruth));

pub fn schema_for(kind: RecordKind) -> &'static RecordSchema {
    match kind {
        RecordKind::SensorView => Lazy::force(&SENSOR_VIEW),
        RecordKind::SensorData => Lazy::force(&SENSOR_DATA),
        RecordKind::GroundTruth => Lazy::force(&GROUND_TRUTH),
    }
}

impl RecordSchema {
    fn build(kind: RecordKind) -> Self {
        let set = FileDescriptorSet {
            file: osi_schema().file_closure(kind.proto_file()),
        };
        let encoded = set.encode_to_vec();
        RecordSchema { kind, set, encoded }
    }

    pub fn root(&self) -> Option<&'static MessageInfo> {
        osi_schema().message(self.kind.message_name())
    }
}

fn file_descriptor(def: &FileDef) -> FileDescriptorProto {
    FileDescriptorProto {
        name: Some(def.name.to_string()),
        package: Some(PACKAGE.to_string()),
        dependency: def.deps.iter().map(|d| d.to_string()).collect(),
        message_type: def.messages.iter().map(message_descriptor).collect(),
        enum_type: def.enums.iter().map(enum_descriptor).collect(),
        syntax: Some("proto2".to_string()),
        ..Default::default()
    }
}

fn message_descriptor(def: &MessageDef) -> DescriptorProto {
    DescriptorProto {
        name: Some(def.name.to_string()),
        field: def.fields.iter().map(field_descriptor).collect(),
        nested_type: def.nested.iter().map(message_descriptor).collect(),
        enum_type: def.enums.iter().map(enum_descriptor).collect(),
        ..Default::default()
    }
}

fn enum_descriptor(def: &EnumDef) -> EnumDescriptorProto {
    EnumDescriptorProto {
        name: Some(def.name.to_string()),
        value: def
            .values
            .iter()
            .map(|(name, number)| EnumValueDescriptorProto {
                name: Some(name.to_string()),
                number: Some(*number),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}

fn field_descriptor(def: &FieldDef) -> FieldDescriptorProto {
    let (ty, type_name) = match def.ty {
        Ty::Double => (Type::Double, None),
        Ty::Int64 => (Type::Int64, None),
        Ty::Uint32 => (Type::Uint32, None),
        Ty::Uint64 => (Type::Uint64, None),
        Ty::Bool => (Type::Bool, None),
        Ty::String => (Type::String, None),
        Ty::Bytes => (Type::Bytes, None),
        Ty::Message(name) => (Type::Message, Some(name.to_string())),
        Ty::Enum(name) => (Type::Enum, Some(name.to_string())),
    };
    let label = if def.repeated {
        Label::Repeated
    } else {
        Label::Optional
    };
    FieldDescriptorProto {
        name: Some(def.name.to_string()),
        number: Some(def.number),
        label: Some(label as i32),
        r#type: Some(ty as i32),
        type_name,
        ..Default::default()
    }
}

fn index_messages(
    scope: &str,
    descriptors: &[DescriptorProto],
    messages: &mut HashMap<String, MessageInfo>,
    enums: &mut HashMap<String, EnumInfo>,
) {
    for d in descriptors {
        let full_name = format!("{scope}.{}", d.name());
        let fields = d
            .field
            .iter()
            .map(|f| {
                let number = u32::try_from(f.number()).unwrap_or(0);
                let info = FieldInfo {
                    name: f.name().to_string(),
                    number,
                    repeated: f.label() == Label::Repeated,
                    ty: f.r#type(),
                    type_name: f
                        .type_name
                        .as_deref()
                        .map(|n| n.strip_prefix('.').unwrap_or(n).to_string()),
                };
                (number, info)
            })
            .collect();
        index_enums(&full_name, &d.enum_type, enums);
        index_messages(&full_name, &d.nested_type, messages, enums);
        messages.insert(full_name.clone(), MessageInfo { full_name, fields });
    }
}

fn index_enums(
    scope: &str,
    descriptors: &[EnumDescriptorProto],
    enums: &mut HashMap<String, EnumInfo>,
) {
    for d in descriptors {
        let full_name = format!("{scope}.{}", d.name());
        let values = d
            .value
            .iter()
            .map(|v| (v.number(), v.name().to_string()))
            .collect();
        enums.insert(full_name.clone(), EnumInfo { full_name, values });
    }
}

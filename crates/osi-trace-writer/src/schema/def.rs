//! Compact declarations the descriptor set is generated from.

#[derive(Clone, Copy, Debug)]
pub(super) enum Ty {
    Double,
    Int64,
    Uint32,
    Uint64,
    Bool,
    String,
    Bytes,
    /// Fully qualified, with the leading dot.
    Message(&'static str),
    Enum(&'static str),
}

#[derive(Clone, Copy, Debug)]
pub(super) struct FieldDef {
    pub name: &'static str,
    pub number: i32,
    pub repeated: bool,
    pub ty: Ty,
}

#[derive(Clone, Copy, Debug)]
pub(super) struct EnumDef {
    pub name: &'static str,
    pub values: &'static [(&'static str, i32)],
}

#[derive(Clone, Copy, Debug)]
pub(super) struct MessageDef {
    pub name: &'static str,
    pub fields: &'static [FieldDef],
    pub nested: &'static [MessageDef],
    pub enums: &'static [EnumDef],
}

impl MessageDef {
    pub const fn with_nested(self, nested: &'static [MessageDef]) -> Self {
        MessageDef { nested, ..self }
    }
}

#[derive(Clone, Copy, Debug)]
pub(super) struct FileDef {
    pub name: &'static str,
    pub deps: &'static [&'static str],
    pub messages: &'static [MessageDef],
    pub enums: &'static [EnumDef],
}

pub(super) const fn opt(name: &'static str, number: i32, ty: Ty) -> FieldDef {
    FieldDef {
        name,
        number,
        repeated: false,
        ty,
    }
}

pub(super) const fn rep(name: &'static str, number: i32, ty: Ty) -> FieldDef {
    FieldDef {
        name,
        number,
        repeated: true,
        ty,
    }
}

pub(super) const fn message(name: &'static str, fields: &'static [FieldDef]) -> MessageDef {
    MessageDef {
        name,
        fields,
        nested: &[],
        enums: &[],
    }
}

pub(super) const fn enumeration(
    name: &'static str,
    values: &'static [(&'static str, i32)],
) -> EnumDef {
    EnumDef { name, values }
}

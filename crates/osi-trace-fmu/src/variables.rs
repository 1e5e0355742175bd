use std::borrow::Cow;
use std::ffi::{CStr, CString};

pub const BOOLEAN_VALID: usize = 0;
pub const BOOLEAN_OMIT_TIMESTAMP: usize = 1;
pub const BOOLEAN_COUNT: usize = 2;

pub const INTEGER_BASE_LO: usize = 0;
pub const INTEGER_BASE_HI: usize = 1;
pub const INTEGER_SIZE: usize = 2;
pub const INTEGER_COUNT: usize = 3;

pub const REAL_COUNT: usize = 1;

pub const STRING_TRACE_PATH: usize = 0;
pub const STRING_PROTOBUF_VERSION: usize = 1;
pub const STRING_CUSTOM_NAME: usize = 2;
pub const STRING_MESSAGE_TYPE: usize = 3;
pub const STRING_FILE_FORMAT: usize = 4;
pub const STRING_COUNT: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VariableKind {
    Boolean,
    Integer,
    Real,
    String,
}

impl VariableKind {
    pub fn as_str(self) -> &'static str {
        match self {
            VariableKind::Boolean => "boolean",
            VariableKind::Integer => "integer",
            VariableKind::Real => "real",
            VariableKind::String => "string",
        }
    }
}

/// A value reference past the end of its array. Entries before `position`
/// have been applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutOfRange {
    pub kind: VariableKind,
    pub position: usize,
    pub reference: u32,
    pub bound: usize,
}

impl std::fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} value reference {} at position {} is out of range (bound {})",
            self.kind.as_str(),
            self.reference,
            self.position,
            self.bound
        )
    }
}

impl std::error::Error for OutOfRange {}

#[derive(Clone, Debug)]
struct Slots<T> {
    kind: VariableKind,
    values: Vec<T>,
}

impl<T: Clone + Default> Slots<T> {
    fn new(kind: VariableKind, len: usize) -> Self {
        Slots {
            kind,
            values: vec![T::default(); len],
        }
    }

    fn reset(&mut self) {
        self.values.fill(T::default());
    }

    fn index(&self, position: usize, reference: u32) -> Result<usize, OutOfRange> {
        let idx = reference as usize;
        if idx < self.values.len() {
            Ok(idx)
        } else {
            Err(OutOfRange {
                kind: self.kind,
                position,
                reference,
                bound: self.values.len(),
            })
        }
    }

    fn visit<'a>(&'a self, refs: &[u32], mut f: impl FnMut(usize, &'a T)) -> Result<(), OutOfRange> {
        for (position, &reference) in refs.iter().enumerate() {
            let idx = self.index(position, reference)?;
            f(position, &self.values[idx]);
        }
        Ok(())
    }

    fn set_with<V>(
        &mut self,
        refs: &[u32],
        values: &[V],
        convert: impl Fn(&V) -> T,
    ) -> Result<(), OutOfRange> {
        for (position, (&reference, value)) in refs.iter().zip(values).enumerate() {
            let idx = self.index(position, reference)?;
            self.values[idx] = convert(value);
        }
        Ok(())
    }
}

impl<T: Clone + Default + Copy> Slots<T> {
    fn get_copied(&self, refs: &[u32], out: &mut [T]) -> Result<(), OutOfRange> {
        let n = refs.len().min(out.len());
        self.visit(&refs[..n], |i, v| out[i] = *v)
    }
}

/// The variables the host exchanges with the component.
///
/// Get and set process entries in order and stop at the first reference
/// that is out of range.
#[derive(Clone, Debug)]
pub struct VariableTable {
    booleans: Slots<bool>,
    integers: Slots<i32>,
    reals: Slots<f64>,
    strings: Slots<CString>,
}

impl Default for VariableTable {
    fn default() -> Self {
        VariableTable::new()
    }
}

impl VariableTable {
    pub fn new() -> Self {
        VariableTable {
            booleans: Slots::new(VariableKind::Boolean, BOOLEAN_COUNT),
            integers: Slots::new(VariableKind::Integer, INTEGER_COUNT),
            reals: Slots::new(VariableKind::Real, REAL_COUNT),
            strings: Slots::new(VariableKind::String, STRING_COUNT),
        }
    }

    pub fn reset(&mut self) {
        self.booleans.reset();
        self.integers.reset();
        self.reals.reset();
        self.strings.reset();
    }

    pub fn get_booleans(&self, refs: &[u32], out: &mut [bool]) -> Result<(), OutOfRange> {
        self.booleans.get_copied(refs, out)
    }

    pub fn set_booleans(&mut self, refs: &[u32], values: &[bool]) -> Result<(), OutOfRange> {
        self.booleans.set_with(refs, values, |v| *v)
    }

    pub fn get_integers(&self, refs: &[u32], out: &mut [i32]) -> Result<(), OutOfRange> {
        self.integers.get_copied(refs, out)
    }

    pub fn set_integers(&mut self, refs: &[u32], values: &[i32]) -> Result<(), OutOfRange> {
        self.integers.set_with(refs, values, |v| *v)
    }

    pub fn get_reals(&self, refs: &[u32], out: &mut [f64]) -> Result<(), OutOfRange> {
        self.reals.get_copied(refs, out)
    }

    pub fn set_reals(&mut self, refs: &[u32], values: &[f64]) -> Result<(), OutOfRange> {
        self.reals.set_with(refs, values, |v| *v)
    }

    /// The returned strings borrow from the table: they stay valid until the
    /// next mutation or reset.
    pub fn get_strings<'a>(&'a self, refs: &[u32], out: &mut [&'a CStr]) -> Result<(), OutOfRange> {
        let n = refs.len().min(out.len());
        self.strings.visit(&refs[..n], |i, v| out[i] = v.as_c_str())
    }

    pub fn set_strings(&mut self, refs: &[u32], values: &[&CStr]) -> Result<(), OutOfRange> {
        self.strings.set_with(refs, values, |v| CString::from(*v))
    }

    pub fn boolean(&self, reference: usize) -> bool {
        self.booleans.values[reference]
    }

    pub(crate) fn set_boolean(&mut self, reference: usize, value: bool) {
        self.booleans.values[reference] = value;
    }

    pub fn integer(&self, reference: usize) -> i32 {
        self.integers.values[reference]
    }

    pub(crate) fn set_integer(&mut self, reference: usize, value: i32) {
        self.integers.values[reference] = value;
    }

    /// Invalid UTF-8 is replaced rather than rejected.
    pub fn text(&self, reference: usize) -> Cow<'_, str> {
        self.strings.values[reference].to_string_lossy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_table_is_zeroed() {
        let t = VariableTable::new();
        let mut ints = [7; INTEGER_COUNT];
        t.get_integers(&[0, 1, 2], &mut ints).unwrap();
        assert_eq!(ints, [0, 0, 0]);
        assert!(!t.boolean(BOOLEAN_VALID));
        assert_eq!(t.text(STRING_FILE_FORMAT), "");
    }

    #[test]
    fn set_then_get_each_kind() {
        let mut t = VariableTable::new();
        t.set_booleans(&[1], &[true]).unwrap();
        t.set_integers(&[2, 0], &[64, -5]).unwrap();
        t.set_reals(&[0], &[0.5]).unwrap();
        t.set_strings(&[3], &[CStr::from_bytes_with_nul(b"sd\0").unwrap()])
            .unwrap();

        let mut b = [false];
        t.get_booleans(&[1], &mut b).unwrap();
        assert_eq!(b, [true]);
        let mut i = [0; 2];
        t.get_integers(&[0, 2], &mut i).unwrap();
        assert_eq!(i, [-5, 64]);
        let mut r = [0.0];
        t.get_reals(&[0], &mut r).unwrap();
        assert_eq!(r, [0.5]);
        let mut s: [&CStr; 1] = [Default::default()];
        t.get_strings(&[3], &mut s).unwrap();
        assert_eq!(s[0].to_bytes(), b"sd");
    }

    #[test]
    fn out_of_range_stops_after_applying_prefix() {
        let mut t = VariableTable::new();
        let err = t.set_integers(&[0, 1, 9, 2], &[10, 11, 12, 13]).unwrap_err();
        assert_eq!(
            err,
            OutOfRange {
                kind: VariableKind::Integer,
                position: 2,
                reference: 9,
                bound: INTEGER_COUNT,
            }
        );
        assert_eq!(t.integer(0), 10);
        assert_eq!(t.integer(1), 11);
        assert_eq!(t.integer(2), 0);
    }

    #[test]
    fn out_of_range_get_writes_only_prefix() {
        let mut t = VariableTable::new();
        t.set_strings(&[0], &[CStr::from_bytes_with_nul(b"/tmp\0").unwrap()])
            .unwrap();
        let marker = CStr::from_bytes_with_nul(b"untouched\0").unwrap();
        let mut out = [marker; 2];
        let err = t.get_strings(&[0, 5], &mut out).unwrap_err();
        assert_eq!(err.kind, VariableKind::String);
        assert_eq!(err.bound, STRING_COUNT);
        assert_eq!(out[0].to_bytes(), b"/tmp");
        assert_eq!(out[1], marker);
    }

    #[test]
    fn reals_bound_is_one() {
        let t = VariableTable::new();
        let mut r = [0.0];
        assert!(t.get_reals(&[1], &mut r).is_err());
    }

    #[test]
    fn reset_clears_everything() {
        let mut t = VariableTable::new();
        t.set_booleans(&[0, 1], &[true, true]).unwrap();
        t.set_strings(&[4], &[CStr::from_bytes_with_nul(b"mcap\0").unwrap()])
            .unwrap();
        t.reset();
        assert!(!t.boolean(BOOLEAN_OMIT_TIMESTAMP));
        assert_eq!(t.text(STRING_FILE_FORMAT), "");
    }
}

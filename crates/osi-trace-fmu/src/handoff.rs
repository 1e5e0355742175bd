//! OSMP buffer handoff.
//!
//! The host passes a serialized record as a base address split over two
//! `fmi2Integer` variables plus a byte length. Only this module turns such
//! a triple back into memory.

use crate::variables::{VariableTable, INTEGER_BASE_HI, INTEGER_BASE_LO, INTEGER_SIZE};

/// Splits an address into `(hi, lo)` words.
#[cfg(target_pointer_width = "64")]
pub fn encode(address: usize) -> (i32, i32) {
    let a = address as u64;
    ((a >> 32) as u32 as i32, a as u32 as i32)
}

/// Splits an address into `(hi, lo)` words. The high word is always zero.
#[cfg(not(target_pointer_width = "64"))]
pub fn encode(address: usize) -> (i32, i32) {
    (0, address as u32 as i32)
}

#[cfg(target_pointer_width = "64")]
pub fn decode(hi: i32, lo: i32) -> usize {
    (((hi as u32 as u64) << 32) | lo as u32 as u64) as usize
}

#[cfg(not(target_pointer_width = "64"))]
pub fn decode(_hi: i32, lo: i32) -> usize {
    lo as u32 as usize
}

/// Views `length` bytes at `address`. Returns `None` for a non-positive
/// length or a null address.
///
/// # Safety
///
/// A non-null `address` must point to at least `length` readable bytes
/// that stay valid and unmodified for `'a`. Callers keep the view no longer
/// than the step call that supplied it.
pub unsafe fn resolve<'a>(address: usize, length: i32) -> Option<&'a [u8]> {
    if length <= 0 || address == 0 {
        return None;
    }
    Some(std::slice::from_raw_parts(
        address as *const u8,
        length as usize,
    ))
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HandoffDescriptor {
    pub hi: i32,
    pub lo: i32,
    pub length: i32,
}

impl HandoffDescriptor {
    /// Describes a host-side buffer. `None` if it is longer than an
    /// `fmi2Integer` can express.
    pub fn for_slice(bytes: &[u8]) -> Option<Self> {
        let length = i32::try_from(bytes.len()).ok()?;
        let (hi, lo) = encode(bytes.as_ptr() as usize);
        Some(HandoffDescriptor { hi, lo, length })
    }

    pub fn from_variables(variables: &VariableTable) -> Self {
        HandoffDescriptor {
            hi: variables.integer(INTEGER_BASE_HI),
            lo: variables.integer(INTEGER_BASE_LO),
            length: variables.integer(INTEGER_SIZE),
        }
    }

    pub fn store(&self, variables: &mut VariableTable) {
        variables.set_integer(INTEGER_BASE_HI, self.hi);
        variables.set_integer(INTEGER_BASE_LO, self.lo);
        variables.set_integer(INTEGER_SIZE, self.length);
    }

    pub fn address(&self) -> usize {
        decode(self.hi, self.lo)
    }

    /// # Safety
    ///
    /// Same contract as [`resolve`].
    pub unsafe fn resolve<'a>(&self) -> Option<&'a [u8]> {
        resolve(self.address(), self.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn decode_inverts_encode(address in any::<usize>()) {
            let (hi, lo) = encode(address);
            prop_assert_eq!(decode(hi, lo), address);
        }

        #[test]
        fn non_positive_length_never_resolves(address in any::<usize>(), length in i32::MIN..=0) {
            let view = unsafe { resolve(address, length) };
            prop_assert!(view.is_none());
        }
    }

    #[test]
    fn null_address_round_trips_and_never_resolves() {
        assert_eq!(encode(0), (0, 0));
        assert_eq!(decode(0, 0), 0);
        assert!(unsafe { resolve(0, 16) }.is_none());
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn words_split_at_bit_32() {
        let (hi, lo) = encode(0x1234_5678_9abc_def0);
        assert_eq!(hi as u32, 0x1234_5678);
        assert_eq!(lo as u32, 0x9abc_def0);
    }

    #[test]
    fn descriptor_views_the_same_bytes() {
        let data = vec![1u8, 2, 3, 4, 5];
        let d = HandoffDescriptor::for_slice(&data).unwrap();
        let mut vars = VariableTable::new();
        d.store(&mut vars);

        let back = HandoffDescriptor::from_variables(&vars);
        assert_eq!(back, d);
        let view = unsafe { back.resolve() }.unwrap();
        assert_eq!(view, &data[..]);
        assert_eq!(view.as_ptr(), data.as_ptr());
    }
}

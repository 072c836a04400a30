//! Fixed-width integer arithmetic.
//!
//! The unsigned core lives in [`uint`]; the two's-complement signed twin in
//! [`int`]. Both are plain value types over an array of 32-bit [`Limb`]s and
//! share one storage layout, which is what lets the signed type delegate its
//! sign-agnostic operations to the unsigned one by reinterpretation.

use alloc::vec::Vec;
use core::{
    fmt::{Debug, Display},
    hash::Hash,
    ops::{
        Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor,
        BitXorAssign, Div, Mul, MulAssign, Neg, Not, Rem, Shl, ShlAssign,
        Shr, ShrAssign, Sub, SubAssign,
    },
};

use zeroize::Zeroize;

pub mod int;
pub mod limb;
pub mod parse;
pub mod uint;

pub use int::Int;
pub use limb::{Limb, Limbs, WideLimb};
pub use uint::{Uint, WideUint};

/// Defines an integer with a constant width.
///
/// Implemented by both [`Uint`] and [`Int`]; the operations here are the
/// sign-agnostic ones, where the two types act on the same bit pattern the
/// same way.
pub trait FixedInteger:
    'static
    + Copy
    + Clone
    + Debug
    + Default
    + Display
    + Eq
    + Ord
    + Hash
    + Send
    + Sized
    + Sync
    + Zeroize
    + Not<Output = Self>
    + Neg<Output = Self>
    + Add<Self, Output = Self>
    + AddAssign<Self>
    + Sub<Self, Output = Self>
    + SubAssign<Self>
    + Mul<Self, Output = Self>
    + MulAssign<Self>
    + Div<Self, Output = Self>
    + Rem<Self, Output = Self>
    + BitXor<Self, Output = Self>
    + BitXorAssign<Self>
    + BitAnd<Self, Output = Self>
    + BitAndAssign<Self>
    + BitOr<Self, Output = Self>
    + BitOrAssign<Self>
    + Shl<u32, Output = Self>
    + ShlAssign<u32>
    + Shr<u32, Output = Self>
    + ShrAssign<u32>
{
    /// Number of [`Limb`]s representing `Self`.
    const NUM_LIMBS: usize;

    /// Width of the integer in bits.
    const BITS: usize = Self::NUM_LIMBS * Limb::BITS as usize;

    /// Width of the integer in bytes.
    const BYTES: usize = Self::NUM_LIMBS * (Limb::BITS as usize / 8);

    /// Returns true if this number is zero.
    fn is_zero(&self) -> bool;

    /// Returns true if this number is odd.
    fn is_odd(&self) -> bool;

    /// Returns true if this number is even.
    fn is_even(&self) -> bool;

    /// Compute the minimum number of bits needed to encode the bit pattern
    /// of this number, i.e. one past the index of the highest set bit.
    fn num_bits(&self) -> usize;

    /// Compute the `i`-th bit of `self`. Out-of-range indices read as
    /// `false`.
    fn get_bit(&self, i: usize) -> bool;

    /// Set the `i`-th bit of `self` to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= Self::BITS`.
    fn set_bit(&mut self, i: usize, value: bool);

    /// Create an integer from little-endian bytes.
    ///
    /// # Panics
    ///
    /// Panics if the number of bytes is not equal to `Self::BYTES`.
    fn from_bytes_le(bytes: &[u8]) -> Self;

    /// Create an integer from big-endian bytes, most significant byte first.
    ///
    /// # Panics
    ///
    /// Panics if the number of bytes is not equal to `Self::BYTES`.
    fn from_bytes_be(bytes: &[u8]) -> Self;

    /// Convert the integer to little-endian bytes.
    fn into_bytes_le(self) -> Vec<u8>;

    /// Convert the integer to big-endian bytes.
    fn into_bytes_be(self) -> Vec<u8>;
}

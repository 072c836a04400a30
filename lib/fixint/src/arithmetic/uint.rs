//! This module contains the [`Uint`] fixed-width unsigned big integer,
//! together with its exact-width aliases [`U64`] for 64 bits, [`U128`] for
//! 128 bits, and so on.
//!
//! Values are stored as `N` 32-bit limbs, least significant limb first.
//! Arithmetic wraps modulo `2^BITS`, matching the overflow behavior of the
//! native unsigned integer types; the `checked_*` and `overflowing_*`
//! families expose the carries explicitly.

use alloc::{string::String, vec::Vec};
use core::{
    borrow::Borrow,
    cmp::Ordering,
    fmt::{Binary, Debug, Display, LowerHex, Octal, Result, UpperHex},
    ops::{
        Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor,
        BitXorAssign, Div, DivAssign, Mul, MulAssign, Neg, Not, Rem,
        RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
    },
};

use zeroize::Zeroize;

use crate::{
    arithmetic::{
        limb,
        limb::{Limb, Limbs, WideLimb},
        FixedInteger,
    },
    bits::BitIteratorBE,
    const_for, const_for_rev,
};

/// Stack-allocated big unsigned integer.
///
/// Generic over the number `N` of [`Limb`]s.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Zeroize)]
pub struct Uint<const N: usize> {
    pub(crate) limbs: Limbs<N>,
}

impl<const N: usize> Default for Uint<N> {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Declare [`Uint`] types for different bit sizes.
macro_rules! declare_num {
    ($num:ident, $bits:expr) => {
        #[doc = "Unsigned integer with "]
        #[doc = stringify!($bits)]
        #[doc = "bits size."]
        pub type $num = $crate::arithmetic::uint::Uint<
            { usize::div_ceil($bits, $crate::arithmetic::Limb::BITS as usize) },
        >;
    };
}

declare_num!(U32, 32);
declare_num!(U64, 64);
declare_num!(U96, 96);
declare_num!(U128, 128);
declare_num!(U160, 160);
declare_num!(U192, 192);
declare_num!(U256, 256);
declare_num!(U384, 384);
declare_num!(U512, 512);

impl<const N: usize> Uint<N> {
    /// Width of the integer in bits. Always a multiple of 32.
    pub const BITS: usize = N * Limb::BITS as usize;
    /// Width of the integer in bytes.
    pub const BYTES: usize = N * (Limb::BITS as usize / 8);
    /// The largest value, `2^BITS - 1`.
    pub const MAX: Self = Self { limbs: [Limb::MAX; N] };
    /// The value `1`.
    pub const ONE: Self = {
        let mut one = Self::ZERO;
        one.limbs[0] = 1;
        one
    };
    /// The value `0`.
    pub const ZERO: Self = Self { limbs: [0; N] };

    /// Create a new [`Uint`] from the provided `limbs`, least significant
    /// limb first.
    #[must_use]
    pub const fn new(limbs: [Limb; N]) -> Self {
        assert!(N >= 1, "number of limbs must be greater than zero");
        Self { limbs }
    }

    /// Returns a reference to the inner [`Limbs`] array.
    #[must_use]
    pub const fn as_limbs(&self) -> &Limbs<N> {
        &self.limbs
    }

    /// Returns true if this number is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        const_for!((i in 0..N) {
            if self.limbs[i] != 0 {
                return false;
            }
        });
        true
    }

    /// Returns true if this number is odd.
    #[inline]
    #[must_use]
    pub const fn is_odd(&self) -> bool {
        self.limbs[0] & 1 == 1
    }

    /// Returns true if this number is even.
    #[inline]
    #[must_use]
    pub const fn is_even(&self) -> bool {
        self.limbs[0] & 1 == 0
    }

    /// Return the minimum number of bits needed to encode this number,
    /// i.e. one past the index of the highest set bit. Zero encodes in zero
    /// bits.
    #[must_use]
    pub const fn num_bits(&self) -> usize {
        Self::BITS - self.leading_zeros() as usize
    }

    /// Returns the number of leading zero bits.
    #[must_use]
    pub const fn leading_zeros(&self) -> u32 {
        let mut count = 0;
        const_for_rev!((i in 0..N) {
            let leading = self.limbs[i].leading_zeros();
            count += leading;
            if leading != Limb::BITS {
                return count;
            }
        });
        count
    }

    /// Returns the number of trailing zero bits.
    #[must_use]
    pub const fn trailing_zeros(&self) -> u32 {
        let mut count = 0;
        const_for!((i in 0..N) {
            let trailing = self.limbs[i].trailing_zeros();
            count += trailing;
            if trailing != Limb::BITS {
                return count;
            }
        });
        count
    }

    /// Returns the number of set bits.
    #[must_use]
    pub const fn count_ones(&self) -> u32 {
        let mut count = 0;
        const_for!((i in 0..N) {
            count += self.limbs[i].count_ones();
        });
        count
    }

    /// Find the `i`-th bit of `self`. Out-of-range indices read as `false`.
    #[must_use]
    pub const fn get_bit(&self, i: usize) -> bool {
        if i >= Self::BITS {
            return false;
        }

        let bits_in_limb = Limb::BITS as usize;
        let limb = i / bits_in_limb;
        let bit = i - bits_in_limb * limb;
        (self.limbs[limb] >> bit) & 1 == 1
    }

    /// Set the `i`-th bit of `self` to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= Self::BITS`.
    pub const fn set_bit(&mut self, i: usize, value: bool) {
        assert!(i < Self::BITS, "bit index out of range");

        let bits_in_limb = Limb::BITS as usize;
        let limb = i / bits_in_limb;
        let mask = 1 << (i - bits_in_limb * limb);
        if value {
            self.limbs[limb] |= mask;
        } else {
            self.limbs[limb] &= !mask;
        }
    }

    /// Read the `i`-th byte, with byte 0 the least significant.
    ///
    /// # Panics
    ///
    /// Panics if `i >= Self::BYTES`.
    #[must_use]
    pub const fn byte(&self, i: usize) -> u8 {
        assert!(i < Self::BYTES, "byte index out of range");
        (self.limbs[i / 4] >> (8 * (i % 4))) as u8
    }

    /// Set the `i`-th byte, with byte 0 the least significant.
    ///
    /// # Panics
    ///
    /// Panics if `i >= Self::BYTES`.
    pub const fn set_byte(&mut self, i: usize, value: u8) {
        assert!(i < Self::BYTES, "byte index out of range");
        let shift = 8 * (i % 4);
        let limb = &mut self.limbs[i / 4];
        *limb = (*limb & !(0xFF << shift)) | ((value as Limb) << shift);
    }

    /// Read the `i`-th nybble (4-bit group), with nybble 0 the least
    /// significant.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 2 * Self::BYTES`.
    #[must_use]
    pub const fn nybble(&self, i: usize) -> u8 {
        assert!(i < 2 * Self::BYTES, "nybble index out of range");
        ((self.limbs[i / 8] >> (4 * (i % 8))) & 0xF) as u8
    }

    /// Set the `i`-th nybble (4-bit group), with nybble 0 the least
    /// significant. Only the low 4 bits of `value` are used.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 2 * Self::BYTES`.
    pub const fn set_nybble(&mut self, i: usize, value: u8) {
        assert!(i < 2 * Self::BYTES, "nybble index out of range");
        let shift = 4 * (i % 8);
        let limb = &mut self.limbs[i / 8];
        *limb = (*limb & !(0xF << shift)) | (((value & 0xF) as Limb) << shift);
    }

    /// Computes `self + rhs + carry`, returning the result along with the
    /// new carry.
    #[inline]
    #[must_use]
    pub const fn adc(&self, rhs: &Self, mut carry: Limb) -> (Self, Limb) {
        let mut limbs = [0; N];

        const_for!((i in 0..N) {
            (limbs[i], carry) = limb::adc(self.limbs[i], rhs.limbs[i], carry);
        });

        (Self { limbs }, carry)
    }

    /// Add `rhs` to `self`, returning the result and whether overflow
    /// occurred.
    #[inline]
    #[must_use]
    pub const fn overflowing_add(&self, rhs: &Self) -> (Self, bool) {
        let (result, carry) = self.adc(rhs, 0);
        (result, carry != 0)
    }

    /// Add `rhs` to `self`, wrapping around the upper boundary.
    #[inline]
    #[must_use]
    pub const fn wrapping_add(&self, rhs: &Self) -> Self {
        self.adc(rhs, 0).0
    }

    /// Add `rhs` to `self`, returning `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, rhs: &Self) -> Option<Self> {
        let (result, overflow) = self.overflowing_add(rhs);
        if overflow {
            None
        } else {
            Some(result)
        }
    }

    /// Add `rhs` to `self` in-place, returning whether overflow occurred.
    #[inline]
    pub fn overflowing_add_assign(&mut self, rhs: &Self) -> bool {
        let mut carry = false;

        for i in 0..N {
            carry = limb::adc_assign(&mut self.limbs[i], rhs.limbs[i], carry);
        }

        carry
    }

    /// Subtract `rhs` from `self`, returning the result and whether the
    /// subtraction underflowed.
    #[inline]
    #[must_use]
    pub const fn overflowing_sub(&self, rhs: &Self) -> (Self, bool) {
        let mut result = *self;
        let mut borrow = 0;

        const_for!((i in 0..N) {
            (result.limbs[i], borrow) =
                limb::sbb(result.limbs[i], rhs.limbs[i], borrow);
        });

        (result, borrow != 0)
    }

    /// Subtract `rhs` from `self`, wrapping around the lower boundary.
    #[inline]
    #[must_use]
    pub const fn wrapping_sub(&self, rhs: &Self) -> Self {
        self.overflowing_sub(rhs).0
    }

    /// Subtract `rhs` from `self`, returning `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        let (result, underflow) = self.overflowing_sub(rhs);
        if underflow {
            None
        } else {
            Some(result)
        }
    }

    /// Subtract `rhs` from `self` in-place, returning whether the
    /// subtraction underflowed.
    #[inline]
    pub fn overflowing_sub_assign(&mut self, rhs: &Self) -> bool {
        let mut borrow = false;

        for i in 0..N {
            borrow =
                limb::sbb_assign(&mut self.limbs[i], rhs.limbs[i], borrow);
        }

        borrow
    }

    /// Two's complement negation, `!self + 1`. The additive inverse modulo
    /// `2^BITS`; `Uint::ZERO` and the value `2^(BITS-1)` are their own
    /// inverses.
    #[must_use]
    pub const fn wrapping_neg(&self) -> Self {
        let mut result = Self::ZERO;
        const_for!((i in 0..N) {
            result.limbs[i] = !self.limbs[i];
        });
        result.overflowing_add_limb(1).0
    }

    /// Add a single limb to `self`, returning the result and whether
    /// overflow occurred.
    #[inline]
    #[must_use]
    pub const fn overflowing_add_limb(&self, rhs: Limb) -> (Self, bool) {
        let mut result = *self;
        let mut carry = rhs;

        const_for!((i in 0..N) {
            (result.limbs[i], carry) = limb::adc(result.limbs[i], carry, 0);
        });

        (result, carry != 0)
    }

    /// Multiply `self` by `2` in place, returning whether the top bit was
    /// shifted out.
    #[inline]
    pub const fn overflowing_mul2_assign(&mut self) -> bool {
        let mut last = 0;
        const_for!((i in 0..N) {
            let tmp = self.limbs[i] >> (Limb::BITS - 1);
            self.limbs[i] <<= 1;
            self.limbs[i] |= last;
            last = tmp;
        });
        last != 0
    }

    /// Compute "wide" multiplication, with a product twice the size of the
    /// inputs: `(lo, hi)`.
    ///
    /// Schoolbook limb-by-limb multiplication; each partial product is
    /// accumulated with [`limb::carrying_mac`].
    #[inline]
    #[must_use]
    pub const fn widening_mul(&self, rhs: &Self) -> (Self, Self) {
        let (mut lo, mut hi) = ([0; N], [0; N]);
        const_for!((i in 0..N) {
            let mut carry = 0;
            const_for!((j in 0..N) {
                let k = i + j;
                if k >= N {
                    (hi[k - N], carry) = limb::carrying_mac(
                        hi[k - N],
                        self.limbs[i],
                        rhs.limbs[j],
                        carry,
                    );
                } else {
                    (lo[k], carry) = limb::carrying_mac(
                        lo[k],
                        self.limbs[i],
                        rhs.limbs[j],
                        carry,
                    );
                }
            });
            hi[i] = carry;
        });

        (Self::new(lo), Self::new(hi))
    }

    /// Multiply `self` by `rhs`, returning the low half of the product and
    /// whether the high half was nonzero.
    #[must_use]
    pub const fn overflowing_mul(&self, rhs: &Self) -> (Self, bool) {
        let (lo, hi) = self.widening_mul(rhs);
        (lo, !hi.is_zero())
    }

    /// Multiply `self` by `rhs`, wrapping around the upper boundary.
    #[must_use]
    pub const fn wrapping_mul(&self, rhs: &Self) -> Self {
        self.widening_mul(rhs).0
    }

    /// Multiply `self` by `rhs`, returning `None` on overflow.
    #[must_use]
    pub const fn checked_mul(&self, rhs: &Self) -> Option<Self> {
        let (result, overflow) = self.overflowing_mul(rhs);
        if overflow {
            None
        } else {
            Some(result)
        }
    }

    /// Multiply `self` by a single limb, returning the low `BITS` of the
    /// product and the carried-out high limb.
    #[inline]
    #[must_use]
    pub const fn overflowing_mul_limb(&self, rhs: Limb) -> (Self, Limb) {
        let mut result = Self::ZERO;
        let mut carry = 0;

        const_for!((i in 0..N) {
            (result.limbs[i], carry) =
                limb::carrying_mac(0, self.limbs[i], rhs, carry);
        });

        (result, carry)
    }

    /// Multiply `self` by a single limb, wrapping around the upper boundary.
    #[inline]
    #[must_use]
    pub const fn wrapping_mul_limb(&self, rhs: Limb) -> Self {
        self.overflowing_mul_limb(rhs).0
    }

    /// Divide `self` by `divisor`, returning the quotient and remainder.
    ///
    /// Restoring binary long division: the divisor is aligned with the
    /// dividend's highest set bit, then walked back down one bit of quotient
    /// per step.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    #[must_use]
    pub fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        assert!(!divisor.is_zero(), "division by zero");

        if self < divisor {
            return (Self::ZERO, *self);
        }

        let shift = self.num_bits() - divisor.num_bits();
        let mut divisor = *divisor << shift as u32;
        let mut remainder = *self;
        let mut quotient = Self::ZERO;

        for bit in (0..=shift).rev() {
            if remainder >= divisor {
                remainder = remainder.wrapping_sub(&divisor);
                quotient.set_bit(bit, true);
            }
            divisor >>= 1;
        }

        (quotient, remainder)
    }

    /// Divide `self` by `divisor`, returning the quotient and remainder, or
    /// `None` if `divisor` is zero.
    #[must_use]
    pub fn checked_div_rem(&self, divisor: &Self) -> Option<(Self, Self)> {
        if divisor.is_zero() {
            None
        } else {
            Some(self.div_rem(divisor))
        }
    }

    /// Divide `self` by `divisor`, returning the quotient, or `None` if
    /// `divisor` is zero.
    #[must_use]
    pub fn checked_div(&self, divisor: &Self) -> Option<Self> {
        self.checked_div_rem(divisor).map(|(q, _)| q)
    }

    /// Compute `self % divisor`, or `None` if `divisor` is zero.
    #[must_use]
    pub fn checked_rem(&self, divisor: &Self) -> Option<Self> {
        self.checked_div_rem(divisor).map(|(_, r)| r)
    }

    /// Divide `self` by a single limb, returning the quotient and remainder.
    ///
    /// Processes one limb at a time with a [`WideLimb`] intermediate, much
    /// faster than the general bit-by-bit division.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    #[must_use]
    pub const fn div_rem_limb(&self, divisor: Limb) -> (Self, Limb) {
        assert!(divisor != 0, "division by zero");

        let mut quotient = Self::ZERO;
        let mut remainder: WideLimb = 0;

        const_for_rev!((i in 0..N) {
            let acc = (remainder << Limb::BITS) | self.limbs[i] as WideLimb;
            quotient.limbs[i] = (acc / divisor as WideLimb) as Limb;
            remainder = acc % divisor as WideLimb;
        });

        (quotient, remainder as Limb)
    }

    /// Rotate `self` right by `n` bits; bits shifted out of the low end
    /// reenter at the high end. `n` is reduced modulo `BITS`.
    #[must_use]
    pub fn rotate_right(&self, n: u32) -> Self {
        let n = n % Self::BITS as u32;
        if n == 0 {
            return *self;
        }
        (*self >> n) | (*self << (Self::BITS as u32 - n))
    }

    /// The low 32 bits of `self`.
    #[inline]
    #[must_use]
    pub const fn low_u32(&self) -> u32 {
        self.limbs[0]
    }

    /// The low 64 bits of `self`.
    #[inline]
    #[must_use]
    pub const fn low_u64(&self) -> u64 {
        let mut out = self.limbs[0] as u64;
        if N > 1 {
            out |= (self.limbs[1] as u64) << 32;
        }
        out
    }

    /// The low 128 bits of `self`.
    #[must_use]
    pub const fn low_u128(&self) -> u128 {
        let mut out = 0u128;
        let top = if N < 4 { N } else { 4 };
        const_for!((i in 0..top) {
            out |= (self.limbs[i] as u128) << (32 * i);
        });
        out
    }

    /// Compare `self` against a native 128-bit value.
    #[must_use]
    pub fn cmp_u128(&self, rhs: u128) -> Ordering {
        if self.num_bits() > 128 {
            return Ordering::Greater;
        }
        self.low_u128().cmp(&rhs)
    }

    /// Create a [`Uint`] from an `f64`, truncating toward zero.
    ///
    /// NaN and ±infinity produce zero. A negative source is converted from
    /// its magnitude and then negated (two's complement). Bits that fall at
    /// or beyond position `BITS` are silently dropped.
    #[must_use]
    pub fn from_f64(value: f64) -> Self {
        const MANTISSA_BITS: i32 = 52;
        const EXPONENT_MASK: u64 = 0x7FF;
        const EXPONENT_BIAS: i32 = 1023;

        let bits = value.to_bits();
        let biased = ((bits >> MANTISSA_BITS) & EXPONENT_MASK) as i32;
        if biased == EXPONENT_MASK as i32 {
            // NaN or infinity.
            return Self::ZERO;
        }

        let exponent = biased - EXPONENT_BIAS;
        if biased == 0 || exponent < 0 {
            // Subnormal or |value| < 1; truncates to zero.
            return Self::ZERO;
        }

        let mantissa = bits & ((1 << MANTISSA_BITS) - 1);
        let significand = Self::from(mantissa | (1 << MANTISSA_BITS));
        let magnitude = if exponent >= MANTISSA_BITS {
            significand << (exponent - MANTISSA_BITS) as u32
        } else {
            significand >> (MANTISSA_BITS - exponent) as u32
        };

        if value.is_sign_negative() {
            magnitude.wrapping_neg()
        } else {
            magnitude
        }
    }

    /// Create a [`Uint`] from an `f32`, truncating toward zero. Same
    /// contract as [`Self::from_f64`].
    #[must_use]
    pub fn from_f32(value: f32) -> Self {
        Self::from_f64(f64::from(value))
    }

    /// Approximate `self` as an `f64`.
    ///
    /// Horner accumulation from the most significant limb down; values wider
    /// than the `f64` mantissa lose precision.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(&self) -> f64 {
        const LIMB_BASE: f64 = (1u64 << Limb::BITS) as f64;
        let mut acc = 0.0;
        for &limb in self.limbs.iter().rev() {
            acc = acc * LIMB_BASE + f64::from(limb);
        }
        acc
    }

    /// Approximate `self` as an `f32`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_f32(&self) -> f32 {
        self.to_f64() as f32
    }

    /// Create a new [`Uint`] from the provided little endian bytes.
    ///
    /// # Panics
    ///
    /// Panics if `bytes.len() != Self::BYTES`.
    #[must_use]
    pub const fn from_bytes_le(bytes: &[u8]) -> Self {
        const LIMB_BYTES: usize = Limb::BITS as usize / 8;
        assert!(
            bytes.len() == LIMB_BYTES * N,
            "bytes are not the expected size"
        );

        let mut limbs = [0; N];
        let mut buf = [0u8; LIMB_BYTES];

        const_for!((i in 0..N) {
            const_for!((j in 0..LIMB_BYTES) {
                buf[j] = bytes[i * LIMB_BYTES + j];
            });
            limbs[i] = Limb::from_le_bytes(buf);
        });

        Self::new(limbs)
    }

    /// Create a new [`Uint`] from the provided big endian bytes, most
    /// significant byte first.
    ///
    /// # Panics
    ///
    /// Panics if `bytes.len() != Self::BYTES`.
    #[must_use]
    pub const fn from_bytes_be(bytes: &[u8]) -> Self {
        const LIMB_BYTES: usize = Limb::BITS as usize / 8;
        assert!(
            bytes.len() == LIMB_BYTES * N,
            "bytes are not the expected size"
        );

        let mut limbs = [0; N];
        let mut buf = [0u8; LIMB_BYTES];

        const_for!((i in 0..N) {
            const_for!((j in 0..LIMB_BYTES) {
                buf[j] = bytes[(N - 1 - i) * LIMB_BYTES + j];
            });
            limbs[i] = Limb::from_be_bytes(buf);
        });

        Self::new(limbs)
    }

    /// Convert `self` to little endian bytes.
    #[must_use]
    pub fn into_bytes_le(self) -> Vec<u8> {
        self.limbs.iter().flat_map(|&limb| limb.to_le_bytes()).collect()
    }

    /// Convert `self` to big endian bytes.
    #[must_use]
    pub fn into_bytes_be(self) -> Vec<u8> {
        self.limbs.iter().rev().flat_map(|&limb| limb.to_be_bytes()).collect()
    }

    /// Format `self` in the given radix.
    ///
    /// # Panics
    ///
    /// Panics if `radix` is not in `2..=36`.
    #[must_use]
    pub fn to_str_radix(&self, radix: u32) -> String {
        const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
        assert!((2..=36).contains(&radix), "radix must be in 2..=36");

        if self.is_zero() {
            return String::from("0");
        }

        let mut digits = Vec::new();
        let mut value = *self;
        while !value.is_zero() {
            let (quotient, digit) = value.div_rem_limb(radix);
            digits.push(DIGITS[digit as usize]);
            value = quotient;
        }

        digits.iter().rev().map(|&b| b as char).collect()
    }
}

// ----------- From Impls -----------

/// Constant constructors from primitives no wider than a limb.
macro_rules! impl_from_narrow_primitive {
    ($int:ty, $func_name:ident) => {
        impl<const N: usize> Uint<N> {
            #[doc = "Create a [`Uint`] from a"]
            #[doc = stringify!($int)]
            #[doc = "integer."]
            #[must_use]
            #[allow(clippy::cast_lossless)]
            pub const fn $func_name(value: $int) -> Self {
                assert!(N >= 1, "number of limbs must be greater than zero");
                let mut repr = Self::ZERO;
                repr.limbs[0] = value as Limb;
                repr
            }
        }
    };
}

impl_from_narrow_primitive!(u8, from_u8);
impl_from_narrow_primitive!(u16, from_u16);
impl_from_narrow_primitive!(u32, from_u32);

impl<const N: usize> Uint<N> {
    /// Create a [`Uint`] from a `u64` integer. If `N == 1`, the high 32 bits
    /// are truncated away.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_u64(value: u64) -> Self {
        assert!(N >= 1, "number of limbs must be greater than zero");
        let mut repr = Self::ZERO;
        repr.limbs[0] = value as Limb;
        if N >= 2 {
            repr.limbs[1] = (value >> 32) as Limb;
        }
        repr
    }

    /// Create a [`Uint`] from a `usize` integer, truncating if the pointer
    /// width exceeds `BITS`.
    #[must_use]
    pub const fn from_usize(value: usize) -> Self {
        Self::from_u64(value as u64)
    }

    /// Create a [`Uint`] from a `u128` integer, truncating the part that
    /// does not fit.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_u128(value: u128) -> Self {
        assert!(N >= 1, "number of limbs must be greater than zero");
        let mut repr = Self::ZERO;
        let top = if N < 4 { N } else { 4 };
        const_for!((i in 0..top) {
            repr.limbs[i] = (value >> (32 * i)) as Limb;
        });
        repr
    }

    /// Create a [`Uint`] from an `i64`, sign-extending into the high limbs.
    /// `from_i64(-1)` is `Uint::MAX`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn from_i64(value: i64) -> Self {
        assert!(N >= 1, "number of limbs must be greater than zero");
        let fill = if value < 0 { Limb::MAX } else { 0 };
        let mut repr = Self { limbs: [fill; N] };
        let magnitude = value as u64;
        repr.limbs[0] = magnitude as Limb;
        if N >= 2 {
            repr.limbs[1] = (magnitude >> 32) as Limb;
        }
        repr
    }

    /// Create a [`Uint`] from an `i128`, sign-extending into the high limbs.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn from_i128(value: i128) -> Self {
        assert!(N >= 1, "number of limbs must be greater than zero");
        let fill = if value < 0 { Limb::MAX } else { 0 };
        let mut repr = Self { limbs: [fill; N] };
        let magnitude = value as u128;
        let top = if N < 4 { N } else { 4 };
        const_for!((i in 0..top) {
            repr.limbs[i] = (magnitude >> (32 * i)) as Limb;
        });
        repr
    }
}

/// `From` trait implementations for primitives.
macro_rules! impl_from_primitive {
    ($int:ty, $func_name:ident) => {
        impl<const N: usize> From<$int> for Uint<N> {
            #[inline]
            fn from(value: $int) -> Uint<N> {
                Uint::<N>::$func_name(value)
            }
        }
    };
}

impl_from_primitive!(u8, from_u8);
impl_from_primitive!(u16, from_u16);
impl_from_primitive!(u32, from_u32);
impl_from_primitive!(u64, from_u64);
impl_from_primitive!(u128, from_u128);
impl_from_primitive!(usize, from_usize);

/// `From` trait implementations for signed primitives; negative values
/// sign-extend, matching an `as` cast between native widths.
macro_rules! impl_from_signed_primitive {
    ($int:ty) => {
        impl<const N: usize> From<$int> for Uint<N> {
            #[inline]
            fn from(value: $int) -> Uint<N> {
                Uint::<N>::from_i64(i64::from(value))
            }
        }
    };
}

impl_from_signed_primitive!(i8);
impl_from_signed_primitive!(i16);
impl_from_signed_primitive!(i32);
impl_from_signed_primitive!(i64);

impl<const N: usize> From<i128> for Uint<N> {
    #[inline]
    fn from(value: i128) -> Uint<N> {
        Uint::<N>::from_i128(value)
    }
}

impl<const N: usize> From<Limbs<N>> for Uint<N> {
    #[inline]
    fn from(limbs: Limbs<N>) -> Uint<N> {
        Uint::new(limbs)
    }
}

impl<const N: usize> From<Uint<N>> for Limbs<N> {
    #[inline]
    fn from(value: Uint<N>) -> Limbs<N> {
        value.limbs
    }
}

// ----------- Traits Impls -----------

impl<const N: usize> num_traits::Zero for Uint<N> {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        Uint::is_zero(self)
    }
}

impl<const N: usize> num_traits::ConstZero for Uint<N> {
    const ZERO: Self = Self::ZERO;
}

impl<const N: usize> num_traits::One for Uint<N> {
    fn one() -> Self {
        Self::ONE
    }
}

impl<const N: usize> num_traits::ConstOne for Uint<N> {
    const ONE: Self = Self::ONE;
}

impl<const N: usize> Ord for Uint<N> {
    #[inline]
    fn cmp(&self, rhs: &Self) -> Ordering {
        for i in (0..N).rev() {
            match self.limbs[i].cmp(&rhs.limbs[i]) {
                Ordering::Equal => {}
                order => return order,
            }
        }

        Ordering::Equal
    }
}

impl<const N: usize> PartialOrd for Uint<N> {
    #[inline]
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

/// Mixed comparisons against native unsigned integers.
macro_rules! impl_primitive_cmp {
    ($int:ty) => {
        impl<const N: usize> PartialEq<$int> for Uint<N> {
            #[inline]
            fn eq(&self, other: &$int) -> bool {
                self.cmp_u128(u128::from(*other)) == Ordering::Equal
            }
        }

        impl<const N: usize> PartialOrd<$int> for Uint<N> {
            #[inline]
            fn partial_cmp(&self, other: &$int) -> Option<Ordering> {
                Some(self.cmp_u128(u128::from(*other)))
            }
        }

        impl<const N: usize> PartialEq<Uint<N>> for $int {
            #[inline]
            fn eq(&self, other: &Uint<N>) -> bool {
                other == self
            }
        }

        impl<const N: usize> PartialOrd<Uint<N>> for $int {
            #[inline]
            fn partial_cmp(&self, other: &Uint<N>) -> Option<Ordering> {
                Some(other.cmp_u128(u128::from(*self)).reverse())
            }
        }
    };
}

impl_primitive_cmp!(u32);
impl_primitive_cmp!(u64);
impl_primitive_cmp!(u128);

impl<const N: usize> AsMut<[Limb]> for Uint<N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [Limb] {
        &mut self.limbs
    }
}

impl<const N: usize> AsRef<[Limb]> for Uint<N> {
    #[inline]
    fn as_ref(&self) -> &[Limb] {
        &self.limbs
    }
}

impl<B: Borrow<Self>, const N: usize> BitXorAssign<B> for Uint<N> {
    fn bitxor_assign(&mut self, rhs: B) {
        for i in 0..N {
            self.limbs[i] ^= rhs.borrow().limbs[i];
        }
    }
}

impl<B: Borrow<Self>, const N: usize> BitXor<B> for Uint<N> {
    type Output = Self;

    fn bitxor(mut self, rhs: B) -> Self::Output {
        self ^= rhs;
        self
    }
}

impl<B: Borrow<Self>, const N: usize> BitAndAssign<B> for Uint<N> {
    fn bitand_assign(&mut self, rhs: B) {
        for i in 0..N {
            self.limbs[i] &= rhs.borrow().limbs[i];
        }
    }
}

impl<B: Borrow<Self>, const N: usize> BitAnd<B> for Uint<N> {
    type Output = Self;

    fn bitand(mut self, rhs: B) -> Self::Output {
        self &= rhs;
        self
    }
}

impl<B: Borrow<Self>, const N: usize> BitOrAssign<B> for Uint<N> {
    fn bitor_assign(&mut self, rhs: B) {
        for i in 0..N {
            self.limbs[i] |= rhs.borrow().limbs[i];
        }
    }
}

impl<B: Borrow<Self>, const N: usize> BitOr<B> for Uint<N> {
    type Output = Self;

    fn bitor(mut self, rhs: B) -> Self::Output {
        self |= rhs;
        self
    }
}

impl<const N: usize> Not for Uint<N> {
    type Output = Self;

    fn not(self) -> Self::Output {
        let mut result = Self::ZERO;
        for i in 0..N {
            result.limbs[i] = !self.limbs[i];
        }
        result
    }
}

impl<const N: usize> Neg for Uint<N> {
    type Output = Self;

    /// Two's complement negation, see [`Uint::wrapping_neg`].
    fn neg(self) -> Self::Output {
        self.wrapping_neg()
    }
}

impl<const N: usize> ShlAssign<u32> for Uint<N> {
    /// Computes the bitwise shift left operation in place.
    ///
    /// Differently from the built-in numeric types (u8, u32, u64, etc.) this
    /// operation does *not* return an overflow error if the number of bits
    /// shifted is larger than `BITS`. Instead, the overflow will be chopped
    /// off.
    fn shl_assign(&mut self, mut rhs: u32) {
        if rhs >= Self::BITS as u32 {
            *self = Self::ZERO;
            return;
        }

        while rhs >= Limb::BITS {
            let mut t = 0;
            for i in 0..N {
                core::mem::swap(&mut t, &mut self.limbs[i]);
            }
            rhs -= Limb::BITS;
        }

        if rhs > 0 {
            let mut t = 0;
            for i in 0..N {
                let a = &mut self.limbs[i];
                let t2 = *a >> (Limb::BITS - rhs);
                *a <<= rhs;
                *a |= t;
                t = t2;
            }
        }
    }
}

impl<const N: usize> Shl<u32> for Uint<N> {
    type Output = Self;

    /// Computes the bitwise shift left operation, chopping off overflowing
    /// bits; shifting by `BITS` or more yields zero.
    fn shl(mut self, rhs: u32) -> Self::Output {
        self <<= rhs;
        self
    }
}

impl<const N: usize> ShrAssign<u32> for Uint<N> {
    /// Computes the bitwise shift right operation in place.
    ///
    /// Differently from the built-in numeric types (u8, u32, u64, etc.) this
    /// operation does *not* return an underflow error if the number of bits
    /// shifted is larger than `BITS`. Instead the result saturates to zero.
    fn shr_assign(&mut self, mut rhs: u32) {
        if rhs >= Self::BITS as u32 {
            *self = Self::ZERO;
            return;
        }

        while rhs >= Limb::BITS {
            let mut t = 0;
            for limb in self.limbs.iter_mut().rev() {
                core::mem::swap(&mut t, limb);
            }
            rhs -= Limb::BITS;
        }

        if rhs > 0 {
            let mut t = 0;
            for a in self.limbs.iter_mut().rev() {
                let t2 = *a << (Limb::BITS - rhs);
                *a >>= rhs;
                *a |= t;
                t = t2;
            }
        }
    }
}

impl<const N: usize> Shr<u32> for Uint<N> {
    type Output = Self;

    /// Computes the bitwise shift right operation, filling vacated high bits
    /// with zero; shifting by `BITS` or more yields zero.
    fn shr(mut self, rhs: u32) -> Self::Output {
        self >>= rhs;
        self
    }
}

/// Arithmetic operators, all wrapping modulo `2^BITS`, for `Self`, `&Self`
/// and single-[`Limb`] operands.
macro_rules! impl_binop {
    ($op:ident, $op_assign:ident, $func:ident, $func_assign:ident, $inner:ident, $limb_inner:ident) => {
        impl<const N: usize> $op<Self> for Uint<N> {
            type Output = Self;

            fn $func(self, rhs: Self) -> Self::Output {
                self.$inner(&rhs)
            }
        }

        impl<const N: usize> $op<&Self> for Uint<N> {
            type Output = Self;

            fn $func(self, rhs: &Self) -> Self::Output {
                self.$inner(rhs)
            }
        }

        impl<const N: usize> $op<Limb> for Uint<N> {
            type Output = Self;

            fn $func(self, rhs: Limb) -> Self::Output {
                self.$limb_inner(rhs)
            }
        }

        impl<const N: usize> $op_assign<Self> for Uint<N> {
            fn $func_assign(&mut self, rhs: Self) {
                *self = self.$inner(&rhs);
            }
        }

        impl<const N: usize> $op_assign<&Self> for Uint<N> {
            fn $func_assign(&mut self, rhs: &Self) {
                *self = self.$inner(rhs);
            }
        }

        impl<const N: usize> $op_assign<Limb> for Uint<N> {
            fn $func_assign(&mut self, rhs: Limb) {
                *self = self.$limb_inner(rhs);
            }
        }
    };
}

impl<const N: usize> Uint<N> {
    #[inline]
    const fn wrapping_add_limb(&self, rhs: Limb) -> Self {
        self.overflowing_add_limb(rhs).0
    }

    #[inline]
    const fn wrapping_sub_limb(&self, rhs: Limb) -> Self {
        self.wrapping_sub(&Self::from_u32(rhs))
    }

    #[inline]
    fn div_limb(&self, rhs: Limb) -> Self {
        self.div_rem_limb(rhs).0
    }

    #[inline]
    fn rem_limb(&self, rhs: Limb) -> Self {
        Self::from_u32(self.div_rem_limb(rhs).1)
    }

    #[inline]
    fn div_inner(&self, rhs: &Self) -> Self {
        self.div_rem(rhs).0
    }

    #[inline]
    fn rem_inner(&self, rhs: &Self) -> Self {
        self.div_rem(rhs).1
    }
}

impl_binop!(Add, AddAssign, add, add_assign, wrapping_add, wrapping_add_limb);
impl_binop!(Sub, SubAssign, sub, sub_assign, wrapping_sub, wrapping_sub_limb);
impl_binop!(Mul, MulAssign, mul, mul_assign, wrapping_mul, wrapping_mul_limb);
impl_binop!(Div, DivAssign, div, div_assign, div_inner, div_limb);
impl_binop!(Rem, RemAssign, rem, rem_assign, rem_inner, rem_limb);

impl<const N: usize> Display for Uint<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> Result {
        write!(f, "{}", self.to_str_radix(10))
    }
}

impl<const N: usize> Debug for Uint<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> Result {
        write!(f, "{self}")
    }
}

impl<const N: usize> LowerHex for Uint<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> Result {
        write!(f, "{}", self.to_str_radix(16))
    }
}

impl<const N: usize> UpperHex for Uint<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> Result {
        let mut s = self.to_str_radix(16);
        s.make_ascii_uppercase();
        write!(f, "{s}")
    }
}

impl<const N: usize> Octal for Uint<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> Result {
        write!(f, "{}", self.to_str_radix(8))
    }
}

impl<const N: usize> Binary for Uint<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> Result {
        write!(f, "{}", self.to_str_radix(2))
    }
}

// ----------- Integer Algorithms -----------

impl<const N: usize> Uint<N> {
    /// Integer square root: the largest `x` with `x * x <= self`.
    ///
    /// Newton iteration seeded with a power of two no smaller than the root,
    /// so every intermediate stays in unsigned range; iterates until the
    /// estimate stops decreasing, then corrects any remaining overestimate.
    #[must_use]
    pub fn isqrt(&self) -> Self {
        if self.num_bits() <= 1 {
            // 0 and 1 are their own roots.
            return *self;
        }

        let mut x = Self::ONE << ((self.num_bits() as u32 + 1) / 2);
        loop {
            let next = (x + *self / x) >> 1;
            if next >= x {
                break;
            }
            x = next;
        }

        while x.wrapping_mul(&x) > *self {
            x -= Self::ONE;
        }
        x
    }

    /// Integer cube root: the largest `x` with `x * x * x <= self`.
    #[must_use]
    pub fn icbrt(&self) -> Self {
        if self.num_bits() <= 1 {
            return *self;
        }

        let mut x = Self::ONE << (self.num_bits() as u32).div_ceil(3);
        loop {
            let next = (x + x + *self / x.wrapping_mul(&x)) / Self::from(3u32);
            if next >= x {
                break;
            }
            x = next;
        }

        while Self::cube_exceeds(&x, self) {
            x -= Self::ONE;
        }
        x
    }

    /// `x^3 > v`, with a product that wraps counting as exceeding.
    fn cube_exceeds(x: &Self, v: &Self) -> bool {
        let (square, o1) = x.overflowing_mul(x);
        let (cube, o2) = square.overflowing_mul(x);
        o1 || o2 || cube > *v
    }

    /// Factorial of the counter held in the low limb, wrapping modulo
    /// `2^BITS`. The operand is only meaningful when it fits one limb; the
    /// point of a fixed-width type is that the *result* may need the extra
    /// bits.
    #[must_use]
    pub fn factorial(&self) -> Self {
        let mut result = Self::ONE;
        let mut counter = self.low_u32();
        while counter > 1 {
            result = result.wrapping_mul_limb(counter);
            counter -= 1;
        }
        result
    }

    /// Raise `self` to the power `exp` by binary exponentiation, wrapping
    /// modulo `2^BITS`.
    #[must_use]
    pub fn pow(&self, mut exp: u32) -> Self {
        let mut result = Self::ONE;
        let mut base = *self;
        while exp != 0 {
            if exp & 1 == 1 {
                result = result.wrapping_mul(&base);
            }
            base = base.wrapping_mul(&base);
            exp >>= 1;
        }
        result
    }

    /// Compute `self^exp mod modulus`.
    ///
    /// Binary exponentiation with every product widened to `2 * BITS` and
    /// reduced through [`WideUint::rem`], so intermediates never wrap even
    /// for moduli close to `Uint::MAX`.
    ///
    /// # Panics
    ///
    /// Panics if `modulus` is zero.
    #[must_use]
    pub fn mod_pow(&self, exp: &Self, modulus: &Self) -> Self {
        assert!(!modulus.is_zero(), "division by zero");

        let mut result = Self::ONE.div_rem(modulus).1;
        let base = self.div_rem(modulus).1;
        for bit in exp.bit_be_trimmed_iter() {
            result = Self::mul_mod(&result, &result, modulus);
            if bit {
                result = Self::mul_mod(&result, &base, modulus);
            }
        }
        result
    }

    /// `(a * b) mod modulus` through the double-width product.
    fn mul_mod(a: &Self, b: &Self, modulus: &Self) -> Self {
        let (low, high) = a.widening_mul(b);
        WideUint::new(low, high).rem(modulus)
    }

    /// Deterministic primality test by trial division with odd candidates
    /// up to the square root. Exact, but only practical for operands whose
    /// magnitude is small.
    #[must_use]
    pub fn is_prime(&self) -> bool {
        if *self < 2u32 {
            return false;
        }
        if *self == 2u32 || *self == 3u32 {
            return true;
        }
        if self.is_even() {
            return false;
        }

        let root = self.isqrt();
        let two = Self::from(2u32);
        let mut candidate = Self::from(3u32);
        while candidate <= root {
            if self.div_rem(&candidate).1.is_zero() {
                return false;
            }
            candidate = candidate.wrapping_add(&two);
        }
        true
    }

    /// Returns true if `self` is `2^k` for some `k`.
    #[must_use]
    pub const fn is_power_of_two(&self) -> bool {
        self.count_ones() == 1
    }

    /// The smallest power of two greater than or equal to `self`, with
    /// `next_power_of_two(0) == 1`. Wraps to zero when `self` exceeds
    /// `2^(BITS-1)`, the largest representable power of two.
    #[must_use]
    pub fn next_power_of_two(&self) -> Self {
        if self.is_zero() {
            return Self::ONE;
        }
        if self.is_power_of_two() {
            return *self;
        }

        // Smear ones below the highest set bit, across limb boundaries.
        let mut smeared = self.wrapping_sub(&Self::ONE);
        let mut shift = 1;
        while (shift as usize) < Self::BITS {
            smeared |= smeared >> shift;
            shift <<= 1;
        }
        smeared.overflowing_add_limb(1).0
    }

    /// Floor of the base-2 logarithm: the index of the highest set bit, or
    /// `None` for zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn checked_ilog2(&self) -> Option<u32> {
        if self.is_zero() {
            None
        } else {
            Some(self.num_bits() as u32 - 1)
        }
    }

    /// Ceiling of the base-2 logarithm: the smallest `k` with
    /// `2^k >= self`. Zero and one both map to `0`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn ceil_ilog2(&self) -> u32 {
        if self.num_bits() <= 1 {
            return 0;
        }
        self.wrapping_sub(&Self::ONE).num_bits() as u32
    }
}

/// Integer twice the width of an `N`-limb [`Uint`], stored as `(low, high)`
/// halves. Holds the full product of a [`Uint::widening_mul`] while it is
/// reduced by [`WideUint::rem`].
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct WideUint<const N: usize> {
    low: Uint<N>,
    high: Uint<N>,
}

impl<const N: usize> WideUint<N> {
    /// Construct a new [`WideUint`] from `low` and `high` parts.
    #[must_use]
    pub const fn new(low: Uint<N>, high: Uint<N>) -> Self {
        Self { low, high }
    }

    /// Find the number of bits in the binary decomposition of `self`.
    #[must_use]
    pub const fn num_bits(&self) -> usize {
        let high_num_bits = self.high.num_bits();
        if high_num_bits == 0 {
            self.low.num_bits()
        } else {
            high_num_bits + Uint::<N>::BITS
        }
    }

    /// Compute the `i`-th bit of `self`.
    #[must_use]
    pub const fn get_bit(&self, i: usize) -> bool {
        if i >= Uint::<N>::BITS {
            self.high.get_bit(i - Uint::<N>::BITS)
        } else {
            self.low.get_bit(i)
        }
    }

    /// Compute the remainder of dividing `self` by `divisor`.
    ///
    /// Bit-by-bit restoring reduction, walking `self` from its highest set
    /// bit down.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    #[must_use]
    pub fn rem(&self, divisor: &Uint<N>) -> Uint<N> {
        assert!(!divisor.is_zero(), "division by zero");

        let mut remainder = Uint::<N>::ZERO;
        for index in (0..self.num_bits()).rev() {
            let carry = remainder.overflowing_mul2_assign();
            remainder.limbs[0] |= Limb::from(self.get_bit(index));
            if carry || remainder >= *divisor {
                remainder = remainder.wrapping_sub(divisor);
            }
        }
        remainder
    }
}

impl<const N: usize> BitIteratorBE for Uint<N> {
    fn bit_be_iter(&self) -> impl Iterator<Item = bool> {
        self.as_limbs().iter().rev().flat_map(Limb::bit_be_iter)
    }
}

impl<const N: usize> FixedInteger for Uint<N> {
    const NUM_LIMBS: usize = N;

    fn is_zero(&self) -> bool {
        Uint::is_zero(self)
    }

    fn is_odd(&self) -> bool {
        Uint::is_odd(self)
    }

    fn is_even(&self) -> bool {
        Uint::is_even(self)
    }

    fn num_bits(&self) -> usize {
        Uint::num_bits(self)
    }

    fn get_bit(&self, i: usize) -> bool {
        Uint::get_bit(self, i)
    }

    fn set_bit(&mut self, i: usize, value: bool) {
        Uint::set_bit(self, i, value);
    }

    fn from_bytes_le(bytes: &[u8]) -> Self {
        Uint::from_bytes_le(bytes)
    }

    fn from_bytes_be(bytes: &[u8]) -> Self {
        Uint::from_bytes_be(bytes)
    }

    fn into_bytes_le(self) -> Vec<u8> {
        Uint::into_bytes_le(self)
    }

    fn into_bytes_be(self) -> Vec<u8> {
        Uint::into_bytes_be(self)
    }
}

#[cfg(feature = "rand")]
impl<const N: usize> rand::distr::Distribution<Uint<N>>
    for rand::distr::StandardUniform
{
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Uint<N> {
        Uint::new([(); N].map(|()| rng.random()))
    }
}

#[cfg(all(test, feature = "std"))]
mod test {
    use num_bigint::BigUint;
    use proptest::prelude::*;

    use super::*;
    use crate::bits::BitIteratorBE;

    fn to_oracle(value: &U128) -> BigUint {
        BigUint::from_bytes_le(&value.into_bytes_le())
    }

    fn from_oracle(value: &BigUint) -> U128 {
        let mut bytes = value.to_bytes_le();
        bytes.truncate(U128::BYTES);
        bytes.resize(U128::BYTES, 0);
        U128::from_bytes_le(&bytes)
    }

    fn uint() -> impl Strategy<Value = U128> {
        any::<[Limb; 4]>().prop_map(U128::new)
    }

    #[test]
    fn carry_ripples_across_limbs() {
        let a = U128::from(0xFFFF_FFFFu32);
        let sum = a + U128::ONE;
        assert_eq!(sum.as_limbs(), &[0, 1, 0, 0]);
    }

    #[test]
    fn subtraction_wraps_to_all_ones() {
        assert_eq!(U128::ZERO - U128::ONE, U128::MAX);
    }

    #[test]
    fn add_sub_round_trip() {
        proptest!(|(a in uint(), b in uint())| {
            prop_assert_eq!((a + b) - b, a);
            prop_assert_eq!((a - b) + b, a);
        });
    }

    #[test]
    fn addition_matches_oracle() {
        proptest!(|(a in uint(), b in uint())| {
            let expected =
                (to_oracle(&a) + to_oracle(&b)) % (BigUint::from(1u8) << 128);
            prop_assert_eq!(to_oracle(&(a + b)), expected);
        });
    }

    #[test]
    fn multiplication_matches_oracle() {
        proptest!(|(a in uint(), b in uint())| {
            let expected =
                (to_oracle(&a) * to_oracle(&b)) % (BigUint::from(1u8) << 128);
            prop_assert_eq!(to_oracle(&a.wrapping_mul(&b)), expected);
        });
    }

    #[test]
    fn widening_mul_matches_oracle() {
        proptest!(|(a in uint(), b in uint())| {
            let (lo, hi) = a.widening_mul(&b);
            let product = to_oracle(&hi) << 128 | to_oracle(&lo);
            prop_assert_eq!(product, to_oracle(&a) * to_oracle(&b));
        });
    }

    #[test]
    fn division_identity() {
        proptest!(|(a in uint(), b in uint())| {
            prop_assume!(!b.is_zero());
            let (q, r) = a.div_rem(&b);
            prop_assert!(r < b);
            prop_assert_eq!(q.wrapping_mul(&b).wrapping_add(&r), a);
        });
    }

    #[test]
    fn division_by_limb_agrees_with_general_division() {
        proptest!(|(a in uint(), d in 1..=Limb::MAX)| {
            let (q, r) = a.div_rem_limb(d);
            let (expected_q, expected_r) = a.div_rem(&U128::from(d));
            prop_assert_eq!(q, expected_q);
            prop_assert_eq!(U128::from(r), expected_r);
        });
    }

    #[test]
    #[should_panic = "division by zero"]
    fn division_by_zero_panics() {
        let _ = U128::from(10u32).div_rem(&U128::ZERO);
    }

    #[test]
    fn checked_division_by_zero_is_none() {
        assert_eq!(U128::from(10u32).checked_div(&U128::ZERO), None);
        assert_eq!(U128::from(10u32).checked_rem(&U128::ZERO), None);
        assert!(U128::from(10u32).checked_div_rem(&U128::ZERO).is_none());
    }

    #[test]
    fn shift_round_trip_masks_high_bits() {
        proptest!(|(a in uint(), s in 0..128u32)| {
            let masked = (a << s) >> s;
            let expected = if s == 0 { a } else { a & (U128::MAX >> s) };
            prop_assert_eq!(masked, expected);
        });
    }

    #[test]
    fn shifts_match_native_u128() {
        proptest!(|(v: u128, s in 0..128u32)| {
            let a = U128::from(v);
            prop_assert_eq!((a << s).low_u128(), v << s);
            prop_assert_eq!((a >> s).low_u128(), v >> s);
        });
    }

    #[test]
    fn full_width_shifts_saturate_to_zero() {
        assert_eq!(U128::MAX << 128, U128::ZERO);
        assert_eq!(U128::MAX >> 129, U128::ZERO);
    }

    #[test]
    fn comparison_agrees_with_native() {
        proptest!(|(a: u64, b: u64)| {
            let x = U128::from(a);
            let y = U128::from(b);
            prop_assert_eq!(x.cmp(&y), a.cmp(&b));
            prop_assert_eq!(x == b, a == b);
            prop_assert_eq!(x < b, a < b);
            prop_assert_eq!(b > x, b > a);
        });
    }

    #[test]
    fn primitive_round_trips() {
        proptest!(|(v: u64)| {
            prop_assert_eq!(U128::from(v).low_u64(), v);
        });
        proptest!(|(v: u128)| {
            prop_assert_eq!(U128::from(v).low_u128(), v);
        });
    }

    #[test]
    fn signed_sources_sign_extend() {
        assert_eq!(U128::from(-1i32), U128::MAX);
        assert_eq!(U128::from(-1i64), U128::MAX);
        assert_eq!(
            U128::from(i64::MIN),
            U128::MAX - U128::from(i64::MAX as u64)
        );
        assert_eq!(U128::from(5i8), U128::from(5u8));
    }

    #[test]
    fn negation_is_additive_inverse() {
        proptest!(|(a in uint())| {
            prop_assert_eq!(a.wrapping_add(&a.wrapping_neg()), U128::ZERO);
            prop_assert_eq!(-(-a), a);
        });
    }

    #[test]
    fn float_conversion_truncates() {
        assert_eq!(U128::from_f64(0.0), U128::ZERO);
        assert_eq!(U128::from_f64(0.99), U128::ZERO);
        assert_eq!(U128::from_f64(3.7), U128::from(3u32));
        assert_eq!(U128::from_f64(2f64.powi(100)), U128::ONE << 100);
        assert_eq!(U128::from_f32(65536.5), U128::from(65536u32));
    }

    #[test]
    fn float_specials_normalize_to_zero() {
        assert_eq!(U128::from_f64(f64::NAN), U128::ZERO);
        assert_eq!(U128::from_f64(f64::INFINITY), U128::ZERO);
        assert_eq!(U128::from_f64(f64::NEG_INFINITY), U128::ZERO);
    }

    #[test]
    fn negative_float_wraps_like_negation() {
        assert_eq!(U128::from_f64(-5.0), U128::from(5u32).wrapping_neg());
    }

    #[test]
    fn float_round_trip_below_mantissa_precision() {
        proptest!(|(v in 0..(1u64 << 53))| {
            #[allow(clippy::cast_precision_loss)]
            let as_float = v as f64;
            prop_assert_eq!(U128::from_f64(as_float), U128::from(v));
            prop_assert_eq!(U128::from(v).to_f64(), as_float);
        });
    }

    #[test]
    fn byte_round_trips() {
        proptest!(|(a in uint())| {
            prop_assert_eq!(U128::from_bytes_le(&a.into_bytes_le()), a);
            prop_assert_eq!(U128::from_bytes_be(&a.into_bytes_be()), a);
        });
    }

    #[test]
    fn big_endian_bytes_pack_most_significant_first() {
        let value = U128::from_bytes_be(&hex_literal::hex!(
            "000102030405060708090a0b0c0d0e0f"
        ));
        assert_eq!(value.low_u32(), 0x0C0D_0E0F);
        assert_eq!(value.as_limbs()[3], 0x0001_0203);
    }

    #[test]
    fn formatting_matches_oracle() {
        proptest!(|(a in uint())| {
            prop_assert_eq!(format!("{a}"), to_oracle(&a).to_string());
            prop_assert_eq!(format!("{a:x}"), format!("{:x}", to_oracle(&a)));
        });
    }

    #[test]
    fn formatting_radixes() {
        let value = U128::from(255u32);
        assert_eq!(value.to_str_radix(16), "ff");
        assert_eq!(value.to_str_radix(8), "377");
        assert_eq!(value.to_str_radix(2), "11111111");
        assert_eq!(format!("{value:X}"), "FF");
        assert_eq!(format!("{:o}", U128::ZERO), "0");
    }

    #[test]
    fn bit_accessors() {
        let mut value = U128::ZERO;
        value.set_bit(0, true);
        value.set_bit(37, true);
        value.set_bit(127, true);
        assert!(value.get_bit(0) && value.get_bit(37) && value.get_bit(127));
        assert!(!value.get_bit(64));
        // Out-of-range bits read as unset.
        assert!(!value.get_bit(128));
        value.set_bit(37, false);
        assert!(!value.get_bit(37));
        assert_eq!(value.count_ones(), 2);
    }

    #[test]
    fn byte_and_nybble_accessors() {
        let mut value = U128::ZERO;
        value.set_byte(5, 0xAB);
        assert_eq!(value.byte(5), 0xAB);
        assert_eq!(value.as_limbs()[1], 0x0000_AB00);
        value.set_nybble(10, 0xC);
        assert_eq!(value.nybble(10), 0xC);
        assert_eq!(value.nybble(11), 0xA);
        value.set_nybble(11, 0x1);
        assert_eq!(value.byte(5), 0x1C);
    }

    #[test]
    fn num_bits_and_zero_scans() {
        assert_eq!(U128::ZERO.num_bits(), 0);
        assert_eq!(U128::ONE.num_bits(), 1);
        assert_eq!(U128::MAX.num_bits(), 128);
        assert_eq!((U128::ONE << 64).num_bits(), 65);
        assert_eq!((U128::ONE << 64).trailing_zeros(), 64);
        assert_eq!((U128::ONE << 64).leading_zeros(), 63);
    }

    #[test]
    fn rotation_wraps_bits_around() {
        let value = U128::from(0b1011u32);
        assert_eq!(value.rotate_right(128), value);
        assert_eq!(value.rotate_right(0), value);
        let rotated = value.rotate_right(1);
        assert!(rotated.get_bit(127));
        assert_eq!(rotated.low_u32(), 0b101);
        proptest!(|(a in uint(), n in 0..256u32)| {
            let there = a.rotate_right(n);
            let back = there.rotate_right(256 - n);
            prop_assert_eq!(back, a);
        });
    }

    #[test]
    fn sqrt_bounds() {
        proptest!(|(a in uint())| {
            let root = a.isqrt();
            prop_assert!(root.wrapping_mul(&root) <= a);
            let next = root + U128::ONE;
            let (square, overflow) = next.overflowing_mul(&next);
            prop_assert!(overflow || square > a);
        });
    }

    #[test]
    fn sqrt_of_small_values() {
        assert_eq!(U128::ZERO.isqrt(), U128::ZERO);
        assert_eq!(U128::ONE.isqrt(), U128::ONE);
        assert_eq!(U128::from(15u32).isqrt(), U128::from(3u32));
        assert_eq!(U128::from(16u32).isqrt(), U128::from(4u32));
    }

    #[test]
    fn cbrt_bounds() {
        proptest!(|(a in uint())| {
            let root = a.icbrt();
            let cube = root.wrapping_mul(&root).wrapping_mul(&root);
            prop_assert!(cube <= a);
            prop_assert!(U128::cube_exceeds(&(root + U128::ONE), &a));
        });
    }

    #[test]
    fn factorial_of_twenty() {
        let result = U128::from(20u32).factorial();
        assert_eq!(result.low_u64(), 2_432_902_008_176_640_000);
        assert_eq!(U128::ZERO.factorial(), U128::ONE);
        assert_eq!(U128::ONE.factorial(), U128::ONE);
        // 34! does not fit 128 bits and must wrap, not panic.
        let _ = U128::from(40u32).factorial();
    }

    #[test]
    fn pow_wraps_modulo_width() {
        assert_eq!(U128::from(3u32).pow(5), U128::from(243u32));
        assert_eq!(U128::from(2u32).pow(127), U128::ONE << 127);
        assert_eq!(U128::from(2u32).pow(128), U128::ZERO);
        assert_eq!(U128::from(7u32).pow(0), U128::ONE);
    }

    #[test]
    fn mod_pow_small_values() {
        let result = U128::from(4u32)
            .mod_pow(&U128::from(13u32), &U128::from(497u32));
        assert_eq!(result, U128::from(445u32));
        // Exponent zero gives 1 mod m.
        assert_eq!(
            U128::from(9u32).mod_pow(&U128::ZERO, &U128::from(7u32)),
            U128::ONE
        );
        assert_eq!(
            U128::from(9u32).mod_pow(&U128::from(3u32), &U128::ONE),
            U128::ZERO
        );
    }

    #[test]
    fn mod_pow_matches_oracle() {
        proptest!(|(a in uint(), e: u64, m in uint())| {
            prop_assume!(!m.is_zero());
            let result = a.mod_pow(&U128::from(e), &m);
            let expected = to_oracle(&a)
                .modpow(&BigUint::from(e), &to_oracle(&m));
            prop_assert_eq!(result, from_oracle(&expected));
        });
    }

    #[test]
    fn primality_of_small_numbers() {
        let primes = [2u32, 3, 5, 7, 97, 65537];
        for p in primes {
            assert!(U128::from(p).is_prime(), "{p} is prime");
        }
        let composites = [0u32, 1, 4, 91, 65535];
        for c in composites {
            assert!(!U128::from(c).is_prime(), "{c} is not prime");
        }
    }

    #[test]
    fn power_of_two_helpers() {
        proptest!(|(a in uint())| {
            let next = a.next_power_of_two();
            if !next.is_zero() {
                prop_assert!(next.is_power_of_two());
                prop_assert!(next >= a);
            }
        });
        assert_eq!(U128::ZERO.next_power_of_two(), U128::ONE);
        assert_eq!(U128::from(17u32).next_power_of_two(), U128::from(32u32));
        assert!((U128::ONE << 127).is_power_of_two());
        assert!(!U128::ZERO.is_power_of_two());
        // Values past the top power of two wrap to zero.
        assert_eq!(U128::MAX.next_power_of_two(), U128::ZERO);
    }

    #[test]
    fn logarithms() {
        assert_eq!(U128::ZERO.checked_ilog2(), None);
        assert_eq!(U128::ONE.checked_ilog2(), Some(0));
        assert_eq!(U128::from(1024u32).checked_ilog2(), Some(10));
        assert_eq!(U128::from(1025u32).checked_ilog2(), Some(10));
        assert_eq!(U128::from(1024u32).ceil_ilog2(), 10);
        assert_eq!(U128::from(1025u32).ceil_ilog2(), 11);
        assert_eq!(U128::ONE.ceil_ilog2(), 0);
    }

    #[test]
    fn wide_rem_matches_oracle() {
        proptest!(|(a in uint(), b in uint(), m in uint())| {
            prop_assume!(!m.is_zero());
            let (lo, hi) = a.widening_mul(&b);
            let result = WideUint::new(lo, hi).rem(&m);
            let expected = (to_oracle(&a) * to_oracle(&b)) % to_oracle(&m);
            prop_assert_eq!(result, from_oracle(&expected));
        });
    }

    #[test]
    fn uint_bit_iterator_be() {
        let value = U128::new([0b1100, 0, 0, 0]);
        let bits: Vec<bool> = value.bit_be_trimmed_iter().collect();

        assert_eq!(bits.len(), 4);
        assert_eq!(bits, vec![true, true, false, false]);
    }
}

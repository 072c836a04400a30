//! This module contains the [`Int`] fixed-width signed big integer,
//! together with its exact-width aliases [`I64`], [`I128`], and so on.
//!
//! [`Int`] is the two's-complement reading of the same limb array that backs
//! [`Uint`]. It is a transparent wrapper over the unsigned type, converted
//! back and forth with [`Int::cast_unsigned`] and [`Uint::cast_signed`] at
//! no cost, and it overrides exactly the operations whose result depends on
//! the sign bit: division, right shift, ordering, multiplication by sign
//! rule, and float conversion. Everything sign-agnostic is the unsigned
//! implementation verbatim.

use alloc::string::String;
use alloc::vec::Vec;
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
        limb::{Limb, Limbs},
        uint::Uint,
        FixedInteger,
    },
    bits::BitIteratorBE,
};

/// Bit mask selecting the sign bit inside the most significant limb.
const SIGN_MASK: Limb = 1 << (Limb::BITS - 1);

/// Stack-allocated big signed integer in two's complement.
///
/// Generic over the number `N` of [`Limb`]s.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Zeroize)]
#[repr(transparent)]
pub struct Int<const N: usize> {
    repr: Uint<N>,
}

impl<const N: usize> Default for Int<N> {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Declare [`Int`] types for different bit sizes.
macro_rules! declare_inum {
    ($num:ident, $bits:expr) => {
        #[doc = "Signed two's-complement integer with "]
        #[doc = stringify!($bits)]
        #[doc = "bits size."]
        pub type $num = $crate::arithmetic::int::Int<
            { usize::div_ceil($bits, $crate::arithmetic::Limb::BITS as usize) },
        >;
    };
}

declare_inum!(I32, 32);
declare_inum!(I64, 64);
declare_inum!(I96, 96);
declare_inum!(I128, 128);
declare_inum!(I160, 160);
declare_inum!(I192, 192);
declare_inum!(I256, 256);
declare_inum!(I384, 384);
declare_inum!(I512, 512);

// The cast in either direction is only sound while the two types stay
// layout-identical.
static_assertions::assert_eq_size!(I128, crate::arithmetic::uint::U128);
static_assertions::assert_eq_align!(I128, crate::arithmetic::uint::U128);

impl<const N: usize> Uint<N> {
    /// Reinterpret the bit pattern as a two's-complement signed integer.
    #[inline]
    #[must_use]
    pub const fn cast_signed(self) -> Int<N> {
        Int { repr: self }
    }
}

impl<const N: usize> Int<N> {
    /// Width of the integer in bits. Always a multiple of 32.
    pub const BITS: usize = Uint::<N>::BITS;
    /// Width of the integer in bytes.
    pub const BYTES: usize = Uint::<N>::BYTES;
    /// The largest value, `2^(BITS-1) - 1`.
    pub const MAX: Self = {
        let mut max = Uint::<N>::MAX;
        max.limbs[N - 1] = Limb::MAX >> 1;
        Self { repr: max }
    };
    /// The smallest value, `-2^(BITS-1)`; only the sign bit is set.
    pub const MIN: Self = {
        let mut min = Uint::<N>::ZERO;
        min.limbs[N - 1] = SIGN_MASK;
        Self { repr: min }
    };
    /// The value `1`.
    pub const ONE: Self = Self { repr: Uint::ONE };
    /// The value `0`.
    pub const ZERO: Self = Self { repr: Uint::ZERO };

    /// Create a new [`Int`] from the provided `limbs`, least significant
    /// limb first, read as two's complement.
    #[must_use]
    pub const fn new(limbs: [Limb; N]) -> Self {
        Self { repr: Uint::new(limbs) }
    }

    /// Returns a reference to the inner [`Limbs`] array.
    #[must_use]
    pub const fn as_limbs(&self) -> &Limbs<N> {
        self.repr.as_limbs()
    }

    /// Reinterpret the bit pattern as an unsigned integer.
    #[inline]
    #[must_use]
    pub const fn cast_unsigned(self) -> Uint<N> {
        self.repr
    }

    /// Returns true if the sign bit is set.
    #[inline]
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.repr.limbs[N - 1] & SIGN_MASK != 0
    }

    /// Returns true if `self` is greater than zero.
    #[inline]
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        !self.is_negative() && !self.is_zero()
    }

    /// Returns true if this number is zero.
    #[inline]
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.repr.is_zero()
    }

    /// Returns true if this number is odd.
    #[inline]
    #[must_use]
    pub const fn is_odd(&self) -> bool {
        self.repr.is_odd()
    }

    /// Returns true if this number is even.
    #[inline]
    #[must_use]
    pub const fn is_even(&self) -> bool {
        self.repr.is_even()
    }

    /// The magnitude of `self` as an unsigned integer. Well defined for
    /// every value, including `MIN`, whose magnitude does not fit in `Self`.
    #[inline]
    #[must_use]
    pub const fn unsigned_abs(&self) -> Uint<N> {
        if self.is_negative() {
            self.repr.wrapping_neg()
        } else {
            self.repr
        }
    }

    /// The absolute value of `self`. Wraps for `MIN`: `MIN.abs() == MIN`,
    /// as the magnitude of `MIN` is one past `MAX`.
    #[must_use]
    pub const fn abs(&self) -> Self {
        self.unsigned_abs().cast_signed()
    }

    /// Two's complement negation, `!self + 1`. Wraps for `MIN`:
    /// `MIN.wrapping_neg() == MIN`.
    #[must_use]
    pub const fn wrapping_neg(&self) -> Self {
        self.repr.wrapping_neg().cast_signed()
    }

    /// Add `rhs` to `self`, wrapping modulo `2^BITS`. Addition is
    /// sign-agnostic in two's complement, so this is the unsigned addition
    /// of the bit patterns.
    #[inline]
    #[must_use]
    pub const fn wrapping_add(&self, rhs: &Self) -> Self {
        self.repr.wrapping_add(&rhs.repr).cast_signed()
    }

    /// Subtract `rhs` from `self`, wrapping modulo `2^BITS`.
    #[inline]
    #[must_use]
    pub const fn wrapping_sub(&self, rhs: &Self) -> Self {
        self.repr.wrapping_sub(&rhs.repr).cast_signed()
    }

    /// Multiply `self` by `rhs`, wrapping modulo `2^BITS`.
    ///
    /// Both operands are taken to their magnitudes, multiplied unsigned, and
    /// the product is negated when exactly one operand was negative.
    #[must_use]
    pub const fn wrapping_mul(&self, rhs: &Self) -> Self {
        let negative = self.is_negative() != rhs.is_negative();
        let product = self.unsigned_abs().wrapping_mul(&rhs.unsigned_abs());
        if negative {
            product.wrapping_neg().cast_signed()
        } else {
            product.cast_signed()
        }
    }

    /// Divide `self` by `divisor`, returning the quotient and remainder.
    ///
    /// Truncating division: the quotient is negative when the operand signs
    /// differ, and the remainder follows the dividend's sign, so that
    /// `q * divisor + r == self` always holds.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    #[must_use]
    pub fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        assert!(!divisor.is_zero(), "division by zero");

        let (quotient, remainder) =
            self.unsigned_abs().div_rem(&divisor.unsigned_abs());
        let quotient = if self.is_negative() != divisor.is_negative() {
            quotient.wrapping_neg()
        } else {
            quotient
        };
        let remainder = if self.is_negative() {
            remainder.wrapping_neg()
        } else {
            remainder
        };
        (quotient.cast_signed(), remainder.cast_signed())
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

    /// Compute the minimum number of bits needed to encode the bit pattern
    /// of this number, i.e. one past the index of the highest set bit. A
    /// negative number always reports `BITS`, its sign bit being set.
    #[must_use]
    pub const fn num_bits(&self) -> usize {
        self.repr.num_bits()
    }

    /// Find the `i`-th bit of `self`. Out-of-range indices read as `false`.
    #[must_use]
    pub const fn get_bit(&self, i: usize) -> bool {
        self.repr.get_bit(i)
    }

    /// Set the `i`-th bit of `self` to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= Self::BITS`.
    pub const fn set_bit(&mut self, i: usize, value: bool) {
        self.repr.set_bit(i, value);
    }

    /// The low 32 bits of `self`, reinterpreted as signed.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn low_i32(&self) -> i32 {
        self.repr.low_u32() as i32
    }

    /// The value truncated to 64 bits, or sign-extended to 64 bits when
    /// `BITS < 64`.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn low_i64(&self) -> i64 {
        if N >= 2 {
            self.repr.low_u64() as i64
        } else {
            self.low_i32() as i64
        }
    }

    /// The value truncated to 128 bits, or sign-extended to 128 bits when
    /// `BITS < 128`.
    #[must_use]
    #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    pub const fn low_i128(&self) -> i128 {
        if N >= 4 {
            self.repr.low_u128() as i128
        } else {
            let shift = 128 - 32 * N as u32;
            ((self.repr.low_u128() as i128) << shift) >> shift
        }
    }

    /// Compare `self` against a native 128-bit signed value.
    #[must_use]
    pub fn cmp_i128(&self, rhs: i128) -> Ordering {
        match (self.is_negative(), rhs < 0) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.repr.cmp_u128(rhs.unsigned_abs()),
            (true, true) => {
                self.unsigned_abs().cmp_u128(rhs.unsigned_abs()).reverse()
            }
        }
    }

    /// Create an [`Int`] from an `f64`, truncating toward zero.
    ///
    /// NaN and ±infinity produce the `MIN` sentinel, the value with only
    /// the sign bit set.
    #[must_use]
    pub fn from_f64(value: f64) -> Self {
        if !value.is_finite() {
            return Self::MIN;
        }
        Uint::from_f64(value).cast_signed()
    }

    /// Create an [`Int`] from an `f32`, truncating toward zero. Same
    /// contract as [`Self::from_f64`].
    #[must_use]
    pub fn from_f32(value: f32) -> Self {
        Self::from_f64(f64::from(value))
    }

    /// Approximate `self` as an `f64`: the magnitude converted unsigned,
    /// negated back when `self` is negative.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        let magnitude = self.unsigned_abs().to_f64();
        if self.is_negative() {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Approximate `self` as an `f32`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_f32(&self) -> f32 {
        self.to_f64() as f32
    }

    /// Create a new [`Int`] from the provided little endian bytes.
    ///
    /// # Panics
    ///
    /// Panics if `bytes.len() != Self::BYTES`.
    #[must_use]
    pub const fn from_bytes_le(bytes: &[u8]) -> Self {
        Uint::from_bytes_le(bytes).cast_signed()
    }

    /// Create a new [`Int`] from the provided big endian bytes, most
    /// significant byte first.
    ///
    /// # Panics
    ///
    /// Panics if `bytes.len() != Self::BYTES`.
    #[must_use]
    pub const fn from_bytes_be(bytes: &[u8]) -> Self {
        Uint::from_bytes_be(bytes).cast_signed()
    }

    /// Convert `self` to little endian bytes.
    #[must_use]
    pub fn into_bytes_le(self) -> Vec<u8> {
        self.repr.into_bytes_le()
    }

    /// Convert `self` to big endian bytes.
    #[must_use]
    pub fn into_bytes_be(self) -> Vec<u8> {
        self.repr.into_bytes_be()
    }

    /// Format `self` in the given radix, with a leading `-` for negative
    /// values.
    ///
    /// # Panics
    ///
    /// Panics if `radix` is not in `2..=36`.
    #[must_use]
    pub fn to_str_radix(&self, radix: u32) -> String {
        let magnitude = self.unsigned_abs().to_str_radix(radix);
        if self.is_negative() {
            let mut out = String::from("-");
            out.push_str(&magnitude);
            out
        } else {
            magnitude
        }
    }

    /// Integer square root of a non-negative value; a negative operand
    /// returns zero, the documented degenerate result for this domain.
    #[must_use]
    pub fn isqrt(&self) -> Self {
        if self.is_negative() {
            return Self::ZERO;
        }
        self.repr.isqrt().cast_signed()
    }

    /// Integer cube root. The cube root of a negative value is the negated
    /// root of its magnitude.
    #[must_use]
    pub fn icbrt(&self) -> Self {
        let root = self.unsigned_abs().icbrt();
        if self.is_negative() {
            root.wrapping_neg().cast_signed()
        } else {
            root.cast_signed()
        }
    }

    /// Factorial of the counter held in the low limb; a negative operand
    /// returns zero.
    #[must_use]
    pub fn factorial(&self) -> Self {
        if self.is_negative() {
            return Self::ZERO;
        }
        self.repr.factorial().cast_signed()
    }

    /// Raise `self` to the power `exp`, wrapping modulo `2^BITS`. A
    /// negative exponent returns zero; a negative base makes the result
    /// negative exactly when the exponent is odd.
    #[must_use]
    pub fn pow(&self, exp: i32) -> Self {
        if exp < 0 {
            return Self::ZERO;
        }
        #[allow(clippy::cast_sign_loss)]
        let magnitude = self.unsigned_abs().pow(exp as u32);
        if self.is_negative() && exp & 1 == 1 {
            magnitude.wrapping_neg().cast_signed()
        } else {
            magnitude.cast_signed()
        }
    }

    /// Deterministic primality test by trial division. Values below two,
    /// negatives included, are not prime.
    #[must_use]
    pub fn is_prime(&self) -> bool {
        !self.is_negative() && self.repr.is_prime()
    }
}

// ----------- From Impls -----------

/// `From` trait implementations for signed primitives; the source value
/// sign-extends into the high limbs.
macro_rules! impl_from_signed_primitive {
    ($int:ty) => {
        impl<const N: usize> From<$int> for Int<N> {
            #[inline]
            fn from(value: $int) -> Int<N> {
                Uint::from_i64(i64::from(value)).cast_signed()
            }
        }
    };
}

impl_from_signed_primitive!(i8);
impl_from_signed_primitive!(i16);
impl_from_signed_primitive!(i32);
impl_from_signed_primitive!(i64);

impl<const N: usize> From<i128> for Int<N> {
    #[inline]
    fn from(value: i128) -> Int<N> {
        Uint::from_i128(value).cast_signed()
    }
}

impl<const N: usize> From<isize> for Int<N> {
    #[inline]
    fn from(value: isize) -> Int<N> {
        Uint::from_i64(value as i64).cast_signed()
    }
}

/// `From` trait implementations for unsigned primitives, zero-extended.
macro_rules! impl_from_unsigned_primitive {
    ($int:ty) => {
        impl<const N: usize> From<$int> for Int<N> {
            #[inline]
            fn from(value: $int) -> Int<N> {
                Uint::from(value).cast_signed()
            }
        }
    };
}

impl_from_unsigned_primitive!(u8);
impl_from_unsigned_primitive!(u16);
impl_from_unsigned_primitive!(u32);
impl_from_unsigned_primitive!(u64);

impl<const N: usize> From<Limbs<N>> for Int<N> {
    #[inline]
    fn from(limbs: Limbs<N>) -> Int<N> {
        Int::new(limbs)
    }
}

// ----------- Traits Impls -----------

impl<const N: usize> num_traits::Zero for Int<N> {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        Int::is_zero(self)
    }
}

impl<const N: usize> num_traits::ConstZero for Int<N> {
    const ZERO: Self = Self::ZERO;
}

impl<const N: usize> num_traits::One for Int<N> {
    fn one() -> Self {
        Self::ONE
    }
}

impl<const N: usize> num_traits::ConstOne for Int<N> {
    const ONE: Self = Self::ONE;
}

impl<const N: usize> Ord for Int<N> {
    /// Two's-complement ordering: the most significant limbs are compared
    /// with their sign bits flipped, which maps the signed order onto the
    /// unsigned one; lower limbs compare unsigned.
    fn cmp(&self, rhs: &Self) -> Ordering {
        let a = self.repr.limbs[N - 1] ^ SIGN_MASK;
        let b = rhs.repr.limbs[N - 1] ^ SIGN_MASK;
        match a.cmp(&b) {
            Ordering::Equal => {}
            order => return order,
        }

        for i in (0..N - 1).rev() {
            match self.repr.limbs[i].cmp(&rhs.repr.limbs[i]) {
                Ordering::Equal => {}
                order => return order,
            }
        }

        Ordering::Equal
    }
}

impl<const N: usize> PartialOrd for Int<N> {
    #[inline]
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

/// Mixed comparisons against native signed integers.
macro_rules! impl_primitive_cmp {
    ($int:ty) => {
        impl<const N: usize> PartialEq<$int> for Int<N> {
            #[inline]
            fn eq(&self, other: &$int) -> bool {
                self.cmp_i128(i128::from(*other)) == Ordering::Equal
            }
        }

        impl<const N: usize> PartialOrd<$int> for Int<N> {
            #[inline]
            fn partial_cmp(&self, other: &$int) -> Option<Ordering> {
                Some(self.cmp_i128(i128::from(*other)))
            }
        }

        impl<const N: usize> PartialEq<Int<N>> for $int {
            #[inline]
            fn eq(&self, other: &Int<N>) -> bool {
                other == self
            }
        }

        impl<const N: usize> PartialOrd<Int<N>> for $int {
            #[inline]
            fn partial_cmp(&self, other: &Int<N>) -> Option<Ordering> {
                Some(other.cmp_i128(i128::from(*self)).reverse())
            }
        }
    };
}

impl_primitive_cmp!(i32);
impl_primitive_cmp!(i64);
impl_primitive_cmp!(i128);

impl<const N: usize> AsRef<[Limb]> for Int<N> {
    #[inline]
    fn as_ref(&self) -> &[Limb] {
        self.repr.as_ref()
    }
}

impl<B: Borrow<Self>, const N: usize> BitXorAssign<B> for Int<N> {
    fn bitxor_assign(&mut self, rhs: B) {
        self.repr ^= rhs.borrow().repr;
    }
}

impl<B: Borrow<Self>, const N: usize> BitXor<B> for Int<N> {
    type Output = Self;

    fn bitxor(mut self, rhs: B) -> Self::Output {
        self ^= rhs;
        self
    }
}

impl<B: Borrow<Self>, const N: usize> BitAndAssign<B> for Int<N> {
    fn bitand_assign(&mut self, rhs: B) {
        self.repr &= rhs.borrow().repr;
    }
}

impl<B: Borrow<Self>, const N: usize> BitAnd<B> for Int<N> {
    type Output = Self;

    fn bitand(mut self, rhs: B) -> Self::Output {
        self &= rhs;
        self
    }
}

impl<B: Borrow<Self>, const N: usize> BitOrAssign<B> for Int<N> {
    fn bitor_assign(&mut self, rhs: B) {
        self.repr |= rhs.borrow().repr;
    }
}

impl<B: Borrow<Self>, const N: usize> BitOr<B> for Int<N> {
    type Output = Self;

    fn bitor(mut self, rhs: B) -> Self::Output {
        self |= rhs;
        self
    }
}

impl<const N: usize> Not for Int<N> {
    type Output = Self;

    fn not(self) -> Self::Output {
        (!self.repr).cast_signed()
    }
}

impl<const N: usize> Neg for Int<N> {
    type Output = Self;

    /// Two's complement negation, see [`Int::wrapping_neg`].
    fn neg(self) -> Self::Output {
        self.wrapping_neg()
    }
}

impl<const N: usize> ShlAssign<u32> for Int<N> {
    /// Computes the bitwise shift left operation in place. Shifting left is
    /// sign-agnostic; bits shifted past `BITS` are chopped off.
    fn shl_assign(&mut self, rhs: u32) {
        self.repr <<= rhs;
    }
}

impl<const N: usize> Shl<u32> for Int<N> {
    type Output = Self;

    /// Computes the bitwise shift left operation, chopping off overflowing
    /// bits.
    fn shl(mut self, rhs: u32) -> Self::Output {
        self <<= rhs;
        self
    }
}

impl<const N: usize> ShrAssign<u32> for Int<N> {
    /// Computes the arithmetic shift right operation in place: vacated high
    /// bits take the value of the sign bit. Shifting a negative value by
    /// `BITS` or more saturates to `-1`, a non-negative one to `0`.
    fn shr_assign(&mut self, mut rhs: u32) {
        let fill = if self.is_negative() { Limb::MAX } else { 0 };

        if rhs >= Self::BITS as u32 {
            self.repr.limbs = [fill; N];
            return;
        }

        while rhs >= Limb::BITS {
            let mut t = fill;
            for limb in self.repr.limbs.iter_mut().rev() {
                core::mem::swap(&mut t, limb);
            }
            rhs -= Limb::BITS;
        }

        if rhs > 0 {
            let mut t = fill << (Limb::BITS - rhs);
            for a in self.repr.limbs.iter_mut().rev() {
                let t2 = *a << (Limb::BITS - rhs);
                *a >>= rhs;
                *a |= t;
                t = t2;
            }
        }
    }
}

impl<const N: usize> Shr<u32> for Int<N> {
    type Output = Self;

    /// Computes the arithmetic shift right operation: vacated high bits take
    /// the value of the sign bit.
    fn shr(mut self, rhs: u32) -> Self::Output {
        self >>= rhs;
        self
    }
}

/// Arithmetic operators, all wrapping modulo `2^BITS`, for `Self`, `&Self`
/// and native `i32` operands.
macro_rules! impl_binop {
    ($op:ident, $op_assign:ident, $func:ident, $func_assign:ident, $inner:ident) => {
        impl<const N: usize> $op<Self> for Int<N> {
            type Output = Self;

            fn $func(self, rhs: Self) -> Self::Output {
                self.$inner(&rhs)
            }
        }

        impl<const N: usize> $op<&Self> for Int<N> {
            type Output = Self;

            fn $func(self, rhs: &Self) -> Self::Output {
                self.$inner(rhs)
            }
        }

        impl<const N: usize> $op<i32> for Int<N> {
            type Output = Self;

            fn $func(self, rhs: i32) -> Self::Output {
                self.$inner(&Self::from(rhs))
            }
        }

        impl<const N: usize> $op_assign<Self> for Int<N> {
            fn $func_assign(&mut self, rhs: Self) {
                *self = self.$inner(&rhs);
            }
        }

        impl<const N: usize> $op_assign<&Self> for Int<N> {
            fn $func_assign(&mut self, rhs: &Self) {
                *self = self.$inner(rhs);
            }
        }

        impl<const N: usize> $op_assign<i32> for Int<N> {
            fn $func_assign(&mut self, rhs: i32) {
                *self = self.$inner(&Self::from(rhs));
            }
        }
    };
}

impl<const N: usize> Int<N> {
    #[inline]
    fn div_inner(&self, rhs: &Self) -> Self {
        self.div_rem(rhs).0
    }

    #[inline]
    fn rem_inner(&self, rhs: &Self) -> Self {
        self.div_rem(rhs).1
    }
}

impl_binop!(Add, AddAssign, add, add_assign, wrapping_add);
impl_binop!(Sub, SubAssign, sub, sub_assign, wrapping_sub);
impl_binop!(Mul, MulAssign, mul, mul_assign, wrapping_mul);
impl_binop!(Div, DivAssign, div, div_assign, div_inner);
impl_binop!(Rem, RemAssign, rem, rem_assign, rem_inner);

impl<const N: usize> Display for Int<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> Result {
        write!(f, "{}", self.to_str_radix(10))
    }
}

impl<const N: usize> Debug for Int<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> Result {
        write!(f, "{self}")
    }
}

impl<const N: usize> LowerHex for Int<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> Result {
        write!(f, "{}", self.to_str_radix(16))
    }
}

impl<const N: usize> UpperHex for Int<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> Result {
        let mut s = self.to_str_radix(16);
        s.make_ascii_uppercase();
        write!(f, "{s}")
    }
}

impl<const N: usize> Octal for Int<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> Result {
        write!(f, "{}", self.to_str_radix(8))
    }
}

impl<const N: usize> Binary for Int<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> Result {
        write!(f, "{}", self.to_str_radix(2))
    }
}

impl<const N: usize> BitIteratorBE for Int<N> {
    fn bit_be_iter(&self) -> impl Iterator<Item = bool> {
        self.repr.bit_be_iter()
    }
}

impl<const N: usize> FixedInteger for Int<N> {
    const NUM_LIMBS: usize = N;

    fn is_zero(&self) -> bool {
        Int::is_zero(self)
    }

    fn is_odd(&self) -> bool {
        Int::is_odd(self)
    }

    fn is_even(&self) -> bool {
        Int::is_even(self)
    }

    fn num_bits(&self) -> usize {
        Int::num_bits(self)
    }

    fn get_bit(&self, i: usize) -> bool {
        Int::get_bit(self, i)
    }

    fn set_bit(&mut self, i: usize, value: bool) {
        Int::set_bit(self, i, value);
    }

    fn from_bytes_le(bytes: &[u8]) -> Self {
        Int::from_bytes_le(bytes)
    }

    fn from_bytes_be(bytes: &[u8]) -> Self {
        Int::from_bytes_be(bytes)
    }

    fn into_bytes_le(self) -> Vec<u8> {
        Int::into_bytes_le(self)
    }

    fn into_bytes_be(self) -> Vec<u8> {
        Int::into_bytes_be(self)
    }
}

#[cfg(feature = "rand")]
impl<const N: usize> rand::distr::Distribution<Int<N>>
    for rand::distr::StandardUniform
{
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Int<N> {
        let pattern =
            rand::distr::Distribution::<Uint<N>>::sample(self, rng);
        pattern.cast_signed()
    }
}

//! Limb-level carry and borrow primitives.
//!
//! A [`Limb`] is the 32-bit storage word of [`Uint`](super::uint::Uint);
//! every multi-word algorithm in this crate bottoms out in these helpers.

use num_traits::{ConstOne, ConstZero};

/// One 32-bit storage word of a fixed-width integer.
pub type Limb = u32;
/// The limb array backing an `N`-limb integer, least significant limb first.
pub type Limbs<const N: usize> = [Limb; N];
/// Two limbs' worth of bits, used for intermediate products and sums.
pub type WideLimb = u64;

/// Multiply two [`Limb`]s and return the widened result.
#[inline(always)]
#[must_use]
pub const fn widening_mul(a: Limb, b: Limb) -> WideLimb {
    a as WideLimb * b as WideLimb
}

/// Calculate `a + b * c`, returning the low limb of the result and the high
/// limb as carry.
#[inline(always)]
#[must_use]
pub const fn mac(a: Limb, b: Limb, c: Limb) -> (Limb, Limb) {
    let tmp = a as WideLimb + widening_mul(b, c);
    let carry = (tmp >> Limb::BITS) as Limb;
    (tmp as Limb, carry)
}

/// Calculate `a + (b * c) + carry`, returning the least significant limb
/// and setting carry to the most significant limb.
#[inline(always)]
#[must_use]
pub const fn carrying_mac(
    a: Limb,
    b: Limb,
    c: Limb,
    carry: Limb,
) -> (Limb, Limb) {
    let tmp = a as WideLimb + widening_mul(b, c) + carry as WideLimb;
    let carry = (tmp >> Limb::BITS) as Limb;
    (tmp as Limb, carry)
}

/// Calculate `a + b + carry` and return the result and the new carry.
#[inline(always)]
#[must_use]
pub const fn adc(a: Limb, b: Limb, carry: Limb) -> (Limb, Limb) {
    let tmp = a as WideLimb + b as WideLimb + carry as WideLimb;
    let carry = (tmp >> Limb::BITS) as Limb;
    (tmp as Limb, carry)
}

/// Sets `a = a + b + carry`, and returns the new carry.
#[inline(always)]
pub fn adc_assign(a: &mut Limb, b: Limb, carry: bool) -> bool {
    let (sum, carry1) = a.overflowing_add(b);
    let (sum, carry2) = sum.overflowing_add(carry as Limb);
    *a = sum;
    carry1 | carry2
}

/// Calculate `a - b - borrow` and return the result and the new borrow.
#[inline(always)]
#[must_use]
pub const fn sbb(a: Limb, b: Limb, borrow: Limb) -> (Limb, Limb) {
    let tmp = (WideLimb::ONE << Limb::BITS) + a as WideLimb
        - b as WideLimb
        - borrow as WideLimb;
    let borrow = if tmp >> Limb::BITS == 0 { Limb::ONE } else { Limb::ZERO };
    (tmp as Limb, borrow)
}

/// Sets `a = a - b - borrow`, and returns the new borrow.
#[inline(always)]
pub fn sbb_assign(a: &mut Limb, b: Limb, borrow: bool) -> bool {
    let (sub, borrow1) = a.overflowing_sub(b);
    let (sub, borrow2) = sub.overflowing_sub(borrow as Limb);
    *a = sub;
    borrow1 | borrow2
}

//! Lenient string parsing for fixed-width integers.
//!
//! Strings carry an optional sign, an optional base prefix, and digits.
//! Recognized prefixes: `x`/`X`/`0x`/`0X`/`#` for base 16, `d`/`D`/`0d`/`0D`
//! for base 10 (the default with no prefix), `o`/`O`/`0o`/`0O`/`@` for base
//! 8, and `b`/`B`/`0b`/`0B` for base 2.
//!
//! Parsing is deliberately lenient: characters that are not digits of the
//! active base are skipped, never reported as errors, so `"1_000_000"` and
//! `"1,000,000"` both read as one million. Accumulation wraps modulo
//! `2^BITS`, the same truncation the types apply everywhere else.
//!
//! Every function here is `const`, so parsed constants can be built at
//! compile time through the [`from_num!`](crate::from_num) and
//! [`from_hex!`](crate::from_hex) macros.

use crate::arithmetic::{int::Int, limb::Limb, uint::Uint};

/// Parse an unsigned number from a string in the given radix.
///
/// A `-` appearing before the first digit applies a two's-complement
/// negation to the result, consistent with constructing from a negative
/// native integer.
///
/// # Panics
///
/// Panics if `radix` is not one of 2, 8, 10 or 16.
#[must_use]
pub const fn from_str_radix<const N: usize>(s: &str, radix: u32) -> Uint<N> {
    assert!(
        radix == 2 || radix == 8 || radix == 10 || radix == 16,
        "radix must be 2, 8, 10 or 16"
    );
    parse_bytes(s.as_bytes(), 0, radix)
}

/// Parse an unsigned number from a string, detecting the base from its
/// prefix; without a prefix the base is 10.
#[must_use]
pub const fn from_str_prefixed<const N: usize>(s: &str) -> Uint<N> {
    let bytes = s.as_bytes();
    let (start, radix) = detect_radix(bytes);
    let magnitude = parse_bytes(bytes, start, radix);
    if has_leading_minus(bytes, start) {
        magnitude.wrapping_neg()
    } else {
        magnitude
    }
}

/// Parse a signed number from a string in the given radix. Same contract as
/// [`from_str_radix`]; the resulting bit pattern is read as two's
/// complement.
#[must_use]
pub const fn from_str_radix_signed<const N: usize>(
    s: &str,
    radix: u32,
) -> Int<N> {
    from_str_radix(s, radix).cast_signed()
}

/// Parse a signed number from a string, detecting the base from its prefix.
#[must_use]
pub const fn from_str_prefixed_signed<const N: usize>(s: &str) -> Int<N> {
    from_str_prefixed(s).cast_signed()
}

/// Accumulate digits of `bytes[start..]` in the given radix, skipping
/// characters that are not digits of that radix. A `-` before the first
/// digit negates.
const fn parse_bytes<const N: usize>(
    bytes: &[u8],
    start: usize,
    radix: u32,
) -> Uint<N> {
    let mut result = Uint::<N>::ZERO;
    let mut negative = false;
    let mut seen_digit = false;

    let mut index = start;
    while index < bytes.len() {
        match parse_digit(bytes[index], radix) {
            Some(digit) => {
                result = result
                    .wrapping_mul_limb(radix as Limb)
                    .overflowing_add_limb(digit as Limb)
                    .0;
                seen_digit = true;
            }
            None => {
                if bytes[index] == b'-' && !seen_digit {
                    negative = true;
                }
            }
        }
        index += 1;
    }

    if negative {
        result.wrapping_neg()
    } else {
        result
    }
}

/// Find the base prefix, returning the index of the first byte after it and
/// the base it selects. Sign characters may precede the prefix.
const fn detect_radix(bytes: &[u8]) -> (usize, u32) {
    let mut i = 0;
    while i < bytes.len()
        && (bytes[i] == b'-' || bytes[i] == b'+' || bytes[i] == b' ')
    {
        i += 1;
    }
    if i >= bytes.len() {
        return (i, 10);
    }

    match bytes[i] {
        b'x' | b'X' | b'#' => (i + 1, 16),
        b'd' | b'D' => (i + 1, 10),
        b'o' | b'O' | b'@' => (i + 1, 8),
        b'b' | b'B' => (i + 1, 2),
        b'0' if i + 1 < bytes.len() => match bytes[i + 1] {
            b'x' | b'X' => (i + 2, 16),
            b'd' | b'D' => (i + 2, 10),
            b'o' | b'O' => (i + 2, 8),
            b'b' | b'B' => (i + 2, 2),
            _ => (i, 10),
        },
        _ => (i, 10),
    }
}

/// Whether a `-` appears among the sign/prefix bytes before `end`.
const fn has_leading_minus(bytes: &[u8], end: usize) -> bool {
    let mut i = 0;
    while i < end && i < bytes.len() {
        if bytes[i] == b'-' {
            return true;
        }
        i += 1;
    }
    false
}

/// Try to read one digit in the given radix from a byte.
const fn parse_digit(byte: u8, radix: u32) -> Option<u32> {
    let value = match byte {
        b'0'..=b'9' => (byte - b'0') as u32,
        b'a'..=b'z' => (byte - b'a') as u32 + 10,
        b'A'..=b'Z' => (byte - b'A') as u32 + 10,
        _ => return None,
    };
    if value < radix {
        Some(value)
    } else {
        None
    }
}

/// This macro converts a string base-10 number to a big integer.
#[macro_export]
macro_rules! from_num {
    ($num:literal) => {
        $crate::arithmetic::parse::from_str_radix($num, 10)
    };
}

/// This macro converts a string hex number to a big integer.
#[macro_export]
macro_rules! from_hex {
    ($num:literal) => {
        $crate::arithmetic::parse::from_str_radix($num, 16)
    };
}

#[cfg(all(test, feature = "std"))]
mod test {
    use num_bigint::BigUint;
    use proptest::prelude::*;

    use super::*;
    use crate::arithmetic::uint::U128;

    #[test]
    fn hex_prefix_equals_native_value() {
        let parsed: U128 = from_str_prefixed("0xFF");
        assert_eq!(parsed, U128::from(255u32));
        assert_eq!(from_str_prefixed::<4>("#ff"), parsed);
        assert_eq!(from_str_prefixed::<4>("X00FF"), parsed);
    }

    #[test]
    fn prefixes_select_bases() {
        assert_eq!(from_str_prefixed::<4>("@17"), U128::from(0o17u32));
        assert_eq!(from_str_prefixed::<4>("0o17"), U128::from(0o17u32));
        assert_eq!(from_str_prefixed::<4>("b1010"), U128::from(10u32));
        assert_eq!(from_str_prefixed::<4>("0B1010"), U128::from(10u32));
        assert_eq!(from_str_prefixed::<4>("d42"), U128::from(42u32));
        assert_eq!(from_str_prefixed::<4>("0d42"), U128::from(42u32));
        assert_eq!(from_str_prefixed::<4>("42"), U128::from(42u32));
        // A leading zero alone does not start a prefix.
        assert_eq!(from_str_prefixed::<4>("0777"), U128::from(777u32));
    }

    #[test]
    fn unrecognized_characters_are_skipped() {
        assert_eq!(
            from_str_radix::<4>("1_000,000", 10),
            U128::from(1_000_000u32)
        );
        assert_eq!(from_str_radix::<4>("de ad", 16), U128::from(0xDEADu32));
        // Digits past the base are skipped too, not reinterpreted.
        assert_eq!(from_str_radix::<4>("192", 2), U128::ONE);
        assert_eq!(from_str_radix::<4>("", 10), U128::ZERO);
    }

    #[test]
    fn minus_applies_twos_complement() {
        assert_eq!(
            from_str_radix::<4>("-5", 10),
            U128::from(5u32).wrapping_neg()
        );
        assert_eq!(from_str_prefixed::<4>("-0x10"), U128::from(-16i32));
        assert_eq!(
            from_str_prefixed_signed::<4>("-0x10").low_i32(),
            -16i32
        );
    }

    #[test]
    fn accumulation_wraps_at_width() {
        // 2^128 wraps to zero in 128 bits.
        let parsed: U128 =
            from_str_radix("340282366920938463463374607431768211456", 10);
        assert_eq!(parsed, U128::ZERO);
    }

    #[test]
    fn const_evaluation() {
        const ANSWER: U128 = from_num!("299792458");
        const MASK: U128 = from_hex!("ffffffff00000000");
        assert_eq!(ANSWER, U128::from(299_792_458u32));
        assert_eq!(MASK, U128::from(0xFFFF_FFFF_0000_0000u64));
    }

    #[test]
    fn decimal_matches_oracle() {
        proptest!(|(digits in "[0-9]{1,38}")| {
            let parsed: U128 = from_str_radix(&digits, 10);
            let expected: BigUint = digits.parse::<BigUint>().unwrap()
                % (BigUint::from(1u8) << 128);
            let mut bytes = expected.to_bytes_le();
            bytes.resize(U128::BYTES, 0);
            prop_assert_eq!(parsed, U128::from_bytes_le(&bytes));
        });
    }

    #[test]
    fn parse_display_round_trip() {
        proptest!(|(limbs: [u32; 4])| {
            let value = U128::new(limbs);
            let parsed: U128 = from_str_radix(&value.to_str_radix(10), 10);
            prop_assert_eq!(parsed, value);
            let parsed: U128 = from_str_radix(&value.to_str_radix(16), 16);
            prop_assert_eq!(parsed, value);
        });
    }
}

/*!
Stack-allocated fixed-width big integers.

Two value types cover every width that is a multiple of 32 bits:

- [`Uint<N>`](arithmetic::Uint) — an unsigned integer over `N` 32-bit limbs,
  with wrapping arithmetic, restoring division, shifts and rotates, bit and
  byte accessors, radix parsing/formatting, and integer algorithms (roots,
  powers, modular exponentiation, primality, power-of-two helpers).
- [`Int<N>`](arithmetic::Int) — the two's-complement signed reading of the
  same storage, overriding only the sign-sensitive operations: division,
  arithmetic right shift, ordering, multiplication sign rule, and float
  conversion.

Aliases [`U64`]/[`I64`] through [`U512`]/[`I512`] pick common widths:

```
use fixint::{from_num, U256};

const BIG: U256 = from_num!("340282366920938463463374607431768211456");

let a = U256::from(u128::MAX);
assert_eq!(a + 1u32, BIG);
assert_eq!(BIG.checked_ilog2(), Some(128));
```

Overflow wraps modulo `2^BITS` everywhere, like the native fixed-width
integers; only division by zero is a hard failure, and it is available in
both panicking (`/`, [`div_rem`](arithmetic::Uint::div_rem)) and checked
([`checked_div`](arithmetic::Uint::checked_div)) forms.
*/

#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

#[macro_use]
pub mod const_helpers;
#[macro_use]
pub mod arithmetic;
pub mod bits;

pub use arithmetic::{
    int::{I128, I160, I192, I256, I32, I384, I512, I64, I96},
    uint::{U128, U160, U192, U256, U32, U384, U512, U64, U96},
    FixedInteger, Int, Limb, Limbs, Uint, WideLimb, WideUint,
};

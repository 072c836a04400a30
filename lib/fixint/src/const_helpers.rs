//! Loop helpers usable in `const fn` contexts.

/// Iterate `$i` over `$start..$end` in a `const fn` body, where `for` loops
/// are not yet allowed.
#[macro_export]
macro_rules! const_for {
    (($i:ident in $start:tt..$end:tt)  $code:expr ) => {{
        let mut $i = $start;
        while $i < $end {
            $code
            $i += 1;
        }
    }};
}

/// Iterate `$i` over `$start..$end` in reverse, from `$end - 1` down to
/// `$start`, in a `const fn` body.
#[macro_export]
macro_rules! const_for_rev {
    (($i:ident in $start:tt..$end:tt)  $code:expr ) => {{
        let mut $i = $end;
        while $i > $start {
            $i -= 1;
            $code
        }
    }};
}

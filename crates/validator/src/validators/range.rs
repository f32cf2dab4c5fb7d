//! Numeric range validators

use crate::macros::predicate;
use crate::value::to_number;

predicate! {
    /// Valid iff the value is empty, or numeric and at least `n`.
    pub fn min(ctx, min: number) when present {
        to_number(ctx.value).is_some_and(|v| v >= min)
    }
}

predicate! {
    /// Valid iff the value is empty, or numeric and at most `n`.
    pub fn max(ctx, max: number) when present {
        to_number(ctx.value).is_some_and(|v| v <= max)
    }
}

//! Presence validator

use crate::macros::predicate;
use crate::value::is_truthy;

predicate! {
    /// Valid iff the value is truthy.
    ///
    /// `null`, `false`, `0` and `""` (including whitespace-only text, which
    /// the snapshot trims to `""`) are missing.
    pub fn required(ctx) { is_truthy(ctx.value) }
}

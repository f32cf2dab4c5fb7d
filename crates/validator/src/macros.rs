//! Macros for declaring predicates with minimal boilerplate.
//!
//! # Examples
//!
//! ```rust,ignore
//! // Presence check: sees every value, falsy included.
//! predicate! {
//!     pub fn required(ctx) { is_truthy(ctx.value) }
//! }
//!
//! // Optional check: falsy values pass before the body runs.
//! predicate! {
//!     pub fn min_length(ctx, min: number) when present {
//!         length(ctx.value).is_some_and(|len| len as f64 >= min)
//!     }
//! }
//! ```

// ============================================================================
// PREDICATE MACRO
// ============================================================================

/// Creates a predicate function with the signature the
/// [`Registry`](crate::Registry) expects.
///
/// The body is an expression evaluating to `bool`.
///
/// # Variants
///
/// **Unconditional** (body sees every value):
/// ```rust,ignore
/// predicate! { pub fn required(ctx) { is_truthy(ctx.value) } }
/// ```
///
/// **`when present`** (falsy values are valid without evaluating the body):
/// ```rust,ignore
/// predicate! { pub fn email(ctx) when present { matches(ctx.value) } }
/// ```
///
/// **`when present` with a numeric argument** (falsy values pass without
/// reading the argument; otherwise a missing or non-numeric argument #0 is
/// an error):
/// ```rust,ignore
/// predicate! { pub fn min(ctx, min: number) when present { ... } }
/// ```
macro_rules! predicate {
    // ── Variant 1: unconditional ─────────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis fn $name:ident($ctx:ident) $body:block
    ) => {
        $(#[$meta])*
        $vis fn $name(
            $ctx: &$crate::registry::Context<'_>,
            _args: &[serde_json::Value],
        ) -> Result<bool, $crate::error::PredicateError> {
            Ok($body)
        }
    };

    // ── Variant 2: falsy passes ──────────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis fn $name:ident($ctx:ident) when present $body:block
    ) => {
        $(#[$meta])*
        $vis fn $name(
            $ctx: &$crate::registry::Context<'_>,
            _args: &[serde_json::Value],
        ) -> Result<bool, $crate::error::PredicateError> {
            if !$crate::value::is_truthy($ctx.value) {
                return Ok(true);
            }
            Ok($body)
        }
    };

    // ── Variant 3: falsy passes, one numeric argument ────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis fn $name:ident($ctx:ident, $arg:ident: number) when present $body:block
    ) => {
        $(#[$meta])*
        $vis fn $name(
            $ctx: &$crate::registry::Context<'_>,
            args: &[serde_json::Value],
        ) -> Result<bool, $crate::error::PredicateError> {
            if !$crate::value::is_truthy($ctx.value) {
                return Ok(true);
            }
            let $arg = $crate::value::number_arg(args, 0)?;
            Ok($body)
        }
    };
}

pub(crate) use predicate;

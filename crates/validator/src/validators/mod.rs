//! Built-in validators
//!
//! Every [`Registry::with_builtins`](crate::Registry::with_builtins) registry,
//! the global one included, starts with these six predicates:
//!
//! | name        | valid iff                                        |
//! |-------------|--------------------------------------------------|
//! | `required`  | value is truthy                                  |
//! | `email`     | value falsy, or `local@domain.tld`               |
//! | `minLength` | value falsy, or length ≥ n                       |
//! | `maxLength` | value falsy, or length ≤ n                       |
//! | `min`       | value falsy, or numeric and ≥ n                  |
//! | `max`       | value falsy, or numeric and ≤ n                  |
//!
//! Only `required` enforces presence. The others treat an empty value as
//! valid so rules compose independently of each other.

pub mod content;
pub mod length;
pub mod presence;
pub mod range;

pub use content::email;
pub use length::{max_length, min_length};
pub use presence::required;
pub use range::{max, min};

use crate::registry::Registry;

/// Registered names of the built-in validators.
pub mod names {
    /// `required`
    pub const REQUIRED: &str = "required";
    /// `email`
    pub const EMAIL: &str = "email";
    /// `minLength(n)`
    pub const MIN_LENGTH: &str = "minLength";
    /// `maxLength(n)`
    pub const MAX_LENGTH: &str = "maxLength";
    /// `min(n)`
    pub const MIN: &str = "min";
    /// `max(n)`
    pub const MAX: &str = "max";
}

pub(crate) fn register_builtins(registry: &Registry) {
    registry.add_validator(names::REQUIRED, required);
    registry.add_validator(names::EMAIL, email);
    registry.add_validator(names::MIN_LENGTH, min_length);
    registry.add_validator(names::MAX_LENGTH, max_length);
    registry.add_validator(names::MIN, min);
    registry.add_validator(names::MAX, max);
}

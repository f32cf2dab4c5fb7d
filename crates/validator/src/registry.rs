//! Validator registry.
//!
//! Maps validator names to predicates. A process-wide instance, seeded with
//! the built-ins, backs the free functions ([`add_validator`],
//! [`validate`](crate::validate), ...). Callers that need isolation (tests,
//! multi-tenant setups) build their own [`Registry`] and run it through a
//! [`Runner`](crate::Runner).
//!
//! Registrations on the global instance live for the rest of the process.
//! Nothing resets them between runs or between tests.

use crate::error::PredicateError;
use crate::validators;
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

/// What a predicate sees when it is evaluated.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    /// Name of the field being checked.
    pub field: &'a str,
    /// The field's snapshot: trimmed if textual, `null` if missing.
    pub value: &'a Value,
    /// The full model record being validated.
    pub model: &'a Value,
}

/// A named validity check.
///
/// Receives the evaluation [`Context`] and the positional arguments given at
/// the call site, and returns whether the value is valid.
pub type Predicate =
    Arc<dyn Fn(&Context<'_>, &[Value]) -> Result<bool, PredicateError> + Send + Sync>;

/// Table of validator name → predicate.
pub struct Registry {
    validators: RwLock<HashMap<String, Predicate>>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            validators: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a registry seeded with the built-in validators.
    #[must_use]
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        validators::register_builtins(&registry);
        registry
    }

    /// Registers `predicate` under `name`.
    ///
    /// An existing predicate with the same name, built-in or not, is replaced.
    pub fn add_validator<F>(&self, name: impl Into<String>, predicate: F)
    where
        F: Fn(&Context<'_>, &[Value]) -> Result<bool, PredicateError> + Send + Sync + 'static,
    {
        self.insert(name.into(), Arc::new(predicate));
    }

    /// Registers an already shared predicate under `name`.
    pub fn add_shared(&self, name: impl Into<String>, predicate: Predicate) {
        self.insert(name.into(), predicate);
    }

    fn insert(&self, name: String, predicate: Predicate) {
        let overwrote = self
            .validators
            .write()
            .insert(name.clone(), predicate)
            .is_some();
        tracing::debug!(validator = %name, overwrote, "registered validator");
    }

    /// Looks up a predicate by name.
    ///
    /// The predicate is cloned out so the lock is not held while it runs.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Predicate> {
        self.validators.read().get(name).cloned()
    }

    /// Returns whether `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.validators.read().contains_key(name)
    }

    /// Removes a predicate. Returns whether one was registered.
    pub fn remove(&self, name: &str) -> bool {
        self.validators.write().remove(name).is_some()
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.validators.read().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered validators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.validators.read().len()
    }

    /// Returns whether no validators are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.validators.read().is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("validators", &self.names())
            .finish()
    }
}

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::with_builtins);

/// The process-wide registry, seeded with the built-ins on first access.
pub fn global() -> &'static Registry {
    &GLOBAL
}

/// Registers `predicate` under `name` in the global registry.
///
/// Last registration wins, including over built-ins.
///
/// # Examples
///
/// ```
/// use skymma_validator::{add_validator, validate_as_object, Check, ValidateError};
/// use serde_json::json;
///
/// add_validator("mustBeBulle", |ctx, args| Ok(args.first() == Some(ctx.value)));
///
/// fn rules(check: &mut Check<'_>) -> Result<(), ValidateError> {
///     check.field("username").invoke("mustBeBulle", &[json!("a bulle")])?;
///     Ok(())
/// }
/// let report = validate_as_object(&json!({ "username": "a bulle" }), Some(&rules)).unwrap();
/// assert_eq!(report.failed("username", "mustBeBulle"), Some(false));
/// ```
pub fn add_validator<F>(name: impl Into<String>, predicate: F)
where
    F: Fn(&Context<'_>, &[Value]) -> Result<bool, PredicateError> + Send + Sync + 'static,
{
    global().add_validator(name, predicate);
}

//! Rule tables and the sanitizer/validator registry.
//!
//! A [`RuleSpec`] names its sanitizers and validators as strings so rule
//! tables can live in CMS configuration. [`RuleSet::compile`] resolves those
//! names against a [`Registry`] up front — an unknown name is a
//! [`RuleError`] at compile time, not a silent no-op at run time.

use std::collections::HashMap;

use serde::Deserialize;

use super::{sanitizers, validators};

/// A sanitizer takes the field's current value and returns the replacement.
pub type SanitizeFn = fn(&str) -> String;

/// A validator answers pass/fail for the field's (sanitized) value.
pub type ValidateFn = fn(&str) -> bool;

/// A rule-table entry that failed to resolve.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("Unknown sanitizer `{name}` for field `{field}`")]
    UnknownSanitizer { field: String, name: String },

    #[error("Unknown validator `{name}` for field `{field}`")]
    UnknownValidator { field: String, name: String },
}

/// Name → function lookup for rule compilation.
///
/// [`Registry::with_builtins`] installs the fixed built-in set; host code
/// can extend it with its own entries before compiling rule tables.
pub struct Registry {
    sanitizers: HashMap<String, SanitizeFn>,
    validators: HashMap<String, ValidateFn>,
}

impl Registry {
    /// An empty registry with no entries.
    pub fn new() -> Self {
        Self {
            sanitizers: HashMap::new(),
            validators: HashMap::new(),
        }
    }

    /// A registry pre-loaded with every built-in sanitizer and validator.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();

        registry.register_sanitizer("scrub_whitespace", sanitizers::scrub_whitespace);
        registry.register_sanitizer("sanitize_phone", sanitizers::sanitize_phone);
        registry.register_sanitizer("sanitize_email", sanitizers::sanitize_email);
        registry.register_sanitizer("sanitize_text", sanitizers::sanitize_text);
        registry.register_sanitizer("sanitize_key", sanitizers::sanitize_key);

        registry.register_validator("is_alphabetic", validators::is_alphabetic);
        registry.register_validator("is_extant", validators::is_extant);
        registry.register_validator("is_numeric", validators::is_numeric);
        registry.register_validator("is_phone", validators::is_phone);
        registry.register_validator("is_us_state", validators::is_us_state);
        registry.register_validator("is_us_zip_code", validators::is_us_zip_code);
        registry.register_validator("is_email", validators::is_email);

        registry
    }

    /// Register (or replace) a sanitizer under `name`.
    pub fn register_sanitizer(&mut self, name: impl Into<String>, f: SanitizeFn) {
        self.sanitizers.insert(name.into(), f);
    }

    /// Register (or replace) a validator under `name`.
    pub fn register_validator(&mut self, name: impl Into<String>, f: ValidateFn) {
        self.validators.insert(name.into(), f);
    }

    fn sanitizer(&self, name: &str) -> Option<SanitizeFn> {
        self.sanitizers.get(name).copied()
    }

    fn validator(&self, name: &str) -> Option<ValidateFn> {
        self.validators.get(name).copied()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

/// One field's processing instructions, as written in configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleSpec {
    /// Human-readable field name used in messages ("Zip Code is required.").
    pub label: String,
    #[serde(default)]
    pub required: bool,
    /// Sanitizer names, applied in order.
    #[serde(default)]
    pub sanitize: Vec<String>,
    /// Validator names, applied in order.
    #[serde(default)]
    pub validate: Vec<String>,
}

/// A [`RuleSpec`] with its names resolved to functions.
#[derive(Debug)]
pub(crate) struct CompiledRule {
    pub label: String,
    pub required: bool,
    pub sanitize: Vec<SanitizeFn>,
    /// Validator names are kept for failure messages.
    pub validate: Vec<(String, ValidateFn)>,
}

/// An ordered, compiled rule table.
///
/// Fields are processed in table order, and callers may rely on message
/// ordering matching it.
#[derive(Debug)]
pub struct RuleSet {
    rules: Vec<(String, CompiledRule)>,
}

impl RuleSet {
    /// Resolve a rule table against `registry`.
    ///
    /// Entry order is preserved. Fails on the first unknown sanitizer or
    /// validator name.
    pub fn compile<I>(specs: I, registry: &Registry) -> Result<Self, RuleError>
    where
        I: IntoIterator<Item = (String, RuleSpec)>,
    {
        let mut rules = Vec::new();

        for (field, spec) in specs {
            let mut sanitize = Vec::with_capacity(spec.sanitize.len());
            for name in &spec.sanitize {
                let f = registry
                    .sanitizer(name)
                    .ok_or_else(|| RuleError::UnknownSanitizer {
                        field: field.clone(),
                        name: name.clone(),
                    })?;
                sanitize.push(f);
            }

            let mut validate = Vec::with_capacity(spec.validate.len());
            for name in &spec.validate {
                let f = registry
                    .validator(name)
                    .ok_or_else(|| RuleError::UnknownValidator {
                        field: field.clone(),
                        name: name.clone(),
                    })?;
                validate.push((name.clone(), f));
            }

            rules.push((
                field,
                CompiledRule {
                    label: spec.label,
                    required: spec.required,
                    sanitize,
                    validate,
                },
            ));
        }

        Ok(Self { rules })
    }

    /// Whether the table has an entry for `field`.
    pub fn contains(&self, field: &str) -> bool {
        self.rules.iter().any(|(name, _)| name == field)
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &(String, CompiledRule)> {
        self.rules.iter()
    }
}

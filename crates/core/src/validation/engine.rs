//! The sanitize → validate pipeline.

use std::collections::HashMap;

use super::rules::RuleSet;
use super::validators::is_extant;

/// Result of one [`Validation::run`] call.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Raw input restricted to rule-table fields, with sanitizer mutations
    /// applied. Fields absent from the table are dropped silently.
    pub cleaned: HashMap<String, String>,
    /// True iff no required check and no validator failed in this run.
    pub is_valid: bool,
    /// Everything accumulated on this engine so far, in rule-table order
    /// within each run.
    pub messages: Vec<String>,
}

/// Runs rule tables over form submissions and collects messages.
///
/// Messages accumulate across `run` calls on the same engine until
/// [`reset`](Self::reset) is called. That is intentional: a handler can
/// validate several related submissions and render one combined message
/// list. Validity, by contrast, is reported per run.
#[derive(Debug, Default)]
pub struct Validation {
    messages: Vec<String>,
}

impl Validation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process `raw` against `rules`.
    ///
    /// Per field, in rule-table order:
    /// 1. a required field that is missing or falsy (empty or `"0"`) fails
    ///    with `"<label> is required."` and is not processed further;
    /// 2. sanitizers run in listed order, each replacing the value;
    /// 3. validators run in listed order against the sanitized value; a
    ///    failure is only recorded while the value is truthy, and each
    ///    failure appends `"<label> failed validation: <name>"`.
    pub fn run(&mut self, raw: &HashMap<String, String>, rules: &RuleSet) -> RunOutcome {
        let mut valid = true;

        // Intersection of submitted fields and rule-table fields; sanitizers
        // mutate these entries in place.
        let mut cleaned: HashMap<String, String> = raw
            .iter()
            .filter(|(field, _)| rules.contains(field))
            .map(|(field, value)| (field.clone(), value.clone()))
            .collect();

        for (field, rule) in rules.iter() {
            if rule.required && !cleaned.get(field).is_some_and(|v| is_extant(v)) {
                self.messages.push(format!("{} is required.", rule.label));
                valid = false;
                continue;
            }

            let Some(value) = cleaned.get_mut(field) else {
                continue;
            };

            for sanitize in &rule.sanitize {
                *value = sanitize(value);
            }

            for (name, check) in &rule.validate {
                if !check(value) && is_extant(value) {
                    self.messages
                        .push(format!("{} failed validation: {}", rule.label, name));
                    valid = false;
                }
            }
        }

        RunOutcome {
            cleaned,
            is_valid: valid,
            messages: self.messages.clone(),
        }
    }

    /// Messages accumulated so far.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Clear accumulated messages before an unrelated submission.
    pub fn reset(&mut self) {
        self.messages.clear();
    }
}

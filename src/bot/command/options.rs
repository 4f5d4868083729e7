//! Typed access to slash command options.

use serenity::all::{ResolvedOption, ResolvedValue};
use std::collections::HashMap;

/// Options supplied with a slash command invocation, keyed by option name.
///
/// Accessors return `None` both for options the member left out and for options
/// whose value has a different type, so callers fall back to their defaults.
pub struct CommandOptions<'a> {
    values: HashMap<&'a str, ResolvedValue<'a>>,
}

impl<'a> CommandOptions<'a> {
    pub fn new(options: Vec<ResolvedOption<'a>>) -> Self {
        Self::from_values(options.into_iter().map(|option| (option.name, option.value)))
    }

    pub fn from_values(values: impl IntoIterator<Item = (&'a str, ResolvedValue<'a>)>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    pub fn string(&self, name: &str) -> Option<&'a str> {
        match self.values.get(name) {
            Some(ResolvedValue::String(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn integer(&self, name: &str) -> Option<i64> {
        match self.values.get(name) {
            Some(ResolvedValue::Integer(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        match self.values.get(name) {
            Some(ResolvedValue::Number(value)) => Some(*value),
            // Discord sends whole numbers for NUMBER options as integers
            Some(ResolvedValue::Integer(value)) => Some(*value as f64),
            _ => None,
        }
    }

    pub fn boolean(&self, name: &str) -> Option<bool> {
        match self.values.get(name) {
            Some(ResolvedValue::Boolean(value)) => Some(*value),
            _ => None,
        }
    }
}

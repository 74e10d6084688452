use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::pattern::{PatternError, PatternResult};

/// Built-in validation classes and the expressions they stand for.
const VALIDATION_CLASSES: &[(&str, &str)] = &[
    ("int", r"[0-9]+"),
    ("word", r"\w+"),
    ("alpha", r"[A-Za-z]+"),
    ("hex", r"[0-9A-Fa-f]+"),
    ("any", r".+"),
];

/// Constraint attached to one named capture of a parameter segment.
///
/// `min_length` and `max_length` use `0` for "unbounded" in that direction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteOption {
    pub validation: String,
    pub setting: String,
    pub min_length: u8,
    pub max_length: u8,
}

impl RouteOption {
    pub fn is_unconstrained(&self) -> bool {
        self.validation.is_empty() && self.min_length == 0 && self.max_length == 0
    }

    /// Expression backing `validation`, with built-in classes expanded.
    pub fn validation_source(&self) -> Option<&str> {
        if self.validation.is_empty() {
            return None;
        }
        let expanded = VALIDATION_CLASSES
            .iter()
            .find(|(class, _)| *class == self.validation)
            .map(|(_, source)| *source)
            .unwrap_or(self.validation.as_str());
        Some(expanded)
    }

    /// Anchored regex for the validation, or `None` when the capture is unconstrained.
    pub fn validation_regex(&self, name: &str) -> PatternResult<Option<Regex>> {
        let Some(source) = self.validation_source() else {
            return Ok(None);
        };

        Regex::new(&format!("^(?:{})$", source))
            .map(Some)
            .map_err(|err| PatternError::InvalidValidation {
                name: name.to_string(),
                validation: self.validation.clone(),
                error: err.to_string(),
            })
    }

    /// Checks a captured value's length (in chars) against the bounds.
    pub fn accepts_length(&self, value: &str) -> bool {
        let len = value.chars().count();
        (self.min_length == 0 || len >= self.min_length as usize)
            && (self.max_length == 0 || len <= self.max_length as usize)
    }
}

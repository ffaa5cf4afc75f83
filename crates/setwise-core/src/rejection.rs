//! Type-erased rejection records.
//!
//! [`Exclusion`] is generic over the rejected value's type, which keeps it
//! matchable but makes it awkward to report exclusions from different
//! fields side by side. [`Rejection`] flattens one into plain text.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::membership::Exclusion;

/// A rejection rendered to text, ready for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rejection {
    /// Record field the value was supplied for, when known.
    pub field: Option<String>,
    /// Canonical textual form of the rejecting expression.
    pub expression: String,
    /// The rejected value, as displayed.
    pub value: String,
    /// Identifiers of the leaf rules responsible for the rejection.
    pub failing_rules: Vec<String>,
}

impl Rejection {
    /// Attach the record field the value belonged to.
    #[must_use]
    pub fn for_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Default human-readable message.
    pub fn message(&self) -> String {
        let subject = match &self.field {
            Some(field) => format!("{field} {:?}", self.value),
            None => format!("{:?}", self.value),
        };
        if self.failing_rules.is_empty() {
            format!("{subject} does not satisfy {}", self.expression)
        } else {
            format!(
                "{subject} does not satisfy {} (failed: {})",
                self.expression,
                self.failing_rules.join(", ")
            )
        }
    }
}

impl<T: fmt::Display> From<&Exclusion<T>> for Rejection {
    fn from(exclusion: &Exclusion<T>) -> Self {
        Self {
            field: None,
            expression: exclusion.expression().describe(),
            value: exclusion.value().to_string(),
            failing_rules: exclusion
                .failing_rules()
                .into_iter()
                .map(|rule| rule.id().to_string())
                .collect(),
        }
    }
}

impl<T: fmt::Display> From<Exclusion<T>> for Rejection {
    fn from(exclusion: Exclusion<T>) -> Self {
        Self::from(&exclusion)
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

//! Membership evaluation.
//!
//! [`might_describe`] decides whether a raw value belongs to the set an
//! [`Expr`] describes. A member comes back as a [`Verified`] value, a
//! non-member as an [`Exclusion`]. Neither type has a public constructor,
//! so holding a `Verified<T>` is proof that evaluation succeeded.

use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::trace;

use crate::expr::Expr;
use crate::rule::Rule;

/// Outcome of a single membership check.
pub type Outcome<T> = Result<Verified<T>, Exclusion<T>>;

/// Check `raw` against `expression`.
///
/// A false result is the expected negative path and is returned as an
/// [`Exclusion`]. A predicate that panics is not caught.
///
/// # Example
///
/// ```
/// use setwise_core::{Expr, Rule, might_describe};
///
/// let db_id: Expr<i64> = Rule::range("DbId", 0..2_000_000_i64).into();
///
/// let verified = might_describe(&db_id, 123).unwrap();
/// assert_eq!(verified.to_string(), "{ 123 ∈ DbId }");
///
/// let excluded = might_describe(&db_id, -1).unwrap_err();
/// assert_eq!(*excluded.value(), -1);
/// ```
pub fn might_describe<T>(expression: &Expr<T>, raw: T) -> Outcome<T> {
    if expression.evaluate(&raw) {
        trace!(expression = %expression, "value admitted");
        Ok(Verified {
            value: raw,
            expression: expression.clone(),
        })
    } else {
        trace!(expression = %expression, "value excluded");
        Err(Exclusion {
            expression: expression.clone(),
            value: raw,
        })
    }
}

impl<T> Expr<T> {
    /// Method form of [`might_describe`].
    pub fn might_describe(&self, raw: T) -> Outcome<T> {
        might_describe(self, raw)
    }
}

/// A value that satisfied an expression.
///
/// Only [`might_describe`] can build one. Equality and hashing use the
/// descriptive string `{ <value> ∈ <expression> }`.
pub struct Verified<T> {
    value: T,
    expression: Expr<T>,
}

impl<T> Verified<T> {
    /// The verified value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Expression the value was verified against.
    pub fn expression(&self) -> &Expr<T> {
        &self.expression
    }

    /// Drop the proof and keep the value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> AsRef<T> for Verified<T> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<T: Clone> Clone for Verified<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            expression: self.expression.clone(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Verified<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ {} ∈ {} }}", self.value, self.expression)
    }
}

impl<T: fmt::Debug> fmt::Debug for Verified<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Verified")
            .field("value", &self.value)
            .field("expression", &self.expression)
            .finish()
    }
}

impl<T: fmt::Display> PartialEq for Verified<T> {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl<T: fmt::Display> Eq for Verified<T> {}

impl<T: fmt::Display> Hash for Verified<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

/// A value rejected by an expression.
pub struct Exclusion<T> {
    expression: Expr<T>,
    value: T,
}

impl<T> Exclusion<T> {
    /// Expression that rejected the value.
    pub fn expression(&self) -> &Expr<T> {
        &self.expression
    }

    /// The rejected value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Split into the rejecting expression and the rejected value.
    pub fn into_parts(self) -> (Expr<T>, T) {
        (self.expression, self.value)
    }

    /// Leaf rules responsible for the rejection.
    ///
    /// See [`Expr::contradicting_rules`].
    pub fn failing_rules(&self) -> Vec<&Rule<T>> {
        self.expression.contradicting_rules(&self.value)
    }
}

impl<T: Clone> Clone for Exclusion<T> {
    fn clone(&self) -> Self {
        Self {
            expression: self.expression.clone(),
            value: self.value.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for Exclusion<T> {
    fn eq(&self, other: &Self) -> bool {
        self.expression == other.expression && self.value == other.value
    }
}

impl<T: Eq> Eq for Exclusion<T> {}

impl<T: fmt::Display> fmt::Display for Exclusion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ∉ {}", self.value, self.expression)
    }
}

impl<T: fmt::Debug> fmt::Debug for Exclusion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Exclusion")
            .field("expression", &self.expression)
            .field("value", &self.value)
            .finish()
    }
}

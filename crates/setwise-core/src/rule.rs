//! Named predicate rules.
//!
//! A [`Rule`] is the leaf of the rule algebra: an identifier plus a pure,
//! total test over a base value type. Rules are declared once, shared by
//! every evaluation, and never mutated.
//!
//! # Equality
//!
//! Rules compare and hash by identifier only. Two rules with the same
//! identifier are interchangeable for equality purposes even when their
//! predicates differ, so identifiers should be unique within a domain.
//!
//! # Faulty predicates
//!
//! A predicate that panics on some input is a programming error in the
//! domain declaration. The panic propagates out of evaluation; it is never
//! turned into an [`Exclusion`](crate::Exclusion).

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::RangeBounds;
use std::sync::Arc;

use regex::Regex;

use crate::error::{Result, RuleError};

type Predicate<T> = dyn Fn(&T) -> bool + Send + Sync;

/// A named, pure boolean test over values of type `T`.
///
/// # Example
///
/// ```
/// use setwise_core::Rule;
///
/// let even = Rule::new("Even", |value: &i64| value % 2 == 0);
///
/// assert_eq!(even.id(), "Even");
/// assert!(even.test(&4));
/// assert!(!even.test(&7));
/// ```
pub struct Rule<T> {
    id: Arc<str>,
    predicate: Arc<Predicate<T>>,
}

impl<T> Rule<T> {
    /// Declare a rule from an identifier and a predicate.
    ///
    /// No validation is performed here. The predicate must be total over
    /// `T` and must not observe or mutate external state.
    pub fn new<F>(id: impl Into<Arc<str>>, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            predicate: Arc::new(predicate),
        }
    }

    /// Identifier used for diagnostics and equality.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Apply the predicate to a value.
    pub fn test(&self, value: &T) -> bool {
        (self.predicate)(value)
    }
}

impl<T> Rule<T>
where
    T: PartialOrd + Send + Sync + 'static,
{
    /// Rule admitting values inside `bounds`.
    ///
    /// ```
    /// use setwise_core::Rule;
    ///
    /// let db_id = Rule::range("DbId", 0..2_000_000_i64);
    /// assert!(db_id.test(&0));
    /// assert!(!db_id.test(&2_000_000));
    /// ```
    pub fn range<R>(id: impl Into<Arc<str>>, bounds: R) -> Self
    where
        R: RangeBounds<T> + Send + Sync + 'static,
    {
        Self::new(id, move |value: &T| bounds.contains(value))
    }
}

impl<T> Rule<T>
where
    T: PartialEq + Send + Sync + 'static,
{
    /// Rule admitting exactly the listed values.
    pub fn one_of<I>(id: impl Into<Arc<str>>, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<T>,
    {
        let allowed: Vec<T> = values.into_iter().map(Into::into).collect();
        Self::new(id, move |value: &T| allowed.contains(value))
    }
}

impl Rule<String> {
    /// Rule admitting strings that match a regular expression.
    ///
    /// The pattern is compiled here, so a malformed pattern is reported at
    /// declaration time instead of faulting during evaluation.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::InvalidPattern`] if `pattern` does not compile.
    pub fn matching(id: impl Into<Arc<str>>, pattern: &str) -> Result<Self> {
        let id = id.into();
        let regex = Regex::new(pattern).map_err(|source| RuleError::InvalidPattern {
            id: id.to_string(),
            source,
        })?;
        Ok(Self::new(id, move |value: &String| regex.is_match(value)))
    }
}

impl<T> Clone for Rule<T> {
    fn clone(&self) -> Self {
        Self {
            id: Arc::clone(&self.id),
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<T> PartialEq for Rule<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for Rule<T> {}

impl<T> Hash for Rule<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<T> fmt::Display for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

impl<T> fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

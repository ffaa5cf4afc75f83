//! Boolean expressions over rules.
//!
//! An [`Expr`] is an immutable tree of [`Rule`] leaves joined by AND, OR and
//! NOT. Trees are built bottom-up, so they cannot contain cycles, and
//! sub-expressions are reference counted so one expression can appear inside
//! many larger ones.
//!
//! # Textual form
//!
//! [`Expr::describe`] prints the canonical form used for diagnostics and for
//! equality:
//!
//! - a leaf prints its rule identifier verbatim
//! - `Not(x)` prints `~x`
//! - `And(a, b)` prints `(a & b)` and `Or(a, b)` prints `(a | b)`
//!
//! No rewriting is ever applied. The printed form mirrors the tree exactly
//! as it was built.
//!
//! # Example
//!
//! ```
//! use setwise_core::Rule;
//!
//! let name = Rule::new("Name", |s: &String| !s.is_empty());
//! let bad = Rule::new("BadName", |s: &String| s == "Sauron");
//!
//! let first_name = name & !bad;
//! assert_eq!(first_name.describe(), "(Name & ~BadName)");
//! assert!(first_name.evaluate(&"Bilbo".to_string()));
//! assert!(!first_name.evaluate(&"Sauron".to_string()));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{BitAnd, BitOr, Not};
use std::sync::Arc;

use crate::rule::Rule;

/// A node of the expression tree.
pub enum Node<T> {
    Leaf(Rule<T>),
    And(Expr<T>, Expr<T>),
    Or(Expr<T>, Expr<T>),
    Not(Expr<T>),
}

/// An immutable boolean expression over rules on `T`.
///
/// Equality and hashing use the canonical textual form, matching how
/// [`Rule`] compares by identifier.
pub struct Expr<T> {
    node: Arc<Node<T>>,
}

impl<T> Expr<T> {
    fn new(node: Node<T>) -> Self {
        Self {
            node: Arc::new(node),
        }
    }

    /// Wrap a single rule.
    pub fn leaf(rule: Rule<T>) -> Self {
        Self::new(Node::Leaf(rule))
    }

    /// Root node, for callers that need to walk the tree.
    pub fn node(&self) -> &Node<T> {
        &self.node
    }

    /// Build `(self & other)`.
    #[must_use]
    pub fn and(self, other: impl Into<Expr<T>>) -> Self {
        Self::new(Node::And(self, other.into()))
    }

    /// Build `(self | other)`.
    #[must_use]
    pub fn or(self, other: impl Into<Expr<T>>) -> Self {
        Self::new(Node::Or(self, other.into()))
    }

    /// Whether `value` satisfies the expression.
    ///
    /// Rules are pure, so the order in which children are visited is not
    /// observable.
    pub fn evaluate(&self, value: &T) -> bool {
        match self.node() {
            Node::Leaf(rule) => rule.test(value),
            Node::And(left, right) => left.evaluate(value) && right.evaluate(value),
            Node::Or(left, right) => left.evaluate(value) || right.evaluate(value),
            Node::Not(inner) => !inner.evaluate(value),
        }
    }

    /// Canonical textual form.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Leaf rules from left to right, repeats included.
    pub fn rules(&self) -> Vec<&Rule<T>> {
        let mut rules = Vec::new();
        self.collect_rules(&mut rules);
        rules
    }

    fn collect_rules<'a>(&'a self, rules: &mut Vec<&'a Rule<T>>) {
        match self.node() {
            Node::Leaf(rule) => rules.push(rule),
            Node::And(left, right) | Node::Or(left, right) => {
                left.collect_rules(rules);
                right.collect_rules(rules);
            }
            Node::Not(inner) => inner.collect_rules(rules),
        }
    }

    /// Leaf rules whose outcome on `value` contradicts the polarity they
    /// hold in this expression.
    ///
    /// A rule under an odd number of negations is expected to reject the
    /// value; every other rule is expected to admit it. Each identifier
    /// appears at most once, in first-seen order.
    pub fn contradicting_rules(&self, value: &T) -> Vec<&Rule<T>> {
        let mut found = Vec::new();
        self.collect_contradictions(value, true, &mut found);
        found
    }

    fn collect_contradictions<'a>(
        &'a self,
        value: &T,
        expected: bool,
        found: &mut Vec<&'a Rule<T>>,
    ) {
        match self.node() {
            Node::Leaf(rule) => {
                if rule.test(value) != expected && !found.contains(&rule) {
                    found.push(rule);
                }
            }
            Node::And(left, right) | Node::Or(left, right) => {
                left.collect_contradictions(value, expected, found);
                right.collect_contradictions(value, expected, found);
            }
            Node::Not(inner) => inner.collect_contradictions(value, !expected, found),
        }
    }
}

/// Build `(a & b)`.
pub fn and<T>(a: impl Into<Expr<T>>, b: impl Into<Expr<T>>) -> Expr<T> {
    Expr::new(Node::And(a.into(), b.into()))
}

/// Build `(a | b)`.
pub fn or<T>(a: impl Into<Expr<T>>, b: impl Into<Expr<T>>) -> Expr<T> {
    Expr::new(Node::Or(a.into(), b.into()))
}

/// Build `~a`.
pub fn not<T>(a: impl Into<Expr<T>>) -> Expr<T> {
    Expr::new(Node::Not(a.into()))
}

impl<T> Clone for Expr<T> {
    fn clone(&self) -> Self {
        Self {
            node: Arc::clone(&self.node),
        }
    }
}

impl<T> From<Rule<T>> for Expr<T> {
    fn from(rule: Rule<T>) -> Self {
        Self::leaf(rule)
    }
}

impl<T> From<&Rule<T>> for Expr<T> {
    fn from(rule: &Rule<T>) -> Self {
        Self::leaf(rule.clone())
    }
}

impl<T> From<&Expr<T>> for Expr<T> {
    fn from(expr: &Expr<T>) -> Self {
        expr.clone()
    }
}

impl<T> fmt::Display for Expr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node() {
            Node::Leaf(rule) => f.write_str(rule.id()),
            Node::And(left, right) => write!(f, "({left} & {right})"),
            Node::Or(left, right) => write!(f, "({left} | {right})"),
            Node::Not(inner) => write!(f, "~{inner}"),
        }
    }
}

impl<T> fmt::Debug for Expr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Expr").field(&format_args!("{self}")).finish()
    }
}

impl<T> PartialEq for Expr<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.node, &other.node) || self.describe() == other.describe()
    }
}

impl<T> Eq for Expr<T> {}

impl<T> Hash for Expr<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.describe().hash(state);
    }
}

// Operator sugar: `a & b`, `a | b` and `!a` over rules, expressions and
// references to either. `!` stands in for the `~` of the textual form.
macro_rules! impl_operators {
    ($([$($generics:tt)*] $receiver:ty),* $(,)?) => {$(
        impl<$($generics)*, R: Into<Expr<T>>> BitAnd<R> for $receiver {
            type Output = Expr<T>;

            fn bitand(self, rhs: R) -> Expr<T> {
                Expr::new(Node::And(self.into(), rhs.into()))
            }
        }

        impl<$($generics)*, R: Into<Expr<T>>> BitOr<R> for $receiver {
            type Output = Expr<T>;

            fn bitor(self, rhs: R) -> Expr<T> {
                Expr::new(Node::Or(self.into(), rhs.into()))
            }
        }

        impl<$($generics)*> Not for $receiver {
            type Output = Expr<T>;

            fn not(self) -> Expr<T> {
                Expr::new(Node::Not(self.into()))
            }
        }
    )*};
}

impl_operators!(
    [T] Expr<T>,
    [T] Rule<T>,
    ['a, T] &'a Expr<T>,
    ['a, T] &'a Rule<T>,
);

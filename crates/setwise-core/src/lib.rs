//! Named predicate rules, boolean rule expressions and accumulating
//! membership checks.
//!
//! The crate is a small algebra:
//!
//! - [`Rule`]: a named, pure test over a base value type
//! - [`Expr`]: an immutable AND/OR/NOT tree over rules with a canonical
//!   textual form
//! - [`might_describe`]: membership evaluation producing a [`Verified`] value
//!   or an [`Exclusion`]
//! - [`Chain`]: folds several outcomes into one tuple of successes or one
//!   ordered list of every failure
//!
//! # Example
//!
//! ```
//! use setwise_core::{Chain, Expr, Rejection, Rule};
//!
//! let db_id: Expr<i64> = Rule::range("DbId", 0..2_000_000_i64).into();
//! let name: Expr<String> = Rule::new("Name", |s: &String| !s.is_empty()).into();
//!
//! // Exclusions over different base types share one failure list.
//! let record = Chain::start(db_id.might_describe(123).map_err(Rejection::from))
//!     .then(name.might_describe("Bilbo".to_string()))
//!     .map(|(id, name)| (id.into_inner(), name.into_inner()));
//! assert_eq!(record.unwrap(), (123, "Bilbo".to_string()));
//! ```
//!
//! Rules and expressions are immutable and `Send + Sync` for any
//! base type, so one declared expression can be shared across threads.

pub mod chain;
pub mod error;
pub mod expr;
pub mod membership;
pub mod rejection;
pub mod rule;

pub use chain::{Append, Chain, ChainState};
pub use error::{Result, RuleError};
pub use expr::{Expr, Node, and, not, or};
pub use membership::{Exclusion, Outcome, Verified, might_describe};
pub use rejection::Rejection;
pub use rule::Rule;

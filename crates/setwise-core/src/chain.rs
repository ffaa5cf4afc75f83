//! Accumulating chains of membership outcomes.
//!
//! A [`Chain`] folds a sequence of already-computed outcomes into one
//! result: a tuple of every success, in order, or the ordered list of every
//! failure. Errors keep accumulating after the first failure; successes seen
//! after it are dropped.
//!
//! | state        | next      | result                  |
//! |--------------|-----------|-------------------------|
//! | Success(t)   | Ok(v)     | Success(t ++ v)         |
//! | Success(t)   | Err(e)    | Failure([e])            |
//! | Failure(es)  | Ok(v)     | Failure(es)             |
//! | Failure(es)  | Err(e)    | Failure(es ++ e)        |
//!
//! # Example
//!
//! ```
//! use setwise_core::{Chain, Expr, Rule};
//!
//! let small: Expr<i64> = Rule::range("Small", 0..10_i64).into();
//!
//! let ok = Chain::start(small.might_describe(1))
//!     .then(small.might_describe(2))
//!     .map(|(a, b)| a.into_inner() + b.into_inner());
//! assert_eq!(ok.unwrap(), 3);
//!
//! let errors = Chain::start(small.might_describe(11))
//!     .then(small.might_describe(2))
//!     .then(small.might_describe(12))
//!     .finish()
//!     .unwrap_err();
//! let values: Vec<i64> = errors.iter().map(|e| *e.value()).collect();
//! assert_eq!(values, vec![11, 12]);
//! ```

use tracing::debug;

/// Tuples that can grow by one element.
///
/// Implemented for tuples of one through fifteen elements, so a chain can
/// hold up to sixteen successes. Wider records can nest chains.
pub trait Append<V> {
    type Output;

    fn append(self, value: V) -> Self::Output;
}

macro_rules! impl_append {
    () => {};
    ($head:ident $(, $tail:ident)*) => {
        impl<$head, $($tail,)* V> Append<V> for ($head, $($tail,)*) {
            type Output = ($head, $($tail,)* V);

            #[allow(non_snake_case)]
            fn append(self, value: V) -> Self::Output {
                let ($head, $($tail,)*) = self;
                ($head, $($tail,)* value)
            }
        }

        impl_append!($($tail),*);
    };
}

impl_append!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O);

/// Current state of a chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainState<S, E> {
    /// Every step so far succeeded; `S` is the tuple of their values.
    Success(S),
    /// At least one step failed; every failure in arrival order.
    Failure(Vec<E>),
}

/// Eager fold over membership outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain<S, E> {
    state: ChainState<S, E>,
    steps: usize,
}

impl<V, E> Chain<(V,), E> {
    /// Seed a chain from its first outcome.
    pub fn start(outcome: Result<V, E>) -> Self {
        let state = match outcome {
            Ok(value) => ChainState::Success((value,)),
            Err(error) => {
                debug!(step = 1, "chain failed");
                ChainState::Failure(vec![error])
            }
        };
        Self { state, steps: 1 }
    }
}

impl<S, E> Chain<S, E> {
    /// Fold in the next outcome.
    ///
    /// The error type of `next` only needs to convert into the chain's, so
    /// steps over different base types can share one failure list.
    pub fn then<V, F>(self, next: Result<V, F>) -> Chain<S::Output, E>
    where
        S: Append<V>,
        F: Into<E>,
    {
        let steps = self.steps + 1;
        let state = match (self.state, next) {
            (ChainState::Success(values), Ok(value)) => ChainState::Success(values.append(value)),
            (ChainState::Success(_), Err(error)) => {
                debug!(step = steps, "chain failed");
                ChainState::Failure(vec![error.into()])
            }
            (ChainState::Failure(errors), Ok(_)) => ChainState::Failure(errors),
            (ChainState::Failure(mut errors), Err(error)) => {
                errors.push(error.into());
                debug!(step = steps, failures = errors.len(), "chain failure recorded");
                ChainState::Failure(errors)
            }
        };
        Chain { state, steps }
    }

    /// Number of outcomes folded so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Whether every step so far succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self.state, ChainState::Success(_))
    }

    /// Current state.
    pub fn state(&self) -> &ChainState<S, E> {
        &self.state
    }

    /// Consume the chain, keeping its state.
    pub fn into_state(self) -> ChainState<S, E> {
        self.state
    }

    /// Close the chain.
    pub fn finish(self) -> Result<S, Vec<E>> {
        match self.state {
            ChainState::Success(values) => Ok(values),
            ChainState::Failure(errors) => Err(errors),
        }
    }

    /// Close the chain, passing the success tuple to `build`.
    pub fn map<R>(self, build: impl FnOnce(S) -> R) -> Result<R, Vec<E>> {
        self.finish().map(build)
    }
}

// elsewhen/src/branch/body.rs

//! Branch bodies: immutable clause accumulation and the `else_` terminal
//! for both evaluation families.

use crate::chain::Chain;
use crate::value::{AsyncDeferred, Deferred, Resolve, ResolveAsync};

use std::fmt;
use tracing::{event, instrument, Level};

/// Body of a synchronous branch expression.
///
/// `elseif` takes `&self` and returns a fresh body; the receiver keeps its
/// own chain and stays evaluable, so one prefix can fan out into several
/// divergent continuations.
#[derive(Clone)]
pub struct SyncBranch<T> {
  chain: Chain<Deferred<bool>, Deferred<T>>,
}

impl<T> SyncBranch<T>
where
  T: Clone + Send + Sync + 'static,
{
  pub(crate) fn first(condition: Deferred<bool>, value: Deferred<T>) -> Self {
    SyncBranch {
      chain: Chain::single(condition, value),
    }
  }

  pub(crate) fn from_chain(chain: Chain<Deferred<bool>, Deferred<T>>) -> Self {
    SyncBranch { chain }
  }

  /// Appends a condition/value pair. Chain length is unbounded.
  pub fn elseif<C, V>(&self, condition: C, value: V) -> SyncBranch<T>
  where
    C: Into<Deferred<bool>>,
    V: Into<Deferred<T>>,
  {
    SyncBranch {
      chain: self.chain.appended(condition.into(), value.into()),
    }
  }

  /// Curried form of [`SyncBranch::elseif`].
  pub fn elseif_cond(&self, condition: impl Into<Deferred<bool>>) -> ElseifThen<T> {
    ElseifThen {
      chain: self.chain.clone(),
      condition: condition.into(),
    }
  }

  /// Terminal operation: scans conditions in insertion order and returns the
  /// first matching clause's value, or `fallback` if none matched.
  ///
  /// Exactly one value among {matched value, fallback} is resolved per call;
  /// conditions after the match are never evaluated.
  #[instrument(name = "SyncBranch::else", skip_all, fields(arms = self.chain.len()))]
  pub fn else_(&self, fallback: impl Into<Deferred<T>>) -> T {
    match self.chain.select(|condition| condition.resolve()) {
      Some((index, value)) => {
        event!(Level::TRACE, arm = index, "branch arm matched");
        value.resolve()
      }
      None => {
        event!(Level::TRACE, "no branch arm matched, resolving fallback");
        fallback.into().resolve()
      }
    }
  }

  /// Switches to the asynchronous family, preserving the accumulated clauses.
  /// The receiver stays usable as a synchronous body.
  pub fn to_async(&self) -> AsyncBranch<T> {
    AsyncBranch::from_chain(self.chain.map(
      |condition| AsyncDeferred::from(condition.clone()),
      |value| AsyncDeferred::from(value.clone()),
    ))
  }

  /// Renders the accumulated chain as `if/else if` source-like text, for
  /// diagnostic display only. Producers show as `<deferred>`; the terminal
  /// fallback is not part of the chain and is not shown.
  pub fn render(&self) -> String
  where
    T: fmt::Debug,
  {
    render_arms(self.chain.arms().iter().map(|arm| {
      (
        format!("{:?}", arm.trigger),
        format!("{:?}", arm.outcome),
      )
    }))
  }
}

/// Second half of the curried `elseif_cond(..).then(..)` call.
pub struct ElseifThen<T> {
  chain: Chain<Deferred<bool>, Deferred<T>>,
  condition: Deferred<bool>,
}

impl<T> ElseifThen<T>
where
  T: Clone + Send + Sync + 'static,
{
  pub fn then(self, value: impl Into<Deferred<T>>) -> SyncBranch<T> {
    SyncBranch {
      chain: self.chain.appended(self.condition, value.into()),
    }
  }
}

/// Body of an asynchronous branch expression.
///
/// Same accumulation contract as [`SyncBranch`]; the terminal resolves each
/// condition by awaiting it, strictly one at a time and in insertion order.
#[derive(Clone)]
pub struct AsyncBranch<T> {
  chain: Chain<AsyncDeferred<bool>, AsyncDeferred<T>>,
}

impl<T> AsyncBranch<T>
where
  T: Clone + Send + Sync + 'static,
{
  pub(crate) fn first(condition: AsyncDeferred<bool>, value: AsyncDeferred<T>) -> Self {
    AsyncBranch {
      chain: Chain::single(condition, value),
    }
  }

  pub(crate) fn from_chain(chain: Chain<AsyncDeferred<bool>, AsyncDeferred<T>>) -> Self {
    AsyncBranch { chain }
  }

  pub fn elseif<C, V>(&self, condition: C, value: V) -> AsyncBranch<T>
  where
    C: Into<AsyncDeferred<bool>>,
    V: Into<AsyncDeferred<T>>,
  {
    AsyncBranch {
      chain: self.chain.appended(condition.into(), value.into()),
    }
  }

  /// Curried form of [`AsyncBranch::elseif`].
  pub fn elseif_cond(&self, condition: impl Into<AsyncDeferred<bool>>) -> AsyncElseifThen<T> {
    AsyncElseifThen {
      chain: self.chain.clone(),
      condition: condition.into(),
    }
  }

  /// Terminal operation: same order and short-circuit contract as the
  /// synchronous `else_`, with each condition resolved by awaiting it.
  /// Conditions are never awaited concurrently; a condition after a
  /// satisfied one is never started.
  #[instrument(name = "AsyncBranch::else", skip_all, fields(arms = self.chain.len()))]
  pub async fn else_(&self, fallback: impl Into<AsyncDeferred<T>>) -> T {
    match self.chain.select_async(|condition| condition.resolve()).await {
      Some((index, value)) => {
        event!(Level::TRACE, arm = index, "branch arm matched");
        value.resolve().await
      }
      None => {
        event!(Level::TRACE, "no branch arm matched, resolving fallback");
        fallback.into().resolve().await
      }
    }
  }

  /// Same diagnostic rendering as [`SyncBranch::render`]; pending clauses
  /// show as `<pending>`.
  pub fn render(&self) -> String
  where
    T: fmt::Debug,
  {
    render_arms(self.chain.arms().iter().map(|arm| {
      (
        format!("{:?}", arm.trigger),
        format!("{:?}", arm.outcome),
      )
    }))
  }
}

/// Second half of the curried async `elseif_cond(..).then(..)` call.
pub struct AsyncElseifThen<T> {
  chain: Chain<AsyncDeferred<bool>, AsyncDeferred<T>>,
  condition: AsyncDeferred<bool>,
}

impl<T> AsyncElseifThen<T>
where
  T: Clone + Send + Sync + 'static,
{
  pub fn then(self, value: impl Into<AsyncDeferred<T>>) -> AsyncBranch<T> {
    AsyncBranch {
      chain: self.chain.appended(self.condition, value.into()),
    }
  }
}

fn render_arms(arms: impl Iterator<Item = (String, String)>) -> String {
  use std::fmt::Write as _;

  let mut out = String::new();
  for (index, (condition, value)) in arms.enumerate() {
    let keyword = if index == 0 { "if" } else { " else if" };
    let _ = write!(out, "{} ({}) {{ {} }}", keyword, condition, value);
  }
  out
}

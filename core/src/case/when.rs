// elsewhen/src/case/when.rs

//! When-heads and when-bodies: clause accumulation and the `otherwise`
//! terminal for both evaluation families.

use crate::case::config::MatchConfig;
use crate::chain::Chain;
use crate::value::{AsyncDeferred, Deferred, Resolve, ResolveAsync};

use futures::FutureExt;
use std::fmt;
use tracing::{event, instrument, Level};

/// Head of a synchronous match chain: root key captured, no clauses yet.
#[derive(Clone)]
pub struct WhenHead<K> {
  config: MatchConfig<K>,
  root_key: Deferred<K>,
}

impl<K> WhenHead<K>
where
  K: Clone + Send + Sync + 'static,
{
  pub(crate) fn new(config: MatchConfig<K>, root_key: Deferred<K>) -> Self {
    WhenHead { config, root_key }
  }

  /// First clause; returns a when-body holding a single-clause chain.
  pub fn when<V, KK, VV>(&self, key: KK, value: VV) -> SyncWhen<K, V>
  where
    V: Clone + Send + Sync + 'static,
    KK: Into<Deferred<K>>,
    VV: Into<Deferred<V>>,
  {
    SyncWhen {
      config: self.config.clone(),
      root_key: self.root_key.clone(),
      chain: Chain::single(key.into(), value.into()),
    }
  }

  /// Switches to the asynchronous family, preserving the root key.
  pub fn to_async(&self) -> AsyncWhenHead<K> {
    AsyncWhenHead {
      config: self.config.clone(),
      root_key: AsyncDeferred::from(self.root_key.clone()),
    }
  }
}

/// Head of an asynchronous match chain.
#[derive(Clone)]
pub struct AsyncWhenHead<K> {
  config: MatchConfig<K>,
  root_key: AsyncDeferred<K>,
}

impl<K> AsyncWhenHead<K>
where
  K: Clone + Send + Sync + 'static,
{
  pub(crate) fn new(config: MatchConfig<K>, root_key: AsyncDeferred<K>) -> Self {
    AsyncWhenHead { config, root_key }
  }

  pub fn when<V, KK, VV>(&self, key: KK, value: VV) -> AsyncWhen<K, V>
  where
    V: Clone + Send + Sync + 'static,
    KK: Into<AsyncDeferred<K>>,
    VV: Into<AsyncDeferred<V>>,
  {
    AsyncWhen {
      config: self.config.clone(),
      root_key: self.root_key.clone(),
      chain: Chain::single(key.into(), value.into()),
    }
  }
}

/// Body of a synchronous match expression. Same immutable accumulation
/// contract as the branch family's body.
#[derive(Clone)]
pub struct SyncWhen<K, V> {
  config: MatchConfig<K>,
  root_key: Deferred<K>,
  chain: Chain<Deferred<K>, Deferred<V>>,
}

impl<K, V> SyncWhen<K, V>
where
  K: Clone + Send + Sync + 'static,
  V: Clone + Send + Sync + 'static,
{
  /// Appends a key/value clause; the receiver stays usable.
  pub fn when<KK, VV>(&self, key: KK, value: VV) -> SyncWhen<K, V>
  where
    KK: Into<Deferred<K>>,
    VV: Into<Deferred<V>>,
  {
    SyncWhen {
      config: self.config.clone(),
      root_key: self.root_key.clone(),
      chain: self.chain.appended(key.into(), value.into()),
    }
  }

  /// Terminal operation: resolves the root key once, then scans clauses in
  /// insertion order, comparing each resolved candidate key to it with the
  /// configured comparator. The first equal pair's value is resolved and
  /// returned; `fallback` is resolved only when no clause matched.
  #[instrument(name = "SyncWhen::otherwise", skip_all, fields(clauses = self.chain.len()))]
  pub fn otherwise(&self, fallback: impl Into<Deferred<V>>) -> V {
    let root = self.root_key.resolve();
    let selected = self
      .chain
      .select(|key| self.config.matches(&root, &key.resolve()));
    match selected {
      Some((index, value)) => {
        event!(Level::TRACE, clause = index, "when clause matched");
        value.resolve()
      }
      None => {
        event!(Level::TRACE, "no when clause matched, resolving otherwise value");
        fallback.into().resolve()
      }
    }
  }

  /// Switches to the asynchronous family over the same root key and clauses.
  /// The receiver stays usable as a synchronous body.
  pub fn to_async(&self) -> AsyncWhen<K, V> {
    AsyncWhen {
      config: self.config.clone(),
      root_key: AsyncDeferred::from(self.root_key.clone()),
      chain: self.chain.map(
        |key| AsyncDeferred::from(key.clone()),
        |value| AsyncDeferred::from(value.clone()),
      ),
    }
  }

  /// Renders the accumulated chain as `case/when` source-like text, for
  /// diagnostic display only. Producers show as `<deferred>`; the terminal
  /// fallback is not part of the chain and is not shown.
  pub fn render(&self) -> String
  where
    K: fmt::Debug,
    V: fmt::Debug,
  {
    render_clauses(
      format!("{:?}", self.root_key),
      self.chain.arms().iter().map(|arm| {
        (
          format!("{:?}", arm.trigger),
          format!("{:?}", arm.outcome),
        )
      }),
    )
  }
}

/// Body of an asynchronous match expression.
#[derive(Clone)]
pub struct AsyncWhen<K, V> {
  config: MatchConfig<K>,
  root_key: AsyncDeferred<K>,
  chain: Chain<AsyncDeferred<K>, AsyncDeferred<V>>,
}

impl<K, V> AsyncWhen<K, V>
where
  K: Clone + Send + Sync + 'static,
  V: Clone + Send + Sync + 'static,
{
  pub fn when<KK, VV>(&self, key: KK, value: VV) -> AsyncWhen<K, V>
  where
    KK: Into<AsyncDeferred<K>>,
    VV: Into<AsyncDeferred<V>>,
  {
    AsyncWhen {
      config: self.config.clone(),
      root_key: self.root_key.clone(),
      chain: self.chain.appended(key.into(), value.into()),
    }
  }

  /// Terminal operation: same order and short-circuit contract as the
  /// synchronous `otherwise`. The root key is awaited once, before the scan;
  /// candidate keys are awaited strictly one at a time, and a candidate
  /// after a matched one is never started.
  #[instrument(name = "AsyncWhen::otherwise", skip_all, fields(clauses = self.chain.len()))]
  pub async fn otherwise(&self, fallback: impl Into<AsyncDeferred<V>>) -> V {
    let root = self.root_key.resolve().await;
    let root_ref = &root;
    let config = &self.config;
    let selected = self
      .chain
      .select_async(move |key| {
        async move { config.matches(root_ref, &key.resolve().await) }.boxed()
      })
      .await;
    match selected {
      Some((index, value)) => {
        event!(Level::TRACE, clause = index, "when clause matched");
        value.resolve().await
      }
      None => {
        event!(Level::TRACE, "no when clause matched, resolving otherwise value");
        fallback.into().resolve().await
      }
    }
  }

  /// Same diagnostic rendering as [`SyncWhen::render`]; pending clauses show
  /// as `<pending>`.
  pub fn render(&self) -> String
  where
    K: fmt::Debug,
    V: fmt::Debug,
  {
    render_clauses(
      format!("{:?}", self.root_key),
      self.chain.arms().iter().map(|arm| {
        (
          format!("{:?}", arm.trigger),
          format!("{:?}", arm.outcome),
        )
      }),
    )
  }
}

fn render_clauses(root: String, clauses: impl Iterator<Item = (String, String)>) -> String {
  use std::fmt::Write as _;

  let mut out = format!("case ({})", root);
  for (key, value) in clauses {
    let _ = write!(out, " when ({}) {{ {} }}", key, value);
  }
  out
}

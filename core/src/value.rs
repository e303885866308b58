// elsewhen/src/value.rs

//! Deferred values and the resolution seam shared by both expression families.
//!
//! A clause's condition, key, or value may be supplied eagerly or as a
//! zero-argument producer; the async family additionally accepts a pending
//! future or a producer of futures. `Resolve`/`ResolveAsync` are the only
//! places a deferred form is ever unwrapped, so laziness guarantees hold by
//! construction: a clause that is never selected is never produced.

use async_trait::async_trait;
use futures::future::{BoxFuture, Shared};
use futures::FutureExt;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// A zero-argument producer, re-run on every resolution.
pub type Producer<T> = Arc<dyn Fn() -> T + Send + Sync + 'static>;

/// A zero-argument producer of a pending result.
pub type FutureProducer<T> = Arc<dyn Fn() -> BoxFuture<'static, T> + Send + Sync + 'static>;

/// A value given directly or produced on demand.
///
/// Producers are deliberately not memoized: a chain evaluated by two separate
/// terminal calls re-runs every producer it touches. Callers relying on
/// side effects inside producers get at-most-one invocation per terminal call,
/// nothing less and nothing more.
#[derive(Clone)]
pub enum Deferred<T> {
  Value(T),
  Producer(Producer<T>),
}

impl<T> Deferred<T> {
  pub fn from_fn(produce: impl Fn() -> T + Send + Sync + 'static) -> Self {
    Deferred::Producer(Arc::new(produce))
  }
}

/// Wraps a zero-argument closure as a deferred value.
///
/// Accepted anywhere a plain value is: both builder families take
/// `impl Into<Deferred<_>>` (or the async counterpart, into which a
/// `Deferred` also converts).
pub fn lazy<T>(produce: impl Fn() -> T + Send + Sync + 'static) -> Deferred<T> {
  Deferred::from_fn(produce)
}

impl<T> From<T> for Deferred<T> {
  fn from(value: T) -> Self {
    Deferred::Value(value)
  }
}

impl<T: fmt::Debug> fmt::Debug for Deferred<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Deferred::Value(value) => write!(f, "{:?}", value),
      Deferred::Producer(_) => f.write_str("<deferred>"),
    }
  }
}

/// Synchronous resolution of a deferred form.
pub trait Resolve {
  type Output;

  /// Produces the underlying value, running the producer if there is one.
  fn resolve(&self) -> Self::Output;
}

impl<T: Clone> Resolve for Deferred<T> {
  type Output = T;

  fn resolve(&self) -> T {
    match self {
      Deferred::Value(value) => value.clone(),
      Deferred::Producer(produce) => produce(),
    }
  }
}

/// A value given directly, produced on demand, pending, or produced as a
/// pending result on demand.
///
/// `Pending` holds an already-created future. A future settles once; it is
/// kept behind [`Shared`] so that a later terminal call on the same chain
/// observes the settled output instead of an exhausted future. Producers
/// (`Producer`, `PendingProducer`) re-run on every resolution, same as in
/// the synchronous family.
#[derive(Clone)]
pub enum AsyncDeferred<T> {
  Value(T),
  Producer(Producer<T>),
  Pending(Shared<BoxFuture<'static, T>>),
  PendingProducer(FutureProducer<T>),
}

impl<T> AsyncDeferred<T> {
  pub fn from_fn(produce: impl Fn() -> T + Send + Sync + 'static) -> Self {
    AsyncDeferred::Producer(Arc::new(produce))
  }

  pub fn from_future<Fut>(future: Fut) -> Self
  where
    T: Clone,
    Fut: Future<Output = T> + Send + 'static,
  {
    AsyncDeferred::Pending(future.boxed().shared())
  }

  pub fn from_future_fn<Fut>(produce: impl Fn() -> Fut + Send + Sync + 'static) -> Self
  where
    Fut: Future<Output = T> + Send + 'static,
  {
    AsyncDeferred::PendingProducer(Arc::new(move || produce().boxed()))
  }
}

/// Wraps an already-created future as a deferred value for the async family.
pub fn pending<T, Fut>(future: Fut) -> AsyncDeferred<T>
where
  T: Clone,
  Fut: Future<Output = T> + Send + 'static,
{
  AsyncDeferred::from_future(future)
}

/// Wraps a closure that creates a fresh future on each resolution.
pub fn pending_with<T, Fut>(produce: impl Fn() -> Fut + Send + Sync + 'static) -> AsyncDeferred<T>
where
  Fut: Future<Output = T> + Send + 'static,
{
  AsyncDeferred::from_future_fn(produce)
}

impl<T> From<T> for AsyncDeferred<T> {
  fn from(value: T) -> Self {
    AsyncDeferred::Value(value)
  }
}

/// The sync→async handoff at the value level: an accumulated synchronous
/// clause is usable as-is by the async family.
impl<T> From<Deferred<T>> for AsyncDeferred<T> {
  fn from(deferred: Deferred<T>) -> Self {
    match deferred {
      Deferred::Value(value) => AsyncDeferred::Value(value),
      Deferred::Producer(produce) => AsyncDeferred::Producer(produce),
    }
  }
}

impl<T: fmt::Debug> fmt::Debug for AsyncDeferred<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      AsyncDeferred::Value(value) => write!(f, "{:?}", value),
      AsyncDeferred::Producer(_) => f.write_str("<deferred>"),
      AsyncDeferred::Pending(_) => f.write_str("<pending>"),
      AsyncDeferred::PendingProducer(_) => f.write_str("<deferred pending>"),
    }
  }
}

/// Asynchronous resolution of a deferred form.
#[async_trait]
pub trait ResolveAsync: Send + Sync {
  type Output;

  /// Produces the underlying value, awaiting it if pending.
  async fn resolve(&self) -> Self::Output;
}

#[async_trait]
impl<T: Clone + Send + Sync + 'static> ResolveAsync for AsyncDeferred<T> {
  type Output = T;

  async fn resolve(&self) -> T {
    match self {
      AsyncDeferred::Value(value) => value.clone(),
      AsyncDeferred::Producer(produce) => produce(),
      AsyncDeferred::Pending(shared) => shared.clone().await,
      AsyncDeferred::PendingProducer(produce) => produce().await,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::sync::atomic::{AtomicUsize, Ordering};

  #[test]
  fn plain_value_resolves_by_clone() {
    let deferred: Deferred<String> = "hello".to_string().into();
    assert_eq!(deferred.resolve(), "hello");
    assert_eq!(deferred.resolve(), "hello");
  }

  #[test]
  fn producer_runs_on_every_resolution() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counted = hits.clone();
    let deferred = lazy(move || counted.fetch_add(1, Ordering::SeqCst));
    assert_eq!(deferred.resolve(), 0);
    assert_eq!(deferred.resolve(), 1);
    assert_eq!(hits.load(Ordering::SeqCst), 2);
  }

  #[tokio::test]
  async fn pending_future_settles_once() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counted = hits.clone();
    let deferred = pending(async move {
      counted.fetch_add(1, Ordering::SeqCst);
      42
    });
    assert_eq!(deferred.resolve().await, 42);
    assert_eq!(deferred.resolve().await, 42);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
  }

  #[tokio::test]
  async fn future_producer_creates_a_fresh_future_each_time() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counted = hits.clone();
    let deferred = pending_with(move || {
      let counted = counted.clone();
      async move { counted.fetch_add(1, Ordering::SeqCst) }
    });
    assert_eq!(deferred.resolve().await, 0);
    assert_eq!(deferred.resolve().await, 1);
  }

  #[test]
  fn debug_shows_values_and_hides_producers() {
    let value: Deferred<i32> = 7.into();
    assert_eq!(format!("{:?}", value), "7");
    assert_eq!(format!("{:?}", lazy(|| 7)), "<deferred>");
    assert_eq!(format!("{:?}", pending(async { 7 })), "<pending>");
  }
}

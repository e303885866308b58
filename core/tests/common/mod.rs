// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use elsewhen::{lazy, pending_with, AsyncDeferred, Deferred};
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::Level;

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::TRACE)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Execution counters ---
// Per-test locals rather than globals: each test creates its own counters,
// threads them into producers, and asserts which producers ran.

pub fn counter() -> Arc<AtomicUsize> {
  Arc::new(AtomicUsize::new(0))
}

pub fn count_of(counter: &Arc<AtomicUsize>) -> usize {
  counter.load(Ordering::SeqCst)
}

/// Producer that bumps `hits` and yields `value` every time it runs.
pub fn counted<T>(hits: &Arc<AtomicUsize>, value: T) -> Deferred<T>
where
  T: Clone + Send + Sync + 'static,
{
  let hits = hits.clone();
  lazy(move || {
    hits.fetch_add(1, Ordering::SeqCst);
    value.clone()
  })
}

/// Producer of a fresh pending result that bumps `hits` each time the
/// produced future is created.
pub fn counted_pending<T>(hits: &Arc<AtomicUsize>, value: T) -> AsyncDeferred<T>
where
  T: Clone + Send + Sync + 'static,
{
  let hits = hits.clone();
  pending_with(move || {
    hits.fetch_add(1, Ordering::SeqCst);
    let value = value.clone();
    async move { value }
  })
}

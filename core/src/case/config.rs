// elsewhen/src/case/config.rs

//! Comparator configuration for the match family.

use std::fmt;
use std::sync::Arc;

/// Binary equality predicate over two keys of the same type. Always invoked
/// as `compare(root, candidate)`.
pub type Comparator<K> = Arc<dyn Fn(&K, &K) -> bool + Send + Sync + 'static>;

/// Holds the comparator a matcher hands to every chain it starts.
///
/// Captured at `case`/`match_` time: replacing the comparator on a matcher
/// derives a new configuration and leaves chains created earlier untouched.
#[derive(Clone)]
pub struct MatchConfig<K> {
  compare: Comparator<K>,
}

impl<K> MatchConfig<K> {
  pub fn new(compare: impl Fn(&K, &K) -> bool + Send + Sync + 'static) -> Self {
    MatchConfig {
      compare: Arc::new(compare),
    }
  }

  pub(crate) fn matches(&self, root: &K, candidate: &K) -> bool {
    (self.compare)(root, candidate)
  }
}

impl<K: PartialEq> Default for MatchConfig<K> {
  /// Value equality.
  fn default() -> Self {
    MatchConfig::new(|root: &K, candidate: &K| root == candidate)
  }
}

impl<K> fmt::Debug for MatchConfig<K> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("MatchConfig").finish_non_exhaustive()
  }
}

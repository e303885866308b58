// elsewhen/src/case/matcher.rs

//! Entry points that start a match chain, in both evaluation families.

use crate::case::config::MatchConfig;
use crate::case::when::{AsyncWhenHead, WhenHead};
use crate::value::{AsyncDeferred, Deferred};

/// Starts a match expression with the default comparator (value equality).
///
/// ```
/// use elsewhen::matcher;
///
/// let label = matcher()
///   .case("b")
///   .when("a", "case a")
///   .when("b", "case b")
///   .otherwise("default");
/// assert_eq!(label, "case b");
/// ```
pub fn matcher<K: PartialEq>() -> Matcher<K> {
  Matcher {
    config: MatchConfig::default(),
  }
}

/// Synchronous match entry point, carrying the comparator configuration.
#[derive(Clone, Debug)]
pub struct Matcher<K> {
  config: MatchConfig<K>,
}

impl<K> Matcher<K>
where
  K: Clone + Send + Sync + 'static,
{
  /// Builds a matcher around an explicit comparator. Unlike [`matcher`],
  /// this places no `PartialEq` requirement on the key type.
  pub fn with_comparator(compare: impl Fn(&K, &K) -> bool + Send + Sync + 'static) -> Self {
    Matcher {
      config: MatchConfig::new(compare),
    }
  }

  /// Derives a matcher with a replaced comparator. Matchers and chains
  /// created earlier keep their original comparator.
  pub fn compare_by(&self, compare: impl Fn(&K, &K) -> bool + Send + Sync + 'static) -> Self {
    Matcher {
      config: MatchConfig::new(compare),
    }
  }

  /// Captures the root key and the current comparator configuration.
  pub fn case(&self, root_key: impl Into<Deferred<K>>) -> WhenHead<K> {
    WhenHead::new(self.config.clone(), root_key.into())
  }

  /// Switches to the asynchronous family, keeping the comparator.
  pub fn to_async(&self) -> AsyncMatcher<K> {
    AsyncMatcher {
      config: self.config.clone(),
    }
  }
}

/// Asynchronous match entry point. Root keys may be plain, producers,
/// pending, or producers of pending results.
#[derive(Clone, Debug)]
pub struct AsyncMatcher<K> {
  config: MatchConfig<K>,
}

impl<K> AsyncMatcher<K>
where
  K: Clone + Send + Sync + 'static,
{
  /// Captures the root key and the current comparator configuration.
  pub fn match_(&self, root_key: impl Into<AsyncDeferred<K>>) -> AsyncWhenHead<K> {
    AsyncWhenHead::new(self.config.clone(), root_key.into())
  }
}

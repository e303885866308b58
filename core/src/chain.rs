// elsewhen/src/chain.rs

//! Ordered, append-only clause storage shared by the branch and match
//! families, plus the single first-match scan both of them use.

use futures::future::BoxFuture;

/// One accumulated clause: a trigger (condition or candidate key) paired with
/// the outcome produced when that trigger is the first to match.
#[derive(Clone)]
pub(crate) struct Arm<C, V> {
  pub(crate) trigger: C,
  pub(crate) outcome: V,
}

/// The clause list behind a body object.
///
/// Appending copies the prefix and pushes a new tail; the receiver is never
/// touched, so a partially built chain can fan out into divergent
/// continuations and each still evaluates as it did before.
#[derive(Clone)]
pub(crate) struct Chain<C, V> {
  arms: Vec<Arm<C, V>>,
}

impl<C, V> Chain<C, V> {
  pub(crate) fn single(trigger: C, outcome: V) -> Self {
    Chain {
      arms: vec![Arm { trigger, outcome }],
    }
  }

  pub(crate) fn appended(&self, trigger: C, outcome: V) -> Self
  where
    C: Clone,
    V: Clone,
  {
    let mut arms = self.arms.clone();
    arms.push(Arm { trigger, outcome });
    Chain { arms }
  }

  pub(crate) fn len(&self) -> usize {
    self.arms.len()
  }

  pub(crate) fn arms(&self) -> &[Arm<C, V>] {
    &self.arms
  }

  /// Rebuilds the chain under different trigger/outcome representations.
  /// Used by the sync→async handoff.
  pub(crate) fn map<C2, V2>(
    &self,
    trigger_fn: impl Fn(&C) -> C2,
    outcome_fn: impl Fn(&V) -> V2,
  ) -> Chain<C2, V2> {
    Chain {
      arms: self
        .arms
        .iter()
        .map(|arm| Arm {
          trigger: trigger_fn(&arm.trigger),
          outcome: outcome_fn(&arm.outcome),
        })
        .collect(),
    }
  }

  /// First-match scan, synchronous flavor.
  ///
  /// Triggers are tested in insertion order; the scan stops at the first hit,
  /// so triggers after the match are never examined.
  pub(crate) fn select(&self, mut hits: impl FnMut(&C) -> bool) -> Option<(usize, &V)> {
    self
      .arms
      .iter()
      .enumerate()
      .find(|(_, arm)| hits(&arm.trigger))
      .map(|(index, arm)| (index, &arm.outcome))
  }

  /// First-match scan, asynchronous flavor.
  ///
  /// Triggers are awaited strictly one at a time, in insertion order. Trigger
  /// i+1 is not started before trigger i has resolved and failed to match;
  /// evaluation therefore cannot be parallelized, and callers may place
  /// observable side effects in their triggers.
  pub(crate) async fn select_async<'a, F>(&'a self, mut hits: F) -> Option<(usize, &'a V)>
  where
    F: FnMut(&'a C) -> BoxFuture<'a, bool>,
  {
    for (index, arm) in self.arms.iter().enumerate() {
      if hits(&arm.trigger).await {
        return Some((index, &arm.outcome));
      }
    }
    None
  }
}

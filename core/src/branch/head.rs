// elsewhen/src/branch/head.rs

//! Entry points that start a branch chain, in both evaluation families.

use crate::branch::body::{AsyncBranch, SyncBranch};
use crate::value::{AsyncDeferred, Deferred};

/// Starts a synchronous branch expression.
///
/// ```
/// use elsewhen::branch;
///
/// let label = branch()
///   .if_(false, "high")
///   .elseif(true, "medium")
///   .else_("low");
/// assert_eq!(label, "medium");
/// ```
pub fn branch() -> BranchHead {
  BranchHead
}

/// Head of the synchronous branch family. Purely structural: it accepts any
/// condition/value pair and hands back a body holding a single-clause chain.
#[derive(Clone, Copy, Debug, Default)]
pub struct BranchHead;

impl BranchHead {
  /// Captures the first condition/value pair.
  pub fn if_<T, C, V>(self, condition: C, value: V) -> SyncBranch<T>
  where
    T: Clone + Send + Sync + 'static,
    C: Into<Deferred<bool>>,
    V: Into<Deferred<T>>,
  {
    SyncBranch::first(condition.into(), value.into())
  }

  /// Curried form of [`BranchHead::if_`]: captures the condition now, the
  /// value in the returned builder's `then`.
  pub fn if_cond(self, condition: impl Into<Deferred<bool>>) -> IfThen {
    IfThen {
      condition: condition.into(),
    }
  }

  /// Switches to the asynchronous family before the first clause.
  pub fn to_async(self) -> AsyncBranchHead {
    AsyncBranchHead
  }
}

/// Second half of the curried `if_cond(..).then(..)` call.
pub struct IfThen {
  condition: Deferred<bool>,
}

impl IfThen {
  pub fn then<T, V>(self, value: V) -> SyncBranch<T>
  where
    T: Clone + Send + Sync + 'static,
    V: Into<Deferred<T>>,
  {
    SyncBranch::first(self.condition, value.into())
  }
}

/// Head of the asynchronous branch family. Conditions and values may be
/// plain, producers, pending, or producers of pending results.
#[derive(Clone, Copy, Debug, Default)]
pub struct AsyncBranchHead;

impl AsyncBranchHead {
  pub fn if_<T, C, V>(self, condition: C, value: V) -> AsyncBranch<T>
  where
    T: Clone + Send + Sync + 'static,
    C: Into<AsyncDeferred<bool>>,
    V: Into<AsyncDeferred<T>>,
  {
    AsyncBranch::first(condition.into(), value.into())
  }

  pub fn if_cond(self, condition: impl Into<AsyncDeferred<bool>>) -> AsyncIfThen {
    AsyncIfThen {
      condition: condition.into(),
    }
  }
}

/// Second half of the curried async `if_cond(..).then(..)` call.
pub struct AsyncIfThen {
  condition: AsyncDeferred<bool>,
}

impl AsyncIfThen {
  pub fn then<T, V>(self, value: V) -> AsyncBranch<T>
  where
    T: Clone + Send + Sync + 'static,
    V: Into<AsyncDeferred<T>>,
  {
    AsyncBranch::first(self.condition, value.into())
  }
}

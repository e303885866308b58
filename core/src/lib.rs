// src/lib.rs

//! Elsewhen: expression-oriented conditionals for Rust.
//!
//! Two fluent builder families, structurally parallel:
//!  - [`branch()`] models `if / else if / else` as a value-returning
//!    expression (`if_` / `elseif` / `else_`).
//!  - [`matcher()`] models `case / when / otherwise` with a pluggable
//!    equality comparator.
//!
//! Both families share the same contract:
//!  - Clauses accumulate immutably; deriving a longer chain never alters the
//!    chain it came from.
//!  - Evaluation is first-match-wins, in insertion order, short-circuiting:
//!    clauses after the first match are never examined.
//!  - Conditions, keys, and values may be plain or lazily deferred
//!    ([`lazy`]); only the selected value is ever produced.
//!  - Every chain has a synchronous and an asynchronous variant, and a sync
//!    chain can switch to async at any point (`to_async`) without
//!    re-declaring prior clauses. The async variant additionally accepts
//!    pending futures ([`pending`], [`pending_with`]) and awaits strictly
//!    sequentially.

pub mod branch;
pub mod case;
mod chain;
pub mod value;

// --- Re-exports for the Public API ---

// Branch family: entry point, heads, curried builders, bodies.
pub use crate::branch::{branch, AsyncBranchHead, BranchHead};
pub use crate::branch::{AsyncBranch, AsyncElseifThen, AsyncIfThen, ElseifThen, IfThen, SyncBranch};

// Match family: entry point, matchers, comparator configuration, when chain.
pub use crate::case::{matcher, AsyncMatcher, Matcher};
pub use crate::case::{AsyncWhen, AsyncWhenHead, SyncWhen, WhenHead};
pub use crate::case::{Comparator, MatchConfig};

// Deferred values and the resolution seam.
pub use crate::value::{lazy, pending, pending_with};
pub use crate::value::{AsyncDeferred, Deferred, Resolve, ResolveAsync};

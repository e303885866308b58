// elsewhen/src/case/mod.rs

//! The match family: `case / when / otherwise` as a value-returning
//! expression with a pluggable equality comparator.
//!
//! A matcher captures the comparator configuration, `case`/`match_` capture
//! the root key, when-bodies accumulate key/value clauses immutably, and the
//! `otherwise` terminal compares candidate keys to the root key in insertion
//! order, resolving only what the first match requires.

pub mod config;
pub mod matcher;
pub mod when;

pub use config::{Comparator, MatchConfig};
pub use matcher::{matcher, AsyncMatcher, Matcher};
pub use when::{AsyncWhen, AsyncWhenHead, SyncWhen, WhenHead};

// elsewhen/src/branch/mod.rs

//! The branch family: `if / else if / else` as a value-returning expression.
//!
//! A head captures the first condition/value pair, the body accumulates
//! further pairs immutably, and the `else_` terminal scans the accumulated
//! clauses in order, resolving only what the first match requires.

pub mod body;
pub mod head;

pub use body::{AsyncBranch, AsyncElseifThen, ElseifThen, SyncBranch};
pub use head::{branch, AsyncBranchHead, AsyncIfThen, BranchHead, IfThen};

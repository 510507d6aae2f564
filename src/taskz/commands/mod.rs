//! One module per user-facing operation.
//!
//! Every mutating command follows the same shape: load the full collection
//! from the store, change it in memory, save the whole thing back. "Not
//! found" and rejected values are reported through the return value —
//! errors are reserved for save failures and malformed input at the crate
//! boundary.

pub mod add;
pub mod clear;
pub mod complete;
pub mod delete;
pub mod edit;
pub mod list;
pub mod overview;
pub mod prioritize;
pub mod search;
pub mod set_priority;
pub mod suggest;

//! # taskz
//!
//! A single-file task tracker. This crate is a library with a CLI client,
//! not a CLI application with incidental library code; everything from
//! [`api`] inward takes plain Rust values and returns plain Rust values.
//!
//! ```text
//! CLI (main.rs + args.rs)    parsing, prompts, printing — the only
//!        │                   place that knows about terminals
//!        ▼
//! API facade (api.rs)        thin dispatch, generic over store + assistant
//!        │
//!        ▼
//! Commands (commands/*.rs)   one module per operation; each mutation is a
//!        │                   load → change in memory → save round trip
//!        ▼
//! Engines + storage          query/stats are pure functions over a
//! (query.rs, stats.rs,       snapshot; store owns the single JSON file
//!  store/)                   and the id sequence
//! ```
//!
//! Two deliberate storage properties shape the rest:
//!
//! - **Corrupt or missing reads as empty.** `load` never fails; a broken
//!   store file costs the old data on the next save, not availability.
//! - **One writer at a time.** There is no locking across processes; two
//!   concurrent sessions race and the last save wins. The tracker is built
//!   for a single person at a single keyboard.
//!
//! The AI pieces ([`ai`]) are strictly optional: commands check
//! availability first and fall back to placeholder text, so a missing API
//! key never changes whether an operation succeeds.

pub mod ai;
pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod stats;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;

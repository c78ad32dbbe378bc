//! Application layer containing the core logic orchestration.
//!
//! `list_engine` holds the pure filter/sort derivation and the memoized
//! list state; `desk` wires the directory and authenticator ports into the
//! operations the binary exposes.

pub mod desk;
pub mod list_engine;

//! Contract tests for dbinspect.
//!
//! Contracts are invariants that must ALWAYS hold, whatever the store
//! holds.
//!
//! Run with: cargo test --test contracts

mod common;

#[path = "contracts/navigability.rs"]
mod navigability;

#[path = "contracts/ordering.rs"]
mod ordering;

#[path = "contracts/self_guard.rs"]
mod self_guard;

#[path = "contracts/disposal.rs"]
mod disposal;

#[path = "contracts/transactions.rs"]
mod transactions;

//! Scenario tests for dbinspect.
//!
//! Scenarios drive a session the way a host window does: open on a value,
//! select nodes, read the property sheet, drill in and close.
//!
//! Run with: cargo test --test scenarios

mod common;

#[path = "scenarios/hierarchy.rs"]
mod hierarchy;

#[path = "scenarios/property_sheet.rs"]
mod property_sheet;

#[path = "scenarios/drill_in.rs"]
mod drill_in;

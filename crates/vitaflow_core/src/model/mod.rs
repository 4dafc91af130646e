//! Domain model for on-device activity tracking and profile input.
//!
//! # Responsibility
//! - Define the value types shared by the motion filter, counter store and
//!   health rules.
//! - Keep validation of user-entered profile fields next to the data shape.
//!
//! # Invariants
//! - `DailyCounters` always carries the calendar date it was reconciled for.
//! - Motion types are ephemeral and never persisted.

pub mod activity;
pub mod motion;
pub mod profile;

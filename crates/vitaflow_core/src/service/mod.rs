//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate key-value persistence into activity use-cases.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod activity_session;
pub mod counter_service;
pub mod lifetime_stats;

use crate::repo::kv_repo::KvStore;
use log::warn;
use std::str::FromStr;

/// Reads a numeric value, treating absence, storage failure and malformed
/// text alike as `T::default()`.
///
/// Failures and malformed values are logged so diagnostics can tell them
/// apart from "never tracked".
pub(crate) fn read_number_or_default<K, T>(kv: &K, key: &str) -> T
where
    K: KvStore + ?Sized,
    T: FromStr + Default,
{
    match kv.get(key) {
        Ok(Some(raw)) => raw.trim().parse::<T>().unwrap_or_else(|_| {
            warn!("event=kv_read module=service status=malformed key={key}");
            T::default()
        }),
        Ok(None) => T::default(),
        Err(err) => {
            warn!("event=kv_read module=service status=error key={key} error={err}");
            T::default()
        }
    }
}

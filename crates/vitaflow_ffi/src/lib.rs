//! Flutter bridge for `vitaflow_core`.

pub mod api;

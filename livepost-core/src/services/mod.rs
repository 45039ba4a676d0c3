// File: src/services/mod.rs

pub mod reconciler;
pub mod runner;

pub use reconciler::{plan, Plan, Reconciler};
pub use runner::run_once;

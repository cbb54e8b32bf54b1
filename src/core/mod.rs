//! Core business logic - framework-agnostic settlement and reporting.

/// Ledger table and footer generation
pub mod report;
/// Per-payee totals and the balancing transfer
pub mod settlement;
